// Public library interface for treemosaic.
// The binary and the integration tests drive the pipeline through these modules.

pub mod app;
pub mod config;
pub mod error;
pub mod layout;
pub mod render;
pub mod tree;
pub mod ui;

pub use app::App;
pub use config::MosaicConfig;
pub use error::{ConfigError, MalformedHierarchyError, MosaicError};
