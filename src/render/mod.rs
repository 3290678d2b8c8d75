pub mod colors;
pub mod labels;
pub mod scene;

pub use self::colors::{Color, ColorAssigner};
pub use self::labels::{ElisionMode, LabelFitter, LabelPlan};
pub use self::scene::{build_scene, Scene, Tile};
