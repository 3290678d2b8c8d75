pub mod input;
pub mod tooltip;

pub use self::input::{hit_test, InputAction, InspectionState};
pub use self::tooltip::InspectionPayload;
