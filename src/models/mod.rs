pub mod section;
pub mod segment;

pub use section::NarrationSection;
pub use segment::{DemoAction, Gesture, Segment, Timeline};
