pub mod builder;
pub mod gesture;
pub mod split;

pub use builder::build_timeline;
pub use gesture::gesture_for_step;
