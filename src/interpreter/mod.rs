pub mod action;
pub mod parse;

pub use action::{ParsedAction, ScrollDirection};
pub use parse::ActionInterpreter;
