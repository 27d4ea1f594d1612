pub mod format;
pub mod interpreter;
pub mod statistics;

pub use format::format_for_display;
pub use interpreter::{calculate, evaluate};
