mod quiz_vm;
mod time_fmt;

pub use quiz_vm::QuizVm;
pub use time_fmt::{format_datetime, format_mmss};
