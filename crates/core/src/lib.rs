#![forbid(unsafe_code)]

pub mod model;
pub mod scoring;
pub mod time;

pub use model::{
    AdvanceOutcome, Identity, Phase, Question, QuestionError, QuizLimits, QuizSession,
    SessionError, TickOutcome,
};
pub use scoring::{compute_score, percentage};
pub use time::Clock;
