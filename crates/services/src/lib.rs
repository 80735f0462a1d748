#![forbid(unsafe_code)]

pub mod error;
pub mod quiz;

pub use error::QuizError;
pub use quiz::{
    AnswerReport, CheatOutcome, CheatSession, NO_MORE_CHEATS, QuestionView, QuizLoopService,
    QuizService,
};
