mod cheat;
mod service;
mod view;
mod workflow;

// Public API of the quiz subsystem.
pub use crate::error::QuizError;
pub use cheat::{CheatOutcome, CheatSession, NO_MORE_CHEATS};
pub use service::{AnswerReport, QuizService};
pub use view::QuestionView;
pub use workflow::QuizLoopService;
