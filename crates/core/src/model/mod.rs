mod bank;
mod cheat;
mod ids;
mod prompt;
mod question;
mod score;
mod session;

pub use bank::{BankError, QuestionBank, geography_keys};
pub use cheat::{CheatQuota, CheatRequest, CheatResponse, DEFAULT_CHEATS_ALLOWED};
pub use ids::QuestionId;
pub use prompt::{Prompt, PromptCatalog};
pub use question::{AnswerOutcome, Question};
pub use score::Score;
pub use session::{SavedQuizState, SessionState};
