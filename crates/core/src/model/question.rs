use crate::model::{ids::QuestionId, prompt::Prompt};

//
// ─── QUESTION ──────────────────────────────────────────────────────────────────
//

/// A single true/false question and the answer the user gave, if any.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    id: QuestionId,
    prompt: Prompt,
    answer: bool,
    user_answer: Option<bool>,
}

impl Question {
    #[must_use]
    pub fn new(id: QuestionId, prompt: Prompt, answer: bool) -> Self {
        Self {
            id,
            prompt,
            answer,
            user_answer: None,
        }
    }

    #[must_use]
    pub fn id(&self) -> QuestionId {
        self.id
    }

    #[must_use]
    pub fn prompt(&self) -> &Prompt {
        &self.prompt
    }

    /// The correct answer.
    #[must_use]
    pub fn answer(&self) -> bool {
        self.answer
    }

    #[must_use]
    pub fn user_answer(&self) -> Option<bool> {
        self.user_answer
    }

    #[must_use]
    pub fn has_answer(&self) -> bool {
        self.user_answer.is_some()
    }

    /// True only when an answer was recorded and it matches.
    #[must_use]
    pub fn is_answered_correctly(&self) -> bool {
        self.user_answer == Some(self.answer)
    }

    /// Record the user's answer, replacing any earlier one.
    pub fn record_answer(&mut self, value: bool) {
        self.user_answer = Some(value);
    }
}

//
// ─── ANSWER OUTCOME ────────────────────────────────────────────────────────────
//

/// How a submitted answer is judged.
///
/// - `Correct`: matches the question's answer
/// - `Incorrect`: does not match
/// - `Judged`: the answer was revealed beforehand, so it is neither
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnswerOutcome {
    Correct,
    Incorrect,
    Judged,
}

impl AnswerOutcome {
    #[must_use]
    pub fn evaluate(question: &Question, user_value: bool, is_cheater: bool) -> Self {
        if is_cheater {
            Self::Judged
        } else if question.answer() == user_value {
            Self::Correct
        } else {
            Self::Incorrect
        }
    }

    /// Short message shown after an answer.
    #[must_use]
    pub fn message(self) -> &'static str {
        match self {
            AnswerOutcome::Correct => "Correct!",
            AnswerOutcome::Incorrect => "Incorrect!",
            AnswerOutcome::Judged => "Cheating is wrong.",
        }
    }
}
