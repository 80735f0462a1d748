use super::service::QuizService;
use crate::error::QuizError;

/// What the quiz screen shows for the current question.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuestionView {
    /// 1-based position for display.
    pub position: usize,
    pub total: usize,
    pub prompt: String,
    /// False once the current question has an answer.
    pub answers_enabled: bool,
    pub cheat_enabled: bool,
    pub cheats_remaining: u32,
    pub is_cheater: bool,
}

impl QuestionView {
    pub(crate) fn from_service(service: &QuizService) -> Result<Self, QuizError> {
        let question = service.current_question()?;
        let state = service.state();

        Ok(Self {
            position: state.current_index() + 1,
            total: service.bank().len(),
            prompt: service.catalog().resolve(question.prompt()).to_string(),
            answers_enabled: !question.has_answer(),
            cheat_enabled: state.can_cheat(),
            cheats_remaining: state.quota().remaining(),
            is_cheater: state.is_cheater(),
        })
    }

    #[must_use]
    pub fn position_label(&self) -> String {
        format!("Question {} of {}", self.position, self.total)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use geoquiz_core::model::QuestionBank;

    #[test]
    fn view_reflects_answer_lock() {
        let mut service = QuizService::new(QuestionBank::geography(), 3);
        let view = service.view().unwrap();
        assert!(view.answers_enabled);
        assert_eq!(view.position_label(), "Question 1 of 6");

        service.submit_answer(false).unwrap();
        let view = service.view().unwrap();
        assert!(!view.answers_enabled);

        service.retreat();
        let view = service.view().unwrap();
        assert_eq!(view.position, 6);
        assert!(view.answers_enabled);
        assert_eq!(
            view.prompt,
            "Lake Baikal is the world's oldest and deepest freshwater lake."
        );
    }

    #[test]
    fn view_disables_cheat_with_zero_quota() {
        let service = QuizService::new(QuestionBank::geography(), 0);
        let view = service.view().unwrap();
        assert!(!view.cheat_enabled);
        assert_eq!(view.cheats_remaining, 0);
    }
}
