use geoquiz_core::model::{CheatRequest, CheatResponse};

pub const CHEAT_WARNING: &str = "Are you sure you want to do this?";
pub const NO_MORE_CHEATS: &str = "You have used all your cheats.";

/// The cheat sub-view: hides the answer until asked, then reports whether it
/// was shown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheatSession {
    request: CheatRequest,
    shown: bool,
}

impl CheatSession {
    #[must_use]
    pub fn new(request: CheatRequest) -> Self {
        Self {
            request,
            shown: false,
        }
    }

    #[must_use]
    pub fn warning(&self) -> &'static str {
        CHEAT_WARNING
    }

    #[must_use]
    pub fn is_shown(&self) -> bool {
        self.shown
    }

    /// Reveal the answer. Revealing again is harmless.
    pub fn reveal(&mut self) -> &'static str {
        self.shown = true;
        if self.request.answer_is_true {
            "True"
        } else {
            "False"
        }
    }

    /// Leave the sub-view.
    ///
    /// Returns `None` when the user backs out before revealing, which callers
    /// treat the same as an abandoned flow.
    #[must_use]
    pub fn finish(self) -> Option<CheatResponse> {
        self.shown.then_some(CheatResponse { answer_shown: true })
    }
}

/// What happened when a cheat sub-flow returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheatOutcome {
    /// No usable result; nothing changed.
    Ignored,
    /// The flow completed without showing the answer.
    NotShown,
    /// One cheat was spent; `remaining` are left.
    Recorded { remaining: u32 },
    /// The last cheat was spent and cheating is now disabled.
    QuotaReached,
}

impl CheatOutcome {
    #[must_use]
    pub fn message(self) -> Option<&'static str> {
        match self {
            CheatOutcome::QuotaReached => Some(NO_MORE_CHEATS),
            CheatOutcome::Ignored | CheatOutcome::NotShown | CheatOutcome::Recorded { .. } => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn backing_out_yields_no_result() {
        let session = CheatSession::new(CheatRequest {
            answer_is_true: true,
        });
        assert_eq!(session.finish(), None);
    }

    #[test]
    fn reveal_shows_answer_and_reports_it() {
        let mut session = CheatSession::new(CheatRequest {
            answer_is_true: false,
        });
        assert_eq!(session.warning(), CHEAT_WARNING);
        assert_eq!(session.reveal(), "False");
        assert!(session.is_shown());
        assert_eq!(
            session.finish(),
            Some(CheatResponse { answer_shown: true })
        );
    }

    #[test]
    fn only_quota_reached_notifies() {
        assert_eq!(CheatOutcome::QuotaReached.message(), Some(NO_MORE_CHEATS));
        assert_eq!(CheatOutcome::Recorded { remaining: 1 }.message(), None);
        assert_eq!(CheatOutcome::Ignored.message(), None);
    }
}
