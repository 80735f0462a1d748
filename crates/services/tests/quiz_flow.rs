use std::sync::Arc;

use geoquiz_core::model::{AnswerOutcome, QuestionBank, Score};
use services::{CheatOutcome, CheatSession, QuizError, QuizLoopService, QuizService};
use storage::{InMemoryRepository, SavedStateRepository};

fn loop_service(repo: &InMemoryRepository) -> QuizLoopService {
    QuizLoopService::new(QuestionBank::geography(), Arc::new(repo.clone()))
}

fn reveal(service: &mut QuizService) -> CheatOutcome {
    let request = service.begin_cheat().expect("cheat allowed");
    let mut cheat = CheatSession::new(request);
    cheat.reveal();
    service.finish_cheat(cheat.finish())
}

#[test]
fn perfect_run_scores_six_of_six() {
    let repo = InMemoryRepository::new();
    let mut quiz = loop_service(&repo).start().unwrap();

    let mut last = None;
    for _ in 0..quiz.bank().len() {
        let answer = quiz.current_question().unwrap().answer();
        let report = quiz.submit_answer(answer).unwrap();
        assert_eq!(report.outcome, AnswerOutcome::Correct);
        last = Some(report.score);
        quiz.advance();
    }

    assert_eq!(last, Some(Score { correct: 6, total: 6 }));
    assert_eq!(quiz.state().current_index(), 0);
}

#[test]
fn gap_stops_the_score() {
    let repo = InMemoryRepository::new();
    let mut quiz = loop_service(&repo).start().unwrap();

    quiz.submit_answer(true).unwrap();
    quiz.advance();
    quiz.advance();
    let report = quiz.submit_answer(false).unwrap();

    assert_eq!(report.outcome, AnswerOutcome::Correct);
    assert_eq!(report.score, Score { correct: 1, total: 6 });
}

#[test]
fn rotation_keeps_index_and_cheats_only() {
    let repo = InMemoryRepository::new();
    let loop_svc = loop_service(&repo);
    let mut quiz = loop_svc.start().unwrap();

    quiz.submit_answer(true).unwrap();
    quiz.advance();
    quiz.advance();
    assert_eq!(reveal(&mut quiz), CheatOutcome::Recorded { remaining: 2 });

    let quiz = loop_svc.rotate(quiz).unwrap();
    assert_eq!(quiz.state().current_index(), 2);
    assert_eq!(quiz.state().quota().used(), 1);
    assert!(!quiz.state().is_cheater());
    assert_eq!(quiz.score(), Score { correct: 0, total: 6 });

    let saved = repo.load().unwrap().unwrap();
    assert_eq!(saved.current_index, 2);
    assert_eq!(saved.cheats_used, 1);
}

#[test]
fn spent_quota_survives_rotation() {
    let repo = InMemoryRepository::new();
    let loop_svc = loop_service(&repo).with_cheats_allowed(2);
    let mut quiz = loop_svc.start().unwrap();

    reveal(&mut quiz);
    assert_eq!(reveal(&mut quiz), CheatOutcome::QuotaReached);

    let quiz = loop_svc.rotate(quiz).unwrap();
    assert!(!quiz.can_cheat());
    assert!(!quiz.view().unwrap().cheat_enabled);
    assert!(matches!(quiz.begin_cheat(), Err(QuizError::CheatsExhausted)));
}

#[test]
fn abandoned_cheat_keeps_quota() {
    let repo = InMemoryRepository::new();
    let mut quiz = loop_service(&repo).start().unwrap();

    let request = quiz.begin_cheat().unwrap();
    let cheat = CheatSession::new(request);
    assert_eq!(quiz.finish_cheat(cheat.finish()), CheatOutcome::Ignored);

    assert_eq!(quiz.state().quota().used(), 0);
    let report = quiz.submit_answer(true).unwrap();
    assert_eq!(report.outcome, AnswerOutcome::Correct);
}

#[test]
fn finish_clears_saved_state() {
    let repo = InMemoryRepository::new();
    let loop_svc = loop_service(&repo).with_start_index(4);
    let quiz = loop_svc.start().unwrap();
    assert_eq!(quiz.state().current_index(), 4);

    let mut quiz = loop_svc.rotate(quiz).unwrap();
    quiz.advance();
    let _quiz = loop_svc.rotate(quiz).unwrap();
    assert_eq!(repo.load().unwrap().unwrap().current_index, 5);

    loop_svc.finish().unwrap();
    let fresh = loop_svc.start().unwrap();
    assert_eq!(fresh.state().current_index(), 4);
}
