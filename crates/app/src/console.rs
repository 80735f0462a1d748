//! Line-oriented terminal front-end for the quiz.

use std::io::{BufRead, Lines, Write};

use anyhow::Result;
use services::{CheatSession, NO_MORE_CHEATS, QuizLoopService, QuizService};

const HELP: &str = "\
Commands:
  t, true     answer true
  f, false    answer false
  n, next     next question
  p, prev     previous question
  c, cheat    reveal the answer (limited)
  s, score    show the score
  r, rotate   rebuild the screen from saved state
  h, help     show this help
  q, quit     leave the quiz";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Command {
    True,
    False,
    Next,
    Prev,
    Cheat,
    Score,
    Rotate,
    Help,
    Quit,
}

impl Command {
    fn from_arg(arg: &str) -> Option<Self> {
        match arg {
            "t" | "true" => Some(Self::True),
            "f" | "false" => Some(Self::False),
            "n" | "next" => Some(Self::Next),
            "p" | "prev" => Some(Self::Prev),
            "c" | "cheat" => Some(Self::Cheat),
            "s" | "score" => Some(Self::Score),
            "r" | "rotate" => Some(Self::Rotate),
            "h" | "help" | "?" => Some(Self::Help),
            "q" | "quit" | "exit" => Some(Self::Quit),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CheatCommand {
    Show,
    Back,
}

impl CheatCommand {
    fn from_arg(arg: &str) -> Option<Self> {
        match arg {
            "s" | "show" => Some(Self::Show),
            "b" | "back" | "q" => Some(Self::Back),
            _ => None,
        }
    }
}

pub struct Console<R: BufRead, W: Write> {
    input: Lines<R>,
    out: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, out: W) -> Self {
        Self {
            input: input.lines(),
            out,
        }
    }

    /// Run the quiz until `quit` or end of input.
    pub fn run(&mut self, loop_svc: &QuizLoopService) -> Result<()> {
        let mut quiz = loop_svc.start()?;

        loop {
            self.render(&quiz)?;
            let Some(line) = self.read_line()? else {
                break;
            };
            if line.is_empty() {
                continue;
            }

            let Some(command) = Command::from_arg(&line) else {
                writeln!(self.out, "unknown command: {line}")?;
                writeln!(self.out, "{HELP}")?;
                continue;
            };

            match command {
                Command::True => self.answer(&mut quiz, true)?,
                Command::False => self.answer(&mut quiz, false)?,
                Command::Next => quiz.advance(),
                Command::Prev => quiz.retreat(),
                Command::Cheat => self.cheat(&mut quiz)?,
                Command::Score => writeln!(self.out, "{}", quiz.score())?,
                Command::Rotate => {
                    quiz = loop_svc.rotate(quiz)?;
                    writeln!(self.out, "(screen rotated)")?;
                }
                Command::Help => writeln!(self.out, "{HELP}")?,
                Command::Quit => break,
            }
        }

        loop_svc.finish()?;
        writeln!(self.out, "{}", quiz.score())?;
        Ok(())
    }

    fn read_line(&mut self) -> Result<Option<String>> {
        match self.input.next() {
            Some(line) => Ok(Some(line?.trim().to_lowercase())),
            None => Ok(None),
        }
    }

    fn render(&mut self, quiz: &QuizService) -> Result<()> {
        let view = quiz.view()?;
        let answers = if view.answers_enabled {
            "[t]rue [f]alse"
        } else {
            "(answered)"
        };
        let cheat = if view.cheat_enabled {
            format!("[c]heat ({} left)", view.cheats_remaining)
        } else {
            "(no cheats left)".to_string()
        };

        writeln!(self.out)?;
        writeln!(self.out, "{}", view.position_label())?;
        writeln!(self.out, "{}", view.prompt)?;
        if view.is_cheater {
            writeln!(self.out, "(answer revealed)")?;
        }
        writeln!(self.out, "{answers}  [p]rev [n]ext  {cheat}")?;
        write!(self.out, "> ")?;
        self.out.flush()?;
        Ok(())
    }

    fn answer(&mut self, quiz: &mut QuizService, value: bool) -> Result<()> {
        if quiz.current_question()?.has_answer() {
            writeln!(self.out, "You already answered this question.")?;
            return Ok(());
        }

        let report = quiz.submit_answer(value)?;
        writeln!(self.out, "{}", report.outcome.message())?;
        writeln!(self.out, "{}", report.score)?;
        Ok(())
    }

    fn cheat(&mut self, quiz: &mut QuizService) -> Result<()> {
        if !quiz.can_cheat() {
            writeln!(self.out, "{NO_MORE_CHEATS}")?;
            return Ok(());
        }

        let mut session = CheatSession::new(quiz.begin_cheat()?);
        writeln!(self.out, "{}", session.warning())?;

        loop {
            write!(self.out, "[s]how answer  [b]ack > ")?;
            self.out.flush()?;
            let Some(line) = self.read_line()? else {
                break;
            };
            match CheatCommand::from_arg(&line) {
                Some(CheatCommand::Show) => {
                    let answer = session.reveal();
                    writeln!(self.out, "{answer}")?;
                }
                Some(CheatCommand::Back) => break,
                None => writeln!(self.out, "unknown command: {line}")?,
            }
        }

        let outcome = quiz.finish_cheat(session.finish());
        tracing::debug!(?outcome, "cheat sub-view closed");
        if let Some(message) = outcome.message() {
            writeln!(self.out, "{message}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;
    use std::sync::Arc;

    use geoquiz_core::model::QuestionBank;
    use storage::InMemoryRepository;

    fn play(script: &str, cheats: u32) -> String {
        let loop_svc = QuizLoopService::new(
            QuestionBank::geography(),
            Arc::new(InMemoryRepository::new()),
        )
        .with_cheats_allowed(cheats);
        let mut out = Vec::new();
        Console::new(Cursor::new(script.to_string()), &mut out)
            .run(&loop_svc)
            .unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn answers_and_reports_score() {
        let out = play("t\nn\nf\nq\n", 3);
        assert!(out.contains("Correct!"));
        assert!(out.contains("Incorrect!"));
        assert!(out.contains("Your score is 1 out of 6"));
    }

    #[test]
    fn answered_question_is_locked() {
        let out = play("t\nf\nq\n", 3);
        assert!(out.contains("You already answered this question."));
        assert!(!out.contains("Incorrect!"));
    }

    #[test]
    fn cheat_reveals_and_judges() {
        let out = play("c\ns\nb\nt\nq\n", 3);
        assert!(out.contains("Are you sure you want to do this?"));
        assert!(out.contains("True"));
        assert!(out.contains("Cheating is wrong."));
        assert!(out.contains("(2 left)"));
    }

    #[test]
    fn revealed_answer_is_marked_until_navigation() {
        let out = play("c\ns\nb\nn\nq\n", 3);
        let (before_next, after_next) = out.split_once("Question 2 of 6").unwrap();
        assert!(before_next.contains("(answer revealed)"));
        assert!(!after_next.contains("(answer revealed)"));
    }

    #[test]
    fn cheat_quota_runs_out() {
        let out = play("c\ns\nb\nc\nq\n", 1);
        assert!(out.contains(NO_MORE_CHEATS));
        assert!(out.contains("(no cheats left)"));
    }

    #[test]
    fn backing_out_of_cheat_is_free() {
        let out = play("c\nb\nt\nq\n", 3);
        assert!(out.contains("Correct!"));
        assert!(!out.contains("Cheating is wrong."));
    }

    #[test]
    fn rotate_keeps_position() {
        let out = play("n\nn\nr\nq\n", 3);
        assert!(out.contains("(screen rotated)"));
        let after = out.rsplit("(screen rotated)").next().unwrap();
        assert!(after.contains("Question 3 of 6"));
    }

    #[test]
    fn prev_wraps_to_last_question() {
        let out = play("p\nq\n", 3);
        assert!(out.contains("Question 6 of 6"));
    }

    #[test]
    fn unknown_command_prints_help() {
        let out = play("xyz\n", 3);
        assert!(out.contains("unknown command: xyz"));
        assert!(out.contains("Commands:"));
    }
}
