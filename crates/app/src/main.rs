mod console;

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use geoquiz_core::model::{DEFAULT_CHEATS_ALLOWED, QuestionBank};
use services::QuizLoopService;
use storage::{InMemoryRepository, load_bank};

use crate::console::Console;

#[derive(Debug, Parser)]
#[command(name = "geoquiz", about = "True/false geography quiz", version)]
struct Cli {
    /// Question bank file: a JSON array of {"prompt": ..., "answer": true|false}
    #[arg(long, env = "GEOQUIZ_BANK", value_name = "FILE")]
    bank: Option<PathBuf>,

    /// Cheats allowed per session
    #[arg(long, env = "GEOQUIZ_CHEATS", default_value_t = DEFAULT_CHEATS_ALLOWED)]
    cheats: u32,

    /// Question to start on (wraps around the bank)
    #[arg(long, default_value_t = 0)]
    start: usize,
}

fn load_question_bank(path: Option<&PathBuf>) -> Result<QuestionBank> {
    match path {
        Some(path) => load_bank(path)
            .with_context(|| format!("failed to load question bank from {}", path.display())),
        None => Ok(QuestionBank::geography()),
    }
}

fn run(cli: Cli) -> Result<()> {
    let bank = load_question_bank(cli.bank.as_ref())?;
    tracing::info!(
        questions = bank.len(),
        cheats = cli.cheats,
        start = cli.start,
        "starting quiz"
    );

    let loop_svc = QuizLoopService::new(bank, Arc::new(InMemoryRepository::new()))
        .with_cheats_allowed(cli.cheats)
        .with_start_index(cli.start);

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    Console::new(stdin.lock(), stdout.lock()).run(&loop_svc)?;

    tracing::info!("quiz closed");
    Ok(())
}

fn main() {
    // stdout belongs to the quiz; logs go to stderr (RUST_LOG=debug for detail)
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    if let Err(err) = run(cli) {
        eprintln!("{err:#}");
        std::process::exit(2);
    }
}
