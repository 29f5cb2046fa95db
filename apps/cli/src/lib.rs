//! Terminal front end for the vocabulary trainer.

pub mod cli;
pub mod commands;
pub mod config;
pub mod fetch;
pub mod state;
pub mod store;

use clap::Parser;
use std::fs::File;
use std::io::{self, BufRead, BufWriter, Write};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use vocab_core::{CardOrder, Direction};

use crate::cli::{Cli, Command};
use crate::commands::{CommandError, ImportMode, ImportResult};
use crate::config::Config;
use crate::state::AppState;

pub async fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = Config::from_env().with_data_dir(cli.data_dir);

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "warn".into()),
        ))
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    tracing::debug!(data_dir = %config.data_dir.display(), "starting");
    let mut state = AppState::open(&config)?;

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut out = stdout.lock();
    execute(cli.command, &mut state, stdin.lock(), &mut out).await?;
    Ok(())
}

/// Run one command against `state`, reading interactive input from `input`.
pub async fn execute<R: BufRead, W: Write>(
    command: Command,
    state: &mut AppState,
    input: R,
    out: &mut W,
) -> Result<(), CommandError> {
    match command {
        Command::LoadFile {
            language,
            path,
            append,
        } => {
            let result =
                commands::load_file(state, &language, &path, ImportMode::from_append_flag(append))?;
            report_import(out, &result)?;
        }
        Command::LoadText { language, append } => {
            let result =
                commands::load_text(state, &language, input, ImportMode::from_append_flag(append))?;
            report_import(out, &result)?;
        }
        Command::LoadUrl {
            language,
            url,
            append,
        } => {
            let result =
                commands::load_url(state, &language, &url, ImportMode::from_append_flag(append))
                    .await?;
            report_import(out, &result)?;
        }
        Command::List => {
            let languages = commands::list_languages(state);
            if languages.is_empty() {
                writeln!(out, "No vocabulary loaded.")?;
            }
            for language in languages {
                writeln!(out, "{}: {} cards", language.name, language.card_count)?;
            }
        }
        Command::Show { language } => {
            for card in commands::show_language(state, &language)? {
                match &card.notes {
                    Some(notes) => writeln!(out, "{} = {} ({})", card.front, card.back, notes)?,
                    None => writeln!(out, "{} = {}", card.front, card.back)?,
                }
            }
        }
        Command::Remove { language } => {
            let count = commands::remove_language(state, &language)?;
            writeln!(out, "Removed {language} ({count} cards).")?;
        }
        Command::Export { language, path } => match path {
            Some(path) => {
                // Unknown languages must fail before the file is truncated.
                commands::show_language(state, &language)?;
                let mut file = BufWriter::new(File::create(&path)?);
                let count = commands::export_language(state, &language, &mut file)?;
                file.flush()?;
                writeln!(out, "Wrote {count} lines to {}.", path.display())?;
            }
            None => {
                commands::export_language(state, &language, out)?;
            }
        },
        Command::Flashcards { language, shuffle } => {
            commands::run_flashcards(state, &language, CardOrder::from_shuffle_flag(shuffle), input, out)?;
        }
        Command::Quiz {
            language,
            shuffle,
            reverse,
        } => {
            commands::run_quiz(
                state,
                &language,
                CardOrder::from_shuffle_flag(shuffle),
                Direction::from_reverse_flag(reverse),
                input,
                out,
            )?;
        }
    }
    Ok(())
}

fn report_import<W: Write>(out: &mut W, result: &ImportResult) -> io::Result<()> {
    if result.replaced > 0 {
        writeln!(
            out,
            "Loaded {} cards for {} (replaced {}).",
            result.imported, result.language, result.replaced
        )
    } else {
        writeln!(out, "Loaded {} cards for {}.", result.imported, result.language)
    }
}
