//! Interactive study loops.
//!
//! Both loops read one line per action from `input` and write to `out`, so
//! the terminal and tests drive them the same way. End of input quits.

use super::library::show_language;
use super::CommandError;
use crate::state::AppState;
use std::io::{BufRead, Write};
use tracing::debug;
use vocab_core::{Card, CardOrder, Direction, FlashcardSession, QuizSession, Score};

const FLASHCARD_HELP: &str = "[enter/f] flip  [n] next  [p] previous  [q] quit";
const QUIZ_QUIT: &str = ":q";

fn read_action<R: BufRead>(input: &mut R) -> Result<Option<String>, CommandError> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

fn write_notes<W: Write>(out: &mut W, card: &Card) -> std::io::Result<()> {
    if let Some(notes) = &card.notes {
        writeln!(out, "  ({notes})")?;
    }
    Ok(())
}

/// Flip-card review. Returns how many distinct positions were visited.
pub fn run_flashcards<R: BufRead, W: Write>(
    state: &AppState,
    language: &str,
    order: CardOrder,
    mut input: R,
    out: &mut W,
) -> Result<usize, CommandError> {
    let cards = show_language(state, language)?.to_vec();
    let mut session = FlashcardSession::new(cards, order)?;
    let mut visited = vec![false; session.cards().len()];

    loop {
        let (position, total) = session.position();
        visited[position - 1] = true;
        let card = session.current();

        writeln!(out, "[{position}/{total}] {}", card.front)?;
        if session.is_flipped() {
            writeln!(out, "  = {}", card.back)?;
            write_notes(out, card)?;
        }
        writeln!(out, "{FLASHCARD_HELP}")?;
        out.flush()?;

        match read_action(&mut input)?.as_deref() {
            None | Some("q") => break,
            Some("") | Some("f") => session.flip(),
            Some("n") => session.next(),
            Some("p") => session.previous(),
            Some(other) => writeln!(out, "unknown key: {other}")?,
        }
    }

    Ok(visited.into_iter().filter(|v| *v).count())
}

/// Typed-answer quiz. Prints and returns the final score.
pub fn run_quiz<R: BufRead, W: Write>(
    state: &AppState,
    language: &str,
    order: CardOrder,
    direction: Direction,
    mut input: R,
    out: &mut W,
) -> Result<Score, CommandError> {
    let cards = show_language(state, language)?.to_vec();
    let mut quiz = QuizSession::new(cards, order, direction)?;
    writeln!(out, "Type the answer for each word ({QUIZ_QUIT} to stop).")?;

    loop {
        let (position, total) = quiz.position();
        writeln!(out, "[{position}/{total}] {}", quiz.prompt())?;
        write!(out, "> ")?;
        out.flush()?;

        let answer = match read_action(&mut input)? {
            None => break,
            Some(answer) if answer == QUIZ_QUIT => break,
            Some(answer) => answer,
        };

        let expected = quiz.expected().to_string();
        let result = quiz.submit(&answer)?;
        debug!(
            expected = %expected,
            distance = result.distance,
            threshold = result.threshold,
            correct = result.is_correct,
            "graded answer"
        );

        if result.exact {
            writeln!(out, "Correct!")?;
        } else if result.is_correct {
            writeln!(out, "Close enough: {expected}")?;
        } else {
            writeln!(out, "Wrong. Answer: {expected}")?;
        }
        write_notes(out, quiz.current())?;

        if !quiz.advance() {
            break;
        }
    }

    let score = quiz.score();
    writeln!(
        out,
        "Score: {}/{} ({}%)",
        score.correct,
        score.answered,
        score.percentage()
    )?;
    Ok(score)
}
