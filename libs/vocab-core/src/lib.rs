//! Core vocabulary library shared by the command-line front end.
//!
//! Provides:
//! - Pipe-delimited vocabulary parser
//! - Answer grading for quizzes (Levenshtein distance)
//! - Fisher-Yates shuffle
//! - Flashcard and quiz session state
//! - The language-keyed card library

pub mod error;
pub mod library;
pub mod matching;
pub mod parser;
pub mod session;
pub mod shuffle;
pub mod types;

pub use error::{Result, SessionError};
pub use library::Library;
pub use matching::{compare_answers, grade, levenshtein_distance, MatchResult};
pub use parser::{format_line, merge_unique, parse, parse_line};
pub use session::{FlashcardSession, QuizSession};
pub use shuffle::shuffle;
pub use types::{Card, CardOrder, Direction, LanguageSummary, Score};
