//! Command-line definition.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "vocab")]
#[command(about = "Vocabulary flashcards and typed-answer quizzes")]
pub struct Cli {
    /// Directory holding the vocabulary database (overrides VOCAB_DATA_DIR)
    #[arg(long, global = true)]
    pub data_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Load a vocabulary file (`front | back | notes` per line)
    LoadFile {
        language: String,
        path: PathBuf,
        /// Keep existing cards and add only new words
        #[arg(long)]
        append: bool,
    },
    /// Load vocabulary pasted on stdin
    LoadText {
        language: String,
        #[arg(long)]
        append: bool,
    },
    /// Load a vocabulary file from a URL
    LoadUrl {
        language: String,
        url: String,
        #[arg(long)]
        append: bool,
    },
    /// List loaded languages
    List,
    /// Print the cards of a language
    Show { language: String },
    /// Delete a language
    Remove { language: String },
    /// Write a language as vocabulary lines
    Export {
        language: String,
        /// Output file (stdout when omitted)
        path: Option<PathBuf>,
    },
    /// Flip-card review
    Flashcards {
        language: String,
        #[arg(short, long)]
        shuffle: bool,
    },
    /// Typed-answer quiz
    Quiz {
        language: String,
        #[arg(short, long)]
        shuffle: bool,
        /// Show the translation and ask for the word
        #[arg(short, long)]
        reverse: bool,
    },
}
