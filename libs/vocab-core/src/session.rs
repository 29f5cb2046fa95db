//! Study session state.
//!
//! Both session kinds own their card list and keep `index` inside
//! `[0, len)`; construction over an empty list is rejected.

use crate::error::{Result, SessionError};
use crate::matching::{compare_answers, MatchResult};
use crate::shuffle::shuffle;
use crate::types::{Card, CardOrder, Direction, Score};
use rand::Rng;

fn arrange<R: Rng + ?Sized>(mut cards: Vec<Card>, order: CardOrder, rng: &mut R) -> Result<Vec<Card>> {
    if cards.is_empty() {
        return Err(SessionError::NoCards);
    }
    if order == CardOrder::Shuffled {
        shuffle(&mut cards, rng);
    }
    Ok(cards)
}

/// Flip-card review.
#[derive(Debug, Clone)]
pub struct FlashcardSession {
    cards: Vec<Card>,
    index: usize,
    flipped: bool,
}

impl FlashcardSession {
    pub fn new(cards: Vec<Card>, order: CardOrder) -> Result<Self> {
        Self::with_rng(cards, order, &mut rand::rng())
    }

    pub fn with_rng<R: Rng + ?Sized>(cards: Vec<Card>, order: CardOrder, rng: &mut R) -> Result<Self> {
        Ok(Self {
            cards: arrange(cards, order, rng)?,
            index: 0,
            flipped: false,
        })
    }

    pub fn current(&self) -> &Card {
        &self.cards[self.index]
    }

    pub fn is_flipped(&self) -> bool {
        self.flipped
    }

    /// Toggle between front and back.
    pub fn flip(&mut self) {
        self.flipped = !self.flipped;
    }

    /// Move forward, wrapping to the first card.
    pub fn next(&mut self) {
        self.index = (self.index + 1) % self.cards.len();
        self.flipped = false;
    }

    /// Move back, wrapping to the last card.
    pub fn previous(&mut self) {
        self.index = (self.index + self.cards.len() - 1) % self.cards.len();
        self.flipped = false;
    }

    /// One-based position and total, for progress display.
    pub fn position(&self) -> (usize, usize) {
        (self.index + 1, self.cards.len())
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }
}

/// Typed-answer quiz.
#[derive(Debug, Clone)]
pub struct QuizSession {
    cards: Vec<Card>,
    direction: Direction,
    index: usize,
    answered_current: bool,
    finished: bool,
    correct: usize,
    answered: usize,
}

impl QuizSession {
    pub fn new(cards: Vec<Card>, order: CardOrder, direction: Direction) -> Result<Self> {
        Self::with_rng(cards, order, direction, &mut rand::rng())
    }

    pub fn with_rng<R: Rng + ?Sized>(
        cards: Vec<Card>,
        order: CardOrder,
        direction: Direction,
        rng: &mut R,
    ) -> Result<Self> {
        Ok(Self {
            cards: arrange(cards, order, rng)?,
            direction,
            index: 0,
            answered_current: false,
            finished: false,
            correct: 0,
            answered: 0,
        })
    }

    pub fn current(&self) -> &Card {
        &self.cards[self.index]
    }

    /// Text shown to the user for the current card.
    pub fn prompt(&self) -> &str {
        self.direction.split(self.current()).0
    }

    /// Answer expected for the current card.
    pub fn expected(&self) -> &str {
        self.direction.split(self.current()).1
    }

    /// Grade an answer for the current card and update the score.
    pub fn submit(&mut self, answer: &str) -> Result<MatchResult> {
        if self.finished {
            return Err(SessionError::Finished);
        }
        if self.answered_current {
            return Err(SessionError::AlreadyAnswered { index: self.index });
        }

        let result = compare_answers(answer, self.expected());
        self.answered_current = true;
        self.answered += 1;
        if result.is_correct {
            self.correct += 1;
        }
        Ok(result)
    }

    /// Move to the next card. Returns `false` once the last card is done;
    /// the index then stays on the last card.
    pub fn advance(&mut self) -> bool {
        if self.index + 1 < self.cards.len() {
            self.index += 1;
            self.answered_current = false;
            true
        } else {
            self.finished = true;
            false
        }
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    pub fn position(&self) -> (usize, usize) {
        (self.index + 1, self.cards.len())
    }

    pub fn score(&self) -> Score {
        Score {
            correct: self.correct,
            answered: self.answered,
            total: self.cards.len(),
        }
    }
}
