//! Test-yourself: draw a random sample without replacement and score typed answers.

use super::{Result, SessionError};
use crate::models::{Deck, Flashcard};
use log::{debug, info};
use rand::Rng;
use rand::seq::index;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TestStage {
    ChoosingSize,
    Answering,
    /// The last answer was wrong and the correct back is on display.
    Revealing,
    Finished,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Verdict {
    Correct,
    Incorrect { expected: String },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TestScore {
    pub score: usize,
    pub attempted: usize,
}

pub struct TestSession {
    pool: Vec<Flashcard>,
    sample: Vec<Flashcard>,
    current_index: usize,
    score: usize,
    stage: TestStage,
    /// Why the last sample size was rejected.
    pub feedback: Option<String>,
}

impl TestSession {
    /// Takes a snapshot of the deck; the deck itself is never changed by a test.
    pub fn new(deck: &Deck) -> Result<Self> {
        if deck.is_empty() {
            return Err(SessionError::EmptyDeck);
        }
        Ok(Self {
            pool: deck.flashcards.clone(),
            sample: Vec::new(),
            current_index: 0,
            score: 0,
            stage: TestStage::ChoosingSize,
            feedback: None,
        })
    }

    pub fn stage(&self) -> TestStage {
        self.stage
    }

    pub fn deck_size(&self) -> usize {
        self.pool.len()
    }

    /// Parses the requested sample size and draws the cards.
    ///
    /// Returns `Ok(false)` and sets [`feedback`](Self::feedback) when the
    /// input is not a number in `1..=deck_size`; the session then keeps
    /// waiting for a size.
    pub fn choose_sample_size(&mut self, input: &str, rng: &mut impl Rng) -> Result<bool> {
        if self.stage != TestStage::ChoosingSize {
            return Err(SessionError::WrongStage("choose a sample size"));
        }

        let len = self.pool.len();
        let size = match input.trim().parse::<i64>() {
            Err(_) => {
                self.feedback = Some("Please input a valid number.".to_string());
                return Ok(false);
            }
            Ok(n) if n <= 0 => {
                self.feedback = Some("Please enter a positive number".to_string());
                return Ok(false);
            }
            Ok(n) if n as u64 > len as u64 => {
                self.feedback = Some(format!("Please choose a number between 1 and {len}"));
                return Ok(false);
            }
            Ok(n) => n as usize,
        };

        // index::sample returns the picks in random order
        self.sample = index::sample(rng, len, size)
            .into_iter()
            .map(|i| {
                let mut card = self.pool[i].clone();
                card.showing_front = true;
                card
            })
            .collect();
        self.feedback = None;
        self.stage = TestStage::Answering;
        info!("Testing {} of {} cards", size, len);
        Ok(true)
    }

    pub fn current_card(&self) -> Option<&Flashcard> {
        match self.stage {
            TestStage::Answering | TestStage::Revealing => self.sample.get(self.current_index),
            _ => None,
        }
    }

    pub fn question(&self) -> Option<String> {
        self.current_card()
            .map(|card| format!("What is the back of this flashcard: {}?", card.front))
    }

    pub fn submit_answer(&mut self, answer: &str) -> Result<Verdict> {
        if self.stage != TestStage::Answering {
            return Err(SessionError::WrongStage("answer"));
        }
        let card = &self.sample[self.current_index];
        if card.accepts(answer) {
            self.score += 1;
            debug!("Card {} answered correctly", self.current_index + 1);
            self.advance();
            Ok(Verdict::Correct)
        } else {
            let expected = card.back.clone();
            self.stage = TestStage::Revealing;
            Ok(Verdict::Incorrect { expected })
        }
    }

    /// Dismisses the revealed answer and moves on.
    pub fn acknowledge(&mut self) -> Result<()> {
        if self.stage != TestStage::Revealing {
            return Err(SessionError::WrongStage("continue"));
        }
        self.advance();
        Ok(())
    }

    fn advance(&mut self) {
        self.current_index += 1;
        if self.current_index >= self.sample.len() {
            self.stage = TestStage::Finished;
            info!("Test finished: {} / {}", self.score, self.sample.len());
        } else {
            self.stage = TestStage::Answering;
        }
    }

    /// `(number of the current card, sample size)`, both 1-based for display.
    pub fn progress(&self) -> (usize, usize) {
        ((self.current_index + 1).min(self.sample.len()), self.sample.len())
    }

    pub fn result(&self) -> Option<TestScore> {
        (self.stage == TestStage::Finished).then_some(TestScore {
            score: self.score,
            attempted: self.sample.len(),
        })
    }
}
