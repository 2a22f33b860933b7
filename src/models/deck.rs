//! Deck is the ordered set of flashcards studied in one run
use super::Flashcard;
use super::color::{self, BLACK};
use log::{debug, info};
use rand::Rng;
use rand::seq::SliceRandom;
use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum DeckError {
    /// A position that is out of range or not a number at all.
    #[error("'{position}' is not a card number between 1 and {len}")]
    InvalidIndex { position: String, len: usize },

    #[error("No card numbers given")]
    NoIndices,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Deck {
    pub flashcards: Vec<Flashcard>,
}

impl Deck {
    pub fn new(flashcards: Vec<Flashcard>) -> Self {
        Self { flashcards }
    }

    pub fn len(&self) -> usize {
        self.flashcards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.flashcards.is_empty()
    }

    /// Appends a card showing its front. Empty text is allowed.
    pub fn add(&mut self, front: impl Into<String>, back: impl Into<String>) {
        self.flashcards.push(Flashcard::new(front, back));
        debug!("Added card #{}", self.flashcards.len());
    }

    /// Removes the cards at the given 1-based positions.
    ///
    /// Every position is checked before anything is removed, so a bad
    /// position leaves the deck untouched. Duplicates are ignored.
    pub fn remove_at(&mut self, positions: &[usize]) -> Result<usize, DeckError> {
        if positions.is_empty() {
            return Err(DeckError::NoIndices);
        }
        let len = self.flashcards.len();
        if let Some(&index) = positions.iter().find(|&&p| p == 0 || p > len) {
            return Err(DeckError::InvalidIndex {
                position: index.to_string(),
                len,
            });
        }

        let mut sorted = positions.to_vec();
        sorted.sort_unstable_by(|a, b| b.cmp(a));
        sorted.dedup();

        // Highest first so the remaining positions stay valid
        for &position in &sorted {
            self.flashcards.remove(position - 1);
        }
        info!("Removed {} card(s), {} left", sorted.len(), self.flashcards.len());
        Ok(sorted.len())
    }

    /// Parses a comma-separated list such as `"2, 4"` and removes those cards.
    pub fn remove_listed(&mut self, input: &str) -> Result<usize, DeckError> {
        let positions = parse_positions(input, self.flashcards.len())?;
        self.remove_at(&positions)
    }

    /// Uniformly permutes the cards. Returns `false` when there is nothing to shuffle.
    pub fn shuffle(&mut self, rng: &mut impl Rng) -> bool {
        if self.flashcards.is_empty() {
            return false;
        }
        self.flashcards.shuffle(rng);
        info!("Shuffled {} cards", self.flashcards.len());
        true
    }

    /// Gives every card a distinct random colour, then shuffles.
    pub fn shuffle_with_colors(&mut self, rng: &mut impl Rng) -> bool {
        let colors = color::distinct_card_colors(self.flashcards.len(), rng);
        for (card, color) in self.flashcards.iter_mut().zip(colors) {
            card.color = Some(color);
        }
        self.shuffle(rng)
    }

    /// Swaps front and back on every card.
    pub fn reverse_sides(&mut self) {
        for card in &mut self.flashcards {
            card.reverse();
        }
        info!("Reversed {} cards", self.flashcards.len());
    }

    /// Rotates each card's colour hue, treating uncoloured cards as black.
    pub fn rotate_colors(&mut self, turns: f32) {
        for card in &mut self.flashcards {
            card.color = Some(card.color.unwrap_or(BLACK).rotate_hue(turns));
        }
    }

    /// Colours every card that has none yet (or is still plain black).
    pub fn ensure_colors(&mut self, rng: &mut impl Rng) {
        for card in &mut self.flashcards {
            if card.color.is_none_or(|c| c == BLACK) {
                card.color = Some(color::random_card_color(rng));
            }
        }
    }

    /// Toggles the visible face of one card. Returns `false` if `index` is out of range.
    pub fn flip(&mut self, index: usize) -> bool {
        match self.flashcards.get_mut(index) {
            Some(card) => {
                card.flip();
                true
            }
            None => false,
        }
    }
}

/// Parses `"1, 3,4"` into positions. Any token that is not a number fails the
/// whole list; `len` is only carried into the error.
pub fn parse_positions(input: &str, len: usize) -> Result<Vec<usize>, DeckError> {
    if input.trim().is_empty() {
        return Err(DeckError::NoIndices);
    }
    input
        .split(',')
        .map(|token| {
            let token = token.trim();
            token.parse::<usize>().map_err(|_| DeckError::InvalidIndex {
                position: token.to_string(),
                len,
            })
        })
        .collect()
}
