//! Track-progress: sort every card into known / unknown, then optionally retry the unknowns.

use super::{ProgressReport, Result, SessionError};
use crate::models::color::{KNOWN_GREEN, UNKNOWN_RED};
use crate::models::{Deck, Flashcard, Rgb};
use log::info;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Decision {
    Known,
    Unknown,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TrackStage {
    Presenting,
    RetryPrompt,
    Finished,
}

/// Walks the cards of one round in order, blocking on a decision for each.
///
/// Accepting a retry starts a new round over the unknown cards. The report
/// keeps the known list of the very first round and the unknown list of the
/// last round; cards recognised during a retry are not added to `known`.
pub struct TrackSession {
    round_cards: Vec<Flashcard>,
    /// Deck position of each card in `round_cards`.
    round_positions: Vec<usize>,
    unknown_positions: Vec<usize>,
    /// Latest verdict colour per deck position.
    verdict_colors: Vec<Option<Rgb>>,
    current_index: usize,
    known: Vec<Flashcard>,
    unknown: Vec<Flashcard>,
    first_round_known: Option<Vec<Flashcard>>,
    round_number: usize,
    stage: TrackStage,
}

impl TrackSession {
    pub fn new(deck: &Deck) -> Result<Self> {
        if deck.is_empty() {
            return Err(SessionError::EmptyDeck);
        }
        info!("Tracking progress over {} cards", deck.len());
        Ok(Self {
            round_cards: deck.flashcards.clone(),
            round_positions: (0..deck.len()).collect(),
            unknown_positions: Vec::new(),
            verdict_colors: vec![None; deck.len()],
            current_index: 0,
            known: Vec::new(),
            unknown: Vec::new(),
            first_round_known: None,
            round_number: 1,
            stage: TrackStage::Presenting,
        })
    }

    pub fn stage(&self) -> TrackStage {
        self.stage
    }

    pub fn round_number(&self) -> usize {
        self.round_number
    }

    pub fn current_card(&self) -> Option<&Flashcard> {
        match self.stage {
            TrackStage::Presenting => self.round_cards.get(self.current_index),
            _ => None,
        }
    }

    /// Shows the other face of the current card. Has no effect on the decision.
    pub fn flip_current(&mut self) -> Result<()> {
        if self.stage != TrackStage::Presenting {
            return Err(SessionError::WrongStage("flip a card"));
        }
        self.round_cards[self.current_index].flip();
        Ok(())
    }

    pub fn decide(&mut self, decision: Decision) -> Result<()> {
        if self.stage != TrackStage::Presenting {
            return Err(SessionError::WrongStage("categorise a card"));
        }
        let color = match decision {
            Decision::Known => KNOWN_GREEN,
            Decision::Unknown => UNKNOWN_RED,
        };
        let position = self.round_positions[self.current_index];
        self.verdict_colors[position] = Some(color);
        self.round_cards[self.current_index].color = Some(color);

        let card = self.round_cards[self.current_index].clone();
        match decision {
            Decision::Known => self.known.push(card),
            Decision::Unknown => {
                self.unknown.push(card);
                self.unknown_positions.push(position);
            }
        }

        self.current_index += 1;
        if self.current_index >= self.round_cards.len() {
            info!(
                "Round {} complete: {} known, {} unknown",
                self.round_number,
                self.known.len(),
                self.unknown.len()
            );
            self.stage = if self.unknown.is_empty() {
                TrackStage::Finished
            } else {
                TrackStage::RetryPrompt
            };
        }
        Ok(())
    }

    /// Answers the "retry unknown flashcards?" prompt.
    pub fn answer_retry(&mut self, retry: bool) -> Result<()> {
        if self.stage != TrackStage::RetryPrompt {
            return Err(SessionError::WrongStage("retry"));
        }
        if !retry {
            self.stage = TrackStage::Finished;
            return Ok(());
        }

        let round_known = std::mem::take(&mut self.known);
        self.first_round_known.get_or_insert(round_known);

        self.round_cards = std::mem::take(&mut self.unknown);
        self.round_positions = std::mem::take(&mut self.unknown_positions);
        for card in &mut self.round_cards {
            card.showing_front = true;
        }
        self.current_index = 0;
        self.round_number += 1;
        self.stage = TrackStage::Presenting;
        Ok(())
    }

    /// Paints the deck the session was started from with the latest verdict
    /// of every card decided so far. Undecided cards keep their colour.
    pub fn paint_deck(&self, deck: &mut Deck) {
        for (card, color) in deck.flashcards.iter_mut().zip(&self.verdict_colors) {
            if let Some(color) = color {
                card.color = Some(*color);
            }
        }
    }

    /// `(known, unknown)` counts of the round in progress or just completed.
    pub fn round_summary(&self) -> (usize, usize) {
        (self.known.len(), self.unknown.len())
    }

    pub fn position(&self) -> (usize, usize) {
        (
            (self.current_index + 1).min(self.round_cards.len()),
            self.round_cards.len(),
        )
    }

    pub fn phase_message(&self) -> String {
        if self.round_number == 1 {
            format!("Round {}: {} cards", self.round_number, self.round_cards.len())
        } else {
            format!(
                "Round {} (Retry): {} cards to retry",
                self.round_number,
                self.round_cards.len()
            )
        }
    }

    pub fn is_completed(&self) -> bool {
        self.stage == TrackStage::Finished
    }

    pub fn report(&self) -> Option<ProgressReport> {
        if !self.is_completed() {
            return None;
        }
        Some(ProgressReport {
            known: self
                .first_round_known
                .clone()
                .unwrap_or_else(|| self.known.clone()),
            unknown: self.unknown.clone(),
        })
    }
}
