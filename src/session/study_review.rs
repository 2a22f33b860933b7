//! Study and review for the console: type the back of every card, then
//! review the missed ones as many times as wanted.
//! Unlike track-progress, cards answered correctly in a review round are added to `known`.

use super::{ProgressReport, Result, SessionError};
use crate::models::{Deck, Flashcard};
use log::info;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ReviewStage {
    Answering,
    RetryPrompt,
    Finished,
}

pub struct StudyReview {
    round_cards: Vec<Flashcard>,
    current_index: usize,
    known: Vec<Flashcard>,
    unknown: Vec<Flashcard>,
    stage: ReviewStage,
}

impl StudyReview {
    /// An empty deck gives a session that is already finished.
    pub fn new(deck: &Deck) -> Self {
        let stage = if deck.is_empty() {
            ReviewStage::Finished
        } else {
            ReviewStage::Answering
        };
        Self {
            round_cards: deck.flashcards.clone(),
            current_index: 0,
            known: Vec::new(),
            unknown: Vec::new(),
            stage,
        }
    }

    pub fn stage(&self) -> ReviewStage {
        self.stage
    }

    pub fn current_card(&self) -> Option<&Flashcard> {
        match self.stage {
            ReviewStage::Answering => self.round_cards.get(self.current_index),
            _ => None,
        }
    }

    /// Checks the typed answer for the current card. Returns whether it was correct.
    pub fn submit_answer(&mut self, answer: &str) -> Result<bool> {
        if self.stage != ReviewStage::Answering {
            return Err(SessionError::WrongStage("answer"));
        }
        let card = self.round_cards[self.current_index].clone();
        let correct = card.accepts(answer);
        if correct {
            self.known.push(card);
        } else {
            self.unknown.push(card);
        }

        self.current_index += 1;
        if self.current_index >= self.round_cards.len() {
            info!(
                "Review round done: {} known, {} unknown",
                self.known.len(),
                self.unknown.len()
            );
            self.stage = if self.unknown.is_empty() {
                ReviewStage::Finished
            } else {
                ReviewStage::RetryPrompt
            };
        }
        Ok(correct)
    }

    pub fn answer_retry(&mut self, retry: bool) -> Result<()> {
        if self.stage != ReviewStage::RetryPrompt {
            return Err(SessionError::WrongStage("review again"));
        }
        if retry {
            self.round_cards = std::mem::take(&mut self.unknown);
            self.current_index = 0;
            self.stage = ReviewStage::Answering;
        } else {
            self.stage = ReviewStage::Finished;
        }
        Ok(())
    }

    pub fn known(&self) -> &[Flashcard] {
        &self.known
    }

    pub fn unknown(&self) -> &[Flashcard] {
        &self.unknown
    }

    pub fn into_report(self) -> ProgressReport {
        ProgressReport {
            known: self.known,
            unknown: self.unknown,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_deck() -> Deck {
        let mut deck = Deck::default();
        deck.add("cat", "gato");
        deck.add("dog", "perro");
        deck.add("bird", "pájaro");
        deck
    }

    #[test]
    fn test_empty_deck_is_finished() {
        let session = StudyReview::new(&Deck::default());
        assert_eq!(session.stage(), ReviewStage::Finished);
        assert!(session.current_card().is_none());
        assert_eq!(session.into_report().total(), 0);
    }

    #[test]
    fn test_known_accumulates_across_reviews() {
        let mut session = StudyReview::new(&create_test_deck());
        assert!(session.submit_answer(" GATO").unwrap());
        assert!(!session.submit_answer("perra").unwrap());
        assert!(!session.submit_answer("").unwrap());
        assert_eq!(session.stage(), ReviewStage::RetryPrompt);
        assert_eq!(session.unknown().len(), 2);

        session.answer_retry(true).unwrap();
        assert_eq!(session.current_card().unwrap().front, "dog");
        assert!(session.submit_answer("perro").unwrap());
        assert!(!session.submit_answer("pajaro").unwrap());

        session.answer_retry(true).unwrap();
        assert!(session.submit_answer("Pájaro").unwrap());
        assert_eq!(session.stage(), ReviewStage::Finished);

        let report = session.into_report();
        let known: Vec<_> = report.known.iter().map(|c| c.front.as_str()).collect();
        assert_eq!(known, vec!["cat", "dog", "bird"]);
        assert!(report.unknown.is_empty());
    }

    #[test]
    fn test_declining_review_keeps_unknowns() {
        let mut session = StudyReview::new(&create_test_deck());
        session.submit_answer("x").unwrap();
        session.submit_answer("perro").unwrap();
        session.submit_answer("x").unwrap();
        session.answer_retry(false).unwrap();
        assert_eq!(session.stage(), ReviewStage::Finished);
        assert!(session.answer_retry(true).is_err());

        let report = session.into_report();
        assert_eq!(report.known.len(), 1);
        assert_eq!(report.unknown.len(), 2);
    }
}
