//! Study workflows as explicit state machines.
//!
//! A front-end asks a session what it is waiting for (its stage and current
//! card), collects that input however it likes, and feeds it back through the
//! session's typed methods. Sessions never block and never touch the screen.

pub mod save_file;
pub mod study_review;
pub mod test_yourself;
pub mod track_progress;

use crate::models::Flashcard;
use thiserror::Error;

pub use save_file::{SaveFileSession, SaveStage};
pub use study_review::{ReviewStage, StudyReview};
pub use test_yourself::{TestScore, TestSession, TestStage, Verdict};
pub use track_progress::{Decision, TrackSession, TrackStage};

#[derive(Error, Debug, PartialEq, Eq)]
pub enum SessionError {
    #[error("Please enter flashcards first!")]
    EmptyDeck,

    #[error("Cannot {0} at this point of the session")]
    WrongStage(&'static str),

    #[error("There is no option number {0}")]
    NoSuchOption(usize),
}

pub type Result<T> = std::result::Result<T, SessionError>;

/// Known/unknown partition produced by a review pass.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ProgressReport {
    pub known: Vec<Flashcard>,
    pub unknown: Vec<Flashcard>,
}

impl ProgressReport {
    pub fn total(&self) -> usize {
        self.known.len() + self.unknown.len()
    }
}
