pub mod animation;
pub mod app;
pub mod config;
pub mod console;
pub mod export;
pub mod layout;
pub mod models;
pub mod session;

pub use config::AppConfig;
pub use models::{Deck, DeckError, Flashcard};
pub use session::{ProgressReport, SessionError, StudyReview, TestSession, TrackSession};
