pub mod color;
pub mod deck;
pub mod flashcard;

pub use color::Rgb;
pub use deck::{Deck, DeckError};
pub use flashcard::Flashcard;
