//! Flashcard is a pair <front, back> plus the transient state used while displaying it.
use super::color::Rgb;

#[derive(Clone, Debug, PartialEq)]
pub struct Flashcard {
    pub front: String,
    pub back: String,
    /// Which face is currently shown. Presentation only.
    pub showing_front: bool,
    pub color: Option<Rgb>,
}

impl Flashcard {
    pub fn new(front: impl Into<String>, back: impl Into<String>) -> Self {
        Self {
            front: front.into(),
            back: back.into(),
            showing_front: true,
            color: None,
        }
    }

    pub fn flip(&mut self) {
        self.showing_front = !self.showing_front;
    }

    pub fn visible_text(&self) -> &str {
        if self.showing_front {
            &self.front
        } else {
            &self.back
        }
    }

    /// Swaps the text of both faces. The side flag is left alone, so the
    /// currently visible face now shows the other text.
    pub fn reverse(&mut self) {
        std::mem::swap(&mut self.front, &mut self.back);
    }

    /// Trimmed, case-insensitive comparison of a typed answer against the back.
    pub fn accepts(&self, answer: &str) -> bool {
        answer.trim().to_lowercase() == self.back.trim().to_lowercase()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flashcard_creation() {
        let card = Flashcard::new("hello", "cześć");

        assert_eq!(card.front, "hello");
        assert_eq!(card.back, "cześć");
        assert!(card.showing_front);
        assert!(card.color.is_none());
    }

    #[test]
    fn test_flip_keeps_text() {
        let mut card = Flashcard::new("hello", "cześć");
        card.flip();
        assert!(!card.showing_front);
        assert_eq!(card.visible_text(), "cześć");
        assert_eq!(card.front, "hello");
        card.flip();
        assert_eq!(card.visible_text(), "hello");
    }

    #[test]
    fn test_reverse_twice_restores() {
        let original = Flashcard::new("cat", "gato");
        let mut card = original.clone();
        card.reverse();
        assert_eq!(card.front, "gato");
        assert_eq!(card.back, "cat");
        card.reverse();
        assert_eq!(card, original);
    }

    #[test]
    fn test_accepts_trimmed_case_insensitive() {
        let card = Flashcard::new("cat", " Gato ");
        assert!(card.accepts("gato"));
        assert!(card.accepts("  GATO\n"));
        assert!(!card.accepts("gatoo"));
        assert!(Flashcard::new("blank", "").accepts("   "));
    }
}
