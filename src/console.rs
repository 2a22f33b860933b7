//! Numbered-menu front-end for terminals.
//!
//! Starts from an empty deck held in memory only. End of input acts as the
//! quit signal and ends the loop wherever it happens.

use crate::models::Deck;
use crate::session::{ReviewStage, StudyReview};
use log::info;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::io::{self, BufRead, Write};

enum Flow {
    Continue,
    Quit,
}

pub struct ConsoleApp<R, W> {
    input: R,
    output: W,
    deck: Deck,
    rng: StdRng,
}

impl<R: BufRead, W: Write> ConsoleApp<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self::with_rng(input, output, StdRng::from_entropy())
    }

    pub fn with_rng(input: R, output: W, rng: StdRng) -> Self {
        Self {
            input,
            output,
            deck: Deck::default(),
            rng,
        }
    }

    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    pub fn into_output(self) -> W {
        self.output
    }

    pub fn run(&mut self) -> io::Result<()> {
        writeln!(self.output, "Welcome to the Flashcard Study Helper!")?;
        loop {
            writeln!(self.output, "\nFlashcard Generator Menu:")?;
            writeln!(self.output, "1. Add Flashcards")?;
            writeln!(self.output, "2. Shuffle Flashcards")?;
            writeln!(self.output, "3. Reverse Flashcards")?;
            writeln!(self.output, "4. Study and Review")?;
            writeln!(self.output, "5. Exit")?;
            let Some(choice) = self.prompt("Choose an option (num only): ")? else {
                return Ok(());
            };

            let flow = match choice.trim() {
                "1" => self.add_flashcards()?,
                "2" => self.shuffle_flashcards()?,
                "3" => self.reverse_flashcards()?,
                "4" => self.study_review()?,
                "5" => {
                    writeln!(self.output, "\nExiting Flashcards; Goodbye!")?;
                    Flow::Quit
                }
                _ => {
                    writeln!(self.output, "\nInvalid option. Please choose again.")?;
                    Flow::Continue
                }
            };
            if let Flow::Quit = flow {
                info!("Console session ended with {} cards", self.deck.len());
                return Ok(());
            }
        }
    }

    /// Writes `text` and reads one line without its line ending. `None` at end of input.
    fn prompt(&mut self, text: &str) -> io::Result<Option<String>> {
        write!(self.output, "{text}")?;
        self.output.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        while line.ends_with('\n') || line.ends_with('\r') {
            line.pop();
        }
        Ok(Some(line))
    }

    fn add_flashcards(&mut self) -> io::Result<Flow> {
        writeln!(self.output, "\nCurrent Flashcards:")?;
        if self.deck.is_empty() {
            writeln!(self.output, "No flashcards yet!")?;
        }
        for (i, card) in self.deck.flashcards.iter().enumerate() {
            writeln!(self.output, "{}. Front: {} | Back: {}", i + 1, card.front, card.back)?;
        }

        let count = loop {
            let Some(raw) = self.prompt("\nHow many flashcards would you like to add? ")? else {
                return Ok(Flow::Quit);
            };
            match raw.trim().parse::<i64>() {
                Ok(n) if n > 0 => break n,
                Ok(_) => writeln!(self.output, "Please enter a positive number.")?,
                Err(_) => writeln!(self.output, "Please enter a valid number.")?,
            }
        };

        for i in 0..count {
            writeln!(self.output, "\nFlashcard {}:", i + 1)?;
            let Some(front) = self.prompt("Enter the front of the flashcard: ")? else {
                return Ok(Flow::Quit);
            };
            let Some(back) = self.prompt("Enter the back of the flashcard: ")? else {
                return Ok(Flow::Quit);
            };
            self.deck.add(front, back);
        }
        Ok(Flow::Continue)
    }

    fn shuffle_flashcards(&mut self) -> io::Result<Flow> {
        if self.deck.shuffle(&mut self.rng) {
            writeln!(self.output, "Flashcards shuffled!")?;
        } else {
            writeln!(self.output, "No flashcards to shuffle.")?;
        }
        Ok(Flow::Continue)
    }

    fn reverse_flashcards(&mut self) -> io::Result<Flow> {
        self.deck.reverse_sides();
        writeln!(self.output, "Flashcards reversed!")?;
        Ok(Flow::Continue)
    }

    fn study_review(&mut self) -> io::Result<Flow> {
        let mut session = StudyReview::new(&self.deck);
        loop {
            match session.stage() {
                ReviewStage::Answering => {
                    let Some(front) = session.current_card().map(|c| c.front.clone()) else {
                        break;
                    };
                    writeln!(self.output, "\nFront: {front}")?;
                    let Some(answer) =
                        self.prompt("Enter the answer for the back of the flashcard: ")?
                    else {
                        return Ok(Flow::Quit);
                    };
                    let correct = session
                        .submit_answer(&answer)
                        .map_err(io::Error::other)?;
                    writeln!(self.output, "{}", if correct { "Correct!" } else { "Incorrect!" })?;
                    if session.stage() != ReviewStage::Answering {
                        self.show_knowledge(&session)?;
                    }
                }
                ReviewStage::RetryPrompt => {
                    let Some(choice) = self
                        .prompt("\nDo you want to review unknown flashcards again? (y/n): ")?
                    else {
                        return Ok(Flow::Quit);
                    };
                    session
                        .answer_retry(choice.trim().eq_ignore_ascii_case("y"))
                        .map_err(io::Error::other)?;
                }
                ReviewStage::Finished => break,
            }
        }
        if self.deck.is_empty() {
            self.show_knowledge(&session)?;
        }
        Ok(Flow::Continue)
    }

    fn show_knowledge(&mut self, session: &StudyReview) -> io::Result<()> {
        let empty_deck = self.deck.is_empty();

        writeln!(self.output, "\n--- Known Flashcards ---")?;
        if empty_deck {
            writeln!(self.output, "No flashcards have been created yet.")?;
        } else if session.known().is_empty() {
            writeln!(self.output, "No cards were answered correctly.")?;
        }
        for card in session.known() {
            writeln!(self.output, "Front: {} | Back: {}", card.front, card.back)?;
            writeln!(self.output, "{}", "-".repeat(25))?;
        }

        writeln!(self.output, "\n--- Unknown Flashcards (Need Review) ---")?;
        if empty_deck {
            writeln!(self.output, "No flashcards have been created yet.")?;
        } else if session.unknown().is_empty() {
            writeln!(self.output, "All flashcards are known!")?;
        }
        for card in session.unknown() {
            writeln!(self.output, "Front: {} | Back: {}", card.front, card.back)?;
            writeln!(self.output, "{}", "-".repeat(25))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn run_script(script: &str) -> (Deck, String) {
        let mut app = ConsoleApp::with_rng(
            Cursor::new(script.as_bytes().to_vec()),
            Vec::new(),
            StdRng::seed_from_u64(8),
        );
        app.run().unwrap();
        let deck = app.deck().clone();
        let output = String::from_utf8(app.into_output()).unwrap();
        (deck, output)
    }

    #[test]
    fn test_add_and_exit() {
        let (deck, output) = run_script("1\nabc\n0\n2\ncat\ngato\ndog\nperro\n5\n");
        assert_eq!(deck.len(), 2);
        assert_eq!(deck.flashcards[1].back, "perro");
        assert!(output.contains("No flashcards yet!"));
        assert!(output.contains("Please enter a valid number."));
        assert!(output.contains("Please enter a positive number."));
        assert!(output.ends_with("Exiting Flashcards; Goodbye!\n"));
    }

    #[test]
    fn test_listing_keeps_card_text_verbatim() {
        let (deck, output) = run_script("1\n1\nel   gato\n  cat \n1\n0\n1\nx\ny\n4\ncat\ny\n5\n");
        assert_eq!(deck.flashcards[0].front, "el   gato");
        assert!(output.contains("1. Front: el   gato | Back:   cat \n"));
        assert!(output.contains("Front: el   gato\n"));
        assert_eq!(output.matches("Correct!").count(), 2);
    }

    #[test]
    fn test_invalid_option_and_empty_shuffle() {
        let (deck, output) = run_script("9\n2\n5\n");
        assert!(deck.is_empty());
        assert!(output.contains("Invalid option. Please choose again."));
        assert!(output.contains("No flashcards to shuffle."));
    }

    #[test]
    fn test_reverse_swaps_sides() {
        let (deck, output) = run_script("1\n1\ncat\ngato\n3\n5\n");
        assert_eq!(deck.flashcards[0].front, "gato");
        assert_eq!(deck.flashcards[0].back, "cat");
        assert!(output.contains("Flashcards reversed!"));
    }

    #[test]
    fn test_study_review_with_retry() {
        let script = "1\n2\ncat\ngato\ndog\nperro\n4\nGato\nperroo\ny\nperro\n5\n";
        let (_, output) = run_script(script);
        assert_eq!(output.matches("Correct!").count(), 2);
        assert_eq!(output.matches("Incorrect!").count(), 1);
        assert!(output.contains("All flashcards are known!"));
        assert_eq!(output.matches("review unknown flashcards again").count(), 1);
    }

    #[test]
    fn test_study_review_on_empty_deck() {
        let (_, output) = run_script("4\n5\n");
        assert_eq!(output.matches("No flashcards have been created yet.").count(), 2);
    }

    #[test]
    fn test_end_of_input_quits() {
        let (deck, output) = run_script("1\n1\nonly front");
        assert!(deck.is_empty());
        assert!(!output.contains("Goodbye"));
    }
}
