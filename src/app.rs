//! Graphical front-end.
//! Draws the menu, the study screens and the card animations, and feeds user
//! input into the session state machines.

use crate::animation::{FlipAnimation, ShuffleAnimation, ShufflePhase};
use crate::config::AppConfig;
use crate::export::json::{self, DeckEdit, EditOutcome};
use crate::export::text::{self, WriteMode};
use crate::layout::{self, SCROLL_STEP};
use crate::models::color::BLACK;
use crate::models::{Deck, Flashcard, Rgb};
use crate::session::{
    Decision, SaveFileSession, SaveStage, SessionError, TestSession, TestStage, TrackSession,
    TrackStage, Verdict,
};
use eframe::egui;
use egui::{Align2, Color32, FontId, Key, Sense, Stroke};
use log::{info, warn};
use rand::SeedableRng;
use rand::rngs::StdRng;

const CARD_SIZE: egui::Vec2 = egui::vec2(600.0, 200.0);
const FEEDBACK_SECONDS: f64 = 1.5;
const SUMMARY_SECONDS: f64 = 2.0;
const FEEDBACK_RED: Color32 = Color32::from_rgb(200, 0, 0);
const FEEDBACK_GREEN: Color32 = Color32::from_rgb(0, 200, 0);

#[derive(Default)]
struct EditorState {
    front: String,
    back: String,
    remove_input: String,
}

struct ShuffleState {
    animation: ShuffleAnimation,
    started_at: f64,
}

struct ReverseState {
    card_index: usize,
    flip: FlipAnimation,
}

struct TrackState {
    session: TrackSession,
    flip: Option<FlipAnimation>,
    scroll: f32,
    max_scroll: f32,
    summary_until: Option<f64>,
}

struct TestState {
    session: TestSession,
    input: String,
    revealed: Option<(String, f64)>,
}

struct SaveFileState {
    session: SaveFileSession,
    name_input: String,
}

/// Menu entries that need a non-empty deck
#[derive(Clone, Copy)]
enum MenuAction {
    Shuffle,
    Reverse,
    TrackProgress,
    TestYourself,
    Save,
}

/// Application screen states
#[derive(Default)]
enum AppScreen {
    #[default]
    Main,
    EnterDelete(EditorState),
    Shuffle(ShuffleState),
    Reverse(ReverseState),
    TrackProgress(TrackState),
    TestYourself(TestState),
    SaveMenu,
    SaveText(String),
    SaveFile(SaveFileState),
}

/// Main application state
pub struct MyApp {
    show_confirmation_dialog: bool,
    allowed_to_close: bool,
    deck: Deck,
    config: AppConfig,
    rng: StdRng,
    current_screen: AppScreen,
    feedback: Option<(String, Color32, f64)>,
}

fn to_color32(color: Rgb) -> Color32 {
    Color32::from_rgb(color.r, color.g, color.b)
}

impl eframe::App for MyApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let mut screen = std::mem::take(&mut self.current_screen);
        let next = egui::CentralPanel::default()
            .show(ctx, |ui| match &mut screen {
                AppScreen::Main => self.render_main_screen(ui),
                AppScreen::EnterDelete(editor) => self.render_editor_screen(ui, editor),
                AppScreen::Shuffle(state) => self.render_shuffle_screen(ui, state),
                AppScreen::Reverse(state) => self.render_reverse_screen(ui, state),
                AppScreen::TrackProgress(state) => self.render_track_screen(ui, state),
                AppScreen::TestYourself(state) => self.render_test_screen(ui, state),
                AppScreen::SaveMenu => self.render_save_menu(ui),
                AppScreen::SaveText(content) => render_text_screen(ui, content),
                AppScreen::SaveFile(state) => self.render_save_file_screen(ui, state),
            })
            .inner;
        self.current_screen = next.unwrap_or(screen);

        // Handle window close requests with confirmation dialog
        if ctx.input(|i| i.viewport().close_requested()) && !self.allowed_to_close {
            ctx.send_viewport_cmd(egui::ViewportCommand::CancelClose);
            self.show_confirmation_dialog = true;
        }

        if self.show_confirmation_dialog {
            egui::Window::new("Do you want to quit?")
                .collapsible(false)
                .resizable(false)
                .show(ctx, |ui| {
                    ui.horizontal(|ui| {
                        if ui.button("No").clicked() {
                            self.show_confirmation_dialog = false;
                            self.allowed_to_close = false;
                        }

                        if ui.button("Yes").clicked() {
                            self.show_confirmation_dialog = false;
                            self.allowed_to_close = true;
                            ui.ctx().send_viewport_cmd(egui::ViewportCommand::Close);
                        }
                    });
                });
        }
    }
}

impl MyApp {
    pub fn new(deck: Deck, config: AppConfig) -> Self {
        Self {
            show_confirmation_dialog: false,
            allowed_to_close: false,
            deck,
            config,
            rng: StdRng::from_entropy(),
            current_screen: AppScreen::Main,
            feedback: None,
        }
    }

    fn show_feedback(&mut self, ui: &egui::Ui, message: impl Into<String>, color: Color32) {
        let now = ui.input(|i| i.time);
        self.feedback = Some((message.into(), color, now + FEEDBACK_SECONDS));
    }

    fn render_feedback(&mut self, ui: &mut egui::Ui) {
        let now = ui.input(|i| i.time);
        if matches!(&self.feedback, Some((_, _, until)) if *until <= now) {
            self.feedback = None;
        }
        if let Some((message, color, _)) = &self.feedback {
            ui.colored_label(*color, message);
            ui.ctx().request_repaint();
        }
    }

    /// Writes the deck file, reporting failures on screen.
    /// Applies an edit, saves the deck file and shows the outcome.
    fn apply_edit(&mut self, ui: &egui::Ui, edit: DeckEdit<'_>) -> EditOutcome {
        let outcome = json::edit_and_save(&mut self.deck, edit, &self.config.deck_path);
        let color = if outcome.is_saved() {
            FEEDBACK_GREEN
        } else {
            FEEDBACK_RED
        };
        self.show_feedback(ui, outcome.message(), color);
        outcome
    }

    /// Renders the main menu. Every action but Enter/Delete needs at least one card.
    fn render_main_screen(&mut self, ui: &mut egui::Ui) -> Option<AppScreen> {
        let mut next = None;
        ui.vertical_centered(|ui| {
            ui.heading("Flashcard App");
            ui.label(format!("{} flashcards", self.deck.len()));
            self.render_feedback(ui);
            ui.add_space(20.0);

            let button = |ui: &mut egui::Ui, text: &str| {
                ui.add_sized([300.0, 50.0], egui::Button::new(text)).clicked()
            };

            if button(ui, "Enter/Delete Flashcards") {
                next = Some(AppScreen::EnterDelete(EditorState::default()));
            }
            let mut wanted = None;
            if button(ui, "Shuffle Flashcards") {
                wanted = Some(MenuAction::Shuffle);
            }
            if button(ui, "Reverse Flashcards") {
                wanted = Some(MenuAction::Reverse);
            }
            if button(ui, "Track Progress") {
                wanted = Some(MenuAction::TrackProgress);
            }
            if button(ui, "Test Yourself") {
                wanted = Some(MenuAction::TestYourself);
            }
            if button(ui, "Save Flashcards") {
                wanted = Some(MenuAction::Save);
            }
            if button(ui, "Exit") {
                self.allowed_to_close = true;
                ui.ctx().send_viewport_cmd(egui::ViewportCommand::Close);
            }

            if let Some(action) = wanted {
                if self.deck.is_empty() {
                    self.show_feedback(ui, "Please enter flashcards first!", FEEDBACK_RED);
                } else {
                    next = self.start_action(ui, action);
                }
            }
        });
        next
    }

    fn start_action(&mut self, ui: &egui::Ui, action: MenuAction) -> Option<AppScreen> {
        let now = ui.input(|i| i.time);
        match action {
            MenuAction::Shuffle => {
                self.deck.shuffle_with_colors(&mut self.rng);
                let animation = ShuffleAnimation::new(self.deck.len(), (100.0, 200.0), &mut self.rng);
                Some(AppScreen::Shuffle(ShuffleState {
                    animation,
                    started_at: now,
                }))
            }
            MenuAction::Reverse => Some(AppScreen::Reverse(ReverseState {
                card_index: 0,
                flip: FlipAnimation::default(),
            })),
            MenuAction::TrackProgress => {
                self.deck.ensure_colors(&mut self.rng);
                match TrackSession::new(&self.deck) {
                    Ok(session) => Some(AppScreen::TrackProgress(TrackState {
                        session,
                        flip: None,
                        scroll: 0.0,
                        max_scroll: 0.0,
                        summary_until: None,
                    })),
                    Err(e) => {
                        self.show_feedback(ui, e.to_string(), FEEDBACK_RED);
                        None
                    }
                }
            }
            MenuAction::TestYourself => match TestSession::new(&self.deck) {
                Ok(session) => Some(AppScreen::TestYourself(TestState {
                    session,
                    input: String::new(),
                    revealed: None,
                })),
                Err(e) => {
                    self.show_feedback(ui, e.to_string(), FEEDBACK_RED);
                    None
                }
            },
            MenuAction::Save => Some(AppScreen::SaveMenu),
        }
    }

    /// Lists the cards and lets the user add or remove them. Each change is saved at once.
    fn render_editor_screen(
        &mut self,
        ui: &mut egui::Ui,
        editor: &mut EditorState,
    ) -> Option<AppScreen> {
        ui.heading("Flashcards Entered:");
        self.render_feedback(ui);

        egui::ScrollArea::vertical()
            .id_source("flashcards_list")
            .max_height(250.0)
            .show(ui, |ui| {
                for (i, card) in self.deck.flashcards.iter().enumerate() {
                    ui.label(format!("{}. {} → {}", i + 1, card.front, card.back));
                }
            });

        ui.separator();

        ui.horizontal(|ui| {
            ui.label("Front:");
            ui.text_edit_singleline(&mut editor.front);
        });
        ui.horizontal(|ui| {
            ui.label("Back:");
            ui.text_edit_singleline(&mut editor.back);
        });
        if ui.button("Add Flashcard").clicked() {
            let edit = DeckEdit::Add {
                front: std::mem::take(&mut editor.front),
                back: std::mem::take(&mut editor.back),
            };
            self.apply_edit(ui, edit);
        }

        ui.separator();

        ui.horizontal(|ui| {
            ui.label("Numbers to remove:");
            ui.text_edit_singleline(&mut editor.remove_input);
        });
        if ui.button("Remove Flashcard").clicked() && !self.deck.is_empty() {
            let input = std::mem::take(&mut editor.remove_input);
            if let EditOutcome::Rejected(_) = self.apply_edit(ui, DeckEdit::Remove(&input)) {
                editor.remove_input = input;
            }
        }

        ui.add_space(20.0);
        if ui.button("Return").clicked() {
            return Some(AppScreen::Main);
        }
        None
    }

    fn render_shuffle_screen(
        &mut self,
        ui: &mut egui::Ui,
        state: &mut ShuffleState,
    ) -> Option<AppScreen> {
        let elapsed = ui.input(|i| i.time) - state.started_at;
        if ShuffleAnimation::phase(elapsed) == ShufflePhase::Done {
            self.show_feedback(ui, "Flashcards shuffled!", FEEDBACK_GREEN);
            return Some(AppScreen::Main);
        }

        let origin = ui.min_rect().min;
        let painter = ui.painter();
        let size = CARD_SIZE * 0.5;
        // Bottom of the pile first so the front card ends up on top
        for (i, card) in self.deck.flashcards.iter().enumerate().rev() {
            let (x, y) = state.animation.position(i, elapsed);
            let rect = egui::Rect::from_min_size(origin + egui::vec2(x, y), size);
            painter.rect_filled(rect, 4.0, to_color32(card.color.unwrap_or(BLACK)));
            painter.rect_stroke(rect, 4.0, Stroke::new(2.0, Color32::WHITE));
        }
        ui.ctx().request_repaint();
        None
    }

    /// Squeezes each card in turn while its colour turns, then swaps every card's sides.
    fn render_reverse_screen(
        &mut self,
        ui: &mut egui::Ui,
        state: &mut ReverseState,
    ) -> Option<AppScreen> {
        if state.card_index >= self.deck.len() {
            self.deck.reverse_sides();
            self.deck.rotate_colors(0.5);
            info!("Reverse animation finished");
            self.show_feedback(ui, "Flashcards reversed!", FEEDBACK_GREEN);
            return Some(AppScreen::Main);
        }
        let card = &self.deck.flashcards[state.card_index];

        let base = card.color.unwrap_or(BLACK);
        let color = base.rotate_hue(0.5 * state.flip.progress());
        let text = if state.flip.shows_old_face() {
            &card.front
        } else {
            &card.back
        };
        draw_card(ui, text, color, state.flip.width_factor(), 0.0);

        if state.flip.advance() {
            state.card_index += 1;
            state.flip = FlipAnimation::default();
        }
        ui.ctx().request_repaint();
        None
    }

    fn render_track_screen(&mut self, ui: &mut egui::Ui, state: &mut TrackState) -> Option<AppScreen> {
        let now = ui.input(|i| i.time);

        if let Some(until) = state.summary_until {
            let (known, unknown) = state.session.round_summary();
            ui.vertical_centered(|ui| {
                ui.add_space(200.0);
                ui.heading(format!("Review complete! Known: {known} | Unknown: {unknown}"));
            });
            if now < until {
                ui.ctx().request_repaint();
                return None;
            }
            state.summary_until = None;
        }

        match state.session.stage() {
            TrackStage::Presenting => {
                ui.vertical_centered(|ui| {
                    ui.label("Track Progress: SPACE to flip");
                    ui.label(state.session.phase_message());
                    let (position, total) = state.session.position();
                    ui.label(format!("Card {position} of {total}"));
                });

                let Some(card) = state.session.current_card() else {
                    return None;
                };
                let color = card.color.unwrap_or(BLACK);
                match &mut state.flip {
                    Some(flip) => {
                        let text = if flip.shows_old_face() {
                            card.visible_text().to_string()
                        } else {
                            other_face(card).to_string()
                        };
                        draw_card(ui, &text, color, flip.width_factor(), 0.0);
                        ui.ctx().request_repaint();
                        if flip.advance() {
                            state.flip = None;
                            log_refused("Flip", state.session.flip_current());
                        }
                        return None;
                    }
                    None => {
                        let text = card.visible_text().to_string();
                        state.max_scroll = draw_card(ui, &text, color, 1.0, state.scroll);
                    }
                }

                let mut decision = None;
                ui.horizontal(|ui| {
                    if ui
                        .add(egui::Button::new("Known").fill(FEEDBACK_GREEN))
                        .clicked()
                    {
                        decision = Some(Decision::Known);
                    }
                    if ui
                        .add(egui::Button::new("Unknown").fill(FEEDBACK_RED))
                        .clicked()
                    {
                        decision = Some(Decision::Unknown);
                    }
                });

                let (flip, left, right, up, down, wheel) = ui.input(|i| {
                    (
                        i.key_pressed(Key::Space),
                        i.key_pressed(Key::ArrowLeft),
                        i.key_pressed(Key::ArrowRight),
                        i.key_pressed(Key::ArrowUp),
                        i.key_pressed(Key::ArrowDown),
                        i.smooth_scroll_delta.y,
                    )
                });
                if left {
                    decision = Some(Decision::Known);
                } else if right {
                    decision = Some(Decision::Unknown);
                }
                let mut delta = -wheel;
                if up {
                    delta -= SCROLL_STEP;
                }
                if down {
                    delta += SCROLL_STEP;
                }
                if delta != 0.0 {
                    state.scroll = layout::clamp_scroll(state.scroll, delta, state.max_scroll);
                }

                if let Some(decision) = decision {
                    if log_refused("Decision", state.session.decide(decision)).is_some() {
                        state.session.paint_deck(&mut self.deck);
                        state.scroll = 0.0;
                        if state.session.stage() != TrackStage::Presenting {
                            state.summary_until = Some(now + SUMMARY_SECONDS);
                        }
                    }
                } else if flip {
                    state.flip = Some(FlipAnimation::default());
                }
            }
            TrackStage::RetryPrompt => {
                let mut answer = None;
                ui.vertical_centered(|ui| {
                    ui.add_space(200.0);
                    ui.label("Retry unknown flashcards? (Y/N)");
                    ui.horizontal(|ui| {
                        if ui.button("Yes").clicked() {
                            answer = Some(true);
                        }
                        if ui.button("No").clicked() {
                            answer = Some(false);
                        }
                    });
                });
                ui.input(|i| {
                    if i.key_pressed(Key::Y) {
                        answer = Some(true);
                    } else if i.key_pressed(Key::N) {
                        answer = Some(false);
                    }
                });
                if let Some(retry) = answer {
                    log_refused("Retry answer", state.session.answer_retry(retry));
                }
            }
            TrackStage::Finished => {
                let report = state.session.report().unwrap_or_default();
                ui.heading(format!(
                    "Known: {} | Unknown: {}",
                    report.known.len(),
                    report.unknown.len()
                ));
                if !report.unknown.is_empty() {
                    ui.label("Still to learn:");
                    egui::ScrollArea::vertical()
                        .id_source("unknown_list")
                        .max_height(300.0)
                        .show(ui, |ui| {
                            for card in &report.unknown {
                                ui.label(format!("{} → {}", card.front, card.back));
                            }
                        });
                }
                if ui.button("Back to Main Screen").clicked() {
                    return Some(AppScreen::Main);
                }
            }
        }
        None
    }

    fn render_test_screen(&mut self, ui: &mut egui::Ui, state: &mut TestState) -> Option<AppScreen> {
        let now = ui.input(|i| i.time);

        if let Some((expected, until)) = &state.revealed {
            ui.vertical_centered(|ui| {
                ui.add_space(200.0);
                ui.heading(format!("Correct Answer: {expected}"));
            });
            let skip = ui.button("Continue").clicked();
            if now < *until && !skip {
                ui.ctx().request_repaint();
                return None;
            }
            state.revealed = None;
            log_refused("Acknowledge", state.session.acknowledge());
        }

        match state.session.stage() {
            TestStage::ChoosingSize => {
                ui.label("Enter the number of flashcards to test:");
                if let Some(message) = &state.session.feedback {
                    ui.colored_label(FEEDBACK_RED, message);
                }
                let response = ui.text_edit_singleline(&mut state.input);
                let submitted = (response.lost_focus() && ui.input(|i| i.key_pressed(Key::Enter)))
                    || ui.button("Start").clicked();
                if submitted {
                    let input = std::mem::take(&mut state.input);
                    log_refused("Sample size", state.session.choose_sample_size(&input, &mut self.rng));
                }
            }
            TestStage::Answering => {
                let (current, total) = state.session.progress();
                ui.label(format!("Question {current} of {total}"));
                if let Some(question) = state.session.question() {
                    ui.heading(question);
                }
                ui.add_space(20.0);
                ui.label("Your Answer:");
                let response = ui.text_edit_singleline(&mut state.input);
                response.request_focus();
                let submitted = (response.lost_focus() && ui.input(|i| i.key_pressed(Key::Enter)))
                    || ui.button("Submit").clicked();
                if submitted {
                    let answer = std::mem::take(&mut state.input);
                    if let Ok(Verdict::Incorrect { expected }) = state.session.submit_answer(&answer) {
                        state.revealed = Some((expected, now + FEEDBACK_SECONDS));
                    }
                }
            }
            TestStage::Revealing => {}
            TestStage::Finished => {
                if let Some(result) = state.session.result() {
                    ui.vertical_centered(|ui| {
                        ui.add_space(200.0);
                        ui.heading(format!(
                            "You scored {} out of {}",
                            result.score, result.attempted
                        ));
                    });
                }
                if ui.button("Back to Main Screen").clicked() {
                    return Some(AppScreen::Main);
                }
            }
        }
        None
    }

    fn render_save_menu(&mut self, ui: &mut egui::Ui) -> Option<AppScreen> {
        let mut next = None;
        ui.vertical_centered(|ui| {
            ui.heading("Save Flashcards");
            ui.add_space(40.0);
            if ui
                .add_sized([300.0, 50.0], egui::Button::new("Display for Copy/Paste"))
                .clicked()
            {
                next = Some(AppScreen::SaveText(text::format_text(&self.deck)));
            }
            if ui
                .add_sized([300.0, 50.0], egui::Button::new("Save to File"))
                .clicked()
            {
                next = Some(AppScreen::SaveFile(SaveFileState {
                    session: SaveFileSession::new(&self.config.export_dir),
                    name_input: String::new(),
                }));
            }
            if ui.button("Back").clicked() {
                next = Some(AppScreen::Main);
            }
        });
        next
    }

    fn render_save_file_screen(
        &mut self,
        ui: &mut egui::Ui,
        state: &mut SaveFileState,
    ) -> Option<AppScreen> {
        ui.heading("Save Flashcards as Text File");
        ui.add_space(10.0);

        match state.session.stage().clone() {
            SaveStage::SelectFile => {
                ui.label("Select a file to save your flashcards:");
                let mut picked = None;
                for (i, option) in state.session.options().iter().enumerate() {
                    if ui.add_sized([400.0, 40.0], egui::Button::new(option)).clicked() {
                        picked = Some(i);
                    }
                }
                if let Some(i) = picked {
                    log_refused("File selection", state.session.select(i));
                }
                if ui.button("Browse…").clicked() {
                    // Open file save dialog
                    if let Some(path) = rfd::FileDialog::new()
                        .set_directory(&self.config.export_dir)
                        .set_file_name(text::text_file_name(""))
                        .add_filter("Text files", &["txt"])
                        .save_file()
                    {
                        state.session.save_to_path(&path, &self.deck);
                    }
                }
            }
            SaveStage::SelectMode { file } => {
                ui.label(format!("Selected File: {}", file.display()));
                ui.label("Choose mode:");
                let mut mode = None;
                ui.horizontal(|ui| {
                    if ui.button("Append").clicked() {
                        mode = Some(WriteMode::Append);
                    }
                    if ui.button("Overwrite").clicked() {
                        mode = Some(WriteMode::Overwrite);
                    }
                });
                if let Some(mode) = mode {
                    log_refused("Write mode", state.session.choose_mode(mode, &self.deck));
                }
            }
            SaveStage::NameNewFile => {
                ui.label("Enter new file name (without extension):");
                let response = ui.text_edit_singleline(&mut state.name_input);
                let submitted = (response.lost_focus() && ui.input(|i| i.key_pressed(Key::Enter)))
                    || ui.button("Save").clicked();
                if submitted {
                    let name = std::mem::take(&mut state.name_input);
                    log_refused("File name", state.session.submit_name(&name, &self.deck));
                }
            }
            SaveStage::Finished { success, message } => {
                let color = if success { FEEDBACK_GREEN } else { FEEDBACK_RED };
                self.show_feedback(ui, message, color);
                return Some(AppScreen::Main);
            }
        }

        ui.add_space(20.0);
        if ui.button("Cancel").clicked() {
            return Some(AppScreen::Main);
        }
        None
    }
}

/// The screens only offer input their stage accepts, so a refusal is a bug worth logging.
fn log_refused<T>(what: &str, result: Result<T, SessionError>) -> Option<T> {
    result.map_err(|e| warn!("{what} refused by session: {e}")).ok()
}

fn other_face(card: &Flashcard) -> &str {
    if card.showing_front {
        &card.back
    } else {
        &card.front
    }
}

/// Read-only, selectable text export. Escape or the Return button goes back to the menu.
fn render_text_screen(ui: &mut egui::Ui, content: &str) -> Option<AppScreen> {
    ui.heading("Flashcards Text - Press Escape to return");
    egui::ScrollArea::vertical()
        .id_source("flashcards_text")
        .max_height(450.0)
        .show(ui, |ui| {
            let mut view = content;
            ui.add(egui::TextEdit::multiline(&mut view).desired_width(f32::INFINITY));
        });
    if ui.button("Return").clicked() || ui.input(|i| i.key_pressed(Key::Escape)) {
        return Some(AppScreen::Main);
    }
    None
}

/// Paints one card: coloured box, white border, wrapped white text centred in it.
/// `width_factor` squeezes the box horizontally around its centre for flip frames.
/// Returns how far the text can be scrolled.
fn draw_card(ui: &mut egui::Ui, text: &str, color: Rgb, width_factor: f32, scroll: f32) -> f32 {
    let (outer, _) = ui.allocate_exact_size(CARD_SIZE, Sense::hover());
    let width = (CARD_SIZE.x * width_factor).max(1.0);
    let rect = egui::Rect::from_center_size(outer.center(), egui::vec2(width, CARD_SIZE.y));

    let font_id = FontId::proportional(24.0);
    let lines = ui.fonts(|fonts| {
        layout::wrap_lines(text, width, |s| {
            fonts
                .layout_no_wrap(s.to_owned(), font_id.clone(), Color32::WHITE)
                .size()
                .x
        })
    });
    let line_height = ui.fonts(|fonts| fonts.row_height(&font_id));

    let painter = ui.painter_at(rect);
    painter.rect_filled(rect, 0.0, to_color32(color));
    painter.rect_stroke(rect, 0.0, Stroke::new(3.0, Color32::WHITE));

    let total = lines.len() as f32 * line_height;
    let mut y = rect.top() + layout::text_start_offset(total, rect.height(), scroll);
    for line in lines {
        painter.text(
            egui::pos2(rect.center().x, y),
            Align2::CENTER_TOP,
            line,
            font_id.clone(),
            Color32::WHITE,
        );
        y += line_height;
    }
    layout::max_scroll(total, rect.height())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_refused_passes_accepted_input_through() {
        assert_eq!(log_refused("Sample size", Ok::<_, SessionError>(true)), Some(true));
        assert_eq!(
            log_refused::<()>("Flip", Err(SessionError::WrongStage("flip a card"))),
            None
        );
    }

    #[test]
    fn test_refused_session_input_is_not_applied() {
        let mut deck = Deck::default();
        deck.add("cat", "gato");
        let mut session = TrackSession::new(&deck).unwrap();
        assert!(log_refused("Decision", session.decide(Decision::Known)).is_some());
        assert!(log_refused("Flip", session.flip_current()).is_none());
        assert!(log_refused("Retry answer", session.answer_retry(true)).is_none());
        assert!(session.is_completed());
    }
}
