use anyhow::{Context, anyhow};
use clap::{Parser, Subcommand};
use flashcards_app::app::MyApp;
use flashcards_app::config::{AppConfig, DEFAULT_DECK_FILE};
use flashcards_app::console::ConsoleApp;
use flashcards_app::export::json::load_deck;
use log::info;
use std::io;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "flashcards", about = "Flashcard study helper", version)]
struct Cli {
    /// Deck file loaded and saved by the graphical front-end
    #[arg(long, default_value = DEFAULT_DECK_FILE)]
    deck: PathBuf,

    /// Directory for plain-text exports
    #[arg(long, default_value = ".")]
    export_dir: PathBuf,

    /// Log progress messages (RUST_LOG overrides)
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    mode: Option<Mode>,
}

#[derive(Subcommand, Clone, Copy, Default)]
enum Mode {
    /// Windowed app with menus and animations (default)
    #[default]
    Gui,
    /// Numbered menu in the terminal, in-memory deck
    Console,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let default_filter = if cli.verbose { "info" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();

    let config = AppConfig {
        deck_path: cli.deck,
        export_dir: cli.export_dir,
    };

    match cli.mode.unwrap_or_default() {
        Mode::Console => {
            let stdin = io::stdin();
            ConsoleApp::new(stdin.lock(), io::stdout())
                .run()
                .context("console session failed")?;
        }
        Mode::Gui => {
            let deck = load_deck(&config.deck_path);
            info!(
                "Loaded {} flashcards from '{}'",
                deck.len(),
                config.deck_path.display()
            );

            let options = eframe::NativeOptions {
                viewport: egui::ViewportBuilder::default().with_inner_size([800.0, 600.0]),
                ..Default::default()
            };
            eframe::run_native(
                "Flashcard App",
                options,
                Box::new(|_cc| Ok(Box::new(MyApp::new(deck, config)))),
            )
            .map_err(|e| anyhow!("window failed: {e}"))?;
        }
    }
    Ok(())
}
