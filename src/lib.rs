//! # pte-practice
//!
//! Practice tool for the PTE English test: speaking prompts, writing tasks,
//! listening summaries and reading questions, scored with simple heuristics.
//!
//! The same content and evaluator back two front-ends: a web app ([`web`])
//! and an interactive terminal app ([`Practice::run`]).
//!
//! ## Usage
//!
//! ```rust,no_run
//! use pte_practice::{Practice, PracticeError};
//!
//! fn main() -> Result<(), PracticeError> {
//!     // Use the built-in content tables
//!     let practice = Practice::builtin();
//!
//!     // Run the practice session in the terminal
//!     practice.run()?;
//!
//!     Ok(())
//! }
//! ```
//!
//! Scoring can be used on its own:
//!
//! ```rust
//! use pte_practice::evaluator::keyword_coverage;
//!
//! assert_eq!(keyword_coverage("GREEN URBAN", &["green", "urban"]), 2);
//! ```

mod app;
pub mod config;
mod data;
pub mod evaluator;
mod models;
pub mod terminal;
mod ui;
pub mod web;

use std::io;
use std::path::Path;
use std::sync::Arc;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use thiserror::Error;
use tracing::info;

pub use app::{App, Screen};
pub use config::{Config, ConfigError};
pub use data::{
    builtin, load_content_from_json, next_index, wrap_index, ContentError, ContentStore,
    LoadError,
};
pub use evaluator::Feedback;
pub use models::{
    ListeningExercise, MultipleChoiceQuestion, Section, WordRange, WritingPrompt, HOME_TIP,
};
pub use web::WebError;

/// Error type for practice operations.
#[derive(Debug, Error)]
pub enum PracticeError {
    #[error("failed to load content: {0}")]
    Load(#[from] LoadError),
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),
    #[error("web app error: {0}")]
    Web(#[from] WebError),
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

/// Loads the content named in the config, or the built-in tables.
pub fn load_content(config: &Config) -> Result<Arc<ContentStore>, LoadError> {
    match &config.content {
        Some(path) => load_content_from_json(path).map(Arc::new),
        None => {
            info!("Using built-in practice content");
            Ok(Arc::new(builtin().clone()))
        }
    }
}

/// Runs the web app until Ctrl+C.
pub async fn serve_web(
    config: &Config,
    content: Arc<ContentStore>,
) -> Result<(), PracticeError> {
    let state = web::WebState::new(content)?;
    web::serve(&config.bind_address(), state).await?;
    Ok(())
}

/// A practice session that can be run in the terminal.
pub struct Practice {
    app: App,
}

impl Practice {
    pub fn new(content: Arc<ContentStore>) -> Self {
        Self {
            app: App::new(content),
        }
    }

    /// Practice with the content that ships with the crate.
    pub fn builtin() -> Self {
        Self::new(Arc::new(builtin().clone()))
    }

    /// Load a practice session from a JSON content file.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use pte_practice::Practice;
    ///
    /// let practice = Practice::from_json("content.json").expect("Failed to load content");
    /// ```
    pub fn from_json<P: AsRef<Path>>(path: P) -> Result<Self, PracticeError> {
        let content = load_content_from_json(path)?;
        Ok(Self::new(Arc::new(content)))
    }

    /// Run the session in the terminal.
    ///
    /// This takes over the terminal, shows the section menu, and returns
    /// when the user quits.
    pub fn run(mut self) -> Result<(), PracticeError> {
        let mut session = terminal::TerminalSession::start()?;
        run_event_loop(&mut session, &mut self.app)
    }

    /// Get a reference to the underlying app for custom handling.
    pub fn app(&self) -> &App {
        &self.app
    }

    /// Get a mutable reference to the underlying app for custom handling.
    pub fn app_mut(&mut self) -> &mut App {
        &mut self.app
    }
}

fn run_event_loop(
    terminal: &mut terminal::AppTerminal,
    app: &mut App,
) -> Result<(), PracticeError> {
    loop {
        terminal.draw(|frame| ui::render(frame, app))?;

        if let Event::Key(key) = event::read()? {
            if key.kind != KeyEventKind::Press {
                continue;
            }

            if handle_key(app, key) {
                break;
            }
        }
    }

    info!("Practice session ended");
    Ok(())
}

/// Applies one key press. Returns true if the app should exit.
pub fn handle_key(app: &mut App, key: KeyEvent) -> bool {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    if ctrl && key.code == KeyCode::Char('c') {
        return true;
    }

    match app.screen {
        Screen::Menu => handle_menu_input(app, key.code),
        Screen::Practice(Section::Speaking) => handle_speaking_input(app, key.code),
        Screen::Practice(Section::Writing | Section::Listening) => {
            handle_editor_input(app, key.code, ctrl)
        }
        Screen::Practice(Section::Reading) => handle_reading_input(app, key.code),
    }
}

fn handle_menu_input(app: &mut App, key: KeyCode) -> bool {
    match key {
        KeyCode::Up | KeyCode::Char('k') => {
            app.select_previous_section();
            false
        }
        KeyCode::Down | KeyCode::Char('j') => {
            app.select_next_section();
            false
        }
        KeyCode::Enter => {
            app.open_selected_section();
            false
        }
        KeyCode::Char(c @ '1'..='4') => {
            let position = c as usize - '1' as usize;
            app.open_section(Section::ALL[position]);
            false
        }
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => true,
        _ => false,
    }
}

fn handle_speaking_input(app: &mut App, key: KeyCode) -> bool {
    match key {
        KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Enter => app.advance(),
        KeyCode::Esc => app.back_to_menu(),
        _ => {}
    }
    false
}

fn handle_editor_input(app: &mut App, key: KeyCode, ctrl: bool) -> bool {
    match key {
        KeyCode::Char('e') if ctrl => app.evaluate(),
        KeyCode::Char('n') if ctrl => app.advance(),
        KeyCode::Char(_) if ctrl => {}
        KeyCode::Char(c) => app.input_push(c),
        KeyCode::Enter => app.input_push('\n'),
        KeyCode::Tab => app.input_push(' '),
        KeyCode::Backspace => app.input_pop(),
        KeyCode::Esc => app.back_to_menu(),
        _ => {}
    }
    false
}

fn handle_reading_input(app: &mut App, key: KeyCode) -> bool {
    match key {
        KeyCode::Up | KeyCode::Char('k') => app.select_previous_option(),
        KeyCode::Down | KeyCode::Char('j') => app.select_next_option(),
        KeyCode::Enter | KeyCode::Char(' ') => app.evaluate(),
        KeyCode::Char('n') | KeyCode::Char('N') => app.advance(),
        KeyCode::Esc => app.back_to_menu(),
        _ => {}
    }
    false
}
