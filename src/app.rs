use std::sync::Arc;

use tracing::debug;

use crate::data::ContentStore;
use crate::evaluator::{self, Feedback};
use crate::models::Section;

/// Which screen the terminal front-end is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Menu,
    Practice(Section),
}

pub struct App {
    pub screen: Screen,
    content: Arc<ContentStore>,
    menu_selection: usize,
    cursors: [usize; Section::ALL.len()],
    input: String,
    selected_option: usize,
    feedback: Option<Feedback>,
    status: Option<String>,
}

impl App {
    pub fn new(content: Arc<ContentStore>) -> Self {
        Self {
            screen: Screen::Menu,
            content,
            menu_selection: 0,
            cursors: [0; Section::ALL.len()],
            input: String::new(),
            selected_option: 0,
            feedback: None,
            status: None,
        }
    }

    pub fn content(&self) -> &ContentStore {
        &self.content
    }

    pub fn menu_selection(&self) -> usize {
        self.menu_selection
    }

    pub fn select_next_section(&mut self) {
        self.menu_selection = (self.menu_selection + 1) % Section::ALL.len();
    }

    pub fn select_previous_section(&mut self) {
        let len = Section::ALL.len();
        self.menu_selection = (self.menu_selection + len - 1) % len;
    }

    pub fn open_selected_section(&mut self) {
        self.open_section(Section::ALL[self.menu_selection]);
    }

    pub fn open_section(&mut self, section: Section) {
        debug!(%section, "Opening section");
        self.menu_selection = section.position();
        self.screen = Screen::Practice(section);
        self.reset_attempt();
    }

    pub fn back_to_menu(&mut self) {
        self.screen = Screen::Menu;
        self.reset_attempt();
    }

    /// The section being practiced, if any.
    pub fn section(&self) -> Option<Section> {
        match self.screen {
            Screen::Menu => None,
            Screen::Practice(section) => Some(section),
        }
    }

    /// Current item index within `section`.
    pub fn cursor(&self, section: Section) -> usize {
        self.cursors[section.position()]
    }

    /// Moves the current section to its next item, wrapping at the end.
    pub fn advance(&mut self) {
        let Some(section) = self.section() else {
            return;
        };
        let slot = &mut self.cursors[section.position()];
        *slot = self.content.next(section, *slot);
        debug!(%section, index = *slot, "Advanced to next item");
        self.reset_attempt();
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn input_push(&mut self, c: char) {
        self.input.push(c);
    }

    pub fn input_pop(&mut self) {
        self.input.pop();
    }

    pub fn selected_option(&self) -> usize {
        self.selected_option
    }

    fn option_count(&self) -> usize {
        let index = self.cursor(Section::Reading);
        self.content.reading_question(index).options.len().max(1)
    }

    pub fn select_next_option(&mut self) {
        self.selected_option = (self.selected_option + 1) % self.option_count();
    }

    pub fn select_previous_option(&mut self) {
        let count = self.option_count();
        self.selected_option = (self.selected_option + count - 1) % count;
    }

    pub fn feedback(&self) -> Option<&Feedback> {
        self.feedback.as_ref()
    }

    pub fn status(&self) -> Option<&str> {
        self.status.as_deref()
    }

    /// Scores the current attempt with the evaluator for the open section.
    pub fn evaluate(&mut self) {
        let Some(section) = self.section() else {
            return;
        };
        let index = self.cursor(section);

        let feedback = match section {
            Section::Speaking => return,
            Section::Writing => {
                let prompt = self.content.writing_prompt(index);
                evaluator::evaluate_writing_response(&self.input, prompt)
            }
            Section::Listening => {
                let exercise = self.content.listening_exercise(index);
                evaluator::evaluate_listening_summary(self.input.trim(), exercise)
            }
            Section::Reading => {
                let question = self.content.reading_question(index);
                evaluator::evaluate_reading_answer(self.selected_option, question)
            }
        };

        debug!(%section, index, lines = feedback.len(), "Evaluated attempt");
        self.status = Some(format!("{} feedback updated", section));
        self.feedback = Some(feedback);
    }

    fn reset_attempt(&mut self) {
        self.input.clear();
        self.selected_option = 0;
        self.feedback = None;
        self.status = None;
    }
}
