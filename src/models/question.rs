use serde::{Deserialize, Serialize};

/// A reading question with a single correct option.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MultipleChoiceQuestion {
    pub prompt: String,
    pub options: Vec<String>,
    /// Zero-based index into `options`.
    pub answer_index: usize,
    pub explanation: String,
}

impl MultipleChoiceQuestion {
    pub fn is_correct(&self, choice: usize) -> bool {
        choice == self.answer_index
    }
}
