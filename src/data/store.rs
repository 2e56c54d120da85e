use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::{ListeningExercise, MultipleChoiceQuestion, Section, WritingPrompt};

/// Content that violates the store's invariants.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ContentError {
    #[error("{0} collection must contain at least one item")]
    Empty(Section),
    #[error(
        "reading question {question} has answer_index {answer_index} but only {options} options"
    )]
    AnswerOutOfRange {
        question: usize,
        answer_index: usize,
        options: usize,
    },
}

/// Wraps an arbitrary external index into `0..len`.
///
/// Negative values count back from the end, so navigation stays in bounds
/// no matter what a query string or key handler hands us. `len` must be
/// non-zero, which `ContentStore` guarantees for its own collections.
pub fn wrap_index(index: i64, len: usize) -> usize {
    debug_assert!(len > 0);
    index.rem_euclid(len as i64) as usize
}

/// The index after `index`, wrapping at `len`.
pub fn next_index(index: usize, len: usize) -> usize {
    (index % len + 1) % len
}

/// Read-only practice content for all four sections.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentStore {
    speaking_prompts: Vec<String>,
    writing_prompts: Vec<WritingPrompt>,
    listening_exercises: Vec<ListeningExercise>,
    reading_questions: Vec<MultipleChoiceQuestion>,
}

impl ContentStore {
    pub fn new(
        speaking_prompts: Vec<String>,
        writing_prompts: Vec<WritingPrompt>,
        listening_exercises: Vec<ListeningExercise>,
        reading_questions: Vec<MultipleChoiceQuestion>,
    ) -> Result<Self, ContentError> {
        let store = Self::from_trusted(
            speaking_prompts,
            writing_prompts,
            listening_exercises,
            reading_questions,
        );
        store.validate()?;
        Ok(store)
    }

    /// Builds a store without validating it. Reserved for tables whose
    /// validity is checked by tests.
    pub(super) fn from_trusted(
        speaking_prompts: Vec<String>,
        writing_prompts: Vec<WritingPrompt>,
        listening_exercises: Vec<ListeningExercise>,
        reading_questions: Vec<MultipleChoiceQuestion>,
    ) -> Self {
        Self {
            speaking_prompts,
            writing_prompts,
            listening_exercises,
            reading_questions,
        }
    }

    /// Checks every collection is non-empty and every answer index is in range.
    pub fn validate(&self) -> Result<(), ContentError> {
        for section in Section::ALL {
            if self.len(section) == 0 {
                return Err(ContentError::Empty(section));
            }
        }

        for (index, question) in self.reading_questions.iter().enumerate() {
            if question.answer_index >= question.options.len() {
                return Err(ContentError::AnswerOutOfRange {
                    question: index,
                    answer_index: question.answer_index,
                    options: question.options.len(),
                });
            }
        }

        Ok(())
    }

    pub fn len(&self, section: Section) -> usize {
        match section {
            Section::Speaking => self.speaking_prompts.len(),
            Section::Writing => self.writing_prompts.len(),
            Section::Listening => self.listening_exercises.len(),
            Section::Reading => self.reading_questions.len(),
        }
    }

    /// Normalizes `index` against the size of `section`'s collection.
    pub fn wrap(&self, section: Section, index: i64) -> usize {
        wrap_index(index, self.len(section))
    }

    pub fn next(&self, section: Section, index: usize) -> usize {
        next_index(index, self.len(section))
    }

    pub fn speaking_prompt(&self, index: usize) -> &str {
        &self.speaking_prompts[index % self.speaking_prompts.len()]
    }

    pub fn writing_prompt(&self, index: usize) -> &WritingPrompt {
        &self.writing_prompts[index % self.writing_prompts.len()]
    }

    pub fn listening_exercise(&self, index: usize) -> &ListeningExercise {
        &self.listening_exercises[index % self.listening_exercises.len()]
    }

    pub fn reading_question(&self, index: usize) -> &MultipleChoiceQuestion {
        &self.reading_questions[index % self.reading_questions.len()]
    }
}
