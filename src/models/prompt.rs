use serde::{Deserialize, Serialize};

/// Inclusive word-count target for a writing task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordRange {
    pub low: usize,
    pub high: usize,
}

impl WordRange {
    pub const ESSAY: WordRange = WordRange {
        low: 200,
        high: 300,
    };

    pub fn new(low: usize, high: usize) -> Self {
        Self { low, high }
    }
}

impl Default for WordRange {
    fn default() -> Self {
        Self::ESSAY
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WritingPrompt {
    pub title: String,
    pub task: String,
    pub tips: Vec<String>,
    #[serde(default)]
    pub keywords: Vec<String>,
    #[serde(default)]
    pub word_range: WordRange,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListeningExercise {
    pub title: String,
    pub transcript: String,
    pub question: String,
    pub keywords: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_writing_prompt_defaults() {
        let json = r#"{"title": "Essay", "task": "Write.", "tips": []}"#;
        let prompt: WritingPrompt = serde_json::from_str(json).unwrap();
        assert!(prompt.keywords.is_empty());
        assert_eq!(prompt.word_range, WordRange::ESSAY);
    }

    #[test]
    fn test_custom_word_range() {
        let json = r#"{
            "title": "Summary",
            "task": "Summarize.",
            "tips": ["Be brief."],
            "keywords": ["main"],
            "word_range": {"low": 5, "high": 75}
        }"#;
        let prompt: WritingPrompt = serde_json::from_str(json).unwrap();
        assert_eq!(prompt.word_range, WordRange::new(5, 75));
    }
}
