//! Heuristic scoring of practice responses.
//!
//! Every function here is pure: the same input always yields byte-identical
//! feedback. Missing input is answered with an advisory line rather than an
//! error.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::models::{ListeningExercise, MultipleChoiceQuestion, WordRange, WritingPrompt};

/// Linking words used as a proxy for cohesion.
pub const CONNECTORS: [&str; 5] = ["because", "however", "therefore", "moreover", "although"];

/// Advisory word-count target for listening summaries. Not enforced.
pub const SUMMARY_WORD_RANGE: WordRange = WordRange { low: 30, high: 50 };

const MIN_CONNECTORS: usize = 2;
const INTRODUCTION_WORDS: usize = 5;

/// Ordered, human-readable feedback lines.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Feedback {
    lines: Vec<String>,
}

impl Feedback {
    pub fn single(line: impl Into<String>) -> Self {
        Self {
            lines: vec![line.into()],
        }
    }

    pub fn push(&mut self, line: impl Into<String>) {
        self.lines.push(line.into());
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Joins the lines with a presentation-specific separator.
    pub fn join(&self, separator: &str) -> String {
        self.lines.join(separator)
    }
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.join("\n"))
    }
}

/// Counts how many `keywords` occur in `text`, ignoring case.
pub fn keyword_coverage<S: AsRef<str>>(text: &str, keywords: &[S]) -> usize {
    let text = text.to_lowercase();
    keywords
        .iter()
        .filter(|keyword| contains_keyword(&text, keyword.as_ref()))
        .count()
}

fn contains_keyword(lowercase_text: &str, keyword: &str) -> bool {
    lowercase_text.contains(&keyword.to_lowercase())
}

/// Python-style `istitle`: at least one cased character, uppercase only
/// after uncased characters, lowercase only after cased ones.
fn is_title_case(word: &str) -> bool {
    let mut seen_cased = false;
    let mut previous_cased = false;

    for c in word.chars() {
        if c.is_uppercase() {
            if previous_cased {
                return false;
            }
            previous_cased = true;
            seen_cased = true;
        } else if c.is_lowercase() {
            if !previous_cased {
                return false;
            }
            previous_cased = true;
            seen_cased = true;
        } else {
            previous_cased = false;
        }
    }

    seen_cased
}

/// Scores an essay-style response on length, opening and cohesion.
pub fn evaluate_writing(text: &str, range: WordRange) -> Feedback {
    let words: Vec<&str> = text.split_whitespace().collect();
    let word_count = words.len();

    let mut feedback = Feedback::single(format!(
        "Word count: {} (aim for {}-{}).",
        word_count, range.low, range.high
    ));

    if word_count < range.low {
        feedback.push("Add more development to meet the minimum length.");
    } else if word_count > range.high {
        feedback.push("Trim unnecessary details to stay concise.");
    } else {
        feedback.push("Great length for PTE expectations.");
    }

    if words
        .iter()
        .take(INTRODUCTION_WORDS)
        .any(|word| is_title_case(word))
    {
        feedback.push("Strong start: your introduction looks clear.");
    } else {
        feedback.push("Begin with a clear thesis statement in the first line.");
    }

    if keyword_coverage(text, &CONNECTORS) < MIN_CONNECTORS {
        feedback.push("Use more linking words to show cohesion (e.g., 'however', 'therefore').");
    } else {
        feedback.push("Good cohesion with linking words.");
    }

    feedback
}

/// Scores a response to a specific writing prompt, including how many of the
/// prompt's core ideas it mentions.
pub fn evaluate_writing_response(text: &str, prompt: &WritingPrompt) -> Feedback {
    if text.trim().is_empty() {
        return Feedback::single("Please write your response before evaluating.");
    }

    let mut feedback = evaluate_writing(text, prompt.word_range);
    feedback.push(format!(
        "Keyword coverage: {}/{} core ideas mentioned.",
        keyword_coverage(text, &prompt.keywords),
        prompt.keywords.len()
    ));
    feedback
}

pub fn evaluate_listening_summary(text: &str, exercise: &ListeningExercise) -> Feedback {
    if text.trim().is_empty() {
        return Feedback::single("Write a short summary before evaluating.");
    }

    let words = text.split_whitespace().count();
    let total = exercise.keywords.len();
    let coverage = keyword_coverage(text, &exercise.keywords);

    let mut feedback = Feedback::single(format!(
        "Length: {} words (aim for {}-{}).",
        words, SUMMARY_WORD_RANGE.low, SUMMARY_WORD_RANGE.high
    ));
    feedback.push(format!("Keyword coverage: {}/{}.", coverage, total));

    if coverage == total {
        feedback.push("Great! You captured the main points.");
    } else {
        let lowercase = text.to_lowercase();
        let missing: Vec<&str> = exercise
            .keywords
            .iter()
            .map(String::as_str)
            .filter(|keyword| !contains_keyword(&lowercase, keyword))
            .collect();
        feedback.push(format!("Add details about: {}", missing.join(", ")));
    }

    feedback
}

pub fn evaluate_reading_answer(choice: usize, question: &MultipleChoiceQuestion) -> Feedback {
    let prefix = if question.is_correct(choice) {
        "Correct!"
    } else {
        "Not quite."
    };
    Feedback::single(format!("{} {}", prefix, question.explanation))
}

/// Like [`evaluate_reading_answer`], but answers a missing choice with advice.
/// Any number other than the answer index, negative ones included, is wrong.
pub fn evaluate_reading_submission(
    choice: Option<i64>,
    question: &MultipleChoiceQuestion,
) -> Feedback {
    match choice {
        Some(choice) => {
            let choice = usize::try_from(choice).unwrap_or(usize::MAX);
            evaluate_reading_answer(choice, question)
        }
        None => Feedback::single("Please select an answer before submitting."),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::builtin;

    /// A passage of exactly `words` words with a title-case opening and
    /// several linking words.
    fn passage(words: usize) -> String {
        let mut text = vec!["Cities"];
        for i in 1..words - 1 {
            text.push(if i % 40 == 1 { "however" } else { "grow" });
        }
        text.push("therefore");
        text.join(" ")
    }

    fn exercise(keywords: &[&str]) -> ListeningExercise {
        ListeningExercise {
            title: "Lecture".to_string(),
            transcript: "...".to_string(),
            question: "Summarize".to_string(),
            keywords: keywords.iter().map(|k| k.to_string()).collect(),
        }
    }

    #[test]
    fn test_keyword_coverage_empty_keywords() {
        let none: [&str; 0] = [];
        assert_eq!(keyword_coverage("anything at all", &none), 0);
        assert_eq!(keyword_coverage("", &none), 0);
    }

    #[test]
    fn test_keyword_coverage_case_insensitive() {
        assert_eq!(keyword_coverage("Green urban cooling", &["green", "urban"]), 2);
        assert_eq!(keyword_coverage("GREEN URBAN", &["green", "urban"]), 2);
        assert_eq!(keyword_coverage("green", &["GREEN", "Urban"]), 1);
    }

    #[test]
    fn test_keyword_coverage_is_substring_match() {
        assert_eq!(keyword_coverage("greenery everywhere", &["green"]), 1);
        assert_eq!(keyword_coverage("gren", &["green"]), 0);
    }

    #[test]
    fn test_is_title_case() {
        assert!(is_title_case("Cities"));
        assert!(is_title_case("I"));
        assert!(is_title_case("Hello,"));
        assert!(is_title_case("Well-Known"));
        assert!(!is_title_case("cities"));
        assert!(!is_title_case("USA"));
        assert!(!is_title_case("1990"));
        assert!(!is_title_case("Well-known"));
    }

    #[test]
    fn test_writing_within_target() {
        let text = passage(250);
        let feedback = evaluate_writing(&text, WordRange::ESSAY);

        assert_eq!(
            feedback.lines(),
            [
                "Word count: 250 (aim for 200-300).",
                "Great length for PTE expectations.",
                "Strong start: your introduction looks clear.",
                "Good cohesion with linking words.",
            ]
        );
    }

    #[test]
    fn test_writing_too_short() {
        let feedback = evaluate_writing("people say cities are hot", WordRange::ESSAY);

        assert_eq!(feedback.lines()[0], "Word count: 5 (aim for 200-300).");
        assert_eq!(
            feedback.lines()[1],
            "Add more development to meet the minimum length."
        );
        assert_eq!(
            feedback.lines()[2],
            "Begin with a clear thesis statement in the first line."
        );
        assert!(feedback.lines()[3].starts_with("Use more linking words"));
    }

    #[test]
    fn test_writing_too_long() {
        let text = passage(400);
        let feedback = evaluate_writing(&text, WordRange::ESSAY);
        assert_eq!(feedback.lines()[1], "Trim unnecessary details to stay concise.");
    }

    #[test]
    fn test_writing_range_is_inclusive() {
        for words in [200, 300] {
            let feedback = evaluate_writing(&passage(words), WordRange::ESSAY);
            assert_eq!(
                feedback.lines()[0],
                format!("Word count: {} (aim for 200-300).", words)
            );
            assert_eq!(feedback.lines()[1], "Great length for PTE expectations.");
        }

        let feedback = evaluate_writing(&passage(199), WordRange::ESSAY);
        assert_eq!(
            feedback.lines()[1],
            "Add more development to meet the minimum length."
        );

        let feedback = evaluate_writing(&passage(301), WordRange::ESSAY);
        assert_eq!(feedback.lines()[1], "Trim unnecessary details to stay concise.");
    }

    #[test]
    fn test_writing_title_case_only_checks_first_five_words() {
        let feedback = evaluate_writing("one two three four five Six", WordRange::ESSAY);
        assert_eq!(
            feedback.lines()[2],
            "Begin with a clear thesis statement in the first line."
        );
    }

    #[test]
    fn test_writing_ignores_extra_whitespace() {
        let feedback = evaluate_writing("  one \n\t two   ", WordRange::new(1, 3));
        assert_eq!(feedback.lines()[0], "Word count: 2 (aim for 1-3).");
        assert_eq!(feedback.lines()[1], "Great length for PTE expectations.");
    }

    #[test]
    fn test_writing_response_adds_keyword_line() {
        let prompt = builtin().writing_prompt(1);
        let text = "The introduction sets the scene. Each paragraph adds detail.";
        let feedback = evaluate_writing_response(text, prompt);

        assert_eq!(feedback.len(), 5);
        assert_eq!(
            feedback.lines()[4],
            "Keyword coverage: 2/3 core ideas mentioned."
        );
    }

    #[test]
    fn test_writing_response_blank() {
        let prompt = builtin().writing_prompt(0);
        let feedback = evaluate_writing_response("   \n", prompt);
        assert_eq!(
            feedback.lines(),
            ["Please write your response before evaluating."]
        );
    }

    #[test]
    fn test_listening_empty_summary() {
        for keywords in [&[][..], &["green", "urban"][..]] {
            let feedback = evaluate_listening_summary("", &exercise(keywords));
            assert_eq!(feedback.lines(), ["Write a short summary before evaluating."]);
        }
    }

    #[test]
    fn test_listening_full_coverage() {
        let ex = exercise(&["green", "cooling", "urban"]);
        let feedback = evaluate_listening_summary("Urban GREEN spaces provide cooling.", &ex);

        assert_eq!(
            feedback.lines(),
            [
                "Length: 5 words (aim for 30-50).",
                "Keyword coverage: 3/3.",
                "Great! You captured the main points.",
            ]
        );
    }

    #[test]
    fn test_listening_lists_missing_keywords_as_written() {
        let ex = exercise(&["Pilot", "productivity", "Feedback"]);
        let feedback = evaluate_listening_summary("The pilot went well.", &ex);

        assert_eq!(feedback.lines()[1], "Keyword coverage: 1/3.");
        assert_eq!(
            feedback.lines()[2],
            "Add details about: productivity, Feedback"
        );
    }

    #[test]
    fn test_reading_answer() {
        let question = builtin().reading_question(0);

        let correct = evaluate_reading_answer(question.answer_index, question);
        assert_eq!(correct.len(), 1);
        assert!(correct.lines()[0].starts_with("Correct! "));
        assert!(correct.lines()[0].ends_with(&question.explanation));

        for choice in [0, 2, 3, 99] {
            let wrong = evaluate_reading_answer(choice, question);
            assert_eq!(
                wrong.lines(),
                [format!("Not quite. {}", question.explanation)]
            );
        }
    }

    #[test]
    fn test_reading_submission_out_of_range_is_wrong() {
        let question = builtin().reading_question(0);
        let wrong = format!("Not quite. {}", question.explanation);

        for choice in [-1, 4, i64::MIN, i64::MAX] {
            let feedback = evaluate_reading_submission(Some(choice), question);
            assert_eq!(feedback.lines(), [wrong.clone()]);
        }

        let answer = question.answer_index as i64;
        let feedback = evaluate_reading_submission(Some(answer), question);
        assert!(feedback.lines()[0].starts_with("Correct!"));
    }

    #[test]
    fn test_reading_submission_without_choice() {
        let question = builtin().reading_question(1);
        let feedback = evaluate_reading_submission(None, question);
        assert_eq!(
            feedback.lines(),
            ["Please select an answer before submitting."]
        );
    }

    #[test]
    fn test_feedback_display_joins_lines() {
        let mut feedback = Feedback::single("one");
        feedback.push("two");
        assert_eq!(feedback.to_string(), "one\ntwo");
        assert_eq!(feedback.join("<br>"), "one<br>two");
        assert_eq!(
            serde_json::to_string(&feedback).unwrap(),
            r#"{"lines":["one","two"]}"#
        );
    }
}
