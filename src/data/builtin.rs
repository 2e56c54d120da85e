//! Practice content that ships with the binary.

use std::sync::LazyLock;

use crate::models::{ListeningExercise, MultipleChoiceQuestion, WordRange, WritingPrompt};

use super::store::ContentStore;

static BUILTIN: LazyLock<ContentStore> = LazyLock::new(|| {
    ContentStore::from_trusted(
        speaking_prompts(),
        writing_prompts(),
        listening_exercises(),
        reading_questions(),
    )
});

/// The built-in content tables, initialized on first use.
pub fn builtin() -> &'static ContentStore {
    &BUILTIN
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn speaking_prompts() -> Vec<String> {
    strings(&[
        "Describe a time when you had to solve a problem creatively.",
        "Explain a recent news story to a friend who has not heard it before.",
        "Summarize a book or movie you enjoyed and why you recommend it.",
        "Discuss the advantages and disadvantages of working from home.",
    ])
}

fn writing_prompts() -> Vec<WritingPrompt> {
    vec![
        WritingPrompt {
            title: "Summarize Written Text".to_string(),
            task: "Read a short passage and write a one-sentence summary in under 75 words. \
                   Focus on the main idea, avoid examples, and connect clauses with linking words."
                .to_string(),
            tips: strings(&[
                "Capture who, what, where, and why in one sentence.",
                "Use connectors like 'because', 'which', or 'therefore' to join ideas.",
                "Aim for 40-55 words while keeping grammar simple.",
            ]),
            keywords: strings(&["summary", "main", "idea"]),
            word_range: WordRange::ESSAY,
        },
        WritingPrompt {
            title: "Essay Writing".to_string(),
            task: "Write a 200-300 word persuasive essay on the topic. Structure with an \
                   introduction, two body paragraphs, and a conclusion."
                .to_string(),
            tips: strings(&[
                "Use a clear thesis statement in the introduction.",
                "Start each body paragraph with a controlling idea.",
                "Paraphrase the thesis when concluding and include a recommendation.",
            ]),
            keywords: strings(&["introduction", "paragraph", "conclusion"]),
            word_range: WordRange::ESSAY,
        },
    ]
}

fn listening_exercises() -> Vec<ListeningExercise> {
    vec![
        ListeningExercise {
            title: "Academic Lecture".to_string(),
            transcript: "Today we explored how urban green spaces moderate city temperatures. \
                         Parks absorb less heat, provide shade, and increase evaporation, creating \
                         a cooling effect known as urban greening."
                .to_string(),
            question: "Summarize the lecture in 1-2 sentences focusing on the main idea."
                .to_string(),
            keywords: strings(&["green", "cooling", "urban"]),
        },
        ListeningExercise {
            title: "Business Briefing".to_string(),
            transcript: "The company will pilot a four-day workweek next quarter to boost \
                         productivity and employee satisfaction. Managers will monitor output and \
                         client feedback to decide whether to make the schedule permanent."
                .to_string(),
            question: "Explain the goal of the pilot and how success will be measured."
                .to_string(),
            keywords: strings(&["pilot", "productivity", "feedback"]),
        },
    ]
}

fn reading_questions() -> Vec<MultipleChoiceQuestion> {
    vec![
        MultipleChoiceQuestion {
            prompt: "Urban planners mention 'urban greening' primarily because it...".to_string(),
            options: strings(&[
                "reduces noise from traffic.",
                "lowers city temperatures.",
                "increases apartment prices.",
                "limits recreational space.",
            ]),
            answer_index: 1,
            explanation:
                "Urban greening cools cities through shade and evaporation, lowering temperatures."
                    .to_string(),
        },
        MultipleChoiceQuestion {
            prompt: "In the business briefing, success of the new schedule depends on..."
                .to_string(),
            options: strings(&[
                "higher product prices.",
                "employee satisfaction and client feedback.",
                "adding more weekly meetings.",
                "changing office locations.",
            ]),
            answer_index: 1,
            explanation: "Managers will track productivity and client feedback before making the \
                          schedule permanent."
                .to_string(),
        },
    ]
}
