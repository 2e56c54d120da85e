use axum::extract::{Query, State};
use axum::response::Html;
use axum::{Form, Json};
use minijinja::{context, Value};
use serde::{Deserialize, Deserializer, Serialize};
use tracing::debug;

use crate::evaluator::{self, Feedback};
use crate::models::{
    ListeningExercise, MultipleChoiceQuestion, Section, WritingPrompt, HOME_TIP,
};

use super::{WebError, WebState};

/// Navigation entry rendered by every page.
#[derive(Debug, Serialize)]
struct SectionLink {
    slug: &'static str,
    title: &'static str,
    tip: &'static str,
}

fn section_links() -> Vec<SectionLink> {
    Section::ALL
        .iter()
        .map(|section| SectionLink {
            slug: section.slug(),
            title: section.title(),
            tip: section.quick_tip(),
        })
        .collect()
}

/// Splits integer text into its sign and ASCII digits.
fn integer_digits(raw: &str) -> Option<(bool, &str)> {
    let value = raw.trim();
    let (negative, digits) = match value.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, value.strip_prefix('+').unwrap_or(value)),
    };
    (!digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit())).then_some((negative, digits))
}

/// Resolves an index from untrusted input against `len` items. Integers of
/// any size wrap around, anything else means 0.
fn parse_index(raw: Option<&str>, len: usize) -> usize {
    let Some((negative, digits)) = raw.and_then(integer_digits) else {
        return 0;
    };

    // Reduce digit by digit so values past i64 still wrap.
    let len = len as u128;
    let rem = digits
        .bytes()
        .fold(0u128, |rem, digit| (rem * 10 + u128::from(digit - b'0')) % len);
    let rem = if negative && rem != 0 { len - rem } else { rem };
    rem as usize
}

/// A numeric choice, saturating at the `i64` bounds. `None` when missing or
/// not an integer.
fn parse_choice(raw: Option<&str>) -> Option<i64> {
    let (negative, digits) = raw.and_then(integer_digits)?;
    let magnitude = digits.parse::<i64>().unwrap_or(i64::MAX);
    Some(if negative { -magnitude } else { magnitude })
}

/// Accepts a JSON number or string so API indices parse like query values.
fn lenient_number<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<serde_json::Value>::deserialize(deserializer)? {
        Some(serde_json::Value::Number(n)) => Some(n.to_string()),
        Some(serde_json::Value::String(s)) => Some(s),
        _ => None,
    })
}

/// Position of the current item plus where "next" leads.
struct Cursor {
    index: usize,
    next_index: usize,
    total: usize,
}

impl Cursor {
    fn resolve(state: &WebState, section: Section, raw: Option<&str>) -> Self {
        let total = state.content.len(section);
        let index = parse_index(raw, total);
        Self {
            index,
            next_index: state.content.next(section, index),
            total,
        }
    }
}

/// Context shared by every section page, plus the page's own values.
#[derive(Serialize)]
struct SectionPage<T: Serialize> {
    active: &'static str,
    sections: Vec<SectionLink>,
    quick_tip: &'static str,
    index: usize,
    next_index: usize,
    position: usize,
    total: usize,
    #[serde(flatten)]
    body: T,
}

fn render_section<T: Serialize>(
    state: &WebState,
    section: Section,
    cursor: &Cursor,
    body: T,
) -> Result<Html<String>, WebError> {
    let page = SectionPage {
        active: section.slug(),
        sections: section_links(),
        quick_tip: section.quick_tip(),
        index: cursor.index,
        next_index: cursor.next_index,
        position: cursor.index + 1,
        total: cursor.total,
        body,
    };
    state.render(section_template(section), Value::from_serialize(&page))
}

#[derive(Serialize)]
struct SpeakingBody<'a> {
    prompt: &'a str,
}

#[derive(Serialize)]
struct WritingBody<'a> {
    prompt: &'a WritingPrompt,
    response: &'a str,
    feedback: Option<Feedback>,
}

#[derive(Serialize)]
struct ListeningBody<'a> {
    exercise: &'a ListeningExercise,
    summary: &'a str,
    feedback: Option<Feedback>,
}

#[derive(Serialize)]
struct ReadingBody<'a> {
    question: &'a MultipleChoiceQuestion,
    selected: Option<i64>,
    feedback: Option<Feedback>,
}

fn section_template(section: Section) -> &'static str {
    match section {
        Section::Speaking => "speaking.html",
        Section::Writing => "writing.html",
        Section::Listening => "listening.html",
        Section::Reading => "reading.html",
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct PromptQuery {
    prompt: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct ExerciseQuery {
    exercise: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct QuestionQuery {
    question: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct WritingForm {
    #[serde(default)]
    response: String,
}

#[derive(Debug, Default, Deserialize)]
pub struct ListeningForm {
    #[serde(default)]
    summary: String,
}

#[derive(Debug, Default, Deserialize)]
pub struct ReadingForm {
    choice: Option<String>,
}

/// GET /: Landing page with links to every section.
pub async fn home(State(state): State<WebState>) -> Result<Html<String>, WebError> {
    state.render(
        "home.html",
        context! {
            active => "home",
            sections => section_links(),
            quick_tip => HOME_TIP,
        },
    )
}

/// GET /speaking: Current speaking prompt.
pub async fn speaking(
    State(state): State<WebState>,
    Query(query): Query<PromptQuery>,
) -> Result<Html<String>, WebError> {
    let cursor = Cursor::resolve(&state, Section::Speaking, query.prompt.as_deref());
    let prompt = state.content.speaking_prompt(cursor.index);
    render_section(&state, Section::Speaking, &cursor, SpeakingBody { prompt })
}

/// GET /writing: Writing task without feedback.
pub async fn writing(
    State(state): State<WebState>,
    Query(query): Query<PromptQuery>,
) -> Result<Html<String>, WebError> {
    let cursor = Cursor::resolve(&state, Section::Writing, query.prompt.as_deref());
    let prompt = state.content.writing_prompt(cursor.index);
    render_section(
        &state,
        Section::Writing,
        &cursor,
        WritingBody {
            prompt,
            response: "",
            feedback: None,
        },
    )
}

/// POST /writing: Evaluate a writing response.
pub async fn submit_writing(
    State(state): State<WebState>,
    Query(query): Query<PromptQuery>,
    Form(form): Form<WritingForm>,
) -> Result<Html<String>, WebError> {
    let cursor = Cursor::resolve(&state, Section::Writing, query.prompt.as_deref());
    let prompt = state.content.writing_prompt(cursor.index);
    let feedback = evaluator::evaluate_writing_response(&form.response, prompt);
    debug!(prompt = cursor.index, lines = feedback.len(), "Evaluated writing");

    render_section(
        &state,
        Section::Writing,
        &cursor,
        WritingBody {
            prompt,
            response: &form.response,
            feedback: Some(feedback),
        },
    )
}

/// GET /listening: Listening exercise without feedback.
pub async fn listening(
    State(state): State<WebState>,
    Query(query): Query<ExerciseQuery>,
) -> Result<Html<String>, WebError> {
    let cursor = Cursor::resolve(&state, Section::Listening, query.exercise.as_deref());
    let exercise = state.content.listening_exercise(cursor.index);
    render_section(
        &state,
        Section::Listening,
        &cursor,
        ListeningBody {
            exercise,
            summary: "",
            feedback: None,
        },
    )
}

/// POST /listening: Evaluate a listening summary.
pub async fn submit_listening(
    State(state): State<WebState>,
    Query(query): Query<ExerciseQuery>,
    Form(form): Form<ListeningForm>,
) -> Result<Html<String>, WebError> {
    let cursor = Cursor::resolve(&state, Section::Listening, query.exercise.as_deref());
    let exercise = state.content.listening_exercise(cursor.index);
    let feedback = evaluator::evaluate_listening_summary(form.summary.trim(), exercise);
    debug!(
        exercise = cursor.index,
        lines = feedback.len(),
        "Evaluated listening summary"
    );

    render_section(
        &state,
        Section::Listening,
        &cursor,
        ListeningBody {
            exercise,
            summary: &form.summary,
            feedback: Some(feedback),
        },
    )
}

/// GET /reading: Reading question without feedback.
pub async fn reading(
    State(state): State<WebState>,
    Query(query): Query<QuestionQuery>,
) -> Result<Html<String>, WebError> {
    let cursor = Cursor::resolve(&state, Section::Reading, query.question.as_deref());
    let question = state.content.reading_question(cursor.index);
    render_section(
        &state,
        Section::Reading,
        &cursor,
        ReadingBody {
            question,
            selected: None,
            feedback: None,
        },
    )
}

/// POST /reading: Check the selected answer.
pub async fn submit_reading(
    State(state): State<WebState>,
    Query(query): Query<QuestionQuery>,
    Form(form): Form<ReadingForm>,
) -> Result<Html<String>, WebError> {
    let cursor = Cursor::resolve(&state, Section::Reading, query.question.as_deref());
    let question = state.content.reading_question(cursor.index);
    let selected = parse_choice(form.choice.as_deref());
    let feedback = evaluator::evaluate_reading_submission(selected, question);
    debug!(question = cursor.index, ?selected, "Evaluated reading answer");

    render_section(
        &state,
        Section::Reading,
        &cursor,
        ReadingBody {
            question,
            selected,
            feedback: Some(feedback),
        },
    )
}

#[derive(Debug, Deserialize)]
pub struct WritingRequest {
    #[serde(default, deserialize_with = "lenient_number")]
    pub prompt: Option<String>,
    #[serde(default)]
    pub text: String,
}

#[derive(Debug, Deserialize)]
pub struct ListeningRequest {
    #[serde(default, deserialize_with = "lenient_number")]
    pub exercise: Option<String>,
    #[serde(default)]
    pub text: String,
}

#[derive(Debug, Deserialize)]
pub struct ReadingRequest {
    #[serde(default, deserialize_with = "lenient_number")]
    pub question: Option<String>,
    #[serde(default, deserialize_with = "lenient_number")]
    pub choice: Option<String>,
}

/// POST /api/evaluate/writing: Writing feedback as JSON.
pub async fn api_evaluate_writing(
    State(state): State<WebState>,
    Json(body): Json<WritingRequest>,
) -> Json<Feedback> {
    let index = parse_index(body.prompt.as_deref(), state.content.len(Section::Writing));
    let prompt = state.content.writing_prompt(index);
    Json(evaluator::evaluate_writing_response(&body.text, prompt))
}

/// POST /api/evaluate/listening: Listening feedback as JSON.
pub async fn api_evaluate_listening(
    State(state): State<WebState>,
    Json(body): Json<ListeningRequest>,
) -> Json<Feedback> {
    let index = parse_index(
        body.exercise.as_deref(),
        state.content.len(Section::Listening),
    );
    let exercise = state.content.listening_exercise(index);
    Json(evaluator::evaluate_listening_summary(body.text.trim(), exercise))
}

/// POST /api/evaluate/reading: Reading feedback as JSON.
pub async fn api_evaluate_reading(
    State(state): State<WebState>,
    Json(body): Json<ReadingRequest>,
) -> Json<Feedback> {
    let index = parse_index(body.question.as_deref(), state.content.len(Section::Reading));
    let question = state.content.reading_question(index);
    let choice = parse_choice(body.choice.as_deref());
    Json(evaluator::evaluate_reading_submission(choice, question))
}

/// GET /api/health
pub async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "status": "ok" }))
}
