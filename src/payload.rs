//! Payload Builder
//!
//! Turns a submitted form's values into a request body, validating per
//! answer type. A body is either JSON or multipart, never both: multipart is
//! chosen exactly when a file is attached.

use serde::Serialize;
use serde_json::Value;

use crate::error::ValidationError;
use crate::models::{AnswerType, Endpoint, CHOICE_TYPE_TEXT, QUESTION_TYPE_TEXT};

/// A file picked in a form. Only its name matters before it is sent.
pub trait Upload: Clone {
    fn file_name(&self) -> String;
}

impl Upload for web_sys::File {
    fn file_name(&self) -> String {
        self.name()
    }
}

/// A file counts as attached only when it has a name
fn attached<F: Upload>(file: &Option<F>) -> Option<F> {
    file.as_ref().filter(|f| !f.file_name().is_empty()).cloned()
}

/// Whether the form is creating a new item or editing an existing one
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormMode {
    Create,
    Edit(u32),
}

impl FormMode {
    pub fn is_create(&self) -> bool {
        matches!(self, FormMode::Create)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum FormValue<F> {
    Text(String),
    File(F),
}

#[derive(Debug, Clone, PartialEq)]
pub enum Payload<F> {
    Json(Value),
    Multipart(Vec<(&'static str, FormValue<F>)>),
}

impl<F> Payload<F> {
    /// Explicit `Content-Type` to send. Multipart leaves it to the transport
    /// so the boundary gets filled in.
    pub fn content_type(&self) -> Option<&'static str> {
        match self {
            Payload::Json(_) => Some("application/json"),
            Payload::Multipart(_) => None,
        }
    }

    pub fn is_multipart(&self) -> bool {
        matches!(self, Payload::Multipart(_))
    }

    /// Short description for logs; never includes file contents
    pub fn summary(&self) -> String {
        match self {
            Payload::Json(v) => v.to_string(),
            Payload::Multipart(parts) => {
                let names: Vec<&str> = parts.iter().map(|(k, _)| *k).collect();
                format!("multipart[{}]", names.join(", "))
            }
        }
    }
}

// ========================
// Form Drafts
// ========================

/// One choice row as typed into the form
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ChoiceDraft {
    pub content: String,
    pub is_correct: bool,
}

impl ChoiceDraft {
    pub fn new(content: impl Into<String>, is_correct: bool) -> Self {
        Self {
            content: content.into(),
            is_correct,
        }
    }
}

/// Question form values at submit time
#[derive(Debug, Clone, PartialEq)]
pub struct QuestionDraft<F> {
    pub section_id: String,
    /// Raw selector value
    pub answer_type: String,
    pub question_content: String,
    pub choices: Vec<ChoiceDraft>,
    pub correct_answer: String,
    pub media: Option<F>,
}

/// Level/section form values at submit time
#[derive(Debug, Clone, PartialEq)]
pub struct ItemDraft<F> {
    pub name: String,
    pub description: String,
    /// Only on the add-section form
    pub level_id: Option<String>,
    pub image: Option<F>,
}

// No `F: Default` bound: an empty draft never holds a file
impl<F> Default for QuestionDraft<F> {
    fn default() -> Self {
        Self {
            section_id: String::new(),
            answer_type: String::new(),
            question_content: String::new(),
            choices: Vec::new(),
            correct_answer: String::new(),
            media: None,
        }
    }
}

impl<F> Default for ItemDraft<F> {
    fn default() -> Self {
        Self {
            name: String::new(),
            description: String::new(),
            level_id: None,
            image: None,
        }
    }
}

// ========================
// JSON Bodies
// ========================

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChoiceBody {
    pub choice_type: &'static str,
    pub content: String,
    pub is_correct: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
struct QuestionBody {
    section_id: i64,
    question_type: &'static str,
    answer_type: &'static str,
    question_content: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    choices: Option<Vec<ChoiceBody>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    correct_answer: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
struct ItemBody {
    name: String,
    description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    level_id: Option<i64>,
}

// ========================
// Validation
// ========================

/// Parse an id field the way the forms expect: trimmed, whole number
pub fn parse_id(field: &'static str, raw: &str) -> Result<i64, ValidationError> {
    raw.trim().parse::<i64>().map_err(|_| ValidationError::NotANumber {
        field,
        value: raw.to_string(),
    })
}

fn required_id(
    field: &'static str,
    raw: &str,
    missing: ValidationError,
) -> Result<i64, ValidationError> {
    if raw.trim().is_empty() {
        return Err(missing);
    }
    parse_id(field, raw)
}

/// Every row needs text; with any rows present, one must be correct.
/// Content is sent trimmed.
pub fn validate_choices(choices: &[ChoiceDraft]) -> Result<Vec<ChoiceBody>, ValidationError> {
    let mut bodies = Vec::with_capacity(choices.len());
    for choice in choices {
        let content = choice.content.trim();
        if content.is_empty() {
            return Err(ValidationError::EmptyChoice);
        }
        bodies.push(ChoiceBody {
            choice_type: CHOICE_TYPE_TEXT,
            content: content.to_string(),
            is_correct: choice.is_correct,
        });
    }
    if !bodies.is_empty() && !bodies.iter().any(|c| c.is_correct) {
        return Err(ValidationError::NoCorrectChoice);
    }
    Ok(bodies)
}

// ========================
// Builders
// ========================

/// Build the body for a question create or update
pub fn build_question_payload<F: Upload>(
    draft: &QuestionDraft<F>,
    mode: FormMode,
) -> Result<Payload<F>, ValidationError> {
    let section_id = required_id("Section ID", &draft.section_id, ValidationError::MissingSectionId)?;
    let answer_type =
        AnswerType::from_str(draft.answer_type.trim()).ok_or(ValidationError::InvalidAnswerType)?;

    let mut body = QuestionBody {
        section_id,
        question_type: QUESTION_TYPE_TEXT,
        answer_type: answer_type.as_str(),
        question_content: draft.question_content.clone(),
        choices: None,
        correct_answer: None,
    };

    match answer_type {
        AnswerType::MultipleChoice => {
            body.choices = Some(validate_choices(&draft.choices)?);
        }
        AnswerType::FillInBlank => {
            if draft.correct_answer.trim().is_empty() {
                return Err(ValidationError::MissingCorrectAnswer);
            }
            body.correct_answer = Some(draft.correct_answer.clone());
        }
        AnswerType::ImageVideo => match attached(&draft.media) {
            Some(file) => {
                return Ok(Payload::Multipart(vec![
                    ("section_id", FormValue::Text(section_id.to_string())),
                    ("question_type", FormValue::Text(QUESTION_TYPE_TEXT.to_string())),
                    ("answer_type", FormValue::Text(answer_type.as_str().to_string())),
                    ("question_content", FormValue::Text(draft.question_content.clone())),
                    ("media", FormValue::File(file)),
                ]));
            }
            // Editing without a new file keeps the stored media
            None if mode.is_create() => return Err(ValidationError::MissingMedia),
            None => {}
        },
    }

    Ok(Payload::Json(to_json(&body)))
}

/// Build the body for a level/section create or update
pub fn build_item_payload<F: Upload>(
    endpoint: Endpoint,
    draft: &ItemDraft<F>,
    mode: FormMode,
) -> Result<Payload<F>, ValidationError> {
    let level_id = match (endpoint, mode, draft.level_id.as_deref()) {
        (Endpoint::Section, FormMode::Create, raw) => Some(required_id(
            "Level ID",
            raw.unwrap_or_default(),
            ValidationError::MissingLevelId,
        )?),
        (_, _, Some(raw)) if !raw.trim().is_empty() => Some(parse_id("Level ID", raw)?),
        _ => None,
    };

    if let Some(file) = attached(&draft.image) {
        let mut parts = vec![
            ("name", FormValue::Text(draft.name.clone())),
            ("description", FormValue::Text(draft.description.clone())),
        ];
        if let Some(id) = level_id {
            parts.push(("level_id", FormValue::Text(id.to_string())));
        }
        parts.push(("image", FormValue::File(file)));
        return Ok(Payload::Multipart(parts));
    }

    let body = ItemBody {
        name: draft.name.clone(),
        description: draft.description.clone(),
        level_id,
    };
    Ok(Payload::Json(to_json(&body)))
}

fn to_json<T: Serialize>(body: &T) -> Value {
    // Plain structs of strings and integers always serialize
    serde_json::to_value(body).unwrap_or(Value::Null)
}
