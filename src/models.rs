//! Frontend Models
//!
//! Data structures matching the admin API resources.

use serde::{Deserialize, Serialize};

/// Content tree level an admin page manages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Endpoint {
    Level,
    Section,
    Question,
}

impl Endpoint {
    pub const ALL: [Endpoint; 3] = [Endpoint::Level, Endpoint::Section, Endpoint::Question];

    pub fn as_str(&self) -> &'static str {
        match self {
            Endpoint::Level => "level",
            Endpoint::Section => "section",
            Endpoint::Question => "question",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "level" => Some(Endpoint::Level),
            "section" => Some(Endpoint::Section),
            "question" => Some(Endpoint::Question),
            _ => None,
        }
    }

    /// Capitalized name for titles ("Edit Section")
    pub fn label(&self) -> &'static str {
        match self {
            Endpoint::Level => "Level",
            Endpoint::Section => "Section",
            Endpoint::Question => "Question",
        }
    }
}

/// Question response modality
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnswerType {
    MultipleChoice,
    FillInBlank,
    ImageVideo,
}

impl AnswerType {
    pub const ALL: [AnswerType; 3] = [
        AnswerType::MultipleChoice,
        AnswerType::FillInBlank,
        AnswerType::ImageVideo,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            AnswerType::MultipleChoice => "multiple_choice",
            AnswerType::FillInBlank => "fill_in_blank",
            AnswerType::ImageVideo => "image_video",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "multiple_choice" => Some(AnswerType::MultipleChoice),
            "fill_in_blank" => Some(AnswerType::FillInBlank),
            "image_video" => Some(AnswerType::ImageVideo),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            AnswerType::MultipleChoice => "Multiple Choice",
            AnswerType::FillInBlank => "Fill in the Blank",
            AnswerType::ImageVideo => "Image / Video",
        }
    }
}

/// Question prompt kind. The admin forms only author text prompts.
pub const QUESTION_TYPE_TEXT: &str = "text";

/// Choice kind. The admin forms only author text choices.
pub const CHOICE_TYPE_TEXT: &str = "text";

/// Choice as returned by the API
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ChoiceRecord {
    #[serde(default)]
    pub id: Option<u32>,
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub is_correct: bool,
}

/// Any level, section or question as returned by `GET /api/general/{endpoint}/{id}`.
///
/// The three resources share one loose shape; every field is optional so a
/// record for one kind deserializes without the others' fields.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ItemRecord {
    #[serde(default)]
    pub id: Option<u32>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub level_id: Option<i64>,
    #[serde(default)]
    pub section_id: Option<i64>,
    #[serde(default)]
    pub answer_type: Option<String>,
    #[serde(default)]
    pub question_content: Option<String>,
    #[serde(default)]
    pub correct_answer: Option<String>,
    #[serde(default)]
    pub media_url: Option<String>,
    #[serde(default)]
    pub choices: Vec<ChoiceRecord>,
}

impl ItemRecord {
    /// Text shown in the list's main column
    pub fn title(&self) -> String {
        self.name
            .clone()
            .or_else(|| self.question_content.clone())
            .unwrap_or_default()
    }

    /// Parent reference shown in the list, if the kind has one
    pub fn parent_label(&self) -> Option<String> {
        match (self.level_id, self.section_id) {
            (_, Some(section)) => Some(format!("Section #{}", section)),
            (Some(level), None) => Some(format!("Level #{}", level)),
            (None, None) => None,
        }
    }
}

/// `{ message?, error? }` part of any API response body
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct ApiMessage {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

impl ApiMessage {
    /// `message`, falling back to `error`; blank strings count as absent
    pub fn text(&self) -> Option<String> {
        [self.message.as_deref(), self.error.as_deref()]
            .into_iter()
            .flatten()
            .map(str::trim)
            .find(|s| !s.is_empty())
            .map(str::to_string)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_round_trip_names() {
        for ep in Endpoint::ALL {
            assert_eq!(Endpoint::from_str(ep.as_str()), Some(ep));
        }
        assert_eq!(Endpoint::from_str("Section"), Some(Endpoint::Section));
        assert_eq!(Endpoint::from_str("questionChoice"), None);
    }

    #[test]
    fn test_answer_type_names() {
        assert_eq!(AnswerType::from_str("fill_in_blank"), Some(AnswerType::FillInBlank));
        assert_eq!(AnswerType::from_str(""), None);
        assert_eq!(AnswerType::ImageVideo.as_str(), "image_video");
    }

    #[test]
    fn test_question_record_deserializes_with_missing_fields() {
        let json = r#"{
            "id": 7,
            "section_id": 3,
            "answer_type": "multiple_choice",
            "question_content": "Capital of France?",
            "choices": [{"id": 1, "content": "Paris", "is_correct": true, "choice_type": "text"}]
        }"#;
        let record: ItemRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.id, Some(7));
        assert_eq!(record.section_id, Some(3));
        assert_eq!(record.choices.len(), 1);
        assert!(record.choices[0].is_correct);
        assert_eq!(record.name, None);
        assert_eq!(record.title(), "Capital of France?");
        assert_eq!(record.parent_label().as_deref(), Some("Section #3"));
    }

    #[test]
    fn test_api_message_prefers_message_over_error() {
        let both: ApiMessage = serde_json::from_str(r#"{"message": "ok", "error": "bad"}"#).unwrap();
        assert_eq!(both.text().as_deref(), Some("ok"));

        let only_error: ApiMessage = serde_json::from_str(r#"{"error": "Item with ID 9 not found"}"#).unwrap();
        assert_eq!(only_error.text().as_deref(), Some("Item with ID 9 not found"));

        let blank: ApiMessage = serde_json::from_str(r#"{"message": "  "}"#).unwrap();
        assert_eq!(blank.text(), None);
    }
}
