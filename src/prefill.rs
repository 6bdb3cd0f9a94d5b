//! Edit Form Prefill
//!
//! Maps a fetched item onto the values the edit form starts with. Visible
//! answer-type groups follow from the fetched `answer_type`.

use serde_json::Value;

use crate::error::AdminError;
use crate::models::{AnswerType, Endpoint, ItemRecord};
use crate::payload::ChoiceDraft;

const VIDEO_EXTENSIONS: &[&str] = &["mp4", "webm", "ogg", "ogv", "mov"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaKind {
    Image,
    Video,
}

impl MediaKind {
    /// Video when the URL path ends in a video extension, image otherwise
    pub fn from_url(url: &str) -> Self {
        let path = url.split(['?', '#']).next().unwrap_or(url);
        let ext = path.rsplit_once('.').map(|(_, e)| e).unwrap_or("");
        if VIDEO_EXTENSIONS.iter().any(|v| v.eq_ignore_ascii_case(ext)) {
            MediaKind::Video
        } else {
            MediaKind::Image
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MediaPreview {
    pub url: String,
    pub kind: MediaKind,
}

impl MediaPreview {
    pub fn from_url(url: Option<&str>) -> Option<Self> {
        let url = url?.trim();
        if url.is_empty() {
            return None;
        }
        Some(Self {
            url: url.to_string(),
            kind: MediaKind::from_url(url),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct QuestionPrefill {
    pub section_id: String,
    /// Raw value for the selector; empty when the record has none
    pub answer_type: String,
    pub question_content: String,
    pub choices: Vec<ChoiceDraft>,
    pub correct_answer: String,
    pub media: Option<MediaPreview>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Prefill {
    Item {
        name: String,
        description: String,
        image: Option<MediaPreview>,
    },
    Question(QuestionPrefill),
}

pub fn prefill(endpoint: Endpoint, body: Value) -> Result<Prefill, AdminError> {
    let record: ItemRecord = serde_json::from_value(body)?;
    Ok(prefill_record(endpoint, record))
}

pub fn prefill_record(endpoint: Endpoint, record: ItemRecord) -> Prefill {
    if endpoint != Endpoint::Question {
        return Prefill::Item {
            name: record.name.unwrap_or_default(),
            description: record.description.unwrap_or_default(),
            image: MediaPreview::from_url(record.image_url.as_deref()),
        };
    }

    let answer_type = record.answer_type.clone().unwrap_or_default();
    let mut question = QuestionPrefill {
        section_id: record.section_id.map(|id| id.to_string()).unwrap_or_default(),
        answer_type: answer_type.clone(),
        question_content: record.question_content.clone().unwrap_or_default(),
        ..Default::default()
    };

    match AnswerType::from_str(&answer_type) {
        Some(AnswerType::MultipleChoice) => {
            question.choices = record
                .choices
                .into_iter()
                .map(|c| ChoiceDraft::new(c.content.unwrap_or_default(), c.is_correct))
                .collect();
            // An editable MCQ always starts with at least one row
            if question.choices.is_empty() {
                question.choices.push(ChoiceDraft::default());
            }
        }
        Some(AnswerType::FillInBlank) => {
            question.correct_answer = record.correct_answer.unwrap_or_default();
        }
        Some(AnswerType::ImageVideo) => {
            question.media = MediaPreview::from_url(record.media_url.as_deref());
        }
        None => {}
    }

    Prefill::Question(question)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_media_kind_from_url() {
        assert_eq!(MediaKind::from_url("/static/uploads/q1.mp4"), MediaKind::Video);
        assert_eq!(MediaKind::from_url("/static/uploads/q1.WEBM?v=2"), MediaKind::Video);
        assert_eq!(MediaKind::from_url("/static/uploads/q1.png"), MediaKind::Image);
        assert_eq!(MediaKind::from_url("/static/uploads/noext"), MediaKind::Image);
    }

    #[test]
    fn test_mcq_prefill_rebuilds_rows_in_order() {
        let body = json!({
            "id": 12,
            "section_id": 3,
            "answer_type": "multiple_choice",
            "question_content": "Capital of France?",
            "choices": [
                {"content": "Paris", "is_correct": true},
                {"content": "Lyon", "is_correct": false}
            ]
        });
        let Prefill::Question(q) = prefill(Endpoint::Question, body).unwrap() else {
            panic!("expected question prefill")
        };
        assert_eq!(q.section_id, "3");
        assert_eq!(q.answer_type, "multiple_choice");
        assert_eq!(
            q.choices,
            vec![ChoiceDraft::new("Paris", true), ChoiceDraft::new("Lyon", false)]
        );
        assert_eq!(q.correct_answer, "");
    }

    #[test]
    fn test_mcq_without_choices_gets_one_empty_row() {
        let body = json!({"section_id": 1, "answer_type": "multiple_choice", "choices": []});
        let Prefill::Question(q) = prefill(Endpoint::Question, body).unwrap() else {
            panic!("expected question prefill")
        };
        assert_eq!(q.choices, vec![ChoiceDraft::default()]);
    }

    #[test]
    fn test_fill_in_blank_prefill_ignores_choices() {
        let body = json!({
            "section_id": 1,
            "answer_type": "fill_in_blank",
            "correct_answer": "bonjour",
            "choices": [{"content": "stale", "is_correct": true}]
        });
        let Prefill::Question(q) = prefill(Endpoint::Question, body).unwrap() else {
            panic!("expected question prefill")
        };
        assert_eq!(q.correct_answer, "bonjour");
        assert!(q.choices.is_empty());
    }

    #[test]
    fn test_image_video_prefill_has_preview() {
        let body = json!({"section_id": 1, "answer_type": "image_video", "media_url": "/m/clip.mp4"});
        let Prefill::Question(q) = prefill(Endpoint::Question, body).unwrap() else {
            panic!("expected question prefill")
        };
        assert_eq!(
            q.media,
            Some(MediaPreview {
                url: "/m/clip.mp4".to_string(),
                kind: MediaKind::Video
            })
        );
    }

    #[test]
    fn test_level_prefill() {
        let body = json!({"id": 2, "name": "Beginner", "description": null, "image_url": "/img/b.png"});
        assert_eq!(
            prefill(Endpoint::Level, body).unwrap(),
            Prefill::Item {
                name: "Beginner".to_string(),
                description: String::new(),
                image: Some(MediaPreview {
                    url: "/img/b.png".to_string(),
                    kind: MediaKind::Image
                }),
            }
        );
    }

    #[test]
    fn test_non_object_body_is_decode_error() {
        assert!(matches!(
            prefill(Endpoint::Section, json!([1, 2])),
            Err(AdminError::Decode(_))
        ));
    }
}
