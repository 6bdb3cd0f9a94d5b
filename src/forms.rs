//! Form View Models
//!
//! Each modal owns one `AdminForm`: typed signals for every field it shows.
//! Built with `AdminForm::builder`, cleared with `reset` when the modal
//! closes.

use leptos::prelude::*;
use web_sys::File;

use crate::api;
use crate::components::ChoiceRows;
use crate::config::ApiConfig;
use crate::error::AdminError;
use crate::models::{AnswerType, Endpoint};
use crate::payload::{
    build_item_payload, build_question_payload, parse_id, FormMode, ItemDraft, QuestionDraft,
};
use crate::prefill::{MediaPreview, Prefill};

/// Level/section fields
#[derive(Clone, Copy)]
pub struct ItemForm {
    pub name: RwSignal<String>,
    pub description: RwSignal<String>,
    pub level_id: RwSignal<String>,
    pub image: RwSignal<Option<File>, LocalStorage>,
    /// Current image of the item being edited
    pub image_preview: RwSignal<Option<MediaPreview>>,
}

impl ItemForm {
    fn new() -> Self {
        Self {
            name: RwSignal::new(String::new()),
            description: RwSignal::new(String::new()),
            level_id: RwSignal::new(String::new()),
            image: RwSignal::new_local(None),
            image_preview: RwSignal::new(None),
        }
    }

    fn reset(&self) {
        self.name.set(String::new());
        self.description.set(String::new());
        self.level_id.set(String::new());
        self.image.set(None);
        self.image_preview.set(None);
    }
}

/// Question fields
#[derive(Clone, Copy)]
pub struct QuestionForm {
    pub section_id: RwSignal<String>,
    pub answer_type: RwSignal<String>,
    pub question_content: RwSignal<String>,
    pub choices: RwSignal<ChoiceRows>,
    pub correct_answer: RwSignal<String>,
    pub media: RwSignal<Option<File>, LocalStorage>,
    /// Current media of the question being edited
    pub media_preview: RwSignal<Option<MediaPreview>>,
}

impl QuestionForm {
    fn new(answer_type: &str) -> Self {
        Self {
            section_id: RwSignal::new(String::new()),
            answer_type: RwSignal::new(answer_type.to_string()),
            question_content: RwSignal::new(String::new()),
            choices: RwSignal::new(ChoiceRows::default()),
            correct_answer: RwSignal::new(String::new()),
            media: RwSignal::new_local(None),
            media_preview: RwSignal::new(None),
        }
    }

    fn reset(&self, answer_type: &str) {
        self.section_id.set(String::new());
        self.answer_type.set(answer_type.to_string());
        self.question_content.set(String::new());
        self.choices.update(|c| c.clear());
        self.correct_answer.set(String::new());
        self.media.set(None);
        self.media_preview.set(None);
    }
}

#[derive(Clone, Copy)]
pub struct AdminForm {
    pub endpoint: RwSignal<Endpoint>,
    pub mode: RwSignal<FormMode>,
    pub item: ItemForm,
    pub question: QuestionForm,
    default_answer_type: &'static str,
}

pub struct AdminFormBuilder {
    endpoint: Endpoint,
    mode: FormMode,
    answer_type: &'static str,
}

impl AdminFormBuilder {
    pub fn mode(mut self, mode: FormMode) -> Self {
        self.mode = mode;
        self
    }

    /// Selector value a fresh or reset form starts with
    pub fn answer_type(mut self, answer_type: AnswerType) -> Self {
        self.answer_type = answer_type.as_str();
        self
    }

    pub fn build(self) -> AdminForm {
        AdminForm {
            endpoint: RwSignal::new(self.endpoint),
            mode: RwSignal::new(self.mode),
            item: ItemForm::new(),
            question: QuestionForm::new(self.answer_type),
            default_answer_type: self.answer_type,
        }
    }
}

impl AdminForm {
    pub fn builder(endpoint: Endpoint) -> AdminFormBuilder {
        AdminFormBuilder {
            endpoint,
            mode: FormMode::Create,
            answer_type: "",
        }
    }

    /// Clear every field, choice row, picked file and preview
    pub fn reset(&self) {
        self.item.reset();
        self.question.reset(self.default_answer_type);
    }

    /// Point the form at another item, starting from a clean slate
    pub fn retarget(&self, endpoint: Endpoint, mode: FormMode) {
        self.reset();
        self.endpoint.set(endpoint);
        self.mode.set(mode);
    }

    pub fn apply_prefill(&self, prefill: Prefill) {
        match prefill {
            Prefill::Item {
                name,
                description,
                image,
            } => {
                self.item.name.set(name);
                self.item.description.set(description);
                self.item.image_preview.set(image);
            }
            Prefill::Question(q) => {
                self.question.section_id.set(q.section_id);
                self.question.answer_type.set(q.answer_type);
                self.question.question_content.set(q.question_content);
                self.question.choices.set(ChoiceRows::from_drafts(q.choices));
                self.question.correct_answer.set(q.correct_answer);
                self.question.media_preview.set(q.media);
            }
        }
    }

    pub fn question_draft(&self) -> QuestionDraft<File> {
        let q = &self.question;
        QuestionDraft {
            section_id: q.section_id.get_untracked(),
            answer_type: q.answer_type.get_untracked(),
            question_content: q.question_content.get_untracked(),
            choices: q.choices.with_untracked(|c| c.drafts()),
            correct_answer: q.correct_answer.get_untracked(),
            media: q.media.get_untracked(),
        }
    }

    pub fn item_draft(&self) -> ItemDraft<File> {
        let adding_section = self.endpoint.get_untracked() == Endpoint::Section
            && self.mode.get_untracked().is_create();
        ItemDraft {
            name: self.item.name.get_untracked(),
            description: self.item.description.get_untracked(),
            level_id: adding_section.then(|| self.item.level_id.get_untracked()),
            image: self.item.image.get_untracked(),
        }
    }
}

/// Validate, build and send the form. Validation failures return before any
/// request goes out. Returns the success alert text.
pub async fn submit(form: AdminForm, config: ApiConfig) -> Result<String, AdminError> {
    let endpoint = form.endpoint.get_untracked();
    let mode = form.mode.get_untracked();

    if endpoint == Endpoint::Question {
        let draft = form.question_draft();
        let payload = build_question_payload(&draft, mode)?;
        return match mode {
            FormMode::Create => {
                let section_id = parse_id("Section ID", &draft.section_id)?;
                api::create_question(&config, section_id, payload).await
            }
            FormMode::Edit(id) => api::update_question(&config, id, payload).await,
        };
    }

    let payload = build_item_payload(endpoint, &form.item_draft(), mode)?;
    match mode {
        FormMode::Create => api::create_item(&config, endpoint, payload).await,
        FormMode::Edit(id) => api::update_item(&config, endpoint, id, payload).await,
    }
}
