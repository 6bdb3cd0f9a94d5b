//! Form Field Components
//!
//! Inputs for level/section and question forms, bound to an `AdminForm`.
//! Used by both the add and edit modals.

use leptos::prelude::*;

use crate::components::choice_list::ChoiceListEditor;
use crate::components::drop_zone::{FileDropZone, IMAGE_EXTENSIONS, MEDIA_EXTENSIONS};
use crate::components::media_preview::MediaPreviewView;
use crate::components::type_selector::{group_required, AnswerGroup, AnswerTypeSelect};
use crate::forms::AdminForm;
use crate::models::AnswerType;

/// Name, description, optional level id, image
#[component]
pub fn ItemFields(
    form: AdminForm,
    /// Show the level id input (adding a section)
    #[prop(into)] with_level_id: Signal<bool>,
) -> impl IntoView {
    let item = form.item;
    view! {
        <div class="mb-3">
            <label class="form-label">"Name"</label>
            <input
                type="text"
                class="form-control"
                name="name"
                required=true
                prop:value=move || item.name.get()
                on:input=move |ev| item.name.set(event_target_value(&ev))
            />
        </div>
        <div class="mb-3">
            <label class="form-label">"Description"</label>
            <textarea
                class="form-control"
                name="description"
                prop:value=move || item.description.get()
                on:input=move |ev| item.description.set(event_target_value(&ev))
            ></textarea>
        </div>
        <Show when=move || with_level_id.get()>
            <div class="mb-3">
                <label class="form-label">"Level ID"</label>
                <input
                    type="number"
                    class="form-control"
                    name="level_id"
                    required=true
                    prop:value=move || item.level_id.get()
                    on:input=move |ev| item.level_id.set(event_target_value(&ev))
                />
            </div>
        </Show>
        <div class="mb-3">
            <label class="form-label">"Image"</label>
            <FileDropZone file=item.image name="image" accept=IMAGE_EXTENSIONS />
            <MediaPreviewView preview=item.image_preview caption="Current image" />
        </div>
    }
}

/// Section id, answer type selector, prompt, and the three answer groups
#[component]
pub fn QuestionFields(
    form: AdminForm,
    /// DOM id for the selector, distinct per modal
    #[prop(into)] select_id: String,
    /// Media is mandatory only when creating
    #[prop(into)] media_required: Signal<bool>,
) -> impl IntoView {
    let q = form.question;
    let mcq_required = group_required(q.answer_type, AnswerType::MultipleChoice);
    let blank_required = group_required(q.answer_type, AnswerType::FillInBlank);
    let media_group_required = group_required(q.answer_type, AnswerType::ImageVideo);

    view! {
        <div class="mb-3">
            <label class="form-label">"Section ID"</label>
            <input
                type="number"
                class="form-control"
                name="section_id"
                required=true
                prop:value=move || q.section_id.get()
                on:input=move |ev| q.section_id.set(event_target_value(&ev))
            />
        </div>
        <div class="mb-3">
            <label class="form-label">"Answer Type"</label>
            <AnswerTypeSelect selected=q.answer_type id=select_id />
        </div>
        <div class="mb-3">
            <label class="form-label">"Question"</label>
            <textarea
                class="form-control"
                name="question_content"
                required=true
                prop:value=move || q.question_content.get()
                on:input=move |ev| q.question_content.set(event_target_value(&ev))
            ></textarea>
        </div>

        <AnswerGroup group=AnswerType::MultipleChoice selected=q.answer_type>
            <label class="form-label">"Choices"</label>
            <ChoiceListEditor choices=q.choices required=mcq_required />
        </AnswerGroup>

        <AnswerGroup group=AnswerType::FillInBlank selected=q.answer_type>
            <label class="form-label">"Correct Answer"</label>
            <input
                type="text"
                class="form-control"
                name="correct_answer"
                required=move || blank_required.get()
                prop:value=move || q.correct_answer.get()
                on:input=move |ev| q.correct_answer.set(event_target_value(&ev))
            />
        </AnswerGroup>

        <AnswerGroup group=AnswerType::ImageVideo selected=q.answer_type>
            <label class="form-label">"Media"</label>
            <FileDropZone
                file=q.media
                name="media"
                accept=MEDIA_EXTENSIONS
                required=Signal::derive(move || media_group_required.get() && media_required.get())
            />
            <MediaPreviewView preview=q.media_preview caption="Current Media" />
        </AnswerGroup>
    }
}
