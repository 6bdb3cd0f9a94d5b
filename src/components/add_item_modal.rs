//! Add Item Modal Component
//!
//! Creates a level, section or question for the endpoint on screen.

use leptos::logging::log;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::Action;
use crate::components::form_fields::{ItemFields, QuestionFields};
use crate::components::modal::Modal;
use crate::context::use_app_context;
use crate::dialog;
use crate::forms::{self, AdminForm};
use crate::models::{AnswerType, Endpoint};
use crate::payload::FormMode;

#[component]
pub fn AddItemModal(open: RwSignal<bool>) -> impl IntoView {
    let ctx = use_app_context();
    let endpoint = ctx.endpoint;

    let form = AdminForm::builder(endpoint.get_untracked())
        .answer_type(AnswerType::MultipleChoice)
        .build();

    // Follow the endpoint tabs
    Effect::new(move |_| {
        form.retarget(endpoint.get(), FormMode::Create);
    });

    let close = move || {
        form.reset();
        open.set(false);
    };

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let target = form.endpoint.get_untracked();
        let action = if target == Endpoint::Question {
            Action::CreateQuestion
        } else {
            Action::CreateItem
        };
        log!("[ADD] Submitting new {}", target.as_str());

        let config = ctx.config();
        spawn_local(async move {
            match forms::submit(form, config).await {
                Ok(message) => {
                    log!("[ADD] {} created", target.as_str());
                    close();
                    ctx.finish_mutation(&message);
                }
                Err(e) => dialog::report_failure(action, &e),
            }
        });
    };

    view! {
        <Modal
            open=open
            title=Signal::derive(move || format!("Add New {}", endpoint.get().label()))
            on_close=Callback::new(move |_| close())
        >
            <form id="addItemForm" on:submit=on_submit>
                <div class="modal-body">
                    {move || match endpoint.get() {
                        Endpoint::Question => view! {
                            <QuestionFields form=form select_id="questionTypeSelect" media_required=true />
                        }.into_any(),
                        other => view! {
                            <ItemFields form=form with_level_id={other == Endpoint::Section} />
                        }.into_any(),
                    }}
                </div>
                <div class="modal-footer">
                    <button type="button" class="btn btn-secondary" on:click=move |_| close()>
                        "Cancel"
                    </button>
                    <button type="submit" class="btn btn-primary confirm-add-btn">"Add"</button>
                </div>
            </form>
        </Modal>
    }
}
