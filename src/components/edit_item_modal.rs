//! Edit Item Modal Component
//!
//! Fetches the chosen item, fills the form from it, and submits the update.

use leptos::logging::log;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::{self, Action};
use crate::components::editor_target::ModalTarget;
use crate::components::form_fields::{ItemFields, QuestionFields};
use crate::components::modal::Modal;
use crate::context::use_app_context;
use crate::dialog;
use crate::forms::{self, AdminForm};
use crate::models::Endpoint;
use crate::payload::FormMode;
use crate::prefill::prefill;

#[component]
pub fn EditItemModal(target: RwSignal<Option<ModalTarget>>) -> impl IntoView {
    let ctx = use_app_context();
    let form = AdminForm::builder(ctx.endpoint.get_untracked())
        .mode(FormMode::Edit(0))
        .build();
    let (loading, set_loading) = signal(false);

    let editing = move || match target.get() {
        Some(ModalTarget::Edit(endpoint, id)) => Some((endpoint, id)),
        _ => None,
    };

    let close = move || {
        form.reset();
        target.set(None);
    };

    // Reset, fetch, populate whenever a new edit target is picked
    Effect::new(move |_| {
        let Some((endpoint, id)) = editing() else {
            return;
        };
        form.retarget(endpoint, FormMode::Edit(id));
        set_loading.set(true);
        log!("[EDIT] Fetching {} #{}", endpoint.as_str(), id);

        let config = ctx.config();
        spawn_local(async move {
            let loaded = match api::fetch_item(&config, endpoint, id).await {
                Ok(body) => prefill(endpoint, body),
                Err(e) => Err(e),
            };
            // Closed or switched to another item while the fetch was in flight
            if target.get_untracked() != Some(ModalTarget::Edit(endpoint, id)) {
                return;
            }
            match loaded {
                Ok(values) => {
                    form.apply_prefill(values);
                    set_loading.set(false);
                }
                Err(e) => {
                    dialog::report_failure(Action::Fetch, &e);
                    close();
                }
            }
        });
    });

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let config = ctx.config();
        spawn_local(async move {
            match forms::submit(form, config).await {
                Ok(message) => {
                    close();
                    ctx.finish_mutation(&message);
                }
                Err(e) => dialog::report_failure(Action::Update, &e),
            }
        });
    };

    let title = Signal::derive(move || format!("Edit {}", form.endpoint.get().label()));

    view! {
        <Modal
            open=Signal::derive(move || editing().is_some())
            title=title
            on_close=Callback::new(move |_| close())
        >
            <form id="editForm" on:submit=on_submit>
                <div class="modal-body">
                    {move || {
                        if loading.get() {
                            return view! { <p class="text-muted">"Loading..."</p> }.into_any();
                        }
                        match form.endpoint.get() {
                            Endpoint::Question => view! {
                                <QuestionFields form=form select_id="editQuestionTypeSelect" media_required=false />
                            }.into_any(),
                            _ => view! { <ItemFields form=form with_level_id=false /> }.into_any(),
                        }
                    }}
                </div>
                <div class="modal-footer">
                    <button type="button" class="btn btn-secondary" on:click=move |_| close()>
                        "Cancel"
                    </button>
                    <button type="submit" class="btn btn-primary confirm-edit-btn" disabled=move || loading.get()>
                        "Save Changes"
                    </button>
                </div>
            </form>
        </Modal>
    }
}
