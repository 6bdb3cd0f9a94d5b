//! Delete Confirm Modal Component
//!
//! Asks before deleting the item a row's Delete button picked.

use leptos::logging::log;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::{self, Action};
use crate::components::editor_target::ModalTarget;
use crate::components::modal::Modal;
use crate::context::use_app_context;
use crate::dialog;

#[component]
pub fn DeleteConfirmModal(target: RwSignal<Option<ModalTarget>>) -> impl IntoView {
    let ctx = use_app_context();
    let (pending, set_pending) = signal(false);

    let deleting = move || match target.get() {
        Some(ModalTarget::Delete(endpoint, id)) => Some((endpoint, id)),
        _ => None,
    };

    let on_confirm = move |_: web_sys::MouseEvent| {
        let Some((endpoint, id)) = deleting() else {
            return;
        };
        set_pending.set(true);
        log!("[DELETE] Deleting {} #{}", endpoint.as_str(), id);

        let config = ctx.config();
        spawn_local(async move {
            let result = api::delete_item(&config, endpoint, id).await;
            set_pending.set(false);
            match result {
                Ok(message) => {
                    target.set(None);
                    ctx.finish_mutation(&message);
                }
                Err(e) => dialog::report_failure(Action::Delete, &e),
            }
        });
    };

    let title = Signal::derive(move || match deleting() {
        Some((endpoint, _)) => format!("Delete {}", endpoint.label()),
        None => String::new(),
    });

    view! {
        <Modal
            open=Signal::derive(move || deleting().is_some())
            title=title
            on_close=Callback::new(move |_| target.set(None))
        >
            <div class="modal-body">
                <p>"Are you sure you want to delete this item?"</p>
                <p>
                    "ID: "
                    <strong class="delete-item-id">
                        {move || deleting().map(|(_, id)| id.to_string()).unwrap_or_default()}
                    </strong>
                </p>
            </div>
            <div class="modal-footer">
                <button type="button" class="btn btn-secondary" on:click=move |_| target.set(None)>
                    "Cancel"
                </button>
                <button
                    type="button"
                    class="btn btn-danger confirm-delete-btn"
                    disabled=move || pending.get()
                    on:click=on_confirm
                >
                    "Delete"
                </button>
            </div>
        </Modal>
    }
}
