//! File Drop Zone Component
//!
//! File input that also takes files dragged onto it. The picked file lands in
//! the form's file signal either way.

use leptos::logging::{error, log};
use leptos::prelude::*;
use leptos_filedrop::*;
use wasm_bindgen::JsCast;
use web_sys::{Event, File, HtmlInputElement};

use crate::error::AdminError;

pub const IMAGE_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "gif", "webp"];
pub const MEDIA_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "gif", "webp", "mp4", "webm", "ogg", "ogv", "mov"];

/// First file of a file input's change event
fn file_from_input(ev: &Event) -> Result<Option<File>, AdminError> {
    let input = ev
        .target()
        .and_then(|t| t.dyn_into::<HtmlInputElement>().ok())
        .ok_or(AdminError::MissingElement("file input"))?;
    Ok(input.files().and_then(|list| list.get(0)))
}

/// Drop zone wrapping a file input
#[component]
pub fn FileDropZone(
    file: RwSignal<Option<File>, LocalStorage>,
    /// Form field name ("image" or "media")
    #[prop(into)] name: String,
    accept: &'static [&'static str],
    #[prop(into, optional)] required: Signal<bool>,
) -> impl IntoView {
    let drop = create_file_drop_signals();

    let on_dragover = make_on_dragover(drop);
    let on_dragleave = make_on_dragleave(drop);
    let on_drop = make_on_drop(drop, accept, move |files: Vec<File>| {
        log!("[DROP] {} file(s) dropped, taking the first", files.len());
        file.set(files.into_iter().next());
    });

    // Form reset clears the file; clear the zone with it
    Effect::new(move |_| {
        if file.with(|f| f.is_none()) {
            reset_drop(&drop);
        }
    });

    let label = move || match file.with(|f| f.as_ref().map(|f| f.name())) {
        Some(name) => format!("Selected: {}", name),
        None => "Drop a file here or choose one".to_string(),
    };
    let accept_attr = accept
        .iter()
        .map(|ext| format!(".{}", ext))
        .collect::<Vec<_>>()
        .join(",");

    view! {
        <div
            class=move || zone_class("drop-zone", drop.is_over_read.get())
            on:dragover=on_dragover
            on:dragleave=on_dragleave
            on:drop=on_drop
        >
            <p class="drop-zone-label">{label}</p>
            <input
                type="file"
                class="form-control"
                name=name
                accept=accept_attr
                required=move || required.get() && file.with(|f| f.is_none())
                on:change=move |ev| match file_from_input(&ev) {
                    Ok(picked) => file.set(picked),
                    Err(e) => error!("[DROP] {}", e),
                }
            />
        </div>
    }
}
