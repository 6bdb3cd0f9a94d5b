//! Media Preview Component
//!
//! Shows an item's current image or video in the edit modal.

use leptos::prelude::*;

use crate::prefill::{MediaKind, MediaPreview};

#[component]
pub fn MediaPreviewView(
    preview: RwSignal<Option<MediaPreview>>,
    #[prop(into)] caption: String,
) -> impl IntoView {
    move || {
        preview.get().map(|p| {
            let media = match p.kind {
                MediaKind::Video => view! {
                    <video controls=true height="100">
                        <source src=p.url.clone() type="video/mp4" />
                    </video>
                }
                .into_any(),
                MediaKind::Image => view! {
                    <img src=p.url.clone() alt=caption.clone() class="img-thumbnail" height="100" />
                }
                .into_any(),
            };
            view! {
                <div class="current-media-preview">
                    <p class="mt-2">{caption.clone()}":"</p>
                    {media}
                </div>
            }
        })
    }
}
