//! Endpoint Tab Bar Component
//!
//! Tabs for switching between levels, sections and questions.

use leptos::prelude::*;

use crate::context::use_app_context;
use crate::models::Endpoint;

#[component]
pub fn EndpointTabBar() -> impl IntoView {
    let ctx = use_app_context();

    view! {
        <ul class="nav nav-tabs endpoint-tab-bar">
            {Endpoint::ALL
                .into_iter()
                .map(|endpoint| {
                    let tab_class = move || {
                        if ctx.endpoint.get() == endpoint { "nav-link active" } else { "nav-link" }
                    };
                    view! {
                        <li class="nav-item">
                            <a
                                class=tab_class
                                href=format!("/items/{}", endpoint.as_str())
                                on:click=move |ev| {
                                    ev.prevent_default();
                                    ctx.set_endpoint(endpoint);
                                }
                            >
                                {endpoint.label()}
                            </a>
                        </li>
                    }
                })
                .collect_view()}
        </ul>
    }
}
