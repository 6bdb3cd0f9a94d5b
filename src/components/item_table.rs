//! Item Table Component
//!
//! Rows of the current endpoint with Edit and Delete buttons.

use leptos::prelude::*;

use crate::components::editor_target::ModalTarget;
use crate::models::{Endpoint, ItemRecord};
use crate::store::{use_admin_store, AdminStateStoreFields};

/// Rows that can be acted on: records without an id are skipped
fn actionable_rows(rows: &[ItemRecord]) -> Vec<(u32, ItemRecord)> {
    rows.iter()
        .filter_map(|row| row.id.map(|id| (id, row.clone())))
        .collect()
}

fn count_text(count: usize, loading: bool) -> String {
    match (count, loading) {
        (_, true) => "Loading...".to_string(),
        (1, false) => "1 item".to_string(),
        (n, false) => format!("{} items", n),
    }
}

#[component]
pub fn ItemTable(target: RwSignal<Option<ModalTarget>>) -> impl IntoView {
    let store = use_admin_store();

    let rows = move || {
        let Some(endpoint) = store.endpoint().get() else {
            return Vec::new();
        };
        actionable_rows(&store.rows().read())
            .into_iter()
            .map(|(id, row)| (endpoint, id, row))
            .collect::<Vec<(Endpoint, u32, ItemRecord)>>()
    };

    view! {
        <Show when=move || store.load_error().read().is_some()>
            <div class="alert alert-danger" role="alert">
                {move || store.load_error().get().unwrap_or_default()}
            </div>
        </Show>

        <table class="table table-striped item-table">
            <thead>
                <tr>
                    <th>"ID"</th>
                    <th>"Name"</th>
                    <th>"Parent"</th>
                    <th>"Actions"</th>
                </tr>
            </thead>
            <tbody>
                <For
                    each=rows
                    // Every displayed field, so an edit re-renders its row
                    key=|(endpoint, id, row)| (*endpoint, *id, row.title(), row.parent_label())
                    children=move |(endpoint, id, row)| {
                        view! {
                            <tr>
                                <td>{id}</td>
                                <td>{row.title()}</td>
                                <td>{row.parent_label().unwrap_or_default()}</td>
                                <td>
                                    <button
                                        class="btn btn-sm btn-outline-primary edit-btn"
                                        data-id=id
                                        on:click=move |_| target.set(Some(ModalTarget::Edit(endpoint, id)))
                                    >
                                        "Edit"
                                    </button>
                                    " "
                                    <button
                                        class="btn btn-sm btn-outline-danger delete-btn"
                                        data-id=id
                                        on:click=move |_| target.set(Some(ModalTarget::Delete(endpoint, id)))
                                    >
                                        "Delete"
                                    </button>
                                </td>
                            </tr>
                        }
                    }
                />
            </tbody>
        </table>

        <p class="item-count">
            {move || count_text(store.rows().read().len(), store.loading().get())}
        </p>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(id: Option<u32>, name: &str) -> ItemRecord {
        ItemRecord {
            id,
            name: Some(name.to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn test_actionable_rows_skips_missing_ids() {
        let rows = vec![record(Some(1), "Easy"), record(None, "Ghost"), record(Some(3), "Hard")];
        let ids: Vec<u32> = actionable_rows(&rows).into_iter().map(|(id, _)| id).collect();
        assert_eq!(ids, vec![1, 3]);
    }

    #[test]
    fn test_count_text() {
        assert_eq!(count_text(0, false), "0 items");
        assert_eq!(count_text(1, false), "1 item");
        assert_eq!(count_text(12, false), "12 items");
        assert_eq!(count_text(12, true), "Loading...");
    }
}
