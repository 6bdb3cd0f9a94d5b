//! Choice List Editor Component
//!
//! Editable rows of multiple-choice options: text, correct flag, remove button.

use leptos::prelude::*;

use crate::payload::ChoiceDraft;

#[derive(Debug, Clone, PartialEq)]
pub struct ChoiceRow {
    /// Stable key for the row while the form is open
    pub key: u32,
    pub content: String,
    pub is_correct: bool,
}

/// Rows in the order entered
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ChoiceRows {
    rows: Vec<ChoiceRow>,
    next_key: u32,
}

impl ChoiceRows {
    pub fn from_drafts(drafts: Vec<ChoiceDraft>) -> Self {
        let mut rows = Self::default();
        for draft in drafts {
            rows.push(draft.content, draft.is_correct);
        }
        rows
    }

    fn push(&mut self, content: String, is_correct: bool) -> u32 {
        let key = self.next_key;
        self.next_key += 1;
        self.rows.push(ChoiceRow {
            key,
            content,
            is_correct,
        });
        key
    }

    /// Append an empty, unchecked row
    pub fn add_row(&mut self) -> u32 {
        self.push(String::new(), false)
    }

    pub fn remove_row(&mut self, key: u32) {
        self.rows.retain(|r| r.key != key);
    }

    pub fn set_content(&mut self, key: u32, content: String) {
        if let Some(row) = self.rows.iter_mut().find(|r| r.key == key) {
            row.content = content;
        }
    }

    pub fn set_correct(&mut self, key: u32, is_correct: bool) {
        if let Some(row) = self.rows.iter_mut().find(|r| r.key == key) {
            row.is_correct = is_correct;
        }
    }

    pub fn clear(&mut self) {
        self.rows.clear();
    }

    pub fn rows(&self) -> &[ChoiceRow] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn drafts(&self) -> Vec<ChoiceDraft> {
        self.rows
            .iter()
            .map(|r| ChoiceDraft::new(r.content.clone(), r.is_correct))
            .collect()
    }
}

/// Choice rows editor bound to a form's choice signal
#[component]
pub fn ChoiceListEditor(
    choices: RwSignal<ChoiceRows>,
    /// Whether row text inputs are required (MCQ group active)
    #[prop(into)] required: Signal<bool>,
) -> impl IntoView {
    view! {
        <div class="choices-container">
            <For
                each=move || choices.get().rows().to_vec()
                key=|row| row.key
                children=move |row| {
                    let key = row.key;
                    view! {
                        <div class="input-group mb-3">
                            <input
                                type="text"
                                class="form-control"
                                placeholder="Choice Content"
                                required=move || required.get()
                                prop:value=row.content.clone()
                                on:input=move |ev| {
                                    let value = event_target_value(&ev);
                                    choices.update(|c| c.set_content(key, value));
                                }
                            />
                            <div class="input-group-text">
                                <input
                                    type="checkbox"
                                    prop:checked=row.is_correct
                                    on:change=move |ev| {
                                        let checked = event_target_checked(&ev);
                                        choices.update(|c| c.set_correct(key, checked));
                                    }
                                />
                                " Correct"
                                <button
                                    type="button"
                                    class="btn btn-danger btn-sm ms-2 remove-choice-btn"
                                    on:click=move |_| choices.update(|c| c.remove_row(key))
                                >
                                    "X"
                                </button>
                            </div>
                        </div>
                    }
                }
            />
            <button
                type="button"
                class="btn btn-secondary btn-sm"
                on:click=move |_| {
                    choices.update(|c| {
                        c.add_row();
                    });
                }
            >
                "Add Choice"
            </button>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_row_is_empty_and_unchecked() {
        let mut rows = ChoiceRows::default();
        let key = rows.add_row();
        assert_eq!(rows.len(), 1);
        assert_eq!(
            rows.rows()[0],
            ChoiceRow {
                key,
                content: String::new(),
                is_correct: false
            }
        );
    }

    #[test]
    fn test_remove_row_removes_only_that_row() {
        let mut rows = ChoiceRows::from_drafts(vec![
            ChoiceDraft::new("Paris", true),
            ChoiceDraft::new("Lyon", false),
            ChoiceDraft::new("Nice", false),
        ]);
        let lyon = rows.rows()[1].key;
        rows.remove_row(lyon);
        assert_eq!(
            rows.drafts(),
            vec![ChoiceDraft::new("Paris", true), ChoiceDraft::new("Nice", false)]
        );
    }

    #[test]
    fn test_keys_stay_unique_after_removal() {
        let mut rows = ChoiceRows::default();
        let a = rows.add_row();
        rows.remove_row(a);
        let b = rows.add_row();
        assert_ne!(a, b);
    }

    #[test]
    fn test_edits_follow_key() {
        let mut rows = ChoiceRows::default();
        let first = rows.add_row();
        let second = rows.add_row();
        rows.set_content(second, "Lyon".to_string());
        rows.set_correct(first, true);
        assert_eq!(
            rows.drafts(),
            vec![ChoiceDraft::new("", true), ChoiceDraft::new("Lyon", false)]
        );
    }
}
