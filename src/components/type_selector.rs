//! Answer Type Selector Component
//!
//! Select box for a question's answer type, and the option groups it toggles.
//! Exactly the selected group is visible and required; the others are hidden
//! and optional.

use leptos::prelude::*;

use crate::models::AnswerType;

/// Visibility of the three answer-type groups for one selector value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GroupVisibility {
    selected: Option<AnswerType>,
}

impl GroupVisibility {
    pub fn for_value(value: &str) -> Self {
        Self {
            selected: AnswerType::from_str(value),
        }
    }

    pub fn is_visible(&self, group: AnswerType) -> bool {
        self.selected == Some(group)
    }

    pub fn is_required(&self, group: AnswerType) -> bool {
        self.is_visible(group)
    }

    pub fn visible_groups(&self) -> Vec<AnswerType> {
        AnswerType::ALL
            .into_iter()
            .filter(|g| self.is_visible(*g))
            .collect()
    }

    /// Bootstrap class for a group's wrapper
    pub fn group_class(&self, group: AnswerType) -> &'static str {
        if self.is_visible(group) {
            "answer-group"
        } else {
            "answer-group d-none"
        }
    }
}

/// Answer type select box
#[component]
pub fn AnswerTypeSelect(
    selected: RwSignal<String>,
    #[prop(into)] id: String,
) -> impl IntoView {
    view! {
        <select
            id=id
            class="form-select"
            name="question_type"
            required=true
            prop:value=move || selected.get()
            on:change=move |ev| selected.set(event_target_value(&ev))
        >
            <option value="">"Select answer type"</option>
            {AnswerType::ALL.iter().map(|t| view! {
                <option value=t.as_str()>{t.label()}</option>
            }).collect_view()}
        </select>
    }
}

/// Wrapper for one group's fields, shown only while its type is selected
#[component]
pub fn AnswerGroup(
    group: AnswerType,
    selected: RwSignal<String>,
    children: Children,
) -> impl IntoView {
    let class = move || GroupVisibility::for_value(&selected.get()).group_class(group);
    view! {
        <div class=class>{children()}</div>
    }
}

/// Required flag for inputs inside a group
pub fn group_required(selected: RwSignal<String>, group: AnswerType) -> Signal<bool> {
    Signal::derive(move || GroupVisibility::for_value(&selected.get()).is_required(group))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fill_in_blank_shows_only_its_group() {
        let vis = GroupVisibility::for_value("fill_in_blank");
        assert!(vis.is_visible(AnswerType::FillInBlank));
        assert!(vis.is_required(AnswerType::FillInBlank));
        assert!(!vis.is_visible(AnswerType::MultipleChoice));
        assert!(!vis.is_required(AnswerType::MultipleChoice));
        assert!(!vis.is_visible(AnswerType::ImageVideo));
        assert!(!vis.is_required(AnswerType::ImageVideo));
        assert_eq!(vis.group_class(AnswerType::ImageVideo), "answer-group d-none");
    }

    #[test]
    fn test_exactly_one_group_per_valid_value() {
        for t in AnswerType::ALL {
            assert_eq!(GroupVisibility::for_value(t.as_str()).visible_groups(), vec![t]);
        }
    }

    #[test]
    fn test_empty_value_hides_everything() {
        assert!(GroupVisibility::for_value("").visible_groups().is_empty());
        assert!(GroupVisibility::for_value("essay").visible_groups().is_empty());
    }
}
