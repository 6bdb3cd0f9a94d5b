//! UI Components
//!
//! Leptos components for the admin dashboard.

mod choice_list;
mod type_selector;
mod drop_zone;
mod media_preview;
mod modal;
mod editor_target;
mod form_fields;
mod add_item_modal;
mod edit_item_modal;
mod delete_confirm_modal;
mod item_table;
mod endpoint_tab_bar;

pub use choice_list::ChoiceRows;
pub use editor_target::ModalTarget;
pub use add_item_modal::AddItemModal;
pub use edit_item_modal::EditItemModal;
pub use delete_confirm_modal::DeleteConfirmModal;
pub use item_table::ItemTable;
pub use endpoint_tab_bar::EndpointTabBar;
