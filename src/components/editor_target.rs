//! Modal Target Type
//!
//! Which item a row button opened a modal for.

use crate::models::Endpoint;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ModalTarget {
    /// Item being edited (endpoint, id)
    Edit(Endpoint, u32),
    /// Item awaiting delete confirmation (endpoint, id)
    Delete(Endpoint, u32),
}
