//! Dropdown widget - searchable single-select list.

mod events;
mod render;
mod state;

pub use events::EventResult;
pub use state::{Dropdown, DropdownId};
