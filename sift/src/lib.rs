pub mod autofocus;
pub mod config;
pub mod dropdown;
pub mod error;
pub mod filter;
pub mod item;
pub mod render;
pub mod watcher;

pub use config::DropdownConfig;
pub use dropdown::{Dropdown, DropdownId, EventResult};
pub use error::SiftError;
pub use filter::{Filter, FilteredItems, FuzzyFilter, SubstringFilter};
pub use item::Item;
pub use render::{DefaultRenderer, Renderer, TemplateRenderer};

pub mod prelude {
    pub use crate::config::{DropdownConfig, MountHandler, SelectHandler, Template};
    pub use crate::dropdown::{Dropdown, EventResult};
    pub use crate::error::SiftError;
    pub use crate::filter::{Filter, FuzzyFilter, SubstringFilter};
    pub use crate::item::Item;
    pub use crate::render::Renderer;

    pub use siftdom::{Element, Event, FocusState, PointerStream};
}
