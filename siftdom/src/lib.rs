pub mod element;
pub mod event;
pub mod focus;
pub mod hit;
pub mod render;
pub mod stream;

pub use element::{Content, Element, Tag};
pub use event::{Event, MouseButton};
pub use focus::{collect_focusable, FocusState};
pub use hit::{ancestors, contains};
pub use render::{escape_text, to_markup};
pub use stream::{PointerStream, Subscription};
