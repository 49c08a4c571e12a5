//! Event handling for the Dropdown widget.

use std::sync::PoisonError;

use siftdom::{Element, Event, ancestors};

use super::Dropdown;
use super::render::{ElementIds, ROW_KEY};

/// Result of handling an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventResult {
    /// Event was ignored, try other handlers.
    Ignored,
    /// Event was consumed, stop propagation.
    Consumed,
}

impl EventResult {
    /// Check if the event was handled.
    pub fn is_handled(&self) -> bool {
        !matches!(self, EventResult::Ignored)
    }
}

/// What a click inside the rendered tree means.
#[derive(Debug, PartialEq, Eq)]
enum ClickAction {
    Toggle,
    Row(usize),
    Inside,
    Outside,
}

fn resolve_click(root: &Element, ids: &ElementIds, target: &str) -> ClickAction {
    let path = ancestors(root, target);
    if path.is_empty() {
        return ClickAction::Outside;
    }

    // Innermost match wins, so custom row content still selects its row
    for element in path.iter().rev() {
        if !element.clickable {
            continue;
        }
        if element.id == ids.label {
            return ClickAction::Toggle;
        }
        if let Some(index) = element.get_data(ROW_KEY).and_then(|v| v.parse().ok()) {
            return ClickAction::Row(index);
        }
    }

    ClickAction::Inside
}

impl Dropdown {
    /// Route a host event targeted at this dropdown.
    ///
    /// Clicks on the label toggle the list, clicks on a row select it, and
    /// input on the search field updates the search text. The host should
    /// dispatch pointer events to the [`PointerStream`](siftdom::PointerStream)
    /// first so outside clicks are seen by every mounted dropdown.
    pub fn handle_event(&self, event: &Event) -> EventResult {
        let ids = self.element_ids();

        match event {
            Event::Click {
                target: Some(target),
                ..
            } => {
                let action = {
                    let guard = self
                        .root_ref()
                        .read()
                        .unwrap_or_else(PoisonError::into_inner);
                    match guard.as_ref() {
                        Some(root) => resolve_click(root, &ids, target),
                        None => return EventResult::Ignored,
                    }
                };

                match action {
                    ClickAction::Toggle => {
                        self.toggle_open();
                        EventResult::Consumed
                    }
                    ClickAction::Row(index) => {
                        if let Err(err) = self.select_row(index, event) {
                            log::warn!("[{}] row click: {err}", self.id());
                        }
                        EventResult::Consumed
                    }
                    ClickAction::Inside | ClickAction::Outside => EventResult::Ignored,
                }
            }
            Event::Input { target, value } if *target == ids.search => {
                self.set_search_text(value.clone());
                EventResult::Consumed
            }
            _ => EventResult::Ignored,
        }
    }
}
