use crate::element::{find_element, Content, Element};
use crate::event::Event;

/// Tracks which element is currently focused.
#[derive(Debug, Default)]
pub struct FocusState {
    focused: Option<String>,
}

impl FocusState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the currently focused element ID.
    pub fn focused(&self) -> Option<&str> {
        self.focused.as_deref()
    }

    pub fn is_focused(&self, id: &str) -> bool {
        self.focused.as_deref() == Some(id)
    }

    /// Programmatically focus an element by ID.
    /// Returns true if focus changed.
    pub fn focus(&mut self, id: &str) -> bool {
        if self.focused.as_deref() == Some(id) {
            return false;
        }
        log::debug!("[focus] {:?} -> {}", self.focused, id);
        self.focused = Some(id.to_string());
        true
    }

    /// Focus an element only if it exists in `root` and is focusable.
    /// Returns true if focus changed.
    pub fn focus_in(&mut self, root: &Element, id: &str) -> bool {
        match find_element(root, id) {
            Some(element) if element.focusable && !element.disabled => self.focus(id),
            _ => {
                log::debug!("[focus] refusing to focus {id}: not a focusable element in tree");
                false
            }
        }
    }

    /// Clear focus.
    /// Returns true if there was something focused.
    pub fn blur(&mut self) -> bool {
        if self.focused.is_some() {
            self.focused = None;
            true
        } else {
            false
        }
    }

    /// Drop focus if the focused element is no longer in the tree.
    /// Returns true if focus was cleared.
    pub fn retain_in(&mut self, root: &Element) -> bool {
        match &self.focused {
            Some(id) if find_element(root, id).is_none() => self.blur(),
            _ => false,
        }
    }

    /// Apply focus/blur events coming from the host.
    pub fn apply(&mut self, event: &Event) {
        match event {
            Event::Focus { target } => {
                self.focus(target);
            }
            Event::Blur { target } if self.is_focused(target) => {
                self.blur();
            }
            _ => {}
        }
    }
}

/// Collect IDs of all focusable elements in tree order.
pub fn collect_focusable(root: &Element) -> Vec<String> {
    let mut result = Vec::new();
    collect_focusable_recursive(root, &mut result);
    result
}

fn collect_focusable_recursive(element: &Element, result: &mut Vec<String>) {
    if element.disabled {
        return;
    }

    if element.focusable {
        result.push(element.id.clone());
    }

    if let Content::Children(children) = &element.content {
        for child in children {
            collect_focusable_recursive(child, result);
        }
    }
}
