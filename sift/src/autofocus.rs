//! Focus hand-off to the search input.

use siftdom::{Element, collect_focusable};

/// Turns a closed → open edge into a focus request on the next render.
///
/// The edge is recorded when the list opens, so a close and reopen between
/// two renders still counts. The request is only raised on a committed render
/// that contains the search input.
#[derive(Debug, Default)]
pub struct AutofocusManager {
    pending_open: bool,
}

impl AutofocusManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record that the list just opened.
    pub fn note_opened(&mut self) {
        self.pending_open = true;
    }

    /// Whether an opening has not been consumed by a render yet.
    pub fn is_pending(&self) -> bool {
        self.pending_open
    }

    /// Record a render. Returns the element to focus when an opening is
    /// pending, the list is still open, `autofocus` is on and `input_id` is
    /// focusable in `tree`. Any pending opening is consumed.
    pub fn observe(
        &mut self,
        opened: bool,
        autofocus: bool,
        tree: &Element,
        input_id: &str,
    ) -> Option<String> {
        let opening = std::mem::take(&mut self.pending_open);

        if !opening || !opened || !autofocus {
            return None;
        }

        if collect_focusable(tree).iter().any(|id| id == input_id) {
            log::debug!("[autofocus] requesting focus for {input_id}");
            Some(input_id.to_string())
        } else {
            log::debug!("[autofocus] {input_id} not in rendered tree");
            None
        }
    }
}
