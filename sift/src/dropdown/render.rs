//! Element tree for the Dropdown widget.

use std::sync::Arc;

use siftdom::Element;

use crate::item::Item;
use crate::render::Renderer;

/// Data key carrying a row's index into the filtered list.
pub(crate) const ROW_KEY: &str = "sift-row";

/// Stable element IDs derived from the dropdown ID.
#[derive(Debug, Clone)]
pub(crate) struct ElementIds {
    pub root: String,
    pub label: String,
    pub panel: String,
    pub search: String,
    pub list: String,
}

impl ElementIds {
    pub fn new(base: &str) -> Self {
        Self {
            root: base.to_string(),
            label: format!("{base}-label"),
            panel: format!("{base}-panel"),
            search: format!("{base}-search"),
            list: format!("{base}-list"),
        }
    }

    pub fn row(&self, index: usize) -> String {
        format!("{}-row-{index}", self.root)
    }
}

/// Everything a render needs, copied out of the locked state so templates
/// run without holding any lock.
pub(crate) struct RenderSnapshot {
    pub opened: bool,
    pub active: Option<Item>,
    pub filtered: Vec<Item>,
    pub search_text: String,
    pub name_key: String,
    pub placeholder: String,
    pub class_name: String,
    pub disabled: bool,
    pub has_error: bool,
    pub renderer: Arc<dyn Renderer>,
}

pub(crate) fn build(ids: &ElementIds, snap: &RenderSnapshot) -> Element {
    let label_content = match &snap.active {
        Some(item) => snap.renderer.render_active_label(item, &snap.name_key),
        None => Element::text(snap.placeholder.clone()).class("placeholder"),
    };

    let label = Element::paragraph()
        .id(&ids.label)
        .class("active-item")
        .clickable(!snap.disabled)
        .child(label_content);

    let root = Element::box_()
        .id(&ids.root)
        .class("dropdown")
        .class(snap.class_name.clone())
        .class_if("disabled", snap.disabled)
        .class_if("error", snap.has_error)
        .class_if("opened", snap.opened)
        .disabled(snap.disabled)
        .child(label);

    if !snap.opened {
        return root;
    }

    let input = Element::text_input(snap.search_text.clone())
        .id(&ids.search)
        .class("input")
        .placeholder(snap.placeholder.clone());

    let rows = snap.filtered.iter().enumerate().map(|(index, item)| {
        Element::box_()
            .id(ids.row(index))
            .class("item")
            .clickable(true)
            .data(ROW_KEY, index.to_string())
            .child(snap.renderer.render_item_row(item, &snap.name_key))
    });

    root.child(
        Element::box_()
            .id(&ids.panel)
            .class("dropdown-content")
            .child(input)
            .child(Element::box_().id(&ids.list).class("list").children(rows)),
    )
}
