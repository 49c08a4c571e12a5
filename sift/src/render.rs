//! Item renderers.
//!
//! A [`Renderer`] turns items into elements for the two places the dropdown
//! shows them: the closed-state label and the rows of the open list.

use siftdom::Element;

use crate::config::Template;
use crate::item::Item;

/// Renders items for the dropdown.
pub trait Renderer: Send + Sync {
    /// Label shown while closed, for the active item.
    fn render_active_label(&self, item: &Item, name_key: &str) -> Element;

    /// One row of the open list.
    fn render_item_row(&self, item: &Item, name_key: &str) -> Element;
}

/// Plain-text labels; rows prefer the filter's highlight markup.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultRenderer;

impl Renderer for DefaultRenderer {
    fn render_active_label(&self, item: &Item, name_key: &str) -> Element {
        Element::text(item.label(name_key).unwrap_or_default())
    }

    fn render_item_row(&self, item: &Item, name_key: &str) -> Element {
        // highlightedResult is trusted: the filter escaped it
        match item.highlighted_result() {
            Some(markup) => Element::markup(markup),
            None => Element::text(item.label(name_key).unwrap_or_default()),
        }
    }
}

/// Closure templates with per-operation fallback to [`DefaultRenderer`].
#[derive(Clone, Default)]
pub struct TemplateRenderer {
    active_item_template: Option<Template>,
    item_template: Option<Template>,
}

impl std::fmt::Debug for TemplateRenderer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TemplateRenderer")
            .field("active_item_template", &self.active_item_template.is_some())
            .field("item_template", &self.item_template.is_some())
            .finish()
    }
}

impl TemplateRenderer {
    pub fn new(active_item_template: Option<Template>, item_template: Option<Template>) -> Self {
        Self {
            active_item_template,
            item_template,
        }
    }
}

impl Renderer for TemplateRenderer {
    fn render_active_label(&self, item: &Item, name_key: &str) -> Element {
        match &self.active_item_template {
            Some(template) => template(item),
            None => DefaultRenderer.render_active_label(item, name_key),
        }
    }

    fn render_item_row(&self, item: &Item, name_key: &str) -> Element {
        match &self.item_template {
            Some(template) => template(item),
            None => DefaultRenderer.render_item_row(item, name_key),
        }
    }
}
