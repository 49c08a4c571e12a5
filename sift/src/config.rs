//! Dropdown configuration.

use std::sync::Arc;

use siftdom::{Element, Event};

use crate::filter::{Filter, SubstringFilter};
use crate::item::{DEFAULT_NAME_KEY, Item};
use crate::render::Renderer;

/// Called with the selected item and the event that triggered the selection.
pub type SelectHandler = Arc<dyn Fn(&Item, &Event) + Send + Sync>;

/// Called once per mount with the active item, if any.
pub type MountHandler = Arc<dyn Fn(Option<&Item>) + Send + Sync>;

/// Renders one item.
pub type Template = Arc<dyn Fn(&Item) -> Element + Send + Sync>;

/// Configuration for a [`Dropdown`](crate::Dropdown).
///
/// # Example
///
/// ```
/// use sift::{DropdownConfig, Item};
///
/// let config = DropdownConfig::new()
///     .with_items(vec![Item::named("Apple"), Item::named("Banana")])
///     .with_placeholder("Pick a fruit")
///     .with_autofocus(true)
///     .on_select(|item, _event| println!("picked {:?}", item.label("name")));
/// assert_eq!(config.name_key, "name");
/// ```
#[derive(Clone)]
pub struct DropdownConfig {
    /// Candidate pool, in display order.
    ///
    /// Default: empty
    pub items: Vec<Item>,

    /// Field used as label and equality key.
    ///
    /// Default: `"name"`
    pub name_key: String,

    /// Externally controlled selection.
    ///
    /// Default: none, the first item becomes active on mount
    pub active_item: Option<Item>,

    /// Suppresses opening and selecting.
    pub disabled: bool,

    /// Presentation only: adds the `error` class.
    pub has_error: bool,

    /// Focus the search input when the list opens.
    pub autofocus: bool,

    /// Shown as the label when nothing is active, and inside the empty
    /// search input.
    pub placeholder: String,

    /// Extra class on the root element.
    pub class_name: String,

    pub active_item_template: Option<Template>,
    pub item_template: Option<Template>,

    /// Replaces both templates and the default rendering when set.
    pub renderer: Option<Arc<dyn Renderer>>,

    /// Default: [`SubstringFilter`]
    pub filter: Arc<dyn Filter>,

    pub on_select: Option<SelectHandler>,
    pub on_did_mount: Option<MountHandler>,
}

impl Default for DropdownConfig {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            name_key: DEFAULT_NAME_KEY.to_string(),
            active_item: None,
            disabled: false,
            has_error: false,
            autofocus: false,
            placeholder: String::new(),
            class_name: String::new(),
            active_item_template: None,
            item_template: None,
            renderer: None,
            filter: Arc::new(SubstringFilter),
            on_select: None,
            on_did_mount: None,
        }
    }
}

impl std::fmt::Debug for DropdownConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DropdownConfig")
            .field("items", &self.items.len())
            .field("name_key", &self.name_key)
            .field("active_item", &self.active_item)
            .field("disabled", &self.disabled)
            .field("has_error", &self.has_error)
            .field("autofocus", &self.autofocus)
            .field("placeholder", &self.placeholder)
            .field("class_name", &self.class_name)
            .field("active_item_template", &self.active_item_template.is_some())
            .field("item_template", &self.item_template.is_some())
            .field("renderer", &self.renderer.is_some())
            .field("on_select", &self.on_select.is_some())
            .field("on_did_mount", &self.on_did_mount.is_some())
            .finish()
    }
}

impl DropdownConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_items(mut self, items: Vec<Item>) -> Self {
        self.items = items;
        self
    }

    pub fn with_name_key(mut self, name_key: impl Into<String>) -> Self {
        self.name_key = name_key.into();
        self
    }

    pub fn with_active_item(mut self, item: Item) -> Self {
        self.active_item = Some(item);
        self
    }

    pub fn with_disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    pub fn with_has_error(mut self, has_error: bool) -> Self {
        self.has_error = has_error;
        self
    }

    pub fn with_autofocus(mut self, autofocus: bool) -> Self {
        self.autofocus = autofocus;
        self
    }

    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    pub fn with_class_name(mut self, class_name: impl Into<String>) -> Self {
        self.class_name = class_name.into();
        self
    }

    pub fn with_active_item_template<F>(mut self, template: F) -> Self
    where
        F: Fn(&Item) -> Element + Send + Sync + 'static,
    {
        self.active_item_template = Some(Arc::new(template));
        self
    }

    pub fn with_item_template<F>(mut self, template: F) -> Self
    where
        F: Fn(&Item) -> Element + Send + Sync + 'static,
    {
        self.item_template = Some(Arc::new(template));
        self
    }

    pub fn with_renderer(mut self, renderer: impl Renderer + 'static) -> Self {
        self.renderer = Some(Arc::new(renderer));
        self
    }

    pub fn with_filter(mut self, filter: impl Filter + 'static) -> Self {
        self.filter = Arc::new(filter);
        self
    }

    pub fn on_select<F>(mut self, handler: F) -> Self
    where
        F: Fn(&Item, &Event) + Send + Sync + 'static,
    {
        self.on_select = Some(Arc::new(handler));
        self
    }

    pub fn on_did_mount<F>(mut self, handler: F) -> Self
    where
        F: Fn(Option<&Item>) + Send + Sync + 'static,
    {
        self.on_did_mount = Some(Arc::new(handler));
        self
    }

    /// The renderer in effect: an explicit one, else the templates with
    /// default fallback.
    pub(crate) fn effective_renderer(&self) -> Arc<dyn Renderer> {
        match &self.renderer {
            Some(renderer) => Arc::clone(renderer),
            None => Arc::new(crate::render::TemplateRenderer::new(
                self.active_item_template.clone(),
                self.item_template.clone(),
            )),
        }
    }
}
