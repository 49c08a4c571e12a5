use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};

use super::{Content, Tag};

static NEXT_ID: AtomicU64 = AtomicU64::new(0);

fn generate_id(prefix: &str) -> String {
    let id = NEXT_ID.fetch_add(1, Ordering::Relaxed);
    format!("{prefix}-{id}")
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    // Identity
    pub id: String,
    pub tag: Tag,

    // Content
    pub content: Content,

    // Presentation hooks, consumed by whatever styles the host applies
    pub classes: Vec<String>,

    // Interaction
    pub focusable: bool,
    pub clickable: bool,

    // State
    /// Whether this element is disabled. Disabled elements don't receive input.
    pub disabled: bool,

    // Custom data storage (for row indices, handler IDs, etc.)
    pub data: HashMap<String, String>,
}

impl Default for Element {
    fn default() -> Self {
        Self {
            id: generate_id("el"),
            tag: Tag::Div,
            content: Content::None,
            classes: Vec::new(),
            focusable: false,
            clickable: false,
            disabled: false,
            data: HashMap::new(),
        }
    }
}

impl Element {
    pub fn box_() -> Self {
        Self {
            id: generate_id("box"),
            ..Default::default()
        }
    }

    pub fn text(content: impl Into<String>) -> Self {
        Self {
            id: generate_id("text"),
            tag: Tag::Span,
            content: Content::Text(content.into()),
            ..Default::default()
        }
    }

    /// Create an element whose content is emitted as-is when serialized.
    pub fn markup(content: impl Into<String>) -> Self {
        Self {
            id: generate_id("markup"),
            tag: Tag::Span,
            content: Content::Markup(content.into()),
            ..Default::default()
        }
    }

    pub fn paragraph() -> Self {
        Self {
            id: generate_id("p"),
            tag: Tag::Paragraph,
            ..Default::default()
        }
    }

    /// Create a text input element.
    pub fn text_input(value: impl Into<String>) -> Self {
        Self {
            id: generate_id("input"),
            tag: Tag::Input,
            content: Content::TextInput {
                value: value.into(),
                placeholder: None,
            },
            focusable: true,
            ..Default::default()
        }
    }

    // Identity
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    // Classes
    /// Add a class. Empty names are skipped.
    pub fn class(mut self, name: impl Into<String>) -> Self {
        let name = name.into();
        if !name.is_empty() && !self.classes.contains(&name) {
            self.classes.push(name);
        }
        self
    }

    /// Add a class only when `enabled` holds.
    pub fn class_if(self, name: impl Into<String>, enabled: bool) -> Self {
        if enabled {
            self.class(name)
        } else {
            self
        }
    }

    pub fn has_class(&self, name: &str) -> bool {
        self.classes.iter().any(|c| c == name)
    }

    // Interaction
    pub fn focusable(mut self, focusable: bool) -> Self {
        self.focusable = focusable;
        self
    }

    pub fn clickable(mut self, clickable: bool) -> Self {
        self.clickable = clickable;
        self
    }

    // State
    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    // Text input methods

    /// Set the placeholder text for a text input.
    pub fn placeholder(mut self, text: impl Into<String>) -> Self {
        if let Content::TextInput { placeholder, .. } = &mut self.content {
            let text = text.into();
            *placeholder = if text.is_empty() { None } else { Some(text) };
        }
        self
    }

    /// Current value of a text input, `None` for any other content.
    pub fn input_value(&self) -> Option<&str> {
        match &self.content {
            Content::TextInput { value, .. } => Some(value),
            _ => None,
        }
    }

    // Custom data
    pub fn data(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.data.insert(key.into(), value.into());
        self
    }

    pub fn get_data(&self, key: &str) -> Option<&String> {
        self.data.get(key)
    }

    // Children
    pub fn child(mut self, child: Element) -> Self {
        match &mut self.content {
            Content::Children(children) => children.push(child),
            Content::None => self.content = Content::Children(vec![child]),
            _ => {
                // Replace content with children
                self.content = Content::Children(vec![child]);
            }
        }
        self
    }

    pub fn children(mut self, new_children: impl IntoIterator<Item = Element>) -> Self {
        match &mut self.content {
            Content::Children(children) => children.extend(new_children),
            Content::None => self.content = Content::Children(new_children.into_iter().collect()),
            _ => {
                self.content = Content::Children(new_children.into_iter().collect());
            }
        }
        self
    }

    /// Direct children, empty for leaf content.
    pub fn child_elements(&self) -> &[Element] {
        match &self.content {
            Content::Children(children) => children,
            _ => &[],
        }
    }

    /// Concatenated visible text of this element and its descendants.
    /// Markup tags are dropped, their inner text is kept.
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        collect_text(self, &mut out);
        out
    }
}

fn collect_text(element: &Element, out: &mut String) {
    match &element.content {
        Content::None | Content::TextInput { .. } => {}
        Content::Text(text) => out.push_str(text),
        Content::Markup(markup) => {
            let mut in_tag = false;
            for c in markup.chars() {
                match c {
                    '<' => in_tag = true,
                    '>' => in_tag = false,
                    _ if !in_tag => out.push(c),
                    _ => {}
                }
            }
        }
        Content::Children(children) => {
            for child in children {
                collect_text(child, out);
            }
        }
    }
}
