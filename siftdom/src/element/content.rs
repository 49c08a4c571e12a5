/// What an element holds.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Content {
    #[default]
    None,
    /// Plain text. Escaped when serialized.
    Text(String),
    /// Pre-rendered markup, emitted verbatim. The producer is responsible for
    /// making sure it only carries intended markup.
    Markup(String),
    /// Single-line text field.
    TextInput {
        value: String,
        placeholder: Option<String>,
    },
    Children(Vec<super::Element>),
}

/// Markup tag used when serializing an element.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Tag {
    #[default]
    Div,
    Span,
    Paragraph,
    Input,
}

impl Tag {
    pub fn as_str(&self) -> &'static str {
        match self {
            Tag::Div => "div",
            Tag::Span => "span",
            Tag::Paragraph => "p",
            Tag::Input => "input",
        }
    }
}
