//! Items displayed by the dropdown.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// The field name used for labels when none is configured.
pub const DEFAULT_NAME_KEY: &str = "name";

/// A record shown in the dropdown.
///
/// Items are opaque string-keyed records. One field, chosen by the control's
/// `name_key`, is the display label and the equality key. A filter may attach
/// a `highlightedResult`: pre-rendered markup for the currently matched text.
///
/// # Example
///
/// ```
/// use sift::Item;
///
/// let item = Item::named("Banana").with("code", 42);
/// assert_eq!(item.label("name").as_deref(), Some("Banana"));
/// assert_eq!(item.label("code").as_deref(), Some("42"));
/// assert_eq!(item.label("missing"), None);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Item {
    #[serde(flatten)]
    fields: Map<String, Value>,
    #[serde(
        rename = "highlightedResult",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    highlighted_result: Option<String>,
}

impl Item {
    /// An empty record.
    pub fn new() -> Self {
        Self::default()
    }

    /// A record with only the default `name` field set.
    pub fn named(name: impl Into<String>) -> Self {
        Self::new().with(DEFAULT_NAME_KEY, name.into())
    }

    /// Set a field.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.fields.insert(key.into(), value.into());
        self
    }

    /// Attach highlight markup.
    pub fn with_highlighted_result(mut self, markup: impl Into<String>) -> Self {
        self.highlighted_result = Some(markup.into());
        self
    }

    /// The same record without highlight markup.
    pub fn without_highlight(mut self) -> Self {
        self.highlighted_result = None;
        self
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    pub fn fields(&self) -> &Map<String, Value> {
        &self.fields
    }

    pub fn highlighted_result(&self) -> Option<&str> {
        self.highlighted_result.as_deref()
    }

    /// Display label for `key`.
    ///
    /// Strings are returned as-is, numbers and booleans in their display form.
    /// Absent fields, nulls, arrays and objects have no label.
    pub fn label(&self, key: &str) -> Option<String> {
        match self.fields.get(key)? {
            Value::String(s) => Some(s.clone()),
            Value::Number(n) => Some(n.to_string()),
            Value::Bool(b) => Some(b.to_string()),
            Value::Null | Value::Array(_) | Value::Object(_) => None,
        }
    }

    /// Whether both records carry the same value under `key`.
    ///
    /// Two records that both lack the field compare equal.
    pub fn same_key(&self, other: &Item, key: &str) -> bool {
        self.fields.get(key) == other.fields.get(key)
    }
}

impl From<Map<String, Value>> for Item {
    fn from(fields: Map<String, Value>) -> Self {
        Self {
            fields,
            highlighted_result: None,
        }
    }
}
