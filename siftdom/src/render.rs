//! Markup serialization of an element tree.
//!
//! Hosts without a real rendering surface (tests, logs, server-side output)
//! use this to inspect what a widget produced. Element IDs and data are not
//! part of the output.

use std::fmt::Write;

use crate::element::{Content, Element};

/// Serialize an element tree to HTML-like markup.
///
/// `Content::Text` and attribute values are escaped, `Content::Markup` is
/// written verbatim.
pub fn to_markup(root: &Element) -> String {
    let mut out = String::new();
    write_element(root, &mut out);
    out
}

/// Escape text for inclusion in markup.
pub fn escape_text(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

fn write_element(element: &Element, out: &mut String) {
    let tag = element.tag.as_str();
    out.push('<');
    out.push_str(tag);

    if !element.classes.is_empty() {
        let _ = write!(out, " class=\"{}\"", escape_text(&element.classes.join(" ")));
    }
    if element.disabled {
        out.push_str(" disabled");
    }

    match &element.content {
        Content::TextInput { value, placeholder } => {
            let _ = write!(out, " type=\"text\" value=\"{}\"", escape_text(value));
            if let Some(placeholder) = placeholder {
                let _ = write!(out, " placeholder=\"{}\"", escape_text(placeholder));
            }
            out.push_str("/>");
            return;
        }
        _ => out.push('>'),
    }

    match &element.content {
        Content::None | Content::TextInput { .. } => {}
        Content::Text(text) => out.push_str(&escape_text(text)),
        Content::Markup(markup) => out.push_str(markup),
        Content::Children(children) => {
            for child in children {
                write_element(child, out);
            }
        }
    }

    let _ = write!(out, "</{tag}>");
}
