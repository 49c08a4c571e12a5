use siftdom::element::find_element;
use siftdom::{ancestors, contains, Content, Element, Tag};

fn sample_tree() -> Element {
    Element::box_()
        .id("root")
        .child(Element::paragraph().id("label").child(Element::text("Apple").id("label-text")))
        .child(
            Element::box_()
                .id("panel")
                .child(Element::text_input("").id("search"))
                .child(Element::box_().id("list").child(Element::box_().id("row-0"))),
        )
}

// ============================================================================
// Builders
// ============================================================================

#[test]
fn test_generated_ids_are_unique() {
    let a = Element::box_();
    let b = Element::box_();
    assert_ne!(a.id, b.id);
    assert!(a.id.starts_with("box-"));
}

#[test]
fn test_class_skips_empty_and_duplicates() {
    let el = Element::box_()
        .class("dropdown")
        .class("")
        .class("dropdown")
        .class_if("opened", true)
        .class_if("error", false);

    assert_eq!(el.classes, vec!["dropdown".to_string(), "opened".to_string()]);
    assert!(el.has_class("opened"));
    assert!(!el.has_class("error"));
}

#[test]
fn test_text_input_defaults() {
    let input = Element::text_input("abc").placeholder("Search...");
    assert_eq!(input.tag, Tag::Input);
    assert!(input.focusable);
    assert_eq!(input.input_value(), Some("abc"));
    assert_eq!(
        input.content,
        Content::TextInput {
            value: "abc".to_string(),
            placeholder: Some("Search...".to_string()),
        }
    );
}

#[test]
fn test_empty_placeholder_is_none() {
    let input = Element::text_input("").placeholder("");
    assert_eq!(
        input.content,
        Content::TextInput {
            value: String::new(),
            placeholder: None,
        }
    );
}

#[test]
fn test_child_replaces_leaf_content() {
    let el = Element::text("old").child(Element::text("new"));
    assert_eq!(el.child_elements().len(), 1);
    assert_eq!(el.text_content(), "new");
}

#[test]
fn test_data_roundtrip() {
    let el = Element::box_().data("row", "3");
    assert_eq!(el.get_data("row").map(String::as_str), Some("3"));
    assert_eq!(el.get_data("missing"), None);
}

#[test]
fn test_text_content_strips_markup_tags() {
    let el = Element::box_()
        .child(Element::text("Fruit: "))
        .child(Element::markup("B<em>an</em>ana"));
    assert_eq!(el.text_content(), "Fruit: Banana");
}

// ============================================================================
// Tree queries
// ============================================================================

#[test]
fn test_find_element() {
    let root = sample_tree();
    assert_eq!(find_element(&root, "search").map(|e| e.tag), Some(Tag::Input));
    assert!(find_element(&root, "nope").is_none());
}

#[test]
fn test_contains_self_and_descendants() {
    let root = sample_tree();
    assert!(contains(&root, "root"));
    assert!(contains(&root, "row-0"));
    assert!(!contains(&root, "elsewhere"));
}

#[test]
fn test_ancestors_path() {
    let root = sample_tree();
    let path: Vec<&str> = ancestors(&root, "row-0")
        .iter()
        .map(|e| e.id.as_str())
        .collect();
    assert_eq!(path, vec!["root", "panel", "list", "row-0"]);
}

#[test]
fn test_ancestors_missing_is_empty() {
    let root = sample_tree();
    assert!(ancestors(&root, "elsewhere").is_empty());
}
