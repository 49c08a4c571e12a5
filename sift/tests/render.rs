use sift::prelude::*;
use sift::{DefaultRenderer, TemplateRenderer};
use siftdom::to_markup;

fn open(config: DropdownConfig) -> (Dropdown, Element) {
    let stream = PointerStream::new();
    let dropdown = Dropdown::new(config);
    dropdown.mount(&stream).unwrap();
    dropdown.toggle_open();
    let tree = dropdown.render().unwrap();
    (dropdown, tree)
}

// ============================================================================
// Default renderer
// ============================================================================

#[test]
fn test_default_active_label_is_plain_text() {
    let el = DefaultRenderer.render_active_label(&Item::named("<Apple>"), "name");
    assert_eq!(to_markup(&el), "<span>&lt;Apple&gt;</span>");
}

#[test]
fn test_default_label_missing_field_is_empty() {
    let el = DefaultRenderer.render_active_label(&Item::new().with("other", "x"), "name");
    assert_eq!(el.text_content(), "");
}

#[test]
fn test_default_row_plain_text() {
    let el = DefaultRenderer.render_item_row(&Item::named("Banana"), "name");
    assert_eq!(to_markup(&el), "<span>Banana</span>");
}

#[test]
fn test_default_row_prefers_highlight_markup() {
    let item = Item::named("Banana").with_highlighted_result("B<em>an</em>ana");
    let el = DefaultRenderer.render_item_row(&item, "name");
    assert_eq!(to_markup(&el), "<span>B<em>an</em>ana</span>");
}

#[test]
fn test_template_renderer_falls_back_per_operation() {
    let template: Template = std::sync::Arc::new(|item: &Item| {
        Element::text(format!("* {}", item.label("name").unwrap_or_default()))
    });
    let renderer = TemplateRenderer::new(None, Some(template));
    let item = Item::named("Cherry").with_highlighted_result("<em>Ch</em>erry");

    assert_eq!(renderer.render_active_label(&item, "name").text_content(), "Cherry");
    // Template wins over highlight markup
    assert_eq!(renderer.render_item_row(&item, "name").text_content(), "* Cherry");
}

// ============================================================================
// Dropdown tree
// ============================================================================

#[test]
fn test_closed_markup() {
    let stream = PointerStream::new();
    let dropdown = Dropdown::new(
        DropdownConfig::new()
            .with_items(vec![Item::named("Apple")])
            .with_class_name("fruit"),
    );
    let tree = dropdown.mount(&stream).unwrap();

    assert_eq!(
        to_markup(&tree),
        "<div class=\"dropdown fruit\"><p class=\"active-item\"><span>Apple</span></p></div>"
    );
    assert_eq!(tree.id, dropdown.id_string());
}

#[test]
fn test_open_markup() {
    let (_dropdown, tree) = open(
        DropdownConfig::new()
            .with_items(vec![Item::named("Apple"), Item::named("Banana")])
            .with_placeholder("Pick a fruit"),
    );

    assert_eq!(
        to_markup(&tree),
        concat!(
            "<div class=\"dropdown opened\">",
            "<p class=\"active-item\"><span>Apple</span></p>",
            "<div class=\"dropdown-content\">",
            "<input class=\"input\" type=\"text\" value=\"\" placeholder=\"Pick a fruit\"/>",
            "<div class=\"list\">",
            "<div class=\"item\"><span>Apple</span></div>",
            "<div class=\"item\"><span>Banana</span></div>",
            "</div></div></div>"
        )
    );
}

#[test]
fn test_state_classes() {
    let stream = PointerStream::new();
    let dropdown = Dropdown::new(
        DropdownConfig::new()
            .with_items(vec![Item::named("Apple")])
            .with_has_error(true)
            .with_disabled(true),
    );
    let tree = dropdown.mount(&stream).unwrap();

    assert!(tree.has_class("dropdown"));
    assert!(tree.has_class("error"));
    assert!(tree.has_class("disabled"));
    assert!(!tree.has_class("opened"));
    assert!(tree.disabled);
}

#[test]
fn test_set_class_name_rerenders() {
    let stream = PointerStream::new();
    let dropdown = Dropdown::new(
        DropdownConfig::new()
            .with_items(vec![Item::named("Apple")])
            .with_class_name("compact"),
    );
    dropdown.mount(&stream).unwrap();
    dropdown.clear_dirty();

    dropdown.set_class_name("wide");
    assert!(dropdown.is_dirty());

    let tree = dropdown.render().unwrap();
    assert!(tree.has_class("wide"));
    assert!(!tree.has_class("compact"));
    assert!(tree.has_class("dropdown"));

    dropdown.set_class_name("");
    let tree = dropdown.render().unwrap();
    assert_eq!(tree.classes, vec!["dropdown".to_string()]);
}

#[test]
fn test_placeholder_when_nothing_active() {
    let stream = PointerStream::new();
    let dropdown = Dropdown::new(DropdownConfig::new().with_placeholder("Choose..."));
    let tree = dropdown.mount(&stream).unwrap();
    assert_eq!(
        to_markup(&tree),
        "<div class=\"dropdown\"><p class=\"active-item\"><span class=\"placeholder\">Choose...</span></p></div>"
    );
}

#[test]
fn test_active_template_used_for_label() {
    let stream = PointerStream::new();
    let dropdown = Dropdown::new(
        DropdownConfig::new()
            .with_items(vec![Item::named("Apple").with("emoji", "A")])
            .with_active_item_template(|item| {
                Element::text(item.label("emoji").unwrap_or_default()).class("badge")
            }),
    );
    let tree = dropdown.mount(&stream).unwrap();
    assert_eq!(
        to_markup(&tree),
        "<div class=\"dropdown\"><p class=\"active-item\"><span class=\"badge\">A</span></p></div>"
    );
}

#[test]
fn test_active_template_skipped_without_active_item() {
    let stream = PointerStream::new();
    let dropdown = Dropdown::new(
        DropdownConfig::new()
            .with_active_item_template(|_| panic!("template must not run without an item")),
    );
    let tree = dropdown.mount(&stream).unwrap();
    assert_eq!(tree.text_content(), "");
}

#[test]
fn test_item_template_used_for_rows() {
    let (_dropdown, tree) = open(
        DropdownConfig::new()
            .with_items(vec![Item::named("Apple")])
            .with_item_template(|item| {
                Element::box_()
                    .class("custom")
                    .child(Element::text(item.label("name").unwrap_or_default()))
            }),
    );
    assert!(to_markup(&tree).contains("<div class=\"item\"><div class=\"custom\"><span>Apple</span></div></div>"));
}

#[test]
fn test_custom_renderer_replaces_templates() {
    struct Upper;

    impl Renderer for Upper {
        fn render_active_label(&self, item: &Item, name_key: &str) -> Element {
            Element::text(item.label(name_key).unwrap_or_default().to_uppercase())
        }

        fn render_item_row(&self, item: &Item, name_key: &str) -> Element {
            Element::text(item.label(name_key).unwrap_or_default().to_lowercase())
        }
    }

    let (_dropdown, tree) = open(
        DropdownConfig::new()
            .with_items(vec![Item::named("Apple")])
            .with_item_template(|_| Element::text("ignored"))
            .with_renderer(Upper),
    );
    assert_eq!(tree.text_content(), "APPLEapple");
}

#[test]
fn test_rows_follow_filter() {
    let (dropdown, _tree) = open(
        DropdownConfig::new()
            .with_items(vec![Item::named("Apple"), Item::named("Banana")]),
    );
    dropdown.set_search_text("an");
    let tree = dropdown.render().unwrap();

    let markup = to_markup(&tree);
    assert!(markup.contains("value=\"an\""));
    assert!(markup.contains("<div class=\"item\"><span>B<em>an</em>ana</span></div>"));
    assert!(!markup.contains("Apple</span></div>"));
}
