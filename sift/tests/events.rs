use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use sift::prelude::*;

fn fruits() -> Vec<Item> {
    vec![
        Item::named("Apple"),
        Item::named("Banana"),
        Item::named("Cherry"),
    ]
}

fn open(config: DropdownConfig) -> (Dropdown, PointerStream) {
    let stream = PointerStream::new();
    let dropdown = Dropdown::new(config);
    dropdown.mount(&stream).unwrap();
    dropdown.toggle_open();
    dropdown.render().unwrap();
    (dropdown, stream)
}

// ============================================================================
// Label
// ============================================================================

#[test]
fn test_label_click_toggles() {
    let stream = PointerStream::new();
    let dropdown = Dropdown::new(DropdownConfig::new().with_items(fruits()));
    dropdown.mount(&stream).unwrap();

    let result = dropdown.handle_event(&Event::click(dropdown.label_id()));
    assert_eq!(result, EventResult::Consumed);
    assert!(dropdown.is_opened());

    dropdown.render().unwrap();
    let result = dropdown.handle_event(&Event::click(dropdown.label_id()));
    assert_eq!(result, EventResult::Ignored);
    assert!(!dropdown.is_opened());
}

#[test]
fn test_label_content_click_toggles() {
    let stream = PointerStream::new();
    let dropdown = Dropdown::new(
        DropdownConfig::new()
            .with_items(fruits())
            .with_active_item_template(|item| {
                Element::box_()
                    .id("active-badge")
                    .child(Element::text(item.label("name").unwrap_or_default()))
            }),
    );
    dropdown.mount(&stream).unwrap();

    assert!(dropdown.handle_event(&Event::click("active-badge")).is_handled());
    assert!(dropdown.is_opened());
}

#[test]
fn test_disabled_label_click_stays_closed() {
    let stream = PointerStream::new();
    let dropdown = Dropdown::new(
        DropdownConfig::new()
            .with_items(fruits())
            .with_disabled(true),
    );
    dropdown.mount(&stream).unwrap();

    let result = dropdown.handle_event(&Event::click(dropdown.label_id()));
    assert_eq!(result, EventResult::Ignored);
    assert!(!dropdown.is_opened());
}

#[test]
fn test_events_before_mount_are_ignored() {
    let dropdown = Dropdown::new(DropdownConfig::new().with_items(fruits()));
    assert_eq!(
        dropdown.handle_event(&Event::click(dropdown.label_id())),
        EventResult::Ignored
    );
}

// ============================================================================
// Rows
// ============================================================================

#[test]
fn test_row_click_selects() {
    let picked = Arc::new(Mutex::new(None));
    let (dropdown, _stream) = open(DropdownConfig::new().with_items(fruits()).on_select({
        let picked = Arc::clone(&picked);
        move |item, event| {
            *picked.lock().unwrap() = Some((item.label("name"), event.target().map(String::from)))
        }
    }));

    let click = Event::click(dropdown.row_id(2));
    assert!(dropdown.handle_event(&click).is_handled());

    assert_eq!(
        *picked.lock().unwrap(),
        Some((Some("Cherry".to_string()), Some(dropdown.row_id(2))))
    );
    assert!(!dropdown.is_opened());
}

#[test]
fn test_nested_row_content_selects_its_row() {
    let (dropdown, _stream) = open(
        DropdownConfig::new()
            .with_items(fruits())
            .with_item_template(|item| {
                let name = item.label("name").unwrap_or_default();
                Element::box_()
                    .child(Element::text(name.clone()).id(format!("inner-{name}")))
            }),
    );

    dropdown.handle_event(&Event::click("inner-Banana"));
    assert_eq!(dropdown.active(), Some(Item::named("Banana")));
}

#[test]
fn test_row_index_follows_filtered_list() {
    let (dropdown, _stream) = open(DropdownConfig::new().with_items(fruits()));
    dropdown.handle_event(&Event::input(dropdown.search_input_id(), "err"));
    dropdown.render().unwrap();

    dropdown.handle_event(&Event::click(dropdown.row_id(0)));
    assert_eq!(
        dropdown.active().and_then(|i| i.label("name")).as_deref(),
        Some("Cherry")
    );
}

#[test]
fn test_stale_row_click_is_consumed_without_selecting() {
    let calls = Arc::new(AtomicUsize::new(0));
    let (dropdown, _stream) = open(DropdownConfig::new().with_items(fruits()).on_select({
        let calls = Arc::clone(&calls);
        move |_, _| {
            calls.fetch_add(1, Ordering::SeqCst);
        }
    }));

    // Rows rendered for the full list, then the filter narrows it
    dropdown.set_search_text("err");
    let result = dropdown.handle_event(&Event::click(dropdown.row_id(2)));

    assert!(result.is_handled());
    assert_eq!(calls.load(Ordering::SeqCst), 0);
    assert!(dropdown.is_opened());
}

// ============================================================================
// Search input and other targets
// ============================================================================

#[test]
fn test_input_updates_search_text() {
    let (dropdown, _stream) = open(DropdownConfig::new().with_items(fruits()));
    let result = dropdown.handle_event(&Event::input(dropdown.search_input_id(), "an"));

    assert!(result.is_handled());
    assert_eq!(dropdown.search_text(), "an");
    assert_eq!(dropdown.filtered_items().len(), 1);
}

#[test]
fn test_input_for_other_target_ignored() {
    let (dropdown, _stream) = open(DropdownConfig::new().with_items(fruits()));
    let result = dropdown.handle_event(&Event::input("other-input", "an"));

    assert!(!result.is_handled());
    assert_eq!(dropdown.search_text(), "");
}

#[test]
fn test_click_on_search_input_ignored() {
    let (dropdown, _stream) = open(DropdownConfig::new().with_items(fruits()));
    let result = dropdown.handle_event(&Event::click(dropdown.search_input_id()));

    assert_eq!(result, EventResult::Ignored);
    assert!(dropdown.is_opened());
}

#[test]
fn test_focus_events_ignored() {
    let (dropdown, _stream) = open(DropdownConfig::new().with_items(fruits()));
    let result = dropdown.handle_event(&Event::Focus {
        target: dropdown.search_input_id(),
    });
    assert_eq!(result, EventResult::Ignored);
}
