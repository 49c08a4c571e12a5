// Example: Fruit Picker
//
// A scripted session against a single dropdown:
// - Host loop that feeds the pointer stream before the widget
// - Search filtering with highlight markup
// - Autofocus of the search input
// - Outside clicks (from crossterm mouse events) closing the list
//
// Each step prints the rendered markup. Logs go to fruit_picker.log.

use std::fs::File;

use crossterm::event::{KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use sift::prelude::*;
use siftdom::to_markup;
use simplelog::{Config, LevelFilter, WriteLogger};

struct Host {
    stream: PointerStream,
    focus: FocusState,
    dropdown: Dropdown,
}

impl Host {
    fn deliver(&mut self, label: &str, event: Event) -> Result<(), SiftError> {
        if event.is_pointer() {
            self.stream.dispatch(&event);
        }
        let result = self.dropdown.handle_event(&event);
        self.focus.apply(&event);

        if self.dropdown.is_dirty() {
            let tree = self.dropdown.render()?;
            self.dropdown.clear_dirty();
            self.dropdown.apply_focus_request(&mut self.focus);
            println!("{label} ({result:?})");
            println!("  {}", to_markup(&tree));
        } else {
            println!("{label} ({result:?}, no change)");
        }
        println!("  focus: {:?}", self.focus.focused());
        Ok(())
    }
}

fn main() -> Result<(), SiftError> {
    // Set up file logging
    let log_file = File::create("fruit_picker.log").expect("Failed to create log file");
    WriteLogger::init(LevelFilter::Trace, Config::default(), log_file)
        .expect("Failed to initialize logger");

    let fruits = ["Apple", "Banana", "Cherry", "Dragon fruit", "Elderberry"]
        .into_iter()
        .map(Item::named)
        .collect();

    let dropdown = Dropdown::new(
        DropdownConfig::new()
            .with_items(fruits)
            .with_placeholder("Search fruit")
            .with_class_name("fruit-picker")
            .with_autofocus(true)
            .on_did_mount(|active| {
                println!("mounted with {:?}", active.and_then(|i| i.label("name")));
            })
            .on_select(|item, _event| {
                println!("selected {:?}", item.label("name"));
            }),
    );

    let stream = PointerStream::new();
    let tree = dropdown.mount(&stream)?;
    dropdown.clear_dirty();
    println!("initial");
    println!("  {}", to_markup(&tree));

    let label = dropdown.label_id();
    let search = dropdown.search_input_id();
    let mut host = Host {
        stream,
        focus: FocusState::new(),
        dropdown,
    };

    host.deliver("open", Event::click(&label))?;
    host.deliver("type 'err'", Event::input(&search, "err"))?;
    let first_row = host.dropdown.row_id(0);
    host.deliver("pick first row", Event::click(first_row))?;
    host.deliver("reopen", Event::click(&label))?;

    // A raw terminal click on empty space, as a crossterm host would see it
    let press = MouseEvent {
        kind: MouseEventKind::Down(MouseButton::Left),
        column: 70,
        row: 20,
        modifiers: KeyModifiers::NONE,
    };
    if let Some(click) = Event::from_mouse(&press, None) {
        host.deliver("click outside", click)?;
    }

    host.dropdown.unmount()?;
    println!("unmounted, subscribers: {}", host.stream.subscriber_count());
    Ok(())
}
