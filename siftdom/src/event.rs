/// High-level events with element targeting
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Mouse click event. `target` is `None` when nothing was hit.
    Click {
        target: Option<String>,
        x: u16,
        y: u16,
        button: MouseButton,
    },
    /// Text field value changed
    Input { target: String, value: String },
    /// Element gained focus
    Focus { target: String },
    /// Element lost focus
    Blur { target: String },
}

impl Event {
    /// Left click on the given element, without coordinates.
    pub fn click(target: impl Into<String>) -> Self {
        Event::Click {
            target: Some(target.into()),
            x: 0,
            y: 0,
            button: MouseButton::Left,
        }
    }

    /// Left click that hit nothing.
    pub fn click_nowhere() -> Self {
        Event::Click {
            target: None,
            x: 0,
            y: 0,
            button: MouseButton::Left,
        }
    }

    pub fn input(target: impl Into<String>, value: impl Into<String>) -> Self {
        Event::Input {
            target: target.into(),
            value: value.into(),
        }
    }

    /// The element this event is aimed at, if any.
    pub fn target(&self) -> Option<&str> {
        match self {
            Event::Click { target, .. } => target.as_deref(),
            Event::Input { target, .. } | Event::Focus { target } | Event::Blur { target } => {
                Some(target)
            }
        }
    }

    /// Translate a crossterm mouse press into a click on `target`.
    ///
    /// Only button presses become clicks; moves, drags, releases and scrolls
    /// return `None`. Hit testing is the host's job.
    pub fn from_mouse(
        mouse: &crossterm::event::MouseEvent,
        target: Option<String>,
    ) -> Option<Self> {
        match mouse.kind {
            crossterm::event::MouseEventKind::Down(button) => Some(Event::Click {
                target,
                x: mouse.column,
                y: mouse.row,
                button: button.into(),
            }),
            _ => None,
        }
    }

    /// Whether this event belongs on the pointer stream.
    pub fn is_pointer(&self) -> bool {
        matches!(self, Event::Click { .. })
    }
}

/// Mouse button
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    Left,
    Right,
    Middle,
}

// Conversion from crossterm types
impl From<crossterm::event::MouseButton> for MouseButton {
    fn from(btn: crossterm::event::MouseButton) -> Self {
        use crossterm::event::MouseButton as CtBtn;
        match btn {
            CtBtn::Left => MouseButton::Left,
            CtBtn::Right => MouseButton::Right,
            CtBtn::Middle => MouseButton::Middle,
        }
    }
}
