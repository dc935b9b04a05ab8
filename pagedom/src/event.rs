/// Page events, targeted by element ID.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// A control lost focus.
    Blur { target: String },
    /// A control's value changed while typing.
    Input { target: String, value: String },
    /// A form submission was requested.
    Submit { target: String },
    /// Primary click. `target` is `None` when nothing was hit.
    Click { target: Option<String> },
    /// Any mouse button went down.
    MouseDown { target: Option<String> },
    /// Key press, targeted at the focused element.
    Key { target: Option<String>, key: Key },
    /// The viewport scrolled to a new vertical offset.
    Scroll { y: u32 },
    /// An observed element entered the viewport.
    Intersect { target: String },
}

impl Event {
    /// The element the event is aimed at, if any.
    pub fn target(&self) -> Option<&str> {
        match self {
            Self::Blur { target }
            | Self::Input { target, .. }
            | Self::Submit { target }
            | Self::Intersect { target } => Some(target),
            Self::Click { target } | Self::MouseDown { target } | Self::Key { target, .. } => {
                target.as_deref()
            }
            Self::Scroll { .. } => None,
        }
    }
}

/// Simplified key representation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Char(char),
    Enter,
    Backspace,
    Delete,
    Tab,
    BackTab,
    Escape,
    Up,
    Down,
    Left,
    Right,
    Home,
    End,
    PageUp,
    PageDown,
}
