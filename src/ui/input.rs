use std::time::Duration;

/// Key codes for keyboard input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyCode {
    Char(char),
    Enter,
    Escape,
    Backspace,
    Tab,
    BackTab,
    Up,
    Down,
    Left,
    Right,
    Home,
    End,
    Delete,
    F(u8),
    /// Anything the backend has no mapping for
    Unknown,
}

/// Modifier key state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Modifiers {
    pub ctrl: bool,
    pub alt: bool,
    pub shift: bool,
}

impl Modifiers {
    pub const fn none() -> Self {
        Self {
            ctrl: false,
            alt: false,
            shift: false,
        }
    }

    pub const fn ctrl() -> Self {
        Self {
            ctrl: true,
            alt: false,
            shift: false,
        }
    }
}

/// Input event from the user
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InputEvent {
    pub key: KeyCode,
    pub modifiers: Modifiers,
}

impl InputEvent {
    pub const fn new(key: KeyCode, modifiers: Modifiers) -> Self {
        Self { key, modifiers }
    }

    pub const fn key(key: KeyCode) -> Self {
        Self::new(key, Modifiers::none())
    }

    pub const fn char(ch: char) -> Self {
        Self::key(KeyCode::Char(ch))
    }

    pub const fn ctrl(ch: char) -> Self {
        Self::new(KeyCode::Char(ch), Modifiers::ctrl())
    }

    /// Printable character typed without Ctrl/Alt
    pub fn typed_char(&self) -> Option<char> {
        match self.key {
            KeyCode::Char(c) if !self.modifiers.ctrl && !self.modifiers.alt => Some(c),
            _ => None,
        }
    }
}

/// Trait for reading input events
pub trait InputSource {
    /// Poll for an input event with a timeout
    /// Returns None if no event is available within the timeout
    fn poll_event(&mut self, timeout: Duration) -> Option<InputEvent>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_typed_char() {
        assert_eq!(InputEvent::char('a').typed_char(), Some('a'));
        assert_eq!(InputEvent::ctrl('a').typed_char(), None);
        assert_eq!(InputEvent::key(KeyCode::Enter).typed_char(), None);
    }
}
