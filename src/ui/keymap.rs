use super::{InputEvent, KeyCode};

/// Pattern for matching key inputs
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyPattern {
    /// Special key (arrows, function keys, etc.) without Ctrl/Alt
    Key(KeyCode),
    /// Ctrl + character
    Ctrl(char),
}

impl KeyPattern {
    /// Check if this pattern matches an input event
    pub fn matches(&self, event: &InputEvent) -> bool {
        match self {
            KeyPattern::Key(code) => {
                event.key == *code && !event.modifiers.ctrl && !event.modifiers.alt
            }
            KeyPattern::Ctrl(ch) => {
                matches!(event.key, KeyCode::Char(c) if c == *ch) && event.modifiers.ctrl
            }
        }
    }

    /// Get a display string for this key pattern (for help screens)
    pub fn display(&self) -> String {
        match self {
            KeyPattern::Key(KeyCode::F(n)) => format!("F{}", n),
            KeyPattern::Key(code) => format!("{:?}", code),
            KeyPattern::Ctrl(ch) => format!("Ctrl+{}", ch.to_ascii_uppercase()),
        }
    }
}

/// A single key binding
#[derive(Debug, Clone)]
pub struct KeyBinding {
    pub pattern: KeyPattern,
    pub action: &'static str,
    pub description: &'static str,
}

/// Key bindings for a pane, built with `bind_key` / `bind_ctrl`.
///
/// Plain characters are never bound: they belong to whichever field has focus.
#[derive(Debug, Clone, Default)]
pub struct Keymap {
    bindings: Vec<KeyBinding>,
}

impl Keymap {
    pub fn new() -> Self {
        Self {
            bindings: Vec::new(),
        }
    }

    pub fn bind_key(
        mut self,
        key: KeyCode,
        action: &'static str,
        description: &'static str,
    ) -> Self {
        self.bindings.push(KeyBinding {
            pattern: KeyPattern::Key(key),
            action,
            description,
        });
        self
    }

    pub fn bind_ctrl(mut self, ch: char, action: &'static str, description: &'static str) -> Self {
        self.bindings.push(KeyBinding {
            pattern: KeyPattern::Ctrl(ch),
            action,
            description,
        });
        self
    }

    /// Look up the action for an input event
    pub fn lookup(&self, event: &InputEvent) -> Option<&'static str> {
        self.bindings
            .iter()
            .find(|b| b.pattern.matches(event))
            .map(|b| b.action)
    }

    /// Get all bindings (for help screens)
    pub fn bindings(&self) -> &[KeyBinding] {
        &self.bindings
    }

    /// Bindings of both keymaps, `self` first
    pub fn merged(&self, other: &Keymap) -> Keymap {
        let mut bindings = self.bindings.clone();
        bindings.extend(other.bindings.iter().cloned());
        Keymap { bindings }
    }
}
