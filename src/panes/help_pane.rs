use std::any::Any;

use crate::ui::{Action, Color, Graphics, InputEvent, KeyCode, Keymap, Pane, Rect, Style};

/// Key binding reference for the editor and the host commands
pub struct HelpPane {
    keymap: Keymap,
    /// (key, description) rows shown to the user
    entries: Vec<(String, String)>,
    return_to: &'static str,
    scroll: usize,
}

impl HelpPane {
    pub const ID: &'static str = "help";

    pub fn new(return_to: &'static str, shown: &Keymap) -> Self {
        Self {
            keymap: Keymap::new()
                .bind_key(KeyCode::Escape, "close", "Close help")
                .bind_key(KeyCode::F(1), "close", "Close help")
                .bind_key(KeyCode::Up, "up", "Scroll up")
                .bind_key(KeyCode::Down, "down", "Scroll down"),
            entries: shown
                .bindings()
                .iter()
                .map(|b| (b.pattern.display(), b.description.to_string()))
                .collect(),
            return_to,
            scroll: 0,
        }
    }

    pub fn entries(&self) -> &[(String, String)] {
        &self.entries
    }
}

impl Pane for HelpPane {
    fn id(&self) -> &'static str {
        Self::ID
    }

    fn handle_input(&mut self, event: InputEvent) -> Action {
        match self.keymap.lookup(&event) {
            Some("close") => Action::SwitchPane(self.return_to),
            Some("up") => {
                self.scroll = self.scroll.saturating_sub(1);
                Action::None
            }
            Some("down") => {
                if self.scroll + 1 < self.entries.len() {
                    self.scroll += 1;
                }
                Action::None
            }
            _ => Action::None,
        }
    }

    fn render(&self, g: &mut dyn Graphics) {
        let (width, height) = g.size();
        let rect = Rect::centered_x(width, 0, 50, height.min(self.entries.len() as u16 + 5));

        g.set_style(Style::new().fg(Color::CYAN));
        g.draw_box(rect, Some(" Help "));

        let inner = rect.inner(1);
        let visible = inner.height.saturating_sub(2) as usize;
        let scroll = self.scroll.min(self.entries.len().saturating_sub(visible));

        for (i, (key, desc)) in self.entries.iter().skip(scroll).take(visible).enumerate() {
            let y = inner.y + 1 + i as u16;
            g.set_style(Style::new().fg(Color::CYAN).bold());
            g.put_str(inner.x + 1, y, &format!("{:<12}", key));
            g.set_style(Style::new().fg(Color::WHITE));
            let max_desc = inner.width.saturating_sub(14) as usize;
            let desc: String = desc.chars().take(max_desc).collect();
            g.put_str(inner.x + 13, y, &desc);
        }

        g.set_style(Style::new().fg(Color::DARK_GRAY));
        g.put_str(inner.x + 1, rect.bottom().saturating_sub(2), "[ESC/F1] Close  [Up/Down] Scroll");
    }

    fn keymap(&self) -> &Keymap {
        &self.keymap
    }

    fn on_enter(&mut self) {
        self.scroll = 0;
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}
