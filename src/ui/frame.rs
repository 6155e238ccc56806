use std::collections::VecDeque;

use super::{Color, Graphics, Rect, Style};

const CONSOLE_LINES: u16 = 4;
const CONSOLE_CAPACITY: usize = 100;

/// Chrome around the active pane: a header bar and a message console
pub struct Frame {
    messages: VecDeque<String>,
    pub title: String,
    pub source_name: String,
}

impl Frame {
    pub fn new(title: &str) -> Self {
        Self {
            messages: VecDeque::with_capacity(CONSOLE_CAPACITY),
            title: title.to_string(),
            source_name: String::new(),
        }
    }

    /// Push a message to the console ring buffer
    pub fn push_message(&mut self, msg: impl Into<String>) {
        if self.messages.len() >= CONSOLE_CAPACITY {
            self.messages.pop_front();
        }
        self.messages.push_back(msg.into());
    }

    pub fn messages(&self) -> impl Iterator<Item = &str> {
        self.messages.iter().map(String::as_str)
    }

    /// Region left for the active pane
    pub fn content_area(width: u16, height: u16) -> Rect {
        let reserved = 1 + CONSOLE_LINES + 2;
        Rect::new(0, 1, width, height.saturating_sub(reserved))
    }

    pub fn render(&self, g: &mut dyn Graphics) {
        let (width, height) = g.size();

        // Header bar
        g.set_style(Style::new().fg(Color::WHITE).bg(Color::SELECTION_BG));
        g.put_str(0, 0, &" ".repeat(width as usize));
        g.set_style(Style::new().fg(Color::WHITE).bg(Color::SELECTION_BG).bold());
        g.put_str(1, 0, &self.title);
        if !self.source_name.is_empty() {
            let x = width.saturating_sub(self.source_name.chars().count() as u16 + 1);
            g.set_style(Style::new().fg(Color::GRAY).bg(Color::SELECTION_BG));
            g.put_str(x, 0, &self.source_name);
        }

        // Message console, newest last
        let console_height = CONSOLE_LINES + 2;
        if height <= console_height + 1 {
            return;
        }
        let console = Rect::new(0, height - console_height, width, console_height);
        g.set_style(Style::new().fg(Color::DARK_GRAY));
        g.draw_box(console, Some(" Messages "));

        let text_width = width.saturating_sub(4) as usize;
        let skip = self.messages.len().saturating_sub(CONSOLE_LINES as usize);
        g.set_style(Style::new().fg(Color::GRAY));
        for (row, msg) in self.messages.iter().skip(skip).enumerate() {
            let line: String = msg.chars().take(text_width).collect();
            g.put_str(2, console.y + 1 + row as u16, &line);
        }
    }
}
