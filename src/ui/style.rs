/// RGB Color representation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub const WHITE: Color = Color::new(255, 255, 255);
    pub const GRAY: Color = Color::new(128, 128, 128);
    pub const DARK_GRAY: Color = Color::new(64, 64, 64);
    pub const CYAN: Color = Color::new(0, 200, 200);
    pub const ORANGE: Color = Color::new(255, 165, 0);
    pub const SELECTION_BG: Color = Color::new(30, 60, 110);
}

/// Text style with foreground, background, and attributes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Style {
    pub fg: Option<Color>,
    pub bg: Option<Color>,
    pub bold: bool,
}

impl Style {
    pub const fn new() -> Self {
        Self {
            fg: None,
            bg: None,
            bold: false,
        }
    }

    pub const fn fg(mut self, color: Color) -> Self {
        self.fg = Some(color);
        self
    }

    pub const fn bg(mut self, color: Color) -> Self {
        self.bg = Some(color);
        self
    }

    pub const fn bold(mut self) -> Self {
        self.bold = true;
        self
    }
}

/// Styles shared by the field renderers
pub mod field {
    use super::{Color, Style};

    pub const LABEL: Style = Style::new().fg(Color::CYAN);
    pub const LABEL_FOCUSED: Style = Style::new().fg(Color::CYAN).bold();
    pub const BRACKET: Style = Style::new().fg(Color::GRAY);
    pub const BRACKET_FOCUSED: Style = Style::new().fg(Color::ORANGE);
    pub const VALUE: Style = Style::new().fg(Color::WHITE);
    pub const PLACEHOLDER: Style = Style::new().fg(Color::DARK_GRAY);
    pub const CURSOR: Style = Style::new().fg(Color::WHITE).bg(Color::SELECTION_BG);
}
