use std::io::{self, Stdout};
use std::time::Duration;

use crossterm::{
    event::{self, Event, KeyCode as CrosstermKeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    buffer::Buffer,
    layout::Rect as RatatuiRect,
    style::{Color as RatatuiColor, Modifier, Style as RatatuiStyle},
    widgets::{Block, Widget},
    Terminal,
};

use super::{Color, Graphics, InputEvent, InputSource, KeyCode, Modifiers, Rect, Style};

/// Terminal in raw mode on the alternate screen
pub struct RatatuiBackend {
    terminal: Terminal<CrosstermBackend<Stdout>>,
}

impl RatatuiBackend {
    /// Does not touch terminal modes until `start`
    pub fn new() -> io::Result<Self> {
        let terminal = Terminal::new(CrosstermBackend::new(io::stdout()))?;
        Ok(Self { terminal })
    }

    pub fn start(&mut self) -> io::Result<()> {
        enable_raw_mode()?;
        execute!(io::stdout(), EnterAlternateScreen)?;
        self.terminal.clear()
    }

    pub fn stop(&mut self) -> io::Result<()> {
        disable_raw_mode()?;
        execute!(io::stdout(), LeaveAlternateScreen)?;
        self.terminal.show_cursor()
    }

    /// Draw one frame through `render`
    pub fn draw(&mut self, render: impl FnOnce(&mut dyn Graphics)) -> io::Result<()> {
        self.terminal.draw(|f| {
            let mut surface = BufferSurface::new(f.buffer_mut());
            render(&mut surface);
        })?;
        Ok(())
    }
}

impl From<Color> for RatatuiColor {
    fn from(color: Color) -> Self {
        RatatuiColor::Rgb(color.r, color.g, color.b)
    }
}

impl From<Style> for RatatuiStyle {
    fn from(style: Style) -> Self {
        let mut converted = RatatuiStyle::default();
        if let Some(fg) = style.fg {
            converted = converted.fg(fg.into());
        }
        if let Some(bg) = style.bg {
            converted = converted.bg(bg.into());
        }
        if style.bold {
            converted = converted.add_modifier(Modifier::BOLD);
        }
        converted
    }
}

/// [`Graphics`] over a ratatui buffer. Writes outside the buffer are dropped.
pub struct BufferSurface<'a> {
    buf: &'a mut Buffer,
    style: RatatuiStyle,
}

impl<'a> BufferSurface<'a> {
    pub fn new(buf: &'a mut Buffer) -> Self {
        Self {
            buf,
            style: RatatuiStyle::default(),
        }
    }
}

impl Graphics for BufferSurface<'_> {
    fn put_char(&mut self, x: u16, y: u16, ch: char) {
        if let Some(cell) = self.buf.cell_mut((x, y)) {
            cell.set_char(ch).set_style(self.style);
        }
    }

    fn put_str(&mut self, x: u16, y: u16, s: &str) {
        let columns = (x..=u16::MAX).zip(s.chars());
        for (cx, ch) in columns {
            let Some(cell) = self.buf.cell_mut((cx, y)) else {
                break;
            };
            cell.set_char(ch).set_style(self.style);
        }
    }

    fn set_style(&mut self, style: Style) {
        self.style = style.into();
    }

    fn draw_box(&mut self, rect: Rect, title: Option<&str>) {
        let area = RatatuiRect::new(rect.x, rect.y, rect.width, rect.height).intersection(self.buf.area);
        let mut block = Block::bordered().border_style(self.style).title_style(self.style);
        if let Some(title) = title {
            block = block.title(title);
        }
        block.render(area, self.buf);
    }

    fn size(&self) -> (u16, u16) {
        (self.buf.area.width, self.buf.area.height)
    }
}

impl InputSource for RatatuiBackend {
    fn poll_event(&mut self, timeout: Duration) -> Option<InputEvent> {
        if !event::poll(timeout).ok()? {
            return None;
        }
        match event::read().ok()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => Some(key.into()),
            _ => None,
        }
    }
}

impl From<KeyEvent> for InputEvent {
    fn from(event: KeyEvent) -> Self {
        let key = match event.code {
            CrosstermKeyCode::Char(c) => KeyCode::Char(c),
            CrosstermKeyCode::Enter => KeyCode::Enter,
            CrosstermKeyCode::Esc => KeyCode::Escape,
            CrosstermKeyCode::Backspace => KeyCode::Backspace,
            CrosstermKeyCode::Tab => KeyCode::Tab,
            CrosstermKeyCode::BackTab => KeyCode::BackTab,
            CrosstermKeyCode::Up => KeyCode::Up,
            CrosstermKeyCode::Down => KeyCode::Down,
            CrosstermKeyCode::Left => KeyCode::Left,
            CrosstermKeyCode::Right => KeyCode::Right,
            CrosstermKeyCode::Home => KeyCode::Home,
            CrosstermKeyCode::End => KeyCode::End,
            CrosstermKeyCode::Delete => KeyCode::Delete,
            CrosstermKeyCode::F(n) => KeyCode::F(n),
            _ => KeyCode::Unknown,
        };
        let modifiers = Modifiers {
            ctrl: event.modifiers.contains(KeyModifiers::CONTROL),
            alt: event.modifiers.contains(KeyModifiers::ALT),
            shift: event.modifiers.contains(KeyModifiers::SHIFT),
        };
        InputEvent::new(key, modifiers)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_event_conversion() {
        let ctrl_r = KeyEvent::new(CrosstermKeyCode::Char('r'), KeyModifiers::CONTROL);
        assert_eq!(InputEvent::from(ctrl_r), InputEvent::ctrl('r'));

        let back_tab = KeyEvent::new(CrosstermKeyCode::BackTab, KeyModifiers::SHIFT);
        assert_eq!(InputEvent::from(back_tab).key, KeyCode::BackTab);

        let insert = KeyEvent::new(CrosstermKeyCode::Insert, KeyModifiers::NONE);
        assert_eq!(InputEvent::from(insert).key, KeyCode::Unknown);
    }

    #[test]
    fn test_surface_writes_styled_cells_and_clips() {
        let mut buf = Buffer::empty(RatatuiRect::new(0, 0, 6, 2));
        let mut surface = BufferSurface::new(&mut buf);
        assert_eq!(surface.size(), (6, 2));

        surface.set_style(Style::new().fg(Color::ORANGE).bold());
        surface.put_str(3, 0, "Length");
        surface.put_char(9, 9, 'x');

        assert_eq!(buf[(3, 0)].symbol(), "L");
        assert_eq!(buf[(5, 0)].symbol(), "n");
        assert_eq!(buf[(3, 0)].fg, RatatuiColor::Rgb(255, 165, 0));
        assert!(buf[(3, 0)].modifier.contains(Modifier::BOLD));
    }

    #[test]
    fn test_surface_draws_titled_box() {
        let mut buf = Buffer::empty(RatatuiRect::new(0, 0, 10, 3));
        BufferSurface::new(&mut buf).draw_box(Rect::new(0, 0, 10, 3), Some("Hi"));
        assert_eq!(buf[(0, 0)].symbol(), "┌");
        assert_eq!(buf[(1, 0)].symbol(), "H");
        assert_eq!(buf[(9, 2)].symbol(), "┘");
    }
}
