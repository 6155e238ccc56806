use super::Style;

/// Rectangle representing a region on screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rect {
    pub x: u16,
    pub y: u16,
    pub width: u16,
    pub height: u16,
}

impl Rect {
    pub const fn new(x: u16, y: u16, width: u16, height: u16) -> Self {
        Self { x, y, width, height }
    }

    /// Horizontally centered rect of `width`, clamped to the area
    pub fn centered_x(area_width: u16, y: u16, width: u16, height: u16) -> Self {
        let width = width.min(area_width);
        let x = (area_width - width) / 2;
        Self { x, y, width, height }
    }

    /// Shrink by `margin` cells on every side
    pub fn inner(&self, margin: u16) -> Self {
        Self {
            x: self.x.saturating_add(margin),
            y: self.y.saturating_add(margin),
            width: self.width.saturating_sub(margin * 2),
            height: self.height.saturating_sub(margin * 2),
        }
    }

    pub fn right(&self) -> u16 {
        self.x.saturating_add(self.width)
    }

    pub fn bottom(&self) -> u16 {
        self.y.saturating_add(self.height)
    }

    pub fn contains(&self, x: u16, y: u16) -> bool {
        x >= self.x && x < self.right() && y >= self.y && y < self.bottom()
    }
}

/// Graphics abstraction for drawing to the screen
pub trait Graphics {
    /// Put a single character at the given position
    fn put_char(&mut self, x: u16, y: u16, ch: char);

    /// Put a string starting at the given position
    fn put_str(&mut self, x: u16, y: u16, s: &str);

    /// Set the current style for subsequent drawing operations
    fn set_style(&mut self, style: Style);

    /// Draw a box with optional title
    fn draw_box(&mut self, rect: Rect, title: Option<&str>);

    /// Get the current drawing surface size (width, height)
    fn size(&self) -> (u16, u16);
}

/// Window onto part of another [`Graphics`]: coordinates are relative to
/// `area` and anything outside it is clipped.
pub struct Viewport<'a> {
    inner: &'a mut dyn Graphics,
    area: Rect,
}

impl<'a> Viewport<'a> {
    pub fn new(inner: &'a mut dyn Graphics, area: Rect) -> Self {
        Self { inner, area }
    }

    fn translate(&self, x: u16, y: u16) -> Option<(u16, u16)> {
        (x < self.area.width && y < self.area.height).then(|| (self.area.x + x, self.area.y + y))
    }
}

impl Graphics for Viewport<'_> {
    fn put_char(&mut self, x: u16, y: u16, ch: char) {
        if let Some((x, y)) = self.translate(x, y) {
            self.inner.put_char(x, y, ch);
        }
    }

    fn put_str(&mut self, x: u16, y: u16, s: &str) {
        let room = self.area.width.saturating_sub(x) as usize;
        if let Some((x, y)) = self.translate(x, y) {
            let clipped: String = s.chars().take(room).collect();
            self.inner.put_str(x, y, &clipped);
        }
    }

    fn set_style(&mut self, style: Style) {
        self.inner.set_style(style);
    }

    fn draw_box(&mut self, rect: Rect, title: Option<&str>) {
        if let Some((x, y)) = self.translate(rect.x, rect.y) {
            let width = rect.width.min(self.area.width - rect.x);
            let height = rect.height.min(self.area.height - rect.y);
            self.inner.draw_box(Rect::new(x, y, width, height), title);
        }
    }

    fn size(&self) -> (u16, u16) {
        (self.area.width, self.area.height)
    }
}
