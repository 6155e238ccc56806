use super::{Graphics, Rect, Style};

/// In-memory character grid implementing [`Graphics`].
///
/// Styles are tracked per cell so callers can check what is highlighted,
/// which makes it usable for snapshot tests and external automation.
pub struct TextCanvas {
    width: u16,
    height: u16,
    cells: Vec<(char, Style)>,
    current_style: Style,
}

impl TextCanvas {
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            width,
            height,
            cells: vec![(' ', Style::default()); width as usize * height as usize],
            current_style: Style::default(),
        }
    }

    fn index(&self, x: u16, y: u16) -> Option<usize> {
        (x < self.width && y < self.height).then(|| y as usize * self.width as usize + x as usize)
    }

    pub fn char_at(&self, x: u16, y: u16) -> Option<char> {
        self.index(x, y).map(|i| self.cells[i].0)
    }

    pub fn style_at(&self, x: u16, y: u16) -> Option<Style> {
        self.index(x, y).map(|i| self.cells[i].1)
    }

    /// Row `y` with trailing blanks removed
    pub fn line(&self, y: u16) -> String {
        if y >= self.height {
            return String::new();
        }
        let start = y as usize * self.width as usize;
        let row: String = self.cells[start..start + self.width as usize]
            .iter()
            .map(|(ch, _)| *ch)
            .collect();
        row.trim_end().to_string()
    }

    /// Text inside `rect`, one string per row
    pub fn region(&self, rect: Rect) -> Vec<String> {
        (rect.y..rect.bottom().min(self.height))
            .map(|y| {
                (rect.x..rect.right().min(self.width))
                    .filter_map(|x| self.char_at(x, y))
                    .collect::<String>()
                    .trim_end()
                    .to_string()
            })
            .collect()
    }

    pub fn contains(&self, needle: &str) -> bool {
        (0..self.height).any(|y| self.line(y).contains(needle))
    }

    /// Position of the first occurrence of `needle`
    pub fn find(&self, needle: &str) -> Option<(u16, u16)> {
        (0..self.height).find_map(|y| {
            let line = self.line(y);
            line.find(needle)
                .map(|byte_idx| (line[..byte_idx].chars().count() as u16, y))
        })
    }

    pub fn to_text(&self) -> String {
        (0..self.height)
            .map(|y| self.line(y))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl Graphics for TextCanvas {
    fn put_char(&mut self, x: u16, y: u16, ch: char) {
        if let Some(i) = self.index(x, y) {
            self.cells[i] = (ch, self.current_style);
        }
    }

    fn put_str(&mut self, x: u16, y: u16, s: &str) {
        for (offset, ch) in s.chars().enumerate() {
            let Some(cx) = x.checked_add(offset as u16) else {
                break;
            };
            if cx >= self.width {
                break;
            }
            self.put_char(cx, y, ch);
        }
    }

    fn set_style(&mut self, style: Style) {
        self.current_style = style;
    }

    fn draw_box(&mut self, rect: Rect, title: Option<&str>) {
        if rect.width < 2 || rect.height < 2 {
            return;
        }
        let right = rect.right() - 1;
        let bottom = rect.bottom() - 1;
        for x in rect.x + 1..right {
            self.put_char(x, rect.y, '─');
            self.put_char(x, bottom, '─');
        }
        for y in rect.y + 1..bottom {
            self.put_char(rect.x, y, '│');
            self.put_char(right, y, '│');
        }
        self.put_char(rect.x, rect.y, '┌');
        self.put_char(right, rect.y, '┐');
        self.put_char(rect.x, bottom, '└');
        self.put_char(right, bottom, '┘');
        if let Some(title) = title {
            let max = rect.width.saturating_sub(2) as usize;
            let title: String = title.chars().take(max).collect();
            self.put_str(rect.x + 1, rect.y, &title);
        }
    }

    fn size(&self) -> (u16, u16) {
        (self.width, self.height)
    }
}
