//! Framebuffer and palette for terminal rendering.

use crossterm::style::Color;

/// The fixed terminal palette
///
/// Piece color ids 1-7 map onto the first seven entries. `Accent` is the
/// pink used for frames, labels and the pause glyph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Palette {
    #[default]
    Black,
    Blue,
    Cyan,
    Green,
    Magenta,
    Red,
    Yellow,
    White,
    Accent,
}

impl Palette {
    /// Palette entry for a field or preview color id; `None` for empty cells
    pub fn for_color_id(id: u8) -> Option<Self> {
        match id {
            1 => Some(Palette::Blue),
            2 => Some(Palette::Cyan),
            3 => Some(Palette::Green),
            4 => Some(Palette::Magenta),
            5 => Some(Palette::Red),
            6 => Some(Palette::Yellow),
            7 => Some(Palette::White),
            _ => None,
        }
    }

    pub fn to_color(self) -> Color {
        match self {
            Palette::Black => Color::Black,
            Palette::Blue => Color::DarkBlue,
            Palette::Cyan => Color::DarkCyan,
            Palette::Green => Color::DarkGreen,
            Palette::Magenta => Color::DarkMagenta,
            Palette::Red => Color::DarkRed,
            Palette::Yellow => Color::DarkYellow,
            Palette::White => Color::Grey,
            Palette::Accent => Color::Rgb {
                r: 255,
                g: 102,
                b: 178,
            },
        }
    }
}

/// Foreground/background pair for one cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct CellStyle {
    pub fg: Palette,
    pub bg: Palette,
}

impl CellStyle {
    pub const fn new(fg: Palette, bg: Palette) -> Self {
        Self { fg, bg }
    }

    /// Solid block of one color
    pub const fn solid(color: Palette) -> Self {
        Self::new(color, color)
    }
}

/// A single terminal cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Cell {
    pub ch: char,
    pub style: CellStyle,
}

impl Default for Cell {
    fn default() -> Self {
        Self {
            ch: ' ',
            style: CellStyle::default(),
        }
    }
}

/// 2D framebuffer of styled character cells.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameBuffer {
    width: u16,
    height: u16,
    cells: Vec<Cell>,
}

impl FrameBuffer {
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            width,
            height,
            cells: vec![Cell::default(); width as usize * height as usize],
        }
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    /// Resize, blanking every cell when the size actually changes.
    pub fn resize(&mut self, width: u16, height: u16) {
        if (self.width, self.height) != (width, height) {
            *self = Self::new(width, height);
        }
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    fn index(&self, x: u16, y: u16) -> Option<usize> {
        (x < self.width && y < self.height).then(|| y as usize * self.width as usize + x as usize)
    }

    pub fn get(&self, x: u16, y: u16) -> Option<Cell> {
        self.index(x, y).map(|i| self.cells[i])
    }

    /// Out-of-bounds writes are dropped.
    pub fn put(&mut self, x: u16, y: u16, ch: char, style: CellStyle) {
        if let Some(i) = self.index(x, y) {
            self.cells[i] = Cell { ch, style };
        }
    }

    pub fn put_str(&mut self, x: u16, y: u16, s: &str, style: CellStyle) {
        for (dx, ch) in s.chars().enumerate() {
            let Ok(dx) = u16::try_from(dx) else { break };
            let cx = x.saturating_add(dx);
            if cx >= self.width {
                break;
            }
            self.put(cx, y, ch, style);
        }
    }

    pub fn fill(&mut self, cell: Cell) {
        self.cells.fill(cell);
    }

    pub fn fill_rect(&mut self, x: u16, y: u16, w: u16, h: u16, ch: char, style: CellStyle) {
        for dy in 0..h {
            for dx in 0..w {
                self.put(x.saturating_add(dx), y.saturating_add(dy), ch, style);
            }
        }
    }

    /// Single-line box with an optional title on the top edge at column `title_x`.
    pub fn draw_box(
        &mut self,
        x: u16,
        y: u16,
        w: u16,
        h: u16,
        title: Option<(u16, &str)>,
        style: CellStyle,
    ) {
        if w < 2 || h < 2 {
            return;
        }
        let right = x + w - 1;
        let bottom = y + h - 1;

        for cx in x + 1..right {
            self.put(cx, y, '─', style);
            self.put(cx, bottom, '─', style);
        }
        for cy in y + 1..bottom {
            self.put(x, cy, '│', style);
            self.put(right, cy, '│', style);
        }
        self.put(x, y, '┌', style);
        self.put(right, y, '┐', style);
        self.put(x, bottom, '└', style);
        self.put(right, bottom, '┘', style);

        if let Some((title_x, text)) = title {
            self.put_str(x + title_x, y, text, style);
        }
    }

    /// Row `y` as a plain string, for tests and debugging
    pub fn row_text(&self, y: u16) -> String {
        (0..self.width)
            .filter_map(|x| self.get(x, y))
            .map(|c| c.ch)
            .collect()
    }
}
