//! GameView: maps a [`GameInfo`] snapshot into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.
//!
//! Layout, in terminal cells relative to the view origin:
//!
//! ```text
//! ┌───────GAME─────────┐┌───────STAT───────┐
//! │                    ││ Score / High /   │
//! │   20 rows x 10     ││ Level            │
//! │   cells, 2 columns ││                  │
//! │   per cell         │└──────────────────┘
//! │                    │┌───────NEXT───────┐
//! │                    ││   4x4 preview    │
//! ...                   └──────────────────┘
//! ```

use crate::core::GameInfo;
use crate::fb::{CellStyle, FrameBuffer, Palette};
use crate::types::{DisplayFlag, FIELD_HEIGHT, FIELD_WIDTH, PIECE_SIZE};

/// Terminal columns per field cell
const CELL_W: u16 = 2;

const FIELD_BOX_W: u16 = CELL_W * FIELD_WIDTH as u16 + 2;
const FIELD_BOX_H: u16 = FIELD_HEIGHT as u16 + 2;
const SIDE_BOX_W: u16 = CELL_W * FIELD_WIDTH as u16;
const SIDE_BOX_H: u16 = 8;

/// Total size of the rendered view
pub const VIEW_WIDTH: u16 = FIELD_BOX_W + SIDE_BOX_W;
pub const VIEW_HEIGHT: u16 = FIELD_BOX_H;

const PAUSE_GLYPH: [[bool; 3]; 5] = [
    [true, false, false],
    [true, true, false],
    [true, true, true],
    [true, true, false],
    [true, false, false],
];

const FRAME: CellStyle = CellStyle::new(Palette::Accent, Palette::Black);
const BANNER: CellStyle = CellStyle::new(Palette::Black, Palette::Accent);

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// Where the view sits inside a larger viewport
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Anchor {
    #[default]
    Center,
    TopLeft,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct GameView {
    anchor: Anchor,
}

impl GameView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_anchor(mut self, anchor: Anchor) -> Self {
        self.anchor = anchor;
        self
    }

    /// Top-left corner of the view inside `viewport`
    pub fn origin(&self, viewport: Viewport) -> (u16, u16) {
        match self.anchor {
            Anchor::Center => (
                viewport.width.saturating_sub(VIEW_WIDTH) / 2,
                viewport.height.saturating_sub(VIEW_HEIGHT) / 2,
            ),
            Anchor::TopLeft => (0, 0),
        }
    }

    /// Render a snapshot into an existing framebuffer, resizing it to the viewport.
    pub fn render_into(&self, info: &GameInfo, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.fill(Default::default());

        let (ox, oy) = self.origin(viewport);
        let (sx, sy) = (ox + FIELD_BOX_W, oy);
        let (nx, ny) = (ox + FIELD_BOX_W, oy + SIDE_BOX_H);

        fb.draw_box(ox, oy, FIELD_BOX_W, FIELD_BOX_H, Some((9, "GAME")), FRAME);
        fb.draw_box(sx, sy, SIDE_BOX_W, SIDE_BOX_H, Some((8, "STAT")), FRAME);
        fb.draw_box(nx, ny, SIDE_BOX_W, SIDE_BOX_H, Some((8, "NEXT")), FRAME);

        self.draw_field(fb, ox, oy, info);
        self.draw_stat(fb, sx, sy, info);
        self.draw_next(fb, nx, ny, info);

        match info.pause {
            DisplayFlag::Normal => {}
            DisplayFlag::Paused => self.draw_pause_glyph(fb, ox, oy),
            DisplayFlag::GameOver => fb.put_str(ox + 6, oy + 10, "GAME OVER", BANNER),
        }
    }

    /// Allocate a framebuffer and render into it.
    pub fn render(&self, info: &GameInfo, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(info, viewport, &mut fb);
        fb
    }

    fn draw_field(&self, fb: &mut FrameBuffer, ox: u16, oy: u16, info: &GameInfo) {
        for (y, row) in info.field.iter().enumerate() {
            for (x, &id) in row.iter().enumerate() {
                if let Some(color) = Palette::for_color_id(id) {
                    let px = ox + 1 + CELL_W * x as u16;
                    fb.fill_rect(px, oy + 1 + y as u16, CELL_W, 1, ' ', CellStyle::solid(color));
                }
            }
        }
    }

    fn draw_stat(&self, fb: &mut FrameBuffer, sx: u16, sy: u16, info: &GameInfo) {
        fb.put_str(sx + 2, sy + 2, &format!("Score:      {}", info.score), FRAME);
        fb.put_str(sx + 2, sy + 3, &format!("High Score: {}", info.high_score), FRAME);
        fb.put_str(sx + 2, sy + 5, &format!("Level:      {}", info.level), FRAME);
    }

    fn draw_next(&self, fb: &mut FrameBuffer, nx: u16, ny: u16, info: &GameInfo) {
        for y in 0..PIECE_SIZE {
            for x in 0..PIECE_SIZE {
                if let Some(color) = Palette::for_color_id(info.next[y][x]) {
                    let px = nx + 6 + CELL_W * x as u16;
                    fb.fill_rect(px, ny + 3 + y as u16, CELL_W, 1, ' ', CellStyle::solid(color));
                }
            }
        }
    }

    fn draw_pause_glyph(&self, fb: &mut FrameBuffer, ox: u16, oy: u16) {
        for (y, row) in PAUSE_GLYPH.iter().enumerate() {
            for (x, &on) in row.iter().enumerate() {
                if on {
                    let px = ox + 8 + CELL_W * x as u16;
                    let style = CellStyle::solid(Palette::Accent);
                    fb.fill_rect(px, oy + 8 + y as u16, CELL_W, 1, ' ', style);
                }
            }
        }
    }
}
