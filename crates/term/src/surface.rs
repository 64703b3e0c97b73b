//! Pixel-addressed drawing surface backed by a terminal framebuffer.
//!
//! The game draws in window pixels; each terminal cell covers
//! [`CELL_PX_W`]x[`CELL_PX_H`] pixels. Fills paint every cell they touch;
//! textures are snapped to the cell grid and scaled nearest-neighbour.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::fb::{Cell, CellStyle, FrameBuffer, Rgb};
use crate::types::Rect;

/// Pixels per terminal column.
pub const CELL_PX_W: i32 = 8;

/// Pixels per terminal row (terminal glyphs are roughly twice as tall as wide).
pub const CELL_PX_H: i32 = 16;

/// One texture cell. `None` background lets the destination show through.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TexCell {
    pub ch: char,
    pub fg: Rgb,
    pub bg: Option<Rgb>,
    pub bold: bool,
}

/// A decoded image or rendered text, measured in cells.
#[derive(Debug, PartialEq, Eq)]
pub struct TermTexture {
    width: u16,
    height: u16,
    cells: Vec<Option<TexCell>>,
}

impl TermTexture {
    /// Build from row-major cells; `None` cells are transparent.
    pub fn from_cells(width: u16, height: u16, cells: Vec<Option<TexCell>>) -> Option<Self> {
        if width == 0 || height == 0 || cells.len() != width as usize * height as usize {
            return None;
        }
        Some(Self {
            width,
            height,
            cells,
        })
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    pub fn cell(&self, x: u16, y: u16) -> Option<TexCell> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.cells[y as usize * self.width as usize + x as usize]
    }

    /// Size in window pixels.
    pub fn pixel_size(&self) -> (u32, u32) {
        (
            self.width as u32 * CELL_PX_W as u32,
            self.height as u32 * CELL_PX_H as u32,
        )
    }
}

/// Framebuffer sized for a `width`x`height` pixel window.
#[derive(Debug)]
pub struct TermSurface {
    fb: FrameBuffer,
}

impl TermSurface {
    pub fn new(width_px: u32, height_px: u32) -> Self {
        let cols = div_ceil(width_px as i32, CELL_PX_W).clamp(1, u16::MAX as i32) as u16;
        let rows = div_ceil(height_px as i32, CELL_PX_H).clamp(1, u16::MAX as i32) as u16;
        Self {
            fb: FrameBuffer::new(cols, rows),
        }
    }

    pub fn framebuffer(&self) -> &FrameBuffer {
        &self.fb
    }

    pub fn framebuffer_mut(&mut self) -> &mut FrameBuffer {
        &mut self.fb
    }

    pub fn clear(&mut self, color: Rgb) {
        self.fb.clear(CellStyle::solid(color).into_cell(' '));
    }

    pub fn fill_rect(&mut self, rect: Rect, color: Rgb) {
        if rect.w <= 0 || rect.h <= 0 {
            return;
        }
        let (c0, c1) = self.col_span(rect.x, rect.right());
        let (r0, r1) = self.row_span(rect.y, rect.bottom());
        let cell = CellStyle::solid(color).into_cell(' ');
        for row in r0..r1 {
            for col in c0..c1 {
                self.fb.set(col, row, cell);
            }
        }
    }

    /// Fill every cell whose centre lies inside the circle.
    ///
    /// A circle smaller than a cell still marks the cell containing its centre.
    pub fn fill_circle(&mut self, cx: i32, cy: i32, radius: i32, color: Rgb) {
        if radius < 0 {
            return;
        }
        let cell = CellStyle::solid(color).into_cell(' ');
        let (c0, c1) = self.col_span(cx - radius, cx + radius + 1);
        let (r0, r1) = self.row_span(cy - radius, cy + radius + 1);
        let r2 = (radius as i64) * (radius as i64);

        let mut any = false;
        for row in r0..r1 {
            for col in c0..c1 {
                let px = col as i64 * CELL_PX_W as i64 + CELL_PX_W as i64 / 2 - cx as i64;
                let py = row as i64 * CELL_PX_H as i64 + CELL_PX_H as i64 / 2 - cy as i64;
                if px * px + py * py <= r2 {
                    self.fb.set(col, row, cell);
                    any = true;
                }
            }
        }

        if !any && cx >= 0 && cy >= 0 {
            let col = cx / CELL_PX_W;
            let row = cy / CELL_PX_H;
            if col <= u16::MAX as i32 && row <= u16::MAX as i32 {
                self.fb.set(col as u16, row as u16, cell);
            }
        }
    }

    /// Stamp `texture` stretched over `dst`.
    ///
    /// `dst` is snapped to the nearest cell grid, so a texture drawn at its own
    /// pixel size is copied one cell per cell.
    pub fn draw_texture(&mut self, texture: &TermTexture, dst: Rect) {
        if dst.w <= 0 || dst.h <= 0 {
            return;
        }
        let first_col = round_div(dst.x, CELL_PX_W);
        let first_row = round_div(dst.y, CELL_PX_H);
        let cols = round_div(dst.w, CELL_PX_W).max(1);
        let rows = round_div(dst.h, CELL_PX_H).max(1);
        let (fb_w, fb_h) = (self.fb.width() as i32, self.fb.height() as i32);

        for dy in 0..rows {
            let row = first_row + dy;
            if row < 0 || row >= fb_h {
                continue;
            }
            let ty = (dy * texture.height as i32 / rows) as u16;
            for dx in 0..cols {
                let col = first_col + dx;
                if col < 0 || col >= fb_w {
                    continue;
                }
                let tx = (dx * texture.width as i32 / cols) as u16;
                if let Some(tc) = texture.cell(tx, ty) {
                    self.stamp(col as u16, row as u16, tc);
                }
            }
        }
    }

    fn stamp(&mut self, col: u16, row: u16, tc: TexCell) {
        if let Some(cell) = self.fb.get_mut(col, row) {
            let bg = tc.bg.unwrap_or(cell.style.bg);
            *cell = Cell {
                ch: tc.ch,
                style: CellStyle {
                    fg: tc.fg,
                    bg,
                    bold: tc.bold,
                    dim: false,
                },
            };
        }
    }

    /// Visible columns covering pixels `[x0, x1)`.
    fn col_span(&self, x0: i32, x1: i32) -> (u16, u16) {
        span(x0, x1, CELL_PX_W, self.fb.width())
    }

    fn row_span(&self, y0: i32, y1: i32) -> (u16, u16) {
        span(y0, y1, CELL_PX_H, self.fb.height())
    }
}

fn span(p0: i32, p1: i32, cell: i32, limit: u16) -> (u16, u16) {
    let first = p0.div_euclid(cell).clamp(0, limit as i32);
    let last = div_ceil(p1, cell).clamp(0, limit as i32);
    (first as u16, last.max(first) as u16)
}

fn round_div(a: i32, b: i32) -> i32 {
    (a + b / 2).div_euclid(b)
}

fn div_ceil(a: i32, b: i32) -> i32 {
    -((-a).div_euclid(b))
}
