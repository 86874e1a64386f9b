//! Character-grid surface for headless hosts and logs

use std::fmt;

use glam::Vec2;

use super::Surface;
use crate::sim::Arena;

/// Rasterises draw calls into a fixed grid of characters
#[derive(Debug, Clone)]
pub struct TextSurface {
    cols: usize,
    rows: usize,
    arena_size: Vec2,
    cells: Vec<char>,
}

impl TextSurface {
    pub fn new(arena: &Arena, cols: usize, rows: usize) -> Self {
        let cols = cols.max(1);
        let rows = rows.max(1);
        Self {
            cols,
            rows,
            arena_size: arena.size(),
            cells: vec![' '; cols * rows],
        }
    }

    #[inline]
    pub fn cell(&self, col: usize, row: usize) -> char {
        self.cells[row * self.cols + col]
    }

    /// Grid cell containing an arena point, clamped onto the grid
    fn to_cell(&self, p: Vec2) -> (usize, usize) {
        let col = (p.x / self.arena_size.x * self.cols as f32).floor();
        let row = (p.y / self.arena_size.y * self.rows as f32).floor();
        (
            col.clamp(0.0, (self.cols - 1) as f32) as usize,
            row.clamp(0.0, (self.rows - 1) as f32) as usize,
        )
    }

    fn fill_box(&mut self, min: Vec2, max: Vec2, ch: char) {
        let (c0, r0) = self.to_cell(min);
        // Nudge the far edge inward so a box ending on a cell border stays out of it
        let (c1, r1) = self.to_cell(max - Vec2::splat(1e-3));
        for row in r0..=r1.max(r0) {
            for col in c0..=c1.max(c0) {
                self.cells[row * self.cols + col] = ch;
            }
        }
    }
}

impl Surface for TextSurface {
    fn clear(&mut self, _color: [f32; 4]) {
        self.cells.fill(' ');
    }

    fn draw_sprite_centered(&mut self, center: Vec2, half_extents: Vec2, _color: [f32; 4]) {
        self.fill_box(center - half_extents, center + half_extents, 'O');
    }

    fn fill_rect(&mut self, center: Vec2, size: Vec2, _color: [f32; 4]) {
        self.fill_box(center - size / 2.0, center + size / 2.0, '#');
    }

    fn draw_text_centered(&mut self, center: Vec2, text: &str, _color: [f32; 4]) {
        let (col, row) = self.to_cell(center);
        let len = text.chars().count();
        let start = col.saturating_sub(len / 2);
        for (i, ch) in text.chars().enumerate() {
            let c = start + i;
            if c >= self.cols {
                break;
            }
            self.cells[row * self.cols + c] = ch;
        }
    }
}

impl fmt::Display for TextSurface {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let border = "-".repeat(self.cols);
        writeln!(f, "+{border}+")?;
        for row in self.cells.chunks(self.cols) {
            let line: String = row.iter().collect();
            writeln!(f, "|{line}|")?;
        }
        write!(f, "+{border}+")
    }
}
