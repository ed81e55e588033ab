use crate::pos::Pos;
use rand::Rng;

/// Width to height ratio used when fitting a board into a window.
pub const ASPECT_RATIO: (u32, u32) = (4, 3);

/// Grid bounds in cells plus the pixel size of one cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Board {
    pub columns: u32,
    pub rows: u32,
    pub cell: u32,
}

impl Board {
    pub fn new(columns: u32, rows: u32, cell: u32) -> Self {
        Self { columns: columns.max(1), rows: rows.max(1), cell: cell.max(1) }
    }

    /// Largest 4:3 board that fits `width` pixels, with both sides rounded
    /// down to a multiple of the cell size.
    pub fn fit_window(width: u32, height: u32, cell: u32) -> Self {
        let cell = cell.max(1);
        let w = width - width % cell;
        let (rw, rh) = ASPECT_RATIO;
        let mut h = (w as u64 * rh as u64 / rw as u64) as u32;
        // a short window clamps the height instead of overflowing it
        h = h.min(height);
        h -= h % cell;
        Self::new(w / cell, h / cell, cell)
    }

    pub fn pixel_size(&self) -> (u32, u32) {
        (self.columns * self.cell, self.rows * self.cell)
    }

    pub fn max_x(&self) -> i32 {
        self.columns as i32 - 1
    }

    pub fn max_y(&self) -> i32 {
        self.rows as i32 - 1
    }

    pub fn contains(&self, p: Pos) -> bool {
        p.x >= 0 && p.y >= 0 && p.x <= self.max_x() && p.y <= self.max_y()
    }

    /// Toroidal wrap: below zero re-enters at the last index, past the last
    /// index re-enters at zero.
    pub fn wrap(&self, p: Pos) -> Pos {
        let x = if p.x < 0 { self.max_x() } else if p.x > self.max_x() { 0 } else { p.x };
        let y = if p.y < 0 { self.max_y() } else if p.y > self.max_y() { 0 } else { p.y };
        Pos::new(x, y)
    }

    pub fn random_pos<R: Rng>(&self, rng: &mut R) -> Pos {
        Pos::new(rng.gen_range(0..self.columns as i32), rng.gen_range(0..self.rows as i32))
    }
}
