//! Grid dimensions and the coordinate rules every engine shares.
//!
//! Agent positions live in the continuous range `[0, width-1] × [0, height-1]`
//! (a subset of `[0, width) × [0, height)`), so rounding a position to its
//! cell never leaves the grid.

use crate::{CellId, Vec2};

/// Width and height of both trail buffers, in cells.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GridShape {
    pub width:  u32,
    pub height: u32,
}

impl GridShape {
    #[inline]
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    #[inline]
    pub fn cell_count(self) -> usize {
        self.width as usize * self.height as usize
    }

    /// `true` if either dimension is zero.
    #[inline]
    pub fn is_degenerate(self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Largest valid x coordinate for a position.
    #[inline]
    pub fn max_x(self) -> f32 {
        self.width.saturating_sub(1) as f32
    }

    /// Largest valid y coordinate for a position.
    #[inline]
    pub fn max_y(self) -> f32 {
        self.height.saturating_sub(1) as f32
    }

    #[inline]
    pub fn contains(self, p: Vec2) -> bool {
        p.x >= 0.0 && p.x <= self.max_x() && p.y >= 0.0 && p.y <= self.max_y()
    }

    /// Clamp a point into the valid position range.
    #[inline]
    pub fn clamp(self, p: Vec2) -> Vec2 {
        Vec2::new(p.x.clamp(0.0, self.max_x()), p.y.clamp(0.0, self.max_y()))
    }

    /// `true` if the signed cell coordinate lies inside the grid.
    #[inline]
    pub fn contains_cell(self, x: i64, y: i64) -> bool {
        x >= 0 && y >= 0 && x < self.width as i64 && y < self.height as i64
    }

    /// Cell a position rounds to, clamped into the grid.
    #[inline]
    pub fn cell_of(self, p: Vec2) -> (u32, u32) {
        let x = (p.x.round() as i64).clamp(0, self.width as i64 - 1);
        let y = (p.y.round() as i64).clamp(0, self.height as i64 - 1);
        (x as u32, y as u32)
    }

    /// Row-major linear index of `(x, y)`.
    ///
    /// # Panics
    /// Panics in debug mode if `(x, y)` is out of range.
    #[inline]
    pub fn cell_id(self, x: u32, y: u32) -> CellId {
        debug_assert!(x < self.width && y < self.height, "cell ({x}, {y}) outside {self}");
        CellId(y * self.width + x)
    }

    /// Centre of the grid in position space.
    #[inline]
    pub fn center(self) -> Vec2 {
        Vec2::new(self.max_x() * 0.5, self.max_y() * 0.5)
    }
}

impl std::fmt::Display for GridShape {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}
