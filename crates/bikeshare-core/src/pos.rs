//! Grid coordinate type and toroidal offset arithmetic.
//!
//! `GridPos` addresses a cell by integer column/row.  All offset math wraps
//! modulo the grid dimensions, so coordinates produced by
//! [`wrapping_offset`](GridPos::wrapping_offset) are always in-bounds for
//! positive dimensions.

/// A cell coordinate on a toroidal grid.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GridPos {
    pub x: u32,
    pub y: u32,
}

impl GridPos {
    #[inline]
    pub fn new(x: u32, y: u32) -> Self {
        Self { x, y }
    }

    /// The cell at `(self.x + dx, self.y + dy)` wrapped modulo
    /// `width`/`height`.
    ///
    /// Offsets may be negative and may exceed the grid dimensions; the
    /// result is reduced with euclidean remainders so it never ends up
    /// negative.  Both dimensions must be non-zero.
    #[inline]
    pub fn wrapping_offset(self, dx: i64, dy: i64, width: u32, height: u32) -> GridPos {
        debug_assert!(width > 0 && height > 0);
        let x = (self.x as i64 + dx).rem_euclid(width as i64) as u32;
        let y = (self.y as i64 + dy).rem_euclid(height as i64) as u32;
        GridPos { x, y }
    }
}

impl std::fmt::Display for GridPos {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
