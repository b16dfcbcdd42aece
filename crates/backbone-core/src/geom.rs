//! Geometry primitives: [`GridCell`], [`Range`] and [`Vec2`].
//!
//! Grid space is integer and discrete; world space is continuous `f32`.
//! Conversion between the two lives in the navigation crate.

use std::fmt;
use std::ops::{Add, Div, Mul, Sub};

// ---------------------------------------------------------------------------
// GridCell
// ---------------------------------------------------------------------------

/// An integer grid address. `x` is the column, `y` the row; rows grow down.
///
/// Cells order lexicographically by `(x, y)`, i.e. column first. Ordered
/// containers of cells therefore iterate column by column, which is what makes
/// tie-breaking during path search reproducible.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GridCell {
    pub x: i32,
    pub y: i32,
}

impl GridCell {
    /// Origin (0, 0).
    pub const ZERO: Self = Self { x: 0, y: 0 };

    /// Create a new cell address.
    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Return a cell shifted by (dx, dy).
    #[inline]
    pub const fn shift(self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    /// Whether the cell lies inside the half-open range.
    #[inline]
    pub fn in_range(self, r: &Range) -> bool {
        r.contains(self)
    }

    /// The four orthogonal neighbours, in the order right, left, down, up.
    ///
    /// No bounds filtering is applied.
    #[inline]
    pub fn neighbors_4(self) -> [GridCell; 4] {
        [
            Self::new(self.x + 1, self.y),
            Self::new(self.x - 1, self.y),
            Self::new(self.x, self.y + 1),
            Self::new(self.x, self.y - 1),
        ]
    }

    /// Squared Euclidean distance to `other`, saturating at `i64::MAX`.
    #[inline]
    pub fn distance_squared(self, other: GridCell) -> i64 {
        let dx = i128::from(self.x) - i128::from(other.x);
        let dy = i128::from(self.y) - i128::from(other.y);
        i64::try_from(dx * dx + dy * dy).unwrap_or(i64::MAX)
    }
}

impl fmt::Display for GridCell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl From<(i32, i32)> for GridCell {
    #[inline]
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(x, y)
    }
}

impl Add for GridCell {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for GridCell {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Mul<i32> for GridCell {
    type Output = Self;
    #[inline]
    fn mul(self, rhs: i32) -> Self {
        Self::new(self.x * rhs, self.y * rhs)
    }
}

// ---------------------------------------------------------------------------
// Range
// ---------------------------------------------------------------------------

/// A half-open rectangle \[min, max). `min` is inclusive, `max` is exclusive.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Range {
    pub min: GridCell,
    pub max: GridCell,
}

impl Range {
    /// Create a new range from two corners, canonicalized so that
    /// `min` ≤ `max` on each axis.
    #[inline]
    pub fn new(x0: i32, y0: i32, x1: i32, y1: i32) -> Self {
        Self {
            min: GridCell::new(x0.min(x1), y0.min(y1)),
            max: GridCell::new(x0.max(x1), y0.max(y1)),
        }
    }

    /// Width of the range.
    #[inline]
    pub fn width(self) -> i32 {
        self.max.x - self.min.x
    }

    /// Whether the range has zero area.
    #[inline]
    pub fn is_empty(self) -> bool {
        self.min.x >= self.max.x || self.min.y >= self.max.y
    }

    /// Whether `p` is inside the half-open range.
    #[inline]
    pub fn contains(self, p: GridCell) -> bool {
        p.x >= self.min.x && p.x < self.max.x && p.y >= self.min.y && p.y < self.max.y
    }

    /// Row-major iterator over every cell in the range.
    #[inline]
    pub fn iter(self) -> RangeIter {
        RangeIter {
            range: self,
            cur: self.min,
        }
    }
}

impl IntoIterator for Range {
    type Item = GridCell;
    type IntoIter = RangeIter;
    #[inline]
    fn into_iter(self) -> RangeIter {
        self.iter()
    }
}

impl fmt::Display for Range {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}-{})", self.min, self.max)
    }
}

/// Row-major iterator over the cells in a [`Range`].
#[derive(Clone, Debug)]
pub struct RangeIter {
    range: Range,
    cur: GridCell,
}

impl Iterator for RangeIter {
    type Item = GridCell;

    #[inline]
    fn next(&mut self) -> Option<GridCell> {
        if self.cur.y >= self.range.max.y || self.range.is_empty() {
            return None;
        }
        let p = self.cur;
        self.cur.x += 1;
        if self.cur.x >= self.range.max.x {
            self.cur.x = self.range.min.x;
            self.cur.y += 1;
        }
        Some(p)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.range.is_empty() || self.cur.y >= self.range.max.y {
            return (0, Some(0));
        }
        let w = self.range.width() as usize;
        let remaining_in_row = (self.range.max.x - self.cur.x) as usize;
        let remaining_rows = (self.range.max.y - self.cur.y - 1) as usize;
        let total = remaining_in_row + remaining_rows * w;
        (total, Some(total))
    }
}

impl ExactSizeIterator for RangeIter {}

// ---------------------------------------------------------------------------
// Vec2
// ---------------------------------------------------------------------------

/// A continuous 2D position or offset in world (window) space.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    pub const ZERO: Self = Self { x: 0.0, y: 0.0 };

    #[inline]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Euclidean length.
    #[inline]
    pub fn length(self) -> f32 {
        self.x.hypot(self.y)
    }

    /// Euclidean distance to `other`.
    #[inline]
    pub fn distance(self, other: Vec2) -> f32 {
        (other - self).length()
    }

    /// Angle of the vector in radians, measured from +x towards +y.
    #[inline]
    pub fn angle(self) -> f32 {
        self.y.atan2(self.x)
    }
}

impl fmt::Display for Vec2 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl From<(f32, f32)> for Vec2 {
    #[inline]
    fn from((x, y): (f32, f32)) -> Self {
        Self::new(x, y)
    }
}

impl Add for Vec2 {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Vec2 {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Mul<f32> for Vec2 {
    type Output = Self;
    #[inline]
    fn mul(self, rhs: f32) -> Self {
        Self::new(self.x * rhs, self.y * rhs)
    }
}

impl Div<f32> for Vec2 {
    type Output = Self;
    #[inline]
    fn div(self, rhs: f32) -> Self {
        Self::new(self.x / rhs, self.y / rhs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;

    #[test]
    fn cell_arithmetic() {
        let a = GridCell::new(1, 2);
        let b = GridCell::new(3, 4);
        assert_eq!(a + b, GridCell::new(4, 6));
        assert_eq!(b - a, GridCell::new(2, 2));
        assert_eq!(a * 3, GridCell::new(3, 6));
        assert_eq!(a.shift(-1, 1), GridCell::new(0, 3));
    }

    #[test]
    fn cells_order_column_first() {
        let set: BTreeSet<GridCell> = [
            GridCell::new(1, 0),
            GridCell::new(0, 2),
            GridCell::new(0, 1),
            GridCell::new(1, -1),
        ]
        .into_iter()
        .collect();
        let ordered: Vec<_> = set.into_iter().collect();
        assert_eq!(
            ordered,
            vec![
                GridCell::new(0, 1),
                GridCell::new(0, 2),
                GridCell::new(1, -1),
                GridCell::new(1, 0),
            ]
        );
    }

    #[test]
    fn neighbors_4_order() {
        let n = GridCell::new(2, 2).neighbors_4();
        assert_eq!(
            n,
            [
                GridCell::new(3, 2),
                GridCell::new(1, 2),
                GridCell::new(2, 3),
                GridCell::new(2, 1),
            ]
        );
    }

    #[test]
    fn distance_squared_is_symmetric() {
        let a = GridCell::new(0, 0);
        let b = GridCell::new(3, -4);
        assert_eq!(a.distance_squared(b), 25);
        assert_eq!(b.distance_squared(a), 25);
        assert_eq!(a.distance_squared(a), 0);
    }

    #[test]
    fn distance_squared_saturates_at_extremes() {
        let a = GridCell::new(i32::MIN, 0);
        let b = GridCell::new(i32::MAX, 0);
        assert_eq!(a.distance_squared(b), i64::MAX);
        assert_eq!(b.distance_squared(a), i64::MAX);

        let c = GridCell::new(i32::MIN, i32::MIN);
        let d = GridCell::new(i32::MAX, i32::MAX);
        assert_eq!(c.distance_squared(d), i64::MAX);

        // Large but representable distances stay exact.
        let e = GridCell::new(0, 0);
        let f = GridCell::new(i32::MAX, 0);
        let max = i64::from(i32::MAX);
        assert_eq!(e.distance_squared(f), max * max);
    }

    #[test]
    fn in_range_follows_half_open_bounds() {
        let r = Range::new(0, 0, 2, 2);
        assert!(GridCell::new(1, 1).in_range(&r));
        assert!(!GridCell::new(2, 1).in_range(&r));
    }

    #[test]
    fn range_basics() {
        let r = Range::new(0, 0, 3, 2);
        assert_eq!(r.width(), 3);
        assert!(!r.is_empty());
        assert!(r.contains(GridCell::new(0, 0)));
        assert!(r.contains(GridCell::new(2, 1)));
        assert!(!r.contains(GridCell::new(3, 0)));
        assert!(!r.contains(GridCell::new(0, 2)));
        assert!(!r.contains(GridCell::new(-1, 0)));
    }

    #[test]
    fn range_auto_canonicalize() {
        let r = Range::new(3, 2, 0, 0);
        assert_eq!(r.min, GridCell::new(0, 0));
        assert_eq!(r.max, GridCell::new(3, 2));
    }

    #[test]
    fn range_iter_is_row_major() {
        let r = Range::new(0, 0, 3, 2);
        let pts: Vec<_> = r.iter().collect();
        assert_eq!(pts.len(), 6);
        assert_eq!(pts[0], GridCell::new(0, 0));
        assert_eq!(pts[1], GridCell::new(1, 0));
        assert_eq!(pts[5], GridCell::new(2, 1));
        assert_eq!(r.iter().len(), 6);
    }

    #[test]
    fn empty_range_iter() {
        let r = Range::new(2, 2, 2, 5);
        assert!(r.is_empty());
        assert_eq!(r.iter().count(), 0);
    }

    #[test]
    fn vec2_math() {
        let a = Vec2::new(3.0, 4.0);
        assert!((a.length() - 5.0).abs() < 1e-6);
        assert!((Vec2::ZERO.distance(a) - 5.0).abs() < 1e-6);
        assert_eq!(a + Vec2::new(1.0, 1.0), Vec2::new(4.0, 5.0));
        assert_eq!(a - Vec2::new(1.0, 1.0), Vec2::new(2.0, 3.0));
        assert_eq!(a * 2.0, Vec2::new(6.0, 8.0));
        assert_eq!(a / 2.0, Vec2::new(1.5, 2.0));
    }

    #[test]
    fn vec2_angle() {
        assert_eq!(Vec2::new(1.0, 0.0).angle(), 0.0);
        let down = Vec2::new(0.0, 2.0).angle();
        assert!((down - std::f32::consts::FRAC_PI_2).abs() < 1e-6);
    }
}
