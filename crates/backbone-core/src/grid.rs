//! The [`WeightedGrid`] type — a fixed-size 2D array of [`CellData`].
//!
//! The grid owns its cells by value in one contiguous row-major buffer.
//! Searches only ever borrow it, so the owner is free to mutate it between
//! searches and the borrow checker rules out mutation during one.

use crate::error::NavError;
use crate::geom::{GridCell, Range};

/// Weight at or above which a cell is impassable.
pub const BLOCKED_THRESHOLD: i32 = 10_000;

/// Per-cell navigation payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CellData {
    /// Traversal cost contribution of the cell.
    pub weight: i32,
    /// Distance to the nearest blocker. Maintained by the owner, never read
    /// by the search.
    #[cfg_attr(feature = "serde", serde(default))]
    pub blocker_dist: u32,
}

impl CellData {
    pub const fn new(weight: i32, blocker_dist: u32) -> Self {
        Self {
            weight,
            blocker_dist,
        }
    }

    /// A cell with the given weight and no blocker distance.
    pub const fn with_weight(weight: i32) -> Self {
        Self::new(weight, 0)
    }

    /// An impassable cell.
    pub const fn blocked() -> Self {
        Self::with_weight(BLOCKED_THRESHOLD)
    }

    /// Whether the weight reaches [`BLOCKED_THRESHOLD`].
    #[inline]
    pub const fn is_blocked(&self) -> bool {
        self.weight >= BLOCKED_THRESHOLD
    }
}

/// A `width × height` grid of [`CellData`], addressed by [`GridCell`].
///
/// Every cell inside `[0, width) × [0, height)` exists; anything outside is
/// rejected with [`NavError::OutOfRange`].
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "GridRepr"))]
pub struct WeightedGrid {
    width: i32,
    height: i32,
    cells: Vec<CellData>,
}

impl WeightedGrid {
    /// Create a grid with every weight set to zero.
    ///
    /// Both dimensions must be at least 1.
    pub fn new(width: i32, height: i32) -> Result<Self, NavError> {
        Self::with_fill(width, height, CellData::default())
    }

    /// Create a grid with every cell set to `data`.
    pub fn with_fill(width: i32, height: i32, data: CellData) -> Result<Self, NavError> {
        if width < 1 || height < 1 {
            return Err(NavError::invalid(format!(
                "grid dimensions must be at least 1x1, got {width}x{height}"
            )));
        }
        Ok(Self {
            width,
            height,
            cells: vec![data; width as usize * height as usize],
        })
    }

    /// Width (number of columns).
    #[inline]
    pub fn width(&self) -> i32 {
        self.width
    }

    /// Height (number of rows).
    #[inline]
    pub fn height(&self) -> i32 {
        self.height
    }

    /// The bounding range `[0, width) × [0, height)`.
    #[inline]
    pub fn bounds(&self) -> Range {
        Range::new(0, 0, self.width, self.height)
    }

    /// Whether `p` addresses a cell of this grid.
    #[inline]
    pub fn contains(&self, p: GridCell) -> bool {
        p.in_range(&self.bounds())
    }

    #[inline]
    fn index(&self, p: GridCell) -> Result<usize, NavError> {
        if !self.contains(p) {
            return Err(NavError::OutOfRange {
                cell: p,
                width: self.width,
                height: self.height,
            });
        }
        Ok(p.y as usize * self.width as usize + p.x as usize)
    }

    /// Read the cell at `p`.
    pub fn get(&self, p: GridCell) -> Result<&CellData, NavError> {
        let i = self.index(p)?;
        Ok(&self.cells[i])
    }

    /// Mutable access to the cell at `p`.
    pub fn get_mut(&mut self, p: GridCell) -> Result<&mut CellData, NavError> {
        let i = self.index(p)?;
        Ok(&mut self.cells[i])
    }

    /// Overwrite the cell at `p`.
    pub fn set(&mut self, p: GridCell, data: CellData) -> Result<(), NavError> {
        let i = self.index(p)?;
        self.cells[i] = data;
        Ok(())
    }

    /// Weight of the cell at `p`.
    #[inline]
    pub fn weight(&self, p: GridCell) -> Result<i32, NavError> {
        self.get(p).map(|c| c.weight)
    }

    /// Whether the cell at `p` is impassable.
    #[inline]
    pub fn is_blocked(&self, p: GridCell) -> Result<bool, NavError> {
        self.get(p).map(CellData::is_blocked)
    }

    /// Overwrite every cell with `data`.
    pub fn fill(&mut self, data: CellData) {
        self.cells.fill(data);
    }

    /// Overwrite every cell with the value `f` returns for its address.
    pub fn fill_fn(&mut self, mut f: impl FnMut(GridCell) -> CellData) {
        let width = self.width as usize;
        for (i, cell) in self.cells.iter_mut().enumerate() {
            *cell = f(GridCell::new((i % width) as i32, (i / width) as i32));
        }
    }

    /// Row-major iterator over `(GridCell, &CellData)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (GridCell, &CellData)> + '_ {
        self.bounds().iter().zip(self.cells.iter())
    }
}

/// Unvalidated wire form of a [`WeightedGrid`].
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct GridRepr {
    width: i32,
    height: i32,
    cells: Vec<CellData>,
}

#[cfg(feature = "serde")]
impl TryFrom<GridRepr> for WeightedGrid {
    type Error = NavError;

    fn try_from(repr: GridRepr) -> Result<Self, NavError> {
        let mut grid = WeightedGrid::new(repr.width, repr.height)?;
        if repr.cells.len() != grid.cells.len() {
            return Err(NavError::invalid(format!(
                "expected {} cells for a {}x{} grid, got {}",
                grid.cells.len(),
                repr.width,
                repr.height,
                repr.cells.len()
            )));
        }
        grid.cells = repr.cells;
        Ok(grid)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::{RngExt, SeedableRng};

    #[test]
    fn new_defaults_to_zero_weight() {
        let g = WeightedGrid::new(4, 3).unwrap();
        assert_eq!(g.width(), 4);
        assert_eq!(g.height(), 3);
        assert!(g.iter().all(|(_, c)| *c == CellData::default()));
        assert_eq!(g.iter().count(), 12);
    }

    #[test]
    fn zero_dimensions_rejected() {
        assert!(matches!(
            WeightedGrid::new(0, 3),
            Err(NavError::InvalidArgument(_))
        ));
        assert!(matches!(
            WeightedGrid::new(3, -1),
            Err(NavError::InvalidArgument(_))
        ));
    }

    #[test]
    fn set_and_get() {
        let mut g = WeightedGrid::new(4, 3).unwrap();
        g.set(GridCell::new(2, 1), CellData::new(7, 3)).unwrap();
        assert_eq!(*g.get(GridCell::new(2, 1)).unwrap(), CellData::new(7, 3));
        assert_eq!(g.weight(GridCell::new(2, 1)).unwrap(), 7);
        assert_eq!(g.weight(GridCell::new(1, 2)).unwrap(), 0);

        g.get_mut(GridCell::new(0, 0)).unwrap().weight = 12;
        assert_eq!(g.weight(GridCell::new(0, 0)).unwrap(), 12);
    }

    #[test]
    fn out_of_range_access_fails() {
        let mut g = WeightedGrid::new(4, 3).unwrap();
        for p in [
            GridCell::new(4, 0),
            GridCell::new(0, 3),
            GridCell::new(-1, 0),
            GridCell::new(0, -1),
        ] {
            assert_eq!(
                g.get(p),
                Err(NavError::OutOfRange {
                    cell: p,
                    width: 4,
                    height: 3
                })
            );
            assert!(g.set(p, CellData::default()).is_err());
            assert!(g.get_mut(p).is_err());
        }
    }

    #[test]
    fn bounds_hold_for_random_cells() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..200 {
            let w = rng.random_range(1..20);
            let h = rng.random_range(1..20);
            let g = WeightedGrid::new(w, h).unwrap();
            let p = GridCell::new(rng.random_range(-5..25), rng.random_range(-5..25));
            let inside = p.x >= 0 && p.x < w && p.y >= 0 && p.y < h;
            assert_eq!(g.get(p).is_ok(), inside, "{p} in {w}x{h}");
            assert_eq!(g.contains(p), inside);
        }
    }

    #[test]
    fn fill_overwrites_every_cell() {
        let mut g = WeightedGrid::new(3, 2).unwrap();
        g.set(GridCell::new(1, 1), CellData::with_weight(4)).unwrap();
        g.fill(CellData::blocked());
        assert!(g.iter().all(|(_, c)| c.is_blocked()));
    }

    #[test]
    fn with_fill_initializes_cells() {
        let g = WeightedGrid::with_fill(2, 2, CellData::new(3, 1)).unwrap();
        assert!(g.iter().all(|(_, c)| *c == CellData::new(3, 1)));
    }

    #[test]
    fn fill_fn_sees_each_address() {
        let mut g = WeightedGrid::new(3, 2).unwrap();
        g.fill_fn(|p| CellData::with_weight(p.x * 10 + p.y));
        for (p, c) in g.iter() {
            assert_eq!(c.weight, p.x * 10 + p.y);
        }
    }

    #[test]
    fn blocked_threshold() {
        assert!(!CellData::with_weight(BLOCKED_THRESHOLD - 1).is_blocked());
        assert!(CellData::with_weight(BLOCKED_THRESHOLD).is_blocked());
        assert!(CellData::with_weight(BLOCKED_THRESHOLD + 1).is_blocked());

        let mut g = WeightedGrid::new(2, 1).unwrap();
        g.set(GridCell::new(1, 0), CellData::blocked()).unwrap();
        assert!(!g.is_blocked(GridCell::new(0, 0)).unwrap());
        assert!(g.is_blocked(GridCell::new(1, 0)).unwrap());
    }
}
