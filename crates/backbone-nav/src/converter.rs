use std::collections::VecDeque;

use backbone_core::{GridCell, NavError, Vec2};

/// A path of world positions, consumed front to back by movers.
pub type WorldPath = VecDeque<Vec2>;

/// Maps grid cells to world positions and back.
///
/// Cell `(0, 0)` covers the half-open square
/// `[origin, origin + cell_size)` on both axes. A point exactly on the
/// right or bottom edge of a cell belongs to the next cell.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "ConverterRepr"))]
pub struct CoordinateConverter {
    cell_size: f32,
    origin_offset: Vec2,
}

impl Default for CoordinateConverter {
    /// 50-unit cells with the grid origin at the world origin.
    fn default() -> Self {
        Self {
            cell_size: 50.0,
            origin_offset: Vec2::ZERO,
        }
    }
}

fn check_cell_size(cell_size: f32) -> Result<(), NavError> {
    if cell_size.is_finite() && cell_size > 0.0 {
        Ok(())
    } else {
        Err(NavError::invalid(format!(
            "cell size must be positive and finite, got {cell_size}"
        )))
    }
}

impl CoordinateConverter {
    pub fn new(cell_size: f32, origin_offset: Vec2) -> Result<Self, NavError> {
        check_cell_size(cell_size)?;
        Ok(Self {
            cell_size,
            origin_offset,
        })
    }

    #[inline]
    pub fn cell_size(&self) -> f32 {
        self.cell_size
    }

    #[inline]
    pub fn origin_offset(&self) -> Vec2 {
        self.origin_offset
    }

    /// Change the cell size. The old size is kept if `cell_size` is invalid.
    pub fn set_cell_size(&mut self, cell_size: f32) -> Result<(), NavError> {
        check_cell_size(cell_size)?;
        self.cell_size = cell_size;
        Ok(())
    }

    pub fn set_origin_offset(&mut self, origin_offset: Vec2) {
        self.origin_offset = origin_offset;
    }

    /// World position of the centre of `cell`.
    pub fn to_world(&self, cell: GridCell) -> Vec2 {
        let half = self.cell_size / 2.0;
        Vec2::new(
            cell.x as f32 * self.cell_size + half,
            cell.y as f32 * self.cell_size + half,
        ) + self.origin_offset
    }

    /// The cell containing `point`.
    pub fn to_grid(&self, point: Vec2) -> GridCell {
        let local = (point - self.origin_offset) / self.cell_size;
        GridCell::new(local.x.floor() as i32, local.y.floor() as i32)
    }

    /// Convert every cell of a grid path to its world centre, keeping order.
    pub fn path_to_world<'a>(&self, path: impl IntoIterator<Item = &'a GridCell>) -> WorldPath {
        path.into_iter().map(|&c| self.to_world(c)).collect()
    }

    /// Convert every point of a world path to its cell, keeping order.
    pub fn path_to_grid<'a>(
        &self,
        path: impl IntoIterator<Item = &'a Vec2>,
    ) -> VecDeque<GridCell> {
        path.into_iter().map(|&p| self.to_grid(p)).collect()
    }
}

/// Unvalidated wire form of a [`CoordinateConverter`].
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct ConverterRepr {
    cell_size: f32,
    #[serde(default)]
    origin_offset: Vec2,
}

#[cfg(feature = "serde")]
impl TryFrom<ConverterRepr> for CoordinateConverter {
    type Error = NavError;

    fn try_from(repr: ConverterRepr) -> Result<Self, NavError> {
        Self::new(repr.cell_size, repr.origin_offset)
    }
}
