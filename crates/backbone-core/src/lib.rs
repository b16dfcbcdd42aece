//! **backbone-core** — geometry and storage for grid navigation.
//!
//! This crate provides the foundational types used by the navigation layer:
//! integer grid cells, half-open ranges, continuous world vectors, and the
//! [`WeightedGrid`] that path searches read from.

pub mod error;
pub mod geom;
pub mod grid;

pub use error::NavError;
pub use geom::{GridCell, Range, RangeIter, Vec2};
pub use grid::{BLOCKED_THRESHOLD, CellData, WeightedGrid};
