//! Navigation over weighted grids.
//!
//! - **Path finding** over a borrowed [`WeightedGrid`] ([`Pathfinder::find_paths`])
//! - **Coordinate conversion** between grid cells and world positions
//!   ([`CoordinateConverter`])
//! - **Path following** for anything that can be moved ([`move_along_path`])
//!
//! A typical frame: the owner populates a [`WeightedGrid`], asks a
//! [`Pathfinder`] for a batch of paths, converts each path into world space
//! and lets movers consume it waypoint by waypoint.
//!
//! # Cargo features
//!
//! | Feature | Adds |
//! |---|---|
//! | `serde` | (de)serialization of requests, grids and converters |
//! | `parallel` | [`Pathfinder::par_find_paths`] on the rayon pool |

mod converter;
mod movement;
mod pathfinder;

pub use backbone_core::{
    BLOCKED_THRESHOLD, CellData, GridCell, NavError, Range, Vec2, WeightedGrid,
};
pub use converter::{CoordinateConverter, WorldPath};
pub use movement::{Movable, Step, move_along_path, move_toward, step_towards};
pub use pathfinder::{NavGridPath, PathRequest, Pathfinder};
