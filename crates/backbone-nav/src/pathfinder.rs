use std::collections::{BTreeSet, HashMap, HashSet, VecDeque};

use backbone_core::{GridCell, NavError, WeightedGrid};

/// Cells from (but excluding) the start up to and including the end.
///
/// An empty path means no path was found.
pub type NavGridPath = VecDeque<GridCell>;

/// A request for a path from `start` to `end`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PathRequest {
    pub start: GridCell,
    pub end: GridCell,
}

impl PathRequest {
    pub const fn new(start: GridCell, end: GridCell) -> Self {
        Self { start, end }
    }
}

/// Computes batches of paths over a borrowed [`WeightedGrid`].
///
/// The grid is never copied and never mutated. It can be swapped with
/// [`set_grid`](Pathfinder::set_grid) between calls; the borrow guarantees it
/// cannot change while a batch is running.
///
/// The search is a best-first frontier search. The next cell to expand is the
/// open cell minimising `distance²(cell, end) × cost(start → cell)`, ties going
/// to the first such cell in `(column, row)` order. Because the start has cost
/// 0, and so does everything reachable over zero-weight cells, this ranking is
/// not A*: on flat ground the expansion order is purely lexicographic. Paths
/// are valid but not guaranteed to be shortest.
#[derive(Debug, Clone, Copy)]
pub struct Pathfinder<'g> {
    grid: &'g WeightedGrid,
}

impl<'g> Pathfinder<'g> {
    pub fn new(grid: &'g WeightedGrid) -> Self {
        Self { grid }
    }

    /// Point the pathfinder at another grid.
    pub fn set_grid(&mut self, grid: &'g WeightedGrid) {
        self.grid = grid;
    }

    /// The grid searches currently run against.
    pub fn grid(&self) -> &'g WeightedGrid {
        self.grid
    }

    /// Find one path per request.
    ///
    /// The output has the same length as `requests` and the path for
    /// `requests[i]` is at index `i`. A request whose start or end lies
    /// outside the grid yields [`NavError::InvalidArgument`] at its index
    /// without affecting the others.
    pub fn find_paths(&self, requests: &[PathRequest]) -> Vec<Result<NavGridPath, NavError>> {
        let results: Vec<_> = requests.iter().map(|&r| self.find_path(r)).collect();
        log_batch(&results);
        results
    }

    /// Like [`find_paths`](Pathfinder::find_paths), computing requests
    /// concurrently on the rayon pool. Results are identical.
    #[cfg(feature = "parallel")]
    pub fn par_find_paths(&self, requests: &[PathRequest]) -> Vec<Result<NavGridPath, NavError>> {
        use rayon::prelude::*;

        let results: Vec<_> = requests.par_iter().map(|&r| self.find_path(r)).collect();
        log_batch(&results);
        results
    }

    /// Find a single path.
    ///
    /// `start == end` yields an empty path: the start is never part of a path
    /// and nothing has to be travelled.
    pub fn find_path(&self, request: PathRequest) -> Result<NavGridPath, NavError> {
        for (name, cell) in [("start", request.start), ("end", request.end)] {
            if !self.grid.contains(cell) {
                log::warn!(
                    "rejecting path request {} -> {}: {name} outside {}x{} grid",
                    request.start,
                    request.end,
                    self.grid.width(),
                    self.grid.height()
                );
                return Err(NavError::invalid(format!(
                    "path {name} {cell} is outside the {}x{} grid",
                    self.grid.width(),
                    self.grid.height()
                )));
            }
        }
        Search::new(self.grid, request).run()
    }
}

fn log_batch(results: &[Result<NavGridPath, NavError>]) {
    let solved = results
        .iter()
        .filter(|r| matches!(r, Ok(p) if !p.is_empty()))
        .count();
    let rejected = results.iter().filter(|r| r.is_err()).count();
    log::debug!(
        "path batch: {} requests, {} solved, {} empty, {} rejected",
        results.len(),
        solved,
        results.len() - solved - rejected,
        rejected
    );
}

// ---------------------------------------------------------------------------
// Per-request search state
// ---------------------------------------------------------------------------

struct Search<'g> {
    grid: &'g WeightedGrid,
    request: PathRequest,
    // Ordered so that scanning for the best cell is deterministic.
    open: BTreeSet<GridCell>,
    closed: HashSet<GridCell>,
    score: HashMap<GridCell, i64>,
    came_from: HashMap<GridCell, GridCell>,
}

impl<'g> Search<'g> {
    fn new(grid: &'g WeightedGrid, request: PathRequest) -> Self {
        let mut open = BTreeSet::new();
        open.insert(request.start);
        let mut score = HashMap::new();
        score.insert(request.start, 0);
        Self {
            grid,
            request,
            open,
            closed: HashSet::new(),
            score,
            came_from: HashMap::new(),
        }
    }

    fn run(mut self) -> Result<NavGridPath, NavError> {
        let mut iterations = 0usize;
        while let Some(current) = self.select_next() {
            iterations += 1;
            if current == self.request.end {
                let path = self.reconstruct();
                log::trace!(
                    "path {} -> {}: {} cells after {iterations} iterations",
                    self.request.start,
                    self.request.end,
                    path.len()
                );
                return Ok(path);
            }
            self.open.remove(&current);
            self.closed.insert(current);
            self.expand(current)?;
        }
        log::trace!(
            "path {} -> {}: unreachable after {iterations} iterations",
            self.request.start,
            self.request.end
        );
        Ok(NavGridPath::new())
    }

    /// First open cell with the smallest `distance² × score`.
    fn select_next(&self) -> Option<GridCell> {
        let end = self.request.end;
        let mut best: Option<(GridCell, i64)> = None;
        for &cell in &self.open {
            let rank = cell.distance_squared(end).saturating_mul(self.score[&cell]);
            match best {
                Some((_, best_rank)) if rank >= best_rank => {}
                _ => best = Some((cell, rank)),
            }
        }
        best.map(|(cell, _)| cell)
    }

    fn expand(&mut self, current: GridCell) -> Result<(), NavError> {
        let current_weight = i64::from(self.grid.weight(current)?);
        let current_score = self.score[&current];

        for neighbor in current.neighbors_4() {
            if !self.grid.contains(neighbor) || self.closed.contains(&neighbor) {
                continue;
            }
            let data = *self.grid.get(neighbor)?;
            let transition = (current_weight + i64::from(data.weight)) / 2;
            let tentative = current_score + transition;

            if !self.open.contains(&neighbor) {
                if data.is_blocked() {
                    self.closed.insert(neighbor);
                    continue;
                }
                self.open.insert(neighbor);
            } else if tentative >= self.score[&neighbor] {
                continue;
            }

            self.came_from.insert(neighbor, current);
            self.score.insert(neighbor, tentative);
        }
        Ok(())
    }

    /// Walk predecessors back from the end. The start has no predecessor, so
    /// it is never included.
    fn reconstruct(&self) -> NavGridPath {
        let mut path = NavGridPath::new();
        let mut cell = self.request.end;
        while let Some(&prev) = self.came_from.get(&cell) {
            path.push_front(cell);
            cell = prev;
        }
        path
    }
}
