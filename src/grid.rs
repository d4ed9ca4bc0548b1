//! Sparse unbounded grid of boolean cell states.

use std::collections::HashMap;

/// Sparse mapping from grid coordinates to cell state.
///
/// Only cells that have been flipped at least once are materialized; every
/// other coordinate reads as `false` ("off"). Entries are never removed
/// except by [`clear`](Grid::clear), so memory grows with the area the ants
/// have visited. Keys are `(i64, i64)` pairs, collision-free over the whole
/// coordinate range.
#[derive(Clone, Debug, Default)]
pub struct Grid {
    cells: HashMap<(i64, i64), bool>,
}

impl Grid {
    /// Create an empty grid.
    pub fn new() -> Self {
        Self::default()
    }

    /// State of the cell at `(x, y)`; unvisited cells are `false`.
    #[inline]
    pub fn get(&self, x: i64, y: i64) -> bool {
        self.cells.get(&(x, y)).copied().unwrap_or(false)
    }

    /// Set the cell at `(x, y)`, materializing it if needed.
    #[inline]
    pub fn set(&mut self, x: i64, y: i64, value: bool) {
        self.cells.insert((x, y), value);
    }

    /// Remove every materialized cell.
    pub fn clear(&mut self) {
        self.cells.clear();
    }

    /// Number of materialized cells (visited at least once).
    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Whether no cell has been materialized yet.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Lazy traversal of all materialized `((x, y), state)` entries.
    ///
    /// Iteration order is unspecified; callers must not rely on it.
    pub fn iter(&self) -> impl Iterator<Item = ((i64, i64), bool)> + '_ {
        self.cells.iter().map(|(&coord, &state)| (coord, state))
    }
}
