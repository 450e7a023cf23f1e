//! Reel grid snapshot

use serde::{Deserialize, Serialize};

use crate::symbols::SymbolId;

/// One spin's visible window: `reels` columns of `rows` symbols each,
/// column-major, top-to-bottom.
///
/// Produced fresh by the generator and handed to presentation as a read-only
/// snapshot inside [`crate::spin::SpinOutcome`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReelGrid {
    columns: Vec<Vec<SymbolId>>,
}

impl ReelGrid {
    pub fn new(columns: Vec<Vec<SymbolId>>) -> Self {
        Self { columns }
    }

    /// Number of reels (columns)
    pub fn reels(&self) -> usize {
        self.columns.len()
    }

    /// Number of visible rows per reel
    pub fn rows(&self) -> usize {
        self.columns.first().map(Vec::len).unwrap_or(0)
    }

    /// Symbol at (reel, row), top row = 0
    pub fn symbol_at(&self, reel: usize, row: usize) -> Option<SymbolId> {
        self.columns.get(reel).and_then(|c| c.get(row)).copied()
    }

    /// The symbols of one reel, top-to-bottom
    pub fn column(&self, reel: usize) -> Option<&[SymbolId]> {
        self.columns.get(reel).map(Vec::as_slice)
    }

    /// Iterate columns in reel order
    pub fn iter_columns(&self) -> impl Iterator<Item = &[SymbolId]> {
        self.columns.iter().map(Vec::as_slice)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_access() {
        let grid = ReelGrid::new(vec![vec![1, 2, 3], vec![4, 5, 6]]);
        assert_eq!(grid.reels(), 2);
        assert_eq!(grid.rows(), 3);
        assert_eq!(grid.symbol_at(0, 0), Some(1));
        assert_eq!(grid.symbol_at(1, 2), Some(6));
        assert_eq!(grid.symbol_at(2, 0), None);
        assert_eq!(grid.symbol_at(0, 3), None);
        assert_eq!(grid.column(1), Some([4, 5, 6].as_slice()));
    }

    #[test]
    fn test_empty_grid() {
        let grid = ReelGrid::new(Vec::new());
        assert_eq!(grid.reels(), 0);
        assert_eq!(grid.rows(), 0);
    }
}
