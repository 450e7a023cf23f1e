//! Payline definitions

use serde::{Deserialize, Serialize};

/// A payline: one row index per reel.
///
/// The `index` is the line's permanent identity — its position in the game's
/// payline table — and is what [`crate::evaluate::LineWin`] reports back to
/// presentation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Payline {
    /// Payline index (0-based, position in the payline table)
    pub index: u8,
    /// Row position on each reel (e.g., [1, 0, 0, 0, 1] for a "V" shape)
    pub rows: Vec<u8>,
}

impl Payline {
    pub fn new(index: u8, rows: Vec<u8>) -> Self {
        Self { index, rows }
    }

    /// A straight line (same row across all reels)
    pub fn straight(index: u8, row: u8, reel_count: u8) -> Self {
        Self {
            index,
            rows: vec![row; reel_count as usize],
        }
    }

    /// Number of reels this line spans
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// The classic 9-line table for a 5×3 grid
pub fn classic_9_paylines() -> Vec<Payline> {
    vec![
        // Straight lines
        Payline::straight(0, 1, 5), // Middle
        Payline::straight(1, 0, 5), // Top
        Payline::straight(2, 2, 5), // Bottom
        // V shapes
        Payline::new(3, vec![0, 1, 2, 1, 0]),
        Payline::new(4, vec![2, 1, 0, 1, 2]),
        // Zigzag
        Payline::new(5, vec![0, 0, 1, 2, 2]),
        Payline::new(6, vec![2, 2, 1, 0, 0]),
        Payline::new(7, vec![1, 0, 0, 0, 1]),
        Payline::new(8, vec![1, 2, 2, 2, 1]),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_payline_straight() {
        let line = Payline::straight(0, 1, 5);
        assert_eq!(line.rows, vec![1, 1, 1, 1, 1]);
        assert_eq!(line.len(), 5);
    }

    #[test]
    fn test_classic_table_identity() {
        let lines = classic_9_paylines();
        assert_eq!(lines.len(), 9);
        for (i, line) in lines.iter().enumerate() {
            assert_eq!(line.index as usize, i);
            assert_eq!(line.len(), 5);
            assert!(line.rows.iter().all(|&r| r < 3));
        }
    }
}
