//! Reel outcome generation — uniform i.i.d. sampling over the catalog

use rand::Rng;

use crate::error::EngineError;
use crate::grid::ReelGrid;
use crate::symbols::SymbolId;

/// Generates randomized reel grids.
///
/// Each cell is an independent uniform draw over `[1, catalog_size]`, filled
/// reel by reel in top-to-bottom visual order. No weighting, no near-miss
/// shaping, no memory of previous spins. The RNG is injected through the
/// [`rand::Rng`] seam so tests can supply a seeded generator
/// ([`rand::rngs::StdRng`] in production, `ChaCha8Rng` in tests).
#[derive(Debug, Clone, Copy)]
pub struct ReelGenerator {
    reels: u8,
    rows: u8,
    catalog_size: u32,
}

impl ReelGenerator {
    /// Create a generator for a `reels` × `rows` window over a catalog of
    /// `catalog_size` symbols. All three must be at least 1.
    pub fn new(reels: u8, rows: u8, catalog_size: u32) -> Result<Self, EngineError> {
        if reels < 1 {
            return Err(EngineError::InvalidConfiguration(
                "reel count must be at least 1".into(),
            ));
        }
        if rows < 1 {
            return Err(EngineError::InvalidConfiguration(
                "rows per reel must be at least 1".into(),
            ));
        }
        if catalog_size < 1 {
            return Err(EngineError::InvalidConfiguration(
                "catalog size must be at least 1".into(),
            ));
        }
        Ok(Self {
            reels,
            rows,
            catalog_size,
        })
    }

    pub fn reels(&self) -> u8 {
        self.reels
    }

    pub fn rows(&self) -> u8 {
        self.rows
    }

    /// Draw a fresh grid
    pub fn generate<R: Rng + ?Sized>(&self, rng: &mut R) -> ReelGrid {
        let mut columns = Vec::with_capacity(self.reels as usize);
        for _ in 0..self.reels {
            let mut column = Vec::with_capacity(self.rows as usize);
            for _ in 0..self.rows {
                let symbol: SymbolId = rng.random_range(1..=self.catalog_size);
                column.push(symbol);
            }
            columns.push(column);
        }
        ReelGrid::new(columns)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_rejects_degenerate_geometry() {
        assert!(matches!(
            ReelGenerator::new(0, 3, 10),
            Err(EngineError::InvalidConfiguration(_))
        ));
        assert!(matches!(
            ReelGenerator::new(5, 0, 10),
            Err(EngineError::InvalidConfiguration(_))
        ));
        assert!(matches!(
            ReelGenerator::new(5, 3, 0),
            Err(EngineError::InvalidConfiguration(_))
        ));
    }

    #[test]
    fn test_grid_dimensions_and_range() {
        let generator = ReelGenerator::new(5, 3, 10).unwrap();
        let mut rng = ChaCha8Rng::seed_from_u64(7);

        for _ in 0..100 {
            let grid = generator.generate(&mut rng);
            assert_eq!(grid.reels(), 5);
            assert_eq!(grid.rows(), 3);
            for column in grid.iter_columns() {
                assert_eq!(column.len(), 3);
                assert!(column.iter().all(|&s| (1..=10).contains(&s)));
            }
        }
    }

    #[test]
    fn test_single_cell_grid() {
        let generator = ReelGenerator::new(1, 1, 1).unwrap();
        let mut rng = ChaCha8Rng::seed_from_u64(0);
        let grid = generator.generate(&mut rng);
        assert_eq!(grid.symbol_at(0, 0), Some(1));
    }

    #[test]
    fn test_uniform_distribution() {
        // 10_000 grids × 15 cells = 150k draws; expect 15k per symbol.
        // 5% tolerance is ~6.5 sigma for a fair uniform draw.
        let generator = ReelGenerator::new(5, 3, 10).unwrap();
        let mut rng = ChaCha8Rng::seed_from_u64(42);

        let mut counts = [0u64; 11];
        for _ in 0..10_000 {
            let grid = generator.generate(&mut rng);
            for column in grid.iter_columns() {
                for &symbol in column {
                    counts[symbol as usize] += 1;
                }
            }
        }

        assert_eq!(counts[0], 0);
        let expected = 15_000.0;
        for (symbol, &count) in counts.iter().enumerate().skip(1) {
            let deviation = (count as f64 - expected).abs() / expected;
            assert!(
                deviation < 0.05,
                "symbol {symbol} drawn {count} times, expected ~{expected}"
            );
        }
    }
}
