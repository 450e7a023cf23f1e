//! Game configuration and load-time validation

use serde::{Deserialize, Serialize};

use crate::error::EngineError;
use crate::paylines::{Payline, classic_9_paylines};
use crate::paytable::Paytable;
use crate::symbols::SymbolCatalog;

/// Grid specification (reels × rows)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridSpec {
    /// Number of reels (columns)
    pub reels: u8,
    /// Number of visible rows per reel
    pub rows: u8,
}

impl GridSpec {
    /// Classic 5×3 window
    pub fn classic_5x3() -> Self {
        Self { reels: 5, rows: 3 }
    }

    /// Total grid positions
    pub fn total_positions(&self) -> usize {
        self.reels as usize * self.rows as usize
    }
}

impl Default for GridSpec {
    fn default() -> Self {
        Self::classic_5x3()
    }
}

/// Complete static definition of a game: geometry, symbol catalog, paytable,
/// payline table, bet ladder and starting balance.
///
/// All tables are immutable once a session is running. [`validate`] is called
/// by every loader and by session construction; an inconsistent configuration
/// is fatal at startup, the engine never runs on partially-valid tables.
///
/// [`validate`]: GameConfig::validate
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Reel geometry
    pub grid: GridSpec,
    /// Symbol catalog (including the wild designation)
    pub catalog: SymbolCatalog,
    /// Symbol → run-length multipliers
    pub paytable: Paytable,
    /// Ordered payline table; position is payline identity
    pub paylines: Vec<Payline>,
    /// Allowed bet sizes, strictly ascending; the smallest is the default bet
    pub bet_ladder: Vec<f64>,
    /// Balance a fresh session starts with
    pub starting_balance: f64,
}

impl GameConfig {
    /// The classic fruit game: 5×3 window, 10 fruit symbols with wild = 10,
    /// 9 paylines.
    pub fn fruit_classic() -> Self {
        Self {
            grid: GridSpec::classic_5x3(),
            catalog: SymbolCatalog::fruit(),
            paytable: Paytable::fruit(),
            paylines: classic_9_paylines(),
            bet_ladder: vec![0.25, 0.50, 1.00, 2.00, 5.00, 10.00],
            starting_balance: 100.00,
        }
    }

    /// Parse from JSON and validate
    pub fn from_json_str(json: &str) -> Result<Self, EngineError> {
        let config: Self = serde_json::from_str(json)
            .map_err(|e| EngineError::InvalidConfiguration(format!("JSON parse error: {e}")))?;
        config.validate()?;
        Ok(config)
    }

    /// Parse from YAML and validate
    pub fn from_yaml_str(yaml: &str) -> Result<Self, EngineError> {
        let config: Self = serde_yml::from_str(yaml)
            .map_err(|e| EngineError::InvalidConfiguration(format!("YAML parse error: {e}")))?;
        config.validate()?;
        Ok(config)
    }

    /// Export as pretty-printed JSON
    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_default()
    }

    /// Check every cross-table invariant. Violations are fatal at startup.
    pub fn validate(&self) -> Result<(), EngineError> {
        let invalid = |msg: String| Err(EngineError::InvalidConfiguration(msg));

        if self.grid.reels < 1 || self.grid.rows < 1 {
            return invalid(format!(
                "grid must be at least 1x1, got {}x{}",
                self.grid.reels, self.grid.rows
            ));
        }

        if self.catalog.is_empty() {
            return invalid("symbol catalog is empty".into());
        }

        // Ids must be dense 1..=len: the generator draws uniformly over
        // [1, catalog_size]. Also catches duplicates.
        let mut ids: Vec<u32> = self.catalog.symbols.iter().map(|s| s.id).collect();
        ids.sort_unstable();
        for (i, &id) in ids.iter().enumerate() {
            if id != i as u32 + 1 {
                return invalid(format!(
                    "catalog ids must be 1..={} with no gaps or duplicates, found id {}",
                    self.catalog.len(),
                    id
                ));
            }
        }

        if !self.catalog.contains(self.catalog.wild_id) {
            return invalid(format!(
                "wild id {} is not in the catalog",
                self.catalog.wild_id
            ));
        }

        for symbol in self.paytable.symbols() {
            if !self.catalog.contains(symbol) {
                return invalid(format!("paytable references unknown symbol {symbol}"));
            }
        }
        for (symbol, pays) in &self.paytable.pays {
            if pays.iter().any(|&m| !m.is_finite() || m < 0.0) {
                return invalid(format!("paytable for symbol {symbol} has a bad multiplier"));
            }
        }

        for payline in &self.paylines {
            if payline.len() != self.grid.reels as usize {
                return invalid(format!(
                    "payline {} spans {} reels, grid has {}",
                    payline.index,
                    payline.len(),
                    self.grid.reels
                ));
            }
            if let Some(&row) = payline.rows.iter().find(|&&r| r >= self.grid.rows) {
                return invalid(format!(
                    "payline {} references row {} outside 0..{}",
                    payline.index, row, self.grid.rows
                ));
            }
        }

        if self.bet_ladder.is_empty() {
            return invalid("bet ladder is empty".into());
        }
        if self
            .bet_ladder
            .iter()
            .any(|&b| !b.is_finite() || b <= 0.0)
        {
            return invalid("bet ladder entries must be positive".into());
        }
        if self.bet_ladder.windows(2).any(|w| w[0] >= w[1]) {
            return invalid("bet ladder must be strictly ascending".into());
        }

        if !self.starting_balance.is_finite() || self.starting_balance < 0.0 {
            return invalid("starting balance must be non-negative".into());
        }

        Ok(())
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::fruit_classic()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::paylines::Payline;
    use crate::symbols::Symbol;

    #[test]
    fn test_fruit_classic_is_valid() {
        assert!(GameConfig::fruit_classic().validate().is_ok());
    }

    fn assert_invalid(config: GameConfig) {
        assert!(matches!(
            config.validate(),
            Err(EngineError::InvalidConfiguration(_))
        ));
    }

    #[test]
    fn test_rejects_empty_catalog() {
        let mut config = GameConfig::fruit_classic();
        config.catalog.symbols.clear();
        assert_invalid(config);
    }

    #[test]
    fn test_rejects_sparse_catalog_ids() {
        let mut config = GameConfig::fruit_classic();
        config.catalog.symbols[0].id = 42;
        assert_invalid(config);
    }

    #[test]
    fn test_rejects_duplicate_catalog_ids() {
        let mut config = GameConfig::fruit_classic();
        config.catalog.symbols[1].id = 1;
        assert_invalid(config);
    }

    #[test]
    fn test_rejects_missing_wild() {
        let mut config = GameConfig::fruit_classic();
        config.catalog.wild_id = 99;
        assert_invalid(config);
    }

    #[test]
    fn test_rejects_paytable_unknown_symbol() {
        let mut config = GameConfig::fruit_classic();
        config.paytable.insert(99, &[1.0, 2.0, 3.0]);
        assert_invalid(config);
    }

    #[test]
    fn test_rejects_negative_multiplier() {
        let mut config = GameConfig::fruit_classic();
        config.paytable.insert(4, &[2.5, -5.0, 12.5]);
        assert_invalid(config);
    }

    #[test]
    fn test_rejects_payline_wrong_length() {
        let mut config = GameConfig::fruit_classic();
        config.paylines.push(Payline::new(9, vec![0, 0, 0]));
        assert_invalid(config);
    }

    #[test]
    fn test_rejects_payline_row_out_of_window() {
        let mut config = GameConfig::fruit_classic();
        config.paylines.push(Payline::new(9, vec![0, 0, 3, 0, 0]));
        assert_invalid(config);
    }

    #[test]
    fn test_rejects_degenerate_grid() {
        let mut config = GameConfig::fruit_classic();
        config.grid.reels = 0;
        assert_invalid(config);
    }

    #[test]
    fn test_rejects_bad_bet_ladders() {
        let mut config = GameConfig::fruit_classic();
        config.bet_ladder.clear();
        assert_invalid(config.clone());

        config.bet_ladder = vec![1.0, 0.5];
        assert_invalid(config.clone());

        config.bet_ladder = vec![0.0, 1.0];
        assert_invalid(config);
    }

    #[test]
    fn test_rejects_negative_balance() {
        let mut config = GameConfig::fruit_classic();
        config.starting_balance = -1.0;
        assert_invalid(config);
    }

    #[test]
    fn test_json_round_trip() {
        let config = GameConfig::fruit_classic();
        let json = config.to_json();
        let reloaded = GameConfig::from_json_str(&json).unwrap();
        assert_eq!(config, reloaded);
    }

    #[test]
    fn test_from_json_rejects_garbage() {
        assert!(matches!(
            GameConfig::from_json_str("{not json"),
            Err(EngineError::InvalidConfiguration(_))
        ));
    }

    #[test]
    fn test_from_yaml() {
        let yaml = r#"
grid:
  reels: 3
  rows: 1
catalog:
  symbols:
    - { id: 1, name: ace }
    - { id: 2, name: king }
    - { id: 3, name: wild }
  wild_id: 3
paytable:
  pays:
    1: [2.0]
    2: [1.0]
paylines:
  - { index: 0, rows: [0, 0, 0] }
bet_ladder: [1.0, 2.0]
starting_balance: 50.0
"#;
        let config = GameConfig::from_yaml_str(yaml).unwrap();
        assert_eq!(config.grid.reels, 3);
        assert_eq!(config.catalog.len(), 3);
        assert_eq!(config.paytable.multiplier(1, 3), 2.0);
        assert_eq!(config.paylines.len(), 1);
    }

    #[test]
    fn test_minimal_custom_config_is_valid() {
        let config = GameConfig {
            grid: GridSpec { reels: 3, rows: 1 },
            catalog: SymbolCatalog::new(
                vec![Symbol::new(1, "a"), Symbol::new(2, "w")],
                2,
            ),
            paytable: Paytable::new(),
            paylines: vec![Payline::straight(0, 0, 3)],
            bet_ladder: vec![1.0],
            starting_balance: 0.0,
        };
        assert!(config.validate().is_ok());
    }
}
