//! Paytable: per-symbol multipliers keyed by matched-run length

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::symbols::SymbolId;

/// Shortest run that can pay
pub const MIN_RUN_LENGTH: u8 = 3;

/// Multiplier table: symbol id → pay values for runs of 3, 4, 5, …
///
/// Index 0 of each vector is the 3-of-a-kind multiplier. Runs shorter than
/// [`MIN_RUN_LENGTH`] are unrepresentable and always pay 0. A missing entry
/// for a symbol or run length also pays 0; the evaluator still reports such
/// lines as wins (see [`crate::evaluate`]).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Paytable {
    /// Pay values per symbol, index 0 = 3-of-a-kind
    pub pays: BTreeMap<SymbolId, Vec<f64>>,
}

impl Paytable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the pay values for a symbol (index 0 = 3-of-a-kind)
    pub fn insert(&mut self, symbol: SymbolId, pays: &[f64]) {
        self.pays.insert(symbol, pays.to_vec());
    }

    /// The classic fruit game paytable, lowest payer (apple) to highest (gem),
    /// wild paying as a mid-tier symbol.
    pub fn fruit() -> Self {
        let mut table = Self::new();
        table.insert(1, &[1.0, 2.0, 5.0]); // apple
        table.insert(2, &[1.5, 3.0, 7.5]); // banana
        table.insert(3, &[2.0, 4.0, 10.0]); // blueberry
        table.insert(4, &[2.5, 5.0, 12.5]); // cherry
        table.insert(5, &[3.0, 6.0, 15.0]); // grape
        table.insert(6, &[4.0, 8.0, 20.0]); // orange
        table.insert(7, &[5.0, 10.0, 25.0]); // raspberry
        table.insert(8, &[10.0, 20.0, 50.0]); // watermelon
        table.insert(9, &[25.0, 50.0, 100.0]); // gem
        table.insert(10, &[5.0, 10.0, 25.0]); // wild
        table
    }

    /// Multiplier for a matched run. 0.0 for runs below [`MIN_RUN_LENGTH`]
    /// or entries the table does not carry.
    pub fn multiplier(&self, symbol: SymbolId, run_length: u8) -> f64 {
        if run_length < MIN_RUN_LENGTH {
            return 0.0;
        }
        let idx = (run_length - MIN_RUN_LENGTH) as usize;
        self.pays
            .get(&symbol)
            .and_then(|pays| pays.get(idx))
            .copied()
            .unwrap_or(0.0)
    }

    /// Symbols the table carries entries for
    pub fn symbols(&self) -> impl Iterator<Item = SymbolId> + '_ {
        self.pays.keys().copied()
    }
}
