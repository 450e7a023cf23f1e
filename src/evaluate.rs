//! Payline win evaluation with wild substitution

use serde::{Deserialize, Serialize};

use crate::error::EngineError;
use crate::grid::ReelGrid;
use crate::paylines::Payline;
use crate::paytable::{MIN_RUN_LENGTH, Paytable};
use crate::symbols::{SymbolCatalog, SymbolId};

/// A win on a single payline
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineWin {
    /// Payline index
    pub line_index: u8,
    /// Matched symbol ID
    pub symbol_id: SymbolId,
    /// Matched symbol name
    pub symbol_name: String,
    /// Length of the matched run from reel 0
    pub run_length: u8,
    /// Paytable multiplier for this symbol and run length.
    /// 0.0 when the paytable carries no entry; the line is still reported.
    pub multiplier: f64,
    /// Positions of the run's symbols (reel, row)
    pub positions: Vec<(u8, u8)>,
    /// Positions within the run occupied by wilds
    pub wild_positions: Vec<(u8, u8)>,
}

/// Evaluate every payline against a grid.
///
/// Pure function of its inputs: no side effects, deterministic, idempotent.
/// Results are emitted in payline-table order, never sorted by magnitude.
///
/// Per line: the matched symbol is the symbol at reel 0, or — when reel 0
/// holds a wild — the first non-wild symbol along the line (the wild itself
/// if the whole line is wild). Leading wilds count toward the run. The run
/// then extends while each position holds the matched symbol or a wild, and
/// a line wins iff the run reaches [`MIN_RUN_LENGTH`].
///
/// Any grid symbol outside the catalog is a fatal invariant violation and
/// yields [`EngineError::UnknownSymbol`].
pub fn evaluate_lines(
    grid: &ReelGrid,
    paylines: &[Payline],
    paytable: &Paytable,
    catalog: &SymbolCatalog,
) -> Result<Vec<LineWin>, EngineError> {
    let mut wins = Vec::new();
    for payline in paylines {
        if let Some(win) = evaluate_line(grid, payline, paytable, catalog)? {
            wins.push(win);
        }
    }
    Ok(wins)
}

fn evaluate_line(
    grid: &ReelGrid,
    payline: &Payline,
    paytable: &Paytable,
    catalog: &SymbolCatalog,
) -> Result<Option<LineWin>, EngineError> {
    // Read the symbols the line crosses
    let mut line = Vec::with_capacity(payline.rows.len());
    for (reel, &row) in payline.rows.iter().enumerate() {
        let symbol = grid.symbol_at(reel, row as usize).ok_or_else(|| {
            EngineError::InvalidConfiguration(format!(
                "payline {} does not fit a {}x{} grid",
                payline.index,
                grid.reels(),
                grid.rows()
            ))
        })?;
        if !catalog.contains(symbol) {
            return Err(EngineError::UnknownSymbol(symbol));
        }
        line.push(symbol);
    }

    let wild = catalog.wild_id;

    // Matched symbol: first non-wild on the line, the wild itself when the
    // entire line is wild (paid from the wild's own paytable row).
    let matched = line.iter().copied().find(|&s| s != wild).unwrap_or(wild);

    // Count consecutive matching/wild positions from reel 0
    let mut run_length = 0u8;
    let mut positions = Vec::new();
    let mut wild_positions = Vec::new();
    for (reel, &symbol) in line.iter().enumerate() {
        if symbol != matched && symbol != wild {
            break;
        }
        run_length += 1;
        let cell = (reel as u8, payline.rows[reel]);
        positions.push(cell);
        if symbol == wild {
            wild_positions.push(cell);
        }
    }

    if run_length < MIN_RUN_LENGTH {
        return Ok(None);
    }

    // Catalog membership was checked above
    let symbol_name = catalog.name(matched).unwrap_or_default().to_string();
    Ok(Some(LineWin {
        line_index: payline.index,
        symbol_id: matched,
        symbol_name,
        run_length,
        multiplier: paytable.multiplier(matched, run_length),
        positions,
        wild_positions,
    }))
}
