//! Spin outcome published to presentation

use serde::{Deserialize, Serialize};

use crate::evaluate::LineWin;
use crate::grid::ReelGrid;

/// Everything presentation needs after a spin resolves: the final grid, the
/// winning lines in payline-table order, and the money movement.
///
/// The engine resolves this synchronously on logical completion; how long the
/// reels appear to spin afterwards is presentation's business.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpinOutcome {
    /// Spin ID (`spin-000001`, …)
    pub spin_id: String,
    /// Final grid (reels × rows)
    pub grid: ReelGrid,
    /// Winning lines, payline-table order
    pub wins: Vec<LineWin>,
    /// Bet that was debited for this spin
    pub bet: f64,
    /// Total payout credited (sum of line multipliers × bet, 2-decimal rounded)
    pub payout: f64,
    /// Balance after the payout was credited
    pub new_balance: f64,
}

impl SpinOutcome {
    /// Did this spin pay anything?
    pub fn is_win(&self) -> bool {
        self.payout > 0.0
    }

    /// Payout-to-bet ratio
    pub fn win_ratio(&self) -> f64 {
        if self.bet > 0.0 {
            self.payout / self.bet
        } else {
            0.0
        }
    }
}
