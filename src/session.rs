//! Spin session: bet/balance state machine around the generator and evaluator

use log::{debug, warn};
use rand::Rng;
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};

use crate::config::GameConfig;
use crate::error::EngineError;
use crate::evaluate::evaluate_lines;
use crate::generator::ReelGenerator;
use crate::grid::ReelGrid;
use crate::spin::SpinOutcome;

/// Direction for stepping the bet ladder
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BetDirection {
    Up,
    Down,
}

/// Running session statistics
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SessionStats {
    pub total_spins: u64,
    pub total_bet: f64,
    pub total_win: f64,
    pub wins: u64,
    pub losses: u64,
    pub max_win_ratio: f64,
}

impl SessionStats {
    /// Return-to-player so far, in percent
    pub fn rtp(&self) -> f64 {
        if self.total_bet > 0.0 {
            (self.total_win / self.total_bet) * 100.0
        } else {
            0.0
        }
    }

    /// Share of spins that paid anything, in percent
    pub fn hit_rate(&self) -> f64 {
        if self.total_spins > 0 {
            (self.wins as f64 / self.total_spins as f64) * 100.0
        } else {
            0.0
        }
    }
}

/// Round a currency amount to whole cents, half up.
///
/// `f64::round` is half-away-from-zero, which is half-up for the
/// non-negative amounts the session deals in.
pub fn round_to_cents(amount: f64) -> f64 {
    (amount * 100.0).round() / 100.0
}

/// One player's session: balance, bet ladder position and the
/// `Idle`/`Spinning` state machine.
///
/// A session is an explicitly constructed, explicitly passed value with no
/// process-wide state; any number can coexist. It is single-writer: the
/// pending-grid slot is the sole device guarding against a second spin while
/// one is outstanding. Presentation that wants "debit now, credit after the
/// reels stop" calls [`request_spin`] and, once its animation is done,
/// [`complete_spin`]; [`spin`] does both at once.
///
/// [`request_spin`]: SpinSession::request_spin
/// [`complete_spin`]: SpinSession::complete_spin
/// [`spin`]: SpinSession::spin
pub struct SpinSession<R: Rng = StdRng> {
    config: GameConfig,
    generator: ReelGenerator,
    rng: R,
    balance: f64,
    bet_index: usize,
    /// `Some` while a spin is in flight (the `Spinning` state)
    pending: Option<ReelGrid>,
    spin_count: u64,
    stats: SessionStats,
}

impl SpinSession {
    /// Create a session with an OS-seeded RNG. Validates the configuration;
    /// an inconsistent one is fatal and no session is constructed.
    pub fn new(config: GameConfig) -> Result<Self, EngineError> {
        Self::with_rng(config, StdRng::from_os_rng())
    }
}

impl<R: Rng> SpinSession<R> {
    /// Create a session with an injected RNG (seeded for reproducibility)
    pub fn with_rng(config: GameConfig, rng: R) -> Result<Self, EngineError> {
        config.validate()?;
        let generator = ReelGenerator::new(
            config.grid.reels,
            config.grid.rows,
            config.catalog.len() as u32,
        )?;
        Ok(Self {
            balance: round_to_cents(config.starting_balance),
            bet_index: 0,
            pending: None,
            spin_count: 0,
            stats: SessionStats::default(),
            generator,
            rng,
            config,
        })
    }

    // ════════════════════════════════════════════════════════════════════
    // STATE
    // ════════════════════════════════════════════════════════════════════

    pub fn balance(&self) -> f64 {
        self.balance
    }

    /// Current bet size (one of the ladder's entries)
    pub fn bet(&self) -> f64 {
        self.config.bet_ladder[self.bet_index]
    }

    /// Is a spin in flight?
    pub fn is_spinning(&self) -> bool {
        self.pending.is_some()
    }

    pub fn stats(&self) -> &SessionStats {
        &self.stats
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    // ════════════════════════════════════════════════════════════════════
    // TRANSITIONS
    // ════════════════════════════════════════════════════════════════════

    /// `Idle → Spinning`: debit the bet and draw a fresh grid.
    ///
    /// Rejected with [`EngineError::SpinInProgress`] while a spin is in
    /// flight and with [`EngineError::InsufficientBalance`] when the bet
    /// exceeds the balance; neither rejection mutates any state.
    pub fn request_spin(&mut self) -> Result<(), EngineError> {
        if self.pending.is_some() {
            warn!("spin request rejected: already spinning");
            return Err(EngineError::SpinInProgress);
        }
        let bet = self.bet();
        if bet > self.balance {
            warn!(
                "spin request rejected: bet {:.2} exceeds balance {:.2}",
                bet, self.balance
            );
            return Err(EngineError::InsufficientBalance {
                bet,
                balance: self.balance,
            });
        }

        self.balance = round_to_cents(self.balance - bet);
        self.spin_count += 1;
        self.pending = Some(self.generator.generate(&mut self.rng));
        debug!(
            "spin-{:06} started: bet {:.2}, balance {:.2}",
            self.spin_count, bet, self.balance
        );
        Ok(())
    }

    /// `Spinning → Idle`: evaluate the pending grid, credit the payout and
    /// publish the outcome. Rejected with [`EngineError::NoSpinInProgress`]
    /// while idle.
    pub fn complete_spin(&mut self) -> Result<SpinOutcome, EngineError> {
        let grid = self.pending.take().ok_or(EngineError::NoSpinInProgress)?;
        let bet = self.bet();

        let wins = evaluate_lines(
            &grid,
            &self.config.paylines,
            &self.config.paytable,
            &self.config.catalog,
        )?;
        let payout = round_to_cents(wins.iter().map(|w| w.multiplier * bet).sum());
        self.balance = round_to_cents(self.balance + payout);

        self.stats.total_spins += 1;
        self.stats.total_bet += bet;
        self.stats.total_win += payout;
        if payout > 0.0 {
            self.stats.wins += 1;
        } else {
            self.stats.losses += 1;
        }
        let ratio = if bet > 0.0 { payout / bet } else { 0.0 };
        if ratio > self.stats.max_win_ratio {
            self.stats.max_win_ratio = ratio;
        }

        let outcome = SpinOutcome {
            spin_id: format!("spin-{:06}", self.spin_count),
            grid,
            wins,
            bet,
            payout,
            new_balance: self.balance,
        };
        debug!(
            "{} completed: {} winning lines, payout {:.2}, balance {:.2}",
            outcome.spin_id,
            outcome.wins.len(),
            payout,
            self.balance
        );
        Ok(outcome)
    }

    /// Request and complete in one call. Outcomes resolve synchronously;
    /// presentation that animates first sequences the two halves itself.
    pub fn spin(&mut self) -> Result<SpinOutcome, EngineError> {
        self.request_spin()?;
        self.complete_spin()
    }

    /// Step the bet one position up or down the ladder. Only allowed while
    /// idle; clamped no-op at either end. Returns the bet now in effect.
    pub fn change_bet(&mut self, direction: BetDirection) -> Result<f64, EngineError> {
        if self.pending.is_some() {
            return Err(EngineError::SpinInProgress);
        }
        match direction {
            BetDirection::Up => {
                if self.bet_index + 1 < self.config.bet_ladder.len() {
                    self.bet_index += 1;
                }
            }
            BetDirection::Down => {
                self.bet_index = self.bet_index.saturating_sub(1);
            }
        }
        Ok(self.bet())
    }
}
