//! # reelcore — Payline Slot Outcome Engine
//!
//! Generates randomized reel outcomes, evaluates paylines with wild-symbol
//! substitution, and settles bets against a balance. Presentation (sprites,
//! spin animation, layout, input) is an external collaborator: it feeds the
//! engine reel geometry and tables, and consumes [`SpinOutcome`] snapshots to
//! drive visuals. The engine never touches pixels or timers.
//!
//! ## Architecture
//!
//! ```text
//! SpinSession
//!     │
//!     ├── GameConfig (validated at startup)
//!     │     ├── GridSpec (reels × rows)
//!     │     ├── SymbolCatalog (id → name, wild designation)
//!     │     ├── Paytable (symbol → run-length multipliers)
//!     │     ├── payline table (ordered row paths)
//!     │     └── bet ladder, starting balance
//!     ├── ReelGenerator (uniform i.i.d. draws over rand::Rng)
//!     └── evaluate_lines (wild-aware left-to-right runs)
//!           │
//!           v
//!     SpinOutcome { grid, wins, payout, new_balance }
//! ```
//!
//! ## Example
//!
//! ```
//! use reelcore::{GameConfig, SpinSession};
//!
//! let mut session = SpinSession::new(GameConfig::fruit_classic()).unwrap();
//! let outcome = session.spin().unwrap();
//! for win in &outcome.wins {
//!     println!(
//!         "line {}: {} x{} pays {}",
//!         win.line_index, win.symbol_name, win.run_length, win.multiplier
//!     );
//! }
//! assert!(session.balance() >= 0.0);
//! ```

pub mod config;
pub mod error;
pub mod evaluate;
pub mod generator;
pub mod grid;
pub mod paylines;
pub mod paytable;
pub mod session;
pub mod spin;
pub mod symbols;

pub use config::*;
pub use error::*;
pub use evaluate::*;
pub use generator::*;
pub use grid::*;
pub use paylines::*;
pub use paytable::*;
pub use session::*;
pub use spin::*;
pub use symbols::*;
