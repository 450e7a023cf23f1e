//! Engine error taxonomy

use crate::symbols::SymbolId;

/// Errors produced by the outcome engine.
///
/// `InvalidConfiguration` and `UnknownSymbol` are fatal: the engine must not
/// run with inconsistent tables, and a symbol outside the catalog means a
/// configuration or generation bug. `InsufficientBalance`, `SpinInProgress`
/// and `NoSpinInProgress` are recoverable rejections; the session state is
/// left untouched when they are returned.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum EngineError {
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),

    #[error("symbol id {0} is not in the catalog")]
    UnknownSymbol(SymbolId),

    #[error("insufficient balance: bet {bet:.2} exceeds balance {balance:.2}")]
    InsufficientBalance { bet: f64, balance: f64 },

    #[error("a spin is already in progress")]
    SpinInProgress,

    #[error("no spin is in progress")]
    NoSpinInProgress,
}

impl EngineError {
    /// Recoverable rejections leave the session usable; fatal errors do not.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            EngineError::InsufficientBalance { .. }
                | EngineError::SpinInProgress
                | EngineError::NoSpinInProgress
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recoverable_classification() {
        assert!(EngineError::SpinInProgress.is_recoverable());
        assert!(
            EngineError::InsufficientBalance {
                bet: 10.0,
                balance: 5.0
            }
            .is_recoverable()
        );
        assert!(!EngineError::InvalidConfiguration("empty catalog".into()).is_recoverable());
        assert!(!EngineError::UnknownSymbol(99).is_recoverable());
    }

    #[test]
    fn test_display_includes_amounts() {
        let err = EngineError::InsufficientBalance {
            bet: 10.0,
            balance: 5.0,
        };
        let msg = err.to_string();
        assert!(msg.contains("10.00"));
        assert!(msg.contains("5.00"));
    }
}
