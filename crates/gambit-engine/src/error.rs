//! Engine configuration errors.

/// Errors raised while configuring a strategy.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EngineError {
    /// The strategy name is not one of `random`, `greedy`, `minimax`.
    #[error("unknown strategy \"{name}\" (expected random, greedy or minimax)")]
    UnknownStrategy {
        /// The name that failed to parse.
        name: String,
    },
}
