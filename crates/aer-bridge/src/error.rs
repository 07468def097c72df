//! Error types for bridge operations

use std::fmt;

/// Result type alias for bridge operations
pub type BridgeResult<T> = Result<T, BridgeError>;

/// Bridge error type.
///
/// Two classes exist: lifecycle errors (an endpoint used in the wrong bridge
/// state, an integration bug upstream) and transport errors (the underlying
/// queue went away under the producer). Transport errors only ever surface on
/// the producer side; the consumer path degrades to the default value instead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BridgeError {
    /// Operation requires a started bridge
    NotStarted(&'static str),

    /// Operation arrived after the bridge was stopped
    Stopped(&'static str),

    /// The producer endpoint outlived the bridge that owned the queue
    Disconnected,

    /// Invalid construction-time configuration
    InvalidConfig(String),
}

impl BridgeError {
    /// Whether this error reports an operation in the wrong bridge state.
    pub fn is_lifecycle(&self) -> bool {
        matches!(self, Self::NotStarted(_) | Self::Stopped(_))
    }

    /// Whether this error reports a failure of the underlying queue itself.
    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Disconnected)
    }
}

impl fmt::Display for BridgeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotStarted(op) => write!(f, "cannot {}: bridge not started", op),
            Self::Stopped(op) => write!(f, "cannot {}: bridge already stopped", op),
            Self::Disconnected => write!(f, "queue disconnected: owning bridge was dropped"),
            Self::InvalidConfig(msg) => write!(f, "invalid bridge configuration: {}", msg),
        }
    }
}

impl std::error::Error for BridgeError {}
