//! Error types for the proposal flow

use thiserror::Error;

use crate::flow::Step;

/// Reasons a flow event is rejected.
///
/// A rejected event leaves the state untouched. None of these are shown
/// to the user; they exist so callers and tests can see why nothing moved.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FlowError {
    /// Reason panel index outside the four fixed panels
    #[error("Reason index {index} is out of range (0..{count})")]
    ReasonOutOfRange { index: usize, count: usize },

    /// Evasion only happens on the question screen
    #[error("Evasion is inactive on step {}", .0.number())]
    EvasionInactive(Step),

    /// Step number outside 1..=6
    #[error("Invalid step: {0}")]
    InvalidStep(u8),
}

/// Failures reported by a burst renderer.
///
/// These are logged and dropped by the celebration player; they never
/// reach the flow state.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CelebrationError {
    /// No surface to draw on (window gone, layer not mounted)
    #[error("Rendering surface unavailable")]
    SurfaceUnavailable,

    /// Any other renderer failure
    #[error("Render error: {0}")]
    Render(String),
}

/// Result type alias using FlowError
pub type FlowResult<T> = Result<T, FlowError>;
