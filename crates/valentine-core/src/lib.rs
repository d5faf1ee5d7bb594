//! Valentine Core Library
//!
//! The control logic behind the proposal flow, free of any rendering
//! surface so it can be driven and tested without a window.
//!
//! ## Overview
//!
//! The flow walks through six screens in order. The user can only move
//! forward, the declining control on the question screen relocates itself
//! whenever it is approached, and reaching the final screen requests a
//! timed confetti celebration exactly once.
//!
//! ## Quick Start
//!
//! ```
//! use valentine_core::{CelebrationSchedule, Effect, FlowController, Step};
//!
//! let mut flow = FlowController::seeded(7);
//! for _ in 0..4 {
//!     flow.advance();
//! }
//! assert_eq!(flow.state().step(), Step::Question);
//!
//! // Only the step into the final screen asks for confetti
//! assert_eq!(flow.advance(), Some(Effect::Celebrate));
//! assert_eq!(flow.advance(), None);
//! assert_eq!(CelebrationSchedule::default().frames().count(), 188);
//! ```

pub mod celebration;
pub mod error;
pub mod evasion;
pub mod flow;
pub mod logging;
pub mod script;

// Re-exports
pub use celebration::{
    play, BurstOrigin, BurstRenderer, BurstSpec, CelebrationSchedule, Frame, PlayReport,
    CONFETTI_PALETTE,
};
pub use error::{CelebrationError, FlowError, FlowResult};
pub use evasion::{evade_offset, sample_offset, Offset, Viewport, EVADE_MARGIN};
pub use flow::{transition, Effect, FlowController, FlowEvent, FlowState, Step, Transition};
pub use script::{Reason, Screen, Script, DECLINE_LABEL, DEFAULT_RECIPIENT, OCCASION, REASONS};
