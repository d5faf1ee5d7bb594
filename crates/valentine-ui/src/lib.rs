//! Valentine UI Components
//!
//! Dioxus components for the proposal flow, in a soft pink "love letter"
//! look:
//! - **Hot pink (#FF69B4)**: primary actions, highlights
//! - **Rose (#FB7185)**: gradients, progress
//! - **Blush (#FFE4E1)**: card backgrounds
//! - **Gold (#FFD700)**: sparkles
//!
//! The components only render props and forward events. Flow state lives
//! in `valentine_core::FlowController`, owned by the app.

pub mod components;

pub use components::*;
