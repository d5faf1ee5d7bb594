//! Shared app context.
//!
//! The App component owns the flow controller and hands it to every page
//! via use_context. Pages never mutate the state directly; they forward
//! user intents through [`dispatch`].
//!
//! ## Usage
//!
//! ```ignore
//! let flow = use_flow();
//! let celebrations = use_celebrations();
//!
//! button {
//!     onclick: move |_| dispatch(flow, celebrations, FlowEvent::Advance),
//!     "Next"
//! }
//! ```

use std::sync::OnceLock;

use dioxus::prelude::*;
use valentine_core::{Effect, FlowController, FlowEvent, Script};

/// Settings parsed from the command line.
#[derive(Clone, Debug)]
pub struct AppConfig {
    /// Who the proposal is for
    pub recipient: String,
    /// Fixed seed for evasion positions
    pub seed: Option<u64>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            recipient: valentine_core::DEFAULT_RECIPIENT.to_string(),
            seed: None,
        }
    }
}

impl AppConfig {
    pub fn controller(&self) -> FlowController {
        match self.seed {
            Some(seed) => FlowController::seeded(seed),
            None => FlowController::from_entropy(),
        }
    }

    pub fn script(&self) -> Script {
        Script::new(self.recipient.clone())
    }
}

/// Global config, set once from `main`.
pub static CONFIG: OnceLock<AppConfig> = OnceLock::new();

/// Get the app config (command line values, or defaults when unset).
pub fn get_config() -> AppConfig {
    CONFIG.get().cloned().unwrap_or_default()
}

/// Hook to access the flow controller.
pub fn use_flow() -> Signal<FlowController> {
    use_context::<Signal<FlowController>>()
}

/// Screen copy for the configured recipient.
pub fn use_script() -> Signal<Script> {
    use_context::<Signal<Script>>()
}

/// Number of celebrations requested so far.
///
/// The confetti layer watches this and starts a burst sequence whenever it
/// goes up. Kept apart from the flow so a celebration outlives the page
/// that triggered it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Celebrations(pub u32);

pub fn use_celebrations() -> Signal<Celebrations> {
    use_context::<Signal<Celebrations>>()
}

/// Forward a user intent to the controller and run its effect.
pub fn dispatch(
    mut flow: Signal<FlowController>,
    mut celebrations: Signal<Celebrations>,
    event: FlowEvent,
) {
    let effect = flow.write().dispatch(event);
    if let Some(Effect::Celebrate) = effect {
        celebrations.with_mut(|c| c.0 += 1);
        tracing::info!("Celebration requested");
    }
}
