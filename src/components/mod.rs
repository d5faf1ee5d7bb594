//! App-level components that need more than props: the confetti layer
//! drives a celebration task, share hints touch the clipboard.

mod confetti;
mod share_hints;

pub use confetti::ConfettiLayer;
pub use share_hints::ShareHints;
