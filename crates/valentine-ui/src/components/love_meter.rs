//! Love Meter Component
//!
//! Progress bar pinned to the top of the first four screens.

use dioxus::prelude::*;

/// Properties for the LoveMeter component
#[derive(Clone, PartialEq, Props)]
pub struct LoveMeterProps {
    /// Fill level, 0..=100
    pub percent: u8,
}

impl LoveMeterProps {
    /// Percentage clamped for display
    pub fn clamped(&self) -> u8 {
        self.percent.min(100)
    }
}

/// "Love Meter" bar with a heart and the percentage
///
/// # Example
///
/// ```rust,ignore
/// if let Some(percent) = state.love_meter() {
///     rsx! { LoveMeter { percent } }
/// }
/// ```
#[component]
pub fn LoveMeter(props: LoveMeterProps) -> Element {
    let percent = props.clamped();

    rsx! {
        div { class: "love-meter",
            div { class: "love-meter-card",
                div { class: "love-meter-labels",
                    span { class: "love-meter-title",
                        span { class: "heart-pulse", "aria-hidden": "true", "\u{2665}" }
                        "Love Meter"
                    }
                    span { class: "love-meter-value text-glow", "{percent}%" }
                }
                div {
                    class: "love-meter-track",
                    role: "progressbar",
                    "aria-valuemin": "0",
                    "aria-valuemax": "100",
                    "aria-valuenow": "{percent}",
                    div { class: "love-meter-fill", style: "width: {percent}%;" }
                    div {
                        class: "love-meter-glow",
                        style: "background: linear-gradient(90deg, rgba(255,105,180,0.3) 0%, rgba(255,182,193,0.3) {percent}%, transparent {percent}%);",
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn percent_is_clamped() {
        assert_eq!(LoveMeterProps { percent: 140 }.clamped(), 100);
        assert_eq!(LoveMeterProps { percent: 40 }.clamped(), 40);
    }
}
