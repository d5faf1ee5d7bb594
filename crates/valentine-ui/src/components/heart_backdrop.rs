//! Floating Hearts Backdrop
//!
//! Ambient hearts drifting up behind every screen. Purely decorative and
//! ignores the pointer.

use dioxus::prelude::*;

/// Glyphs cycled through by the backdrop
const HEART_GLYPHS: [&str; 5] = ["\u{2665}", "\u{1F495}", "\u{1F497}", "\u{2763}", "\u{1F496}"];

/// Properties for the HeartBackdrop component
#[derive(Clone, PartialEq, Props)]
pub struct HeartBackdropProps {
    /// Number of hearts (default: 20)
    #[props(default = 20)]
    pub count: usize,
    /// Opacity of the layer (default: 0.35)
    #[props(default = 0.35)]
    pub opacity: f32,
}

/// Horizontal position, animation delay and size of heart `i`.
///
/// Spread with the golden ratio so hearts never bunch up; no randomness
/// needed for a background.
pub fn heart_layout(i: usize) -> (f32, f32, f32) {
    const PHI: f32 = 0.618_034;
    let left = ((i as f32 * PHI).fract() * 100.0).round();
    let delay = (i % 7) as f32 * 0.9;
    let size = 14.0 + (i % 4) as f32 * 6.0;
    (left, delay, size)
}

/// Renders the drifting hearts layer
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     div { class: "app-shell",
///         HeartBackdrop {}
///         // Content goes on top
///     }
/// }
/// ```
#[component]
pub fn HeartBackdrop(props: HeartBackdropProps) -> Element {
    let opacity = props.opacity;

    rsx! {
        div {
            class: "heart-backdrop",
            style: "position: absolute; inset: 0; pointer-events: none; overflow: hidden; opacity: {opacity};",
            "aria-hidden": "true",
            for i in 0..props.count {
                {
                    let (left, delay, size) = heart_layout(i);
                    let glyph = HEART_GLYPHS[i % HEART_GLYPHS.len()];
                    rsx! {
                        span {
                            key: "{i}",
                            class: "floating-heart",
                            style: "left: {left}%; animation-delay: {delay}s; font-size: {size}px;",
                            "{glyph}"
                        }
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
    fn layout_stays_on_screen() {
        for i in 0..50 {
            let (left, delay, size) = heart_layout(i);
            assert!((0.0..=100.0).contains(&left));
            assert!(delay >= 0.0);
            assert!(size >= 14.0);
        }
    }

    #[test]
    fn default_props() {
        let props = HeartBackdropProps::builder().build();
        assert_eq!(props.count, 20);
        assert!((props.opacity - 0.35).abs() < f32::EPSILON);
    }
}
