//! Reason Dots Component
//!
//! Row of dots under the reason panel. The selected dot stretches into a
//! pill.

use dioxus::prelude::*;

/// Properties for the ReasonDots component
#[derive(Clone, PartialEq, Props)]
pub struct ReasonDotsProps {
    /// Number of panels
    pub count: usize,
    /// Currently shown panel
    pub selected: usize,
    /// Handler called with the clicked panel index
    pub on_select: EventHandler<usize>,
}

/// Displays one dot per reason panel
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     ReasonDots {
///         count: REASONS.len(),
///         selected: state.reason_index(),
///         on_select: move |i| dispatch(flow, celebrations, FlowEvent::SelectReason(i)),
///     }
/// }
/// ```
#[component]
pub fn ReasonDots(props: ReasonDotsProps) -> Element {
    let on_select = props.on_select;

    rsx! {
        div {
            class: "reason-dots",
            role: "tablist",
            "aria-label": "Reasons",
            for index in 0..props.count {
                {
                    let selected = index == props.selected;
                    let label = format!("Reason {}", index + 1);
                    rsx! {
                        button {
                            key: "{index}",
                            class: dot_class(selected),
                            role: "tab",
                            "aria-selected": if selected { "true" } else { "false" },
                            "aria-label": "{label}",
                            onclick: move |_| on_select.call(index),
                        }
                    }
                }
            }
        }
    }
}

fn dot_class(selected: bool) -> &'static str {
    if selected {
        "reason-dot selected"
    } else {
        "reason-dot"
    }
}
