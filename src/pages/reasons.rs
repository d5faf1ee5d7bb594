//! Step 4 - four reasons, browsed with the dots.

use dioxus::prelude::*;
use valentine_core::{FlowEvent, Step, REASONS};
use valentine_ui::{Button, ButtonVariant, ReasonDots};

use crate::context::{dispatch, use_celebrations, use_flow, use_script};

#[component]
pub fn ReasonsPage() -> Element {
    let flow = use_flow();
    let celebrations = use_celebrations();
    let screen = use_script().read().screen(Step::Reasons);
    let index = flow.read().state().reason_index();
    let reason = REASONS[index.min(REASONS.len() - 1)];

    rsx! {
        section { class: "card card-enter",
            p { class: "eyebrow", "{screen.eyebrow}" }
            h2 { class: "display-title text-glow", "{screen.headline}" }

            div { key: "{index}", class: "reason-panel",
                p { class: "reason-lead",
                    "{reason.lead}"
                    if !reason.highlight.is_empty() {
                        span { class: "highlight", "{reason.highlight}" }
                    }
                    "{reason.trail}"
                }
                p { class: "reason-detail", "{reason.detail}" }
            }

            ReasonDots {
                count: REASONS.len(),
                selected: index,
                on_select: move |i| dispatch(flow, celebrations, FlowEvent::SelectReason(i)),
            }

            for label in screen.affirmatives.iter() {
                Button {
                    variant: ButtonVariant::Romantic,
                    class: "wide".to_string(),
                    onclick: move |_| dispatch(flow, celebrations, FlowEvent::Advance),
                    "{label}"
                }
            }
        }
    }
}
