//! Steps 2 and 3 - a question where every answer is yes.

use dioxus::prelude::*;
use valentine_core::{FlowEvent, Step};
use valentine_ui::{Button, ButtonVariant};

use crate::context::{dispatch, use_celebrations, use_flow, use_script};

#[component]
pub fn ChoicePage(step: Step) -> Element {
    let flow = use_flow();
    let celebrations = use_celebrations();
    let screen = use_script().read().screen(step);
    let icon = match step {
        Step::Compliment => "\u{1F339}",
        _ => "\u{1F373}",
    };

    rsx! {
        section { class: "card card-enter",
            div { class: "heart-badge wiggle", "aria-hidden": "true", "{icon}" }
            p { class: "eyebrow script-font", "{screen.eyebrow}" }
            h2 { class: "question-text", "{screen.headline}" }
            div { class: "answer-stack",
                for (i, label) in screen.affirmatives.iter().enumerate() {
                    {
                        // First answer is the headline one; the rest are softer
                        let variant = if i == 0 { ButtonVariant::Romantic } else { ButtonVariant::Soft };
                        rsx! {
                            Button {
                                key: "{i}",
                                variant,
                                class: "wide".to_string(),
                                onclick: move |_| dispatch(flow, celebrations, FlowEvent::Advance),
                                "{label}"
                            }
                        }
                    }
                }
            }
        }
    }
}
