//! Step 1 - the opener.

use dioxus::prelude::*;
use valentine_core::{FlowEvent, Step};
use valentine_ui::{Button, ButtonVariant};

use crate::context::{dispatch, use_celebrations, use_flow, use_script};

#[component]
pub fn GreetingPage() -> Element {
    let flow = use_flow();
    let celebrations = use_celebrations();
    let screen = use_script().read().screen(Step::Greeting);

    rsx! {
        section { class: "card card-enter",
            div { class: "heart-badge", "aria-hidden": "true", "\u{1F49D}" }
            p { class: "eyebrow", "{screen.eyebrow}" }
            h1 { class: "display-name text-glow", "{screen.headline}" }
            if let Some(body) = screen.body.as_deref() {
                p { class: "body-text", "{body}" }
            }
            for label in screen.affirmatives.iter() {
                Button {
                    variant: ButtonVariant::Romantic,
                    class: "wide shimmer".to_string(),
                    onclick: move |_| dispatch(flow, celebrations, FlowEvent::Advance),
                    "{label}"
                }
            }
        }
    }
}
