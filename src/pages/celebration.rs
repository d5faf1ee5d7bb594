//! Step 6 - the answer, and a status-image mode for sharing it.

use dioxus::prelude::*;
use valentine_core::{FlowEvent, Step, OCCASION};
use valentine_ui::{Button, ButtonVariant};

use crate::components::ShareHints;
use crate::context::{dispatch, use_celebrations, use_flow, use_script};

#[component]
pub fn CelebrationPage() -> Element {
    let flow = use_flow();
    let celebrations = use_celebrations();
    let script = use_script();
    let screen = script.read().screen(Step::Celebration);
    let caption = script.read().share_caption();
    let status_mode = flow.read().state().is_alt_presentation();

    rsx! {
        section { class: "final-wrap",
            div { class: if status_mode { "card final-card status-mode" } else { "card final-card" },
                div { class: "heart-badge beat", "aria-hidden": "true", "\u{1F496}" }
                h1 { class: "display-title text-glow", "{screen.eyebrow}" }
                div { class: "final-names",
                    p { class: "display-name", "{screen.headline}" }
                    if let Some(body) = screen.body.as_deref() {
                        p { class: "body-text muted", "{body}" }
                    }
                }
                p { class: "occasion script-font", "{OCCASION}" }
                p { class: "forever", "\u{1F490} Forever \u{1F490}" }

                if !status_mode {
                    ShareHints { caption }
                }
            }

            Button {
                variant: ButtonVariant::Toggle,
                active: status_mode,
                onclick: move |_| dispatch(flow, celebrations, FlowEvent::ToggleAltPresentation),
                if status_mode { "\u{2665} Exit Status Mode" } else { "\u{2661} Status Version" }
            }

            if status_mode {
                p { class: "status-hint", "Perfect for your WhatsApp Status! \u{1F4F8}" }
            }
        }
    }
}
