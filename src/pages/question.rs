//! Step 5 - the question.
//!
//! "YES" advances. "No" jumps somewhere else whenever the pointer or a
//! finger gets near it.

use dioxus::desktop::use_window;
use dioxus::prelude::*;
use valentine_core::{FlowEvent, Step, Viewport, DECLINE_LABEL};
use valentine_ui::{Button, ButtonVariant, EvasiveButton};

use crate::context::{dispatch, use_celebrations, use_flow, use_script};

#[component]
pub fn QuestionPage() -> Element {
    let flow = use_flow();
    let celebrations = use_celebrations();
    let window = use_window();
    let screen = use_script().read().screen(Step::Question);
    let (offset, evading) = {
        let state = flow.read();
        (state.state().evade_position(), state.state().is_evading())
    };

    let on_approach = move |_: ()| {
        let viewport = current_viewport(&window);
        dispatch(flow, celebrations, FlowEvent::TriggerEvasion(viewport));
    };

    rsx! {
        section { class: "card card-enter question-card",
            div { class: "heart-badge beat", "aria-hidden": "true", "\u{1F498}" }
            p { class: "eyebrow", "{screen.eyebrow}" }
            h1 { class: "display-name text-glow", "{screen.headline}" }
            if let Some(body) = screen.body.as_deref() {
                p { class: "display-title rainbow-glow", "{body}" }
            }

            div { class: "answer-row",
                for label in screen.affirmatives.iter() {
                    Button {
                        variant: ButtonVariant::Romantic,
                        class: "yes-button shimmer".to_string(),
                        onclick: move |_| dispatch(flow, celebrations, FlowEvent::Advance),
                        "{label}"
                    }
                }
                EvasiveButton {
                    label: DECLINE_LABEL.to_string(),
                    offset,
                    evading,
                    on_approach,
                }
            }
        }
    }
}

/// Logical size of the window the app is running in.
fn current_viewport(window: &dioxus::desktop::DesktopContext) -> Viewport {
    let scale = window.window.scale_factor();
    let size = window.window.inner_size().to_logical::<f64>(scale);
    Viewport::new(size.width, size.height)
}
