use dioxus::prelude::*;
use valentine_core::Step;
use valentine_ui::{HeartBackdrop, LoveMeter};

use crate::components::ConfettiLayer;
use crate::context::{get_config, use_flow, Celebrations};
use crate::pages::{CelebrationPage, ChoicePage, GreetingPage, QuestionPage, ReasonsPage};
use crate::theme::GLOBAL_STYLES;

/// Root application component.
///
/// Owns the flow controller and renders exactly one page, chosen by the
/// current step.
#[component]
pub fn App() -> Element {
    let config = get_config();
    let flow = use_signal(|| config.controller());
    let script = use_signal(|| config.script());
    let celebrations = use_signal(Celebrations::default);

    use_context_provider(|| flow);
    use_context_provider(|| script);
    use_context_provider(|| celebrations);

    rsx! {
        style { {GLOBAL_STYLES} }
        div { class: "app-shell",
            HeartBackdrop {}
            MeterBar {}
            main { class: "stage",
                CurrentPage {}
            }
            ConfettiLayer {}
        }
    }
}

#[component]
fn MeterBar() -> Element {
    let flow = use_flow();
    let percent = flow.read().state().love_meter();

    rsx! {
        if let Some(percent) = percent {
            LoveMeter { percent }
        }
    }
}

#[component]
fn CurrentPage() -> Element {
    let flow = use_flow();
    let step = flow.read().state().step();

    match step {
        Step::Greeting => rsx! { GreetingPage {} },
        Step::Compliment | Step::Promise => rsx! { ChoicePage { step } },
        Step::Reasons => rsx! { ReasonsPage {} },
        Step::Question => rsx! { QuestionPage {} },
        Step::Celebration => rsx! { CelebrationPage {} },
    }
}
