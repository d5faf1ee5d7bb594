//! Button Components
//!
//! - Romantic: the big gradient "yes" style actions
//! - Soft: secondary affirmative answers
//! - Toggle: the status mode switch on the final screen
//! - Decline: the "No" that runs away

use dioxus::prelude::*;
use valentine_core::Offset;

/// Button style variants
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum ButtonVariant {
    /// Gradient pink, large, glowing
    #[default]
    Romantic,
    /// White pill with pink border
    Soft,
    /// Outlined pill; filled while active
    Toggle,
    /// Plain grey, for the control nobody gets to click
    Decline,
}

impl ButtonVariant {
    /// Returns the CSS class for this variant
    pub fn class(&self) -> &'static str {
        match self {
            ButtonVariant::Romantic => "btn-romantic",
            ButtonVariant::Soft => "btn-soft",
            ButtonVariant::Toggle => "btn-toggle",
            ButtonVariant::Decline => "btn-decline",
        }
    }
}

/// Properties for the Button component
#[derive(Clone, PartialEq, Props)]
pub struct ButtonProps {
    /// Visual style variant
    #[props(default)]
    pub variant: ButtonVariant,
    /// Button content (text, emoji)
    pub children: Element,
    /// Click handler
    #[props(default)]
    pub onclick: Option<EventHandler<()>>,
    /// Only used by the Toggle variant
    #[props(default = false)]
    pub active: bool,
    /// Optional additional CSS classes
    #[props(default)]
    pub class: Option<String>,
}

/// Styled button component
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     Button {
///         variant: ButtonVariant::Romantic,
///         onclick: move |_| dispatch(flow, celebrations, FlowEvent::Advance),
///         "I'm Ready!"
///     }
/// }
/// ```
#[component]
pub fn Button(props: ButtonProps) -> Element {
    let full_class = button_class(props.variant, props.active, props.class.as_deref());
    let pressed = (props.variant == ButtonVariant::Toggle)
        .then_some(if props.active { "true" } else { "false" });

    rsx! {
        button {
            class: "{full_class}",
            r#type: "button",
            "aria-pressed": pressed,
            onclick: move |_| {
                if let Some(handler) = &props.onclick {
                    handler.call(());
                }
            },
            {props.children}
        }
    }
}

fn button_class(variant: ButtonVariant, active: bool, extra: Option<&str>) -> String {
    let mut class = variant.class().to_string();
    if variant == ButtonVariant::Toggle && active {
        class.push_str(" active");
    }
    if let Some(extra) = extra.filter(|e| !e.is_empty()) {
        class.push(' ');
        class.push_str(extra);
    }
    class
}

/// Properties for the EvasiveButton component
#[derive(Clone, PartialEq, Props)]
pub struct EvasiveButtonProps {
    pub label: String,
    /// Offset from where the button would normally sit
    pub offset: Offset,
    /// Whether the button has started running away
    pub evading: bool,
    /// Pointer entered or finger touched the button
    pub on_approach: EventHandler<()>,
}

/// How the user tried to reach the declining control.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Approach {
    Pointer,
    Touch,
}

impl Approach {
    pub fn label(&self) -> &'static str {
        match self {
            Approach::Pointer => "pointer",
            Approach::Touch => "touch",
        }
    }
}

fn approached(kind: Approach, on_approach: EventHandler<()>) {
    tracing::trace!(via = kind.label(), "Decline control approached");
    on_approach.call(());
}

/// The declining control.
///
/// It has no click handler at all: the pointer can never reach it, and
/// even if it did, nothing would happen.
#[component]
pub fn EvasiveButton(props: EvasiveButtonProps) -> Element {
    let style = evasive_style(props.offset, props.evading);
    let on_approach = props.on_approach;

    rsx! {
        div {
            class: "evasive-wrapper",
            style: "{style}",
            onmouseenter: move |_| approached(Approach::Pointer, on_approach),
            ontouchstart: move |evt| {
                evt.prevent_default();
                approached(Approach::Touch, on_approach);
            },
            button {
                class: ButtonVariant::Decline.class(),
                r#type: "button",
                tabindex: "-1",
                "{props.label}"
            }
        }
    }
}

fn evasive_style(offset: Offset, evading: bool) -> String {
    if evading {
        format!(
            "position: fixed; left: 50%; top: 50%; transform: translate(calc(-50% + {:.1}px), calc(-50% + {:.1}px)); z-index: 60;",
            offset.x, offset.y
        )
    } else {
        String::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn button_variant_classes() {
        assert_eq!(ButtonVariant::Romantic.class(), "btn-romantic");
        assert_eq!(ButtonVariant::Soft.class(), "btn-soft");
        assert_eq!(ButtonVariant::Toggle.class(), "btn-toggle");
        assert_eq!(ButtonVariant::Decline.class(), "btn-decline");
    }

    #[test]
    fn button_variant_default() {
        assert_eq!(ButtonVariant::default(), ButtonVariant::Romantic);
    }

    #[test]
    fn toggle_class_tracks_active() {
        assert_eq!(button_class(ButtonVariant::Toggle, true, None), "btn-toggle active");
        assert_eq!(button_class(ButtonVariant::Toggle, false, Some("wide")), "btn-toggle wide");
        // Only toggles show an active state
        assert_eq!(button_class(ButtonVariant::Soft, true, Some("")), "btn-soft");
    }

    #[test]
    fn approach_labels() {
        assert_eq!(Approach::Pointer.label(), "pointer");
        assert_eq!(Approach::Touch.label(), "touch");
    }

    #[test]
    fn evasive_style_only_when_evading() {
        assert_eq!(evasive_style(Offset::new(10.0, -5.0), false), "");
        let style = evasive_style(Offset::new(10.0, -5.0), true);
        assert!(style.contains("calc(-50% + 10.0px)"));
        assert!(style.contains("calc(-50% + -5.0px)"));
    }
}
