//! Share hints on the final screen.
//!
//! "Post" copies a caption to the clipboard; "Record" is just a nudge to
//! start a screen recording.

use dioxus::prelude::*;

/// Properties for the ShareHints component
#[derive(Clone, PartialEq, Props)]
pub struct ShareHintsProps {
    /// Text placed on the clipboard
    pub caption: String,
}

#[component]
pub fn ShareHints(props: ShareHintsProps) -> Element {
    let mut copied = use_signal(|| false);
    let mut show_record_tip = use_signal(|| false);

    let copy_caption = move |caption: String| {
        spawn(async move {
            // Use arboard for cross-platform clipboard access
            match arboard::Clipboard::new() {
                Ok(mut clipboard) => {
                    if let Err(e) = clipboard.set_text(&caption) {
                        tracing::warn!("Failed to copy share caption: {}", e);
                        return;
                    }
                }
                Err(e) => {
                    tracing::warn!("Clipboard not available: {}", e);
                    return;
                }
            }
            copied.set(true);
            tokio::time::sleep(std::time::Duration::from_secs(2)).await;
            copied.set(false);
        });
    };

    let caption = props.caption.clone();

    rsx! {
        div { class: "share-hints",
            div { class: "share-hint",
                button {
                    class: "btn-share",
                    r#type: "button",
                    onclick: move |_| copy_caption(caption.clone()),
                    span { "aria-hidden": "true", "\u{1F4F7}" }
                    if copied() { "Copied!" } else { "Post" }
                }
                p { class: "share-label", "Screenshot & Post" }
            }
            div { class: "share-hint",
                button {
                    class: "btn-share",
                    r#type: "button",
                    onclick: move |_| show_record_tip.toggle(),
                    span { "aria-hidden": "true", "\u{1F3A5}" }
                    "Record"
                }
                p { class: "share-label", "Record Moment" }
            }
        }
        if show_record_tip() {
            p { class: "status-hint", "Start a screen recording, then walk through it again \u{1F3AC}" }
        }
    }
}
