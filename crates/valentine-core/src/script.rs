//! Copy shown on each screen.

use crate::flow::Step;

pub const DEFAULT_RECIPIENT: &str = "Vivian Nyambura";

/// Label of the control that never gets clicked.
pub const DECLINE_LABEL: &str = "No";

pub const OCCASION: &str = "Valentine's Day 2026";

/// One informational panel on the reasons screen.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Reason {
    /// Lead-in line, with `highlight` rendered emphasized
    pub lead: &'static str,
    pub highlight: &'static str,
    pub trail: &'static str,
    pub detail: &'static str,
}

pub const REASONS: [Reason; 4] = [
    Reason {
        lead: "Those ",
        highlight: "December holidays",
        trail: " we spent together...",
        detail: "All that fun we had will forever be in my heart \u{1F4AB}",
    },
    Reason {
        lead: "The way you ",
        highlight: "cook for me",
        trail: "...",
        detail: "Your food is always delicious and made with love \u{1F37D}\u{FE0F}\u{1F495}",
    },
    Reason {
        lead: "Our special way of saying goodbye",
        highlight: "",
        trail: "...",
        detail: "\"I love you\" \u{2192} \"I love you more\" \u{2192} \"I love you most\" \u{1F970}",
    },
    Reason {
        lead: "That ",
        highlight: "playful biting",
        trail: " when we're chilling...",
        detail: "I think you're addicted to it! It's your cute way of showing love \u{1F602}\u{1F495}",
    },
];

/// Text content of a single screen.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Screen {
    pub eyebrow: &'static str,
    pub headline: String,
    pub body: Option<String>,
    /// Every button on the screen that moves the flow forward
    pub affirmatives: &'static [&'static str],
}

/// Screen copy personalised for one recipient.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Script {
    recipient: String,
}

impl Default for Script {
    fn default() -> Self {
        Self::new(DEFAULT_RECIPIENT)
    }
}

impl Script {
    pub fn new(recipient: impl Into<String>) -> Self {
        let recipient = recipient.into();
        let recipient = if recipient.trim().is_empty() {
            DEFAULT_RECIPIENT.to_string()
        } else {
            recipient.trim().to_string()
        };
        Self { recipient }
    }

    pub fn recipient(&self) -> &str {
        &self.recipient
    }

    pub fn screen(&self, step: Step) -> Screen {
        match step {
            Step::Greeting => Screen {
                eyebrow: "Hey",
                headline: self.recipient.clone(),
                body: Some(
                    "Remember all that fun we had in December? \
                     Well, I have something special to ask you... \u{1F4AB}"
                        .to_string(),
                ),
                affirmatives: &["I'm Ready!"],
            },
            Step::Compliment => Screen {
                eyebrow: "First things first\u{2026}",
                headline: "Are you aware that you're the prettiest person I've ever seen?"
                    .to_string(),
                body: None,
                affirmatives: &["Yes \u{1F496}", "Highly likely \u{1F60C}"],
            },
            Step::Promise => Screen {
                eyebrow: "Quick question\u{2026}",
                headline: "Will you promise to keep cooking that delicious food for me?"
                    .to_string(),
                body: None,
                affirmatives: &[
                    "Always! \u{1F469}\u{200D}\u{1F373}\u{1F495}",
                    "Only for you \u{1F970}",
                ],
            },
            Step::Reasons => Screen {
                eyebrow: "Before I ask you something important...",
                headline: "Here's what makes you special to me \u{1F495}".to_string(),
                body: None,
                affirmatives: &["Continue \u{1F496}"],
            },
            Step::Question => Screen {
                eyebrow: "Then there's only one thing left to ask\u{2026}",
                headline: format!("{}, will you be my", self.recipient),
                body: Some("Valentine? \u{1F498}".to_string()),
                affirmatives: &["YES \u{1F496}"],
            },
            Step::Celebration => Screen {
                eyebrow: "YES \u{1F496}",
                headline: self.recipient.clone(),
                body: Some("is officially my Valentine \u{1F495}".to_string()),
                affirmatives: &[],
            },
        }
    }

    /// Text placed on the clipboard by the "Post" share hint.
    pub fn share_caption(&self) -> String {
        format!(
            "{} is officially my Valentine \u{1F495} - {}",
            self.recipient, OCCASION
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_recipient_uses_default() {
        assert_eq!(Script::new("   ").recipient(), DEFAULT_RECIPIENT);
        assert_eq!(Script::new(" Ada ").recipient(), "Ada");
    }

    #[test]
    fn every_step_but_the_last_can_advance() {
        let script = Script::default();
        for step in Step::ALL {
            let screen = script.screen(step);
            assert_eq!(screen.affirmatives.is_empty(), step.is_terminal());
        }
    }

    #[test]
    fn question_names_the_recipient() {
        let script = Script::new("Ada");
        assert!(script.screen(Step::Question).headline.starts_with("Ada"));
        assert!(script.share_caption().contains("Ada"));
        assert!(script.share_caption().ends_with(OCCASION));
    }
}
