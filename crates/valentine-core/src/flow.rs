//! Proposal flow state machine.
//!
//! ```text
//! Greeting -> Compliment -> Promise -> Reasons -> Question -> Celebration
//!    1            2            3          4          5            6
//! ```
//!
//! Steps only ever move forward by one. Leaving the question screen for the
//! celebration screen emits [`Effect::Celebrate`]; nothing else does.
//!
//! [`transition`] is the pure function behind everything here. The
//! [`FlowController`] owns a [`FlowState`] plus the random source used for
//! evasion, and is the single writer the UI holds on to.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::error::{FlowError, FlowResult};
use crate::evasion::{sample_offset, Offset, Viewport};
use crate::script::REASONS;

/// One screen of the flow.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Step {
    /// "I'm Ready!" opener with the recipient's name
    #[default]
    Greeting = 1,
    /// "Prettiest person" question
    Compliment = 2,
    /// Cooking promise
    Promise = 3,
    /// Four reason panels
    Reasons = 4,
    /// The question itself, with the evading "No"
    Question = 5,
    /// Terminal "yes" screen
    Celebration = 6,
}

impl Step {
    pub const ALL: [Step; 6] = [
        Step::Greeting,
        Step::Compliment,
        Step::Promise,
        Step::Reasons,
        Step::Question,
        Step::Celebration,
    ];

    /// Screens that count towards the love meter.
    pub const METERED: u8 = 5;

    /// 1-based screen number
    pub fn number(self) -> u8 {
        self as u8
    }

    /// The following step, or `None` at the terminal screen
    pub fn next(self) -> Option<Step> {
        match self {
            Step::Greeting => Some(Step::Compliment),
            Step::Compliment => Some(Step::Promise),
            Step::Promise => Some(Step::Reasons),
            Step::Reasons => Some(Step::Question),
            Step::Question => Some(Step::Celebration),
            Step::Celebration => None,
        }
    }

    pub fn is_terminal(self) -> bool {
        self == Step::Celebration
    }
}

impl TryFrom<u8> for Step {
    type Error = FlowError;

    fn try_from(value: u8) -> FlowResult<Self> {
        Step::ALL
            .get(usize::from(value).wrapping_sub(1))
            .copied()
            .ok_or(FlowError::InvalidStep(value))
    }
}

/// Everything the UI needs to render the current screen.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FlowState {
    step: Step,
    reason_index: usize,
    evade_position: Offset,
    is_evading: bool,
    alt_presentation: bool,
}

impl FlowState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn step(&self) -> Step {
        self.step
    }

    /// Which reason panel is showing (meaningful on [`Step::Reasons`])
    pub fn reason_index(&self) -> usize {
        self.reason_index
    }

    /// Offset of the declining control from the viewport center
    pub fn evade_position(&self) -> Offset {
        self.evade_position
    }

    /// True once the declining control has jumped at least once
    pub fn is_evading(&self) -> bool {
        self.is_evading
    }

    /// Status-image treatment of the final screen
    pub fn is_alt_presentation(&self) -> bool {
        self.alt_presentation
    }

    /// Love meter percentage, shown for the first four screens only.
    pub fn love_meter(&self) -> Option<u8> {
        if self.step > Step::Reasons {
            return None;
        }
        let percent = (f64::from(self.step.number()) / f64::from(Step::METERED)) * 100.0;
        Some(percent.round() as u8)
    }
}

/// Discrete user intents coming from the UI.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum FlowEvent {
    /// Any affirmative button
    Advance,
    /// Reason dot clicked
    SelectReason(usize),
    /// Pointer entered or touched the declining control
    TriggerEvasion(Viewport),
    /// Status mode button on the final screen
    ToggleAltPresentation,
}

/// Side effects requested by a transition.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Effect {
    /// Start the confetti celebration
    Celebrate,
}

/// Result of applying one event.
#[derive(Clone, Debug, PartialEq)]
pub struct Transition {
    pub state: FlowState,
    pub effect: Option<Effect>,
}

impl Transition {
    fn quiet(state: FlowState) -> Self {
        Self { state, effect: None }
    }
}

/// Apply `event` to `state`.
///
/// Returns the next state and any effect to run. On error the caller keeps
/// `state` as it was.
pub fn transition<R: Rng + ?Sized>(
    state: &FlowState,
    event: FlowEvent,
    rng: &mut R,
) -> FlowResult<Transition> {
    let mut next = state.clone();

    match event {
        FlowEvent::Advance => {
            let Some(step) = state.step.next() else {
                return Ok(Transition::quiet(next));
            };
            next.step = step;
            let effect = step.is_terminal().then_some(Effect::Celebrate);
            Ok(Transition { state: next, effect })
        }
        FlowEvent::SelectReason(index) => {
            if index >= REASONS.len() {
                return Err(FlowError::ReasonOutOfRange {
                    index,
                    count: REASONS.len(),
                });
            }
            next.reason_index = index;
            Ok(Transition::quiet(next))
        }
        FlowEvent::TriggerEvasion(viewport) => {
            if state.step != Step::Question {
                return Err(FlowError::EvasionInactive(state.step));
            }
            next.evade_position = sample_offset(viewport, rng);
            next.is_evading = true;
            Ok(Transition::quiet(next))
        }
        FlowEvent::ToggleAltPresentation => {
            next.alt_presentation = !state.alt_presentation;
            Ok(Transition::quiet(next))
        }
    }
}

/// Owner of the flow state for one session.
///
/// Rejected events are logged and dropped, so the UI can forward every
/// intent without checking anything first.
pub struct FlowController<R = StdRng> {
    state: FlowState,
    rng: R,
}

impl FlowController<StdRng> {
    /// Controller with reproducible evasion positions
    pub fn seeded(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }

    pub fn from_entropy() -> Self {
        Self::with_rng(StdRng::from_os_rng())
    }
}

impl<R: Rng> FlowController<R> {
    pub fn with_rng(rng: R) -> Self {
        Self {
            state: FlowState::new(),
            rng,
        }
    }

    pub fn state(&self) -> &FlowState {
        &self.state
    }

    /// Apply an event, returning the effect the caller should run.
    pub fn dispatch(&mut self, event: FlowEvent) -> Option<Effect> {
        match transition(&self.state, event, &mut self.rng) {
            Ok(Transition { state, effect }) => {
                if state.step != self.state.step {
                    tracing::debug!(
                        from = self.state.step.number(),
                        to = state.step.number(),
                        "Flow advanced"
                    );
                }
                self.state = state;
                effect
            }
            Err(e) => {
                tracing::debug!(?event, "Flow event rejected: {}", e);
                None
            }
        }
    }

    pub fn advance(&mut self) -> Option<Effect> {
        self.dispatch(FlowEvent::Advance)
    }

    pub fn select_reason(&mut self, index: usize) {
        self.dispatch(FlowEvent::SelectReason(index));
    }

    pub fn trigger_evasion(&mut self, width: f64, height: f64) {
        self.dispatch(FlowEvent::TriggerEvasion(Viewport::new(width, height)));
    }

    pub fn toggle_alt_presentation(&mut self) {
        self.dispatch(FlowEvent::ToggleAltPresentation);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at_step(step: Step) -> FlowController {
        let mut flow = FlowController::seeded(1);
        while flow.state().step() < step {
            flow.advance();
        }
        flow
    }

    #[test]
    fn defaults() {
        let state = FlowState::new();
        assert_eq!(state.step(), Step::Greeting);
        assert_eq!(state.reason_index(), 0);
        assert_eq!(state.evade_position(), Offset::ORIGIN);
        assert!(!state.is_evading());
        assert!(!state.is_alt_presentation());
    }

    #[test]
    fn step_numbers_roundtrip() {
        for step in Step::ALL {
            assert_eq!(Step::try_from(step.number()), Ok(step));
        }
        assert_eq!(Step::try_from(0), Err(FlowError::InvalidStep(0)));
        assert_eq!(Step::try_from(7), Err(FlowError::InvalidStep(7)));
    }

    #[test]
    fn advance_moves_one_step() {
        let mut rng = StdRng::seed_from_u64(0);
        for n in 1..=5u8 {
            let mut state = FlowState::new();
            state.step = Step::try_from(n).unwrap();
            let t = transition(&state, FlowEvent::Advance, &mut rng).unwrap();
            assert_eq!(t.state.step().number(), n + 1);
        }
    }

    #[test]
    fn only_the_final_advance_celebrates() {
        let mut flow = FlowController::seeded(0);
        let effects: Vec<_> = (0..4).map(|_| flow.advance()).collect();
        assert!(effects.iter().all(Option::is_none));
        assert_eq!(flow.advance(), Some(Effect::Celebrate));
        assert_eq!(flow.advance(), None);
        assert_eq!(flow.state().step(), Step::Celebration);
    }

    #[test]
    fn reason_selection_checks_range() {
        let mut flow = at_step(Step::Reasons);
        flow.select_reason(3);
        assert_eq!(flow.state().reason_index(), 3);
        flow.select_reason(4);
        assert_eq!(flow.state().reason_index(), 3);
    }

    #[test]
    fn evasion_rejected_off_question_screen() {
        let state = FlowState::new();
        let mut rng = StdRng::seed_from_u64(0);
        let err = transition(
            &state,
            FlowEvent::TriggerEvasion(Viewport::new(800.0, 600.0)),
            &mut rng,
        )
        .unwrap_err();
        assert_eq!(err, FlowError::EvasionInactive(Step::Greeting));
    }

    #[test]
    fn evasion_sets_flag_and_position() {
        let mut flow = at_step(Step::Question);
        flow.trigger_evasion(800.0, 600.0);
        assert!(flow.state().is_evading());

        let pos = flow.state().evade_position();
        assert!(pos.x.abs() <= 300.0);
        assert!(pos.y.abs() <= 200.0);
    }

    #[test]
    fn evasion_state_persists_after_leaving() {
        let mut flow = at_step(Step::Question);
        flow.trigger_evasion(800.0, 600.0);
        let pos = flow.state().evade_position();
        flow.advance();
        assert!(flow.state().is_evading());
        assert_eq!(flow.state().evade_position(), pos);
    }

    #[test]
    fn love_meter_tracks_first_four_steps() {
        let mut flow = FlowController::seeded(0);
        let mut readings = Vec::new();
        for _ in 0..6 {
            readings.push(flow.state().love_meter());
            flow.advance();
        }
        assert_eq!(
            readings,
            vec![Some(20), Some(40), Some(60), Some(80), None, None]
        );
    }
}
