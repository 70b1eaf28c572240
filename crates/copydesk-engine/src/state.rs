//! Per-action request state
//!
//! Every user-initiated action moves through the same lifecycle:
//!
//! ```text
//! Idle --submit--> InFlight --ok--> Done(value)
//! InFlight --transport error--> Error(message)
//! Error --retry--> InFlight
//! Done --regenerate--> InFlight
//! ```
//!
//! State is held in explicit per-feature slots driven by an action reducer;
//! there is no shared mutable global. The four slots are independent and
//! non-interacting.
//!
//! There is no queuing and no sequencing token: a submit while in flight is
//! ignored (the UI disables the trigger), but a stale response that arrives
//! after a newer request on the same slot will still be applied. That race is
//! an inherited correctness gap, not a feature.

use copydesk_domain::{ConversionResponse, CopyResponse, ErrorAnalysisResponse};

/// Lifecycle state of one action slot
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SlotState<T> {
    /// Nothing submitted yet (or reset)
    Idle,
    /// A request is outstanding
    InFlight,
    /// The last request produced a value (possibly a fallback)
    Done(T),
    /// The last request failed at the transport level
    Error(String),
}

impl<T> Default for SlotState<T> {
    fn default() -> Self {
        SlotState::Idle
    }
}

/// Actions that drive a slot through its lifecycle
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SlotAction<T> {
    /// Submit a new request (also retry and regenerate)
    Submit,
    /// The request completed with a value
    Succeeded(T),
    /// The request failed at the transport level
    Failed(String),
    /// Return to idle, dropping any result
    Reset,
}

/// One action slot with reducer semantics
#[derive(Debug, Clone)]
pub struct RequestSlot<T> {
    state: SlotState<T>,
}

impl<T> Default for RequestSlot<T> {
    fn default() -> Self {
        Self {
            state: SlotState::default(),
        }
    }
}

impl<T> RequestSlot<T> {
    /// Create a slot in the idle state
    pub fn new() -> Self {
        Self {
            state: SlotState::Idle,
        }
    }

    /// Current state
    pub fn state(&self) -> &SlotState<T> {
        &self.state
    }

    /// Whether a request is outstanding
    pub fn is_in_flight(&self) -> bool {
        matches!(self.state, SlotState::InFlight)
    }

    /// Whether a submit would be accepted
    pub fn can_submit(&self) -> bool {
        !self.is_in_flight()
    }

    /// Apply an action. Invalid transitions are ignored: submitting while in
    /// flight is a no-op, and completions only land on an in-flight slot.
    pub fn apply(&mut self, action: SlotAction<T>) {
        match (&self.state, action) {
            (SlotState::InFlight, SlotAction::Succeeded(value)) => {
                self.state = SlotState::Done(value);
            }
            (SlotState::InFlight, SlotAction::Failed(message)) => {
                self.state = SlotState::Error(message);
            }
            (SlotState::InFlight, SlotAction::Reset) => {
                // An in-flight response may still land later; see module docs
                self.state = SlotState::Idle;
            }
            (SlotState::InFlight, SlotAction::Submit) => {}
            (_, SlotAction::Submit) => {
                self.state = SlotState::InFlight;
            }
            (_, SlotAction::Reset) => {
                self.state = SlotState::Idle;
            }
            // Completions without an outstanding request are dropped
            (_, SlotAction::Succeeded(_)) | (_, SlotAction::Failed(_)) => {}
        }
    }
}

/// The four independent request slots of one session
#[derive(Debug, Clone, Default)]
pub struct SessionState {
    /// Copy generation slot
    pub copy: RequestSlot<CopyResponse>,
    /// Error analysis slot
    pub analysis: RequestSlot<ErrorAnalysisResponse>,
    /// JSON/type conversion slot
    pub conversion: RequestSlot<ConversionResponse>,
    /// Daily concept slot
    pub concept: RequestSlot<String>,
}

impl SessionState {
    /// Create a session with all slots idle
    pub fn new() -> Self {
        Self::default()
    }
}
