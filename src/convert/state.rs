//! Conversion state machine.
//!
//! [`ConvertPhase`] is the four-state lifecycle of a conversion attempt.
//! [`ConversionState`] owns the phase plus the attempt's outputs (clip or
//! error message) and a monotonically increasing attempt id.  Worker events
//! carry the id of the attempt they belong to; events from a superseded
//! attempt are discarded, so a late response can never clobber the state of
//! a newer submission.
//!
//! ```text
//! Idle ──submit──▶ Loading ──success──▶ Ready
//!                          ──failure──▶ Error
//! Idle / Ready / Error ──submit (non-empty text)──▶ Loading
//! ```

use crate::audio::AudioClip;

use super::runner::ConvertEvent;

// ---------------------------------------------------------------------------
// ConvertPhase
// ---------------------------------------------------------------------------

/// States of the conversion lifecycle, as seen by the UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConvertPhase {
    /// No attempt has been made since the last reset — nothing to show.
    Idle,
    /// A request is in flight.
    Loading,
    /// The most recent attempt succeeded; a clip is available.
    Ready,
    /// The most recent attempt failed.
    Error,
}

impl ConvertPhase {
    /// Returns `true` while a request is in flight.
    ///
    /// The UI uses this to disable the convert button; serialisation of
    /// attempts relies on this guard rather than on request cancellation.
    ///
    /// ```
    /// use text_to_speech::convert::ConvertPhase;
    ///
    /// assert!(!ConvertPhase::Idle.is_busy());
    /// assert!(ConvertPhase::Loading.is_busy());
    /// assert!(!ConvertPhase::Ready.is_busy());
    /// assert!(!ConvertPhase::Error.is_busy());
    /// ```
    pub fn is_busy(&self) -> bool {
        matches!(self, ConvertPhase::Loading)
    }

    /// A short human-readable label suitable for display in the UI.
    pub fn label(&self) -> &'static str {
        match self {
            ConvertPhase::Idle => "Idle",
            ConvertPhase::Loading => "Converting",
            ConvertPhase::Ready => "Ready",
            ConvertPhase::Error => "Error",
        }
    }
}

impl Default for ConvertPhase {
    fn default() -> Self {
        ConvertPhase::Idle
    }
}

// ---------------------------------------------------------------------------
// ConversionState
// ---------------------------------------------------------------------------

/// The conversion attempt lifecycle owned by the UI.
///
/// Exactly one of `clip` / `error_message` is set outside `Idle` and
/// `Loading`; both are cleared when a new attempt begins.  The input text is
/// not part of this state — a failed attempt leaves the user's text in the
/// editor for resubmission.
#[derive(Debug, Default)]
pub struct ConversionState {
    /// Current phase of the conversion lifecycle.
    pub phase: ConvertPhase,
    /// The clip from the most recent successful attempt.
    pub clip: Option<AudioClip>,
    /// The message from the most recent failed attempt.
    pub error_message: Option<String>,
    /// Id of the attempt whose outcome this state reflects.  Incremented on
    /// every submission; events carrying any other id are stale.
    attempt: u64,
}

impl ConversionState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a submission is currently allowed: trimmed-non-empty text and
    /// no request in flight.
    pub fn can_submit(&self, text: &str) -> bool {
        !text.trim().is_empty() && !self.phase.is_busy()
    }

    /// Begin a new attempt: supersede any previous one, clear prior outcome,
    /// enter `Loading`.  Returns the id the worker must echo back.
    pub fn begin_attempt(&mut self) -> u64 {
        self.attempt += 1;
        self.phase = ConvertPhase::Loading;
        self.clip = None;
        self.error_message = None;
        self.attempt
    }

    /// The id of the current (latest) attempt.
    pub fn current_attempt(&self) -> u64 {
        self.attempt
    }

    /// Apply a worker event.  Events belonging to a superseded attempt are
    /// logged and dropped.
    pub fn apply(&mut self, event: &ConvertEvent) {
        if event.attempt() != self.attempt {
            log::debug!(
                "discarding event for stale attempt {} (current {})",
                event.attempt(),
                self.attempt
            );
            return;
        }

        match event {
            ConvertEvent::Started { .. } => {
                // The UI already entered Loading in begin_attempt; this is
                // just the worker's acknowledgement.
            }
            ConvertEvent::Ready { clip, .. } => {
                self.phase = ConvertPhase::Ready;
                self.clip = Some(clip.clone());
                self.error_message = None;
            }
            ConvertEvent::Failed { message, .. } => {
                self.phase = ConvertPhase::Error;
                self.error_message = Some(message.clone());
                self.clip = None;
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::convert::CONVERSION_FAILED_MESSAGE;

    fn clip() -> AudioClip {
        AudioClip::new(vec![1, 2, 3], Some("audio/mpeg".into()))
    }

    // ---- ConvertPhase ---

    #[test]
    fn only_loading_is_busy() {
        assert!(!ConvertPhase::Idle.is_busy());
        assert!(ConvertPhase::Loading.is_busy());
        assert!(!ConvertPhase::Ready.is_busy());
        assert!(!ConvertPhase::Error.is_busy());
    }

    #[test]
    fn labels() {
        assert_eq!(ConvertPhase::Idle.label(), "Idle");
        assert_eq!(ConvertPhase::Loading.label(), "Converting");
        assert_eq!(ConvertPhase::Ready.label(), "Ready");
        assert_eq!(ConvertPhase::Error.label(), "Error");
    }

    #[test]
    fn default_phase_is_idle() {
        assert_eq!(ConvertPhase::default(), ConvertPhase::Idle);
    }

    // ---- can_submit ---

    #[test]
    fn empty_text_cannot_submit() {
        let state = ConversionState::new();
        assert!(!state.can_submit(""));
    }

    #[test]
    fn whitespace_only_text_cannot_submit() {
        let state = ConversionState::new();
        assert!(!state.can_submit("   \t\n  "));
    }

    #[test]
    fn non_empty_text_can_submit_when_idle() {
        let state = ConversionState::new();
        assert!(state.can_submit("Hello world"));
    }

    #[test]
    fn cannot_submit_while_loading() {
        let mut state = ConversionState::new();
        state.begin_attempt();
        assert!(!state.can_submit("Hello world"));
    }

    #[test]
    fn can_resubmit_after_error() {
        let mut state = ConversionState::new();
        let attempt = state.begin_attempt();
        state.apply(&ConvertEvent::Failed {
            attempt,
            message: CONVERSION_FAILED_MESSAGE.into(),
        });
        assert!(state.can_submit("Test"));
    }

    #[test]
    fn can_resubmit_after_success() {
        let mut state = ConversionState::new();
        let attempt = state.begin_attempt();
        state.apply(&ConvertEvent::Ready {
            attempt,
            clip: clip(),
        });
        assert!(state.can_submit("Test"));
    }

    // ---- begin_attempt ---

    #[test]
    fn begin_attempt_enters_loading_and_clears_outcome() {
        let mut state = ConversionState::new();
        let first = state.begin_attempt();
        state.apply(&ConvertEvent::Ready {
            attempt: first,
            clip: clip(),
        });
        assert!(state.clip.is_some());

        let second = state.begin_attempt();
        assert_eq!(state.phase, ConvertPhase::Loading);
        assert!(state.clip.is_none());
        assert!(state.error_message.is_none());
        assert_eq!(second, first + 1);
    }

    #[test]
    fn begin_attempt_clears_previous_error() {
        let mut state = ConversionState::new();
        let attempt = state.begin_attempt();
        state.apply(&ConvertEvent::Failed {
            attempt,
            message: CONVERSION_FAILED_MESSAGE.into(),
        });
        assert!(state.error_message.is_some());

        state.begin_attempt();
        assert!(state.error_message.is_none());
    }

    // ---- apply ---

    #[test]
    fn success_sets_clip_and_clears_error() {
        let mut state = ConversionState::new();
        let attempt = state.begin_attempt();
        state.apply(&ConvertEvent::Ready {
            attempt,
            clip: clip(),
        });

        assert_eq!(state.phase, ConvertPhase::Ready);
        assert!(state.clip.is_some());
        assert!(state.error_message.is_none());
    }

    #[test]
    fn failure_sets_fixed_message_and_clears_clip() {
        let mut state = ConversionState::new();
        let attempt = state.begin_attempt();
        state.apply(&ConvertEvent::Failed {
            attempt,
            message: CONVERSION_FAILED_MESSAGE.into(),
        });

        assert_eq!(state.phase, ConvertPhase::Error);
        assert_eq!(
            state.error_message.as_deref(),
            Some("Failed to convert text to speech")
        );
        assert!(state.clip.is_none());
    }

    #[test]
    fn started_event_keeps_loading() {
        let mut state = ConversionState::new();
        let attempt = state.begin_attempt();
        state.apply(&ConvertEvent::Started { attempt });
        assert_eq!(state.phase, ConvertPhase::Loading);
    }

    /// A result from a superseded attempt must not disturb the current one.
    #[test]
    fn stale_ready_event_is_discarded() {
        let mut state = ConversionState::new();
        let first = state.begin_attempt();
        let _second = state.begin_attempt();

        state.apply(&ConvertEvent::Ready {
            attempt: first,
            clip: clip(),
        });

        // Still waiting on the second attempt.
        assert_eq!(state.phase, ConvertPhase::Loading);
        assert!(state.clip.is_none());
    }

    #[test]
    fn stale_failed_event_is_discarded() {
        let mut state = ConversionState::new();
        let first = state.begin_attempt();
        let second = state.begin_attempt();

        state.apply(&ConvertEvent::Failed {
            attempt: first,
            message: CONVERSION_FAILED_MESSAGE.into(),
        });
        assert_eq!(state.phase, ConvertPhase::Loading);

        // The live attempt still settles normally afterwards.
        state.apply(&ConvertEvent::Ready {
            attempt: second,
            clip: clip(),
        });
        assert_eq!(state.phase, ConvertPhase::Ready);
    }
}
