//! Conversion worker — runs conversion requests on the tokio runtime.
//!
//! The UI sends [`ConvertCommand`]s over an mpsc channel; [`run_converter`]
//! drives the [`Synthesizer`](crate::tts::Synthesizer) and emits
//! [`ConvertEvent`]s back.  One command is processed at a time — the UI
//! serialises attempts by disabling its trigger while one is in flight, and
//! tags each attempt with an id so late results can be discarded.
//!
//! ```text
//! ConvertCommand::Convert { attempt, text }
//!   └─▶ Started { attempt }
//!         └─▶ synthesizer.synthesize(text).await
//!               ├─ Ok(clip) → Ready  { attempt, clip }
//!               └─ Err(e)   → Failed { attempt, message } (generic, cause logged)
//! ```

use std::sync::Arc;

use tokio::sync::mpsc;

use crate::audio::AudioClip;
use crate::tts::Synthesizer;

/// The one user-facing failure message.  Every failure cause (non-success
/// status, transport error, timeout, empty body) collapses into it; the
/// specific cause goes to the log.
pub const CONVERSION_FAILED_MESSAGE: &str = "Failed to convert text to speech";

// ---------------------------------------------------------------------------
// Channel message types
// ---------------------------------------------------------------------------

/// Commands sent from the UI thread to the conversion worker.
#[derive(Debug, Clone)]
pub enum ConvertCommand {
    /// Convert `text` to speech.  `attempt` is echoed back in every event so
    /// the UI can match results to the submission that produced them.
    Convert { attempt: u64, text: String },
}

/// Events delivered from the conversion worker to the UI.
#[derive(Debug, Clone)]
pub enum ConvertEvent {
    /// The worker picked up the command; the request is now in flight.
    Started { attempt: u64 },
    /// Conversion succeeded.
    Ready { attempt: u64, clip: AudioClip },
    /// Conversion failed; `message` is the fixed user-facing text.
    Failed { attempt: u64, message: String },
}

impl ConvertEvent {
    /// The attempt this event belongs to.
    pub fn attempt(&self) -> u64 {
        match self {
            ConvertEvent::Started { attempt }
            | ConvertEvent::Ready { attempt, .. }
            | ConvertEvent::Failed { attempt, .. } => *attempt,
        }
    }
}

// ---------------------------------------------------------------------------
// Worker loop
// ---------------------------------------------------------------------------

/// Run the conversion worker until `command_rx` is closed.
///
/// This is an `async fn` and should be spawned as a tokio task from
/// `main()`.  It never returns while the channel is open.
pub async fn run_converter(
    synthesizer: Arc<dyn Synthesizer>,
    mut command_rx: mpsc::Receiver<ConvertCommand>,
    event_tx: mpsc::Sender<ConvertEvent>,
) {
    while let Some(cmd) = command_rx.recv().await {
        match cmd {
            ConvertCommand::Convert { attempt, text } => {
                log::debug!("convert: attempt {attempt}, {} chars", text.len());
                let _ = event_tx.send(ConvertEvent::Started { attempt }).await;

                let event = match synthesizer.synthesize(&text).await {
                    Ok(clip) => {
                        log::info!("convert: attempt {attempt} produced {} bytes", clip.len());
                        ConvertEvent::Ready { attempt, clip }
                    }
                    Err(e) => {
                        log::warn!("convert: attempt {attempt} failed: {e}");
                        ConvertEvent::Failed {
                            attempt,
                            message: CONVERSION_FAILED_MESSAGE.into(),
                        }
                    }
                };

                let _ = event_tx.send(event).await;
            }
        }
    }

    log::info!("convert: command channel closed, worker shutting down");
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
