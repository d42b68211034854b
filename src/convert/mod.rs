//! Conversion lifecycle module.
//!
//! Wires the UI to the text-to-speech backend:
//!
//! ```text
//! TtsApp ──ConvertCommand (mpsc)──▶ run_converter()  ← async tokio task
//!        ◀──ConvertEvent (mpsc)───        │
//!                                         └─ Synthesizer::synthesize
//!
//! ConversionState  ← owned by the UI, updated by ConvertEvent::apply
//! ```
//!
//! Every submission gets a fresh attempt id; events from superseded attempts
//! are discarded by [`ConversionState::apply`].

pub mod runner;
pub mod state;

// ---------------------------------------------------------------------------
// Public re-exports
// ---------------------------------------------------------------------------

pub use runner::{run_converter, ConvertCommand, ConvertEvent, CONVERSION_FAILED_MESSAGE};
pub use state::{ConversionState, ConvertPhase};
