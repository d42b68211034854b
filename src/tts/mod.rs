//! Text-to-speech backend module.
//!
//! This module provides:
//! * [`Synthesizer`] — async trait implemented by all conversion backends.
//! * [`HttpSynthesizer`] — the production backend; POSTs JSON to the remote
//!   conversion endpoint and returns the binary audio body.
//! * [`TtsError`] — error variants for conversion operations.
//!
//! # Quick start
//!
//! ```rust,no_run
//! use text_to_speech::config::AppConfig;
//! use text_to_speech::tts::{HttpSynthesizer, Synthesizer};
//!
//! #[tokio::main]
//! async fn main() {
//!     let config = AppConfig::default();
//!     let synth = HttpSynthesizer::from_config(&config.endpoint);
//!
//!     let clip = synth.synthesize("Hello world").await.unwrap();
//!     println!("{} bytes of audio", clip.len());
//! }
//! ```

pub mod engine;

// ---------------------------------------------------------------------------
// Public re-exports
// ---------------------------------------------------------------------------

pub use engine::{HttpSynthesizer, Synthesizer, TtsError};

// test-only re-export so the convert test module can import MockSynthesizer
// without `use text_to_speech::tts::engine::MockSynthesizer`.
#[cfg(test)]
pub use engine::MockSynthesizer;
