//! Text-to-Speech desktop client.
//!
//! A small egui application that sends user-entered text to a remote
//! text-to-speech endpoint and plays back / saves the returned audio.
//!
//! # Module map
//!
//! * [`config`]  — settings structs, TOML persistence, platform paths.
//! * [`tts`]     — [`tts::Synthesizer`] trait + HTTP implementation.
//! * [`audio`]   — [`audio::AudioClip`] handle, rodio playback, file export.
//! * [`convert`] — conversion state machine + background worker loop.
//! * [`app`]     — the [`app::TtsApp`] eframe application.

pub mod app;
pub mod audio;
pub mod config;
pub mod convert;
pub mod tts;
