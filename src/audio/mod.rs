//! Audio handling — clip handle, rodio playback, file export.
//!
//! ```text
//! HttpSynthesizer → AudioClip (Arc-shared bytes)
//!                      ├─ AudioPlayer::play  (rodio decode + sink)
//!                      └─ export::save_clip  (fixed speech.mp3 filename)
//! ```

pub mod clip;
pub mod export;
pub mod player;

pub use clip::AudioClip;
pub use export::{default_save_path, save_clip};
pub use player::{AudioPlayer, PlaybackError};
