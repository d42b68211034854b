//! Audio playback via rodio.
//!
//! [`AudioPlayer`] owns the output stream and at most one active sink.
//! Starting playback of a new clip stops the previous one, so a clip
//! superseded by a new conversion attempt never keeps sounding underneath
//! the fresh result.
//!
//! The rodio `OutputStream` is not `Send`; the player lives on the UI thread
//! inside [`TtsApp`](crate::app::TtsApp).

use rodio::{Decoder, OutputStream, OutputStreamHandle, Sink};
use thiserror::Error;

use super::AudioClip;

// ---------------------------------------------------------------------------
// PlaybackError
// ---------------------------------------------------------------------------

/// Errors that can occur while playing a clip.
///
/// Playback failures are logged and swallowed by the UI; they never turn
/// into a conversion error.
#[derive(Debug, Error)]
pub enum PlaybackError {
    /// No audio output device could be opened.
    #[error("audio output unavailable: {0}")]
    Device(String),

    /// The clip bytes could not be decoded as audio.
    #[error("could not decode audio clip: {0}")]
    Decode(String),
}

// ---------------------------------------------------------------------------
// AudioPlayer
// ---------------------------------------------------------------------------

/// Plays [`AudioClip`]s through the default output device.
pub struct AudioPlayer {
    // Dropping the stream kills the output; it must outlive the sink.
    _stream: OutputStream,
    handle: OutputStreamHandle,
    sink: Option<Sink>,
}

impl AudioPlayer {
    /// Open the default output device.
    ///
    /// Fails on headless machines; callers should degrade gracefully (the
    /// app still converts and saves audio without a playback device).
    pub fn new() -> Result<Self, PlaybackError> {
        let (stream, handle) =
            OutputStream::try_default().map_err(|e| PlaybackError::Device(e.to_string()))?;
        Ok(Self {
            _stream: stream,
            handle,
            sink: None,
        })
    }

    /// Decode `clip` and start playing it, stopping any current playback
    /// first.
    pub fn play(&mut self, clip: &AudioClip) -> Result<(), PlaybackError> {
        self.stop();

        let source =
            Decoder::new(clip.reader()).map_err(|e| PlaybackError::Decode(e.to_string()))?;

        let sink = Sink::try_new(&self.handle).map_err(|e| PlaybackError::Device(e.to_string()))?;
        sink.append(source);
        sink.play();

        log::debug!("playback started ({} bytes)", clip.len());
        self.sink = Some(sink);
        Ok(())
    }

    /// Stop and discard the current playback, if any.
    pub fn stop(&mut self) {
        if let Some(sink) = self.sink.take() {
            sink.stop();
        }
    }

    /// Whether a clip is currently sounding.
    pub fn is_playing(&self) -> bool {
        self.sink.as_ref().is_some_and(|s| !s.empty())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    // AudioPlayer::new needs a real output device, which CI machines rarely
    // have — construction is exercised manually.  The error type is testable
    // everywhere.

    #[test]
    fn device_error_display() {
        let e = PlaybackError::Device("no default output".into());
        assert!(e.to_string().contains("no default output"));
    }

    #[test]
    fn decode_error_display() {
        let e = PlaybackError::Decode("not an mp3".into());
        assert!(e.to_string().contains("not an mp3"));
    }
}
