//! In-memory handle to one synthesized audio payload.
//!
//! [`AudioClip`] is the local stand-in for the audio the endpoint returned:
//! the UI plays it back and saves it to disk without re-fetching.  The bytes
//! are `Arc`-shared so cloning a clip is cheap, and dropping the last handle
//! releases the buffer — a clip superseded by a new conversion attempt frees
//! its memory as soon as the UI and player let go of it.

use std::io::Cursor;
use std::sync::Arc;

/// A playable, saveable audio payload received from the conversion endpoint.
#[derive(Clone)]
pub struct AudioClip {
    bytes: Arc<[u8]>,
    content_type: Option<String>,
}

impl AudioClip {
    /// Wrap raw response bytes, with the response content type when the
    /// endpoint supplied one.
    pub fn new(bytes: Vec<u8>, content_type: Option<String>) -> Self {
        Self {
            bytes: bytes.into(),
            content_type,
        }
    }

    /// The raw audio bytes.
    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Byte length of the payload.
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Content type reported by the endpoint, if any.  Informational only:
    /// playback sniffs the format from the bytes and the save filename is
    /// fixed by config.
    pub fn content_type(&self) -> Option<&str> {
        self.content_type.as_deref()
    }

    /// A seekable reader over the shared bytes, suitable for a decoder.
    /// No copy is made.
    pub fn reader(&self) -> Cursor<Arc<[u8]>> {
        Cursor::new(Arc::clone(&self.bytes))
    }
}

impl std::fmt::Debug for AudioClip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AudioClip")
            .field("len", &self.bytes.len())
            .field("content_type", &self.content_type)
            .finish()
    }
}

impl PartialEq for AudioClip {
    fn eq(&self, other: &Self) -> bool {
        self.bytes == other.bytes && self.content_type == other.content_type
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Read;

    #[test]
    fn clip_exposes_bytes_and_len() {
        let clip = AudioClip::new(vec![1, 2, 3], Some("audio/mpeg".into()));
        assert_eq!(clip.bytes(), &[1, 2, 3]);
        assert_eq!(clip.len(), 3);
        assert!(!clip.is_empty());
        assert_eq!(clip.content_type(), Some("audio/mpeg"));
    }

    #[test]
    fn clones_share_the_same_buffer() {
        let clip = AudioClip::new(vec![0u8; 1024], None);
        let other = clip.clone();
        assert_eq!(clip, other);
        // Same allocation, not a copy.
        assert!(std::ptr::eq(clip.bytes(), other.bytes()));
    }

    #[test]
    fn reader_yields_the_full_payload() {
        let clip = AudioClip::new(vec![9, 8, 7, 6], None);
        let mut out = Vec::new();
        clip.reader().read_to_end(&mut out).unwrap();
        assert_eq!(out, vec![9, 8, 7, 6]);
    }

    #[test]
    fn debug_does_not_dump_bytes() {
        let clip = AudioClip::new(vec![0u8; 100_000], None);
        let dbg = format!("{clip:?}");
        assert!(dbg.contains("100000"));
        assert!(dbg.len() < 200);
    }
}
