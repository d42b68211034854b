//! Saving clips to disk.
//!
//! The save filename comes from [`OutputConfig`] and defaults to
//! `speech.mp3` regardless of the endpoint's actual content type — the same
//! fixed naming the download action has always used.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::config::OutputConfig;

use super::AudioClip;

/// Resolve the path a clip should be saved to.
///
/// Uses the configured directory when set, otherwise the platform download
/// directory, otherwise the current directory.
pub fn default_save_path(config: &OutputConfig) -> PathBuf {
    let dir = config
        .directory
        .clone()
        .or_else(dirs::download_dir)
        .unwrap_or_else(|| PathBuf::from("."));

    dir.join(&config.filename)
}

/// Write the clip bytes to `path`, creating parent directories as needed.
pub fn save_clip(clip: &AudioClip, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("creating {}", parent.display()))?;
    }
    std::fs::write(path, clip.bytes()).with_context(|| format!("writing {}", path.display()))?;

    log::info!("saved {} bytes to {}", clip.len(), path.display());
    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn save_clip_writes_exact_bytes() {
        let dir = tempdir().expect("temp dir");
        let path = dir.path().join("speech.mp3");

        let clip = AudioClip::new(vec![0xFF, 0xFB, 0x90, 0x00], Some("audio/mpeg".into()));
        save_clip(&clip, &path).expect("save");

        let written = std::fs::read(&path).expect("read back");
        assert_eq!(written, clip.bytes());
    }

    #[test]
    fn save_clip_creates_parent_directories() {
        let dir = tempdir().expect("temp dir");
        let path = dir.path().join("nested").join("deeper").join("speech.mp3");

        let clip = AudioClip::new(vec![1, 2, 3], None);
        save_clip(&clip, &path).expect("save");
        assert!(path.exists());
    }

    /// The default filename is `speech.mp3` whatever the clip contains.
    #[test]
    fn default_path_uses_configured_filename() {
        let config = OutputConfig {
            filename: "speech.mp3".into(),
            directory: Some(PathBuf::from("/tmp/tts-out")),
        };
        let path = default_save_path(&config);
        assert_eq!(path, PathBuf::from("/tmp/tts-out/speech.mp3"));
    }

    #[test]
    fn default_path_falls_back_without_directory() {
        let config = OutputConfig {
            filename: "speech.mp3".into(),
            directory: None,
        };
        let path = default_save_path(&config);
        // Download dir on desktop platforms, cwd otherwise — either way the
        // file name is preserved.
        assert!(path.file_name().is_some_and(|n| n == "speech.mp3"));
    }
}
