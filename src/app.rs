//! Text-to-Speech window — egui/eframe application.
//!
//! # Architecture
//!
//! [`TtsApp`] is the top-level [`eframe::App`] that owns the UI state and
//! two channel endpoints:
//!
//! * `command_tx` — sends [`ConvertCommand`] to the conversion worker.
//! * `event_rx`   — receives [`ConvertEvent`] from the worker.
//!
//! The window has three zones: the input panel (text editor + convert
//! button), the error notice, and the result panel (playback + save).  What
//! is shown follows the current [`ConvertPhase`]:
//!
//! | Phase | Visual |
//! |-------|--------|
//! | `Idle` | input panel only |
//! | `Loading` | spinner + "Converting…", button disabled |
//! | `Ready` | playback controls + save button |
//! | `Error` | error notice — orange |

use std::path::PathBuf;
use std::time::Duration;

use eframe::egui;
use tokio::sync::mpsc;

use crate::audio::{self, AudioPlayer};
use crate::config::AppConfig;
use crate::convert::{
    ConversionState, ConvertCommand, ConvertEvent, ConvertPhase, CONVERSION_FAILED_MESSAGE,
};

// ---------------------------------------------------------------------------
// TtsApp
// ---------------------------------------------------------------------------

/// eframe application — the text-to-speech window.
pub struct TtsApp {
    // ── Conversion state ─────────────────────────────────────────────────
    /// Phase, clip, error and attempt tracking for the current conversion.
    pub state: ConversionState,
    /// The text the user is editing.  Never cleared by a failed attempt so
    /// the user can resubmit without retyping.
    pub input_text: String,

    // ── Audio ────────────────────────────────────────────────────────────
    /// Playback device — `None` on headless machines; converting and saving
    /// still work without one.
    player: Option<AudioPlayer>,
    /// Where the last save landed, shown under the result panel.
    last_saved: Option<PathBuf>,

    // ── Channels ─────────────────────────────────────────────────────────
    /// Send commands to the background conversion worker.
    pub command_tx: mpsc::Sender<ConvertCommand>,
    /// Receive results from the background conversion worker.
    pub event_rx: mpsc::Receiver<ConvertEvent>,

    // ── Configuration ────────────────────────────────────────────────────
    /// Application configuration (read-only after startup).
    pub config: AppConfig,
}

impl TtsApp {
    /// Create a new [`TtsApp`].
    ///
    /// * `command_tx` — sender end of the worker command channel.
    /// * `event_rx`   — receiver end of the worker event channel.
    /// * `config`     — loaded application configuration.
    pub fn new(
        command_tx: mpsc::Sender<ConvertCommand>,
        event_rx: mpsc::Receiver<ConvertEvent>,
        config: AppConfig,
    ) -> Self {
        let player = match AudioPlayer::new() {
            Ok(player) => Some(player),
            Err(e) => {
                log::warn!("audio playback unavailable: {e}");
                None
            }
        };

        Self {
            state: ConversionState::new(),
            input_text: String::new(),
            player,
            last_saved: None,
            command_tx,
            event_rx,
            config,
        }
    }

    // ── Channel polling ──────────────────────────────────────────────────

    /// Drain all pending worker events (non-blocking).
    fn poll_events(&mut self) {
        while let Ok(event) = self.event_rx.try_recv() {
            self.state.apply(&event);
        }
    }

    // ── Submission ───────────────────────────────────────────────────────

    /// Start a new conversion attempt for the current input text.
    ///
    /// No-op when the text is trim-empty or a request is already in flight —
    /// the button is disabled in those cases, but the guard holds even if
    /// submission is triggered another way.
    fn submit(&mut self) {
        if !self.state.can_submit(&self.input_text) {
            return;
        }

        // The previous clip is superseded: stop it sounding and let the new
        // attempt drop the buffer.
        if let Some(player) = self.player.as_mut() {
            player.stop();
        }
        self.last_saved = None;

        let attempt = self.state.begin_attempt();
        let cmd = ConvertCommand::Convert {
            attempt,
            text: self.input_text.clone(),
        };

        if self.command_tx.try_send(cmd).is_err() {
            log::error!("conversion worker unreachable");
            self.state.apply(&ConvertEvent::Failed {
                attempt,
                message: CONVERSION_FAILED_MESSAGE.into(),
            });
        }
    }

    // ── Panels ───────────────────────────────────────────────────────────

    /// Render the input panel: text editor + convert button.
    fn draw_input_panel(&mut self, ui: &mut egui::Ui) {
        ui.add(
            egui::TextEdit::multiline(&mut self.input_text)
                .hint_text("Enter your text here...")
                .desired_rows(6)
                .desired_width(f32::INFINITY),
        );

        ui.add_space(8.0);
        ui.vertical_centered(|ui| {
            if self.state.phase == ConvertPhase::Loading {
                ui.horizontal(|ui| {
                    ui.spinner();
                    ui.label("Converting...");
                });
            } else {
                let enabled = self.state.can_submit(&self.input_text);
                if ui
                    .add_enabled(enabled, egui::Button::new("Convert to Speech"))
                    .clicked()
                {
                    self.submit();
                }
            }
        });
    }

    /// Render the error notice.
    fn draw_error(&self, ui: &mut egui::Ui) {
        let msg = self
            .state
            .error_message
            .as_deref()
            .unwrap_or(CONVERSION_FAILED_MESSAGE);

        ui.add_space(8.0);
        ui.vertical_centered(|ui| {
            ui.label(
                egui::RichText::new(msg)
                    .color(egui::Color32::from_rgb(255, 136, 68))
                    .size(13.0),
            );
        });
    }

    /// Render the result panel: playback controls + save button.
    fn draw_result(&mut self, ui: &mut egui::Ui) {
        let Some(clip) = self.state.clip.clone() else {
            return;
        };

        ui.add_space(8.0);
        ui.separator();
        ui.add_space(4.0);

        ui.horizontal(|ui| {
            let playing = self.player.as_ref().is_some_and(AudioPlayer::is_playing);

            if playing {
                if ui.button("Stop").clicked() {
                    if let Some(player) = self.player.as_mut() {
                        player.stop();
                    }
                }
            } else {
                let has_device = self.player.is_some();
                if ui
                    .add_enabled(has_device, egui::Button::new("Play"))
                    .clicked()
                {
                    if let Some(player) = self.player.as_mut() {
                        if let Err(e) = player.play(&clip) {
                            log::warn!("playback failed: {e}");
                        }
                    }
                }
            }

            if ui.button("Save").clicked() {
                let path = audio::default_save_path(&self.config.output);
                match audio::save_clip(&clip, &path) {
                    Ok(()) => self.last_saved = Some(path),
                    Err(e) => log::warn!("save failed: {e:#}"),
                }
            }

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.label(
                    egui::RichText::new(format!("{:.1} KiB", clip.len() as f32 / 1024.0))
                        .color(egui::Color32::from_rgb(140, 140, 140))
                        .size(11.0),
                );
            });
        });

        if let Some(path) = &self.last_saved {
            ui.add_space(2.0);
            ui.label(
                egui::RichText::new(format!("Saved to {}", path.display()))
                    .color(egui::Color32::from_rgb(80, 200, 120))
                    .size(11.0),
            );
        }
    }
}

// ---------------------------------------------------------------------------
// eframe::App impl
// ---------------------------------------------------------------------------

impl eframe::App for TtsApp {
    /// Called every frame by eframe.  Polls the worker channel, then renders
    /// the window.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.poll_events();

        // Keep repainting while a request is in flight (and while a clip is
        // sounding) so settling is observed without waiting for input events.
        if self.state.phase == ConvertPhase::Loading
            || self.player.as_ref().is_some_and(AudioPlayer::is_playing)
        {
            ctx.request_repaint_after(Duration::from_millis(100));
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.add_space(4.0);
            ui.heading("Text to Speech");
            ui.add_space(8.0);

            self.draw_input_panel(ui);

            match self.state.phase {
                ConvertPhase::Error => self.draw_error(ui),
                ConvertPhase::Ready => self.draw_result(ui),
                // Idle and Loading: input panel only.
                ConvertPhase::Idle | ConvertPhase::Loading => {}
            }
        });
    }

    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        if let Some(player) = self.player.as_mut() {
            player.stop();
        }
        log::info!("Text-to-Speech window closing");
    }
}
