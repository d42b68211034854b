//! Application entry point — Text-to-Speech client.
//!
//! # Startup sequence
//!
//! 1. Initialise logging.
//! 2. Load [`AppConfig`] from disk (returns default on first run).
//! 3. Create [`tokio`] runtime (multi-thread, 2 workers).
//! 4. Build the HTTP synthesizer from config.
//! 5. Create worker channels (`command`, `event`).
//! 6. Spawn the conversion worker on the tokio runtime.
//! 7. Run [`eframe::run_native`] — blocks the main thread until the window
//!    is closed.

use std::sync::Arc;

use tokio::sync::mpsc;

use text_to_speech::{
    app::TtsApp,
    config::AppConfig,
    convert::{run_converter, ConvertCommand, ConvertEvent},
    tts::{HttpSynthesizer, Synthesizer},
};

use eframe::egui;

// ---------------------------------------------------------------------------
// Native options builder
// ---------------------------------------------------------------------------

fn native_options(config: &AppConfig) -> eframe::NativeOptions {
    let (w, h) = config.ui.window_size;
    let mut vp = egui::ViewportBuilder::default()
        .with_inner_size([w, h])
        .with_min_inner_size([360.0, 280.0]);

    if let Some((x, y)) = config.ui.window_position {
        vp = vp.with_position(egui::pos2(x, y));
    }

    eframe::NativeOptions {
        viewport: vp,
        ..Default::default()
    }
}

// ---------------------------------------------------------------------------
// main
// ---------------------------------------------------------------------------

fn main() -> eframe::Result<()> {
    // 1. Logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    log::info!("Text-to-Speech client starting up");

    // 2. Configuration
    let config = AppConfig::load().unwrap_or_else(|e| {
        log::warn!("Failed to load config ({e}); using defaults");
        AppConfig::default()
    });

    // 3. Tokio runtime (2 worker threads — the HTTP call takes one)
    let rt = tokio::runtime::Builder::new_multi_thread()
        .worker_threads(2)
        .enable_all()
        .build()
        .expect("failed to create tokio runtime");

    // 4. Synthesizer
    let synthesizer: Arc<dyn Synthesizer> =
        Arc::new(HttpSynthesizer::from_config(&config.endpoint));
    log::info!("conversion endpoint: {}", config.endpoint.url);

    // 5. Channel setup
    let (command_tx, command_rx) = mpsc::channel::<ConvertCommand>(16);
    let (event_tx, event_rx) = mpsc::channel::<ConvertEvent>(32);

    // 6. Spawn conversion worker onto the tokio runtime
    rt.spawn(run_converter(synthesizer, command_rx, event_tx));

    // 7. Build the egui app and run it (blocks until the window is closed)
    let app = TtsApp::new(command_tx, event_rx, config.clone());
    let options = native_options(&config);

    eframe::run_native(
        "Text to Speech",
        options,
        Box::new(move |_cc| Ok(Box::new(app))),
    )
}
