use std::future::Future;
use std::io::{self, Stdout};
use std::path::Path;

use anyhow::{Context, Result};

use crate::capture::{notify_capture_failure, run_capture};
use crate::font_metrics::FontMetrics;
use crate::gateway::{Gateway, GatewayHandle};
use crate::router::EventRouter;
use crate::settings::Settings;
use crate::surface::{DisplaySurface, GlyphLookup, JsonLineSurface, NamedGlyphs};

pub type OverlayGateway = Gateway<NamedGlyphs, JsonLineSurface<Stdout, FontMetrics>>;

/// Installs the global logger. `RUST_LOG` takes precedence over the settings
/// level; an explicit `level` takes precedence over both.
pub fn init_logging(settings: &Settings, level: Option<log::LevelFilter>) {
    let mut builder = env_logger::Builder::new();
    builder.filter_level(settings.log_level.to_level_filter());
    builder.parse_default_env();
    if let Some(level) = level {
        builder.filter_level(level);
    }

    // Process-global logger can already be initialized in test or multi-start flows.
    if let Err(e) = builder.try_init() {
        eprintln!("Logger already initialized: {}", e);
    }
}

/// Builds the stock overlay: JSON-lines display commands on stdout with
/// glyphs from the configured directory. The idle state is drawn before
/// returning.
pub fn build_gateway(settings: &Settings) -> Result<(OverlayGateway, GatewayHandle)> {
    let metrics = FontMetrics::from_file(&settings.font.file)?;
    let surface = JsonLineSurface::new(io::stdout(), settings.layout, metrics);
    let glyphs = NamedGlyphs::new(&settings.glyph_dir);

    let mut router = EventRouter::new(glyphs, surface, settings);
    router
        .initialize()
        .context("Failed to draw the initial overlay")?;

    Ok(Gateway::new(router))
}

fn install_shutdown_handler(handle: &GatewayHandle) {
    let handle = handle.clone();
    if let Err(e) = ctrlc::set_handler(move || {
        log::info!("Shutdown signal received, initiating graceful shutdown...");
        handle.shutdown();
    }) {
        log::error!("Failed to set Ctrl-C handler: {}", e);
    }
}

/// Runs `gateway` alongside `capture` until either stops. A capture failure
/// stops the overlay and is returned.
pub async fn run_overlay<G, S, F>(gateway: &mut Gateway<G, S>, capture: F) -> Result<()>
where
    G: GlyphLookup,
    S: DisplaySurface<G::Glyph>,
    F: Future<Output = Result<()>> + Send + 'static,
{
    let mut capture = tokio::spawn(capture);

    let result = tokio::select! {
        routed = gateway.run() => routed.context("Overlay stopped"),
        captured = &mut capture => match captured {
            Ok(Ok(())) => Ok(()),
            Ok(Err(e)) => Err(e.context("Input capture stopped")),
            Err(e) => Err(anyhow::Error::new(e).context("Input capture task failed")),
        },
    };

    capture.abort();
    result
}

/// Captures live input and renders it until Ctrl-C.
pub fn run(config_path: Option<&Path>) -> Result<()> {
    let settings = Settings::load(config_path)?;
    init_logging(&settings, None);
    log::info!("Release delays: {:?}", settings.delays);

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .context("Failed to start the async runtime")?;

    runtime.block_on(async {
        let (mut gateway, handle) = build_gateway(&settings)?;
        install_shutdown_handler(&handle);

        let capture = async move {
            let captured = run_capture(handle).await;
            if let Err(e) = &captured {
                log::warn!("Input capture stopped: {:#}", e);
                notify_capture_failure("Keycast input capture failed", &format!("{:#}", e));
            }
            captured
        };

        let result = run_overlay(&mut gateway, capture).await;
        log::info!("Shutdown complete");
        result
    })
}
