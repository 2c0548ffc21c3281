use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use log::info;

use keycast_app_lib::app::{build_gateway, init_logging};
use keycast_app_lib::replay::ReplayScript;
use keycast_app_lib::settings::Settings;

/// Plays a JSON-lines input script through the overlay and prints the
/// resulting display commands on stdout.
#[derive(Debug, clap::Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Script with one `{"at_ms", "switch", "old", "new"}` object per line
    script: PathBuf,

    /// Settings file to use instead of the default location
    #[clap(long)]
    config: Option<PathBuf>,

    #[clap(flatten)]
    verbose: clap_verbosity_flag::Verbosity,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let settings = Settings::load(args.config.as_deref())?;
    let level = args
        .verbose
        .is_present()
        .then(|| args.verbose.log_level_filter());
    init_logging(&settings, level);

    let script = ReplayScript::load(&args.script)?;
    let linger = settings.delays.longest();

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .context("Failed to start the async runtime")?;

    runtime.block_on(async {
        let (mut gateway, handle) = build_gateway(&settings)?;

        let player = tokio::spawn(async move {
            let played = script.play(&handle).await;
            // Let the last releases expire before stopping.
            tokio::time::sleep(linger).await;
            handle.shutdown();
            played
        });

        gateway.run().await.context("Overlay stopped")?;
        player.await.context("Replay task failed")??;
        info!("Replay complete");
        anyhow::Ok(())
    })
}
