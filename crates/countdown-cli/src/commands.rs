use anyhow::{Context, Result};
use countdown_engine::{Countdown, Outcome, format_clock};
use tokio::sync::mpsc;
use tracing::info;

use crate::args::Cli;
use crate::audio::BellAlert;
use crate::config::Config;
use crate::logging;
use crate::terminal::{self, TerminalSurface};

/// Run one countdown to completion.
///
/// Returns how it ended; the caller turns a quit into a non-zero exit status.
pub fn run(cli: Cli) -> Result<Outcome> {
    let config = Config::from_cli(&cli);
    logging::init(&config.log)?;

    info!(
        duration = %format_clock(config.countdown.duration),
        sound = %config.sound_path.display(),
        "starting countdown"
    );

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_time()
        .build()
        .context("Failed to start runtime")?;

    let surface = TerminalSurface::open().context("Terminal initialization failed")?;
    terminal::install_interrupt_handler()?;

    let (tx, rx) = mpsc::unbounded_channel();
    terminal::spawn_input_reader(tx)?;

    let alert = BellAlert::new(&config.sound_path);
    let mut countdown = Countdown::new(config.countdown, surface, alert, rx);

    let outcome = runtime.block_on(countdown.run())?;
    info!(?outcome, "countdown ended");
    Ok(outcome)
}
