//! Wheel of Choices entry point
//!
//! Usage: `wheel-of-choices [settings.json]`

use std::io;
use std::path::PathBuf;

use anyhow::Context;

use wheel_of_choices::Settings;
use wheel_of_choices::sim::Session;
use wheel_of_choices::ui::Frontend;

fn main() -> anyhow::Result<()> {
    env_logger::init();
    log::info!("Wheel of Choices starting...");

    let settings = match std::env::args_os().nth(1).map(PathBuf::from) {
        Some(path) => Settings::load(&path),
        None => Settings::default(),
    };

    let seed = settings.seed.unwrap_or_else(rand::random);
    log::info!("Session seed: {}", seed);

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut frontend = Frontend::new(Session::new(seed), settings, stdin.lock(), stdout.lock());
    frontend.run().context("terminal I/O failed")?;

    log::info!("Goodbye");
    Ok(())
}
