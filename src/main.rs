//! Solo Pong entry point
//!
//! Initializes logging, then hands control to the platform event loop.
//! A failed startup exits with a non-zero status after logging the cause.

use std::process;

fn main() {
    env_logger::init();
    log::info!("Solo Pong starting...");

    if let Err(err) = solo_pong::platform::run() {
        log::error!("Fatal: {err}");
        process::exit(1);
    }

    log::info!("Solo Pong shut down cleanly");
}
