//! Window demo
//!
//! Brings up the video, image and font subsystems, shows an 800x600 window
//! for three seconds and shuts everything down in reverse order. Exits with 0
//! on success and 1 if any subsystem or the window could not be acquired.

use std::process::ExitCode;

use app_bootstrap::prelude::*;

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    log::info!("Starting window demo");

    let config = StartupConfig::default();
    let mut platform = NativePlatform::from_config(&config);
    let status = run(&mut platform, &config);

    match status {
        ExitStatus::Success => log::info!("Window demo completed successfully"),
        ExitStatus::Failure => log::info!("Window demo exiting with code {}", status.code()),
    }

    status.into()
}
