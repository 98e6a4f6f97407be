//! Startup sequencer
//!
//! Acquires video, image, font and the window in that order, holds the window
//! for the configured time and releases everything in reverse. Each acquired
//! handle is a local (or a field of [`ActiveSubsystems`]), so an early return
//! from any step drops exactly the handles acquired before it, newest first.

use std::process::ExitCode;
use std::time::Duration;

use crate::config::StartupConfig;
use crate::error::{StartupError, StartupResult};
use crate::foundation::time::hold;
use crate::platform::{ImageContext, Platform};

/// Process outcome of a startup run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitStatus {
    /// Every step succeeded
    Success,
    /// A subsystem or the window could not be acquired
    Failure,
}

impl ExitStatus {
    /// Process exit code
    pub const fn code(self) -> u8 {
        match self {
            Self::Success => 0,
            Self::Failure => 1,
        }
    }
}

impl From<ExitStatus> for ExitCode {
    fn from(status: ExitStatus) -> Self {
        Self::from(status.code())
    }
}

/// Everything acquired by a successful startup
///
/// Fields drop in declaration order, which is the teardown order:
/// window, font, image, video.
pub struct ActiveSubsystems<P: Platform> {
    window: P::Window,
    font: P::Font,
    image: P::Image,
    video: P::Video,
}

impl<P: Platform> ActiveSubsystems<P> {
    /// Acquire every resource in order, stopping at the first failure
    ///
    /// The failure is logged before anything already acquired is released.
    pub fn acquire(platform: &mut P, config: &StartupConfig) -> StartupResult<Self> {
        let mut video = platform.init_video().map_err(report)?;
        log::info!("Video subsystem initialized");

        let image = platform
            .init_image(config.requested_image_formats())
            .map_err(report)?;
        log::info!("Image subsystem initialized ({:?})", image.formats());

        let font = platform.init_font().map_err(report)?;
        log::info!("Font subsystem initialized");

        let window = platform
            .create_window(&mut video, &config.window)
            .map_err(report)?;
        log::info!(
            "Window '{}' created ({}x{})",
            config.window.title,
            config.window.width,
            config.window.height
        );

        Ok(Self {
            window,
            font,
            image,
            video,
        })
    }

    /// Keep the window up for `duration`
    pub fn hold(&self, duration: Duration) {
        let held = hold(duration);
        log::debug!("Held window for {:?}", held);
    }

    /// Main window handle
    pub const fn window(&self) -> &P::Window {
        &self.window
    }

    /// Font subsystem handle
    pub const fn font(&self) -> &P::Font {
        &self.font
    }

    /// Image subsystem handle
    pub const fn image(&self) -> &P::Image {
        &self.image
    }

    /// Video subsystem handle
    pub const fn video(&self) -> &P::Video {
        &self.video
    }
}

impl<P: Platform> Drop for ActiveSubsystems<P> {
    fn drop(&mut self) {
        log::info!("Releasing window and subsystems");
    }
}

fn report(error: StartupError) -> StartupError {
    log::error!("{}", error);
    error
}

/// Run the startup sequence, returning the first acquisition failure
pub fn try_run<P: Platform>(platform: &mut P, config: &StartupConfig) -> StartupResult<()> {
    let active = ActiveSubsystems::acquire(platform, config)?;
    active.hold(config.hold());
    drop(active);

    log::info!("Shutdown complete");
    Ok(())
}

/// Run the startup sequence and map the outcome to an exit status
pub fn run<P: Platform>(platform: &mut P, config: &StartupConfig) -> ExitStatus {
    match try_run(platform, config) {
        Ok(()) => ExitStatus::Success,
        Err(error) => {
            log::debug!("Startup aborted at {} step", error.step());
            ExitStatus::Failure
        }
    }
}
