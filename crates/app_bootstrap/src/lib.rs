//! # App Bootstrap
//!
//! Ordered startup and mirrored teardown for a windowed application.
//!
//! Three subsystems are brought up in a fixed order (video, image codecs,
//! fonts), a window is opened on top of them, held for a configured time and
//! then everything is released in exactly the reverse order. Every acquired
//! resource is an owning handle, so the release happens on every exit path.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use app_bootstrap::prelude::*;
//!
//! let config = StartupConfig::default();
//! let mut platform = NativePlatform::from_config(&config);
//! let status = run(&mut platform, &config);
//! std::process::exit(i32::from(status.code()));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod config;
pub mod foundation;
pub mod platform;
pub mod subsystem;

mod error;
mod sequencer;


pub use error::{StartupError, StartupResult, Step};
pub use sequencer::{run, try_run, ActiveSubsystems, ExitStatus};

/// Common imports for applications
pub mod prelude {
    pub use crate::{
        config::{Config, ConfigError, StartupConfig, WindowConfig, WindowPosition},
        platform::{ImageContext, NativePlatform, Platform},
        run, try_run, ExitStatus, StartupError, StartupResult, Step,
        subsystem::ImageFormats,
    };
}
