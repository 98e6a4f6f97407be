//! Backend seam between the startup sequence and the native libraries
//!
//! The sequencer only sees [`Platform`]. Each acquisition returns an owning
//! handle; dropping the handle is the teardown. [`NativePlatform`] wires the
//! handles to glfw, `image` and `fontdue`, and tests plug in recording mocks.

use std::path::PathBuf;

use crate::config::{StartupConfig, WindowConfig};
use crate::error::StartupResult;
use crate::subsystem::{DemoWindow, FontSubsystem, ImageFormats, ImageSubsystem, VideoSubsystem};

/// Image subsystem handle that reports which codecs came up
pub trait ImageContext {
    /// Codecs that were initialized
    fn formats(&self) -> ImageFormats;
}

impl ImageContext for ImageSubsystem {
    fn formats(&self) -> ImageFormats {
        Self::formats(self)
    }
}

/// Acquisition operations for every resource the sequence needs
///
/// Implementations must only hand out a handle when the acquisition
/// succeeded; a failed step returns an error and leaves nothing to release.
pub trait Platform {
    /// Video subsystem handle
    type Video;
    /// Image subsystem handle
    type Image: ImageContext;
    /// Font subsystem handle
    type Font;
    /// Window handle
    type Window;

    /// Initialize the video subsystem
    fn init_video(&mut self) -> StartupResult<Self::Video>;

    /// Initialize the image subsystem with the `requested` codecs
    fn init_image(&mut self, requested: ImageFormats) -> StartupResult<Self::Image>;

    /// Initialize the font subsystem
    fn init_font(&mut self) -> StartupResult<Self::Font>;

    /// Create the main window on an initialized video subsystem
    fn create_window(&mut self, video: &mut Self::Video, config: &WindowConfig) -> StartupResult<Self::Window>;
}

/// glfw / `image` / `fontdue` backed platform
#[derive(Debug, Clone, Default)]
pub struct NativePlatform {
    font_path: Option<PathBuf>,
}

impl NativePlatform {
    /// Platform with no font preloaded
    pub const fn new() -> Self {
        Self { font_path: None }
    }

    /// Platform set up from the startup configuration
    pub fn from_config(config: &StartupConfig) -> Self {
        Self {
            font_path: config.font_path.clone(),
        }
    }
}

impl Platform for NativePlatform {
    type Video = VideoSubsystem;
    type Image = ImageSubsystem;
    type Font = FontSubsystem;
    type Window = DemoWindow;

    fn init_video(&mut self) -> StartupResult<VideoSubsystem> {
        VideoSubsystem::init()
    }

    fn init_image(&mut self, requested: ImageFormats) -> StartupResult<ImageSubsystem> {
        ImageSubsystem::init(requested)
    }

    fn init_font(&mut self) -> StartupResult<FontSubsystem> {
        FontSubsystem::init(self.font_path.as_deref())
    }

    fn create_window(&mut self, video: &mut VideoSubsystem, config: &WindowConfig) -> StartupResult<DemoWindow> {
        video.create_window(config)
    }
}
