//! Video subsystem using GLFW
//!
//! Owns the glfw context and creates the main window. glfw shuts down once
//! the context and every window created from it have been dropped.

use std::cell::RefCell;

use crate::config::WindowConfig;
use crate::error::{StartupError, StartupResult};

thread_local! {
    static LAST_ERROR: RefCell<Option<String>> = const { RefCell::new(None) };
}

/// glfw error callback: keeps the description for the next failure report.
///
/// Only traced at debug level; the failing step reports it once.
#[allow(clippy::needless_pass_by_value)]
pub(crate) fn record_error(error: glfw::Error, description: String) {
    log::debug!("GLFW error {:?}: {}", error, description);
    LAST_ERROR.with(|slot| *slot.borrow_mut() = Some(description));
}

pub(crate) fn take_last_error() -> Option<String> {
    LAST_ERROR.with(|slot| slot.borrow_mut().take())
}

/// Initialized glfw context
pub struct VideoSubsystem {
    glfw: glfw::Glfw,
}

impl VideoSubsystem {
    /// Initialize glfw
    pub fn init() -> StartupResult<Self> {
        take_last_error();
        let glfw = glfw::init(record_error).map_err(|error| {
            StartupError::VideoInit(take_last_error().unwrap_or_else(|| format!("{error:?}")))
        })?;

        log::debug!("GLFW {} initialized", glfw::get_version_string());
        Ok(Self { glfw })
    }

    // Size of the primary monitor's current video mode.
    fn primary_display_size(&mut self) -> Option<(u32, u32)> {
        self.glfw.with_primary_monitor(|_, monitor| {
            monitor
                .and_then(|monitor| monitor.get_video_mode())
                .map(|mode| (mode.width, mode.height))
        })
    }

    /// Create the main window
    ///
    /// The window has no client API attached (nothing is drawn into it), is
    /// not resizable, and is shown only after it has been positioned.
    pub fn create_window(&mut self, config: &WindowConfig) -> StartupResult<DemoWindow> {
        take_last_error();

        self.glfw.default_window_hints();
        self.glfw.window_hint(glfw::WindowHint::ClientApi(glfw::ClientApiHint::NoApi));
        self.glfw.window_hint(glfw::WindowHint::Resizable(false));
        self.glfw.window_hint(glfw::WindowHint::Visible(false));

        let (mut window, _events) = self
            .glfw
            .create_window(config.width, config.height, &config.title, glfw::WindowMode::Windowed)
            .ok_or_else(|| {
                StartupError::WindowCreate(
                    take_last_error().unwrap_or_else(|| "no window handle returned".to_string()),
                )
            })?;

        let display = self.primary_display_size();
        if let Some((x, y)) = config.position.resolve((config.width, config.height), display) {
            window.set_pos(x, y);
        }

        if config.visible {
            window.show();
        }

        log::debug!(
            "Window '{}' created at {:?} ({}x{})",
            config.title,
            window.get_pos(),
            config.width,
            config.height
        );

        Ok(DemoWindow {
            _window: window,
            title: config.title.clone(),
        })
    }
}

impl Drop for VideoSubsystem {
    fn drop(&mut self) {
        log::debug!("Shutting down video subsystem");
    }
}

/// Main application window
pub struct DemoWindow {
    _window: glfw::PWindow,
    title: String,
}

impl Drop for DemoWindow {
    fn drop(&mut self) {
        log::debug!("Destroying window '{}'", self.title);
    }
}
