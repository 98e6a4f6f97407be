//! Startup error types

use std::fmt;
use thiserror::Error;

/// Result type for startup operations
pub type StartupResult<T> = Result<T, StartupError>;

/// The acquisition step that produced a failure
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Step {
    /// Video (windowing) subsystem initialization
    VideoInit,
    /// Image codec subsystem initialization
    ImageInit,
    /// Font subsystem initialization
    FontInit,
    /// Main window creation
    WindowCreate,
}

impl Step {
    /// Acquisition order
    pub const ALL: [Self; 4] = [Self::VideoInit, Self::ImageInit, Self::FontInit, Self::WindowCreate];

    /// Short name of the resource this step acquires
    pub const fn resource(self) -> &'static str {
        match self {
            Self::VideoInit => "video",
            Self::ImageInit => "image",
            Self::FontInit => "font",
            Self::WindowCreate => "window",
        }
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.resource())
    }
}

/// Subsystem or resource acquisition failure
///
/// There is only one kind of failure during startup; the variant records which
/// step produced it and carries the underlying library's error text.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StartupError {
    /// Video subsystem could not be initialized
    #[error("Unable to initialize video: {0}")]
    VideoInit(String),

    /// Image subsystem could not be initialized
    #[error("Unable to initialize image: {0}")]
    ImageInit(String),

    /// Font subsystem could not be initialized
    #[error("Unable to initialize font: {0}")]
    FontInit(String),

    /// Window could not be created
    #[error("Could not create window: {0}")]
    WindowCreate(String),
}

impl StartupError {
    /// Build the error for `step` with the library's error text
    pub fn new(step: Step, message: impl Into<String>) -> Self {
        let message = message.into();
        match step {
            Step::VideoInit => Self::VideoInit(message),
            Step::ImageInit => Self::ImageInit(message),
            Step::FontInit => Self::FontInit(message),
            Step::WindowCreate => Self::WindowCreate(message),
        }
    }

    /// Step that failed
    pub const fn step(&self) -> Step {
        match self {
            Self::VideoInit(_) => Step::VideoInit,
            Self::ImageInit(_) => Step::ImageInit,
            Self::FontInit(_) => Step::FontInit,
            Self::WindowCreate(_) => Step::WindowCreate,
        }
    }

    /// Underlying library error text
    pub fn message(&self) -> &str {
        match self {
            Self::VideoInit(message)
            | Self::ImageInit(message)
            | Self::FontInit(message)
            | Self::WindowCreate(message) => message,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_step_round_trips_through_error() {
        for step in Step::ALL {
            let error = StartupError::new(step, "boom");
            assert_eq!(error.step(), step);
            assert_eq!(error.message(), "boom");
        }
    }

    #[test]
    fn test_display_names_the_failed_step() {
        for step in Step::ALL {
            let text = StartupError::new(step, "driver missing").to_string();
            assert!(text.contains(step.resource()), "{text}");
            assert!(text.ends_with("driver missing"), "{text}");
        }
        assert_eq!(
            StartupError::VideoInit("no display".into()).to_string(),
            "Unable to initialize video: no display"
        );
        assert_eq!(
            StartupError::WindowCreate("no handle".into()).to_string(),
            "Could not create window: no handle"
        );
    }
}
