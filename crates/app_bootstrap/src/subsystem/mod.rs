//! Native subsystem handles
//!
//! Each handle owns one initialized subsystem and shuts it down when dropped.
//! Holding the handle is the only way to prove the subsystem is active.
//!
//! - **`video`**: glfw context and the main window
//! - **`image`**: image codec availability
//! - **`font`**: font faces for text rasterization

pub mod font;
pub mod image;
pub mod video;

pub use self::font::FontSubsystem;
pub use self::image::{ImageFormats, ImageSubsystem};
pub use self::video::{DemoWindow, VideoSubsystem};
