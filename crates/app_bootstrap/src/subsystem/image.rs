//! Image codec subsystem
//!
//! Decoding itself is done by the `image` crate, which has no global state to
//! switch on. "Initializing" a codec means confirming this build can decode
//! it; PNG is additionally exercised with an in-memory encode/decode probe.

use std::io::Cursor;

use bitflags::bitflags;
use image::{ImageFormat, Rgba, RgbaImage};
use serde::{Deserialize, Serialize};

use crate::error::{StartupError, StartupResult};

bitflags! {
    /// Set of image codecs
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
    pub struct ImageFormats: u32 {
        /// Portable Network Graphics
        const PNG = 1 << 0;
        /// JPEG
        const JPEG = 1 << 1;
        /// GIF
        const GIF = 1 << 2;
        /// WebP
        const WEBP = 1 << 3;
        /// Windows bitmap
        const BMP = 1 << 4;
        /// TIFF
        const TIFF = 1 << 5;
    }
}

impl ImageFormats {
    /// Codec in the `image` crate for a single flag
    fn codec(self) -> Option<ImageFormat> {
        const CODECS: [(ImageFormats, ImageFormat); 6] = [
            (ImageFormats::PNG, ImageFormat::Png),
            (ImageFormats::JPEG, ImageFormat::Jpeg),
            (ImageFormats::GIF, ImageFormat::Gif),
            (ImageFormats::WEBP, ImageFormat::WebP),
            (ImageFormats::BMP, ImageFormat::Bmp),
            (ImageFormats::TIFF, ImageFormat::Tiff),
        ];

        CODECS
            .iter()
            .find(|(flag, _)| *flag == self)
            .map(|&(_, codec)| codec)
    }
}

/// Subset of `requested` this build can decode
pub fn supported_formats(requested: ImageFormats) -> ImageFormats {
    requested.iter().filter(|&flag| codec_ready(flag)).collect()
}

fn codec_ready(flag: ImageFormats) -> bool {
    let Some(codec) = flag.codec() else {
        return false;
    };
    if !codec.reading_enabled() {
        return false;
    }
    if flag != ImageFormats::PNG {
        return true;
    }

    match probe_png() {
        Ok(matches) => matches,
        Err(error) => {
            log::warn!("PNG codec probe failed: {}", error);
            false
        }
    }
}

fn probe_png() -> image::ImageResult<bool> {
    let pixel = Rgba([255, 0, 255, 255]);
    let source = RgbaImage::from_pixel(1, 1, pixel);

    let mut encoded = Cursor::new(Vec::new());
    source.write_to(&mut encoded, ImageFormat::Png)?;
    let decoded = image::load_from_memory_with_format(encoded.get_ref(), ImageFormat::Png)?;

    Ok(decoded.to_rgba8().get_pixel(0, 0) == &pixel)
}

/// Initialized image codecs
#[derive(Debug)]
pub struct ImageSubsystem {
    formats: ImageFormats,
}

impl ImageSubsystem {
    /// Initialize the requested codecs
    ///
    /// Fails unless every requested codec is available.
    pub fn init(requested: ImageFormats) -> StartupResult<Self> {
        let formats = supported_formats(requested);
        if !formats.contains(requested) {
            return Err(StartupError::ImageInit(format!(
                "codec support unavailable for {:?}",
                requested.difference(formats)
            )));
        }

        log::debug!("Image codecs initialized: {:?}", formats);
        Ok(Self { formats })
    }

    /// Codecs that were initialized
    pub const fn formats(&self) -> ImageFormats {
        self.formats
    }
}

impl Drop for ImageSubsystem {
    fn drop(&mut self) {
        log::debug!("Shutting down image subsystem");
    }
}
