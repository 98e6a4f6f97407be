//! Font subsystem using `fontdue`

use std::path::Path;

use fontdue::{Font, FontSettings};

use crate::error::{StartupError, StartupResult};

/// Initialized font rendering context
pub struct FontSubsystem {
    fonts: Vec<Font>,
}

impl FontSubsystem {
    /// Initialize the font context, loading `font_path` when given
    pub fn init(font_path: Option<&Path>) -> StartupResult<Self> {
        let mut subsystem = Self { fonts: Vec::new() };
        if let Some(path) = font_path {
            subsystem.load_font(path)?;
        }

        log::debug!("Font subsystem initialized with {} font(s)", subsystem.fonts.len());
        Ok(subsystem)
    }

    fn load_font(&mut self, path: &Path) -> StartupResult<()> {
        let bytes = std::fs::read(path)
            .map_err(|e| StartupError::FontInit(format!("{}: {}", path.display(), e)))?;
        let font = Font::from_bytes(bytes, FontSettings::default())
            .map_err(|e| StartupError::FontInit(format!("{}: {}", path.display(), e)))?;

        log::debug!("Loaded font '{}' ({} glyphs)", path.display(), font.glyph_count());
        self.fonts.push(font);
        Ok(())
    }

    /// Number of loaded faces
    pub fn font_count(&self) -> usize {
        self.fonts.len()
    }
}

impl Drop for FontSubsystem {
    fn drop(&mut self) {
        log::debug!("Shutting down font subsystem");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_without_font() {
        let subsystem = FontSubsystem::init(None).unwrap();
        assert_eq!(subsystem.font_count(), 0);
    }

    #[test]
    fn test_missing_font_file_fails() {
        let path = std::env::temp_dir().join("app_bootstrap_no_such_font.ttf");
        let error = FontSubsystem::init(Some(&path)).err().unwrap();
        assert_eq!(error.step(), crate::Step::FontInit);
        assert!(error.message().contains("no_such_font"), "{error}");
    }

    #[test]
    fn test_garbage_font_file_fails() {
        let path = std::env::temp_dir().join(format!("app_bootstrap_{}_garbage.ttf", std::process::id()));
        std::fs::write(&path, b"definitely not a font").unwrap();
        let result = FontSubsystem::init(Some(&path));
        std::fs::remove_file(&path).ok();

        assert!(matches!(result, Err(StartupError::FontInit(_))));
    }
}
