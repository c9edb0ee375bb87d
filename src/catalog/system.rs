//! System font provider backed by font-kit.
//!
//! Uses CoreText on macOS, DirectWrite on Windows and fontconfig elsewhere.

use font_kit::handle::Handle;
use font_kit::properties::Style;
use font_kit::source::SystemSource;

use super::provider::{CatalogError, FaceMetadata, FontProvider};
use super::record::FaceStyle;

/// Enumerates the faces installed on this machine.
pub struct SystemFontProvider {
    source: SystemSource,
}

impl SystemFontProvider {
    pub fn new() -> Self {
        Self {
            source: SystemSource::new(),
        }
    }
}

impl Default for SystemFontProvider {
    fn default() -> Self {
        Self::new()
    }
}

fn describe_handle(handle: &Handle) -> String {
    match handle {
        Handle::Path { path, font_index } => format!("{}#{}", path.display(), font_index),
        Handle::Memory { font_index, .. } => format!("<memory>#{}", font_index),
    }
}

impl FontProvider for SystemFontProvider {
    type Face = Handle;

    fn faces(&self) -> Result<Vec<Handle>, CatalogError> {
        self.source
            .all_fonts()
            .map_err(|e| CatalogError::ProviderUnavailable(e.to_string()))
    }

    fn describe(&self, face: &Handle) -> Result<FaceMetadata, CatalogError> {
        let font = face.load().map_err(|e| CatalogError::Metadata {
            face: describe_handle(face),
            reason: e.to_string(),
        })?;

        let properties = font.properties();

        Ok(FaceMetadata {
            postscript_name: font.postscript_name(),
            display_name: Some(font.full_name()),
            family_name: Some(font.family_name()),
            is_monospaced: font.is_monospace(),
            style: FaceStyle {
                weight: properties.weight.0,
                italic: !matches!(properties.style, Style::Normal),
            },
        })
    }
}
