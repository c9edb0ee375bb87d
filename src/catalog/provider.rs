//! The seam between the catalog and the host's font service.

use super::record::FaceStyle;

/// Failures reported by a [`FontProvider`].
///
/// Neither variant is fatal: [`Catalog::load`](super::Catalog::load) turns a
/// listing failure into an empty catalog and skips faces that fail to
/// describe.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    /// The provider could not list installed faces at all.
    #[error("font provider unavailable: {0}")]
    ProviderUnavailable(String),

    /// Metadata for one face could not be read.
    #[error("failed to read metadata for {face}: {reason}")]
    Metadata { face: String, reason: String },
}

/// Metadata for a single face, as reported by the provider.
///
/// Any of the names may be missing; the catalog applies fallbacks.
#[derive(Clone, Debug, Default)]
pub struct FaceMetadata {
    pub postscript_name: Option<String>,
    pub display_name: Option<String>,
    pub family_name: Option<String>,
    pub is_monospaced: bool,
    pub style: FaceStyle,
}

/// A source of installed font faces.
pub trait FontProvider {
    /// Opaque handle to one installed face.
    type Face;

    /// List every installed face.
    fn faces(&self) -> Result<Vec<Self::Face>, CatalogError>;

    /// Read the metadata of one face.
    fn describe(&self, face: &Self::Face) -> Result<FaceMetadata, CatalogError>;
}
