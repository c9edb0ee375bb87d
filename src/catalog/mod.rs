//! Font catalog model
//!
//! The sorted, deduplicated list of installed faces. A catalog is built in
//! one go by [`Catalog::load`] and never mutated afterwards; a refresh builds
//! a new one and swaps it in.

mod provider;
mod record;
mod system;

use std::collections::HashSet;

pub use provider::{CatalogError, FaceMetadata, FontProvider};
pub use record::{FaceStyle, FontId, FontRecord, UNKNOWN_FAMILY};
pub use system::SystemFontProvider;

/// Installed faces in catalog order (family, display name, postscript name).
#[derive(Clone, Debug, Default)]
pub struct Catalog {
    fonts: Vec<FontRecord>,
}

impl Catalog {
    pub fn empty() -> Self {
        Self::default()
    }

    /// Enumerate every face the provider knows about.
    ///
    /// Never fails: a provider that cannot list faces yields an empty
    /// catalog, and faces whose metadata cannot be read are skipped.
    pub fn load<P: FontProvider>(provider: &P) -> Self {
        let faces = match provider.faces() {
            Ok(faces) => faces,
            Err(e) => {
                log::warn!("{}; continuing with an empty catalog", e);
                return Self::empty();
            }
        };

        let total = faces.len();
        let mut records = Vec::with_capacity(total);

        for face in &faces {
            let metadata = match provider.describe(face) {
                Ok(metadata) => metadata,
                Err(e) => {
                    log::debug!("Skipping face: {}", e);
                    continue;
                }
            };

            let postscript_name = metadata.postscript_name.unwrap_or_default();
            match FontRecord::new(
                postscript_name,
                metadata.display_name,
                metadata.family_name,
                metadata.is_monospaced,
            ) {
                Some(record) => records.push(record.with_style(metadata.style)),
                None => log::debug!("Skipping face without a postscript name"),
            }
        }

        let catalog = Self::from_records(records);
        log::info!(
            "Loaded {} fonts ({} faces reported by provider)",
            catalog.len(),
            total
        );
        catalog
    }

    /// Sort records into catalog order and drop postscript-name duplicates.
    ///
    /// The first record in catalog order wins, so the result does not depend
    /// on the order the records arrived in.
    pub fn from_records(mut records: Vec<FontRecord>) -> Self {
        records.sort_by(FontRecord::catalog_cmp);

        let mut seen = HashSet::with_capacity(records.len());
        records.retain(|record| seen.insert(record.postscript_name.clone()));

        Self { fonts: records }
    }

    pub fn iter(&self) -> std::slice::Iter<'_, FontRecord> {
        self.fonts.iter()
    }

    pub fn len(&self) -> usize {
        self.fonts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fonts.is_empty()
    }

    /// Find a face by its postscript name.
    #[cfg(test)]
    pub fn find(&self, postscript_name: &str) -> Option<&FontRecord> {
        self.fonts
            .iter()
            .find(|record| record.postscript_name == postscript_name)
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a FontRecord;
    type IntoIter = std::slice::Iter<'a, FontRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.fonts.iter()
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use super::*;

    /// In-memory provider. `None` entries fail to describe.
    pub struct FakeProvider {
        pub faces: Option<Vec<Option<FaceMetadata>>>,
    }

    impl FakeProvider {
        pub fn with_faces(faces: Vec<Option<FaceMetadata>>) -> Self {
            Self { faces: Some(faces) }
        }

        pub fn unavailable() -> Self {
            Self { faces: None }
        }
    }

    impl FontProvider for FakeProvider {
        type Face = usize;

        fn faces(&self) -> Result<Vec<usize>, CatalogError> {
            match &self.faces {
                Some(faces) => Ok((0..faces.len()).collect()),
                None => Err(CatalogError::ProviderUnavailable("no font service".into())),
            }
        }

        fn describe(&self, face: &usize) -> Result<FaceMetadata, CatalogError> {
            self.faces
                .as_ref()
                .and_then(|faces| faces.get(*face).cloned().flatten())
                .ok_or_else(|| CatalogError::Metadata {
                    face: face.to_string(),
                    reason: "unreadable".into(),
                })
        }
    }

    pub fn face(family: &str, display: &str, postscript: &str, mono: bool) -> FaceMetadata {
        FaceMetadata {
            postscript_name: Some(postscript.to_string()),
            display_name: Some(display.to_string()),
            family_name: Some(family.to_string()),
            is_monospaced: mono,
            style: FaceStyle::default(),
        }
    }

    pub fn record(family: &str, display: &str, postscript: &str, mono: bool) -> FontRecord {
        FontRecord::new(
            postscript,
            Some(display.to_string()),
            Some(family.to_string()),
            mono,
        )
        .unwrap()
    }

    /// Arial + Courier New.
    pub fn sample_catalog() -> Catalog {
        Catalog::from_records(vec![
            record("Courier", "Courier New", "CourierNewPSMT", true),
            record("Arial", "Arial", "Arial", false),
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::testing::*;
    use super::*;

    fn names(catalog: &Catalog) -> Vec<&str> {
        catalog
            .iter()
            .map(|record| record.postscript_name.as_str())
            .collect()
    }

    #[test]
    fn test_load_sorts_by_family_display_postscript() {
        let provider = FakeProvider::with_faces(vec![
            Some(face("Helvetica", "Helvetica Bold", "Helvetica-Bold", false)),
            Some(face("Courier", "Courier New", "CourierNewPSMT", true)),
            Some(face("Helvetica", "Helvetica", "Helvetica", false)),
            Some(face("Helvetica", "Helvetica", "Helvetica-Alt", false)),
            Some(face("Arial", "Arial", "ArialMT", false)),
        ]);

        let catalog = Catalog::load(&provider);
        assert_eq!(
            names(&catalog),
            vec![
                "ArialMT",
                "CourierNewPSMT",
                "Helvetica",
                "Helvetica-Alt",
                "Helvetica-Bold"
            ]
        );
    }

    #[test]
    fn test_catalog_is_always_sorted() {
        let provider = FakeProvider::with_faces(vec![
            Some(face("b", "b", "b1", false)),
            Some(face("B", "a", "b2", true)),
            Some(face("a", "z", "a1", false)),
            Some(face("a", "Z", "a2", false)),
            Some(face("Ä", "x", "u1", false)),
        ]);

        let catalog = Catalog::load(&provider);
        let fonts: Vec<&FontRecord> = catalog.iter().collect();
        for pair in fonts.windows(2) {
            let (a, b) = (pair[0], pair[1]);
            assert!(
                (&a.family_name, &a.display_name, &a.postscript_name)
                    <= (&b.family_name, &b.display_name, &b.postscript_name)
            );
        }
    }

    #[test]
    fn test_load_applies_fallbacks() {
        let provider = FakeProvider::with_faces(vec![Some(FaceMetadata {
            postscript_name: Some("Mystery-Regular".into()),
            display_name: None,
            family_name: None,
            is_monospaced: false,
            style: FaceStyle::default(),
        })]);

        let catalog = Catalog::load(&provider);
        let record = catalog.iter().next().unwrap();
        assert_eq!(record.display_name, "Mystery-Regular");
        assert_eq!(record.family_name, "Unknown");
    }

    #[test]
    fn test_load_skips_unreadable_faces() {
        let provider = FakeProvider::with_faces(vec![
            Some(face("Arial", "Arial", "ArialMT", false)),
            None,
            Some(FaceMetadata {
                postscript_name: None,
                ..face("Ghost", "Ghost", "", false)
            }),
            Some(face("Menlo", "Menlo", "Menlo-Regular", true)),
        ]);

        let catalog = Catalog::load(&provider);
        assert_eq!(names(&catalog), vec!["ArialMT", "Menlo-Regular"]);
    }

    #[test]
    fn test_unavailable_provider_yields_empty_catalog() {
        let catalog = Catalog::load(&FakeProvider::unavailable());
        assert!(catalog.is_empty());

        let catalog = Catalog::load(&FakeProvider::with_faces(Vec::new()));
        assert!(catalog.is_empty());
    }

    #[test]
    fn test_duplicate_postscript_names_resolve_deterministically() {
        let forward = FakeProvider::with_faces(vec![
            Some(face("Dup", "Dup Second", "Dup-PS", false)),
            Some(face("Dup", "Dup First", "Dup-PS", false)),
        ]);
        let reverse = FakeProvider::with_faces(vec![
            Some(face("Dup", "Dup First", "Dup-PS", false)),
            Some(face("Dup", "Dup Second", "Dup-PS", false)),
        ]);

        let a = Catalog::load(&forward);
        let b = Catalog::load(&reverse);
        assert_eq!(a.len(), 1);
        assert_eq!(b.len(), 1);
        assert_eq!(a.iter().next().unwrap().display_name, "Dup First");
        assert_eq!(a.iter().next(), b.iter().next());
    }

    #[test]
    fn test_reload_produces_equal_records_with_new_ids() {
        let provider = FakeProvider::with_faces(vec![Some(face(
            "Courier",
            "Courier New",
            "CourierNewPSMT",
            true,
        ))]);

        let first = Catalog::load(&provider);
        let second = Catalog::load(&provider);
        let (a, b) = (first.iter().next().unwrap(), second.iter().next().unwrap());
        assert_eq!(a, b);
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_find_by_postscript_name() {
        let catalog = sample_catalog();
        assert_eq!(
            catalog.find("CourierNewPSMT").map(|r| r.display_name.as_str()),
            Some("Courier New")
        );
        assert!(catalog.find("Nope").is_none());
    }
}
