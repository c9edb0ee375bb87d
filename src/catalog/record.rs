use std::cmp::Ordering;
use std::hash::{Hash, Hasher};
use std::sync::atomic::{AtomicU64, Ordering as AtomicOrdering};

/// Family name used when the provider cannot supply one.
pub const UNKNOWN_FAMILY: &str = "Unknown";

static NEXT_FONT_ID: AtomicU64 = AtomicU64::new(1);

/// Process-local identifier for a [`FontRecord`].
///
/// Unique for the lifetime of the process and never persisted. Two loads of
/// the same face produce different ids.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FontId(u64);

impl FontId {
    fn next() -> Self {
        Self(NEXT_FONT_ID.fetch_add(1, AtomicOrdering::Relaxed))
    }

    pub fn get(self) -> u64 {
        self.0
    }
}

/// Weight and slant of a face, used to draw the exact face in previews.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FaceStyle {
    /// CSS-style weight, 100 to 900.
    pub weight: f32,
    pub italic: bool,
}

impl Default for FaceStyle {
    fn default() -> Self {
        Self {
            weight: 400.0,
            italic: false,
        }
    }
}

/// One installed font face.
///
/// Equality and hashing cover the postscript, display and family names and
/// the monospaced flag. `id` and `style` are ignored, so the same face seen
/// in two separate enumerations compares equal.
#[derive(Clone, Debug)]
pub struct FontRecord {
    pub id: FontId,
    pub postscript_name: String,
    pub display_name: String,
    pub family_name: String,
    pub is_monospaced: bool,
    pub style: FaceStyle,
}

impl FontRecord {
    /// Build a record, substituting fallbacks for missing names.
    ///
    /// Returns `None` when `postscript_name` is empty, since a face without
    /// one cannot be addressed.
    pub fn new(
        postscript_name: impl Into<String>,
        display_name: Option<String>,
        family_name: Option<String>,
        is_monospaced: bool,
    ) -> Option<Self> {
        let postscript_name = postscript_name.into();
        if postscript_name.is_empty() {
            return None;
        }

        let display_name = display_name
            .filter(|name| !name.is_empty())
            .unwrap_or_else(|| postscript_name.clone());
        let family_name = family_name
            .filter(|name| !name.is_empty())
            .unwrap_or_else(|| UNKNOWN_FAMILY.to_string());

        Some(Self {
            id: FontId::next(),
            postscript_name,
            display_name,
            family_name,
            is_monospaced,
            style: FaceStyle::default(),
        })
    }

    pub fn with_style(mut self, style: FaceStyle) -> Self {
        self.style = style;
        self
    }

    /// Family name to request when drawing this face.
    ///
    /// Faces whose family fell back to [`UNKNOWN_FAMILY`] are requested by
    /// display name, which the platform font matcher can usually resolve.
    pub fn preview_family(&self) -> &str {
        if self.family_name == UNKNOWN_FAMILY {
            &self.display_name
        } else {
            &self.family_name
        }
    }

    /// Catalog order: family, display name, postscript name, then the
    /// monospaced flag so that the order is total over equality.
    pub fn catalog_cmp(&self, other: &Self) -> Ordering {
        self.family_name
            .cmp(&other.family_name)
            .then_with(|| self.display_name.cmp(&other.display_name))
            .then_with(|| self.postscript_name.cmp(&other.postscript_name))
            .then_with(|| self.is_monospaced.cmp(&other.is_monospaced))
    }
}

impl PartialEq for FontRecord {
    fn eq(&self, other: &Self) -> bool {
        self.postscript_name == other.postscript_name
            && self.display_name == other.display_name
            && self.family_name == other.family_name
            && self.is_monospaced == other.is_monospaced
    }
}

impl Eq for FontRecord {}

impl Hash for FontRecord {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.postscript_name.hash(state);
        self.display_name.hash(state);
        self.family_name.hash(state);
        self.is_monospaced.hash(state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_display_name_falls_back_to_postscript_name() {
        let record = FontRecord::new("Menlo-Regular", None, Some("Menlo".into()), true).unwrap();
        assert_eq!(record.display_name, "Menlo-Regular");

        let record =
            FontRecord::new("Menlo-Regular", Some(String::new()), Some("Menlo".into()), true)
                .unwrap();
        assert_eq!(record.display_name, "Menlo-Regular");
    }

    #[test]
    fn test_family_name_falls_back_to_unknown() {
        let record = FontRecord::new("Mystery", Some("Mystery".into()), None, false).unwrap();
        assert_eq!(record.family_name, UNKNOWN_FAMILY);

        let record =
            FontRecord::new("Mystery", Some("Mystery".into()), Some(String::new()), false)
                .unwrap();
        assert_eq!(record.family_name, "Unknown");
    }

    #[test]
    fn test_preview_family_avoids_unknown_sentinel() {
        let named = FontRecord::new(
            "Menlo-Bold",
            Some("Menlo Bold".into()),
            Some("Menlo".into()),
            true,
        )
        .unwrap();
        assert_eq!(named.preview_family(), "Menlo");

        let orphan =
            FontRecord::new("Mystery-Regular", Some("Mystery".into()), None, false).unwrap();
        assert_eq!(orphan.preview_family(), "Mystery");

        let bare = FontRecord::new("Mystery-Regular", None, None, false).unwrap();
        assert_eq!(bare.preview_family(), "Mystery-Regular");
    }

    #[test]
    fn test_empty_postscript_name_is_rejected() {
        assert!(FontRecord::new("", Some("Nameless".into()), None, false).is_none());
    }

    #[test]
    fn test_equality_ignores_id_and_style() {
        let a = FontRecord::new("Arial", Some("Arial".into()), Some("Arial".into()), false)
            .unwrap();
        let b = FontRecord::new("Arial", Some("Arial".into()), Some("Arial".into()), false)
            .unwrap()
            .with_style(FaceStyle {
                weight: 700.0,
                italic: true,
            });
        assert_ne!(a.id, b.id);
        assert_eq!(a, b);

        let set: HashSet<_> = [a, b].into_iter().collect();
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn test_equality_covers_monospaced_flag() {
        let a = FontRecord::new("Odd", Some("Odd".into()), Some("Odd".into()), false).unwrap();
        let b = FontRecord::new("Odd", Some("Odd".into()), Some("Odd".into()), true).unwrap();
        assert_ne!(a, b);
        assert_eq!(a.catalog_cmp(&b), Ordering::Less);
    }

    #[test]
    fn test_catalog_cmp_is_case_sensitive() {
        let upper = FontRecord::new("Zed", None, Some("Zed".into()), false).unwrap();
        let lower = FontRecord::new("abc", None, Some("abc".into()), false).unwrap();
        // 'Z' (U+005A) sorts before 'a' (U+0061)
        assert_eq!(upper.catalog_cmp(&lower), Ordering::Less);
    }
}
