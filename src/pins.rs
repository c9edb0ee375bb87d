//! Pinned fonts for the comparison panel.

use std::collections::HashSet;

use crate::catalog::{Catalog, FontRecord};

/// Fonts the user has pinned, keyed by value equality.
///
/// Because ids are ignored by [`FontRecord`] equality, a pin survives a
/// catalog refresh as long as the face's names and monospaced flag are
/// unchanged.
#[derive(Clone, Debug, Default)]
pub struct PinSet {
    pins: HashSet<FontRecord>,
}

impl PinSet {
    /// Pin the record if it is not pinned, unpin it otherwise.
    ///
    /// Returns whether the record is pinned afterwards.
    pub fn toggle(&mut self, record: &FontRecord) -> bool {
        if self.pins.remove(record) {
            false
        } else {
            self.pins.insert(record.clone());
            true
        }
    }

    pub fn clear(&mut self) {
        self.pins.clear();
    }

    pub fn contains(&self, record: &FontRecord) -> bool {
        self.pins.contains(record)
    }

    /// All pins, in no particular order.
    pub fn all(&self) -> impl Iterator<Item = &FontRecord> {
        self.pins.iter()
    }

    pub fn len(&self) -> usize {
        self.pins.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pins.is_empty()
    }

    /// Pins in catalog order.
    ///
    /// Pins that are no longer in `catalog` (a refresh dropped or renamed the
    /// face) come last, sorted the same way.
    pub fn in_display_order(&self, catalog: &Catalog) -> Vec<FontRecord> {
        let mut ordered: Vec<FontRecord> = catalog
            .iter()
            .filter(|record| self.pins.contains(*record))
            .cloned()
            .collect();

        if ordered.len() < self.pins.len() {
            let mut orphans: Vec<FontRecord> = self
                .all()
                .filter(|pin| !ordered.contains(*pin))
                .cloned()
                .collect();
            orphans.sort_by(FontRecord::catalog_cmp);
            ordered.extend(orphans);
        }

        ordered
    }
}
