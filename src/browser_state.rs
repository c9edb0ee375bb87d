//! Framework-independent state behind the browser window.
//!
//! Owns the single [`Catalog`], the query and the pins. Every mutation of
//! the catalog or the query re-runs [`filter`], so views only ever read the
//! stored result.

use crate::catalog::{Catalog, FontRecord};
use crate::export;
use crate::filter::{filter, FontQuery};
use crate::pins::PinSet;

/// Compile-time defaults for the preview controls.
pub struct PreviewDefaults;

impl PreviewDefaults {
    pub const SAMPLE_TEXT: &'static str = "The quick brown fox jumps over the lazy dog";
    pub const MIN_SIZE: f32 = 8.0;
    pub const MAX_SIZE: f32 = 96.0;
    pub const SIZE_STEP: f32 = 1.0;
    pub const DEFAULT_SIZE: f32 = 24.0;
}

/// How the filtered fonts are laid out.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ViewMode {
    Grid,
    Column,
    Comparison,
}

impl ViewMode {
    pub const ALL: [ViewMode; 3] = [ViewMode::Grid, ViewMode::Column, ViewMode::Comparison];

    pub fn label(self) -> &'static str {
        match self {
            ViewMode::Grid => "Grid",
            ViewMode::Column => "Column",
            ViewMode::Comparison => "Comparison",
        }
    }
}

/// Sample text, size and layout of the previews.
#[derive(Clone, Debug, PartialEq)]
pub struct Preview {
    sample_text: String,
    font_size: f32,
    pub view_mode: ViewMode,
}

impl Default for Preview {
    fn default() -> Self {
        Self {
            sample_text: String::new(),
            font_size: PreviewDefaults::DEFAULT_SIZE,
            view_mode: ViewMode::Grid,
        }
    }
}

impl Preview {
    /// Text drawn in each preview. An empty field shows the default pangram.
    pub fn sample_text(&self) -> &str {
        if self.sample_text.is_empty() {
            PreviewDefaults::SAMPLE_TEXT
        } else {
            &self.sample_text
        }
    }

    pub fn set_sample_text(&mut self, text: impl Into<String>) {
        self.sample_text = text.into();
    }

    pub fn font_size(&self) -> f32 {
        self.font_size
    }

    pub fn set_font_size(&mut self, size: f32) {
        self.font_size = size.clamp(PreviewDefaults::MIN_SIZE, PreviewDefaults::MAX_SIZE);
    }
}

/// Identifies one catalog load so that superseded loads can be dropped.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LoadTicket(u64);

#[derive(Default)]
pub struct BrowserState {
    catalog: Catalog,
    query: FontQuery,
    visible: Vec<FontRecord>,
    pins: PinSet,
    generation: u64,
    loading: bool,
    loaded: bool,
}

impl BrowserState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn pins(&self) -> &PinSet {
        &self.pins
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Start a catalog load. Any load started earlier becomes stale.
    pub fn begin_load(&mut self) -> LoadTicket {
        self.generation += 1;
        self.loading = true;
        LoadTicket(self.generation)
    }

    /// Swap in a freshly loaded catalog.
    ///
    /// Returns `false` and leaves the state untouched when `ticket` belongs
    /// to a load that a later [`begin_load`](Self::begin_load) superseded.
    pub fn finish_load(&mut self, ticket: LoadTicket, catalog: Catalog) -> bool {
        if ticket.0 != self.generation {
            return false;
        }

        self.catalog = catalog;
        self.loading = false;
        self.loaded = true;
        self.recompute();
        true
    }

    pub fn set_query_text(&mut self, text: &str) -> bool {
        if self.query.text == text {
            return false;
        }
        self.query.text = text.to_string();
        self.recompute();
        true
    }

    pub fn set_monospaced_only(&mut self, monospaced_only: bool) -> bool {
        if self.query.monospaced_only == monospaced_only {
            return false;
        }
        self.query.monospaced_only = monospaced_only;
        self.recompute();
        true
    }

    fn recompute(&mut self) {
        self.visible = filter(&self.catalog, &self.query.text, self.query.monospaced_only)
            .into_iter()
            .cloned()
            .collect();
    }

    pub fn visible_len(&self) -> usize {
        self.visible.len()
    }

    /// The `index`-th font of the filtered list.
    pub fn visible_font(&self, index: usize) -> Option<&FontRecord> {
        self.visible.get(index)
    }

    pub fn is_pinned(&self, record: &FontRecord) -> bool {
        self.pins.contains(record)
    }

    pub fn toggle_pin(&mut self, record: &FontRecord) -> bool {
        self.pins.toggle(record)
    }

    pub fn clear_pins(&mut self) {
        self.pins.clear();
    }

    pub fn pinned_in_order(&self) -> Vec<FontRecord> {
        self.pins.in_display_order(&self.catalog)
    }

    /// Clipboard text for the comparison panel.
    pub fn comparison_text(&self, sample_text: &str) -> String {
        export::comparison_block(&self.pinned_in_order(), sample_text)
    }

    /// Short summary for the titlebar.
    pub fn status_line(&self) -> String {
        if self.loading && !self.loaded {
            return "Loading fonts…".to_string();
        }

        let total = self.catalog.len();
        let mut status = if self.query.is_empty() {
            format!("{} fonts", total)
        } else {
            format!("{} of {} fonts", self.visible.len(), total)
        };
        if !self.pins.is_empty() {
            status.push_str(&format!(" · {} pinned", self.pins.len()));
        }
        status
    }

    /// Placeholder for the font list when there is nothing to show.
    pub fn empty_message(&self) -> Option<&'static str> {
        if !self.visible.is_empty() {
            None
        } else if !self.loaded {
            Some("Loading fonts…")
        } else if self.catalog.is_empty() {
            Some("No fonts found")
        } else {
            Some("No fonts match")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::testing::{record, sample_catalog};

    fn loaded(catalog: Catalog) -> BrowserState {
        let mut state = BrowserState::new();
        let ticket = state.begin_load();
        assert!(state.finish_load(ticket, catalog));
        state
    }

    fn visible_names(state: &BrowserState) -> Vec<&str> {
        (0..state.visible_len())
            .filter_map(|idx| state.visible_font(idx))
            .map(|record| record.postscript_name.as_str())
            .collect()
    }

    #[test]
    fn test_catalog_empty_until_load_finishes() {
        let mut state = BrowserState::new();
        let ticket = state.begin_load();
        assert!(state.is_loading());
        assert!(state.catalog().is_empty());
        assert_eq!(state.empty_message(), Some("Loading fonts…"));
        assert_eq!(state.status_line(), "Loading fonts…");

        state.finish_load(ticket, sample_catalog());
        assert!(!state.is_loading());
        assert_eq!(state.visible_len(), 2);
        assert_eq!(state.empty_message(), None);
    }

    #[test]
    fn test_stale_load_is_discarded() {
        let mut state = BrowserState::new();
        let first = state.begin_load();
        let second = state.begin_load();

        assert!(state.finish_load(second, sample_catalog()));
        assert!(!state.finish_load(
            first,
            Catalog::from_records(vec![record("Menlo", "Menlo", "Menlo-Regular", true)])
        ));
        assert!(state.catalog().find("Menlo-Regular").is_none());
        assert_eq!(state.catalog().len(), 2);
    }

    #[test]
    fn test_refresh_keeps_old_catalog_until_replaced() {
        let mut state = loaded(sample_catalog());
        let ticket = state.begin_load();
        assert_eq!(state.visible_len(), 2);
        assert_eq!(state.status_line(), "2 fonts");

        state.finish_load(
            ticket,
            Catalog::from_records(vec![record("Menlo", "Menlo", "Menlo-Regular", true)]),
        );
        assert_eq!(visible_names(&state), vec!["Menlo-Regular"]);
    }

    #[test]
    fn test_query_changes_recompute_visible_fonts() {
        let mut state = loaded(sample_catalog());

        assert!(state.set_query_text("cour"));
        assert_eq!(visible_names(&state), vec!["CourierNewPSMT"]);
        assert!(!state.set_query_text("cour"));

        assert!(state.set_query_text(""));
        assert!(state.set_monospaced_only(true));
        assert_eq!(visible_names(&state), vec!["CourierNewPSMT"]);
        assert_eq!(state.status_line(), "1 of 2 fonts");

        assert!(state.set_query_text("zzz"));
        assert_eq!(state.visible_len(), 0);
        assert_eq!(state.empty_message(), Some("No fonts match"));
    }

    #[test]
    fn test_visible_fonts_are_the_filter_result() {
        let mut state = loaded(Catalog::from_records(vec![
            record("Arial", "Arial", "ArialMT", false),
            record("Courier", "Courier New", "CourierNewPSMT", true),
            record("Menlo", "Menlo Regular", "Menlo-Regular", true),
        ]));

        for (text, monospaced_only) in [
            ("", false),
            ("cour", false),
            ("", true),
            ("re", true),
            ("zzz", false),
        ] {
            state.set_query_text(text);
            state.set_monospaced_only(monospaced_only);
            let expected: Vec<&str> = filter(state.catalog(), text, monospaced_only)
                .into_iter()
                .map(|record| record.postscript_name.as_str())
                .collect();
            assert_eq!(visible_names(&state), expected);
        }
    }

    #[test]
    fn test_query_survives_refresh() {
        let mut state = loaded(sample_catalog());
        state.set_query_text("menlo");
        assert_eq!(state.visible_len(), 0);

        let ticket = state.begin_load();
        state.finish_load(
            ticket,
            Catalog::from_records(vec![
                record("Arial", "Arial", "Arial", false),
                record("Menlo", "Menlo", "Menlo-Regular", true),
            ]),
        );
        assert_eq!(visible_names(&state), vec!["Menlo-Regular"]);
    }

    #[test]
    fn test_empty_catalog_message() {
        let state = loaded(Catalog::empty());
        assert_eq!(state.empty_message(), Some("No fonts found"));
        assert_eq!(state.status_line(), "0 fonts");
    }

    #[test]
    fn test_pins_survive_refresh_by_value() {
        let mut state = loaded(sample_catalog());
        let courier = state.visible_font(1).unwrap().clone();
        assert!(state.toggle_pin(&courier));
        assert!(state.visible_font(5).is_none());

        let ticket = state.begin_load();
        state.finish_load(ticket, sample_catalog());

        let courier = state.catalog().find("CourierNewPSMT").unwrap().clone();
        assert!(state.is_pinned(&courier));
        assert_eq!(state.status_line(), "2 fonts · 1 pinned");
    }

    #[test]
    fn test_comparison_text_uses_display_order() {
        let mut state = loaded(sample_catalog());
        let courier = state.catalog().find("CourierNewPSMT").unwrap().clone();
        let arial = state.catalog().find("Arial").unwrap().clone();
        state.toggle_pin(&courier);
        state.toggle_pin(&arial);

        assert_eq!(
            state.comparison_text("Hi"),
            "• Arial [Arial]\n  Hi\n\n• Courier New [CourierNewPSMT]\n  Hi"
        );

        state.clear_pins();
        assert!(state.pins().is_empty());
        assert_eq!(state.comparison_text("Hi"), "");
    }

    #[test]
    fn test_preview_defaults_and_clamping() {
        let mut preview = Preview::default();
        assert_eq!(preview.sample_text(), PreviewDefaults::SAMPLE_TEXT);
        assert_eq!(preview.font_size(), 24.0);
        assert_eq!(preview.view_mode, ViewMode::Grid);

        preview.set_sample_text("Hamburgefonstiv");
        assert_eq!(preview.sample_text(), "Hamburgefonstiv");
        preview.set_sample_text("");
        assert_eq!(preview.sample_text(), PreviewDefaults::SAMPLE_TEXT);

        preview.set_font_size(400.0);
        assert_eq!(preview.font_size(), PreviewDefaults::MAX_SIZE);
        preview.set_font_size(1.0);
        assert_eq!(preview.font_size(), PreviewDefaults::MIN_SIZE);
    }
}
