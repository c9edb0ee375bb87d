//! One Dark palette and sizing constants
//!
//! Colors follow Zed's One Dark theme. Sizes follow Zed's default UI density.

use gpui::{rgb, Hsla};

/// Static accessors for the One Dark palette.
pub struct OneDarkTheme;

impl OneDarkTheme {
    // === BACKGROUND COLORS ===

    /// Main content area background
    pub fn editor_background() -> Hsla {
        rgb(0x282c34).into()
    }

    /// Surface background for panels and panes
    pub fn surface_background() -> Hsla {
        rgb(0x2f343e).into()
    }

    /// Elevated surface background (cards, popovers)
    pub fn elevated_surface_background() -> Hsla {
        rgb(0x363c46).into()
    }

    pub fn element_background() -> Hsla {
        rgb(0x2e343e).into()
    }

    pub fn element_hover() -> Hsla {
        rgb(0x3b414d).into()
    }

    pub fn element_active() -> Hsla {
        rgb(0x454a56).into()
    }

    pub fn element_selected() -> Hsla {
        rgb(0x454a56).into()
    }

    // === TEXT COLORS ===

    pub fn text() -> Hsla {
        rgb(0xdce0e5).into()
    }

    pub fn text_muted() -> Hsla {
        rgb(0xa9afbc).into()
    }

    pub fn text_placeholder() -> Hsla {
        rgb(0x878a98).into()
    }

    /// Accent text for links and highlights
    pub fn text_accent() -> Hsla {
        rgb(0x74ade8).into()
    }

    // === BORDER COLORS ===

    pub fn border() -> Hsla {
        rgb(0x464b57).into()
    }

    pub fn border_variant() -> Hsla {
        rgb(0x363c46).into()
    }

    pub fn border_focused() -> Hsla {
        rgb(0x47679e).into()
    }

    // === SEMANTIC COLORS ===

    pub fn success() -> Hsla {
        rgb(0xa1c181).into()
    }

    pub fn error() -> Hsla {
        rgb(0xd07277).into()
    }

    /// Pinned fonts
    pub fn warning() -> Hsla {
        rgb(0xdec184).into()
    }
}

/// Spacing constants based on Zed's DynamicSpacing system
pub struct Spacing;

impl Spacing {
    pub const BASE_08: f32 = 8.0;
    pub const BASE_12: f32 = 12.0;
    pub const BASE_16: f32 = 16.0;
}

/// Layout sizes shared by the browser views.
pub struct Layout;

impl Layout {
    /// Titlebar height
    pub const TITLEBAR_HEIGHT: f32 = 37.0;

    /// Width of a card in the grid view
    pub const GRID_CARD_WIDTH: f32 = 260.0;

    /// Width of the docked comparison panel
    pub const COMPARISON_PANEL_WIDTH: f32 = 340.0;

    /// Padding above and below the preview text in a column row
    pub const ROW_CHROME_HEIGHT: f32 = 44.0;
}
