//! The browser window
//!
//! Wires the toolbar widgets to [`BrowserState`] and picks one of the three
//! layouts. Catalog loads run on the background executor and are swapped in
//! whole once finished.

mod column;
mod comparison;
mod grid;

use gpui::{
    actions, div, prelude::*, px, svg, App, ClipboardItem, Context, Entity, FocusHandle,
    Focusable, FontWeight, IntoElement, Render, SharedString, UniformListScrollHandle, Window,
};

use crate::browser_state::{BrowserState, Preview, PreviewDefaults, ViewMode};
use crate::catalog::{Catalog, FontRecord, SystemFontProvider};
use crate::checkbox::{Checkbox, CheckboxEvent};
use crate::custom_titlebar::CustomTitlebar;
use crate::export;
use crate::search_input::{SearchInput, SearchInputEvent};
use crate::select::{Select, SelectEvent, SelectItem, SelectState};
use crate::slider::{Slider, SliderEvent, SliderState};
use crate::theme::{OneDarkTheme, Spacing};

actions!(font_browser, [RefreshCatalog, ClearPins, FocusSearch]);

impl SelectItem for ViewMode {
    fn display_title(&self) -> String {
        self.label().to_string()
    }
}

pub struct FontBrowser {
    focus_handle: FocusHandle,
    titlebar: Entity<CustomTitlebar>,
    search_input: Entity<SearchInput>,
    sample_input: Entity<SearchInput>,
    monospaced_only: Entity<Checkbox>,
    size_slider: Entity<SliderState>,
    view_mode_select: Entity<SelectState<ViewMode>>,
    state: BrowserState,
    preview: Preview,
    list_scroll: UniformListScrollHandle,
}

impl FontBrowser {
    pub fn new(window: &mut Window, cx: &mut Context<Self>) -> Self {
        let titlebar = cx.new(|_| CustomTitlebar::new("Typecase"));

        let search_input = cx.new(|cx| SearchInput::new("Search fonts…", cx));
        cx.subscribe(&search_input, |this, _, event: &SearchInputEvent, cx| {
            let SearchInputEvent::Change(text) = event;
            if this.state.set_query_text(text) {
                this.list_scroll.scroll_to_item(0, gpui::ScrollStrategy::Top);
                this.sync_titlebar(cx);
                cx.notify();
            }
        })
        .detach();

        let sample_input = cx.new(|cx| SearchInput::new(PreviewDefaults::SAMPLE_TEXT, cx));
        cx.subscribe(&sample_input, |this, _, event: &SearchInputEvent, cx| {
            let SearchInputEvent::Change(text) = event;
            this.preview.set_sample_text(text.to_string());
            cx.notify();
        })
        .detach();

        let monospaced_only = cx.new(|_| Checkbox::new("Monospaced only", false));
        cx.subscribe(&monospaced_only, |this, _, event: &CheckboxEvent, cx| {
            let CheckboxEvent::Change(checked) = event;
            if this.state.set_monospaced_only(*checked) {
                this.sync_titlebar(cx);
                cx.notify();
            }
        })
        .detach();

        let size_slider = cx.new(|_| {
            SliderState::new()
                .min(PreviewDefaults::MIN_SIZE)
                .max(PreviewDefaults::MAX_SIZE)
                .step(PreviewDefaults::SIZE_STEP)
                .unit(" pt")
                .default_value(PreviewDefaults::DEFAULT_SIZE)
        });
        cx.subscribe(&size_slider, |this, _, event: &SliderEvent, cx| {
            let SliderEvent::Change(size) = event;
            this.preview.set_font_size(*size);
            cx.notify();
        })
        .detach();

        let view_mode_select = cx.new(|_| SelectState::new(ViewMode::ALL.to_vec()));
        cx.subscribe(&view_mode_select, |this, select, event: &SelectEvent, cx| {
            let SelectEvent::Change(_) = event;
            if let Some(mode) = select.read(cx).selected_item().copied() {
                log::debug!("View mode: {}", mode.label());
                this.preview.view_mode = mode;
                cx.notify();
            }
        })
        .detach();

        window.focus(&search_input.read(cx).focus_handle(cx));

        let mut browser = Self {
            focus_handle: cx.focus_handle(),
            titlebar,
            search_input,
            sample_input,
            monospaced_only,
            size_slider,
            view_mode_select,
            state: BrowserState::new(),
            preview: Preview::default(),
            list_scroll: UniformListScrollHandle::new(),
        };
        browser.load_catalog(cx);
        browser
    }

    /// Enumerate system fonts off the UI thread and swap the result in.
    fn load_catalog(&mut self, cx: &mut Context<Self>) {
        let ticket = self.state.begin_load();
        self.sync_titlebar(cx);

        let load = cx
            .background_executor()
            .spawn(async move { Catalog::load(&SystemFontProvider::new()) });

        cx.spawn(async move |this, cx| {
            let catalog = load.await;
            this.update(cx, |this, cx| {
                if this.state.finish_load(ticket, catalog) {
                    log::debug!("Showing {} fonts", this.state.catalog().len());
                    this.sync_titlebar(cx);
                    cx.notify();
                } else {
                    log::debug!("Discarding superseded font catalog load");
                }
            })
            .ok();
        })
        .detach();
    }

    fn sync_titlebar(&self, cx: &mut Context<Self>) {
        let status = self.state.status_line();
        self.titlebar
            .update(cx, |titlebar, cx| titlebar.set_status(status, cx));
    }

    fn refresh(&mut self, _: &RefreshCatalog, _: &mut Window, cx: &mut Context<Self>) {
        if self.state.is_loading() {
            log::info!("Refreshing font catalog, superseding the load in progress");
        } else {
            log::info!("Refreshing font catalog");
        }
        self.load_catalog(cx);
        cx.notify();
    }

    fn clear_pins(&mut self, _: &ClearPins, _: &mut Window, cx: &mut Context<Self>) {
        self.clear_all_pins(cx);
    }

    fn focus_search(&mut self, _: &FocusSearch, window: &mut Window, cx: &mut Context<Self>) {
        window.focus(&self.search_input.read(cx).focus_handle(cx));
    }

    pub(crate) fn clear_all_pins(&mut self, cx: &mut Context<Self>) {
        if self.state.pins().is_empty() {
            return;
        }
        self.state.clear_pins();
        self.sync_titlebar(cx);
        cx.notify();
    }

    pub(crate) fn toggle_pin(&mut self, record: &FontRecord, cx: &mut Context<Self>) {
        let pinned = self.state.toggle_pin(record);
        log::debug!(
            "{} {}",
            if pinned { "Pinned" } else { "Unpinned" },
            record.postscript_name
        );
        self.sync_titlebar(cx);
        cx.notify();
    }

    pub(crate) fn copy_postscript_name(record: &FontRecord, cx: &mut App) {
        let text = export::postscript_name(record);
        log::info!("Copied {} to clipboard", text);
        cx.write_to_clipboard(ClipboardItem::new_string(text));
    }

    pub(crate) fn copy_comparison(&self, cx: &mut App) {
        let text = self.state.comparison_text(self.preview.sample_text());
        if text.is_empty() {
            return;
        }
        log::info!("Copied {} pinned fonts to clipboard", self.state.pins().len());
        cx.write_to_clipboard(ClipboardItem::new_string(text));
    }

    fn render_toolbar(&self) -> impl IntoElement {
        div()
            .flex()
            .flex_row()
            .flex_shrink_0()
            .items_center()
            .gap(px(Spacing::BASE_12))
            .w_full()
            .px(px(Spacing::BASE_16))
            .py(px(Spacing::BASE_08))
            .bg(OneDarkTheme::surface_background())
            .border_b_1()
            .border_color(OneDarkTheme::border_variant())
            .child(div().w(px(220.)).child(self.search_input.clone()))
            .child(self.monospaced_only.clone())
            .child(
                div()
                    .flex()
                    .flex_row()
                    .items_center()
                    .gap_2()
                    .w(px(180.))
                    .flex_shrink_0()
                    .child(
                        div()
                            .text_xs()
                            .text_color(OneDarkTheme::text_muted())
                            .w(px(36.))
                            .child(format!("{} pt", self.preview.font_size().round())),
                    )
                    .child(Slider::new(&self.size_slider)),
            )
            .child(div().flex_1().min_w(px(120.)).child(self.sample_input.clone()))
            .child(Select::new(&self.view_mode_select))
    }

    fn render_empty(message: &'static str) -> impl IntoElement {
        div()
            .flex()
            .flex_1()
            .size_full()
            .items_center()
            .justify_center()
            .text_sm()
            .text_color(OneDarkTheme::text_muted())
            .child(message)
    }

    fn render_fonts(&self, window: &mut Window, cx: &mut Context<Self>) -> gpui::AnyElement {
        match self.preview.view_mode {
            ViewMode::Comparison => self.render_comparison(cx).into_any_element(),
            mode => {
                let list = match self.state.empty_message() {
                    Some(message) => Self::render_empty(message).into_any_element(),
                    None if mode == ViewMode::Grid => {
                        self.render_grid(window, cx).into_any_element()
                    }
                    None => self.render_column(cx).into_any_element(),
                };

                div()
                    .flex()
                    .flex_row()
                    .flex_1()
                    .size_full()
                    .min_h_0()
                    .child(div().flex().flex_1().h_full().min_w_0().child(list))
                    .when(!self.state.pins().is_empty(), |el| {
                        el.child(self.render_comparison_panel(cx))
                    })
                    .into_any_element()
            }
        }
    }
}

/// Sample text drawn in the face of `record`.
///
/// Single line with an ellipsis unless `wrap` is set.
pub(crate) fn font_preview(
    record: &FontRecord,
    sample: &str,
    size: f32,
    wrap: bool,
) -> impl IntoElement {
    div()
        .font_family(SharedString::from(record.preview_family().to_string()))
        .font_weight(FontWeight(record.style.weight))
        .when(record.style.italic, |el| el.italic())
        .text_size(px(size))
        .line_height(px(size * 1.25))
        .text_color(OneDarkTheme::text())
        .when(!wrap, |el| {
            el.whitespace_nowrap().overflow_hidden().text_ellipsis()
        })
        .child(sample.to_string())
}

/// Icon button shared by the views.
pub(crate) fn icon_button(
    id: impl Into<gpui::ElementId>,
    icon_path: &'static str,
    active: bool,
) -> gpui::Stateful<gpui::Div> {
    div()
        .id(id)
        .flex()
        .flex_shrink_0()
        .items_center()
        .justify_center()
        .size(px(22.))
        .rounded(px(4.))
        .cursor_pointer()
        .hover(|style| style.bg(OneDarkTheme::element_hover()))
        .child(svg().path(icon_path).size(px(14.)).text_color(if active {
            OneDarkTheme::warning()
        } else {
            OneDarkTheme::text_muted()
        }))
}

/// Pin/unpin button for one font.
pub(crate) fn pin_button(
    id: impl Into<gpui::ElementId>,
    pinned: bool,
) -> gpui::Stateful<gpui::Div> {
    icon_button(
        id,
        if pinned {
            "icons/pin-filled.svg"
        } else {
            "icons/pin.svg"
        },
        pinned,
    )
}

impl Focusable for FontBrowser {
    fn focus_handle(&self, _: &App) -> FocusHandle {
        self.focus_handle.clone()
    }
}

impl Render for FontBrowser {
    fn render(&mut self, window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        div()
            .id("font-browser")
            .key_context("FontBrowser")
            .track_focus(&self.focus_handle)
            .on_action(cx.listener(Self::refresh))
            .on_action(cx.listener(Self::clear_pins))
            .on_action(cx.listener(Self::focus_search))
            .flex()
            .flex_col()
            .size_full()
            .bg(OneDarkTheme::editor_background())
            .text_color(OneDarkTheme::text())
            .child(self.titlebar.clone())
            .child(self.render_toolbar())
            .child(self.render_fonts(window, cx))
    }
}
