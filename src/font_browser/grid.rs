use gpui::{div, prelude::*, px, uniform_list, Context, Entity, IntoElement, Window};

use super::{font_preview, icon_button, pin_button, FontBrowser};
use crate::catalog::FontRecord;
use crate::theme::{Layout, OneDarkTheme, Spacing};

/// Card shown for one font in the grid.
fn font_card(
    browser: &Entity<FontBrowser>,
    index: usize,
    record: FontRecord,
    pinned: bool,
    sample: &str,
    size: f32,
) -> impl IntoElement {
    let copy_record = record.clone();
    let pin_record = record.clone();
    let pin_browser = browser.clone();

    div()
        .id(("font-card", record.id.get()))
        .flex()
        .flex_col()
        .flex_shrink_0()
        .gap_2()
        .w(px(Layout::GRID_CARD_WIDTH))
        .p(px(Spacing::BASE_12))
        .bg(OneDarkTheme::elevated_surface_background())
        .border_1()
        .border_color(if pinned {
            OneDarkTheme::warning()
        } else {
            OneDarkTheme::border_variant()
        })
        .rounded(px(6.))
        .child(
            div()
                .flex()
                .flex_row()
                .items_center()
                .gap_1()
                .child(
                    div()
                        .flex()
                        .flex_col()
                        .flex_1()
                        .min_w_0()
                        .child(
                            div()
                                .text_sm()
                                .text_color(OneDarkTheme::text())
                                .whitespace_nowrap()
                                .overflow_hidden()
                                .text_ellipsis()
                                .child(record.display_name.clone()),
                        )
                        .child(
                            div()
                                .text_xs()
                                .text_color(OneDarkTheme::text_muted())
                                .whitespace_nowrap()
                                .overflow_hidden()
                                .text_ellipsis()
                                .child(record.family_name.clone()),
                        ),
                )
                .when(record.is_monospaced, |el| {
                    el.child(
                        div()
                            .px_1()
                            .rounded(px(3.))
                            .bg(OneDarkTheme::element_background())
                            .text_xs()
                            .text_color(OneDarkTheme::success())
                            .child("MONO"),
                    )
                })
                .child(
                    icon_button(("copy-card", index), "icons/copy.svg", false).on_click(
                        move |_, _, cx| FontBrowser::copy_postscript_name(&copy_record, cx),
                    ),
                )
                .child(pin_button(("pin-card", index), pinned).on_click(move |_, _, cx| {
                    pin_browser.update(cx, |this, cx| this.toggle_pin(&pin_record, cx));
                })),
        )
        .child(font_preview(&record, sample, size, false))
}

impl FontBrowser {
    /// Wrapping grid of cards, virtualized by row.
    pub(super) fn render_grid(
        &self,
        window: &mut Window,
        cx: &mut Context<Self>,
    ) -> impl IntoElement {
        let mut available = window.bounds().size.width - px(Spacing::BASE_16 * 2.);
        if !self.state.pins().is_empty() {
            available = available - px(Layout::COMPARISON_PANEL_WIDTH);
        }
        let card_span = px(Layout::GRID_CARD_WIDTH + Spacing::BASE_12);
        let columns = (available / card_span).floor().max(1.0) as usize;
        let row_count = self.state.visible_len().div_ceil(columns);

        let browser = cx.entity();

        uniform_list("font-grid", row_count, move |range, _window, cx| {
            let this = browser.read(cx);
            let sample = this.preview.sample_text().to_string();
            let size = this.preview.font_size();
            let rows: Vec<Vec<(usize, FontRecord, bool)>> = range
                .map(|row| {
                    (row * columns..(row + 1) * columns)
                        .filter_map(|idx| {
                            this.state
                                .visible_font(idx)
                                .map(|record| (idx, record.clone(), this.state.is_pinned(record)))
                        })
                        .collect()
                })
                .collect();

            rows.into_iter()
                .map(|cards| {
                    div()
                        .flex()
                        .flex_row()
                        .gap(px(Spacing::BASE_12))
                        .px(px(Spacing::BASE_16))
                        .pt(px(Spacing::BASE_12))
                        .children(cards.into_iter().map(|(idx, record, pinned)| {
                            font_card(&browser, idx, record, pinned, &sample, size)
                        }))
                })
                .collect()
        })
        .track_scroll(self.list_scroll.clone())
        .size_full()
    }
}
