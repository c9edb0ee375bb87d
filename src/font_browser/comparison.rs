use gpui::{div, prelude::*, px, Context, IntoElement, SharedString};

use super::{font_preview, icon_button, pin_button, FontBrowser};
use crate::catalog::FontRecord;
use crate::theme::{Layout, OneDarkTheme, Spacing};

fn text_button(id: &'static str, label: &'static str) -> gpui::Stateful<gpui::Div> {
    div()
        .id(id)
        .px_2()
        .py_1()
        .rounded(px(4.))
        .cursor_pointer()
        .bg(OneDarkTheme::element_background())
        .hover(|style| style.bg(OneDarkTheme::element_hover()))
        .active(|style| style.bg(OneDarkTheme::element_active()))
        .text_xs()
        .text_color(OneDarkTheme::text())
        .child(label)
}

impl FontBrowser {
    /// Title row with "Copy all" and "Clear".
    fn render_comparison_header(&self, cx: &mut Context<Self>) -> impl IntoElement {
        let count = self.state.pins().len();

        div()
            .flex()
            .flex_row()
            .flex_shrink_0()
            .items_center()
            .justify_between()
            .gap_2()
            .px(px(Spacing::BASE_12))
            .py(px(Spacing::BASE_08))
            .border_b_1()
            .border_color(OneDarkTheme::border_variant())
            .child(
                div()
                    .text_sm()
                    .text_color(OneDarkTheme::text())
                    .child(SharedString::from(format!("Pinned ({})", count))),
            )
            .child(
                div()
                    .flex()
                    .flex_row()
                    .gap_2()
                    .child(text_button("copy-all-pins", "Copy all").on_click(cx.listener(
                        |this, _, _, cx| {
                            this.copy_comparison(cx);
                        },
                    )))
                    .child(text_button("clear-pins", "Clear").on_click(cx.listener(
                        |this, _, _, cx| {
                            this.clear_all_pins(cx);
                        },
                    ))),
            )
    }

    /// One pinned font: names, unpin button and the sample.
    fn render_pinned_font(
        &self,
        idx: usize,
        record: FontRecord,
        wrap: bool,
        cx: &mut Context<Self>,
    ) -> impl IntoElement {
        let sample = self.preview.sample_text();
        let size = self.preview.font_size();
        let copy_record = record.clone();
        let pin_record = record.clone();

        div()
            .id(("pinned-font", idx))
            .flex()
            .flex_col()
            .gap_1()
            .p(px(Spacing::BASE_12))
            .border_b_1()
            .border_color(OneDarkTheme::border_variant())
            .child(
                div()
                    .flex()
                    .flex_row()
                    .items_center()
                    .gap_1()
                    .child(
                        div()
                            .flex_1()
                            .min_w_0()
                            .text_xs()
                            .text_color(OneDarkTheme::text_muted())
                            .whitespace_nowrap()
                            .overflow_hidden()
                            .text_ellipsis()
                            .child(format!(
                                "{} [{}]",
                                record.display_name, record.postscript_name
                            )),
                    )
                    .child(
                        icon_button(("copy-pinned", idx), "icons/copy.svg", false).on_click(
                            move |_, _, cx| FontBrowser::copy_postscript_name(&copy_record, cx),
                        ),
                    )
                    .child(pin_button(("unpin", idx), true).on_click(cx.listener(
                        move |this, _, _, cx| {
                            this.toggle_pin(&pin_record, cx);
                        },
                    ))),
            )
            .child(font_preview(&record, sample, size, wrap))
    }

    /// Panel docked beside the grid and column views.
    pub(super) fn render_comparison_panel(&self, cx: &mut Context<Self>) -> impl IntoElement {
        let pinned = self.state.pinned_in_order();

        div()
            .flex()
            .flex_col()
            .flex_shrink_0()
            .w(px(Layout::COMPARISON_PANEL_WIDTH))
            .h_full()
            .bg(OneDarkTheme::surface_background())
            .border_l_1()
            .border_color(OneDarkTheme::border())
            .child(self.render_comparison_header(cx))
            .child(
                div()
                    .id("comparison-panel-list")
                    .flex()
                    .flex_col()
                    .flex_1()
                    .overflow_y_scroll()
                    .children(
                        pinned
                            .into_iter()
                            .enumerate()
                            .map(|(idx, record)| self.render_pinned_font(idx, record, false, cx))
                            .collect::<Vec<_>>(),
                    ),
            )
    }

    /// Full-width comparison: pinned fonts side by side.
    pub(super) fn render_comparison(&self, cx: &mut Context<Self>) -> impl IntoElement {
        let pinned = self.state.pinned_in_order();

        if pinned.is_empty() {
            return Self::render_empty("Pin fonts to compare them side by side").into_any_element();
        }

        div()
            .flex()
            .flex_col()
            .flex_1()
            .size_full()
            .min_h_0()
            .child(self.render_comparison_header(cx))
            .child(
                div()
                    .id("comparison-columns")
                    .flex()
                    .flex_row()
                    .flex_1()
                    .overflow_x_scroll()
                    .children(
                        pinned
                            .into_iter()
                            .enumerate()
                            .map(|(idx, record)| {
                                div()
                                    .w(px(Layout::GRID_CARD_WIDTH + Spacing::BASE_16 * 2.))
                                    .flex_shrink_0()
                                    .h_full()
                                    .border_r_1()
                                    .border_color(OneDarkTheme::border_variant())
                                    .child(self.render_pinned_font(idx, record, true, cx))
                            })
                            .collect::<Vec<_>>(),
                    ),
            )
            .into_any_element()
    }
}
