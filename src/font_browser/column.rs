use gpui::{div, prelude::*, px, uniform_list, Context, IntoElement};

use super::{font_preview, icon_button, pin_button, FontBrowser};
use crate::catalog::FontRecord;
use crate::theme::{Layout, OneDarkTheme, Spacing};

impl FontBrowser {
    /// One row per font: names on the left, sample on the right.
    pub(super) fn render_column(&self, cx: &mut Context<Self>) -> impl IntoElement {
        let browser = cx.entity();
        let item_count = self.state.visible_len();

        uniform_list("font-column", item_count, move |range, _window, cx| {
            let this = browser.read(cx);
            let sample = this.preview.sample_text().to_string();
            let size = this.preview.font_size();
            let row_height = px(size * 1.25 + Layout::ROW_CHROME_HEIGHT);
            let rows: Vec<(usize, FontRecord, bool)> = range
                .filter_map(|idx| {
                    this.state
                        .visible_font(idx)
                        .map(|record| (idx, record.clone(), this.state.is_pinned(record)))
                })
                .collect();

            rows.into_iter()
                .map(|(idx, record, pinned)| {
                    let copy_record = record.clone();
                    let pin_record = record.clone();
                    let pin_browser = browser.clone();

                    div()
                        .id(("font-row", record.id.get()))
                        .flex()
                        .flex_row()
                        .items_center()
                        .gap(px(Spacing::BASE_16))
                        .w_full()
                        .h(row_height)
                        .px(px(Spacing::BASE_16))
                        .border_b_1()
                        .border_color(OneDarkTheme::border_variant())
                        .hover(|style| style.bg(OneDarkTheme::surface_background()))
                        .when(pinned, |el| el.bg(OneDarkTheme::element_background()))
                        .child(
                            div()
                                .flex()
                                .flex_col()
                                .w(px(220.))
                                .flex_shrink_0()
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
                                        .child(record.postscript_name.clone()),
                                ),
                        )
                        .child(
                            div()
                                .flex_1()
                                .min_w_0()
                                .child(font_preview(&record, &sample, size, false)),
                        )
                        .child(
                            icon_button(("copy-row", idx), "icons/copy.svg", false).on_click(
                                move |_, _, cx| FontBrowser::copy_postscript_name(&copy_record, cx),
                            ),
                        )
                        .child(pin_button(("pin-row", idx), pinned).on_click(
                            move |_, _, cx| {
                                pin_browser.update(cx, |this, cx| this.toggle_pin(&pin_record, cx));
                            },
                        ))
                })
                .collect()
        })
        .track_scroll(self.list_scroll.clone())
        .size_full()
    }
}
