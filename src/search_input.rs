//! Single-line text input
//!
//! Used for the font search box and the sample-text field. Emits
//! [`SearchInputEvent::Change`] whenever the text changes.

use crate::theme::OneDarkTheme;
use gpui::{
    actions, div, prelude::*, px, App, Bounds, Context, CursorStyle, Element, ElementId,
    ElementInputHandler, Entity, EntityInputHandler, EventEmitter, FocusHandle, Focusable,
    GlobalElementId, LayoutId, Pixels, Point, ShapedLine, SharedString, Style, TextRun,
    UTF16Selection, Window,
};
use std::ops::Range;

actions!(search_input, [Backspace, Escape]);

/// Events emitted by [`SearchInput`]
#[derive(Clone)]
pub enum SearchInputEvent {
    Change(SharedString),
}

pub struct SearchInput {
    focus_handle: FocusHandle,
    content: SharedString,
    placeholder: SharedString,
    last_layout: Option<ShapedLine>,
    last_bounds: Option<Bounds<Pixels>>,
    cursor_position: usize, // UTF-8 offset
}

impl SearchInput {
    pub fn new(placeholder: impl Into<SharedString>, cx: &mut Context<Self>) -> Self {
        Self {
            focus_handle: cx.focus_handle(),
            content: "".into(),
            placeholder: placeholder.into(),
            last_layout: None,
            last_bounds: None,
            cursor_position: 0,
        }
    }

    pub fn set_content(&mut self, content: impl Into<SharedString>, cx: &mut Context<Self>) {
        let content = content.into();
        if content == self.content {
            return;
        }
        self.content = content;
        self.cursor_position = self.content.len();
        cx.emit(SearchInputEvent::Change(self.content.clone()));
        cx.notify();
    }

    pub fn clear(&mut self, cx: &mut Context<Self>) {
        self.set_content("", cx);
    }

    fn backspace(&mut self, _: &Backspace, _: &mut Window, cx: &mut Context<Self>) {
        if self.cursor_position == 0 {
            return;
        }

        let mut prev_char_start = self.cursor_position - 1;
        while prev_char_start > 0 && !self.content.is_char_boundary(prev_char_start) {
            prev_char_start -= 1;
        }

        let new_content =
            self.content[..prev_char_start].to_string() + &self.content[self.cursor_position..];
        self.cursor_position = prev_char_start;
        self.content = new_content.into();
        cx.emit(SearchInputEvent::Change(self.content.clone()));
        cx.notify();
    }

    fn escape(&mut self, _: &Escape, _: &mut Window, cx: &mut Context<Self>) {
        self.clear(cx);
    }
}

impl EventEmitter<SearchInputEvent> for SearchInput {}

impl EntityInputHandler for SearchInput {
    fn text_for_range(
        &mut self,
        range_utf16: Range<usize>,
        actual_range: &mut Option<Range<usize>>,
        _window: &mut Window,
        _cx: &mut Context<Self>,
    ) -> Option<String> {
        let range = self.range_from_utf16(&range_utf16);
        actual_range.replace(self.range_to_utf16(&range));
        Some(self.content[range].to_string())
    }

    fn selected_text_range(
        &mut self,
        _ignore_disabled_input: bool,
        _window: &mut Window,
        _cx: &mut Context<Self>,
    ) -> Option<UTF16Selection> {
        Some(UTF16Selection {
            range: self.range_to_utf16(&(self.cursor_position..self.cursor_position)),
            reversed: false,
        })
    }

    fn marked_text_range(
        &self,
        _window: &mut Window,
        _cx: &mut Context<Self>,
    ) -> Option<Range<usize>> {
        None
    }

    fn unmark_text(&mut self, _window: &mut Window, _cx: &mut Context<Self>) {}

    fn replace_text_in_range(
        &mut self,
        range_utf16: Option<Range<usize>>,
        new_text: &str,
        _: &mut Window,
        cx: &mut Context<Self>,
    ) {
        // Newlines make no sense in a single-line field
        let new_text = new_text.replace(['\n', '\r'], "");
        let range = range_utf16
            .as_ref()
            .map(|range_utf16| self.range_from_utf16(range_utf16))
            .unwrap_or(self.cursor_position..self.cursor_position);

        self.content =
            (self.content[0..range.start].to_owned() + &new_text + &self.content[range.end..])
                .into();
        self.cursor_position = range.start + new_text.len();
        cx.emit(SearchInputEvent::Change(self.content.clone()));
        cx.notify();
    }

    fn replace_and_mark_text_in_range(
        &mut self,
        range_utf16: Option<Range<usize>>,
        new_text: &str,
        _new_selected_range_utf16: Option<Range<usize>>,
        window: &mut Window,
        cx: &mut Context<Self>,
    ) {
        self.replace_text_in_range(range_utf16, new_text, window, cx);
    }

    fn bounds_for_range(
        &mut self,
        _range_utf16: Range<usize>,
        bounds: Bounds<Pixels>,
        _window: &mut Window,
        _cx: &mut Context<Self>,
    ) -> Option<Bounds<Pixels>> {
        Some(bounds)
    }

    fn character_index_for_point(
        &mut self,
        point: Point<Pixels>,
        _window: &mut Window,
        _cx: &mut Context<Self>,
    ) -> Option<usize> {
        let bounds = self.last_bounds?;
        let line = self.last_layout.as_ref()?;

        let offset = line
            .index_for_x(point.x - bounds.origin.x)
            .unwrap_or(self.content.len())
            .min(self.content.len());

        self.cursor_position = offset;
        Some(self.offset_to_utf16(offset))
    }
}

impl SearchInput {
    fn offset_from_utf16(&self, offset: usize) -> usize {
        let mut utf8_offset = 0;
        let mut utf16_count = 0;

        for ch in self.content.chars() {
            if utf16_count >= offset {
                break;
            }
            utf16_count += ch.len_utf16();
            utf8_offset += ch.len_utf8();
        }

        utf8_offset
    }

    fn offset_to_utf16(&self, offset: usize) -> usize {
        let mut utf16_offset = 0;
        let mut utf8_count = 0;

        for ch in self.content.chars() {
            if utf8_count >= offset {
                break;
            }
            utf8_count += ch.len_utf8();
            utf16_offset += ch.len_utf16();
        }

        utf16_offset
    }

    fn range_to_utf16(&self, range: &Range<usize>) -> Range<usize> {
        self.offset_to_utf16(range.start)..self.offset_to_utf16(range.end)
    }

    fn range_from_utf16(&self, range_utf16: &Range<usize>) -> Range<usize> {
        self.offset_from_utf16(range_utf16.start)..self.offset_from_utf16(range_utf16.end)
    }
}

struct SearchInputElement {
    input: Entity<SearchInput>,
}

impl IntoElement for SearchInputElement {
    type Element = Self;

    fn into_element(self) -> Self::Element {
        self
    }
}

impl Element for SearchInputElement {
    type RequestLayoutState = ();
    type PrepaintState = Option<ShapedLine>;

    fn id(&self) -> Option<ElementId> {
        None
    }

    fn source_location(&self) -> Option<&'static core::panic::Location<'static>> {
        None
    }

    fn request_layout(
        &mut self,
        _id: Option<&GlobalElementId>,
        _inspector_id: Option<&gpui::InspectorElementId>,
        window: &mut Window,
        cx: &mut App,
    ) -> (LayoutId, Self::RequestLayoutState) {
        let mut style = Style::default();
        style.size.width = gpui::relative(1.).into();
        style.size.height = window.line_height().into();
        (window.request_layout(style, [], cx), ())
    }

    fn prepaint(
        &mut self,
        _id: Option<&GlobalElementId>,
        _inspector_id: Option<&gpui::InspectorElementId>,
        _bounds: Bounds<Pixels>,
        _request_layout: &mut Self::RequestLayoutState,
        window: &mut Window,
        cx: &mut App,
    ) -> Self::PrepaintState {
        let input = self.input.read(cx);
        let style = window.text_style();
        let font_size = style.font_size.to_pixels(window.rem_size());

        let (display_text, text_color) = if input.content.is_empty() {
            (input.placeholder.clone(), OneDarkTheme::text_placeholder())
        } else {
            (input.content.clone(), OneDarkTheme::text())
        };

        let run = TextRun {
            len: display_text.len(),
            font: style.font(),
            color: text_color,
            background_color: None,
            underline: None,
            strikethrough: None,
        };

        Some(
            window
                .text_system()
                .shape_line(display_text, font_size, &[run], None),
        )
    }

    fn paint(
        &mut self,
        _id: Option<&GlobalElementId>,
        _inspector_id: Option<&gpui::InspectorElementId>,
        bounds: Bounds<Pixels>,
        _request_layout: &mut Self::RequestLayoutState,
        line: &mut Self::PrepaintState,
        window: &mut Window,
        cx: &mut App,
    ) {
        let focus_handle = self.input.read(cx).focus_handle.clone();

        window.handle_input(
            &focus_handle,
            ElementInputHandler::new(bounds, self.input.clone()),
            cx,
        );

        let Some(line) = line.take() else {
            return;
        };
        let line_height = window.line_height();
        line.paint(bounds.origin, line_height, window, cx).ok();

        if focus_handle.is_focused(window) {
            let input = self.input.read(cx);
            // The placeholder is shaped when the input is empty, so the
            // caret sits at the origin in that case
            let x_pos = if input.content.is_empty() {
                px(0.)
            } else {
                line.x_for_index(input.cursor_position)
            };

            let cursor_bounds = Bounds {
                origin: gpui::point(bounds.origin.x + x_pos, bounds.origin.y),
                size: gpui::size(px(2.0), line_height),
            };
            window.paint_quad(gpui::fill(cursor_bounds, OneDarkTheme::text()));
        }

        self.input.update(cx, |input, _cx| {
            input.last_layout = Some(line);
            input.last_bounds = Some(bounds);
        });
    }
}

impl Render for SearchInput {
    fn render(&mut self, window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let is_focused = self.focus_handle.is_focused(window);

        div()
            .id("search-input")
            .w_full()
            .px_3()
            .py_1()
            .bg(OneDarkTheme::element_background())
            .border_1()
            .border_color(if is_focused {
                OneDarkTheme::border_focused()
            } else {
                OneDarkTheme::border()
            })
            .rounded_md()
            .text_sm()
            .text_color(OneDarkTheme::text())
            .cursor(CursorStyle::IBeam)
            .key_context("SearchInput")
            .track_focus(&self.focus_handle(cx))
            .on_action(cx.listener(Self::backspace))
            .on_action(cx.listener(Self::escape))
            .on_mouse_down(
                gpui::MouseButton::Left,
                cx.listener(|this, _, window, cx| {
                    window.focus(&this.focus_handle);
                    cx.notify();
                }),
            )
            .child(SearchInputElement {
                input: cx.entity(),
            })
    }
}

impl Focusable for SearchInput {
    fn focus_handle(&self, _: &App) -> FocusHandle {
        self.focus_handle.clone()
    }
}
