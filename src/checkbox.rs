//! Labelled toggle for boolean filter options
//!
//! The entity renders itself, so a parent only holds the `Entity` and
//! subscribes to [`CheckboxEvent`].

use gpui::{
    div, prelude::*, px, Context, EventEmitter, IntoElement, MouseButton, MouseDownEvent, Render,
    SharedString, Window,
};

use crate::theme::OneDarkTheme;

#[derive(Clone)]
pub enum CheckboxEvent {
    Change(bool),
}

pub struct Checkbox {
    label: SharedString,
    checked: bool,
}

impl Checkbox {
    pub fn new(label: impl Into<SharedString>, checked: bool) -> Self {
        Self {
            label: label.into(),
            checked,
        }
    }

    fn toggle(&mut self, cx: &mut Context<Self>) {
        self.checked = !self.checked;
        cx.emit(CheckboxEvent::Change(self.checked));
        cx.notify();
    }
}

impl EventEmitter<CheckboxEvent> for Checkbox {}

impl Render for Checkbox {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let checked = self.checked;
        let (fill, hover_fill) = if checked {
            (OneDarkTheme::text_accent(), OneDarkTheme::border_focused())
        } else {
            (OneDarkTheme::element_background(), OneDarkTheme::element_hover())
        };

        div()
            .id("checkbox")
            .flex()
            .flex_shrink_0()
            .items_center()
            .gap_2()
            .cursor_pointer()
            .on_mouse_down(
                MouseButton::Left,
                cx.listener(|this, _: &MouseDownEvent, _, cx| this.toggle(cx)),
            )
            .child(
                div()
                    .id("checkbox-box")
                    .flex()
                    .items_center()
                    .justify_center()
                    .size(px(16.))
                    .rounded(px(3.))
                    .border_1()
                    .border_color(OneDarkTheme::border())
                    .bg(fill)
                    .hover(move |style| style.bg(hover_fill))
                    .when(checked, |el| {
                        el.text_xs()
                            .text_color(OneDarkTheme::editor_background())
                            .child("✓")
                    }),
            )
            .child(
                div()
                    .text_sm()
                    .whitespace_nowrap()
                    .text_color(if checked {
                        OneDarkTheme::text()
                    } else {
                        OneDarkTheme::text_muted()
                    })
                    .child(self.label.clone()),
            )
    }
}
