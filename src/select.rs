//! Select/Dropdown component
//!
//! Picks the browser's view mode.

use gpui::{
    div, prelude::*, px, App, Context, Empty, Entity, EventEmitter, IntoElement, MouseButton,
    MouseDownEvent, Render, RenderOnce, StyleRefinement, Styled, Window,
};

use crate::theme::OneDarkTheme;

/// Events emitted by the SelectState
#[derive(Clone)]
pub enum SelectEvent {
    /// Fired when a different item is chosen
    Change(usize),
}

/// Items that can be shown in a [`Select`]
pub trait SelectItem: Clone + 'static {
    fn display_title(&self) -> String;
}

/// State of the Select component. Always has exactly one item selected.
pub struct SelectState<T: SelectItem> {
    items: Vec<T>,
    selected_index: usize,
    is_open: bool,
}

impl<T: SelectItem> SelectState<T> {
    /// Create a select over `items` with the first one selected
    pub fn new(items: Vec<T>) -> Self {
        Self {
            items,
            selected_index: 0,
            is_open: false,
        }
    }

    pub fn set_selected_index(&mut self, index: usize, cx: &mut Context<Self>) {
        if index != self.selected_index && index < self.items.len() {
            self.selected_index = index;
            cx.emit(SelectEvent::Change(index));
            cx.notify();
        }
    }

    pub fn selected_item(&self) -> Option<&T> {
        self.items.get(self.selected_index)
    }

    fn toggle_open(&mut self, cx: &mut Context<Self>) {
        self.is_open = !self.is_open;
        cx.notify();
    }

    fn select_item(&mut self, index: usize, cx: &mut Context<Self>) {
        self.set_selected_index(index, cx);
        if self.is_open {
            self.is_open = false;
            cx.notify();
        }
    }
}

impl<T: SelectItem> EventEmitter<SelectEvent> for SelectState<T> {}

impl<T: SelectItem> Render for SelectState<T> {
    fn render(&mut self, _: &mut Window, _: &mut Context<Self>) -> impl IntoElement {
        Empty
    }
}

/// A Select dropdown element
#[derive(IntoElement)]
pub struct Select<T: SelectItem> {
    state: Entity<SelectState<T>>,
    style: StyleRefinement,
}

impl<T: SelectItem> Select<T> {
    pub fn new(state: &Entity<SelectState<T>>) -> Self {
        Self {
            state: state.clone(),
            style: StyleRefinement::default(),
        }
    }
}

impl<T: SelectItem> Styled for Select<T> {
    fn style(&mut self) -> &mut StyleRefinement {
        &mut self.style
    }
}

impl<T: SelectItem> RenderOnce for Select<T> {
    fn render(self, window: &mut Window, cx: &mut App) -> impl IntoElement {
        let state = self.state.read(cx);
        let is_open = state.is_open;
        let selected_index = state.selected_index;
        let titles: Vec<String> = state.items.iter().map(|item| item.display_title()).collect();
        let selected_title = titles.get(selected_index).cloned().unwrap_or_default();

        div()
            .id(("select", self.state.entity_id()))
            .relative()
            .w(px(130.))
            .flex_shrink_0()
            .child(
                div()
                    .id("select-button")
                    .flex()
                    .items_center()
                    .justify_between()
                    .px_2()
                    .py_1()
                    .bg(OneDarkTheme::element_background())
                    .border_1()
                    .border_color(OneDarkTheme::border())
                    .rounded(px(3.))
                    .cursor_pointer()
                    .hover(|style| style.bg(OneDarkTheme::element_hover()))
                    .on_mouse_down(
                        MouseButton::Left,
                        window.listener_for(&self.state, |state, _: &MouseDownEvent, _, cx| {
                            state.toggle_open(cx);
                        }),
                    )
                    .child(
                        div()
                            .text_xs()
                            .text_color(OneDarkTheme::text())
                            .child(selected_title),
                    )
                    .child(
                        div()
                            .text_xs()
                            .text_color(OneDarkTheme::text_muted())
                            .child(if is_open { "▲" } else { "▼" }),
                    ),
            )
            .when(is_open, |el| {
                el.child(
                    div()
                        .id("select-menu")
                        .absolute()
                        .top_full()
                        .mt_1()
                        .left(px(0.))
                        .w_full()
                        .bg(OneDarkTheme::surface_background())
                        .border_1()
                        .border_color(OneDarkTheme::border())
                        .rounded(px(4.))
                        .shadow_lg()
                        .occlude()
                        .children(titles.into_iter().enumerate().map(|(idx, title)| {
                            let is_selected = selected_index == idx;

                            div()
                                .id(("select-item", idx))
                                .px_2()
                                .py_1()
                                .cursor_pointer()
                                .w_full()
                                .when(is_selected, |style| {
                                    style.bg(OneDarkTheme::element_selected())
                                })
                                .when(!is_selected, |style| {
                                    style.hover(|s| s.bg(OneDarkTheme::element_hover()))
                                })
                                .on_mouse_down(
                                    MouseButton::Left,
                                    window.listener_for(
                                        &self.state,
                                        move |state, _: &MouseDownEvent, _, cx| {
                                            state.select_item(idx, cx);
                                        },
                                    ),
                                )
                                .child(
                                    div()
                                        .text_xs()
                                        .text_color(OneDarkTheme::text())
                                        .child(title),
                                )
                        })),
                )
            })
    }
}
