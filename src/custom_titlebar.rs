use crate::theme::{Layout, OneDarkTheme};
use gpui::{
    div, prelude::FluentBuilder, px, svg, Context, InteractiveElement, IntoElement, MouseButton,
    ParentElement, Render, SharedString, StatefulInteractiveElement, Styled, Window,
};

/// Window titlebar with the app title, a status line and window controls.
pub struct CustomTitlebar {
    title: SharedString,
    status: SharedString,
}

impl CustomTitlebar {
    pub fn new(title: impl Into<SharedString>) -> Self {
        Self {
            title: title.into(),
            status: SharedString::default(),
        }
    }

    /// Secondary text shown after the title (e.g. "12 of 640 fonts")
    pub fn set_status(&mut self, status: impl Into<SharedString>, cx: &mut Context<Self>) {
        let status = status.into();
        if status != self.status {
            self.status = status;
            cx.notify();
        }
    }

    fn window_button(
        id: &'static str,
        icon_path: &'static str,
        hover_color: gpui::Hsla,
    ) -> gpui::Stateful<gpui::Div> {
        let text_muted_color = OneDarkTheme::text_muted();

        div()
            .id(id)
            .flex()
            .items_center()
            .justify_center()
            .size(px(30.0))
            .rounded_sm()
            .hover(move |style| style.bg(hover_color))
            .active(move |style| style.bg(OneDarkTheme::element_active()))
            .child(
                svg()
                    .path(icon_path)
                    .size(px(10.0))
                    .text_color(text_muted_color),
            )
    }
}

impl Render for CustomTitlebar {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let hover_bg = OneDarkTheme::element_hover();

        div()
            .id("titlebar")
            .flex()
            .flex_row()
            .items_center()
            .justify_between()
            .w_full()
            .h(px(Layout::TITLEBAR_HEIGHT))
            .flex_shrink_0()
            .bg(OneDarkTheme::editor_background())
            .border_b_1()
            .border_color(OneDarkTheme::border_variant())
            .child(
                // Left side: title, draggable
                div()
                    .flex()
                    .flex_row()
                    .items_center()
                    .gap_2()
                    .h_full()
                    .flex_grow()
                    // macOS needs extra padding for traffic lights
                    .pl(if cfg!(target_os = "macos") {
                        px(74.0)
                    } else {
                        px(16.0)
                    })
                    .pr_4()
                    .on_mouse_down(
                        MouseButton::Left,
                        cx.listener(|_, _, window, _| {
                            window.start_window_move();
                        }),
                    )
                    .child(
                        div()
                            .text_xs()
                            .text_color(OneDarkTheme::text())
                            .child(self.title.clone()),
                    )
                    .when(!self.status.is_empty(), |this| {
                        this.child(
                            div()
                                .text_xs()
                                .text_color(OneDarkTheme::text_muted())
                                .child(self.status.clone()),
                        )
                    }),
            )
            // macOS draws its own traffic lights
            .when(!cfg!(target_os = "macos"), |this| {
                this.child(
                    div()
                        .flex()
                        .flex_row()
                        .items_center()
                        .h_full()
                        .gap_2()
                        .pr_2()
                        .child(
                            Self::window_button("minimize-button", "icons/minimize.svg", hover_bg)
                                .on_click(cx.listener(|_, _, window, _| {
                                    window.minimize_window();
                                })),
                        )
                        .child(
                            Self::window_button("maximize-button", "icons/maximize.svg", hover_bg)
                                .on_click(cx.listener(|_, _, window, _| {
                                    window.zoom_window();
                                })),
                        )
                        .child(
                            Self::window_button(
                                "close-button",
                                "icons/close.svg",
                                OneDarkTheme::error(),
                            )
                            .on_click(cx.listener(|_, _, window, _| {
                                window.remove_window();
                            })),
                        ),
                )
            })
    }
}
