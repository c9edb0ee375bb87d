//! Slider component adapted from gpui-component
//!
//! Used for the preview point size.

use std::ops::Range;

use gpui::{
    canvas, div, prelude::*, px, Along, App, Axis, Bounds, Context, DragMoveEvent, Empty, Entity,
    EntityId, EventEmitter, IntoElement, MouseButton, MouseDownEvent, MouseMoveEvent, Pixels,
    Point, Render, RenderOnce, StyleRefinement, Styled, Window,
};

use crate::theme::OneDarkTheme;

#[derive(Clone)]
struct DragThumb(EntityId);

impl Render for DragThumb {
    fn render(&mut self, _: &mut Window, _: &mut Context<Self>) -> impl IntoElement {
        Empty
    }
}

#[derive(Clone)]
struct DragSlider(EntityId);

impl Render for DragSlider {
    fn render(&mut self, _: &mut Window, _: &mut Context<Self>) -> impl IntoElement {
        Empty
    }
}

/// Events emitted by the [`SliderState`].
pub enum SliderEvent {
    Change(f32),
}

/// State of the [`Slider`].
pub struct SliderState {
    min: f32,
    max: f32,
    step: f32,
    value: f32,
    percentage: Range<f32>,
    bounds: Bounds<Pixels>,
    hover_position: Option<f32>, // 0.0 to 1.0 along the bar
    unit: &'static str,
}

impl SliderState {
    pub fn new() -> Self {
        Self {
            min: 0.0,
            max: 100.0,
            step: 1.0,
            value: 0.0,
            percentage: (0.0..0.0),
            bounds: Bounds::default(),
            hover_position: None,
            unit: "",
        }
    }

    pub fn min(mut self, min: f32) -> Self {
        self.min = min;
        self.update_thumb_pos();
        self
    }

    pub fn max(mut self, max: f32) -> Self {
        self.max = max;
        self.update_thumb_pos();
        self
    }

    pub fn step(mut self, step: f32) -> Self {
        self.step = step;
        self
    }

    /// Suffix shown after the value in the hover tooltip
    pub fn unit(mut self, unit: &'static str) -> Self {
        self.unit = unit;
        self
    }

    pub fn default_value(mut self, value: f32) -> Self {
        self.value = value;
        self.update_thumb_pos();
        self
    }

    fn percentage_to_value(&self, percentage: f32) -> f32 {
        self.min + (self.max - self.min) * percentage
    }

    fn value_to_percentage(&self, value: f32) -> f32 {
        let range = self.max - self.min;
        if range <= 0.0 {
            0.0
        } else {
            (value - self.min) / range
        }
    }

    fn snap(&self, value: f32) -> f32 {
        let snapped = if self.step > 0.0 {
            ((value - self.min) / self.step).round() * self.step + self.min
        } else {
            value
        };
        snapped.clamp(self.min, self.max)
    }

    fn update_thumb_pos(&mut self) {
        let percentage = self.value_to_percentage(self.value.clamp(self.min, self.max));
        self.percentage = 0.0..percentage;
    }

    fn percentage_at(&self, axis: Axis, position: Point<Pixels>) -> f32 {
        let bounds = self.bounds;
        let inner_pos = if matches!(axis, Axis::Horizontal) {
            position.x - bounds.left()
        } else {
            bounds.bottom() - position.y
        };
        let total_size = bounds.size.along(axis);
        (inner_pos.clamp(px(0.), total_size) / total_size).clamp(0.0, 1.0)
    }

    fn update_value_by_position(
        &mut self,
        axis: Axis,
        position: Point<Pixels>,
        _: &mut Window,
        cx: &mut Context<Self>,
    ) {
        let value = self.snap(self.percentage_to_value(self.percentage_at(axis, position)));
        if value == self.value {
            return;
        }

        self.value = value;
        self.update_thumb_pos();
        cx.emit(SliderEvent::Change(value));
        cx.notify();
    }

    fn update_hover_position(
        &mut self,
        axis: Axis,
        position: Point<Pixels>,
        _: &mut Window,
        cx: &mut Context<Self>,
    ) {
        let percentage = self.percentage_at(axis, position);
        if Some(percentage) != self.hover_position {
            self.hover_position = Some(percentage);
            cx.notify();
        }
    }

    pub fn clear_hover(&mut self, _: &mut Window, cx: &mut Context<Self>) {
        if self.hover_position.take().is_some() {
            cx.notify();
        }
    }
}

impl Default for SliderState {
    fn default() -> Self {
        Self::new()
    }
}

impl EventEmitter<SliderEvent> for SliderState {}

impl Render for SliderState {
    fn render(&mut self, _: &mut Window, _: &mut Context<Self>) -> impl IntoElement {
        Empty
    }
}

/// A horizontal Slider element.
#[derive(IntoElement)]
pub struct Slider {
    state: Entity<SliderState>,
    axis: Axis,
    style: StyleRefinement,
}

impl Slider {
    pub fn new(state: &Entity<SliderState>) -> Self {
        Self {
            axis: Axis::Horizontal,
            state: state.clone(),
            style: StyleRefinement::default(),
        }
    }
}

impl Styled for Slider {
    fn style(&mut self) -> &mut StyleRefinement {
        &mut self.style
    }
}

impl RenderOnce for Slider {
    fn render(self, window: &mut Window, cx: &mut App) -> impl IntoElement {
        let axis = self.axis;
        let entity_id = self.state.entity_id();
        let state = self.state.read(cx);
        let bar_size = state.bounds.size.along(axis);
        let bar_end = state.percentage.end * bar_size;
        let unit = state.unit;
        let hover_info = state
            .hover_position
            .map(|p| (p, state.snap(state.percentage_to_value(p))));

        div()
            .id(("slider", entity_id))
            .flex()
            .flex_1()
            .items_center()
            .justify_center()
            .w_full()
            .child(
                div()
                    .id("slider-bar-container")
                    .on_mouse_down(
                        MouseButton::Left,
                        window.listener_for(
                            &self.state,
                            move |state, e: &MouseDownEvent, window, cx| {
                                state.update_value_by_position(axis, e.position, window, cx)
                            },
                        ),
                    )
                    .on_mouse_move(window.listener_for(
                        &self.state,
                        move |state, e: &MouseMoveEvent, window, cx| {
                            state.update_hover_position(axis, e.position, window, cx);
                        },
                    ))
                    .on_hover(window.listener_for(&self.state, |state, hovered: &bool, window, cx| {
                        if !*hovered {
                            state.clear_hover(window, cx);
                        }
                    }))
                    .on_drag(DragSlider(entity_id), |drag, _, _, cx| {
                        cx.stop_propagation();
                        cx.new(|_| drag.clone())
                    })
                    .on_drag_move(window.listener_for(
                        &self.state,
                        move |view, e: &DragMoveEvent<DragSlider>, window, cx| {
                            let DragSlider(id) = e.drag(cx);
                            if *id == entity_id {
                                view.update_value_by_position(axis, e.event.position, window, cx)
                            }
                        },
                    ))
                    .items_center()
                    .h_6()
                    .w_full()
                    .flex_shrink_0()
                    .child(
                        div()
                            .id("slider-bar")
                            .relative()
                            .w_full()
                            .h(px(4.0))
                            .bg(OneDarkTheme::element_active())
                            .rounded_full()
                            .child(
                                div()
                                    .absolute()
                                    .h_full()
                                    .left(px(0.0))
                                    .right(bar_size - bar_end)
                                    .bg(OneDarkTheme::text_accent())
                                    .rounded_full(),
                            )
                            .child(
                                div()
                                    .id("slider-thumb")
                                    .absolute()
                                    .top(px(-5.))
                                    .left(bar_end)
                                    .ml(-px(7.))
                                    .flex_shrink_0()
                                    .rounded_full()
                                    .shadow_md()
                                    .size(px(14.))
                                    .bg(OneDarkTheme::text())
                                    .on_mouse_down(MouseButton::Left, |_, _, cx| {
                                        cx.stop_propagation();
                                    })
                                    .on_drag(DragThumb(entity_id), |drag, _, _, cx| {
                                        cx.stop_propagation();
                                        cx.new(|_| drag.clone())
                                    })
                                    .on_drag_move(window.listener_for(
                                        &self.state,
                                        move |view, e: &DragMoveEvent<DragThumb>, window, cx| {
                                            let DragThumb(id) = e.drag(cx);
                                            if *id == entity_id {
                                                view.update_value_by_position(
                                                    axis,
                                                    e.event.position,
                                                    window,
                                                    cx,
                                                )
                                            }
                                        },
                                    )),
                            )
                            .child({
                                let state = self.state.clone();
                                canvas(
                                    move |bounds, _, cx| state.update(cx, |r, _| r.bounds = bounds),
                                    |_, _, _, _| {},
                                )
                                .absolute()
                                .size_full()
                            })
                            .when_some(hover_info, |el, (percentage, value)| {
                                el.child(
                                    div()
                                        .id("slider-tooltip")
                                        .absolute()
                                        .bottom(px(14.))
                                        .left(percentage * bar_size)
                                        .ml(-px(20.))
                                        .px_2()
                                        .py_1()
                                        .bg(OneDarkTheme::elevated_surface_background())
                                        .border_1()
                                        .border_color(OneDarkTheme::border())
                                        .rounded(px(4.))
                                        .shadow_lg()
                                        .text_xs()
                                        .text_color(OneDarkTheme::text())
                                        .whitespace_nowrap()
                                        .child(format!("{}{}", value.round(), unit)),
                                )
                            }),
                    ),
            )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snap_to_step_within_bounds() {
        let state = SliderState::new().min(8.0).max(96.0).step(1.0);
        assert_eq!(state.snap(23.6), 24.0);
        assert_eq!(state.snap(2.0), 8.0);
        assert_eq!(state.snap(120.0), 96.0);
    }

    #[test]
    fn test_value_percentage_round_trip_at_ends() {
        let state = SliderState::new().min(8.0).max(96.0);
        assert_eq!(state.value_to_percentage(8.0), 0.0);
        assert_eq!(state.value_to_percentage(96.0), 1.0);
        assert_eq!(state.percentage_to_value(0.5), 52.0);
    }

    #[test]
    fn test_default_value_positions_thumb() {
        let state = SliderState::new().min(0.0).max(100.0).default_value(25.0);
        assert_eq!(state.value, 25.0);
        assert_eq!(state.percentage.end, 0.25);
    }
}
