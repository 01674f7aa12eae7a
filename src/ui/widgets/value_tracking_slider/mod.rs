// SPDX-License-Identifier: MPL-2.0
//! A horizontal slider that shows its value in a popup bubble while dragged.
//!
//! The popup is an overlay: it is drawn above every other widget and only
//! exists between a press on the slider and the matching release (or a
//! cancelled gesture). An optional [`SliderDelegate`] can convert the dragged
//! value before it is recorded and describe it for the popup.
//!
//! ```no_run
//! use std::rc::Rc;
//! use value_tracking_slider::ui::widgets::value_tracking_slider::{
//!     value_tracking_slider, SliderDelegate,
//! };
//!
//! struct Percent;
//!
//! impl SliderDelegate for Percent {
//!     fn description_for_value(&self, value: f32) -> Option<String> {
//!         Some(format!("{value:.0}%"))
//!     }
//! }
//!
//! #[derive(Debug, Clone)]
//! enum Message {
//!     Changed(f32),
//! }
//!
//! let delegate: Rc<dyn SliderDelegate> = Rc::new(Percent);
//! let slider = value_tracking_slider(0.0..=100.0, 42.0, Message::Changed)
//!     .delegate(Rc::downgrade(&delegate));
//! let _element: iced::Element<'_, Message> = slider.into();
//! ```

mod delegate;
mod format;
mod geometry;
mod popup;
pub mod style;
mod tracking;

pub use delegate::{convert, describe, resolve, ResolvedValue, SliderDelegate};
pub use format::DefaultFormat;
pub use geometry::{clamp_to_range, fraction, normalize_range, SliderGeometry};
pub use popup::{layout as popup_layout, measure_text, PopupLayout, PopupMetrics};
pub use style::{Status, Style, StyleFn};
pub use tracking::{Context, Drag, Pointer, Tracking};

use crate::ui::design_tokens::sizing;
use iced::advanced::graphics::geometry::Renderer as _;
use iced::advanced::layout::{self, Layout};
use iced::advanced::renderer::{self, Renderer as _};
use iced::advanced::widget::{tree, Tree, Widget};
use iced::advanced::{overlay, Clipboard, Shell};
use iced::time::Instant;
use iced::widget::canvas::{Frame, Path, Stroke};
use iced::{
    mouse, touch, window, Element, Event, Length, Point, Rectangle, Renderer, Size, Theme, Vector,
};
use std::ops::RangeInclusive;
use std::rc::{Rc, Weak};

/// Slider with a value popup.
pub struct ValueTrackingSlider<'a, Message> {
    range: RangeInclusive<f32>,
    value: f32,
    on_change: Box<dyn Fn(f32) -> Message + 'a>,
    on_press: Option<Message>,
    on_release: Option<Message>,
    delegate: Option<Weak<dyn SliderDelegate>>,
    format: DefaultFormat,
    metrics: PopupMetrics,
    width: Length,
    height: f32,
    thumb_size: f32,
    style: StyleFn<'a>,
}

impl<'a, Message> ValueTrackingSlider<'a, Message> {
    /// Default widget height; the thumb is centered vertically.
    pub const DEFAULT_HEIGHT: f32 = sizing::SLIDER_THUMB + 8.0;

    /// Creates a slider over `range` showing `value`.
    ///
    /// `on_change` receives every newly recorded value while dragging.
    pub fn new<F>(range: RangeInclusive<f32>, value: f32, on_change: F) -> Self
    where
        F: Fn(f32) -> Message + 'a,
    {
        let range = normalize_range(range);
        let value = clamp_to_range(value, &range);

        Self {
            range,
            value,
            on_change: Box::new(on_change),
            on_press: None,
            on_release: None,
            delegate: None,
            format: DefaultFormat::default(),
            metrics: PopupMetrics::default(),
            width: Length::Fill,
            height: Self::DEFAULT_HEIGHT,
            thumb_size: sizing::SLIDER_THUMB,
            style: Box::new(style::default),
        }
    }

    /// Message published when a drag starts, before any `on_change`.
    #[must_use]
    pub fn on_press(mut self, message: Message) -> Self {
        self.on_press = Some(message);
        self
    }

    /// Message published when a drag ends or is cancelled.
    #[must_use]
    pub fn on_release(mut self, message: Message) -> Self {
        self.on_release = Some(message);
        self
    }

    /// Sets the delegate. The slider does not keep it alive.
    #[must_use]
    pub fn delegate(mut self, delegate: Weak<dyn SliderDelegate>) -> Self {
        self.delegate = Some(delegate);
        self
    }

    /// Label format used when the delegate does not describe the value.
    #[must_use]
    pub fn format(mut self, format: DefaultFormat) -> Self {
        self.format = format;
        self
    }

    #[must_use]
    pub fn metrics(mut self, metrics: PopupMetrics) -> Self {
        self.metrics = metrics;
        self
    }

    #[must_use]
    pub fn width(mut self, width: impl Into<Length>) -> Self {
        self.width = width.into();
        self
    }

    /// Sets the height; a thumb taller than the widget is shrunk to fit.
    #[must_use]
    pub fn height(mut self, height: f32) -> Self {
        self.height = height.max(0.0);
        self
    }

    #[must_use]
    pub fn thumb_size(mut self, size: f32) -> Self {
        self.thumb_size = size.max(0.0);
        self
    }

    #[must_use]
    pub fn style(mut self, style: impl Fn(&Theme, Status) -> Style + 'a) -> Self {
        self.style = Box::new(style);
        self
    }

    #[must_use]
    pub fn range(&self) -> &RangeInclusive<f32> {
        &self.range
    }

    #[must_use]
    pub fn value(&self) -> f32 {
        self.value
    }

    /// Thumb rectangle for a slider laid out in `bounds`.
    #[must_use]
    pub fn thumb_rect(&self, bounds: Rectangle) -> Rectangle {
        self.geometry(bounds).thumb_rect(self.value, &self.range)
    }

    fn geometry(&self, bounds: Rectangle) -> SliderGeometry {
        SliderGeometry::new(bounds, self.thumb_size.min(self.height))
    }

    fn delegate_ref(&self) -> Option<Rc<dyn SliderDelegate>> {
        self.delegate.as_ref().and_then(Weak::upgrade)
    }

    /// Value the thumb is drawn at: the dragged value while dragging.
    fn shown_value(&self, state: &State) -> f32 {
        state
            .tracking
            .drag()
            .map_or(self.value, |drag| clamp_to_range(drag.value, &self.range))
    }
}

/// Widget tree state.
#[derive(Debug, Default)]
pub struct State {
    tracking: Tracking,
}

impl State {
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.tracking.is_dragging()
    }

    /// Whether the value popup is currently shown.
    #[must_use]
    pub fn popup_visible(&self) -> bool {
        self.tracking.drag().is_some()
    }
}

/// Pointer events the slider reacts to.
#[derive(Debug, Clone, Copy, PartialEq)]
enum Gesture {
    Press(Point, Pointer),
    Move(Point, Pointer),
    Release(Pointer),
    /// Cancels the drag of one pointer, or any drag when `None`.
    Cancel(Option<Pointer>),
}

fn gesture(event: &Event, cursor: mouse::Cursor) -> Option<Gesture> {
    match event {
        Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Left)) => cursor
            .position()
            .map(|position| Gesture::Press(position, Pointer::Mouse)),
        Event::Touch(touch::Event::FingerPressed { id, position }) => {
            Some(Gesture::Press(*position, Pointer::Finger(*id)))
        }
        Event::Mouse(mouse::Event::CursorMoved { position }) => {
            Some(Gesture::Move(*position, Pointer::Mouse))
        }
        Event::Touch(touch::Event::FingerMoved { id, position }) => {
            Some(Gesture::Move(*position, Pointer::Finger(*id)))
        }
        Event::Mouse(mouse::Event::ButtonReleased(mouse::Button::Left)) => {
            Some(Gesture::Release(Pointer::Mouse))
        }
        Event::Touch(touch::Event::FingerLifted { id, .. }) => {
            Some(Gesture::Release(Pointer::Finger(*id)))
        }
        Event::Touch(touch::Event::FingerLost { id, .. }) => {
            Some(Gesture::Cancel(Some(Pointer::Finger(*id))))
        }
        Event::Mouse(mouse::Event::CursorLeft) | Event::Window(window::Event::Unfocused) => {
            Some(Gesture::Cancel(None))
        }
        _ => None,
    }
}

/// Effects of one gesture, applied to the shell by `update`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
struct Outcome {
    pressed: bool,
    /// Newly recorded value for `on_change`.
    changed: Option<f32>,
    released: bool,
    capture: bool,
    /// The popup appeared or disappeared.
    relayout: bool,
    redraw: bool,
}

impl<Message> ValueTrackingSlider<'_, Message> {
    /// Runs `gesture` through the drag state machine of a slider laid out in
    /// `bounds`.
    fn handle(
        &self,
        state: &mut State,
        gesture: Gesture,
        bounds: Rectangle,
        now: Instant,
    ) -> Outcome {
        let delegate = self.delegate_ref();
        let ctx = Context {
            geometry: self.geometry(bounds),
            range: &self.range,
            delegate: delegate.as_deref(),
            format: &self.format,
        };

        match gesture {
            Gesture::Press(position, pointer) => {
                if state.tracking.is_dragging() || !bounds.contains(position) {
                    return Outcome::default();
                }
                Outcome {
                    pressed: true,
                    changed: state.tracking.begin(position, pointer, self.value, &ctx, now),
                    capture: true,
                    relayout: true,
                    redraw: true,
                    ..Outcome::default()
                }
            }
            Gesture::Move(position, pointer) => {
                if !state.tracking.is_driven_by(pointer) {
                    return Outcome::default();
                }
                Outcome {
                    changed: state.tracking.move_to(position.x, &ctx),
                    capture: true,
                    redraw: true,
                    ..Outcome::default()
                }
            }
            Gesture::Release(pointer) | Gesture::Cancel(Some(pointer)) => {
                if !state.tracking.is_driven_by(pointer) {
                    return Outcome::default();
                }
                let released = state.tracking.end();
                Outcome {
                    released,
                    capture: matches!(gesture, Gesture::Release(_)),
                    relayout: released,
                    redraw: released,
                    ..Outcome::default()
                }
            }
            Gesture::Cancel(None) => {
                let released = state.tracking.end();
                Outcome {
                    released,
                    relayout: released,
                    redraw: released,
                    ..Outcome::default()
                }
            }
        }
    }

    /// The popup for a slider laid out in `bounds`, while dragging.
    fn popup<'b>(&'b self, state: &'b State, bounds: Rectangle) -> Option<popup::Popup<'b>> {
        let drag = state.tracking.drag()?;
        let thumb = self
            .geometry(bounds)
            .thumb_rect(clamp_to_range(drag.value, &self.range), &self.range);

        Some(popup::Popup {
            label: &drag.label,
            anchor: Point::new(thumb.center_x(), thumb.y),
            metrics: self.metrics,
            opacity: drag.opacity(Instant::now(), self.metrics.fade_in),
            style: &*self.style,
        })
    }
}

impl<Message> Widget<Message, Theme, Renderer> for ValueTrackingSlider<'_, Message>
where
    Message: Clone,
{
    fn tag(&self) -> tree::Tag {
        tree::Tag::of::<State>()
    }

    fn state(&self) -> tree::State {
        tree::State::new(State::default())
    }

    fn size(&self) -> Size<Length> {
        Size::new(self.width, Length::Fixed(self.height))
    }

    fn layout(
        &mut self,
        _tree: &mut Tree,
        _renderer: &Renderer,
        limits: &layout::Limits,
    ) -> layout::Node {
        layout::atomic(limits, self.width, self.height)
    }

    fn update(
        &mut self,
        tree: &mut Tree,
        event: &Event,
        layout: Layout<'_>,
        cursor: mouse::Cursor,
        _renderer: &Renderer,
        _clipboard: &mut dyn Clipboard,
        shell: &mut Shell<'_, Message>,
        _viewport: &Rectangle,
    ) {
        let state = tree.state.downcast_mut::<State>();

        if let Event::Window(window::Event::RedrawRequested(now)) = event {
            if let Some(drag) = state.tracking.drag() {
                if drag.opacity(*now, self.metrics.fade_in) < 1.0 {
                    shell.request_redraw();
                }
            }
            return;
        }

        let Some(gesture) = gesture(event, cursor) else {
            return;
        };

        let outcome = self.handle(state, gesture, layout.bounds(), Instant::now());

        if outcome.pressed {
            if let Some(message) = self.on_press.clone() {
                shell.publish(message);
            }
        }
        if let Some(value) = outcome.changed {
            shell.publish((self.on_change)(value));
        }
        if outcome.released {
            if let Some(message) = self.on_release.clone() {
                shell.publish(message);
            }
        }
        if outcome.capture {
            shell.capture_event();
        }
        if outcome.relayout {
            shell.invalidate_layout();
        }
        if outcome.redraw {
            shell.request_redraw();
        }
    }

    fn draw(
        &self,
        tree: &Tree,
        renderer: &mut Renderer,
        theme: &Theme,
        _style: &renderer::Style,
        layout: Layout<'_>,
        cursor: mouse::Cursor,
        _viewport: &Rectangle,
    ) {
        let state = tree.state.downcast_ref::<State>();
        let bounds = layout.bounds();

        let status = if state.is_dragging() {
            Status::Dragged
        } else if cursor.is_over(bounds) {
            Status::Hovered
        } else {
            Status::Active
        };
        let style = (self.style)(theme, status);

        // Geometry relative to the widget's top left corner
        let local = self.geometry(Rectangle::with_size(bounds.size()));
        let value = self.shown_value(state);
        let rail = local.rail(style.rail_width);
        let thumb = local.thumb_rect(value, &self.range);
        let split = thumb.center_x();
        let radius = (style.rail_width / 2.0).into();

        let mut frame = Frame::new(renderer, bounds.size());

        frame.fill(
            &Path::rounded_rectangle(
                Point::new(split, rail.y),
                Size::new((rail.x + rail.width - split).max(0.0), rail.height),
                radius,
            ),
            style.rail_inactive,
        );
        frame.fill(
            &Path::rounded_rectangle(
                rail.position(),
                Size::new((split - rail.x).max(0.0), rail.height),
                radius,
            ),
            style.rail_active,
        );

        let knob = Path::circle(thumb.center(), thumb.width / 2.0);
        frame.fill(&knob, style.thumb);
        if style.thumb_border_width > 0.0 {
            frame.stroke(
                &knob,
                Stroke::default()
                    .with_width(style.thumb_border_width)
                    .with_color(style.thumb_border),
            );
        }

        renderer.with_translation(Vector::new(bounds.x, bounds.y), |renderer| {
            renderer.draw_geometry(frame.into_geometry());
        });
    }

    fn mouse_interaction(
        &self,
        tree: &Tree,
        layout: Layout<'_>,
        cursor: mouse::Cursor,
        _viewport: &Rectangle,
        _renderer: &Renderer,
    ) -> mouse::Interaction {
        let state = tree.state.downcast_ref::<State>();

        if state.is_dragging() {
            mouse::Interaction::Grabbing
        } else if cursor.is_over(layout.bounds()) {
            mouse::Interaction::Grab
        } else {
            mouse::Interaction::default()
        }
    }

    fn overlay<'b>(
        &'b mut self,
        tree: &'b mut Tree,
        layout: Layout<'b>,
        _renderer: &Renderer,
        _viewport: &Rectangle,
        translation: Vector,
    ) -> Option<overlay::Element<'b, Message, Theme, Renderer>> {
        let state = tree.state.downcast_ref::<State>();
        let popup = self.popup(state, layout.bounds() + translation)?;

        Some(overlay::Element::new(Box::new(popup)))
    }
}

impl<'a, Message> From<ValueTrackingSlider<'a, Message>> for Element<'a, Message, Theme, Renderer>
where
    Message: Clone + 'a,
{
    fn from(slider: ValueTrackingSlider<'a, Message>) -> Self {
        Self::new(slider)
    }
}

/// Helper function to create a [`ValueTrackingSlider`].
pub fn value_tracking_slider<'a, Message>(
    range: RangeInclusive<f32>,
    value: f32,
    on_change: impl Fn(f32) -> Message + 'a,
) -> ValueTrackingSlider<'a, Message> {
    ValueTrackingSlider::new(range, value, on_change)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    enum Message {
        Changed(f32),
        Pressed,
        Released,
    }

    struct Doubling;

    impl SliderDelegate for Doubling {
        fn convert_value(&self, value: f32) -> Option<f32> {
            Some(value * 2.0)
        }
    }

    fn bounds() -> Rectangle {
        Rectangle {
            x: 20.0,
            y: 40.0,
            width: 222.0,
            height: 30.0,
        }
    }

    #[test]
    fn new_clamps_value_and_orders_range() {
        let slider = value_tracking_slider(10.0..=0.0, 25.0, Message::Changed);
        assert_eq!(slider.range(), &(0.0..=10.0));
        assert_eq!(slider.value(), 10.0);
    }

    #[test]
    fn thumb_rect_follows_value() {
        let slider =
            value_tracking_slider(0.0..=100.0, 50.0, Message::Changed).thumb_size(22.0);
        let rect = slider.thumb_rect(bounds());

        // Track spans 31..231, so 50 sits at 131.
        assert_eq!(rect.center_x(), 131.0);
        assert_eq!(rect.center_y(), 55.0);
        assert_eq!(rect.width, 22.0);
    }

    #[test]
    fn thumb_is_limited_by_height() {
        let slider = value_tracking_slider(0.0..=1.0, 0.0, Message::Changed)
            .thumb_size(40.0)
            .height(16.0);
        assert_eq!(slider.thumb_rect(bounds()).width, 16.0);
    }

    #[test]
    fn dropped_delegate_falls_back_to_defaults() {
        let delegate: Rc<dyn SliderDelegate> = Rc::new(Doubling);
        let slider = value_tracking_slider(0.0..=100.0, 0.0, Message::Changed)
            .delegate(Rc::downgrade(&delegate));
        assert!(slider.delegate_ref().is_some());

        drop(delegate);
        assert!(slider.delegate_ref().is_none());
    }

    #[test]
    fn slider_does_not_keep_delegate_alive() {
        let delegate: Rc<dyn SliderDelegate> = Rc::new(Doubling);
        let _slider = value_tracking_slider(0.0..=100.0, 0.0, Message::Changed)
            .delegate(Rc::downgrade(&delegate));
        assert_eq!(Rc::strong_count(&delegate), 1);
    }

    #[test]
    fn shown_value_tracks_drag() {
        let slider = value_tracking_slider(0.0..=100.0, 10.0, Message::Changed);
        let mut state = State::default();
        assert_eq!(slider.shown_value(&state), 10.0);

        state.tracking = Tracking::Dragging(Drag {
            value: 70.0,
            label: "70".to_string(),
            grab_offset: 0.0,
            pointer: Pointer::Mouse,
            started_at: Instant::now(),
        });
        assert_eq!(slider.shown_value(&state), 70.0);
        assert!(state.popup_visible());

        state.tracking.end();
        assert!(!state.popup_visible());
    }

    #[test]
    fn mouse_press_uses_cursor_position() {
        let event = Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Left));
        let cursor = mouse::Cursor::Available(Point::new(5.0, 6.0));
        assert_eq!(
            gesture(&event, cursor),
            Some(Gesture::Press(Point::new(5.0, 6.0), Pointer::Mouse))
        );
        assert_eq!(gesture(&event, mouse::Cursor::Unavailable), None);
    }

    #[test]
    fn right_button_is_ignored() {
        let event = Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Right));
        let cursor = mouse::Cursor::Available(Point::ORIGIN);
        assert_eq!(gesture(&event, cursor), None);
    }

    #[test]
    fn touch_events_map_to_gestures() {
        let id = touch::Finger(1);
        let finger = Pointer::Finger(id);
        let position = Point::new(12.0, 3.0);
        let cursor = mouse::Cursor::Unavailable;

        assert_eq!(
            gesture(&Event::Touch(touch::Event::FingerPressed { id, position }), cursor),
            Some(Gesture::Press(position, finger))
        );
        assert_eq!(
            gesture(&Event::Touch(touch::Event::FingerMoved { id, position }), cursor),
            Some(Gesture::Move(position, finger))
        );
        assert_eq!(
            gesture(&Event::Touch(touch::Event::FingerLifted { id, position }), cursor),
            Some(Gesture::Release(finger))
        );
        assert_eq!(
            gesture(&Event::Touch(touch::Event::FingerLost { id, position }), cursor),
            Some(Gesture::Cancel(Some(finger)))
        );
    }

    #[test]
    fn leaving_window_cancels() {
        let cursor = mouse::Cursor::Unavailable;
        assert_eq!(
            gesture(&Event::Mouse(mouse::Event::CursorLeft), cursor),
            Some(Gesture::Cancel(None))
        );
        assert_eq!(
            gesture(&Event::Window(window::Event::Unfocused), cursor),
            Some(Gesture::Cancel(None))
        );
    }

    /// Thumb of a 0..=100 slider in `bounds()` sits at x = 31 + 2 * value.
    fn press_at(value: f32) -> Gesture {
        Gesture::Press(Point::new(31.0 + 2.0 * value, 55.0), Pointer::Mouse)
    }

    fn move_to(value: f32) -> Gesture {
        Gesture::Move(Point::new(31.0 + 2.0 * value, 55.0), Pointer::Mouse)
    }

    #[test]
    fn popup_exists_only_between_press_and_release() {
        let slider = value_tracking_slider(0.0..=100.0, 0.0, Message::Changed);
        let mut state = State::default();
        let now = Instant::now();
        assert!(slider.popup(&state, bounds()).is_none());

        let pressed = slider.handle(&mut state, press_at(50.0), bounds(), now);
        assert!(pressed.pressed && pressed.capture && pressed.relayout);
        assert_eq!(pressed.changed, Some(50.0));
        let popup = slider.popup(&state, bounds()).expect("popup while dragging");
        assert_eq!(popup.label, "50");
        assert_eq!(popup.anchor.x, 131.0);

        let moved = slider.handle(&mut state, move_to(75.0), bounds(), now);
        assert_eq!(moved.changed, Some(75.0));
        assert!(moved.capture);
        assert_eq!(slider.popup(&state, bounds()).map(|p| p.label), Some("75"));

        let release = Gesture::Release(Pointer::Mouse);
        let released = slider.handle(&mut state, release, bounds(), now);
        assert!(released.released && released.capture && released.relayout);
        assert!(slider.popup(&state, bounds()).is_none());
    }

    #[test]
    fn press_outside_bounds_is_ignored() {
        let slider = value_tracking_slider(0.0..=100.0, 0.0, Message::Changed);
        let mut state = State::default();

        let outside = Gesture::Press(Point::new(5.0, 55.0), Pointer::Mouse);
        let outcome = slider.handle(&mut state, outside, bounds(), Instant::now());

        assert_eq!(outcome, Outcome::default());
        assert!(slider.popup(&state, bounds()).is_none());
    }

    #[test]
    fn cancel_releases_without_capturing() {
        let slider = value_tracking_slider(0.0..=100.0, 0.0, Message::Changed);
        let mut state = State::default();
        let now = Instant::now();
        slider.handle(&mut state, press_at(20.0), bounds(), now);

        let cancelled = slider.handle(&mut state, Gesture::Cancel(None), bounds(), now);

        assert!(cancelled.released);
        assert!(!cancelled.capture);
        assert!(slider.popup(&state, bounds()).is_none());

        // A second cancel has nothing left to release
        let again = slider.handle(&mut state, Gesture::Cancel(None), bounds(), now);
        assert_eq!(again, Outcome::default());
    }

    #[test]
    fn other_fingers_do_not_end_the_drag() {
        let slider = value_tracking_slider(0.0..=100.0, 0.0, Message::Changed);
        let mut state = State::default();
        let now = Instant::now();
        let first = Pointer::Finger(touch::Finger(1));
        let second = Pointer::Finger(touch::Finger(2));

        let press = Gesture::Press(Point::new(131.0, 55.0), first);
        slider.handle(&mut state, press, bounds(), now);

        let ignored = [
            Gesture::Move(Point::new(151.0, 55.0), second),
            Gesture::Release(second),
            Gesture::Cancel(Some(second)),
        ];
        for gesture in ignored {
            let outcome = slider.handle(&mut state, gesture, bounds(), now);
            assert_eq!(outcome, Outcome::default(), "{gesture:?}");
        }
        assert!(slider.popup(&state, bounds()).is_some());

        let lost = slider.handle(&mut state, Gesture::Cancel(Some(first)), bounds(), now);
        assert!(lost.released);
        assert!(slider.popup(&state, bounds()).is_none());
    }

    #[test]
    fn second_press_while_dragging_is_ignored() {
        let slider = value_tracking_slider(0.0..=100.0, 0.0, Message::Changed);
        let mut state = State::default();
        let now = Instant::now();
        slider.handle(&mut state, press_at(10.0), bounds(), now);

        let outcome = slider.handle(&mut state, press_at(90.0), bounds(), now);

        assert_eq!(outcome, Outcome::default());
        assert_eq!(state.tracking.drag().map(|drag| drag.value), Some(10.0));
    }

    #[test]
    fn press_on_thumb_starts_drag_without_change() {
        let slider = value_tracking_slider(0.0..=100.0, 50.0, Message::Changed);
        let mut state = State::default();

        let outcome = slider.handle(&mut state, press_at(50.0), bounds(), Instant::now());

        assert!(outcome.pressed);
        assert_eq!(outcome.changed, None);
        assert!(state.popup_visible());
    }

    #[test]
    fn messages_carry_recorded_values() {
        let slider = value_tracking_slider(0.0..=100.0, 0.0, Message::Changed)
            .on_press(Message::Pressed)
            .on_release(Message::Released);
        assert_eq!((slider.on_change)(50.0), Message::Changed(50.0));
        assert_eq!(slider.on_press, Some(Message::Pressed));
        assert_eq!(slider.on_release, Some(Message::Released));
    }
}
