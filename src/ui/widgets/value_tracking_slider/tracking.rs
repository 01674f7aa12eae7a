// SPDX-License-Identifier: MPL-2.0
//! Drag lifecycle: `Idle -> Dragging -> Idle`.
//!
//! The popup content lives inside [`Drag`], so the popup exists exactly as
//! long as the drag does.

use super::delegate::{self, SliderDelegate};
use super::format::DefaultFormat;
use super::geometry::SliderGeometry;
use iced::time::Instant;
use iced::{touch, Point};
use std::ops::RangeInclusive;
use std::time::Duration;

/// Everything the tracker needs to turn positions into values.
pub struct Context<'a> {
    pub geometry: SliderGeometry,
    pub range: &'a RangeInclusive<f32>,
    pub delegate: Option<&'a dyn SliderDelegate>,
    pub format: &'a DefaultFormat,
}

/// Input device that started a drag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pointer {
    Mouse,
    Finger(touch::Finger),
}

/// An active drag and the popup it shows.
#[derive(Debug, Clone, PartialEq)]
pub struct Drag {
    /// Recorded value, after conversion.
    pub value: f32,
    /// Popup text for `value`.
    pub label: String,
    /// Distance between the grab point and the thumb center at press time.
    pub grab_offset: f32,
    /// Only this pointer moves or ends the drag.
    pub pointer: Pointer,
    pub started_at: Instant,
}

impl Drag {
    /// Popup opacity `fade_in` after the drag started.
    #[must_use]
    pub fn opacity(&self, now: Instant, fade_in: Duration) -> f32 {
        if fade_in.is_zero() {
            return 1.0;
        }
        let elapsed = now.saturating_duration_since(self.started_at);
        (elapsed.as_secs_f32() / fade_in.as_secs_f32()).clamp(0.0, 1.0)
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub enum Tracking {
    #[default]
    Idle,
    Dragging(Drag),
}

impl Tracking {
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        matches!(self, Tracking::Dragging(_))
    }

    #[must_use]
    pub fn drag(&self) -> Option<&Drag> {
        match self {
            Tracking::Dragging(drag) => Some(drag),
            Tracking::Idle => None,
        }
    }

    /// Whether the active drag belongs to `pointer`.
    #[must_use]
    pub fn is_driven_by(&self, pointer: Pointer) -> bool {
        self.drag().is_some_and(|drag| drag.pointer == pointer)
    }

    /// Starts a drag from a press of `pointer` at `position`.
    ///
    /// A press on the thumb keeps `current` and remembers where the thumb was
    /// grabbed; a press elsewhere jumps to the pressed value. Returns the new
    /// recorded value when it differs from `current`.
    pub fn begin(
        &mut self,
        position: Point,
        pointer: Pointer,
        current: f32,
        ctx: &Context<'_>,
        now: Instant,
    ) -> Option<f32> {
        let on_thumb = ctx.geometry.thumb_contains(position, current, ctx.range);

        let (value, label, grab_offset) = if on_thumb {
            let offset = position.x - ctx.geometry.thumb_center_x(current, ctx.range);
            let label = delegate::describe(current, ctx.delegate, ctx.format);
            (current, label, offset)
        } else {
            let raw = ctx.geometry.value_at(position.x, ctx.range);
            let resolved = delegate::resolve(raw, ctx.range, ctx.delegate, ctx.format);
            (resolved.value, resolved.label, 0.0)
        };

        tracing::debug!(value, on_thumb, ?pointer, "value slider drag started");

        *self = Tracking::Dragging(Drag {
            value,
            label,
            grab_offset,
            pointer,
            started_at: now,
        });

        (value != current).then_some(value)
    }

    /// Follows the pointer to horizontal position `x`.
    ///
    /// Returns the new recorded value when it changed. Does nothing while idle.
    pub fn move_to(&mut self, x: f32, ctx: &Context<'_>) -> Option<f32> {
        let Tracking::Dragging(drag) = self else {
            return None;
        };

        let raw = ctx.geometry.value_at(x - drag.grab_offset, ctx.range);
        let resolved = delegate::resolve(raw, ctx.range, ctx.delegate, ctx.format);
        drag.label = resolved.label;

        if resolved.value == drag.value {
            return None;
        }
        drag.value = resolved.value;
        Some(resolved.value)
    }

    /// Ends the drag, dropping the popup. Returns whether a drag was active.
    pub fn end(&mut self) -> bool {
        match std::mem::take(self) {
            Tracking::Dragging(drag) => {
                tracing::debug!(value = drag.value, "value slider drag ended");
                true
            }
            Tracking::Idle => false,
        }
    }
}
