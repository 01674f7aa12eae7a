// SPDX-License-Identifier: MPL-2.0
//! Value popup: a rounded bubble with a tail pointing down at the thumb.
//!
//! The bubble is sized from its label, placed above the anchor point and
//! clamped horizontally into the viewport. The tail tip stays on the anchor
//! while its base slides between the bubble's rounded corners.

use super::style::{Status, Style};
use crate::ui::design_tokens::{motion, radius, sizing, spacing, typography};
use iced::advanced::graphics::geometry::Renderer as _;
use iced::advanced::layout::{self, Layout};
use iced::advanced::renderer::{self, Renderer as _};
use iced::advanced::text::{self, Paragraph as _};
use iced::advanced::{mouse, overlay};
use iced::alignment;
use iced::widget::canvas::{self, Frame, Path};
use iced::{Font, Pixels, Point, Rectangle, Renderer, Size, Theme, Vector};
use std::time::Duration;

/// Line height as a multiple of the font size.
const LINE_HEIGHT: f32 = 1.25;

/// Bubble dimensions.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PopupMetrics {
    pub font_size: f32,
    pub padding_x: f32,
    pub padding_y: f32,
    pub corner_radius: f32,
    pub tail_width: f32,
    pub tail_height: f32,
    /// Space between the tail tip and the anchor.
    pub gap: f32,
    pub fade_in: Duration,
}

impl Default for PopupMetrics {
    fn default() -> Self {
        Self {
            font_size: typography::POPUP_VALUE,
            padding_x: spacing::SM,
            padding_y: spacing::XXS,
            corner_radius: radius::MD,
            tail_width: sizing::POPUP_TAIL_WIDTH,
            tail_height: sizing::POPUP_TAIL_HEIGHT,
            gap: spacing::XXS,
            fade_in: motion::POPUP_FADE_IN,
        }
    }
}

impl PopupMetrics {
    #[must_use]
    pub fn line_height(&self) -> f32 {
        self.font_size * LINE_HEIGHT
    }

    /// Narrowest bubble that still fits the tail between its corners.
    #[must_use]
    pub fn min_width(&self) -> f32 {
        self.tail_width + 2.0 * self.corner_radius
    }

    /// Paragraph settings shared by measuring and drawing the label.
    fn paragraph<'a>(&self, label: &'a str) -> text::Text<&'a str, Font> {
        text::Text {
            content: label,
            bounds: Size::INFINITE,
            size: Pixels(self.font_size),
            line_height: text::LineHeight::Relative(LINE_HEIGHT),
            font: Font::default(),
            align_x: text::Alignment::Center,
            align_y: alignment::Vertical::Center,
            shaping: text::Shaping::Auto,
            wrapping: text::Wrapping::None,
        }
    }
}

/// Width of `label` on a single line, as the renderer shapes it.
#[must_use]
pub fn measure_text(label: &str, metrics: &PopupMetrics) -> f32 {
    <Renderer as text::Renderer>::Paragraph::with_text(metrics.paragraph(label))
        .min_bounds()
        .width
}

/// Resolved popup placement, in the same coordinates as the anchor.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PopupLayout {
    pub bubble: Rectangle,
    pub tail_left: Point,
    pub tail_right: Point,
    pub tail_tip: Point,
}

impl PopupLayout {
    /// Bubble plus tail.
    #[must_use]
    pub fn frame(&self) -> Rectangle {
        Rectangle {
            height: self.tail_tip.y - self.bubble.y,
            ..self.bubble
        }
    }

    /// Rebuilds the layout for an already placed `frame`.
    ///
    /// Overlays are recreated between layout and draw, so drawing starts
    /// from the laid out frame instead of the viewport. The tail tip is kept
    /// inside the frame, which matches the viewport clamp of [`layout`].
    #[must_use]
    pub fn fit(frame: Rectangle, anchor_x: f32, metrics: &PopupMetrics) -> Self {
        let tip_x = anchor_x.clamp(frame.x, frame.x + frame.width);
        let bubble = Rectangle {
            height: (frame.height - metrics.tail_height).max(0.0),
            ..frame
        };
        let bubble_bottom = bubble.y + bubble.height;
        let half_tail = metrics.tail_width / 2.0;

        let min_base = bubble.x + metrics.corner_radius + half_tail;
        let max_base = bubble.x + bubble.width - metrics.corner_radius - half_tail;
        let base_center = if min_base <= max_base {
            tip_x.clamp(min_base, max_base)
        } else {
            bubble.center_x()
        };

        Self {
            bubble,
            tail_left: Point::new(base_center - half_tail, bubble_bottom),
            tail_right: Point::new(base_center + half_tail, bubble_bottom),
            tail_tip: Point::new(tip_x, frame.y + frame.height),
        }
    }
}

/// Places a popup whose label is `text_width` wide with its tail tip
/// `metrics.gap` above `anchor`, inside a viewport of size `viewport` starting
/// at the origin.
#[must_use]
pub fn layout(
    anchor: Point,
    text_width: f32,
    metrics: &PopupMetrics,
    viewport: Size,
) -> PopupLayout {
    let width = (text_width.max(0.0) + 2.0 * metrics.padding_x)
        .max(metrics.min_width())
        .min(viewport.width.max(0.0));
    let height = metrics.line_height() + 2.0 * metrics.padding_y;

    let anchor_x = anchor.x.clamp(0.0, viewport.width.max(0.0));
    let tip_y = anchor.y - metrics.gap;
    let max_x = (viewport.width - width).max(0.0);
    let x = (anchor_x - width / 2.0).clamp(0.0, max_x);

    let frame = Rectangle {
        x,
        y: tip_y - metrics.tail_height - height,
        width,
        height: height + metrics.tail_height,
    };

    PopupLayout::fit(frame, anchor_x, metrics)
}

/// Overlay drawing the popup above the rest of the widget tree.
pub(super) struct Popup<'a> {
    pub label: &'a str,
    /// Top center of the thumb, in window coordinates.
    pub anchor: Point,
    pub metrics: PopupMetrics,
    pub opacity: f32,
    pub style: &'a dyn Fn(&Theme, Status) -> Style,
}

impl<Message> overlay::Overlay<Message, Theme, Renderer> for Popup<'_> {
    fn layout(&mut self, _renderer: &Renderer, bounds: Size) -> layout::Node {
        let text_width = measure_text(self.label, &self.metrics);
        let frame = layout(self.anchor, text_width, &self.metrics, bounds).frame();
        layout::Node::new(frame.size()).move_to(frame.position())
    }

    fn draw(
        &self,
        renderer: &mut Renderer,
        theme: &Theme,
        _style: &renderer::Style,
        layout: Layout<'_>,
        _cursor: mouse::Cursor,
    ) {
        let frame_bounds = layout.bounds();
        let popup = PopupLayout::fit(frame_bounds, self.anchor.x, &self.metrics);
        let style = (self.style)(theme, Status::Dragged);
        let (background, text_color) = style.faded_bubble(self.opacity);

        // Frame coordinates are relative to the popup's top left corner
        let origin = Vector::new(frame_bounds.x, frame_bounds.y);
        let local = |point: Point| point - origin;

        let mut frame = Frame::new(renderer, frame_bounds.size());

        let bubble = Path::rounded_rectangle(
            local(popup.bubble.position()),
            popup.bubble.size(),
            self.metrics.corner_radius.into(),
        );
        frame.fill(&bubble, background);

        let tail = Path::new(|builder| {
            builder.move_to(local(popup.tail_left));
            builder.line_to(local(popup.tail_tip));
            builder.line_to(local(popup.tail_right));
            builder.close();
        });
        frame.fill(&tail, background);

        let paragraph = self.metrics.paragraph(self.label);
        frame.fill_text(canvas::Text {
            content: self.label.to_string(),
            position: local(popup.bubble.center()),
            color: text_color,
            size: paragraph.size,
            line_height: paragraph.line_height,
            font: paragraph.font,
            align_x: paragraph.align_x,
            align_y: paragraph.align_y,
            shaping: paragraph.shaping,
            ..canvas::Text::default()
        });

        renderer.with_translation(origin, |renderer| {
            renderer.draw_geometry(frame.into_geometry());
        });
    }
}
