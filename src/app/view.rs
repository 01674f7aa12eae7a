// SPDX-License-Identifier: MPL-2.0
//! View rendering for the demo window.

use super::{App, Message, SliderId};
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::widgets::value_tracking_slider::{style, ValueTrackingSlider};
use iced::widget::{Column, Container, Text};
use iced::{Element, Length};
use std::rc::Rc;

/// Renders the heading followed by one section per slider.
pub fn view(app: &App) -> Element<'_, Message> {
    let heading = Text::new(app.i18n.tr("demo-heading")).size(typography::TITLE_MD);

    let sections = SliderId::ALL
        .into_iter()
        .fold(Column::new().spacing(spacing::XL), |column, id| {
            column.push(slider_section(app, id))
        });

    let content = Column::new()
        .spacing(spacing::LG)
        .max_width(sizing::CONTENT_WIDTH)
        .push(heading)
        .push(sections);

    Container::new(content)
        .padding(spacing::XL)
        .width(Length::Fill)
        .height(Length::Fill)
        .center_x(Length::Fill)
        .into()
}

fn slider_section(app: &App, id: SliderId) -> Element<'_, Message> {
    let reading = app.reading(id);

    let mut slider = ValueTrackingSlider::new(app.range.clone(), reading.value, move |value| {
        Message::SliderChanged(id, value)
    })
    .on_press(Message::SliderPressed(id))
    .on_release(Message::SliderReleased(id))
    .format(app.format)
    .metrics(app.metrics)
    .width(Length::Fill);

    if let Some(delegate) = app.delegate(id) {
        slider = slider.delegate(Rc::downgrade(delegate));
    }
    if id == SliderId::Percent {
        slider = slider.style(style::brand);
    }

    let readout = if reading.dragging {
        let label = app.describe(id);
        app.i18n
            .tr_with_args("slider-readout", &[("value", label.as_str())])
    } else if let Some(released) = reading.released_at {
        let label = app.format.format(released);
        app.i18n
            .tr_with_args("slider-released", &[("value", label.as_str())])
    } else {
        app.i18n.tr("slider-idle")
    };

    Column::new()
        .spacing(spacing::XS)
        .push(Text::new(app.i18n.tr(id.label_key())).size(typography::BODY))
        .push(slider)
        .push(Text::new(readout).size(typography::CAPTION))
        .into()
}
