// SPDX-License-Identifier: MPL-2.0
//! Frame controls: close, prev/next, and the index readout.
//!
//! Rendered as a widget layer above the scene canvas. Prev/next disappear
//! for single-item sessions; the readout shows `current / total`.

use crate::geometry::{HolderSize, Viewport};
use iced::alignment::{Horizontal, Vertical};
use iced::widget::{button, container, text, Column, Row, Space};
use iced::{Color, Element, Length, Padding, Theme};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    CloseRequested,
    PrevRequested,
    NextRequested,
}

/// Geometry the control layer needs: how far the holder's edges sit from
/// the viewport edges. Attached to each frame at build time so the controls
/// always follow the geometry they were solved with.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ControlGeometry {
    pub holder_left: f32,
    pub holder_right: f32,
    pub holder_top: f32,
}

impl ControlGeometry {
    /// Edge distances for a holder centered in `viewport`.
    #[must_use]
    pub fn for_holder(size: HolderSize, viewport: Viewport) -> Self {
        let (w, h) = size.as_f32();
        Self {
            holder_left: ((viewport.width - w) / 2.0).max(0.0),
            holder_right: ((viewport.width - w) / 2.0).max(0.0),
            holder_top: ((viewport.height - h) / 2.0).max(0.0),
        }
    }
}

fn glyph_button<'a>(
    glyph: &'a str,
    message: Message,
    accent: Color,
) -> Element<'a, Message> {
    button(
        text(glyph)
            .size(22)
            .align_x(Horizontal::Center)
            .align_y(Vertical::Center),
    )
    .on_press(message)
    .padding([6, 12])
    .style(move |_theme: &Theme, status| {
        let base = button::Style {
            background: Some(Color::from_rgba(0.0, 0.0, 0.0, 0.55).into()),
            text_color: Color::WHITE,
            border: iced::Border {
                color: accent,
                width: 1.0,
                radius: 6.0.into(),
            },
            ..button::Style::default()
        };
        match status {
            button::Status::Hovered | button::Status::Pressed => button::Style {
                background: Some(accent.into()),
                ..base
            },
            _ => base,
        }
    })
    .into()
}

/// Builds the control layer for the current frame.
pub fn view<'a>(
    geometry: ControlGeometry,
    item_count: usize,
    current_index: usize,
    accent: Color,
) -> Element<'a, Message> {
    let close = container(glyph_button("\u{2715}", Message::CloseRequested, accent))
        .width(Length::Fill)
        .align_x(Horizontal::Right)
        .padding(Padding {
            top: (geometry.holder_top - 18.0).max(8.0),
            right: (geometry.holder_right - 18.0).max(8.0),
            ..Padding::ZERO
        });

    let mut rows = Column::new().push(close);

    if item_count > 1 {
        let arrows = Row::new()
            .push(
                container(glyph_button("\u{2039}", Message::PrevRequested, accent))
                    .padding(Padding {
                        left: (geometry.holder_left - 22.0).max(8.0),
                        ..Padding::ZERO
                    }),
            )
            .push(Space::new().width(Length::Fill).height(Length::Shrink))
            .push(
                container(glyph_button("\u{203a}", Message::NextRequested, accent))
                    .padding(Padding {
                        right: (geometry.holder_right - 22.0).max(8.0),
                        ..Padding::ZERO
                    }),
            )
            .align_y(Vertical::Center)
            .width(Length::Fill);

        let readout = container(
            text(format!("{} / {}", current_index + 1, item_count))
                .size(14)
                .color(Color::from_rgba(1.0, 1.0, 1.0, 0.8)),
        )
        .width(Length::Fill)
        .align_x(Horizontal::Center)
        .padding(8);

        rows = rows
            .push(
                container(arrows)
                    .height(Length::Fill)
                    .align_y(Vertical::Center),
            )
            .push(readout);
    } else {
        rows = rows.push(Space::new().width(Length::Fill).height(Length::Fill));
    }

    rows.width(Length::Fill).height(Length::Fill).into()
}
