// SPDX-License-Identifier: MPL-2.0
//! Connector arrows between nodes, rendered on a canvas.
//!
//! A connector is a faint baseline with an arrow head. When a pulse phase is
//! supplied, a brighter segment grows along the line while its opacity swells
//! and fades, which reads as flow moving from one node to the next.

use crate::ui::design_tokens::{opacity, palette, sizing};
use iced::widget::canvas;
use iced::{mouse, Color, Element, Length, Point, Rectangle, Theme};

const INSET: f32 = 4.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Right,
    Down,
}

/// Canvas program for one arrow.
#[derive(Debug, Clone, Copy)]
pub struct Connector {
    direction: Direction,
    /// Pulse phase in `0.0..1.0`; `None` renders the static arrow.
    pulse: Option<f32>,
}

impl Connector {
    pub fn new(direction: Direction, pulse: Option<f32>) -> Self {
        Self { direction, pulse }
    }
}

/// Pulse brightness over its phase: swells to the peak mid-travel, then
/// fades back to the resting line opacity.
fn pulse_alpha(phase: f32) -> f32 {
    let phase = phase.clamp(0.0, 1.0);
    opacity::LINE_FAINT
        + (opacity::PULSE_PEAK - opacity::LINE_FAINT) * (std::f32::consts::PI * phase).sin()
}

impl<Message> canvas::Program<Message> for Connector {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &iced::Renderer,
        theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<canvas::Geometry> {
        let mut frame = canvas::Frame::new(renderer, bounds.size());

        let text = theme.extended_palette().background.base.text;
        let faint = Color {
            a: opacity::LINE_FAINT,
            ..text
        };
        let faint_stroke = canvas::Stroke::default()
            .with_color(faint)
            .with_width(sizing::CONNECTOR_LINE);

        let head = sizing::CONNECTOR_HEAD;

        match self.direction {
            Direction::Right => {
                let y = bounds.height / 2.0;
                let start = Point::new(INSET, y);
                let tip = Point::new(bounds.width - INSET, y);

                frame.stroke(&canvas::Path::line(start, tip), faint_stroke);
                frame.stroke(
                    &canvas::Path::line(Point::new(tip.x - head, y - head * 0.6), tip),
                    faint_stroke,
                );
                frame.stroke(
                    &canvas::Path::line(Point::new(tip.x - head, y + head * 0.6), tip),
                    faint_stroke,
                );

                if let Some(phase) = self.pulse {
                    let span = (tip.x - start.x) * sizing::PULSE_SPAN;
                    let end = Point::new(start.x + span * phase.clamp(0.0, 1.0), y);
                    let bright = Color {
                        a: pulse_alpha(phase),
                        ..palette::CYAN_400
                    };
                    frame.stroke(
                        &canvas::Path::line(start, end),
                        canvas::Stroke::default()
                            .with_color(bright)
                            .with_width(sizing::CONNECTOR_LINE),
                    );
                }
            }
            Direction::Down => {
                let x = bounds.width / 2.0;
                let start = Point::new(x, INSET);
                let tip = Point::new(x, bounds.height - INSET);

                frame.stroke(&canvas::Path::line(start, tip), faint_stroke);
                frame.stroke(
                    &canvas::Path::line(Point::new(x - head * 0.6, tip.y - head), tip),
                    faint_stroke,
                );
                frame.stroke(
                    &canvas::Path::line(Point::new(x + head * 0.6, tip.y - head), tip),
                    faint_stroke,
                );

                if let Some(phase) = self.pulse {
                    let span = (tip.y - start.y) * sizing::PULSE_SPAN;
                    let end = Point::new(x, start.y + span * phase.clamp(0.0, 1.0));
                    let bright = Color {
                        a: pulse_alpha(phase),
                        ..palette::CYAN_400
                    };
                    frame.stroke(
                        &canvas::Path::line(start, end),
                        canvas::Stroke::default()
                            .with_color(bright)
                            .with_width(sizing::CONNECTOR_LINE),
                    );
                }
            }
        }

        vec![frame.into_geometry()]
    }
}

/// A rightward arrow sized for horizontal flows.
pub fn right<'a, Message: 'a>(pulse: Option<f32>) -> Element<'a, Message> {
    canvas::Canvas::new(Connector::new(Direction::Right, pulse))
        .width(Length::Fixed(sizing::CONNECTOR))
        .height(Length::Fixed(sizing::CONNECTOR))
        .into()
}

/// A downward arrow sized for vertical flows.
pub fn down<'a, Message: 'a>(pulse: Option<f32>) -> Element<'a, Message> {
    canvas::Canvas::new(Connector::new(Direction::Down, pulse))
        .width(Length::Fixed(sizing::CONNECTOR))
        .height(Length::Fixed(sizing::CONNECTOR))
        .into()
}

const _: () = {
    assert!(INSET > 0.0);
};
