//! Year-span indicator under the artwork collage
use iced::widget::canvas::{self, Path, Stroke};
use iced::widget::{canvas as canvas_widget, column, container, row, text};
use iced::{Alignment, Color, Element, Length, Point, Rectangle};

use crate::ui::style;
use crate::Message;

/// Line - dot - line connector between the two years
#[derive(Debug, Clone, Copy)]
pub struct Connector;

impl canvas::Program<Message> for Connector {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &iced::Renderer,
        _theme: &iced::Theme,
        bounds: Rectangle,
        _cursor: iced::mouse::Cursor,
    ) -> Vec<canvas::Geometry> {
        let mut frame = canvas::Frame::new(renderer, bounds.size());
        let color = Color::from_rgb(0.61, 0.64, 0.69);

        let mid_y = bounds.height / 2.0;
        let mid_x = bounds.width / 2.0;
        let gap = 8.0;

        let mut lines = canvas::path::Builder::new();
        lines.move_to(Point::new(0.0, mid_y));
        lines.line_to(Point::new(mid_x - gap, mid_y));
        lines.move_to(Point::new(mid_x + gap, mid_y));
        lines.line_to(Point::new(bounds.width, mid_y));
        frame.stroke(&lines.build(), Stroke::default().with_color(color).with_width(1.0));

        frame.fill(&Path::circle(Point::new(mid_x, mid_y), 4.0), color);

        vec![frame.into_geometry()]
    }
}

pub fn view<'a>(from: i32, to: i32) -> Element<'a, Message> {
    let year = |value: i32| text(value.to_string()).size(36).color(style::INK);

    let span = row![
        year(from),
        canvas_widget(Connector)
            .width(Length::Fixed(144.0))
            .height(Length::Fixed(16.0)),
        year(to),
    ]
    .spacing(16)
    .align_y(Alignment::Center);

    column![
        container(span).padding([16, 32]).style(style::chip),
        text("SCROLL TO EXPLORE").size(11).color(style::MUTED),
    ]
    .spacing(16)
    .align_x(Alignment::Center)
    .into()
}
