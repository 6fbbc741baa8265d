//! One-project-at-a-time carousel
use iced::widget::{button, center, column, container, image, mouse_area, row, text, Space};
use iced::{mouse, Alignment, ContentFit, Element, Length, Padding};
use iced_aw::Wrap;
use std::time::Duration;

use crate::config::GalleryConfig;
use crate::state::carousel::{Carousel, Direction};
use crate::state::data::Project;
use crate::state::filter::FilteredProjects;
use crate::ui::{gallery, style};
use crate::Message;

/// How long a newly shown page slides in
pub const SLIDE: Duration = Duration::from_millis(350);

/// Distance a page slides in from
const SLIDE_DISTANCE: f32 = 120.0;

/// Horizontal offset of the incoming page, `elapsed` after the change
pub fn slide_offset(direction: Direction, elapsed: Duration) -> f32 {
    let t = (elapsed.as_secs_f32() / SLIDE.as_secs_f32()).clamp(0.0, 1.0);
    f32::from(direction) * SLIDE_DISTANCE * (1.0 - t).powi(2)
}

pub fn view<'a>(
    projects: &'a [Project],
    filtered: &'a FilteredProjects,
    carousel: &Carousel,
    dragging: bool,
    since_change: Option<Duration>,
    config: &GalleryConfig,
) -> Element<'a, Message> {
    let Some((index, project)) = filtered
        .indices()
        .get(carousel.index())
        .and_then(|&index| Some((index, projects.get(index)?)))
    else {
        return gallery::empty();
    };

    let offset = since_change
        .map(|elapsed| slide_offset(carousel.direction(), elapsed))
        .unwrap_or(0.0);

    let card = mouse_area(
        container(slide(project, index, config))
            .padding(32)
            .max_width(960)
            .style(style::card),
    )
    .interaction(if dragging {
        mouse::Interaction::Grabbing
    } else {
        mouse::Interaction::Grab
    })
    .on_press(Message::CarouselPressed)
    .on_release(Message::CarouselReleased)
    .on_move(Message::CarouselMoved);

    // Positive offsets push the page right, negative ones left
    let shifted = container(card).padding(Padding {
        top: 0.0,
        right: (-offset).max(0.0),
        bottom: 0.0,
        left: offset.max(0.0),
    });

    let previous = button(text("‹").size(28))
        .padding([8, 18])
        .style(style::round)
        .on_press(Message::CarouselStep(-1));
    let next = button(text("›").size(28))
        .padding([8, 18])
        .style(style::round)
        .on_press(Message::CarouselStep(1));

    let stage = row![previous, center(shifted), next]
        .align_y(Alignment::Center)
        .spacing(24)
        .padding([0, 32])
        .height(Length::Fill);

    let dots = row((0..filtered.len()).map(|i| {
        let active = i == carousel.index();
        let size = if active { 15 } else { 12 };
        button(Space::new(size, size))
            .padding(0)
            .style(style::dot(active))
            .on_press(Message::CarouselJump(i))
            .into()
    }))
    .spacing(12)
    .align_y(Alignment::Center);

    let counter = text(format!("{} / {}", carousel.index() + 1, filtered.len()))
        .size(14)
        .color(style::MUTED);

    container(
        column![
            container(counter).width(Length::Fill).align_x(Alignment::End),
            stage,
            dots,
        ]
        .align_x(Alignment::Center)
        .spacing(16)
        .padding(32),
    )
    .width(Length::Fill)
    .height(Length::Fill)
    .style(style::page)
    .into()
}

fn slide<'a>(project: &'a Project, index: usize, config: &GalleryConfig) -> Element<'a, Message> {
    // One dot per finished piece
    let pieces = row(project.images.iter().map(|_| {
        container(Space::new(8, 8)).style(style::chip).into()
    }))
    .spacing(8);

    let picture = column![
        image(config.asset(&project.thumbnail))
            .width(Length::Fill)
            .height(Length::Fixed(300.0))
            .content_fit(ContentFit::Cover),
        pieces,
    ]
    .spacing(12)
    .align_x(Alignment::Center)
    .width(Length::FillPortion(1));

    let mut meta = row![container(text(project.category.label()).size(14))
        .padding([4, 12])
        .style(style::chip)]
    .spacing(12)
    .align_y(Alignment::Center);
    if let Some(year) = project.year {
        meta = meta.push(text(year.to_string()).size(14).color(style::MUTED));
    }

    let mut info = column![meta, text(&project.title).size(30).color(style::INK)].spacing(16);

    if let Some(description) = &project.description {
        info = info.push(text(description).size(15).color(style::MUTED));
    }

    if !project.tags.is_empty() {
        info = info.push(
            Wrap::with_elements(
                project
                    .tags
                    .iter()
                    .map(|tag| {
                        container(text(tag).size(13))
                            .padding([4, 12])
                            .style(style::chip)
                            .into()
                    })
                    .collect(),
            )
            .spacing(8.0)
            .line_spacing(8.0),
        );
    }

    info = info.push(
        button(text("查看项目 →").size(15))
            .padding([12, 24])
            .style(style::pill(true))
            .on_press(Message::ProjectClicked(index)),
    );

    row![picture, info.width(Length::FillPortion(1))]
        .spacing(32)
        .align_y(Alignment::Center)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slide_offset_settles() {
        assert_eq!(slide_offset(1, Duration::ZERO), SLIDE_DISTANCE);
        assert_eq!(slide_offset(-1, Duration::ZERO), -SLIDE_DISTANCE);
        assert_eq!(slide_offset(1, SLIDE), 0.0);
        assert_eq!(slide_offset(0, Duration::ZERO), 0.0);
    }
}
