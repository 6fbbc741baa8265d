//! Project detail sheet
//!
//! Slides up from the bottom over a dimmed backdrop. `progress` comes from
//! the modal state: 0 is fully hidden, 1 fully shown.

use iced::widget::{
    button, column, container, image, mouse_area, opaque, row, scrollable, stack, text, Space,
};
use iced::{ContentFit, Element, Length, Padding};
use iced_aw::Wrap;

use crate::config::GalleryConfig;
use crate::state::data::Project;
use crate::ui::style;
use crate::Message;

/// Gap between the window top and a fully raised sheet, as a share of height
const RAISED_GAP: f32 = 0.015;

/// Vertical offset of the sheet's top edge for a given progress
pub fn sheet_top(window_height: f32, progress: f32) -> f32 {
    let raised = window_height * RAISED_GAP;
    let progress = progress.clamp(0.0, 1.0);
    window_height + (raised - window_height) * ease_out(progress)
}

fn ease_out(t: f32) -> f32 {
    1.0 - (1.0 - t).powi(3)
}

pub fn view<'a>(
    base: Element<'a, Message>,
    project: &'a Project,
    progress: f32,
    window_height: f32,
    config: &GalleryConfig,
) -> Element<'a, Message> {
    if progress <= 0.0 {
        return base;
    }

    let backdrop = mouse_area(
        container(Space::new(Length::Fill, Length::Fill))
            .width(Length::Fill)
            .height(Length::Fill)
            .style(style::backdrop(progress)),
    )
    .on_press(Message::ModalClosed);

    let sheet = container(opaque(
        container(details(project, config))
            .width(Length::Fill)
            .height(Length::Fill)
            .style(style::sheet),
    ))
    .padding(Padding {
        top: sheet_top(window_height, progress),
        right: 0.0,
        bottom: 0.0,
        left: 0.0,
    })
    .width(Length::Fill)
    .height(Length::Fill);

    stack![base, opaque(backdrop), sheet].into()
}

fn details<'a>(project: &'a Project, config: &GalleryConfig) -> Element<'a, Message> {
    let close = button(text("✕").size(18))
        .padding([8, 13])
        .style(style::round)
        .on_press(Message::ModalClosed);

    let meta = match project.year {
        Some(year) => format!("{}  ·  {}", project.category, year),
        None => project.category.to_string(),
    };

    let mut heading = column![
        text(&project.title).size(30).color(style::INK),
        text(meta).size(14).color(style::MUTED),
    ]
    .spacing(8)
    .padding([24, 0]);

    if let Some(description) = &project.description {
        heading = heading.push(text(description).size(16));
    }

    let images = column(project.images.iter().map(|path| {
        image(config.asset(path))
            .width(Length::Fill)
            .content_fit(ContentFit::Contain)
            .into()
    }))
    .spacing(24);

    let mut body = column![
        heading,
        text("设计成品").size(20).color(style::INK),
        images,
    ]
    .spacing(24)
    .padding([0, 24])
    .max_width(1280);

    if !project.tags.is_empty() {
        let tags = Wrap::with_elements(
            project
                .tags
                .iter()
                .map(|tag| {
                    container(text(tag).size(14))
                        .padding([4, 12])
                        .style(style::chip)
                        .into()
                })
                .collect(),
        )
        .spacing(8.0)
        .line_spacing(8.0);

        body = body.push(
            column![text("相关标签").size(20).color(style::INK), tags]
                .spacing(16)
                .padding(Padding {
                    top: 0.0,
                    right: 0.0,
                    bottom: 24.0,
                    left: 0.0,
                }),
        );
    }

    let top_bar = row![Space::with_width(Length::Fill), close].padding(16);

    column![
        top_bar,
        scrollable(container(body).center_x(Length::Fill)).height(Length::Fill),
    ]
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sheet_starts_below_window_and_rises_to_gap() {
        assert_eq!(sheet_top(800.0, 0.0), 800.0);
        assert!((sheet_top(800.0, 1.0) - 12.0).abs() < 1e-3);
    }

    #[test]
    fn test_sheet_rises_monotonically() {
        let mut last = f32::MAX;
        for step in 0..=10 {
            let top = sheet_top(800.0, step as f32 / 10.0);
            assert!(top <= last);
            last = top;
        }
    }
}
