//! List card used by the mobile gallery and the horizontal strip
use iced::widget::{column, container, image, mouse_area, row, text, Space};
use iced::{mouse, ContentFit, Element, Length};

use crate::config::GalleryConfig;
use crate::state::data::Project;
use crate::ui::style;
use crate::Message;

/// Number of tags shown under the description
const MAX_TAGS: usize = 3;

/// `index` is the project's position in the catalog
pub fn view<'a>(
    project: &'a Project,
    index: usize,
    config: &GalleryConfig,
    width: Length,
    image_height: f32,
    mobile: bool,
) -> Element<'a, Message> {
    let mut content = column![].spacing(8);

    // Mobile-only badge above the image so it never covers the title
    if mobile {
        content = content.push(
            container(text(format!("{} 个项目", project.images.len())).size(12))
                .padding([4, 8])
                .style(style::chip),
        );
    }

    content = content.push(
        image(config.asset(&project.thumbnail))
            .width(Length::Fill)
            .height(Length::Fixed(image_height))
            .content_fit(ContentFit::Cover),
    );

    let year: Element<'a, Message> = match project.year {
        Some(year) => text(year.to_string()).size(12).color(style::MUTED).into(),
        None => Space::with_width(Length::Shrink).into(),
    };
    content = content.push(row![
        text(project.category.label()).size(12).color(style::MUTED),
        Space::with_width(Length::Fill),
        year,
    ]);

    content = content.push(text(&project.title).size(18).color(style::INK));

    if let Some(description) = &project.description {
        content = content.push(text(description).size(14).color(style::MUTED));
    }

    if !project.tags.is_empty() {
        let tags = project
            .tags
            .iter()
            .take(MAX_TAGS)
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join(", ");
        content = content.push(text(tags).size(12).color(style::MUTED));
    }

    mouse_area(container(content).width(width).padding(12))
        .interaction(mouse::Interaction::Pointer)
        .on_press(Message::ProjectClicked(index))
        .into()
}
