//! Project gallery: parallax collage on desktop, card column on mobile
use iced::widget::{
    center, column, container, image, mouse_area, scrollable, stack, text, Space, Stack,
};
use iced::{mouse, Alignment, ContentFit, Element, Length, Padding, Rotation, Size};

use crate::config::GalleryConfig;
use crate::state::data::Project;
use crate::state::filter::FilteredProjects;
use crate::ui::layout::{self, Placement, PROJECT_COLLAGE};
use crate::ui::style;
use crate::Message;

/// Inner margin of the picture frame
const FRAME: f32 = 12.0;

pub fn scroll_id() -> scrollable::Id {
    scrollable::Id::new("gallery")
}

/// What the gallery needs to render one frame
pub struct GalleryView<'a> {
    pub projects: &'a [Project],
    pub filtered: &'a FilteredProjects,
    pub config: &'a GalleryConfig,
    pub viewport: Size,
    pub scroll_y: f32,
    pub hovered: Option<usize>,
    pub mobile: bool,
}

/// Shown in place of the gallery when nothing matches the filter
pub fn empty<'a>() -> Element<'a, Message> {
    center(text("暂无项目").size(18).color(style::MUTED))
        .height(Length::Fixed(384.0))
        .into()
}

pub fn view<'a>(gallery: GalleryView<'a>) -> Element<'a, Message> {
    if gallery.filtered.is_empty() {
        return empty();
    }

    let content = if gallery.mobile {
        cards(&gallery)
    } else {
        collage(&gallery)
    };

    let body = scrollable(content)
        .id(scroll_id())
        .on_scroll(Message::GalleryScrolled)
        .width(Length::Fill)
        .height(Length::Fill);

    let count = container(
        container(text(format!("{} 个项目", gallery.filtered.len())).size(14))
            .padding([8, 16])
            .style(style::chip),
    )
    .width(Length::Fill)
    .align_x(Alignment::End)
    .padding([24, 32]);

    let hint = container(container(text("↓").size(18)).padding([10, 14]).style(style::chip))
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(Alignment::End)
        .align_y(Alignment::End)
        .padding(32);

    let mut layers = stack![body];
    if !gallery.mobile {
        layers = layers.push(count).push(hint);
    }

    container(layers)
        .width(Length::Fill)
        .height(Length::Fill)
        .style(style::page)
        .into()
}

fn cards<'a>(gallery: &GalleryView<'a>) -> Element<'a, Message> {
    let cards = gallery
        .filtered
        .indices()
        .iter()
        .filter_map(|&index| Some((index, gallery.projects.get(index)?)))
        .map(|(index, project)| {
            super::card::view(project, index, gallery.config, Length::Fill, 240.0, true)
        });

    column(cards).spacing(16).padding([16, 12]).into()
}

fn collage<'a>(gallery: &GalleryView<'a>) -> Element<'a, Message> {
    let entries: Vec<(usize, &'a Project, Placement)> = gallery
        .filtered
        .indices()
        .iter()
        .enumerate()
        .filter_map(|(position, &index)| {
            let project = gallery.projects.get(index)?;
            let placement = PROJECT_COLLAGE.place(
                position,
                gallery.viewport,
                gallery.scroll_y,
                (0.0, 0.0),
                gallery.hovered == Some(index),
            );
            Some((index, project, placement))
        })
        .collect();

    let placements: Vec<Placement> = entries.iter().map(|(_, _, p)| *p).collect();
    let height = PROJECT_COLLAGE.content_height(entries.len(), gallery.viewport);

    let mut layers = Stack::new()
        .width(Length::Fill)
        .height(Length::Fixed(height))
        .push(Space::new(Length::Fill, Length::Fixed(height)));

    for position in layout::paint_order(&placements) {
        let (index, project, placement) = entries[position];
        layers = layers.push(place(
            framed(project, index, placement, gallery),
            placement,
        ));
    }

    layers.into()
}

/// Offset `content` to the placement's top-left corner
fn place<'a>(content: Element<'a, Message>, placement: Placement) -> Element<'a, Message> {
    container(content)
        .padding(Padding {
            top: placement.y.max(0.0),
            right: 0.0,
            bottom: 0.0,
            left: placement.x.max(0.0),
        })
        .into()
}

fn framed<'a>(
    project: &'a Project,
    index: usize,
    placement: Placement,
    gallery: &GalleryView<'a>,
) -> Element<'a, Message> {
    let picture = image(gallery.config.asset(&project.thumbnail))
        .width(Length::Fill)
        .height(Length::Fill)
        .content_fit(ContentFit::Cover)
        .rotation(Rotation::Floating(placement.rotation.into()));

    let mut inner = stack![picture];
    if gallery.hovered == Some(index) {
        inner = inner.push(caption(project));
    }

    let frame = container(inner)
        .padding(FRAME)
        .width(Length::Fixed(placement.width))
        .height(Length::Fixed(placement.height))
        .style(style::frame);

    mouse_area(frame)
        .interaction(mouse::Interaction::Pointer)
        .on_enter(Message::CardHovered(index))
        .on_exit(Message::CardLeft(index))
        .on_press(Message::ProjectClicked(index))
        .into()
}

/// Hover overlay: title, category and year, description
fn caption<'a>(project: &'a Project) -> Element<'a, Message> {
    let meta = match project.year {
        Some(year) => format!("{}  ·  {}", project.category, year),
        None => project.category.to_string(),
    };

    let mut details = column![
        text(&project.title).size(20),
        text(meta).size(13),
    ]
    .spacing(6);

    if let Some(description) = &project.description {
        details = details.push(text(description).size(13));
    }

    container(details)
        .padding(20)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_y(Alignment::End)
        .style(style::glass)
        .into()
}
