//! Scattered collage of artworks with hover captions
use iced::widget::{
    column, container, image, mouse_area, scrollable, stack, text, Space, Stack,
};
use iced::{mouse, Alignment, ContentFit, Element, Length, Padding, Rotation, Size};

use crate::config::GalleryConfig;
use crate::state::catalog::Catalog;
use crate::state::data::Artwork;
use crate::ui::layout::{self, Placement, ARTWORK_COLLAGE};
use crate::ui::{gallery, style, timeline};
use crate::Message;

const MAT: f32 = 8.0;

pub fn view<'a>(
    catalog: &'a Catalog,
    config: &GalleryConfig,
    viewport: Size,
    scroll_y: f32,
    hovered: Option<usize>,
) -> Element<'a, Message> {
    let artworks = &catalog.artworks;

    let placements: Vec<Placement> = artworks
        .iter()
        .enumerate()
        .map(|(index, artwork)| {
            ARTWORK_COLLAGE.place(
                index,
                viewport,
                scroll_y,
                (artwork.width + MAT * 2.0, artwork.height + MAT * 2.0),
                hovered == Some(index),
            )
        })
        .collect();

    let height = ARTWORK_COLLAGE.content_height(artworks.len(), viewport);

    let mut layers = Stack::new()
        .width(Length::Fill)
        .height(Length::Fixed(height))
        .push(Space::new(Length::Fill, Length::Fixed(height)));

    for index in layout::paint_order(&placements) {
        let placement = placements[index];
        let piece = piece(&artworks[index], index, placement, hovered == Some(index), config);
        layers = layers.push(container(piece).padding(Padding {
            top: placement.y.max(0.0),
            right: 0.0,
            bottom: 0.0,
            left: placement.x.max(0.0),
        }));
    }

    let body = scrollable(layers)
        .id(gallery::scroll_id())
        .on_scroll(Message::GalleryScrolled)
        .width(Length::Fill)
        .height(Length::Fill);

    let mut page = stack![body];
    if let Some((from, to)) = catalog.artwork_years() {
        page = page.push(
            container(timeline::view(from, to))
                .width(Length::Fill)
                .height(Length::Fill)
                .align_x(Alignment::Center)
                .align_y(Alignment::End)
                .padding(32),
        );
    }

    container(page)
        .width(Length::Fill)
        .height(Length::Fill)
        .style(style::page)
        .into()
}

fn piece<'a>(
    artwork: &'a Artwork,
    index: usize,
    placement: Placement,
    hovered: bool,
    config: &GalleryConfig,
) -> Element<'a, Message> {
    let picture = image(config.asset(&artwork.image))
        .width(Length::Fill)
        .height(Length::Fill)
        .content_fit(ContentFit::Cover)
        .rotation(Rotation::Floating(placement.rotation.into()));

    let framed = container(picture)
        .padding(MAT)
        .width(Length::Fixed(placement.width))
        .height(Length::Fixed(placement.height))
        .style(style::frame);

    let mut content = column![framed].spacing(8);
    if hovered {
        content = content.push(
            container(
                column![
                    text(&artwork.title).size(14).color(style::INK),
                    text(format!("{}, {}", artwork.artist, artwork.year))
                        .size(12)
                        .color(style::MUTED),
                ]
                .spacing(2),
            )
            .padding(12)
            .width(Length::Fixed(placement.width))
            .style(style::frame),
        );
    }

    mouse_area(content)
        .interaction(mouse::Interaction::Pointer)
        .on_enter(Message::CardHovered(index))
        .on_exit(Message::CardLeft(index))
        .into()
}
