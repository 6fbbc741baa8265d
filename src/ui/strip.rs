//! Horizontally scrolling row of project cards
use iced::widget::{button, column, container, row, scrollable, text, Space};
use iced::{Alignment, Element, Length, Padding};

use crate::config::GalleryConfig;
use crate::state::carousel::StripBounds;
use crate::state::data::Project;
use crate::state::filter::{CategorySelection, FilteredProjects};
use crate::ui::{card, gallery, style};
use crate::Message;

const CARD_WIDTH: f32 = 320.0;
const CARD_GAP: f32 = 24.0;
const PADDING: f32 = 48.0;

pub fn scroll_id() -> scrollable::Id {
    scrollable::Id::new("strip")
}

/// Bounds of the freshly laid out strip for `count` cards in a window
/// `window_width` wide
pub fn bounds_at_rest(count: usize, window_width: f32) -> StripBounds {
    StripBounds::at_rest(count, CARD_WIDTH, CARD_GAP, window_width - 2.0 * PADDING)
}

pub fn view<'a>(
    projects: &'a [Project],
    filtered: &'a FilteredProjects,
    bounds: StripBounds,
    config: &GalleryConfig,
) -> Element<'a, Message> {
    if filtered.is_empty() {
        return gallery::empty();
    }

    let title = match filtered.selection() {
        CategorySelection::All => "全部项目".to_string(),
        CategorySelection::Only(category) => format!("{category} 项目"),
    };

    let arrow = |label: &'a str, step: i8, enabled: bool| {
        button(text(label).size(16))
            .padding([6, 12])
            .style(style::round)
            .on_press_maybe(enabled.then_some(Message::StripStep(step)))
    };

    let heading = row![
        text(title).size(20).color(style::INK),
        Space::with_width(Length::Fill),
        arrow("‹", -1, bounds.can_scroll_left()),
        arrow("›", 1, bounds.can_scroll_right()),
    ]
    .spacing(8)
    .align_y(Alignment::Center);

    let cards = row(filtered.indices().iter().filter_map(|&index| {
        let project = projects.get(index)?;
        Some(card::view(
            project,
            index,
            config,
            Length::Fixed(CARD_WIDTH),
            CARD_WIDTH * 0.75,
            false,
        ))
    }))
    .spacing(CARD_GAP)
    .padding(Padding {
        bottom: 16.0,
        ..Padding::ZERO
    });

    let strip = scrollable(cards)
        .id(scroll_id())
        .direction(scrollable::Direction::Horizontal(scrollable::Scrollbar::new()))
        .on_scroll(Message::StripScrolled)
        .width(Length::Fill);

    container(column![heading, strip].spacing(24).padding(PADDING))
        .width(Length::Fill)
        .height(Length::Fill)
        .style(style::page)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_row_disables_right_arrow() {
        let bounds = bounds_at_rest(2, 1280.0);
        assert!(!bounds.can_scroll_left());
        assert!(!bounds.can_scroll_right());
    }

    #[test]
    fn test_long_row_enables_right_arrow() {
        assert!(bounds_at_rest(4, 1280.0).can_scroll_right());
        assert!(bounds_at_rest(2, 500.0).can_scroll_right());
    }
}
