//! Top bar: category navigation, title and layout menu
use iced::widget::{button, container, row, stack, text, Space};
use iced::{Alignment, Element, Length};

use crate::state::data::CategoryFilter;
use crate::state::filter::CategorySelection;
use crate::state::viewport::Layout;
use crate::ui::style;
use crate::Message;

pub const HEIGHT: f32 = 64.0;

/// Category pills, shared with the mobile tab bar
pub fn category_pills<'a>(
    filters: &'a [CategoryFilter],
    active: CategorySelection,
) -> impl Iterator<Item = Element<'a, Message>> + 'a {
    filters.iter().map(move |filter| {
        let label = match filter.count {
            Some(count) => format!("{} {}", filter.label, count),
            None => filter.label.clone(),
        };
        button(text(label).size(14))
            .padding([8, 16])
            .style(style::pill(filter.value == active))
            .on_press(Message::CategorySelected(filter.value))
            .into()
    })
}

pub fn view<'a>(
    filters: &'a [CategoryFilter],
    active: CategorySelection,
    layout: Layout,
    mobile: bool,
) -> Element<'a, Message> {
    // Desktop only; on mobile the in-page tab bar takes over
    let nav: Element<'a, Message> = if mobile {
        Space::with_width(Length::Shrink).into()
    } else {
        row(category_pills(filters, active))
            .spacing(4)
            .align_y(Alignment::Center)
            .into()
    };

    let menu = button(text(layout.label()).size(14))
        .padding([8, 12])
        .style(button::text)
        .on_press(Message::LayoutCycled);

    let bar = row![nav, Space::with_width(Length::Fill), menu]
        .align_y(Alignment::Center)
        .padding([12, 24]);

    let title = container(text("Gallery").size(24).color(style::INK))
        .center_x(Length::Fill)
        .center_y(Length::Fill);

    container(stack![bar, title])
        .width(Length::Fill)
        .height(Length::Fixed(HEIGHT))
        .style(style::header)
        .into()
}
