//! Mobile category bar
//!
//! Only rendered while the auto-hide state says so; the header nav is
//! hidden on narrow windows and this bar replaces it.

use iced::widget::{container, row, scrollable};
use iced::{Alignment, Element, Length};

use crate::state::data::CategoryFilter;
use crate::state::filter::CategorySelection;
use crate::ui::{header, style};
use crate::Message;

pub fn view<'a>(filters: &'a [CategoryFilter], active: CategorySelection) -> Element<'a, Message> {
    let pills = row(header::category_pills(filters, active))
        .spacing(6)
        .align_y(Alignment::Center)
        .padding([8, 12]);

    container(
        scrollable(pills).direction(scrollable::Direction::Horizontal(
            scrollable::Scrollbar::new().width(0).scroller_width(0),
        )),
    )
    .width(Length::Fill)
    .style(style::header)
    .into()
}
