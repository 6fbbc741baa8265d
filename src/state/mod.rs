//! State management module
//!
//! This module holds all transient gallery state, including:
//! - The static catalog of projects and artworks (catalog.rs, data.rs)
//! - Category filtering and its memoized result (filter.rs)
//! - The project detail sheet lifecycle (modal.rs)
//! - The auto-hiding mobile category bar (auto_hide.rs)
//! - Carousel and strip paging (carousel.rs)
//! - Window classification and layout selection (viewport.rs)

pub mod auto_hide;
pub mod carousel;
pub mod catalog;
pub mod data;
pub mod filter;
pub mod modal;
pub mod viewport;

/// Generation token tying a delayed message to the state that armed it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Ticket(u64);

/// Hands out strictly increasing tickets
#[derive(Debug, Clone, Default)]
pub(crate) struct Tickets {
    last: u64,
}

impl Tickets {
    pub(crate) fn next(&mut self) -> Ticket {
        self.last += 1;
        Ticket(self.last)
    }
}
