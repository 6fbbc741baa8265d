//! Views
//!
//! Every view is a plain function from borrowed state to an `Element`;
//! all interaction comes back as `crate::Message`.

pub mod artwork_grid;
pub mod card;
pub mod carousel;
pub mod gallery;
pub mod header;
pub mod layout;
pub mod modal;
pub mod strip;
pub mod style;
pub mod tab_bar;
pub mod timeline;
