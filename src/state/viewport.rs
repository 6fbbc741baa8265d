//! Window size classification and the active gallery layout

use iced::Size;
use serde::{Deserialize, Serialize};

/// Width below which the mobile layout is used
pub const DEFAULT_MOBILE_BREAKPOINT: f32 = 640.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewportClass {
    Mobile,
    Desktop,
}

impl ViewportClass {
    pub fn from_width(width: f32, breakpoint: f32) -> Self {
        if width < breakpoint {
            ViewportClass::Mobile
        } else {
            ViewportClass::Desktop
        }
    }
}

/// Last known window size plus its classification
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub size: Size,
    pub class: ViewportClass,
    breakpoint: f32,
}

impl Viewport {
    pub fn new(size: Size, breakpoint: f32) -> Self {
        Self {
            size,
            class: ViewportClass::from_width(size.width, breakpoint),
            breakpoint,
        }
    }

    /// Record a resize. Returns true when the class changed.
    pub fn resize(&mut self, size: Size) -> bool {
        let class = ViewportClass::from_width(size.width, self.breakpoint);
        self.size = size;
        std::mem::replace(&mut self.class, class) != class
    }

    pub fn is_mobile(&self) -> bool {
        self.class == ViewportClass::Mobile
    }
}

/// Which presentation of the catalog fills the page
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum Layout {
    /// Scattered parallax collage of projects
    #[default]
    Collage,
    /// One project at a time with paging
    Carousel,
    /// Horizontally scrolling row of cards
    Strip,
    /// Scattered collage of artworks
    Artworks,
}

impl Layout {
    /// Next layout for the header menu button
    pub fn next(self) -> Self {
        match self {
            Layout::Collage => Layout::Carousel,
            Layout::Carousel => Layout::Strip,
            Layout::Strip => Layout::Artworks,
            Layout::Artworks => Layout::Collage,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Layout::Collage => "拼贴",
            Layout::Carousel => "轮播",
            Layout::Strip => "横排",
            Layout::Artworks => "藏品",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classification_at_breakpoint() {
        assert_eq!(ViewportClass::from_width(639.9, 640.0), ViewportClass::Mobile);
        assert_eq!(ViewportClass::from_width(640.0, 640.0), ViewportClass::Desktop);
    }

    #[test]
    fn test_resize_reports_class_changes_only() {
        let mut viewport = Viewport::new(Size::new(1280.0, 800.0), DEFAULT_MOBILE_BREAKPOINT);
        assert!(!viewport.is_mobile());

        assert!(!viewport.resize(Size::new(1000.0, 700.0)));
        assert!(viewport.resize(Size::new(400.0, 700.0)));
        assert!(viewport.is_mobile());
        assert_eq!(viewport.size.width, 400.0);
    }

    #[test]
    fn test_layout_cycle_visits_every_layout() {
        let mut layout = Layout::default();
        let mut seen = vec![layout];
        for _ in 0..3 {
            layout = layout.next();
            seen.push(layout);
        }
        assert_eq!(layout.next(), Layout::Collage);
        assert_eq!(
            seen,
            vec![Layout::Collage, Layout::Carousel, Layout::Strip, Layout::Artworks]
        );
    }

    #[test]
    fn test_layout_deserializes_snake_case() {
        let layout: Layout = serde_json::from_str("\"artworks\"").unwrap();
        assert_eq!(layout, Layout::Artworks);
    }
}
