//! Paging state for the single-project carousel and the horizontal strip

use iced::Point;
use std::time::Instant;

/// Minimum |offset| * velocity for a drag to count as a swipe
pub const SWIPE_CONFIDENCE_THRESHOLD: f32 = 10_000.0;

/// Horizontal distance the strip arrows scroll by
pub const STRIP_SCROLL_STEP: f32 = 400.0;

/// Which way the last page change went (-1 back, 1 forward, 0 none yet)
pub type Direction = i8;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Carousel {
    index: usize,
    direction: Direction,
}

impl Carousel {
    pub fn index(&self) -> usize {
        self.index
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Move one page forward or back, wrapping at both ends
    pub fn paginate(&mut self, step: Direction, len: usize) {
        if len == 0 {
            return;
        }
        self.direction = step;
        let next = self.index as i64 + i64::from(step);
        self.index = if next >= len as i64 {
            0
        } else if next < 0 {
            len - 1
        } else {
            next as usize
        };
    }

    /// Jump straight to `index` (from the dot indicators)
    pub fn go_to(&mut self, index: usize, len: usize) {
        if index >= len {
            return;
        }
        self.direction = if index > self.index { 1 } else { -1 };
        self.index = index;
    }

    /// Back to the first page, used whenever the visible list changes
    pub fn reset(&mut self) {
        self.index = 0;
    }
}

/// How strongly a drag was flung
pub fn swipe_power(offset: f32, velocity: f32) -> f32 {
    offset.abs() * velocity
}

/// Page step implied by a finished drag, if it was a swipe at all
pub fn swipe_step(offset: f32, velocity: f32) -> Option<Direction> {
    let swipe = swipe_power(offset, velocity);
    if swipe < -SWIPE_CONFIDENCE_THRESHOLD {
        Some(1)
    } else if swipe > SWIPE_CONFIDENCE_THRESHOLD {
        Some(-1)
    } else {
        None
    }
}

/// Tracks a horizontal drag from press to release
#[derive(Debug, Clone, Default)]
pub struct DragTracker {
    start: Option<(Point, Instant)>,
    last: Option<Point>,
}

impl DragTracker {
    pub fn press(&mut self, at: Instant) {
        self.start = self.last.map(|position| (position, at));
    }

    pub fn moved(&mut self, position: Point) {
        self.last = Some(position);
    }

    pub fn is_dragging(&self) -> bool {
        self.start.is_some()
    }

    /// Finish the drag, returning horizontal offset (px) and velocity (px/s)
    pub fn release(&mut self, at: Instant) -> Option<(f32, f32)> {
        let (origin, started) = self.start.take()?;
        let end = self.last?;
        let offset = end.x - origin.x;
        let seconds = at.saturating_duration_since(started).as_secs_f32();
        let velocity = if seconds > 0.0 { offset / seconds } else { 0.0 };
        Some((offset, velocity))
    }
}

/// Scroll bounds of the horizontal strip, refreshed on every scroll event
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct StripBounds {
    pub offset_x: f32,
    pub content_width: f32,
    pub viewport_width: f32,
}

impl StripBounds {
    /// Bounds of `count` cards at rest, before the strip reports a scroll
    pub fn at_rest(count: usize, card_width: f32, gap: f32, viewport_width: f32) -> Self {
        let content_width = match count {
            0 => 0.0,
            n => n as f32 * card_width + (n - 1) as f32 * gap,
        };
        Self {
            offset_x: 0.0,
            content_width,
            viewport_width: viewport_width.max(0.0),
        }
    }

    pub fn can_scroll_left(&self) -> bool {
        self.offset_x > 0.0
    }

    pub fn can_scroll_right(&self) -> bool {
        self.offset_x < self.content_width - self.viewport_width - 1.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_paginate_wraps_forward_and_back() {
        let mut carousel = Carousel::default();

        carousel.paginate(-1, 3);
        assert_eq!(carousel.index(), 2);
        assert_eq!(carousel.direction(), -1);

        carousel.paginate(1, 3);
        assert_eq!(carousel.index(), 0);
        carousel.paginate(1, 3);
        assert_eq!(carousel.index(), 1);
    }

    #[test]
    fn test_paginate_on_empty_list_is_noop() {
        let mut carousel = Carousel::default();
        carousel.paginate(1, 0);
        assert_eq!(carousel, Carousel::default());
    }

    #[test]
    fn test_go_to_sets_direction() {
        let mut carousel = Carousel::default();
        carousel.go_to(3, 5);
        assert_eq!((carousel.index(), carousel.direction()), (3, 1));
        carousel.go_to(1, 5);
        assert_eq!((carousel.index(), carousel.direction()), (1, -1));
        carousel.go_to(9, 5);
        assert_eq!(carousel.index(), 1);
    }

    #[test]
    fn test_reset_returns_to_first_page() {
        let mut carousel = Carousel::default();
        carousel.paginate(1, 4);
        carousel.paginate(1, 4);
        carousel.reset();
        assert_eq!(carousel.index(), 0);
    }

    #[test]
    fn test_swipe_step() {
        // Dragged left fast: next page
        assert_eq!(swipe_step(-200.0, -600.0), Some(1));
        // Dragged right fast: previous page
        assert_eq!(swipe_step(200.0, 600.0), Some(-1));
        // Too gentle
        assert_eq!(swipe_step(20.0, 100.0), None);
    }

    #[test]
    fn test_drag_tracker_measures_offset_and_velocity() {
        let mut drag = DragTracker::default();
        let t0 = Instant::now();

        drag.moved(Point::new(300.0, 50.0));
        drag.press(t0);
        assert!(drag.is_dragging());
        drag.moved(Point::new(100.0, 60.0));

        let (offset, velocity) = drag.release(t0 + Duration::from_millis(100)).unwrap();
        assert_eq!(offset, -200.0);
        assert!((velocity + 2000.0).abs() < 1.0);
        assert!(!drag.is_dragging());
    }

    #[test]
    fn test_release_without_press_is_none() {
        let mut drag = DragTracker::default();
        drag.moved(Point::new(1.0, 1.0));
        assert!(drag.release(Instant::now()).is_none());
    }

    #[test]
    fn test_strip_bounds() {
        let mut bounds = StripBounds {
            offset_x: 0.0,
            content_width: 1600.0,
            viewport_width: 800.0,
        };
        assert!(bounds.can_scroll_right());

        bounds.offset_x = 799.5;
        assert!(bounds.can_scroll_left());
        assert!(!bounds.can_scroll_right());
    }

    #[test]
    fn test_strip_at_rest_without_overflow() {
        // Two cards fit comfortably in a wide window
        let bounds = StripBounds::at_rest(2, 320.0, 24.0, 1184.0);
        assert_eq!(bounds.content_width, 664.0);
        assert!(!bounds.can_scroll_left());
        assert!(!bounds.can_scroll_right());

        let empty = StripBounds::at_rest(0, 320.0, 24.0, 1184.0);
        assert!(!empty.can_scroll_right());
    }

    #[test]
    fn test_strip_at_rest_with_overflow() {
        let bounds = StripBounds::at_rest(9, 320.0, 24.0, 1184.0);
        assert!(!bounds.can_scroll_left());
        assert!(bounds.can_scroll_right());
    }
}
