//! Collage geometry: slot positions, parallax and tilt
//!
//! Cards cycle through seven hand-placed slots. Every full cycle is pushed
//! one viewport height further down so long lists stay readable.

use iced::{Degrees, Size};

/// One hand-placed slot, positions as fractions of the viewport
#[derive(Debug, Clone, Copy)]
pub struct Slot {
    pub top: f32,
    pub left: f32,
    /// Fixed card size; `None` means the item brings its own size
    pub size: Option<(f32, f32)>,
    pub z_index: u8,
}

const fn slot(top: f32, left: f32, size: Option<(f32, f32)>, z_index: u8) -> Slot {
    Slot {
        top,
        left,
        size,
        z_index,
    }
}

pub const PROJECT_SLOTS: [Slot; 7] = [
    slot(0.10, 0.08, Some((320.0, 400.0)), 8),
    slot(0.25, 0.28, Some((240.0, 300.0)), 3),
    slot(0.08, 0.50, Some((400.0, 500.0)), 7),
    slot(0.35, 0.70, Some((280.0, 350.0)), 4),
    slot(0.15, 0.78, Some((200.0, 280.0)), 6),
    slot(0.65, 0.15, Some((360.0, 450.0)), 5),
    slot(0.55, 0.85, Some((240.0, 320.0)), 2),
];

pub const ARTWORK_SLOTS: [Slot; 7] = [
    slot(0.10, 0.05, None, 8),
    slot(0.25, 0.25, None, 3),
    slot(0.08, 0.45, None, 7),
    slot(0.30, 0.65, None, 4),
    slot(0.15, 0.75, None, 6),
    slot(0.55, 0.15, None, 5),
    slot(0.45, 0.80, None, 2),
];

/// Parallax speed and bound for one kind of collage
#[derive(Debug, Clone, Copy)]
pub struct ParallaxProfile {
    pub base: f32,
    pub step: f32,
    pub modulus: f32,
}

pub const PROJECT_PARALLAX: ParallaxProfile = ParallaxProfile {
    base: 0.1,
    step: 0.02,
    modulus: 40.0,
};

pub const ARTWORK_PARALLAX: ParallaxProfile = ParallaxProfile {
    base: 0.08,
    step: 0.02,
    modulus: 30.0,
};

/// Share of the parallax offset applied again as an extra translation
const TRANSLATE_FACTOR: f32 = 0.3;

/// Scale of a hovered card
pub const HOVER_SCALE: f32 = 1.05;

/// Vertical displacement of card `index` at `scroll_y`, in `[0, modulus)`
pub fn parallax_offset(scroll_y: f32, index: usize, profile: ParallaxProfile) -> f32 {
    let speed = profile.base + index as f32 * profile.step;
    (scroll_y.max(0.0) * speed) % profile.modulus
}

/// How a collage tilts its cards
#[derive(Debug, Clone, Copy)]
pub enum Tilt {
    /// `(index % 4 - 1.5) * 1.5` degrees
    Project,
    /// `(index % 3 - 1) * 2` degrees
    Artwork,
}

impl Tilt {
    pub fn degrees(self, index: usize) -> f32 {
        match self {
            Tilt::Project => ((index % 4) as f32 - 1.5) * 1.5,
            Tilt::Artwork => ((index % 3) as f32 - 1.0) * 2.0,
        }
    }
}

/// Resolved position of one card inside the collage
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub z_index: u8,
    pub rotation: Degrees,
}

/// Everything needed to place the cards of one collage
#[derive(Debug, Clone, Copy)]
pub struct Collage<'a> {
    pub slots: &'a [Slot],
    pub parallax: ParallaxProfile,
    pub tilt: Tilt,
}

pub const PROJECT_COLLAGE: Collage<'static> = Collage {
    slots: &PROJECT_SLOTS,
    parallax: PROJECT_PARALLAX,
    tilt: Tilt::Project,
};

pub const ARTWORK_COLLAGE: Collage<'static> = Collage {
    slots: &ARTWORK_SLOTS,
    parallax: ARTWORK_PARALLAX,
    tilt: Tilt::Artwork,
};

impl Collage<'_> {
    /// Place card `index`. `natural` is used when the slot has no fixed size.
    pub fn place(
        &self,
        index: usize,
        viewport: Size,
        scroll_y: f32,
        natural: (f32, f32),
        hovered: bool,
    ) -> Placement {
        let slot = self.slots[index % self.slots.len()];
        let cycle = (index / self.slots.len()) as f32;
        let offset = parallax_offset(scroll_y, index, self.parallax);
        let (mut width, mut height) = slot.size.unwrap_or(natural);

        let mut x = slot.left * viewport.width;
        let mut y = (cycle + slot.top) * viewport.height + offset + offset * TRANSLATE_FACTOR;
        let mut rotation = Degrees(self.tilt.degrees(index));
        let mut z_index = slot.z_index;

        if hovered {
            // Grow around the centre
            x -= width * (HOVER_SCALE - 1.0) / 2.0;
            y -= height * (HOVER_SCALE - 1.0) / 2.0;
            width *= HOVER_SCALE;
            height *= HOVER_SCALE;
            rotation = Degrees(0.0);
            z_index = u8::MAX;
        }

        Placement {
            x,
            y,
            width,
            height,
            z_index,
            rotation,
        }
    }

    /// Height of the scrollable area needed for `count` cards
    pub fn content_height(&self, count: usize, viewport: Size) -> f32 {
        let cycles = count.div_ceil(self.slots.len()).max(1) as f32;
        cycles * viewport.height + self.parallax.modulus * (1.0 + TRANSLATE_FACTOR)
    }
}

/// Card indices in paint order: lowest z first, ties by index
pub fn paint_order(placements: &[Placement]) -> Vec<usize> {
    let mut order: Vec<usize> = (0..placements.len()).collect();
    order.sort_by_key(|&i| (placements[i].z_index, i));
    order
}

#[cfg(test)]
mod tests {
    use super::*;

    const VIEW: Size = Size {
        width: 1000.0,
        height: 800.0,
    };

    #[test]
    fn test_parallax_is_zero_at_top() {
        for index in 0..10 {
            assert_eq!(parallax_offset(0.0, index, PROJECT_PARALLAX), 0.0);
        }
    }

    #[test]
    fn test_parallax_is_bounded_by_modulus() {
        for scroll in [0.0, 13.0, 399.0, 1234.5, 99_999.0] {
            for index in 0..20 {
                let offset = parallax_offset(scroll, index, PROJECT_PARALLAX);
                assert!((0.0..40.0).contains(&offset), "{scroll} {index} -> {offset}");
                let offset = parallax_offset(scroll, index, ARTWORK_PARALLAX);
                assert!((0.0..30.0).contains(&offset));
            }
        }
    }

    #[test]
    fn test_parallax_speed_grows_with_index() {
        // 100 * 0.1 = 10, 100 * 0.12 = 12
        assert!((parallax_offset(100.0, 0, PROJECT_PARALLAX) - 10.0).abs() < 1e-4);
        assert!((parallax_offset(100.0, 1, PROJECT_PARALLAX) - 12.0).abs() < 1e-4);
        // 500 * 0.1 = 50 wraps to 10
        assert!((parallax_offset(500.0, 0, PROJECT_PARALLAX) - 10.0).abs() < 1e-3);
    }

    #[test]
    fn test_tilt() {
        assert_eq!(Tilt::Project.degrees(0), -2.25);
        assert_eq!(Tilt::Project.degrees(3), 2.25);
        assert_eq!(Tilt::Project.degrees(4), -2.25);
        assert_eq!(Tilt::Artwork.degrees(0), -2.0);
        assert_eq!(Tilt::Artwork.degrees(1), 0.0);
        assert_eq!(Tilt::Artwork.degrees(2), 2.0);
    }

    #[test]
    fn test_place_uses_slot_and_cycle() {
        let first = PROJECT_COLLAGE.place(0, VIEW, 0.0, (0.0, 0.0), false);
        assert!((first.x - 80.0).abs() < 1e-3);
        assert!((first.y - 80.0).abs() < 1e-3);
        assert_eq!((first.width, first.height), (320.0, 400.0));
        assert_eq!(first.z_index, 8);

        let eighth = PROJECT_COLLAGE.place(7, VIEW, 0.0, (0.0, 0.0), false);
        assert_eq!(eighth.x, first.x);
        assert!((eighth.y - (first.y + VIEW.height)).abs() < 1e-3);
    }

    #[test]
    fn test_artwork_slots_use_natural_size() {
        let placement = ARTWORK_COLLAGE.place(2, VIEW, 0.0, (400.0, 480.0), false);
        assert_eq!((placement.width, placement.height), (400.0, 480.0));
    }

    #[test]
    fn test_hover_lifts_and_straightens() {
        let resting = PROJECT_COLLAGE.place(1, VIEW, 0.0, (0.0, 0.0), false);
        let hovered = PROJECT_COLLAGE.place(1, VIEW, 0.0, (0.0, 0.0), true);

        assert!(hovered.width > resting.width);
        assert_eq!(hovered.rotation, Degrees(0.0));
        assert_eq!(hovered.z_index, u8::MAX);
    }

    #[test]
    fn test_paint_order_by_z_index() {
        let placements: Vec<Placement> = (0..3)
            .map(|i| PROJECT_COLLAGE.place(i, VIEW, 0.0, (0.0, 0.0), false))
            .collect();
        // z: 8, 3, 7
        assert_eq!(paint_order(&placements), vec![1, 2, 0]);
    }

    #[test]
    fn test_content_height_grows_per_cycle() {
        let one = PROJECT_COLLAGE.content_height(7, VIEW);
        let two = PROJECT_COLLAGE.content_height(8, VIEW);
        assert!((two - one - VIEW.height).abs() < 1e-3);
        assert_eq!(PROJECT_COLLAGE.content_height(0, VIEW), one);
    }
}
