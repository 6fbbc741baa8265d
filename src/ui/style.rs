//! Shared colours and widget styles
use iced::border::Radius;
use iced::widget::{button, container};
use iced::{Background, Border, Color, Shadow, Theme, Vector};

pub const INK: Color = Color::from_rgb(0.07, 0.09, 0.15);
pub const MUTED: Color = Color::from_rgb(0.42, 0.45, 0.50);
pub const HAIRLINE: Color = Color::from_rgb(0.95, 0.96, 0.96);
pub const PAPER: Color = Color::WHITE;
pub const CANVAS: Color = Color::from_rgb(0.98, 0.98, 0.98);

pub fn page(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(CANVAS)),
        ..container::Style::default()
    }
}

/// Translucent bar with a hairline bottom edge
pub fn header(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(Color { a: 0.8, ..PAPER })),
        border: Border {
            color: HAIRLINE,
            width: 1.0,
            radius: 0.0.into(),
        },
        ..container::Style::default()
    }
}

/// White picture frame with a deep shadow
pub fn frame(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(PAPER)),
        shadow: Shadow {
            color: Color::from_rgba(0.0, 0.0, 0.0, 0.25),
            offset: Vector::new(0.0, 12.0),
            blur_radius: 28.0,
        },
        ..container::Style::default()
    }
}

/// Dark glass overlay used for hover captions
pub fn glass(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(Color::from_rgba(0.0, 0.0, 0.0, 0.45))),
        text_color: Some(Color::WHITE),
        border: Border {
            radius: 8.0.into(),
            ..Border::default()
        },
        ..container::Style::default()
    }
}

/// Small rounded label (counts, categories, tags)
pub fn chip(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(Color::from_rgb(0.95, 0.95, 0.96))),
        text_color: Some(Color::from_rgb(0.25, 0.27, 0.31)),
        border: Border {
            radius: 999.0.into(),
            ..Border::default()
        },
        ..container::Style::default()
    }
}

/// Rounded white card with a soft shadow
pub fn card(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(PAPER)),
        border: Border {
            radius: 24.0.into(),
            ..Border::default()
        },
        shadow: Shadow {
            color: Color::from_rgba(0.0, 0.0, 0.0, 0.12),
            offset: Vector::new(0.0, 10.0),
            blur_radius: 30.0,
        },
        ..container::Style::default()
    }
}

/// Modal backdrop, faded by the sheet's transition progress
pub fn backdrop(progress: f32) -> impl Fn(&Theme) -> container::Style {
    move |_theme| container::Style {
        background: Some(Background::Color(Color::from_rgba(0.0, 0.0, 0.0, 0.5 * progress))),
        ..container::Style::default()
    }
}

/// Bottom sheet with rounded top corners
pub fn sheet(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(PAPER)),
        text_color: Some(INK),
        border: Border {
            radius: Radius {
                top_left: 16.0,
                top_right: 16.0,
                bottom_right: 0.0,
                bottom_left: 0.0,
            },
            ..Border::default()
        },
        ..container::Style::default()
    }
}

/// Category pill: filled when active, bare text otherwise
pub fn pill(active: bool) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |_theme, status| {
        let (background, text_color) = match (active, status) {
            (true, _) => (Some(Background::Color(INK)), Color::WHITE),
            (false, button::Status::Hovered) => (Some(Background::Color(HAIRLINE)), INK),
            (false, _) => (None, MUTED),
        };
        button::Style {
            background,
            text_color,
            border: Border {
                radius: 999.0.into(),
                ..Border::default()
            },
            shadow: if active {
                Shadow {
                    color: Color::from_rgba(0.0, 0.0, 0.0, 0.2),
                    offset: Vector::new(0.0, 4.0),
                    blur_radius: 12.0,
                }
            } else {
                Shadow::default()
            },
        }
    }
}

/// Round translucent icon button (close, arrows)
pub fn round(_theme: &Theme, status: button::Status) -> button::Style {
    let alpha = match status {
        button::Status::Hovered | button::Status::Pressed => 0.2,
        button::Status::Disabled => 0.04,
        button::Status::Active => 0.1,
    };
    button::Style {
        background: Some(Background::Color(Color::from_rgba(0.0, 0.0, 0.0, alpha))),
        text_color: if status == button::Status::Disabled {
            Color { a: 0.3, ..INK }
        } else {
            INK
        },
        border: Border {
            radius: 999.0.into(),
            ..Border::default()
        },
        shadow: Shadow::default(),
    }
}

/// Carousel page dot
pub fn dot(active: bool) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |_theme, status| {
        let color = match (active, status) {
            (true, _) => INK,
            (false, button::Status::Hovered) => Color::from_rgb(0.61, 0.64, 0.69),
            (false, _) => Color::from_rgb(0.82, 0.84, 0.86),
        };
        button::Style {
            background: Some(Background::Color(color)),
            border: Border {
                radius: 999.0.into(),
                ..Border::default()
            },
            ..button::Style::default()
        }
    }
}
