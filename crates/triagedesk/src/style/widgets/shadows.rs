//! Shadow presets and rounded corner radii.

use iced::{Shadow, Vector};

use super::palette;

/// Rounded corner radii.
pub mod radius {
    pub const NONE: f32 = 0.0;
    pub const SMALL: f32 = 4.0;
    pub const MEDIUM: f32 = 6.0;
    pub const LARGE: f32 = 10.0;
    pub const PILL: f32 = 9999.0;
}

pub fn none() -> Shadow {
    Shadow::default()
}

/// Resting card shadow.
pub fn card() -> Shadow {
    Shadow {
        color: palette::current().shadow,
        offset: Vector::new(0.0, 1.0),
        blur_radius: 4.0,
    }
}

/// Floating elements: dialogs and toasts.
pub fn floating() -> Shadow {
    let shadow = palette::current().shadow;
    Shadow {
        color: iced::Color {
            a: (shadow.a * 3.0).min(1.0),
            ..shadow
        },
        offset: Vector::new(0.0, 8.0),
        blur_radius: 24.0,
    }
}
