//! Color palette with light and dark theme support.
//!
//! Widget style functions read the active palette through [`current`], so a
//! theme switch only has to call [`set_theme`].

use iced::Color;
use triagedesk_core::CategoryTone;

/// Application theme mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThemeMode {
    /// Light theme (default).
    #[default]
    Light,
    /// Dark theme.
    Dark,
}

/// Complete color palette for the application.
#[derive(Debug, Clone, Copy)]
pub struct Palette {
    // Brand
    pub primary: Color,
    pub primary_light: Color,
    pub primary_dark: Color,

    // Surfaces
    pub surface: Color,
    pub surface_elevated: Color,
    pub background: Color,
    pub backdrop: Color,

    // Text
    pub text_primary: Color,
    pub text_secondary: Color,
    pub text_muted: Color,
    pub text_on_primary: Color,

    // Category tones / feedback
    pub danger: Color,
    pub success: Color,
    pub warning: Color,
    pub info: Color,
    pub neutral: Color,

    // States
    pub selected: Color,
    pub hover: Color,

    // Borders
    pub border_subtle: Color,
    pub border_medium: Color,

    // Shadows
    pub shadow: Color,
}

impl Palette {
    /// Light palette: white cards on a cool gray page.
    #[must_use]
    pub const fn light() -> Self {
        Self {
            primary: Color::from_rgb(0.10, 0.46, 0.82),
            primary_light: Color::from_rgb(0.26, 0.58, 0.92),
            primary_dark: Color::from_rgb(0.05, 0.36, 0.68),

            surface: Color::WHITE,
            surface_elevated: Color::WHITE,
            background: Color::from_rgb(0.953, 0.957, 0.965), // #f3f4f6
            backdrop: Color::from_rgba(0.0, 0.0, 0.0, 0.45),

            text_primary: Color::from_rgb(0.07, 0.09, 0.15),
            text_secondary: Color::from_rgb(0.42, 0.45, 0.50),
            text_muted: Color::from_rgb(0.61, 0.64, 0.69),
            text_on_primary: Color::WHITE,

            danger: Color::from_rgb(0.83, 0.18, 0.18),
            success: Color::from_rgb(0.18, 0.49, 0.20),
            warning: Color::from_rgb(0.93, 0.42, 0.01),
            info: Color::from_rgb(0.01, 0.53, 0.82),
            neutral: Color::from_rgb(0.74, 0.74, 0.74),

            selected: Color::from_rgb(0.91, 0.95, 1.0),
            hover: Color::from_rgb(0.96, 0.97, 0.98),

            border_subtle: Color::from_rgb(0.898, 0.906, 0.922), // #e5e7eb
            border_medium: Color::from_rgb(0.82, 0.84, 0.86),

            shadow: Color::from_rgba(0.0, 0.0, 0.0, 0.08),
        }
    }

    /// Dark palette: slate surfaces with brighter accents.
    #[must_use]
    pub const fn dark() -> Self {
        Self {
            primary: Color::from_rgb(0.38, 0.65, 0.98),
            primary_light: Color::from_rgb(0.52, 0.74, 1.0),
            primary_dark: Color::from_rgb(0.25, 0.52, 0.86),

            surface: Color::from_rgb(0.12, 0.13, 0.15),
            surface_elevated: Color::from_rgb(0.15, 0.16, 0.19),
            background: Color::from_rgb(0.08, 0.09, 0.11),
            backdrop: Color::from_rgba(0.0, 0.0, 0.0, 0.65),

            text_primary: Color::from_rgb(0.92, 0.93, 0.95),
            text_secondary: Color::from_rgb(0.65, 0.68, 0.72),
            text_muted: Color::from_rgb(0.50, 0.53, 0.58),
            text_on_primary: Color::from_rgb(0.06, 0.07, 0.09),

            danger: Color::from_rgb(1.0, 0.42, 0.42),
            success: Color::from_rgb(0.35, 0.85, 0.50),
            warning: Color::from_rgb(1.0, 0.72, 0.30),
            info: Color::from_rgb(0.35, 0.78, 1.0),
            neutral: Color::from_rgb(0.45, 0.47, 0.52),

            selected: Color::from_rgb(0.14, 0.20, 0.28),
            hover: Color::from_rgb(0.16, 0.17, 0.20),

            border_subtle: Color::from_rgb(0.20, 0.21, 0.24),
            border_medium: Color::from_rgb(0.28, 0.29, 0.32),

            shadow: Color::from_rgba(0.0, 0.0, 0.0, 0.30),
        }
    }

    /// Gets the palette for a given theme mode.
    #[must_use]
    pub const fn for_mode(mode: ThemeMode) -> Self {
        match mode {
            ThemeMode::Light => Self::light(),
            ThemeMode::Dark => Self::dark(),
        }
    }

    /// Chip color for a category tone.
    #[must_use]
    pub const fn tone(&self, tone: CategoryTone) -> Color {
        match tone {
            CategoryTone::Danger => self.danger,
            CategoryTone::Success => self.success,
            CategoryTone::Warning => self.warning,
            CategoryTone::Info => self.info,
            CategoryTone::Primary => self.primary,
            CategoryTone::Neutral => self.neutral,
        }
    }
}

/// Current active palette - defaults to light mode.
pub static CURRENT: std::sync::LazyLock<std::sync::RwLock<Palette>> =
    std::sync::LazyLock::new(|| std::sync::RwLock::new(Palette::light()));

/// Sets the current global palette.
pub fn set_theme(mode: ThemeMode) {
    if let Ok(mut palette) = CURRENT.write() {
        *palette = Palette::for_mode(mode);
    }
}

/// Gets a copy of the current palette.
#[must_use]
pub fn current() -> Palette {
    CURRENT.read().map_or_else(|_| Palette::light(), |p| *p)
}
