//! Container style functions with theme support.

use iced::widget::container;
use iced::{Background, Border, Color};

use super::palette;
use super::shadows;
use super::shadows::radius;

/// Page background.
pub fn page_style(_theme: &iced::Theme) -> container::Style {
    let p = palette::current();

    container::Style {
        background: Some(Background::Color(p.background)),
        ..Default::default()
    }
}

/// App bar above the current screen.
pub fn app_bar_style(_theme: &iced::Theme) -> container::Style {
    let p = palette::current();

    container::Style {
        background: Some(Background::Color(p.surface)),
        text_color: Some(p.text_primary),
        border: Border {
            color: p.border_subtle,
            width: 1.0,
            radius: radius::NONE.into(),
        },
        shadow: shadows::card(),
        ..Default::default()
    }
}

/// Card style.
pub fn card_style(_theme: &iced::Theme) -> container::Style {
    let p = palette::current();

    container::Style {
        background: Some(Background::Color(p.surface)),
        border: Border {
            color: p.border_subtle,
            width: 1.0,
            radius: radius::LARGE.into(),
        },
        shadow: shadows::card(),
        ..Default::default()
    }
}

/// Table header row.
pub fn table_header_style(_theme: &iced::Theme) -> container::Style {
    let p = palette::current();

    container::Style {
        background: Some(Background::Color(p.background)),
        border: Border {
            color: p.border_subtle,
            width: 1.0,
            radius: radius::SMALL.into(),
        },
        ..Default::default()
    }
}

/// Thin separator under each table row.
pub fn row_border_style(_theme: &iced::Theme) -> container::Style {
    let p = palette::current();

    container::Style {
        border: Border {
            color: p.border_subtle,
            width: 1.0,
            radius: radius::NONE.into(),
        },
        ..Default::default()
    }
}

/// Read-only email body box.
pub fn body_box_style(_theme: &iced::Theme) -> container::Style {
    let p = palette::current();

    container::Style {
        background: Some(Background::Color(p.background)),
        text_color: Some(p.text_primary),
        border: Border {
            color: p.border_subtle,
            width: 1.0,
            radius: radius::SMALL.into(),
        },
        ..Default::default()
    }
}

/// Dimmed backdrop behind the editor dialog.
pub fn backdrop_style(_theme: &iced::Theme) -> container::Style {
    let p = palette::current();

    container::Style {
        background: Some(Background::Color(p.backdrop)),
        ..Default::default()
    }
}

/// Dialog surface.
pub fn dialog_style(_theme: &iced::Theme) -> container::Style {
    let p = palette::current();

    container::Style {
        background: Some(Background::Color(p.surface_elevated)),
        border: Border {
            color: p.border_medium,
            width: 1.0,
            radius: radius::LARGE.into(),
        },
        shadow: shadows::floating(),
        ..Default::default()
    }
}

/// Category chip filled with `color`.
pub fn chip_style(color: Color) -> impl Fn(&iced::Theme) -> container::Style {
    move |_theme| {
        let p = palette::current();

        container::Style {
            background: Some(Background::Color(color)),
            text_color: Some(p.text_on_primary),
            border: Border {
                color,
                width: 0.0,
                radius: radius::PILL.into(),
            },
            ..Default::default()
        }
    }
}

/// Toast/alert surface tinted with `accent`.
pub fn toast_style(accent: Color) -> impl Fn(&iced::Theme) -> container::Style {
    move |_theme| {
        let p = palette::current();

        container::Style {
            background: Some(Background::Color(p.surface_elevated)),
            text_color: Some(p.text_primary),
            border: Border {
                color: accent,
                width: 2.0,
                radius: radius::MEDIUM.into(),
            },
            shadow: shadows::floating(),
            ..Default::default()
        }
    }
}

/// Inline alert (form errors) tinted with `accent`.
pub fn alert_style(accent: Color) -> impl Fn(&iced::Theme) -> container::Style {
    move |_theme| container::Style {
        background: Some(Background::Color(Color { a: 0.12, ..accent })),
        text_color: Some(accent),
        border: Border {
            color: accent,
            width: 1.0,
            radius: radius::SMALL.into(),
        },
        ..Default::default()
    }
}
