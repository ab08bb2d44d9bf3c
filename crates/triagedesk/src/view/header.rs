//! Header with title, navigation tabs and API status.

use iced::widget::{Space, button, container, row, text};
use iced::{Element, Length};

use crate::message::{Message, View};
use crate::model::ApiHealth;
use crate::style::widgets::{app_bar_style, chip_style, palette, secondary_button_style, tab_button_style};

/// Renders the application header.
pub fn view_header(current: View, health: ApiHealth) -> Element<'static, Message> {
    let p = palette::current();

    let title = text("Email Assistant - Dashboard")
        .size(20)
        .font(iced::Font {
            weight: iced::font::Weight::Bold,
            ..Default::default()
        })
        .color(p.primary);

    let tabs = row![
        nav_tab("Classificar e-mail", View::Classify, current),
        nav_tab("E-mails classificados", View::Review, current),
    ]
    .spacing(4);

    let badge_color = match health {
        ApiHealth::Unknown => p.neutral,
        ApiHealth::Online => p.success,
        ApiHealth::Offline => p.danger,
    };
    let badge = container(text(health.label()).size(11))
        .padding([4, 10])
        .style(chip_style(badge_color));

    let settings_btn = button(text("\u{2699}").size(18).color(p.text_secondary))
        .padding([6, 12])
        .style(secondary_button_style)
        .on_press(Message::NavigateTo(View::Settings));

    let bar = row![
        title,
        Space::new().width(24),
        tabs,
        Space::new().width(Length::Fill),
        badge,
        Space::new().width(8),
        settings_btn,
    ]
    .spacing(8)
    .padding([10, 20])
    .align_y(iced::Alignment::Center);

    container(bar)
        .width(Length::Fill)
        .style(app_bar_style)
        .into()
}

fn nav_tab(label: &'static str, view: View, current: View) -> Element<'static, Message> {
    button(text(label).size(14))
        .padding([10, 16])
        .style(tab_button_style(view == current))
        .on_press(Message::NavigateTo(view))
        .into()
}
