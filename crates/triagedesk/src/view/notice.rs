//! Toast notification overlay.

use iced::widget::{button, container, row, text};
use iced::{Element, Length};

use crate::message::Message;
use crate::model::{Notice, NoticeKind};
use crate::style::widgets::{palette, toast_style};

/// Renders the notice anchored to the bottom center of the window.
pub fn view_notice(notice: &Notice) -> Element<'static, Message> {
    let p = palette::current();
    let (accent, icon) = match notice.kind {
        NoticeKind::Success => (p.success, "\u{2714}"),
        NoticeKind::Error => (p.danger, "\u{26A0}"),
    };

    let toast = button(
        container(
            row![
                text(icon).size(16).color(accent),
                text(notice.text.clone()).size(14).color(p.text_primary),
            ]
            .spacing(10)
            .align_y(iced::Alignment::Center),
        )
        .padding([12, 18])
        .style(toast_style(accent)),
    )
    .padding(0)
    .style(|_theme, _status| iced::widget::button::Style::default())
    .on_press(Message::DismissNotice(notice.id));

    container(toast)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(iced::alignment::Horizontal::Center)
        .align_y(iced::alignment::Vertical::Bottom)
        .padding(24)
        .into()
}
