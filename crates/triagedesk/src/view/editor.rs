//! Modal editor for correcting one classified email.

use iced::widget::{
    Space, button, center, column, container, mouse_area, opaque, pick_list, row, scrollable,
    stack, text, text_editor, toggler,
};
use iced::{Element, Length};
use triagedesk_core::EmailCategory;

use super::classify::labeled;
use crate::message::{Message, ReviewMessage};
use crate::model::EditorState;
use crate::style::widgets::{
    backdrop_style, body_box_style, dialog_style, field_editor_style, palette,
    primary_button_style, scrollable_style, secondary_button_style,
};

/// Renders the editor dialog.
pub fn view_editor(editor: &EditorState) -> Element<'_, Message> {
    let p = palette::current();
    let email = &editor.email;

    let title = row![
        text(format!("E-mail #{}", editor.draft.email_id))
            .size(20)
            .color(p.text_primary),
        Space::new().width(Length::Fill),
        button(text("\u{2715}").size(14))
            .padding([4, 10])
            .style(secondary_button_style)
            .on_press(Message::Review(ReviewMessage::CloseEditor)),
    ]
    .align_y(iced::Alignment::Center);

    let origin = column![
        read_only("Remetente", email.from_email.clone()),
        read_only("Assunto", email.subject.clone()),
    ]
    .spacing(8);

    let body = labeled(
        "Corpo do e-mail",
        container(
            scrollable(text(email.body.clone()).size(14).color(p.text_primary))
                .height(Length::Fixed(120.0))
                .style(scrollable_style),
        )
        .padding(10)
        .width(Length::Fill)
        .style(body_box_style)
        .into(),
    );

    let category = labeled(
        "Categoria",
        pick_list(EmailCategory::ALL, Some(editor.draft.category), |category| {
            Message::Review(ReviewMessage::EditorCategoryChanged(category))
        })
        .text_size(14)
        .padding([8, 12])
        .width(Length::Fixed(260.0))
        .into(),
    );

    let review = toggler(editor.draft.requires_human_review)
        .label("Manter marcado para revisão humana")
        .on_toggle(|on| Message::Review(ReviewMessage::EditorReviewToggled(on)))
        .text_size(14)
        .width(Length::Shrink);

    let confidence = text(format!("Confiança do modelo: {}", email.confidence_label()))
        .size(13)
        .color(p.text_secondary);

    let draft = labeled(
        "Resposta sugerida",
        text_editor(&editor.reply_editor)
            .on_action(|action| Message::Review(ReviewMessage::EditorDraftEdited(action)))
            .height(Length::Fixed(160.0))
            .padding(10)
            .size(14)
            .style(field_editor_style)
            .into(),
    );

    let save = if editor.is_saving {
        button(text("Salvando...").size(14))
            .padding([10, 20])
            .style(primary_button_style)
    } else {
        button(text("Salvar alterações").size(14))
            .padding([10, 20])
            .style(primary_button_style)
            .on_press(Message::Review(ReviewMessage::Save))
    };

    let close = button(text("Fechar").size(14))
        .padding([10, 20])
        .style(secondary_button_style)
        .on_press(Message::Review(ReviewMessage::CloseEditor));

    let pending = text(if editor.is_dirty() {
        "Alterações não salvas"
    } else {
        ""
    })
    .size(12)
    .color(p.warning);

    let actions = row![pending, Space::new().width(Length::Fill), close, save]
        .spacing(12)
        .align_y(iced::Alignment::Center);

    let content = column![
        title,
        origin,
        body,
        row![category, Space::new().width(24), column![confidence, review].spacing(10)]
            .align_y(iced::Alignment::End),
        draft,
        actions,
    ]
    .spacing(14);

    container(scrollable(content).style(scrollable_style))
        .padding(24)
        .width(Length::Fixed(720.0))
        .max_height(680)
        .style(dialog_style)
        .into()
}

fn read_only(label: &'static str, value: String) -> Element<'static, Message> {
    let p = palette::current();
    row![
        text(label)
            .size(13)
            .color(p.text_secondary)
            .width(Length::Fixed(90.0)),
        text(value).size(14).color(p.text_primary),
    ]
    .spacing(8)
    .into()
}

/// Places `content` above `base`; clicks outside it send `on_blur`.
pub fn modal<'a>(
    base: Element<'a, Message>,
    content: Element<'a, Message>,
    on_blur: Message,
) -> Element<'a, Message> {
    stack![
        base,
        opaque(
            mouse_area(center(opaque(content)).style(backdrop_style)).on_press(on_blur)
        )
    ]
    .into()
}
