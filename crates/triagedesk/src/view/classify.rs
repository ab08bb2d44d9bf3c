//! Classification form and result card.

use iced::widget::{Space, button, column, container, row, scrollable, text, text_editor, text_input};
use iced::{Element, Length};
use triagedesk_core::ClassifiedEmail;

use crate::message::{ClassifyMessage, Message};
use crate::model::ClassifyState;
use crate::style::widgets::{
    alert_style, body_box_style, card_style, chip_style, field_editor_style, field_input_style,
    page_style, palette, primary_button_style, scrollable_style,
};

/// Renders the classification screen.
pub fn view_classify(state: &ClassifyState) -> Element<'_, Message> {
    let p = palette::current();

    let from_input = labeled(
        "Remetente",
        text_input("cliente@example.com", &state.form.from_email)
            .on_input(|s| Message::Classify(ClassifyMessage::FromChanged(s)))
            .padding(10)
            .size(14)
            .style(field_input_style)
            .into(),
    );

    let subject_input = labeled(
        "Assunto",
        text_input("Assunto do e-mail", &state.form.subject)
            .on_input(|s| Message::Classify(ClassifyMessage::SubjectChanged(s)))
            .padding(10)
            .size(14)
            .style(field_input_style)
            .into(),
    );

    let body_input = labeled(
        "Corpo do e-mail",
        text_editor(&state.body_editor)
            .placeholder("Cole aqui o conteúdo do e-mail...")
            .on_action(|action| Message::Classify(ClassifyMessage::BodyEdited(action)))
            .height(Length::Fixed(180.0))
            .padding(10)
            .size(14)
            .style(field_editor_style)
            .into(),
    );

    let submit = if state.is_loading {
        button(text("Classificando...").size(14))
            .padding([10, 20])
            .style(primary_button_style)
    } else {
        button(text("Classificar").size(14))
            .padding([10, 20])
            .style(primary_button_style)
            .on_press(Message::Classify(ClassifyMessage::Submit))
    };

    let error: Element<'_, Message> = state.error.as_ref().map_or_else(
        || Space::new().height(0).into(),
        |message| {
            container(text(message.clone()).size(14))
                .padding([10, 14])
                .width(Length::Fill)
                .style(alert_style(p.danger))
                .into()
        },
    );

    let form = container(
        column![
            text("Classificar e-mail").size(22).color(p.text_primary),
            text("Envie um e-mail de teste para ver a categoria e a resposta sugerida.")
                .size(13)
                .color(p.text_secondary),
            Space::new().height(8),
            from_input,
            subject_input,
            body_input,
            error,
            submit,
        ]
        .spacing(12),
    )
    .padding(20)
    .width(Length::Fill)
    .style(card_style);

    let mut content = column![form].spacing(20).padding(24).max_width(860);
    if let Some(result) = &state.result {
        content = content.push(view_result(result));
    }

    container(
        scrollable(container(content).center_x(Length::Fill))
            .height(Length::Fill)
            .style(scrollable_style),
    )
    .width(Length::Fill)
    .height(Length::Fill)
    .style(page_style)
    .into()
}

/// Card describing a classification result.
fn view_result(email: &ClassifiedEmail) -> Element<'static, Message> {
    let p = palette::current();

    let chip = container(text(email.category.label()).size(12))
        .padding([4, 12])
        .style(chip_style(p.tone(email.category.tone())));

    let summary = row![
        fact("Categoria", chip.into()),
        fact(
            "Confiança",
            text(email.confidence_label()).size(14).color(p.text_primary).into(),
        ),
        fact(
            "Revisão humana",
            text(email.review_label()).size(14).color(p.text_primary).into(),
        ),
    ]
    .spacing(32);

    let reply = container(text(email.draft_reply.clone()).size(14).color(p.text_primary))
        .padding(12)
        .width(Length::Fill)
        .style(body_box_style);

    container(
        column![
            text("Resultado da classificação").size(18).color(p.text_primary),
            summary,
            text("Resposta sugerida").size(13).color(p.text_secondary),
            reply,
        ]
        .spacing(12),
    )
    .padding(20)
    .width(Length::Fill)
    .style(card_style)
    .into()
}

fn fact<'a>(label: &'static str, value: Element<'a, Message>) -> Element<'a, Message> {
    let p = palette::current();
    column![text(label).size(12).color(p.text_muted), value]
        .spacing(4)
        .into()
}

/// Field with a caption above it.
pub(super) fn labeled<'a>(label: &'static str, field: Element<'a, Message>) -> Element<'a, Message> {
    let p = palette::current();
    column![text(label).size(13).color(p.text_secondary), field]
        .spacing(6)
        .into()
}
