//! Review list: filter bar and email table.

use iced::widget::{Column, Space, button, column, container, pick_list, row, scrollable, text, toggler};
use iced::{Element, Length};
use triagedesk_core::{CategoryChoice, ClassifiedEmail};

use crate::message::{Message, ReviewMessage};
use crate::model::ReviewState;
use crate::style::widgets::{
    card_style, chip_style, page_style, palette, row_border_style, row_button_style,
    scrollable_style, secondary_button_style, table_header_style,
};

/// Relative column widths: sender, subject, category, confidence, review, date.
const COLUMNS: [u16; 6] = [3, 4, 3, 1, 1, 2];

/// Renders the review list screen.
pub fn view_email_table(state: &ReviewState) -> Element<'static, Message> {
    let p = palette::current();

    let visible = state.book.filtered(&state.filter);

    let header = row![
        column![
            text("E-mails classificados").size(22).color(p.text_primary),
            text(format!("{} de {} e-mails", visible.len(), state.book.len()))
                .size(13)
                .color(p.text_secondary),
        ]
        .spacing(2),
        Space::new().width(Length::Fill),
        view_filters(state),
    ]
    .align_y(iced::Alignment::Center);

    let body: Element<'static, Message> = if state.is_loading {
        placeholder("Carregando e-mails...")
    } else if visible.is_empty() {
        placeholder("Nenhum e-mail encontrado com os filtros atuais.")
    } else {
        let rows = visible
            .into_iter()
            .fold(Column::new(), |rows, email| rows.push(view_row(email)));
        column![
            view_table_header(),
            scrollable(rows).height(Length::Fill).style(scrollable_style),
        ]
        .into()
    };

    let table = container(body)
        .width(Length::Fill)
        .height(Length::Fill)
        .style(card_style);

    container(column![header, table].spacing(16).padding(24))
        .width(Length::Fill)
        .height(Length::Fill)
        .style(page_style)
        .into()
}

fn view_filters(state: &ReviewState) -> Element<'static, Message> {
    let p = palette::current();

    let category = pick_list(
        CategoryChoice::ALL,
        Some(state.filter.category_choice()),
        |choice| Message::Review(ReviewMessage::CategoryFilterChanged(choice)),
    )
    .text_size(14)
    .padding([8, 12])
    .width(Length::Fixed(220.0));

    let only_review = toggler(state.filter.only_review)
        .label("Somente com revisão humana")
        .on_toggle(|on| Message::Review(ReviewMessage::OnlyReviewToggled(on)))
        .text_size(14)
        .width(Length::Shrink);

    let refresh = button(text("\u{21BB} Atualizar").size(14))
        .padding([8, 14])
        .style(secondary_button_style)
        .on_press_maybe((!state.is_loading).then_some(Message::Review(ReviewMessage::Refresh)));

    row![
        text("Categoria").size(13).color(p.text_secondary),
        category,
        only_review,
        refresh,
    ]
    .spacing(12)
    .align_y(iced::Alignment::Center)
    .into()
}

fn view_table_header() -> Element<'static, Message> {
    let p = palette::current();
    let titles = ["Remetente", "Assunto", "Categoria", "Confiança", "Revisão", "Data"];

    let cells = titles.into_iter().zip(COLUMNS).fold(row![], |cells, (title, portion)| {
        cells.push(
            text(title)
                .size(12)
                .font(iced::Font {
                    weight: iced::font::Weight::Semibold,
                    ..Default::default()
                })
                .color(p.text_secondary)
                .width(Length::FillPortion(portion)),
        )
    });

    container(cells.spacing(12).padding([10, 16]))
        .width(Length::Fill)
        .style(table_header_style)
        .into()
}

fn view_row(email: &ClassifiedEmail) -> Element<'static, Message> {
    let p = palette::current();
    let cell = |value: String, portion: u16| {
        text(value)
            .size(13)
            .color(p.text_primary)
            .width(Length::FillPortion(portion))
    };

    let chip = container(
        container(text(email.category.label()).size(11))
            .padding([3, 10])
            .style(chip_style(p.tone(email.category.tone()))),
    )
    .width(Length::FillPortion(COLUMNS[2]));

    let cells = row![
        cell(email.from_email.clone(), COLUMNS[0]),
        cell(email.subject.clone(), COLUMNS[1]),
        chip,
        cell(email.confidence_label(), COLUMNS[3]),
        cell(email.review_label().to_string(), COLUMNS[4]),
        cell(email.created_display(), COLUMNS[5]),
    ]
    .spacing(12)
    .align_y(iced::Alignment::Center);

    // Records without an id cannot be updated, so they are not clickable.
    let open = email
        .id
        .map(|id| Message::Review(ReviewMessage::OpenEditor(id)));

    container(
        button(cells)
            .width(Length::Fill)
            .padding([10, 16])
            .style(row_button_style)
            .on_press_maybe(open),
    )
    .style(row_border_style)
    .into()
}

fn placeholder(message: &'static str) -> Element<'static, Message> {
    let p = palette::current();
    container(text(message).size(14).color(p.text_muted))
        .center(Length::Fill)
        .padding(40)
        .into()
}
