//! Settings view.

use iced::widget::{Space, button, column, container, row, scrollable, text, text_input, toggler};
use iced::{Element, Length};

use crate::message::{Message, SettingsMessage, View};
use crate::model::{API_URL_ENV, ApiHealth, SettingsSection, SettingsState};
use crate::style::widgets::palette::{self, ThemeMode};
use crate::style::widgets::{
    alert_style, card_style, field_input_style, page_style, primary_button_style,
    scrollable_style, secondary_button_style,
};

/// Renders the settings view.
pub fn view_settings(
    state: &SettingsState,
    active_url: &str,
    health: ApiHealth,
    theme_mode: ThemeMode,
) -> Element<'static, Message> {
    let p = palette::current();

    let title = text("Configurações").size(28).color(p.text_primary);

    let tabs = row![
        section_tab("Conexão", SettingsSection::Connection, state.selected_section),
        section_tab("Aparência", SettingsSection::Appearance, state.selected_section),
        section_tab("Sobre", SettingsSection::About, state.selected_section),
    ]
    .spacing(4);

    let content: Element<'static, Message> = match state.selected_section {
        SettingsSection::Connection => view_connection_section(state, active_url, health),
        SettingsSection::Appearance => view_appearance_section(theme_mode),
        SettingsSection::About => view_about_section(),
    };

    let back_btn = button(text("Voltar").size(14))
        .padding([10, 20])
        .style(secondary_button_style)
        .on_press(Message::NavigateTo(View::Classify));

    let layout = column![
        title,
        Space::new().height(Length::Fixed(16.0)),
        tabs,
        Space::new().height(Length::Fixed(20.0)),
        container(content).padding(20).width(Length::Fill).style(card_style),
        Space::new().height(Length::Fixed(20.0)),
        back_btn,
    ]
    .spacing(8)
    .padding(24)
    .max_width(860);

    container(
        scrollable(container(layout).center_x(Length::Fill))
            .height(Length::Fill)
            .style(scrollable_style),
    )
    .width(Length::Fill)
    .height(Length::Fill)
    .style(page_style)
    .into()
}

fn section_tab(
    label: &'static str,
    section: SettingsSection,
    current: SettingsSection,
) -> Element<'static, Message> {
    let btn = button(text(label).size(14)).padding([8, 16]);
    let btn = if section == current {
        btn.style(primary_button_style)
    } else {
        btn.style(secondary_button_style)
    };
    btn.on_press(Message::Settings(SettingsMessage::SelectSection(section)))
        .into()
}

/// Service address and reachability.
fn view_connection_section(
    state: &SettingsState,
    active_url: &str,
    health: ApiHealth,
) -> Element<'static, Message> {
    let p = palette::current();

    let url_input = text_input("http://localhost:8000", &state.api_url_input)
        .on_input(|s| Message::Settings(SettingsMessage::ApiUrlChanged(s)))
        .on_submit(Message::Settings(SettingsMessage::ApplyApiUrl))
        .padding(10)
        .size(14)
        .style(field_input_style)
        .width(Length::Fill);

    let apply = button(text("Aplicar").size(14))
        .padding([10, 20])
        .style(primary_button_style)
        .on_press(Message::Settings(SettingsMessage::ApplyApiUrl));

    let check = button(text("Testar conexão").size(14))
        .padding([10, 20])
        .style(secondary_button_style)
        .on_press(Message::Settings(SettingsMessage::CheckHealth));

    let error: Element<'static, Message> = state.api_url_error.as_ref().map_or_else(
        || Space::new().height(0).into(),
        |message| {
            container(text(message.clone()).size(13))
                .padding([8, 12])
                .width(Length::Fill)
                .style(alert_style(p.danger))
                .into()
        },
    );

    column![
        text("Conexão com a API").size(20).color(p.text_primary),
        Space::new().height(Length::Fixed(12.0)),
        settings_row("Endereço atual", active_url),
        settings_row("Status", health.label()),
        Space::new().height(Length::Fixed(12.0)),
        row![url_input, apply, check]
            .spacing(12)
            .align_y(iced::Alignment::Center),
        error,
        text(format!("A variável de ambiente {API_URL_ENV} substitui o endereço salvo ao iniciar."))
            .size(12)
            .color(p.text_muted),
    ]
    .spacing(8)
    .into()
}

/// Appearance settings section with theme toggle.
fn view_appearance_section(theme_mode: ThemeMode) -> Element<'static, Message> {
    let p = palette::current();
    let is_dark = theme_mode == ThemeMode::Dark;

    let theme_toggle = row![
        text("Tema")
            .size(14)
            .color(p.text_secondary)
            .width(Length::Fixed(120.0)),
        toggler(is_dark)
            .label(if is_dark { "Escuro" } else { "Claro" })
            .on_toggle(|_| Message::Settings(SettingsMessage::ToggleTheme))
            .text_size(14)
            .width(Length::Shrink),
    ]
    .spacing(16)
    .align_y(iced::Alignment::Center);

    column![
        text("Aparência").size(20).color(p.text_primary),
        Space::new().height(Length::Fixed(16.0)),
        theme_toggle,
    ]
    .spacing(4)
    .into()
}

/// About section.
fn view_about_section() -> Element<'static, Message> {
    let p = palette::current();

    column![
        text("Sobre").size(20).color(p.text_primary),
        Space::new().height(Length::Fixed(12.0)),
        text(concat!("Versão ", env!("CARGO_PKG_VERSION")))
            .size(14)
            .color(p.text_secondary),
        Space::new().height(Length::Fixed(8.0)),
        text("Painel para revisar e corrigir e-mails classificados automaticamente.")
            .size(14)
            .color(p.text_secondary),
        Space::new().height(Length::Fixed(16.0)),
        text("Atalhos").size(14).color(p.text_primary),
        settings_row("Ctrl+1 / Ctrl+2", "Alternar entre as abas"),
        settings_row("Ctrl+Enter", "Classificar ou salvar alterações"),
        settings_row("F5", "Recarregar a lista"),
        settings_row("Esc", "Fechar o editor"),
        settings_row("Ctrl+,", "Abrir configurações"),
    ]
    .spacing(4)
    .into()
}

/// Creates a settings row with label and value.
fn settings_row(label: &str, value: &str) -> Element<'static, Message> {
    let p = palette::current();

    row![
        text(format!("{label}:"))
            .size(14)
            .color(p.text_secondary)
            .width(Length::Fixed(160.0)),
        text(value.to_string()).size(14).color(p.text_primary),
    ]
    .spacing(8)
    .into()
}
