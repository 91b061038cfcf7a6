//! URL input form component

use crate::gui::app::Message;
use iced::widget::{button, column, row, text, text_input, tooltip, Space};
use iced::{Alignment, Element, Length};

/// Create the URL form: input field, paste/clear helpers, and the submit
/// button. The button is disabled strictly while a request is in flight;
/// the input stays editable the whole time.
pub fn url_form(value: &str, is_fetching: bool) -> Element<'static, Message> {
    use crate::gui::theme;

    let input_row = row![
        text_input("Insira o link do vídeo aqui", value)
            .on_input(Message::UrlInputChanged)
            .padding(15)
            .width(Length::Fill)
            .style(iced::theme::TextInput::Custom(Box::new(theme::InputStyle))),
        tooltip(
            button(text("Colar").size(14))
                .on_press(Message::PasteFromClipboard)
                .padding([8, 12])
                .style(iced::theme::Button::Custom(Box::new(theme::IconButton))),
            "Colar da área de transferência",
            tooltip::Position::Bottom,
        ),
        button(text("Limpar").size(14))
            .on_press(Message::ClearUrlInput)
            .padding([8, 12])
            .style(iced::theme::Button::Custom(Box::new(theme::IconButton))),
    ]
    .spacing(12)
    .align_items(Alignment::Center);

    let submit_label = if is_fetching { "Carregando..." } else { "Extrair" };

    let submit_row = row![
        Space::with_width(Length::Fill),
        button(text(submit_label).size(16))
            .on_press_maybe(if is_fetching {
                None
            } else {
                Some(Message::ExtractPressed)
            })
            .padding([14, 36])
            .style(iced::theme::Button::Custom(Box::new(theme::PrimaryButton))),
        Space::with_width(Length::Fill),
    ]
    .align_items(Alignment::Center);

    column![input_row, submit_row].spacing(16).into()
}
