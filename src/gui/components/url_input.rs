//! URL input row: field, paste, clear and fetch

use crate::gui::app::Message;
use crate::gui::theme;
use iced::widget::{button, row, text, text_input, tooltip};
use iced::{Alignment, Element, Length};

/// Input row; `flagged` outlines the field in red.
///
/// Fetch is disabled while a lookup is in flight or the field is blank.
pub fn url_input(value: &str, is_fetching: bool, flagged: bool) -> Element<'static, Message> {
    let can_fetch = !is_fetching && !value.trim().is_empty();

    let field = text_input("Paste a YouTube URL here...", value)
        .on_input(Message::UrlInputChanged)
        .padding(15)
        .width(Length::Fill)
        .style(iced::theme::TextInput::Custom(Box::new(theme::InputStyle {
            error: flagged,
        })));
    let field = if can_fetch {
        field.on_submit(Message::FetchPressed)
    } else {
        field
    };

    let fetch_label = if is_fetching { "Fetching..." } else { "Fetch" };

    let input_row = row![
        field,
        tooltip(
            button(text("Paste").size(14))
                .on_press(Message::PasteFromClipboard)
                .padding([8, 12])
                .style(iced::theme::Button::Custom(Box::new(theme::IconButton))),
            "Paste from clipboard",
            tooltip::Position::Bottom,
        ),
        button(text("Clear").size(14))
            .on_press_maybe((!is_fetching).then_some(Message::ClearUrlInput))
            .padding([8, 12])
            .style(iced::theme::Button::Custom(Box::new(theme::IconButton))),
        button(text(fetch_label).size(16))
            .on_press_maybe(can_fetch.then_some(Message::FetchPressed))
            .padding([12, 24])
            .style(iced::theme::Button::Custom(Box::new(theme::PrimaryButton))),
    ]
    .spacing(12)
    .align_items(Alignment::Center);

    input_row.into()
}
