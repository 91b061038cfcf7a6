//! Result panel component
//!
//! Shown only after a successful extraction: thumbnail (when loaded),
//! title, size of the best stream variant, and a play control that hands
//! the variant URL to the system player.

use crate::api::ExtractionResult;
use crate::gui::app::Message;
use iced::widget::{button, column, container, image, text};
use iced::{Alignment, Element, Length};

pub fn result_panel(
    result: &ExtractionResult,
    thumbnail: Option<&image::Handle>,
) -> Element<'static, Message> {
    use crate::gui::theme;

    let mut panel = column![].spacing(18).align_items(Alignment::Center);

    if let Some(handle) = thumbnail {
        panel = panel.push(
            image(handle.clone())
                .width(Length::Fixed(470.0))
                .content_fit(iced::ContentFit::Contain),
        );
    }

    panel = panel.push(
        text(result.video_details.title.clone())
            .size(20)
            .style(iced::theme::Text::Color(theme::TEXT_PRIMARY)),
    );

    panel = panel.push(
        text(size_label(result))
            .size(16)
            .style(iced::theme::Text::Color(theme::TEXT_SECONDARY)),
    );

    if let Some(variant) = result.best_variant() {
        panel = panel.push(
            button(text(format!("Reproduzir ({})", variant.quality)).size(15))
                .on_press(Message::PlayPressed(variant.url.clone()))
                .padding([12, 28])
                .style(iced::theme::Button::Custom(Box::new(theme::PrimaryButton))),
        );
    }

    container(panel)
        .padding(32)
        .width(Length::Fill)
        .style(iced::theme::Container::Custom(Box::new(
            theme::ResultPanelContainer,
        )))
        .into()
}

/// Text of the size line.
///
/// The variant list may legitimately be empty; the line falls back to a
/// placeholder instead of indexing into nothing.
pub fn size_label(result: &ExtractionResult) -> String {
    match result.best_variant() {
        Some(variant) => format!("Tamanho: {}", variant.content_length),
        None => "Tamanho: —".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{StreamVariant, VideoDetails};

    fn result_with_variants(variants: Vec<StreamVariant>) -> ExtractionResult {
        ExtractionResult {
            video_details: VideoDetails {
                title: "T".to_string(),
                duration: "1:00".to_string(),
                thumbnail: String::new(),
            },
            streaming_details: variants,
        }
    }

    #[test]
    fn test_size_label_reads_first_variant() {
        let result = result_with_variants(vec![StreamVariant {
            url: "http://x/v.mp4".to_string(),
            content_length: "5MB".to_string(),
            quality: "720p".to_string(),
        }]);

        assert_eq!(size_label(&result), "Tamanho: 5MB");
    }

    #[test]
    fn test_size_label_falls_back_without_variants() {
        let result = result_with_variants(vec![]);
        assert_eq!(size_label(&result), "Tamanho: —");
    }

    #[test]
    fn test_panel_builds_without_variants() {
        let result = result_with_variants(vec![]);

        // Constructing the widget tree walks the whole render path; an
        // unguarded first-variant read would panic here.
        let _ = result_panel(&result, None);
    }
}
