//! Main GUI application
//!
//! Single view, view-local state only. The whole interaction is one state
//! machine around a single in-flight extraction request: idle/editing,
//! fetching, and result-ready (which coexists with idle).

use crate::api::{ExtractionClient, ExtractionResult};
use crate::config::AppConfig;
use crate::gui::clipboard;
use crate::gui::components::{result_panel, url_form};
use crate::gui::notify::{self, NotifyOptions, Toast, ToastKind};
use iced::widget::scrollable::RelativeOffset;
use iced::widget::{column, container, image, scrollable, text};
use iced::{Alignment, Application, Command, Element, Length, Subscription, Theme};
use std::time::Instant;
use tracing::{debug, warn};

/// Success notification text.
pub const MSG_SUCCESS: &str = "Vídeo extraído com sucesso!";
/// Error notification text. Every failure class collapses into this one.
pub const MSG_ERROR: &str = "Erro ao extrair o vídeo!";

/// Id of the content scrollable, target of the result-reveal scroll.
fn content_scroll_id() -> scrollable::Id {
    scrollable::Id::new("content")
}

/// Startup wiring handed to the view by the bootstrap.
#[derive(Debug, Clone, Default)]
pub struct AppFlags {
    pub config: AppConfig,
    pub notify: NotifyOptions,
}

/// Main application state
pub struct VidextApp {
    client: ExtractionClient,
    notify_options: NotifyOptions,

    // UI state
    url: String,
    is_fetching: bool,
    result: Option<ExtractionResult>,
    thumbnail: Option<image::Handle>,
    toasts: Vec<Toast>,

    // Generation tag of the newest request. Completions carrying an older
    // tag are stale and get dropped, so a slow response can never
    // overwrite the result of a request issued after it.
    request_seq: u64,
}

/// Application messages
#[derive(Debug, Clone)]
pub enum Message {
    // Input events
    UrlInputChanged(String),
    ExtractPressed,
    PasteFromClipboard,
    ClearUrlInput,

    // Request lifecycle, tagged with the request generation
    ExtractionCompleted(u64, Result<ExtractionResult, String>),
    ThumbnailLoaded(u64, Option<Vec<u8>>),

    // Result panel
    PlayPressed(String),

    // Toast expiry
    Tick,
}

impl VidextApp {
    /// Side effects of installing a fresh result: scroll the panel into
    /// view and, when the metadata carries a thumbnail URL, fetch its
    /// bytes. The reveal command is built here and nowhere else; the sole
    /// caller is the success arm of `ExtractionCompleted`, so it cannot
    /// fire on mount or on a bare fetching-flag change.
    fn result_arrival_commands(&self, seq: u64, thumbnail_url: String) -> Command<Message> {
        let mut commands = vec![scrollable::snap_to(content_scroll_id(), RelativeOffset::END)];

        if !thumbnail_url.is_empty() {
            let client = self.client.clone();
            commands.push(Command::perform(
                async move { client.fetch_thumbnail(&thumbnail_url).await },
                move |bytes| Message::ThumbnailLoaded(seq, bytes),
            ));
        }

        Command::batch(commands)
    }
}

impl Application for VidextApp {
    type Executor = iced::executor::Default;
    type Message = Message;
    type Theme = Theme;
    type Flags = AppFlags;

    fn new(flags: AppFlags) -> (Self, Command<Message>) {
        let client =
            ExtractionClient::new(&flags.config).expect("Failed to build extraction client");

        let app = Self {
            client,
            notify_options: flags.notify,
            url: String::new(),
            is_fetching: false,
            result: None,
            thumbnail: None,
            toasts: Vec::new(),
            request_seq: 0,
        };

        (app, Command::none())
    }

    fn title(&self) -> String {
        String::from("Vidext - Extrator de Vídeos")
    }

    fn update(&mut self, message: Message) -> Command<Message> {
        match message {
            Message::UrlInputChanged(url) => {
                self.url = url;
                Command::none()
            }

            Message::PasteFromClipboard => {
                match clipboard::get_clipboard_content() {
                    Ok(content) => self.url = content,
                    Err(e) => warn!("clipboard paste failed: {}", e),
                }
                Command::none()
            }

            Message::ClearUrlInput => {
                self.url.clear();
                Command::none()
            }

            Message::ExtractPressed => {
                // The button is disabled while fetching, but the handler
                // guards on its own so a bypassed control still cannot put
                // two requests in flight.
                if self.is_fetching {
                    return Command::none();
                }

                self.result = None;
                self.thumbnail = None;
                self.is_fetching = true;
                self.request_seq += 1;

                let seq = self.request_seq;
                let client = self.client.clone();
                let url = self.url.clone();

                Command::perform(
                    async move { client.extract(&url).await.map_err(|e| e.to_string()) },
                    move |result| Message::ExtractionCompleted(seq, result),
                )
            }

            Message::ExtractionCompleted(seq, result) => {
                if seq != self.request_seq {
                    debug!(seq, current = self.request_seq, "dropping stale completion");
                    return Command::none();
                }

                self.is_fetching = false;

                match result {
                    Ok(extraction) => {
                        self.toasts.push(Toast::new(
                            ToastKind::Success,
                            MSG_SUCCESS,
                            &self.notify_options,
                        ));

                        let thumbnail_url = extraction.video_details.thumbnail.clone();
                        self.result = Some(extraction);

                        self.result_arrival_commands(seq, thumbnail_url)
                    }
                    Err(e) => {
                        warn!("extraction failed: {}", e);
                        self.result = None;
                        self.toasts.push(Toast::new(
                            ToastKind::Error,
                            MSG_ERROR,
                            &self.notify_options,
                        ));
                        Command::none()
                    }
                }
            }

            Message::ThumbnailLoaded(seq, bytes) => {
                if seq == self.request_seq {
                    self.thumbnail = bytes.map(image::Handle::from_memory);
                }
                Command::none()
            }

            Message::PlayPressed(url) => {
                if let Err(e) = open::that(&url) {
                    warn!("failed to open stream in system player: {}", e);
                }
                Command::none()
            }

            Message::Tick => {
                notify::prune_expired(&mut self.toasts, Instant::now());
                Command::none()
            }
        }
    }

    fn view(&self) -> Element<'_, Message> {
        use crate::gui::theme;

        let mut content = column![
            text("Maneira simples e sem anúncios para baixar áudio de vídeos do YouTube!")
                .size(28)
                .style(iced::theme::Text::Color(theme::TEXT_PRIMARY)),
            url_form(&self.url, self.is_fetching),
        ]
        .spacing(28)
        .max_width(700)
        .align_items(Alignment::Center);

        if let Some(result) = &self.result {
            content = content.push(result_panel(result, self.thumbnail.as_ref()));
        }

        let scroll = scrollable(
            container(content)
                .width(Length::Fill)
                .center_x()
                .padding([40, 24]),
        )
        .id(content_scroll_id())
        .width(Length::Fill)
        .height(Length::Fill)
        .style(iced::theme::Scrollable::Custom(Box::new(
            theme::ScrollableStyle,
        )));

        let layout = column![
            notify::toast_stack(&self.toasts, &self.notify_options),
            scroll,
        ];

        container(layout)
            .width(Length::Fill)
            .height(Length::Fill)
            .style(iced::theme::Container::Custom(Box::new(
                theme::RootContainer,
            )))
            .into()
    }

    fn subscription(&self) -> Subscription<Message> {
        // The tick only needs to run while a toast is waiting to expire.
        if self.toasts.is_empty() {
            Subscription::none()
        } else {
            iced::time::every(std::time::Duration::from_millis(250)).map(|_| Message::Tick)
        }
    }

    fn theme(&self) -> Self::Theme {
        Theme::Dark
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{StreamVariant, VideoDetails};

    fn sample_result() -> ExtractionResult {
        ExtractionResult {
            video_details: VideoDetails {
                title: "T".to_string(),
                duration: "1:00".to_string(),
                thumbnail: String::new(),
            },
            streaming_details: vec![StreamVariant {
                url: "http://x/v.mp4".to_string(),
                content_length: "5MB".to_string(),
                quality: "720p".to_string(),
            }],
        }
    }

    fn new_app() -> VidextApp {
        let (app, _) = VidextApp::new(AppFlags::default());
        app
    }

    #[test]
    fn test_submit_clears_previous_result_and_sets_fetching() {
        let mut app = new_app();
        app.result = Some(sample_result());

        let _ = app.update(Message::ExtractPressed);

        assert!(app.result.is_none());
        assert!(app.is_fetching);
        assert_eq!(app.request_seq, 1);
    }

    #[test]
    fn test_submit_while_fetching_is_ignored() {
        let mut app = new_app();

        let _ = app.update(Message::ExtractPressed);
        let _ = app.update(Message::ExtractPressed);

        // No second generation was started.
        assert_eq!(app.request_seq, 1);
        assert!(app.is_fetching);
    }

    #[test]
    fn test_successful_completion_stores_result_and_notifies() {
        let mut app = new_app();
        let _ = app.update(Message::ExtractPressed);

        let _ = app.update(Message::ExtractionCompleted(1, Ok(sample_result())));

        assert!(!app.is_fetching);
        let result = app.result.as_ref().expect("result stored");
        assert_eq!(result.video_details.title, "T");
        assert_eq!(app.toasts.len(), 1);
        assert_eq!(app.toasts[0].kind, ToastKind::Success);
        assert_eq!(app.toasts[0].message, MSG_SUCCESS);
    }

    #[test]
    fn test_failed_completion_clears_result_and_notifies() {
        let mut app = new_app();
        app.result = Some(sample_result());
        let _ = app.update(Message::ExtractPressed);

        let _ = app.update(Message::ExtractionCompleted(1, Err("boom".to_string())));

        assert!(!app.is_fetching);
        assert!(app.result.is_none());
        assert_eq!(app.toasts.len(), 1);
        assert_eq!(app.toasts[0].kind, ToastKind::Error);
        assert_eq!(app.toasts[0].message, MSG_ERROR);
    }

    #[test]
    fn test_stale_completion_is_dropped() {
        let mut app = new_app();

        // Generation 1 completes, a new request starts, then a late
        // duplicate of generation 1 arrives.
        let _ = app.update(Message::ExtractPressed);
        let _ = app.update(Message::ExtractionCompleted(1, Ok(sample_result())));
        let _ = app.update(Message::ExtractPressed);
        assert_eq!(app.request_seq, 2);

        let mut stale = sample_result();
        stale.video_details.title = "stale".to_string();
        let _ = app.update(Message::ExtractionCompleted(1, Ok(stale)));

        // Still waiting on generation 2; the stale payload changed nothing.
        assert!(app.is_fetching);
        assert!(app.result.is_none());
    }

    #[test]
    fn test_stale_thumbnail_is_dropped() {
        let mut app = new_app();
        let _ = app.update(Message::ExtractPressed);

        let _ = app.update(Message::ThumbnailLoaded(0, Some(vec![1, 2, 3])));

        assert!(app.thumbnail.is_none());
    }

    #[test]
    fn test_input_replaces_url_verbatim() {
        let mut app = new_app();

        let _ = app.update(Message::UrlInputChanged("not a url at all".to_string()));
        assert_eq!(app.url, "not a url at all");

        let _ = app.update(Message::ClearUrlInput);
        assert!(app.url.is_empty());
    }

    #[test]
    fn test_empty_variants_result_is_renderable() {
        let mut app = new_app();
        let _ = app.update(Message::ExtractPressed);

        let mut result = sample_result();
        result.streaming_details.clear();
        let _ = app.update(Message::ExtractionCompleted(1, Ok(result)));

        let stored = app.result.as_ref().expect("result stored");
        assert!(stored.best_variant().is_none());

        // Building the full view walks the result panel's render path; an
        // unguarded first-variant read would panic here.
        let _ = app.view();
    }

    // `Command` is opaque in this iced version, so the reveal-only-on-
    // success invariant is enforced structurally instead: the snap-to
    // command is built only inside `result_arrival_commands`, whose sole
    // caller is the Ok arm of `ExtractionCompleted`.
    #[test]
    fn test_view_builds_after_success_and_failure() {
        let mut app = new_app();

        let _ = app.update(Message::ExtractPressed);
        let _ = app.update(Message::ExtractionCompleted(1, Ok(sample_result())));
        let _ = app.view();

        let _ = app.update(Message::ExtractPressed);
        let _ = app.update(Message::ExtractionCompleted(2, Err("boom".to_string())));
        let _ = app.view();
    }
}
