//! Main GUI application

use crate::app::Inspector;
use crate::formatter::{Report, SectionKind, ViewState};
use crate::gui::{clipboard, components, theme};
use crate::utils::config::AppSettings;
use crate::utils::links::open_external;
use iced::widget::{column, container, scrollable, text, Space};
use iced::{Application, Command, Element, Length, Theme};
use tracing::{debug, error, info};

pub struct TubelensApp {
    inspector: Result<Inspector, String>,
    initial_section: SectionKind,

    url_input: String,
    /// Outline the input after a failed lookup; the message itself is the result
    input_flagged: bool,
    status_message: String,

    report: Option<Report>,
    view_state: ViewState,

    /// Ticket of the lookup whose answer we are waiting for
    pending: Option<u64>,
    next_ticket: u64,
}

#[derive(Debug, Clone)]
pub enum Message {
    // Input events
    UrlInputChanged(String),
    FetchPressed,
    PasteFromClipboard,
    ClearUrlInput,

    // Lookup
    LookupCompleted { ticket: u64, report: Report },

    // Results
    ToggleSection(SectionKind),
    OpenLink(String),
}

impl TubelensApp {
    pub fn is_fetching(&self) -> bool {
        self.pending.is_some()
    }

    pub fn report(&self) -> Option<&Report> {
        self.report.as_ref()
    }

    pub fn view_state(&self) -> ViewState {
        self.view_state
    }

    fn start_lookup(&mut self) -> Command<Message> {
        let url = self.url_input.trim().to_string();
        if url.is_empty() || self.is_fetching() {
            return Command::none();
        }

        let ticket = self.next_ticket;
        self.next_ticket += 1;

        let inspector = match &self.inspector {
            Ok(inspector) => inspector.clone(),
            Err(message) => {
                self.report = Some(Report::Failure(message.clone()));
                self.view_state = ViewState::collapsed();
                return Command::none();
            }
        };

        self.pending = Some(ticket);
        self.report = None;
        self.input_flagged = false;
        self.status_message = "Fetching video information...".to_string();
        debug!("Lookup #{} started for {}", ticket, url);

        Command::perform(
            async move { inspector.inspect(&url).await },
            move |report| Message::LookupCompleted { ticket, report },
        )
    }

    fn finish_lookup(&mut self, ticket: u64, report: Report) {
        if self.pending != Some(ticket) {
            debug!("Dropping stale answer for lookup #{}", ticket);
            return;
        }
        self.pending = None;

        match &report {
            Report::Failure(_) => {
                self.status_message = "Lookup failed".to_string();
                self.input_flagged = true;
            }
            Report::Video(_) => {
                self.status_message = "Ready".to_string();
            }
        }
        self.view_state = ViewState::new(Some(self.initial_section)).fit_to(&report);
        self.report = Some(report);
    }
}

impl Application for TubelensApp {
    type Executor = iced::executor::Default;
    type Message = Message;
    type Theme = Theme;
    type Flags = AppSettings;

    fn new(settings: Self::Flags) -> (Self, Command<Message>) {
        let inspector = Inspector::from_settings(&settings).map_err(|e| {
            error!("Invalid settings: {}", e);
            e.to_string()
        });

        let app = Self {
            inspector,
            initial_section: settings.initial_section,
            url_input: String::new(),
            input_flagged: false,
            status_message: "Ready".to_string(),
            report: None,
            view_state: ViewState::new(Some(settings.initial_section)),
            pending: None,
            next_ticket: 0,
        };

        (app, Command::none())
    }

    fn title(&self) -> String {
        String::from("Tubelens - YouTube Video Info")
    }

    fn update(&mut self, message: Message) -> Command<Message> {
        match message {
            Message::UrlInputChanged(url) => {
                self.url_input = url;
                self.input_flagged = false;
                Command::none()
            }

            Message::FetchPressed => self.start_lookup(),

            Message::PasteFromClipboard => {
                match clipboard::paste_url() {
                    Ok(url) => {
                        self.url_input = url;
                        self.input_flagged = false;
                    }
                    Err(e) => self.status_message = e,
                }
                Command::none()
            }

            Message::ClearUrlInput => {
                self.url_input.clear();
                self.input_flagged = false;
                Command::none()
            }

            Message::LookupCompleted { ticket, report } => {
                self.finish_lookup(ticket, report);
                Command::none()
            }

            Message::ToggleSection(kind) => {
                self.view_state = self.view_state.toggle(kind);
                Command::none()
            }

            Message::OpenLink(link) => {
                match open_external(&link) {
                    Ok(()) => info!("Opened {}", link),
                    Err(e) => {
                        error!("{}", e);
                        self.status_message = e.to_string();
                    }
                }
                Command::none()
            }
        }
    }

    fn view(&self) -> Element<'_, Message> {
        let input = components::url_input(&self.url_input, self.is_fetching(), self.input_flagged);

        let results: Element<'_, Message> = match (&self.report, self.is_fetching()) {
            (_, true) => text("Loading...").size(16).style(theme::TEXT_MUTED).into(),
            (Some(report), false) => {
                scrollable(components::report_view(report, &self.view_state))
                    .height(Length::Fill)
                    .style(iced::theme::Scrollable::Custom(Box::new(theme::ResultsScrollable)))
                    .into()
            }
            (None, false) => text("Enter a video URL and press Fetch")
                .size(16)
                .style(theme::TEXT_MUTED)
                .into(),
        };

        let panel = container(
            column![
                text("Tubelens").size(28).style(theme::TEXT_PRIMARY),
                input,
                text(&self.status_message).size(13).style(theme::TEXT_MUTED),
                Space::with_height(8),
                results,
            ]
            .spacing(14)
            .padding(24),
        )
        .width(Length::Fill)
        .height(Length::Fill)
        .style(iced::theme::Container::Custom(Box::new(theme::Panel)));

        container(panel)
            .width(Length::Fill)
            .height(Length::Fill)
            .padding(20)
            .style(iced::theme::Container::Custom(Box::new(theme::Backdrop)))
            .into()
    }

    fn theme(&self) -> Self::Theme {
        Theme::Light
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::formatter::{Field, VideoReport};

    fn app() -> TubelensApp {
        TubelensApp::new(AppSettings::default()).0
    }

    fn video_report(id: &str) -> Report {
        Report::Video(VideoReport {
            general: vec![Field {
                label: "ID",
                value: id.to_string(),
            }],
            links: Vec::new(),
        })
    }

    #[test]
    fn fetch_is_ignored_for_blank_input() {
        let mut app = app();
        app.url_input = "   ".into();
        let _ = app.update(Message::FetchPressed);
        assert!(!app.is_fetching());
    }

    #[test]
    fn second_fetch_is_ignored_while_pending() {
        let mut app = app();
        app.url_input = "https://youtu.be/dQw4w9WgXcQ".into();
        let _ = app.update(Message::FetchPressed);
        assert_eq!(app.pending, Some(0));
        let _ = app.update(Message::FetchPressed);
        assert_eq!(app.pending, Some(0));
        assert_eq!(app.next_ticket, 1);
    }

    #[test]
    fn stale_answers_are_dropped() {
        let mut app = app();
        app.pending = Some(3);
        app.next_ticket = 4;

        let _ = app.update(Message::LookupCompleted {
            ticket: 2,
            report: video_report("old"),
        });
        assert!(app.report().is_none());
        assert!(app.is_fetching());

        let _ = app.update(Message::LookupCompleted {
            ticket: 3,
            report: video_report("new"),
        });
        assert!(!app.is_fetching());
        assert_eq!(app.report(), Some(&video_report("new")));
        assert!(app.view_state().is_expanded(SectionKind::GeneralInformation));
    }

    #[test]
    fn failure_is_reported_once_and_collapses() {
        let mut app = app();
        app.pending = Some(0);
        let _ = app.update(Message::LookupCompleted {
            ticket: 0,
            report: Report::Failure("Invalid video URL".into()),
        });
        assert!(app.input_flagged);
        assert_eq!(app.report(), Some(&Report::Failure("Invalid video URL".into())));
        assert_eq!(app.view_state().expanded(), None);
    }

    #[test]
    fn toggling_open_section_collapses_it() {
        let mut app = app();
        let _ = app.update(Message::ToggleSection(SectionKind::GeneralInformation));
        assert_eq!(app.view_state().expanded(), None);
        let _ = app.update(Message::ToggleSection(SectionKind::AudioUrls));
        assert_eq!(app.view_state().expanded(), Some(SectionKind::AudioUrls));
    }

    #[test]
    fn invalid_settings_surface_on_fetch() {
        let settings = AppSettings {
            api_endpoint: "ftp://nowhere".into(),
            ..Default::default()
        };
        let mut app = TubelensApp::new(settings).0;
        app.url_input = "https://youtu.be/dQw4w9WgXcQ".into();
        let _ = app.update(Message::FetchPressed);
        assert!(!app.is_fetching());
        assert!(matches!(app.report(), Some(Report::Failure(_))));
    }
}
