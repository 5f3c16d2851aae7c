//! Collapsible result sections

use crate::formatter::{LinkEntry, Report, SectionKind, VideoReport, ViewState};
use crate::gui::app::Message;
use crate::gui::theme;
use iced::widget::{button, row, text, Column};
use iced::{Element, Length};

/// Error line for failures, otherwise one header per section with only
/// the expanded one showing its body
pub fn report_view(report: &Report, view: &ViewState) -> Element<'static, Message> {
    match report {
        Report::Failure(message) => text(format!("Error: {}", message))
            .size(16)
            .style(theme::DANGER)
            .into(),
        Report::Video(video) => sections(video, view),
    }
}

fn sections(video: &VideoReport, view: &ViewState) -> Element<'static, Message> {
    let general = SectionKind::GeneralInformation;
    let mut list = Column::new()
        .spacing(8)
        .width(Length::Fill)
        .push(header(general, view.is_expanded(general)));
    if view.is_expanded(general) {
        list = list.push(general_body(video));
    }

    for section in &video.links {
        let expanded = view.is_expanded(section.kind);
        list = list.push(header(section.kind, expanded));
        if expanded {
            list = list.push(links_body(&section.entries));
        }
    }

    list.into()
}

fn header(kind: SectionKind, expanded: bool) -> Element<'static, Message> {
    let marker = if expanded { "v" } else { ">" };
    let style = if expanded {
        theme::SectionHeader::Expanded
    } else {
        theme::SectionHeader::Collapsed
    };

    button(row![text(marker).size(14), text(kind.title()).size(16)].spacing(10))
        .on_press(Message::ToggleSection(kind))
        .width(Length::Fill)
        .padding([10, 14])
        .style(iced::theme::Button::Custom(Box::new(style)))
        .into()
}

fn general_body(video: &VideoReport) -> Element<'static, Message> {
    let rows = video.general.iter().map(|field| -> Element<'static, Message> {
        row![
            text(format!("{}:", field.label))
                .size(14)
                .style(theme::TEXT_MUTED)
                .width(Length::Fixed(140.0)),
            text(field.value.clone()).size(14).style(theme::TEXT_PRIMARY),
        ]
        .spacing(8)
        .into()
    });

    Column::with_children(rows).spacing(6).padding([4, 14]).into()
}

fn links_body(entries: &[LinkEntry]) -> Element<'static, Message> {
    let rows = entries.iter().map(|entry| -> Element<'static, Message> {
        match &entry.url {
            Some(url) => button(text(entry.label.clone()).size(14))
                .on_press(Message::OpenLink(url.clone()))
                .padding([4, 6])
                .style(iced::theme::Button::Custom(Box::new(theme::LinkButton)))
                .into(),
            None => text(entry.label.clone())
                .size(14)
                .style(theme::TEXT_MUTED)
                .into(),
        }
    });

    Column::with_children(rows).spacing(2).padding([4, 14]).into()
}
