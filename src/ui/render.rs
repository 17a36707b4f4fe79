use ratatui::{
    Frame,
    layout::Alignment,
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, List, ListItem, Paragraph},
};

use crate::audio::{Backend, PlaybackStatus};
use crate::config::UiSettings;
use crate::player::Player;

use super::layout::{ButtonId, screen_layout};

fn button_label(id: ButtonId) -> &'static str {
    match id {
        ButtonId::Play => "Play",
        ButtonId::Pause => "Pause",
        ButtonId::Stop => "Stop",
        ButtonId::OpenFile => "Open File",
        ButtonId::OpenFolder => "Open Folder",
    }
}

fn button_style(id: ButtonId) -> Style {
    // Traffic-light colors for the transport controls.
    match id {
        ButtonId::Play => Style::default().fg(Color::Black).bg(Color::Green),
        ButtonId::Pause => Style::default().fg(Color::Black).bg(Color::Yellow),
        ButtonId::Stop => Style::default().fg(Color::Black).bg(Color::Red),
        ButtonId::OpenFile | ButtonId::OpenFolder => {
            Style::default().fg(Color::Black).bg(Color::Cyan)
        }
    }
}

fn status_text<B: Backend>(player: &Player<B>) -> String {
    let state = match player.status() {
        PlaybackStatus::Playing => "Playing",
        PlaybackStatus::Paused => "Paused",
        PlaybackStatus::Stopped => "Stopped",
    };

    match player.current_track() {
        Some(track) => format!("{state} • {}", track.display),
        None => format!("{state} • no track loaded"),
    }
}

/// Render the entire UI into the provided `frame`.
pub fn draw<B: Backend>(frame: &mut Frame, player: &Player<B>, ui_settings: &UiSettings) {
    let layout = screen_layout(frame.area());

    let header = Paragraph::new(ui_settings.header_text.as_str())
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" staccato ")
                .title_alignment(Alignment::Center),
        );
    frame.render_widget(header, layout.header);

    for (id, rect) in layout.buttons {
        let button = Paragraph::new(button_label(id))
            .alignment(Alignment::Center)
            .style(button_style(id))
            .block(Block::default().borders(Borders::ALL));
        frame.render_widget(button, rect);
    }

    let status = Paragraph::new(status_text(player)).block(Block::bordered().title(" status "));
    frame.render_widget(status, layout.status);

    let items: Vec<ListItem> = player
        .queue()
        .iter()
        .map(|t| ListItem::new(t.display.as_str()))
        .collect();
    let list = List::new(items)
        .block(Block::default().borders(Borders::ALL).title(" queue "))
        .highlight_style(Style::default().add_modifier(Modifier::REVERSED))
        .highlight_symbol("> ");
    let mut state = ratatui::widgets::ListState::default();
    state.select(
        player
            .current_index()
            .filter(|&i| i < player.queue().len()),
    );
    frame.render_stateful_widget(list, layout.queue, &mut state);
}
