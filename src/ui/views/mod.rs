//! Panes of the main screen. Each one is a pure projection of session and
//! UI state.

pub mod playlist_detail;
pub mod playlists;
pub mod track_detail;
pub mod track_list;

use ratatui::{
    style::{Modifier, Style},
    widgets::{Block, BorderType, Borders},
};

use crate::util::colors;

pub(crate) fn pane_block(title: &str, focused: bool) -> Block<'_> {
    let border = if focused {
        Style::default().fg(colors::PRIMARY)
    } else {
        Style::default().fg(colors::NEUTRAL)
    };
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(border)
        .title(title)
}

pub(crate) fn highlight_style() -> Style {
    Style::default()
        .fg(colors::PRIMARY)
        .add_modifier(Modifier::BOLD)
}
