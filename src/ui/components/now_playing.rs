use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style, Stylize},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use crate::{
    library::Track,
    ui::{state::Notice, util::get_active_track_icon},
    util::colors,
};

/// Bottom bar: current track on the left, notice and volume on the right.
pub struct NowPlaying<'a> {
    track: Option<&'a Track>,
    is_playing: bool,
    volume: u8,
    notice: Option<&'a Notice>,
    prompt: Option<(&'a str, &'a str)>,
}

impl<'a> NowPlaying<'a> {
    pub fn new(track: Option<&'a Track>, is_playing: bool, volume: u8) -> Self {
        Self {
            track,
            is_playing,
            volume,
            notice: None,
            prompt: None,
        }
    }

    pub fn notice(mut self, notice: Option<&'a Notice>) -> Self {
        self.notice = notice;
        self
    }

    /// Replaces the notice with an input prompt.
    pub fn prompt(mut self, label: &'a str, input: &'a str) -> Self {
        self.prompt = Some((label, input));
        self
    }
}

impl Widget for NowPlaying<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Min(1), Constraint::Length(6)])
            .split(area);

        let track_line = match self.track {
            Some(track) => Line::from(vec![
                Span::styled(
                    format!("{} ", get_active_track_icon(self.is_playing)),
                    Style::default().fg(colors::PRIMARY),
                ),
                Span::styled(track.title.as_str(), Style::default().add_modifier(Modifier::BOLD)),
                Span::raw(" - "),
                Span::raw(track.artist.as_str()),
            ]),
            None => Line::from("No track".fg(colors::NEUTRAL)),
        };
        Paragraph::new(track_line).render(chunks[0], buf);

        let right = match (self.prompt, self.notice) {
            (Some((label, input)), _) => Line::from(vec![
                Span::styled(format!("{label}: "), Style::default().fg(colors::PRIMARY)),
                Span::raw(input),
                Span::raw("_"),
            ]),
            (None, Some(Notice::Info(text))) => Line::from(text.as_str().fg(colors::TEXT)),
            (None, Some(Notice::Error(text))) => Line::from(text.as_str().fg(colors::ERROR)),
            (None, None) => Line::default(),
        };
        Paragraph::new(right).render(chunks[1], buf);

        Paragraph::new(format!("{:>3}%", self.volume))
            .right_aligned()
            .render(chunks[2], buf);
    }
}
