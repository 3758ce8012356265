use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{List, ListItem, ListState, Paragraph},
};

use crate::{
    library::Track,
    ui::{
        components::Spinner,
        util::get_active_track_icon,
        views::{highlight_style, pane_block},
    },
    util::colors,
};

pub struct TrackList<'a> {
    pub tracks: &'a [Track],
    pub query: &'a str,
    pub current: Option<usize>,
    pub is_playing: bool,
    pub is_loading: bool,
    pub is_editing: bool,
    pub focused: bool,
}

impl TrackList<'_> {
    pub fn render(&self, f: &mut Frame, area: Rect, list_state: &mut ListState) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(3), Constraint::Min(1)])
            .split(area);

        let search = Paragraph::new(if self.is_editing {
            format!("{}_", self.query)
        } else {
            self.query.to_string()
        })
        .block(pane_block("Search (/)", self.is_editing));
        f.render_widget(search, chunks[0]);

        let title = format!("Library ({})", self.tracks.len());
        let block = pane_block(&title, self.focused && !self.is_editing);
        let inner = block.inner(chunks[1]);
        f.render_widget(block, chunks[1]);

        if self.is_loading {
            let spinner = Spinner::default()
                .with_style(Style::default().fg(colors::PRIMARY))
                .with_label("Loading tracks...");
            f.render_widget(spinner, inner);
            return;
        }

        if self.tracks.is_empty() {
            let empty = if self.query.is_empty() {
                "No tracks"
            } else {
                "No tracks match the search"
            };
            f.render_widget(Paragraph::new(empty).style(Style::default().fg(colors::NEUTRAL)), inner);
            return;
        }

        let items: Vec<ListItem> = self
            .tracks
            .iter()
            .enumerate()
            .map(|(i, track)| {
                let is_current = Some(i) == self.current;
                let prefix = if is_current {
                    format!("{} ", get_active_track_icon(self.is_playing))
                } else {
                    "  ".to_string()
                };

                let line = Line::from(vec![
                    Span::raw(prefix),
                    Span::raw(track.title.as_str()),
                    Span::styled(" - ", Style::default().fg(colors::NEUTRAL)),
                    Span::raw(track.artist.as_str()),
                ]);

                let item = ListItem::new(line);
                if is_current {
                    item.style(
                        Style::default()
                            .fg(colors::SECONDARY)
                            .add_modifier(Modifier::BOLD),
                    )
                } else {
                    item
                }
            })
            .collect();

        let list = List::new(items)
            .highlight_style(highlight_style())
            .highlight_symbol("> ");

        f.render_stateful_widget(list, inner, list_state);
    }
}
