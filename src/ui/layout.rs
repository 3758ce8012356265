use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
};

use crate::{
    audio::CursorState,
    ui::{
        app::App,
        components::NowPlaying,
        state::{InputMode, Pane},
        views::{playlist_detail, playlists, track_detail, track_list::TrackList},
    },
    util::colors,
};

pub struct AppLayout<'a> {
    pub app: &'a mut App,
}

impl<'a> AppLayout<'a> {
    pub fn new(app: &'a mut App) -> Self {
        Self { app }
    }

    pub fn render(self, f: &mut Frame, area: Rect) {
        let App { session, state, .. } = self.app;

        f.buffer_mut()
            .set_style(area, Style::new().bg(colors::BACKGROUND).fg(colors::TEXT));

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(1), Constraint::Length(1)])
            .split(area);

        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
            .split(chunks[0]);

        let side = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(8),
                Constraint::Percentage(40),
                Constraint::Min(3),
            ])
            .split(columns[1]);

        let current = match session.cursor() {
            CursorState::Active(index) => Some(index),
            CursorState::Inactive => None,
        };
        let is_playing = session.player().is_playing();

        TrackList {
            tracks: session.view(),
            query: if state.mode == InputMode::Search {
                state.input.as_str()
            } else {
                session.query()
            },
            current,
            is_playing,
            is_loading: state.is_loading,
            is_editing: state.mode == InputMode::Search,
            focused: state.pane == Pane::Library,
        }
        .render(f, columns[0], &mut state.library);

        track_detail::render(f, side[0], session.current_track());

        let names = session.playlist_names();
        let summary: Vec<(String, usize)> = names
            .iter()
            .map(|name| (name.clone(), session.playlist_tracks(name).len()))
            .collect();
        playlists::render(
            f,
            side[1],
            &summary,
            state.pane == Pane::Playlists,
            &mut state.playlists,
        );

        let selected = state.selected_playlist(&names);
        let tracks = selected.map(|name| session.playlist_tracks(name)).unwrap_or_default();
        playlist_detail::render(
            f,
            side[2],
            selected,
            tracks,
            state.pane == Pane::PlaylistTracks,
            &mut state.playlist_tracks,
        );

        let player = session.player();
        let volume = if player.is_muted() { 0 } else { player.volume() };
        let mut bar = NowPlaying::new(state.now_playing.as_ref(), is_playing, volume)
            .notice(state.notice.as_ref());
        if state.mode == InputMode::NewPlaylist {
            bar = bar.prompt("New playlist", &state.input);
        }
        f.render_widget(bar, chunks[1]);
    }
}
