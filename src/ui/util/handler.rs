use tracing::{debug, warn};

use crate::{
    audio::CursorState,
    error::LibraryError,
    event::events::Event,
    ui::{
        app::App,
        input::InputHandler,
        message::AppMessage,
        state::{InputMode, Pane},
        tui::{TerminalEvent, Tui},
        util::{clamp_selection, select_next, select_previous},
    },
};

pub struct EventHandler;

impl EventHandler {
    pub async fn handle_events(app: &mut App, tui: &mut Tui) -> color_eyre::Result<()> {
        if let Some(evt) = tui.next().await {
            Self::handle_terminal_event(app, evt, tui)?;
        }

        while let Ok(evt) = app.event_rx.try_recv() {
            Self::handle_app_event(app, evt);
        }

        Ok(())
    }

    fn handle_terminal_event(
        app: &mut App,
        evt: TerminalEvent,
        tui: &mut Tui,
    ) -> color_eyre::Result<()> {
        match evt {
            TerminalEvent::Init => app.fetch_catalog(),
            TerminalEvent::FocusGained => {
                app.has_focus = true;
                tui.clear()?;
            }
            TerminalEvent::FocusLost => app.has_focus = false,
            TerminalEvent::Key(key) => {
                if let Some(msg) = InputHandler::handle_key(key, &app.state) {
                    Self::handle_message(app, msg);
                }
            }
            TerminalEvent::Paste(text) if app.state.mode != InputMode::Normal => {
                Self::handle_message(app, AppMessage::Paste(text));
            }
            _ => {}
        }
        Ok(())
    }

    pub fn handle_app_event(app: &mut App, evt: Event) {
        match evt {
            Event::CatalogFetched(result) => {
                app.state.is_loading = false;
                let loaded = app.session.load_catalog(result);
                if let Some(count) = report(app, loaded) {
                    app.state.info(format!("Loaded {count} tracks"));
                }
                clamp_selection(&mut app.state.library, app.session.view().len());
            }
            Event::TrackStarted(track, generation) => {
                if !app.session.is_current_playback(generation) {
                    debug!(generation, "stale_track_start_ignored");
                    return;
                }
                debug!(title = track.title.as_str(), "track_started");
                app.state.now_playing = Some(track);
            }
            Event::TrackEnded(generation) => {
                if !app.session.is_current_playback(generation) {
                    return;
                }
                app.state.now_playing = None;
                let advanced = app.session.on_track_ended(generation);
                report(app, advanced);
                Self::follow_cursor(app);
            }
            Event::PlaybackFailed(reason, generation) => {
                if !app.session.is_current_playback(generation) {
                    debug!(generation, "stale_playback_failure_ignored");
                    return;
                }
                app.state.now_playing = None;
                report::<()>(app, Err(LibraryError::PlaybackFailure(reason)));
            }
        }
    }

    pub fn handle_message(app: &mut App, msg: AppMessage) {
        match msg {
            AppMessage::Quit => app.should_quit = true,

            AppMessage::Activate => Self::activate(app),
            AppMessage::NextTrack => {
                let result = app.session.next().and_then(|i| app.session.play(i).map(|_| ()));
                report(app, result);
                Self::follow_cursor(app);
            }
            AppMessage::PreviousTrack => {
                let result = app
                    .session
                    .previous()
                    .and_then(|i| app.session.play(i).map(|_| ()));
                report(app, result);
                Self::follow_cursor(app);
            }
            AppMessage::TogglePlayPause => app.session.toggle_pause(),
            AppMessage::VolumeUp => app.session.player().volume_up(app.config.audio.volume_step),
            AppMessage::VolumeDown => app
                .session
                .player()
                .volume_down(app.config.audio.volume_step),
            AppMessage::ToggleMute => app.session.player().toggle_mute(),

            AppMessage::NextPane => app.state.pane = app.state.pane.next(),
            AppMessage::PreviousPane => app.state.pane = app.state.pane.prev(),
            AppMessage::MoveDown | AppMessage::MoveUp | AppMessage::MoveTop | AppMessage::MoveBottom => {
                Self::move_selection(app, msg)
            }

            AppMessage::StartSearch => {
                app.state.mode = InputMode::Search;
                app.state.pane = Pane::Library;
                app.state.input = app.session.query().to_string();
            }
            AppMessage::ClearSearch => {
                if !app.session.query().is_empty() {
                    Self::apply_search(app, String::new());
                }
            }
            AppMessage::StartNewPlaylist => {
                app.state.mode = InputMode::NewPlaylist;
                app.state.input.clear();
            }
            AppMessage::Input(c) => {
                app.state.input.push(c);
                Self::on_input_changed(app);
            }
            AppMessage::Paste(text) => {
                app.state.input.extend(text.chars().filter(|c| !c.is_control()));
                Self::on_input_changed(app);
            }
            AppMessage::Backspace => {
                app.state.input.pop();
                Self::on_input_changed(app);
            }
            AppMessage::Submit => Self::submit(app),
            AppMessage::Cancel => {
                if app.state.mode == InputMode::Search {
                    Self::apply_search(app, String::new());
                }
                app.state.mode = InputMode::Normal;
                app.state.input.clear();
            }

            AppMessage::AddToPlaylist => Self::add_to_playlist(app),
            AppMessage::RemoveFromPlaylist => Self::remove_from_playlist(app),
        }
    }

    fn activate(app: &mut App) {
        match app.state.pane {
            Pane::Library => {
                let Some(index) = app.state.library.selected() else {
                    return;
                };
                let played = app.session.play(index).map(|_| ());
                report(app, played);
            }
            Pane::Playlists => {
                if app.state.playlists.selected().is_some() {
                    app.state.pane = Pane::PlaylistTracks;
                    app.state.playlist_tracks.select(Some(0));
                }
            }
            Pane::PlaylistTracks => {
                let names = app.session.playlist_names();
                let Some(name) = app.state.selected_playlist(&names).map(str::to_string) else {
                    return;
                };
                let Some(index) = app.state.playlist_tracks.selected() else {
                    return;
                };
                let played = app.session.play_from_playlist(&name, index);
                report(app, played);
                Self::follow_cursor(app);
            }
        }
    }

    fn move_selection(app: &mut App, msg: AppMessage) {
        let names = app.session.playlist_names();
        let (list, len) = match app.state.pane {
            Pane::Library => (&mut app.state.library, app.session.view().len()),
            Pane::Playlists => (&mut app.state.playlists, names.len()),
            Pane::PlaylistTracks => {
                let len = app
                    .state
                    .selected_playlist(&names)
                    .map_or(0, |name| app.session.playlist_tracks(name).len());
                (&mut app.state.playlist_tracks, len)
            }
        };

        match msg {
            AppMessage::MoveDown => select_next(list, len),
            AppMessage::MoveUp => select_previous(list, len),
            AppMessage::MoveTop if len > 0 => list.select(Some(0)),
            AppMessage::MoveBottom if len > 0 => list.select(Some(len - 1)),
            _ => {}
        }

        if app.state.pane == Pane::Playlists {
            app.state.playlist_tracks.select(Some(0));
        }
    }

    fn on_input_changed(app: &mut App) {
        if app.state.mode == InputMode::Search {
            let query = app.state.input.clone();
            Self::apply_search(app, query);
        }
    }

    fn apply_search(app: &mut App, query: String) {
        app.session.search(&query);
        app.state.library.select(None);
        clamp_selection(&mut app.state.library, app.session.view().len());
    }

    fn submit(app: &mut App) {
        match app.state.mode {
            InputMode::Search => {}
            InputMode::NewPlaylist => {
                let name = app.state.input.trim().to_string();
                let created = app.session.create_playlist(&name);
                // Stay in the prompt so the name can be fixed.
                if report(app, created).is_none() {
                    return;
                }

                app.state.info(format!("Created playlist \"{name}\""));
                let index = app.session.playlist_names().iter().position(|n| *n == name);
                app.state.playlists.select(index);
                app.state.playlist_tracks.select(None);
            }
            InputMode::Normal => return,
        }
        app.state.mode = InputMode::Normal;
        app.state.input.clear();
    }

    fn add_to_playlist(app: &mut App) {
        let names = app.session.playlist_names();
        let Some(name) = app.state.selected_playlist(&names).map(str::to_string) else {
            app.state.error("Select a playlist first");
            return;
        };
        let Some(index) = app.state.library.selected() else {
            return;
        };

        let added = app
            .session
            .add_to_playlist(&name, index)
            .map(|track| track.title.clone());
        if let Some(title) = report(app, added) {
            app.state.info(format!("Added \"{title}\" to \"{name}\""));
        }
    }

    fn remove_from_playlist(app: &mut App) {
        if app.state.pane != Pane::PlaylistTracks {
            return;
        }
        let names = app.session.playlist_names();
        let Some(name) = app.state.selected_playlist(&names).map(str::to_string) else {
            return;
        };
        let Some(index) = app.state.playlist_tracks.selected() else {
            return;
        };

        let removed = app.session.remove_from_playlist(&name, index);
        let remaining = app.session.playlist_tracks(&name).len();
        clamp_selection(&mut app.state.playlist_tracks, remaining);
        if remaining == 0 {
            clamp_selection(&mut app.state.playlists, app.session.playlist_names().len());
            app.state.pane = Pane::Playlists;
        }

        if let Some(track) = report(app, removed) {
            app.state.info(format!("Removed \"{}\" from \"{name}\"", track.title));
        }
    }

    /// Moves the library highlight onto the cursor so the playing row stays
    /// visible.
    fn follow_cursor(app: &mut App) {
        if let CursorState::Active(index) = app.session.cursor() {
            app.state.library.select(Some(index));
        }
    }
}

/// Turns a classified failure into the notice line.
fn report<T>(app: &mut App, result: Result<T, LibraryError>) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(e) => {
            warn!(error = %e, "intent_failed");
            app.state.error(e.to_string());
            None
        }
    }
}
