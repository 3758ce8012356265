use crate::ui::{
    message::AppMessage,
    state::{InputMode, UiState},
};
use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

pub struct InputHandler;

impl InputHandler {
    pub fn handle_key(key: KeyEvent, state: &UiState) -> Option<AppMessage> {
        if let (KeyCode::Char('c'), KeyModifiers::CONTROL) = (key.code, key.modifiers) {
            return Some(AppMessage::Quit);
        }

        match state.mode {
            InputMode::Normal => Self::handle_normal(key),
            InputMode::Search | InputMode::NewPlaylist => Self::handle_editing(key),
        }
    }

    fn handle_editing(key: KeyEvent) -> Option<AppMessage> {
        match key.code {
            KeyCode::Enter => Some(AppMessage::Submit),
            KeyCode::Esc => Some(AppMessage::Cancel),
            KeyCode::Backspace => Some(AppMessage::Backspace),
            KeyCode::Char(c) => Some(AppMessage::Input(c)),
            _ => None,
        }
    }

    fn handle_normal(key: KeyEvent) -> Option<AppMessage> {
        match key.code {
            KeyCode::Char('q') => Some(AppMessage::Quit),
            KeyCode::Enter => Some(AppMessage::Activate),
            KeyCode::Char('n') => Some(AppMessage::NextTrack),
            KeyCode::Char('p') => Some(AppMessage::PreviousTrack),
            KeyCode::Char(' ') => Some(AppMessage::TogglePlayPause),
            KeyCode::Char('+') | KeyCode::Char('=') => Some(AppMessage::VolumeUp),
            KeyCode::Char('-') => Some(AppMessage::VolumeDown),
            KeyCode::Char('m') => Some(AppMessage::ToggleMute),
            KeyCode::Tab => Some(AppMessage::NextPane),
            KeyCode::BackTab => Some(AppMessage::PreviousPane),
            KeyCode::Down | KeyCode::Char('j') => Some(AppMessage::MoveDown),
            KeyCode::Up | KeyCode::Char('k') => Some(AppMessage::MoveUp),
            KeyCode::Home | KeyCode::Char('g') => Some(AppMessage::MoveTop),
            KeyCode::End | KeyCode::Char('G') => Some(AppMessage::MoveBottom),
            KeyCode::Char('/') => Some(AppMessage::StartSearch),
            KeyCode::Esc => Some(AppMessage::ClearSearch),
            KeyCode::Char('c') => Some(AppMessage::StartNewPlaylist),
            KeyCode::Char('a') => Some(AppMessage::AddToPlaylist),
            KeyCode::Char('d') | KeyCode::Delete => Some(AppMessage::RemoveFromPlaylist),
            _ => None,
        }
    }
}
