pub mod handler;

use ratatui::widgets::ListState;
use std::time::{SystemTime, UNIX_EPOCH};

pub fn get_active_track_icon(is_playing: bool) -> &'static str {
    if !is_playing {
        return "•";
    }

    const FRAME_STEP_MS: u128 = 100;
    const FRAMES: [&str; 6] = ["·", "•", "●", "●", "•", "·"];

    let now = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis())
        .unwrap_or_default();
    FRAMES[(now / FRAME_STEP_MS) as usize % FRAMES.len()]
}

pub fn select_next(state: &mut ListState, len: usize) {
    if len == 0 {
        state.select(None);
        return;
    }
    let i = state.selected().map_or(0, |i| (i + 1).min(len - 1));
    state.select(Some(i));
}

pub fn select_previous(state: &mut ListState, len: usize) {
    if len == 0 {
        state.select(None);
        return;
    }
    let i = state.selected().map_or(0, |i| i.saturating_sub(1));
    state.select(Some(i));
}

/// Keeps the selection inside `0..len`, selecting the first row when
/// nothing is selected yet.
pub fn clamp_selection(state: &mut ListState, len: usize) {
    match state.selected() {
        _ if len == 0 => state.select(None),
        Some(i) if i >= len => state.select(Some(len - 1)),
        None => state.select(Some(0)),
        Some(_) => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn movement_stops_at_the_edges() {
        let mut state = ListState::default();
        select_next(&mut state, 2);
        assert_eq!(state.selected(), Some(0));
        select_next(&mut state, 2);
        select_next(&mut state, 2);
        assert_eq!(state.selected(), Some(1));
        select_previous(&mut state, 2);
        select_previous(&mut state, 2);
        assert_eq!(state.selected(), Some(0));
    }

    #[test]
    fn clamp_follows_the_list_length() {
        let mut state = ListState::default();
        clamp_selection(&mut state, 3);
        assert_eq!(state.selected(), Some(0));

        state.select(Some(5));
        clamp_selection(&mut state, 3);
        assert_eq!(state.selected(), Some(2));

        clamp_selection(&mut state, 0);
        assert_eq!(state.selected(), None);
    }
}
