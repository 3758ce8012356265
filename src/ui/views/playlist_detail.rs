use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    widgets::{List, ListItem, ListState, Paragraph},
};

use crate::{
    library::Track,
    ui::views::{highlight_style, pane_block},
    util::colors,
};

pub fn render(
    f: &mut Frame,
    area: Rect,
    name: Option<&str>,
    tracks: &[Track],
    focused: bool,
    list_state: &mut ListState,
) {
    let title = name.unwrap_or("Playlist");
    let block = pane_block(title, focused);

    if tracks.is_empty() {
        let message = if name.is_some() {
            "No tracks in this playlist."
        } else {
            "Select a playlist"
        };
        let empty = Paragraph::new(message)
            .style(Style::default().fg(colors::NEUTRAL))
            .block(block);
        f.render_widget(empty, area);
        return;
    }

    let items: Vec<ListItem> = tracks
        .iter()
        .map(|track| ListItem::new(track.display_name()))
        .collect();

    let list = List::new(items)
        .block(block)
        .highlight_style(highlight_style())
        .highlight_symbol("> ");

    f.render_stateful_widget(list, area, list_state);
}
