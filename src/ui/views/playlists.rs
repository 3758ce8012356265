use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    widgets::{List, ListItem, ListState, Paragraph},
};

use crate::{
    ui::views::{highlight_style, pane_block},
    util::colors,
};

/// Playlist names with their sizes, in insertion order.
pub fn render(
    f: &mut Frame,
    area: Rect,
    playlists: &[(String, usize)],
    focused: bool,
    list_state: &mut ListState,
) {
    let block = pane_block("Playlists (c: new)", focused);

    if playlists.is_empty() {
        let empty = Paragraph::new("No playlists yet")
            .style(Style::default().fg(colors::NEUTRAL))
            .block(block);
        f.render_widget(empty, area);
        return;
    }

    let items: Vec<ListItem> = playlists
        .iter()
        .map(|(name, count)| {
            let noun = if *count == 1 { "track" } else { "tracks" };
            ListItem::new(format!("{name} ({count} {noun})"))
        })
        .collect();

    let list = List::new(items)
        .block(block)
        .highlight_style(highlight_style())
        .highlight_symbol("> ");

    f.render_stateful_widget(list, area, list_state);
}
