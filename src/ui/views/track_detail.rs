use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
};

use crate::{library::Track, ui::views::pane_block, util::colors};

pub fn render(f: &mut Frame, area: Rect, track: Option<&Track>) {
    let block = pane_block("Details", false);

    let Some(track) = track else {
        let hint = Paragraph::new("Select a track and press Enter to play it")
            .style(Style::default().fg(colors::NEUTRAL))
            .wrap(Wrap { trim: true })
            .block(block);
        f.render_widget(hint, area);
        return;
    };

    let mut lines = vec![
        field("Title", &track.title),
        field("Artist", &track.artist),
        field("Album", &track.album),
        field("Genre", &track.genre),
    ];
    if !track.artwork_url.is_empty() {
        lines.push(Line::from(Span::styled(
            track.artwork_url.as_str(),
            Style::default().fg(colors::NEUTRAL),
        )));
    }

    f.render_widget(
        Paragraph::new(lines).wrap(Wrap { trim: true }).block(block),
        area,
    );
}

fn field(name: &str, value: &str) -> Line<'static> {
    let label = Style::default()
        .fg(colors::PRIMARY)
        .add_modifier(Modifier::BOLD);
    let value = if value.is_empty() { "Unknown" } else { value };
    Line::from(vec![
        Span::styled(format!("{name}: "), label),
        Span::raw(value.to_string()),
    ])
}
