use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use keyrack_core::filter::SortMode;

use crate::ui::App;

pub(super) fn render_sort_menu(f: &mut Frame, app: &App) {
    let Some(menu) = app.sort_menu.as_ref() else {
        return;
    };

    let width = SortMode::ALL
        .iter()
        .map(|m| m.label().len())
        .max()
        .unwrap_or(0) as u16
        + 4;
    let height = SortMode::ALL.len() as u16 + 2;

    // The emitted anchor is unclamped; intersecting with the frame here
    // is purely a rendering concern.
    let x = menu.position.right.saturating_sub(width);
    let area = Rect::new(x, menu.position.top, width, height).intersection(f.area());
    if area.width == 0 || area.height == 0 {
        return;
    }

    f.render_widget(Clear, area);
    let lines: Vec<Line> = SortMode::ALL
        .iter()
        .enumerate()
        .map(|(i, mode)| {
            let style = if i == menu.selected {
                Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };
            Line::from(Span::styled(mode.label(), style))
        })
        .collect();
    let widget = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .title(app.locale.sort_title),
    );
    f.render_widget(widget, area);
}
