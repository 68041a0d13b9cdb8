mod list;
mod settings;
mod sort_menu;

use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Color, Style},
    widgets::Paragraph,
    Frame,
};

use crate::ui::{App, View};

pub(crate) fn render(f: &mut Frame, app: &mut App) {
    let chunks = Layout::vertical([Constraint::Min(0), Constraint::Length(1)]).split(f.area());

    match app.view {
        View::List => list::render_list(f, app, chunks[0]),
        View::Settings => settings::render_settings(f, app, chunks[0]),
    }

    render_status(f, app, chunks[1]);

    if app.sort_menu.is_some() {
        sort_menu::render_sort_menu(f, app);
    }
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let text = app.status.clone().unwrap_or_else(|| {
        "Ctrl+F search · Up/Down move · Ctrl+S sort · Ctrl+E filters · Ctrl+G settings · Ctrl+Q quit"
            .to_string()
    });
    let bar = Paragraph::new(text).style(Style::default().fg(Color::DarkGray));
    f.render_widget(bar, area);
}
