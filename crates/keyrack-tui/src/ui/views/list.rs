use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use unicode_width::UnicodeWidthChar;

use keyrack_core::filter::OptionKey;

use crate::ui::App;

pub(super) fn render_list(f: &mut Frame, app: &mut App, area: Rect) {
    app.list_area = Some(area);

    let advanced_height = if app.search.advanced_enabled { 4 } else { 0 };
    let chunks = Layout::vertical([
        Constraint::Length(3),
        Constraint::Length(advanced_height),
        Constraint::Min(0),
    ])
    .split(area);

    render_search_header(f, app, chunks[0]);
    if app.search.advanced_enabled {
        render_advanced_panel(f, app, chunks[1]);
    }
    render_items(f, app, chunks[2]);
}

fn render_search_header(f: &mut Frame, app: &mut App, area: Rect) {
    let header = Layout::horizontal([Constraint::Min(0), Constraint::Length(8)]).split(area);

    let focused = app.list.is_focused();
    let border_style = if focused {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    let text = if app.list.buffer().is_empty() && !focused {
        Span::styled(
            app.locale.search_placeholder,
            Style::default().fg(Color::DarkGray),
        )
    } else {
        Span::raw(app.list.buffer().to_string())
    };
    let field = Paragraph::new(Line::from(text))
        .block(Block::default().borders(Borders::ALL).border_style(border_style));
    f.render_widget(field, header[0]);

    app.sort_btn_area = Some(header[1]);
    let sort_btn = Paragraph::new("sort").block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray)),
    );
    f.render_widget(sort_btn, header[1]);
}

fn render_advanced_panel(f: &mut Frame, app: &App, area: Rect) {
    let opts = &app.search.advanced;
    let label_style = Style::default().fg(Color::DarkGray);

    let mut fields = vec![Span::styled(format!("{}: ", app.locale.search_in), label_style)];
    let mut modes = vec![Span::styled(
        format!("{}: ", app.locale.search_options),
        label_style,
    )];
    for (i, option) in OptionKey::ALL.iter().enumerate() {
        let mark = if opts.get(*option) { "[x]" } else { "[ ]" };
        let hotkey = "1234567890".chars().nth(i).unwrap_or('?');
        let span = Span::raw(format!("{} {} (Alt+{})  ", mark, option.label(), hotkey));
        if i < 7 {
            fields.push(span);
        } else {
            modes.push(span);
        }
    }

    let panel = Paragraph::new(vec![Line::from(fields), Line::from(modes)]).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray)),
    );
    f.render_widget(panel, area);
}

fn render_items(f: &mut Frame, app: &mut App, area: Rect) {
    if app.filtered.is_empty() {
        app.viewport.set_layout(0, 0);
        let empty = Paragraph::new(vec![
            Line::from(Span::styled(
                app.locale.list_empty_title,
                Style::default().add_modifier(Modifier::BOLD),
            )),
            Line::from(app.locale.list_empty_text),
        ])
        .style(Style::default().fg(Color::DarkGray));
        f.render_widget(empty, area);
        return;
    }

    app.viewport.set_layout(area.height, app.filtered.len());
    app.viewport.set_active_index(app.active_index());

    let first = app.viewport.first_visible_item();
    let visible = area.height as usize;
    let lines: Vec<Line> = app
        .filtered
        .iter()
        .skip(first)
        .take(visible)
        .map(|entry| {
            let is_active = app.active.as_deref() == Some(entry.id.as_str());
            let prefix = if is_active { "> " } else { "  " };
            let style = if is_active {
                Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };
            let row = format!("{}{}  {}", prefix, entry.title, entry.user);
            Line::from(Span::styled(fit_to_width(&row, area.width as usize), style))
        })
        .collect();
    f.render_widget(Paragraph::new(lines), area);
}

/// Truncate a row to the given display width, respecting wide glyphs.
fn fit_to_width(text: &str, max: usize) -> String {
    let mut out = String::new();
    let mut width = 0;
    for c in text.chars() {
        let w = c.width().unwrap_or(0);
        if width + w > max {
            break;
        }
        width += w;
        out.push(c);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fit_to_width_respects_wide_glyphs() {
        assert_eq!(fit_to_width("abcdef", 4), "abcd");
        // CJK glyphs are two columns wide.
        assert_eq!(fit_to_width("日本語", 4), "日本");
        assert_eq!(fit_to_width("a日本", 4), "a日");
    }
}
