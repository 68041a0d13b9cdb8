//! Keyboard event processing: routes key events to the sort menu, the
//! settings view, or the list component depending on what has focus.

pub mod router;

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use keyrack_core::filter::OptionKey;

use crate::ui::{App, View};

pub(crate) fn handle_key(app: &mut App, key: KeyEvent) -> Result<()> {
    let has_ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    let has_alt = key.modifiers.contains(KeyModifiers::ALT);

    // Ctrl+Q quits from anywhere.
    if has_ctrl && key.code == KeyCode::Char('q') {
        app.quit();
        return Ok(());
    }

    // The sort menu captures input while open.
    if app.sort_menu.is_some() {
        handle_sort_menu_key(app, key);
        return Ok(());
    }

    match app.view {
        View::Settings => handle_settings_key(app, key),
        View::List => handle_list_key(app, key, has_ctrl, has_alt),
    }
    Ok(())
}

fn handle_sort_menu_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc => app.sort_menu = None,
        KeyCode::Up => {
            if let Some(menu) = app.sort_menu.as_mut() {
                menu.move_up();
            }
        }
        KeyCode::Down => {
            if let Some(menu) = app.sort_menu.as_mut() {
                menu.move_down();
            }
        }
        KeyCode::Enter => {
            if let Some(menu) = app.sort_menu.as_ref() {
                let mode = menu.selected_mode();
                app.set_sort(mode);
            }
        }
        _ => {}
    }
}

fn handle_settings_key(app: &mut App, key: KeyEvent) {
    if key.code == KeyCode::Esc {
        app.show_list();
    }
}

fn handle_list_key(app: &mut App, key: KeyEvent, has_ctrl: bool, has_alt: bool) {
    // Advanced option toggles: Alt+1..Alt+0 while the panel is open,
    // independent of field focus. Each press flips exactly one option.
    if has_alt && app.search.advanced_enabled {
        if let KeyCode::Char(c) = key.code {
            if let Some(index) = "1234567890".find(c) {
                let option = OptionKey::ALL[index];
                let value = !app.search.advanced.get(option);
                let intent = app.list.on_advanced_option_toggled(option, value);
                app.apply(intent);
                return;
            }
        }
    }

    // View-level shortcuts around the list component.
    if has_ctrl {
        match key.code {
            KeyCode::Char('s') => {
                app.trigger_sort_menu();
                return;
            }
            KeyCode::Char('e') => {
                let intent = app.list.on_advanced_panel_toggled();
                app.apply(intent);
                return;
            }
            KeyCode::Char('k') => {
                app.import_key_file();
                return;
            }
            KeyCode::Char('g') => {
                app.show_settings();
                return;
            }
            _ => {}
        }
    }

    if app.list.is_focused() {
        // Navigation stays with the router even while typing: the field
        // swallows Up/Down only so the cursor does not move. Modified
        // chords also reach the router (the find accelerator may
        // re-select the text); everything else belongs to the field.
        let routed = matches!(key.code, KeyCode::Up | KeyCode::Down) || has_ctrl || has_alt;
        if routed {
            if let Some(action) = app.router.dispatch(&key) {
                let active = app.active.clone();
                if let Some(intent) = app.list.handle_action(action, active.as_deref()) {
                    app.apply(intent);
                }
                return;
            }
        }
        let intents = app.list.on_search_key(key);
        for intent in intents {
            app.apply(intent);
        }
        return;
    }

    // Unfocused list: the global key router gets the event first.
    if let Some(action) = app.router.dispatch(&key) {
        let active = app.active.clone();
        if let Some(intent) = app.list.handle_action(action, active.as_deref()) {
            app.apply(intent);
        }
        return;
    }

    match key.code {
        KeyCode::Enter => {
            if let Some(active) = app.active.clone() {
                let intent = app.list.on_item_activated(&active);
                app.apply(intent);
            }
        }
        KeyCode::Esc if app.search.advanced_enabled => {
            let intent = app.list.on_advanced_panel_toggled();
            app.apply(intent);
        }
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use keyrack_core::config::Settings;
    use keyrack_core::models::Entry;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ctrl(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
    }

    fn alt(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::ALT)
    }

    fn app_with(titles: &[(&str, &str)]) -> App {
        let entries = titles.iter().map(|(id, t)| Entry::new(*id, *t)).collect();
        App::new(Settings::default(), entries)
    }

    #[test]
    fn ctrl_q_quits() {
        let mut app = app_with(&[]);
        handle_key(&mut app, ctrl('q')).unwrap();
        assert!(!app.running);
    }

    #[test]
    fn arrows_walk_the_selection() {
        let mut app = app_with(&[("1", "a"), ("2", "b")]);
        handle_key(&mut app, key(KeyCode::Down)).unwrap();
        assert_eq!(app.active.as_deref(), Some("1"));
        handle_key(&mut app, key(KeyCode::Down)).unwrap();
        assert_eq!(app.active.as_deref(), Some("2"));
        handle_key(&mut app, key(KeyCode::Up)).unwrap();
        assert_eq!(app.active.as_deref(), Some("1"));
    }

    #[test]
    fn arrows_keep_navigating_while_the_field_is_focused() {
        let mut app = app_with(&[("1", "a"), ("2", "b")]);
        handle_key(&mut app, ctrl('f')).unwrap();
        assert!(app.list.is_focused());

        handle_key(&mut app, key(KeyCode::Down)).unwrap();
        assert_eq!(app.active.as_deref(), Some("1"));
        handle_key(&mut app, key(KeyCode::Down)).unwrap();
        assert_eq!(app.active.as_deref(), Some("2"));
        handle_key(&mut app, key(KeyCode::Up)).unwrap();
        assert_eq!(app.active.as_deref(), Some("1"));

        // The field keeps focus and its text stays untouched.
        assert!(app.list.is_focused());
        assert_eq!(app.list.buffer(), "");
    }

    #[test]
    fn printable_key_redirects_focus_to_the_search_field() {
        let mut app = app_with(&[("1", "a")]);
        handle_key(&mut app, key(KeyCode::Char('x'))).unwrap();
        assert!(app.list.is_focused());
        // Focus redirection does not mutate the search text.
        assert_eq!(app.search.query, "");
        assert_eq!(app.list.buffer(), "");
    }

    #[test]
    fn typing_while_focused_updates_the_query() {
        let mut app = app_with(&[("1", "mail"), ("2", "bank")]);
        handle_key(&mut app, ctrl('f')).unwrap();
        assert!(app.list.is_focused());
        handle_key(&mut app, key(KeyCode::Char('m'))).unwrap();
        assert_eq!(app.search.query, "m");
        assert_eq!(app.filtered.len(), 1);
    }

    #[test]
    fn alt_digit_toggles_one_advanced_option() {
        let mut app = app_with(&[]);
        handle_key(&mut app, ctrl('e')).unwrap();
        assert!(app.search.advanced_enabled);

        handle_key(&mut app, alt('9')).unwrap(); // ninth option: regex
        assert!(app.search.advanced.regex);
        assert!(!app.search.advanced.user);

        handle_key(&mut app, alt('9')).unwrap();
        assert!(!app.search.advanced.regex);
    }

    #[test]
    fn escape_closes_the_advanced_panel_when_unfocused() {
        let mut app = app_with(&[]);
        handle_key(&mut app, ctrl('e')).unwrap();
        handle_key(&mut app, key(KeyCode::Esc)).unwrap();
        assert!(!app.search.advanced_enabled);
    }

    #[test]
    fn sort_menu_captures_keys_while_open() {
        let mut app = app_with(&[("1", "beta"), ("2", "alpha")]);
        app.list_area = Some(ratatui::layout::Rect::new(0, 0, 80, 24));
        app.sort_btn_area = Some(ratatui::layout::Rect::new(70, 0, 6, 1));

        handle_key(&mut app, ctrl('s')).unwrap();
        assert!(app.sort_menu.is_some());

        handle_key(&mut app, key(KeyCode::Down)).unwrap();
        handle_key(&mut app, key(KeyCode::Enter)).unwrap();
        assert!(app.sort_menu.is_none());
        assert_eq!(app.filtered[0].title, "beta");
    }

    #[test]
    fn settings_view_returns_on_escape() {
        let mut app = app_with(&[]);
        handle_key(&mut app, ctrl('g')).unwrap();
        assert_eq!(app.view, View::Settings);
        assert_eq!(app.router.subscriber_count(), 0);

        handle_key(&mut app, key(KeyCode::Esc)).unwrap();
        assert_eq!(app.view, View::List);
        assert_eq!(app.router.subscriber_count(), 4);
    }
}
