//! The interactive entry-list component: search field, advanced-filter
//! toggles, keyboard-driven selection, and the sort-menu trigger.
//!
//! The component owns no authoritative state. It buffers the search
//! text locally (synced from the store only on mount or explicit
//! reset) and emits [`Intent`]s upward; filtering, ordering, and the
//! active selection live with the owner.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use keyrack_core::filter::OptionKey;
use ratatui::layout::Rect;

use crate::input::router::{KeyBinding, KeyRouter, SubscriptionId};
use crate::ui::intent::Intent;
use crate::ui::sort_menu;

/// Actions the component registers with the key router while mounted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListAction {
    /// Find accelerator: focus the search field and select its text.
    FocusSearch,
    MoveUp,
    MoveDown,
    /// Any other printable key: redirect focus to the search field
    /// without touching its text.
    FocusFallback,
}

#[derive(Default)]
pub struct ListComponent {
    buffer: String,
    focused: bool,
    /// Set by the find accelerator: the next typed character replaces
    /// the whole buffer, mirroring select-then-type.
    select_pending: bool,
    subscriptions: Vec<SubscriptionId>,
}

impl ListComponent {
    pub fn new() -> Self {
        Self::default()
    }

    /// Activate the component: sync the local buffer from the
    /// authoritative query and register the four key handlers.
    pub fn mount(&mut self, router: &mut KeyRouter<ListAction>, query: &str) {
        self.buffer = query.to_string();
        self.focused = false;
        self.select_pending = false;
        self.subscriptions = vec![
            router.subscribe(
                KeyBinding::Shortcut(KeyCode::Char('f')),
                ListAction::FocusSearch,
            ),
            router.subscribe(KeyBinding::Plain(KeyCode::Up), ListAction::MoveUp),
            router.subscribe(KeyBinding::Plain(KeyCode::Down), ListAction::MoveDown),
            router.subscribe(KeyBinding::AnyPrintable, ListAction::FocusFallback),
        ];
    }

    /// Release every registration unconditionally. Safe to call twice.
    pub fn unmount(&mut self, router: &mut KeyRouter<ListAction>) {
        for id in self.subscriptions.drain(..) {
            router.unsubscribe(id);
        }
        self.focused = false;
        self.select_pending = false;
    }

    pub fn is_mounted(&self) -> bool {
        !self.subscriptions.is_empty()
    }

    pub fn buffer(&self) -> &str {
        &self.buffer
    }

    pub fn is_focused(&self) -> bool {
        self.focused
    }

    /// Explicit reset of the local buffer to the authoritative value.
    pub fn reset_buffer(&mut self, query: &str) {
        self.buffer = query.to_string();
        self.select_pending = false;
    }

    /// React to a routed action. Directional actions produce exactly
    /// one move intent per key press; focus actions change only focus.
    pub fn handle_action(&mut self, action: ListAction, active: Option<&str>) -> Option<Intent> {
        match action {
            ListAction::FocusSearch => {
                self.focused = true;
                self.select_pending = true;
                None
            }
            ListAction::FocusFallback => {
                self.focused = true;
                None
            }
            ListAction::MoveUp => Some(Intent::SelectionMoveRequested {
                active: active.map(str::to_string),
                diff: -1,
            }),
            ListAction::MoveDown => Some(Intent::SelectionMoveRequested {
                active: active.map(str::to_string),
                diff: 1,
            }),
        }
    }

    /// Key-down handling while the search field is focused.
    ///
    /// Up/Down are consumed without effect (navigation belongs to the
    /// router), Enter blurs, Escape clears a non-empty field before
    /// blurring, and ordinary editing flows into the local buffer with
    /// a change intent per mutation.
    pub fn on_search_key(&mut self, key: KeyEvent) -> Vec<Intent> {
        match key.code {
            KeyCode::Up | KeyCode::Down => Vec::new(),
            KeyCode::Enter => {
                self.focused = false;
                self.select_pending = false;
                Vec::new()
            }
            KeyCode::Esc => {
                let mut intents = Vec::new();
                if !self.buffer.is_empty() {
                    self.buffer.clear();
                    intents.push(Intent::SearchTextChanged(String::new()));
                }
                self.focused = false;
                self.select_pending = false;
                intents
            }
            KeyCode::Char(c)
                if !key
                    .modifiers
                    .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
            {
                if self.select_pending {
                    self.buffer.clear();
                    self.select_pending = false;
                }
                self.buffer.push(c);
                vec![Intent::SearchTextChanged(self.buffer.clone())]
            }
            KeyCode::Backspace => {
                self.select_pending = false;
                if self.buffer.pop().is_some() {
                    vec![Intent::SearchTextChanged(self.buffer.clone())]
                } else {
                    Vec::new()
                }
            }
            _ => Vec::new(),
        }
    }

    pub fn on_advanced_panel_toggled(&self) -> Intent {
        Intent::AdvancedPanelRequested
    }

    /// Emit a toggle for exactly one option key; never batches.
    pub fn on_advanced_option_toggled(&self, option: OptionKey, value: bool) -> Intent {
        Intent::AdvancedOptionChanged { option, value }
    }

    pub fn on_item_activated(&self, id: &str) -> Intent {
        Intent::ItemActivated(id.to_string())
    }

    /// Read the trigger and container rectangles at invocation time and
    /// emit the anchored sort-menu position. Nothing is cached.
    pub fn on_sort_triggered(&self, trigger: Rect, container: Rect) -> Intent {
        Intent::SortRequested(sort_menu::anchor_position(trigger, container))
    }
}
