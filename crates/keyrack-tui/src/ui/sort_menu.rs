//! Sort-menu anchoring and state.

use keyrack_core::filter::SortMode;
use ratatui::layout::Rect;

/// Anchored screen position for the sort menu: its top-right corner.
/// Ephemeral, recomputed on every trigger, never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MenuPosition {
    pub right: u16,
    pub top: u16,
}

/// Anchor the menu just below the trigger, right-aligned with the list
/// container. Both rectangles are read fresh at invocation; the result
/// is intentionally not clamped to the screen.
pub fn anchor_position(trigger: Rect, container: Rect) -> MenuPosition {
    MenuPosition {
        right: container.right(),
        top: trigger.bottom(),
    }
}

/// State of the open sort menu.
#[derive(Debug, Clone, PartialEq)]
pub struct SortMenuState {
    pub position: MenuPosition,
    pub selected: usize,
}

impl SortMenuState {
    pub fn new(position: MenuPosition, current: SortMode) -> Self {
        let selected = SortMode::ALL.iter().position(|m| *m == current).unwrap_or(0);
        Self { position, selected }
    }

    pub fn move_up(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    pub fn move_down(&mut self) {
        if self.selected + 1 < SortMode::ALL.len() {
            self.selected += 1;
        }
    }

    pub fn selected_mode(&self) -> SortMode {
        SortMode::ALL[self.selected]
    }
}
