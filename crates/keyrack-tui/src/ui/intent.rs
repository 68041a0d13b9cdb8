use keyrack_core::filter::OptionKey;

use crate::ui::sort_menu::MenuPosition;

/// Outbound notification from the list component to its owner.
///
/// Intents are pure notifications: emitting one never expects a
/// synchronous response, and the component holds no authoritative copy
/// of the state it asks to change.
#[derive(Debug, Clone, PartialEq)]
pub enum Intent {
    ItemActivated(String),
    SearchTextChanged(String),
    AdvancedPanelRequested,
    AdvancedOptionChanged { option: OptionKey, value: bool },
    SelectionMoveRequested { active: Option<String>, diff: i32 },
    SortRequested(MenuPosition),
}
