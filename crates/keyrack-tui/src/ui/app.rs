//! Application root: owns the entry collection, search state, and the
//! active selection, and applies the intents the list component emits.

use ratatui::layout::Rect;

use keyrack_core::config::Settings;
use keyrack_core::filter::{filter_entries, sort_entries, SearchState, SortMode};
use keyrack_core::keyfile::{import_key_file, KeyFileChooser, KeyFileInfo};
use keyrack_core::models::Entry;

use crate::input::router::KeyRouter;
use crate::ui::intent::Intent;
use crate::ui::list::{ListAction, ListComponent};
use crate::ui::locale::Locale;
use crate::ui::scroll::{sync_active_item, ListViewport};
use crate::ui::sort_menu::SortMenuState;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    List,
    Settings,
}

pub struct App {
    pub running: bool,
    pub view: View,
    pub locale: Locale,
    pub settings: Settings,

    /// Authoritative entry sequence, in store order.
    entries: Vec<Entry>,
    /// Entries as currently filtered and sorted for display.
    pub filtered: Vec<Entry>,
    pub search: SearchState,
    /// Identifier of the active entry. Always present in `filtered` or
    /// none; cleared whenever the referenced entry drops out.
    pub active: Option<String>,
    pub sort: SortMode,

    pub router: KeyRouter<ListAction>,
    pub list: ListComponent,
    pub viewport: ListViewport,
    pub sort_menu: Option<SortMenuState>,

    /// Realized geometry from the last draw, for the sort trigger.
    pub list_area: Option<Rect>,
    pub sort_btn_area: Option<Rect>,

    pub status: Option<String>,
    /// Open-screen busy flag; guards key-file import.
    pub open_busy: bool,
    chooser: Option<Box<dyn KeyFileChooser>>,
    pub last_key_file: Option<KeyFileInfo>,
}

impl App {
    pub fn new(settings: Settings, entries: Vec<Entry>) -> Self {
        let locale = Locale::for_tag(&settings.locale);
        let search = SearchState {
            query: String::new(),
            advanced_enabled: false,
            advanced: settings.advanced,
        };
        let sort = settings.sort;

        let mut app = Self {
            running: true,
            view: View::List,
            locale,
            settings,
            entries,
            filtered: Vec::new(),
            search,
            active: None,
            sort,
            router: KeyRouter::new(),
            list: ListComponent::new(),
            viewport: ListViewport::new(1),
            sort_menu: None,
            list_area: None,
            sort_btn_area: None,
            status: None,
            open_busy: false,
            chooser: None,
            last_key_file: None,
        };
        app.refilter();
        app.mount_list();
        app
    }

    pub fn quit(&mut self) {
        self.running = false;
    }

    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status = Some(message.into());
    }

    pub fn set_chooser(&mut self, chooser: Box<dyn KeyFileChooser>) {
        self.chooser = Some(chooser);
    }

    /// Index of the active entry within the filtered sequence.
    pub fn active_index(&self) -> Option<usize> {
        let active = self.active.as_deref()?;
        self.filtered.iter().position(|e| e.id == active)
    }

    pub fn mount_list(&mut self) {
        if !self.list.is_mounted() {
            self.list.mount(&mut self.router, &self.search.query);
        }
    }

    pub fn unmount_list(&mut self) {
        self.list.unmount(&mut self.router);
    }

    pub fn show_settings(&mut self) {
        self.unmount_list();
        self.sort_menu = None;
        self.view = View::Settings;
    }

    pub fn show_list(&mut self) {
        self.view = View::List;
        self.mount_list();
    }

    /// Apply one intent from the list component, then re-sync scroll.
    pub fn apply(&mut self, intent: Intent) {
        match intent {
            Intent::ItemActivated(id) => {
                if self.filtered.iter().any(|e| e.id == id) {
                    self.active = Some(id);
                }
            }
            Intent::SearchTextChanged(value) => {
                self.search.query = value;
                self.refilter();
            }
            Intent::AdvancedPanelRequested => {
                self.search.advanced_enabled = !self.search.advanced_enabled;
            }
            Intent::AdvancedOptionChanged { option, value } => {
                self.search.advanced.set(option, value);
                self.settings.advanced = self.search.advanced;
                self.refilter();
            }
            Intent::SelectionMoveRequested { active, diff } => {
                self.move_selection(active.as_deref(), diff);
            }
            Intent::SortRequested(position) => {
                self.sort_menu = Some(SortMenuState::new(position, self.sort));
            }
        }
        self.sync_scroll();
    }

    /// Re-filter and re-sort the display sequence, dropping a dangling
    /// active id.
    pub fn refilter(&mut self) {
        self.filtered = filter_entries(&self.entries, &self.search);
        sort_entries(&mut self.filtered, self.sort);
        if self.active_index().is_none() {
            self.active = None;
        }
    }

    /// Resolve a selection-move request: locate the active id in the
    /// filtered sequence (missing counts as index -1), add the delta,
    /// and clamp to the sequence bounds.
    fn move_selection(&mut self, active: Option<&str>, diff: i32) {
        if self.filtered.is_empty() {
            self.active = None;
            return;
        }
        let index = active
            .and_then(|id| self.filtered.iter().position(|e| e.id == id))
            .map(|i| i as i64)
            .unwrap_or(-1);
        let last = self.filtered.len() as i64 - 1;
        let next = (index + i64::from(diff)).clamp(0, last);
        self.active = Some(self.filtered[next as usize].id.clone());
    }

    pub fn set_sort(&mut self, mode: SortMode) {
        self.sort = mode;
        self.settings.sort = mode;
        self.sort_menu = None;
        self.refilter();
        self.sync_scroll();
    }

    /// Push the active index into the viewport and let the scroll
    /// synchronizer bring it into view.
    pub fn sync_scroll(&mut self) {
        self.viewport.set_active_index(self.active_index());
        sync_active_item(&mut self.viewport);
    }

    /// Open the sort menu from the realized trigger geometry. Skipped
    /// silently while the layout has not been drawn yet.
    pub fn trigger_sort_menu(&mut self) {
        let (Some(trigger), Some(container)) = (self.sort_btn_area, self.list_area) else {
            return;
        };
        let intent = self.list.on_sort_triggered(trigger, container);
        self.apply(intent);
    }

    /// Run the key-file import flow against the installed chooser.
    pub fn import_key_file(&mut self) {
        let Some(chooser) = self.chooser.as_mut() else {
            self.set_status("No key file chooser is available");
            return;
        };
        match import_key_file(chooser.as_mut(), self.open_busy) {
            Ok(Some(info)) => {
                self.set_status(format!("Loaded key file {}", info.name));
                self.last_key_file = Some(info);
            }
            Ok(None) => {}
            Err(e) => self.set_status(format!("Key file import failed: {e}")),
        }
    }
}
