//! Search and filter state for the entry list, plus the owner-side
//! filtering the list component delegates to.
//!
//! The list component itself never filters; it emits intents carrying
//! the raw query and single-option toggles, and the owner re-filters
//! the entry sequence with the functions here.

use regex::RegexBuilder;
use serde::{Deserialize, Serialize};

use crate::models::Entry;

/// The fixed set of ten advanced-search toggles.
///
/// The first seven select which entry fields are searched; the last
/// three change how matching is performed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum OptionKey {
    User,
    Other,
    Url,
    Protect,
    Notes,
    Pass,
    Title,
    CaseSensitive,
    Regex,
    History,
}

impl OptionKey {
    /// All ten keys, in display order.
    pub const ALL: [OptionKey; 10] = [
        OptionKey::User,
        OptionKey::Other,
        OptionKey::Url,
        OptionKey::Protect,
        OptionKey::Notes,
        OptionKey::Pass,
        OptionKey::Title,
        OptionKey::CaseSensitive,
        OptionKey::Regex,
        OptionKey::History,
    ];

    pub fn label(self) -> &'static str {
        match self {
            OptionKey::User => "User",
            OptionKey::Other => "Other fields",
            OptionKey::Url => "Website",
            OptionKey::Protect => "Protected fields",
            OptionKey::Notes => "Notes",
            OptionKey::Pass => "Password",
            OptionKey::Title => "Title",
            OptionKey::CaseSensitive => "Case sensitive",
            OptionKey::Regex => "Regex",
            OptionKey::History => "History",
        }
    }
}

/// The advanced-option set. Always carries a value for every key;
/// absent keys in a serialized form default to `false`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AdvancedOptions {
    pub user: bool,
    pub other: bool,
    pub url: bool,
    pub protect: bool,
    pub notes: bool,
    pub pass: bool,
    pub title: bool,
    pub case_sensitive: bool,
    pub regex: bool,
    pub history: bool,
}

impl AdvancedOptions {
    pub fn get(&self, key: OptionKey) -> bool {
        match key {
            OptionKey::User => self.user,
            OptionKey::Other => self.other,
            OptionKey::Url => self.url,
            OptionKey::Protect => self.protect,
            OptionKey::Notes => self.notes,
            OptionKey::Pass => self.pass,
            OptionKey::Title => self.title,
            OptionKey::CaseSensitive => self.case_sensitive,
            OptionKey::Regex => self.regex,
            OptionKey::History => self.history,
        }
    }

    /// Set exactly one key; no other key is touched.
    pub fn set(&mut self, key: OptionKey, value: bool) {
        match key {
            OptionKey::User => self.user = value,
            OptionKey::Other => self.other = value,
            OptionKey::Url => self.url = value,
            OptionKey::Protect => self.protect = value,
            OptionKey::Notes => self.notes = value,
            OptionKey::Pass => self.pass = value,
            OptionKey::Title => self.title = value,
            OptionKey::CaseSensitive => self.case_sensitive = value,
            OptionKey::Regex => self.regex = value,
            OptionKey::History => self.history = value,
        }
    }

    /// True when at least one field-selecting option is enabled.
    fn any_field_option(&self) -> bool {
        self.user || self.other || self.url || self.notes || self.pass || self.title
    }
}

/// Authoritative search state, owned by the store and passed into the
/// list component as a read-only snapshot.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchState {
    /// Raw query text, exactly as last emitted by the search field.
    pub query: String,
    /// Whether the advanced-options panel is open.
    pub advanced_enabled: bool,
    pub advanced: AdvancedOptions,
}

/// Sort order for the entry list, chosen from the sort menu.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SortMode {
    #[default]
    TitleAsc,
    TitleDesc,
    CreatedAsc,
    CreatedDesc,
    UpdatedAsc,
    UpdatedDesc,
}

impl SortMode {
    pub const ALL: [SortMode; 6] = [
        SortMode::TitleAsc,
        SortMode::TitleDesc,
        SortMode::CreatedAsc,
        SortMode::CreatedDesc,
        SortMode::UpdatedAsc,
        SortMode::UpdatedDesc,
    ];

    pub fn label(self) -> &'static str {
        match self {
            SortMode::TitleAsc => "Title A-Z",
            SortMode::TitleDesc => "Title Z-A",
            SortMode::CreatedAsc => "Oldest created",
            SortMode::CreatedDesc => "Recently created",
            SortMode::UpdatedAsc => "Least recently updated",
            SortMode::UpdatedDesc => "Recently updated",
        }
    }
}

enum Matcher {
    Substring { needle: String, case_sensitive: bool },
    Pattern(regex::Regex),
}

impl Matcher {
    fn build(search: &SearchState) -> Option<Matcher> {
        if search.advanced.regex {
            match RegexBuilder::new(&search.query)
                .case_insensitive(!search.advanced.case_sensitive)
                .build()
            {
                Ok(re) => Some(Matcher::Pattern(re)),
                Err(e) => {
                    tracing::warn!("invalid search pattern: {e}");
                    None
                }
            }
        } else if search.advanced.case_sensitive {
            Some(Matcher::Substring {
                needle: search.query.clone(),
                case_sensitive: true,
            })
        } else {
            Some(Matcher::Substring {
                needle: search.query.to_lowercase(),
                case_sensitive: false,
            })
        }
    }

    fn matches(&self, text: &str) -> bool {
        match self {
            Matcher::Substring {
                needle,
                case_sensitive: true,
            } => text.contains(needle.as_str()),
            Matcher::Substring { needle, .. } => text.to_lowercase().contains(needle.as_str()),
            Matcher::Pattern(re) => re.is_match(text),
        }
    }
}

/// Filter entries against the current search state.
///
/// An empty query passes every entry. The searched fields are the
/// enabled field options; with none enabled, only titles are searched.
/// Protected fields (password, and everything on a protected entry
/// beyond its title/user/url) are only searched when `protect` is on.
/// An invalid regex pattern yields an empty result, never an error.
pub fn filter_entries(entries: &[Entry], search: &SearchState) -> Vec<Entry> {
    if search.query.is_empty() {
        return entries.to_vec();
    }

    let Some(matcher) = Matcher::build(search) else {
        return Vec::new();
    };

    entries
        .iter()
        .filter(|entry| entry_matches(entry, search, &matcher))
        .cloned()
        .collect()
}

fn entry_matches(entry: &Entry, search: &SearchState, matcher: &Matcher) -> bool {
    let opts = &search.advanced;
    let fields_chosen = opts.any_field_option();
    // Protected entries hide everything but title/user/url from search
    // unless protected-field search is enabled.
    let protected_visible = !entry.protected || opts.protect;

    let field_enabled = |key: OptionKey| !fields_chosen && key == OptionKey::Title || opts.get(key);

    let mut candidates: Vec<&str> = Vec::new();
    if field_enabled(OptionKey::Title) {
        candidates.push(&entry.title);
    }
    if field_enabled(OptionKey::User) {
        candidates.push(&entry.user);
    }
    if field_enabled(OptionKey::Url) {
        candidates.push(&entry.url);
    }
    if field_enabled(OptionKey::Notes) && protected_visible {
        candidates.push(&entry.notes);
    }
    if field_enabled(OptionKey::Pass) && opts.protect {
        candidates.push(&entry.pass);
    }
    if field_enabled(OptionKey::Other) && protected_visible {
        candidates.extend(entry.other.values().map(String::as_str));
    }

    if candidates.iter().any(|text| matcher.matches(text)) {
        return true;
    }

    if opts.history {
        for rev in &entry.history {
            let mut rev_fields: Vec<&str> = Vec::new();
            if field_enabled(OptionKey::Title) {
                rev_fields.push(&rev.title);
            }
            if field_enabled(OptionKey::User) {
                rev_fields.push(&rev.user);
            }
            if field_enabled(OptionKey::Url) {
                rev_fields.push(&rev.url);
            }
            if field_enabled(OptionKey::Notes) && protected_visible {
                rev_fields.push(&rev.notes);
            }
            if field_enabled(OptionKey::Pass) && opts.protect {
                rev_fields.push(&rev.pass);
            }
            if rev_fields.iter().any(|text| matcher.matches(text)) {
                return true;
            }
        }
    }

    false
}

/// Sort entries in place per the chosen mode. Ties keep the incoming
/// order (stable sort), so the store's ordering is preserved within
/// equal keys.
pub fn sort_entries(entries: &mut [Entry], mode: SortMode) {
    match mode {
        SortMode::TitleAsc => {
            entries.sort_by(|a, b| a.title.to_lowercase().cmp(&b.title.to_lowercase()))
        }
        SortMode::TitleDesc => {
            entries.sort_by(|a, b| b.title.to_lowercase().cmp(&a.title.to_lowercase()))
        }
        SortMode::CreatedAsc => entries.sort_by_key(|e| e.created_at),
        SortMode::CreatedDesc => entries.sort_by(|a, b| b.created_at.cmp(&a.created_at)),
        SortMode::UpdatedAsc => entries.sort_by_key(|e| e.updated_at),
        SortMode::UpdatedDesc => entries.sort_by(|a, b| b.updated_at.cmp(&a.updated_at)),
    }
}
