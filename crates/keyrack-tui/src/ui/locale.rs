//! Localized string table passed into the views. Only English ships
//! today; unknown tags fall back to it.

#[derive(Debug, Clone)]
pub struct Locale {
    pub search_placeholder: &'static str,
    pub search_in: &'static str,
    pub search_options: &'static str,
    pub sort_title: &'static str,
    pub list_empty_title: &'static str,
    pub list_empty_text: &'static str,
    pub settings_title: &'static str,
    pub settings_about: &'static str,
    pub settings_version: &'static str,
}

impl Locale {
    pub fn for_tag(tag: &str) -> Locale {
        match tag {
            "en" => Locale::english(),
            other => {
                tracing::debug!("unknown locale {other:?}, falling back to en");
                Locale::english()
            }
        }
    }

    fn english() -> Locale {
        Locale {
            search_placeholder: "Search",
            search_in: "Search in",
            search_options: "Options",
            sort_title: "Sort by",
            list_empty_title: "No entries",
            list_empty_text: "Nothing matches the current search.",
            settings_title: "Settings",
            settings_about: "About",
            settings_version: "Version",
        }
    }
}

impl Default for Locale {
    fn default() -> Self {
        Locale::english()
    }
}
