//! Query-string projection of the catalog filter.
//!
//! One-way: filter state → URL. The query is read once at mount to seed the
//! filter, then rewritten via `history.replaceState` on every change.
//! `skip`/`limit` are session-local and never appear in the URL.

use serde::{Deserialize, Serialize};
use web_sys::window;

/// Подмножество фильтра, которое живёт в адресной строке.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
}

impl CatalogQuery {
    /// Parse a `location.search` string (with or without the leading `?`).
    /// Empty values are treated as unset.
    pub fn parse(search: &str) -> Self {
        let mut query: CatalogQuery =
            serde_qs::from_str(search.trim_start_matches('?')).unwrap_or_default();
        query.category = query.category.filter(|c| !c.is_empty());
        query.search = query.search.filter(|s| !s.is_empty());
        query
    }

    /// Serialize to a query string without the leading `?`.
    /// Unset parameters are omitted entirely; both unset yields `""`.
    pub fn to_query_string(&self) -> String {
        serde_qs::to_string(self).unwrap_or_default()
    }

    /// Read the query from the current window location.
    pub fn read_from_window() -> Self {
        let search = window()
            .and_then(|w| w.location().search().ok())
            .unwrap_or_default();
        Self::parse(&search)
    }

    /// Project this query into the address bar, replacing the current entry.
    /// Skips the history call when the URL already matches.
    pub fn write_to_window(&self) {
        let Some(w) = window() else { return };
        let location = w.location();

        let query_string = self.to_query_string();
        let expected_search = if query_string.is_empty() {
            String::new()
        } else {
            format!("?{}", query_string)
        };

        let current_search = location.search().unwrap_or_default();
        if current_search == expected_search {
            return;
        }

        let pathname = location.pathname().unwrap_or_else(|_| "/".to_string());
        let new_url = format!("{}{}", pathname, expected_search);

        if let Ok(history) = w.history() {
            let _ = history.replace_state_with_url(
                &wasm_bindgen::JsValue::NULL,
                "",
                Some(&new_url),
            );
        }
    }
}
