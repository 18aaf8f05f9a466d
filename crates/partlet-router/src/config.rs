//! Router configuration.

use serde::{Deserialize, Serialize};

/// How page identifiers map to displayed URLs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RouteMode {
    /// Fragment-identifier routing: pages display as `#about`.
    Hash,
    /// Pathname routing: pages display as `/about`.
    Path,
}

/// Router feature configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RouterConfig {
    /// Page navigated to when a trigger derives no identifier.
    pub home_page: String,
    /// The recognized page set. Names outside it resolve to the
    /// `Unknown` fallback but still navigate.
    pub known_pages: Vec<String>,
    /// Directory prefix partial paths are built from.
    pub partial_dir: String,
    /// Hash or path routing.
    pub route_mode: RouteMode,
}

impl Default for RouterConfig {
    fn default() -> Self {
        Self {
            home_page: "home".to_string(),
            known_pages: vec![
                "home".to_string(),
                "about".to_string(),
                "contact".to_string(),
            ],
            partial_dir: "../".to_string(),
            route_mode: RouteMode::Hash,
        }
    }
}

impl RouterConfig {
    /// The URL a page displays as under the configured route mode.
    pub fn page_url(&self, name: &str) -> String {
        match self.route_mode {
            RouteMode::Hash => format!("#{name}"),
            RouteMode::Path => format!("/{name}"),
        }
    }
}
