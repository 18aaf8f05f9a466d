//! Demo host configuration.

use std::path::{Path, PathBuf};

use partlet_router::RouterConfig;
use partlet_types::Result;
use serde::Deserialize;

/// Configuration for the demo host, loaded from a TOML file.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Directory the partial HTML files are served from.
    pub pages_dir: PathBuf,
    /// Router configuration.
    pub router: RouterConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            pages_dir: PathBuf::from("pages"),
            router: RouterConfig {
                // Partials live directly in the pages directory.
                partial_dir: String::new(),
                ..RouterConfig::default()
            },
        }
    }
}

impl AppConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        let config = toml::from_str(&text)?;
        Ok(config)
    }

    /// Resolve configuration from the CLI arg, `PARTLET_CONFIG` env var,
    /// or `partlet.toml` in the working directory, falling back to the
    /// defaults when none exists.
    pub fn resolve() -> Result<Self> {
        let explicit = std::env::args()
            .nth(1)
            .or_else(|| std::env::var("PARTLET_CONFIG").ok());
        if let Some(path) = explicit {
            return Self::load(Path::new(&path));
        }

        let default_path = Path::new("partlet.toml");
        if default_path.exists() {
            return Self::load(default_path);
        }
        Ok(Self::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = AppConfig::default();
        assert_eq!(config.pages_dir, PathBuf::from("pages"));
        assert_eq!(config.router.home_page, "home");
        assert!(config.router.partial_dir.is_empty());
    }

    #[test]
    fn parses_partial_toml() {
        let config: AppConfig = toml::from_str(
            "pages_dir = \"partials\"\n\n[router]\nhome_page = \"start\"\nknown_pages = [\"start\", \"faq\"]\n",
        )
        .unwrap();
        assert_eq!(config.pages_dir, PathBuf::from("partials"));
        assert_eq!(config.router.home_page, "start");
        assert_eq!(config.router.known_pages, vec!["start", "faq"]);
    }
}
