//! Page identifiers and their derivation from navigation triggers.
//!
//! A page name is derived deterministically from whatever the trigger
//! carries: strip the leading `#` from a hash, the leading `/` from a
//! pathname, and the trailing `.html` from an href. Resolution against
//! the configured page set yields a tagged [`PageId`] with an explicit
//! fallback variant instead of trusting the raw string.

/// A resolved page identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PageId {
    /// A page in the configured set (including the home page).
    Known(String),
    /// Input that matched no configured page. Still navigable: the
    /// fetch is attempted and simply fails for a missing partial.
    Unknown(String),
}

impl PageId {
    /// Resolve a derived name against the configured page set.
    pub fn resolve(name: &str, known_pages: &[String]) -> Self {
        if known_pages.iter().any(|p| p == name) {
            PageId::Known(name.to_string())
        } else {
            PageId::Unknown(name.to_string())
        }
    }

    /// The page's name, regardless of variant.
    pub fn name(&self) -> &str {
        match self {
            PageId::Known(name) | PageId::Unknown(name) => name,
        }
    }

    pub fn is_known(&self) -> bool {
        matches!(self, PageId::Known(_))
    }

    /// Path of the page's partial HTML file: directory prefix + name +
    /// `.html`.
    pub fn partial_path(&self, partial_dir: &str) -> String {
        format!("{}{}.html", partial_dir, self.name())
    }

    /// Name with the first character upper-cased, for title display.
    pub fn display_name(&self) -> String {
        let name = self.name();
        let mut chars = name.chars();
        match chars.next() {
            Some(first) => first.to_uppercase().chain(chars).collect(),
            None => String::new(),
        }
    }
}

/// Derive a page name from a fragment identifier (`"#about"` ->
/// `"about"`). An empty or bare-`#` hash derives to nothing.
pub fn from_hash(hash: &str) -> Option<String> {
    let name = hash.strip_prefix('#').unwrap_or(hash);
    if name.is_empty() {
        None
    } else {
        Some(name.to_string())
    }
}

/// Derive a page name from a link href: either a fragment reference
/// (`"#about"`) or a partial file name (`"about.html"`).
pub fn from_href(href: &str) -> Option<String> {
    if let Some(frag) = href.strip_prefix('#') {
        return if frag.is_empty() {
            None
        } else {
            Some(frag.to_string())
        };
    }
    let name = href.strip_suffix(".html").unwrap_or(href);
    if name.is_empty() {
        None
    } else {
        Some(name.to_string())
    }
}

/// Derive a page name from a pathname (`"/about"` or `"/about.html"` ->
/// `"about"`). The root path derives to nothing.
pub fn from_path(path: &str) -> Option<String> {
    let trimmed = path.strip_prefix('/').unwrap_or(path);
    let name = trimmed.strip_suffix(".html").unwrap_or(trimmed);
    if name.is_empty() {
        None
    } else {
        Some(name.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn known() -> Vec<String> {
        vec!["home".into(), "about".into(), "contact".into()]
    }

    #[test]
    fn resolve_known_page() {
        let page = PageId::resolve("about", &known());
        assert_eq!(page, PageId::Known("about".into()));
        assert!(page.is_known());
    }

    #[test]
    fn resolve_unrecognized_page_falls_back() {
        let page = PageId::resolve("pricing", &known());
        assert_eq!(page, PageId::Unknown("pricing".into()));
        assert!(!page.is_known());
        assert_eq!(page.name(), "pricing");
    }

    #[test]
    fn partial_path_concatenation() {
        let page = PageId::Known("about".into());
        assert_eq!(page.partial_path("../"), "../about.html");
        assert_eq!(page.partial_path("partials/"), "partials/about.html");
    }

    #[test]
    fn display_name_capitalizes() {
        assert_eq!(PageId::Known("about".into()).display_name(), "About");
        assert_eq!(PageId::Unknown("x".into()).display_name(), "X");
    }

    #[test]
    fn hash_derivation() {
        assert_eq!(from_hash("#about"), Some("about".into()));
        assert_eq!(from_hash("about"), Some("about".into()));
        assert_eq!(from_hash("#"), None);
        assert_eq!(from_hash(""), None);
    }

    #[test]
    fn href_derivation() {
        assert_eq!(from_href("#contact"), Some("contact".into()));
        assert_eq!(from_href("contact.html"), Some("contact".into()));
        assert_eq!(from_href("contact"), Some("contact".into()));
        assert_eq!(from_href("#"), None);
        assert_eq!(from_href(""), None);
    }

    #[test]
    fn path_derivation() {
        assert_eq!(from_path("/about"), Some("about".into()));
        assert_eq!(from_path("/about.html"), Some("about".into()));
        assert_eq!(from_path("/"), None);
        assert_eq!(from_path(""), None);
    }
}
