//! In-memory document host.
//!
//! Stands in for a real DOM: a title, one content placeholder, and a
//! navbar of links with active flags. `render` produces a printable
//! snapshot for the REPL's `show` command.

use partlet_types::DocumentHost;

/// A navigation link in the navbar.
#[derive(Debug, Clone)]
struct NavLink {
    href: String,
    label: String,
    active: bool,
}

/// An in-memory document the router mutates.
#[derive(Debug)]
pub struct MemoryDocument {
    title: String,
    content: String,
    links: Vec<NavLink>,
}

impl MemoryDocument {
    /// Create a document with the given base title and navbar links as
    /// (href, label) pairs.
    pub fn new(title: &str, links: &[(String, String)]) -> Self {
        Self {
            title: title.to_string(),
            content: String::new(),
            links: links
                .iter()
                .map(|(href, label)| NavLink {
                    href: href.clone(),
                    label: label.clone(),
                    active: false,
                })
                .collect(),
        }
    }

    /// Printable snapshot: title, navbar with the active link bracketed,
    /// and the content placeholder.
    pub fn render(&self) -> String {
        let navbar = self
            .links
            .iter()
            .map(|link| {
                if link.active {
                    format!("[{}]", link.label)
                } else {
                    link.label.clone()
                }
            })
            .collect::<Vec<_>>()
            .join("  ");

        format!("=== {} ===\n{}\n---\n{}", self.title, navbar, self.content)
    }
}

impl DocumentHost for MemoryDocument {
    fn title(&self) -> String {
        self.title.clone()
    }

    fn set_title(&mut self, title: &str) {
        self.title = title.to_string();
    }

    fn set_content(&mut self, html: &str) {
        self.content = html.to_string();
    }

    fn link_hrefs(&self) -> Vec<String> {
        self.links.iter().map(|link| link.href.clone()).collect()
    }

    fn set_link_active(&mut self, href: &str, active: bool) {
        for link in &mut self.links {
            if link.href == href {
                link.active = active;
            }
        }
    }
}
