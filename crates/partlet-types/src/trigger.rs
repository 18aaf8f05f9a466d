//! Host-agnostic navigation trigger events.
//!
//! Every host maps its native navigation notifications (hashchange,
//! click, popstate, load) to these enums. The router never sees raw
//! browser events.

use serde::{Deserialize, Serialize};

/// A navigation trigger delivered to the router.
///
/// Serializable so hosts can record and replay trigger streams.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Trigger {
    /// The fragment identifier changed. Carries the raw hash including
    /// the leading `#`, or an empty string when no fragment is present.
    HashChange { hash: String },
    /// A navigation link was activated. Carries the link's raw href
    /// attribute (e.g. `"#about"` or `"about.html"`).
    LinkClick { href: String },
    /// The browser replayed a history entry (back/forward). Carries the
    /// state object recorded when the entry was pushed, or `None` for
    /// the root entry.
    HistoryPop { state: Option<HistoryState> },
    /// The page finished its initial load. Carries the current pathname
    /// and hash so the router can resolve direct navigation.
    PageLoad { path: String, hash: String },
}

/// The state object recorded with each pushed history entry.
///
/// Opaque to the host: it is serialized when pushed and handed back
/// verbatim on a pop.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryState {
    /// Name of the page the entry displays.
    pub page: String,
}
