//! Capability traits implemented by the host environment.
//!
//! The router owns no browser globals. Document mutation, network
//! fetching, and session history are injected behind these traits, so
//! the router and cache are testable without a real browser.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use crate::error::Result;
use crate::trigger::HistoryState;

/// Identifier for an issued fetch. Monotonically increasing per router,
/// used to match completions against the outstanding request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FetchId(pub u64);

/// Cooperative cancellation flag shared between the router and an
/// in-flight fetch.
///
/// The router cancels the token when a newer navigation supersedes the
/// fetch. Backends may poll it to abandon work early; even when they
/// ignore it, the stale completion is dropped by id on delivery.
#[derive(Debug, Clone, Default)]
pub struct CancelToken(Arc<AtomicBool>);

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    /// Flag the fetch as cancelled.
    pub fn cancel(&self) {
        self.0.store(true, Ordering::Relaxed);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }
}

/// A request for a partial's text content.
#[derive(Debug, Clone)]
pub struct FetchRequest {
    pub id: FetchId,
    /// Path of the partial, e.g. `"../about.html"`.
    pub path: String,
    pub token: CancelToken,
}

/// Completion of a fetch, delivered back to the router by the host.
#[derive(Debug)]
pub struct FetchEvent {
    pub id: FetchId,
    /// The partial's text on success.
    pub body: Result<String>,
}

/// Document mutation capability: content area, title, navigation links.
pub trait DocumentHost {
    /// Current document title.
    fn title(&self) -> String;

    fn set_title(&mut self, title: &str);

    /// Replace the content placeholder's HTML.
    fn set_content(&mut self, html: &str);

    /// Hrefs of the navigation links, in document order.
    fn link_hrefs(&self) -> Vec<String>;

    /// Set or clear a navigation link's active flag.
    fn set_link_active(&mut self, href: &str, active: bool);
}

/// Network fetch capability.
///
/// `start_fetch` begins an asynchronous GET and returns immediately; the
/// host later delivers the body (or error) as a [`FetchEvent`]. Execution
/// is single-threaded and event-driven: completions arrive as later
/// events, never reentrantly.
pub trait FetchBackend {
    fn start_fetch(&mut self, request: FetchRequest) -> Result<()>;

    /// Cooperative cancellation hint for an in-flight fetch. Hosts that
    /// cannot abort a transfer may ignore it; the request's
    /// [`CancelToken`] is flagged regardless.
    fn cancel(&mut self, _id: FetchId) {}
}

/// Session history capability.
pub trait HistoryBackend {
    /// Record a new history entry for `state`, displayed as `url`.
    fn push_state(&mut self, state: &HistoryState, url: &str) -> Result<()>;

    /// Rewrite the current entry without adding a new one.
    fn replace_state(&mut self, state: &HistoryState, url: &str) -> Result<()>;
}
