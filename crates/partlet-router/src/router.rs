//! The router: translates navigation triggers into display updates.
//!
//! Owns the partial cache and the injected host capabilities. Execution
//! is single-threaded and event-driven: a trigger is handled to
//! completion, and a cache miss leaves exactly one fetch outstanding
//! whose completion arrives later via [`Router::on_fetch_complete`]. A
//! newer navigation supersedes the outstanding fetch -- its token is
//! cancelled and its completion, if it still arrives, is dropped by id --
//! so the displayed content always matches the last-issued navigation.

use partlet_types::{
    CancelToken, DocumentHost, FetchBackend, FetchEvent, FetchId, FetchRequest, HistoryBackend,
    HistoryState, Result, Trigger,
};

use crate::cache::PartialCache;
use crate::config::{RouteMode, RouterConfig};
use crate::page::{self, PageId};

/// The single fetch currently in flight.
struct PendingFetch {
    id: FetchId,
    page: PageId,
    token: CancelToken,
}

/// Client-side page router.
///
/// Driven by the host: navigation triggers go in through
/// [`handle_trigger`](Router::handle_trigger), fetch completions through
/// [`on_fetch_complete`](Router::on_fetch_complete).
pub struct Router<D, F, H> {
    config: RouterConfig,
    cache: PartialCache,
    document: D,
    fetch: F,
    history: H,

    /// Title captured at startup; page titles are appended to it.
    base_title: String,
    /// The most recently navigated page.
    current: Option<PageId>,
    pending: Option<PendingFetch>,
    next_fetch_id: u64,
}

impl<D, F, H> Router<D, F, H>
where
    D: DocumentHost,
    F: FetchBackend,
    H: HistoryBackend,
{
    /// Create a router around the given host capabilities.
    pub fn new(config: RouterConfig, document: D, fetch: F, history: H) -> Self {
        let base_title = document.title();
        Self {
            config,
            cache: PartialCache::new(),
            document,
            fetch,
            history,
            base_title,
            current: None,
            pending: None,
            next_fetch_id: 0,
        }
    }

    // ---------------------------------------------------------------
    // Trigger handling
    // ---------------------------------------------------------------

    /// Handle a navigation trigger.
    pub fn handle_trigger(&mut self, trigger: Trigger) -> Result<()> {
        match trigger {
            Trigger::HashChange { hash } => self.navigate_hash(&hash),
            Trigger::LinkClick { href } => {
                let page = match page::from_href(&href) {
                    Some(name) => self.resolve(&name),
                    None => self.home_page(),
                };
                self.navigate(page.clone())?;
                self.push_history_state(&page)
            },
            Trigger::HistoryPop { state } => match state {
                Some(state) => {
                    let page = self.resolve(&state.page);
                    self.navigate(page)
                },
                // The root entry carries no state.
                None => {
                    log::debug!("ignoring history pop with no state");
                    Ok(())
                },
            },
            Trigger::PageLoad { path, hash } => match self.config.route_mode {
                RouteMode::Hash => self.navigate_hash(&hash),
                RouteMode::Path => match page::from_path(&path) {
                    Some(name) => {
                        let page = self.resolve(&name);
                        self.navigate(page)
                    },
                    None => {
                        let home = self.home_page();
                        self.navigate(home.clone())?;
                        self.push_history_state(&home)
                    },
                },
            },
        }
    }

    /// Navigate per a fragment identifier. An empty hash falls back to
    /// the home page and rewrites the location to include it.
    fn navigate_hash(&mut self, hash: &str) -> Result<()> {
        match page::from_hash(hash) {
            Some(name) => {
                let page = self.resolve(&name);
                self.navigate(page)
            },
            None => {
                let home = self.home_page();
                self.navigate(home.clone())?;
                let state = HistoryState {
                    page: home.name().to_string(),
                };
                let url = self.config.page_url(home.name());
                self.history.replace_state(&state, &url)
            },
        }
    }

    // ---------------------------------------------------------------
    // Navigation / content resolution
    // ---------------------------------------------------------------

    /// Navigate to a page: mark its link active, update the title, and
    /// resolve its content through the cache.
    pub fn navigate(&mut self, page: PageId) -> Result<()> {
        log::debug!("navigating to page '{}'", page.name());
        self.update_active_link(&page);
        self.update_title(&page);

        // Any fetch still outstanding belongs to a superseded
        // navigation.
        self.cancel_pending();

        if let Some(body) = self.cache.get(page.name()) {
            self.document.set_content(body);
        } else {
            let id = self.alloc_fetch_id();
            let token = CancelToken::new();
            let request = FetchRequest {
                id,
                path: page.partial_path(&self.config.partial_dir),
                token: token.clone(),
            };
            self.fetch.start_fetch(request)?;
            self.pending = Some(PendingFetch {
                id,
                page: page.clone(),
                token,
            });
        }

        self.current = Some(page);
        Ok(())
    }

    /// Deliver a fetch completion.
    ///
    /// A completion whose id does not match the outstanding fetch was
    /// superseded by a newer navigation and is dropped. A failed fetch
    /// leaves the previous content displayed; there is no retry.
    pub fn on_fetch_complete(&mut self, event: FetchEvent) -> Result<()> {
        let Some(pending) = self.pending.take() else {
            log::debug!("dropping fetch completion {:?}: nothing outstanding", event.id);
            return Ok(());
        };
        if pending.id != event.id {
            log::debug!(
                "dropping stale fetch completion {:?} (outstanding is {:?})",
                event.id,
                pending.id,
            );
            self.pending = Some(pending);
            return Ok(());
        }

        match event.body {
            Ok(body) => {
                self.cache.insert(pending.page.name(), body.clone());
                self.document.set_content(&body);
            },
            Err(e) => {
                log::warn!("fetch for page '{}' failed: {e}", pending.page.name());
            },
        }
        Ok(())
    }

    /// Record a history entry so back/forward can replay `page`.
    pub fn push_history_state(&mut self, page: &PageId) -> Result<()> {
        let state = HistoryState {
            page: page.name().to_string(),
        };
        let url = self.config.page_url(page.name());
        self.history.push_state(&state, &url)
    }

    // ---------------------------------------------------------------
    // Accessors
    // ---------------------------------------------------------------

    /// The most recently navigated page.
    pub fn current_page(&self) -> Option<&PageId> {
        self.current.as_ref()
    }

    /// The partial cache.
    pub fn cache(&self) -> &PartialCache {
        &self.cache
    }

    /// Whether a fetch is outstanding.
    pub fn has_pending_fetch(&self) -> bool {
        self.pending.is_some()
    }

    pub fn config(&self) -> &RouterConfig {
        &self.config
    }

    pub fn document(&self) -> &D {
        &self.document
    }

    pub fn fetch_mut(&mut self) -> &mut F {
        &mut self.fetch
    }

    pub fn history_mut(&mut self) -> &mut H {
        &mut self.history
    }

    // ---------------------------------------------------------------
    // Internals
    // ---------------------------------------------------------------

    fn resolve(&self, name: &str) -> PageId {
        if name == self.config.home_page {
            return PageId::Known(name.to_string());
        }
        PageId::resolve(name, &self.config.known_pages)
    }

    fn home_page(&self) -> PageId {
        PageId::Known(self.config.home_page.clone())
    }

    /// Mark the link whose derived page matches `page` active and clear
    /// all others.
    fn update_active_link(&mut self, page: &PageId) {
        for href in self.document.link_hrefs() {
            let active = page::from_href(&href).is_some_and(|name| name == page.name());
            self.document.set_link_active(&href, active);
        }
    }

    fn update_title(&mut self, page: &PageId) {
        if self.base_title.is_empty() {
            self.document.set_title(&page.display_name());
        } else {
            let title = format!("{}: {}", self.base_title, page.display_name());
            self.document.set_title(&title);
        }
    }

    fn cancel_pending(&mut self) {
        if let Some(pending) = self.pending.take() {
            log::debug!(
                "cancelling superseded fetch {:?} for page '{}'",
                pending.id,
                pending.page.name(),
            );
            pending.token.cancel();
            self.fetch.cancel(pending.id);
        }
    }

    fn alloc_fetch_id(&mut self) -> FetchId {
        self.next_fetch_id += 1;
        FetchId(self.next_fetch_id)
    }
}

// -----------------------------------------------------------------------
// Tests
// -----------------------------------------------------------------------
