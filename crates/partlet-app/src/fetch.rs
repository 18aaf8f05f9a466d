//! Directory-backed fetch backend.
//!
//! Resolves partial paths against a local pages directory. Transfers do
//! not complete inside `start_fetch`; they queue until the main loop
//! drains them with [`DirFetchBackend::take_completions`], which mirrors
//! the deferred-completion model the router is written against.

use std::collections::VecDeque;
use std::path::{Path, PathBuf};

use partlet_types::{FetchBackend, FetchEvent, FetchRequest, PartletError, Result};

/// Fetch backend serving partials from a directory.
pub struct DirFetchBackend {
    root: PathBuf,
    in_flight: VecDeque<FetchRequest>,
}

impl DirFetchBackend {
    pub fn new(root: &Path) -> Self {
        Self {
            root: root.to_path_buf(),
            in_flight: VecDeque::new(),
        }
    }

    /// Resolve queued transfers, in issue order. Requests whose token
    /// was cancelled are dropped unread.
    pub fn take_completions(&mut self) -> Vec<FetchEvent> {
        let mut events = Vec::new();
        while let Some(request) = self.in_flight.pop_front() {
            if request.token.is_cancelled() {
                log::debug!("skipping cancelled fetch {:?}", request.id);
                continue;
            }

            let path = self.resolve(&request.path);
            let body = std::fs::read_to_string(&path)
                .map_err(|e| PartletError::Fetch(format!("{}: {e}", path.display())));
            events.push(FetchEvent {
                id: request.id,
                body,
            });
        }
        events
    }

    /// Map a partial path like `"../about.html"` onto the pages
    /// directory, ignoring relative-directory prefixes.
    fn resolve(&self, partial_path: &str) -> PathBuf {
        let mut trimmed = partial_path;
        loop {
            if let Some(rest) = trimmed.strip_prefix("../") {
                trimmed = rest;
            } else if let Some(rest) = trimmed.strip_prefix("./") {
                trimmed = rest;
            } else if let Some(rest) = trimmed.strip_prefix('/') {
                trimmed = rest;
            } else {
                break;
            }
        }
        self.root.join(trimmed)
    }
}

impl FetchBackend for DirFetchBackend {
    fn start_fetch(&mut self, request: FetchRequest) -> Result<()> {
        log::debug!("fetch {:?} queued for '{}'", request.id, request.path);
        self.in_flight.push_back(request);
        Ok(())
    }
}
