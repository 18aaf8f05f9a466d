//! Session history: back/forward stacks over serialized states.
//!
//! Plays the role of the browser's session history. States are opaque to
//! the host, so each entry stores the JSON-serialized state and
//! deserializes it again when a back/forward navigation replays it.

use partlet_types::{HistoryBackend, HistoryState, Result};

/// A single entry in the session history.
#[derive(Debug, Clone)]
struct SessionEntry {
    state_json: String,
    url: String,
}

/// Session history with back/forward stacks.
#[derive(Debug, Default)]
pub struct SessionHistory {
    back_stack: Vec<SessionEntry>,
    forward_stack: Vec<SessionEntry>,
    current: Option<SessionEntry>,
}

impl SessionHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Go back one entry. Returns the state of the entry navigated to,
    /// or `None` when already at the oldest entry.
    pub fn go_back(&mut self) -> Result<Option<HistoryState>> {
        let Some(prev) = self.back_stack.pop() else {
            return Ok(None);
        };
        if let Some(current) = self.current.take() {
            self.forward_stack.push(current);
        }
        let state = serde_json::from_str(&prev.state_json)?;
        self.current = Some(prev);
        Ok(Some(state))
    }

    /// Go forward one entry. Returns the state of the entry navigated
    /// to, or `None` when already at the newest entry.
    pub fn go_forward(&mut self) -> Result<Option<HistoryState>> {
        let Some(next) = self.forward_stack.pop() else {
            return Ok(None);
        };
        if let Some(current) = self.current.take() {
            self.back_stack.push(current);
        }
        let state = serde_json::from_str(&next.state_json)?;
        self.current = Some(next);
        Ok(Some(state))
    }

    pub fn can_go_back(&self) -> bool {
        !self.back_stack.is_empty()
    }

    pub fn can_go_forward(&self) -> bool {
        !self.forward_stack.is_empty()
    }

    /// URL of the current entry, if any.
    pub fn current_url(&self) -> Option<&str> {
        self.current.as_ref().map(|entry| entry.url.as_str())
    }
}

impl HistoryBackend for SessionHistory {
    /// Push a new entry: the current one moves to the back stack and the
    /// forward stack is cleared.
    fn push_state(&mut self, state: &HistoryState, url: &str) -> Result<()> {
        let entry = SessionEntry {
            state_json: serde_json::to_string(state)?,
            url: url.to_string(),
        };
        if let Some(current) = self.current.take() {
            self.back_stack.push(current);
        }
        self.forward_stack.clear();
        self.current = Some(entry);
        Ok(())
    }

    /// Rewrite the current entry in place without growing the history.
    fn replace_state(&mut self, state: &HistoryState, url: &str) -> Result<()> {
        self.current = Some(SessionEntry {
            state_json: serde_json::to_string(state)?,
            url: url.to_string(),
        });
        Ok(())
    }
}
