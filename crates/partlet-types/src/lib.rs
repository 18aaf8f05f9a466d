//! Foundation types and traits for Partlet.
//!
//! This crate contains the host-agnostic core types shared by all Partlet
//! crates: navigation trigger events, history state, the capability traits
//! a host environment implements (document, fetch, history), fetch
//! request/completion types, and error types. The router never talks to a
//! real browser; it only sees these traits.

pub mod error;
pub mod host;
pub mod trigger;

pub use error::{PartletError, Result};
pub use host::{
    CancelToken, DocumentHost, FetchBackend, FetchEvent, FetchId, FetchRequest, HistoryBackend,
};
pub use trigger::{HistoryState, Trigger};
