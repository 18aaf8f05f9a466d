//! Client-side page router with a memoizing partial-content cache.
//!
//! This crate ties page-identifier derivation, the partial cache, and
//! history recording into the [`Router`] -- the component a host drives
//! with navigation triggers. The host environment (document, fetch,
//! history) is injected via the capability traits in `partlet-types`.

pub mod cache;
pub mod config;
pub mod page;
pub mod router;

// -----------------------------------------------------------------------
// Public re-exports
// -----------------------------------------------------------------------

pub use cache::PartialCache;
pub use config::{RouteMode, RouterConfig};
pub use page::PageId;
pub use router::Router;
