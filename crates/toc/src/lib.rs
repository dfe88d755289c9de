//! Table of contents: outline extraction and reading-position tracking.
//!
//! The outline mirrors the renderer's anchor derivation (both go through
//! `vellum_types::AnchorId`), so every entry's `target_id` matches the `id`
//! attribute the renderer emitted for that heading. The tracker then keeps an
//! "active heading" and a reading-progress percentage up to date from
//! viewport-visibility events supplied by the host.

mod observer;
mod outline;
mod tracker;

pub use observer::{ObserverOptions, ViewportObserver, VisibilityChange};
pub use outline::Outline;
pub use tracker::TocTracker;
