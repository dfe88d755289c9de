//! Foundation types shared across the vellum workspace.
//!
//! The anchor derivation lives here, in one dependency-light crate, because it
//! is consumed by both the renderer and the TOC tracker: sharing the single
//! implementation is what guarantees the anchor a heading is rendered with is
//! the same one the tracker later observes.

pub mod anchor;
pub mod toc;

pub use anchor::AnchorId;
pub use toc::{HeadingLevel, TocEntry};
