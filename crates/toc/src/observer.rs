//! Viewport visibility as an injected capability.
//!
//! Visibility observation and scrolling are host-environment concerns, so the
//! tracker talks to them through this trait. Hosts wrap their platform
//! observer; tests substitute a double that fires synthetic events.

use vellum_types::AnchorId;

/// Configuration for the visibility window.
///
/// The defaults shrink the observation band to the middle of the viewport
/// (top margin −20%, bottom margin −35%) and require half the element to be
/// inside it, which activates the section the reader is actually in rather
/// than whatever heading grazes the viewport edge.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ObserverOptions {
    /// Top root-margin adjustment, as a percentage of viewport height.
    pub top_margin_percent: f32,
    /// Bottom root-margin adjustment, as a percentage of viewport height.
    pub bottom_margin_percent: f32,
    /// Intersection ratio at which an element counts as in view.
    pub threshold: f32,
}

impl Default for ObserverOptions {
    fn default() -> Self {
        Self {
            top_margin_percent: -20.0,
            bottom_margin_percent: -35.0,
            threshold: 0.5,
        }
    }
}

/// Host-provided viewport service.
///
/// `observe`/`unobserve` manage visibility observation for a heading anchor;
/// `scroll_to` smoothly scrolls the anchor's element to the top of the
/// viewport. Scrolling is a direct imperative action, not mediated by tracker
/// state.
pub trait ViewportObserver {
    fn observe(&mut self, target: &AnchorId);
    fn unobserve(&mut self, target: &AnchorId);
    fn scroll_to(&mut self, target: &AnchorId);
}

/// One element's visibility transition, as reported by the host.
///
/// The host delivers these in batches at its own cadence; a batch may contain
/// several intersecting headings at once (fast scroll, resize).
#[derive(Debug, Clone, PartialEq)]
pub struct VisibilityChange {
    pub target: AnchorId,
    pub is_intersecting: bool,
    pub intersection_ratio: f32,
}
