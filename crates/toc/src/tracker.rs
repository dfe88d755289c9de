use std::cmp::Ordering;

use vellum_types::{AnchorId, TocEntry};

use crate::observer::{ViewportObserver, VisibilityChange};
use crate::outline::Outline;

/// Tracks the heading currently being read and the derived reading progress.
///
/// The tracker owns its state exclusively; visibility batches arrive through
/// [`handle_visibility`](TocTracker::handle_visibility) on the host's UI
/// thread. Without an attached observer it degrades to a static outline:
/// entries render, nothing activates.
pub struct TocTracker {
    outline: Outline,
    active: Option<usize>,
    observer: Option<Box<dyn ViewportObserver>>,
}

impl TocTracker {
    pub fn new(outline: Outline) -> Self {
        Self {
            outline,
            active: None,
            observer: None,
        }
    }

    pub fn outline(&self) -> &Outline {
        &self.outline
    }

    /// Registers every outline entry with the observer and takes ownership of
    /// it. An empty outline registers nothing.
    pub fn attach(&mut self, mut observer: Box<dyn ViewportObserver>) {
        for entry in self.outline.entries() {
            observer.observe(&entry.target_id);
        }
        self.observer = Some(observer);
    }

    /// Releases all observations and drops the observer. Events delivered
    /// after this point no longer mutate tracker state.
    pub fn detach(&mut self) {
        if let Some(mut observer) = self.observer.take() {
            for entry in self.outline.entries() {
                observer.unobserve(&entry.target_id);
            }
        }
    }

    pub fn is_attached(&self) -> bool {
        self.observer.is_some()
    }

    /// Processes a batch of visibility transitions.
    ///
    /// Among the entries reported as intersecting, the one with the highest
    /// intersection ratio becomes active; ties resolve to the earliest in
    /// document order. Targets that are not outline anchors are ignored, as
    /// is the whole batch when no observer is attached. Returns `true` when
    /// the active heading changed.
    pub fn handle_visibility(&mut self, changes: &[VisibilityChange]) -> bool {
        if self.observer.is_none() {
            return false;
        }
        let winner = changes
            .iter()
            .filter(|change| change.is_intersecting)
            .filter_map(|change| {
                self.outline
                    .position(&change.target)
                    .map(|index| (index, change.intersection_ratio))
            })
            .max_by(|(index_a, ratio_a), (index_b, ratio_b)| {
                ratio_a
                    .partial_cmp(ratio_b)
                    .unwrap_or(Ordering::Equal)
                    .then_with(|| index_b.cmp(index_a))
            })
            .map(|(index, _)| index);

        match winner {
            Some(index) if self.active != Some(index) => {
                log::trace!(
                    "active heading -> {} ({}/{})",
                    self.outline.entries()[index].target_id,
                    index + 1,
                    self.outline.len()
                );
                self.active = Some(index);
                true
            }
            _ => false,
        }
    }

    pub fn active_index(&self) -> Option<usize> {
        self.active
    }

    pub fn active_id(&self) -> Option<&AnchorId> {
        self.active.map(|index| &self.outline.entries()[index].target_id)
    }

    pub fn active_entry(&self) -> Option<&TocEntry> {
        self.active.map(|index| &self.outline.entries()[index])
    }

    /// Reading progress: `(active position + 1) / entry count * 100`, or zero
    /// before any heading has activated.
    pub fn progress_percent(&self) -> f64 {
        match self.active {
            Some(index) => (index + 1) as f64 / self.outline.len() as f64 * 100.0,
            None => 0.0,
        }
    }

    /// Scrolls the given entry's heading into view. A direct imperative
    /// action on the viewport service; does not change the active heading,
    /// which follows from the resulting visibility events.
    pub fn select(&mut self, index: usize) {
        let Some(entry) = self.outline.entries().get(index) else {
            return;
        };
        let target = entry.target_id.clone();
        if let Some(observer) = self.observer.as_mut() {
            observer.scroll_to(&target);
        }
    }
}

impl Drop for TocTracker {
    fn drop(&mut self) {
        self.detach();
    }
}
