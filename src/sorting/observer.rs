//! Host notification seam.
//!
//! The controller reports state changes through `SortingObserver`. Hosts
//! typically gate a "Next" button on `on_submitted_change` and persist
//! `on_placements_change` snapshots.

use crate::placement::Placements;

/// Receives controller notifications.
///
/// Both methods default to doing nothing, so implementors override only
/// what they need. `()` is the no-op observer.
pub trait SortingObserver {
    /// The submitted flag changed (or was announced on initialization).
    fn on_submitted_change(&mut self, _submitted: bool) {}

    /// The placement map changed (or was announced on initialization).
    ///
    /// Cloning `placements` is O(1).
    fn on_placements_change(&mut self, _placements: &Placements) {}
}

impl SortingObserver for () {}

impl<O: SortingObserver + ?Sized> SortingObserver for &mut O {
    fn on_submitted_change(&mut self, submitted: bool) {
        (**self).on_submitted_change(submitted);
    }

    fn on_placements_change(&mut self, placements: &Placements) {
        (**self).on_placements_change(placements);
    }
}

impl<O: SortingObserver + ?Sized> SortingObserver for Box<O> {
    fn on_submitted_change(&mut self, submitted: bool) {
        (**self).on_submitted_change(submitted);
    }

    fn on_placements_change(&mut self, placements: &Placements) {
        (**self).on_placements_change(placements);
    }
}

/// Observer built from a pair of closures.
///
/// ## Example
///
/// ```
/// use ethics_bowl::sorting::ObserverFn;
///
/// let mut submitted_log = Vec::new();
/// let observer = ObserverFn::new(|s| submitted_log.push(s), |_| {});
/// # drop(observer);
/// ```
pub struct ObserverFn<S, P>
where
    S: FnMut(bool),
    P: FnMut(&Placements),
{
    on_submitted: S,
    on_placements: P,
}

impl<S, P> ObserverFn<S, P>
where
    S: FnMut(bool),
    P: FnMut(&Placements),
{
    /// Wrap two callbacks.
    pub fn new(on_submitted: S, on_placements: P) -> Self {
        Self {
            on_submitted,
            on_placements,
        }
    }
}

impl<S, P> std::fmt::Debug for ObserverFn<S, P>
where
    S: FnMut(bool),
    P: FnMut(&Placements),
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ObserverFn").finish_non_exhaustive()
    }
}

impl<S, P> SortingObserver for ObserverFn<S, P>
where
    S: FnMut(bool),
    P: FnMut(&Placements),
{
    fn on_submitted_change(&mut self, submitted: bool) {
        (self.on_submitted)(submitted);
    }

    fn on_placements_change(&mut self, placements: &Placements) {
        (self.on_placements)(placements);
    }
}

/// Observer that records every notification. Handy in host tests.
#[derive(Clone, Debug, Default)]
pub struct RecordingObserver {
    /// Every submitted-flag notification, in order.
    pub submitted: Vec<bool>,
    /// Every placement snapshot, in order.
    pub placements: Vec<Placements>,
}

impl RecordingObserver {
    /// Create an empty recorder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Most recent placement snapshot.
    #[must_use]
    pub fn last_placements(&self) -> Option<&Placements> {
        self.placements.last()
    }

    /// Forget everything recorded so far.
    pub fn clear(&mut self) {
        self.submitted.clear();
        self.placements.clear();
    }
}

impl SortingObserver for RecordingObserver {
    fn on_submitted_change(&mut self, submitted: bool) {
        self.submitted.push(submitted);
    }

    fn on_placements_change(&mut self, placements: &Placements) {
        self.placements.push(placements.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Card;

    #[test]
    fn test_closure_observer() {
        let mut seen = Vec::new();
        let mut sizes = Vec::new();
        {
            let mut observer = ObserverFn::new(|s| seen.push(s), |p: &Placements| sizes.push(p.len()));
            observer.on_submitted_change(true);
            observer.on_placements_change(&Placements::all_in_bank(&[Card::new("a", "A")]));
        }

        assert_eq!(seen, vec![true]);
        assert_eq!(sizes, vec![1]);
    }

    fn announce<O: SortingObserver>(mut observer: O) {
        observer.on_submitted_change(false);
    }

    #[test]
    fn test_recording_observer_through_reference() {
        let mut recorder = RecordingObserver::new();
        announce(&mut recorder);

        assert_eq!(recorder.submitted, vec![false]);
        recorder.clear();
        assert!(recorder.submitted.is_empty());
    }

    #[test]
    fn test_unit_observer_is_noop() {
        announce(());
        ().on_placements_change(&Placements::new());
    }
}
