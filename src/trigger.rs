//! One-shot viewport triggers.

use crate::config::ConfigError;

/// A single observation reported by the host's intersection primitive.
#[derive(Clone, Debug)]
pub struct IntersectionEntry<K> {
    /// The observed target
    pub target: K,
    /// Whether the target currently intersects the viewport
    pub is_intersecting: bool,
    /// Visible fraction of the target's box (0.0 - 1.0)
    pub ratio: f64,
}

impl<K> IntersectionEntry<K> {
    pub fn new(target: K, is_intersecting: bool, ratio: f64) -> Self {
        Self {
            target,
            is_intersecting,
            ratio,
        }
    }
}

/// Visibility state of a registered target.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Visibility {
    /// Registered, never seen intersecting
    Unseen,
    /// Fired once; no longer observed
    Seen,
}

/// Platform-agnostic registry that fires each target at most once.
///
/// The trigger does not talk to the host directly. The caller feeds it the
/// entry batches delivered by its intersection observer and unobserves every
/// target returned from [`handle_entries`](Self::handle_entries).
///
/// ## Example
///
/// ```rust
/// use page_fx::{IntersectionEntry, ViewportTrigger};
///
/// let mut trigger = ViewportTrigger::new(0.15).unwrap();
/// trigger.observe("card-a");
/// trigger.observe("card-b");
///
/// let fired = trigger.handle_entries(vec![
///     IntersectionEntry::new("card-a", true, 0.2),
///     IntersectionEntry::new("card-b", false, 0.0),
/// ]);
/// assert_eq!(fired, vec!["card-a"]);
///
/// // Scrolling away and back does not fire again
/// let fired = trigger.handle_entries(vec![IntersectionEntry::new("card-a", true, 1.0)]);
/// assert!(fired.is_empty());
/// ```
#[derive(Clone, Debug)]
pub struct ViewportTrigger<K> {
    threshold: f64,
    targets: Vec<(K, Visibility)>,
}

impl<K: PartialEq + Clone> ViewportTrigger<K> {
    /// Create a trigger for the given visibility-ratio threshold.
    pub fn new(threshold: f64) -> Result<Self, ConfigError> {
        if !(0.0..=1.0).contains(&threshold) {
            return Err(ConfigError::InvalidThreshold {
                name: "trigger",
                value: threshold,
            });
        }
        Ok(Self {
            threshold,
            targets: Vec::new(),
        })
    }

    /// The threshold handed to the host observer.
    #[inline]
    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    /// Register a target. Registering the same target twice is a no-op,
    /// including after it has fired.
    ///
    /// Returns `true` when the target was newly registered.
    pub fn observe(&mut self, target: K) -> bool {
        if self.position(&target).is_some() {
            return false;
        }
        self.targets.push((target, Visibility::Unseen));
        true
    }

    /// Visibility state of a target, or `None` if it was never registered.
    pub fn visibility(&self, target: &K) -> Option<Visibility> {
        self.position(target).map(|idx| self.targets[idx].1)
    }

    /// Check whether a target is still waiting to fire.
    pub fn is_observing(&self, target: &K) -> bool {
        self.visibility(target) == Some(Visibility::Unseen)
    }

    /// Number of targets still waiting to fire.
    pub fn pending(&self) -> usize {
        self.targets
            .iter()
            .filter(|(_, v)| *v == Visibility::Unseen)
            .count()
    }

    /// Process one batch of entries.
    ///
    /// Returns the targets that fired, in entry order. Each returned target
    /// transitions to [`Visibility::Seen`] and must be unobserved by the
    /// caller. Entries for unknown or already-fired targets are ignored.
    pub fn handle_entries<I>(&mut self, entries: I) -> Vec<K>
    where
        I: IntoIterator<Item = IntersectionEntry<K>>,
    {
        let mut fired = Vec::new();
        for entry in entries {
            if !entry.is_intersecting {
                continue;
            }
            let Some(idx) = self.position(&entry.target) else {
                continue;
            };
            if self.targets[idx].1 == Visibility::Seen {
                continue;
            }
            self.targets[idx].1 = Visibility::Seen;
            log::debug!(
                "viewport trigger fired (ratio {:.2}, threshold {:.2})",
                entry.ratio,
                self.threshold
            );
            fired.push(entry.target);
        }
        fired
    }

    fn position(&self, target: &K) -> Option<usize> {
        self.targets.iter().position(|(k, _)| k == target)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_out_of_range_threshold() {
        assert!(ViewportTrigger::<u32>::new(-0.1).is_err());
        assert!(ViewportTrigger::<u32>::new(1.5).is_err());
        assert!(ViewportTrigger::<u32>::new(f64::NAN).is_err());
        assert!(ViewportTrigger::<u32>::new(0.0).is_ok());
        assert!(ViewportTrigger::<u32>::new(1.0).is_ok());
    }

    #[test]
    fn test_fires_at_most_once() {
        let mut trigger = ViewportTrigger::new(0.5).unwrap();
        trigger.observe(1u32);

        let mut total = 0;
        for visible in [true, false, true, false, true] {
            let ratio = if visible { 0.8 } else { 0.0 };
            total += trigger
                .handle_entries(vec![IntersectionEntry::new(1, visible, ratio)])
                .len();
        }
        assert_eq!(total, 1);
        assert_eq!(trigger.visibility(&1), Some(Visibility::Seen));
    }

    #[test]
    fn test_never_intersecting_never_fires() {
        let mut trigger = ViewportTrigger::new(0.1).unwrap();
        trigger.observe(7u32);
        for _ in 0..3 {
            let fired = trigger.handle_entries(vec![IntersectionEntry::new(7, false, 0.0)]);
            assert!(fired.is_empty());
        }
        assert!(trigger.is_observing(&7));
        assert_eq!(trigger.pending(), 1);
    }

    #[test]
    fn test_batch_preserves_entry_order() {
        let mut trigger = ViewportTrigger::new(0.1).unwrap();
        for id in [3u32, 1, 2] {
            trigger.observe(id);
        }

        let fired = trigger.handle_entries(vec![
            IntersectionEntry::new(2, true, 0.3),
            IntersectionEntry::new(3, true, 0.3),
            IntersectionEntry::new(1, false, 0.0),
        ]);
        assert_eq!(fired, vec![2, 3]);
        assert_eq!(trigger.pending(), 1);
    }

    #[test]
    fn test_reobserve_after_fire_is_noop() {
        let mut trigger = ViewportTrigger::new(0.1).unwrap();
        assert!(trigger.observe(1u32));
        assert!(!trigger.observe(1));
        trigger.handle_entries(vec![IntersectionEntry::new(1, true, 1.0)]);

        assert!(!trigger.observe(1));
        let fired = trigger.handle_entries(vec![IntersectionEntry::new(1, true, 1.0)]);
        assert!(fired.is_empty());
    }

    #[test]
    fn test_unknown_targets_ignored() {
        let mut trigger = ViewportTrigger::new(0.1).unwrap();
        trigger.observe(1u32);
        let fired = trigger.handle_entries(vec![IntersectionEntry::new(99, true, 1.0)]);
        assert!(fired.is_empty());
        assert_eq!(trigger.visibility(&99), None);
    }

    #[test]
    fn test_duplicate_entries_in_one_batch() {
        let mut trigger = ViewportTrigger::new(0.1).unwrap();
        trigger.observe(1u32);
        let fired = trigger.handle_entries(vec![
            IntersectionEntry::new(1, true, 0.2),
            IntersectionEntry::new(1, true, 0.4),
        ]);
        assert_eq!(fired, vec![1]);
    }
}
