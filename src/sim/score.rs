//! Throw/hit scoring from physics contact events
//!
//! The physics engine reports contact-end notifications between tagged
//! bodies. A ball passing through the checkpoint volume may separate from it
//! several times in one pass, so a single latch suppresses repeat hits until
//! the next throw re-arms it.

use serde::{Deserialize, Serialize};

/// Identity attached to a physics body when it is created
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EntityTag {
    /// A thrown basketball
    Ball,
    /// The invisible volume under the rim
    Checkpoint,
    /// Hoop, backboard, or any other tagged geometry
    Other,
}

/// Counters shown to the player
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ScoreSnapshot {
    pub throws: u32,
    pub hits: u32,
}

/// Throw and hit counters with a single-flight contact latch
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreTracker {
    throw_count: u32,
    hit_count: u32,
    /// Set after a scored contact; cleared only by the next throw
    contact_suppressed: bool,
}

impl ScoreTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count a launched ball and re-arm scoring for it
    pub fn record_throw(&mut self) {
        self.throw_count = self.throw_count.saturating_add(1);
        self.contact_suppressed = false;
    }

    /// Handle a contact-end event between two bodies.
    ///
    /// Untagged bodies are incidental geometry and the event is dropped.
    /// Returns `true` if this contact scored a hit.
    pub fn record_collision_end(&mut self, a: Option<EntityTag>, b: Option<EntityTag>) -> bool {
        let (Some(a), Some(b)) = (a, b) else {
            return false;
        };

        if !is_ball_checkpoint(a, b) || self.contact_suppressed {
            return false;
        }

        self.hit_count = self.hit_count.saturating_add(1);
        self.contact_suppressed = true;
        true
    }

    /// Start over for a new session
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn snapshot(&self) -> ScoreSnapshot {
        ScoreSnapshot {
            throws: self.throw_count,
            hits: self.hit_count,
        }
    }

    pub fn throw_count(&self) -> u32 {
        self.throw_count
    }

    pub fn hit_count(&self) -> u32 {
        self.hit_count
    }

    pub fn is_contact_suppressed(&self) -> bool {
        self.contact_suppressed
    }
}

/// Unordered match of the {Ball, Checkpoint} pair
#[inline]
fn is_ball_checkpoint(a: EntityTag, b: EntityTag) -> bool {
    matches!(
        (a, b),
        (EntityTag::Ball, EntityTag::Checkpoint) | (EntityTag::Checkpoint, EntityTag::Ball)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    use super::EntityTag::{Ball, Checkpoint, Other};

    fn snap(tracker: &ScoreTracker) -> (u32, u32) {
        let s = tracker.snapshot();
        (s.throws, s.hits)
    }

    #[test]
    fn test_new_tracker_is_zeroed() {
        let tracker = ScoreTracker::new();
        assert_eq!(snap(&tracker), (0, 0));
        assert!(!tracker.is_contact_suppressed());
    }

    #[test]
    fn test_hit_after_throw_then_debounced() {
        let mut tracker = ScoreTracker::new();
        tracker.record_throw();
        assert!(tracker.record_collision_end(Some(Ball), Some(Checkpoint)));
        assert_eq!(tracker.hit_count(), 1);
        assert!(!tracker.record_collision_end(Some(Ball), Some(Checkpoint)));
        assert_eq!(tracker.hit_count(), 1);
    }

    #[test]
    fn test_pair_order_does_not_matter() {
        let mut tracker = ScoreTracker::new();
        tracker.record_throw();
        assert!(tracker.record_collision_end(Some(Checkpoint), Some(Ball)));
        assert_eq!(snap(&tracker), (1, 1));
    }

    #[test]
    fn test_next_throw_rearms_latch() {
        let mut tracker = ScoreTracker::new();
        tracker.record_throw();
        tracker.record_collision_end(Some(Ball), Some(Checkpoint));
        assert!(tracker.is_contact_suppressed());
        tracker.record_throw();
        assert!(!tracker.is_contact_suppressed());
        assert!(tracker.record_collision_end(Some(Ball), Some(Checkpoint)));
        assert_eq!(snap(&tracker), (2, 2));
    }

    #[test]
    fn test_missing_tag_is_ignored() {
        let mut tracker = ScoreTracker::new();
        tracker.record_throw();
        assert!(!tracker.record_collision_end(None, Some(Checkpoint)));
        assert!(!tracker.record_collision_end(Some(Ball), None));
        assert!(!tracker.record_collision_end(None, None));
        assert_eq!(snap(&tracker), (1, 0));
        assert!(!tracker.is_contact_suppressed());
    }

    #[test]
    fn test_other_pairs_never_score() {
        let mut tracker = ScoreTracker::new();
        tracker.record_throw();
        for (a, b) in [
            (Ball, Other),
            (Other, Ball),
            (Checkpoint, Checkpoint),
            (Ball, Ball),
            (Checkpoint, Other),
            (Other, Other),
        ] {
            assert!(!tracker.record_collision_end(Some(a), Some(b)));
        }
        assert_eq!(tracker.hit_count(), 0);
    }

    #[test]
    fn test_reset_from_any_state() {
        let mut tracker = ScoreTracker::new();
        tracker.record_throw();
        tracker.record_throw();
        tracker.record_collision_end(Some(Ball), Some(Checkpoint));
        tracker.reset();
        assert_eq!(tracker, ScoreTracker::default());
        assert_eq!(snap(&tracker), (0, 0));
        assert!(!tracker.is_contact_suppressed());
    }

    #[test]
    fn test_scenario_a_double_contact_counts_once() {
        let mut tracker = ScoreTracker::new();
        tracker.reset();
        tracker.record_throw();
        tracker.record_collision_end(Some(Ball), Some(Checkpoint));
        tracker.record_collision_end(Some(Ball), Some(Checkpoint));
        assert_eq!(snap(&tracker), (1, 1));
    }

    #[test]
    fn test_scenario_b_two_throws_one_hit() {
        let mut tracker = ScoreTracker::new();
        tracker.reset();
        tracker.record_throw();
        tracker.record_throw();
        tracker.record_collision_end(Some(Ball), Some(Checkpoint));
        assert_eq!(snap(&tracker), (2, 1));
    }

    #[test]
    fn test_scenario_c_hit_without_throw_is_counted() {
        // No per-ball identity: a stale contact after reset still scores
        let mut tracker = ScoreTracker::new();
        tracker.reset();
        tracker.record_collision_end(Some(Ball), Some(Checkpoint));
        assert_eq!(snap(&tracker), (0, 1));
    }

    #[test]
    fn test_scenario_d_ball_other_misses() {
        let mut tracker = ScoreTracker::new();
        tracker.reset();
        tracker.record_throw();
        tracker.record_collision_end(Some(Ball), Some(Other));
        assert_eq!(snap(&tracker), (1, 0));
    }

    fn any_tag() -> impl Strategy<Value = Option<EntityTag>> {
        prop_oneof![
            Just(None),
            Just(Some(Ball)),
            Just(Some(Checkpoint)),
            Just(Some(Other)),
        ]
    }

    proptest! {
        #[test]
        fn prop_throw_count_equals_calls(n in 0u32..500) {
            let mut tracker = ScoreTracker::new();
            for _ in 0..n {
                tracker.record_throw();
            }
            prop_assert_eq!(tracker.throw_count(), n);
        }

        #[test]
        fn prop_hits_bounded_by_throws_plus_one(
            events in proptest::collection::vec((any::<bool>(), any_tag(), any_tag()), 0..200)
        ) {
            // At most one hit per latch window: throws + the window before the first throw
            let mut tracker = ScoreTracker::new();
            for (is_throw, a, b) in events {
                if is_throw {
                    tracker.record_throw();
                } else {
                    tracker.record_collision_end(a, b);
                }
            }
            prop_assert!(tracker.hit_count() <= tracker.throw_count() + 1);
        }

        #[test]
        fn prop_non_scoring_pairs_leave_hits_unchanged(a in any_tag(), b in any_tag()) {
            let scoring = matches!(
                (a, b),
                (Some(Ball), Some(Checkpoint)) | (Some(Checkpoint), Some(Ball))
            );
            let mut tracker = ScoreTracker::new();
            tracker.record_throw();
            let scored = tracker.record_collision_end(a, b);
            prop_assert_eq!(scored, scoring);
            prop_assert_eq!(tracker.hit_count(), u32::from(scoring));
        }
    }
}
