//! On-screen score text
//!
//! The host binds these strings to its text nodes.

use crate::sim::{ScoreDisplay, ScoreSnapshot};

/// Formatted counter labels, refreshed by session display callbacks
#[derive(Debug, Clone, PartialEq)]
pub struct HudText {
    pub throws_label: String,
    pub hits_label: String,
    throws: u32,
    hits: u32,
    /// Set whenever a label changes; the host clears it after redrawing
    pub dirty: bool,
}

impl Default for HudText {
    fn default() -> Self {
        Self::from_snapshot(ScoreSnapshot::default())
    }
}

impl HudText {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_snapshot(snapshot: ScoreSnapshot) -> Self {
        Self {
            throws_label: throws_label(snapshot.throws),
            hits_label: hits_label(snapshot.hits),
            throws: snapshot.throws,
            hits: snapshot.hits,
            dirty: true,
        }
    }

    /// Hit ratio in [0, 1], or None before the first throw
    pub fn accuracy(&self) -> Option<f32> {
        if self.throws == 0 {
            return None;
        }
        Some((self.hits as f32 / self.throws as f32).min(1.0))
    }

    /// Accuracy as a whole percentage, "--" before the first throw
    pub fn accuracy_label(&self) -> String {
        match self.accuracy() {
            Some(ratio) => format!("{:.0}%", ratio * 100.0),
            None => "--".to_string(),
        }
    }
}

impl ScoreDisplay for HudText {
    fn update_throw_display(&mut self, throws: u32) {
        self.throws = throws;
        self.throws_label = throws_label(throws);
        self.dirty = true;
    }

    fn update_hit_display(&mut self, hits: u32) {
        self.hits = hits;
        self.hits_label = hits_label(hits);
        self.dirty = true;
    }
}

fn throws_label(n: u32) -> String {
    format!("Throws: {}", n)
}

fn hits_label(n: u32) -> String {
    format!("Hits: {}", n)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_labels() {
        let hud = HudText::new();
        assert_eq!(hud.throws_label, "Throws: 0");
        assert_eq!(hud.hits_label, "Hits: 0");
        assert_eq!(hud.accuracy(), None);
        assert_eq!(hud.accuracy_label(), "--");
    }

    #[test]
    fn test_updates_refresh_labels() {
        let mut hud = HudText::new();
        hud.dirty = false;
        hud.update_throw_display(4);
        hud.update_hit_display(3);
        assert!(hud.dirty);
        assert_eq!(hud.throws_label, "Throws: 4");
        assert_eq!(hud.hits_label, "Hits: 3");
        assert_eq!(hud.accuracy_label(), "75%");
    }

    #[test]
    fn test_accuracy_clamped_when_hits_exceed_throws() {
        // A stale contact can score before any throw
        let hud = HudText::from_snapshot(ScoreSnapshot { throws: 1, hits: 2 });
        assert_eq!(hud.accuracy(), Some(1.0));
    }
}
