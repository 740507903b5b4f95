//! Detected surface classification and wall overlays
//!
//! The host reports plane anchors with a raw alignment. It is classified once
//! into [`PlaneKind`] at the boundary; everything past that matches on the
//! variant.

use glam::{Vec2, Vec3};
use serde::{Deserialize, Serialize};

use crate::consts::PLANE_OVERLAY_OPACITY;

/// Alignment of a detected surface
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlaneKind {
    /// Upright surface (a wall) - eligible for hoop placement
    Vertical,
    /// Floor, table, ceiling
    Horizontal,
    /// Anything the host cannot classify
    Unsupported,
}

impl PlaneKind {
    /// Classify a host alignment string ("vertical", "horizontal", ...)
    pub fn from_alignment(alignment: &str) -> Self {
        match alignment.trim().to_ascii_lowercase().as_str() {
            "vertical" => PlaneKind::Vertical,
            "horizontal" => PlaneKind::Horizontal,
            _ => PlaneKind::Unsupported,
        }
    }

    pub fn accepts_field(&self) -> bool {
        matches!(self, PlaneKind::Vertical)
    }
}

/// A plane anchor as reported by the host tracking engine
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlaneAnchor {
    pub id: u64,
    pub kind: PlaneKind,
    /// Center relative to the anchor origin
    pub center: Vec3,
    /// Width (x) and depth (y) of the detected extent, in meters
    pub extent: Vec2,
}

/// Translucent marker drawn over a detected wall
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlaneOverlay {
    pub anchor_id: u64,
    pub center: Vec3,
    pub width: f32,
    pub height: f32,
    pub opacity: f32,
    /// Rotation about local X so the quad lies in the anchor's plane
    pub rotation_x: f32,
}

impl PlaneOverlay {
    fn for_anchor(anchor: &PlaneAnchor, opacity: f32) -> Self {
        Self {
            anchor_id: anchor.id,
            // A fresh overlay sits at the anchor origin; only updates recenter it
            center: Vec3::ZERO,
            width: anchor.extent.x,
            height: anchor.extent.y,
            opacity,
            rotation_x: -std::f32::consts::FRAC_PI_2,
        }
    }

    fn fit(&mut self, anchor: &PlaneAnchor) {
        self.center = anchor.center;
        self.width = anchor.extent.x;
        self.height = anchor.extent.y;
    }
}

/// Overlays for every wall seen so far (sorted by anchor id)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlaneOverlays {
    overlays: Vec<PlaneOverlay>,
    opacity: f32,
}

impl Default for PlaneOverlays {
    fn default() -> Self {
        Self::new(PLANE_OVERLAY_OPACITY)
    }
}

impl PlaneOverlays {
    pub fn new(opacity: f32) -> Self {
        Self {
            overlays: Vec::new(),
            opacity: opacity.clamp(0.0, 1.0),
        }
    }

    /// Add an overlay for a newly detected wall.
    ///
    /// Non-vertical anchors are ignored. A repeated anchor id refits the
    /// existing overlay instead of adding a second one.
    pub fn on_plane_detected(&mut self, anchor: &PlaneAnchor) -> Option<PlaneOverlay> {
        if anchor.kind != PlaneKind::Vertical {
            return None;
        }

        match self.index_of(anchor.id) {
            Ok(i) => {
                self.overlays[i].fit(anchor);
                Some(self.overlays[i])
            }
            Err(i) => {
                let overlay = PlaneOverlay::for_anchor(anchor, self.opacity);
                self.overlays.insert(i, overlay);
                log::debug!(
                    "Wall {} detected ({:.2} x {:.2} m)",
                    anchor.id,
                    overlay.width,
                    overlay.height
                );
                Some(overlay)
            }
        }
    }

    /// Move and resize the overlay for an anchor the tracker refined
    pub fn on_plane_updated(&mut self, anchor: &PlaneAnchor) -> Option<PlaneOverlay> {
        if anchor.kind != PlaneKind::Vertical {
            return None;
        }
        let i = self.index_of(anchor.id).ok()?;
        self.overlays[i].fit(anchor);
        Some(self.overlays[i])
    }

    pub fn get(&self, anchor_id: u64) -> Option<&PlaneOverlay> {
        self.index_of(anchor_id).ok().map(|i| &self.overlays[i])
    }

    pub fn iter(&self) -> impl Iterator<Item = &PlaneOverlay> {
        self.overlays.iter()
    }

    pub fn len(&self) -> usize {
        self.overlays.len()
    }

    pub fn is_empty(&self) -> bool {
        self.overlays.is_empty()
    }

    pub fn clear(&mut self) {
        self.overlays.clear();
    }

    fn index_of(&self, anchor_id: u64) -> Result<usize, usize> {
        self.overlays.binary_search_by_key(&anchor_id, |o| o.anchor_id)
    }
}
