//! Hoop placement on a tapped wall

use glam::{Mat4, Vec3};
use serde::{Deserialize, Serialize};

use super::plane::PlaneKind;
use super::score::EntityTag;
use crate::consts::CHECKPOINT_OFFSET;
use crate::{rotate_local_x, translation_of};

/// Host hit-test result against an existing plane (within its extent)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SurfaceHit {
    pub anchor_id: u64,
    pub plane_kind: PlaneKind,
    /// World transform of the hit point
    pub transform: Mat4,
}

/// Where the host should put the hoop scene
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FieldPlacement {
    pub anchor_id: u64,
    /// World transform of the static hoop body
    pub transform: Mat4,
    /// Checkpoint volume position in field-local space
    pub checkpoint_offset: Vec3,
    pub checkpoint_tag: EntityTag,
}

impl FieldPlacement {
    pub fn position(&self) -> Vec3 {
        translation_of(&self.transform)
    }

    /// Checkpoint volume position in world space
    pub fn checkpoint_world(&self) -> Vec3 {
        self.transform.transform_point3(self.checkpoint_offset)
    }
}

/// Place the hoop at a hit point. Only walls accept the field.
pub fn place_field(hit: &SurfaceHit) -> Option<FieldPlacement> {
    if !hit.plane_kind.accepts_field() {
        return None;
    }

    Some(FieldPlacement {
        anchor_id: hit.anchor_id,
        // Hit transforms have Y along the wall normal; stand the hoop upright
        transform: rotate_local_x(hit.transform, -std::f32::consts::FRAC_PI_2),
        checkpoint_offset: Vec3::from_array(CHECKPOINT_OFFSET),
        checkpoint_tag: EntityTag::Checkpoint,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hit(kind: PlaneKind) -> SurfaceHit {
        SurfaceHit {
            anchor_id: 11,
            plane_kind: kind,
            transform: Mat4::from_translation(Vec3::new(0.0, 1.5, -2.0)),
        }
    }

    #[test]
    fn test_wall_accepts_field() {
        let placement = place_field(&hit(PlaneKind::Vertical)).unwrap();
        assert_eq!(placement.anchor_id, 11);
        assert!((placement.position() - Vec3::new(0.0, 1.5, -2.0)).length() < 1e-6);
        assert_eq!(placement.checkpoint_tag, EntityTag::Checkpoint);
    }

    #[test]
    fn test_floor_and_unknown_rejected() {
        assert!(place_field(&hit(PlaneKind::Horizontal)).is_none());
        assert!(place_field(&hit(PlaneKind::Unsupported)).is_none());
    }

    #[test]
    fn test_field_is_tipped_upright() {
        let placement = place_field(&hit(PlaneKind::Vertical)).unwrap();
        let up = placement.transform.y_axis.truncate();
        assert!((up - Vec3::NEG_Z).length() < 1e-5);
    }

    #[test]
    fn test_checkpoint_world_follows_field() {
        let placement = place_field(&hit(PlaneKind::Vertical)).unwrap();
        let expected = placement
            .transform
            .transform_point3(Vec3::from_array(CHECKPOINT_OFFSET));
        assert!((placement.checkpoint_world() - expected).length() < 1e-6);
        assert!(placement.checkpoint_world() != placement.position());
    }
}
