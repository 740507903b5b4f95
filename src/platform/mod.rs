//! Platform abstraction layer
//!
//! Converts raw host values (tag names, flat matrices, alignment strings)
//! into session types once, at the boundary. On wasm32 `web` exports the
//! session to a JS/WebXR host.

#[cfg(target_arch = "wasm32")]
pub mod web;

use glam::Mat4;

use crate::sim::{CameraPose, EntityTag, PlaneKind, SurfaceHit};

/// Map a body name set by the host scene to its tag.
///
/// Unnamed or unrecognized bodies are untagged geometry.
pub fn parse_tag(name: &str) -> Option<EntityTag> {
    match name {
        "ball" => Some(EntityTag::Ball),
        "checkpoint" => Some(EntityTag::Checkpoint),
        "hoop" | "backboard" | "field" => Some(EntityTag::Other),
        _ => None,
    }
}

/// Column-major 4x4 matrix from a flat slice of exactly 16 floats
pub fn mat4_from_slice(values: &[f32]) -> Option<Mat4> {
    let cols: &[f32; 16] = values.try_into().ok()?;
    if cols.iter().any(|v| !v.is_finite()) {
        return None;
    }
    Some(Mat4::from_cols_array(cols))
}

pub fn camera_from_slice(values: &[f32]) -> Option<CameraPose> {
    mat4_from_slice(values).map(CameraPose::new)
}

pub fn hit_from_slice(anchor_id: u64, alignment: &str, transform: &[f32]) -> Option<SurfaceHit> {
    Some(SurfaceHit {
        anchor_id,
        plane_kind: PlaneKind::from_alignment(alignment),
        transform: mat4_from_slice(transform)?,
    })
}
