//! Hoop Shot - AR basketball session core
//!
//! Core modules:
//! - `sim`: Session logic driven by host AR/physics events (scoring, placement, throws)
//! - `hud`: Score display text
//! - `settings`: Persisted player preferences and tuning
//! - `platform`: Host boundary conversions and web bindings

pub mod hud;
pub mod platform;
pub mod settings;
pub mod sim;

pub use hud::HudText;
pub use settings::Settings;

use glam::{Mat4, Vec3};

/// Game configuration constants
pub mod consts {
    /// Fixed simulation timestep (60 Hz, matches the AR frame rate)
    pub const SIM_DT: f32 = 1.0 / 60.0;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;

    /// Ball sphere radius (meters)
    pub const BALL_RADIUS: f32 = 0.125;
    /// Launch impulse magnitude along the camera's forward axis
    pub const THROW_POWER: f32 = 5.0;
    /// Seconds a thrown ball stays in the scene before despawning
    pub const BALL_LIFETIME_SECS: f32 = 10.0;

    /// Opacity of the marker drawn over detected walls
    pub const PLANE_OVERLAY_OPACITY: f32 = 0.25;

    /// Checkpoint volume position relative to the field origin (under the rim)
    pub const CHECKPOINT_OFFSET: [f32; 3] = [0.0, -0.35, 0.4];
}

/// Rotate a transform about its own X axis.
///
/// The AR engine reports plane and hit transforms with Y as the surface
/// normal, so content authored upright is tipped by -π/2 to lie flush.
#[inline]
pub fn rotate_local_x(transform: Mat4, angle: f32) -> Mat4 {
    transform * Mat4::from_rotation_x(angle)
}

/// Forward direction of a camera transform (the negated Z basis column)
#[inline]
pub fn camera_forward(transform: &Mat4) -> Vec3 {
    -transform.z_axis.truncate()
}

/// Translation component of a transform
#[inline]
pub fn translation_of(transform: &Mat4) -> Vec3 {
    transform.w_axis.truncate()
}
