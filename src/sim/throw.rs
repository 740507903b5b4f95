//! Ball launch from the camera pose
//!
//! The physics engine owns the flight; this only works out where the ball
//! spawns and the one-shot impulse it receives.

use glam::{Mat4, Vec3};
use serde::{Deserialize, Serialize};

use super::score::EntityTag;
use crate::{camera_forward, translation_of};

/// Camera pose for the current AR frame
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CameraPose {
    /// Camera-to-world transform
    pub transform: Mat4,
}

impl CameraPose {
    pub fn new(transform: Mat4) -> Self {
        Self { transform }
    }

    /// Build from a column-major 4x4 matrix as delivered by the host
    pub fn from_cols_array(cols: &[f32; 16]) -> Self {
        Self::new(Mat4::from_cols_array(cols))
    }

    pub fn position(&self) -> Vec3 {
        translation_of(&self.transform)
    }

    pub fn forward(&self) -> Vec3 {
        camera_forward(&self.transform)
    }
}

/// Everything the host needs to spawn a dynamic ball body
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ThrowRequest {
    /// Session-unique ball id (used for despawn)
    pub ball_id: u32,
    /// World transform of the new ball (the camera's)
    pub transform: Mat4,
    pub radius: f32,
    /// Applied once, as an impulse
    pub impulse: Vec3,
    pub tag: EntityTag,
}

/// Work out the spawn transform and launch impulse for a ball.
///
/// The impulse points along the camera's view direction, scaled by `power`.
pub fn launch_ball(ball_id: u32, camera: &CameraPose, power: f32, radius: f32) -> ThrowRequest {
    ThrowRequest {
        ball_id,
        transform: camera.transform,
        radius,
        impulse: camera.forward() * power,
        tag: EntityTag::Ball,
    }
}
