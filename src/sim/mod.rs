//! Session simulation module
//!
//! All gameplay logic lives here. The host AR/physics engine owns tracking,
//! rendering and rigid-body simulation; this module only reacts to its events:
//! - Single-threaded, driven by host callbacks
//! - Fixed timestep only
//! - No rendering or platform dependencies

pub mod clock;
pub mod field;
pub mod plane;
pub mod score;
pub mod session;
pub mod throw;

pub use clock::FixedStep;
pub use field::{FieldPlacement, SurfaceHit, place_field};
pub use plane::{PlaneAnchor, PlaneKind, PlaneOverlay, PlaneOverlays};
pub use score::{EntityTag, ScoreSnapshot, ScoreTracker};
pub use session::{
    IgnoreReason, LiveBall, PlaneDetection, ScoreDisplay, Session, SessionPhase, SessionTuning,
    TapOutcome,
};
pub use throw::{CameraPose, ThrowRequest, launch_ball};
