//! Play session: the single owner of per-session state
//!
//! The host AR/physics engine calls in on one logical thread (its per-frame
//! callback). Nothing here blocks, suspends, or performs I/O.

use serde::{Deserialize, Serialize};

use super::field::{FieldPlacement, SurfaceHit, place_field};
use super::plane::{PlaneAnchor, PlaneOverlay, PlaneOverlays};
use super::score::{EntityTag, ScoreSnapshot, ScoreTracker};
use super::throw::{CameraPose, ThrowRequest, launch_ball};
use crate::settings::Settings;

/// Receives counter changes; the host renders them as visible text.
///
/// Called synchronously from inside session handlers. Implementations must
/// not call back into the session.
pub trait ScoreDisplay {
    fn update_throw_display(&mut self, throws: u32);
    fn update_hit_display(&mut self, hits: u32);
}

/// Discards display updates (headless hosts, tests)
impl ScoreDisplay for () {
    fn update_throw_display(&mut self, _throws: u32) {}
    fn update_hit_display(&mut self, _hits: u32) {}
}

/// Current phase of the session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionPhase {
    /// Looking for a wall; a tap places the hoop
    Scanning,
    /// Hoop placed; a tap throws a ball
    Playing,
}

/// Plane detection the host tracking session should run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlaneDetection {
    pub vertical: bool,
    pub horizontal: bool,
}

impl PlaneDetection {
    pub const SCANNING: Self = Self {
        vertical: true,
        horizontal: true,
    };
    pub const OFF: Self = Self {
        vertical: false,
        horizontal: false,
    };
}

/// Why a tap did nothing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum IgnoreReason {
    /// Tap missed every detected plane
    NoPlaneHit,
    /// Tap hit a plane that cannot hold the hoop
    UnsupportedPlane,
    /// Tracking has no current frame
    NoCameraFrame,
}

/// Result of a surface tap
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum TapOutcome {
    /// Hoop placed; the host should add the field and rerun tracking with
    /// detection off and existing anchors removed
    FieldPlaced(FieldPlacement),
    /// Ball spawned; the host should add the body and apply the impulse
    BallLaunched(ThrowRequest),
    Ignored(IgnoreReason),
}

/// A ball in flight, removed once its lifetime runs out
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LiveBall {
    pub id: u32,
    /// Seconds since launch
    pub age: f32,
}

/// Per-session tuning, copied from settings when the session starts
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SessionTuning {
    pub throw_power: f32,
    pub ball_radius: f32,
    pub ball_lifetime_secs: f32,
    pub plane_overlay_opacity: f32,
}

impl From<&Settings> for SessionTuning {
    fn from(settings: &Settings) -> Self {
        Self {
            throw_power: settings.throw_power,
            ball_radius: settings.ball_radius,
            ball_lifetime_secs: settings.ball_lifetime_secs,
            plane_overlay_opacity: settings.plane_overlay_opacity,
        }
    }
}

impl Default for SessionTuning {
    fn default() -> Self {
        Self::from(&Settings::default())
    }
}

/// The active play session
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
    pub tuning: SessionTuning,
    phase: SessionPhase,
    detection: PlaneDetection,
    score: ScoreTracker,
    overlays: PlaneOverlays,
    field: Option<FieldPlacement>,
    /// Balls in flight (sorted by id)
    balls: Vec<LiveBall>,
    /// Simulation tick counter
    time_ticks: u64,
    next_ball_id: u32,
}

impl Default for Session {
    fn default() -> Self {
        Self::new(SessionTuning::default())
    }
}

impl Session {
    pub fn new(tuning: SessionTuning) -> Self {
        Self {
            tuning,
            phase: SessionPhase::Scanning,
            detection: PlaneDetection::SCANNING,
            score: ScoreTracker::new(),
            overlays: PlaneOverlays::new(tuning.plane_overlay_opacity),
            field: None,
            balls: Vec::new(),
            time_ticks: 0,
            next_ball_id: 1,
        }
    }

    pub fn from_settings(settings: &Settings) -> Self {
        Self::new(SessionTuning::from(settings))
    }

    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    pub fn plane_detection(&self) -> PlaneDetection {
        self.detection
    }

    pub fn snapshot(&self) -> ScoreSnapshot {
        self.score.snapshot()
    }

    pub fn score(&self) -> &ScoreTracker {
        &self.score
    }

    pub fn field(&self) -> Option<&FieldPlacement> {
        self.field.as_ref()
    }

    pub fn overlays(&self) -> &PlaneOverlays {
        &self.overlays
    }

    pub fn balls(&self) -> &[LiveBall] {
        &self.balls
    }

    pub fn time_ticks(&self) -> u64 {
        self.time_ticks
    }

    /// A new plane anchor was added by the tracker
    pub fn on_plane_detected(&mut self, anchor: &PlaneAnchor) -> Option<PlaneOverlay> {
        if self.phase != SessionPhase::Scanning {
            return None;
        }
        self.overlays.on_plane_detected(anchor)
    }

    /// The tracker refined an existing anchor
    pub fn on_plane_updated(&mut self, anchor: &PlaneAnchor) -> Option<PlaneOverlay> {
        if self.phase != SessionPhase::Scanning {
            return None;
        }
        self.overlays.on_plane_updated(anchor)
    }

    /// The player tapped the screen.
    ///
    /// While scanning, `hit` is the hit-test against existing planes. Once
    /// playing, `camera` is the current frame's pose.
    pub fn on_surface_tapped<D: ScoreDisplay + ?Sized>(
        &mut self,
        hit: Option<&SurfaceHit>,
        camera: Option<&CameraPose>,
        display: &mut D,
    ) -> TapOutcome {
        let before = self.score.snapshot();

        let outcome = match self.phase {
            SessionPhase::Playing => self.throw_ball(camera),
            SessionPhase::Scanning => self.place(hit),
        };

        self.publish(before, display);
        outcome
    }

    /// Contact between two bodies ended
    pub fn on_collision_end<D: ScoreDisplay + ?Sized>(
        &mut self,
        a: Option<EntityTag>,
        b: Option<EntityTag>,
        display: &mut D,
    ) -> bool {
        let before = self.score.snapshot();
        let scored = self.score.record_collision_end(a, b);
        if scored {
            log::debug!("Hit! {}/{}", self.score.hit_count(), self.score.throw_count());
        }
        self.publish(before, display);
        scored
    }

    /// Age live balls by `dt` seconds (normally `SIM_DT`, see
    /// [`FixedStep`](super::FixedStep)). Returns ids of balls whose lifetime
    /// ran out; the host removes their bodies.
    ///
    /// Negative or non-finite `dt` is dropped without advancing.
    /// Despawning a ball that never reached the checkpoint leaves the
    /// contact latch as it is; only the next throw re-arms it.
    pub fn tick(&mut self, dt: f32) -> Vec<u32> {
        if !(dt.is_finite() && dt >= 0.0) {
            log::warn!("Ignoring invalid tick dt {}", dt);
            return Vec::new();
        }
        self.time_ticks += 1;

        let lifetime = self.tuning.ball_lifetime_secs;
        let mut expired = Vec::new();
        self.balls.retain_mut(|ball| {
            ball.age += dt;
            if ball.age >= lifetime {
                expired.push(ball.id);
                false
            } else {
                true
            }
        });

        if !expired.is_empty() {
            log::debug!("Despawned balls {:?}", expired);
        }
        expired
    }

    /// End the session and go back to scanning for a wall
    pub fn end<D: ScoreDisplay + ?Sized>(&mut self, display: &mut D) {
        let before = self.score.snapshot();
        log::info!(
            "Session ended: {} hits from {} throws",
            before.hits,
            before.throws
        );

        self.score.reset();
        self.phase = SessionPhase::Scanning;
        self.detection = PlaneDetection::SCANNING;
        self.field = None;
        self.balls.clear();
        self.overlays.clear();
        self.publish(before, display);
    }

    fn place(&mut self, hit: Option<&SurfaceHit>) -> TapOutcome {
        let Some(hit) = hit else {
            return TapOutcome::Ignored(IgnoreReason::NoPlaneHit);
        };
        let Some(placement) = place_field(hit) else {
            log::debug!("Tap on {:?} plane {} ignored", hit.plane_kind, hit.anchor_id);
            return TapOutcome::Ignored(IgnoreReason::UnsupportedPlane);
        };

        self.score.reset();
        self.phase = SessionPhase::Playing;
        self.detection = PlaneDetection::OFF;
        self.overlays.clear();
        self.balls.clear();
        self.field = Some(placement);

        log::info!(
            "Hoop placed on wall {} at {:?}",
            placement.anchor_id,
            placement.position()
        );
        TapOutcome::FieldPlaced(placement)
    }

    fn throw_ball(&mut self, camera: Option<&CameraPose>) -> TapOutcome {
        let Some(camera) = camera else {
            return TapOutcome::Ignored(IgnoreReason::NoCameraFrame);
        };

        let id = self.next_ball_id;
        self.next_ball_id = self.next_ball_id.wrapping_add(1).max(1);

        let request = launch_ball(id, camera, self.tuning.throw_power, self.tuning.ball_radius);
        self.balls.push(LiveBall { id, age: 0.0 });
        self.score.record_throw();

        log::debug!("Ball {} thrown, impulse {:?}", id, request.impulse);
        TapOutcome::BallLaunched(request)
    }

    fn publish<D: ScoreDisplay + ?Sized>(&self, before: ScoreSnapshot, display: &mut D) {
        let after = self.score.snapshot();
        if after.throws != before.throws {
            display.update_throw_display(after.throws);
        }
        if after.hits != before.hits {
            display.update_hit_display(after.hits);
        }
    }
}
