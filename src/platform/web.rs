//! WebXR host bindings
//!
//! The JS side owns the XR session, hit testing, and the physics world. It
//! forwards tracker, tap, and contact callbacks here and applies the returned
//! JSON outcomes.

use glam::{Vec2, Vec3};
use wasm_bindgen::prelude::*;

use super::{camera_from_slice, hit_from_slice, parse_tag};
use crate::consts::SIM_DT;
use crate::hud::HudText;
use crate::settings::Settings;
use crate::sim::{FixedStep, PlaneAnchor, PlaneKind, Session};

#[wasm_bindgen(start)]
pub fn wasm_main() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Info).is_err() {
        web_sys::console::warn_1(&"logger already initialised".into());
    }
    log::info!("Hoop Shot starting...");
}

/// A play session driven from JS
#[wasm_bindgen]
pub struct HoopSession {
    session: Session,
    hud: HudText,
    clock: FixedStep,
    settings: Settings,
    /// Set by a scored contact when haptics are on; cleared by the host
    vibrate: bool,
}

#[wasm_bindgen]
impl HoopSession {
    #[wasm_bindgen(constructor)]
    pub fn new() -> HoopSession {
        let settings = Settings::load();
        HoopSession {
            session: Session::from_settings(&settings),
            hud: HudText::new(),
            clock: FixedStep::new(),
            settings,
            vibrate: false,
        }
    }

    /// Tracker added an anchor. Returns true if an overlay was created.
    #[wasm_bindgen(js_name = planeDetected)]
    pub fn plane_detected(
        &mut self,
        id: u32,
        alignment: &str,
        cx: f32,
        cy: f32,
        cz: f32,
        width: f32,
        depth: f32,
    ) -> bool {
        let anchor = anchor(id, alignment, cx, cy, cz, width, depth);
        self.session.on_plane_detected(&anchor).is_some()
    }

    #[wasm_bindgen(js_name = planeUpdated)]
    pub fn plane_updated(
        &mut self,
        id: u32,
        alignment: &str,
        cx: f32,
        cy: f32,
        cz: f32,
        width: f32,
        depth: f32,
    ) -> bool {
        let anchor = anchor(id, alignment, cx, cy, cz, width, depth);
        self.session.on_plane_updated(&anchor).is_some()
    }

    /// Screen tap. Matrices are column-major `Float32Array`s of length 16;
    /// pass `undefined` when there is no hit or no camera frame.
    /// Returns the outcome as JSON.
    #[wasm_bindgen(js_name = surfaceTapped)]
    pub fn surface_tapped(
        &mut self,
        hit_anchor_id: u32,
        hit_alignment: &str,
        hit_transform: Option<Vec<f32>>,
        camera_transform: Option<Vec<f32>>,
    ) -> String {
        let hit = hit_transform
            .and_then(|t| hit_from_slice(u64::from(hit_anchor_id), hit_alignment, &t));
        let camera = camera_transform.and_then(|t| camera_from_slice(&t));
        let outcome = self
            .session
            .on_surface_tapped(hit.as_ref(), camera.as_ref(), &mut self.hud);
        serde_json::to_string(&outcome).unwrap_or_default()
    }

    /// Contact ended between two named bodies. Returns true on a scored hit.
    #[wasm_bindgen(js_name = collisionEnded)]
    pub fn collision_ended(&mut self, a: &str, b: &str) -> bool {
        let scored = self
            .session
            .on_collision_end(parse_tag(a), parse_tag(b), &mut self.hud);
        self.vibrate |= self.settings.vibrate_for_hit(scored);
        scored
    }

    /// True once per scored hit while haptics are enabled
    #[wasm_bindgen(js_name = takeVibrate)]
    pub fn take_vibrate(&mut self) -> bool {
        std::mem::take(&mut self.vibrate)
    }

    #[wasm_bindgen(getter, js_name = showStatistics)]
    pub fn show_statistics(&self) -> bool {
        self.settings.show_statistics
    }

    #[wasm_bindgen(setter, js_name = showStatistics)]
    pub fn set_show_statistics(&mut self, on: bool) {
        self.settings.show_statistics = on;
        self.settings.save();
    }

    #[wasm_bindgen(getter)]
    pub fn haptics(&self) -> bool {
        self.settings.haptics
    }

    #[wasm_bindgen(setter)]
    pub fn set_haptics(&mut self, on: bool) {
        self.settings.haptics = on;
        if !on {
            self.vibrate = false;
        }
        self.settings.save();
    }

    /// Per-frame update. Returns ids of balls the host should remove.
    pub fn frame(&mut self, dt: f32) -> Vec<u32> {
        let steps = self.clock.advance(dt);
        let mut expired = Vec::new();
        for _ in 0..steps {
            expired.extend(self.session.tick(SIM_DT));
        }
        expired
    }

    #[wasm_bindgen(js_name = endSession)]
    pub fn end_session(&mut self) {
        self.session.end(&mut self.hud);
    }

    /// Whether the host should run vertical/horizontal plane detection
    #[wasm_bindgen(js_name = detectionEnabled)]
    pub fn detection_enabled(&self) -> bool {
        let detection = self.session.plane_detection();
        detection.vertical || detection.horizontal
    }

    #[wasm_bindgen(getter, js_name = throwsLabel)]
    pub fn throws_label(&self) -> String {
        self.hud.throws_label.clone()
    }

    #[wasm_bindgen(getter, js_name = hitsLabel)]
    pub fn hits_label(&self) -> String {
        self.hud.hits_label.clone()
    }

    /// True once since the last call if a label changed
    #[wasm_bindgen(js_name = takeHudDirty)]
    pub fn take_hud_dirty(&mut self) -> bool {
        std::mem::take(&mut self.hud.dirty)
    }
}

impl Default for HoopSession {
    fn default() -> Self {
        Self::new()
    }
}

fn anchor(id: u32, alignment: &str, cx: f32, cy: f32, cz: f32, width: f32, depth: f32) -> PlaneAnchor {
    PlaneAnchor {
        id: u64::from(id),
        kind: PlaneKind::from_alignment(alignment),
        center: Vec3::new(cx, cy, cz),
        extent: Vec2::new(width, depth),
    }
}
