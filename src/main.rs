//! Hoop Shot entry point
//!
//! The web build is driven by a WebXR host through `platform::web`. The native
//! binary has no AR tracking, so it replays a seeded stand-in host: one wall
//! is detected, the hoop is placed, and balls are thrown with contact events
//! rolled from the RNG.

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Hoop Shot (native) starting...");

    let seed = std::env::args()
        .nth(1)
        .and_then(|s| s.parse::<u64>().ok())
        .unwrap_or(2022);
    let throws = std::env::args()
        .nth(2)
        .and_then(|s| s.parse::<u32>().ok())
        .unwrap_or(20);

    let settings = hoop_shot::Settings::load();
    let hud = demo::run(seed, throws, &settings);

    println!("{}", hud.throws_label);
    println!("{}", hud.hits_label);
    println!("Accuracy: {}", hud.accuracy_label());
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is platform::web::wasm_main, this is just to satisfy the compiler
}

#[cfg(not(target_arch = "wasm32"))]
mod demo {
    use glam::{Mat4, Vec2, Vec3};
    use rand::{Rng, SeedableRng};
    use rand_pcg::Pcg32;

    use hoop_shot::consts::SIM_DT;
    use hoop_shot::sim::{
        CameraPose, EntityTag, PlaneAnchor, PlaneKind, Session, SurfaceHit, TapOutcome,
    };
    use hoop_shot::{HudText, Settings};

    /// Chance a thrown ball drops through the checkpoint
    const MAKE_CHANCE: f64 = 0.45;
    /// Frames between throws
    const FRAMES_PER_THROW: u32 = 45;

    pub fn run(seed: u64, throws: u32, settings: &Settings) -> HudText {
        let mut rng = Pcg32::seed_from_u64(seed);
        let mut session = Session::from_settings(settings);
        let mut hud = HudText::new();

        let wall = PlaneAnchor {
            id: 1,
            kind: PlaneKind::Vertical,
            center: Vec3::ZERO,
            extent: Vec2::new(2.4, 1.8),
        };
        session.on_plane_detected(&wall);
        session.on_plane_updated(&PlaneAnchor {
            extent: Vec2::new(3.0, 2.2),
            ..wall
        });

        let hit = SurfaceHit {
            anchor_id: wall.id,
            plane_kind: PlaneKind::Vertical,
            transform: Mat4::from_translation(Vec3::new(0.0, 1.6, -3.0)),
        };
        match session.on_surface_tapped(Some(&hit), None, &mut hud) {
            TapOutcome::FieldPlaced(field) => {
                log::info!("Checkpoint at {:?}", field.checkpoint_world());
            }
            other => {
                log::warn!("Hoop placement failed: {:?}", other);
                return hud;
            }
        }

        for _ in 0..throws {
            // Player sways a little between throws
            let yaw = rng.random_range(-0.15..0.15);
            let pitch = rng.random_range(0.05..0.25);
            let camera = CameraPose::new(
                Mat4::from_translation(Vec3::new(0.0, 1.5, 0.0))
                    * Mat4::from_rotation_y(yaw)
                    * Mat4::from_rotation_x(pitch),
            );
            session.on_surface_tapped(None, Some(&camera), &mut hud);

            // Backboard or rim contacts first
            for _ in 0..rng.random_range(0..3) {
                session.on_collision_end(Some(EntityTag::Ball), Some(EntityTag::Other), &mut hud);
            }
            // Incidental untagged geometry
            if rng.random_bool(0.3) {
                session.on_collision_end(Some(EntityTag::Ball), None, &mut hud);
            }
            if rng.random_bool(MAKE_CHANCE) {
                // A pass through the checkpoint can separate more than once
                for _ in 0..rng.random_range(1..=3) {
                    session.on_collision_end(
                        Some(EntityTag::Ball),
                        Some(EntityTag::Checkpoint),
                        &mut hud,
                    );
                }
            }

            for _ in 0..FRAMES_PER_THROW {
                session.tick(SIM_DT);
            }
        }

        session.end(&mut ());
        hud
    }

}
