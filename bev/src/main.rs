use bevy::math::DVec3;
use bevy::prelude::*;
use bevy_egui::{EguiContexts, EguiPlugin, egui};
use bevy_polyline::prelude::*;
use orrery::{BodyFrame, BodyId, Orrery, SimulationClock, SystemConfig};

mod rendering_prep;
mod setup;
mod ui;

use rendering_prep::*;
use setup::*;
use ui::*;

const DEFAULT_SYSTEM: &str = "planets.toml";

/// Points sampled around each orbit for its path line.
const PATH_SAMPLES: usize = 512;

#[derive(Resource)]
struct OrreryState {
    orrery: Orrery,
    frames: Vec<BodyFrame>,
}

#[derive(Resource, Default)]
struct Clock(SimulationClock);

#[derive(Component)]
struct SystemBody(BodyId);

#[derive(Component)]
struct ParentBody(BodyId);

// In render units.
#[derive(Component)]
struct BodyRadius(f64);

#[derive(Component)]
struct ComputedPath(Vec<DVec3>);

#[derive(Component)]
struct SystemStar;

fn convert_vec(vec: orrery::Vec3<f64>) -> DVec3 {
    DVec3::new(vec.x, vec.y, vec.z)
}

fn main() -> AppExit {
    let path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| DEFAULT_SYSTEM.to_string());

    let orrery = match SystemConfig::load(&path).and_then(|config| Orrery::from_config(&config)) {
        Ok((orrery, rejected)) => {
            for err in rejected {
                eprintln!("{path}: {err}");
            }
            orrery
        }
        Err(err) => {
            eprintln!("failed to load {path}: {err}");
            return AppExit::error();
        }
    };

    App::new()
        .insert_resource(ClearColor(Color::BLACK))
        .insert_resource(OrreryState {
            orrery,
            frames: Vec::new(),
        })
        .init_resource::<Clock>()
        .add_plugins(DefaultPlugins)
        .add_plugins(PolylinePlugin)
        .add_plugins(EguiPlugin)
        .add_systems(Startup, setup)
        .add_systems(
            Update,
            (
                advance_clock,
                tick_bodies.after(advance_clock),
                set_positions.after(tick_bodies),
                update_paths.after(tick_bodies),
                update_ui,
            ),
        )
        .run()
}

fn advance_clock(time: Res<Time>, mut clock: ResMut<Clock>) {
    clock.0.advance(time.delta_secs_f64());
}

fn tick_bodies(clock: Res<Clock>, mut system: ResMut<OrreryState>) {
    let system = &mut *system;
    system.frames = system.orrery.tick(clock.0.elapsed());
}
