use bevy::prelude::*;

use bowling_rules::launch::{self, AimInput, AimState};

use crate::constants::{color_from_hex, Colors, BALL_RADIUS};

use super::ball::SpawnBallMessage;
use super::input::InputState;
use super::session::Session;
use super::{FixedSet, RollPhase, Settings, UpdateSet};

pub struct AimPlugin;

const AIM_LINE_LENGTH: f32 = 10.0;
const AIM_LINE_SEGMENTS: usize = 20;

#[derive(Resource, Default)]
pub(crate) struct AimRuntime {
    pub(crate) state: AimState,
}

/// Flat disc marking where the active bowler stands.
#[derive(Component)]
struct BowlerMarker;

impl Plugin for AimPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<AimRuntime>()
            .add_systems(Startup, spawn_marker)
            .add_systems(
                FixedUpdate,
                aim_system
                    .in_set(FixedSet::Simulate)
                    .run_if(in_state(RollPhase::Aiming)),
            )
            .add_systems(
                Update,
                (draw_aim_line, update_marker)
                    .in_set(UpdateSet::Visuals)
                    .run_if(in_state(RollPhase::Aiming)),
            )
            .add_systems(OnExit(RollPhase::Aiming), hide_marker);
    }
}

/// Where the ball leaves the hand: spawn point shifted across the approach.
fn release_origin(session: &Session, aim: &AimState) -> Vec3 {
    let (_, lateral) = session.lane_basis();
    session.spawn_point() + lateral * aim.lateral
}

fn aim_system(
    input: Res<InputState>,
    settings: Res<Settings>,
    session: Res<Session>,
    mut aim: ResMut<AimRuntime>,
    time: Res<Time<Fixed>>,
    mut ball_writer: MessageWriter<SpawnBallMessage>,
    mut next_phase: ResMut<NextState<RollPhase>>,
) {
    let (state, fired) = launch::step_aim(
        aim.state,
        time.delta_secs(),
        AimInput {
            move_axis: input.move_axis,
            yaw_axis: input.yaw_axis,
            charge_held: input.charge_held,
        },
        settings.max_lateral,
    );
    aim.state = state;

    let Some(power) = fired else {
        return;
    };

    let origin = release_origin(&session, &aim.state);
    let (linvel, angvel) = launch::launch_velocity(
        origin,
        session.rack_center,
        aim.state.yaw_deg,
        power * settings.launch_speed_max,
    );

    info!(
        "{} bowling at {:.0}% power",
        session.current_bowler().name,
        power * 100.0
    );
    ball_writer.write(SpawnBallMessage {
        origin,
        linvel,
        angvel,
    });
    next_phase.set(RollPhase::InMotion);
}

fn draw_aim_line(
    mut gizmos: Gizmos,
    session: Res<Session>,
    aim: Res<AimRuntime>,
) {
    let origin = release_origin(&session, &aim.state);
    let (linvel, _) = launch::launch_velocity(origin, session.rack_center, aim.state.yaw_deg, 1.0);
    let color = color_from_hex(Colors::AIM_LINE);

    // Dashed: draw every other segment.
    for i in (0..AIM_LINE_SEGMENTS).step_by(2) {
        let t0 = i as f32 / AIM_LINE_SEGMENTS as f32;
        let t1 = (i + 1) as f32 / AIM_LINE_SEGMENTS as f32;
        let a = origin + linvel * (AIM_LINE_LENGTH * t0);
        let b = origin + linvel * (AIM_LINE_LENGTH * t1);
        gizmos.line(
            Vec3::new(a.x, BALL_RADIUS, a.z),
            Vec3::new(b.x, BALL_RADIUS, b.z),
            color,
        );
    }
}

fn spawn_marker(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    commands.spawn((
        Mesh3d(meshes.add(Cylinder::new(0.15, 0.02))),
        MeshMaterial3d(materials.add(StandardMaterial {
            base_color: color_from_hex(Colors::MARKER),
            unlit: true,
            ..default()
        })),
        Transform::from_xyz(0.0, 0.01, 0.0),
        BowlerMarker,
    ));
}

fn update_marker(
    session: Res<Session>,
    aim: Res<AimRuntime>,
    mut q_marker: Query<(&mut Transform, &mut Visibility), With<BowlerMarker>>,
) {
    let Ok((mut transform, mut visibility)) = q_marker.single_mut() else {
        return;
    };
    let origin = release_origin(&session, &aim.state);
    transform.translation = Vec3::new(origin.x, 0.01, origin.z);
    *visibility = Visibility::Visible;
}

fn hide_marker(mut q_marker: Query<&mut Visibility, With<BowlerMarker>>) {
    for mut visibility in &mut q_marker {
        *visibility = Visibility::Hidden;
    }
}
