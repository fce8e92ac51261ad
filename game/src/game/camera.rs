use bevy::prelude::*;

use super::ball::Ball;
use super::session::Session;
use super::{Settings, UpdateSet};

pub struct CameraRigPlugin;

/// Behind-the-bowler view that tracks the ball down the lane.
#[derive(Component)]
struct DownLaneCamera;

/// Fixed overhead view of the whole lane. Tab toggles between the two.
#[derive(Component)]
struct BirdsEyeCamera;

const FOLLOW_BACK: f32 = 3.5;
const FOLLOW_UP: f32 = 1.2;

impl Plugin for CameraRigPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, spawn_cameras)
            .add_systems(Update, toggle_camera.in_set(UpdateSet::Input))
            .add_systems(Update, follow_action.in_set(UpdateSet::Visuals));
    }
}

fn spawn_cameras(mut commands: Commands, settings: Res<Settings>) {
    let rack = Vec3::new(0.0, 0.3, settings.lane_length);

    commands.spawn((
        Camera3d::default(),
        Camera {
            is_active: true,
            ..default()
        },
        Transform::from_xyz(0.0, FOLLOW_UP + 1.0, -FOLLOW_BACK).looking_at(rack, Vec3::Y),
        DownLaneCamera,
    ));

    commands.spawn((
        Camera3d::default(),
        Camera {
            is_active: false,
            ..default()
        },
        Transform::from_xyz(0.0, settings.lane_length * 0.9, settings.lane_length * 0.5)
            .looking_at(Vec3::new(0.0, 0.0, settings.lane_length * 0.5), Vec3::Z),
        BirdsEyeCamera,
    ));
}

fn toggle_camera(
    keys: Res<ButtonInput<KeyCode>>,
    mut q_cameras: Query<&mut Camera, Or<(With<DownLaneCamera>, With<BirdsEyeCamera>)>>,
) {
    if !keys.just_pressed(KeyCode::Tab) {
        return;
    }
    for mut camera in &mut q_cameras {
        camera.is_active = !camera.is_active;
    }
}

/// Sit behind the ball while it rolls, otherwise behind the active bowler's
/// release point, always looking down-lane at the rack.
fn follow_action(
    session: Res<Session>,
    q_ball: Query<&Transform, (With<Ball>, Without<DownLaneCamera>)>,
    mut q_camera: Query<&mut Transform, With<DownLaneCamera>>,
) {
    let Ok(mut camera) = q_camera.single_mut() else {
        return;
    };

    let (dir, _) = session.lane_basis();
    let anchor = match q_ball.single() {
        Ok(ball) => ball.translation,
        Err(_) => session.spawn_point(),
    };

    camera.translation = anchor - dir * FOLLOW_BACK + Vec3::Y * FOLLOW_UP;
    camera.look_at(session.rack_center + Vec3::Y * 0.3, Vec3::Y);
}
