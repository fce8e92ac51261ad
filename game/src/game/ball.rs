use bevy::prelude::*;
use bevy_rapier3d::prelude::*;

use crate::constants::{
    BALL_ANGULAR_DAMPING, BALL_FRICTION, BALL_LINEAR_DAMPING, BALL_MASS, BALL_RADIUS,
    BALL_RESTITUTION,
};

use super::core::SceneAssets;
use super::{FixedSet, RollPhase, Settings};

pub struct BallPlugin;

/// One delivery leaving the bowler's hand.
#[derive(Message, Clone, Copy)]
pub(crate) struct SpawnBallMessage {
    pub(crate) origin: Vec3,
    pub(crate) linvel: Vec3,
    pub(crate) angvel: Vec3,
}

#[derive(Component)]
pub(crate) struct Ball;

/// Seconds the ball has spent below the stop-speed epsilon.
#[derive(Resource, Default)]
pub(crate) struct SettleTimer {
    pub(crate) below_eps_secs: f32,
}

impl Plugin for BallPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<SettleTimer>()
            .add_systems(OnEnter(RollPhase::InMotion), reset_settle_timer)
            .add_systems(
                FixedUpdate,
                roll_watch_system
                    .in_set(FixedSet::Simulate)
                    .run_if(in_state(RollPhase::InMotion)),
            )
            .add_systems(FixedUpdate, spawn_ball_system.in_set(FixedSet::Spawn));
    }
}

fn reset_settle_timer(mut settle: ResMut<SettleTimer>) {
    settle.below_eps_secs = 0.0;
}

fn spawn_ball_system(
    mut commands: Commands,
    mut ball_reader: MessageReader<SpawnBallMessage>,
    assets: Res<SceneAssets>,
) {
    for msg in ball_reader.read() {
        commands.spawn((
            RigidBody::Dynamic,
            Collider::ball(BALL_RADIUS),
            ColliderMassProperties::Mass(BALL_MASS),
            Restitution::coefficient(BALL_RESTITUTION),
            Friction::coefficient(BALL_FRICTION),
            Damping {
                linear_damping: BALL_LINEAR_DAMPING,
                angular_damping: BALL_ANGULAR_DAMPING,
            },
            Ccd::enabled(),
            ActiveEvents::COLLISION_EVENTS | ActiveEvents::CONTACT_FORCE_EVENTS,
            Velocity {
                linvel: msg.linvel,
                angvel: msg.angvel,
            },
            ExternalImpulse::default(),
            Transform::from_translation(msg.origin),
            Mesh3d(assets.ball_mesh.clone()),
            MeshMaterial3d(assets.ball_material.clone()),
            Ball,
        ));
    }
}

/// The roll ends when the ball settles below the stop threshold for the
/// configured grace period, or immediately when it leaves the deck.
fn roll_watch_system(
    settings: Res<Settings>,
    time: Res<Time<Fixed>>,
    mut settle: ResMut<SettleTimer>,
    q_ball: Query<(&Transform, &Velocity), With<Ball>>,
    mut next_phase: ResMut<NextState<RollPhase>>,
) {
    let Ok((transform, velocity)) = q_ball.single() else {
        return;
    };

    if transform.translation.y <= settings.deck_drop_y {
        next_phase.set(RollPhase::Resolved);
        return;
    }

    if velocity.linvel.length() < settings.stop_speed_eps {
        settle.below_eps_secs += time.delta_secs();
        if settle.below_eps_secs >= settings.stop_settle_secs {
            next_phase.set(RollPhase::Resolved);
        }
    } else {
        settle.below_eps_secs = 0.0;
    }
}
