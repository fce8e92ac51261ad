use bevy::prelude::*;
use bevy_rapier3d::prelude::*;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use bowling_rules::bowler::PowerUpKind;

use crate::constants::{
    CURVE_IMPULSE, OBSTACLE_DELIVERIES, PICKUP_HEIGHT, PICKUP_RADIUS, PICKUP_SPIN_RATE,
    SLAM_IMPULSE,
};

use super::ball::Ball;
use super::core::SceneAssets;
use super::rack::RackResetMessage;
use super::session::Session;
use super::{FixedSet, RollPhase, Settings, UpdateSet};

pub struct PowerUpsPlugin;

#[derive(Component)]
pub(crate) struct Pickup {
    pub(crate) kind: PowerUpKind,
}

/// Interference obstacle; despawned once its delivery budget runs out.
#[derive(Component)]
pub(crate) struct Obstacle {
    pub(crate) deliveries_left: u8,
}

#[derive(Resource)]
struct PickupRng(ChaCha8Rng);

impl Plugin for PowerUpsPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, setup_rng_and_pickups)
            .add_systems(
                FixedUpdate,
                (
                    award_pickup_system.in_set(FixedSet::PostPhysics),
                    respawn_pickup_system.in_set(FixedSet::Spawn),
                ),
            )
            .add_systems(
                Update,
                use_power_up_system
                    .in_set(UpdateSet::Input)
                    .run_if(in_state(RollPhase::InMotion)),
            )
            .add_systems(Update, spin_pickups.in_set(UpdateSet::Visuals));
    }
}

fn setup_rng_and_pickups(
    mut commands: Commands,
    settings: Res<Settings>,
    assets: Res<SceneAssets>,
) {
    let mut rng = ChaCha8Rng::seed_from_u64(settings.rng_seed);
    for _ in 0..settings.pickups_per_rack {
        spawn_pickup(&mut commands, &settings, &assets, &mut rng);
    }
    commands.insert_resource(PickupRng(rng));
}

/// A fresh rack also restocks the lane with pickups.
fn respawn_pickup_system(
    mut commands: Commands,
    mut reset_reader: MessageReader<RackResetMessage>,
    settings: Res<Settings>,
    assets: Res<SceneAssets>,
    mut rng: ResMut<PickupRng>,
    q_pickups: Query<(), With<Pickup>>,
) {
    if reset_reader.read().count() == 0 {
        return;
    }

    let missing = settings
        .pickups_per_rack
        .saturating_sub(q_pickups.iter().count());
    for _ in 0..missing {
        spawn_pickup(&mut commands, &settings, &assets, &mut rng.0);
    }
}

fn spawn_pickup(
    commands: &mut Commands,
    settings: &Settings,
    assets: &SceneAssets,
    rng: &mut ChaCha8Rng,
) {
    let kind = PowerUpKind::ALL[rng.gen_range(0..PowerUpKind::ALL.len())];
    let half_width = settings.lane_width * 0.5;
    let x = rng.gen_range(-half_width * 0.7..half_width * 0.7);
    let z = rng.gen_range(settings.lane_length * 0.3..settings.lane_length * 0.7);

    commands.spawn((
        Collider::ball(PICKUP_RADIUS),
        Sensor,
        ActiveEvents::COLLISION_EVENTS,
        Transform::from_xyz(x, PICKUP_HEIGHT, z),
        Mesh3d(assets.pickup_mesh.clone()),
        MeshMaterial3d(assets.pickup_material.clone()),
        Pickup { kind },
    ));
}

fn spin_pickups(time: Res<Time>, mut q_pickups: Query<&mut Transform, With<Pickup>>) {
    for mut transform in &mut q_pickups {
        transform.rotate_y(PICKUP_SPIN_RATE * time.delta_secs());
    }
}

/// Rolling over a pickup awards it to the bowler whose delivery is live.
fn award_pickup_system(
    mut commands: Commands,
    mut collision_events: MessageReader<CollisionEvent>,
    mut session: ResMut<Session>,
    q_balls: Query<(), With<Ball>>,
    q_pickups: Query<&Pickup>,
) {
    for event in collision_events.read() {
        let CollisionEvent::Started(a, b, _) = event else {
            continue;
        };
        let pickup_entity = if q_balls.contains(*a) && q_pickups.contains(*b) {
            *b
        } else if q_balls.contains(*b) && q_pickups.contains(*a) {
            *a
        } else {
            continue;
        };

        let Ok(pickup) = q_pickups.get(pickup_entity) else {
            continue;
        };
        let kind = pickup.kind;
        let bowler = session.current_bowler_mut();
        bowler.inventory.push(kind);
        info!("{} collected {}", bowler.name, kind.label());
        commands.entity(pickup_entity).despawn();
    }
}

/// Q/E spends the oldest held power-up toward the left/right of the lane.
fn use_power_up_system(
    mut commands: Commands,
    keys: Res<ButtonInput<KeyCode>>,
    mut session: ResMut<Session>,
    settings: Res<Settings>,
    assets: Res<SceneAssets>,
    mut q_ball: Query<&mut ExternalImpulse, With<Ball>>,
) {
    let side = if keys.just_pressed(KeyCode::KeyQ) {
        -1.0
    } else if keys.just_pressed(KeyCode::KeyE) {
        1.0
    } else {
        return;
    };

    let (_, lateral) = session.lane_basis();
    let Some(kind) = session.current_bowler_mut().take_power_up() else {
        return;
    };
    info!("{} used {}", session.current_bowler().name, kind.label());

    match kind {
        PowerUpKind::Slam => {
            if let Ok(mut impulse) = q_ball.single_mut() {
                impulse.impulse += lateral * side * SLAM_IMPULSE;
            }
        }
        PowerUpKind::Curve => {
            if let Ok(mut impulse) = q_ball.single_mut() {
                impulse.impulse += lateral * side * CURVE_IMPULSE;
            }
        }
        PowerUpKind::Interference => {
            spawn_obstacles(&mut commands, &settings, &assets);
        }
    }
}

/// Temporary bumpers a bit short of the rack, in the way of the next roll.
fn spawn_obstacles(commands: &mut Commands, settings: &Settings, assets: &SceneAssets) {
    for side in [-1.0f32, 1.0] {
        commands.spawn((
            RigidBody::Fixed,
            Collider::cuboid(0.15, 0.15, 0.075),
            Restitution::coefficient(0.6),
            Transform::from_xyz(
                side * settings.lane_width * 0.25,
                0.15,
                settings.lane_length * 0.8,
            ),
            Mesh3d(assets.obstacle_mesh.clone()),
            MeshMaterial3d(assets.obstacle_material.clone()),
            Obstacle {
                deliveries_left: OBSTACLE_DELIVERIES,
            },
        ));
    }
}
