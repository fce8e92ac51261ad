use bevy::prelude::*;
use bevy_rapier3d::prelude::{PhysicsSet, TimestepMode};

use bowling_rules::config::GameConfig;

use crate::constants::{
    color_from_hex, Colors, BALL_RADIUS, PHYSICS_DT, PHYSICS_SUBSTEPS, PICKUP_RADIUS, PIN_HEIGHT,
    PIN_RADIUS,
};

use super::ball::SpawnBallMessage;
use super::rack::RackResetMessage;
use super::session::Session;

#[derive(SystemSet, Debug, Hash, Eq, PartialEq, Clone)]
pub(crate) enum UpdateSet {
    Input,
    Visuals,
}

#[derive(SystemSet, Debug, Hash, Eq, PartialEq, Clone)]
pub(crate) enum FixedSet {
    Simulate,
    PostPhysics,
    Spawn,
}

/// One delivery is aimed, rolls, and resolves; the session terminates once
/// every bowler has finished frame ten.
#[derive(States, Default, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) enum RollPhase {
    #[default]
    Aiming,
    InMotion,
    Resolved,
    GameOver,
}

/// Validated session configuration, shared by every plugin.
#[derive(Resource, Clone)]
pub(crate) struct Settings(pub(crate) GameConfig);

impl std::ops::Deref for Settings {
    type Target = GameConfig;

    fn deref(&self) -> &GameConfig {
        &self.0
    }
}

/// Mesh/material handles reused by every spawned ball, pin and pickup.
#[derive(Resource)]
pub(crate) struct SceneAssets {
    pub(crate) ball_mesh: Handle<Mesh>,
    pub(crate) ball_material: Handle<StandardMaterial>,
    pub(crate) pin_mesh: Handle<Mesh>,
    pub(crate) pin_material: Handle<StandardMaterial>,
    pub(crate) pickup_mesh: Handle<Mesh>,
    pub(crate) pickup_material: Handle<StandardMaterial>,
    pub(crate) obstacle_mesh: Handle<Mesh>,
    pub(crate) obstacle_material: Handle<StandardMaterial>,
}

impl FromWorld for SceneAssets {
    fn from_world(world: &mut World) -> Self {
        let mut meshes = world.resource_mut::<Assets<Mesh>>();
        let ball_mesh = meshes.add(Sphere::new(BALL_RADIUS));
        let pin_mesh = meshes.add(Capsule3d::new(PIN_RADIUS, PIN_HEIGHT - 2.0 * PIN_RADIUS));
        let pickup_mesh = meshes.add(Sphere::new(PICKUP_RADIUS));
        let obstacle_mesh = meshes.add(Cuboid::new(0.3, 0.3, 0.15));

        let mut materials = world.resource_mut::<Assets<StandardMaterial>>();
        Self {
            ball_mesh,
            pin_mesh,
            pickup_mesh,
            obstacle_mesh,
            ball_material: materials.add(StandardMaterial {
                base_color: color_from_hex(Colors::BALL),
                perceptual_roughness: 0.2,
                ..default()
            }),
            pin_material: materials.add(StandardMaterial {
                base_color: color_from_hex(Colors::PIN),
                perceptual_roughness: 0.6,
                ..default()
            }),
            pickup_material: materials.add(StandardMaterial {
                base_color: color_from_hex(Colors::PICKUP),
                emissive: color_from_hex(Colors::PICKUP).to_linear() * 0.6,
                ..default()
            }),
            obstacle_material: materials.add(StandardMaterial {
                base_color: color_from_hex(Colors::OBSTACLE),
                ..default()
            }),
        }
    }
}

pub struct CorePlugin {
    pub config: GameConfig,
}

impl Plugin for CorePlugin {
    fn build(&self, app: &mut App) {
        app.insert_resource(Settings(self.config.clone()))
            .insert_resource(Session::new(&self.config))
            .init_resource::<SceneAssets>()
            .init_state::<RollPhase>()
            .add_message::<SpawnBallMessage>()
            .add_message::<RackResetMessage>()
            .insert_resource(ClearColor(color_from_hex(Colors::BACKDROP)))
            .insert_resource(Time::<Fixed>::from_seconds(PHYSICS_DT as f64))
            .insert_resource(TimestepMode::Fixed {
                dt: PHYSICS_DT,
                substeps: PHYSICS_SUBSTEPS,
            })
            .configure_sets(Update, (UpdateSet::Input, UpdateSet::Visuals).chain())
            .configure_sets(
                FixedUpdate,
                (FixedSet::Simulate, FixedSet::PostPhysics, FixedSet::Spawn).chain(),
            )
            .configure_sets(
                FixedUpdate,
                FixedSet::Simulate.before(PhysicsSet::SyncBackend),
            )
            .configure_sets(
                FixedUpdate,
                FixedSet::PostPhysics.after(PhysicsSet::Writeback),
            )
            .add_systems(Startup, setup_lights);
    }
}

fn setup_lights(mut commands: Commands, settings: Res<Settings>) {
    commands.spawn((
        DirectionalLight {
            illuminance: 12_000.0,
            shadows_enabled: true,
            ..default()
        },
        Transform::from_xyz(4.0, 8.0, settings.lane_length * 0.3)
            .looking_at(Vec3::new(0.0, 0.0, settings.lane_length * 0.7), Vec3::Y),
    ));

    commands.spawn((
        PointLight {
            intensity: 600_000.0,
            range: 12.0,
            ..default()
        },
        Transform::from_xyz(0.0, 3.0, settings.lane_length),
    ));
}
