use bevy::prelude::*;
use bevy_rapier3d::prelude::*;

use crate::constants::{
    color_from_hex, Colors, BACKSTOP_HEIGHT, DECK_THICKNESS, GUTTER_DEPTH, GUTTER_WIDTH,
};

use super::Settings;

pub struct LanePlugin;

impl Plugin for LanePlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, spawn_lane);
    }
}

/// One fixed body carries the deck and the backstop. The gutters are visual
/// only: a ball that drifts off the deck simply falls, and the drop-out
/// check ends the roll.
fn spawn_lane(
    mut commands: Commands,
    settings: Res<Settings>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    let approach = 3.0;
    let overrun = 1.5;
    let length = settings.lane_length + approach + overrun;
    let mid_z = (settings.lane_length + overrun - approach) * 0.5;
    let half_width = settings.lane_width * 0.5;

    let lane_material = materials.add(StandardMaterial {
        base_color: color_from_hex(Colors::LANE),
        perceptual_roughness: 0.4,
        ..default()
    });
    let gutter_material = materials.add(StandardMaterial {
        base_color: color_from_hex(Colors::GUTTER),
        ..default()
    });

    let body = commands
        .spawn((RigidBody::Fixed, Transform::default(), GlobalTransform::default()))
        .id();

    // Deck: the only surface the ball can roll on.
    let deck = commands
        .spawn((
            Collider::cuboid(half_width, DECK_THICKNESS * 0.5, length * 0.5),
            Friction::coefficient(0.3),
            Restitution::coefficient(0.1),
            Transform::from_xyz(0.0, -DECK_THICKNESS * 0.5, mid_z),
            GlobalTransform::default(),
            Mesh3d(meshes.add(Cuboid::new(settings.lane_width, DECK_THICKNESS, length))),
            MeshMaterial3d(lane_material),
        ))
        .id();
    commands.entity(body).add_child(deck);

    // Backstop behind the pit, so strikes do not fly forever.
    let backstop_z = settings.lane_length + overrun;
    let backstop = commands
        .spawn((
            Collider::cuboid(half_width + GUTTER_WIDTH, BACKSTOP_HEIGHT * 0.5, 0.05),
            Restitution::coefficient(0.1),
            Transform::from_xyz(0.0, BACKSTOP_HEIGHT * 0.5, backstop_z),
            GlobalTransform::default(),
            Mesh3d(meshes.add(Cuboid::new(
                settings.lane_width + 2.0 * GUTTER_WIDTH,
                BACKSTOP_HEIGHT,
                0.1,
            ))),
            MeshMaterial3d(gutter_material.clone()),
        ))
        .id();
    commands.entity(body).add_child(backstop);

    // Gutter channels either side, sunk below deck level.
    for side in [-1.0f32, 1.0] {
        let x = side * (half_width + GUTTER_WIDTH * 0.5);
        commands.spawn((
            Transform::from_xyz(x, -GUTTER_DEPTH, mid_z),
            Mesh3d(meshes.add(Cuboid::new(GUTTER_WIDTH, DECK_THICKNESS, length))),
            MeshMaterial3d(gutter_material.clone()),
        ));
    }
}
