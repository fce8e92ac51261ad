use bevy::prelude::*;
use bevy_rapier3d::prelude::*;

use bowling_rules::knockdown::{self, PinSet};
use bowling_rules::rack::pin_positions;

use crate::constants::{
    PHYSICS_DT, PIN_ANGULAR_DAMPING, PIN_FRICTION, PIN_HEIGHT, PIN_HIT_ANGULAR_DAMPING,
    PIN_HIT_LINEAR_DAMPING, PIN_IMPACT_BOOST, PIN_LINEAR_DAMPING, PIN_MASS, PIN_RADIUS,
    PIN_RESTITUTION,
};

use super::ball::Ball;
use super::core::SceneAssets;
use super::{FixedSet, Settings};

pub struct RackPlugin;

/// Tear down whatever pins remain and stand a fresh rack of ten.
#[derive(Message, Clone, Copy)]
pub(crate) struct RackResetMessage;

#[derive(Component)]
pub(crate) struct Pin {
    pub(crate) index: usize,
}

/// Pins standing at the start of the current delivery. Marked full at every
/// frame start and re-marked after the first delivery of a frame.
#[derive(Resource, Default)]
pub(crate) struct RackState {
    pub(crate) baseline: PinSet,
}

impl Plugin for RackPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<RackState>()
            .add_systems(Startup, spawn_initial_rack)
            .add_systems(FixedUpdate, rack_reset_system.in_set(FixedSet::Spawn))
            .add_systems(FixedUpdate, pin_impact_system.in_set(FixedSet::PostPhysics));
    }
}

/// Standing pins right now, classified by upright-axis tilt.
pub(crate) fn standing_set(q_pins: &Query<(&Pin, &Transform)>) -> PinSet {
    let mut set = PinSet::EMPTY;
    for (pin, transform) in q_pins {
        if knockdown::is_standing(transform.rotation * Vec3::Y) {
            set = set.with_pin(pin.index);
        }
    }
    set
}

fn spawn_initial_rack(
    mut commands: Commands,
    settings: Res<Settings>,
    assets: Res<SceneAssets>,
) {
    spawn_rack(&mut commands, &settings, &assets);
}

fn rack_reset_system(
    mut commands: Commands,
    mut reset_reader: MessageReader<RackResetMessage>,
    settings: Res<Settings>,
    assets: Res<SceneAssets>,
    q_pins: Query<Entity, With<Pin>>,
) {
    if reset_reader.read().count() == 0 {
        return;
    }

    for entity in &q_pins {
        commands.entity(entity).despawn();
    }
    spawn_rack(&mut commands, &settings, &assets);
}

fn spawn_rack(commands: &mut Commands, settings: &Settings, assets: &SceneAssets) {
    let rack_center = Vec3::new(0.0, 0.0, settings.lane_length);
    for (index, position) in pin_positions(rack_center).into_iter().enumerate() {
        commands.spawn((
            pin_body(index, position),
            Mesh3d(assets.pin_mesh.clone()),
            MeshMaterial3d(assets.pin_material.clone()),
        ));
    }
}

fn pin_body(index: usize, position: Vec3) -> impl Bundle {
    (
        RigidBody::Dynamic,
        Collider::capsule_y(PIN_HEIGHT * 0.5 - PIN_RADIUS, PIN_RADIUS),
        ColliderMassProperties::Mass(PIN_MASS),
        Restitution::coefficient(PIN_RESTITUTION),
        Friction::coefficient(PIN_FRICTION),
        Damping {
            linear_damping: PIN_LINEAR_DAMPING,
            angular_damping: PIN_ANGULAR_DAMPING,
        },
        Velocity::zero(),
        ExternalImpulse::default(),
        Transform::from_translation(position),
        Pin { index },
    )
}

/// When the ball strikes a pin, drop that pin's damping so it tumbles
/// freely and feed a share of the contact force back as an extra shove,
/// which keeps pin action lively at low ball speeds.
fn pin_impact_system(
    mut contact_events: MessageReader<ContactForceEvent>,
    q_balls: Query<&Transform, With<Ball>>,
    mut q_pins: Query<(&Transform, &mut Damping, &mut ExternalImpulse), With<Pin>>,
) {
    for event in contact_events.read() {
        let (ball_entity, pin_entity) =
            if q_balls.contains(event.collider1) && q_pins.contains(event.collider2) {
                (event.collider1, event.collider2)
            } else if q_balls.contains(event.collider2) && q_pins.contains(event.collider1) {
                (event.collider2, event.collider1)
            } else {
                continue;
            };

        let Ok(ball_transform) = q_balls.get(ball_entity) else {
            continue;
        };
        let Ok((pin_transform, mut damping, mut impulse)) = q_pins.get_mut(pin_entity) else {
            continue;
        };

        damping.linear_damping = PIN_HIT_LINEAR_DAMPING;
        damping.angular_damping = PIN_HIT_ANGULAR_DAMPING;

        let away = (pin_transform.translation - ball_transform.translation)
            .normalize_or(Vec3::Z);
        // Contact force integrated over one tick approximates the impulse.
        impulse.impulse += away * event.total_force_magnitude * PHYSICS_DT * PIN_IMPACT_BOOST;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spawned_pins_match_the_impact_query() {
        let mut world = World::new();
        world.spawn(pin_body(0, Vec3::new(0.0, 0.24, 18.0)));

        let mut q_pins =
            world.query_filtered::<(&Transform, &mut Damping, &mut ExternalImpulse), With<Pin>>();
        assert_eq!(q_pins.iter_mut(&mut world).count(), 1);
    }
}
