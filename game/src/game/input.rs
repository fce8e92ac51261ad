use bevy::prelude::*;

use super::UpdateSet;

pub struct InputPlugin;

/// Held-key levels polled once per frame; fixed-tick systems consume these
/// rather than touching `ButtonInput` directly. Edge-triggered actions
/// (power-up use, camera toggle) read the keyboard in `Update` themselves.
#[derive(Resource, Default)]
pub(crate) struct InputState {
    /// A/D lateral movement, -1..=1.
    pub(crate) move_axis: f32,
    /// Arrow-key aim yaw, -1..=1.
    pub(crate) yaw_axis: f32,
    pub(crate) charge_held: bool,
}

impl Plugin for InputPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<InputState>()
            .add_systems(Update, input_system.in_set(UpdateSet::Input));
    }
}

fn input_system(mut input: ResMut<InputState>, keys: Res<ButtonInput<KeyCode>>) {
    let axis = |neg: KeyCode, pos: KeyCode| {
        (keys.pressed(pos) as i8 - keys.pressed(neg) as i8) as f32
    };

    input.move_axis = axis(KeyCode::KeyA, KeyCode::KeyD);
    input.yaw_axis = axis(KeyCode::ArrowLeft, KeyCode::ArrowRight);
    input.charge_held = keys.pressed(KeyCode::Space);
}
