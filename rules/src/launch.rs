//! Aiming and charge-and-release launch logic.
//!
//! Stepped once per fixed tick while a delivery is being lined up. Holding
//! the charge key fills the meter; releasing it fires with a speed fraction
//! proportional to the charge, floored so a tap still rolls the ball.

use glam::{Quat, Vec3};

/// Seconds of held charge for a full-power delivery.
pub const CHARGE_SECS: f32 = 1.6;
/// A released charge never fires below this fraction of full power.
pub const MIN_POWER_FRACTION: f32 = 0.3;
pub const MAX_YAW_DEG: f32 = 45.0;
pub const YAW_RATE_DEG: f32 = 60.0;
pub const LATERAL_RATE: f32 = 3.0;
/// Forward-roll spin applied at release, as a fraction of linear speed.
pub const TOPSPIN_FACTOR: f32 = 0.4;

#[derive(Clone, Copy, Default)]
pub struct AimInput {
    /// Lateral movement axis, -1..=1.
    pub move_axis: f32,
    /// Aim yaw axis, -1..=1.
    pub yaw_axis: f32,
    pub charge_held: bool,
}

#[derive(Clone, Copy, Default)]
pub struct AimState {
    /// Offset across the approach from the bowler's spawn point, metres.
    pub lateral: f32,
    pub yaw_deg: f32,
    /// 0..=1 charge meter.
    pub charge: f32,
    pub was_charging: bool,
}

/// Advance the aim state by one tick. Returns the released power fraction
/// when the charge key was let go this tick.
pub fn step_aim(
    mut state: AimState,
    dt: f32,
    input: AimInput,
    max_lateral: f32,
) -> (AimState, Option<f32>) {
    state.lateral =
        (state.lateral + input.move_axis * LATERAL_RATE * dt).clamp(-max_lateral, max_lateral);
    state.yaw_deg =
        (state.yaw_deg + input.yaw_axis * YAW_RATE_DEG * dt).clamp(-MAX_YAW_DEG, MAX_YAW_DEG);

    if input.charge_held {
        state.charge = (state.charge + dt / CHARGE_SECS).min(1.0);
        state.was_charging = true;
        return (state, None);
    }

    if state.was_charging {
        let power = state.charge.max(MIN_POWER_FRACTION);
        state.charge = 0.0;
        state.was_charging = false;
        (state, Some(power))
    } else {
        (state, None)
    }
}

/// Linear and angular velocity for a released ball.
///
/// Direction runs from the (laterally offset) origin toward the rack centre,
/// yawed by the aim angle and flattened onto the deck plane. Topspin spins
/// the ball about the axis perpendicular to its travel so it rolls forward.
pub fn launch_velocity(origin: Vec3, rack_center: Vec3, yaw_deg: f32, speed: f32) -> (Vec3, Vec3) {
    let mut dir = rack_center - origin;
    dir.y = 0.0;
    let dir = Quat::from_rotation_y(yaw_deg.to_radians()) * dir.normalize_or(Vec3::Z);
    let linear = dir * speed;
    let angular = dir.cross(Vec3::Y) * speed * TOPSPIN_FACTOR;
    (linear, angular)
}

#[cfg(test)]
mod tests {
    use super::*;

    const DT: f32 = 1.0 / 120.0;

    fn held() -> AimInput {
        AimInput {
            charge_held: true,
            ..AimInput::default()
        }
    }

    #[test]
    fn does_not_fire_when_idle() {
        let (state, fired) = step_aim(AimState::default(), DT, AimInput::default(), 1.0);
        assert!(fired.is_none());
        assert_eq!(state.charge, 0.0);
    }

    #[test]
    fn charge_fills_and_caps() {
        let mut state = AimState::default();
        for _ in 0..(CHARGE_SECS / DT) as usize + 60 {
            (state, _) = step_aim(state, DT, held(), 1.0);
        }
        assert_eq!(state.charge, 1.0);
    }

    #[test]
    fn release_fires_proportionally() {
        let mut state = AimState::default();
        let steps = (0.5 * CHARGE_SECS / DT).round() as usize;
        for _ in 0..steps {
            (state, _) = step_aim(state, DT, held(), 1.0);
        }
        let (after, fired) = step_aim(state, DT, AimInput::default(), 1.0);
        assert!((fired.unwrap() - 0.5).abs() < 0.05);
        assert_eq!(after.charge, 0.0);
        assert!(!after.was_charging);
    }

    #[test]
    fn tap_release_fires_with_minimum_power() {
        let mut state = AimState::default();
        (state, _) = step_aim(state, DT, held(), 1.0);
        let (_, fired) = step_aim(state, DT, AimInput::default(), 1.0);
        assert_eq!(fired.unwrap(), MIN_POWER_FRACTION);
    }

    #[test]
    fn lateral_and_yaw_are_clamped() {
        let mut state = AimState::default();
        let input = AimInput {
            move_axis: 1.0,
            yaw_axis: 1.0,
            charge_held: false,
        };
        for _ in 0..2000 {
            (state, _) = step_aim(state, DT, input, 0.6);
        }
        assert_eq!(state.lateral, 0.6);
        assert_eq!(state.yaw_deg, MAX_YAW_DEG);
    }

    #[test]
    fn launch_direction_is_flat_and_yawed() {
        let (linear, angular) =
            launch_velocity(Vec3::new(0.0, 0.2, 0.0), Vec3::new(0.0, 0.3, 18.0), 0.0, 8.0);
        assert!(linear.y.abs() < 1e-6);
        assert!((linear.length() - 8.0).abs() < 1e-4);
        assert!(linear.z > 0.0);
        // Topspin axis is perpendicular to travel.
        assert!(angular.dot(linear).abs() < 1e-3);

        let (yawed, _) =
            launch_velocity(Vec3::new(0.0, 0.2, 0.0), Vec3::new(0.0, 0.3, 18.0), 30.0, 8.0);
        assert!(yawed.x.abs() > 1.0);
    }
}
