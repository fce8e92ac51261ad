//! Lane and rack geometry.
//!
//! The lane runs along +Z: bowlers release from the foul line at z = 0 and
//! the head pin of the triangle sits at the rack centre down-lane.

use glam::Vec3;

use crate::scoring::PINS_PER_RACK as PIN_COUNT_U32;

pub const PIN_COUNT: usize = PIN_COUNT_U32 as usize;
pub const PIN_SPACING: f32 = 0.5;
/// Row depth of the triangle relative to spacing: cos(30°) packing.
pub const ROW_DEPTH_FACTOR: f32 = 0.866;
/// Height at which a pin's centre rests on the deck.
pub const PIN_REST_HEIGHT: f32 = 0.24;

pub const SPAWN_POINT_COUNT: usize = 4;

/// Standard triangle: rows of 1, 2, 3 and 4 pins, head pin nearest the
/// bowler, deeper rows further down-lane.
pub fn pin_positions(rack_center: Vec3) -> [Vec3; PIN_COUNT] {
    const PINS_PER_ROW: [usize; 4] = [1, 2, 3, 4];

    let mut positions = [Vec3::ZERO; PIN_COUNT];
    let mut index = 0;
    for (row, &count) in PINS_PER_ROW.iter().enumerate() {
        for col in 0..count {
            let x = (col as f32 - (count as f32 - 1.0) * 0.5) * PIN_SPACING;
            let z = row as f32 * PIN_SPACING * ROW_DEPTH_FACTOR;
            positions[index] = rack_center + Vec3::new(x, PIN_REST_HEIGHT, z);
            index += 1;
        }
    }
    positions
}

/// Release points across the approach, one per possible bowler.
pub fn bowler_spawn_points(ball_radius: f32) -> [Vec3; SPAWN_POINT_COUNT] {
    let mut points = [Vec3::ZERO; SPAWN_POINT_COUNT];
    for (i, point) in points.iter_mut().enumerate() {
        let x = (i as f32 - (SPAWN_POINT_COUNT as f32 - 1.0) * 0.5) * 0.4;
        *point = Vec3::new(x, ball_radius, 0.0);
    }
    points
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rack_has_ten_pins_in_four_rows() {
        let center = Vec3::new(0.0, 0.0, 18.0);
        let pins = pin_positions(center);
        assert_eq!(pins.len(), 10);
        // Head pin sits at the rack centre.
        assert_eq!(pins[0].x, 0.0);
        assert_eq!(pins[0].z, 18.0);
        // Back row is the widest and deepest.
        let back: Vec<_> = pins[6..].to_vec();
        assert!(back.iter().all(|p| p.z > pins[0].z));
        assert_eq!(back.len(), 4);
    }

    #[test]
    fn rack_is_symmetric_about_the_lane_axis() {
        let pins = pin_positions(Vec3::ZERO);
        let sum_x: f32 = pins.iter().map(|p| p.x).sum();
        assert!(sum_x.abs() < 1e-5);
    }

    #[test]
    fn spawn_points_straddle_the_lane_center() {
        let points = bowler_spawn_points(0.108);
        assert_eq!(points.len(), 4);
        let sum_x: f32 = points.iter().map(|p| p.x).sum();
        assert!(sum_x.abs() < 1e-5);
        assert!(points.iter().all(|p| p.z == 0.0));
    }
}
