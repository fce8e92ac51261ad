//! Standing/fallen classification and newly-knocked counting.
//!
//! A pin counts as fallen once its upright axis tilts more than 30 degrees
//! off world vertical. The dot-product threshold below is cos(30°); both the
//! detector and every test use this one constant.

use glam::Vec3;

use crate::scoring::PINS_PER_RACK;

pub const TIP_ANGLE_DEG: f32 = 30.0;
/// cos(30°). A pin whose up-vector dots below this against world-up is down.
pub const STANDING_DOT_MIN: f32 = 0.866_025_4;

pub fn is_standing(pin_up: Vec3) -> bool {
    pin_up.dot(Vec3::Y) > STANDING_DOT_MIN
}

/// Bitmask over the ten rack positions; bit set = pin standing.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PinSet(u16);

impl PinSet {
    pub const EMPTY: PinSet = PinSet(0);
    pub const FULL: PinSet = PinSet((1 << PINS_PER_RACK) - 1);

    pub fn with_pin(self, index: usize) -> PinSet {
        PinSet(self.0 | (1 << index))
    }

    pub fn contains(self, index: usize) -> bool {
        self.0 & (1 << index) != 0
    }

    pub fn count(self) -> u32 {
        self.0.count_ones()
    }

    pub fn intersection(self, other: PinSet) -> PinSet {
        PinSet(self.0 & other.0)
    }
}

impl Default for PinSet {
    fn default() -> Self {
        PinSet::FULL
    }
}

/// How many pins fell since the baseline was marked.
///
/// Pins that re-entered the standing set without having been standing at
/// baseline (a physics fluke) do not offset the count, and the result is
/// clamped so it can never go negative.
pub fn newly_knocked(baseline: PinSet, now: PinSet) -> u32 {
    baseline
        .count()
        .saturating_sub(now.intersection(baseline).count())
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Quat;

    #[test]
    fn upright_pin_is_standing() {
        assert!(is_standing(Vec3::Y));
    }

    #[test]
    fn threshold_matches_tip_angle() {
        let just_under = Quat::from_rotation_x((TIP_ANGLE_DEG - 1.0).to_radians()) * Vec3::Y;
        let just_over = Quat::from_rotation_x((TIP_ANGLE_DEG + 1.0).to_radians()) * Vec3::Y;
        assert!(is_standing(just_under));
        assert!(!is_standing(just_over));
    }

    #[test]
    fn flat_pin_is_down() {
        assert!(!is_standing(Vec3::X));
        assert!(!is_standing(-Vec3::Y));
    }

    #[test]
    fn full_rack_counts_ten() {
        assert_eq!(PinSet::FULL.count(), 10);
        assert_eq!(newly_knocked(PinSet::FULL, PinSet::EMPTY), 10);
    }

    #[test]
    fn only_baseline_pins_count() {
        // 3 already down at baseline; 4 more fall on this delivery.
        let mut baseline = PinSet::EMPTY;
        for i in 0..7 {
            baseline = baseline.with_pin(i);
        }
        let mut now = PinSet::EMPTY;
        for i in 0..3 {
            now = now.with_pin(i);
        }
        assert_eq!(newly_knocked(baseline, now), 4);
    }

    #[test]
    fn count_never_negative_or_above_baseline() {
        // A pin wobbling back upright outside the baseline adds nothing.
        let baseline = PinSet::EMPTY.with_pin(0);
        let now = PinSet::FULL;
        assert_eq!(newly_knocked(baseline, now), 0);
        assert!(newly_knocked(PinSet::FULL, PinSet::EMPTY) <= PinSet::FULL.count());
    }
}
