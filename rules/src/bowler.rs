//! Per-bowler state: identity, roll history, derived frame scores and
//! power-up inventory.

use crate::scoring::{self, FRAMES_PER_GAME};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PowerUpKind {
    /// Hard lateral shove on the rolling ball.
    Slam,
    /// Gentle lateral nudge, for shaping the line mid-roll.
    Curve,
    /// Raises temporary obstacles on the lane for the following delivery.
    Interference,
}

impl PowerUpKind {
    pub const ALL: [PowerUpKind; 3] = [
        PowerUpKind::Slam,
        PowerUpKind::Curve,
        PowerUpKind::Interference,
    ];

    pub fn label(self) -> &'static str {
        match self {
            PowerUpKind::Slam => "Slam",
            PowerUpKind::Curve => "Curve",
            PowerUpKind::Interference => "Interference",
        }
    }
}

#[derive(Clone, Debug)]
pub struct Bowler {
    pub name: String,
    /// Pins newly knocked per delivery, append-only.
    pub rolls: Vec<u32>,
    /// Recomputed from `rolls` after every delivery.
    pub frames: [u32; FRAMES_PER_GAME],
    pub inventory: Vec<PowerUpKind>,
}

impl Bowler {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            rolls: Vec::new(),
            frames: [0; FRAMES_PER_GAME],
            inventory: Vec::new(),
        }
    }

    pub fn record_roll(&mut self, pins: u32) {
        self.rolls.push(pins);
        self.frames = scoring::score_frames(&self.rolls);
    }

    pub fn total(&self) -> u32 {
        scoring::total(&self.frames)
    }

    /// Consume the first held power-up, if any.
    pub fn take_power_up(&mut self) -> Option<PowerUpKind> {
        if self.inventory.is_empty() {
            None
        } else {
            Some(self.inventory.remove(0))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recording_rolls_rescores_frames() {
        let mut bowler = Bowler::new("Player 1");
        bowler.record_roll(10);
        assert_eq!(bowler.frames[0], 10);
        bowler.record_roll(7);
        bowler.record_roll(3);
        assert_eq!(bowler.frames[0], 20);
        assert_eq!(bowler.total(), 30);
    }

    #[test]
    fn inventory_is_consumed_in_pickup_order() {
        let mut bowler = Bowler::new("Player 2");
        bowler.inventory.push(PowerUpKind::Curve);
        bowler.inventory.push(PowerUpKind::Slam);
        assert_eq!(bowler.take_power_up(), Some(PowerUpKind::Curve));
        assert_eq!(bowler.take_power_up(), Some(PowerUpKind::Slam));
        assert_eq!(bowler.take_power_up(), None);
    }
}
