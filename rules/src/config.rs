/// Session configuration
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GameConfig {
    /// Number of bowlers, clamped to 2..=4 at session setup.
    pub player_count: usize,
    pub lane_length: f32,
    pub lane_width: f32,
    /// Full-charge launch speed (m/s).
    pub launch_speed_max: f32,
    /// Below this speed the ball is considered stopping (m/s).
    pub stop_speed_eps: f32,
    /// Seconds the ball must stay below the epsilon before the roll resolves.
    pub stop_settle_secs: f32,
    /// Falling below this world height ends the roll immediately.
    pub deck_drop_y: f32,
    /// Lateral aiming range either side of the spawn point (m).
    pub max_lateral: f32,
    pub pickups_per_rack: usize,
    pub rng_seed: u64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            player_count: 2,
            lane_length: 18.0,
            lane_width: 1.5,
            launch_speed_max: 11.0,
            stop_speed_eps: 0.1,
            stop_settle_secs: 2.0,
            deck_drop_y: -2.5,
            max_lateral: 0.6,
            pickups_per_rack: 2,
            rng_seed: 42,
        }
    }
}

impl GameConfig {
    pub fn validate(&self) -> Result<(), String> {
        if !self.lane_length.is_finite() || self.lane_length <= 1.0 {
            return Err("lane_length must be finite and > 1".to_string());
        }
        if !self.lane_width.is_finite() || self.lane_width <= 0.0 {
            return Err("lane_width must be finite and > 0".to_string());
        }
        if !self.launch_speed_max.is_finite() || self.launch_speed_max <= 0.0 {
            return Err("launch_speed_max must be finite and > 0".to_string());
        }
        if !self.stop_speed_eps.is_finite() || self.stop_speed_eps <= 0.0 {
            return Err("stop_speed_eps must be finite and > 0".to_string());
        }
        if !self.stop_settle_secs.is_finite() || self.stop_settle_secs < 0.0 {
            return Err("stop_settle_secs must be finite and >= 0".to_string());
        }
        if self.deck_drop_y >= 0.0 {
            return Err("deck_drop_y must be below the deck".to_string());
        }
        if !self.max_lateral.is_finite() || self.max_lateral < 0.0 {
            return Err("max_lateral must be finite and >= 0".to_string());
        }
        Ok(())
    }

    pub fn clamped_player_count(&self) -> usize {
        self.player_count
            .clamp(crate::turn::MIN_BOWLERS, crate::turn::MAX_BOWLERS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        assert!(GameConfig::default().validate().is_ok());
    }

    #[test]
    fn zero_lane_width_invalid() {
        let mut config = GameConfig::default();
        config.lane_width = 0.0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn deck_drop_above_deck_invalid() {
        let mut config = GameConfig::default();
        config.deck_drop_y = 0.5;
        assert!(config.validate().is_err());
    }

    #[test]
    fn player_count_clamps_to_table_limits() {
        let mut config = GameConfig::default();
        config.player_count = 1;
        assert_eq!(config.clamped_player_count(), 2);
        config.player_count = 7;
        assert_eq!(config.clamped_player_count(), 4);
    }
}
