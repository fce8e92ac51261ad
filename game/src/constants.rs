/// Standard bowling ball radius (10.8 cm).
pub const BALL_RADIUS: f32 = 0.108;
/// Standard 16 lb ball in kg.
pub const BALL_MASS: f32 = 7.26;
pub const BALL_RESTITUTION: f32 = 0.3;
pub const BALL_FRICTION: f32 = 0.3;
pub const BALL_LINEAR_DAMPING: f32 = 0.02;
pub const BALL_ANGULAR_DAMPING: f32 = 0.3;

pub const PIN_MASS: f32 = 1.6;
pub const PIN_HEIGHT: f32 = 0.48;
pub const PIN_RADIUS: f32 = 0.06;
pub const PIN_RESTITUTION: f32 = 0.2;
pub const PIN_FRICTION: f32 = 0.4;
/// Standing pins are heavily damped so they do not wobble over on their own.
pub const PIN_LINEAR_DAMPING: f32 = 0.5;
pub const PIN_ANGULAR_DAMPING: f32 = 2.0;
/// Damping once the ball has struck a pin, so it tumbles freely.
pub const PIN_HIT_LINEAR_DAMPING: f32 = 0.2;
pub const PIN_HIT_ANGULAR_DAMPING: f32 = 0.3;
/// Fraction of the ball's contact impulse fed back into a struck pin.
pub const PIN_IMPACT_BOOST: f32 = 0.3;

pub const DECK_THICKNESS: f32 = 0.1;
pub const GUTTER_DEPTH: f32 = 0.25;
pub const GUTTER_WIDTH: f32 = 0.25;
pub const BACKSTOP_HEIGHT: f32 = 0.6;

pub const PHYSICS_DT: f32 = 1.0 / 120.0;
pub const PHYSICS_SUBSTEPS: usize = 2;

/// Pickups hover this far above the deck and spin in place.
pub const PICKUP_RADIUS: f32 = 0.18;
pub const PICKUP_HEIGHT: f32 = 0.25;
/// Pickup idle spin, rad/s (50 deg/s).
pub const PICKUP_SPIN_RATE: f32 = 0.873;

pub const SLAM_IMPULSE: f32 = 10.0;
pub const CURVE_IMPULSE: f32 = 5.0;
/// Interference obstacles survive the current delivery plus the next one.
pub const OBSTACLE_DELIVERIES: u8 = 2;

#[derive(Clone, Copy)]
pub struct Colors;

impl Colors {
    pub const BACKDROP: u32 = 0x0a0a18;
    pub const LANE: u32 = 0xb08d57;
    pub const GUTTER: u32 = 0x30303a;
    pub const BALL: u32 = 0x2266cc;
    pub const PIN: u32 = 0xf2f2e8;
    pub const PICKUP: u32 = 0x44ff88;
    pub const OBSTACLE: u32 = 0xcc4444;
    pub const AIM_LINE: u32 = 0xffee44;
    pub const MARKER: u32 = 0xffee44;
}

pub fn color_from_hex(rgb: u32) -> bevy::prelude::Color {
    let r = ((rgb >> 16) & 0xff) as f32 / 255.0;
    let g = ((rgb >> 8) & 0xff) as f32 / 255.0;
    let b = (rgb & 0xff) as f32 / 255.0;
    bevy::prelude::Color::srgb(r, g, b)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn color_from_hex_parses_correctly() {
        let c = color_from_hex(0xFF8040);
        if let bevy::prelude::Color::Srgba(srgba) = c {
            assert!((srgba.red - 1.0).abs() < 1e-3);
            assert!((srgba.green - 0.502).abs() < 1e-2);
            assert!((srgba.blue - 0.251).abs() < 1e-2);
        } else {
            panic!("Expected Srgba color variant");
        }
    }
}
