mod aim;
mod ball;
mod camera;
mod core;
mod hud;
mod input;
mod lane;
mod powerups;
mod rack;
mod session;

pub use aim::AimPlugin;
pub use ball::BallPlugin;
pub use camera::CameraRigPlugin;
pub use core::CorePlugin;
pub(crate) use core::{FixedSet, RollPhase, Settings, UpdateSet};
pub use hud::HudPlugin;
pub use input::InputPlugin;
pub use lane::LanePlugin;
pub use powerups::PowerUpsPlugin;
pub use rack::RackPlugin;
pub use session::SessionPlugin;
