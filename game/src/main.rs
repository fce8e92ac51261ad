mod constants;
mod game;

use bevy::prelude::*;
use bevy::window::{PresentMode, WindowResolution};
use bevy_rapier3d::prelude::*;

use bowling_rules::config::GameConfig;
use game::{
    AimPlugin, BallPlugin, CameraRigPlugin, CorePlugin, HudPlugin, InputPlugin, LanePlugin,
    PowerUpsPlugin, RackPlugin, SessionPlugin,
};

fn main() {
    let config = load_config();

    App::new()
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "Ten-Pin Bowling".to_string(),
                resolution: WindowResolution::new(1280, 720),
                present_mode: PresentMode::AutoVsync,
                resizable: true,
                ..default()
            }),
            ..default()
        }))
        .add_plugins(RapierPhysicsPlugin::<NoUserData>::default().in_fixed_schedule())
        .add_plugins(CorePlugin { config })
        .add_plugins(LanePlugin)
        .add_plugins(RackPlugin)
        .add_plugins(BallPlugin)
        .add_plugins(AimPlugin)
        .add_plugins(PowerUpsPlugin)
        .add_plugins(SessionPlugin)
        .add_plugins(InputPlugin)
        .add_plugins(HudPlugin)
        .add_plugins(CameraRigPlugin)
        .run();
}

/// Read `BOWLING_CONFIG` (a JSON file path) if set, otherwise defaults.
/// A broken or invalid file falls back to defaults with a note on stderr;
/// the session keeps ticking either way.
fn load_config() -> GameConfig {
    let Some(path) = std::env::var_os("BOWLING_CONFIG") else {
        return GameConfig::default();
    };

    let config = std::fs::read_to_string(&path)
        .map_err(|e| e.to_string())
        .and_then(|text| serde_json::from_str::<GameConfig>(&text).map_err(|e| e.to_string()))
        .and_then(|config| config.validate().map(|()| config));

    match config {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Ignoring config {}: {}", path.to_string_lossy(), e);
            GameConfig::default()
        }
    }
}
