use bevy::prelude::*;

use bowling_rules::scoring::FRAMES_PER_GAME;

use crate::constants::{color_from_hex, Colors};

use super::aim::AimRuntime;
use super::session::Session;
use super::{RollPhase, UpdateSet};

pub struct HudPlugin;

const SCOREBOARD_LEFT: f32 = 16.0;
const SCOREBOARD_TOP: f32 = 16.0;
const ROW_HEIGHT: f32 = 22.0;
const NAME_WIDTH: f32 = 90.0;
const CELL_WIDTH: f32 = 34.0;

const CHARGE_BAR_WIDTH: f32 = 220.0;
const CHARGE_BAR_BOTTOM: f32 = 24.0;

const UI_DIM: u32 = 0x888888;
const UI_ACTIVE: u32 = 0xffee44;
const CHARGE_LOW: u32 = 0xcc3333;
const CHARGE_MID: u32 = 0xcccc33;
const CHARGE_HIGH: u32 = 0x33cc55;

#[derive(Component)]
struct HudBowlerName {
    bowler: usize,
}

#[derive(Component)]
struct HudFrameCell {
    bowler: usize,
    frame: usize,
}

#[derive(Component)]
struct HudTotalText {
    bowler: usize,
}

#[derive(Component)]
struct HudPromptText;

#[derive(Component)]
struct HudInventoryText;

#[derive(Component)]
struct HudChargeBarFill;

#[derive(Component)]
struct HudBannerText;

impl Plugin for HudPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, spawn_hud)
            .add_systems(
                Update,
                (
                    update_scoreboard,
                    update_prompt,
                    update_inventory,
                    update_charge_bar,
                    update_banner,
                )
                    .chain()
                    .in_set(UpdateSet::Visuals),
            );
    }
}

fn spawn_hud(mut commands: Commands, session: Res<Session>) {
    let small = TextFont::from_font_size(12.0);
    let medium = TextFont::from_font_size(15.0);

    for bowler in 0..session.bowlers.len() {
        let top = SCOREBOARD_TOP + bowler as f32 * ROW_HEIGHT;

        commands.spawn((
            Node {
                position_type: PositionType::Absolute,
                left: Val::Px(SCOREBOARD_LEFT),
                top: Val::Px(top),
                ..default()
            },
            Text::new(session.bowlers[bowler].name.clone()),
            small.clone(),
            TextColor(color_from_hex(UI_DIM)),
            HudBowlerName { bowler },
        ));

        for frame in 0..FRAMES_PER_GAME {
            commands.spawn((
                Node {
                    position_type: PositionType::Absolute,
                    left: Val::Px(SCOREBOARD_LEFT + NAME_WIDTH + frame as f32 * CELL_WIDTH),
                    top: Val::Px(top),
                    ..default()
                },
                Text::new(""),
                small.clone(),
                TextColor(color_from_hex(UI_DIM)),
                HudFrameCell { bowler, frame },
            ));
        }

        commands.spawn((
            Node {
                position_type: PositionType::Absolute,
                left: Val::Px(
                    SCOREBOARD_LEFT + NAME_WIDTH + FRAMES_PER_GAME as f32 * CELL_WIDTH + 12.0,
                ),
                top: Val::Px(top),
                ..default()
            },
            Text::new("0"),
            small.clone(),
            TextColor(color_from_hex(Colors::PIN)),
            HudTotalText { bowler },
        ));
    }

    commands.spawn((
        Node {
            position_type: PositionType::Absolute,
            left: Val::Px(SCOREBOARD_LEFT),
            top: Val::Px(SCOREBOARD_TOP + session.bowlers.len() as f32 * ROW_HEIGHT + 8.0),
            ..default()
        },
        Text::new(""),
        medium.clone(),
        TextColor(color_from_hex(UI_ACTIVE)),
        HudPromptText,
    ));

    commands.spawn((
        Node {
            position_type: PositionType::Absolute,
            left: Val::Px(SCOREBOARD_LEFT),
            bottom: Val::Px(CHARGE_BAR_BOTTOM + 22.0),
            ..default()
        },
        Text::new(""),
        small.clone(),
        TextColor(color_from_hex(Colors::PICKUP)),
        HudInventoryText,
    ));

    // Charge bar: dim trough plus a fill scaled by the meter.
    commands.spawn((
        Node {
            position_type: PositionType::Absolute,
            left: Val::Px(SCOREBOARD_LEFT),
            bottom: Val::Px(CHARGE_BAR_BOTTOM),
            width: Val::Px(CHARGE_BAR_WIDTH),
            height: Val::Px(12.0),
            border: UiRect::all(Val::Px(1.0)),
            ..default()
        },
        BackgroundColor(Color::srgba(1.0, 1.0, 1.0, 0.06)),
        BorderColor::all(color_from_hex(UI_DIM).with_alpha(0.5)),
    ));
    commands.spawn((
        Node {
            position_type: PositionType::Absolute,
            left: Val::Px(SCOREBOARD_LEFT + 1.0),
            bottom: Val::Px(CHARGE_BAR_BOTTOM + 1.0),
            width: Val::Px(0.0),
            height: Val::Px(10.0),
            ..default()
        },
        BackgroundColor(color_from_hex(CHARGE_LOW)),
        HudChargeBarFill,
    ));

    commands.spawn((
        Node {
            position_type: PositionType::Absolute,
            left: Val::Percent(50.0),
            top: Val::Percent(40.0),
            ..default()
        },
        Text::new(""),
        TextFont::from_font_size(28.0),
        TextColor(color_from_hex(UI_ACTIVE)),
        Visibility::Hidden,
        HudBannerText,
    ));
}

fn update_scoreboard(
    session: Res<Session>,
    mut text_queries: ParamSet<(
        Query<(&HudBowlerName, &mut TextColor)>,
        Query<(&HudFrameCell, &mut Text)>,
        Query<(&HudTotalText, &mut Text)>,
    )>,
) {
    let active = session.cursor().bowler;

    for (name, mut color) in &mut text_queries.p0() {
        color.0 = if name.bowler == active {
            color_from_hex(UI_ACTIVE)
        } else {
            color_from_hex(UI_DIM)
        };
    }

    for (cell, mut text) in &mut text_queries.p1() {
        let Some(bowler) = session.bowlers.get(cell.bowler) else {
            continue;
        };
        let value = bowler.frames[cell.frame];
        text.0 = if value > 0 {
            value.to_string()
        } else {
            String::new()
        };
    }

    for (total, mut text) in &mut text_queries.p2() {
        if let Some(bowler) = session.bowlers.get(total.bowler) {
            text.0 = bowler.total().to_string();
        }
    }
}

fn update_prompt(
    session: Res<Session>,
    phase: Res<State<RollPhase>>,
    mut q_prompt: Query<&mut Text, With<HudPromptText>>,
) {
    let Ok(mut text) = q_prompt.single_mut() else {
        return;
    };

    let cursor = session.cursor();
    text.0 = match phase.get() {
        RollPhase::Aiming => format!(
            "{} - Frame {} - delivery {}",
            session.current_bowler().name,
            cursor.frame + 1,
            cursor.delivery + 1
        ),
        RollPhase::InMotion => format!("{} is bowling...", session.current_bowler().name),
        RollPhase::Resolved => String::new(),
        RollPhase::GameOver => "Game over".to_string(),
    };
}

fn update_inventory(
    session: Res<Session>,
    mut q_inventory: Query<&mut Text, With<HudInventoryText>>,
) {
    let Ok(mut text) = q_inventory.single_mut() else {
        return;
    };

    let inventory = &session.current_bowler().inventory;
    text.0 = if inventory.is_empty() {
        String::new()
    } else {
        let labels: Vec<&str> = inventory.iter().map(|p| p.label()).collect();
        format!("Power-ups (Q/E): {}", labels.join(", "))
    };
}

fn update_charge_bar(
    aim: Res<AimRuntime>,
    mut q_fill: Query<(&mut Node, &mut BackgroundColor), With<HudChargeBarFill>>,
) {
    let Ok((mut node, mut background)) = q_fill.single_mut() else {
        return;
    };

    let charge = aim.state.charge.clamp(0.0, 1.0);
    node.width = Val::Px((CHARGE_BAR_WIDTH - 2.0) * charge);
    background.0 = color_from_hex(if charge < 0.3 {
        CHARGE_LOW
    } else if charge < 0.7 {
        CHARGE_MID
    } else {
        CHARGE_HIGH
    });
}

fn update_banner(
    session: Res<Session>,
    phase: Res<State<RollPhase>>,
    mut q_banner: Query<(&mut Text, &mut Visibility), With<HudBannerText>>,
) {
    let Ok((mut text, mut visibility)) = q_banner.single_mut() else {
        return;
    };

    if *phase.get() == RollPhase::GameOver {
        let winner = session.leader();
        text.0 = format!("{} wins with {}!", winner.name, winner.total());
        *visibility = Visibility::Visible;
    } else {
        *visibility = Visibility::Hidden;
    }
}
