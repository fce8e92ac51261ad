use bevy::prelude::*;

use bowling_rules::bowler::Bowler;
use bowling_rules::config::GameConfig;
use bowling_rules::knockdown::{self, PinSet};
use bowling_rules::rack::{bowler_spawn_points, SPAWN_POINT_COUNT};
use bowling_rules::turn::{TurnCursor, TurnEvent, TurnOrder};

use crate::constants::BALL_RADIUS;

use super::aim::AimRuntime;
use super::ball::Ball;
use super::powerups::Obstacle;
use super::rack::{standing_set, Pin, RackResetMessage, RackState};
use super::RollPhase;

pub struct SessionPlugin;

/// All bowlers plus the turn cursor. Owned for the lifetime of the session;
/// mutated only when a delivery resolves or a pickup is awarded.
#[derive(Resource)]
pub(crate) struct Session {
    pub(crate) bowlers: Vec<Bowler>,
    pub(crate) order: TurnOrder,
    pub(crate) rack_center: Vec3,
}

impl Session {
    pub(crate) fn new(config: &GameConfig) -> Self {
        let order = TurnOrder::new(config.clamped_player_count());
        let bowlers = (0..order.bowler_count())
            .map(|i| Bowler::new(format!("Player {}", i + 1)))
            .collect();

        Self {
            bowlers,
            order,
            rack_center: Vec3::new(0.0, 0.0, config.lane_length),
        }
    }

    pub(crate) fn cursor(&self) -> TurnCursor {
        self.order.cursor()
    }

    pub(crate) fn current_bowler(&self) -> &Bowler {
        &self.bowlers[self.order.cursor().bowler]
    }

    pub(crate) fn current_bowler_mut(&mut self) -> &mut Bowler {
        &mut self.bowlers[self.order.cursor().bowler]
    }

    /// Release point of the active bowler on the approach line.
    pub(crate) fn spawn_point(&self) -> Vec3 {
        let points = bowler_spawn_points(BALL_RADIUS);
        points[self.order.cursor().bowler.min(SPAWN_POINT_COUNT - 1)]
    }

    /// Unit vectors down-lane and across it, from the active spawn point.
    pub(crate) fn lane_basis(&self) -> (Vec3, Vec3) {
        let mut dir = self.rack_center - self.spawn_point();
        dir.y = 0.0;
        let dir = dir.normalize_or(Vec3::Z);
        (dir, dir.cross(Vec3::Y))
    }

    pub(crate) fn leader(&self) -> &Bowler {
        self.bowlers
            .iter()
            .max_by_key(|b| b.total())
            .expect("session always has bowlers")
    }
}

impl Plugin for SessionPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, log_session_start)
            .add_systems(OnEnter(RollPhase::Resolved), resolve_delivery);
    }
}

fn log_session_start(session: Res<Session>) {
    info!(
        "Session start: {} bowlers, ten frames",
        session.bowlers.len()
    );
}

/// The ball has stopped (or left the deck): count newly fallen pins, record
/// the roll, advance the turn order and stage the rack for whatever is next.
fn resolve_delivery(
    mut commands: Commands,
    mut session: ResMut<Session>,
    mut rack: ResMut<RackState>,
    mut aim: ResMut<AimRuntime>,
    q_pins: Query<(&Pin, &Transform)>,
    q_balls: Query<Entity, With<Ball>>,
    mut q_obstacles: Query<(Entity, &mut Obstacle)>,
    mut rack_writer: MessageWriter<RackResetMessage>,
    mut next_phase: ResMut<NextState<RollPhase>>,
) {
    for entity in &q_balls {
        commands.entity(entity).despawn();
    }
    // The bowler walks back to centre between deliveries.
    aim.state = default();

    let now = standing_set(&q_pins);
    let pins_down = knockdown::newly_knocked(rack.baseline, now);

    session.current_bowler_mut().record_roll(pins_down);
    let cursor = session.cursor();
    let event = session.order.advance(pins_down);
    info!(
        "{} frame {} delivery {}: {} down -> {:?}",
        session.bowlers[cursor.bowler].name,
        cursor.frame + 1,
        cursor.delivery + 1,
        pins_down,
        event
    );

    // Interference obstacles live for a fixed number of deliveries.
    for (entity, mut obstacle) in &mut q_obstacles {
        obstacle.deliveries_left = obstacle.deliveries_left.saturating_sub(1);
        if obstacle.deliveries_left == 0 {
            commands.entity(entity).despawn();
        }
    }

    match event {
        TurnEvent::SecondDelivery | TurnEvent::BonusDelivery { fresh_rack: false } => {
            // Only newly fallen pins count on the next delivery.
            rack.baseline = now;
            next_phase.set(RollPhase::Aiming);
        }
        TurnEvent::NextBowler | TurnEvent::BonusDelivery { fresh_rack: true } => {
            rack.baseline = PinSet::FULL;
            rack_writer.write(RackResetMessage);
            next_phase.set(RollPhase::Aiming);
        }
        TurnEvent::GameOver => {
            let winner = session.leader();
            info!("Game over! {} wins with {}", winner.name, winner.total());
            next_phase.set(RollPhase::GameOver);
        }
    }
}
