//! Turn and frame sequencing across 2..=4 bowlers.
//!
//! The cursor advances on every resolved delivery. Frames 0..8 allow two
//! deliveries; the tenth frame grants up to two bonus deliveries after a
//! strike and one after a spare, which is what lets a 12-strike roll list
//! exist and score 300.

use crate::scoring::{FRAMES_PER_GAME, PINS_PER_RACK};

pub const MIN_BOWLERS: usize = 2;
pub const MAX_BOWLERS: usize = 4;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TurnCursor {
    pub bowler: usize,
    /// 0..=9 while the game runs; 10 once every bowler has finished.
    pub frame: usize,
    /// Delivery within the frame: 0 or 1, plus 2 for tenth-frame bonuses.
    pub delivery: u8,
}

/// What the table should do after a delivery has been scored.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TurnEvent {
    /// Same bowler rolls again at whatever is still standing.
    SecondDelivery,
    /// Tenth-frame bonus delivery for the same bowler.
    BonusDelivery { fresh_rack: bool },
    /// Turn passes on; the rack is rebuilt in full.
    NextBowler,
    /// Every bowler has completed frame ten.
    GameOver,
}

#[derive(Clone, Debug)]
pub struct TurnOrder {
    cursor: TurnCursor,
    bowler_count: usize,
    first_delivery_pins: u32,
    complete: bool,
}

impl TurnOrder {
    pub fn new(bowler_count: usize) -> Self {
        Self {
            cursor: TurnCursor {
                bowler: 0,
                frame: 0,
                delivery: 0,
            },
            bowler_count: bowler_count.clamp(MIN_BOWLERS, MAX_BOWLERS),
            first_delivery_pins: 0,
            complete: false,
        }
    }

    pub fn cursor(&self) -> TurnCursor {
        self.cursor
    }

    pub fn bowler_count(&self) -> usize {
        self.bowler_count
    }

    pub fn is_complete(&self) -> bool {
        self.complete
    }

    /// Advance past a resolved delivery that knocked `pins_down` pins.
    pub fn advance(&mut self, pins_down: u32) -> TurnEvent {
        if self.complete {
            return TurnEvent::GameOver;
        }

        let tenth = self.cursor.frame == FRAMES_PER_GAME - 1;
        match self.cursor.delivery {
            0 => {
                self.first_delivery_pins = pins_down;
                let strike = pins_down >= PINS_PER_RACK;
                if strike && !tenth {
                    self.next_bowler()
                } else {
                    self.cursor.delivery = 1;
                    if strike {
                        TurnEvent::BonusDelivery { fresh_rack: true }
                    } else {
                        TurnEvent::SecondDelivery
                    }
                }
            }
            1 => {
                let struck_first = self.first_delivery_pins >= PINS_PER_RACK;
                let spare =
                    !struck_first && self.first_delivery_pins + pins_down >= PINS_PER_RACK;
                if tenth && struck_first {
                    // Second of two bonus deliveries; refill only if this one
                    // also cleared the deck.
                    self.cursor.delivery = 2;
                    TurnEvent::BonusDelivery {
                        fresh_rack: pins_down >= PINS_PER_RACK,
                    }
                } else if tenth && spare {
                    self.cursor.delivery = 2;
                    TurnEvent::BonusDelivery { fresh_rack: true }
                } else {
                    self.next_bowler()
                }
            }
            _ => self.next_bowler(),
        }
    }

    fn next_bowler(&mut self) -> TurnEvent {
        self.cursor.bowler = (self.cursor.bowler + 1) % self.bowler_count;
        self.cursor.delivery = 0;
        self.first_delivery_pins = 0;
        if self.cursor.bowler == 0 {
            self.cursor.frame += 1;
            if self.cursor.frame >= FRAMES_PER_GAME {
                self.complete = true;
                return TurnEvent::GameOver;
            }
        }
        TurnEvent::NextBowler
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bowler_count_is_clamped() {
        assert_eq!(TurnOrder::new(1).bowler_count(), 2);
        assert_eq!(TurnOrder::new(9).bowler_count(), 4);
    }

    #[test]
    fn open_first_delivery_keeps_the_bowler() {
        let mut order = TurnOrder::new(2);
        assert_eq!(order.advance(7), TurnEvent::SecondDelivery);
        assert_eq!(order.cursor().bowler, 0);
        assert_eq!(order.cursor().delivery, 1);
    }

    #[test]
    fn strike_ends_the_frame_early() {
        let mut order = TurnOrder::new(2);
        assert_eq!(order.advance(10), TurnEvent::NextBowler);
        assert_eq!(order.cursor().bowler, 1);
        assert_eq!(order.cursor().delivery, 0);
    }

    #[test]
    fn frame_increments_exactly_once_per_wrap() {
        let mut order = TurnOrder::new(3);
        order.advance(10);
        assert_eq!(order.cursor().frame, 0);
        order.advance(10);
        assert_eq!(order.cursor().frame, 0);
        order.advance(10);
        assert_eq!(order.cursor().frame, 1);
        assert_eq!(order.cursor().bowler, 0);
    }

    #[test]
    fn tenth_frame_strike_grants_two_bonus_deliveries() {
        let mut order = TurnOrder::new(2);
        // Fast-forward both bowlers to frame 9 with strikes.
        for _ in 0..18 {
            order.advance(10);
        }
        assert_eq!(order.cursor().frame, 9);

        assert_eq!(
            order.advance(10),
            TurnEvent::BonusDelivery { fresh_rack: true }
        );
        assert_eq!(
            order.advance(10),
            TurnEvent::BonusDelivery { fresh_rack: true }
        );
        assert_eq!(order.advance(10), TurnEvent::NextBowler);
        assert_eq!(order.cursor().bowler, 1);
    }

    #[test]
    fn tenth_frame_spare_grants_one_bonus_delivery() {
        let mut order = TurnOrder::new(2);
        for _ in 0..18 {
            order.advance(10);
        }
        assert_eq!(order.advance(6), TurnEvent::SecondDelivery);
        assert_eq!(
            order.advance(4),
            TurnEvent::BonusDelivery { fresh_rack: true }
        );
        assert_eq!(order.advance(7), TurnEvent::NextBowler);
    }

    #[test]
    fn open_tenth_frame_gets_no_bonus() {
        let mut order = TurnOrder::new(2);
        for _ in 0..18 {
            order.advance(10);
        }
        assert_eq!(order.advance(3), TurnEvent::SecondDelivery);
        assert_eq!(order.advance(4), TurnEvent::NextBowler);
    }

    #[test]
    fn second_bonus_keeps_deck_unless_cleared() {
        let mut order = TurnOrder::new(2);
        for _ in 0..18 {
            order.advance(10);
        }
        order.advance(10);
        assert_eq!(
            order.advance(6),
            TurnEvent::BonusDelivery { fresh_rack: false }
        );
    }

    #[test]
    fn game_ends_when_last_bowler_finishes_frame_ten() {
        let mut order = TurnOrder::new(2);
        // 9 frames x 2 bowlers of strikes, then both tenth frames.
        for _ in 0..18 {
            order.advance(10);
        }
        for _ in 0..3 {
            order.advance(10);
        }
        assert_eq!(order.cursor().bowler, 1);
        order.advance(10);
        order.advance(10);
        assert_eq!(order.advance(10), TurnEvent::GameOver);
        assert!(order.is_complete());
        // Terminal: further advances are ignored.
        assert_eq!(order.advance(10), TurnEvent::GameOver);
    }
}
