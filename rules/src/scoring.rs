//! Frame scoring: a pure function of the append-only roll list.
//!
//! Scores are recomputed from scratch after every roll rather than patched
//! incrementally, so a frame whose strike/spare bonus is still waiting on
//! future rolls simply holds the partial sum until those rolls exist.

pub const FRAMES_PER_GAME: usize = 10;
pub const PINS_PER_RACK: u32 = 10;

/// Walk frames 0..9 with a cursor into the roll list.
///
/// A strike consumes one roll and borrows the next two for its bonus, a
/// spare consumes two and borrows one, an open frame is just the sum of its
/// two rolls. Bonus rolls that do not exist yet contribute nothing; calling
/// this again once they land corrects the frame value.
pub fn score_frames(rolls: &[u32]) -> [u32; FRAMES_PER_GAME] {
    let mut frames = [0u32; FRAMES_PER_GAME];
    let mut cursor = 0usize;

    for frame in frames.iter_mut() {
        if cursor >= rolls.len() {
            break;
        }
        if is_strike(rolls, cursor) {
            *frame = PINS_PER_RACK + sum_from(rolls, cursor + 1, 2);
            cursor += 1;
        } else if is_spare(rolls, cursor) {
            *frame = PINS_PER_RACK + sum_from(rolls, cursor + 2, 1);
            cursor += 2;
        } else {
            *frame = sum_from(rolls, cursor, 2);
            cursor += 2;
        }
    }

    frames
}

pub fn total(frames: &[u32; FRAMES_PER_GAME]) -> u32 {
    frames.iter().sum()
}

fn is_strike(rolls: &[u32], cursor: usize) -> bool {
    rolls[cursor] == PINS_PER_RACK
}

fn is_spare(rolls: &[u32], cursor: usize) -> bool {
    cursor + 1 < rolls.len() && rolls[cursor] + rolls[cursor + 1] == PINS_PER_RACK
}

fn sum_from(rolls: &[u32], start: usize, count: usize) -> u32 {
    rolls.iter().skip(start).take(count).sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn open_frames_are_plain_sums() {
        let frames = score_frames(&[3, 4, 2, 5, 0, 0]);
        assert_eq!(frames[0], 7);
        assert_eq!(frames[1], 7);
        assert_eq!(frames[2], 0);
    }

    #[test]
    fn all_gutters_score_zero() {
        let frames = score_frames(&[0; 20]);
        assert_eq!(total(&frames), 0);
    }

    #[test]
    fn strike_borrows_next_two_rolls() {
        let frames = score_frames(&[10, 3, 4]);
        assert_eq!(frames[0], 17);
        assert_eq!(frames[1], 7);
    }

    #[test]
    fn spare_borrows_next_roll() {
        let frames = score_frames(&[6, 4, 5, 2]);
        assert_eq!(frames[0], 15);
        assert_eq!(frames[1], 7);
    }

    #[test]
    fn pending_bonus_leaves_partial_value() {
        assert_eq!(score_frames(&[10])[0], 10);
        assert_eq!(score_frames(&[10, 7])[0], 17);
        assert_eq!(score_frames(&[6, 4])[0], 10);
    }

    #[test]
    fn perfect_game_scores_300() {
        let frames = score_frames(&[10; 12]);
        assert!(frames.iter().all(|&f| f == 30));
        assert_eq!(total(&frames), 300);
    }

    #[test]
    fn reference_game_scores_167() {
        let rolls = [10, 7, 3, 9, 0, 10, 0, 8, 8, 2, 0, 6, 10, 10, 10, 8, 1];
        let frames = score_frames(&rolls);
        assert_eq!(frames, [20, 19, 9, 18, 8, 10, 6, 30, 28, 19]);
        assert_eq!(total(&frames), 167);
    }

    #[test]
    fn reference_game_converges_roll_by_roll() {
        let rolls = [10, 7, 3, 9, 0, 10, 0, 8, 8, 2, 0, 6, 10, 10, 10, 8, 1];
        // Frame 0 is a strike: partial until both bonus rolls have landed.
        assert_eq!(score_frames(&rolls[..1])[0], 10);
        assert_eq!(score_frames(&rolls[..2])[0], 17);
        assert_eq!(score_frames(&rolls[..3])[0], 20);
        // Frame 1 is a spare: partial until the next roll lands.
        assert_eq!(score_frames(&rolls[..3])[1], 10);
        assert_eq!(score_frames(&rolls[..4])[1], 19);
    }

    #[test]
    fn rescoring_is_idempotent() {
        let rolls = [10, 7, 3, 9, 0, 10, 0, 8];
        assert_eq!(score_frames(&rolls), score_frames(&rolls));
    }
}
