//! Match events for the broadcast channel.
//!
//! Each committed transition produces events that carry everything the
//! opponent's client needs to redraw: the new board, who moves next and with
//! which die. Events serialize with a `type` tag so they can be forwarded to
//! a room channel as-is.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::board::Board;
use crate::core::{GameId, GameState, PlayerId, SeatMap};

/// Something that happened to a match.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum GameEvent {
    /// A match record was created.
    MatchStarted {
        game: GameId,
        players: SeatMap<PlayerId>,
        current_player: PlayerId,
        current_point: u8,
    },

    /// A die was placed and committed.
    DicePlaced {
        game: GameId,
        player: PlayerId,
        column: usize,
        value: u8,
        step: u32,
        board: Board,
        current_player: PlayerId,
        current_point: u8,
    },

    /// The last placement filled both sides.
    MatchFinished {
        game: GameId,
        winner: PlayerId,
        scores: SeatMap<u32>,
    },
}

impl GameEvent {
    /// The match this event belongs to.
    #[must_use]
    pub fn game(&self) -> GameId {
        match self {
            GameEvent::MatchStarted { game, .. }
            | GameEvent::DicePlaced { game, .. }
            | GameEvent::MatchFinished { game, .. } => *game,
        }
    }

    /// Event for a freshly started match.
    #[must_use]
    pub fn started(state: &GameState) -> Self {
        GameEvent::MatchStarted {
            game: state.id,
            players: state.players.clone(),
            current_player: state.current_player,
            current_point: state.current_point,
        }
    }

    /// Events for a record just produced by `apply_move`.
    ///
    /// Empty when the record has no applied move yet. A winner on a board
    /// that cannot be scored is logged and yields no `MatchFinished`.
    #[must_use]
    pub fn for_move(state: &GameState) -> SmallVec<[GameEvent; 2]> {
        let mut events = SmallVec::new();
        let Some(last) = state.history.last() else {
            return events;
        };

        events.push(GameEvent::DicePlaced {
            game: state.id,
            player: last.placed.player,
            column: last.placed.column,
            value: last.placed.value,
            step: last.step,
            board: state.board,
            current_player: state.current_player,
            current_point: state.current_point,
        });

        if let Some(winner) = state.winner {
            match state.scores() {
                Ok(scores) => events.push(GameEvent::MatchFinished {
                    game: state.id,
                    winner,
                    scores,
                }),
                Err(e) => log::warn!("{}: no finish event, board cannot be scored: {e}", state.id),
            }
        }

        events
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{FixedDice, Seat};
    use crate::rules::apply_move;

    fn started() -> (GameState, FixedDice) {
        let mut dice = FixedDice::new([2, 5]);
        let players = SeatMap::from_pair(PlayerId::new(1), PlayerId::new(2));
        let state = GameState::start(GameId::new(8), players, Seat::One, &mut dice, 0).unwrap();
        (state, dice)
    }

    #[test]
    fn test_started_event() {
        let (state, _) = started();
        let event = GameEvent::started(&state);

        assert_eq!(event.game(), GameId::new(8));
        assert!(matches!(
            event,
            GameEvent::MatchStarted { current_point: 2, .. }
        ));
    }

    #[test]
    fn test_no_move_no_events() {
        let (state, _) = started();
        assert!(GameEvent::for_move(&state).is_empty());
    }

    #[test]
    fn test_dice_placed_event() {
        let (state, mut dice) = started();
        let next = apply_move(&state, PlayerId::new(1), 1, &mut dice, 3).unwrap();
        let events = GameEvent::for_move(&next);

        assert_eq!(events.len(), 1);
        assert_eq!(
            events[0],
            GameEvent::DicePlaced {
                game: GameId::new(8),
                player: PlayerId::new(1),
                column: 1,
                value: 2,
                step: 1,
                board: next.board,
                current_player: PlayerId::new(2),
                current_point: 5,
            }
        );
    }

    #[test]
    fn test_finished_event_follows_placement() {
        let (mut state, mut dice) = started();
        state.current_point = 6;
        state.board = Board::from_pair(
            [[1, 2, 3], [4, 5, 6], [0, 2, 3]],
            [[1, 2, 3], [1, 2, 4], [1, 2, 4]],
        );

        let next = apply_move(&state, PlayerId::new(1), 2, &mut dice, 3).unwrap();
        let events = GameEvent::for_move(&next);

        assert_eq!(events.len(), 2);
        assert_eq!(
            events[1],
            GameEvent::MatchFinished {
                game: GameId::new(8),
                winner: PlayerId::new(1),
                scores: SeatMap::from_pair(32, 20),
            }
        );
    }

    #[test]
    fn test_unscorable_winner_skips_finish_event() {
        let (state, mut dice) = started();
        let mut next = apply_move(&state, PlayerId::new(1), 0, &mut dice, 3).unwrap();
        next.winner = Some(PlayerId::new(1));
        next.board = Board::from_pair([[7, 7, 7]; 3], [[1, 1, 1]; 3]);

        let events = GameEvent::for_move(&next);
        assert_eq!(events.len(), 1);
        assert!(matches!(events[0], GameEvent::DicePlaced { .. }));
    }

    #[test]
    fn test_event_json_is_tagged() {
        let event = GameEvent::MatchFinished {
            game: GameId::new(1),
            winner: PlayerId::new(2),
            scores: SeatMap::from_pair(10, 30),
        };
        let json = serde_json::to_string(&event).unwrap();

        assert!(json.starts_with(r#"{"type":"match_finished","game":1,"winner":2"#));
        assert_eq!(serde_json::from_str::<GameEvent>(&json).unwrap(), event);
    }
}
