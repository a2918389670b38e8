//! Turn application: validate one move and build the next game record.
//!
//! `apply_move` is a pure function of the current record, the request and the
//! dice. The caller holds the match exclusively while it runs and commits the
//! returned record; on any error the caller's record is still the current one.

use smallvec::SmallVec;

use crate::board::{detect_winner, place, COLUMNS, EMPTY};
use crate::core::rng::roll_checked;
use crate::core::{DiceSource, GameState, Move, MoveRecord, PlayerId, Timestamp, TurnError};

/// Apply `player`'s drop into `column` and return the updated record.
///
/// Checks, in order: the match is not finished, it is `player`'s turn, the
/// column exists, `player` holds a seat. Placement errors come back inside
/// `TurnError::Placement` unchanged.
///
/// The turn passes to the opponent unless the opponent's side is already
/// full and the match is still open, in which case `player` moves again.
///
/// ```
/// use knucklebones::core::{FixedDice, GameId, GameState, PlayerId, Seat, SeatMap};
/// use knucklebones::rules::apply_move;
///
/// let players = SeatMap::from_pair(PlayerId::new(1), PlayerId::new(2));
/// let mut dice = FixedDice::new([3, 5]);
/// let game = GameState::start(GameId::new(1), players, Seat::One, &mut dice, 0).unwrap();
///
/// let next = apply_move(&game, PlayerId::new(1), 0, &mut dice, 10).unwrap();
/// assert_eq!(next.board[Seat::One][0], [0, 0, 3]);
/// assert_eq!(next.current_player, PlayerId::new(2));
/// assert_eq!(next.current_point, 5);
/// ```
pub fn apply_move(
    game: &GameState,
    player: PlayerId,
    column: usize,
    dice: &mut impl DiceSource,
    now: Timestamp,
) -> Result<GameState, TurnError> {
    if game.is_finished() {
        return Err(TurnError::Finished);
    }
    if player != game.current_player {
        return Err(TurnError::NotYourTurn);
    }
    if column >= COLUMNS {
        return Err(TurnError::InvalidColumn(column));
    }
    let seat = game.seat_of(player).ok_or(TurnError::NotInMatch(player))?;

    let value = game.current_point;
    let board = place(&game.board, seat, column, value)?;
    let winner = detect_winner(&board)?.map(|seat| game.players[seat]);
    let next_point = roll_checked(dice)?;

    let step = game.steps + 1;
    let mut history = game.history.clone();
    history.push_back(MoveRecord::new(seat, Move::new(player, column, value), step));

    // A full side has nowhere to drop, so its owner sits out until the
    // other side fills too.
    let next_seat = if winner.is_none() && board.is_side_full(seat.opponent()) {
        seat
    } else {
        seat.opponent()
    };

    if let Some(winner) = winner {
        log::info!("{} finished after {step} moves, {winner} wins", game.id);
    }

    Ok(GameState {
        id: game.id,
        players: game.players.clone(),
        board,
        current_player: game.players[next_seat],
        current_point: next_point,
        winner,
        steps: step,
        last_move_at: now,
        history,
    })
}

/// Columns the current player can still drop into.
///
/// Empty once the match is finished.
#[must_use]
pub fn legal_columns(game: &GameState) -> SmallVec<[usize; COLUMNS]> {
    let Some(seat) = game.current_seat() else {
        return SmallVec::new();
    };
    if game.is_finished() {
        return SmallVec::new();
    }

    game.board
        .side(seat)
        .iter()
        .enumerate()
        .filter(|(_, column)| column.contains(&EMPTY))
        .map(|(index, _)| index)
        .collect()
}
