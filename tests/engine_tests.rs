//! Rules integration tests: scoring, placement, winner and turn application.

use knucklebones::board::{detect_winner, place, score_column, score_side, Board};
use knucklebones::core::{
    FixedDice, GameId, GameState, MatchStatus, PlacementError, PlayerId, Seat, SeatMap,
    StructuralError, TurnError,
};
use knucklebones::rules::apply_move;

const ALICE: PlayerId = PlayerId::new(101);
const BOB: PlayerId = PlayerId::new(202);

fn start(rolls: &[u8]) -> (GameState, FixedDice) {
    let mut dice = FixedDice::new(rolls.iter().copied());
    let players = SeatMap::from_pair(ALICE, BOB);
    let game = GameState::start(GameId::new(1), players, Seat::One, &mut dice, 0).unwrap();
    (game, dice)
}

// =============================================================================
// Scoring
// =============================================================================

#[test]
fn test_column_scores() {
    assert_eq!(score_column(&[2, 2, 5]), Ok(13));
    assert_eq!(score_column(&[1, 2, 3]), Ok(6));
    assert_eq!(score_column(&[5, 5, 5]), Ok(45));
    assert_eq!(score_column(&[0, 4, 4]), Ok(16));
    assert_eq!(score_column(&[0, 0, 0]), Ok(0));
}

#[test]
fn test_column_score_rejects_bad_input() {
    assert_eq!(score_column(&[1, 2]), Err(StructuralError::SlotCount(2)));
    assert_eq!(score_column(&[1, 2, 7]), Err(StructuralError::ValueOutOfRange(7)));
}

#[test]
fn test_full_side_scores_27() {
    let side: [[u8; 3]; 3] = [[1, 2, 3], [4, 5, 6], [1, 2, 3]];
    assert_eq!(score_side(&side), Ok(27));
}

#[test]
fn test_score_side_rejects_wrong_column_count() {
    let side: Vec<Vec<u8>> = vec![vec![1, 2, 3], vec![4, 5, 6]];
    assert_eq!(score_side(&side), Err(StructuralError::ColumnCount(2)));
}

// =============================================================================
// Placement
// =============================================================================

#[test]
fn test_placement_only_touches_two_columns() {
    let before = Board::from_pair(
        [[0, 1, 4], [0, 0, 2], [3, 3, 6]],
        [[0, 4, 4], [0, 0, 4], [0, 5, 4]],
    );

    let after = place(&before, Seat::One, 1, 4).unwrap();

    assert_eq!(after[Seat::One][1], [0, 2, 4]);
    assert_eq!(after[Seat::Two][1], [0, 0, 0]);
    assert_eq!(after[Seat::One][0], before[Seat::One][0]);
    assert_eq!(after[Seat::One][2], before[Seat::One][2]);
    assert_eq!(after[Seat::Two][0], before[Seat::Two][0]);
    assert_eq!(after[Seat::Two][2], before[Seat::Two][2]);
}

#[test]
fn test_knock_out_keeps_survivor_order() {
    let before = Board::from_pair([[0; 3]; 3], [[2, 5, 2], [0; 3], [0; 3]]);
    let after = place(&before, Seat::One, 0, 2).unwrap();

    assert_eq!(after[Seat::Two][0], [0, 0, 5]);
}

#[test]
fn test_placement_errors() {
    let board = Board::from_pair([[1, 1, 1], [0; 3], [0; 3]], [[0; 3]; 3]);

    assert_eq!(place(&board, Seat::One, 0, 2), Err(PlacementError::ColumnFull(0)));
    assert_eq!(place(&board, Seat::One, 1, 0), Err(PlacementError::InvalidValue(0)));
    assert_eq!(place(&board, Seat::One, 1, 7), Err(PlacementError::InvalidValue(7)));
    assert_eq!(place(&board, Seat::One, 3, 2), Err(PlacementError::InvalidColumn(3)));
}

#[test]
fn test_placement_on_corrupt_board_is_structural() {
    let board = Board::from_pair([[0, 0, 9], [0; 3], [0; 3]], [[0; 3]; 3]);

    assert_eq!(
        place(&board, Seat::One, 1, 2),
        Err(PlacementError::Structural(StructuralError::ValueOutOfRange(9)))
    );
}

// =============================================================================
// Winner
// =============================================================================

#[test]
fn test_winner_needs_both_sides_full() {
    let one_full = Board::from_pair([[6, 6, 6]; 3], [[1, 1, 1], [1, 1, 1], [0, 1, 1]]);
    assert_eq!(detect_winner(&one_full), Ok(None));
}

#[test]
fn test_higher_score_wins() {
    let board = Board::from_pair(
        [[1, 2, 3], [1, 2, 4], [1, 2, 4]],
        [[1, 2, 3], [4, 5, 6], [1, 2, 3]],
    );
    assert_eq!(detect_winner(&board), Ok(Some(Seat::Two)));
}

#[test]
fn test_tie_goes_to_seat_one() {
    let board = Board::from_pair([[1, 2, 3]; 3], [[3, 2, 1]; 3]);
    assert_eq!(board.scores().unwrap(), SeatMap::from_pair(18, 18));
    assert_eq!(detect_winner(&board), Ok(Some(Seat::One)));
}

// =============================================================================
// Turn Application
// =============================================================================

#[test]
fn test_end_to_end_knock_out() {
    let (game, mut dice) = start(&[3, 3, 5]);

    let game = apply_move(&game, ALICE, 0, &mut dice, 10).unwrap();
    assert_eq!(game.board[Seat::One][0], [0, 0, 3]);
    assert_eq!(game.current_player, BOB);
    assert_eq!(game.current_point, 3);

    let game = apply_move(&game, BOB, 0, &mut dice, 20).unwrap();
    assert_eq!(game.board[Seat::One][0], [0, 0, 0]);
    assert_eq!(game.board[Seat::Two][0], [0, 0, 3]);
    assert_eq!(game.current_player, ALICE);
    assert_eq!(game.current_point, 5);
    assert_eq!(game.steps, 2);
    assert_eq!(game.last_move_at, 20);
    assert_eq!(game.history.len(), 2);
}

#[test]
fn test_wrong_player_leaves_record_identical() {
    let (game, mut dice) = start(&[4, 2]);
    let json = serde_json::to_string(&game).unwrap();
    let bytes = game.to_bytes().unwrap();

    assert_eq!(apply_move(&game, BOB, 1, &mut dice, 99), Err(TurnError::NotYourTurn));

    assert_eq!(serde_json::to_string(&game).unwrap(), json);
    assert_eq!(game.to_bytes().unwrap(), bytes);
}

#[test]
fn test_filling_last_slot_finishes_match() {
    let (mut game, mut dice) = start(&[1]);
    game.current_point = 3;
    game.steps = 17;
    game.board = Board::from_pair(
        [[1, 2, 3], [4, 5, 6], [0, 1, 2]],
        [[1, 2, 4], [1, 2, 4], [1, 2, 4]],
    );

    let game = apply_move(&game, ALICE, 2, &mut dice, 0).unwrap();

    assert_eq!(game.board[Seat::One][2], [1, 2, 3]);
    assert_eq!(game.scores().unwrap(), SeatMap::from_pair(27, 21));
    assert_eq!(game.winner, Some(ALICE));
    assert_eq!(game.status(), MatchStatus::Finished);
    assert_eq!(apply_move(&game, BOB, 0, &mut dice, 0), Err(TurnError::Finished));
}

#[test]
fn test_error_classification() {
    assert!(TurnError::NotYourTurn.is_user_facing());
    assert!(TurnError::Placement(PlacementError::ColumnFull(1)).is_user_facing());
    assert!(!TurnError::Placement(PlacementError::InvalidValue(0)).is_user_facing());
    assert!(!TurnError::Placement(PlacementError::Structural(StructuralError::NoEmptySlot))
        .is_user_facing());
}
