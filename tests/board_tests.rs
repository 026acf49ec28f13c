//! Board state and rules tests.
//!
//! Covers the board lifecycle (create, set configuration, mutate one move
//! at a time), the sowing arithmetic, the victory check, and the contract
//! violations that must abort instead of being clamped.

use tchoukaillon::Board;

/// Test that a fresh board is a bare store with no houses.
#[test]
fn test_new_board() {
    let board = Board::new();
    assert_eq!(board.pits(), &[0]);
    assert_eq!(board.house_count(), 0);
    assert!(board.is_game_won());
}

/// Test wholesale configuration replacement and the reversed display order.
#[test]
fn test_set_configuration_and_display() {
    let mut board = Board::new();
    board.set_configuration(&[0, 0, 1, 1, 3, 5, 0]);

    assert_eq!(board.house_count(), 6);
    assert_eq!(board.to_string(), "[0, 5, 3, 1, 1, 0, 0]");

    // Replacement, not merge: a shorter configuration shrinks the board.
    board.set_configuration(&[10, 2, 3, 4]);
    assert_eq!(board.house_count(), 3);
    assert_eq!(board.to_string(), "[4, 3, 2, 10]");
}

/// Test reading individual houses.
#[test]
fn test_seeds_in_house() {
    let board = Board::from_configuration(&[0, 0, 1, 1, 3, 5, 0]);
    assert_eq!(board.seeds_in_house(0), 0);
    assert_eq!(board.seeds_in_house(1), 0);
    assert_eq!(board.seeds_in_house(3), 1);
    assert_eq!(board.seeds_in_house(5), 5);
}

/// Test the defining legality rule: house count equals house index.
#[test]
fn test_is_legal_move() {
    let board = Board::from_configuration(&[0, 0, 1, 1, 3, 5, 0]);
    assert!(!board.is_legal_move(0));
    assert!(!board.is_legal_move(4));
    assert!(board.is_legal_move(5));
    assert!(!board.is_legal_move(6));
}

/// Test two successive sows against hand-checked configurations.
#[test]
fn test_apply_move_sequence() {
    let mut board = Board::from_configuration(&[0, 0, 1, 1, 3, 5, 0]);

    board.apply_move(5);
    assert_eq!(board.pits(), &[1, 1, 2, 2, 4, 0, 0]);
    assert_eq!(board.to_string(), "[0, 0, 4, 2, 2, 1, 1]");

    board.apply_move(4);
    assert_eq!(board.pits(), &[2, 2, 3, 3, 0, 0, 0]);
    assert_eq!(board.to_string(), "[0, 0, 0, 3, 3, 2, 2]");
}

/// Test that sowing from the store is a no-op.
#[test]
fn test_apply_move_store_noop() {
    let mut board = Board::from_configuration(&[0, 0, 1, 1, 3, 5, 0]);
    let before = board.clone();
    board.apply_move(0);
    assert_eq!(board, before);
}

/// Test the victory check on won, in-progress, and stuck configurations.
#[test]
fn test_is_game_won() {
    assert!(Board::from_configuration(&[6, 0, 0, 0, 0, 0, 0]).is_game_won());
    assert!(!Board::from_configuration(&[0, 0, 1, 1, 3, 5, 0]).is_game_won());
    // Stuck is not a separate state: just in-progress with no legal move.
    let stuck = Board::from_configuration(&[0, 2, 3, 4, 5, 6, 7]);
    assert!(!stuck.is_game_won());
    assert_eq!(stuck.choose_move(), None);
}

/// Test that an out-of-range read aborts instead of clamping.
#[test]
#[should_panic]
fn test_seeds_in_house_out_of_range_panics() {
    Board::from_configuration(&[10, 2, 3, 4]).seeds_in_house(4);
}

/// Test that an out-of-range legality query aborts instead of clamping.
#[test]
#[should_panic]
fn test_is_legal_move_out_of_range_panics() {
    Board::from_configuration(&[10, 2, 3, 4]).is_legal_move(7);
}

/// Test serde round-tripping of a board.
#[test]
fn test_board_serde_round_trip() {
    let board = Board::from_configuration(&[0, 0, 1, 1, 3, 5, 0]);
    let json = serde_json::to_string(&board).unwrap();
    let back: Board = serde_json::from_str(&json).unwrap();
    assert_eq!(back, board);
}
