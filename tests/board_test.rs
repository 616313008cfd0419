//! Tests for the board model.

use square_off::{Board, Owner, Position};

fn pos(n: u8) -> Position {
    Position::from_number(n).expect("test squares are 1-9")
}

/// Fills the board with a known drawn layout:
/// X O X / X O O / O X X.
fn drawn_board() -> Board {
    let mut board = Board::new();
    for n in [1, 3, 4, 8, 9] {
        board.place(pos(n), Owner::Human).unwrap();
    }
    for n in [2, 5, 6, 7] {
        board.place(pos(n), Owner::Computer).unwrap();
    }
    board
}

#[test]
fn new_board_is_open_everywhere() {
    let board = Board::new();
    assert_eq!(board.unmarked_positions().len(), 9);
    assert!(!board.is_full());
    assert_eq!(board.winner(), None);
}

#[test]
fn place_reflects_and_shrinks_open_set() {
    let mut board = Board::new();
    board.place(pos(5), Owner::Human).unwrap();

    assert_eq!(board.get(pos(5)).owner(), Some(Owner::Human));
    assert_eq!(board.unmarked_positions().len(), 8);
    assert!(!board.unmarked_positions().contains(&pos(5)));
}

#[test]
fn place_rejects_occupied_square() {
    let mut board = Board::new();
    board.place(pos(1), Owner::Human).unwrap();
    assert!(board.place(pos(1), Owner::Computer).is_err());
    // The original mark survives the rejected placement.
    assert_eq!(board.get(pos(1)).owner(), Some(Owner::Human));
}

#[test]
fn unmarked_positions_are_ascending() {
    let mut board = Board::new();
    board.place(pos(4), Owner::Human).unwrap();
    board.place(pos(2), Owner::Computer).unwrap();

    let numbers: Vec<u8> = board.unmarked_positions().iter().map(|p| p.number()).collect();
    assert_eq!(numbers, vec![1, 3, 5, 6, 7, 8, 9]);
}

#[test]
fn full_iff_no_open_positions() {
    let mut board = Board::new();
    let owners = [Owner::Human, Owner::Computer];
    for n in 1..=9u8 {
        assert_eq!(board.is_full(), board.unmarked_positions().is_empty());
        board.place(pos(n), owners[n as usize % 2]).unwrap();
    }
    assert!(board.is_full());
    assert!(board.unmarked_positions().is_empty());
}

#[test]
fn winner_found_on_each_line_kind() {
    // Column 1-4-7
    let mut board = Board::new();
    for n in [1, 4, 7] {
        board.place(pos(n), Owner::Computer).unwrap();
    }
    assert_eq!(board.winner(), Some(Owner::Computer));
    assert!(board.has_winner());

    // Row 4-5-6
    let mut board = Board::new();
    for n in [4, 5, 6] {
        board.place(pos(n), Owner::Human).unwrap();
    }
    assert_eq!(board.winner(), Some(Owner::Human));

    // Diagonal 3-5-7
    let mut board = Board::new();
    for n in [3, 5, 7] {
        board.place(pos(n), Owner::Human).unwrap();
    }
    assert_eq!(board.winner(), Some(Owner::Human));
}

#[test]
fn mixed_line_is_not_a_win() {
    let mut board = Board::new();
    board.place(pos(1), Owner::Human).unwrap();
    board.place(pos(2), Owner::Computer).unwrap();
    board.place(pos(3), Owner::Human).unwrap();
    assert_eq!(board.winner(), None);
}

#[test]
fn full_board_without_line_is_a_draw() {
    let board = drawn_board();
    assert!(board.is_full());
    assert_eq!(board.winner(), None);
    assert!(!board.has_winner());
}

#[test]
fn queries_are_pure() {
    let board = drawn_board();
    assert_eq!(board.winner(), board.winner());
    assert_eq!(board.is_full(), board.is_full());
    assert_eq!(board.unmarked_positions(), board.unmarked_positions());
}

#[test]
fn reset_is_idempotent() {
    let mut board = drawn_board();
    board.reset();
    assert_eq!(board.unmarked_positions().len(), 9);
    board.reset();
    assert_eq!(board.unmarked_positions().len(), 9);
    assert_eq!(board, Board::new());
}
