//! Tests for console prompting and rendering.

use square_off::{Board, Console, Owner, Position, Square};
use std::io::Cursor;

fn make_console(script: &str) -> Console<Cursor<String>, Vec<u8>> {
    Console::new(Cursor::new(script.to_string()), Vec::new())
}

fn output(console: Console<Cursor<String>, Vec<u8>>) -> String {
    String::from_utf8(console.into_output()).expect("output is utf-8")
}

fn pos(n: u8) -> Position {
    Position::from_number(n).expect("test squares are 1-9")
}

#[test]
fn ask_square_accepts_a_listed_square() {
    let mut console = make_console("5\n");
    let open: Vec<Position> = vec![pos(1), pos(2), pos(5)];
    let choice = console.ask_square(&open).unwrap();
    assert_eq!(choice, pos(5));
    assert!(output(console).contains("Choose a square (1, 2, or 5): "));
}

#[test]
fn ask_square_reprompts_until_valid() {
    // Non-numeric, out of range, and unlisted entries all loop.
    let mut console = make_console("banana\n12\n3\n2\n");
    let open: Vec<Position> = vec![pos(1), pos(2)];
    let choice = console.ask_square(&open).unwrap();
    assert_eq!(choice, pos(2));

    let text = output(console);
    assert_eq!(text.matches("Sorry, that's not a valid choice.").count(), 3);
}

#[test]
fn ask_square_fails_when_input_closes() {
    let mut console = make_console("");
    let open: Vec<Position> = vec![pos(1)];
    assert!(console.ask_square(&open).is_err());
}

#[test]
fn ask_yes_no_is_case_insensitive_and_strict() {
    let mut console = make_console("maybe\nY\n");
    assert!(console.ask_yes_no("Would you like to play again? (y/n)").unwrap());
    assert!(output(console).contains("Sorry, must be y or n"));

    let mut console = make_console("N\n");
    assert!(!console.ask_yes_no("Would you like to play again? (y/n)").unwrap());
}

#[test]
fn ask_marker_skips_blank_lines() {
    let mut console = make_console("\n  \nX\n");
    assert_eq!(console.ask_marker("What's your marker?").unwrap(), 'X');
}

#[test]
fn draw_board_renders_the_grid() {
    let mut board = Board::new();
    board.place(pos(1), Owner::Human).unwrap();
    board.place(pos(5), Owner::Computer).unwrap();
    board.place(pos(9), Owner::Human).unwrap();

    let mut console = make_console("");
    console
        .draw_board(&board, |square| match square {
            Square::Empty => ' ',
            Square::Taken(Owner::Human) => 'X',
            Square::Taken(Owner::Computer) => 'O',
        })
        .unwrap();

    let text = output(console);
    assert!(text.contains("  X  |     |"));
    assert!(text.contains("     |  O  |"));
    assert!(text.contains("     |     |  X"));
    assert_eq!(text.matches("-----+-----+-----").count(), 2);
}
