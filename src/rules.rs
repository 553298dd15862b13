//! Move validation.
//!
//! A piece moves one tile diagonally forward, or two tiles diagonally forward
//! when the tile it passes over holds an opposing piece. Applying a jump only
//! relocates the mover: the jumped piece is left where it is.

use crate::board::{Board, Cell, Tile};

/// The kind of a legal move.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MoveKind {
    /// One tile diagonally.
    Step,
    /// Two tiles diagonally over an opposing piece.
    Jump { over: Tile },
}

/// A legal move from one tile to another.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Move {
    pub src: Tile,
    pub dest: Tile,
    pub kind: MoveKind,
}

/// Classify moving the piece on `src` to `(dest_row, dest_col)`.
///
/// Returns `None` if the move is illegal, including when `src` is empty.
pub fn classify_move(board: &Board, src: Tile, dest_row: i32, dest_col: i32) -> Option<Move> {
    let mover = board.get(src).owner()?;
    let dest = Tile::new(dest_row, dest_col)?;
    if !board.get(dest).is_empty() {
        return None;
    }

    let d_row = dest_row - src.row() as i32;
    let d_col = dest_col - src.col() as i32;
    if d_row.abs() != d_col.abs() || d_row == 0 {
        return None;
    }
    if d_row.signum() != i32::from(mover.forward()) {
        return None;
    }

    let kind = match d_row.abs() {
        1 => MoveKind::Step,
        2 => {
            let over = src.offset(d_row / 2, d_col / 2)?;
            if board.get(over) != Cell::Piece(mover.opponent()) {
                return None;
            }
            MoveKind::Jump { over }
        }
        _ => return None,
    };

    Some(Move { src, dest, kind })
}

/// Whether the piece on `src` may move to `(dest_row, dest_col)`.
pub fn is_valid_move(board: &Board, src: Tile, dest_row: i32, dest_col: i32) -> bool {
    classify_move(board, src, dest_row, dest_col).is_some()
}

/// Relocate the mover of a legal move.
///
/// Jumped pieces stay on the board.
pub fn apply_move(board: &mut Board, mv: Move) {
    let piece = board.get(mv.src);
    board.set(mv.dest, piece);
    board.set(mv.src, Cell::Empty);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Player;

    fn tile(row: i32, col: i32) -> Tile {
        Tile::new(row, col).unwrap()
    }

    fn board_with(pieces: &[(i32, i32, Player)]) -> Board {
        let mut board = Board::empty();
        for &(row, col, player) in pieces {
            board.set(tile(row, col), Cell::Piece(player));
        }
        board
    }

    #[test]
    fn player_one_steps_up() {
        let board = board_with(&[(4, 3, Player::One)]);
        assert!(is_valid_move(&board, tile(4, 3), 3, 2));
        assert!(is_valid_move(&board, tile(4, 3), 3, 4));
        assert!(!is_valid_move(&board, tile(4, 3), 5, 2));
        assert!(!is_valid_move(&board, tile(4, 3), 5, 4));
    }

    #[test]
    fn player_two_steps_down() {
        let board = board_with(&[(3, 4, Player::Two)]);
        assert!(is_valid_move(&board, tile(3, 4), 4, 3));
        assert!(is_valid_move(&board, tile(3, 4), 4, 5));
        assert!(!is_valid_move(&board, tile(3, 4), 2, 3));
        assert!(!is_valid_move(&board, tile(3, 4), 2, 5));
    }

    #[test]
    fn step_is_classified() {
        let board = board_with(&[(4, 3, Player::One)]);
        assert_eq!(
            classify_move(&board, tile(4, 3), 3, 2),
            Some(Move {
                src: tile(4, 3),
                dest: tile(3, 2),
                kind: MoveKind::Step,
            })
        );
    }

    #[test]
    fn only_strict_diagonals() {
        let board = board_with(&[(4, 3, Player::One)]);
        // same tile
        assert!(!is_valid_move(&board, tile(4, 3), 4, 3));
        // straight up, sideways, knight-ish
        assert!(!is_valid_move(&board, tile(4, 3), 3, 3));
        assert!(!is_valid_move(&board, tile(4, 3), 4, 4));
        assert!(!is_valid_move(&board, tile(4, 3), 2, 4));
    }

    #[test]
    fn destination_must_be_empty_and_on_board() {
        let board = board_with(&[(4, 3, Player::One), (3, 2, Player::One), (3, 4, Player::Two)]);
        assert!(!is_valid_move(&board, tile(4, 3), 3, 2));
        assert!(!is_valid_move(&board, tile(4, 3), 3, 4));

        let board = board_with(&[(0, 1, Player::One), (7, 0, Player::Two)]);
        assert!(!is_valid_move(&board, tile(0, 1), -1, 0));
        assert!(!is_valid_move(&board, tile(0, 1), -1, 2));
        assert!(!is_valid_move(&board, tile(7, 0), 8, 1));
        assert!(!is_valid_move(&board, tile(7, 0), 6, -1));
    }

    #[test]
    fn jump_over_opponent() {
        let board = board_with(&[(5, 2, Player::One), (4, 3, Player::Two)]);
        assert_eq!(
            classify_move(&board, tile(5, 2), 3, 4).map(|mv| mv.kind),
            Some(MoveKind::Jump { over: tile(4, 3) })
        );

        let board = board_with(&[(2, 5, Player::Two), (3, 4, Player::One)]);
        assert!(is_valid_move(&board, tile(2, 5), 4, 3));
    }

    #[test]
    fn no_jump_over_empty_or_own_piece() {
        let board = board_with(&[(5, 2, Player::One)]);
        assert!(!is_valid_move(&board, tile(5, 2), 3, 4));

        let board = board_with(&[(5, 2, Player::One), (4, 3, Player::One)]);
        assert!(!is_valid_move(&board, tile(5, 2), 3, 4));
    }

    #[test]
    fn no_backwards_jump() {
        let board = board_with(&[(3, 2, Player::One), (4, 3, Player::Two)]);
        assert!(!is_valid_move(&board, tile(3, 2), 5, 4));
    }

    #[test]
    fn no_long_moves() {
        // an opponent right in front with open tiles behind it is still no
        // excuse to travel three tiles
        let board = board_with(&[(6, 1, Player::One), (5, 2, Player::Two)]);
        assert!(!is_valid_move(&board, tile(6, 1), 3, 4));
        let board = board_with(&[(7, 0, Player::One)]);
        assert!(!is_valid_move(&board, tile(7, 0), 0, 7));
    }

    #[test]
    fn empty_source_never_moves() {
        let board = Board::empty();
        assert!(!is_valid_move(&board, tile(4, 3), 3, 2));
    }

    #[test]
    fn jump_leaves_jumped_piece() {
        let mut board = board_with(&[(5, 2, Player::One), (4, 3, Player::Two)]);
        let mv = classify_move(&board, tile(5, 2), 3, 4).unwrap();
        apply_move(&mut board, mv);
        assert_eq!(board.get(tile(5, 2)), Cell::Empty);
        assert_eq!(board.get(tile(3, 4)), Cell::Piece(Player::One));
        assert_eq!(board.get(tile(4, 3)), Cell::Piece(Player::Two));
    }
}
