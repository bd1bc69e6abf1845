//! Fixed replies for the engine's first two moves.

use crate::game::{Board, Piece, CENTER_COL};

/// Replies to the opponent's early pieces, checked in order: the square the
/// opponent holds and the column to answer with.
const SECOND_MOVE_REPLIES: [((usize, usize), usize); 7] = [
    ((1, 0), 5),
    ((2, 0), 5),
    ((4, 0), 1),
    ((5, 0), 1),
    ((0, 0), 3),
    ((6, 0), 3),
    ((3, 1), 3),
];

/// Book move for the engine's `own_turn`-th move (0-based), if there is one.
///
/// Move 0 is always the centre column. Move 1 answers where the opponent has
/// played. Later moves, positions the book does not cover and replies into a
/// full column all yield `None`.
pub fn opening_move(board: &Board, opponent: Piece, own_turn: usize) -> Option<usize> {
    let column = match own_turn {
        0 => CENTER_COL,
        1 => SECOND_MOVE_REPLIES
            .iter()
            .find(|&&((col, row), _)| board.cell_at(col, row).holds(opponent))
            .map(|&(_, reply)| reply)?,
        _ => return None,
    };
    (!board.is_column_full(column)).then_some(column)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn red() -> Piece {
        Piece::new('R').unwrap()
    }

    fn yellow() -> Piece {
        Piece::new('Y').unwrap()
    }

    #[test]
    fn first_move_takes_the_centre() {
        assert_eq!(opening_move(&Board::new(), yellow(), 0), Some(3));
    }

    #[test]
    fn first_move_stacks_on_an_opponent_centre() {
        let mut board = Board::new();
        board.place(3, yellow()).unwrap();
        assert_eq!(opening_move(&board, yellow(), 0), Some(3));
    }

    #[test]
    fn second_move_answers_floor_pieces() {
        let cases = [(0, 3), (1, 5), (2, 5), (4, 1), (5, 1), (6, 3)];
        for (opponent_col, reply) in cases {
            let mut board = Board::new();
            board.place(3, red()).unwrap();
            board.place(opponent_col, yellow()).unwrap();
            assert_eq!(
                opening_move(&board, yellow(), 1),
                Some(reply),
                "opponent in column {opponent_col}"
            );
        }
    }

    #[test]
    fn second_move_stacks_again_when_centre_is_capped() {
        let mut board = Board::new();
        board.place(3, red()).unwrap();
        board.place(3, yellow()).unwrap();
        assert_eq!(opening_move(&board, yellow(), 1), Some(3));
    }

    #[test]
    fn uncovered_position_has_no_book_move() {
        // Engine moved second: the opponent sits on the centre floor and the
        // engine on top, which no entry covers.
        let mut board = Board::new();
        board.place(3, yellow()).unwrap();
        board.place(3, red()).unwrap();
        board.place(3, yellow()).unwrap();
        assert_eq!(opening_move(&board, yellow(), 1), None);
    }

    #[test]
    fn full_reply_column_has_no_book_move() {
        let mut board = Board::new();
        board.place(3, red()).unwrap();
        board.place(1, yellow()).unwrap();
        for i in 0..6 {
            board.place(5, if i % 2 == 0 { red() } else { yellow() }).unwrap();
        }
        assert!(board.is_column_full(5));
        assert_eq!(opening_move(&board, yellow(), 1), None);
    }

    #[test]
    fn book_ends_after_two_moves() {
        assert_eq!(opening_move(&Board::new(), yellow(), 2), None);
    }
}
