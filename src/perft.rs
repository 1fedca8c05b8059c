//! Count legal move paths.

use crate::{board::Board, errors::MissingKingError};

/// Counts the leaf nodes of the legal move tree of the given depth, for the
/// side to move.
///
/// Useful for spotting move generation regressions: a single wrongly
/// generated or wrongly filtered move changes the count.
///
/// # Examples
///
/// ```
/// use chessica::{perft, Board};
///
/// let mut board = Board::new();
/// assert_eq!(perft(&mut board, 1)?, 20);
/// # Ok::<_, chessica::MissingKingError>(())
/// ```
pub fn perft(board: &mut Board, depth: u32) -> Result<u64, MissingKingError> {
    if depth < 1 {
        return Ok(1);
    }
    let moves = board.legal_moves(board.turn())?;
    if depth == 1 {
        return Ok(moves.len() as u64);
    }
    let mut nodes = 0;
    for m in &moves {
        let undo = board.play_unchecked(m)?;
        let children = perft(board, depth - 1);
        board.undo(undo);
        nodes += children?;
    }
    Ok(nodes)
}
