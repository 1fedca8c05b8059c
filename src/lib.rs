//! A chess rules engine built from composable movement patterns.
//!
//! Piece movement is not hard-coded per piece kind. Instead every kind is
//! described by a list of [`Pattern`] values, and the same handful of
//! primitives and wrappers expresses everything from a pawn's one-shot
//! double step to castling. A [`Board`] generates candidate moves from the
//! patterns, filters them for king safety by speculatively applying and
//! reverting each one, and tracks the turn, the move log, castling rights
//! and en-passant targets.
//!
//! # Examples
//!
//! ```
//! use chessica::{Board, Color};
//!
//! let mut board = Board::new();
//! assert_eq!(board.legal_moves(Color::White)?.len(), 20);
//!
//! let m = board.resolve("e4", Color::White)?;
//! board.apply_move(&m)?;
//!
//! let status = board.status()?;
//! assert_eq!(status.turn, Color::Black);
//! assert!(!status.in_check);
//! # Ok::<_, Box<dyn std::error::Error>>(())
//! ```

#![forbid(unsafe_code)]
#![warn(missing_debug_implementations)]

mod board;
mod color;
mod errors;
mod m;
mod pattern;
mod perft;
mod piece;
mod role;
mod square;

pub use crate::{
    board::{Board, CastleRights, Status, Undo},
    color::{ByColor, Color},
    errors::{MissingKingError, NotationError, ParseSquareError, PlayError},
    m::{Move, MoveList, Step},
    pattern::Pattern,
    perft::perft,
    piece::Piece,
    role::Role,
    square::{Delta, Square},
};
