use std::{error::Error, fmt};

use crate::{color::Color, role::Role, square::Square};

/// Error when parsing an invalid square name.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub struct ParseSquareError;

impl fmt::Display for ParseSquareError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("invalid square name")
    }
}

impl Error for ParseSquareError {}

/// Error when a color has no king on the board.
///
/// Check, checkmate and stalemate queries are meaningless without a king.
/// This only arises for editor-built positions; it is fatal to the query,
/// never silently reported as "not in check".
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub struct MissingKingError {
    pub color: Color,
}

impl fmt::Display for MissingKingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} has no king on the board", self.color)
    }
}

impl Error for MissingKingError {}

/// Error when move notation cannot be resolved against the board.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum NotationError {
    /// The destination part is not a valid square name.
    InvalidSquare(ParseSquareError),
    /// The leading character names no piece kind.
    UnknownPiece(char),
    /// No piece of the requested kind has a candidate move to the target.
    Unresolved { role: Role, to: Square },
}

impl fmt::Display for NotationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NotationError::InvalidSquare(err) => err.fmt(f),
            NotationError::UnknownPiece(ch) => write!(f, "no piece kind named {ch:?}"),
            NotationError::Unresolved { role, to } => {
                write!(f, "no {:?} has a move to {}", role, to)
            }
        }
    }
}

impl Error for NotationError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            NotationError::InvalidSquare(err) => Some(err),
            _ => None,
        }
    }
}

impl From<ParseSquareError> for NotationError {
    fn from(err: ParseSquareError) -> NotationError {
        NotationError::InvalidSquare(err)
    }
}

/// Error when a move cannot be applied to the board.
///
/// Not fatal: the caller is expected to re-prompt.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum PlayError {
    /// The move carries no steps.
    EmptyMove,
    /// No piece stands on the origin square.
    NoPiece { at: Square },
    /// The piece on the origin square belongs to the side not to move.
    WrongTurn { at: Square },
    /// The requested move is not among the piece's legal moves.
    NotLegal { from: Square, to: Square },
    /// Legality filtering requires the mover's king.
    MissingKing(MissingKingError),
}

impl fmt::Display for PlayError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlayError::EmptyMove => f.write_str("move has no steps"),
            PlayError::NoPiece { at } => write!(f, "no piece at {at}"),
            PlayError::WrongTurn { at } => write!(f, "piece at {at} is not to move"),
            PlayError::NotLegal { from, to } => write!(f, "{from}{to} is not a legal move"),
            PlayError::MissingKing(err) => err.fmt(f),
        }
    }
}

impl Error for PlayError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            PlayError::MissingKing(err) => Some(err),
            _ => None,
        }
    }
}

impl From<MissingKingError> for PlayError {
    fn from(err: MissingKingError) -> PlayError {
        PlayError::MissingKing(err)
    }
}
