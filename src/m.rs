use std::fmt;

use arrayvec::ArrayVec;

use crate::square::Square;

/// A single atomic relocation: one piece from `from` to `to`, removing
/// whatever stands on `capture` first.
///
/// `capture` is the *captured-at* square. For an ordinary capture it equals
/// `to`; for en passant it is the square beside the destination.
#[derive(Copy, Clone, Eq, PartialEq, Debug, Hash)]
pub struct Step {
    pub from: Square,
    pub to: Square,
    pub capture: Option<Square>,
}

/// Information about a move.
///
/// A `Composite` move bundles several steps that are applied in order and
/// reversed in reverse order as one atomic unit; castling is the king step
/// followed by the rook step. The move's `from`/`to` are those of the first
/// step.
///
/// Invariant: a move is a capture if and only if one of its steps carries a
/// `capture` square. Quiet moves never reference a captured piece.
///
/// # Examples
///
/// ```
/// use chessica::{Move, Square};
///
/// let m = Move::translation(Square::E2, Square::E4);
/// assert_eq!(m.from(), Square::E2);
/// assert_eq!(m.to(), Square::E4);
/// assert!(!m.is_capture());
/// ```
#[derive(Clone, Eq, PartialEq, Debug, Hash)]
pub enum Move {
    Normal(Step),
    Composite(ArrayVec<Step, 2>),
}

impl Move {
    /// A quiet single-piece move.
    pub fn translation(from: Square, to: Square) -> Move {
        Move::Normal(Step {
            from,
            to,
            capture: None,
        })
    }

    /// A capture removing the piece at `at` (usually the destination).
    pub fn capturing(from: Square, to: Square, at: Square) -> Move {
        Move::Normal(Step {
            from,
            to,
            capture: Some(at),
        })
    }

    /// The moved piece's origin square.
    pub fn from(&self) -> Square {
        self.steps()[0].from
    }

    /// The moved piece's destination square.
    pub fn to(&self) -> Square {
        self.steps()[0].to
    }

    /// The square a piece is captured on, or `None` for quiet moves.
    pub fn capture(&self) -> Option<Square> {
        self.steps().iter().find_map(|step| step.capture)
    }

    pub fn is_capture(&self) -> bool {
        self.capture().is_some()
    }

    pub fn is_composite(&self) -> bool {
        matches!(self, Move::Composite(_))
    }

    /// The atomic steps of this move, in application order.
    pub fn steps(&self) -> &[Step] {
        match self {
            Move::Normal(step) => std::slice::from_ref(step),
            Move::Composite(steps) => steps,
        }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Move::Normal(step) => match step.capture {
                Some(_) => write!(f, "{}x{}", step.from, step.to),
                None => write!(f, "{}{}", step.from, step.to),
            },
            Move::Composite(steps) => {
                f.write_str(if steps[0].to.file() > steps[0].from.file() {
                    "O-O"
                } else {
                    "O-O-O"
                })
            }
        }
    }
}

/// A container for moves that can be stored inline on the stack.
///
/// The capacity is enough to hold the pseudo-legal moves of a full side in
/// any reachable position.
pub type MoveList = ArrayVec<Move, 256>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capture_invariant() {
        let quiet = Move::translation(Square::E2, Square::E4);
        assert!(!quiet.is_capture());
        assert_eq!(quiet.capture(), None);

        let capture = Move::capturing(Square::E5, Square::D6, Square::D5);
        assert!(capture.is_capture());
        assert_eq!(capture.capture(), Some(Square::D5));
    }

    #[test]
    fn test_composite_endpoints() {
        let mut steps = ArrayVec::new();
        steps.push(Step {
            from: Square::E1,
            to: Square::G1,
            capture: None,
        });
        steps.push(Step {
            from: Square::H1,
            to: Square::F1,
            capture: None,
        });
        let castle = Move::Composite(steps);
        assert_eq!(castle.from(), Square::E1);
        assert_eq!(castle.to(), Square::G1);
        assert!(!castle.is_capture());
        assert_eq!(castle.to_string(), "O-O");
    }

    #[test]
    fn test_display() {
        assert_eq!(
            Move::translation(Square::G1, Square::F3).to_string(),
            "g1f3"
        );
        assert_eq!(
            Move::capturing(Square::E4, Square::D5, Square::D5).to_string(),
            "e4xd5"
        );
    }
}
