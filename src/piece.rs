use crate::{
    board::Board,
    color::Color,
    m::MoveList,
    pattern::Pattern,
    role::Role,
    square::Square,
};

/// A piece placed on the board: a kind, a color and the kind's movement
/// patterns instantiated for this one piece.
///
/// Every placement gets fresh pattern instances, deep-copied from the
/// kind's templates and bound to the piece's color. Sharing would leak
/// per-instance pattern state (the pawn double-step history) between
/// pieces.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Piece {
    pub color: Color,
    pub role: Role,
    patterns: Vec<Pattern>,
}

impl Piece {
    pub fn new(role: Role, color: Color) -> Piece {
        let mut patterns = templates(role);
        for pattern in &mut patterns {
            pattern.bind(color);
        }
        Piece {
            color,
            role,
            patterns,
        }
    }

    /// The piece's board glyph: uppercase for White, lowercase for Black.
    pub fn glyph(&self) -> char {
        self.role.glyph(self.color)
    }

    /// Appends the concatenation of all patterns' candidate moves from
    /// `pos`, in pattern order.
    pub fn candidate_moves(&self, board: &Board, pos: Square, moves: &mut MoveList) {
        for pattern in &self.patterns {
            pattern.candidate_moves(board, pos, self.color, moves);
        }
    }
}

/// The movement pattern templates for each piece kind, authored in White's
/// frame.
fn templates(role: Role) -> Vec<Pattern> {
    match role {
        Role::Pawn => vec![
            Pattern::limited(1, Pattern::forward(Pattern::translate(0, 2))),
            Pattern::forward(Pattern::translate(0, 1)),
            Pattern::forward(Pattern::capture(1, 1)),
            Pattern::forward(Pattern::capture(-1, 1)),
            Pattern::EnPassant,
        ],
        Role::Knight => vec![
            Pattern::translate_or_capture(1, 2),
            Pattern::translate_or_capture(-1, 2),
            Pattern::translate_or_capture(1, -2),
            Pattern::translate_or_capture(-1, -2),
            Pattern::translate_or_capture(2, 1),
            Pattern::translate_or_capture(-2, 1),
            Pattern::translate_or_capture(2, -1),
            Pattern::translate_or_capture(-2, -1),
        ],
        Role::Bishop => vec![
            Pattern::sliding(Pattern::translate_or_capture(1, 1)),
            Pattern::sliding(Pattern::translate_or_capture(1, -1)),
            Pattern::sliding(Pattern::translate_or_capture(-1, 1)),
            Pattern::sliding(Pattern::translate_or_capture(-1, -1)),
        ],
        Role::Rook => vec![
            Pattern::sliding(Pattern::translate_or_capture(0, 1)),
            Pattern::sliding(Pattern::translate_or_capture(1, 0)),
            Pattern::sliding(Pattern::translate_or_capture(0, -1)),
            Pattern::sliding(Pattern::translate_or_capture(-1, 0)),
        ],
        Role::Queen => vec![
            Pattern::sliding(Pattern::translate_or_capture(1, 1)),
            Pattern::sliding(Pattern::translate_or_capture(1, -1)),
            Pattern::sliding(Pattern::translate_or_capture(-1, 1)),
            Pattern::sliding(Pattern::translate_or_capture(-1, -1)),
            Pattern::sliding(Pattern::translate_or_capture(0, 1)),
            Pattern::sliding(Pattern::translate_or_capture(1, 0)),
            Pattern::sliding(Pattern::translate_or_capture(0, -1)),
            Pattern::sliding(Pattern::translate_or_capture(-1, 0)),
        ],
        Role::King => vec![
            Pattern::translate_or_capture(1, 1),
            Pattern::translate_or_capture(1, -1),
            Pattern::translate_or_capture(-1, 1),
            Pattern::translate_or_capture(-1, -1),
            Pattern::translate_or_capture(0, 1),
            Pattern::translate_or_capture(1, 0),
            Pattern::translate_or_capture(0, -1),
            Pattern::translate_or_capture(-1, 0),
            Pattern::KingSideCastle,
            Pattern::QueenSideCastle,
        ],
        Role::Block => Vec::new(),
    }
}
