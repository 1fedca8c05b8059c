//! Composable movement patterns.
//!
//! A piece's movement is described by a list of patterns, each generating
//! candidate moves from the piece's position against the current board
//! occupancy. Primitive patterns cover single offsets; wrappers mirror,
//! repeat or restrict a wrapped pattern. Special patterns implement
//! castling and en passant against board state.
//!
//! Patterns are authored in White's frame (White advances toward rank 8)
//! and bound to a color once, when the owning piece is created. Candidate
//! generation reads the board but never mutates it; the only mutable state
//! is per-instance ([`Pattern::LimitedUses`] records the positions it has
//! been queried from), which is why pattern instances must never be shared
//! between two pieces.

use std::cell::RefCell;

use arrayvec::ArrayVec;

use crate::{
    board::{Board, CastleRights},
    color::Color,
    m::{Move, MoveList, Step},
    role::Role,
    square::{Delta, Square},
};

/// A movement pattern: one strategy for generating candidate moves.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Pattern {
    /// Step by a fixed offset onto an empty square.
    Translate(Delta),
    /// Step by a fixed offset onto an enemy-occupied square, capturing it.
    Capture(Delta),
    /// [`Pattern::Translate`] if it yields a move, otherwise
    /// [`Pattern::Capture`]; never both in one evaluation.
    TranslateOrCapture(Delta),
    /// Mirrors the wrapped pattern's advancing axis for Black when bound.
    Forward(Box<Pattern>),
    /// Re-evaluates the wrapped pattern from each successive landing
    /// square, accumulating all landings. A capture ends its line; a step
    /// yielding nothing ends the whole pattern. `max_steps: None` slides
    /// without bound.
    Sliding {
        pattern: Box<Pattern>,
        max_steps: Option<u32>,
    },
    /// Yields the wrapped pattern's moves only while queried from at most
    /// `uses` distinct positions, then goes silent for good. Encodes
    /// "only from the original square" restrictions without a has-moved
    /// flag on the piece.
    LimitedUses {
        uses: u32,
        visited: RefCell<Vec<Square>>,
        pattern: Box<Pattern>,
    },
    /// Castling toward the h-file: king two steps toward the rook, rook to
    /// the square the king passed through. Checks rights, the friendly
    /// rook on its home corner and intervening emptiness; king-path safety
    /// is the board's legality filter.
    KingSideCastle,
    /// Castling toward the a-file.
    QueenSideCastle,
    /// Diagonal pawn capture through a one-ply en-passant target, removing
    /// the pawn beside the destination rather than on it.
    EnPassant,
}

impl Pattern {
    pub fn translate(file: i8, rank: i8) -> Pattern {
        Pattern::Translate(Delta::new(file, rank))
    }

    pub fn capture(file: i8, rank: i8) -> Pattern {
        Pattern::Capture(Delta::new(file, rank))
    }

    pub fn translate_or_capture(file: i8, rank: i8) -> Pattern {
        Pattern::TranslateOrCapture(Delta::new(file, rank))
    }

    pub fn forward(pattern: Pattern) -> Pattern {
        Pattern::Forward(Box::new(pattern))
    }

    /// Unbounded repetition of `pattern`.
    pub fn sliding(pattern: Pattern) -> Pattern {
        Pattern::Sliding {
            pattern: Box::new(pattern),
            max_steps: None,
        }
    }

    pub fn limited(uses: u32, pattern: Pattern) -> Pattern {
        Pattern::LimitedUses {
            uses,
            visited: RefCell::new(Vec::new()),
            pattern: Box::new(pattern),
        }
    }

    /// Binds the pattern to the color of its owning piece. Called once per
    /// pattern instance, at piece creation; the orientation is frozen
    /// afterwards.
    pub fn bind(&mut self, color: Color) {
        if let Pattern::Forward(pattern) = self {
            if color.is_black() {
                pattern.flip_rank();
            }
        }
        match self {
            Pattern::Forward(pattern)
            | Pattern::Sliding { pattern, .. }
            | Pattern::LimitedUses { pattern, .. } => pattern.bind(color),
            _ => {}
        }
    }

    fn flip_rank(&mut self) {
        match self {
            Pattern::Translate(delta)
            | Pattern::Capture(delta)
            | Pattern::TranslateOrCapture(delta) => *delta = delta.flip_rank(),
            Pattern::Forward(pattern)
            | Pattern::Sliding { pattern, .. }
            | Pattern::LimitedUses { pattern, .. } => pattern.flip_rank(),
            _ => {}
        }
    }

    /// Generates this pattern's candidate moves for a piece of color `by`
    /// standing on `pos`, appending them to `moves`.
    pub fn candidate_moves(&self, board: &Board, pos: Square, by: Color, moves: &mut MoveList) {
        match *self {
            Pattern::Translate(delta) => translate_into(board, pos, delta, moves),
            Pattern::Capture(delta) => capture_into(board, pos, by, delta, moves),
            Pattern::TranslateOrCapture(delta) => {
                let before = moves.len();
                translate_into(board, pos, delta, moves);
                if moves.len() == before {
                    capture_into(board, pos, by, delta, moves);
                }
            }
            Pattern::Forward(ref pattern) => pattern.candidate_moves(board, pos, by, moves),
            Pattern::Sliding {
                ref pattern,
                max_steps,
            } => slide(pattern, max_steps, board, pos, by, moves),
            Pattern::LimitedUses {
                uses,
                ref visited,
                ref pattern,
            } => {
                let mut visited = visited.borrow_mut();
                if visited.last() != Some(&pos) {
                    visited.push(pos);
                }
                if visited.len() as u32 <= uses {
                    pattern.candidate_moves(board, pos, by, moves);
                }
            }
            Pattern::KingSideCastle => castle_into(board, pos, by, CastlingSide::King, moves),
            Pattern::QueenSideCastle => castle_into(board, pos, by, CastlingSide::Queen, moves),
            Pattern::EnPassant => en_passant_into(board, pos, by, moves),
        }
    }
}

fn translate_into(board: &Board, pos: Square, delta: Delta, moves: &mut MoveList) {
    if let Some(to) = pos.offset(delta) {
        if board.is_empty(to) {
            moves.push(Move::translation(pos, to));
        }
    }
}

fn capture_into(board: &Board, pos: Square, by: Color, delta: Delta, moves: &mut MoveList) {
    if let Some(to) = pos.offset(delta) {
        if let Some(occupant) = board.color_at(to) {
            if occupant != by {
                moves.push(Move::capturing(pos, to, to));
            }
        }
    }
}

fn slide(
    pattern: &Pattern,
    max_steps: Option<u32>,
    board: &Board,
    pos: Square,
    by: Color,
    moves: &mut MoveList,
) {
    let mut frontier = vec![pos];
    let mut steps = 0;
    'outer: while !frontier.is_empty() && max_steps.map_or(true, |max| steps < max) {
        steps += 1;
        let mut next = Vec::new();
        for &from in &frontier {
            let mut found = MoveList::new();
            pattern.candidate_moves(board, from, by, &mut found);
            if found.is_empty() {
                // A dead frontier square ends the whole pattern, which is
                // what makes unbounded repetition terminate.
                break 'outer;
            }
            for m in &found {
                // Intermediate moves start from the frontier square;
                // rebase them onto the piece's actual position.
                moves.push(Move::Normal(Step {
                    from: pos,
                    to: m.to(),
                    capture: m.capture(),
                }));
                if !m.is_capture() {
                    next.push(m.to());
                }
            }
        }
        frontier = next;
    }
}

#[derive(Copy, Clone)]
enum CastlingSide {
    King,
    Queen,
}

fn castle_into(board: &Board, pos: Square, by: Color, side: CastlingSide, moves: &mut MoveList) {
    let (right, king_delta, rook_delta, rook_to_delta, clearance) = match side {
        CastlingSide::King => (
            CastleRights::KING_SIDE,
            Delta::new(2, 0),
            Delta::new(3, 0),
            Delta::new(1, 0),
            [Some(Delta::new(1, 0)), Some(Delta::new(2, 0)), None],
        ),
        CastlingSide::Queen => (
            CastleRights::QUEEN_SIDE,
            Delta::new(-2, 0),
            Delta::new(-4, 0),
            Delta::new(-1, 0),
            [
                Some(Delta::new(-1, 0)),
                Some(Delta::new(-2, 0)),
                Some(Delta::new(-3, 0)),
            ],
        ),
    };
    if !board.castle_rights(by).contains(right) {
        return;
    }
    let (king_to, rook_from, rook_to) = match (
        pos.offset(king_delta),
        pos.offset(rook_delta),
        pos.offset(rook_to_delta),
    ) {
        (Some(a), Some(b), Some(c)) => (a, b, c),
        _ => return,
    };
    match board.at(rook_from) {
        Some(piece) if piece.role == Role::Rook && piece.color == by => {}
        _ => return,
    }
    for delta in clearance.into_iter().flatten() {
        match pos.offset(delta) {
            Some(between) if board.is_empty(between) => {}
            _ => return,
        }
    }
    let mut steps = ArrayVec::new();
    steps.push(Step {
        from: pos,
        to: king_to,
        capture: None,
    });
    steps.push(Step {
        from: rook_from,
        to: rook_to,
        capture: None,
    });
    moves.push(Move::Composite(steps));
}

fn en_passant_into(board: &Board, pos: Square, by: Color, moves: &mut MoveList) {
    for file in [1, -1] {
        let beside = match pos.offset(Delta::new(file, 0)) {
            Some(sq) => sq,
            None => continue,
        };
        let to = match pos.offset(Delta::new(file, by.forward())) {
            Some(sq) => sq,
            None => continue,
        };
        if !board.en_passant_targets().contains(&to) {
            continue;
        }
        if let Some(occupant) = board.color_at(beside) {
            if occupant != by {
                moves.push(Move::capturing(pos, to, beside));
            }
        }
    }
}
