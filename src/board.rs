use std::{collections::BTreeMap, fmt, fmt::Write as _};

use arrayvec::ArrayVec;
use bitflags::bitflags;

use crate::{
    color::{ByColor, Color},
    errors::{MissingKingError, NotationError, ParseSquareError, PlayError},
    m::{Move, MoveList, Step},
    piece::Piece,
    role::Role,
    square::Square,
};

bitflags! {
    /// Per-color castling eligibility. Rights are only ever revoked, never
    /// regained.
    #[derive(Copy, Clone, Eq, PartialEq, Debug)]
    pub struct CastleRights: u8 {
        const KING_SIDE = 1;
        const QUEEN_SIDE = 2;
    }
}

impl Default for CastleRights {
    fn default() -> CastleRights {
        CastleRights::all()
    }
}

/// Whose turn it is and whether the game has ended.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub struct Status {
    pub turn: Color,
    pub in_check: bool,
    pub in_checkmate: bool,
    pub in_stalemate: bool,
}

/// Token to reverse one applied move.
///
/// Holds the moved and captured pieces and the prior castling rights,
/// en-passant targets and turn, so a move is undone by restoring state
/// rather than by replaying mutations backwards. The moved piece is kept
/// with its pre-move pattern state, so a take-back also restores
/// per-piece state such as the pawn's one-shot double step.
#[derive(Debug)]
pub struct Undo {
    steps: ArrayVec<StepUndo, 2>,
    rights: ByColor<CastleRights>,
    en_passant: ArrayVec<Square, 2>,
    turn: Color,
    logged: bool,
}

#[derive(Debug)]
struct StepUndo {
    step: Step,
    moved: Option<Piece>,
    captured: Option<(Square, Piece)>,
}

/// A chess board: sparse occupancy, whose turn it is, the move log,
/// castling rights and transient en-passant targets.
///
/// The board is mutated exclusively through [`Board::apply_move`] /
/// [`Board::play_unchecked`] and [`Board::undo`] during play, and through
/// [`Board::place`] / [`Board::remove`] when setting up positions.
///
/// # Examples
///
/// ```
/// use chessica::{Board, Color};
///
/// let mut board = Board::new();
/// assert_eq!(board.legal_moves(Color::White)?.len(), 20);
///
/// let e4 = board.resolve("e4", Color::White)?;
/// board.apply_move(&e4)?;
/// assert_eq!(board.turn(), Color::Black);
/// # Ok::<_, Box<dyn std::error::Error>>(())
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    pieces: BTreeMap<Square, Piece>,
    turn: Color,
    move_log: Vec<Move>,
    castle_rights: ByColor<CastleRights>,
    en_passant_targets: ArrayVec<Square, 2>,
}

impl Default for Board {
    fn default() -> Board {
        Board::new()
    }
}

impl Board {
    /// The standard initial position, White to move.
    pub fn new() -> Board {
        let mut board = Board::empty();
        for file in 0..8 {
            board.place(Square::new(file, 1), Piece::new(Role::Pawn, Color::White));
            board.place(Square::new(file, 6), Piece::new(Role::Pawn, Color::Black));
        }
        let backrank = [
            Role::Rook,
            Role::Knight,
            Role::Bishop,
            Role::Queen,
            Role::King,
            Role::Bishop,
            Role::Knight,
            Role::Rook,
        ];
        for color in Color::ALL {
            for (file, role) in backrank.into_iter().enumerate() {
                board.place(
                    Square::new(file as i8, color.backrank()),
                    Piece::new(role, color),
                );
            }
        }
        board
    }

    /// An empty board with full castling rights, White to move. Intended
    /// for editors and tests; fill it with [`Board::place`].
    pub fn empty() -> Board {
        Board {
            pieces: BTreeMap::new(),
            turn: Color::White,
            move_log: Vec::new(),
            castle_rights: ByColor::new_with(|_| CastleRights::all()),
            en_passant_targets: ArrayVec::new(),
        }
    }

    pub fn at(&self, sq: Square) -> Option<&Piece> {
        self.pieces.get(&sq)
    }

    pub fn is_empty(&self, sq: Square) -> bool {
        !self.pieces.contains_key(&sq)
    }

    pub fn color_at(&self, sq: Square) -> Option<Color> {
        self.at(sq).map(|piece| piece.color)
    }

    pub fn turn(&self) -> Color {
        self.turn
    }

    /// Editor path: overrides whose turn it is.
    pub fn set_turn(&mut self, color: Color) {
        self.turn = color;
    }

    /// All committed moves, oldest first.
    pub fn move_log(&self) -> &[Move] {
        &self.move_log
    }

    pub fn castle_rights(&self, color: Color) -> CastleRights {
        *self.castle_rights.by_color(color)
    }

    /// Squares a pawn may currently be captured through en passant.
    /// Populated by a double step and cleared by the very next committed
    /// move.
    pub fn en_passant_targets(&self) -> &[Square] {
        &self.en_passant_targets
    }

    /// Editor path: puts a piece on a square, replacing any occupant.
    pub fn place(&mut self, sq: Square, piece: Piece) {
        self.pieces.insert(sq, piece);
    }

    /// Editor path: removes and returns the piece on a square.
    pub fn remove(&mut self, sq: Square) -> Option<Piece> {
        self.pieces.remove(&sq)
    }

    /// Generates every candidate move for `color`, ignoring whether the
    /// mover's king is left attacked.
    ///
    /// This unfiltered set doubles as the attack surface for
    /// [`Board::is_square_attacked`]; filtering it for king safety there
    /// would recurse forever.
    pub fn pseudo_legal_moves(&self, color: Color) -> MoveList {
        let mut moves = MoveList::new();
        for (&sq, piece) in self.pieces.iter() {
            if piece.color == color {
                piece.candidate_moves(self, sq, &mut moves);
            }
        }
        moves
    }

    /// Whether some pseudo-legal move of `by` captures on `sq`. Quiet
    /// moves onto the square do not count.
    pub fn is_square_attacked(&self, sq: Square, by: Color) -> bool {
        self.pseudo_legal_moves(by)
            .iter()
            .any(|m| m.is_capture() && m.to() == sq)
    }

    fn king_square(&self, color: Color) -> Option<Square> {
        self.pieces.iter().find_map(|(&sq, piece)| {
            (piece.role == Role::King && piece.color == color).then_some(sq)
        })
    }

    pub fn is_in_check(&self, color: Color) -> Result<bool, MissingKingError> {
        let king = self.king_square(color).ok_or(MissingKingError { color })?;
        Ok(self.is_square_attacked(king, !color))
    }

    pub fn is_in_checkmate(&mut self, color: Color) -> Result<bool, MissingKingError> {
        Ok(self.is_in_check(color)? && self.legal_moves(color)?.is_empty())
    }

    pub fn is_in_stalemate(&mut self, color: Color) -> Result<bool, MissingKingError> {
        Ok(!self.is_in_check(color)? && self.legal_moves(color)?.is_empty())
    }

    pub fn status(&mut self) -> Result<Status, MissingKingError> {
        let turn = self.turn;
        let in_check = self.is_in_check(turn)?;
        let stuck = self.legal_moves(turn)?.is_empty();
        Ok(Status {
            turn,
            in_check,
            in_checkmate: in_check && stuck,
            in_stalemate: !in_check && stuck,
        })
    }

    /// Generates the legality-filtered moves for `color`: pseudo-legal
    /// candidates that do not leave `color`'s own king attacked.
    ///
    /// Every candidate is speculatively applied and reverted; the board is
    /// left exactly as it was, for accepted and rejected candidates alike.
    pub fn legal_moves(&mut self, color: Color) -> Result<MoveList, MissingKingError> {
        let candidates = self.pseudo_legal_moves(color);
        self.retain_safe(candidates, color)
    }

    /// The legality-filtered moves of the piece on `sq`, or an empty list
    /// for an empty square.
    pub fn legal_moves_from(&mut self, sq: Square) -> Result<MoveList, MissingKingError> {
        let mut candidates = MoveList::new();
        let color = match self.pieces.get(&sq) {
            Some(piece) => {
                piece.candidate_moves(self, sq, &mut candidates);
                piece.color
            }
            None => return Ok(MoveList::new()),
        };
        self.retain_safe(candidates, color)
    }

    fn retain_safe(
        &mut self,
        candidates: MoveList,
        color: Color,
    ) -> Result<MoveList, MissingKingError> {
        let mut legal = MoveList::new();
        for m in candidates {
            if self.is_safe(&m, color)? {
                legal.push(m);
            }
        }
        Ok(legal)
    }

    /// Whether applying `m` leaves `color`'s king unattacked. Castling
    /// additionally requires the king to be safe where it starts and on
    /// every square it crosses.
    fn is_safe(&mut self, m: &Move, color: Color) -> Result<bool, MissingKingError> {
        match m {
            Move::Normal(_) => {
                let undo = self.push_unchecked(m);
                let in_check = self.is_in_check(color);
                self.undo(undo);
                Ok(!in_check?)
            }
            Move::Composite(steps) => {
                if self.is_in_check(color)? {
                    return Ok(false);
                }
                let king = steps[0];
                let crossed = Square::new(
                    (king.from.file() + king.to.file()) / 2,
                    king.from.rank(),
                );
                for to in [crossed, king.to] {
                    let probe = Move::translation(king.from, to);
                    let undo = self.push_unchecked(&probe);
                    let in_check = self.is_in_check(color);
                    self.undo(undo);
                    if in_check? {
                        return Ok(false);
                    }
                }
                Ok(true)
            }
        }
    }

    /// Relocates pieces for `m` without touching the move log, rights,
    /// en-passant targets or turn. The counterpart of [`Board::undo`];
    /// legality filtering uses this pair speculatively.
    pub(crate) fn push_unchecked(&mut self, m: &Move) -> Undo {
        let mut undo = Undo {
            steps: ArrayVec::new(),
            rights: self.castle_rights,
            en_passant: self.en_passant_targets.clone(),
            turn: self.turn,
            logged: false,
        };
        for &step in m.steps() {
            let captured = step
                .capture
                .and_then(|at| self.pieces.remove(&at).map(|piece| (at, piece)));
            let moved = self.pieces.remove(&step.from).map(|piece| {
                // The board gets a clone; the original keeps its pre-move
                // pattern state for the take-back.
                self.pieces.insert(step.to, piece.clone());
                piece
            });
            undo.steps.push(StepUndo {
                step,
                moved,
                captured,
            });
        }
        undo
    }

    /// Reverts one applied move: steps in reverse order, captured pieces
    /// back on their capture squares, prior rights/targets/turn restored.
    pub fn undo(&mut self, mut undo: Undo) {
        while let Some(StepUndo {
            step,
            moved,
            captured,
        }) = undo.steps.pop()
        {
            if let Some(piece) = moved {
                self.pieces.remove(&step.to);
                self.pieces.insert(step.from, piece);
            }
            if let Some((at, piece)) = captured {
                self.pieces.insert(at, piece);
            }
        }
        self.castle_rights = undo.rights;
        self.en_passant_targets = undo.en_passant;
        self.turn = undo.turn;
        if undo.logged {
            self.move_log.pop();
        }
    }

    /// Commits `m` without validating legality: relocates pieces, appends
    /// to the move log, recomputes en-passant targets, derives castling
    /// right revocations and passes the turn.
    ///
    /// The only failure is a missing king for the incoming player, and the
    /// board is rolled back before the error propagates.
    pub fn play_unchecked(&mut self, m: &Move) -> Result<Undo, MissingKingError> {
        let mover = m
            .steps()
            .first()
            .and_then(|step| self.at(step.from))
            .map(|piece| (piece.role, piece.color));
        let mut undo = self.push_unchecked(m);
        self.move_log.push(m.clone());
        undo.logged = true;
        self.en_passant_targets.clear();
        if let Some((role, color)) = mover {
            match role {
                Role::Pawn => {
                    let dr = m.to().rank() - m.from().rank();
                    if dr.abs() == 2 {
                        self.en_passant_targets
                            .push(Square::new(m.from().file(), m.from().rank() + dr / 2));
                    }
                }
                Role::King => {
                    *self.castle_rights.by_color_mut(color) = CastleRights::empty();
                }
                Role::Rook => {
                    let home = color.backrank();
                    if m.from() == Square::new(0, home) {
                        self.castle_rights
                            .by_color_mut(color)
                            .remove(CastleRights::QUEEN_SIDE);
                    } else if m.from() == Square::new(7, home) {
                        self.castle_rights
                            .by_color_mut(color)
                            .remove(CastleRights::KING_SIDE);
                    }
                }
                _ => {}
            }
        }
        self.turn = !self.turn;
        match self.is_in_check(self.turn) {
            Ok(true) => {
                // A side found in check as its turn begins forfeits both
                // castling rights.
                *self.castle_rights.by_color_mut(self.turn) = CastleRights::empty();
                Ok(undo)
            }
            Ok(false) => Ok(undo),
            Err(err) => {
                self.undo(undo);
                Err(err)
            }
        }
    }

    /// Validates and commits a move for the side to move.
    ///
    /// `m` only needs matching endpoints; the applied move is the board's
    /// own candidate, so castling and en-passant side effects are carried
    /// even when the caller passes a bare from/to pair.
    pub fn apply_move(&mut self, m: &Move) -> Result<Undo, PlayError> {
        let (from, to) = match m.steps().first() {
            Some(step) => (step.from, step.to),
            None => return Err(PlayError::EmptyMove),
        };
        let mover = self.at(from).ok_or(PlayError::NoPiece { at: from })?;
        if mover.color != self.turn {
            return Err(PlayError::WrongTurn { at: from });
        }
        let chosen = self
            .legal_moves_from(from)?
            .into_iter()
            .find(|candidate| candidate.to() == to)
            .ok_or(PlayError::NotLegal { from, to })?;
        Ok(self.play_unchecked(&chosen)?)
    }

    /// Resolves minimal notation against the board: a bare square names a
    /// pawn move, a leading piece letter selects the kind. The first piece
    /// of that kind (in board order) with a candidate move to the target
    /// provides the move.
    ///
    /// # Examples
    ///
    /// ```
    /// use chessica::{Board, Color, Square};
    ///
    /// let board = Board::new();
    /// let m = board.resolve("Nf3", Color::White)?;
    /// assert_eq!(m.from(), Square::G1);
    /// assert_eq!(m.to(), Square::F3);
    /// # Ok::<_, chessica::NotationError>(())
    /// ```
    pub fn resolve(&self, notation: &str, color: Color) -> Result<Move, NotationError> {
        let (role, to) = if notation.len() == 2 {
            (Role::Pawn, notation.parse::<Square>()?)
        } else {
            let ch = notation
                .chars()
                .next()
                .ok_or(NotationError::InvalidSquare(ParseSquareError))?;
            let role = Role::from_char(ch).ok_or(NotationError::UnknownPiece(ch))?;
            (role, notation[ch.len_utf8()..].parse::<Square>()?)
        };
        for (&sq, piece) in self.pieces.iter() {
            if piece.color == color && piece.role == role {
                let mut candidates = MoveList::new();
                piece.candidate_moves(self, sq, &mut candidates);
                if let Some(m) = candidates.into_iter().find(|m| m.to() == to) {
                    return Ok(m);
                }
            }
        }
        Err(NotationError::Unresolved { role, to })
    }
}

impl fmt::Display for Board {
    /// Renders the board as an ASCII grid with rank and file labels, rank 8
    /// at the top.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for rank in (0..8).rev() {
            write!(f, "{}   ", rank + 1)?;
            for file in 0..8 {
                match self.at(Square::new(file, rank)) {
                    Some(piece) => f.write_char(piece.glyph())?,
                    None => f.write_char('.')?,
                }
                f.write_char(' ')?;
            }
            f.write_char('\n')?;
        }
        f.write_str("\n    ")?;
        for file in 0..8u8 {
            write!(f, "{} ", (b'a' + file) as char)?;
        }
        f.write_char('\n')
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn play(board: &mut Board, notation: &str) {
        let color = board.turn();
        let m = board.resolve(notation, color).unwrap();
        board.apply_move(&m).unwrap();
    }

    #[test]
    fn test_initial_position_has_twenty_moves() {
        let mut board = Board::new();
        assert_eq!(board.legal_moves(Color::White).unwrap().len(), 20);
        assert_eq!(board.legal_moves(Color::Black).unwrap().len(), 20);
    }

    #[test]
    fn test_double_step_sets_en_passant_target_for_one_ply() {
        let mut board = Board::new();
        play(&mut board, "e4");
        assert_eq!(board.en_passant_targets(), [Square::E3]);

        // Cleared by the very next committed move.
        play(&mut board, "a6");
        assert!(board.en_passant_targets().is_empty());
    }

    #[test]
    fn test_en_passant_captures_the_pawn_beside_the_destination() {
        let mut board = Board::new();
        play(&mut board, "e4");
        play(&mut board, "a6");
        play(&mut board, "e5");
        play(&mut board, "d5");
        assert_eq!(board.en_passant_targets(), [Square::D6]);

        let moves = board.legal_moves_from(Square::E5).unwrap();
        let capture = Move::capturing(Square::E5, Square::D6, Square::D5);
        assert!(moves.contains(&capture));

        // A bare from/to pair picks up the capture side effect.
        board
            .apply_move(&Move::translation(Square::E5, Square::D6))
            .unwrap();
        assert!(board.is_empty(Square::D5));
        assert!(board.is_empty(Square::E5));
        assert_eq!(
            board.at(Square::D6).map(|piece| (piece.role, piece.color)),
            Some((Role::Pawn, Color::White))
        );
    }

    #[test]
    fn test_castling_applies_and_reverts_atomically() {
        let mut board = Board::new();
        board.remove(Square::F1);
        board.remove(Square::G1);
        // Warm up per-piece pattern state so the snapshot comparison only
        // sees the effect of apply and undo.
        board.legal_moves(Color::White).unwrap();
        board.legal_moves(Color::Black).unwrap();
        let snapshot = board.clone();

        let castle = board
            .legal_moves_from(Square::E1)
            .unwrap()
            .into_iter()
            .find(Move::is_composite)
            .unwrap();
        assert_eq!(castle.to(), Square::G1);

        let undo = board.apply_move(&castle).unwrap();
        assert_eq!(
            board.at(Square::G1).map(|piece| piece.role),
            Some(Role::King)
        );
        assert_eq!(
            board.at(Square::F1).map(|piece| piece.role),
            Some(Role::Rook)
        );
        assert!(board.is_empty(Square::E1));
        assert!(board.is_empty(Square::H1));
        assert!(board.castle_rights(Color::White).is_empty());
        assert_eq!(board.turn(), Color::Black);

        board.undo(undo);
        assert_eq!(board, snapshot);
    }

    #[test]
    fn test_rook_move_revokes_its_own_side_only() {
        let mut board = Board::new();
        play(&mut board, "h4");
        play(&mut board, "a6");
        play(&mut board, "Rh3");
        assert_eq!(
            board.castle_rights(Color::White),
            CastleRights::QUEEN_SIDE
        );
        assert_eq!(board.castle_rights(Color::Black), CastleRights::all());
    }

    #[test]
    fn test_king_move_revokes_both_sides() {
        let mut board = Board::new();
        play(&mut board, "e4");
        play(&mut board, "a6");
        play(&mut board, "Ke2");
        assert!(board.castle_rights(Color::White).is_empty());
    }

    #[test]
    fn test_pinned_piece_may_only_move_along_the_pin() {
        let mut board = Board::empty();
        board.place(Square::E1, Piece::new(Role::King, Color::White));
        board.place(Square::E2, Piece::new(Role::Rook, Color::White));
        board.place(Square::E8, Piece::new(Role::Queen, Color::Black));
        let snapshot = board.clone();

        let moves = board.legal_moves_from(Square::E2).unwrap();
        assert!(!moves.is_empty());
        assert!(moves.iter().all(|m| m.to().file() == 4));
        assert!(moves.contains(&Move::translation(Square::E2, Square::E3)));
        assert!(moves.contains(&Move::capturing(Square::E2, Square::E8, Square::E8)));
        assert!(!moves.contains(&Move::translation(Square::E2, Square::D2)));

        // Speculative filtering left no trace.
        assert_eq!(board, snapshot);
    }

    #[test]
    fn test_fools_mate_is_checkmate() {
        let mut board = Board::new();
        for notation in ["f3", "e5", "g4", "Qh4"] {
            play(&mut board, notation);
        }
        let status = board.status().unwrap();
        assert_eq!(status.turn, Color::White);
        assert!(status.in_check);
        assert!(status.in_checkmate);
        assert!(!status.in_stalemate);
    }

    #[test]
    fn test_cornered_king_is_stalemated() {
        let mut board = Board::empty();
        board.place(Square::A8, Piece::new(Role::King, Color::Black));
        board.place(Square::B6, Piece::new(Role::Queen, Color::White));
        board.place(Square::G1, Piece::new(Role::King, Color::White));
        board.set_turn(Color::Black);

        let status = board.status().unwrap();
        assert!(!status.in_check);
        assert!(!status.in_checkmate);
        assert!(status.in_stalemate);
    }

    #[test]
    fn test_committed_undo_restores_log_turn_and_rights() {
        let mut board = Board::new();
        let e4 = board.resolve("e4", Color::White).unwrap();
        let undo = board.apply_move(&e4).unwrap();
        assert_eq!(board.move_log(), [e4]);

        board.undo(undo);
        assert!(board.move_log().is_empty());
        assert_eq!(board.turn(), Color::White);
        assert!(board.en_passant_targets().is_empty());
        assert_eq!(board.castle_rights(Color::White), CastleRights::all());
        assert!(board.at(Square::E2).is_some());
        assert!(board.is_empty(Square::E4));
    }

    #[test]
    fn test_committed_undo_restores_pattern_state() {
        let mut board = Board::new();
        // Warm up per-piece pattern state so the snapshot comparison only
        // sees the effect of apply and undo.
        board.legal_moves(Color::White).unwrap();
        board.legal_moves(Color::Black).unwrap();
        let snapshot = board.clone();

        let e4 = board.resolve("e4", Color::White).unwrap();
        let undo = board.apply_move(&e4).unwrap();
        board.undo(undo);
        assert_eq!(board, snapshot);

        // The taken-back pawn keeps its double step.
        let moves = board.legal_moves_from(Square::E2).unwrap();
        assert!(moves.contains(&Move::translation(Square::E2, Square::E4)));
    }

    #[test]
    fn test_empty_composite_is_rejected() {
        let mut board = Board::new();
        assert!(matches!(
            board.apply_move(&Move::Composite(ArrayVec::new())),
            Err(PlayError::EmptyMove)
        ));
    }

    #[test]
    fn test_check_queries_need_a_king() {
        let mut board = Board::empty();
        board.place(Square::E1, Piece::new(Role::King, Color::White));
        assert_eq!(board.is_in_check(Color::White), Ok(false));
        assert_eq!(
            board.is_in_check(Color::Black),
            Err(MissingKingError {
                color: Color::Black
            })
        );
    }

    #[test]
    fn test_resolve_picks_the_first_matching_piece() {
        let board = Board::new();
        let m = board.resolve("Nf3", Color::White).unwrap();
        assert_eq!(m.from(), Square::G1);
        assert_eq!(m.to(), Square::F3);
    }

    #[test]
    fn test_resolve_errors() {
        let board = Board::new();
        assert_eq!(
            board.resolve("Xf3", Color::White),
            Err(NotationError::UnknownPiece('X'))
        );
        assert_eq!(
            board.resolve("Nf9", Color::White),
            Err(NotationError::InvalidSquare(ParseSquareError))
        );
        assert!(matches!(
            board.resolve("Ke4", Color::White),
            Err(NotationError::Unresolved {
                role: Role::King,
                to: Square::E4
            })
        ));
    }

    #[test]
    fn test_apply_move_rejections() {
        let mut board = Board::new();
        assert!(matches!(
            board.apply_move(&Move::translation(Square::E4, Square::E5)),
            Err(PlayError::NoPiece { at: Square::E4 })
        ));
        assert!(matches!(
            board.apply_move(&Move::translation(Square::E7, Square::E5)),
            Err(PlayError::WrongTurn { at: Square::E7 })
        ));
        assert!(matches!(
            board.apply_move(&Move::translation(Square::E2, Square::E5)),
            Err(PlayError::NotLegal {
                from: Square::E2,
                to: Square::E5
            })
        ));
    }

    #[test]
    fn test_render() {
        let board = Board::new();
        assert_eq!(
            board.to_string(),
            "8   r n b q k b n r \n\
             7   p p p p p p p p \n\
             6   . . . . . . . . \n\
             5   . . . . . . . . \n\
             4   . . . . . . . . \n\
             3   . . . . . . . . \n\
             2   P P P P P P P P \n\
             1   R N B Q K B N R \n\
             \n    a b c d e f g h \n"
        );
    }
}
