use crate::color::Color;

/// Piece kinds.
///
/// `Block` is an inert obstacle used by board editors; it has no movement
/// patterns of its own.
///
/// # Examples
///
/// ```
/// use chessica::Role;
///
/// assert_eq!(Role::from_char('N'), Some(Role::Knight));
/// assert_eq!(Role::Knight.char(), 'n');
/// ```
#[allow(missing_docs)]
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Debug, Hash)]
pub enum Role {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
    Block,
}

impl Role {
    /// Gets the piece kind from its letter, either case.
    pub const fn from_char(ch: char) -> Option<Role> {
        match ch {
            'P' | 'p' => Some(Role::Pawn),
            'N' | 'n' => Some(Role::Knight),
            'B' | 'b' => Some(Role::Bishop),
            'R' | 'r' => Some(Role::Rook),
            'Q' | 'q' => Some(Role::Queen),
            'K' | 'k' => Some(Role::King),
            'O' | 'o' => Some(Role::Block),
            _ => None,
        }
    }

    /// Gets the lowercase letter for the piece kind.
    pub const fn char(self) -> char {
        match self {
            Role::Pawn => 'p',
            Role::Knight => 'n',
            Role::Bishop => 'b',
            Role::Rook => 'r',
            Role::Queen => 'q',
            Role::King => 'k',
            Role::Block => 'o',
        }
    }

    pub const fn upper_char(self) -> char {
        self.char().to_ascii_uppercase()
    }

    /// The board glyph for this kind: uppercase for White, lowercase for
    /// Black.
    pub const fn glyph(self, color: Color) -> char {
        match color {
            Color::White => self.upper_char(),
            Color::Black => self.char(),
        }
    }
}
