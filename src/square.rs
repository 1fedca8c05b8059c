use std::{fmt, str::FromStr};

use crate::errors::ParseSquareError;

/// A square on an 8×8 board, packed as `file | rank << 3`.
///
/// Rank 0 is rank `1`, White's home rank. Out-of-range coordinates are
/// never representable; fallible constructors return `None` instead.
///
/// # Examples
///
/// ```
/// use chessica::Square;
///
/// let sq = Square::new(4, 3);
/// assert_eq!(sq, Square::E4);
/// assert_eq!(sq.file(), 4);
/// assert_eq!(sq.rank(), 3);
/// assert_eq!(sq.to_string(), "e4");
/// ```
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Square(i8);

impl Square {
    /// Creates a square from zero-based file and rank.
    ///
    /// # Panics
    ///
    /// Panics in debug mode if the coordinates are out of range.
    pub fn new(file: i8, rank: i8) -> Square {
        debug_assert!((0..8).contains(&file));
        debug_assert!((0..8).contains(&rank));
        Square(file | (rank << 3))
    }

    /// Creates a square from zero-based file and rank, or `None` if either
    /// is out of range.
    pub fn from_coords(file: i8, rank: i8) -> Option<Square> {
        if (0..8).contains(&file) && (0..8).contains(&rank) {
            Some(Square::new(file, rank))
        } else {
            None
        }
    }

    pub fn file(self) -> i8 {
        self.0 & 7
    }

    pub fn rank(self) -> i8 {
        self.0 >> 3
    }

    /// Offsets the square by a delta, or `None` if the destination falls
    /// off the board.
    ///
    /// # Examples
    ///
    /// ```
    /// use chessica::{Delta, Square};
    ///
    /// assert_eq!(Square::E2.offset(Delta::new(0, 2)), Some(Square::E4));
    /// assert_eq!(Square::H8.offset(Delta::new(1, 0)), None);
    /// ```
    pub fn offset(self, delta: Delta) -> Option<Square> {
        Square::from_coords(self.file() + delta.file, self.rank() + delta.rank)
    }

    pub fn distance(self, other: Square) -> i8 {
        (self.file() - other.file())
            .abs()
            .max((self.rank() - other.rank()).abs())
    }
}

impl FromStr for Square {
    type Err = ParseSquareError;

    fn from_str(s: &str) -> Result<Square, ParseSquareError> {
        let bytes = s.as_bytes();
        if bytes.len() < 2 {
            return Err(ParseSquareError);
        }
        let file = bytes[0] as i16 - 'a' as i16;
        let rank: u8 = btoi::btou(&bytes[1..]).map_err(|_| ParseSquareError)?;
        if !(1..=8).contains(&rank) {
            return Err(ParseSquareError);
        }
        Square::from_coords(file as i8, rank as i8 - 1).ok_or(ParseSquareError)
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{}",
            (b'a' + self.file() as u8) as char,
            (b'1' + self.rank() as u8) as char
        )
    }
}

impl fmt::Debug for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

/// A file/rank offset applied to a [`Square`].
#[derive(Copy, Clone, Eq, PartialEq, Debug, Hash)]
pub struct Delta {
    pub file: i8,
    pub rank: i8,
}

impl Delta {
    pub const fn new(file: i8, rank: i8) -> Delta {
        Delta { file, rank }
    }

    /// Mirrors the advancing axis, turning a White-frame offset into a
    /// Black-frame one.
    #[must_use]
    pub const fn flip_rank(self) -> Delta {
        Delta {
            file: self.file,
            rank: -self.rank,
        }
    }
}

impl Square {
    pub const A1: Square = Square(0);
    pub const B1: Square = Square(1);
    pub const C1: Square = Square(2);
    pub const D1: Square = Square(3);
    pub const E1: Square = Square(4);
    pub const F1: Square = Square(5);
    pub const G1: Square = Square(6);
    pub const H1: Square = Square(7);
    pub const A2: Square = Square(8);
    pub const B2: Square = Square(9);
    pub const C2: Square = Square(10);
    pub const D2: Square = Square(11);
    pub const E2: Square = Square(12);
    pub const F2: Square = Square(13);
    pub const G2: Square = Square(14);
    pub const H2: Square = Square(15);
    pub const A3: Square = Square(16);
    pub const B3: Square = Square(17);
    pub const C3: Square = Square(18);
    pub const D3: Square = Square(19);
    pub const E3: Square = Square(20);
    pub const F3: Square = Square(21);
    pub const G3: Square = Square(22);
    pub const H3: Square = Square(23);
    pub const A4: Square = Square(24);
    pub const B4: Square = Square(25);
    pub const C4: Square = Square(26);
    pub const D4: Square = Square(27);
    pub const E4: Square = Square(28);
    pub const F4: Square = Square(29);
    pub const G4: Square = Square(30);
    pub const H4: Square = Square(31);
    pub const A5: Square = Square(32);
    pub const B5: Square = Square(33);
    pub const C5: Square = Square(34);
    pub const D5: Square = Square(35);
    pub const E5: Square = Square(36);
    pub const F5: Square = Square(37);
    pub const G5: Square = Square(38);
    pub const H5: Square = Square(39);
    pub const A6: Square = Square(40);
    pub const B6: Square = Square(41);
    pub const C6: Square = Square(42);
    pub const D6: Square = Square(43);
    pub const E6: Square = Square(44);
    pub const F6: Square = Square(45);
    pub const G6: Square = Square(46);
    pub const H6: Square = Square(47);
    pub const A7: Square = Square(48);
    pub const B7: Square = Square(49);
    pub const C7: Square = Square(50);
    pub const D7: Square = Square(51);
    pub const E7: Square = Square(52);
    pub const F7: Square = Square(53);
    pub const G7: Square = Square(54);
    pub const H7: Square = Square(55);
    pub const A8: Square = Square(56);
    pub const B8: Square = Square(57);
    pub const C8: Square = Square(58);
    pub const D8: Square = Square(59);
    pub const E8: Square = Square(60);
    pub const F8: Square = Square(61);
    pub const G8: Square = Square(62);
    pub const H8: Square = Square(63);
}
