use thiserror::Error;

/******************************************\
|==========================================|
|                 Squares                  |
|==========================================|
\******************************************/

/// # Square representation
///
/// - Little-endian rank-file mapping: A1 is bit 0, H1 is bit 7, H8 is bit 63

#[rustfmt::skip]
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Square {
    A1, B1, C1, D1, E1, F1, G1, H1,
    A2, B2, C2, D2, E2, F2, G2, H2,
    A3, B3, C3, D3, E3, F3, G3, H3,
    A4, B4, C4, D4, E4, F4, G4, H4,
    A5, B5, C5, D5, E5, F5, G5, H5,
    A6, B6, C6, D6, E6, F6, G6, H6,
    A7, B7, C7, D7, E7, F7, G7, H7,
    A8, B8, C8, D8, E8, F8, G8, H8,
}

impl Square {
    pub const NUM: usize = 64;
}

crate::impl_from_to_primitive!(Square);
crate::impl_enum_iter!(Square);

/******************************************\
|==========================================|
|              Ranks and Files             |
|==========================================|
\******************************************/

#[rustfmt::skip]
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Eq, Ord)]
pub enum Rank {
    Rank1, Rank2, Rank3, Rank4, Rank5, Rank6, Rank7, Rank8,
}

impl Rank {
    pub const NUM: usize = 8;
}

crate::impl_from_to_primitive!(Rank);
crate::impl_enum_iter!(Rank);

#[rustfmt::skip]
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Eq, Ord)]
pub enum File {
    FileA, FileB, FileC, FileD, FileE, FileF, FileG, FileH,
}

impl File {
    pub const NUM: usize = 8;
}

crate::impl_from_to_primitive!(File);
crate::impl_enum_iter!(File);

/******************************************\
|==========================================|
|              Implementation              |
|==========================================|
\******************************************/

impl Square {
    #[inline]
    pub const fn rank(&self) -> Rank {
        unsafe { Rank::from_unchecked(*self as u8 >> 3) }
    }

    #[inline]
    pub const fn file(&self) -> File {
        unsafe { File::from_unchecked(*self as u8 & 7) }
    }

    /// Builds the square on `file` and `rank`
    #[inline]
    pub const fn from_parts(file: File, rank: Rank) -> Self {
        unsafe { Self::from_unchecked(((rank as u8) << 3) | file as u8) }
    }

    /// Mirrors the square vertically (A1 <-> A8)
    #[inline]
    pub const fn flip_rank(&self) -> Self {
        unsafe { Self::from_unchecked(*self as u8 ^ 56) }
    }

    /// Index of the a1-h8 direction diagonal the square is on, in `0..15`
    #[inline]
    pub const fn diagonal(&self) -> usize {
        7 + self.rank() as usize - self.file() as usize
    }

    /// Index of the h1-a8 direction diagonal the square is on, in `0..15`
    #[inline]
    pub const fn anti_diagonal(&self) -> usize {
        self.rank() as usize + self.file() as usize
    }

    /// Whether both squares share a rank or a file
    #[inline]
    pub const fn is_orthogonal_to(&self, other: Square) -> bool {
        self.rank() as u8 == other.rank() as u8 || self.file() as u8 == other.file() as u8
    }

    /// Whether both squares share a diagonal or an anti-diagonal
    #[inline]
    pub const fn is_diagonal_to(&self, other: Square) -> bool {
        self.diagonal() == other.diagonal() || self.anti_diagonal() == other.anti_diagonal()
    }

    /// Two distinct squares are colinear when a rook or a bishop could travel between them on an
    /// empty board.
    #[inline]
    pub const fn is_colinear(&self, other: Square) -> bool {
        *self as u8 != other as u8 && (self.is_orthogonal_to(other) || self.is_diagonal_to(other))
    }
}

/******************************************\
|==========================================|
|                 Display                  |
|==========================================|
\******************************************/

impl std::fmt::Display for File {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", (b'a' + *self as u8) as char)
    }
}

impl std::fmt::Display for Rank {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", (b'1' + *self as u8) as char)
    }
}

impl std::fmt::Display for Square {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.file(), self.rank())
    }
}

/******************************************\
|==========================================|
|              Parsing Strings             |
|==========================================|
\******************************************/

impl TryFrom<char> for File {
    type Error = ParseFileError;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        match c {
            'a'..='h' => Ok(unsafe { File::from_unchecked(c as u8 - b'a') }),
            _ => Err(ParseFileError::InvalidChar(c)),
        }
    }
}

impl TryFrom<char> for Rank {
    type Error = ParseRankError;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        match c {
            '1'..='8' => Ok(unsafe { Rank::from_unchecked(c as u8 - b'1') }),
            _ => Err(ParseRankError::InvalidChar(c)),
        }
    }
}

impl std::str::FromStr for Square {
    type Err = ParseSquareError;

    /// Parses coordinates such as `"e4"`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();

        let (Some(file_char), Some(rank_char), None) = (chars.next(), chars.next(), chars.next())
        else {
            return Err(ParseSquareError::InvalidLength(s.chars().count()));
        };

        let file = File::try_from(file_char).map_err(|_| ParseSquareError::InvalidFileChar(file_char))?;
        let rank = Rank::try_from(rank_char).map_err(|_| ParseSquareError::InvalidRankChar(rank_char))?;

        Ok(Square::from_parts(file, rank))
    }
}

/******************************************\
|==========================================|
|            Square Parse Errors           |
|==========================================|
\******************************************/

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseFileError {
    #[error("Invalid character for file: '{0}', expected 'a'-'h'")]
    InvalidChar(char),
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseRankError {
    #[error("Invalid character for rank: '{0}', expected '1'-'8'")]
    InvalidChar(char),
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseSquareError {
    #[error("Invalid length for square string: {0}, expected 2")]
    InvalidLength(usize),
    #[error("Invalid character for file: '{0}', expected 'a'-'h'")]
    InvalidFileChar(char),
    #[error("Invalid character for rank: '{0}', expected '1'-'8'")]
    InvalidRankChar(char),
}

/******************************************\
|==========================================|
|                Unit Tests                |
|==========================================|
\******************************************/
