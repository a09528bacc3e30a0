use std::fmt;

use super::{Direction, File, PieceType, Rank, Square};

/******************************************\
|==========================================|
|                 Bitboard                 |
|==========================================|
\******************************************/

/// A set of squares, one bit per square, A1 in the least significant bit.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Bitboard(pub u64);

crate::impl_bit_ops!(Bitboard);

impl Bitboard {
    pub const EMPTY: Bitboard = Bitboard(0);
    pub const FULL: Bitboard = Bitboard(!0);

    pub const RANK_1: Bitboard = Bitboard(0x0000_0000_0000_00FF);
    pub const RANK_8: Bitboard = Bitboard(0xFF00_0000_0000_0000);
    pub const FILE_A: Bitboard = Bitboard(0x0101_0101_0101_0101);
    pub const FILE_H: Bitboard = Bitboard(0x8080_8080_8080_8080);

    const FILE_AB: Bitboard = Bitboard(0x0303_0303_0303_0303);
    const FILE_GH: Bitboard = Bitboard(0xC0C0_C0C0_C0C0_C0C0);
}

/******************************************\
|==========================================|
|                Conversions               |
|==========================================|
\******************************************/

impl Square {
    #[inline]
    pub const fn bb(&self) -> Bitboard {
        Bitboard(1 << *self as u8)
    }
}

impl Rank {
    #[inline]
    pub const fn bb(&self) -> Bitboard {
        Bitboard(Bitboard::RANK_1.0 << (8 * *self as u8))
    }
}

impl File {
    #[inline]
    pub const fn bb(&self) -> Bitboard {
        Bitboard(Bitboard::FILE_A.0 << *self as u8)
    }
}

impl<const N: usize> From<[Square; N]> for Bitboard {
    fn from(squares: [Square; N]) -> Bitboard {
        squares.into_iter().fold(Bitboard::EMPTY, |bb, sq| bb | sq.bb())
    }
}

/******************************************\
|==========================================|
|         Bitboard Implementation          |
|==========================================|
\******************************************/

impl Bitboard {
    #[inline]
    pub const fn lsb(&self) -> Option<Square> {
        match self.0 {
            0 => None,
            bits => Some(unsafe { Square::from_unchecked(bits.trailing_zeros() as u8) }),
        }
    }

    /// Removes the least significant square and returns it
    #[inline]
    pub const fn pop_lsb(&mut self) -> Option<Square> {
        let sq = self.lsb();
        self.0 &= self.0.wrapping_sub(1);
        sq
    }

    #[inline]
    pub const fn count_bits(&self) -> u32 {
        self.0.count_ones()
    }

    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.0 == 0
    }

    #[inline]
    pub const fn contains(&self, sq: Square) -> bool {
        self.0 & sq.bb().0 != 0
    }

    #[inline]
    pub const fn set(&mut self, sq: Square) {
        self.0 |= sq.bb().0;
    }

    #[inline]
    pub const fn clear(&mut self, sq: Square) {
        self.0 &= !sq.bb().0;
    }

    /// Moves every square one step in `dir`. Squares leaving the board are dropped; the file masks
    /// keep squares from wrapping onto the opposite edge.
    #[inline]
    pub const fn shift(&self, dir: Direction) -> Bitboard {
        let keep = match dir.file_step() {
            2 => !Self::FILE_GH.0,
            1 => !Self::FILE_H.0,
            -1 => !Self::FILE_A.0,
            -2 => !Self::FILE_AB.0,
            _ => !0,
        };

        let bb = self.0 & keep;
        let offset = dir as i8;

        if offset > 0 {
            Bitboard(bb << offset as u32)
        } else {
            Bitboard(bb >> (-offset) as u32)
        }
    }

    /// Squares a single slider on `from` reaches in `dir`, up to and including the first blocker.
    const fn ray(from: Square, occ: Bitboard, dir: Direction) -> Bitboard {
        let mut attacks = 0;
        let mut step = from.bb().shift(dir);

        while step.0 != 0 {
            attacks |= step.0;
            if step.0 & occ.0 != 0 {
                break;
            }
            step = step.shift(dir);
        }

        Bitboard(attacks)
    }

    /// Ray cast attacks of a bishop or rook (queen: both) on `sq` given the full occupancy. Slow
    /// reference implementation used to fill the magic tables.
    pub const fn attack_on_the_fly(pt: PieceType, sq: Square, occ: Bitboard) -> Bitboard {
        let mut attacks = 0;

        if matches!(pt, PieceType::Bishop | PieceType::Queen) {
            let mut i = 0;
            while i < Direction::DIAGONAL.len() {
                attacks |= Self::ray(sq, occ, Direction::DIAGONAL[i]).0;
                i += 1;
            }
        }

        if matches!(pt, PieceType::Rook | PieceType::Queen) {
            let mut i = 0;
            while i < Direction::ORTHOGONAL.len() {
                attacks |= Self::ray(sq, occ, Direction::ORTHOGONAL[i]).0;
                i += 1;
            }
        }

        Bitboard(attacks)
    }

    /// Iterates over the squares in the set, lowest first
    #[inline]
    pub fn iter(&self) -> BitboardIter {
        BitboardIter(*self)
    }
}

pub struct BitboardIter(Bitboard);

impl Iterator for BitboardIter {
    type Item = Square;

    #[inline]
    fn next(&mut self) -> Option<Square> {
        self.0.pop_lsb()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.0.count_bits() as usize;
        (n, Some(n))
    }
}

impl IntoIterator for Bitboard {
    type Item = Square;
    type IntoIter = BitboardIter;

    fn into_iter(self) -> Self::IntoIter {
        BitboardIter(self)
    }
}

/******************************************\
|==========================================|
|                 Display                  |
|==========================================|
\******************************************/

impl fmt::Display for Bitboard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for rank in Rank::iter().rev() {
            write!(f, "{rank} ")?;
            for file in File::iter() {
                let cell = if self.contains(Square::from_parts(file, rank)) { 'x' } else { '.' };
                write!(f, " {cell}")?;
            }
            writeln!(f)?;
        }
        writeln!(f, "   a b c d e f g h")?;
        write!(f, "{:#018x}", self.0)
    }
}

/******************************************\
|==========================================|
|                Unit Tests                |
|==========================================|
\******************************************/
