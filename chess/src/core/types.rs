/******************************************\
|==========================================|
|                 Colours                  |
|==========================================|
\******************************************/

#[rustfmt::skip]
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Colour {
    White,
    Black,
}

impl Colour {
    pub const NUM: usize = 2;
}

crate::impl_from_to_primitive!(Colour);
crate::impl_enum_iter!(Colour);

impl std::ops::Not for Colour {
    type Output = Self;

    fn not(self) -> Self::Output {
        match self {
            Colour::White => Colour::Black,
            Colour::Black => Colour::White,
        }
    }
}

/******************************************\
|==========================================|
|                 Direction                |
|==========================================|
\******************************************/

/// # Direction Representation
///
/// Square index offsets for the eight ray directions and the eight knight jumps

#[rustfmt::skip]
#[repr(i8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    N = 8, S = -8, E = 1, W = -1,
    NE = 9, NW = 7, SE = -7, SW = -9,
    NNE = 17, NNW = 15, NEE = 10, NWW = 6,
    SSE = -15, SSW = -17, SEE = -6, SWW = -10,
}

impl Direction {
    pub const ORTHOGONAL: [Direction; 4] = [Direction::N, Direction::S, Direction::E, Direction::W];

    pub const DIAGONAL: [Direction; 4] = [Direction::NE, Direction::NW, Direction::SE, Direction::SW];

    pub const KNIGHT: [Direction; 8] = [
        Direction::NNE,
        Direction::NNW,
        Direction::NEE,
        Direction::NWW,
        Direction::SSE,
        Direction::SSW,
        Direction::SEE,
        Direction::SWW,
    ];

    pub const KING: [Direction; 8] = [
        Direction::N,
        Direction::S,
        Direction::E,
        Direction::W,
        Direction::NE,
        Direction::NW,
        Direction::SE,
        Direction::SW,
    ];

    /// Number of files the direction moves towards the H file (negative towards A)
    pub const fn file_step(self) -> i8 {
        use Direction::*;
        match self {
            N | S => 0,
            E | NE | SE | NNE | SSE => 1,
            W | NW | SW | NNW | SSW => -1,
            NEE | SEE => 2,
            NWW | SWW => -2,
        }
    }
}

/******************************************\
|==========================================|
|                 Castling                 |
|==========================================|
\******************************************/

/// # Castling Representation
///
/// Four castling right bits, so every combination fits in `0..16`

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Castling(pub u8);

crate::impl_bit_ops!(Castling);

impl Castling {
    pub const NUM: usize = 16;

    pub const NONE: Castling = Castling(0);
    pub const WK: Castling = Castling(0b0001);
    pub const WQ: Castling = Castling(0b0010);
    pub const BK: Castling = Castling(0b0100);
    pub const BQ: Castling = Castling(0b1000);
    pub const ALL: Castling = Castling(0b1111);

    #[inline]
    pub const fn index(&self) -> usize {
        (self.0 & Self::ALL.0) as usize
    }

    #[inline]
    pub const fn has(&self, right: Castling) -> bool {
        self.0 & right.0 == right.0
    }
}

impl Default for Castling {
    fn default() -> Self {
        Castling::ALL
    }
}

impl std::fmt::Display for Castling {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.index() == 0 {
            return write!(f, "-");
        }

        for (right, c) in [
            (Castling::WK, 'K'),
            (Castling::WQ, 'Q'),
            (Castling::BK, 'k'),
            (Castling::BQ, 'q'),
        ] {
            if self.has(right) {
                write!(f, "{c}")?;
            }
        }

        Ok(())
    }
}
