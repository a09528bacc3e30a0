use super::{PieceType, Square};

/******************************************\
|==========================================|
|                Move Flags                |
|==========================================|
\******************************************/

#[repr(u8)]
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum MoveFlag {
    Quiet = 0b0000,
    DoublePawnPush = 0b0001,
    KingCastle = 0b0010,
    QueenCastle = 0b0011,
    Capture = 0b0100,
    EnPassant = 0b0101,
    KnightPromo = 0b1000,
    BishopPromo = 0b1001,
    RookPromo = 0b1010,
    QueenPromo = 0b1011,
    KnightPromoCapture = 0b1100,
    BishopPromoCapture = 0b1101,
    RookPromoCapture = 0b1110,
    QueenPromoCapture = 0b1111,
}

impl MoveFlag {
    const CAPTURE_BIT: u8 = 0b0100;
    const PROMOTION_BIT: u8 = 0b1000;

    /// Decodes the four flag bits. `0b0110` and `0b0111` are unused and read back as quiet.
    const fn from_bits(bits: u8) -> Self {
        use MoveFlag::*;
        match bits & 0xF {
            0b0001 => DoublePawnPush,
            0b0010 => KingCastle,
            0b0011 => QueenCastle,
            0b0100 => Capture,
            0b0101 => EnPassant,
            0b1000 => KnightPromo,
            0b1001 => BishopPromo,
            0b1010 => RookPromo,
            0b1011 => QueenPromo,
            0b1100 => KnightPromoCapture,
            0b1101 => BishopPromoCapture,
            0b1110 => RookPromoCapture,
            0b1111 => QueenPromoCapture,
            _ => Quiet,
        }
    }

    #[inline]
    pub const fn is_capture(self) -> bool {
        self as u8 & Self::CAPTURE_BIT != 0
    }

    #[inline]
    pub const fn is_promotion(self) -> bool {
        self as u8 & Self::PROMOTION_BIT != 0
    }

    #[inline]
    pub const fn promotion_piece(self) -> Option<PieceType> {
        if !self.is_promotion() {
            return None;
        }

        Some(match self as u8 & 0b11 {
            0 => PieceType::Knight,
            1 => PieceType::Bishop,
            2 => PieceType::Rook,
            _ => PieceType::Queen,
        })
    }
}

/******************************************\
|==========================================|
|                   Move                   |
|==========================================|
\******************************************/

/// 16 bit move: from square in bits 0-5, to square in bits 6-11, flag in bits 12-15.
#[derive(Debug, PartialEq, Clone, Copy, Eq, Hash)]
pub struct Move(u16);

impl Default for Move {
    fn default() -> Self {
        Self::NONE
    }
}

impl Move {
    /// Sentinel for "no move". It encodes a1a1, which no legal move produces, and is all zero
    /// bits so zero initialised storage reads back as `NONE`.
    pub const NONE: Self = Self(0);

    #[inline]
    pub const fn new(from: Square, to: Square, flag: MoveFlag) -> Self {
        Self(from as u16 | (to as u16) << 6 | (flag as u16) << 12)
    }

    #[inline]
    pub const fn from_raw(raw: u16) -> Self {
        Self(raw)
    }

    #[inline]
    pub const fn raw(self) -> u16 {
        self.0
    }

    #[inline]
    pub const fn from(self) -> Square {
        unsafe { Square::from_unchecked((self.0 & 0x3F) as u8) }
    }

    #[inline]
    pub const fn to(self) -> Square {
        unsafe { Square::from_unchecked((self.0 >> 6 & 0x3F) as u8) }
    }

    #[inline]
    pub const fn flag(self) -> MoveFlag {
        MoveFlag::from_bits((self.0 >> 12) as u8)
    }

    #[inline]
    pub const fn is_none(self) -> bool {
        self.0 == Self::NONE.0
    }

    #[inline]
    pub const fn is_capture(self) -> bool {
        self.flag().is_capture()
    }
}

impl std::fmt::Display for Move {
    /// Long algebraic notation, `0000` for the sentinel
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_none() {
            return write!(f, "0000");
        }

        write!(f, "{}{}", self.from(), self.to())?;

        match self.flag().promotion_piece() {
            Some(pt) => write!(f, "{pt}"),
            None => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_move_fields() {
        let m = Move::new(Square::E7, Square::D8, MoveFlag::QueenPromoCapture);

        assert_eq!(m.from(), Square::E7);
        assert_eq!(m.to(), Square::D8);
        assert_eq!(m.flag(), MoveFlag::QueenPromoCapture);
        assert!(m.is_capture());
        assert_eq!(m.flag().promotion_piece(), Some(PieceType::Queen));
        assert_eq!(Move::from_raw(m.raw()), m);
    }

    #[test]
    fn test_none_sentinel() {
        assert!(Move::default().is_none());
        assert_eq!(Move::NONE.raw(), 0);
        assert!(!Move::new(Square::E2, Square::E4, MoveFlag::DoublePawnPush).is_none());
    }

    #[test]
    fn test_display() {
        assert_eq!(Move::NONE.to_string(), "0000");
        assert_eq!(Move::new(Square::G1, Square::F3, MoveFlag::Quiet).to_string(), "g1f3");
        assert_eq!(Move::new(Square::A7, Square::A8, MoveFlag::KnightPromo).to_string(), "a7a8n");
    }
}
