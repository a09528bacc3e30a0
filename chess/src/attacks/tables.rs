use super::{
    geometry::{king_attack_mask, knight_attack_mask, pawn_attack_mask},
    magic::{BISHOP_MAGICS, BishopTable, ROOK_MAGICS, RookTable},
};
use crate::core::*;

/// Every piece's attack lookup. Built once, then only read.
#[derive(PartialEq, Eq)]
pub struct AttackTables {
    bishop: BishopTable,
    rook: RookTable,
    pawn: [[Bitboard; Square::NUM]; Colour::NUM],
    knight: [Bitboard; Square::NUM],
    king: [Bitboard; Square::NUM],
}

impl AttackTables {
    pub fn build() -> Self {
        let mut pawn = [[Bitboard::EMPTY; Square::NUM]; Colour::NUM];
        let mut knight = [Bitboard::EMPTY; Square::NUM];
        let mut king = [Bitboard::EMPTY; Square::NUM];

        for sq in Square::iter() {
            for colour in Colour::iter() {
                pawn[colour.index()][sq.index()] = pawn_attack_mask(colour, sq);
            }
            knight[sq.index()] = knight_attack_mask(sq);
            king[sq.index()] = king_attack_mask(sq);
        }

        Self {
            bishop: BishopTable::build(PieceType::Bishop, &BISHOP_MAGICS),
            rook: RookTable::build(PieceType::Rook, &ROOK_MAGICS),
            pawn,
            knight,
            king,
        }
    }

    #[inline]
    pub fn bishop_attacks(&self, sq: Square, occ: Bitboard) -> Bitboard {
        self.bishop.get(sq, occ)
    }

    #[inline]
    pub fn rook_attacks(&self, sq: Square, occ: Bitboard) -> Bitboard {
        self.rook.get(sq, occ)
    }

    #[inline]
    pub fn queen_attacks(&self, sq: Square, occ: Bitboard) -> Bitboard {
        self.bishop_attacks(sq, occ) | self.rook_attacks(sq, occ)
    }

    #[inline]
    pub fn pawn_attacks(&self, colour: Colour, sq: Square) -> Bitboard {
        self.pawn[colour.index()][sq.index()]
    }

    #[inline]
    pub fn knight_attacks(&self, sq: Square) -> Bitboard {
        self.knight[sq.index()]
    }

    #[inline]
    pub fn king_attacks(&self, sq: Square) -> Bitboard {
        self.king[sq.index()]
    }

    /// Attacks of a non-pawn piece type, pawns need a colour so go through `pawn_attacks`
    #[inline]
    pub fn attacks(&self, pt: PieceType, sq: Square, occ: Bitboard) -> Bitboard {
        match pt {
            PieceType::Knight => self.knight_attacks(sq),
            PieceType::Bishop => self.bishop_attacks(sq, occ),
            PieceType::Rook => self.rook_attacks(sq, occ),
            PieceType::Queen => self.queen_attacks(sq, occ),
            PieceType::King => self.king_attacks(sq),
            PieceType::Pawn => Bitboard::EMPTY,
        }
    }

    /// Slot the slider table of `pt` reads for `occ`, `None` for anything but bishops and rooks
    pub fn magic_index(&self, pt: PieceType, sq: Square, occ: Bitboard) -> Option<usize> {
        match pt {
            PieceType::Bishop => Some(self.bishop.magic(sq).index(occ)),
            PieceType::Rook => Some(self.rook.magic(sq).index(occ)),
            _ => None,
        }
    }

    pub fn bishop_table(&self) -> &BishopTable {
        &self.bishop
    }

    pub fn rook_table(&self) -> &RookTable {
        &self.rook
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::attacks::{BISHOP_SLOTS, ROOK_SLOTS};

    #[test]
    fn test_rook_on_empty_board_sees_rank_and_file() {
        let tables = AttackTables::build();
        let expected = (Rank::Rank4.bb() | File::FileD.bb()) & !Square::D4.bb();

        assert_eq!(tables.rook_attacks(Square::D4, Bitboard::EMPTY), expected);
        assert_eq!(tables.rook_attacks(Square::D4, Bitboard::EMPTY).count_bits(), 14);
    }

    #[test]
    fn test_rook_blocked_north() {
        let tables = AttackTables::build();
        let attacks = tables.rook_attacks(Square::D4, Square::D5.bb());

        assert!(attacks.contains(Square::D5));
        assert!(!attacks.contains(Square::D6));
        assert!(!attacks.contains(Square::D8));
        assert!(attacks.contains(Square::D1));
        assert!(attacks.contains(Square::H4));
    }

    #[test]
    fn test_queen_is_union() {
        let tables = AttackTables::build();
        let occ = Bitboard::from([Square::C3, Square::E6, Square::D2, Square::G4]);

        let queen = tables.queen_attacks(Square::E4, occ);
        assert_eq!(
            queen,
            Bitboard::attack_on_the_fly(PieceType::Queen, Square::E4, occ)
        );
        assert_eq!(tables.attacks(PieceType::Queen, Square::E4, occ), queen);
    }

    #[test]
    fn test_full_occupancy_gives_neighbours() {
        let tables = AttackTables::build();

        for sq in Square::iter() {
            assert_eq!(tables.queen_attacks(sq, Bitboard::FULL), tables.king_attacks(sq));
        }
    }

    #[test]
    fn test_leapers() {
        let tables = AttackTables::build();

        assert_eq!(tables.knight_attacks(Square::G1), Bitboard::from([Square::E2, Square::F3, Square::H3]));
        assert_eq!(tables.king_attacks(Square::E1).count_bits(), 5);
        assert_eq!(
            tables.pawn_attacks(Colour::Black, Square::E5),
            Bitboard::from([Square::D4, Square::F4])
        );
        assert_eq!(tables.attacks(PieceType::Pawn, Square::E5, Bitboard::EMPTY), Bitboard::EMPTY);
    }

    #[test]
    fn test_magic_index_in_range() {
        let tables = AttackTables::build();

        for sq in Square::iter() {
            let occ = Bitboard::FULL;
            assert!(tables.magic_index(PieceType::Bishop, sq, occ).is_some_and(|i| i < BISHOP_SLOTS));
            assert!(tables.magic_index(PieceType::Rook, sq, occ).is_some_and(|i| i < ROOK_SLOTS));
        }
        assert_eq!(tables.magic_index(PieceType::Knight, Square::A1, Bitboard::EMPTY), None);
        assert_eq!(tables.magic_index(PieceType::Bishop, Square::A1, Bitboard::EMPTY), Some(0));
    }
}
