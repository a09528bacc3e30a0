use super::geometry::{relevant_mask, set_occupancy};
use crate::{core::*, utils::box_zeroed};

/******************************************\
|==========================================|
|             Magics Definition            |
|==========================================|
\******************************************/

/// Slots per square in the bishop table, enough for the largest bishop mask (9 bits)
pub const BISHOP_SLOTS: usize = 1 << 9;

/// Slots per square in the rook table, enough for the largest rook mask (12 bits)
pub const ROOK_SLOTS: usize = 1 << 12;

/// Magic multiplier, relevant occupancy mask and shift for one square
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Magic {
    pub magic: u64,
    pub mask: Bitboard,
    pub shift: u8,
}

impl Magic {
    pub const fn new(pt: PieceType, sq: Square, magic: u64) -> Self {
        let mask = relevant_mask(pt, sq);

        Self {
            magic,
            mask,
            shift: 64 - mask.count_bits() as u8,
        }
    }

    #[inline]
    pub const fn relevant_bits(&self) -> u32 {
        self.mask.count_bits()
    }

    /// Table slot for `occ`. Only the bits under the mask take part.
    #[inline]
    pub const fn index(&self, occ: Bitboard) -> usize {
        ((occ.0 & self.mask.0).wrapping_mul(self.magic) >> self.shift) as usize
    }
}

/******************************************\
|==========================================|
|               Magic Numbers              |
|==========================================|
\******************************************/

// Collision free under the fixed shift `64 - popcount(mask)`. Treat as data: changing a single
// entry requires re-running the table consistency tests below.

#[rustfmt::skip]
pub const BISHOP_MAGICS: [u64; Square::NUM] = [
    0x01200440A0890200, 0x02040122021A0407, 0x4008880108210401, 0x0211040080020000,
    0xA8A2121004000005, 0xA8A2121004000005, 0x4008880108210401, 0x8000804822012000,
    0x888008085094004C, 0x888008085094004C, 0x8000080214002010, 0x2204880A02200001,
    0x00C1840420000200, 0x0000408220601223, 0x00004424042C0CA0, 0x00004424042C0CA0,
    0x02408410900200D8, 0x1004001010220048, 0x0088088400240010, 0x2832400401020008,
    0x80A4000494201400, 0x0002400808021080, 0x8000A00202112000, 0x0002044300822100,
    0x002050A405845800, 0x200824C0083000A9, 0x0500440208080014, 0x08144800008200C0,
    0x1421010001104001, 0x0430008403004500, 0x0A84042231010102, 0x0A84042231010102,
    0x0002202000501301, 0x0004144200041000, 0x8002002E03100080, 0x0340600800010810,
    0x6020020020040408, 0x065004A120020205, 0x8081040080043200, 0x8081040080043200,
    0x8001042120200420, 0x8001042120200420, 0x00010C0402002C00, 0x0004202024200801,
    0x4029101200921200, 0x4002224045004600, 0xC0900128010010A8, 0x4002224045004600,
    0x2082280104111100, 0x0028440421080044, 0x0280004404040101, 0x0002100084110008,
    0x0802001222020C80, 0x0000400204010A12, 0x0008204102020000, 0x0020040440404001,
    0x0130A08404202A51, 0x0000428400888400, 0x0004312022111000, 0x810008040A841100,
    0x4410010810020880, 0x0862042002020208, 0x0862042002020208, 0x0082100116240041,
];

#[rustfmt::skip]
pub const ROOK_MAGICS: [u64; Square::NUM] = [
    0x0080002018804000, 0xA040004010002000, 0x0100200040081100, 0x4100100021000408,
    0x1100100800040300, 0x1100082100440082, 0x6580230000800200, 0x0100010008812052,
    0x0018800428400088, 0x0042004102002088, 0xA208801000200084, 0x0425000A21001000,
    0x0402000408102200, 0x0002000402001008, 0x4E46000102002804, 0x0062000208941049,
    0x2000848008400020, 0x3100404000201000, 0x0440808020001000, 0x0014120008402200,
    0x2002020004100820, 0x0216808002008400, 0x4484040001080290, 0x8400020000804401,
    0x4920208180014002, 0x0A00500040002000, 0xC800110100200840, 0x2000084200120020,
    0x0008000404002040, 0x4914020080040080, 0x0400010400081002, 0x009100010025C982,
    0x5709604005800081, 0x0410002000400048, 0x0000200080801000, 0x2200801000800802,
    0x0001001005000800, 0x0044008004800200, 0x1840512804004210, 0x4C0220449200010C,
    0x1000824015608000, 0x0500804001130020, 0x0020080010004040, 0x0224100009010020,
    0x0082000804220011, 0x0406000804010100, 0x2200018802040030, 0x80C100008861000A,
    0x0001008040220200, 0x0001008040220200, 0x8040200010008080, 0x4000800800100080,
    0xA000080080040080, 0x0080040002008080, 0x00C1080110020400, 0x0200010844028600,
    0x0281002080004019, 0x0100104004248101, 0x0500204200081082, 0x0802080520100101,
    0x104300440A980011, 0x084B000400080201, 0x07000C88102A0904, 0x0800004408802102,
];

/******************************************\
|==========================================|
|               Slider Table               |
|==========================================|
\******************************************/

/// Fixed size, magic indexed attack table for one slider class. `N` slots per square.
#[derive(PartialEq, Eq)]
pub struct SliderTable<const N: usize> {
    pt: PieceType,
    magics: [Magic; Square::NUM],
    attacks: Box<[[Bitboard; N]; Square::NUM]>,
}

pub type BishopTable = SliderTable<BISHOP_SLOTS>;
pub type RookTable = SliderTable<ROOK_SLOTS>;

impl<const N: usize> SliderTable<N> {
    /// Enumerates every subset of each square's relevant mask and stores the ray cast attacks at
    /// the subset's magic index. No collision checks happen here.
    pub fn build(pt: PieceType, magic_nums: &[u64; Square::NUM]) -> Self {
        // SAFETY: an all-zero Bitboard is the empty set
        let mut attacks: Box<[[Bitboard; N]; Square::NUM]> = unsafe { box_zeroed() };
        let mut magics = [Magic::default(); Square::NUM];

        for sq in Square::iter() {
            let magic = Magic::new(pt, sq, magic_nums[sq.index()]);
            let bits = magic.relevant_bits();
            debug_assert!(1 << bits <= N, "{sq} needs {bits} bits");

            let slots = &mut attacks[sq.index()];
            for index in 0..1usize << bits {
                let occ = set_occupancy(index, bits, magic.mask);
                slots[magic.index(occ)] = Bitboard::attack_on_the_fly(pt, sq, occ);
            }

            magics[sq.index()] = magic;
        }

        Self { pt, magics, attacks }
    }

    #[inline]
    pub fn get(&self, sq: Square, occ: Bitboard) -> Bitboard {
        let magic = &self.magics[sq.index()];
        self.attacks[sq.index()][magic.index(occ)]
    }

    #[inline]
    pub fn magic(&self, sq: Square) -> &Magic {
        &self.magics[sq.index()]
    }

    pub fn piece_type(&self) -> PieceType {
        self.pt
    }
}

/******************************************\
|==========================================|
|                Unit Tests                |
|==========================================|
\******************************************/

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn check_round_trip<const N: usize>(table: &SliderTable<N>) {
        let pt = table.piece_type();

        for sq in Square::iter() {
            let magic = table.magic(sq);
            let bits = magic.relevant_bits();

            for index in 0..1usize << bits {
                let occ = set_occupancy(index, bits, magic.mask);
                assert_eq!(
                    table.get(sq, occ),
                    Bitboard::attack_on_the_fly(pt, sq, occ),
                    "{pt:?} on {sq} with occupancy {:#x}",
                    occ.0
                );
            }
        }
    }

    fn check_collisions<const N: usize>(table: &SliderTable<N>) {
        let pt = table.piece_type();

        for sq in Square::iter() {
            let magic = table.magic(sq);
            let bits = magic.relevant_bits();
            let mut slots: HashMap<usize, Bitboard> = HashMap::new();

            for index in 0..1usize << bits {
                let occ = set_occupancy(index, bits, magic.mask);
                let attacks = Bitboard::attack_on_the_fly(pt, sq, occ);
                let slot = magic.index(occ);

                assert!(slot < N);
                if let Some(previous) = slots.insert(slot, attacks) {
                    assert_eq!(previous, attacks, "{pt:?} collision on {sq} at slot {slot}");
                }
            }
        }
    }

    #[test]
    fn test_bishop_round_trip() {
        check_round_trip(&BishopTable::build(PieceType::Bishop, &BISHOP_MAGICS));
    }

    #[test]
    fn test_rook_round_trip() {
        check_round_trip(&RookTable::build(PieceType::Rook, &ROOK_MAGICS));
    }

    #[test]
    fn test_bishop_collision_free() {
        check_collisions(&BishopTable::build(PieceType::Bishop, &BISHOP_MAGICS));
    }

    #[test]
    fn test_rook_collision_free() {
        check_collisions(&RookTable::build(PieceType::Rook, &ROOK_MAGICS));
    }

    #[test]
    fn test_shift_matches_mask() {
        for sq in Square::iter() {
            let bishop = Magic::new(PieceType::Bishop, sq, BISHOP_MAGICS[sq.index()]);
            let rook = Magic::new(PieceType::Rook, sq, ROOK_MAGICS[sq.index()]);

            assert_eq!(bishop.shift as u32, 64 - bishop.relevant_bits());
            assert_eq!(rook.shift as u32, 64 - rook.relevant_bits());
        }
    }

    #[test]
    fn test_bits_outside_mask_are_ignored() {
        let rooks = RookTable::build(PieceType::Rook, &ROOK_MAGICS);
        let mask = rooks.magic(Square::D4).mask;

        let occ = Bitboard::from([Square::D6, Square::B4]);
        let noise = Bitboard::from([Square::A1, Square::H8, Square::D8, Square::E5]) & !mask;

        assert_eq!(rooks.get(Square::D4, occ), rooks.get(Square::D4, occ | noise));
    }
}
