use super::AttackTables;
use crate::{core::*, utils::box_zeroed};

/// Open squares strictly between two colinear squares, empty for every other pair.
#[derive(PartialEq, Eq)]
pub struct BetweenTable {
    table: Box<[[Bitboard; Square::NUM]; Square::NUM]>,
}

impl BetweenTable {
    /// With only `a` and `b` occupied, the ray from `a` stops on `b` and the ray from `b` stops on
    /// `a`, so their intersection is the segment strictly between them.
    pub fn build(attacks: &AttackTables) -> Self {
        // SAFETY: an all-zero Bitboard is the empty set, which is the answer for unset pairs
        let mut table: Box<[[Bitboard; Square::NUM]; Square::NUM]> = unsafe { box_zeroed() };

        for a in Square::iter() {
            for b in Square::iter().filter(|&b| a.is_colinear(b)) {
                let occ = a.bb() | b.bb();

                table[a.index()][b.index()] = if a.is_orthogonal_to(b) {
                    attacks.rook_attacks(a, occ) & attacks.rook_attacks(b, occ)
                } else {
                    attacks.bishop_attacks(a, occ) & attacks.bishop_attacks(b, occ)
                };
            }
        }

        Self { table }
    }

    #[inline]
    pub fn between(&self, a: Square, b: Square) -> Bitboard {
        self.table[a.index()][b.index()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn build() -> BetweenTable {
        BetweenTable::build(&AttackTables::build())
    }

    #[test]
    fn test_symmetric() {
        let table = build();

        for a in Square::iter() {
            for b in Square::iter() {
                assert_eq!(table.between(a, b), table.between(b, a), "{a} {b}");
            }
        }
    }

    #[test]
    fn test_self_and_non_colinear_pairs_are_empty() {
        let table = build();

        for a in Square::iter() {
            assert!(table.between(a, a).is_empty());

            for b in Square::iter().filter(|&b| !a.is_colinear(b)) {
                assert!(table.between(a, b).is_empty(), "{a} {b}");
            }
        }
    }

    #[test]
    fn test_segment_length() {
        let table = build();

        for a in Square::iter() {
            for b in Square::iter().filter(|&b| a.is_colinear(b)) {
                let rank_gap = (a.rank() as i32 - b.rank() as i32).unsigned_abs();
                let file_gap = (a.file() as i32 - b.file() as i32).unsigned_abs();
                let expected = rank_gap.max(file_gap) - 1;

                let segment = table.between(a, b);
                assert_eq!(segment.count_bits(), expected, "{a} {b}");
                assert!(!segment.contains(a) && !segment.contains(b));
            }
        }
    }

    #[test]
    fn test_rooks_on_one_rank() {
        let table = build();
        assert_eq!(
            table.between(Square::B3, Square::G3),
            Bitboard::from([Square::C3, Square::D3, Square::E3, Square::F3])
        );
        assert!(table.between(Square::B3, Square::C3).is_empty());
    }

    #[test]
    fn test_diagonals() {
        let table = build();
        assert_eq!(
            table.between(Square::A1, Square::D4),
            Bitboard::from([Square::B2, Square::C3])
        );
        assert_eq!(
            table.between(Square::H1, Square::E4),
            Bitboard::from([Square::G2, Square::F3])
        );
        assert!(table.between(Square::A1, Square::B3).is_empty());
    }
}
