use std::time::Instant;

use chess::{AttackTables, BetweenTable, ZobristKeys};

use crate::search::SearchTables;

/// Runs `build` and logs how long it took
fn timed<T>(name: &str, build: impl FnOnce() -> T) -> T {
    let start = Instant::now();
    let built = build();
    log::debug!("{name} built in {:.2?}", start.elapsed());
    built
}

/// Lookup tables computed once at startup and only read afterwards. Search threads share them
/// through an `Arc`; nothing hands out a mutable reference after `build`.
#[derive(PartialEq, Eq)]
pub struct EngineTables {
    attacks: AttackTables,
    between: BetweenTable,
    zobrist: ZobristKeys,
    search: SearchTables,
}

impl EngineTables {
    /// Builds attack tables, the between table, Zobrist keys from `zobrist_seed`, then the search
    /// heuristic tables, in that order.
    pub fn build(zobrist_seed: u64) -> Self {
        let attacks = timed("attack tables", AttackTables::build);
        let between = timed("between table", || BetweenTable::build(&attacks));
        let zobrist = timed("zobrist keys", || ZobristKeys::new(zobrist_seed));
        let search = timed("search tables", SearchTables::build);

        Self {
            attacks,
            between,
            zobrist,
            search,
        }
    }

    #[inline]
    pub fn attacks(&self) -> &AttackTables {
        &self.attacks
    }

    #[inline]
    pub fn between(&self) -> &BetweenTable {
        &self.between
    }

    #[inline]
    pub fn zobrist(&self) -> &ZobristKeys {
        &self.zobrist
    }

    #[inline]
    pub fn search(&self) -> &SearchTables {
        &self.search
    }
}

impl std::fmt::Debug for EngineTables {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EngineTables")
            .field("search", &self.search)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chess::{Bitboard, Square};

    #[test]
    fn test_build_is_reproducible() {
        let a = EngineTables::build(7);
        let b = EngineTables::build(7);

        assert!(a == b);
        assert!(a != EngineTables::build(8));
    }

    #[test]
    fn test_tables_agree() {
        let tables = EngineTables::build(1);
        let occ = Square::B3.bb() | Square::G3.bb();

        let rook = tables.attacks().rook_attacks(Square::B3, occ);
        assert!(rook.contains(Square::G3));
        assert_eq!(
            tables.between().between(Square::B3, Square::G3),
            rook & tables.attacks().rook_attacks(Square::G3, occ)
        );
        assert_eq!(tables.between().between(Square::B3, Square::B3), Bitboard::EMPTY);
    }
}
