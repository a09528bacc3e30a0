use chess::utils::box_zeroed;

use super::tune::tunables;
use crate::constants::{MAX_DEPTH, MAX_MOVE_INDEX};

/******************************************\
|==========================================|
|              Search Tables               |
|==========================================|
\******************************************/

type ReductionTable = [[[i32; MAX_MOVE_INDEX]; MAX_DEPTH]; 2];

/// Reduction and pruning margins the search reads at every node. All entries are pure functions
/// of their indices, computed once at bootstrap and never written again.
///
/// The real valued curves are truncated toward zero when stored.
#[derive(PartialEq, Eq)]
pub struct SearchTables {
    /// `reductions[improving][depth][move_index]`
    reductions: Box<ReductionTable>,
    /// `lmp_margins[depth][improving]`
    lmp_margins: [[i32; 2]; MAX_DEPTH],
    /// `see_margins[depth][quiet]`
    see_margins: [[i32; 2]; MAX_DEPTH],
}

impl SearchTables {
    pub fn build() -> Self {
        // SAFETY: all-zero is a valid i32 table, and zero is the defined value at depth 0 or index 0
        let mut reductions: Box<ReductionTable> = unsafe { box_zeroed() };

        let curves = [
            (tunables::lmr_base(), tunables::lmr_div()),
            (tunables::lmr_improving_base(), tunables::lmr_improving_div()),
        ];

        for (table, (base, div)) in reductions.iter_mut().zip(curves) {
            let base = base as f64 / 1024.0;
            let div = div as f64 / 1024.0;

            for depth in 1..MAX_DEPTH {
                for move_index in 1..MAX_MOVE_INDEX {
                    let r = base + (depth as f64).ln() * (move_index as f64).ln() / div;
                    table[depth][move_index] = (r as i32).max(0);
                }
            }
        }

        let mut lmp_margins = [[0; 2]; MAX_DEPTH];
        let mut see_margins = [[0; 2]; MAX_DEPTH];

        for depth in 0..MAX_DEPTH {
            let d = depth as i32;

            lmp_margins[depth] = [
                (tunables::lmp_base() + tunables::lmp_mult() * d * d) / 1024,
                (tunables::lmp_improving_base() + tunables::lmp_improving_mult() * d * d) / 1024,
            ];

            see_margins[depth] = [
                tunables::see_noisy_margin() * d * d,
                tunables::see_quiet_margin() * d,
            ];
        }

        Self {
            reductions,
            lmp_margins,
            see_margins,
        }
    }

    /// Plies to reduce the `move_index`-th move searched at `depth`. Indices past the table bounds
    /// read the last row or column.
    #[inline]
    pub fn reduction(&self, improving: bool, depth: usize, move_index: usize) -> i32 {
        self.reductions[improving as usize][depth.min(MAX_DEPTH - 1)]
            [move_index.min(MAX_MOVE_INDEX - 1)]
    }

    /// Number of quiet moves to try at `depth` before the rest are skipped
    #[inline]
    pub fn lmp_margin(&self, depth: usize, improving: bool) -> i32 {
        self.lmp_margins[depth.min(MAX_DEPTH - 1)][improving as usize]
    }

    /// Static exchange threshold below which a move at `depth` is skipped
    #[inline]
    pub fn see_margin(&self, depth: usize, quiet: bool) -> i32 {
        self.see_margins[depth.min(MAX_DEPTH - 1)][quiet as usize]
    }
}

impl std::fmt::Debug for SearchTables {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SearchTables")
            .field("lmp_margins", &&self.lmp_margins[..8])
            .field("see_margins", &&self.see_margins[..8])
            .finish_non_exhaustive()
    }
}
