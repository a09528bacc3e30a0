use chess::{Board, Colour, Move, Piece, PieceType, Square};

use crate::constants::MAX_MAIN_HISTORY;

/******************************************\
|==========================================|
|              History Entry               |
|==========================================|
\******************************************/

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub struct HistoryEntry<const MAX: i16> {
    entry: i16,
}

impl<const MAX: i16> HistoryEntry<MAX> {
    pub fn get(&self) -> i16 {
        self.entry
    }

    /// # Updates history
    ///
    /// ### History gravity formula
    /// - https://www.chessprogramming.org/History_Heuristic
    ///
    /// - Large bonuses on an already large entry move it less, so values stay within `-MAX..=MAX`
    pub fn update(&mut self, bonus: i16) {
        let bonus = bonus.clamp(-MAX, MAX) as i32;
        let product = self.entry as i32 * bonus.abs() / MAX as i32;
        self.entry = (self.entry as i32 + bonus - product) as i16;
    }
}

/******************************************\
|==========================================|
|              History Trait               |
|==========================================|
\******************************************/

pub trait History<const MAX: i16> {
    fn get_entry_ref(&self, board: &Board, move_: Move) -> &HistoryEntry<MAX>;

    fn probe_mut(&mut self, board: &Board, move_: Move) -> &mut HistoryEntry<MAX>;

    fn get(&self, board: &Board, move_: Move) -> i16 {
        self.get_entry_ref(board, move_).get()
    }

    fn update(&mut self, board: &Board, move_: Move, bonus: i16) {
        self.probe_mut(board, move_).update(bonus);
    }

    /// Back to all zero
    fn clear(&mut self)
    where
        Self: Sized + Default,
    {
        *self = Self::default();
    }
}

/******************************************\
|==========================================|
|               History Macro              |
|==========================================|
\******************************************/

macro_rules! define_history {
    ($name:ident, $max:ident, [$($dims:expr),+], [$($idx:ident),+]) => {
        #[derive(Debug, Clone, PartialEq, Eq)]
        pub struct $name {
            history: define_nd_array!(@array $max, [$($dims),+]),
        }

        impl Default for $name {
            fn default() -> Self {
                Self {
                    history: define_nd_array!(@default $max, [$($dims),+]),
                }
            }
        }

        impl History<$max> for $name {
            fn get_entry_ref(&self, board: &Board, move_: Move) -> &HistoryEntry<$max> {
                let ($($idx),+) = Self::get_indices(board, move_);
                &self.history$([$idx])+
            }

            fn probe_mut(&mut self, board: &Board, move_: Move) -> &mut HistoryEntry<$max> {
                let ($($idx),+) = Self::get_indices(board, move_);
                &mut self.history$([$idx])+
            }
        }

        impl $name {
            /// Whether every entry is zero
            pub fn is_clear(&self) -> bool {
                *self == Self::default()
            }
        }
    };
}

macro_rules! define_nd_array {
    (@array $max:ident, [$dim:expr]) => {
        [HistoryEntry<$max>; $dim]
    };
    (@array $max:ident, [$dim:expr, $($rest:expr),+]) => {
        [define_nd_array!(@array $max, [$($rest),+]); $dim]
    };

    (@default $max:ident, [$dim:expr]) => {
        [HistoryEntry::<$max>::default(); $dim]
    };
    (@default $max:ident, [$dim:expr, $($rest:expr),+]) => {
        [define_nd_array!(@default $max, [$($rest),+]); $dim]
    };
}

/******************************************\
|==========================================|
|               Main History               |
|==========================================|
\******************************************/

define_history!(
    MainHistory,
    MAX_MAIN_HISTORY,
    [Colour::NUM, Square::NUM, Square::NUM],
    [colour, from, to]
);

impl MainHistory {
    #[inline(always)]
    fn get_indices(board: &Board, move_: Move) -> (usize, usize, usize) {
        (board.stm().index(), move_.from().index(), move_.to().index())
    }
}

/******************************************\
|==========================================|
|              Capture History             |
|==========================================|
\******************************************/

define_history!(
    CaptureHistory,
    MAX_MAIN_HISTORY,
    [Piece::NUM, Square::NUM, PieceType::NUM],
    [moved_piece, to, captured]
);

impl CaptureHistory {
    /// En passant leaves the target square empty, so a missing victim counts as a pawn
    #[inline(always)]
    fn get_indices(board: &Board, move_: Move) -> (usize, usize, usize) {
        let moved_piece = board.on(move_.from()).map_or(0, |piece| piece.index());
        let captured = board.on(move_.to()).map_or(PieceType::Pawn, Piece::pt);

        (moved_piece, move_.to().index(), captured.index())
    }
}

/******************************************\
|==========================================|
|               Counter Moves              |
|==========================================|
\******************************************/

/// Refutation of the previous move, indexed by its from and to squares
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CounterMoves {
    table: [[Move; Square::NUM]; Square::NUM],
}

impl Default for CounterMoves {
    fn default() -> Self {
        Self {
            table: [[Move::NONE; Square::NUM]; Square::NUM],
        }
    }
}

impl CounterMoves {
    pub fn get(&self, prev: Move) -> Move {
        self.table[prev.from().index()][prev.to().index()]
    }

    pub fn update(&mut self, prev: Move, counter: Move) {
        self.table[prev.from().index()][prev.to().index()] = counter;
    }

    pub fn clear(&mut self) {
        self.table.iter_mut().for_each(|row| row.fill(Move::NONE));
    }

    pub fn is_clear(&self) -> bool {
        self.table.iter().flatten().all(|m| m.is_none())
    }
}

/******************************************\
|==========================================|
|               Search Stats               |
|==========================================|
\******************************************/

/// Move ordering statistics one search thread accumulates over a game
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchStats {
    pub main_history: MainHistory,
    pub capture_history: CaptureHistory,
    pub counter_moves: CounterMoves,
}

impl SearchStats {
    pub fn new() -> Box<Self> {
        Box::default()
    }

    pub fn clear(&mut self) {
        self.main_history.clear();
        self.capture_history.clear();
        self.counter_moves.clear();
    }

    pub fn is_clear(&self) -> bool {
        self.main_history.is_clear()
            && self.capture_history.is_clear()
            && self.counter_moves.is_clear()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chess::{MoveFlag, ZobristKeys};

    const MAX: i16 = MAX_MAIN_HISTORY;

    #[test]
    fn test_gravity_stays_in_bounds() {
        let mut entry = HistoryEntry::<MAX>::default();

        for _ in 0..1000 {
            entry.update(i16::MAX);
            assert!(entry.get() <= MAX);
        }
        assert!(entry.get() > MAX - 64);

        for _ in 0..1000 {
            entry.update(i16::MIN);
            assert!(entry.get() >= -MAX);
        }
        assert!(entry.get() < -MAX + 64);
    }

    #[test]
    fn test_gravity_damps_repeated_bonus() {
        let mut entry = HistoryEntry::<MAX>::default();

        entry.update(1000);
        assert_eq!(entry.get(), 1000);

        entry.update(1000);
        // 1000 + 1000 - 1000 * 1000 / 16384
        assert_eq!(entry.get(), 1939);
    }

    #[test]
    fn test_main_history_update_and_clear() {
        let board = Board::startpos(&ZobristKeys::default());
        let e4 = Move::new(Square::E2, Square::E4, MoveFlag::DoublePawnPush);
        let d4 = Move::new(Square::D2, Square::D4, MoveFlag::DoublePawnPush);

        let mut history = MainHistory::default();
        history.update(&board, e4, 500);

        assert_eq!(history.get(&board, e4), 500);
        assert_eq!(history.get(&board, d4), 0);
        assert!(!history.is_clear());

        history.clear();
        assert!(history.is_clear());
    }

    #[test]
    fn test_capture_history_indices() {
        let board = Board::startpos(&ZobristKeys::default());
        let capture = Move::new(Square::D1, Square::D7, MoveFlag::Capture);

        let mut history = CaptureHistory::default();
        history.update(&board, capture, 300);

        let expected = &history.history[Piece::WhiteQueen.index()][Square::D7.index()]
            [PieceType::Pawn.index()];
        assert_eq!(expected.get(), 300);
    }

    #[test]
    fn test_counter_moves() {
        let prev = Move::new(Square::E7, Square::E5, MoveFlag::DoublePawnPush);
        let reply = Move::new(Square::G1, Square::F3, MoveFlag::Quiet);

        let mut counters = CounterMoves::default();
        assert!(counters.get(prev).is_none());

        counters.update(prev, reply);
        assert_eq!(counters.get(prev), reply);

        counters.clear();
        assert!(counters.is_clear());
    }

    #[test]
    fn test_stats_clear() {
        let board = Board::startpos(&ZobristKeys::default());
        let nf3 = Move::new(Square::G1, Square::F3, MoveFlag::Quiet);

        let mut stats = SearchStats::new();
        stats.main_history.update(&board, nf3, 100);
        stats.counter_moves.update(nf3, nf3);
        assert!(!stats.is_clear());

        stats.clear();
        assert!(stats.is_clear());
        assert_eq!(*stats, SearchStats::default());
    }
}
