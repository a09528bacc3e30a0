use std::collections::HashSet;

use crate::{core::*, utils::PRNG};

/******************************************\
|==========================================|
|              Key Definition              |
|==========================================|
\******************************************/

/// A Zobrist fingerprint or one of its component keys
pub type Key = u64;

/******************************************\
|==========================================|
|               Zobrist Keys               |
|==========================================|
\******************************************/

/// Random keys XOR-ed together to fingerprint a position.
///
/// The keys come from a seeded generator, so the same seed produces the same key space (and the
/// same fingerprints and TT slots) on every run. Every issued key is non-zero and distinct from
/// every other key in the set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ZobristKeys {
    /// `pieces[piece][square]`
    pieces: [[Key; Square::NUM]; Piece::NUM],
    /// Indexed by en passant target square
    enpassant: [Key; Square::NUM],
    /// Indexed by the castling rights bitmask
    castling: [Key; Castling::NUM],
    /// Toggled when black is to move
    side: Key,
}

impl ZobristKeys {
    /// Total number of keys in the set
    pub const COUNT: usize = Piece::NUM * Square::NUM + Square::NUM + Castling::NUM + 1;

    pub fn new(seed: u64) -> Self {
        let mut rng = PRNG::new(seed);
        let mut issued = HashSet::with_capacity(Self::COUNT);

        // Redraw on zero or on a repeat, so distinctness holds for every seed
        let mut next_key = || loop {
            let key = rng.random_u64();
            if key != 0 && issued.insert(key) {
                break key;
            }
        };

        let mut pieces = [[0; Square::NUM]; Piece::NUM];
        for row in pieces.iter_mut() {
            row.iter_mut().for_each(|key| *key = next_key());
        }

        let enpassant = std::array::from_fn(|_| next_key());
        let castling = std::array::from_fn(|_| next_key());
        let side = next_key();

        Self {
            pieces,
            enpassant,
            castling,
            side,
        }
    }

    #[inline]
    pub fn piece(&self, piece: Piece, sq: Square) -> Key {
        self.pieces[piece.index()][sq.index()]
    }

    #[inline]
    pub fn enpassant(&self, sq: Square) -> Key {
        self.enpassant[sq.index()]
    }

    #[inline]
    pub fn castling(&self, rights: Castling) -> Key {
        self.castling[rights.index()]
    }

    #[inline]
    pub fn side(&self) -> Key {
        self.side
    }

    /// Every key in the set, in table order
    pub fn iter(&self) -> impl Iterator<Item = Key> + '_ {
        self.pieces
            .iter()
            .flatten()
            .chain(self.enpassant.iter())
            .chain(self.castling.iter())
            .chain(std::iter::once(&self.side))
            .copied()
    }
}

impl Default for ZobristKeys {
    fn default() -> Self {
        Self::new(PRNG::DEFAULT_SEED)
    }
}
