mod zobrist;

pub use zobrist::{Key, ZobristKeys};

use crate::core::*;

/******************************************\
|==========================================|
|                Constants                 |
|==========================================|
\******************************************/

pub const MAX_MOVES: usize = 256;

pub const START_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

#[rustfmt::skip]
const BACK_RANK: [PieceType; File::NUM] = [
    PieceType::Rook, PieceType::Knight, PieceType::Bishop, PieceType::Queen,
    PieceType::King, PieceType::Bishop, PieceType::Knight, PieceType::Rook,
];

/******************************************\
|==========================================|
|                  Board                   |
|==========================================|
\******************************************/

/// Piece placement, side to move, castling rights and en passant square, plus the fingerprints of
/// every position played so far in the game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    board: [Option<Piece>; Square::NUM],
    occupied: [Bitboard; Colour::NUM],
    stm: Colour,
    castle: Castling,
    enpassant: Option<Square>,
    key: Key,
    played_positions: Vec<Key>,
}

impl Board {
    /// The standard initial position, fingerprinted with `keys`
    pub fn startpos(keys: &ZobristKeys) -> Self {
        let mut board = Self {
            board: [None; Square::NUM],
            occupied: [Bitboard::EMPTY; Colour::NUM],
            stm: Colour::White,
            castle: Castling::ALL,
            enpassant: None,
            key: 0,
            played_positions: Vec::with_capacity(MAX_MOVES),
        };

        board.place_start_pieces();
        board.key = board.compute_key(keys);
        board
    }

    /// Puts the board back to the initial position and forgets the game history. The history
    /// buffer keeps its capacity.
    pub fn reset_to_startpos(&mut self, keys: &ZobristKeys) {
        self.board = [None; Square::NUM];
        self.occupied = [Bitboard::EMPTY; Colour::NUM];
        self.stm = Colour::White;
        self.castle = Castling::ALL;
        self.enpassant = None;
        self.played_positions.clear();

        self.place_start_pieces();
        self.key = self.compute_key(keys);
    }

    fn place_start_pieces(&mut self) {
        for file in File::iter() {
            let pt = BACK_RANK[file.index()];

            self.put(Piece::from_parts(Colour::White, pt), Square::from_parts(file, Rank::Rank1));
            self.put(Piece::from_parts(Colour::Black, pt), Square::from_parts(file, Rank::Rank8));
            self.put(Piece::WhitePawn, Square::from_parts(file, Rank::Rank2));
            self.put(Piece::BlackPawn, Square::from_parts(file, Rank::Rank7));
        }
    }

    fn put(&mut self, piece: Piece, sq: Square) {
        self.board[sq.index()] = Some(piece);
        self.occupied[piece.colour().index()].set(sq);
    }

    /// Full fingerprint of the current position from scratch
    pub fn compute_key(&self, keys: &ZobristKeys) -> Key {
        let mut key = Square::iter()
            .filter_map(|sq| self.on(sq).map(|piece| keys.piece(piece, sq)))
            .fold(0, |acc, k| acc ^ k);

        if self.stm == Colour::Black {
            key ^= keys.side();
        }

        key ^= keys.castling(self.castle);

        if let Some(sq) = self.enpassant {
            key ^= keys.enpassant(sq);
        }

        key
    }

    #[inline]
    pub fn on(&self, sq: Square) -> Option<Piece> {
        self.board[sq.index()]
    }

    #[inline]
    pub fn occupied_bb(&self, colour: Colour) -> Bitboard {
        self.occupied[colour.index()]
    }

    #[inline]
    pub fn all_occupied_bb(&self) -> Bitboard {
        self.occupied_bb(Colour::White) | self.occupied_bb(Colour::Black)
    }

    #[inline]
    pub fn stm(&self) -> Colour {
        self.stm
    }

    #[inline]
    pub fn castling(&self) -> Castling {
        self.castle
    }

    #[inline]
    pub fn ep(&self) -> Option<Square> {
        self.enpassant
    }

    #[inline]
    pub fn key(&self) -> Key {
        self.key
    }

    /// Fingerprints of earlier positions in the game, oldest first
    #[inline]
    pub fn played_positions(&self) -> &[Key] {
        &self.played_positions
    }

    /// Records `key` as a position reached in the game
    pub fn push_played(&mut self, key: Key) {
        self.played_positions.push(key);
    }

    /// Number of earlier positions with the same fingerprint as the current one
    pub fn repetitions(&self) -> usize {
        self.played_positions.iter().filter(|&&k| k == self.key).count()
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for rank in Rank::iter().rev() {
            write!(f, "{rank} ")?;
            for file in File::iter() {
                match self.on(Square::from_parts(file, rank)) {
                    Some(piece) => write!(f, " {piece}")?,
                    None => write!(f, " .")?,
                }
            }
            writeln!(f)?;
        }
        writeln!(f, "   a b c d e f g h")?;
        writeln!(f, "Side: {:?}  Castling: {}", self.stm, self.castle)?;
        write!(f, "Key: {:#018X}", self.key)
    }
}
