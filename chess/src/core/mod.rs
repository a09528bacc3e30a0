mod macros;

pub mod bitboard;
pub mod moves;
pub mod piece;
pub mod square;
pub mod types;

pub use bitboard::Bitboard;
pub use moves::{Move, MoveFlag};
pub use piece::{Piece, PieceType};
pub use square::{File, ParseSquareError, Rank, Square};
pub use types::{Castling, Colour, Direction};
