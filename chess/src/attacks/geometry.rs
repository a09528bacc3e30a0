//! Geometry primitives the table builders consume: relevant occupancy masks, the
//! index-to-occupancy mapping, and leaper pseudo attacks.

use crate::core::*;

/// Board edge squares that never influence a slider on `sq`. Edges on the slider's own rank or
/// file are kept out of the mask so a rook on the A file still sees blockers along it.
pub const fn edge_mask(sq: Square) -> Bitboard {
    let ranks = (Bitboard::RANK_1.0 | Bitboard::RANK_8.0) & !sq.rank().bb().0;
    let files = (Bitboard::FILE_A.0 | Bitboard::FILE_H.0) & !sq.file().bb().0;

    Bitboard(ranks | files)
}

/// Squares whose occupancy can change the attacks of a bishop or rook on `sq`: its empty board
/// rays without the terminal edge squares.
pub const fn relevant_mask(pt: PieceType, sq: Square) -> Bitboard {
    let rays = Bitboard::attack_on_the_fly(pt, sq, Bitboard::EMPTY);
    Bitboard(rays.0 & !edge_mask(sq).0)
}

/// Maps `index` in `0..1 << bits` onto a subset of `mask`: bit `i` of `index` decides whether the
/// `i`-th lowest square of `mask` is occupied.
pub const fn set_occupancy(index: usize, bits: u32, mask: Bitboard) -> Bitboard {
    let mut occupancy = 0;
    let mut remaining = mask;

    let mut i = 0;
    while i < bits {
        let Some(sq) = remaining.pop_lsb() else {
            break;
        };

        if index & (1 << i) != 0 {
            occupancy |= sq.bb().0;
        }

        i += 1;
    }

    Bitboard(occupancy)
}

/// Union of single steps from `sq` in each of `dirs`
const fn step_attacks(sq: Square, dirs: &[Direction]) -> Bitboard {
    let from = sq.bb();
    let mut attacks = 0;

    let mut i = 0;
    while i < dirs.len() {
        attacks |= from.shift(dirs[i]).0;
        i += 1;
    }

    Bitboard(attacks)
}

pub const fn pawn_attack_mask(colour: Colour, sq: Square) -> Bitboard {
    match colour {
        Colour::White => step_attacks(sq, &[Direction::NE, Direction::NW]),
        Colour::Black => step_attacks(sq, &[Direction::SE, Direction::SW]),
    }
}

pub const fn knight_attack_mask(sq: Square) -> Bitboard {
    step_attacks(sq, &Direction::KNIGHT)
}

pub const fn king_attack_mask(sq: Square) -> Bitboard {
    step_attacks(sq, &Direction::KING)
}
