use chess::Move;

use crate::constants::MAX_DEPTH;

const PLIES: usize = MAX_DEPTH + 1;

/// Principal variation table: `moves[ply]` holds the best line found from `ply`, of which the
/// first `lengths[ply]` moves are valid.
#[derive(Clone, PartialEq, Eq)]
pub struct PvTable {
    lengths: [usize; PLIES],
    moves: Box<[[Move; PLIES]; PLIES]>,
}

impl Default for PvTable {
    fn default() -> Self {
        Self {
            lengths: [0; PLIES],
            moves: Box::new([[Move::NONE; PLIES]; PLIES]),
        }
    }
}

impl PvTable {
    /// Valid part of the line found from `ply`
    pub fn line(&self, ply: usize) -> &[Move] {
        &self.moves[ply][..self.lengths[ply]]
    }

    /// Best move at the root, `Move::NONE` if no line is stored
    pub fn best_move(&self) -> Move {
        self.moves[0][0]
    }

    /// Makes `move_` followed by the line from `ply + 1` the line from `ply`
    pub fn update(&mut self, ply: usize, move_: Move) {
        if ply >= MAX_DEPTH {
            return;
        }

        let child_len = self.lengths[ply + 1].min(PLIES - 1);
        let (head, tail) = self.moves.split_at_mut(ply + 1);

        head[ply][0] = move_;
        head[ply][1..=child_len].copy_from_slice(&tail[0][..child_len]);

        self.lengths[ply] = child_len + 1;
    }

    /// Marks the line from `ply` as empty before its node is searched
    #[inline]
    pub fn clear_ply(&mut self, ply: usize) {
        self.lengths[ply] = 0;
    }

    /// Sets every length to zero and every move to `Move::NONE`
    pub fn clear(&mut self) {
        self.lengths.fill(0);
        self.moves.iter_mut().for_each(|row| row.fill(Move::NONE));
    }

    pub fn lengths(&self) -> &[usize] {
        &self.lengths
    }

    pub fn moves(&self) -> impl Iterator<Item = &Move> {
        self.moves.iter().flatten()
    }
}

impl std::fmt::Display for PvTable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "pv")?;
        for m in self.line(0) {
            write!(f, " {m}")?;
        }
        Ok(())
    }
}

impl std::fmt::Debug for PvTable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "PvTable({self})")
    }
}
