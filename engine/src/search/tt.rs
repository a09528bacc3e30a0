use std::sync::atomic::{AtomicU64, Ordering};

use chess::{Key, Move};

#[repr(u8)]
#[derive(Copy, Clone, PartialEq, Eq, Debug, Default)]
pub enum TTBound {
    #[default]
    None,
    Upper, // Fail low nodes
    Lower, // Fail high nodes
    Exact, // PV nodes
}

#[derive(Copy, Clone, PartialEq, Eq, Debug, Default)]
pub struct TTEntry {
    pub key: Key,
    pub depth: u8,
    pub bound: TTBound,
    pub best_move: Move,
    pub value: i16,
}

impl TTEntry {
    const DEPTH_MASK: u64 = 0xFF;
    const BOUND_MASK: u64 = 0x3 << 8;
    const MOVE_MASK: u64 = 0xFFFF << 16;
    const VALUE_MASK: u64 = 0xFFFF << 32;

    fn pack(&self) -> u64 {
        self.depth as u64
            | (self.bound as u64) << 8
            | (self.best_move.raw() as u64) << 16
            | (self.value as u16 as u64) << 32
    }

    fn unpack(key: Key, data: u64) -> Self {
        let bound = match (data & Self::BOUND_MASK) >> 8 {
            1 => TTBound::Upper,
            2 => TTBound::Lower,
            3 => TTBound::Exact,
            _ => TTBound::None,
        };

        Self {
            key,
            depth: (data & Self::DEPTH_MASK) as u8,
            bound,
            best_move: Move::from_raw(((data & Self::MOVE_MASK) >> 16) as u16),
            value: ((data & Self::VALUE_MASK) >> 32) as u16 as i16,
        }
    }
}

/// Packed TT slot
///
/// ## Packing Scheme
///
/// | Field     | Bits | Offset |
/// | --------- | ---- | ------ |
/// | depth     | 8    | 0      |
/// | bound     | 2    | 8      |
/// | best_move | 16   | 16     |
/// | value     | 16   | 32     |
///
/// The stored key is `key ^ data`. A torn write from two threads leaves a pair whose XOR does not
/// match the probing key, so the slot reads as a miss instead of returning mixed data.
#[derive(Debug, Default)]
struct PackedTTEntry {
    key: AtomicU64,
    data: AtomicU64,
}

impl PackedTTEntry {
    fn read(&self, pos_key: Key) -> Option<TTEntry> {
        let key = self.key.load(Ordering::Relaxed);
        let data = self.data.load(Ordering::Relaxed);

        (key ^ data == pos_key && data != 0).then(|| TTEntry::unpack(pos_key, data))
    }

    fn write(&self, entry: TTEntry) {
        let data = entry.pack();
        self.key.store(entry.key ^ data, Ordering::Relaxed);
        self.data.store(data, Ordering::Relaxed);
    }

    #[inline]
    fn clear(&self) {
        self.key.store(0, Ordering::Relaxed);
        self.data.store(0, Ordering::Relaxed);
    }

    fn is_empty(&self) -> bool {
        self.data.load(Ordering::Relaxed) == 0
    }
}

/// Transposition table shared by every search thread. Probes and stores only need `&self`;
/// resizing needs exclusive access.
#[derive(Debug, Default)]
pub struct TT {
    table: Vec<PackedTTEntry>,
}

impl TT {
    fn entries_for(mb: usize) -> usize {
        (mb << 20) / size_of::<PackedTTEntry>()
    }

    /// Reallocates the table to `mb` MiB. Every entry is empty afterwards.
    pub fn resize(&mut self, mb: usize) {
        let entries = Self::entries_for(mb);

        self.table = Vec::new();
        self.table.resize_with(entries, PackedTTEntry::default);

        log::debug!("tt resized to {mb} MiB ({entries} entries)");
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.table.len()
    }

    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }

    /// Size of the allocation in MiB
    pub fn size_mb(&self) -> usize {
        self.table.len() * size_of::<PackedTTEntry>() >> 20
    }

    fn index(&self, pos_key: Key) -> usize {
        let key = pos_key as u128;
        let len = self.table.len() as u128;
        ((key * len) >> 64) as usize
    }

    pub fn probe(&self, pos_key: Key) -> Option<TTEntry> {
        self.table.get(self.index(pos_key))?.read(pos_key)
    }

    /// Always replaces, unless the slot already holds a deeper result for the same position
    pub fn store(&self, key: Key, depth: u8, bound: TTBound, best_move: Move, value: i16) {
        let Some(slot) = self.table.get(self.index(key)) else {
            return;
        };

        let old = slot.read(key);
        if old.is_some_and(|old| old.depth > depth && bound != TTBound::Exact) {
            return;
        }

        let best_move = match old {
            Some(old) if best_move.is_none() => old.best_move,
            _ => best_move,
        };

        slot.write(TTEntry {
            key,
            depth,
            bound,
            best_move,
            value,
        });
    }

    /// Occupied entries per mille over the first thousand slots
    pub fn hashfull(&self) -> usize {
        self.table.iter().take(1000).filter(|e| !e.is_empty()).count()
    }

    /// Empties every entry, splitting the work across `threads` scoped threads. Capacity is kept.
    pub fn clear(&self, threads: usize) {
        let entries = self.table.len();
        if entries == 0 {
            return;
        }

        let chunk_size = entries.div_ceil(threads.max(1));

        std::thread::scope(|s| {
            for chunk in self.table.chunks(chunk_size) {
                s.spawn(move || chunk.iter().for_each(PackedTTEntry::clear));
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chess::{MoveFlag, Square};

    fn test_move() -> Move {
        Move::new(Square::E2, Square::E4, MoveFlag::DoublePawnPush)
    }

    #[test]
    fn test_pack_unpack() {
        let entry = TTEntry {
            key: 0x1234_5678_9ABC_DEF0,
            depth: 17,
            bound: TTBound::Lower,
            best_move: test_move(),
            value: -1234,
        };

        assert_eq!(TTEntry::unpack(entry.key, entry.pack()), entry);
    }

    #[test]
    fn test_resize_entry_count() {
        let mut tt = TT::default();
        assert!(tt.is_empty());

        tt.resize(1);
        assert_eq!(tt.len(), (1 << 20) / 16);
        assert_eq!(tt.size_mb(), 1);

        tt.resize(4);
        assert_eq!(tt.len(), (4 << 20) / 16);
    }

    #[test]
    fn test_store_and_probe() {
        let mut tt = TT::default();
        tt.resize(1);

        let key = 0xDEAD_BEEF_CAFE_F00D;
        assert_eq!(tt.probe(key), None);

        tt.store(key, 5, TTBound::Exact, test_move(), 42);
        let entry = tt.probe(key).unwrap();

        assert_eq!(entry.depth, 5);
        assert_eq!(entry.bound, TTBound::Exact);
        assert_eq!(entry.best_move, test_move());
        assert_eq!(entry.value, 42);

        assert_eq!(tt.probe(key ^ 1), None);
    }

    #[test]
    fn test_shallower_store_keeps_deeper_entry() {
        let mut tt = TT::default();
        tt.resize(1);

        let key = 0x0123_4567_89AB_CDEF;
        tt.store(key, 10, TTBound::Lower, test_move(), 100);
        tt.store(key, 3, TTBound::Upper, Move::NONE, -5);

        assert_eq!(tt.probe(key).unwrap().depth, 10);

        tt.store(key, 12, TTBound::Upper, Move::NONE, -5);
        let entry = tt.probe(key).unwrap();
        assert_eq!(entry.depth, 12);
        assert_eq!(entry.best_move, test_move());
    }

    #[test]
    fn test_clear_keeps_capacity() {
        let mut tt = TT::default();
        tt.resize(2);
        let len = tt.len();

        let keys: Vec<Key> = (1..=64u64).map(|i| i.wrapping_mul(0x9E37_79B9_7F4A_7C15)).collect();
        for &key in &keys {
            tt.store(key, 1, TTBound::Exact, test_move(), 1);
        }
        assert!(keys.iter().any(|&k| tt.probe(k).is_some()));

        tt.clear(3);
        assert_eq!(tt.len(), len);
        assert!(keys.iter().all(|&k| tt.probe(k).is_none()));
        assert_eq!(tt.hashfull(), 0);
    }

    #[test]
    fn test_empty_table_is_inert() {
        let tt = TT::default();

        tt.store(1, 1, TTBound::Exact, test_move(), 1);
        assert_eq!(tt.probe(1), None);
        tt.clear(4);
    }
}
