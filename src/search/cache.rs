//! Bounded LRU transposition cache.
//!
//! Maps a position hash to the deepest known `(depth, SearchResult)` pair.
//! Capacity is fixed at construction; inserting beyond it evicts the least
//! recently used entry. Every access refreshes recency, including a lookup
//! that fails the minimum-depth rule.
//!
//! Entries carry no alpha-beta bound flags: a value stored under a narrowed
//! window is a bound, not always the exact minimax value, so cross-window
//! reuse at depth ≥ 3 can in principle differ from an exhaustive search.
//! Construct with capacity 0 to disable caching when exactness matters more
//! than speed.
//!
//! Layout: an `FxHashMap` from hash to slot index, slots in a `Vec` threaded
//! onto an intrusive doubly-linked recency list. All operations are O(1).

use rustc_hash::FxHashMap;

use super::engine::SearchResult;

/// Sentinel for "no slot" in the recency list.
const NIL: usize = usize::MAX;

/// Default cache capacity in entries.
pub const DEFAULT_CAPACITY: usize = 10_000;

struct Slot {
    hash: u64,
    depth: u32,
    result: SearchResult,
    prev: usize,
    next: usize,
}

/// Bounded LRU map from position hash to search result.
pub struct TranspositionCache {
    map: FxHashMap<u64, usize>,
    slots: Vec<Slot>,
    /// Most recently used slot.
    head: usize,
    /// Least recently used slot, evicted first.
    tail: usize,
    capacity: usize,
}

impl TranspositionCache {
    /// Create a cache holding at most `capacity` entries. Capacity 0 turns
    /// the cache into a no-op.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        Self {
            map: FxHashMap::default(),
            slots: Vec::with_capacity(capacity.min(DEFAULT_CAPACITY)),
            head: NIL,
            tail: NIL,
            capacity,
        }
    }

    /// Maximum number of entries.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Number of entries currently stored.
    #[must_use]
    pub fn len(&self) -> usize {
        self.map.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// Drop every entry, keeping the allocated capacity.
    pub fn clear(&mut self) {
        self.map.clear();
        self.slots.clear();
        self.head = NIL;
        self.tail = NIL;
    }

    /// Look up a result for `hash`, valid only if it was stored at
    /// `min_depth` or deeper. A shallower entry is a miss, but the access
    /// still refreshes its recency.
    pub fn get(&mut self, hash: u64, min_depth: u32) -> Option<SearchResult> {
        let idx = *self.map.get(&hash)?;
        self.touch(idx);
        let slot = &self.slots[idx];
        (slot.depth >= min_depth).then_some(slot.result)
    }

    /// Insert or update the entry for `hash`, evicting the least recently
    /// used entry when full.
    pub fn put(&mut self, hash: u64, depth: u32, result: SearchResult) {
        if self.capacity == 0 {
            return;
        }
        if let Some(&idx) = self.map.get(&hash) {
            self.slots[idx].depth = depth;
            self.slots[idx].result = result;
            self.touch(idx);
            return;
        }
        let idx = if self.map.len() >= self.capacity {
            // Recycle the least recently used slot.
            let idx = self.tail;
            self.detach(idx);
            let evicted = self.slots[idx].hash;
            self.map.remove(&evicted);
            self.slots[idx] = Slot {
                hash,
                depth,
                result,
                prev: NIL,
                next: NIL,
            };
            idx
        } else {
            self.slots.push(Slot {
                hash,
                depth,
                result,
                prev: NIL,
                next: NIL,
            });
            self.slots.len() - 1
        };
        self.map.insert(hash, idx);
        self.push_front(idx);
    }

    /// Move a linked slot to the front of the recency list.
    fn touch(&mut self, idx: usize) {
        if self.head == idx {
            return;
        }
        self.detach(idx);
        self.push_front(idx);
    }

    /// Unlink a slot from the recency list.
    fn detach(&mut self, idx: usize) {
        let (prev, next) = (self.slots[idx].prev, self.slots[idx].next);
        if prev != NIL {
            self.slots[prev].next = next;
        } else {
            self.head = next;
        }
        if next != NIL {
            self.slots[next].prev = prev;
        } else {
            self.tail = prev;
        }
        self.slots[idx].prev = NIL;
        self.slots[idx].next = NIL;
    }

    /// Link an unlinked slot at the front of the recency list.
    fn push_front(&mut self, idx: usize) {
        self.slots[idx].prev = NIL;
        self.slots[idx].next = self.head;
        if self.head != NIL {
            self.slots[self.head].prev = idx;
        }
        self.head = idx;
        if self.tail == NIL {
            self.tail = idx;
        }
    }
}
