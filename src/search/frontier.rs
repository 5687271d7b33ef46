use fxhash::FxHashMap;
use std::cmp::Ordering;
use std::collections::BinaryHeap;
use std::hash::Hash;

struct FrontierEntry<T> {
    estimated_cost: u32,
    sequence: u64,
    item: T,
}

impl<T> Eq for FrontierEntry<T> {}

impl<T> PartialEq for FrontierEntry<T> {
    fn eq(&self, other: &Self) -> bool {
        self.estimated_cost == other.estimated_cost && self.sequence == other.sequence
    }
}

impl<T> PartialOrd for FrontierEntry<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T> Ord for FrontierEntry<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reversed for the max-heap: smallest estimated cost first, then the
        // earliest insertion. Sequence numbers are unique so the order is total.
        other
            .estimated_cost
            .cmp(&self.estimated_cost)
            .then_with(|| other.sequence.cmp(&self.sequence))
    }
}

/// The open set of an A* search, a min-priority queue on estimated total cost.
///
/// There is no decrease-key: a cheaper path to an item is recorded by pushing it again, and the
/// outdated entry is left in place for the caller to discard when it is popped. Because of this
/// an item may be present several times; [contains](Self::contains) reports whether at least one
/// entry is still queued.
pub struct Frontier<T> {
    heap: BinaryHeap<FrontierEntry<T>>,
    queued: FxHashMap<T, usize>,
    next_sequence: u64,
}

impl<T: Copy + Eq + Hash> Frontier<T> {
    pub fn new() -> Frontier<T> {
        Frontier {
            heap: BinaryHeap::new(),
            queued: FxHashMap::default(),
            next_sequence: 0,
        }
    }

    pub fn push(&mut self, item: T, estimated_cost: u32) {
        self.heap.push(FrontierEntry {
            estimated_cost,
            sequence: self.next_sequence,
            item,
        });
        self.next_sequence += 1;
        *self.queued.entry(item).or_insert(0) += 1;
    }

    /// Removes the entry with the smallest estimated cost, ties going to the entry pushed first.
    pub fn pop_min(&mut self) -> Option<(T, u32)> {
        let FrontierEntry {
            estimated_cost,
            item,
            ..
        } = self.heap.pop()?;
        if let Some(count) = self.queued.get_mut(&item) {
            *count -= 1;
            if *count == 0 {
                self.queued.remove(&item);
            }
        }
        Some((item, estimated_cost))
    }

    pub fn contains(&self, item: &T) -> bool {
        self.queued.contains_key(item)
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Number of queued entries, stale duplicates included.
    pub fn len(&self) -> usize {
        self.heap.len()
    }
}

impl<T: Copy + Eq + Hash> Default for Frontier<T> {
    fn default() -> Self {
        Frontier::new()
    }
}
