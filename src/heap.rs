//! Binary min-heap of `(vertex, key)` entries.
//!
//! There is no decrease-key. Prim and Dijkstra push a fresh entry on every
//! relaxation and skip stale entries when they surface, so one vertex may
//! have several live entries and the heap can grow to O(E).
//!
//! Positions are 1-indexed (`parent(i) = i / 2`, children `2i` and `2i + 1`);
//! slot `i` is stored at `entries[i - 1]`.

/// A queued vertex with its priority. Immutable once pushed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeapEntry<K> {
    pub vertex: usize,
    pub key: K,
}

/// Min-heap ordered by `key`. Equal keys come out in heap-structural order,
/// not by vertex id.
#[derive(Debug, Clone)]
pub struct PriorityQueue<K> {
    entries: Vec<HeapEntry<K>>,
}

impl<K: Ord + Copy> Default for PriorityQueue<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Ord + Copy> PriorityQueue<K> {
    /// Empty queue.
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Empty queue with room for `capacity` entries before reallocating.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Vec::with_capacity(capacity),
        }
    }

    /// Number of entries, stale ones included.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True once every inserted entry has been extracted.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The entry `extract_min` would return next.
    pub fn peek(&self) -> Option<&HeapEntry<K>> {
        self.entries.first()
    }

    /// Append the entry and sift it up past every parent with a larger key.
    pub fn insert(&mut self, vertex: usize, key: K) {
        self.entries.push(HeapEntry { vertex, key });
        self.sift_up(self.entries.len());
    }

    /// Remove and return the entry with the smallest key.
    pub fn extract_min(&mut self) -> Option<HeapEntry<K>> {
        if self.entries.is_empty() {
            return None;
        }
        let min = self.entries.swap_remove(0);
        if !self.entries.is_empty() {
            self.sift_down(1);
        }
        Some(min)
    }

    fn key(&self, pos: usize) -> K {
        self.entries[pos - 1].key
    }

    fn swap(&mut self, a: usize, b: usize) {
        self.entries.swap(a - 1, b - 1);
    }

    fn sift_up(&mut self, mut pos: usize) {
        while pos > 1 {
            let parent = pos / 2;
            if self.key(pos) >= self.key(parent) {
                break;
            }
            self.swap(pos, parent);
            pos = parent;
        }
    }

    fn sift_down(&mut self, mut pos: usize) {
        let size = self.entries.len();
        loop {
            let left = 2 * pos;
            let right = left + 1;
            let mut smallest = pos;

            if left <= size && self.key(left) < self.key(smallest) {
                smallest = left;
            }
            if right <= size && self.key(right) < self.key(smallest) {
                smallest = right;
            }
            if smallest == pos {
                break;
            }
            self.swap(pos, smallest);
            pos = smallest;
        }
    }

    #[cfg(test)]
    fn is_valid_heap(&self) -> bool {
        (2..=self.entries.len()).all(|i| self.key(i) >= self.key(i / 2))
    }
}
