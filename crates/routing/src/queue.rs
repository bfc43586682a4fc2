//! Binary-heap priority queue over vertex indices, keyed by a tentative
//! arrival instant that may be unset. Unset sorts as +infinity. Maintains a
//! vertex-index -> heap-slot side table so `decrease_key` is `O(log n)`
//! instead of a linear scan, the same idiom as `container/heap`'s index
//! tracking.

use chrono::{DateTime, TimeZone};

#[derive(Clone)]
struct Key<Tz: TimeZone>(Option<DateTime<Tz>>);

impl<Tz: TimeZone> Key<Tz> {
    fn less(&self, other: &Self) -> bool {
        match (&self.0, &other.0) {
            (_, None) => self.0.is_some(),
            (None, Some(_)) => false,
            (Some(a), Some(b)) => a < b,
        }
    }
}

struct Entry<Tz: TimeZone> {
    vertex: usize,
    key: Key<Tz>,
}

/// A min-priority queue over `0..n` vertex indices.
pub struct VertexQueue<Tz: TimeZone> {
    heap: Vec<Entry<Tz>>,
    position: Vec<Option<usize>>,
}

impl<Tz: TimeZone> VertexQueue<Tz> {
    /// An empty queue sized to hold `vertex_count` distinct vertex indices.
    pub fn with_capacity(vertex_count: usize) -> Self {
        Self {
            heap: Vec::with_capacity(vertex_count),
            position: vec![None; vertex_count],
        }
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Inserts `vertex` with its current key. `vertex` must not already be
    /// in the queue.
    pub fn push(&mut self, vertex: usize, key: Option<DateTime<Tz>>) {
        let slot = self.heap.len();
        self.heap.push(Entry {
            vertex,
            key: Key(key),
        });
        self.position[vertex] = Some(slot);
        self.sift_up(slot);
    }

    /// Removes and returns the vertex with the smallest key.
    pub fn pop(&mut self) -> Option<usize> {
        if self.heap.is_empty() {
            return None;
        }
        let last = self.heap.len() - 1;
        self.swap(0, last);
        let entry = self.heap.pop().expect("heap just checked non-empty");
        self.position[entry.vertex] = None;
        if !self.heap.is_empty() {
            self.sift_down(0);
        }
        Some(entry.vertex)
    }

    /// Restores heap order after `vertex`'s key has decreased to `new_key`.
    /// `vertex` must currently be in the queue.
    pub fn decrease_key(&mut self, vertex: usize, new_key: Option<DateTime<Tz>>) {
        let slot = self.position[vertex].expect("decrease_key on a vertex not in the queue");
        self.heap[slot].key = Key(new_key);
        self.sift_up(slot);
    }

    fn swap(&mut self, i: usize, j: usize) {
        self.heap.swap(i, j);
        self.position[self.heap[i].vertex] = Some(i);
        self.position[self.heap[j].vertex] = Some(j);
    }

    fn sift_up(&mut self, mut slot: usize) {
        while slot > 0 {
            let parent = (slot - 1) / 2;
            if self.heap[slot].key.less(&self.heap[parent].key) {
                self.swap(slot, parent);
                slot = parent;
            } else {
                break;
            }
        }
    }

    fn sift_down(&mut self, mut slot: usize) {
        loop {
            let left = 2 * slot + 1;
            let right = 2 * slot + 2;
            let mut smallest = slot;
            if left < self.heap.len() && self.heap[left].key.less(&self.heap[smallest].key) {
                smallest = left;
            }
            if right < self.heap.len() && self.heap[right].key.less(&self.heap[smallest].key) {
                smallest = right;
            }
            if smallest == slot {
                break;
            }
            self.swap(slot, smallest);
            slot = smallest;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn instant(minute: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2020, 10, 15, 0, minute, 0).unwrap()
    }

    #[test]
    fn pops_in_ascending_key_order() {
        let mut queue = VertexQueue::with_capacity(3);
        queue.push(0, Some(instant(10)));
        queue.push(1, Some(instant(5)));
        queue.push(2, Some(instant(7)));

        assert_eq!(queue.pop(), Some(1));
        assert_eq!(queue.pop(), Some(2));
        assert_eq!(queue.pop(), Some(0));
        assert_eq!(queue.pop(), None);
    }

    #[test]
    fn unset_key_sorts_as_infinity() {
        let mut queue = VertexQueue::with_capacity(2);
        queue.push(0, None);
        queue.push(1, Some(instant(500)));

        assert_eq!(queue.pop(), Some(1));
        assert_eq!(queue.pop(), Some(0));
    }

    #[test]
    fn decrease_key_moves_entry_ahead() {
        let mut queue = VertexQueue::with_capacity(3);
        queue.push(0, Some(instant(10)));
        queue.push(1, Some(instant(20)));
        queue.push(2, Some(instant(30)));

        queue.decrease_key(2, Some(instant(1)));

        assert_eq!(queue.pop(), Some(2));
        assert_eq!(queue.pop(), Some(0));
        assert_eq!(queue.pop(), Some(1));
    }
}
