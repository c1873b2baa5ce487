use std::cmp::Ordering;
use std::collections::VecDeque;
use tracing::trace;

/// Three-way comparison deciding service order: `Less` is served first.
pub type Comparator<T> = fn(&T, &T) -> Ordering;

/// Min-priority queue ordered by an explicit comparator rather than `Ord`.
///
/// Entries are kept sorted, so `peek`/`pop` are O(1) and `preview` is a
/// plain prefix copy. Entries comparing equal keep their insertion order.
#[derive(Debug, Clone)]
pub struct PriorityQueue<T> {
    entries: VecDeque<T>,
    compare: Comparator<T>,
}

impl<T: Clone> PriorityQueue<T> {
    pub fn new(compare: Comparator<T>) -> Self {
        Self {
            entries: VecDeque::new(),
            compare,
        }
    }

    pub fn push(&mut self, item: T) {
        let compare = self.compare;
        let position = self
            .entries
            .partition_point(|existing| compare(existing, &item) != Ordering::Greater);
        self.entries.insert(position, item);
        trace!("Queued entry at position {} of {}", position, self.entries.len());
    }

    pub fn peek(&self) -> Option<&T> {
        self.entries.front()
    }

    pub fn pop(&mut self) -> Option<T> {
        self.entries.pop_front()
    }

    /// Up to `limit` entries in service order; the queue is left untouched.
    pub fn preview(&self, limit: usize) -> Vec<T> {
        self.entries.iter().take(limit).cloned().collect()
    }

    /// Removes the first entry, in service order, matching `predicate`.
    pub fn remove_first<P>(&mut self, predicate: P) -> Option<T>
    where
        P: Fn(&T) -> bool,
    {
        let position = self.entries.iter().position(predicate)?;
        self.entries.remove(position)
    }

    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}
