#[cfg(test)]
#[path = "../../tests/unit/utils/history_test.rs"]
mod history_test;

/// An append only log of items bounded by its capacity. Outside of the owner it is exposed
/// by shared reference only, so the recorded sequence cannot be altered.
#[derive(Clone, Debug)]
pub struct History<T> {
    items: Vec<T>,
    capacity: usize,
}

impl<T> History<T> {
    /// Creates a new empty history which can hold up to `capacity` items.
    pub fn new(capacity: usize) -> Self {
        Self { items: Vec::with_capacity(capacity.min(1024)), capacity }
    }

    /// Appends an item. Returns false and drops the item if the history is full.
    pub fn push(&mut self, item: T) -> bool {
        if self.is_full() {
            return false;
        }

        self.items.push(item);

        true
    }

    /// Returns item at given position.
    pub fn get(&self, index: usize) -> Option<&T> {
        self.items.get(index)
    }

    /// Returns the most recent item.
    pub fn last(&self) -> Option<&T> {
        self.items.last()
    }

    /// Returns items in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &T> + '_ {
        self.items.iter()
    }

    /// Returns items as slice.
    pub fn as_slice(&self) -> &[T] {
        self.items.as_slice()
    }

    /// Returns amount of recorded items.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns true if nothing is recorded.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns true if no more items can be recorded.
    pub fn is_full(&self) -> bool {
        self.items.len() >= self.capacity
    }
}
