//! Binary heap priority queue
//!
//! [`PQueue`] keeps `(value, priority)` items in a vector laid out as an
//! implicit binary tree: the children of index `i` live at `2i + 1` and
//! `2i + 2`, and its parent at `(i - 1) / 2`. The queue is either a
//! min-queue or a max-queue; the [`Order`] chosen at initialization decides
//! which priority sits at the root.
//!
//! # Time Complexity
//!
//! | Operation | Complexity         |
//! |-----------|--------------------|
//! | `enqueue` | O(log n) amortized |
//! | `dequeue` | O(log n)           |
//! | `peek`    | O(1)               |
//! | `clear`   | O(n) drops         |
//! | `render`  | O(n log n)         |
//!
//! # Example
//!
//! ```rust
//! use rust_pqueue::PQueue;
//!
//! let mut queue = PQueue::new_min();
//! queue.enqueue("three", 3).unwrap();
//! queue.enqueue("one", 1).unwrap();
//! queue.enqueue("two", 2).unwrap();
//!
//! assert_eq!(queue.peek().unwrap().value, "one");
//! assert_eq!(queue.to_string(), "MinPQueue[(one:1), (two:2), (three:3)]");
//! assert_eq!(queue.dequeue().unwrap().priority, 1);
//! assert_eq!(queue.len(), 2);
//! ```
//!
//! # Equal priorities
//!
//! Neither sift moves an item past another of equal priority, so equal
//! priorities come out in no particular order relative to each other. Only
//! the order between distinct priorities is guaranteed.
//!
//! # Uninitialized queues
//!
//! `PQueue::default()` has no ordering mode. It reports
//! [`is_initialized`](PQueue::is_initialized) as false, and every fallible
//! operation on it returns [`QueueError::NotInitialized`] until
//! [`initialize_if_not`](PQueue::initialize_if_not) fixes a mode.

use std::fmt;

use log::{debug, trace};

use crate::error::QueueError;
use crate::item::Item;
use crate::order::Order;

/// A binary min- or max-heap of `(value, priority)` items
///
/// The value type is unconstrained; only the `i32` priority is compared.
#[derive(Debug, Clone)]
pub struct PQueue<T> {
    /// Heap-ordered items
    heap: Vec<Item<T>>,
    /// `None` until the queue is initialized
    order: Option<Order>,
}

impl<T> PQueue<T> {
    /// Creates an empty queue with the given ordering mode, reserving room
    /// for at least `capacity` items
    pub fn new(order: Order, capacity: usize) -> Self {
        Self {
            heap: Vec::with_capacity(capacity),
            order: Some(order),
        }
    }

    /// Creates an empty min-queue
    pub fn new_min() -> Self {
        Self::new(Order::Min, 0)
    }

    /// Creates an empty max-queue
    pub fn new_max() -> Self {
        Self::new(Order::Max, 0)
    }

    /// Creates an empty min-queue with room for at least `capacity` items
    pub fn with_capacity_min(capacity: usize) -> Self {
        Self::new(Order::Min, capacity)
    }

    /// Creates an empty max-queue with room for at least `capacity` items
    pub fn with_capacity_max(capacity: usize) -> Self {
        Self::new(Order::Max, capacity)
    }

    /// Returns true once the queue has an ordering mode
    pub fn is_initialized(&self) -> bool {
        self.order.is_some()
    }

    /// The ordering mode, or `None` for an uninitialized queue
    pub fn order(&self) -> Option<Order> {
        self.order
    }

    /// Fixes the ordering mode of an uninitialized queue
    ///
    /// On a queue that is already initialized this does nothing: the
    /// existing items and ordering mode are kept, even if `order` differs.
    pub fn initialize_if_not(&mut self, order: Order) {
        match self.order {
            Some(current) => {
                trace!(
                    "priority queue already initialized as {}, keeping {} items",
                    current,
                    self.heap.len()
                );
            }
            None => {
                trace!("initializing priority queue as {}", order);
                self.heap = Vec::new();
                self.order = Some(order);
            }
        }
    }

    /// Returns the number of items in the queue
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// Returns true if the queue holds no items
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Returns the number of items the queue can hold without reallocating
    pub fn capacity(&self) -> usize {
        self.heap.capacity()
    }

    /// The items in internal heap order (not sorted)
    ///
    /// The root, if any, is at index 0.
    pub fn as_slice(&self) -> &[Item<T>] {
        &self.heap
    }

    /// Inserts `value` with the given priority
    ///
    /// # Errors
    /// Returns [`QueueError::NotInitialized`] on an uninitialized queue.
    pub fn enqueue(&mut self, value: T, priority: i32) -> Result<(), QueueError> {
        let order = self.initialized_order()?;

        let old_capacity = self.heap.capacity();
        self.heap.push(Item::new(value, priority));
        if self.heap.capacity() != old_capacity {
            debug!(
                "priority queue grew from {} to {} slots",
                old_capacity,
                self.heap.capacity()
            );
        }

        sift_up(&mut self.heap, order);
        Ok(())
    }

    /// Removes and returns the item at the root
    ///
    /// # Errors
    /// Returns [`QueueError::EmptyQueue`] if there is nothing to remove, or
    /// [`QueueError::NotInitialized`] on an uninitialized queue.
    pub fn dequeue(&mut self) -> Result<Item<T>, QueueError> {
        let order = self.initialized_order()?;
        if self.heap.is_empty() {
            return Err(QueueError::EmptyQueue);
        }

        // The last item takes the root slot
        let root = self.heap.swap_remove(0);
        if !self.heap.is_empty() {
            sift_down(&mut self.heap, order);
        }

        Ok(root)
    }

    /// Returns the item at the root without removing it
    ///
    /// # Errors
    /// Returns [`QueueError::EmptyQueue`] if the queue is empty, or
    /// [`QueueError::NotInitialized`] on an uninitialized queue.
    pub fn peek(&self) -> Result<&Item<T>, QueueError> {
        self.initialized_order()?;
        self.heap.first().ok_or(QueueError::EmptyQueue)
    }

    /// Removes every item, keeping the allocated capacity
    ///
    /// # Errors
    /// Returns [`QueueError::NotInitialized`] on an uninitialized queue.
    pub fn clear(&mut self) -> Result<(), QueueError> {
        self.initialized_order()?;
        trace!("clearing priority queue of {} items", self.heap.len());
        self.heap.clear();
        Ok(())
    }

    /// Checks the heap property over the whole backing array
    ///
    /// Every parent must precede its children or share their priority.
    /// An uninitialized queue is valid only while it is empty.
    pub fn verify_heap_property(&self) -> bool {
        let Some(order) = self.order else {
            return self.heap.is_empty();
        };

        (1..self.heap.len()).all(|child| {
            let parent = self.heap[(child - 1) / 2].priority;
            let priority = self.heap[child].priority;
            order.precedes(parent, priority) || parent == priority
        })
    }

    fn initialized_order(&self) -> Result<Order, QueueError> {
        self.order.ok_or_else(|| {
            debug!("rejecting operation on an uninitialized priority queue");
            QueueError::NotInitialized
        })
    }
}

impl<T: fmt::Display> PQueue<T> {
    /// Renders the queue in dequeue order, e.g. `MinPQueue[(9:0), (1:2)]`
    ///
    /// Equivalent to `to_string()`. The queue itself is left untouched.
    pub fn render(&self) -> String {
        self.to_string()
    }
}

/// Creates an uninitialized queue
impl<T> Default for PQueue<T> {
    fn default() -> Self {
        Self {
            heap: Vec::new(),
            order: None,
        }
    }
}

impl<T: fmt::Display> fmt::Display for PQueue<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Some(order) = self.order else {
            return f.write_str("PQueue[]");
        };

        // Drain a borrowed copy with the same layout, so items (including
        // ties) come out exactly as they would from this queue.
        let mut shadow = PQueue {
            heap: self.heap.iter().map(Item::by_ref).collect(),
            order: Some(order),
        };

        write!(f, "{}PQueue[", order)?;
        let mut first = true;
        while let Ok(item) = shadow.dequeue() {
            if !first {
                f.write_str(", ")?;
            }
            write!(f, "{}", item)?;
            first = false;
        }
        f.write_str("]")
    }
}

/// Moves the last item up until its parent precedes it or ties with it
fn sift_up<T>(heap: &mut [Item<T>], order: Order) {
    let mut index = match heap.len() {
        0 => return,
        len => len - 1,
    };

    while index > 0 {
        let parent = (index - 1) / 2;
        let parent_priority = heap[parent].priority;
        let priority = heap[index].priority;

        if order.precedes(parent_priority, priority) || parent_priority == priority {
            break;
        }

        heap.swap(index, parent);
        index = parent;
    }
}

/// Moves the root down until no child strictly precedes it
fn sift_down<T>(heap: &mut [Item<T>], order: Order) {
    let len = heap.len();
    let mut index = 0;
    loop {
        let left = 2 * index + 1;
        let right = left + 1;
        let mut best = index;

        if left < len && order.precedes(heap[left].priority, heap[best].priority) {
            best = left;
        }
        if right < len && order.precedes(heap[right].priority, heap[best].priority) {
            best = right;
        }

        if best == index {
            break;
        }

        heap.swap(index, best);
        index = best;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn drain<T>(queue: &mut PQueue<T>) -> Vec<(T, i32)> {
        let mut out = Vec::new();
        while let Ok(item) = queue.dequeue() {
            out.push(item.into_parts());
        }
        out
    }

    #[test]
    fn test_basic_operations() {
        let mut queue = PQueue::new_min();

        assert!(queue.is_empty());
        assert_eq!(queue.len(), 0);

        queue.enqueue("three", 3).unwrap();
        queue.enqueue("one", 1).unwrap();
        queue.enqueue("two", 2).unwrap();

        assert!(!queue.is_empty());
        assert_eq!(queue.len(), 3);
        assert_eq!(queue.peek(), Ok(&Item::new("one", 1)));

        assert_eq!(queue.dequeue(), Ok(Item::new("one", 1)));
        assert_eq!(queue.dequeue(), Ok(Item::new("two", 2)));
        assert_eq!(queue.dequeue(), Ok(Item::new("three", 3)));
        assert_eq!(queue.dequeue(), Err(QueueError::EmptyQueue));
    }

    #[test]
    fn test_max_queue() {
        let mut queue = PQueue::new_max();
        for p in [4, 9, -1, 7, 0] {
            queue.enqueue(p, p).unwrap();
        }
        let priorities: Vec<i32> = drain(&mut queue).into_iter().map(|(_, p)| p).collect();
        assert_eq!(priorities, vec![9, 7, 4, 0, -1]);
    }

    #[test]
    fn test_sift_up_stops_on_tie() {
        let mut queue = PQueue::new_min();
        queue.enqueue('a', 1).unwrap();
        queue.enqueue('b', 1).unwrap();

        // No swap for an equal priority
        assert_eq!(queue.as_slice()[0], Item::new('a', 1));
        assert_eq!(queue.as_slice()[1], Item::new('b', 1));
    }

    #[test]
    fn test_sift_down_prefers_strictly_better_child() {
        let mut queue = PQueue::new_min();
        for (v, p) in [('r', 0), ('x', 5), ('y', 5), ('z', 9)] {
            queue.enqueue(v, p).unwrap();
        }
        // Layout: [r:0, x:5, y:5, z:9]; z moves to the root and sinks to
        // the left child, the first one that strictly precedes it.
        queue.dequeue().unwrap();
        assert_eq!(
            queue.as_slice(),
            &[Item::new('x', 5), Item::new('z', 9), Item::new('y', 5)]
        );
        assert!(queue.verify_heap_property());
    }

    #[test]
    fn test_single_item_dequeue() {
        let mut queue = PQueue::new_max();
        queue.enqueue(42, 1).unwrap();
        assert_eq!(queue.dequeue(), Ok(Item::new(42, 1)));
        assert!(queue.is_empty());
        assert_eq!(queue.peek(), Err(QueueError::EmptyQueue));
    }

    #[test]
    fn test_ascending_insertion() {
        let mut queue = PQueue::new_min();

        for i in 0..100 {
            queue.enqueue(i, i).unwrap();
        }

        for i in 0..100 {
            assert_eq!(queue.dequeue(), Ok(Item::new(i, i)));
        }
    }

    #[test]
    fn test_descending_insertion() {
        let mut queue = PQueue::new_min();

        for i in (0..100).rev() {
            queue.enqueue(i, i).unwrap();
            assert!(queue.verify_heap_property());
        }

        for i in 0..100 {
            assert_eq!(queue.dequeue(), Ok(Item::new(i, i)));
        }
    }

    #[test]
    fn test_uninitialized_rejects_operations() {
        let mut queue: PQueue<u8> = PQueue::default();

        assert!(!queue.is_initialized());
        assert_eq!(queue.order(), None);
        assert_eq!(queue.len(), 0);
        assert_eq!(queue.capacity(), 0);
        assert_eq!(queue.enqueue(1, 1), Err(QueueError::NotInitialized));
        assert_eq!(queue.dequeue(), Err(QueueError::NotInitialized));
        assert_eq!(queue.peek(), Err(QueueError::NotInitialized));
        assert_eq!(queue.clear(), Err(QueueError::NotInitialized));
        assert_eq!(queue.to_string(), "PQueue[]");
        assert!(queue.verify_heap_property());
    }

    #[test]
    fn test_initialize_if_not_is_idempotent() {
        let mut queue = PQueue::default();
        queue.initialize_if_not(Order::Max);
        assert!(queue.is_initialized());
        assert_eq!(queue.order(), Some(Order::Max));

        queue.enqueue("a", 1).unwrap();
        queue.enqueue("b", 2).unwrap();

        queue.initialize_if_not(Order::Min);
        assert_eq!(queue.order(), Some(Order::Max));
        assert_eq!(queue.len(), 2);
        assert_eq!(queue.peek(), Ok(&Item::new("b", 2)));
    }

    #[test]
    fn test_clear_keeps_capacity() {
        let mut queue = PQueue::with_capacity_max(16);
        for i in 0..10 {
            queue.enqueue(i, i).unwrap();
        }
        let capacity = queue.capacity();
        queue.clear().unwrap();
        assert!(queue.is_empty());
        assert_eq!(queue.capacity(), capacity);
        assert_eq!(queue.dequeue(), Err(QueueError::EmptyQueue));
    }

    #[test]
    fn test_render_does_not_need_clone() {
        struct Label(&'static str);
        impl fmt::Display for Label {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.0)
            }
        }

        let mut queue = PQueue::new_max();
        queue.enqueue(Label("low"), 1).unwrap();
        queue.enqueue(Label("high"), 8).unwrap();
        assert_eq!(queue.render(), "MaxPQueue[(high:8), (low:1)]");
        assert_eq!(queue.len(), 2);
    }

    #[test]
    fn test_render_empty() {
        assert_eq!(PQueue::<i32>::new_min().render(), "MinPQueue[]");
        assert_eq!(PQueue::<i32>::new_max().render(), "MaxPQueue[]");
    }
}
