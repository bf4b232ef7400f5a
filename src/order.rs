//! Ordering mode of a priority queue
//!
//! A queue is either a min-queue (smallest priority dequeued first) or a
//! max-queue (largest priority dequeued first). The mode is the only policy
//! that differs between the two; the heap algorithms are shared and ask the
//! mode whether one priority belongs above another via [`Order::precedes`].

use std::fmt;

/// Ordering mode, fixed when a queue is initialized
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Order {
    /// Smallest priority at the root
    Min,
    /// Largest priority at the root
    Max,
}

impl Order {
    /// Maps a `min` flag to an ordering mode: `true` is [`Order::Min`]
    ///
    /// # Example
    ///
    /// ```rust
    /// use rust_pqueue::Order;
    ///
    /// assert_eq!(Order::from_min(true), Order::Min);
    /// assert_eq!(Order::from_min(false), Order::Max);
    /// ```
    #[inline]
    pub fn from_min(min: bool) -> Self {
        if min {
            Order::Min
        } else {
            Order::Max
        }
    }

    /// Returns true when priority `a` is strictly better placed as a parent
    /// than priority `b`
    ///
    /// Equal priorities never precede each other in either mode.
    #[inline]
    pub fn precedes(self, a: i32, b: i32) -> bool {
        match self {
            Order::Min => a < b,
            Order::Max => a > b,
        }
    }

    /// Prefix used when rendering a queue, `"Min"` or `"Max"`
    pub fn prefix(self) -> &'static str {
        match self {
            Order::Min => "Min",
            Order::Max => "Max",
        }
    }
}

impl fmt::Display for Order {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.prefix())
    }
}
