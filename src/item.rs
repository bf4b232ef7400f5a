//! Stored queue entries

use std::fmt;

/// A value paired with its priority
///
/// The value is an opaque payload with no ordering requirement; only the
/// priority takes part in heap comparisons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Item<T> {
    pub value: T,
    pub priority: i32,
}

impl<T> Item<T> {
    pub fn new(value: T, priority: i32) -> Self {
        Self { value, priority }
    }

    /// Borrows the value, keeping the priority
    pub fn by_ref(&self) -> Item<&T> {
        Item {
            value: &self.value,
            priority: self.priority,
        }
    }

    /// Splits the item into `(value, priority)`
    pub fn into_parts(self) -> (T, i32) {
        (self.value, self.priority)
    }
}

impl<T> From<(T, i32)> for Item<T> {
    fn from((value, priority): (T, i32)) -> Self {
        Self::new(value, priority)
    }
}

/// Renders as `(value:priority)`
impl<T: fmt::Display> fmt::Display for Item<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}:{})", self.value, self.priority)
    }
}
