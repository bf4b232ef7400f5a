//! Error type for priority queue operations

use std::fmt;

/// Error type for priority queue operations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum QueueError {
    /// The queue holds no items (returned by `dequeue` and `peek`)
    EmptyQueue,
    /// The queue was default-constructed and never given an ordering mode
    NotInitialized,
}

impl fmt::Display for QueueError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QueueError::EmptyQueue => write!(f, "empty priority queue"),
            QueueError::NotInitialized => write!(f, "priority queue is not initialized"),
        }
    }
}

impl std::error::Error for QueueError {}
