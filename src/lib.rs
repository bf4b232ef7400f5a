//! Binary Heap Priority Queue for Rust
//!
//! This crate provides [`PQueue`], a vector-backed binary heap that stores
//! values alongside an explicit `i32` priority. A queue is created as a
//! min-queue or a max-queue and keeps that [`Order`] for its whole life.
//!
//! # Features
//!
//! - **Unconstrained values**: only the priority is compared, so any `T` can be stored
//! - **Min and max modes**: chosen at construction via [`Order`], sharing one implementation
//! - **Explicit errors**: [`QueueError::EmptyQueue`] and [`QueueError::NotInitialized`]
//!   are returned as values instead of panicking
//! - **Deterministic rendering**: `Display` lists items in dequeue order without
//!   touching the queue
//!
//! # Example
//!
//! ```rust
//! use rust_pqueue::{PQueue, QueueError};
//!
//! let mut queue = PQueue::new_max();
//! queue.enqueue(1, 2).unwrap();
//! queue.enqueue(7, 8).unwrap();
//! queue.enqueue(9, 0).unwrap();
//!
//! assert_eq!(queue.to_string(), "MaxPQueue[(7:8), (1:2), (9:0)]");
//! assert_eq!(queue.dequeue().unwrap().value, 7);
//!
//! queue.clear().unwrap();
//! assert_eq!(queue.peek(), Err(QueueError::EmptyQueue));
//! ```
//!
//! # Logging
//!
//! State transitions and storage growth are reported through the [`log`]
//! facade at `trace` and `debug` level. No logger is installed by this crate.

pub mod error;
pub mod item;
pub mod order;
pub mod pqueue;

// Re-export the main types for convenience
pub use error::QueueError;
pub use item::Item;
pub use order::Order;
pub use pqueue::PQueue;
