//! Queues and arrays built on a growable ring buffer.
//!
//! - [`CircularArray`]: the ring buffer itself, with O(1) access at both ends
//!   and by index
//! - [`Deque`]: a double-ended queue that filters out absent values
//! - [`FifoQueue`] and [`LifoQueue`]: single-ended queues
//! - [`ConstantLengthArray`]: a fixed-length array padded from fill sources
//!
//! Every type here owns a `CircularArray` and exposes only the operations
//! that make sense for its discipline.

pub mod circular_array;
mod constant_length_array;
mod deque;
mod fifo_queue;
mod lifo_queue;

pub use circular_array::CircularArray;
pub use constant_length_array::{ConstantLengthArray, ConstantLengthArrayBuilder};
pub use deque::Deque;
pub use fifo_queue::FifoQueue;
pub use lifo_queue::LifoQueue;
