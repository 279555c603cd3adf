//! The unguarded doubly-linked list.
//!
//! # Organization
//!
//! - [`raw_list`] - `DoublyLinkedList<T>`: the node chain and its
//!   insertion, removal, traversal and sorting algorithms
//! - [`iter`] - forward iteration over the chain

pub mod iter;
pub mod raw_list;

pub use iter::Iter;
pub use raw_list::{Anchor, DoublyLinkedList};
