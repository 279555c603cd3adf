//! Thread-safe wrapper for the limpet doubly-linked list.
//!
//! # Organization
//!
//! - [`guarded_list`] - `GuardedList<T>`: one coarse mutex per list
//!   instance, whole-operation critical sections
//! - [`item_ref`] - `ItemRef`: lookup result that keeps the lock held
//!   while the caller reads the item

pub mod guarded_list;
pub mod item_ref;

pub use guarded_list::GuardedList;
pub use item_ref::ItemRef;

// Re-export the core surface callers need alongside the wrapper
pub use limpet_core::{describe, Anchor, DoublyLinkedList, ListError, STATUS_OK};
