//! Raw algorithmic layer of the limpet container.
//!
//! This crate holds the unguarded doubly-linked list and the shared status
//! taxonomy. It performs no locking of its own; `limpet-lock` wraps
//! [`DoublyLinkedList`] in a mutex to provide the thread-safe contract.
//!
//! ```text
//! User Code
//!    ↓ uses
//! limpet_lock::GuardedList     ← coarse mutex, whole-operation sections
//!    ↓ wraps
//! limpet_core::DoublyLinkedList ← actual data structure (this crate)
//! ```

pub mod list;
pub mod status;

// Re-exports for convenience
pub use list::{Anchor, DoublyLinkedList, Iter};
pub use status::{describe, ListError, STATUS_OK};
