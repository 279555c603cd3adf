use std::fmt;
use std::ops::Deref;
use std::sync::MutexGuard;

use limpet_core::DoublyLinkedList;

/// A reference to an item protected by the list's mutex.
///
/// This struct bundles the mutex guard with the item reference so the
/// reference cannot outlive the critical section. When the `ItemRef` is
/// dropped, the lock is released and other threads may mutate the list.
///
/// # Design
///
/// The problem with returning `&T` from `find()`:
/// ```ignore
/// pub fn find(&self, predicate: P) -> Option<&T> {
///     let guard = self.inner.lock().unwrap(); // Guard dropped here!
///     // Return reference - UNSAFE! The node could be unlinked while
///     // the caller still holds the reference
/// }
/// ```
///
/// The solution - bundle guard and reference: the `ItemRef` owns the
/// `MutexGuard`, and the item pointer stays valid for as long as the
/// guard is held, because no other thread can unlink the node.
///
/// # Example
/// ```ignore
/// let list = GuardedList::new();
/// list.push_tail(5);
///
/// if let Some(item) = list.find(|&x| x == 5) {
///     println!("Found: {}", *item); // Deref to get &T
/// } // item dropped here, lock released
/// ```
///
pub struct ItemRef<'a, T> {
    _guard: MutexGuard<'a, DoublyLinkedList<T>>,
    item: *const T,
}

impl<'a, T> ItemRef<'a, T> {
    /// Bundle a held guard with a pointer to an item inside the guarded
    /// list.
    ///
    /// # Safety
    ///
    /// `item` must point into the list protected by `guard`. The pointer
    /// stays valid while the guard is held because every mutation of the
    /// chain goes through the same mutex.
    pub(crate) unsafe fn new(guard: MutexGuard<'a, DoublyLinkedList<T>>, item: *const T) -> Self {
        ItemRef {
            _guard: guard,
            item,
        }
    }

    /// Get the inner reference.
    pub fn get(&self) -> &T {
        // Invariant from `new`: the pointer targets a node of the list we
        // hold the guard for.
        unsafe { &*self.item }
    }
}

impl<T> Deref for ItemRef<'_, T> {
    type Target = T;

    fn deref(&self) -> &Self::Target {
        self.get()
    }
}

impl<T: fmt::Display> fmt::Display for ItemRef<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.get())
    }
}

impl<T: fmt::Debug> fmt::Debug for ItemRef<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ItemRef({:?})", self.get())
    }
}

// Shared access from other threads is fine while the guard is held.
// ItemRef is deliberately not Send: the MutexGuard must be released on
// the thread that acquired it.
unsafe impl<T: Sync> Sync for ItemRef<'_, T> {}
