use std::cmp::Ordering;
use std::fmt;
use std::mem;
use std::sync::Mutex;

use limpet_core::{Anchor, DoublyLinkedList, ListError};

use crate::item_ref::ItemRef;

/// Thread-safe doubly-linked list guarded by one coarse mutex.
///
/// Every public operation is a full critical section: the lock is acquired
/// at entry and released on every exit path, including error returns (the
/// guard is RAII, so a failed operation can never leave the list locked).
/// Operations on one instance are fully serialized - there is no
/// reader/writer split, no per-node locking and no lock-free fast path.
/// Thread-safety of the item contents themselves remains the caller's
/// responsibility.
///
/// # Design Philosophy
///
/// ```text
/// User Code
///    ↓ uses
/// GuardedList (this type)       ← coarse mutex, status-code contract
///    ↓ wraps
/// limpet_core::DoublyLinkedList ← unguarded node chain and algorithms
/// ```
///
/// # Example
///
/// ```rust,ignore
/// use std::sync::Arc;
/// use std::thread;
/// use limpet_lock::GuardedList;
///
/// let list = Arc::new(GuardedList::new());
///
/// let handles: Vec<_> = (0..4)
///     .map(|i| {
///         let list = Arc::clone(&list);
///         thread::spawn(move || list.push_tail(i))
///     })
///     .collect();
/// for handle in handles {
///     handle.join().unwrap();
/// }
///
/// assert_eq!(list.len(), 4);
/// ```
///
pub struct GuardedList<T> {
    inner: Mutex<DoublyLinkedList<T>>,
}

impl<T> GuardedList<T> {
    /// Creates an empty list with an initialized lock.
    pub fn new() -> Self {
        GuardedList {
            inner: Mutex::new(DoublyLinkedList::new()),
        }
    }

    /// Number of elements.
    pub fn len(&self) -> usize {
        self.inner.lock().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.lock().unwrap().is_empty()
    }

    /// O(1) insertion at the head.
    pub fn push_head(&self, item: T) {
        self.inner.lock().unwrap().push_head(item);
    }

    /// O(1) insertion at the tail.
    pub fn push_tail(&self, item: T) {
        self.inner.lock().unwrap().push_tail(item);
    }

    /// Splices `item` in before the current element at `index`;
    /// `insert_at(len, item)` behaves as [`push_tail`](Self::push_tail).
    ///
    /// `IndexOutOfBound` when `index > len`.
    pub fn insert_at(&self, index: usize, item: T) -> Result<(), ListError> {
        self.inner.lock().unwrap().insert_at(index, item)
    }

    /// Splices `item` in immediately before or after the first element
    /// satisfying `predicate`. The scan and the splice happen inside one
    /// critical section, so concurrent insertions cannot interleave their
    /// pointer updates.
    ///
    /// `PredicateFailed` (no mutation performed) when nothing matches.
    pub fn insert_where<P>(&self, item: T, predicate: P, anchor: Anchor) -> Result<(), ListError>
    where
        P: FnMut(&T) -> bool,
    {
        self.inner.lock().unwrap().insert_where(item, predicate, anchor)
    }

    /// Removes the first element satisfying `predicate` and returns its
    /// item.
    ///
    /// `EmptyList` (warning) on an empty list, `PredicateFailed` when no
    /// element matches.
    pub fn remove_where<P>(&self, predicate: P) -> Result<T, ListError>
    where
        P: FnMut(&T) -> bool,
    {
        self.inner.lock().unwrap().remove_where(predicate)
    }

    /// Removes the element at `index` and returns its item.
    ///
    /// `EmptyList` (warning) on an empty list, `IndexOutOfBound` when
    /// `index >= len`.
    pub fn remove_at(&self, index: usize) -> Result<T, ListError> {
        self.inner.lock().unwrap().remove_at(index)
    }

    /// Applies `consumer` to every item head to tail while holding the
    /// lock for the whole traversal, so the operation observes a
    /// consistent snapshot and blocks concurrent mutation.
    ///
    /// `EmptyList` (warning, consumer never invoked) on an empty list.
    /// The consumer sees item references only, never nodes; it must not
    /// assume it can unlink its own element.
    pub fn for_each<F>(&self, consumer: F) -> Result<(), ListError>
    where
        F: FnMut(&T),
    {
        self.inner.lock().unwrap().for_each(consumer)
    }

    /// First item satisfying `predicate`, or `None` when nothing matches
    /// or the list is empty. Never mutates the list.
    ///
    /// The returned [`ItemRef`] keeps the lock held; drop it to let other
    /// threads back in.
    pub fn find<P>(&self, predicate: P) -> Option<ItemRef<'_, T>>
    where
        P: FnMut(&T) -> bool,
    {
        let guard = self.inner.lock().unwrap();
        let item = guard.find(predicate)? as *const T;
        // item points into the chain guarded by `guard`
        Some(unsafe { ItemRef::new(guard, item) })
    }

    /// Finds the first match and applies `f` to it inside the critical
    /// section, returning the result. The flexible alternative to
    /// [`find`](Self::find) when no reference needs to escape.
    pub fn find_and_apply<P, F, R>(&self, predicate: P, f: F) -> Option<R>
    where
        P: FnMut(&T) -> bool,
        F: FnOnce(&T) -> R,
    {
        let guard = self.inner.lock().unwrap();
        guard.find(predicate).map(f)
    }

    /// Consistent snapshot of the items, head to tail.
    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.inner.lock().unwrap().iter().cloned().collect()
    }

    /// Sorts with the default strategy: a stable pairwise-exchange sort
    /// that swaps item payloads between nodes and never relinks the chain.
    /// `comparator` is a three-way ordering applied as a strict weak
    /// ordering; equal elements keep their relative order. Sorting an
    /// empty or single-element list is a no-op.
    pub fn sort<C>(&self, comparator: C)
    where
        C: FnMut(&T, &T) -> Ordering,
    {
        self.inner.lock().unwrap().sort(comparator);
    }

    /// Locks the list and hands the raw chain to a caller-supplied
    /// ordering strategy, for callers who want an asymptotically better
    /// algorithm than the default without changing the public contract.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// // O(n log n): drain into a Vec, sort, refill
    /// list.sort_by(|raw| {
    ///     let mut items: Vec<_> = std::iter::from_fn(|| raw.pop_head()).collect();
    ///     items.sort();
    ///     raw.extend(items);
    /// });
    /// ```
    pub fn sort_by<S>(&self, strategy: S)
    where
        S: FnOnce(&mut DoublyLinkedList<T>),
    {
        let mut guard = self.inner.lock().unwrap();
        strategy(&mut guard);
    }

    /// Shallow teardown: releases the list header and the lock, never the
    /// node chain, and leaves the caller's handle `None`.
    ///
    /// Precondition: the list must be empty. Any nodes still in the chain
    /// are leaked together with their items - this variant exists for
    /// callers who have already drained the list themselves;
    /// [`delete_dynamic`](Self::delete_dynamic) is the safe
    /// general-purpose teardown.
    ///
    /// `NullPointer` when the handle is already absent.
    pub fn delete(slot: &mut Option<GuardedList<T>>) -> Result<(), ListError> {
        let list = slot.take().ok_or(ListError::NullPointer)?;
        let inner = list.inner.into_inner().unwrap();
        mem::forget(inner);
        Ok(())
    }

    /// Full teardown: drops every item, frees every node, releases the
    /// list storage and leaves the caller's handle `None`.
    ///
    /// `NullPointer` when the handle is already absent.
    pub fn delete_dynamic(slot: &mut Option<GuardedList<T>>) -> Result<(), ListError> {
        let list = slot.take().ok_or(ListError::NullPointer)?;
        drop(list);
        Ok(())
    }

    /// Full teardown with a caller-supplied deallocator, for items that
    /// hold externally-owned or structured resources. Each item is passed
    /// to `deallocator` instead of being dropped in place; nodes and the
    /// list storage are freed as in
    /// [`delete_dynamic`](Self::delete_dynamic).
    ///
    /// `NullPointer` when the handle is already absent.
    pub fn delete_dynamic_with<F>(
        slot: &mut Option<GuardedList<T>>,
        mut deallocator: F,
    ) -> Result<(), ListError>
    where
        F: FnMut(T),
    {
        let list = slot.take().ok_or(ListError::NullPointer)?;
        let mut inner = list.inner.into_inner().unwrap();
        while let Some(item) = inner.pop_head() {
            deallocator(item);
        }
        Ok(())
    }
}

impl<T> Default for GuardedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Debug> fmt::Debug for GuardedList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let guard = self.inner.lock().unwrap();
        f.debug_list().entries(guard.iter()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mixed_ends_scenario() {
        let list = GuardedList::new();
        list.push_tail("a");
        list.push_tail("b");
        list.push_head("z");
        assert_eq!(list.to_vec(), vec!["z", "a", "b"]);
        assert_eq!(list.len(), 3);
    }

    #[test]
    fn test_remove_empty_is_warning_not_predicate_failure() {
        let list: GuardedList<i32> = GuardedList::new();
        assert_eq!(list.remove_where(|_| true), Err(ListError::EmptyList));
        assert_eq!(list.remove_at(0), Err(ListError::EmptyList));
    }

    #[test]
    fn test_failed_operation_leaves_list_usable() {
        let list = GuardedList::new();
        list.push_tail(1);
        list.push_tail(2);
        list.push_tail(3);

        // each failure must release the lock on its error path
        assert_eq!(list.remove_at(5), Err(ListError::IndexOutOfBound));
        assert_eq!(list.insert_at(9, 0), Err(ListError::IndexOutOfBound));
        assert_eq!(
            list.insert_where(0, |&x| x > 100, Anchor::Before),
            Err(ListError::PredicateFailed)
        );
        assert_eq!(
            list.remove_where(|&x| x > 100),
            Err(ListError::PredicateFailed)
        );

        // still fully usable afterwards
        list.push_tail(4);
        assert_eq!(list.remove_at(0), Ok(1));
        assert_eq!(list.to_vec(), vec![2, 3, 4]);
    }

    #[test]
    fn test_find_and_apply() {
        let list = GuardedList::new();
        list.push_tail(String::from("alpha"));
        list.push_tail(String::from("beta"));

        let len = list.find_and_apply(|s: &String| s.starts_with('b'), |s| s.len());
        assert_eq!(len, Some(4));

        let missing = list.find_and_apply(|s: &String| s.starts_with('z'), |s| s.len());
        assert_eq!(missing, None);
    }

    #[test]
    fn test_for_each_blocks_and_snapshots() {
        let list = GuardedList::new();
        for i in 1..=4 {
            list.push_tail(i);
        }
        let mut seen = Vec::new();
        list.for_each(|&x| seen.push(x)).unwrap();
        assert_eq!(seen, vec![1, 2, 3, 4]);

        let empty: GuardedList<i32> = GuardedList::new();
        assert_eq!(empty.for_each(|_| {}), Err(ListError::EmptyList));
    }

    #[test]
    fn test_sort_by_pluggable_strategy() {
        let list = GuardedList::new();
        for value in [4, 1, 3, 2] {
            list.push_tail(value);
        }

        list.sort_by(|raw| {
            let mut items: Vec<_> = std::iter::from_fn(|| raw.pop_head()).collect();
            items.sort();
            raw.extend(items);
        });

        assert_eq!(list.to_vec(), vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_delete_handles() {
        let mut slot = Some(GuardedList::<i32>::new());
        assert_eq!(GuardedList::delete(&mut slot), Ok(()));
        assert!(slot.is_none());
        assert_eq!(
            GuardedList::delete(&mut slot),
            Err(ListError::NullPointer)
        );
        assert_eq!(
            GuardedList::delete_dynamic(&mut slot),
            Err(ListError::NullPointer)
        );
    }
}
