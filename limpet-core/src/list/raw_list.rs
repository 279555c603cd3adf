use std::cmp::Ordering;
use std::fmt;
use std::marker::PhantomData;
use std::ptr;

use crate::list::iter::Iter;
use crate::status::ListError;

type NodePtr<T> = *mut Node<T>;

// =============================================================================
// CHAIN STRUCTURE & OWNERSHIP
// =============================================================================
//
// ┌──────┐     ┌──────┐     ┌──────┐     ┌──────┐
// │ head │────►│  n0  │────►│  n1  │────►│ NULL │   next: forward chain
// └──────┘     └──────┘     └──────┘     └──────┘
//               ▲  │ prev     ▲  │ prev
//     NULL ◄────┘  └──────────┘  └── ...              prev: back-reference only
//
// Every node is allocated with Box::into_raw and freed with exactly one
// Box::from_raw. The list is the sole owner of the chain; prev pointers are
// plain back-references and never participate in ownership, so there is no
// cycle to collect and no double free.
//
// INVARIANTS (checked by `check_invariants`):
// 1. len equals the number of nodes reachable from head via next
// 2. head.prev and tail.next are null
// 3. for every interior node: node.next.prev == node
// 4. head and tail are both null iff len == 0
//
#[derive(Debug)]
pub(crate) struct Node<T> {
    pub(crate) item: T,
    pub(crate) next: NodePtr<T>,
    pub(crate) prev: NodePtr<T>,
}

/// Position of a relative insertion with respect to the first node whose
/// item satisfies the caller's predicate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Anchor {
    /// Splice the new node immediately before the first match.
    Before,
    /// Splice the new node immediately after the first match.
    After,
}

/// Unguarded doubly-linked list over owned items.
///
/// This is the algorithmic layer: node management, traversal, search,
/// deletion and sorting, with no locking of its own. `limpet-lock` wraps it
/// in a `Mutex` to provide the thread-safe public contract; use this type
/// directly only from a single thread or from inside such a wrapper (for
/// example as the target of a pluggable sort strategy).
///
/// Items are owned by the list but never inspected by it except through
/// caller-supplied predicates, comparators and consumers. Removal hands the
/// item back to the caller.
///
/// # Example
///
/// ```rust,ignore
/// use limpet_core::DoublyLinkedList;
///
/// let mut list = DoublyLinkedList::new();
/// list.push_tail("a");
/// list.push_tail("b");
/// list.push_head("z");
/// assert_eq!(list.iter().copied().collect::<Vec<_>>(), ["z", "a", "b"]);
/// ```
///
pub struct DoublyLinkedList<T> {
    head: NodePtr<T>,
    tail: NodePtr<T>,
    len: usize,
    marker: PhantomData<Box<Node<T>>>,
}

impl<T> DoublyLinkedList<T> {
    /// Creates an empty list.
    pub fn new() -> Self {
        DoublyLinkedList {
            head: ptr::null_mut(),
            tail: ptr::null_mut(),
            len: 0,
            marker: PhantomData,
        }
    }

    /// Number of elements in the list.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// First item, if any.
    pub fn front(&self) -> Option<&T> {
        if self.head.is_null() {
            None
        } else {
            unsafe { Some(&(*self.head).item) }
        }
    }

    /// Last item, if any.
    pub fn back(&self) -> Option<&T> {
        if self.tail.is_null() {
            None
        } else {
            unsafe { Some(&(*self.tail).item) }
        }
    }

    /// O(1) insertion at the head.
    pub fn push_head(&mut self, item: T) {
        let new_node = Box::into_raw(Box::new(Node {
            item,
            prev: ptr::null_mut(),
            next: self.head,
        }));

        if self.head.is_null() {
            self.tail = new_node;
        } else {
            unsafe { (*self.head).prev = new_node };
        }

        self.head = new_node;
        self.len += 1;
    }

    /// O(1) insertion at the tail.
    pub fn push_tail(&mut self, item: T) {
        let new_node = Box::into_raw(Box::new(Node {
            item,
            prev: self.tail,
            next: ptr::null_mut(),
        }));

        if self.tail.is_null() {
            self.head = new_node;
        } else {
            unsafe { (*self.tail).next = new_node };
        }

        self.tail = new_node;
        self.len += 1;
    }

    /// Removes and returns the first item, `None` on an empty list.
    pub fn pop_head(&mut self) -> Option<T> {
        if self.head.is_null() {
            None
        } else {
            Some(unsafe { self.unlink(self.head) })
        }
    }

    /// Removes and returns the last item, `None` on an empty list.
    pub fn pop_tail(&mut self) -> Option<T> {
        if self.tail.is_null() {
            None
        } else {
            Some(unsafe { self.unlink(self.tail) })
        }
    }

    /// Splices `item` in before the current element at `index`.
    ///
    /// `insert_at(len, item)` behaves as [`push_tail`](Self::push_tail);
    /// any larger index fails with `IndexOutOfBound` and leaves the chain
    /// untouched.
    pub fn insert_at(&mut self, index: usize, item: T) -> Result<(), ListError> {
        if index > self.len {
            return Err(ListError::IndexOutOfBound);
        }

        if index == self.len {
            self.push_tail(item);
        } else if index == 0 {
            self.push_head(item);
        } else {
            unsafe {
                let node = self.node_at(index);
                self.insert_before_node(node, item);
            }
        }

        Ok(())
    }

    /// Scans from the head and splices `item` in immediately before or
    /// after the first node whose item satisfies `predicate`.
    ///
    /// Fails with `PredicateFailed` when the scan reaches the end without a
    /// match; no node is allocated in that case, so a failed scan performs
    /// no mutation at all.
    pub fn insert_where<P>(&mut self, item: T, mut predicate: P, anchor: Anchor) -> Result<(), ListError>
    where
        P: FnMut(&T) -> bool,
    {
        let mut current = self.head;
        while !current.is_null() {
            unsafe {
                if predicate(&(*current).item) {
                    match anchor {
                        Anchor::Before => self.insert_before_node(current, item),
                        Anchor::After => self.insert_after_node(current, item),
                    }
                    return Ok(());
                }
                current = (*current).next;
            }
        }

        Err(ListError::PredicateFailed)
    }

    /// Removes the element at `index` and returns its item.
    ///
    /// `EmptyList` (warning) on an empty list, `IndexOutOfBound` when
    /// `index >= len`.
    pub fn remove_at(&mut self, index: usize) -> Result<T, ListError> {
        if self.is_empty() {
            return Err(ListError::EmptyList);
        }
        if index >= self.len {
            return Err(ListError::IndexOutOfBound);
        }

        unsafe {
            let node = self.node_at(index);
            Ok(self.unlink(node))
        }
    }

    /// Removes the first element whose item satisfies `predicate` and
    /// returns its item.
    ///
    /// `EmptyList` (warning) on an empty list, `PredicateFailed` when no
    /// element matches.
    pub fn remove_where<P>(&mut self, mut predicate: P) -> Result<T, ListError>
    where
        P: FnMut(&T) -> bool,
    {
        if self.is_empty() {
            return Err(ListError::EmptyList);
        }

        let mut current = self.head;
        while !current.is_null() {
            unsafe {
                if predicate(&(*current).item) {
                    return Ok(self.unlink(current));
                }
                current = (*current).next;
            }
        }

        Err(ListError::PredicateFailed)
    }

    /// First item satisfying `predicate`, or `None`. Never mutates.
    pub fn find<P>(&self, mut predicate: P) -> Option<&T>
    where
        P: FnMut(&T) -> bool,
    {
        let mut current = self.head;
        while !current.is_null() {
            unsafe {
                if predicate(&(*current).item) {
                    return Some(&(*current).item);
                }
                current = (*current).next;
            }
        }
        None
    }

    /// Applies `consumer` to every item, head to tail.
    ///
    /// `EmptyList` (warning) on an empty list; the consumer is never
    /// invoked in that case. The consumer sees items only, never nodes.
    pub fn for_each<F>(&self, mut consumer: F) -> Result<(), ListError>
    where
        F: FnMut(&T),
    {
        if self.is_empty() {
            return Err(ListError::EmptyList);
        }

        for item in self.iter() {
            consumer(item);
        }
        Ok(())
    }

    /// Forward iterator over the items.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(self.head, self.len)
    }

    /// Stable pairwise-exchange sort (the default strategy).
    ///
    /// Item payloads are swapped between neighboring nodes; nodes are never
    /// relinked, so node identity slots keep their position in the chain.
    /// The comparator is a three-way ordering applied as a strict weak
    /// ordering: only `Ordering::Greater` triggers an exchange, so equal
    /// elements keep their relative order. Sorting an empty or
    /// single-element list is a no-op.
    pub fn sort<C>(&mut self, mut comparator: C)
    where
        C: FnMut(&T, &T) -> Ordering,
    {
        if self.len < 2 {
            return;
        }

        unsafe {
            loop {
                let mut swapped = false;
                let mut current = self.head;

                while !(*current).next.is_null() {
                    let next = (*current).next;
                    if comparator(&(*current).item, &(*next).item) == Ordering::Greater {
                        ptr::swap(&mut (*current).item, &mut (*next).item);
                        swapped = true;
                    }
                    current = next;
                }

                if !swapped {
                    break;
                }
            }
        }
    }

    /// Drops every node and every item, leaving the list empty.
    pub fn clear(&mut self) {
        while self.pop_head().is_some() {}
    }

    /// Walks the chain and verifies the structural invariants listed at the
    /// top of this file. O(n); intended for tests and debugging.
    pub fn check_invariants(&self) -> bool {
        if self.head.is_null() != self.tail.is_null() {
            return false;
        }
        if self.head.is_null() {
            return self.len == 0;
        }

        unsafe {
            if !(*self.head).prev.is_null() || !(*self.tail).next.is_null() {
                return false;
            }

            let mut count = 0;
            let mut current = self.head;
            let mut last = ptr::null_mut();
            while !current.is_null() {
                if (*current).prev != last {
                    return false;
                }
                count += 1;
                last = current;
                current = (*current).next;
            }

            last == self.tail && count == self.len
        }
    }

    /// Node at `index`. Caller must guarantee `index < len`.
    unsafe fn node_at(&self, index: usize) -> NodePtr<T> {
        debug_assert!(index < self.len);

        let mut current = self.head;
        for _ in 0..index {
            current = (*current).next;
        }
        current
    }

    /// Splices a fresh node holding `item` in front of `node`, which must
    /// be a live member of this chain.
    unsafe fn insert_before_node(&mut self, node: NodePtr<T>, item: T) {
        let new_node = Box::into_raw(Box::new(Node {
            item,
            prev: (*node).prev,
            next: node,
        }));

        if (*node).prev.is_null() {
            self.head = new_node;
        } else {
            (*(*node).prev).next = new_node;
        }

        (*node).prev = new_node;
        self.len += 1;
    }

    /// Splices a fresh node holding `item` behind `node`, which must be a
    /// live member of this chain.
    unsafe fn insert_after_node(&mut self, node: NodePtr<T>, item: T) {
        let new_node = Box::into_raw(Box::new(Node {
            item,
            prev: node,
            next: (*node).next,
        }));

        if (*node).next.is_null() {
            self.tail = new_node;
        } else {
            (*(*node).next).prev = new_node;
        }

        (*node).next = new_node;
        self.len += 1;
    }

    /// Re-links the neighbors of `node` around it, frees the node and
    /// returns its item. `node` must be a live member of this chain.
    unsafe fn unlink(&mut self, node: NodePtr<T>) -> T {
        let boxed = Box::from_raw(node);

        if boxed.prev.is_null() {
            self.head = boxed.next;
        } else {
            (*boxed.prev).next = boxed.next;
        }

        if boxed.next.is_null() {
            self.tail = boxed.prev;
        } else {
            (*boxed.next).prev = boxed.prev;
        }

        self.len -= 1;
        boxed.item
    }
}

impl<T> Default for DoublyLinkedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for DoublyLinkedList<T> {
    fn drop(&mut self) {
        self.clear();
    }
}

impl<T> FromIterator<T> for DoublyLinkedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = DoublyLinkedList::new();
        list.extend(iter);
        list
    }
}

impl<T> Extend<T> for DoublyLinkedList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.push_tail(item);
        }
    }
}

impl<'a, T> IntoIterator for &'a DoublyLinkedList<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: fmt::Debug> fmt::Debug for DoublyLinkedList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

// Ownership of the chain is exclusive, so the list moves between threads
// whenever its items do. Same bounds as std's LinkedList.
unsafe impl<T: Send> Send for DoublyLinkedList<T> {}
unsafe impl<T: Sync> Sync for DoublyLinkedList<T> {}
