use std::iter::FusedIterator;
use std::marker::PhantomData;

use crate::list::raw_list::Node;

/// Forward iterator over a [`DoublyLinkedList`](crate::DoublyLinkedList).
///
/// Walks the chain head to tail. The borrow of the list pins the chain for
/// the iterator's lifetime, so nodes cannot be unlinked underneath it.
pub struct Iter<'a, T> {
    current: *const Node<T>,
    remaining: usize,
    marker: PhantomData<&'a Node<T>>,
}

impl<'a, T> Iter<'a, T> {
    pub(crate) fn new(head: *const Node<T>, len: usize) -> Self {
        Iter {
            current: head,
            remaining: len,
            marker: PhantomData,
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.current.is_null() {
            None
        } else {
            unsafe {
                let item = &(*self.current).item;
                self.current = (*self.current).next;
                self.remaining -= 1;
                Some(item)
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}
impl<T> FusedIterator for Iter<'_, T> {}

// Shared references only; same bounds as an &T.
unsafe impl<T: Sync> Send for Iter<'_, T> {}
unsafe impl<T: Sync> Sync for Iter<'_, T> {}
