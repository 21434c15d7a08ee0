use std::cmp::Ordering;
use std::fmt::{self, Debug, Display, Formatter};
use std::hash::{Hash, Hasher};
use std::mem;
use std::ops::{Index, IndexMut};

use super::{Iter, IterMut, Link, Node, tail_link};
#[doc(inline)]
pub use crate::util::error::{IndexOutOfBounds, ListError, NotFound, RangeOutOfBounds};
use crate::util::result::ResultExtension;

/// A singly-linked list of owned elements, carrying a query surface (see the methods from
/// `filter` onward) alongside the usual mutation operations.
///
/// # Time Complexity
/// The representation is a head link and nothing else: no tail pointer, no cached length. Every
/// invariant lives in a single `Option`, which keeps all of the mutation code safe and local, but
/// it means anything tail-relative or length-dependent walks the chain. For this analysis, `n` is
/// the number of elements and `i` is the index in question.
///
/// | Method | Complexity |
/// |-|-|
/// | `add_front` | `O(1)` |
/// | `add` | `O(n)` |
/// | `get` | `O(i)` |
/// | `insert` | `O(i)` |
/// | `remove_at` | `O(i)` |
/// | `set` | `O(i)` |
/// | `count` | `O(n)` |
/// | `sort` | `O(n log n)` |
///
/// If appends dominate, collect through [`FromIterator`] or [`Extend`] instead of calling [`add`]
/// in a loop: those walk to the tail once and push through a cursor.
///
/// # Query results
/// Query operations never mutate their receiver. Operations that produce a list build a *new*
/// list; with `T = &E` or `T = Rc<E>` the clone involved is a pointer copy, which recovers the
/// "new list over the same elements" behavior of a reference-based container.
///
/// [`add`]: List::add
pub struct List<T> {
    pub(crate) head: Link<T>,
}

impl<T> List<T> {
    /// Creates a new List with no elements.
    pub const fn new() -> List<T> {
        List { head: None }
    }

    /// Returns true if the List contains no elements.
    pub const fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    /// Returns the number of elements by walking the whole chain. `O(n)`.
    pub fn count(&self) -> usize {
        self.iter().count()
    }

    /// Appends an element. `O(n)` — see the complexity notes on [`List`].
    pub fn add(&mut self, value: T) {
        *tail_link(&mut self.head) = Node::single(value);
    }

    /// Prepends an element. `O(1)`.
    pub fn add_front(&mut self, value: T) {
        self.head = Some(Box::new(Node {
            value,
            next: self.head.take(),
        }));
    }

    /// Appends every element of `other`, consuming it. The nodes are spliced over, not rebuilt.
    pub fn add_list(&mut self, mut other: List<T>) {
        *tail_link(&mut self.head) = other.head.take();
    }

    /// Appends clones of every element in the slice.
    pub fn add_slice(&mut self, items: &[T])
    where
        T: Clone,
    {
        self.extend(items.iter().cloned());
    }

    /// Returns a reference to the element at `index`, panicking on a failure.
    ///
    /// The same functionality can be achieved using the [`Index`] operator.
    ///
    /// # Panics
    /// Panics if `index` is out of bounds of the List.
    pub fn get(&self, index: usize) -> &T {
        self.try_get(index).throw()
    }

    /// Returns a reference to the element at `index`, returning an [`Err`] on a failure rather
    /// than panicking.
    pub fn try_get(&self, index: usize) -> Result<&T, IndexOutOfBounds> {
        let mut len = 0;
        for value in self.iter() {
            if len == index {
                return Ok(value);
            }
            len += 1;
        }
        Err(IndexOutOfBounds { index, len })
    }

    /// Returns a mutable reference to the element at `index`, panicking on a failure.
    ///
    /// The same functionality can be achieved using the [`IndexMut`] operator.
    ///
    /// # Panics
    /// Panics if `index` is out of bounds of the List.
    pub fn get_mut(&mut self, index: usize) -> &mut T {
        self.try_get_mut(index).throw()
    }

    /// Returns a mutable reference to the element at `index`, returning an [`Err`] on a failure
    /// rather than panicking.
    pub fn try_get_mut(&mut self, index: usize) -> Result<&mut T, IndexOutOfBounds> {
        let mut len = 0;
        for value in self.iter_mut() {
            if len == index {
                return Ok(value);
            }
            len += 1;
        }
        Err(IndexOutOfBounds { index, len })
    }

    /// Inserts an element at `index`. `index == count()` is valid and appends.
    ///
    /// # Panics
    /// Panics if `index` is greater than the length of the List.
    pub fn insert(&mut self, index: usize, value: T) {
        self.try_insert(index, value).throw()
    }

    /// Inserts an element at `index`, returning an [`Err`] rather than panicking if `index` is
    /// greater than the length of the List.
    pub fn try_insert(&mut self, index: usize, value: T) -> Result<(), IndexOutOfBounds> {
        let link = self.seek_link_mut(index)?;
        let rest = link.take();
        *link = Some(Box::new(Node { value, next: rest }));
        Ok(())
    }

    /// Inserts every element of `other` at `index`, consuming it. `index == count()` appends.
    ///
    /// # Panics
    /// Panics if `index` is greater than the length of the List.
    pub fn insert_list(&mut self, index: usize, other: List<T>) {
        self.try_insert_list(index, other).throw()
    }

    /// Inserts every element of `other` at `index`, returning an [`Err`] rather than panicking if
    /// `index` is greater than the length of the List.
    pub fn try_insert_list(
        &mut self,
        index: usize,
        mut other: List<T>,
    ) -> Result<(), IndexOutOfBounds> {
        let link = self.seek_link_mut(index)?;
        let rest = link.take();
        *link = other.head.take();
        *tail_link(link) = rest;
        Ok(())
    }

    /// Removes the first element equal to `item`, returning whether anything was removed.
    /// Absence is a no-op, not an error.
    pub fn remove(&mut self, item: &T) -> bool
    where
        T: PartialEq,
    {
        let mut link = &mut self.head;
        while link.is_some() {
            if link.as_ref().is_some_and(|node| node.value == *item) {
                if let Some(node) = link.take() {
                    *link = node.next;
                }
                return true;
            }
            if let Some(node) = link {
                link = &mut node.next;
            }
        }
        false
    }

    /// Removes every element for which the predicate holds, preserving the relative order of the
    /// survivors. Returns how many elements were removed.
    pub fn remove_all(&mut self, mut pred: impl FnMut(&T) -> bool) -> usize {
        let mut removed = 0;
        let mut link = &mut self.head;
        while link.is_some() {
            // Unlink by taking the node so the cursor stays put and re-tests the spliced-in
            // successor; only a survivor advances it.
            if link.as_ref().is_some_and(|node| pred(&node.value)) {
                if let Some(node) = link.take() {
                    *link = node.next;
                }
                removed += 1;
            } else if let Some(node) = link {
                link = &mut node.next;
            }
        }
        removed
    }

    /// Removes and returns the element at `index`.
    ///
    /// # Panics
    /// Panics if `index` is out of bounds of the List.
    pub fn remove_at(&mut self, index: usize) -> T {
        self.try_remove_at(index).throw()
    }

    /// Removes and returns the element at `index`, returning an [`Err`] on a failure rather than
    /// panicking.
    pub fn try_remove_at(&mut self, index: usize) -> Result<T, IndexOutOfBounds> {
        let link = self.seek_link_mut(index)?;
        match link.take() {
            Some(node) => {
                let node = *node;
                *link = node.next;
                Ok(node.value)
            }
            // The seek stopped at the tail link, so the list has exactly `index` elements.
            None => Err(IndexOutOfBounds { index, len: index }),
        }
    }

    /// Removes `count` elements starting at `index`.
    ///
    /// # Panics
    /// Panics if `index + count` exceeds the length of the List. The bounds are checked before
    /// anything is unlinked, so a failed call leaves the List untouched.
    pub fn remove_range(&mut self, index: usize, count: usize) {
        self.try_remove_range(index, count).throw()
    }

    /// Removes `count` elements starting at `index`, returning an [`Err`] on a failure rather
    /// than panicking. The bounds are checked before anything is unlinked, so a failed call
    /// leaves the List untouched.
    pub fn try_remove_range(&mut self, index: usize, count: usize) -> Result<(), RangeOutOfBounds> {
        self.check_range(index, count)?;
        let link = self
            .seek_link_mut(index)
            .map_err(|err| RangeOutOfBounds { index, count, len: err.len })?;
        for _ in 0..count {
            if let Some(node) = link.take() {
                *link = node.next;
            }
        }
        Ok(())
    }

    /// Replaces the element at `index`, returning the old element. The node count is unchanged.
    ///
    /// # Panics
    /// Panics if `index` is out of bounds of the List.
    pub fn set(&mut self, index: usize, value: T) -> T {
        self.try_set(index, value).throw()
    }

    /// Replaces the element at `index`, returning an [`Err`] on a failure rather than panicking.
    pub fn try_set(&mut self, index: usize, value: T) -> Result<T, IndexOutOfBounds> {
        let link = self.seek_link_mut(index)?;
        match link {
            Some(node) => Ok(mem::replace(&mut node.value, value)),
            None => Err(IndexOutOfBounds { index, len: index }),
        }
    }

    /// Removes every element. Referenced data behind `&E` / `Rc<E>` elements is untouched; only
    /// the nodes (and the elements they own) are dropped.
    pub fn clear(&mut self) {
        // Unlink one node at a time so dropping a long list can't recurse through the chain.
        let mut curr = self.head.take();
        while let Some(mut node) = curr {
            curr = node.next.take();
        }
    }

    /// Reorders the List in place using the supplied comparer. The sort is stable: elements the
    /// comparer considers equal keep their relative order.
    ///
    /// The comparer must define a strict weak ordering for the result to be deterministic.
    pub fn sort<F: FnMut(&T, &T) -> Ordering>(&mut self, mut cmp: F) {
        self.head = merge_sort(self.head.take(), &mut cmp);
    }

    /// Clones every element into a freshly allocated contiguous buffer.
    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.iter().cloned().collect()
    }

    /// Returns an iterator over references to the elements, front to back.
    pub fn iter(&self) -> Iter<'_, T> {
        self.into_iter()
    }

    /// Returns an iterator over mutable references to the elements, front to back.
    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        self.into_iter()
    }
}

impl<T> List<T> {
    /// Walks to the link *at* position `index` — the link whose node holds element `index`, or
    /// the tail link when `index` equals the length (which is what insertion at the end needs).
    /// Fails when `index` exceeds the length.
    fn seek_link_mut(&mut self, index: usize) -> Result<&mut Link<T>, IndexOutOfBounds> {
        let mut link = &mut self.head;
        let mut walked = 0;
        while walked < index {
            match link {
                Some(node) => {
                    link = &mut node.next;
                    walked += 1;
                }
                None => return Err(IndexOutOfBounds { index, len: walked }),
            }
        }
        Ok(link)
    }
}

/// Stable merge sort over the owned node chain. Recursion depth is `O(log n)`; the merge itself
/// is iterative.
fn merge_sort<T, F: FnMut(&T, &T) -> Ordering>(head: Link<T>, cmp: &mut F) -> Link<T> {
    let mut head = head?;
    if head.next.is_none() {
        return Some(head);
    }

    let mut len = 1;
    let mut node = &*head;
    while let Some(next) = &node.next {
        len += 1;
        node = next;
    }

    // Cut the chain after the first half.
    let mut cut = &mut *head;
    for _ in 1..len / 2 {
        match &mut cut.next {
            Some(next) => cut = &mut **next,
            // The cut point is strictly before the end of a chain of length `len`.
            None => unreachable!(),
        }
    }
    let right = cut.next.take();

    let left = merge_sort(Some(head), cmp);
    let right = merge_sort(right, cmp);
    merge(left, right, cmp)
}

fn merge<T, F: FnMut(&T, &T) -> Ordering>(
    mut left: Link<T>,
    mut right: Link<T>,
    cmp: &mut F,
) -> Link<T> {
    let mut merged = None;
    let mut tail = &mut merged;
    loop {
        match (left, right) {
            (None, rest) | (rest, None) => {
                *tail = rest;
                break;
            }
            (Some(mut l), Some(mut r)) => {
                // Ties go left to keep the sort stable.
                if cmp(&l.value, &r.value) == Ordering::Greater {
                    right = r.next.take();
                    left = Some(l);
                    tail = &mut tail.insert(r).next;
                } else {
                    left = l.next.take();
                    right = Some(r);
                    tail = &mut tail.insert(l).next;
                }
            }
        }
    }
    merged
}

impl<T> Index<usize> for List<T> {
    type Output = T;

    fn index(&self, index: usize) -> &Self::Output {
        self.get(index)
    }
}

impl<T> IndexMut<usize> for List<T> {
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        self.get_mut(index)
    }
}

impl<T> FromIterator<T> for List<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = List::new();
        list.extend(iter);
        list
    }
}

impl<T> Extend<T> for List<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        let mut tail = tail_link(&mut self.head);
        for value in iter {
            tail = &mut tail.insert(Box::new(Node { value, next: None })).next;
        }
    }
}

impl<T, const N: usize> From<[T; N]> for List<T> {
    fn from(items: [T; N]) -> Self {
        items.into_iter().collect()
    }
}

impl<T> Default for List<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for List<T> {
    fn drop(&mut self) {
        self.clear();
    }
}

impl<T: Clone> Clone for List<T> {
    fn clone(&self) -> Self {
        self.iter().cloned().collect()
    }
}

impl<T: PartialEq> PartialEq for List<T> {
    fn eq(&self, other: &Self) -> bool {
        let mut a = self.iter();
        let mut b = other.iter();
        loop {
            match (a.next(), b.next()) {
                (None, None) => break true,
                (Some(x), Some(y)) if x == y => {}
                _ => break false,
            }
        }
    }
}

impl<T: Eq> Eq for List<T> {}

impl<T: Hash> Hash for List<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        for value in self.iter() {
            value.hash(state);
        }
        // Terminate variable length hashing sequence.
        0xFF_u8.hash(state);
    }
}

impl<T: Debug> Debug for List<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: Debug> Display for List<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "({})",
            self.iter()
                .map(|i| format!("{i:?}"))
                .collect::<Vec<String>>()
                .join(") -> (")
        )
    }
}
