use std::cmp::Ordering;
use std::ops::Add;

use super::List;
use crate::util::error::{NotFound, RangeOutOfBounds};
use crate::util::result::ResultExtension;

/// The query surface. None of these mutate the receiver; operations that produce a list build a
/// new one element by element.
///
/// Comparers must define a strict weak ordering and equality closures must be an equivalence
/// relation (reflexive, symmetric, transitive) for the set and ordering operations to be
/// well-defined — the library cannot check this, it can only promise determinism when the caller
/// holds up that end.
impl<T> List<T> {
    /// Returns a new list holding clones of the elements for which the predicate holds, in order.
    pub fn filter(&self, mut pred: impl FnMut(&T) -> bool) -> List<T>
    where
        T: Clone,
    {
        self.iter().filter(|&item| pred(item)).cloned().collect()
    }

    /// Projects every element through the selector into a new list.
    pub fn select<U>(&self, selector: impl FnMut(&T) -> U) -> List<U> {
        self.iter().map(selector).collect()
    }

    /// Projects every element to a sub-list and concatenates the sub-lists in element order.
    pub fn select_many<U>(&self, selector: impl FnMut(&T) -> List<U>) -> List<U> {
        self.iter().flat_map(selector).collect()
    }

    /// Returns a new list keeping only the first occurrence of each element.
    pub fn distinct(&self) -> List<T>
    where
        T: Clone + PartialEq,
    {
        self.distinct_by(|a, b| a == b)
    }

    /// Returns a new list keeping only the first occurrence of each equivalence class defined by
    /// the supplied equality closure.
    pub fn distinct_by(&self, mut eq: impl FnMut(&T, &T) -> bool) -> List<T>
    where
        T: Clone,
    {
        let mut unique = List::new();
        for item in self.iter() {
            if !unique.contains_by(item, &mut eq) {
                unique.add(item.clone());
            }
        }
        unique
    }

    /// Set union: the distinct elements of `self` followed by the elements of `other` not already
    /// present. First-occurrence order is preserved.
    pub fn union(&self, other: &List<T>) -> List<T>
    where
        T: Clone + PartialEq,
    {
        self.union_by(other, |a, b| a == b)
    }

    /// Set union with a caller-supplied equality closure instead of `PartialEq`.
    pub fn union_by(&self, other: &List<T>, mut eq: impl FnMut(&T, &T) -> bool) -> List<T>
    where
        T: Clone,
    {
        let mut result = self.distinct_by(&mut eq);
        for item in other.iter() {
            if !result.contains_by(item, &mut eq) {
                result.add(item.clone());
            }
        }
        result
    }

    /// Set intersection: the distinct elements of `self` that also appear in `other`, in
    /// first-occurrence order.
    pub fn intersect(&self, other: &List<T>) -> List<T>
    where
        T: Clone + PartialEq,
    {
        self.intersect_by(other, |a, b| a == b)
    }

    /// Set intersection with a caller-supplied equality closure instead of `PartialEq`.
    pub fn intersect_by(&self, other: &List<T>, mut eq: impl FnMut(&T, &T) -> bool) -> List<T>
    where
        T: Clone,
    {
        let mut result = List::new();
        for item in self.iter() {
            if other.contains_by(item, &mut eq) && !result.contains_by(item, &mut eq) {
                result.add(item.clone());
            }
        }
        result
    }

    /// Set difference: the distinct elements of `self` that do not appear in `other`, in
    /// first-occurrence order.
    pub fn except(&self, other: &List<T>) -> List<T>
    where
        T: Clone + PartialEq,
    {
        self.except_by(other, |a, b| a == b)
    }

    /// Set difference with a caller-supplied equality closure instead of `PartialEq`.
    pub fn except_by(&self, other: &List<T>, mut eq: impl FnMut(&T, &T) -> bool) -> List<T>
    where
        T: Clone,
    {
        let mut result = List::new();
        for item in self.iter() {
            if !other.contains_by(item, &mut eq) && !result.contains_by(item, &mut eq) {
                result.add(item.clone());
            }
        }
        result
    }

    /// Non-destructive sort: returns a new list ordered ascending by the comparer, with the same
    /// stability guarantee as [`sort`](List::sort).
    pub fn order(&self, cmp: impl FnMut(&T, &T) -> Ordering) -> List<T>
    where
        T: Clone,
    {
        let mut sorted: List<T> = self.iter().cloned().collect();
        sorted.sort(cmp);
        sorted
    }

    /// Non-destructive descending sort. Still stable: elements the comparer considers equal keep
    /// their original relative order.
    pub fn order_descending(&self, mut cmp: impl FnMut(&T, &T) -> Ordering) -> List<T>
    where
        T: Clone,
    {
        let mut sorted: List<T> = self.iter().cloned().collect();
        sorted.sort(|a, b| cmp(b, a));
        sorted
    }

    /// Returns a new list with the elements in reverse order. The receiver is unmodified.
    pub fn reverse(&self) -> List<T>
    where
        T: Clone,
    {
        let mut reversed = List::new();
        for item in self.iter() {
            reversed.add_front(item.clone());
        }
        reversed
    }

    /// Returns a new list in which the `count` elements starting at `index` appear in reverse
    /// order and everything else keeps its position.
    ///
    /// # Panics
    /// Panics if `index + count` exceeds the length of the List.
    pub fn reverse_range(&self, index: usize, count: usize) -> List<T>
    where
        T: Clone,
    {
        self.try_reverse_range(index, count).throw()
    }

    /// Like [`reverse_range`](List::reverse_range), but returns an [`Err`] on an invalid range
    /// rather than panicking.
    pub fn try_reverse_range(
        &self,
        index: usize,
        count: usize,
    ) -> Result<List<T>, RangeOutOfBounds>
    where
        T: Clone,
    {
        self.check_range(index, count)?;
        let mut reversed: List<T> = self.iter().take(index).cloned().collect();
        let mut middle = List::new();
        for item in self.iter().skip(index).take(count) {
            middle.add_front(item.clone());
        }
        reversed.add_list(middle);
        reversed.extend(self.iter().skip(index + count).cloned());
        Ok(reversed)
    }

    /// Left-fold over the elements, seeded with the first element. There is no identity element
    /// to fall back on, so this is only defined for non-empty lists.
    ///
    /// # Panics
    /// Panics if the List is empty.
    pub fn aggregate(&self, f: impl FnMut(T, &T) -> T) -> T
    where
        T: Clone,
    {
        let mut iter = self.iter();
        let seed = iter.next().expect("Cannot aggregate an empty list!").clone();
        iter.fold(seed, f)
    }

    /// Sums the selector's projection of every element.
    ///
    /// # Panics
    /// Panics if the List is empty — there is no zero value to return.
    pub fn sum<S: Add<Output = S>>(&self, mut selector: impl FnMut(&T) -> S) -> S {
        let mut iter = self.iter();
        let seed = selector(iter.next().expect("Cannot sum an empty list!"));
        iter.fold(seed, |acc, item| acc + selector(item))
    }

    /// Arithmetic mean of the selector's projection of every element.
    ///
    /// # Panics
    /// Panics if the List is empty.
    pub fn average(&self, mut selector: impl FnMut(&T) -> f64) -> f64 {
        let mut count = 0_usize;
        let total: f64 = self
            .iter()
            .map(|item| {
                count += 1;
                selector(item)
            })
            .sum();
        assert!(count > 0, "Cannot average an empty list!");
        total / count as f64
    }

    /// The least element by the comparer. Of equal minima, the earliest wins.
    ///
    /// # Panics
    /// Panics if the List is empty.
    pub fn min(&self, mut cmp: impl FnMut(&T, &T) -> Ordering) -> &T {
        let mut iter = self.iter();
        let mut best = iter.next().expect("Cannot take the minimum of an empty list!");
        for item in iter {
            if cmp(item, best) == Ordering::Less {
                best = item;
            }
        }
        best
    }

    /// The greatest element by the comparer. Of equal maxima, the earliest wins.
    ///
    /// # Panics
    /// Panics if the List is empty.
    pub fn max(&self, mut cmp: impl FnMut(&T, &T) -> Ordering) -> &T {
        let mut iter = self.iter();
        let mut best = iter.next().expect("Cannot take the maximum of an empty list!");
        for item in iter {
            if cmp(item, best) == Ordering::Greater {
                best = item;
            }
        }
        best
    }

    /// The first element.
    ///
    /// # Panics
    /// Panics if the List is empty; see [`try_first`](List::try_first).
    pub fn first(&self) -> &T {
        self.try_first().throw()
    }

    /// The first element, or a typed not-found error when the List is empty.
    pub fn try_first(&self) -> Result<&T, NotFound> {
        self.iter().next().ok_or(NotFound)
    }

    /// The first element for which the predicate holds.
    ///
    /// # Panics
    /// Panics if nothing matches; see [`try_first_by`](List::try_first_by).
    pub fn first_by(&self, pred: impl FnMut(&T) -> bool) -> &T {
        self.try_first_by(pred).throw()
    }

    /// The first element for which the predicate holds, or a typed not-found error.
    pub fn try_first_by(&self, mut pred: impl FnMut(&T) -> bool) -> Result<&T, NotFound> {
        self.iter().find(|&item| pred(item)).ok_or(NotFound)
    }

    /// The last element.
    ///
    /// # Panics
    /// Panics if the List is empty; see [`try_last`](List::try_last).
    pub fn last(&self) -> &T {
        self.try_last().throw()
    }

    /// The last element, or a typed not-found error when the List is empty.
    pub fn try_last(&self) -> Result<&T, NotFound> {
        self.iter().last().ok_or(NotFound)
    }

    /// The last element for which the predicate holds.
    ///
    /// # Panics
    /// Panics if nothing matches; see [`try_last_by`](List::try_last_by).
    pub fn last_by(&self, pred: impl FnMut(&T) -> bool) -> &T {
        self.try_last_by(pred).throw()
    }

    /// The last element for which the predicate holds, or a typed not-found error.
    pub fn try_last_by(&self, mut pred: impl FnMut(&T) -> bool) -> Result<&T, NotFound> {
        let mut found = None;
        for item in self.iter() {
            if pred(item) {
                found = Some(item);
            }
        }
        found.ok_or(NotFound)
    }

    /// Counts the elements for which the predicate holds.
    pub fn count_by(&self, mut pred: impl FnMut(&T) -> bool) -> usize {
        self.iter().filter(|&item| pred(item)).count()
    }

    /// True if the List has at least one element. `O(1)`, unlike [`count`](List::count).
    pub fn any(&self) -> bool {
        !self.is_empty()
    }

    /// True if the predicate holds for at least one element. Short-circuits.
    pub fn any_by(&self, mut pred: impl FnMut(&T) -> bool) -> bool {
        self.iter().any(|item| pred(item))
    }

    /// True if the predicate holds for every element (vacuously true when empty). Short-circuits.
    pub fn all(&self, mut pred: impl FnMut(&T) -> bool) -> bool {
        self.iter().all(|item| pred(item))
    }

    /// The first `count` elements (fewer if the list is shorter).
    pub fn take(&self, count: usize) -> List<T>
    where
        T: Clone,
    {
        self.iter().take(count).cloned().collect()
    }

    /// The last `count` elements (fewer if the list is shorter).
    pub fn take_last(&self, count: usize) -> List<T>
    where
        T: Clone,
    {
        self.skip(self.count().saturating_sub(count))
    }

    /// Elements from the front for as long as the predicate holds; the predicate also receives
    /// the running index.
    pub fn take_while(&self, mut pred: impl FnMut(&T, usize) -> bool) -> List<T>
    where
        T: Clone,
    {
        self.iter()
            .enumerate()
            .take_while(|&(index, item)| pred(item, index))
            .map(|(_, item)| item.clone())
            .collect()
    }

    /// Everything after the first `count` elements.
    pub fn skip(&self, count: usize) -> List<T>
    where
        T: Clone,
    {
        self.iter().skip(count).cloned().collect()
    }

    /// Everything except the last `count` elements.
    pub fn skip_last(&self, count: usize) -> List<T>
    where
        T: Clone,
    {
        self.take(self.count().saturating_sub(count))
    }

    /// Drops elements from the front for as long as the predicate holds, then keeps the rest; the
    /// predicate also receives the running index.
    pub fn skip_while(&self, mut pred: impl FnMut(&T, usize) -> bool) -> List<T>
    where
        T: Clone,
    {
        self.iter()
            .enumerate()
            .skip_while(|&(index, item)| pred(item, index))
            .map(|(_, item)| item.clone())
            .collect()
    }

    /// Partitions the list into sub-lists of `size` elements; the final chunk may be shorter. The
    /// number of chunks is the result's `count()`.
    ///
    /// # Panics
    /// Panics if `size` is zero — no meaningful partition exists.
    pub fn chunk(&self, size: usize) -> List<List<T>>
    where
        T: Clone,
    {
        assert!(size > 0, "Cannot chunk a list into zero-sized chunks!");
        let mut iter = self.iter();
        std::iter::from_fn(|| {
            let chunk: List<T> = iter.by_ref().take(size).cloned().collect();
            (!chunk.is_empty()).then_some(chunk)
        })
        .collect()
    }

    /// A new list holding the elements of `self` followed by the elements of `other`.
    pub fn concat(&self, other: &List<T>) -> List<T>
    where
        T: Clone,
    {
        self.iter().chain(other.iter()).cloned().collect()
    }

    /// Pairs elements positionally, stopping at the shorter list's length. Compose with
    /// [`select`](List::select) to combine the pairs into something else.
    pub fn zip<U: Clone>(&self, other: &List<U>) -> List<(T, U)>
    where
        T: Clone,
    {
        self.iter()
            .zip(other.iter())
            .map(|(a, b)| (a.clone(), b.clone()))
            .collect()
    }

    /// Relational inner join: for every pair whose keys are equal, the result selector produces
    /// one output element. Unmatched elements on either side are dropped. Output order is outer
    /// order, then inner order per outer element.
    pub fn join<U, K: PartialEq, V>(
        &self,
        other: &List<U>,
        outer_key: impl FnMut(&T) -> K,
        inner_key: impl FnMut(&U) -> K,
        result: impl FnMut(&T, &U) -> V,
    ) -> List<V> {
        self.join_by(other, outer_key, inner_key, |a, b| a == b, result)
    }

    /// Inner join with a caller-supplied key-equality closure instead of `PartialEq`.
    pub fn join_by<U, K, V>(
        &self,
        other: &List<U>,
        mut outer_key: impl FnMut(&T) -> K,
        mut inner_key: impl FnMut(&U) -> K,
        mut key_eq: impl FnMut(&K, &K) -> bool,
        mut result: impl FnMut(&T, &U) -> V,
    ) -> List<V> {
        // Buffered through a Vec so the output is built without re-walking the result's tail for
        // every matched pair.
        let mut matched = Vec::new();
        for outer in self.iter() {
            let key = outer_key(outer);
            for inner in other.iter() {
                if key_eq(&key, &inner_key(inner)) {
                    matched.push(result(outer, inner));
                }
            }
        }
        matched.into_iter().collect()
    }

    /// Element-wise comparison of two lists by the supplied equality closure. Returns false as
    /// soon as the lists disagree — including the moment one of them ends early.
    pub fn sequence_equal(&self, other: &List<T>, mut eq: impl FnMut(&T, &T) -> bool) -> bool {
        let mut a = self.iter();
        let mut b = other.iter();
        loop {
            match (a.next(), b.next()) {
                (None, None) => break true,
                (Some(x), Some(y)) if eq(x, y) => {}
                _ => break false,
            }
        }
    }

    /// True if an element equal to `item` is present.
    pub fn contains(&self, item: &T) -> bool
    where
        T: PartialEq,
    {
        self.contains_by(item, |a, b| a == b)
    }

    /// True if an element the closure considers equal to `item` is present.
    pub fn contains_by(&self, item: &T, mut eq: impl FnMut(&T, &T) -> bool) -> bool {
        self.iter().any(|other| eq(other, item))
    }

    /// Index of the first element equal to `item`; `None` is the not-found sentinel.
    pub fn index_of(&self, item: &T) -> Option<usize>
    where
        T: PartialEq,
    {
        self.find_index(|other| other == item)
    }

    /// Index of the last element equal to `item`; `None` is the not-found sentinel.
    pub fn last_index_of(&self, item: &T) -> Option<usize>
    where
        T: PartialEq,
    {
        self.find_last_index(|other| other == item)
    }

    /// Index of the first element for which the predicate holds.
    pub fn find_index(&self, mut pred: impl FnMut(&T) -> bool) -> Option<usize> {
        self.iter().position(|item| pred(item))
    }

    /// Index of the last element for which the predicate holds.
    pub fn find_last_index(&self, mut pred: impl FnMut(&T) -> bool) -> Option<usize> {
        let mut found = None;
        for (index, item) in self.iter().enumerate() {
            if pred(item) {
                found = Some(index);
            }
        }
        found
    }

    /// Extracts the sub-list of `count` elements starting at `index`.
    ///
    /// # Panics
    /// Panics if `index + count` exceeds the length of the List.
    pub fn get_range(&self, index: usize, count: usize) -> List<T>
    where
        T: Clone,
    {
        self.try_get_range(index, count).throw()
    }

    /// Like [`get_range`](List::get_range), but returns an [`Err`] on an invalid range rather
    /// than panicking.
    pub fn try_get_range(&self, index: usize, count: usize) -> Result<List<T>, RangeOutOfBounds>
    where
        T: Clone,
    {
        self.check_range(index, count)?;
        Ok(self.iter().skip(index).take(count).cloned().collect())
    }

    /// Validates that the `count` elements starting at `index` all exist. Shared by every
    /// range-taking operation so the bounds rule lives in one place.
    pub(super) fn check_range(&self, index: usize, count: usize) -> Result<(), RangeOutOfBounds> {
        let len = self.count();
        match index.checked_add(count) {
            Some(end) if end <= len => Ok(()),
            _ => Err(RangeOutOfBounds { index, count, len }),
        }
    }
}
