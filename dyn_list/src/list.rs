use core::fmt;
use core::iter::Flatten;
use core::ops::{Index, IndexMut};
use core::slice;

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

use itertools::Itertools;

use crate::policy::{self, PREVIEW_LIMIT};
use crate::storage::Storage;
use crate::{ListError, Result};

/// Iterator over the live elements of a [`List`].
pub type Iter<'a, T> = Flatten<slice::Iter<'a, Option<T>>>;

/// Mutable iterator over the live elements of a [`List`].
pub type IterMut<'a, T> = Flatten<slice::IterMut<'a, Option<T>>>;

/// Growable array over an owned, fixed-size slot buffer.
///
/// `List<T>` keeps `len` live elements in the first `len` slots of a buffer
/// of `capacity()` slots. The buffer is only ever replaced wholesale: growing,
/// shrinking, `clear` and `remove` build a new block and move the survivors
/// across, while `remove_all` and `remove_at` compact in place.
///
/// # Examples
///
/// ## Basic Usage
///
/// ```
/// use dyn_list::List;
///
/// let mut list = List::new();
///
/// list.push(5).unwrap();
/// list.push(10).unwrap();
///
/// assert_eq!(list.len(), 2);
/// assert_eq!(list.get(0).unwrap(), &5);
///
/// list.set(0, 99).unwrap();
/// assert_eq!(list[0], 99);
/// ```
///
/// ## Capacity Control
///
/// ```
/// use dyn_list::List;
///
/// let mut list = List::<u32>::with_capacity(10).unwrap();
/// list.push(1).unwrap();
///
/// list.trim_excess().unwrap();
/// assert_eq!(list.capacity(), 1);
///
/// // Cannot drop below the live element count
/// assert!(list.set_capacity(0).is_err());
/// ```
#[derive(Clone)]
pub struct List<T> {
    storage: Storage<T>,
    len: usize,
}

impl<T> List<T> {
    /// Creates an empty list with capacity 0. Does not allocate.
    ///
    /// # Examples
    ///
    /// ```
    /// use dyn_list::List;
    ///
    /// let list = List::<String>::new();
    /// assert!(list.is_empty());
    /// assert_eq!(list.capacity(), 0);
    /// ```
    pub fn new() -> Self {
        List {
            storage: Storage::empty(),
            len: 0,
        }
    }

    /// Creates an empty list with exactly `capacity` slots.
    ///
    /// Accepts any integer type; negative values are rejected rather than
    /// wrapped.
    ///
    /// # Errors
    ///
    /// - `ListError::InvalidArgument` if `capacity` is negative or does not fit `usize`
    /// - `ListError::OutOfResources` if the buffer cannot be allocated
    ///
    /// # Examples
    ///
    /// ```
    /// use dyn_list::{ErrorKind, List};
    ///
    /// let list = List::<u8>::with_capacity(5).unwrap();
    /// assert_eq!(list.capacity(), 5);
    /// assert_eq!(list.len(), 0);
    ///
    /// let err = List::<u8>::with_capacity(-1).unwrap_err();
    /// assert_eq!(err.kind(), ErrorKind::InvalidArgument);
    /// ```
    pub fn with_capacity<C: TryInto<usize>>(capacity: C) -> Result<Self> {
        let capacity = capacity.try_into().map_err(|_| ListError::InvalidArgument {
            param: "capacity",
            reason: "capacity is less than 0 or does not fit in usize",
        })?;

        Ok(List {
            storage: Storage::allocate(capacity)?,
            len: 0,
        })
    }

    /// Creates a list holding the elements of `sequence` in iteration order,
    /// with capacity equal to their count.
    ///
    /// # Errors
    ///
    /// - `ListError::InvalidArgument` if `sequence` is `None`
    /// - `ListError::OutOfResources` if the buffer cannot be allocated
    ///
    /// # Examples
    ///
    /// ```
    /// use dyn_list::List;
    ///
    /// let list = List::from_sequence(Some([5, 10, 15])).unwrap();
    /// assert_eq!(list.capacity(), 3);
    /// assert_eq!(list.to_vec(), vec![5, 10, 15]);
    ///
    /// assert!(List::<i32>::from_sequence(None::<Vec<i32>>).is_err());
    /// ```
    pub fn from_sequence<I>(sequence: Option<I>) -> Result<Self>
    where
        I: IntoIterator<Item = T>,
    {
        let sequence = sequence.ok_or(ListError::InvalidArgument {
            param: "sequence",
            reason: "sequence is absent",
        })?;
        Self::try_from_iter(sequence)
    }

    /// Fallible counterpart of `FromIterator`.
    pub fn try_from_iter<I>(iter: I) -> Result<Self>
    where
        I: IntoIterator<Item = T>,
    {
        let iter = iter.into_iter();
        let (lower, _) = iter.size_hint();

        let mut slots = Vec::new();
        slots
            .try_reserve(lower)
            .map_err(|e| ListError::out_of_resources(lower, e))?;
        for value in iter {
            slots
                .try_reserve(1)
                .map_err(|e| ListError::out_of_resources(slots.len() + 1, e))?;
            slots.push(Some(value));
        }

        let len = slots.len();
        Ok(List {
            storage: Storage::from_slots(slots),
            len,
        })
    }

    /// Returns the number of slots in the buffer.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.storage.capacity()
    }

    /// Resizes the buffer to exactly `capacity` slots, keeping every element.
    ///
    /// Setting the current capacity is a no-op.
    ///
    /// # Errors
    ///
    /// - `ListError::InvalidArgument` if `capacity < len()`
    /// - `ListError::OutOfResources` if the new buffer cannot be allocated
    ///
    /// # Examples
    ///
    /// ```
    /// use dyn_list::List;
    ///
    /// let mut list = List::<i32>::new();
    /// list.set_capacity(1).unwrap();
    ///
    /// assert_eq!(list.capacity(), 1);
    /// assert!(list.get(0).is_err());
    /// ```
    pub fn set_capacity(&mut self, capacity: usize) -> Result<()> {
        if capacity == self.capacity() {
            return Ok(());
        }
        if capacity < self.len {
            return Err(ListError::InvalidArgument {
                param: "capacity",
                reason: "capacity is less than the element count",
            });
        }
        self.storage.reallocate(capacity, self.len)
    }

    /// Returns the number of elements in the list.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[inline]
    fn out_of_range(&self, index: usize) -> ListError {
        ListError::IndexOutOfRange {
            index,
            len: self.len,
        }
    }

    /// Returns a reference to the element at `index`.
    ///
    /// # Errors
    ///
    /// Returns `ListError::IndexOutOfRange` if `index >= len()`, even when the
    /// buffer has a slot there.
    pub fn get(&self, index: usize) -> Result<&T> {
        if index >= self.len {
            return Err(self.out_of_range(index));
        }
        self.storage
            .slot(index)
            .ok_or_else(|| self.out_of_range(index))
    }

    /// Returns a mutable reference to the element at `index`.
    ///
    /// # Errors
    ///
    /// Returns `ListError::IndexOutOfRange` if `index >= len()`.
    pub fn get_mut(&mut self, index: usize) -> Result<&mut T> {
        let err = self.out_of_range(index);
        if index >= self.len {
            return Err(err);
        }
        self.storage.slot_mut(index).ok_or(err)
    }

    /// Overwrites the element at `index`, dropping the previous one.
    ///
    /// This is equivalent to `*list.get_mut(index)? = value`.
    ///
    /// # Errors
    ///
    /// Returns `ListError::IndexOutOfRange` if `index >= len()`.
    pub fn set(&mut self, index: usize, value: T) -> Result<()> {
        let slot = self.get_mut(index)?;
        *slot = value;
        Ok(())
    }

    /// Appends an element, growing a full buffer to
    /// `max(capacity * 2, capacity + 4)` slots first.
    ///
    /// # Errors
    ///
    /// Returns `ListError::OutOfResources` if growth is needed and fails; the
    /// list is unchanged in that case.
    ///
    /// # Examples
    ///
    /// ```
    /// use dyn_list::List;
    ///
    /// let mut list = List::with_capacity(1).unwrap();
    /// list.push('a').unwrap();
    /// list.push('b').unwrap(); // 1 -> 5
    ///
    /// assert_eq!(list.capacity(), 5);
    /// assert_eq!(list.len(), 2);
    /// ```
    pub fn push(&mut self, value: T) -> Result<()> {
        if self.len == self.capacity() {
            let grown = policy::grown_capacity(self.capacity())?;
            self.set_capacity(grown)?;
        }
        self.storage.put(self.len, value);
        self.len += 1;
        Ok(())
    }

    /// Appends clones of `values`, growing at most once.
    ///
    /// # Errors
    ///
    /// Returns `ListError::OutOfResources` if the list cannot grow to fit;
    /// nothing is appended in that case.
    pub fn extend_from_slice(&mut self, values: &[T]) -> Result<()>
    where
        T: Clone,
    {
        let needed = self
            .len
            .checked_add(values.len())
            .ok_or_else(|| ListError::capacity_overflow(usize::MAX))?;

        let mut capacity = self.capacity();
        while capacity < needed {
            capacity = policy::grown_capacity(capacity)?;
        }
        self.set_capacity(capacity)?;

        for value in values {
            self.storage.put(self.len, value.clone());
            self.len += 1;
        }
        Ok(())
    }

    /// Drops every element and replaces the buffer with a fresh one of the
    /// same capacity.
    ///
    /// # Errors
    ///
    /// Returns `ListError::OutOfResources` if the fresh buffer cannot be
    /// allocated; the list is unchanged in that case.
    pub fn clear(&mut self) -> Result<()> {
        self.storage = Storage::allocate(self.capacity())?;
        self.len = 0;
        Ok(())
    }

    /// Returns `true` if any element matches `pred`. Stops at the first match.
    pub fn exists<F>(&self, mut pred: F) -> bool
    where
        F: FnMut(&T) -> bool,
    {
        self.iter().any(|value| pred(value))
    }

    /// Returns `true` if every element matches `pred`, and for an empty list.
    /// Stops at the first mismatch.
    pub fn true_for_all<F>(&self, mut pred: F) -> bool
    where
        F: FnMut(&T) -> bool,
    {
        self.iter().all(|value| pred(value))
    }

    /// Removes the first element equal to `value`.
    ///
    /// Elements after the match move down one position in a freshly allocated
    /// buffer of the same capacity. Returns `Ok(false)` without touching the
    /// list when nothing matches.
    ///
    /// # Errors
    ///
    /// Returns `ListError::OutOfResources` if the rebuilt buffer cannot be
    /// allocated; the list is unchanged in that case.
    ///
    /// # Examples
    ///
    /// ```
    /// use dyn_list::List;
    ///
    /// let mut list = List::from(vec![5, 10, 5, 2, 8]);
    ///
    /// assert!(list.remove(&5).unwrap());
    /// assert_eq!(list.to_vec(), vec![10, 5, 2, 8]);
    /// assert!(!list.remove(&42).unwrap());
    /// ```
    pub fn remove(&mut self, value: &T) -> Result<bool>
    where
        T: PartialEq,
    {
        let Some(found) = self.iter().position(|v| v == value) else {
            return Ok(false);
        };

        let mut rebuilt = Storage::allocate(self.capacity())?;
        for index in 0..self.len {
            let Some(element) = self.storage.take(index) else {
                continue;
            };
            if index < found {
                rebuilt.put(index, element);
            } else if index > found {
                rebuilt.put(index - 1, element);
            }
        }

        self.storage = rebuilt;
        self.len -= 1;
        Ok(true)
    }

    /// Removes every element matching `pred`, keeping the order of the rest,
    /// and returns how many were removed.
    ///
    /// Compacts in place in a single pass over the positions that were live
    /// on entry, so `pred` runs exactly once per original element. Every slot
    /// vacated by the pass is left empty; capacity is unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// use dyn_list::List;
    ///
    /// let mut list = List::from(vec![5, 10, 5, 2, 8, 8, 20, 11, 50, 36, 5, 8, 12]);
    ///
    /// assert_eq!(list.remove_all(|v| *v > 10), 5);
    /// assert_eq!(list.to_vec(), vec![5, 10, 5, 2, 8, 8, 5, 8]);
    /// assert_eq!(list.capacity(), 13);
    ///
    /// assert_eq!(list.remove_all(|v| *v > 10), 0);
    /// ```
    pub fn remove_all<F>(&mut self, mut pred: F) -> usize
    where
        F: FnMut(&T) -> bool,
    {
        let original_len = self.len;
        let mut dest = 0;
        let mut removed = 0;

        for index in 0..original_len {
            if self.storage.slot(index).is_some_and(&mut pred) {
                self.storage.vacate(index);
                removed += 1;
                self.len -= 1;
                continue;
            }

            if dest != index {
                if let Some(element) = self.storage.take(index) {
                    self.storage.put(dest, element);
                }
            }
            dest += 1;
        }

        if removed > 0 {
            log::debug!("remove_all removed {removed} of {original_len} elements");
        }
        removed
    }

    /// Removes and returns the element at `index`, shifting later elements
    /// down by one. Capacity is unchanged.
    ///
    /// # Errors
    ///
    /// Returns `ListError::IndexOutOfRange` if `index >= len()`.
    ///
    /// # Examples
    ///
    /// ```
    /// use dyn_list::List;
    ///
    /// let mut list = List::from(vec![5, 10, 15]);
    ///
    /// assert_eq!(list.remove_at(0).unwrap(), 5);
    /// assert_eq!(list.len(), 2);
    /// assert_eq!(list[0], 10);
    /// assert_eq!(list.capacity(), 3);
    /// ```
    pub fn remove_at(&mut self, index: usize) -> Result<T> {
        if index >= self.len {
            return Err(self.out_of_range(index));
        }
        let removed = self
            .storage
            .take(index)
            .ok_or_else(|| self.out_of_range(index))?;

        // low-to-high: every source slot sits above its destination
        for src in index + 1..self.len {
            if let Some(element) = self.storage.take(src) {
                self.storage.put(src - 1, element);
            }
        }
        self.len -= 1;
        Ok(removed)
    }

    /// Copies the live elements into a new, independently owned `Vec`.
    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.iter().cloned().collect()
    }

    /// Shrinks capacity to `len()` when less than 90% of the buffer is in use.
    ///
    /// A zero-capacity list is left alone.
    ///
    /// # Errors
    ///
    /// Returns `ListError::OutOfResources` if the smaller buffer cannot be
    /// allocated.
    pub fn trim_excess(&mut self) -> Result<()> {
        if policy::should_trim(self.len, self.capacity()) {
            log::debug!(
                "trimming {{len: {}, capacity: {}}}",
                self.len,
                self.capacity()
            );
            self.set_capacity(self.len)?;
        }
        Ok(())
    }

    /// Returns an iterator over the live elements.
    ///
    /// # Examples
    ///
    /// ```
    /// use dyn_list::List;
    ///
    /// let list = List::from(vec![1, 2, 3]);
    /// let total: i32 = list.iter().sum();
    /// assert_eq!(total, 6);
    /// ```
    pub fn iter(&self) -> Iter<'_, T> {
        self.storage.live(self.len)
    }

    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        self.storage.live_mut(self.len)
    }
}

// Implement Index for convenient access
impl<T> Index<usize> for List<T> {
    type Output = T;

    fn index(&self, index: usize) -> &Self::Output {
        self.get(index).expect("index out of range")
    }
}

impl<T> IndexMut<usize> for List<T> {
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        self.get_mut(index).expect("index out of range")
    }
}

impl<T> Default for List<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Debug> fmt::Debug for List<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

/// `{ a, b, c }` over at most the first ten elements.
impl<T: fmt::Display> fmt::Display for List<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{ {} }}", self.iter().take(PREVIEW_LIMIT).format(", "))
    }
}

impl<T: PartialEq> PartialEq for List<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for List<T> {}

impl<T> From<Vec<T>> for List<T> {
    fn from(values: Vec<T>) -> Self {
        let slots: Vec<Option<T>> = values.into_iter().map(Some).collect();
        let len = slots.len();
        List {
            storage: Storage::from_slots(slots),
            len,
        }
    }
}

impl<T: Clone> From<&[T]> for List<T> {
    fn from(values: &[T]) -> Self {
        Self::from(values.to_vec())
    }
}

impl<T, const N: usize> From<[T; N]> for List<T> {
    fn from(values: [T; N]) -> Self {
        Self::from(Vec::from(values))
    }
}

impl<T> FromIterator<T> for List<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        match Self::try_from_iter(iter) {
            Ok(list) => list,
            Err(e) => panic!("{e}"),
        }
    }
}

impl<T> Extend<T> for List<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            if let Err(e) = self.push(value) {
                panic!("{e}");
            }
        }
    }
}

impl<'a, T> IntoIterator for &'a List<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut List<T> {
    type Item = &'a mut T;
    type IntoIter = IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ErrorKind;
    use std::rc::Rc;

    fn sample() -> List<i32> {
        List::from(vec![5, 10, 5, 2, 8, 8, 20, 11, 50, 36, 5, 8, 12])
    }

    #[test]
    fn push_and_read() -> Result<(), ListError> {
        let mut list = List::new();
        assert!(list.is_empty());

        list.push(1)?;
        list.push(2)?;
        assert_eq!(list.len(), 2);
        assert_eq!(list.get(0)?, &1);
        assert_eq!(list.get(1)?, &2);

        list.set(1, 3)?;
        assert_eq!(list.get(1)?, &3);

        *list.get_mut(0)? += 10;
        assert_eq!(list[0], 11);

        Ok(())
    }

    #[test]
    fn growth_sequence() -> Result<(), ListError> {
        let mut list = List::new();
        let mut seen = Vec::new();
        for v in 0..20 {
            list.push(v)?;
            if seen.last() != Some(&list.capacity()) {
                seen.push(list.capacity());
            }
        }
        assert_eq!(seen, vec![4, 8, 16, 32]);
        Ok(())
    }

    #[test]
    fn slots_beyond_len_are_not_readable() -> Result<(), ListError> {
        let mut list = List::<i32>::with_capacity(4)?;
        list.push(1)?;

        let err = list.get(1).unwrap_err();
        assert_eq!(err, ListError::IndexOutOfRange { index: 1, len: 1 });
        assert!(list.get_mut(3).is_err());
        assert!(list.set(2, 9).is_err());
        Ok(())
    }

    #[test]
    fn negative_capacity_is_rejected() {
        let err = List::<i32>::with_capacity(-5i64).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidArgument);
    }

    #[test]
    fn capacity_below_len_is_rejected() -> Result<(), ListError> {
        let mut list = sample();
        let err = list.set_capacity(3).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidArgument);
        assert_eq!(list.capacity(), 13);
        assert_eq!(list.len(), 13);

        list.set_capacity(13)?;
        list.set_capacity(20)?;
        assert_eq!(list.capacity(), 20);
        assert_eq!(list, sample());
        Ok(())
    }

    #[test]
    fn clear_keeps_capacity_and_releases_elements() -> Result<(), ListError> {
        let tracker = Rc::new(());
        let mut list = List::with_capacity(6)?;
        for _ in 0..5 {
            list.push(Rc::clone(&tracker))?;
        }
        assert_eq!(Rc::strong_count(&tracker), 6);

        list.clear()?;
        assert_eq!(Rc::strong_count(&tracker), 1);
        assert_eq!(list.len(), 0);
        assert_eq!(list.capacity(), 6);
        Ok(())
    }

    #[test]
    fn remove_first_match_only() -> Result<(), ListError> {
        let mut list = List::from(vec![5, 10, 5, 2, 8]);
        assert!(list.remove(&5)?);
        assert_eq!(list.to_vec(), vec![10, 5, 2, 8]);
        assert_eq!(list.capacity(), 5);

        assert!(!list.remove(&99)?);
        assert_eq!(list.len(), 4);
        Ok(())
    }

    #[test]
    fn remove_last_element() -> Result<(), ListError> {
        let mut list = List::from(vec![1, 2, 3]);
        assert!(list.remove(&3)?);
        assert_eq!(list.to_vec(), vec![1, 2]);
        assert!(list.get(2).is_err());
        Ok(())
    }

    #[test]
    fn remove_all_vacates_tail() {
        let mut list = sample();
        assert_eq!(list.remove_all(|v| *v > 10), 5);
        assert_eq!(list.len(), 8);
        assert_eq!(list.capacity(), 13);
        assert!((8..13).all(|i| list.storage.is_vacant(i)));
    }

    #[test]
    fn remove_all_calls_predicate_once_per_element() {
        let mut list = sample();
        let mut calls = 0;
        list.remove_all(|v| {
            calls += 1;
            *v % 2 == 0
        });
        assert_eq!(calls, 13);
        assert_eq!(list.to_vec(), vec![5, 5, 11, 5]);
    }

    #[test]
    fn remove_all_releases_elements() {
        let tracker = Rc::new(());
        let mut list: List<Rc<()>> = (0..4).map(|_| Rc::clone(&tracker)).collect();

        assert_eq!(list.remove_all(|_| true), 4);
        assert_eq!(Rc::strong_count(&tracker), 1);
        assert!(list.is_empty());
        assert_eq!(list.capacity(), 4);
    }

    #[test]
    fn remove_at_shifts_left() -> Result<(), ListError> {
        let mut list = List::from(vec![5, 10, 15, 20]);
        assert_eq!(list.remove_at(1)?, 10);
        assert_eq!(list.to_vec(), vec![5, 15, 20]);
        assert_eq!(list.capacity(), 4);

        let err = list.remove_at(3).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::IndexOutOfRange);
        assert_eq!(list.len(), 3);
        Ok(())
    }

    #[test]
    fn trim_excess_shrinks_sparse_buffers() -> Result<(), ListError> {
        let mut list = List::with_capacity(10)?;
        for v in 0..9 {
            list.push(v)?;
        }
        list.trim_excess()?;
        assert_eq!(list.capacity(), 10);

        list.remove_at(0)?;
        list.trim_excess()?;
        assert_eq!(list.capacity(), 8);
        assert_eq!(list.to_vec(), (1..9).collect::<Vec<_>>());
        Ok(())
    }

    #[test]
    fn trim_excess_on_empty_is_noop() -> Result<(), ListError> {
        let mut list = List::<u8>::new();
        list.trim_excess()?;
        assert_eq!(list.capacity(), 0);
        Ok(())
    }

    #[test]
    fn predicates() {
        let list = sample();
        assert!(list.exists(|v| *v == 50));
        assert!(!list.exists(|v| *v > 50));
        assert!(list.true_for_all(|v| *v > 0));
        assert!(!list.true_for_all(|v| *v < 50));
        assert!(List::<i32>::new().true_for_all(|_| false));
    }

    #[test]
    fn display_previews_ten_elements() {
        assert_eq!(
            sample().to_string(),
            "{ 5, 10, 5, 2, 8, 8, 20, 11, 50, 36 }"
        );
        assert_eq!(List::from(vec![1, 2, 3]).to_string(), "{ 1, 2, 3 }");
        assert_eq!(List::<i32>::new().to_string(), "{  }");
    }

    #[test]
    fn to_vec_is_independent() -> Result<(), ListError> {
        let mut list = List::from(vec![1, 2, 3]);
        let mut copy = list.to_vec();
        copy[0] = 100;
        list.set(1, 200)?;

        assert_eq!(copy, vec![100, 2, 3]);
        assert_eq!(list.to_vec(), vec![1, 200, 3]);
        Ok(())
    }

    #[test]
    fn extend_from_slice_grows_once() -> Result<(), ListError> {
        let mut list = List::from(vec![1]);
        list.extend_from_slice(&[2, 3, 4, 5, 6])?;
        // 1 -> 5 -> 10, applied as a single reallocation
        assert_eq!(list.capacity(), 10);
        assert_eq!(list.to_vec(), vec![1, 2, 3, 4, 5, 6]);
        Ok(())
    }

    #[test]
    fn iterators() {
        let mut list = List::from([1, 2, 3]);
        for v in &mut list {
            *v *= 2;
        }
        let doubled: Vec<i32> = list.iter().copied().collect();
        assert_eq!(doubled, vec![2, 4, 6]);

        list.extend([7, 8]);
        assert_eq!(format!("{list:?}"), "[2, 4, 6, 7, 8]");
    }
}
