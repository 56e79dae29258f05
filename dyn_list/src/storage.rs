#[cfg(not(feature = "std"))]
use alloc::{boxed::Box, vec::Vec};

use crate::list::{Iter, IterMut};
use crate::{ListError, Result};

/// The fixed-size slot block backing a [`List`](crate::List).
///
/// - Physical size never changes in place; resizing builds a new block
/// - A vacant slot is `None`, an occupied one owns its element
#[derive(Debug, Clone)]
pub struct Storage<T> {
    slots: Box<[Option<T>]>,
}

impl<T> Storage<T> {
    /// Zero-capacity storage. Does not allocate.
    pub fn empty() -> Self {
        Storage {
            slots: Box::new([]),
        }
    }

    /// Allocate `capacity` vacant slots.
    ///
    /// # Errors
    ///
    /// Returns `ListError::OutOfResources` if the allocator refuses the block.
    pub fn allocate(capacity: usize) -> Result<Self> {
        if capacity == 0 {
            return Ok(Self::empty());
        }

        let mut slots = Vec::new();
        slots
            .try_reserve_exact(capacity)
            .map_err(|e| ListError::out_of_resources(capacity, e))?;
        slots.resize_with(capacity, || None);

        Ok(Storage {
            slots: slots.into_boxed_slice(),
        })
    }

    /// Take ownership of already-filled slots. Capacity is `slots.len()`.
    pub fn from_slots(slots: Vec<Option<T>>) -> Self {
        Storage {
            slots: slots.into_boxed_slice(),
        }
    }

    /// Physical size in slots
    #[inline]
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Read the element at slot `index`, if occupied
    #[inline]
    pub fn slot(&self, index: usize) -> Option<&T> {
        self.slots.get(index).and_then(Option::as_ref)
    }

    #[inline]
    pub fn slot_mut(&mut self, index: usize) -> Option<&mut T> {
        self.slots.get_mut(index).and_then(Option::as_mut)
    }

    /// Store `value` at `index`, dropping any previous occupant.
    ///
    /// Panics if `index >= capacity()`.
    #[inline]
    pub fn put(&mut self, index: usize, value: T) {
        self.slots[index] = Some(value);
    }

    /// Move the occupant out of `index`, leaving the slot vacant.
    #[inline]
    pub fn take(&mut self, index: usize) -> Option<T> {
        self.slots.get_mut(index).and_then(Option::take)
    }

    /// Drop the occupant of `index`, if any.
    #[inline]
    pub fn vacate(&mut self, index: usize) {
        if let Some(slot) = self.slots.get_mut(index) {
            *slot = None;
        }
    }

    #[inline]
    pub fn is_vacant(&self, index: usize) -> bool {
        self.slot(index).is_none()
    }

    /// Occupants of the first `len` slots, in order.
    pub fn live(&self, len: usize) -> Iter<'_, T> {
        self.slots[..len].iter().flatten()
    }

    pub fn live_mut(&mut self, len: usize) -> IterMut<'_, T> {
        self.slots[..len].iter_mut().flatten()
    }

    /// Replace this block with a fresh one of `capacity` slots, moving the
    /// first `len` occupants across at the same positions.
    ///
    /// Every capacity change goes through here. On failure `self` is untouched.
    ///
    /// # Errors
    ///
    /// Returns `ListError::OutOfResources` if the new block cannot be allocated.
    pub fn reallocate(&mut self, capacity: usize, len: usize) -> Result<()> {
        debug_assert!(len <= capacity && len <= self.capacity());

        let mut fresh = Storage::allocate(capacity)?;
        for (dst, src) in fresh.slots[..len].iter_mut().zip(self.slots[..len].iter_mut()) {
            *dst = src.take();
        }

        log::trace!(
            "reallocated buffer {{from: {}, to: {}, moved: {}}}",
            self.capacity(),
            capacity,
            len
        );
        *self = fresh;
        Ok(())
    }
}
