use core::array;
use core::fmt;
use core::ops::{Deref, DerefMut};
use core::slice;

use crate::error::FixVecError;

/// A vector whose capacity is fixed at definition time.
///
/// The backing storage is an inline `[T; N]`, so a `FixVec` lives wherever
/// you put it: on the stack, in a `static`, or embedded in another struct.
/// Elements never relocate for the lifetime of the vector, which makes
/// pointers and slices into it stable across every operation below.
///
/// All `N` slots are initialized up front (from `T::default()`), and a slot
/// is never torn down early: [`pop`](Self::pop) and [`clear`](Self::clear)
/// only move the length fence, leaving stale values in place until a later
/// write overwrites them. The live content of the vector is always the
/// prefix `..len`, and that prefix is what slicing, iteration, equality,
/// and `Debug` operate on.
///
/// Growing past `N` is an error, never a reallocation:
///
/// ```
/// use fixcap::{FixVec, FixVecError};
///
/// let mut ports: FixVec<u16, 2> = FixVec::new();
/// ports.push(80).unwrap();
/// ports.push(443).unwrap();
/// let err = ports.push(8080).unwrap_err();
/// assert_eq!(err, FixVecError::CapacityExceeded { requested: 3, capacity: 2 });
/// ```
#[derive(Clone)]
pub struct FixVec<T, const N: usize> {
    data: [T; N],
    len: usize,
}

impl<T: Default, const N: usize> FixVec<T, N> {
    /// Creates an empty vector with all `N` slots default-initialized.
    ///
    /// ```
    /// use fixcap::FixVec;
    ///
    /// let names: FixVec<&str, 4> = FixVec::new();
    /// assert!(names.is_empty());
    /// assert_eq!(names.capacity(), 4);
    /// ```
    #[must_use]
    pub fn new() -> Self {
        Self {
            data: array::from_fn(|_| T::default()),
            len: 0,
        }
    }

    /// Creates a vector holding a copy of `values`.
    ///
    /// Slots past `values.len()` are default-initialized.
    ///
    /// # Errors
    ///
    /// Returns [`FixVecError::CapacityExceeded`] if `values` holds more
    /// than `N` elements.
    pub fn from_slice(values: &[T]) -> Result<Self, FixVecError>
    where
        T: Clone,
    {
        if values.len() > N {
            return Err(FixVecError::CapacityExceeded {
                requested: values.len(),
                capacity: N,
            });
        }
        let mut vec = Self::new();
        for value in values {
            vec.data[vec.len] = value.clone();
            vec.len += 1;
        }
        Ok(vec)
    }

    /// Creates a vector from an iterator, stopping at the first element
    /// that does not fit.
    ///
    /// # Errors
    ///
    /// Returns [`FixVecError::CapacityExceeded`] if the iterator yields
    /// more than `N` elements. Elements consumed up to that point are
    /// dropped with the partial vector.
    pub fn try_from_iter<I>(values: I) -> Result<Self, FixVecError>
    where
        I: IntoIterator<Item = T>,
    {
        let mut vec = Self::new();
        for value in values {
            vec.push(value)?;
        }
        Ok(vec)
    }

    /// Sets the length to `new_len`.
    ///
    /// Growing writes `T::default()` into every newly live slot, replacing
    /// whatever stale value sat there. Shrinking only moves the length
    /// fence; the abandoned values stay in their slots.
    ///
    /// # Errors
    ///
    /// Returns [`FixVecError::CapacityExceeded`] if `new_len > N`. The
    /// vector is unchanged in that case.
    pub fn resize(&mut self, new_len: usize) -> Result<(), FixVecError> {
        if new_len > N {
            return Err(FixVecError::CapacityExceeded {
                requested: new_len,
                capacity: N,
            });
        }
        while self.len < new_len {
            self.data[self.len] = T::default();
            self.len += 1;
        }
        self.len = new_len;
        Ok(())
    }
}

impl<T, const N: usize> FixVec<T, N> {
    /// Capacity of every vector of this type.
    pub const CAPACITY: usize = N;

    /// Returns the number of live elements.
    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if no elements are live.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns `true` if every slot is live.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.len == N
    }

    /// Returns the fixed capacity `N`.
    #[must_use]
    pub const fn capacity(&self) -> usize {
        N
    }

    /// Appends `value` and returns a mutable reference to it.
    ///
    /// The reference stays valid until the element is overwritten or the
    /// vector is dropped; no operation moves it.
    ///
    /// ```
    /// use fixcap::FixVec;
    ///
    /// let mut totals: FixVec<u32, 8> = FixVec::new();
    /// let slot = totals.push(10).unwrap();
    /// *slot += 5;
    /// assert_eq!(totals[0], 15);
    /// ```
    ///
    /// # Errors
    ///
    /// Returns [`FixVecError::CapacityExceeded`] if the vector is full.
    /// `value` is dropped in that case and the vector is unchanged.
    pub fn push(&mut self, value: T) -> Result<&mut T, FixVecError> {
        self.ensure_free_slot()?;
        self.data[self.len] = value;
        self.len += 1;
        Ok(&mut self.data[self.len - 1])
    }

    /// Appends the value built by `make` and returns a mutable reference
    /// to it.
    ///
    /// `make` runs only after the free-slot check passes, so a full vector
    /// never pays for constructing a value it cannot store.
    ///
    /// # Errors
    ///
    /// Returns [`FixVecError::CapacityExceeded`] if the vector is full.
    pub fn push_with<F>(&mut self, make: F) -> Result<&mut T, FixVecError>
    where
        F: FnOnce() -> T,
    {
        self.ensure_free_slot()?;
        self.data[self.len] = make();
        self.len += 1;
        Ok(&mut self.data[self.len - 1])
    }

    fn ensure_free_slot(&self) -> Result<(), FixVecError> {
        if self.len == N {
            return Err(FixVecError::CapacityExceeded {
                requested: self.len + 1,
                capacity: N,
            });
        }
        Ok(())
    }

    /// Removes the last element by moving the length fence back.
    ///
    /// The value is not dropped; it stays in its slot until a later
    /// [`push`](Self::push) or [`resize`](Self::resize) overwrites it.
    ///
    /// # Panics
    ///
    /// Panics if the vector is empty.
    pub fn pop(&mut self) {
        assert!(self.len > 0, "pop on an empty FixVec");
        self.len -= 1;
    }

    /// Returns a reference to the element at `index`, checking against the
    /// current length.
    ///
    /// # Errors
    ///
    /// Returns [`FixVecError::IndexOutOfRange`] if `index >= self.len()`,
    /// even when `index` is still within capacity.
    pub fn try_get(&self, index: usize) -> Result<&T, FixVecError> {
        if index >= self.len {
            return Err(FixVecError::IndexOutOfRange {
                index,
                length: self.len,
            });
        }
        Ok(&self.data[index])
    }

    /// Returns a mutable reference to the element at `index`, checking
    /// against the current length.
    ///
    /// # Errors
    ///
    /// Returns [`FixVecError::IndexOutOfRange`] if `index >= self.len()`.
    pub fn try_get_mut(&mut self, index: usize) -> Result<&mut T, FixVecError> {
        if index >= self.len {
            return Err(FixVecError::IndexOutOfRange {
                index,
                length: self.len,
            });
        }
        Ok(&mut self.data[index])
    }

    /// Sets the length to zero without touching any slot.
    pub fn clear(&mut self) {
        self.len = 0;
    }

    /// Checks that `new_capacity` elements fit in the fixed capacity.
    ///
    /// `new_capacity` is a total, not an increment. There is nothing to
    /// allocate, so on success this does nothing; callers use it to fail
    /// fast before a batch of pushes.
    ///
    /// # Errors
    ///
    /// Returns [`FixVecError::CapacityExceeded`] if `new_capacity > N`.
    pub fn reserve(&self, new_capacity: usize) -> Result<(), FixVecError> {
        if new_capacity > N {
            return Err(FixVecError::CapacityExceeded {
                requested: new_capacity,
                capacity: N,
            });
        }
        Ok(())
    }

    /// Does nothing; the capacity is part of the type.
    pub fn shrink_to_fit(&mut self) {}

    /// Returns the live prefix as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        &self.data[..self.len]
    }

    /// Returns the live prefix as a mutable slice.
    #[must_use]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.data[..self.len]
    }

    /// Returns an iterator over the live elements.
    pub fn iter(&self) -> slice::Iter<'_, T> {
        self.as_slice().iter()
    }

    /// Returns a mutable iterator over the live elements.
    pub fn iter_mut(&mut self) -> slice::IterMut<'_, T> {
        self.as_mut_slice().iter_mut()
    }

    /// Copies the live elements into a vector with element type `U` and
    /// capacity `M`.
    ///
    /// # Errors
    ///
    /// Returns [`FixVecError::CapacityExceeded`] if the live length does
    /// not fit in `M`.
    pub fn convert<U, const M: usize>(&self) -> Result<FixVec<U, M>, FixVecError>
    where
        T: Clone,
        U: Default + From<T>,
    {
        if self.len > M {
            return Err(FixVecError::CapacityExceeded {
                requested: self.len,
                capacity: M,
            });
        }
        let mut vec = FixVec::new();
        for value in self.as_slice() {
            vec.data[vec.len] = U::from(value.clone());
            vec.len += 1;
        }
        Ok(vec)
    }

    pub(crate) fn into_parts(self) -> ([T; N], usize) {
        (self.data, self.len)
    }
}

impl<T: Default, const N: usize> Default for FixVec<T, N> {
    fn default() -> Self {
        Self::new()
    }
}

/// Moves an exactly sized array in; the result is full.
impl<T, const N: usize> From<[T; N]> for FixVec<T, N> {
    fn from(values: [T; N]) -> Self {
        Self {
            data: values,
            len: N,
        }
    }
}

impl<T: Clone + Default, const N: usize> TryFrom<&[T]> for FixVec<T, N> {
    type Error = FixVecError;

    fn try_from(values: &[T]) -> Result<Self, FixVecError> {
        Self::from_slice(values)
    }
}

impl<T, const N: usize> Deref for FixVec<T, N> {
    type Target = [T];

    fn deref(&self) -> &[T] {
        self.as_slice()
    }
}

impl<T, const N: usize> DerefMut for FixVec<T, N> {
    fn deref_mut(&mut self) -> &mut [T] {
        self.as_mut_slice()
    }
}

/// Shows the live prefix only; stale slots are not part of the value.
impl<T: fmt::Debug, const N: usize> fmt::Debug for FixVec<T, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.as_slice()).finish()
    }
}

/// Equality compares live elements and ignores capacity, so vectors of
/// different capacities can be equal.
impl<T: PartialEq, const N: usize, const M: usize> PartialEq<FixVec<T, M>> for FixVec<T, N> {
    fn eq(&self, other: &FixVec<T, M>) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<T: PartialEq, const N: usize, const M: usize> PartialEq<[T; M]> for FixVec<T, N> {
    fn eq(&self, other: &[T; M]) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<T: PartialEq, const N: usize> PartialEq<[T]> for FixVec<T, N> {
    fn eq(&self, other: &[T]) -> bool {
        self.as_slice() == other
    }
}

impl<T: PartialEq, const N: usize> PartialEq<&[T]> for FixVec<T, N> {
    fn eq(&self, other: &&[T]) -> bool {
        self.as_slice() == *other
    }
}

impl<T: Eq, const N: usize> Eq for FixVec<T, N> {}
