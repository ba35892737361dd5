//! Run-time materialization for producers that cannot run in const
//! evaluation.
//!
//! The pipeline has the same two phases as the compile-time one: a
//! discovery pass into oversized scratch storage, then a freeze into
//! storage sized exactly to what was discovered. Frozen storage lives for
//! the rest of the program, so the views handed out are `&'static` and
//! never dangle.

use alloc::boxed::Box;
use alloc::string::String;
use alloc::vec::Vec;

use core::fmt;

use once_cell::race::OnceBox;

use crate::error::FreezeError;
use crate::OVERSIZED_LIMIT;

/// Drains `source` into the oversized scratch, enforcing the ceiling.
fn discover<T, I>(source: I) -> Result<Vec<T>, FreezeError>
where
    I: IntoIterator<Item = T>,
{
    let mut scratch = Vec::with_capacity(OVERSIZED_LIMIT);
    for element in source {
        if scratch.len() == OVERSIZED_LIMIT {
            return Err(FreezeError::OversizeExceeded {
                limit: OVERSIZED_LIMIT,
            });
        }
        scratch.push(element);
    }
    Ok(scratch)
}

/// Runs `producer` once and freezes its output into exactly sized storage.
///
/// The discovery pass collects into scratch capacity of
/// [`OVERSIZED_LIMIT`] elements; the freeze then shrinks to the discovered
/// length. The returned box owns the storage, so this is the building
/// block to use when program-lifetime storage is not wanted. For shared
/// `&'static` views, use [`FrozenSlice`] or [`FrozenStr`].
///
/// ```
/// use fixcap::freeze;
///
/// let table = freeze(|| (0u32..8).map(|n| n * n)).unwrap();
/// assert_eq!(table.len(), 8);
/// assert_eq!(&table[..3], &[0, 1, 4]);
/// ```
///
/// # Errors
///
/// Returns [`FreezeError::OversizeExceeded`] if `producer` yields more
/// than [`OVERSIZED_LIMIT`] elements.
pub fn freeze<T, F, I>(producer: F) -> Result<Box<[T]>, FreezeError>
where
    F: FnOnce() -> I,
    I: IntoIterator<Item = T>,
{
    Ok(discover(producer())?.into_boxed_slice())
}

fn freeze_str<F, S>(producer: F) -> Result<Box<str>, FreezeError>
where
    F: FnOnce() -> S,
    S: AsRef<str>,
{
    let text = producer();
    let text = text.as_ref();
    if text.len() > OVERSIZED_LIMIT {
        return Err(FreezeError::OversizeExceeded {
            limit: OVERSIZED_LIMIT,
        });
    }
    Ok(String::from(text).into_boxed_str())
}

/// A cell that freezes a produced sequence on first use and then hands out
/// one `&'static [T]` view forever.
///
/// The cell starts empty and `new` is `const`, so the natural home is a
/// `static`:
///
/// ```
/// use fixcap::FrozenSlice;
///
/// static SQUARES: FrozenSlice<u32> = FrozenSlice::new();
///
/// let first = SQUARES.view(|| (1..=5).map(|n| n * n)).unwrap();
/// // Frozen: later producers are never run.
/// let second = SQUARES.view(|| [0; 3]).unwrap();
/// assert_eq!(first, &[1, 4, 9, 16, 25]);
/// assert!(core::ptr::eq(first, second));
/// ```
///
/// Freezing is a terminal state. A failed first attempt freezes nothing,
/// and a later call may try again with a fitting producer. When several
/// threads race the first materialization each runs its own producer;
/// exactly one result is published and the losing candidates are never
/// reclaimed.
pub struct FrozenSlice<T: 'static> {
    slot: OnceBox<&'static [T]>,
}

impl<T: 'static> FrozenSlice<T> {
    /// Creates an empty, unfrozen cell.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            slot: OnceBox::new(),
        }
    }

    /// Returns the frozen view, materializing it from `producer` on first
    /// use.
    ///
    /// Once the cell is frozen the producer is not run and the published
    /// view is returned as-is.
    ///
    /// # Errors
    ///
    /// Returns [`FreezeError::OversizeExceeded`] if discovery overruns
    /// [`OVERSIZED_LIMIT`]. The cell stays unfrozen in that case.
    pub fn view<F, I>(&self, producer: F) -> Result<&'static [T], FreezeError>
    where
        F: FnOnce() -> I,
        I: IntoIterator<Item = T>,
    {
        self.slot
            .get_or_try_init(|| {
                let frozen: &'static [T] = Box::leak(freeze(producer)?);
                Ok(Box::new(frozen))
            })
            .copied()
    }

    /// Returns the frozen view if the cell has been frozen.
    #[must_use]
    pub fn get(&self) -> Option<&'static [T]> {
        self.slot.get().copied()
    }

    /// Returns `true` once a view has been published.
    #[must_use]
    pub fn is_frozen(&self) -> bool {
        self.slot.get().is_some()
    }
}

impl<T: 'static> Default for FrozenSlice<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Debug + 'static> fmt::Debug for FrozenSlice<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.get() {
            Some(view) => f.debug_tuple("FrozenSlice").field(&view).finish(),
            None => f.write_str("FrozenSlice(<unfrozen>)"),
        }
    }
}

/// A cell that freezes produced text on first use and then hands out one
/// `&'static str` view forever.
///
/// The text counterpart of [`FrozenSlice`], for producers that build a
/// string whose length is unknown until run time:
///
/// ```
/// use fixcap::FrozenStr;
///
/// static BANNER: FrozenStr = FrozenStr::new();
///
/// let text = BANNER.view(|| format!("fixcap {}", 1)).unwrap();
/// assert_eq!(text, "fixcap 1");
/// assert!(BANNER.is_frozen());
/// ```
pub struct FrozenStr {
    slot: OnceBox<&'static str>,
}

impl FrozenStr {
    /// Creates an empty, unfrozen cell.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            slot: OnceBox::new(),
        }
    }

    /// Returns the frozen text, materializing it from `producer` on first
    /// use.
    ///
    /// # Errors
    ///
    /// Returns [`FreezeError::OversizeExceeded`] if the produced text is
    /// longer than [`OVERSIZED_LIMIT`] bytes. The cell stays unfrozen in
    /// that case.
    pub fn view<F, S>(&self, producer: F) -> Result<&'static str, FreezeError>
    where
        F: FnOnce() -> S,
        S: AsRef<str>,
    {
        self.slot
            .get_or_try_init(|| {
                let frozen: &'static str = Box::leak(freeze_str(producer)?);
                Ok(Box::new(frozen))
            })
            .copied()
    }

    /// Returns the frozen text if the cell has been frozen.
    #[must_use]
    pub fn get(&self) -> Option<&'static str> {
        self.slot.get().copied()
    }

    /// Returns `true` once a view has been published.
    #[must_use]
    pub fn is_frozen(&self) -> bool {
        self.slot.get().is_some()
    }
}

impl Default for FrozenStr {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for FrozenStr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.get() {
            Some(view) => f.debug_tuple("FrozenStr").field(&view).finish(),
            None => f.write_str("FrozenStr(<unfrozen>)"),
        }
    }
}
