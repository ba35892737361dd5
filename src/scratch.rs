use crate::OVERSIZED_LIMIT;

/// Oversized discovery buffer for compile-time materialization.
///
/// A `Scratch` holds up to [`OVERSIZED_LIMIT`] elements in a plain array so
/// that a `const fn` can build a sequence whose final length it does not
/// know up front. The builder methods take `self` by value and return the
/// extended scratch, which keeps them usable in const evaluation on stable
/// Rust:
///
/// ```
/// use fixcap::Scratch;
///
/// const fn evens_below(limit: u32) -> Scratch<u32> {
///     let mut scratch = Scratch::filled(0);
///     let mut n = 0;
///     while n < limit {
///         scratch = scratch.with(n);
///         n += 2;
///     }
///     scratch
/// }
///
/// const EVENS: Scratch<u32> = evens_below(10);
/// assert_eq!(EVENS.len(), 5);
/// ```
///
/// The scratch itself is the throwaway first phase. To keep only the
/// right-sized result, feed the producer to [`frozen_slice!`],
/// [`frozen_str!`], or [`frozen_array!`], or call
/// [`to_exact`](Self::to_exact) with the discovered length.
///
/// Overrunning the ceiling panics, which in const evaluation is a compile
/// error at the call site rather than a runtime failure.
///
/// [`frozen_slice!`]: crate::frozen_slice
/// [`frozen_str!`]: crate::frozen_str
/// [`frozen_array!`]: crate::frozen_array
#[derive(Clone)]
pub struct Scratch<T: Copy> {
    buf: [T; OVERSIZED_LIMIT],
    len: usize,
}

impl<T: Copy> Scratch<T> {
    /// Creates an empty scratch with every slot set to `fill`.
    ///
    /// The fill value is never part of the result; it only makes the
    /// backing array fully initialized so const evaluation can copy from
    /// any slot.
    #[must_use]
    pub const fn filled(fill: T) -> Self {
        Self {
            buf: [fill; OVERSIZED_LIMIT],
            len: 0,
        }
    }

    /// Appends one element, returning the extended scratch.
    ///
    /// # Panics
    ///
    /// Panics if the scratch already holds [`OVERSIZED_LIMIT`] elements.
    #[must_use]
    pub const fn with(mut self, value: T) -> Self {
        assert!(
            self.len < OVERSIZED_LIMIT,
            "scratch overflow: producer exceeded OVERSIZED_LIMIT elements"
        );
        self.buf[self.len] = value;
        self.len += 1;
        self
    }

    /// Appends every element of `values`, returning the extended scratch.
    ///
    /// # Panics
    ///
    /// Panics if the combined length would pass [`OVERSIZED_LIMIT`].
    #[must_use]
    pub const fn append(mut self, values: &[T]) -> Self {
        let mut i = 0;
        while i < values.len() {
            assert!(
                self.len < OVERSIZED_LIMIT,
                "scratch overflow: producer exceeded OVERSIZED_LIMIT elements"
            );
            self.buf[self.len] = values[i];
            self.len += 1;
            i += 1;
        }
        self
    }

    /// Returns the number of elements appended so far.
    ///
    /// This is the discovered length: the value to pass to
    /// [`to_exact`](Self::to_exact).
    #[must_use]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if nothing has been appended.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Copies the appended elements into an array of exactly the
    /// discovered length.
    ///
    /// # Panics
    ///
    /// Panics if `M` is not exactly [`len`](Self::len). In const
    /// evaluation the panic is a compile error, so a frozen array can
    /// never be over- or under-sized.
    #[must_use]
    pub const fn to_exact<const M: usize>(&self) -> [T; M] {
        assert!(M == self.len, "to_exact requires the discovered length");
        let mut exact = [self.buf[0]; M];
        let mut i = 0;
        while i < M {
            exact[i] = self.buf[i];
            i += 1;
        }
        exact
    }
}

impl Scratch<u8> {
    /// Creates an empty byte scratch, zero-filled.
    #[must_use]
    pub const fn bytes() -> Self {
        Self::filled(0)
    }

    /// Appends the UTF-8 bytes of `text`, returning the extended scratch.
    ///
    /// # Panics
    ///
    /// Panics if the combined length would pass [`OVERSIZED_LIMIT`].
    #[must_use]
    pub const fn append_str(self, text: &str) -> Self {
        self.append(text.as_bytes())
    }
}

/// Materializes a `const fn` producer into a right-sized `&'static` slice.
///
/// The producer is a path to a `const fn() -> Scratch<T>`. It runs during
/// const evaluation; the discovered length then sizes an array holding
/// just the live prefix. Only that right-sized array reaches the binary;
/// the oversized scratch is gone after compilation.
///
/// ```
/// use fixcap::{frozen_slice, Scratch};
///
/// const fn powers_of_two() -> Scratch<u32> {
///     let mut scratch = Scratch::filled(0);
///     let mut value = 1u32;
///     while value < 100 {
///         scratch = scratch.with(value);
///         value *= 2;
///     }
///     scratch
/// }
///
/// const POWERS: &[u32] = frozen_slice!(u32, powers_of_two);
/// assert_eq!(POWERS, &[1, 2, 4, 8, 16, 32, 64]);
/// ```
#[macro_export]
macro_rules! frozen_slice {
    ($ty:ty, $producer:path) => {{
        const __FULL: $crate::Scratch<$ty> = $producer();
        const __LEN: usize = __FULL.len();
        const __EXACT: [$ty; __LEN] = __FULL.to_exact::<__LEN>();
        const __VIEW: &[$ty] = &__EXACT;
        __VIEW
    }};
}

/// Materializes a `const fn` byte producer into a `&'static str`.
///
/// Works like [`frozen_slice!`] for `Scratch<u8>`, with a UTF-8 check on
/// the frozen bytes. Invalid UTF-8 fails const evaluation.
///
/// ```
/// use fixcap::{frozen_str, Scratch};
///
/// const fn greeting() -> Scratch<u8> {
///     Scratch::bytes().append_str("hello")
/// }
///
/// const GREETING: &str = frozen_str!(greeting);
/// assert_eq!(GREETING, "hello");
/// assert_eq!(GREETING.len(), 5);
/// ```
#[macro_export]
macro_rules! frozen_str {
    ($producer:path) => {{
        const __FULL: $crate::Scratch<u8> = $producer();
        const __LEN: usize = __FULL.len();
        const __EXACT: [u8; __LEN] = __FULL.to_exact::<__LEN>();
        const __VIEW: &str = match ::core::str::from_utf8(&__EXACT) {
            Ok(text) => text,
            Err(_) => panic!("frozen bytes are not valid UTF-8"),
        };
        __VIEW
    }};
}

/// Materializes a `const fn` producer into a right-sized array by value.
///
/// Like [`frozen_slice!`] but the result is owned, so it can seed other
/// const tables or be stored inline.
///
/// ```
/// use fixcap::{frozen_array, Scratch};
///
/// const fn flags() -> Scratch<bool> {
///     Scratch::filled(false).with(true).with(false).with(true)
/// }
///
/// const FLAGS: [bool; 3] = frozen_array!(bool, flags);
/// assert_eq!(FLAGS, [true, false, true]);
/// ```
#[macro_export]
macro_rules! frozen_array {
    ($ty:ty, $producer:path) => {{
        const __FULL: $crate::Scratch<$ty> = $producer();
        const __LEN: usize = __FULL.len();
        const __EXACT: [$ty; __LEN] = __FULL.to_exact::<__LEN>();
        __EXACT
    }};
}
