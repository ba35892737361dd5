#![no_std]
#![forbid(unsafe_code)]

//! Fixed-capacity storage and freeze-once views.
//!
//! This crate covers two situations where a growable container is the wrong
//! tool because the storage must never move:
//!
//! - [`FixVec`] is a vector whose capacity is part of its type. The backing
//!   array lives inline (on the stack, in a `static`, or inside another
//!   struct), elements never relocate, and growing past the capacity is an
//!   error instead of a reallocation.
//! - The materialization pipeline ([`Scratch`] at compile time, [`freeze`]
//!   and the [`FrozenSlice`]/[`FrozenStr`] cells at run time) produces data
//!   whose size is unknown until it is computed, then stores it in exactly
//!   sized storage for the rest of the program and hands out non-owning
//!   views of it.
//!
//! # Quick start
//!
//! A `FixVec` behaves like a vector up to its fixed capacity:
//!
//! ```
//! use fixcap::{FixVec, FixVecError};
//!
//! let mut samples: FixVec<i32, 3> = FixVec::new();
//! samples.push(1).unwrap();
//! samples.push(2).unwrap();
//! samples.push(3).unwrap();
//!
//! // The fourth push reports the fixed capacity instead of reallocating.
//! assert_eq!(
//!     samples.push(4),
//!     Err(FixVecError::CapacityExceeded { requested: 4, capacity: 3 })
//! );
//! assert_eq!(samples.as_slice(), &[1, 2, 3]);
//! ```
//!
//! Compile-time materialization runs a `const fn` producer against an
//! oversized scratch buffer and stores only the right-sized result in the
//! binary:
//!
//! ```
//! use fixcap::{frozen_str, Scratch};
//!
//! const fn greeting() -> Scratch<u8> {
//!     Scratch::bytes().append_str("hello")
//! }
//!
//! const GREETING: &str = frozen_str!(greeting);
//! assert_eq!(GREETING, "hello");
//! ```
//!
//! Run-time materialization does the same for producers that are not
//! `const`: the first caller freezes the output, every caller gets the same
//! `'static` view:
//!
//! ```
//! use fixcap::FrozenSlice;
//!
//! static SQUARES: FrozenSlice<u32> = FrozenSlice::new();
//!
//! let view = SQUARES.view(|| (1..=5).map(|n| n * n)).unwrap();
//! assert_eq!(view, &[1, 4, 9, 16, 25]);
//! ```
//!
//! # Feature flags
//!
//! - `alloc` (default): enables the run-time pipeline ([`freeze`],
//!   [`FrozenSlice`], [`FrozenStr`]), which allocates once per frozen value.
//! - `std`: implies `alloc` and forwards the `std` features of the
//!   dependencies. The crate itself never requires it.
//!
//! # `no_std` compatibility
//!
//! With default features disabled the crate is `no_std` without `alloc`:
//!
//! ```toml
//! [dependencies]
//! fixcap = { version = "0.1", default-features = false }
//! ```
//!
//! [`FixVec`], [`Scratch`], and the `frozen_*` macros work in that
//! configuration; nothing in the crate allocates behind your back.

#[cfg(feature = "alloc")]
extern crate alloc;

mod error;
#[cfg(feature = "alloc")]
mod freeze;
mod iter;
mod scratch;
mod vec;

pub use error::FixVecError;
#[cfg(feature = "alloc")]
pub use error::FreezeError;
#[cfg(feature = "alloc")]
pub use freeze::{freeze, FrozenSlice, FrozenStr};
pub use iter::IntoIter;
pub use scratch::Scratch;
pub use vec::FixVec;

/// Ceiling of the materialization scratch buffer, in elements.
///
/// Discovery passes run against storage of this size; a producer that
/// yields more elements fails with [`FreezeError::OversizeExceeded`] at run
/// time or a compile error in const evaluation. The frozen result itself is
/// always sized exactly, so the ceiling costs nothing after materialization.
pub const OVERSIZED_LIMIT: usize = 10 * 1024;
