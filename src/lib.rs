//! # biglimb
//!
//! Unsigned integers of unbounded magnitude, stored as little-endian arrays of
//! 32-bit limbs (base 2<sup>32</sup>).
//!
//! ```
//! use biglimb::BigInt;
//!
//! # fn main() -> biglimb::Result<()> {
//! let mut n = BigInt::from_decimal_str("4294967296")?;
//! n.left_shift(1)?;
//! assert_eq!(n.to_decimal_string()?, "8589934592");
//!
//! let (quotient, remainder) = n.divide_scalar(10)?;
//! assert_eq!(quotient.to_decimal_string()?, "858993459");
//! assert_eq!(remainder, 2);
//! # Ok(())
//! # }
//! ```
//!
//! # The guard limb
//!
//! Every `BigInt` keeps its most significant used limb at zero between
//! operations. Routines that can carry past the top of the value write into
//! that guard slot and then grow the value by one limb whenever the guard came
//! out nonzero, so storage always grows before data could be lost:
//!
//! ```
//! use biglimb::BigInt;
//!
//! # fn main() -> biglimb::Result<()> {
//! let n = BigInt::from_decimal_str("123456789012345678901234567890")?;
//! assert_eq!(n.size(), 5);
//! assert_eq!(*n.limbs().last().unwrap(), 0);
//! # Ok(())
//! # }
//! ```
//!
//! # Errors
//!
//! Nothing in this crate aborts on a recoverable condition. Bad digits, shift
//! amounts of 32 or more, undersized destination buffers, division by zero,
//! use of a released value and failed storage growth are all reported through
//! [`Error`].
//!
//! # No-std support
//!
//! The `std` feature is enabled by default. Disabling it leaves a `no_std`
//! crate that still requires a global allocator:
//!
//! ```toml
//! [dependencies]
//! biglimb = { version = "0.1", default-features = false, features = ["alloc"] }
//! ```

#![doc(html_root_url = "https://docs.rs/biglimb/0.1.0")]
// Ignored clippy lints
#![allow(
    // things are often more readable this way
    clippy::cast_lossless,
    clippy::module_name_repetitions,
    clippy::needless_range_loop,
    // we support older compilers
    clippy::manual_let_else,
)]
// Ignored clippy_pedantic lints
#![allow(
    clippy::cast_possible_truncation,
    clippy::missing_errors_doc,
    clippy::must_use_candidate,
)]
#![deny(missing_docs)]
#![no_std]

extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

pub use crate::bigint::{BigInt, Limb, INITIAL_CAPACITY, LIMB_BITS};
#[doc(inline)]
pub use crate::error::{Category, Error, ErrorCode, Result};

mod add;
mod bigint;
mod copy;
mod debug;
mod decimal;
pub mod error;
mod scalar;
mod shift;

#[cfg(feature = "serde")]
mod de;
#[cfg(feature = "serde")]
mod ser;
