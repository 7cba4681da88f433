//! Limb storage for the big integer type.
//!
//! The limb buffer is little-endian: for `vec![0, 1, 2, 3]`, `3` is the most
//! significant limb and `0` the least significant. Only the first `size`
//! limbs are in use, and the last of those (the guard limb) is zero between
//! operations.

use crate::error::{Error, ErrorCode, Result};
use alloc::vec::Vec;
use tracing::trace;

/// Type for a single limb of the big integer.
///
/// A limb is analogous to a digit in base10, except it stores 32-bit numbers.
pub type Limb = u32;

/// Type wide enough to hold the product of two limbs plus a carry.
pub(crate) type Wide = u64;

/// Number of bits in a [`Limb`].
pub const LIMB_BITS: u32 = Limb::BITS;

/// Number of limb slots allocated for a fresh value.
pub const INITIAL_CAPACITY: usize = 16;

/// An unsigned integer of unbounded magnitude.
///
/// A fresh value is zero and holds a single (guard) limb in an allocation of
/// [`INITIAL_CAPACITY`] slots. Operations grow the value in place, doubling
/// the allocation whenever the used limbs reach it.
#[derive(Clone)]
pub struct BigInt {
    /// Every slot is initialized; `limbs.len()` is the capacity. Slots at or
    /// above `size` are zero.
    pub(crate) limbs: Vec<Limb>,
    /// Used limbs including the guard. Zero once released.
    pub(crate) size: usize,
}

impl BigInt {
    /// Creates a zero value with the initial capacity.
    pub fn new() -> Self {
        BigInt {
            limbs: alloc::vec![0; INITIAL_CAPACITY],
            size: 1,
        }
    }

    /// Creates a zero value, reporting allocation failure instead of aborting.
    pub fn try_new() -> Result<Self> {
        Ok(BigInt {
            limbs: fresh_limbs()?,
            size: 1,
        })
    }

    /// Number of used limbs, including the guard limb.
    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Number of allocated limb slots.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.limbs.len()
    }

    /// The used limbs in little-endian order. The last one is the guard limb.
    ///
    /// A released value has no limbs.
    #[inline]
    pub fn limbs(&self) -> &[Limb] {
        &self.limbs[..self.size]
    }

    /// Returns true once [`release`](BigInt::release) has been called and
    /// before the next [`reset`](BigInt::reset).
    #[inline]
    pub fn is_released(&self) -> bool {
        self.size == 0
    }

    /// Returns true if the value is zero.
    ///
    /// A released value is not zero; it has no value at all.
    pub fn is_zero(&self) -> bool {
        !self.is_released() && self.limbs().iter().all(|&limb| limb == 0)
    }

    /// Discards the current content and storage, leaving a fresh zero value.
    ///
    /// This is also how a released value is brought back into use.
    pub fn reset(&mut self) -> Result<()> {
        // Drop the old buffer first so the peak footprint stays at one buffer.
        self.limbs = Vec::new();
        self.size = 0;
        self.limbs = fresh_limbs()?;
        self.size = 1;
        trace!(capacity = INITIAL_CAPACITY, "reset big integer");
        Ok(())
    }

    /// Frees the limb storage. Size and capacity both become zero.
    ///
    /// Every operation other than [`reset`](BigInt::reset) fails with
    /// [`ErrorCode::UseAfterRelease`] afterwards.
    pub fn release(&mut self) {
        if !self.is_released() {
            trace!(capacity = self.capacity(), "released big integer");
        }
        self.limbs = Vec::new();
        self.size = 0;
    }

    /// Fails with `UseAfterRelease` on a released value.
    #[inline]
    pub(crate) fn check_live(&self) -> Result<()> {
        if self.is_released() {
            Err(Error::new(ErrorCode::UseAfterRelease))
        } else {
            Ok(())
        }
    }

    /// The guard limb, which must be zero between operations.
    #[inline]
    pub(crate) fn guard(&self) -> Limb {
        self.limbs[self.size - 1]
    }

    /// Extends the used limbs by one, doubling the allocation if the used
    /// limbs would reach it.
    ///
    /// Every operation that grows a value through arithmetic goes through
    /// here.
    pub(crate) fn grow_by_one_limb(&mut self) -> Result<()> {
        self.size += 1;
        if self.size >= self.capacity() {
            self.expand()?;
        }
        debug_assert_eq!(self.guard(), 0);
        Ok(())
    }

    /// Grows by one limb if the guard limb was written with a nonzero value.
    #[inline]
    pub(crate) fn restore_guard(&mut self) -> Result<()> {
        if self.guard() != 0 {
            self.grow_by_one_limb()?;
        }
        Ok(())
    }

    /// Doubles the allocation, keeping every limb at its index.
    fn expand(&mut self) -> Result<()> {
        let old = self.capacity();
        let new = old * 2;
        self.limbs
            .try_reserve_exact(new - old)
            .map_err(|_| Error::allocation(new - old))?;
        self.limbs.resize(new, 0);
        trace!(from = old, to = new, "expanded big integer storage");
        Ok(())
    }

    /// Clears to zero with room for one data limb below the guard.
    ///
    /// Accumulators built by parsing and division start from this state.
    pub(crate) fn reset_with_guard(&mut self) -> Result<()> {
        self.reset()?;
        self.grow_by_one_limb()
    }
}

impl Default for BigInt {
    fn default() -> Self {
        BigInt::new()
    }
}

impl From<u32> for BigInt {
    fn from(value: u32) -> Self {
        let mut bigint = BigInt::new();
        bigint.limbs[0] = value;
        bigint.size = if value == 0 { 1 } else { 2 };
        bigint
    }
}

impl From<u64> for BigInt {
    fn from(value: u64) -> Self {
        let mut bigint = BigInt::new();
        bigint.limbs[0] = value as Limb;
        bigint.limbs[1] = (value >> LIMB_BITS) as Limb;
        bigint.size = if value >> LIMB_BITS != 0 {
            3
        } else if value != 0 {
            2
        } else {
            1
        };
        bigint
    }
}

/// Zeroed storage for a fresh value.
fn fresh_limbs() -> Result<Vec<Limb>> {
    let mut limbs = Vec::new();
    limbs
        .try_reserve_exact(INITIAL_CAPACITY)
        .map_err(|_| Error::allocation(INITIAL_CAPACITY))?;
    limbs.resize(INITIAL_CAPACITY, 0);
    Ok(limbs)
}
