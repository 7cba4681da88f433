//! Equality tests and copies between values.

use crate::bigint::{BigInt, Limb};
use crate::error::{Error, Result};
use core::mem;

impl BigInt {
    /// Returns true if the value equals the single limb `value`.
    pub fn equals_scalar(&self, value: Limb) -> Result<bool> {
        self.check_live()?;
        let limbs = self.limbs();
        Ok(limbs[0] == value && limbs[1..].iter().all(|&limb| limb == 0))
    }

    /// Copies the used limbs of `src` into the existing storage of `self`.
    ///
    /// The capacity of `self` is kept, and must be at least `src.size()`;
    /// otherwise this fails with `BufferTooSmall` and `self` is unchanged.
    /// Use `clone` to get a copy with its own storage.
    pub fn deep_copy_from(&mut self, src: &BigInt) -> Result<()> {
        self.check_live()?;
        src.check_live()?;
        if self.capacity() < src.size {
            return Err(Error::buffer_too_small(src.size, self.capacity()));
        }

        self.limbs[..src.size].copy_from_slice(src.limbs());
        // Slots above the used limbs must stay zero for later growth.
        self.limbs[src.size..].fill(0);
        self.size = src.size;
        Ok(())
    }

    /// Moves the storage of `src` into `self`, leaving `src` released.
    ///
    /// The previous storage of `self` is freed. No two values ever share one
    /// buffer.
    pub fn take_from(&mut self, src: &mut BigInt) -> Result<()> {
        src.check_live()?;
        *self = mem::replace(
            src,
            BigInt {
                limbs: alloc::vec::Vec::new(),
                size: 0,
            },
        );
        Ok(())
    }

    /// The used limbs with the guard and any other zero top limbs removed.
    fn significant(&self) -> &[Limb] {
        let limbs = self.limbs();
        let len = limbs.iter().rposition(|&limb| limb != 0).map_or(0, |i| i + 1);
        &limbs[..len]
    }
}

/// Compares magnitudes, regardless of size or capacity.
///
/// A released value is only equal to another released value.
impl PartialEq for BigInt {
    fn eq(&self, other: &Self) -> bool {
        self.is_released() == other.is_released() && self.significant() == other.significant()
    }
}

impl Eq for BigInt {}
