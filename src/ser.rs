//! Serialize a big integer as its decimal string.

use crate::bigint::BigInt;
use serde_core::ser::{Error as _, Serialize, Serializer};

impl Serialize for BigInt {
    #[inline]
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let s = self.to_decimal_string().map_err(S::Error::custom)?;
        serializer.serialize_str(&s)
    }
}
