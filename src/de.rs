//! Deserialize a big integer from a decimal string or an unsigned integer.

use crate::bigint::BigInt;
use core::fmt;
use serde_core::de::{self, Deserialize, Deserializer, Visitor};

impl<'de> Deserialize<'de> for BigInt {
    #[inline]
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct BigIntVisitor;

        impl<'de> Visitor<'de> for BigIntVisitor {
            type Value = BigInt;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a string of decimal digits or an unsigned integer")
            }

            fn visit_u64<E>(self, value: u64) -> Result<BigInt, E>
            where
                E: de::Error,
            {
                Ok(BigInt::from(value))
            }

            fn visit_str<E>(self, s: &str) -> Result<BigInt, E>
            where
                E: de::Error,
            {
                BigInt::from_decimal_str(s).map_err(de::Error::custom)
            }
        }

        deserializer.deserialize_any(BigIntVisitor)
    }
}
