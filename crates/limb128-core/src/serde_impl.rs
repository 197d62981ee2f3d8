//! Serde support behind the `serde` feature.
//!
//! Human-readable formats get a decimal string, so JSON never loses
//! precision; binary formats get the `(lo, hi)` limb pair.

use std::borrow::Cow;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::signed::I128;
use crate::unsigned::U128;

impl Serialize for U128 {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        if serializer.is_human_readable() {
            serializer.collect_str(self)
        } else {
            (self.low_64(), self.high_64()).serialize(serializer)
        }
    }
}

impl<'de> Deserialize<'de> for U128 {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        if deserializer.is_human_readable() {
            let s = Cow::<'de, str>::deserialize(deserializer)?;
            s.parse().map_err(D::Error::custom)
        } else {
            let (lo, hi) = <(u64, u64)>::deserialize(deserializer)?;
            Ok(Self::from_limbs(lo, hi))
        }
    }
}

impl Serialize for I128 {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        if serializer.is_human_readable() {
            serializer.collect_str(self)
        } else {
            (self.low_64(), self.high_64()).serialize(serializer)
        }
    }
}

impl<'de> Deserialize<'de> for I128 {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        if deserializer.is_human_readable() {
            let s = Cow::<'de, str>::deserialize(deserializer)?;
            s.parse().map_err(D::Error::custom)
        } else {
            let (lo, hi) = <(u64, i64)>::deserialize(deserializer)?;
            Ok(Self::from_limbs(lo, hi))
        }
    }
}
