//! Serialization of numbers.
//! Numbers are serialized to strings in the same format `Display` uses.

use crate::{ArbitraryInteger, ArbitraryRational, Decimal};
use serde::{Serialize, Serializer};

impl Serialize for ArbitraryInteger {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

impl Serialize for ArbitraryRational {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

impl Serialize for Decimal {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}
