//! Deserialization of numbers.

use core::fmt::Formatter;
use core::marker::PhantomData;
use core::str::FromStr;

use crate::{ArbitraryInteger, ArbitraryRational, Decimal};
use serde::de::Error;
use serde::de::Visitor;
use serde::{Deserialize, Deserializer};

/// Visitor of exact numbers: integers and strings are accepted.
pub struct ExactVisitor<T> {
    t: PhantomData<T>,
}

impl<'de, T> Visitor<'de> for ExactVisitor<T>
where
    T: FromStr<Err = crate::Error> + From<i64>,
{
    type Value = T;

    fn expecting(&self, formatter: &mut Formatter) -> core::fmt::Result {
        write!(formatter, "except `String`, `Integer`")
    }

    fn visit_i64<E: Error>(self, v: i64) -> Result<Self::Value, E> {
        Ok(T::from(v))
    }

    fn visit_u64<E: Error>(self, v: u64) -> Result<Self::Value, E> {
        self.visit_str(&v.to_string())
    }

    fn visit_str<E: Error>(self, v: &str) -> Result<Self::Value, E> {
        match T::from_str(v) {
            Ok(o) => Ok(o),
            Err(e) => Err(Error::custom(format!("{e:?}"))),
        }
    }

    fn visit_string<E: Error>(self, v: String) -> Result<Self::Value, E> {
        self.visit_str(&v)
    }
}

impl<'de> Deserialize<'de> for ArbitraryInteger {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(ExactVisitor { t: PhantomData })
    }
}

impl<'de> Deserialize<'de> for ArbitraryRational {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(ExactVisitor { t: PhantomData })
    }
}

/// Visitor of decimal numbers: integers, floating point numbers, and strings are accepted.
pub struct DecimalVisitor {}

impl<'de> Deserialize<'de> for Decimal {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(DecimalVisitor {})
    }
}

impl<'de> Visitor<'de> for DecimalVisitor {
    type Value = Decimal;

    fn expecting(&self, formatter: &mut Formatter) -> core::fmt::Result {
        write!(formatter, "except `String`, `Number`")
    }

    fn visit_i64<E: Error>(self, v: i64) -> Result<Self::Value, E> {
        Ok(Decimal::from(v))
    }

    fn visit_u64<E: Error>(self, v: u64) -> Result<Self::Value, E> {
        Ok(Decimal::from(v))
    }

    fn visit_f64<E: Error>(self, v: f64) -> Result<Self::Value, E> {
        match Decimal::from_f64(v) {
            Ok(o) => Ok(o),
            Err(e) => Err(Error::custom(format!("{e:?}"))),
        }
    }

    fn visit_str<E: Error>(self, v: &str) -> Result<Self::Value, E> {
        match Decimal::from_str(v) {
            Ok(o) => Ok(o),
            Err(e) => Err(Error::custom(format!("{e:?}"))),
        }
    }

    fn visit_string<E: Error>(self, v: String) -> Result<Self::Value, E> {
        self.visit_str(&v)
    }
}

#[cfg(test)]
mod tests {

    use serde_json::from_str;

    use crate::{ArbitraryInteger, ArbitraryRational, Decimal};

    #[test]
    fn from_json() {
        assert_eq!(from_str::<ArbitraryInteger>("-42").unwrap(), ArbitraryInteger::from(-42));
        assert_eq!(from_str::<ArbitraryInteger>("18446744073709551615").unwrap(), ArbitraryInteger::from(u64::MAX));
        assert_eq!(
            from_str::<ArbitraryInteger>("\"-340282366920938463463374607431768211456\"")
                .unwrap()
                .to_string(),
            "-340282366920938463463374607431768211456"
        );
        assert!(from_str::<ArbitraryInteger>("\"12a\"").is_err());
        assert!(from_str::<ArbitraryInteger>("1.5").is_err());

        let q = from_str::<ArbitraryRational>("\"6/-8\"").unwrap();
        assert_eq!(q.numerator(), &ArbitraryInteger::from(-6));
        assert_eq!(q.denominator(), &ArbitraryInteger::from(8));
        assert_eq!(from_str::<ArbitraryRational>("7").unwrap(), ArbitraryRational::from(7));
        assert!(from_str::<ArbitraryRational>("\"1/0\"").is_err());

        assert_eq!(from_str::<Decimal>("\"-1.25e-3\"").unwrap().to_string(), "-0.00125");
        assert_eq!(from_str::<Decimal>("0.3").unwrap().to_string(), "0.3");
        assert_eq!(from_str::<Decimal>("12").unwrap(), Decimal::from(12));
    }
}
