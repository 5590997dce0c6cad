//! Deserialization of HyperFloat.
//! Accepts numbers and strings in any notation the parser reads.

use core::fmt::Formatter;

use crate::num::HyperFloat;
use serde::de::Error;
use serde::de::Visitor;
use serde::{Deserialize, Deserializer};

pub struct HyperFloatVisitor {}

impl<'de> Deserialize<'de> for HyperFloat {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(HyperFloatVisitor {})
    }
}

impl<'de> Visitor<'de> for HyperFloatVisitor {
    type Value = HyperFloat;

    fn expecting(&self, formatter: &mut Formatter) -> core::fmt::Result {
        write!(formatter, "a number or a string")
    }

    fn visit_u64<E: Error>(self, v: u64) -> Result<Self::Value, E> {
        Ok(HyperFloat::from_f64(v as f64))
    }

    fn visit_i64<E: Error>(self, v: i64) -> Result<Self::Value, E> {
        Ok(HyperFloat::from_f64(v as f64))
    }

    fn visit_f64<E: Error>(self, v: f64) -> Result<Self::Value, E> {
        Ok(HyperFloat::from_f64(v))
    }

    fn visit_str<E: Error>(self, v: &str) -> Result<Self::Value, E> {
        HyperFloat::parse(v).map_err(|e| Error::custom(format!("{e}: {v}")))
    }

    fn visit_string<E: Error>(self, v: String) -> Result<Self::Value, E> {
        self.visit_str(&v)
    }
}
