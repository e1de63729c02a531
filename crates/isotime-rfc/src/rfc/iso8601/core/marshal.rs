//! serde integration for [`Time`].
//!
//! Strings are parsed with the ISO 8601 parser, `null` deserializes to the
//! default value, and any other literal is a format error
//! ([`RfcError::NotAStringLiteral`]) rather than a type mismatch.
//!
//! XML element text arrives from `quick-xml` as a map holding a single
//! `$text` (or `$value`) entry; that one shape is unwrapped and parsed.

use std::fmt;

use serde::de::{self, MapAccess, SeqAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::time::Time;
use crate::error::RfcError;

/// Keys `quick-xml` uses for the text content of an element.
const TEXT_KEYS: [&str; 2] = ["$text", "$value"];

impl Serialize for Time {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Time {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(TimeVisitor)
    }
}

fn not_a_string<E: de::Error>(literal: impl fmt::Display) -> E {
    E::custom(RfcError::NotAStringLiteral(literal.to_string()))
}

struct TimeVisitor;

impl<'de> Visitor<'de> for TimeVisitor {
    type Value = Time;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("an ISO 8601 timestamp string or null")
    }

    fn visit_str<E: de::Error>(self, value: &str) -> Result<Time, E> {
        value.parse().map_err(E::custom)
    }

    fn visit_unit<E: de::Error>(self) -> Result<Time, E> {
        Ok(Time::default())
    }

    fn visit_none<E: de::Error>(self) -> Result<Time, E> {
        Ok(Time::default())
    }

    fn visit_some<D: Deserializer<'de>>(self, deserializer: D) -> Result<Time, D::Error> {
        deserializer.deserialize_any(self)
    }

    fn visit_bool<E: de::Error>(self, value: bool) -> Result<Time, E> {
        Err(not_a_string(value))
    }

    fn visit_i64<E: de::Error>(self, value: i64) -> Result<Time, E> {
        Err(not_a_string(value))
    }

    fn visit_u64<E: de::Error>(self, value: u64) -> Result<Time, E> {
        Err(not_a_string(value))
    }

    fn visit_f64<E: de::Error>(self, value: f64) -> Result<Time, E> {
        Err(not_a_string(value))
    }

    fn visit_seq<A: SeqAccess<'de>>(self, _seq: A) -> Result<Time, A::Error> {
        Err(not_a_string("sequence"))
    }

    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Time, A::Error> {
        let Some(key) = map.next_key::<String>()? else {
            return Err(not_a_string("map"));
        };
        if !TEXT_KEYS.contains(&key.as_str()) {
            return Err(not_a_string("map"));
        }
        let text: String = map.next_value()?;
        if map.next_key::<de::IgnoredAny>()?.is_some() {
            return Err(not_a_string("map"));
        }
        self.visit_str(&text)
    }
}
