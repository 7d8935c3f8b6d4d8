//! Lenient timestamp deserialization.
//!
//! Persisted documents were written by a JavaScript app whose `Date` values
//! serialized sometimes as ISO-8601 strings and sometimes as epoch
//! milliseconds. Serialization always emits ISO-8601; deserialization
//! accepts both.

use jiff::Timestamp;
use serde::de::Error;
use serde::{Deserialize, Deserializer};

#[derive(Deserialize)]
#[serde(untagged)]
enum Raw {
    Text(String),
    Millis(i64),
}

fn from_raw<E: Error>(raw: Raw) -> Result<Timestamp, E> {
    match raw {
        Raw::Text(s) => s.parse().map_err(E::custom),
        Raw::Millis(ms) => Timestamp::from_millisecond(ms).map_err(E::custom),
    }
}

pub fn deserialize<'de, D>(deserializer: D) -> Result<Timestamp, D::Error>
where
    D: Deserializer<'de>,
{
    from_raw(Raw::deserialize(deserializer)?)
}

pub fn deserialize_opt<'de, D>(deserializer: D) -> Result<Option<Timestamp>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<Raw>::deserialize(deserializer)? {
        Some(raw) => from_raw(raw).map(Some),
        None => Ok(None),
    }
}
