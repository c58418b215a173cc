//! Wire encoding for optional flavor targets.
//!
//! The solver reads any negative target as "unconstrained"; this client
//! always writes exactly `-1` for an absent value.

use serde::{Deserialize, Deserializer, Serializer};

pub const UNCONSTRAINED: i64 = -1;

pub fn serialize<S>(value: &Option<f64>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    match value {
        Some(v) => serializer.serialize_f64(*v),
        None => serializer.serialize_i64(UNCONSTRAINED),
    }
}

pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<f64>::deserialize(deserializer)?;
    Ok(raw.filter(|v| *v >= 0.0))
}
