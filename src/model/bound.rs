//! Serde adapters for health bounds. JSON has no infinity, so an unbounded
//! limit is written as `null` and read back as the matching infinity.
//!
//! ```ignore
//! #[serde(with = "crate::model::bound::lower")]
//! min_health: f64,
//! ```

use serde::{Deserialize, Deserializer, Serializer};

fn serialize_bound<S: Serializer>(value: f64, serializer: S) -> Result<S::Ok, S::Error> {
    if value.is_infinite() {
        serializer.serialize_none()
    } else {
        serializer.serialize_f64(value)
    }
}

fn deserialize_bound<'de, D: Deserializer<'de>>(
    deserializer: D,
    unbounded: f64,
) -> Result<f64, D::Error> {
    Ok(Option::<f64>::deserialize(deserializer)?.unwrap_or(unbounded))
}

/// Lower bound: `null` is `-inf`.
pub mod lower {
    use serde::{Deserializer, Serializer};

    pub fn serialize<S: Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
        super::serialize_bound(*value, serializer)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
        super::deserialize_bound(deserializer, f64::NEG_INFINITY)
    }
}

/// Upper bound: `null` is `+inf`.
pub mod upper {
    use serde::{Deserializer, Serializer};

    pub fn serialize<S: Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
        super::serialize_bound(*value, serializer)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
        super::deserialize_bound(deserializer, f64::INFINITY)
    }
}
