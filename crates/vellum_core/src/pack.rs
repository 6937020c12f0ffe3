//! Packing values into the rendering surface's wire form
//!
//! Packed data is compact JSON behind a `data:` prefix. The prefix lets the
//! receiving side tell a packed payload apart from a plain string attribute.

use std::fmt;

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::{CoreError, Result};

/// Prefix marking a packed payload
pub const PACKED_PREFIX: &str = "data:";

/// A packed value, ready for transmission
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Packed(String);

impl Packed {
    /// The full wire form, prefix included
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The JSON payload without the prefix
    pub fn payload(&self) -> &str {
        &self.0[PACKED_PREFIX.len()..]
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for Packed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Packed {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Pack a value into its wire form.
pub fn pack<T: Serialize + ?Sized>(value: &T) -> Result<Packed> {
    let json = to_json(value)?;
    tracing::trace!(bytes = json.len(), "packed value");
    Ok(Packed(format!("{PACKED_PREFIX}{json}")))
}

/// Decode a packed wire string back into a value.
pub fn unpack<T: DeserializeOwned>(packed: &str) -> Result<T> {
    let payload = packed
        .strip_prefix(PACKED_PREFIX)
        .ok_or(CoreError::NotPacked)?;
    from_json(payload)
}

/// Encode a value as compact JSON.
pub fn to_json<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    Ok(serde_json::to_string(value)?)
}

/// Decode a value from JSON.
pub fn from_json<T: DeserializeOwned>(json: &str) -> Result<T> {
    Ok(serde_json::from_str(json)?)
}
