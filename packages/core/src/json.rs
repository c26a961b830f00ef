//! Conversion between [`Version`] and its structured (JSON) form.
//!
//! The object form is
//!
//! ```json
//! { "major": 1, "minor": 0, "patch": 0, "prerelease": ["rc", "1"], "build": ["sha"] }
//! ```
//!
//! `prerelease` and `build` are omitted when empty and optional on input.
//! The same form is used by the `serde` implementations.

use serde::de::{self, Deserialize, Deserializer};
use serde::ser::{Serialize, SerializeMap, Serializer};
use serde_json::{Map, Value};
use tracing::debug;

use crate::validation::{TagField, VersionError};
use crate::version::Version;

impl Version {
    /// Construct a version from a structured value.
    ///
    /// `value` must be an object holding non-negative integers under `major`,
    /// `minor` and `patch`. `prerelease` and `build`, when present, must be
    /// arrays of non-empty strings. Every failure is a
    /// [`VersionError::InvalidArgument`] naming the key and what was wrong.
    pub fn from_json(value: &Value) -> Result<Self, VersionError> {
        read_object(value).inspect_err(|e| debug!(error = %e, "rejected version json"))
    }

    /// Convert the version to its structured object form.
    pub fn to_json(&self) -> Value {
        let mut object = Map::new();
        object.insert("major".into(), self.major.into());
        object.insert("minor".into(), self.minor.into());
        object.insert("patch".into(), self.patch.into());
        if !self.prerelease.is_empty() {
            object.insert("prerelease".into(), self.prerelease.clone().into());
        }
        if !self.build.is_empty() {
            object.insert("build".into(), self.build.clone().into());
        }
        Value::Object(object)
    }
}

fn read_object(value: &Value) -> Result<Version, VersionError> {
    let object = value.as_object().ok_or_else(|| {
        VersionError::InvalidArgument(format!(
            "semver json is not an object, got {}",
            kind(value)
        ))
    })?;

    Ok(Version {
        major: required_uint(object, "major")?,
        minor: required_uint(object, "minor")?,
        patch: required_uint(object, "patch")?,
        prerelease: optional_tags(object, TagField::Prerelease)?,
        build: optional_tags(object, TagField::Build)?,
    })
}

fn required_uint(object: &Map<String, Value>, key: &str) -> Result<u64, VersionError> {
    let value = object.get(key).ok_or_else(|| {
        VersionError::InvalidArgument(format!(
            "semver json does not contain a '{key}' key"
        ))
    })?;
    value.as_u64().ok_or_else(|| {
        VersionError::InvalidArgument(format!(
            "semver json '{key}' must be a non-negative integer, got {}",
            kind(value)
        ))
    })
}

fn optional_tags(object: &Map<String, Value>, field: TagField) -> Result<Vec<String>, VersionError> {
    let Some(value) = object.get(field.as_str()) else {
        return Ok(Vec::new());
    };
    let elements = value.as_array().ok_or_else(|| {
        VersionError::InvalidArgument(format!(
            "semver json '{field}' is not an array, got {}",
            kind(value)
        ))
    })?;

    elements
        .iter()
        .enumerate()
        .map(|(i, element)| {
            let tag = element.as_str().ok_or_else(|| {
                VersionError::InvalidArgument(format!(
                    "semver json '{field}' contains a non-string element at index {i}"
                ))
            })?;
            if tag.is_empty() {
                return Err(VersionError::InvalidArgument(format!(
                    "semver json '{field}' element at index {i} may not be empty"
                )));
            }
            Ok(tag.to_owned())
        })
        .collect()
}

/// Short description of a value's type for error messages.
fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(n) if n.is_u64() => "a non-negative integer",
        Value::Number(n) if n.is_i64() => "a negative integer",
        Value::Number(_) => "a fractional number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

impl TryFrom<&Value> for Version {
    type Error = VersionError;

    fn try_from(value: &Value) -> Result<Self, Self::Error> {
        Version::from_json(value)
    }
}

impl TryFrom<Value> for Version {
    type Error = VersionError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        Version::from_json(&value)
    }
}

impl From<&Version> for Value {
    fn from(version: &Version) -> Self {
        version.to_json()
    }
}

impl From<Version> for Value {
    fn from(version: Version) -> Self {
        version.to_json()
    }
}

/// Serialises as the structured object form, omitting empty tag lists.
impl Serialize for Version {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let len = 3 + usize::from(!self.prerelease.is_empty()) + usize::from(!self.build.is_empty());
        let mut map = serializer.serialize_map(Some(len))?;
        map.serialize_entry("major", &self.major)?;
        map.serialize_entry("minor", &self.minor)?;
        map.serialize_entry("patch", &self.patch)?;
        if !self.prerelease.is_empty() {
            map.serialize_entry("prerelease", &self.prerelease)?;
        }
        if !self.build.is_empty() {
            map.serialize_entry("build", &self.build)?;
        }
        map.end()
    }
}

/// Deserialises from the structured object form with the same checks as
/// [`Version::from_json`].
impl<'de> Deserialize<'de> for Version {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        Version::from_json(&value).map_err(|e| de::Error::custom(e.message()))
    }
}

// --- tests -------------------------------------------------------------------
