//! Feature map output types.
//!
//! The sole output of the crate is a flat mapping from feature name to a
//! boolean, integer, float, or string value. Values serialize untagged, so a
//! map ships as plain JSON for whatever collection layer sits downstream.

use std::collections::BTreeMap;

use serde::Serialize;

/// One feature value.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum FeatureValue {
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(String),
}

impl FeatureValue {
    /// The boolean payload, if this is a boolean feature.
    #[must_use]
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// The integer payload, if this is an integer feature.
    #[must_use]
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Self::Int(n) => Some(*n),
            _ => None,
        }
    }

    /// The float payload; integer features coerce losslessly enough for
    /// classifier consumption.
    #[must_use]
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Float(f) => Some(*f),
            Self::Int(n) => Some(*n as f64),
            _ => None,
        }
    }

    /// The string payload, if this is a string feature.
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Str(s) => Some(s),
            _ => None,
        }
    }
}

impl From<bool> for FeatureValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<i64> for FeatureValue {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<usize> for FeatureValue {
    fn from(value: usize) -> Self {
        Self::Int(i64::try_from(value).unwrap_or(i64::MAX))
    }
}

impl From<u64> for FeatureValue {
    fn from(value: u64) -> Self {
        Self::Int(i64::try_from(value).unwrap_or(i64::MAX))
    }
}

impl From<f64> for FeatureValue {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<String> for FeatureValue {
    fn from(value: String) -> Self {
        Self::Str(value)
    }
}

impl From<&str> for FeatureValue {
    fn from(value: &str) -> Self {
        Self::Str(value.to_string())
    }
}

/// The assembled feature mapping. Keys are fixed and unique; consumers treat
/// unknown or missing keys as absent features rather than errors.
pub type FeatureMap = BTreeMap<&'static str, FeatureValue>;
