// ABOUTME: Three-state field wrapper for sparse update requests
// ABOUTME: Distinguishes an omitted field from an explicit null and from a supplied value
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Deserializer};

/// One field of a partial update
///
/// Declare fields as `#[serde(default)] field: Patch<T>` so that a key missing
/// from the JSON body becomes [`Patch::Absent`] while `null` becomes
/// [`Patch::Null`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Patch<T> {
    /// Key not present in the request; leave the stored value alone
    Absent,
    /// Key present with an explicit `null`
    Null,
    /// Key present with a value
    Value(T),
}

impl<T> Patch<T> {
    /// Whether the key was omitted
    #[must_use]
    pub const fn is_absent(&self) -> bool {
        matches!(self, Self::Absent)
    }

    /// Supplied value, if any
    #[must_use]
    pub const fn value(&self) -> Option<&T> {
        match self {
            Self::Value(value) => Some(value),
            Self::Absent | Self::Null => None,
        }
    }
}

impl<T> Default for Patch<T> {
    fn default() -> Self {
        Self::Absent
    }
}

impl<T> From<T> for Patch<T> {
    fn from(value: T) -> Self {
        Self::Value(value)
    }
}

impl<'de, T> Deserialize<'de> for Patch<T>
where
    T: Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        // Only reached when the key exists; absence is handled by `#[serde(default)]`
        Option::<T>::deserialize(deserializer).map(|value| value.map_or(Self::Null, Self::Value))
    }
}
