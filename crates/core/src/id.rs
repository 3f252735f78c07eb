//! Strongly-typed identifiers used across the domain.

use core::str::FromStr;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::PurchaseError;

/// Identifier of a purchase record.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PurchaseId(Uuid);

impl PurchaseId {
    /// Create a new identifier.
    ///
    /// Uses UUIDv7 (time-ordered). Prefer passing IDs explicitly in tests
    /// for determinism.
    pub fn new() -> Self {
        Self(Uuid::now_v7())
    }

    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for PurchaseId {
    fn default() -> Self {
        Self::new()
    }
}

impl core::fmt::Display for PurchaseId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

impl FromStr for PurchaseId {
    type Err = PurchaseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let uuid = Uuid::from_str(s)
            .map_err(|e| PurchaseError::invalid_request(format!("PurchaseId: {e}")))?;
        Ok(Self(uuid))
    }
}

macro_rules! impl_string_newtype {
    ($t:ty) => {
        impl $t {
            pub fn new(value: impl Into<String>) -> Self {
                Self(value.into())
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl core::fmt::Display for $t {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                core::fmt::Display::fmt(&self.0, f)
            }
        }

        impl From<String> for $t {
            fn from(value: String) -> Self {
                Self(value)
            }
        }

        impl From<&str> for $t {
            fn from(value: &str) -> Self {
                Self(value.to_string())
            }
        }

        impl AsRef<str> for $t {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }
    };
}

/// Identifier of a catalog item.
///
/// Opaque string, not a UUID: callers may probe arbitrary ids and the
/// interface answers "not found" rather than "unparseable".
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(String);

/// Identifier of an item category (carried on items, no behavioral effect).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CategoryId(String);

impl_string_newtype!(ItemId);
impl_string_newtype!(CategoryId);

impl ItemId {
    /// Generate a fresh random id (seeding).
    pub fn generate() -> Self {
        Self(Uuid::now_v7().to_string())
    }
}

impl CategoryId {
    /// Generate a fresh random id (seeding).
    pub fn generate() -> Self {
        Self(Uuid::now_v7().to_string())
    }
}

/// Identifier of the originating dispensing unit.
///
/// Caller-supplied; falls back to the `"unknown"` sentinel when absent.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MachineId(String);

impl_string_newtype!(MachineId);

impl MachineId {
    pub const UNKNOWN: &'static str = "unknown";

    /// Resolve an optional caller-supplied identifier to a machine id.
    pub fn from_caller(value: Option<String>) -> Self {
        match value {
            Some(v) if !v.trim().is_empty() => Self(v),
            _ => Self::default(),
        }
    }
}

impl Default for MachineId {
    fn default() -> Self {
        Self(Self::UNKNOWN.to_string())
    }
}
