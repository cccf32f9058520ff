//! Update strategies: how a set of [`DeviceChanges`] is merged onto a
//! stored [`Device`].

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::DeviceError;
use crate::model::{Device, DeviceChanges};

/// Merge policy for an update.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum UpdateMode {
    /// Overwrite only the provided fields.
    #[default]
    Partial,
    /// Overwrite every field; fields not provided become their zero value.
    Full,
}

impl UpdateMode {
    /// Merge `changes` onto `original` in place. The id is never touched.
    pub fn apply(self, original: &mut Device, changes: &DeviceChanges) {
        match self {
            UpdateMode::Full => {
                original.name = changes.name.clone().unwrap_or_default();
                original.brand = changes.brand.clone().unwrap_or_default();
                original.creation_time = changes.creation_time.unwrap_or_else(Device::zero_time);
            }
            UpdateMode::Partial => {
                if let Some(name) = &changes.name {
                    original.name = name.clone();
                }
                if let Some(brand) = &changes.brand {
                    original.brand = brand.clone();
                }
                if let Some(creation_time) = changes.creation_time {
                    original.creation_time = creation_time;
                }
            }
        }
    }

    pub fn is_partial(self) -> bool {
        matches!(self, UpdateMode::Partial)
    }
}

impl fmt::Display for UpdateMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UpdateMode::Partial => write!(f, "Partial"),
            UpdateMode::Full => write!(f, "Full"),
        }
    }
}

impl FromStr for UpdateMode {
    type Err = DeviceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "partial" => Ok(UpdateMode::Partial),
            "full" => Ok(UpdateMode::Full),
            other => {
                tracing::error!(mode = other, "no update strategy for mode");
                Err(DeviceError::Unsupported(format!("update mode '{}'", s)))
            }
        }
    }
}
