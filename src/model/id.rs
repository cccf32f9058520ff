use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::DeviceError;

/// Store-assigned identity of a device.
///
/// The nil UUID is the empty id: it means "not assigned yet" on a fresh
/// record and "not found" wherever an id comes back from a lookup.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DeviceId(Uuid);

impl DeviceId {
    /// A fresh random id.
    pub fn new() -> Self {
        DeviceId(Uuid::new_v4())
    }

    pub const fn nil() -> Self {
        DeviceId(Uuid::nil())
    }

    pub fn is_nil(&self) -> bool {
        self.0.is_nil()
    }
}

impl From<Uuid> for DeviceId {
    fn from(uuid: Uuid) -> Self {
        DeviceId(uuid)
    }
}

impl fmt::Display for DeviceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for DeviceId {
    type Err = DeviceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(s.trim())
            .map(DeviceId)
            .map_err(|e| DeviceError::InvalidArgument(format!("device id '{}': {}", s, e)))
    }
}
