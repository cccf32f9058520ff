use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::DeviceId;

/// A device record.
///
/// `Default` yields the zero record: nil id, empty strings and the zero
/// timestamp (`DateTime::<Utc>::default()`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Device {
    pub id: DeviceId,
    pub name: String,
    pub brand: String,
    pub creation_time: DateTime<Utc>,
}

impl Device {
    /// Build an unsaved device. The id stays nil until the store assigns one.
    pub fn new(name: impl Into<String>, brand: impl Into<String>, creation_time: DateTime<Utc>) -> Self {
        Self {
            id: DeviceId::nil(),
            name: name.into(),
            brand: brand.into(),
            creation_time,
        }
    }

    /// The zero timestamp, used as "unset" wherever a plain timestamp is stored.
    pub fn zero_time() -> DateTime<Utc> {
        DateTime::<Utc>::default()
    }
}

impl fmt::Display for Device {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Name:{}, Brand:{}, CreationTime:{}, Id:{}",
            self.name,
            self.brand,
            self.creation_time.to_rfc3339(),
            self.id
        )
    }
}

/// Field values to write onto an existing device.
///
/// `None` means "not provided". How `None` is treated depends on the
/// [`UpdateMode`](crate::UpdateMode) applying the changes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeviceChanges {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub brand: Option<String>,
    #[serde(default)]
    pub creation_time: Option<DateTime<Utc>>,
}

impl DeviceChanges {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn brand(mut self, brand: impl Into<String>) -> Self {
        self.brand = Some(brand.into());
        self
    }

    pub fn creation_time(mut self, creation_time: DateTime<Utc>) -> Self {
        self.creation_time = Some(creation_time);
        self
    }

    /// Every field of `device`, provided.
    pub fn from_device(device: &Device) -> Self {
        Self {
            name: Some(device.name.clone()),
            brand: Some(device.brand.clone()),
            creation_time: Some(device.creation_time),
        }
    }

    /// Fields of `device` that differ from their zero value.
    ///
    /// An empty name or the zero timestamp cannot be told apart from "not
    /// provided" here, so they come out as `None`.
    pub fn from_non_default(device: &Device) -> Self {
        Self {
            name: Some(device.name.clone()).filter(|name| !name.is_empty()),
            brand: Some(device.brand.clone()).filter(|brand| !brand.is_empty()),
            creation_time: Some(device.creation_time).filter(|time| *time != Device::zero_time()),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.brand.is_none() && self.creation_time.is_none()
    }
}
