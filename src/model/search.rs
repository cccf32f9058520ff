use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{Device, DeviceId};

/// Filter for [`DeviceStore::search`](crate::DeviceStore::search).
///
/// Every provided field must match (AND). Id and creation time match
/// exactly; name and brand match by substring.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchCriteria {
    #[serde(default)]
    pub id: Option<DeviceId>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub brand: Option<String>,
    #[serde(default)]
    pub creation_time: Option<DateTime<Utc>>,
}

impl SearchCriteria {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn id(mut self, id: DeviceId) -> Self {
        self.id = Some(id);
        self
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

    /// True when no field filters anything.
    pub fn is_unset(&self) -> bool {
        self.id.is_none() && self.name.is_none() && self.brand.is_none() && self.creation_time.is_none()
    }

    /// Whether `device` satisfies every provided field.
    pub fn matches(&self, device: &Device, case_sensitive: bool) -> bool {
        self.id.map_or(true, |id| id == device.id)
            && self
                .name
                .as_deref()
                .map_or(true, |needle| contains(&device.name, needle, case_sensitive))
            && self
                .brand
                .as_deref()
                .map_or(true, |needle| contains(&device.brand, needle, case_sensitive))
            && self
                .creation_time
                .map_or(true, |time| time == device.creation_time)
    }
}

fn contains(haystack: &str, needle: &str, case_sensitive: bool) -> bool {
    if case_sensitive {
        haystack.contains(needle)
    } else {
        haystack.to_lowercase().contains(&needle.to_lowercase())
    }
}
