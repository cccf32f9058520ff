//! Handler: AddDeviceCommand
//!
//! Stores a new device under a store-assigned id. Any id the caller sends
//! is dropped during deserialization.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::error;

use super::{BRAND_MISSING, CREATION_TIME_MISSING, NAME_MISSING};
use crate::envelope::ApiResult;
use crate::error::DeviceError;
use crate::model::Device;
use crate::pipeline::{HandlerResult, Request, RequestHandler, RuleSet};
use crate::store::DeviceStore;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddDeviceCommand {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub brand: String,
    #[serde(default)]
    pub creation_time: Option<DateTime<Utc>>,
}

impl AddDeviceCommand {
    pub fn new(name: impl Into<String>, brand: impl Into<String>, creation_time: DateTime<Utc>) -> Self {
        Self {
            name: name.into(),
            brand: brand.into(),
            creation_time: Some(creation_time),
        }
    }

    pub fn rules() -> RuleSet<Self> {
        RuleSet::new()
            .rule(|cmd: &Self| !cmd.name.trim().is_empty(), NAME_MISSING)
            .rule(|cmd: &Self| !cmd.brand.trim().is_empty(), BRAND_MISSING)
            .rule(
                |cmd: &Self| cmd.creation_time.is_some_and(|t| t != Device::zero_time()),
                CREATION_TIME_MISSING,
            )
    }

    fn to_device(&self) -> Device {
        Device::new(
            self.name.clone(),
            self.brand.clone(),
            self.creation_time.unwrap_or_else(Device::zero_time),
        )
    }
}

impl Request for AddDeviceCommand {
    type Output = Device;
    const NAME: &'static str = "AddDeviceCommand";
}

pub struct AddDeviceHandler {
    store: Arc<dyn DeviceStore>,
}

impl AddDeviceHandler {
    pub fn new(store: Arc<dyn DeviceStore>) -> Self {
        Self { store }
    }
}

impl RequestHandler<AddDeviceCommand> for AddDeviceHandler {
    fn handle(&self, request: &AddDeviceCommand) -> HandlerResult<Device> {
        let saved = self.store.add(request.to_device())?;

        if saved.id.is_nil() {
            let failure = DeviceError::OperationFailed("Error adding device.".into());
            error!(device = %saved, "store returned a device without an id");
            return Ok(ApiResult::from_errors(failure.messages()));
        }

        Ok(ApiResult::from_result(saved))
    }
}
