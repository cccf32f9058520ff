//! Handler: UpdateDeviceCommand
//!
//! Fetches the record, merges the provided fields onto it with the
//! requested [`UpdateMode`], and writes the merged record back in full.
//! Lookup and write are two store calls; a delete landing in between
//! surfaces as an operation failure.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::warn;

use super::{non_blank, BRAND_MISSING, CREATION_TIME_MISSING, ID_MISSING, NAME_MISSING, NO_FIELDS};
use crate::envelope::ApiResult;
use crate::error::DeviceError;
use crate::model::{Device, DeviceChanges, DeviceId};
use crate::pipeline::{HandlerResult, Request, RequestHandler, RuleSet};
use crate::store::DeviceStore;
use crate::strategy::UpdateMode;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateDeviceCommand {
    #[serde(default)]
    pub id: DeviceId,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub brand: Option<String>,
    #[serde(default)]
    pub creation_time: Option<DateTime<Utc>>,
    #[serde(default)]
    pub update_mode: UpdateMode,
}

impl UpdateDeviceCommand {
    pub fn partial(id: DeviceId) -> Self {
        Self {
            id,
            update_mode: UpdateMode::Partial,
            ..Self::default()
        }
    }

    pub fn full(id: DeviceId) -> Self {
        Self {
            id,
            update_mode: UpdateMode::Full,
            ..Self::default()
        }
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

    /// Provided fields, with the zero timestamp dropped.
    ///
    /// `Partial` also drops blank text. `Full` keeps an explicit empty
    /// string, which clears the field.
    pub fn changes(&self) -> DeviceChanges {
        let creation_time = self.creation_time.filter(|t| *t != Device::zero_time());
        match self.update_mode {
            UpdateMode::Partial => DeviceChanges {
                name: non_blank(&self.name),
                brand: non_blank(&self.brand),
                creation_time,
            },
            UpdateMode::Full => DeviceChanges {
                name: self.name.clone(),
                brand: self.brand.clone(),
                creation_time,
            },
        }
    }

    pub fn rules() -> RuleSet<Self> {
        let full = |cmd: &Self| cmd.update_mode == UpdateMode::Full;
        RuleSet::new()
            .rule(|cmd: &Self| !cmd.id.is_nil(), ID_MISSING)
            .rule_when(full, |cmd: &Self| cmd.name.is_some(), NAME_MISSING)
            .rule_when(full, |cmd: &Self| cmd.brand.is_some(), BRAND_MISSING)
            .rule_when(
                full,
                |cmd: &Self| cmd.changes().creation_time.is_some(),
                CREATION_TIME_MISSING,
            )
            .rule_when(
                |cmd: &Self| cmd.update_mode.is_partial(),
                |cmd: &Self| !cmd.changes().is_empty(),
                NO_FIELDS,
            )
    }
}

impl Request for UpdateDeviceCommand {
    type Output = Device;
    const NAME: &'static str = "UpdateDeviceCommand";
}

pub struct UpdateDeviceHandler {
    store: Arc<dyn DeviceStore>,
}

impl UpdateDeviceHandler {
    pub fn new(store: Arc<dyn DeviceStore>) -> Self {
        Self { store }
    }
}

impl RequestHandler<UpdateDeviceCommand> for UpdateDeviceHandler {
    fn handle(&self, request: &UpdateDeviceCommand) -> HandlerResult<Device> {
        let Some(mut device) = self.store.get_by_id(request.id)? else {
            return Ok(ApiResult::from_errors(DeviceError::NotFound(request.id).messages()));
        };

        request.update_mode.apply(&mut device, &request.changes());

        match self.store.update(&device, UpdateMode::Full)? {
            Some(updated) => Ok(ApiResult::from_result(updated)),
            None => {
                warn!(id = %request.id, "device vanished before update");
                let failure = DeviceError::OperationFailed("Error updating device.".into());
                Ok(ApiResult::from_errors(failure.messages()))
            }
        }
    }
}
