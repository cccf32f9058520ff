//! Handler: DeleteDeviceCommand

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::warn;

use super::ID_MISSING;
use crate::envelope::ApiResult;
use crate::error::DeviceError;
use crate::model::{Device, DeviceId};
use crate::pipeline::{HandlerResult, Request, RequestHandler, RuleSet};
use crate::store::DeviceStore;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteDeviceCommand {
    #[serde(default)]
    pub id: DeviceId,
}

impl DeleteDeviceCommand {
    pub fn new(id: DeviceId) -> Self {
        Self { id }
    }

    pub fn rules() -> RuleSet<Self> {
        RuleSet::new().rule(|cmd: &Self| !cmd.id.is_nil(), ID_MISSING)
    }
}

impl Request for DeleteDeviceCommand {
    type Output = Device;
    const NAME: &'static str = "DeleteDeviceCommand";
}

pub struct DeleteDeviceHandler {
    store: Arc<dyn DeviceStore>,
}

impl DeleteDeviceHandler {
    pub fn new(store: Arc<dyn DeviceStore>) -> Self {
        Self { store }
    }
}

impl RequestHandler<DeleteDeviceCommand> for DeleteDeviceHandler {
    fn handle(&self, request: &DeleteDeviceCommand) -> HandlerResult<Device> {
        if self.store.get_by_id(request.id)?.is_none() {
            return Ok(ApiResult::from_errors(DeviceError::NotFound(request.id).messages()));
        }

        match self.store.delete(request.id)? {
            Some(deleted) => Ok(ApiResult::from_result(deleted)),
            None => {
                warn!(id = %request.id, "device vanished before delete");
                let failure = DeviceError::OperationFailed("Error deleting device.".into());
                Ok(ApiResult::from_errors(failure.messages()))
            }
        }
    }
}
