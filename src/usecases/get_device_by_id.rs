//! Handler: GetDeviceByIdQuery
//!
//! A missing record is a successful, empty envelope. Whether that becomes
//! a 404 is up to the transport.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use super::ID_MISSING;
use crate::envelope::ApiResult;
use crate::model::{Device, DeviceId};
use crate::pipeline::{HandlerResult, Request, RequestHandler, RuleSet};
use crate::store::DeviceStore;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetDeviceByIdQuery {
    #[serde(default)]
    pub id: DeviceId,
}

impl GetDeviceByIdQuery {
    pub fn new(id: DeviceId) -> Self {
        Self { id }
    }

    pub fn rules() -> RuleSet<Self> {
        RuleSet::new().rule(|query: &Self| !query.id.is_nil(), ID_MISSING)
    }
}

impl Request for GetDeviceByIdQuery {
    type Output = Device;
    const NAME: &'static str = "GetDeviceByIdQuery";
}

pub struct GetDeviceByIdHandler {
    store: Arc<dyn DeviceStore>,
}

impl GetDeviceByIdHandler {
    pub fn new(store: Arc<dyn DeviceStore>) -> Self {
        Self { store }
    }
}

impl RequestHandler<GetDeviceByIdQuery> for GetDeviceByIdHandler {
    fn handle(&self, request: &GetDeviceByIdQuery) -> HandlerResult<Device> {
        Ok(self
            .store
            .get_by_id(request.id)?
            .map(ApiResult::from_result)
            .unwrap_or_else(ApiResult::empty))
    }
}
