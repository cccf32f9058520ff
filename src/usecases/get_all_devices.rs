//! Handler: GetAllDevicesQuery

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use super::{default_page_size, default_start_index, paging_rules, Paging};
use crate::envelope::{ApiResult, PagedResult};
use crate::model::Device;
use crate::pipeline::{HandlerResult, Request, RequestHandler, RuleSet};
use crate::store::DeviceStore;

/// One page of every device, newest first.
///
/// `start_index` is a page number, not an item offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetAllDevicesQuery {
    #[serde(default = "default_start_index")]
    pub start_index: i64,
    #[serde(default = "default_page_size")]
    pub page_size: i64,
}

impl Default for GetAllDevicesQuery {
    fn default() -> Self {
        Self {
            start_index: default_start_index(),
            page_size: default_page_size(),
        }
    }
}

impl GetAllDevicesQuery {
    pub fn new(start_index: i64, page_size: i64) -> Self {
        Self {
            start_index,
            page_size,
        }
    }

    pub fn rules() -> RuleSet<Self> {
        paging_rules(RuleSet::new())
    }
}

impl Paging for GetAllDevicesQuery {
    fn start_index(&self) -> i64 {
        self.start_index
    }

    fn page_size(&self) -> i64 {
        self.page_size
    }
}

impl Request for GetAllDevicesQuery {
    type Output = PagedResult<Device>;
    const NAME: &'static str = "GetAllDevicesQuery";
}

pub struct GetAllDevicesHandler {
    store: Arc<dyn DeviceStore>,
}

impl GetAllDevicesHandler {
    pub fn new(store: Arc<dyn DeviceStore>) -> Self {
        Self { store }
    }
}

impl RequestHandler<GetAllDevicesQuery> for GetAllDevicesHandler {
    fn handle(&self, request: &GetAllDevicesQuery) -> HandlerResult<PagedResult<Device>> {
        let (start_index, page_size) = request.paging()?;
        let page = self.store.get_all(start_index, page_size)?;
        Ok(ApiResult::from_result(page))
    }
}
