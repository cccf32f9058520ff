//! Handler: SearchDevicesQuery
//!
//! Blank strings, the nil id and the zero timestamp all count as "not
//! provided" and are dropped before the store sees the criteria.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{default_page_size, default_start_index, non_blank, paging_rules, Paging, NO_FIELDS};
use crate::envelope::{ApiResult, PagedResult};
use crate::model::{Device, DeviceId, SearchCriteria};
use crate::pipeline::{HandlerResult, Request, RequestHandler, RuleSet};
use crate::store::DeviceStore;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchDevicesQuery {
    #[serde(default)]
    pub id: Option<DeviceId>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub brand: Option<String>,
    #[serde(default)]
    pub creation_time: Option<DateTime<Utc>>,
    #[serde(default = "default_start_index")]
    pub start_index: i64,
    #[serde(default = "default_page_size")]
    pub page_size: i64,
}

impl Default for SearchDevicesQuery {
    fn default() -> Self {
        Self {
            id: None,
            name: None,
            brand: None,
            creation_time: None,
            start_index: default_start_index(),
            page_size: default_page_size(),
        }
    }
}

impl SearchDevicesQuery {
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

    pub fn page(mut self, start_index: i64, page_size: i64) -> Self {
        self.start_index = start_index;
        self.page_size = page_size;
        self
    }

    /// The store-level filter for this query.
    pub fn criteria(&self) -> SearchCriteria {
        SearchCriteria {
            id: self.id.filter(|id| !id.is_nil()),
            name: non_blank(&self.name),
            brand: non_blank(&self.brand),
            creation_time: self.creation_time.filter(|t| *t != Device::zero_time()),
        }
    }

    pub fn rules() -> RuleSet<Self> {
        paging_rules(RuleSet::new()).rule(|query: &Self| !query.criteria().is_unset(), NO_FIELDS)
    }
}

impl Paging for SearchDevicesQuery {
    fn start_index(&self) -> i64 {
        self.start_index
    }

    fn page_size(&self) -> i64 {
        self.page_size
    }
}

impl Request for SearchDevicesQuery {
    type Output = PagedResult<Device>;
    const NAME: &'static str = "SearchDevicesQuery";
}

pub struct SearchDevicesHandler {
    store: Arc<dyn DeviceStore>,
}

impl SearchDevicesHandler {
    pub fn new(store: Arc<dyn DeviceStore>) -> Self {
        Self { store }
    }
}

impl RequestHandler<SearchDevicesQuery> for SearchDevicesHandler {
    fn handle(&self, request: &SearchDevicesQuery) -> HandlerResult<PagedResult<Device>> {
        let (start_index, page_size) = request.paging()?;
        let page = self
            .store
            .search(&request.criteria(), start_index, page_size)?;
        Ok(ApiResult::from_result(page))
    }
}
