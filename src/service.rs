//! DeviceService: one pipeline per request type, routed statically.
//!
//! `DeviceService` owns the shared store and a standard [`Pipeline`] for
//! each use case. [`DeviceService::send`] picks the pipeline from the
//! request's type; the convenience methods build the request for you.
//!
//! ## Example
//!
//! ```ignore
//! use device_manager::{DeviceService, InMemoryDeviceStore};
//! use device_manager::usecases::AddDeviceCommand;
//!
//! let service = DeviceService::new(Arc::new(InMemoryDeviceStore::empty()));
//! let added = service.send(&AddDeviceCommand::new("X", "Y", Utc::now()))?;
//! let found = service.get_device(added.data.unwrap().id)?;
//! ```

use std::sync::Arc;

use chrono::{DateTime, Utc};

use crate::config::DeviceManagerConfig;
use crate::envelope::PagedResult;
use crate::model::{Device, DeviceId};
use crate::pipeline::{HandlerResult, Pipeline, Request};
use crate::store::{DeviceStore, InMemoryDeviceStore};
use crate::usecases::{
    AddDeviceCommand, AddDeviceHandler, DeleteDeviceCommand, DeleteDeviceHandler,
    GetAllDevicesHandler, GetAllDevicesQuery, GetDeviceByIdHandler, GetDeviceByIdQuery,
    SearchDevicesHandler, SearchDevicesQuery, UpdateDeviceCommand, UpdateDeviceHandler,
    DEFAULT_PAGE_SIZE,
};

/// Request types [`DeviceService::send`] knows how to route.
pub trait Routed: Request + Sized {
    fn pipeline(service: &DeviceService) -> &Pipeline<Self>;
}

/// Implement [`Routed`] for each `request => field` pair.
macro_rules! route {
    ($($request:ty => $field:ident),* $(,)?) => {
        $(
            impl Routed for $request {
                fn pipeline(service: &DeviceService) -> &Pipeline<Self> {
                    &service.$field
                }
            }
        )*
    };
}

pub struct DeviceService {
    store: Arc<dyn DeviceStore>,
    default_page_size: i64,
    add: Pipeline<AddDeviceCommand>,
    delete: Pipeline<DeleteDeviceCommand>,
    get_by_id: Pipeline<GetDeviceByIdQuery>,
    get_all: Pipeline<GetAllDevicesQuery>,
    search: Pipeline<SearchDevicesQuery>,
    update: Pipeline<UpdateDeviceCommand>,
}

route! {
    AddDeviceCommand => add,
    DeleteDeviceCommand => delete,
    GetDeviceByIdQuery => get_by_id,
    GetAllDevicesQuery => get_all,
    SearchDevicesQuery => search,
    UpdateDeviceCommand => update,
}

impl DeviceService {
    /// Standard pipelines (validation, logging, handler) over `store`.
    pub fn new(store: Arc<dyn DeviceStore>) -> Self {
        Self {
            add: Pipeline::standard(
                AddDeviceHandler::new(store.clone()),
                vec![AddDeviceCommand::rules().boxed()],
            ),
            delete: Pipeline::standard(
                DeleteDeviceHandler::new(store.clone()),
                vec![DeleteDeviceCommand::rules().boxed()],
            ),
            get_by_id: Pipeline::standard(
                GetDeviceByIdHandler::new(store.clone()),
                vec![GetDeviceByIdQuery::rules().boxed()],
            ),
            get_all: Pipeline::standard(
                GetAllDevicesHandler::new(store.clone()),
                vec![GetAllDevicesQuery::rules().boxed()],
            ),
            search: Pipeline::standard(
                SearchDevicesHandler::new(store.clone()),
                vec![SearchDevicesQuery::rules().boxed()],
            ),
            update: Pipeline::standard(
                UpdateDeviceHandler::new(store.clone()),
                vec![UpdateDeviceCommand::rules().boxed()],
            ),
            default_page_size: DEFAULT_PAGE_SIZE,
            store,
        }
    }

    /// A seeded in-memory store configured from `config`.
    pub fn from_config(config: &DeviceManagerConfig) -> Self {
        let store = InMemoryDeviceStore::with_options(config.store_options());
        Self::new(Arc::new(store)).with_default_page_size(config.default_page_size)
    }

    pub fn with_default_page_size(mut self, page_size: i64) -> Self {
        self.default_page_size = page_size;
        self
    }

    pub fn store(&self) -> &Arc<dyn DeviceStore> {
        &self.store
    }

    pub fn default_page_size(&self) -> i64 {
        self.default_page_size
    }

    /// Run `request` through its pipeline.
    pub fn send<R: Routed>(&self, request: &R) -> HandlerResult<R::Output> {
        R::pipeline(self).send(request)
    }

    // ========================================================================
    // Convenience
    // ========================================================================

    pub fn add_device(
        &self,
        name: impl Into<String>,
        brand: impl Into<String>,
        creation_time: DateTime<Utc>,
    ) -> HandlerResult<Device> {
        self.send(&AddDeviceCommand::new(name, brand, creation_time))
    }

    pub fn delete_device(&self, id: DeviceId) -> HandlerResult<Device> {
        self.send(&DeleteDeviceCommand::new(id))
    }

    pub fn get_device(&self, id: DeviceId) -> HandlerResult<Device> {
        self.send(&GetDeviceByIdQuery::new(id))
    }

    pub fn get_all_devices(&self, start_index: i64, page_size: i64) -> HandlerResult<PagedResult<Device>> {
        self.send(&GetAllDevicesQuery::new(start_index, page_size))
    }

    /// Page `start_index` at the configured default page size.
    pub fn list_devices(&self, start_index: i64) -> HandlerResult<PagedResult<Device>> {
        self.get_all_devices(start_index, self.default_page_size)
    }

    pub fn search_devices(&self, query: &SearchDevicesQuery) -> HandlerResult<PagedResult<Device>> {
        self.send(query)
    }

    pub fn update_device(&self, command: &UpdateDeviceCommand) -> HandlerResult<Device> {
        self.send(command)
    }
}
