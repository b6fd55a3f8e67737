use std::fmt;
use std::sync::Arc;
use storage_types::{Decorator, GroupResource, RestOptions};
use tracing::{debug, warn};

use super::error::ResolutionError;
use super::traits::RestOptionsGetter;
use crate::options::EtcdOptions;
use crate::storage::StorageFactory;

/// Looks up each resource's backend through a [`StorageFactory`].
///
/// Watch caching stays a process-wide decision taken from the options, not
/// something the factory can vary per resource.
#[derive(Clone)]
pub struct StorageFactoryRestOptionsFactory {
    options: EtcdOptions,
    storage_factory: Arc<dyn StorageFactory>,
}

impl StorageFactoryRestOptionsFactory {
    pub fn new(options: EtcdOptions, storage_factory: Arc<dyn StorageFactory>) -> Self {
        Self {
            options,
            storage_factory,
        }
    }
}

impl fmt::Debug for StorageFactoryRestOptionsFactory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StorageFactoryRestOptionsFactory")
            .field("options", &self.options)
            .finish_non_exhaustive()
    }
}

impl RestOptionsGetter for StorageFactoryRestOptionsFactory {
    fn get_rest_options(&self, resource: &GroupResource) -> Result<RestOptions, ResolutionError> {
        let storage_config = self.storage_factory.new_config(resource).map_err(|source| {
            warn!("No storage destination for {}: {}", resource, source);
            ResolutionError::StorageDestination {
                resource: resource.clone(),
                source,
            }
        })?;

        let ret = RestOptions {
            storage_config: Arc::new(storage_config),
            decorator: Decorator::for_watch_cache(self.options.enable_watch_cache),
            enable_garbage_collection: self.options.enable_garbage_collection,
            delete_collection_workers: self.options.delete_collection_workers,
            resource_prefix: self.storage_factory.resource_prefix(resource),
        };

        debug!(
            "Resolved {} to {} ({:?})",
            resource, ret.resource_prefix, ret.decorator
        );
        Ok(ret)
    }
}
