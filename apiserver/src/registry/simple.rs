use std::sync::Arc;
use storage_types::{Decorator, GroupResource, RestOptions, StorageBackendConfig};
use tracing::debug;

use super::error::ResolutionError;
use super::traits::RestOptionsGetter;
use crate::options::EtcdOptions;

/// Stores every resource in the one configured backend.
///
/// Per-resource server overrides are not consulted here; routing
/// resources elsewhere is the job of [`StorageFactoryRestOptionsFactory`].
///
/// [`StorageFactoryRestOptionsFactory`]: super::StorageFactoryRestOptionsFactory
#[derive(Debug, Clone)]
pub struct SimpleRestOptionsFactory {
    options: EtcdOptions,
    storage_config: Arc<StorageBackendConfig>,
}

impl SimpleRestOptionsFactory {
    pub fn new(options: EtcdOptions) -> Self {
        let storage_config = Arc::new(options.storage_config.clone());
        Self {
            options,
            storage_config,
        }
    }

    /// Infallible form of [`RestOptionsGetter::get_rest_options`].
    pub fn rest_options(&self, resource: &GroupResource) -> RestOptions {
        let ret = RestOptions {
            storage_config: Arc::clone(&self.storage_config),
            decorator: Decorator::for_watch_cache(self.options.enable_watch_cache),
            enable_garbage_collection: self.options.enable_garbage_collection,
            delete_collection_workers: self.options.delete_collection_workers,
            resource_prefix: format!("{}/{}", self.storage_config.prefix, resource.to_path()),
        };

        debug!(
            "Resolved {} to {} ({:?})",
            resource, ret.resource_prefix, ret.decorator
        );
        ret
    }
}

impl RestOptionsGetter for SimpleRestOptionsFactory {
    fn get_rest_options(&self, resource: &GroupResource) -> Result<RestOptions, ResolutionError> {
        Ok(self.rest_options(resource))
    }
}
