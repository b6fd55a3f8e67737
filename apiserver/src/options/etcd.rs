use serde::{Deserialize, Serialize};
use std::sync::Arc;
use storage_types::{BackendKind, StorageBackendConfig};
use tracing::debug;

use super::error::{ConfigurationError, ValidationErrors};
use crate::config::Config;
use crate::registry::{SimpleRestOptionsFactory, StorageFactoryRestOptionsFactory};
use crate::storage::StorageFactory;

pub const DEFAULT_STORAGE_MEDIA_TYPE: &str = "application/json";

/// Storage settings shared by every resource served by one API server.
///
/// Built once at startup, optionally overridden from flags, validated, then
/// handed by value to whichever resolution strategy gets installed.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct EtcdOptions {
    pub storage_config: StorageBackendConfig,

    /// Per-resource server overrides (`group/resource#servers`). Only the
    /// storage factory reads these.
    pub etcd_servers_overrides: Vec<String>,

    /// Set to `application/vnd.kubernetes.protobuf` to store objects as protobuf.
    pub default_storage_media_type: String,
    pub delete_collection_workers: usize,
    pub enable_garbage_collection: bool,
    pub enable_watch_cache: bool,
}

impl Default for EtcdOptions {
    fn default() -> Self {
        Self::new(StorageBackendConfig::default())
    }
}

impl EtcdOptions {
    pub fn new(storage_config: StorageBackendConfig) -> Self {
        Self {
            storage_config,
            etcd_servers_overrides: Vec::new(),
            default_storage_media_type: DEFAULT_STORAGE_MEDIA_TYPE.to_string(),
            delete_collection_workers: 1,
            enable_garbage_collection: true,
            enable_watch_cache: true,
        }
    }

    /// Reports every configuration problem; an empty list means the options are usable.
    pub fn validate(&self) -> Vec<ConfigurationError> {
        let mut all_errors = Vec::new();

        // Blank entries cannot be dialled, so they count as missing.
        if self
            .storage_config
            .server_list
            .iter()
            .all(|server| server.trim().is_empty())
        {
            all_errors.push(ConfigurationError::MissingServers);
        }

        if self
            .storage_config
            .backend_kind
            .parse::<BackendKind>()
            .is_err()
        {
            all_errors.push(ConfigurationError::UnknownBackend(
                self.storage_config.backend_kind.clone(),
            ));
        }

        if self.delete_collection_workers == 0 {
            all_errors.push(ConfigurationError::InvalidDeleteCollectionWorkers);
        }

        let transport = &self.storage_config.transport;
        if transport.cert_file.is_some() != transport.key_file.is_some() {
            all_errors.push(ConfigurationError::IncompleteClientCertificate);
        }

        all_errors
    }

    /// Like [`validate`](Self::validate), but folds the problems into one error
    /// so startup code can bail out with `?`.
    pub fn validated(self) -> Result<Self, ValidationErrors> {
        let errors = self.validate();
        if errors.is_empty() {
            Ok(self)
        } else {
            Err(ValidationErrors(errors))
        }
    }

    /// Installs a resolver that stores every resource in the shared backend.
    pub fn apply_to(&self, config: &mut Config) {
        debug!("Installing simple REST options getter");
        config.rest_options_getter = Some(Arc::new(SimpleRestOptionsFactory::new(self.clone())));
    }

    /// Installs a resolver that asks `factory` where each resource lives.
    pub fn apply_with_storage_factory_to(
        &self,
        factory: Arc<dyn StorageFactory>,
        config: &mut Config,
    ) {
        debug!("Installing storage factory REST options getter");
        config.rest_options_getter = Some(Arc::new(StorageFactoryRestOptionsFactory::new(
            self.clone(),
            factory,
        )));
    }
}
