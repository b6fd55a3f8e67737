use clap::Args;
use std::path::PathBuf;

use super::etcd::EtcdOptions;

/// Command-line flags for [`EtcdOptions`].
///
/// Every field is optional: anything left unset keeps the value the options
/// already carry, so defaults live in one place.
#[derive(Args, Debug, Clone, Default, PartialEq, Eq)]
pub struct EtcdFlags {
    /// Per-resource etcd servers overrides, comma separated. The individual override
    /// format: group/resource#servers, where servers are http://ip:port, semicolon separated.
    #[arg(long, env = "ETCD_SERVERS_OVERRIDES", value_delimiter = ',')]
    pub etcd_servers_overrides: Option<Vec<String>>,

    /// The media type to use to store objects in storage. Some resources may only
    /// support a specific media type and will ignore this setting.
    #[arg(long, env = "STORAGE_MEDIA_TYPE", value_name = "MEDIA_TYPE")]
    pub storage_media_type: Option<String>,

    /// Number of workers spawned for DeleteCollection call. These are used to speed up
    /// namespace cleanup.
    #[arg(long, env = "DELETE_COLLECTION_WORKERS")]
    pub delete_collection_workers: Option<usize>,

    /// Enables the generic garbage collector. Must be synced with the corresponding flag
    /// of the controller manager.
    #[arg(long, env = "ENABLE_GARBAGE_COLLECTOR", num_args = 0..=1, default_missing_value = "true")]
    pub enable_garbage_collector: Option<bool>,

    /// Enable watch caching in the apiserver.
    #[arg(long, env = "WATCH_CACHE", num_args = 0..=1, default_missing_value = "true")]
    pub watch_cache: Option<bool>,

    /// The storage backend for persistence. Options: 'etcd3' (default), 'etcd2'.
    #[arg(long, env = "STORAGE_BACKEND")]
    pub storage_backend: Option<String>,

    /// Number of deserialized json objects to cache in memory.
    #[arg(long, env = "DESERIALIZATION_CACHE_SIZE")]
    pub deserialization_cache_size: Option<usize>,

    /// List of etcd servers to connect with (scheme://ip:port), comma separated.
    #[arg(long, env = "ETCD_SERVERS", value_delimiter = ',')]
    pub etcd_servers: Option<Vec<String>>,

    /// The prefix to prepend to all resource paths in etcd.
    #[arg(long, env = "ETCD_PREFIX")]
    pub etcd_prefix: Option<String>,

    /// SSL key file used to secure etcd communication.
    #[arg(long, env = "ETCD_KEYFILE")]
    pub etcd_keyfile: Option<PathBuf>,

    /// SSL certification file used to secure etcd communication.
    #[arg(long, env = "ETCD_CERTFILE")]
    pub etcd_certfile: Option<PathBuf>,

    /// SSL Certificate Authority file used to secure etcd communication.
    #[arg(long, env = "ETCD_CAFILE")]
    pub etcd_cafile: Option<PathBuf>,

    /// If true, enable quorum read.
    #[arg(long, env = "ETCD_QUORUM_READ", num_args = 0..=1, default_missing_value = "true")]
    pub etcd_quorum_read: Option<bool>,
}

impl EtcdFlags {
    /// Copies every flag that was given onto `options`.
    pub fn apply(self, options: &mut EtcdOptions) {
        let storage = &mut options.storage_config;

        if let Some(overrides) = self.etcd_servers_overrides {
            options.etcd_servers_overrides = non_blank(overrides);
        }
        if let Some(media_type) = self.storage_media_type {
            options.default_storage_media_type = media_type;
        }
        if let Some(workers) = self.delete_collection_workers {
            options.delete_collection_workers = workers;
        }
        if let Some(enabled) = self.enable_garbage_collector {
            options.enable_garbage_collection = enabled;
        }
        if let Some(enabled) = self.watch_cache {
            options.enable_watch_cache = enabled;
        }
        if let Some(backend) = self.storage_backend {
            storage.backend_kind = backend;
        }
        if let Some(size) = self.deserialization_cache_size {
            storage.deserialization_cache_size = size;
        }
        if let Some(servers) = self.etcd_servers {
            storage.server_list = non_blank(servers);
        }
        if let Some(prefix) = self.etcd_prefix {
            storage.prefix = prefix;
        }
        if let Some(key_file) = self.etcd_keyfile {
            storage.transport.key_file = Some(key_file);
        }
        if let Some(cert_file) = self.etcd_certfile {
            storage.transport.cert_file = Some(cert_file);
        }
        if let Some(ca_file) = self.etcd_cafile {
            storage.transport.ca_file = Some(ca_file);
        }
        if let Some(quorum) = self.etcd_quorum_read {
            storage.quorum = quorum;
        }
    }
}

/// `--etcd-servers=` and trailing commas yield empty items; they name no server.
fn non_blank(values: Vec<String>) -> Vec<String> {
    values
        .into_iter()
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
        .collect()
}
