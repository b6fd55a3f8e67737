#![cfg_attr(test, allow(clippy::unwrap_used))]

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;
use std::sync::Arc;

/// Names an API resource type, e.g. `apps/deployments`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
pub struct GroupResource {
    pub group: String,
    pub resource: String,
}

impl GroupResource {
    pub fn new(group: impl Into<String>, resource: impl Into<String>) -> Self {
        Self {
            group: group.into(),
            resource: resource.into(),
        }
    }

    /// Path segment used below the storage prefix: `group/resource`.
    pub fn to_path(&self) -> String {
        format!("{}/{}", self.group, self.resource)
    }
}

impl fmt::Display for GroupResource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.group.is_empty() {
            write!(f, "{}", self.resource)
        } else {
            write!(f, "{}.{}", self.resource, self.group)
        }
    }
}

/// Parses `group/resource`. A bare `resource` belongs to the core (empty) group.
impl FromStr for GroupResource {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.split_once('/') {
            Some((_, "")) => Err(format!("missing resource in {s:?}")),
            Some((group, resource)) if !resource.contains('/') => {
                Ok(Self::new(group, resource))
            }
            Some(_) => Err(format!("expected group/resource, got {s:?}")),
            None if s.is_empty() => Err("empty resource".to_string()),
            None => Ok(Self::new("", s)),
        }
    }
}

/// Storage backend implementations the options layer knows how to select.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum BackendKind {
    Etcd2,
    #[default]
    Etcd3,
}

impl BackendKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            BackendKind::Etcd2 => "etcd2",
            BackendKind::Etcd3 => "etcd3",
        }
    }
}

impl fmt::Display for BackendKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BackendKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "etcd2" => Ok(BackendKind::Etcd2),
            "etcd3" => Ok(BackendKind::Etcd3),
            other => Err(format!(
                "unknown storage backend {other:?}, must be 'etcd2' or 'etcd3'"
            )),
        }
    }
}

/// Client TLS material used to secure backend communication.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct TransportSecurity {
    pub key_file: Option<PathBuf>,
    pub cert_file: Option<PathBuf>,
    pub ca_file: Option<PathBuf>,
}

/// How to reach a storage backend.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct StorageBackendConfig {
    /// Raw backend selector, kept as given so validation can report bad values.
    pub backend_kind: String,
    pub server_list: Vec<String>,
    pub prefix: String,
    pub transport: TransportSecurity,
    /// Strong (quorum) reads instead of the backend's default consistency.
    pub quorum: bool,
    pub deserialization_cache_size: usize,
}

pub const DEFAULT_PREFIX: &str = "/registry";

impl Default for StorageBackendConfig {
    fn default() -> Self {
        Self {
            backend_kind: BackendKind::default().to_string(),
            server_list: Vec::new(),
            prefix: DEFAULT_PREFIX.to_string(),
            transport: TransportSecurity::default(),
            quorum: false,
            deserialization_cache_size: 0,
        }
    }
}

impl StorageBackendConfig {
    pub fn with_servers<I, S>(servers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            server_list: servers.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }
}

/// Storage access decoration the generic registry should apply.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum Decorator {
    /// Calls go straight to the backend.
    Undecorated,
    /// Reads and watches are served from an in-memory watch cache.
    WithCacher,
}

impl Decorator {
    pub fn for_watch_cache(enabled: bool) -> Self {
        if enabled {
            Decorator::WithCacher
        } else {
            Decorator::Undecorated
        }
    }

    pub fn is_cached(&self) -> bool {
        matches!(self, Decorator::WithCacher)
    }
}

/// Everything the generic registry needs to wire storage for one resource.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RestOptions {
    pub storage_config: Arc<StorageBackendConfig>,
    pub decorator: Decorator,
    pub enable_garbage_collection: bool,
    pub delete_collection_workers: usize,
    pub resource_prefix: String,
}
