use anyhow::Result;
use storage_types::{GroupResource, StorageBackendConfig};

/// Maps a resource to the backend that stores it.
///
/// Implementations own the interpretation of per-resource server overrides
/// and must be safe to call concurrently for different resources.
pub trait StorageFactory: Send + Sync {
    /// Backend configuration for `resource`.
    ///
    /// # Errors
    /// Fails when no destination is configured for the resource or the lookup
    /// itself fails; [`StorageError`](super::StorageError) covers the common cases.
    fn new_config(&self, resource: &GroupResource) -> Result<StorageBackendConfig>;

    /// Key prefix under which objects of `resource` are stored.
    fn resource_prefix(&self, resource: &GroupResource) -> String;
}
