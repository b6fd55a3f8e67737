use storage_types::{GroupResource, RestOptions};

use super::error::ResolutionError;

/// Resolves the storage options for a resource type.
///
/// Called by the generic registry once per resource while its endpoints are
/// being set up, never per request. Callers keep the returned options.
pub trait RestOptionsGetter: Send + Sync {
    fn get_rest_options(&self, resource: &GroupResource) -> Result<RestOptions, ResolutionError>;
}
