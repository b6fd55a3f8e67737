use std::fmt;
use std::sync::Arc;
use storage_types::{GroupResource, RestOptions};

use crate::registry::{ResolutionError, RestOptionsGetter};

/// Server-wide configuration consumed by the generic registry.
#[derive(Clone, Default)]
pub struct Config {
    /// Resolver the registry consults when it wires storage for a resource.
    pub rest_options_getter: Option<Arc<dyn RestOptionsGetter>>,
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn rest_options(&self, resource: &GroupResource) -> Result<RestOptions, ResolutionError> {
        let getter = self
            .rest_options_getter
            .as_ref()
            .ok_or_else(|| ResolutionError::NoGetterInstalled(resource.clone()))?;
        getter.get_rest_options(resource)
    }
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field(
                "rest_options_getter",
                &self.rest_options_getter.as_ref().map(|_| "<installed>"),
            )
            .finish()
    }
}
