use storage_types::GroupResource;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ResolutionError {
    #[error("unable to find storage destination for {resource}, due to {source}")]
    StorageDestination {
        resource: GroupResource,
        source: anyhow::Error,
    },

    #[error("no REST options getter installed, cannot resolve {0}")]
    NoGetterInstalled(GroupResource),
}

impl ResolutionError {
    pub fn resource(&self) -> &GroupResource {
        match self {
            ResolutionError::StorageDestination { resource, .. } => resource,
            ResolutionError::NoGetterInstalled(resource) => resource,
        }
    }
}
