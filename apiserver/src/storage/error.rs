use storage_types::GroupResource;
use thiserror::Error;

/// Errors a [`StorageFactory`](super::StorageFactory) implementation may report.
#[derive(Error, Debug)]
pub enum StorageError {
    #[error("no storage destination configured for {0}")]
    DestinationNotFound(GroupResource),

    #[error("invalid storage configuration for {resource}: {reason}")]
    InvalidConfig {
        resource: GroupResource,
        reason: String,
    },
}
