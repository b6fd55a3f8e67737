use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigurationError {
    #[error("--etcd-servers must be specified")]
    MissingServers,

    #[error("--storage-backend {0:?} is not supported, must be 'etcd2' or 'etcd3'")]
    UnknownBackend(String),

    #[error("--delete-collection-workers must be greater than 0")]
    InvalidDeleteCollectionWorkers,

    #[error("--etcd-certfile and --etcd-keyfile must be specified together")]
    IncompleteClientCertificate,
}

/// Every problem found by a single validation pass.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("invalid etcd options: {}", join_messages(.0))]
pub struct ValidationErrors(pub Vec<ConfigurationError>);

impl ValidationErrors {
    pub fn iter(&self) -> impl Iterator<Item = &ConfigurationError> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

fn join_messages(errors: &[ConfigurationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}
