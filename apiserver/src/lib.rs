#![cfg_attr(test, allow(clippy::unwrap_used))]

//! Storage options resolution for the API server.
//!
//! [`options::EtcdOptions`] describes the shared storage backend and is
//! validated once at startup. Binding it to a [`config::Config`] installs one
//! of two [`registry::RestOptionsGetter`] strategies, which the generic
//! registry later asks for the [`RestOptions`] of each resource type.

pub mod cli;
pub mod config;
pub mod options;
pub mod registry;
pub mod storage;

pub use storage_types::{
    BackendKind, Decorator, GroupResource, RestOptions, StorageBackendConfig, TransportSecurity,
};
