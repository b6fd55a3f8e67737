use super::*;
use crate::options::EtcdOptions;
use crate::storage::{StorageError, StorageFactory};
use std::collections::HashMap;
use std::sync::Arc;
use storage_types::{Decorator, GroupResource, StorageBackendConfig};

/// Factory that knows a fixed set of resources, each on its own servers.
struct StaticStorageFactory {
    destinations: HashMap<GroupResource, StorageBackendConfig>,
}

impl StaticStorageFactory {
    fn new() -> Self {
        Self {
            destinations: HashMap::new(),
        }
    }

    fn with_destination(mut self, resource: GroupResource, config: StorageBackendConfig) -> Self {
        self.destinations.insert(resource, config);
        self
    }
}

impl StorageFactory for StaticStorageFactory {
    fn new_config(&self, resource: &GroupResource) -> anyhow::Result<StorageBackendConfig> {
        self.destinations
            .get(resource)
            .cloned()
            .ok_or_else(|| StorageError::DestinationNotFound(resource.clone()).into())
    }

    fn resource_prefix(&self, resource: &GroupResource) -> String {
        format!("{}/{}", resource.group, resource.resource)
    }
}

fn create_test_options(enable_watch_cache: bool) -> EtcdOptions {
    let mut options = EtcdOptions::new(
        StorageBackendConfig::with_servers(["http://localhost:2379"]).with_prefix("/registry"),
    );
    options.enable_watch_cache = enable_watch_cache;
    options
}

#[test]
fn test_simple_resource_prefix() {
    let getter = SimpleRestOptionsFactory::new(create_test_options(true));

    for (group, resource) in [("apps", "deployments"), ("", "pods"), ("batch", "cronjobs")] {
        let ret = getter.rest_options(&GroupResource::new(group, resource));
        assert_eq!(ret.resource_prefix, format!("/registry/{group}/{resource}"));
    }
}

#[test]
fn test_simple_core_group_keeps_empty_segment() {
    let getter = SimpleRestOptionsFactory::new(create_test_options(true));

    let ret = getter.rest_options(&GroupResource::new("", "pods"));
    assert_eq!(ret.resource_prefix, "/registry//pods");
}

#[test]
fn test_simple_shares_base_config() {
    let options = create_test_options(true);
    let getter = SimpleRestOptionsFactory::new(options.clone());

    let deployments = getter.rest_options(&GroupResource::new("apps", "deployments"));
    let pods = getter.rest_options(&GroupResource::new("", "pods"));

    assert_eq!(*deployments.storage_config, options.storage_config);
    assert!(Arc::ptr_eq(&deployments.storage_config, &pods.storage_config));
}

#[test]
fn test_simple_copies_policy_fields() {
    let mut options = create_test_options(true);
    options.enable_garbage_collection = false;
    options.delete_collection_workers = 7;
    let getter = SimpleRestOptionsFactory::new(options);

    let ret = getter.rest_options(&GroupResource::new("apps", "deployments"));
    assert!(!ret.enable_garbage_collection);
    assert_eq!(ret.delete_collection_workers, 7);
}

#[test]
fn test_simple_decorator_follows_watch_cache() {
    let resource = GroupResource::new("apps", "deployments");

    let cached = SimpleRestOptionsFactory::new(create_test_options(true)).rest_options(&resource);
    let plain = SimpleRestOptionsFactory::new(create_test_options(false)).rest_options(&resource);

    assert_eq!(cached.decorator, Decorator::WithCacher);
    assert_eq!(plain.decorator, Decorator::Undecorated);
    assert_eq!(cached.resource_prefix, plain.resource_prefix);
    assert_eq!(cached.storage_config, plain.storage_config);
}

#[test]
fn test_simple_ignores_overrides() {
    let mut options = create_test_options(true);
    options.etcd_servers_overrides = vec!["apps/deployments#http://other:2379".to_string()];
    let getter = SimpleRestOptionsFactory::new(options);

    let ret = getter.rest_options(&GroupResource::new("apps", "deployments"));
    assert_eq!(ret.storage_config.server_list, vec!["http://localhost:2379".to_string()]);
    assert_eq!(ret.resource_prefix, "/registry/apps/deployments");
}

#[test]
fn test_simple_getter_never_fails() {
    let getter = SimpleRestOptionsFactory::new(EtcdOptions::default());

    let ret = getter
        .get_rest_options(&GroupResource::new("anything", "at-all"))
        .unwrap();
    assert_eq!(ret.resource_prefix, "/registry/anything/at-all");
}

#[test]
fn test_simple_is_idempotent() {
    let getter = SimpleRestOptionsFactory::new(create_test_options(true));
    let resource = GroupResource::new("apps", "deployments");

    assert_eq!(getter.rest_options(&resource), getter.rest_options(&resource));
}

#[test]
fn test_factory_uses_destination_verbatim() {
    let resource = GroupResource::new("apps", "deployments");
    let dedicated = StorageBackendConfig::with_servers(["http://events-0:2379", "http://events-1:2379"])
        .with_prefix("/dedicated");
    let factory = StaticStorageFactory::new().with_destination(resource.clone(), dedicated.clone());
    let getter = StorageFactoryRestOptionsFactory::new(create_test_options(true), Arc::new(factory));

    let ret = getter.get_rest_options(&resource).unwrap();
    assert_eq!(*ret.storage_config, dedicated);
    assert_eq!(ret.resource_prefix, "apps/deployments");
    assert_eq!(ret.decorator, Decorator::WithCacher);
    assert!(ret.enable_garbage_collection);
    assert_eq!(ret.delete_collection_workers, 1);
}

#[test]
fn test_factory_decorator_follows_watch_cache() {
    let resource = GroupResource::new("apps", "deployments");
    let factory = Arc::new(
        StaticStorageFactory::new().with_destination(resource.clone(), StorageBackendConfig::default()),
    );

    let getter = StorageFactoryRestOptionsFactory::new(create_test_options(false), factory);
    let ret = getter.get_rest_options(&resource).unwrap();
    assert_eq!(ret.decorator, Decorator::Undecorated);
}

#[test]
fn test_factory_missing_destination() {
    let getter = StorageFactoryRestOptionsFactory::new(
        create_test_options(true),
        Arc::new(StaticStorageFactory::new()),
    );
    let resource = GroupResource::new("core", "widgets");

    let err = getter.get_rest_options(&resource).unwrap_err();
    assert_eq!(err.resource(), &resource);
    assert!(matches!(err, ResolutionError::StorageDestination { .. }));

    let message = err.to_string();
    assert!(message.contains("widgets"));
    assert!(message.starts_with("unable to find storage destination for widgets.core"));
}

#[test]
fn test_factory_error_keeps_cause() {
    let getter = StorageFactoryRestOptionsFactory::new(
        create_test_options(true),
        Arc::new(StaticStorageFactory::new()),
    );

    let err = getter
        .get_rest_options(&GroupResource::new("core", "widgets"))
        .unwrap_err();
    let source = std::error::Error::source(&err).unwrap();
    assert!(source.to_string().contains("no storage destination configured"));
}

/// Factory whose lookups always fail with a config problem.
struct RejectingStorageFactory;

impl StorageFactory for RejectingStorageFactory {
    fn new_config(&self, resource: &GroupResource) -> anyhow::Result<StorageBackendConfig> {
        Err(StorageError::InvalidConfig {
            resource: resource.clone(),
            reason: "override lists no servers".to_string(),
        }
        .into())
    }

    fn resource_prefix(&self, resource: &GroupResource) -> String {
        resource.to_path()
    }
}

#[test]
fn test_factory_invalid_config_is_resolution_error() {
    let getter = StorageFactoryRestOptionsFactory::new(
        create_test_options(true),
        Arc::new(RejectingStorageFactory),
    );
    let resource = GroupResource::new("apps", "deployments");

    let err = getter.get_rest_options(&resource).unwrap_err();
    assert_eq!(err.resource(), &resource);

    let source = std::error::Error::source(&err).unwrap();
    assert_eq!(
        source.to_string(),
        "invalid storage configuration for deployments.apps: override lists no servers"
    );
    assert!(err.to_string().contains("override lists no servers"));
}

#[test]
fn test_factory_is_idempotent() {
    let resource = GroupResource::new("apps", "deployments");
    let factory = Arc::new(StaticStorageFactory::new().with_destination(
        resource.clone(),
        StorageBackendConfig::with_servers(["http://localhost:2379"]),
    ));
    let getter = StorageFactoryRestOptionsFactory::new(create_test_options(true), factory);

    assert_eq!(
        getter.get_rest_options(&resource).unwrap(),
        getter.get_rest_options(&resource).unwrap()
    );
}
