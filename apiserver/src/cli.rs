use clap::Parser;
use storage_types::GroupResource;

use crate::options::{EtcdFlags, EtcdOptions};

/// Resolve the storage options the API server would use for each resource.
#[derive(Parser, Debug)]
#[command(name = "apiserver", version)]
pub struct Cli {
    #[command(flatten)]
    pub etcd: EtcdFlags,

    /// Resource to resolve, as group/resource (a bare resource is in the core group).
    /// May be repeated.
    #[arg(long = "resolve", value_name = "GROUP/RESOURCE")]
    pub resolve: Vec<GroupResource>,
}

impl Cli {
    /// Default options with every given flag applied on top.
    pub fn etcd_options(&self) -> EtcdOptions {
        let mut options = EtcdOptions::default();
        self.etcd.clone().apply(&mut options);
        options
    }
}
