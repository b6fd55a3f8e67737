use anyhow::{Context, Result};
use apiserver::{GroupResource, RestOptions, cli::Cli, config::Config};
use clap::Parser;
use serde::Serialize;
use tracing::{Level, info, warn};

#[derive(Serialize)]
struct ResolvedResource<'a> {
    resource: &'a GroupResource,
    options: RestOptions,
}

fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let options = cli.etcd_options().validated().inspect_err(|errors| {
        for err in errors.iter() {
            warn!("{}", err);
        }
    })?;

    info!(
        "Using storage backend {} at {:?} (prefix {})",
        options.storage_config.backend_kind,
        options.storage_config.server_list,
        options.storage_config.prefix
    );

    let mut config = Config::new();
    options.apply_to(&mut config);

    for resource in &cli.resolve {
        let options = config
            .rest_options(resource)
            .with_context(|| format!("Failed to resolve storage for {resource}"))?;
        let resolved = ResolvedResource { resource, options };
        println!("{}", serde_json::to_string_pretty(&resolved)?);
    }

    Ok(())
}
