mod deploy;
mod render;

use std::path::Path;

use clap::{
    Parser,
    Subcommand,
};
use rv_core::config::Config;
use rv_core::logging;
use rv_core::prelude::*;
use rv_deploy::cluster::ClusterSpecification;
use rv_deploy::options;
use rv_deploy::parameters::JobManagerParameters;

#[derive(Parser)]
#[command(
    about = "command-line app for deploying rivulet clusters on Kubernetes",
    version,
    propagate_version = true
)]
struct RvCommandRoot {
    #[command(subcommand)]
    subcommand: RvSubcommand,

    #[arg(short, long, default_value = "warn")]
    verbosity: String,
}

#[derive(Subcommand)]
enum RvSubcommand {
    #[command(about = "deploy a job manager to the target cluster", visible_alias = "d")]
    Deploy(deploy::Args),

    #[command(about = "print the generated job manager manifests", visible_alias = "r")]
    Render(render::Args),
}

pub(crate) fn load_params(config_path: &Path, cluster_id: Option<&str>) -> anyhow::Result<JobManagerParameters> {
    let mut config = Config::from_yaml_file(config_path)?;
    if let Some(cluster_id) = cluster_id {
        config.set(&options::CLUSTER_ID, cluster_id.to_string());
    }

    let cluster_spec = ClusterSpecification::from_config(&config);
    Ok(JobManagerParameters::new(config, cluster_spec))
}

#[tokio::main]
async fn main() -> EmptyResult {
    let args = RvCommandRoot::parse();
    logging::setup_for_cli(&args.verbosity);

    match &args.subcommand {
        RvSubcommand::Deploy(args) => deploy::cmd(args).await,
        RvSubcommand::Render(args) => render::cmd(args),
    }
}
