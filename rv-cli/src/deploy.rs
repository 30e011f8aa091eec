use std::path::PathBuf;

use rv_core::prelude::*;
use rv_deploy::client::ClusterClient;
use rv_deploy::factory::build_job_manager_manifests;

#[derive(clap::Args)]
pub struct Args {
    #[arg(long_help = "path to the cluster config file", long, short)]
    pub config: PathBuf,

    #[arg(long_help = "override the configured cluster id", long)]
    pub cluster_id: Option<String>,
}

pub async fn cmd(args: &Args) -> EmptyResult {
    let params = crate::load_params(&args.config, args.cluster_id.as_deref())?;
    let manifests = build_job_manager_manifests(&params)?;

    let client = kube::Client::try_default().await?;
    ClusterClient::new(client)
        .deploy_job_manager(&params.namespace(), &manifests)
        .await?;

    println!("deployed job manager for cluster {}", params.cluster_id()?);
    Ok(())
}
