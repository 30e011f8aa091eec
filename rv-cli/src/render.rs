use std::path::PathBuf;

use rv_core::prelude::*;
use rv_deploy::factory::build_job_manager_manifests;

#[derive(clap::Args)]
pub struct Args {
    #[arg(long_help = "path to the cluster config file", long, short)]
    pub config: PathBuf,

    #[arg(long_help = "override the configured cluster id", long)]
    pub cluster_id: Option<String>,
}

pub fn cmd(args: &Args) -> EmptyResult {
    let params = crate::load_params(&args.config, args.cluster_id.as_deref())?;
    let manifests = build_job_manager_manifests(&params)?;

    print!("---\n{}", serde_yaml::to_string(&manifests.deployment)?);
    print!("---\n{}", serde_yaml::to_string(&manifests.rest_service)?);

    Ok(())
}
