use rv_core::config::Config;
use rv_core::errors::*;
use rv_core::macros::*;
use rv_core::prelude::*;

use crate::cluster::ClusterSpecification;
use crate::options;

#[derive(Debug, Error)]
pub enum ParametersError {
    #[error("invalid blob server port: {0}")]
    InvalidBlobPort(String),
}

impl ParametersError {
    pub(crate) fn invalid_blob_port(in_: &str) -> anyhow::Error {
        anyhow!(ParametersError::InvalidBlobPort(in_.into()))
    }
}

/// Read-only view over a fully-populated config plus the cluster sizing;
/// everything the job-manager manifests are derived from, in one place.  The
/// config must be done changing before this is constructed.
#[derive(Clone, Debug)]
pub struct JobManagerParameters {
    config: Config,
    cluster_spec: ClusterSpecification,
}

impl JobManagerParameters {
    pub fn new(config: Config, cluster_spec: ClusterSpecification) -> JobManagerParameters {
        JobManagerParameters { config, cluster_spec }
    }

    pub fn cluster_id(&self) -> anyhow::Result<String> {
        self.config.get_required(&options::CLUSTER_ID)
    }

    pub fn namespace(&self) -> String {
        self.config.get_or_default(&options::NAMESPACE)
    }

    pub fn image(&self) -> anyhow::Result<String> {
        self.config.get_required(&options::CONTAINER_IMAGE)
    }

    pub fn image_pull_policy(&self) -> String {
        self.config.get_or_default(&options::IMAGE_PULL_POLICY)
    }

    pub fn service_account(&self) -> String {
        self.config.get_or_default(&options::SERVICE_ACCOUNT)
    }

    pub fn replicas(&self) -> i32 {
        self.config.get_or_default(&options::JOB_MANAGER_REPLICAS)
    }

    pub fn rest_port(&self) -> i32 {
        self.config.get_or_default(&options::REST_PORT)
    }

    pub fn rpc_port(&self) -> i32 {
        self.config.get_or_default(&options::JOB_MANAGER_RPC_PORT)
    }

    /// The blob-server port is configured as a string; junk or non-positive
    /// values surface here as errors rather than bad manifests.
    pub fn blob_server_port(&self) -> anyhow::Result<i32> {
        let raw = self.config.get_or_default(&options::BLOB_SERVER_PORT);
        match raw.parse::<i32>() {
            Ok(port) if port > 0 => Ok(port),
            _ => Err(ParametersError::invalid_blob_port(&raw)),
        }
    }

    pub fn job_manager_cpu(&self) -> f64 {
        self.config.get_or_default(&options::JOB_MANAGER_CPU)
    }

    pub fn job_manager_memory_mb(&self) -> i32 {
        self.cluster_spec.master_memory_mb()
    }

    pub fn cluster_spec(&self) -> &ClusterSpecification {
        &self.cluster_spec
    }

    /// Stable identity labels; the Deployment's selector matches on exactly
    /// these, so nothing else may ever overwrite them.
    pub fn selector_labels(&self) -> anyhow::Result<BTreeMap<String, String>> {
        let cluster_id = self.cluster_id()?;
        Ok(labels!(
            APP_KUBERNETES_IO_NAME_KEY => cluster_id,
            APP_KUBERNETES_IO_COMPONENT_KEY => JOB_MANAGER_COMPONENT,
            APP_KUBERNETES_IO_MANAGED_BY_KEY => MANAGED_BY_VALUE,
        ))
    }

    /// All labels for the job-manager pods: the user's labels plus the
    /// selector labels, with the selector labels winning on conflict.
    pub fn labels(&self) -> anyhow::Result<BTreeMap<String, String>> {
        let mut labels = self.user_labels();
        labels.extend(self.selector_labels()?);
        Ok(labels)
    }

    pub fn user_labels(&self) -> BTreeMap<String, String> {
        self.config.get(&options::JOB_MANAGER_LABELS).unwrap_or_default()
    }

    pub fn node_selector(&self) -> BTreeMap<String, String> {
        self.config.get(&options::JOB_MANAGER_NODE_SELECTOR).unwrap_or_default()
    }

    pub fn annotations(&self) -> BTreeMap<String, String> {
        self.config.get(&options::JOB_MANAGER_ANNOTATIONS).unwrap_or_default()
    }

    /// Environment variables forwarded to the job-manager container, collected
    /// from the prefixed config entries.
    pub fn environments(&self) -> BTreeMap<String, String> {
        self.config.with_prefix(options::JOB_MANAGER_ENV_PREFIX).collect()
    }
}
