use rstest::fixture;
use rv_core::config::Config;
use rv_core::macros::*;
use rv_deploy::cluster::ClusterSpecification;
use rv_deploy::options;
use rv_deploy::parameters::JobManagerParameters;
use rv_deploy::pod::WorkloadPod;

use crate::constants::*;

pub fn customized_envs() -> BTreeMap<String, String> {
    labels!("key1" => "value1", "key2" => "value2")
}

pub fn user_labels() -> BTreeMap<String, String> {
    labels!("label1" => "value1", "label2" => "value2")
}

pub fn node_selector() -> BTreeMap<String, String> {
    labels!("env" => "production", "disk" => "ssd")
}

/// Baseline config every deployment test starts from: just enough identity
/// for manifest generation to succeed.
#[fixture]
pub fn base_config() -> Config {
    let mut config = Config::new();
    config
        .set(&options::CLUSTER_ID, TEST_CLUSTER_ID.to_string())
        .set(&options::NAMESPACE, TEST_NAMESPACE.to_string())
        .set(&options::CONTAINER_IMAGE, TEST_IMAGE.to_string());
    config
}

/// Job-manager flavor of the baseline: seeds the ports, CPU, forwarded envs,
/// and the user label/selector maps on top of `base_config`.
#[fixture]
pub fn test_config(base_config: Config) -> Config {
    let mut config = base_config;
    config
        .set(&options::REST_PORT, TEST_REST_PORT)
        .set(&options::JOB_MANAGER_RPC_PORT, TEST_RPC_PORT)
        .set(&options::BLOB_SERVER_PORT, TEST_BLOB_SERVER_PORT.to_string())
        .set(&options::JOB_MANAGER_CPU, TEST_JOB_MANAGER_CPU);
    for (name, value) in customized_envs() {
        config.set_raw(&format!("{}{name}", options::JOB_MANAGER_ENV_PREFIX), &value);
    }
    config
        .set(&options::JOB_MANAGER_LABELS, user_labels())
        .set(&options::JOB_MANAGER_NODE_SELECTOR, node_selector());
    config
}

#[fixture]
pub fn test_cluster_spec() -> ClusterSpecification {
    ClusterSpecification::builder()
        .set_master_memory_mb(TEST_JOB_MANAGER_MEMORY_MB)
        .set_task_manager_memory_mb(TEST_TASK_MANAGER_MEMORY_MB)
        .set_slots_per_task_manager(TEST_SLOTS_PER_TASK_MANAGER)
        .build()
}

#[fixture]
pub fn jm_params(test_config: Config, test_cluster_spec: ClusterSpecification) -> JobManagerParameters {
    JobManagerParameters::new(test_config, test_cluster_spec)
}

#[fixture]
pub fn base_pod() -> WorkloadPod {
    WorkloadPod::builder().build()
}
