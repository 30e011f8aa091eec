use rv_core::config::{
    ConfigOption,
    DefaultedConfigOption,
};
use rv_core::macros::BTreeMap;

/// Prefix under which environment variables destined for the job-manager
/// container are stored in the config.
pub const JOB_MANAGER_ENV_PREFIX: &str = "containerized.master.env.";

pub const CLUSTER_ID: ConfigOption<String> = ConfigOption::new("kubernetes.cluster-id");
pub const CONTAINER_IMAGE: ConfigOption<String> = ConfigOption::new("kubernetes.container.image");
pub const JOB_MANAGER_LABELS: ConfigOption<BTreeMap<String, String>> =
    ConfigOption::new("kubernetes.jobmanager.labels");
pub const JOB_MANAGER_NODE_SELECTOR: ConfigOption<BTreeMap<String, String>> =
    ConfigOption::new("kubernetes.jobmanager.node-selector");
pub const JOB_MANAGER_ANNOTATIONS: ConfigOption<BTreeMap<String, String>> =
    ConfigOption::new("kubernetes.jobmanager.annotations");

pub const REST_PORT: DefaultedConfigOption<i32> = ConfigOption::new("rest.port").with_default(|| 8081);
pub const JOB_MANAGER_RPC_PORT: DefaultedConfigOption<i32> =
    ConfigOption::new("jobmanager.rpc.port").with_default(|| 6123);

// Stored as a string, not an int: this option also accepts port ranges, so
// the parse happens at read time
pub const BLOB_SERVER_PORT: DefaultedConfigOption<String> =
    ConfigOption::new("blob.server.port").with_default(|| "6124".into());

pub const JOB_MANAGER_CPU: DefaultedConfigOption<f64> =
    ConfigOption::new("kubernetes.jobmanager.cpu").with_default(|| 1.0);
pub const JOB_MANAGER_REPLICAS: DefaultedConfigOption<i32> =
    ConfigOption::new("kubernetes.jobmanager.replicas").with_default(|| 1);
pub const NAMESPACE: DefaultedConfigOption<String> =
    ConfigOption::new("kubernetes.namespace").with_default(|| "default".into());
pub const IMAGE_PULL_POLICY: DefaultedConfigOption<String> =
    ConfigOption::new("kubernetes.container.image.pull-policy").with_default(|| "IfNotPresent".into());
pub const SERVICE_ACCOUNT: DefaultedConfigOption<String> =
    ConfigOption::new("kubernetes.service-account").with_default(|| "default".into());

// Cluster sizing, for when no explicit ClusterSpecification is handed in
pub const JOB_MANAGER_MEMORY_MB: DefaultedConfigOption<i32> =
    ConfigOption::new("jobmanager.memory.mb").with_default(|| 1024);
pub const TASK_MANAGER_MEMORY_MB: DefaultedConfigOption<i32> =
    ConfigOption::new("taskmanager.memory.mb").with_default(|| 1024);
pub const TASK_MANAGER_SLOTS: DefaultedConfigOption<i32> =
    ConfigOption::new("taskmanager.slots").with_default(|| 1);
