// Well-known labels and annotations
pub const KUBERNETES_IO_METADATA_NAME_KEY: &str = "kubernetes.io/metadata.name";
pub const APP_KUBERNETES_IO_NAME_KEY: &str = "app.kubernetes.io/name";
pub const APP_KUBERNETES_IO_COMPONENT_KEY: &str = "app.kubernetes.io/component";
pub const APP_KUBERNETES_IO_MANAGED_BY_KEY: &str = "app.kubernetes.io/managed-by";

// Values rivulet stamps onto everything it generates
pub const MANAGED_BY_VALUE: &str = "rivulet";
pub const JOB_MANAGER_COMPONENT: &str = "jobmanager";
pub const TASK_MANAGER_COMPONENT: &str = "taskmanager";

// Container port names; these have to be stable because the rest Service
// targets them by name
pub const REST_PORT_NAME: &str = "rest";
pub const RPC_PORT_NAME: &str = "rpc";
pub const BLOB_PORT_NAME: &str = "blob-server";

// Container names
pub const JOB_MANAGER_CONTAINER_NAME: &str = "jobmanager";
