pub const TEST_CLUSTER_ID: &str = "test-cluster";
pub const TEST_NAMESPACE: &str = "test-namespace";
pub const TEST_IMAGE: &str = "docker.foo:1234/rivulet:latest";

pub const TEST_JOB_MANAGER_CPU: f64 = 2.0;
pub const TEST_JOB_MANAGER_MEMORY_MB: i32 = 768;
pub const TEST_TASK_MANAGER_MEMORY_MB: i32 = 1024;
pub const TEST_SLOTS_PER_TASK_MANAGER: i32 = 3;

pub const TEST_REST_PORT: i32 = 9081;
pub const TEST_RPC_PORT: i32 = 7123;
pub const TEST_BLOB_SERVER_PORT: &str = "8346";
