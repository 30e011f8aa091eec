use super::*;

#[rstest]
fn test_builder_defaults() {
    let spec = ClusterSpecification::builder().build();
    assert_eq!(spec.master_memory_mb(), 1024);
    assert_eq!(spec.task_manager_memory_mb(), 1024);
    assert_eq!(spec.slots_per_task_manager(), 1);
}

#[rstest]
fn test_builder_explicit(test_cluster_spec: ClusterSpecification) {
    assert_eq!(test_cluster_spec.master_memory_mb(), TEST_JOB_MANAGER_MEMORY_MB);
    assert_eq!(test_cluster_spec.task_manager_memory_mb(), TEST_TASK_MANAGER_MEMORY_MB);
    assert_eq!(test_cluster_spec.slots_per_task_manager(), TEST_SLOTS_PER_TASK_MANAGER);
}

#[rstest]
fn test_from_config() {
    let mut config = Config::new();
    config
        .set(&options::JOB_MANAGER_MEMORY_MB, 768)
        .set(&options::TASK_MANAGER_SLOTS, 3);

    let spec = ClusterSpecification::from_config(&config);
    assert_eq!(spec.master_memory_mb(), 768);
    assert_eq!(spec.task_manager_memory_mb(), 1024);
    assert_eq!(spec.slots_per_task_manager(), 3);
}
