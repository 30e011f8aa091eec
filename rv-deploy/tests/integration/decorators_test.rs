use assertables::*;
use rv_core::k8s::{
    container_port,
    cpu_quantity,
    memory_quantity_mb,
};

use super::*;
use rv_deploy::decorators::*;
use rv_deploy::pod::WorkloadPod;

#[rstest]
fn test_init_decorator(jm_params: JobManagerParameters) {
    let pod = InitJobManagerDecorator::new(&jm_params).decorate(Default::default()).unwrap();

    let labels = pod.pod.metadata.labels.as_ref().unwrap();
    for (k, v) in user_labels() {
        assert_eq!(labels.get(&k), Some(&v));
    }
    assert_eq!(labels.get(APP_KUBERNETES_IO_COMPONENT_KEY), Some(&JOB_MANAGER_COMPONENT.to_string()));

    // nothing seeded annotations, so they stay unset
    assert_none!(pod.pod.metadata.annotations);

    let spec = pod.pod.spec.as_ref().unwrap();
    assert_eq!(spec.node_selector, Some(node_selector()));
    assert_eq!(spec.service_account_name, Some("default".into()));

    let container = &pod.main_container;
    assert_eq!(container.name, JOB_MANAGER_CONTAINER_NAME);
    assert_eq!(container.image, Some(TEST_IMAGE.into()));
    assert_eq!(container.image_pull_policy, Some("IfNotPresent".into()));

    let resources = container.resources.as_ref().unwrap();
    let requests = resources.requests.as_ref().unwrap();
    assert_eq!(requests.get("cpu"), Some(&cpu_quantity(TEST_JOB_MANAGER_CPU)));
    assert_eq!(requests.get("memory"), Some(&memory_quantity_mb(TEST_JOB_MANAGER_MEMORY_MB)));
    assert_eq!(resources.limits, resources.requests);
}

#[rstest]
fn test_init_decorator_annotations(test_config: Config, test_cluster_spec: ClusterSpecification) {
    let mut config = test_config;
    config.set(&options::JOB_MANAGER_ANNOTATIONS, user_labels());

    let params = JobManagerParameters::new(config, test_cluster_spec);
    let pod = InitJobManagerDecorator::new(&params).decorate(Default::default()).unwrap();
    assert_eq!(pod.pod.metadata.annotations, Some(user_labels()));
}

#[rstest]
fn test_env_decorator(jm_params: JobManagerParameters) {
    let pod = EnvDecorator::new(&jm_params).decorate(Default::default()).unwrap();

    let env = pod.main_container.env.as_ref().unwrap();
    assert_eq!(env.len(), 2);
    for (name, value) in customized_envs() {
        assert!(env.contains(&corev1::EnvVar {
            name,
            value: Some(value),
            ..Default::default()
        }));
    }
}

#[rstest]
fn test_env_decorator_appends(jm_params: JobManagerParameters) {
    let existing = corev1::EnvVar {
        name: "ALREADY_THERE".into(),
        value: Some("yes".into()),
        ..Default::default()
    };
    let pod = WorkloadPod::builder()
        .with_main_container(corev1::Container {
            env: Some(vec![existing.clone()]),
            ..Default::default()
        })
        .build();

    let pod = EnvDecorator::new(&jm_params).decorate(pod).unwrap();
    let env = pod.main_container.env.as_ref().unwrap();
    assert_eq!(env.len(), 3);
    assert_eq!(env[0], existing);
}

#[rstest]
fn test_env_decorator_no_envs(base_config: Config, test_cluster_spec: ClusterSpecification) {
    let params = JobManagerParameters::new(base_config, test_cluster_spec);
    let pod = EnvDecorator::new(&params).decorate(Default::default()).unwrap();
    assert_none!(pod.main_container.env);
}

#[rstest]
fn test_ports_decorator(jm_params: JobManagerParameters) {
    let pod = PortsDecorator::new(&jm_params).decorate(Default::default()).unwrap();

    let ports = pod.main_container.ports.as_ref().unwrap();
    let expected = vec![
        container_port(REST_PORT_NAME, TEST_REST_PORT),
        container_port(RPC_PORT_NAME, TEST_RPC_PORT),
        container_port(BLOB_PORT_NAME, 8346),
    ];
    assert_iter_eq!(ports, &expected);
}

#[rstest]
fn test_ports_decorator_bad_blob_port(test_config: Config, test_cluster_spec: ClusterSpecification) {
    let mut config = test_config;
    config.set(&options::BLOB_SERVER_PORT, "junk".to_string());

    let params = JobManagerParameters::new(config, test_cluster_spec);
    assert_err!(PortsDecorator::new(&params).decorate(Default::default()));
}

#[rstest]
fn test_chain_leaves_baseline_untouched(jm_params: JobManagerParameters, base_pod: WorkloadPod) {
    let mut pod = base_pod.clone();
    for decorator in job_manager_decorators(&jm_params) {
        pod = decorator.decorate(pod).unwrap();
    }

    assert_eq!(base_pod, WorkloadPod::default());
    assert!(pod != base_pod);
}
