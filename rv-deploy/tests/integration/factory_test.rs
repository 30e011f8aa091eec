use assertables::*;
use k8s_openapi::apimachinery::pkg::util::intstr::IntOrString;

use super::*;
use rv_deploy::factory::*;
use rv_deploy::pod::WorkloadPod;

#[rstest]
fn test_build_manifests_deployment(jm_params: JobManagerParameters) {
    let manifests = build_job_manager_manifests(&jm_params).unwrap();

    let depl = &manifests.deployment;
    assert_eq!(depl.metadata.name, Some(format!("{TEST_CLUSTER_ID}-jobmanager")));
    assert_eq!(depl.metadata.namespace, Some(TEST_NAMESPACE.into()));

    let spec = depl.spec.as_ref().unwrap();
    assert_eq!(spec.replicas, Some(1));
    assert_eq!(spec.selector.match_labels, Some(jm_params.selector_labels().unwrap()));

    let template_meta = spec.template.metadata.as_ref().unwrap();
    assert_eq!(template_meta.labels, Some(jm_params.labels().unwrap()));

    let pod_spec = spec.template.spec.as_ref().unwrap();
    assert_eq!(pod_spec.node_selector, Some(node_selector()));
    assert_eq!(pod_spec.containers.len(), 1);

    let container = &pod_spec.containers[0];
    assert_eq!(container.name, JOB_MANAGER_CONTAINER_NAME);
    assert_eq!(container.image, Some(TEST_IMAGE.into()));
    assert_eq!(container.ports.as_ref().unwrap().len(), 3);
    assert_eq!(container.env.as_ref().unwrap().len(), 2);
}

#[rstest]
fn test_build_manifests_service(jm_params: JobManagerParameters) {
    let manifests = build_job_manager_manifests(&jm_params).unwrap();

    let svc = &manifests.rest_service;
    assert_eq!(svc.metadata.name, Some(format!("{TEST_CLUSTER_ID}-rest")));
    assert_eq!(svc.metadata.namespace, Some(TEST_NAMESPACE.into()));

    let spec = svc.spec.as_ref().unwrap();
    assert_eq!(spec.type_, Some("ClusterIP".into()));
    assert_eq!(spec.selector, Some(jm_params.selector_labels().unwrap()));

    let ports = spec.ports.as_ref().unwrap();
    assert_eq!(ports.len(), 1);
    assert_eq!(ports[0].port, TEST_REST_PORT);
    assert_eq!(ports[0].target_port, Some(IntOrString::String(REST_PORT_NAME.into())));
}

#[rstest]
fn test_build_manifests_requires_cluster_id(test_cluster_spec: ClusterSpecification) {
    let params = JobManagerParameters::new(Config::new(), test_cluster_spec);
    assert_err!(build_job_manager_manifests(&params));
}

#[rstest]
fn test_base_pod_is_unmodified_baseline(base_pod: WorkloadPod) {
    assert_eq!(base_pod, WorkloadPod::default());
    assert_none!(base_pod.pod.spec);
    assert_none!(base_pod.pod.metadata.labels);
    assert_none!(base_pod.main_container.ports);
}

#[rstest]
fn test_manifest_names() {
    assert_eq!(job_manager_name("foo"), "foo-jobmanager");
    assert_eq!(rest_service_name("foo"), "foo-rest");
}
