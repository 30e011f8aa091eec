use k8s_openapi::apimachinery::pkg::util::intstr::IntOrString;
use rv_core::prelude::*;
use tracing::*;

use crate::decorators::job_manager_decorators;
use crate::parameters::JobManagerParameters;
use crate::pod::WorkloadPod;

/// Everything needed to stand up a job manager in a cluster.
#[derive(Clone, Debug, PartialEq)]
pub struct JobManagerManifests {
    pub deployment: appsv1::Deployment,
    pub rest_service: corev1::Service,
}

pub fn job_manager_name(cluster_id: &str) -> String {
    format!("{cluster_id}-jobmanager")
}

pub fn rest_service_name(cluster_id: &str) -> String {
    format!("{cluster_id}-rest")
}

/// Run the decorator chain over a fresh pod and wrap the result into the
/// deployable manifests.  Any decorator failure aborts the whole build.
pub fn build_job_manager_manifests(params: &JobManagerParameters) -> anyhow::Result<JobManagerManifests> {
    let mut pod = WorkloadPod::builder().build();
    for decorator in job_manager_decorators(params) {
        pod = decorator.decorate(pod)?;
    }

    let manifests = JobManagerManifests {
        deployment: build_deployment(params, pod)?,
        rest_service: build_rest_service(params)?,
    };
    debug!("assembled job manager manifests for {}", params.cluster_id()?);

    Ok(manifests)
}

fn build_deployment(params: &JobManagerParameters, pod: WorkloadPod) -> anyhow::Result<appsv1::Deployment> {
    let cluster_id = params.cluster_id()?;
    let WorkloadPod { pod: mut template_pod, main_container } = pod;

    // The main container always goes first so tooling that grabs
    // .containers[0] finds the job manager
    template_pod
        .spec
        .get_or_insert(Default::default())
        .containers
        .insert(0, main_container);

    Ok(appsv1::Deployment {
        metadata: metav1::ObjectMeta {
            namespace: Some(params.namespace()),
            name: Some(job_manager_name(&cluster_id)),
            labels: Some(params.labels()?),
            ..Default::default()
        },
        spec: Some(appsv1::DeploymentSpec {
            replicas: Some(params.replicas()),
            selector: metav1::LabelSelector {
                match_labels: Some(params.selector_labels()?),
                ..Default::default()
            },
            template: corev1::PodTemplateSpec {
                metadata: Some(template_pod.metadata),
                spec: template_pod.spec,
            },
            ..Default::default()
        }),
        ..Default::default()
    })
}

fn build_rest_service(params: &JobManagerParameters) -> anyhow::Result<corev1::Service> {
    let cluster_id = params.cluster_id()?;

    Ok(corev1::Service {
        metadata: metav1::ObjectMeta {
            namespace: Some(params.namespace()),
            name: Some(rest_service_name(&cluster_id)),
            labels: Some(params.selector_labels()?),
            ..Default::default()
        },
        spec: Some(corev1::ServiceSpec {
            type_: Some("ClusterIP".into()),
            ports: Some(vec![corev1::ServicePort {
                name: Some(REST_PORT_NAME.into()),
                port: params.rest_port(),
                target_port: Some(IntOrString::String(REST_PORT_NAME.into())),
                ..Default::default()
            }]),
            selector: Some(params.selector_labels()?),
            ..Default::default()
        }),
        ..Default::default()
    })
}
