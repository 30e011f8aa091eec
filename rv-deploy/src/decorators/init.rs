use rv_core::k8s::{
    cpu_quantity,
    memory_quantity_mb,
};
use rv_core::macros::BTreeMap;
use rv_core::prelude::*;

use super::PodDecorator;
use crate::parameters::JobManagerParameters;
use crate::pod::WorkloadPod;

/// Applies the job-manager baseline: identity labels and annotations,
/// scheduling constraints, and the main container's image and resources.
pub struct InitJobManagerDecorator<'a> {
    params: &'a JobManagerParameters,
}

impl<'a> InitJobManagerDecorator<'a> {
    pub fn new(params: &'a JobManagerParameters) -> InitJobManagerDecorator<'a> {
        InitJobManagerDecorator { params }
    }
}

impl PodDecorator for InitJobManagerDecorator<'_> {
    fn decorate(&self, mut pod: WorkloadPod) -> anyhow::Result<WorkloadPod> {
        let meta = &mut pod.pod.metadata;
        meta.labels.get_or_insert(BTreeMap::new()).extend(self.params.labels()?);

        let annotations = self.params.annotations();
        if !annotations.is_empty() {
            meta.annotations.get_or_insert(BTreeMap::new()).extend(annotations);
        }

        let spec = pod.pod.spec.get_or_insert(Default::default());
        let node_selector = self.params.node_selector();
        if !node_selector.is_empty() {
            spec.node_selector.get_or_insert(BTreeMap::new()).extend(node_selector);
        }
        spec.service_account_name = Some(self.params.service_account());

        let resources = BTreeMap::from([
            ("cpu".to_string(), cpu_quantity(self.params.job_manager_cpu())),
            ("memory".to_string(), memory_quantity_mb(self.params.job_manager_memory_mb())),
        ]);
        let container = &mut pod.main_container;
        container.name = JOB_MANAGER_CONTAINER_NAME.into();
        container.image = Some(self.params.image()?);
        container.image_pull_policy = Some(self.params.image_pull_policy());
        container.resources = Some(corev1::ResourceRequirements {
            requests: Some(resources.clone()),
            limits: Some(resources),
            ..Default::default()
        });

        Ok(pod)
    }
}
