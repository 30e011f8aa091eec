use rv_core::prelude::*;

use super::PodDecorator;
use crate::parameters::JobManagerParameters;
use crate::pod::WorkloadPod;

/// Forwards the prefix-configured environment variables into the main
/// container.
pub struct EnvDecorator<'a> {
    params: &'a JobManagerParameters,
}

impl<'a> EnvDecorator<'a> {
    pub fn new(params: &'a JobManagerParameters) -> EnvDecorator<'a> {
        EnvDecorator { params }
    }
}

impl PodDecorator for EnvDecorator<'_> {
    fn decorate(&self, mut pod: WorkloadPod) -> anyhow::Result<WorkloadPod> {
        let envs = self.params.environments();
        if envs.is_empty() {
            return Ok(pod);
        }

        let env = pod.main_container.env.get_or_insert(vec![]);
        for (name, value) in envs {
            env.push(corev1::EnvVar {
                name,
                value: Some(value),
                ..Default::default()
            });
        }

        Ok(pod)
    }
}
