mod env;
mod init;
mod ports;

pub use env::EnvDecorator;
pub use init::InitJobManagerDecorator;
pub use ports::PortsDecorator;

use crate::parameters::JobManagerParameters;
use crate::pod::WorkloadPod;

/// One step of the pod-assembly pipeline; each decorator takes the pod built
/// so far and returns it with its own slice of the configuration applied.
pub trait PodDecorator {
    fn decorate(&self, pod: WorkloadPod) -> anyhow::Result<WorkloadPod>;
}

/// The standard job-manager chain, in application order.
pub fn job_manager_decorators(params: &JobManagerParameters) -> Vec<Box<dyn PodDecorator + '_>> {
    vec![
        Box::new(InitJobManagerDecorator::new(params)),
        Box::new(EnvDecorator::new(params)),
        Box::new(PortsDecorator::new(params)),
    ]
}
