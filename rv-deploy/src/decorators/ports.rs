use rv_core::k8s::container_port;
use rv_core::prelude::*;

use super::PodDecorator;
use crate::parameters::JobManagerParameters;
use crate::pod::WorkloadPod;

/// Exposes the rest, rpc, and blob-server ports on the main container.
pub struct PortsDecorator<'a> {
    params: &'a JobManagerParameters,
}

impl<'a> PortsDecorator<'a> {
    pub fn new(params: &'a JobManagerParameters) -> PortsDecorator<'a> {
        PortsDecorator { params }
    }
}

impl PodDecorator for PortsDecorator<'_> {
    fn decorate(&self, mut pod: WorkloadPod) -> anyhow::Result<WorkloadPod> {
        let ports = vec![
            container_port(REST_PORT_NAME, self.params.rest_port()),
            container_port(RPC_PORT_NAME, self.params.rpc_port()),
            container_port(BLOB_PORT_NAME, self.params.blob_server_port()?),
        ];
        pod.main_container.ports.get_or_insert(vec![]).extend(ports);

        Ok(pod)
    }
}
