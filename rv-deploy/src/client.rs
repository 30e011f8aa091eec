use kube::api::{
    Api,
    DeleteParams,
    PostParams,
};
use rv_core::prelude::*;
use tracing::*;

use crate::factory::{
    JobManagerManifests,
    job_manager_name,
    rest_service_name,
};

/// Applies generated manifests to a target cluster.
pub struct ClusterClient {
    client: kube::Client,
}

impl ClusterClient {
    pub fn new(client: kube::Client) -> ClusterClient {
        ClusterClient { client }
    }

    pub async fn deploy_job_manager(&self, namespace: &str, manifests: &JobManagerManifests) -> EmptyResult {
        let deployments: Api<appsv1::Deployment> = Api::namespaced(self.client.clone(), namespace);
        deployments.create(&PostParams::default(), &manifests.deployment).await?;
        info!("created deployment {}", manifests.deployment.namespaced_name());

        let services: Api<corev1::Service> = Api::namespaced(self.client.clone(), namespace);
        services.create(&PostParams::default(), &manifests.rest_service).await?;
        info!("created service {}", manifests.rest_service.namespaced_name());

        Ok(())
    }

    /// Delete a previously-deployed job manager; objects that are already gone
    /// are skipped, so this is safe to run against a half-deployed cluster.
    pub async fn tear_down_job_manager(&self, namespace: &str, cluster_id: &str) -> EmptyResult {
        let deployments: Api<appsv1::Deployment> = Api::namespaced(self.client.clone(), namespace);
        match deployments.delete(&job_manager_name(cluster_id), &DeleteParams::default()).await {
            Err(kube::Error::Api(e)) if e.code == 404 => debug!("deployment for {cluster_id} already gone"),
            res => {
                res?;
                info!("deleted deployment for {cluster_id}");
            },
        }

        let services: Api<corev1::Service> = Api::namespaced(self.client.clone(), namespace);
        match services.delete(&rest_service_name(cluster_id), &DeleteParams::default()).await {
            Err(kube::Error::Api(e)) if e.code == 404 => debug!("rest service for {cluster_id} already gone"),
            res => {
                res?;
                info!("deleted rest service for {cluster_id}");
            },
        }

        Ok(())
    }
}
