use k8s_openapi::apimachinery::pkg::api::resource::Quantity;
use kube::api::Resource;

use crate::prelude::*;

pub trait KubeResourceExt {
    fn namespaced_name(&self) -> String;
}

impl<T: Resource> KubeResourceExt for T {
    fn namespaced_name(&self) -> String {
        match self.namespace() {
            Some(ns) => format!("{}/{}", ns, self.name_any()),
            None => self.name_any(),
        }
    }
}

/// Render a fractional CPU share the way the apiserver canonicalizes it:
/// whole cores stay plain, anything fractional becomes millicores.
pub fn cpu_quantity(cores: f64) -> Quantity {
    if cores.fract() == 0.0 {
        Quantity(format!("{}", cores as i64))
    } else {
        Quantity(format!("{}m", (cores * 1000.0).round() as i64))
    }
}

pub fn memory_quantity_mb(mb: i32) -> Quantity {
    Quantity(format!("{mb}Mi"))
}

pub fn container_port(name: &str, port: i32) -> corev1::ContainerPort {
    corev1::ContainerPort {
        name: Some(name.into()),
        container_port: port,
        ..Default::default()
    }
}

#[cfg(test)]
pub mod tests;
