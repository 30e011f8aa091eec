use rv_core::prelude::*;

/// A deployable pod under construction: the pod itself plus the container the
/// decorators target.  The default build is the unmodified baseline every
/// decorator chain starts from.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct WorkloadPod {
    pub pod: corev1::Pod,
    pub main_container: corev1::Container,
}

impl WorkloadPod {
    pub fn builder() -> WorkloadPodBuilder {
        Default::default()
    }
}

#[derive(Debug, Default)]
pub struct WorkloadPodBuilder {
    pod: Option<corev1::Pod>,
    main_container: Option<corev1::Container>,
}

impl WorkloadPodBuilder {
    pub fn with_pod(mut self, pod: corev1::Pod) -> WorkloadPodBuilder {
        self.pod = Some(pod);
        self
    }

    pub fn with_main_container(mut self, container: corev1::Container) -> WorkloadPodBuilder {
        self.main_container = Some(container);
        self
    }

    pub fn build(self) -> WorkloadPod {
        WorkloadPod {
            pod: self.pod.unwrap_or_default(),
            main_container: self.main_container.unwrap_or_default(),
        }
    }
}
