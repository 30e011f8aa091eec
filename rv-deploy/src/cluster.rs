use rv_core::config::Config;

use crate::options;

/// Resource sizing for a cluster deployment request; built once per
/// deployment and never mutated afterwards.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ClusterSpecification {
    master_memory_mb: i32,
    task_manager_memory_mb: i32,
    slots_per_task_manager: i32,
}

impl ClusterSpecification {
    pub fn builder() -> ClusterSpecificationBuilder {
        Default::default()
    }

    /// Sizing from the config's memory/slot options; the path the CLI takes,
    /// where nobody constructs a specification by hand.
    pub fn from_config(config: &Config) -> ClusterSpecification {
        ClusterSpecification::builder()
            .set_master_memory_mb(config.get_or_default(&options::JOB_MANAGER_MEMORY_MB))
            .set_task_manager_memory_mb(config.get_or_default(&options::TASK_MANAGER_MEMORY_MB))
            .set_slots_per_task_manager(config.get_or_default(&options::TASK_MANAGER_SLOTS))
            .build()
    }

    pub fn master_memory_mb(&self) -> i32 {
        self.master_memory_mb
    }

    pub fn task_manager_memory_mb(&self) -> i32 {
        self.task_manager_memory_mb
    }

    pub fn slots_per_task_manager(&self) -> i32 {
        self.slots_per_task_manager
    }
}

#[derive(Debug)]
pub struct ClusterSpecificationBuilder {
    master_memory_mb: i32,
    task_manager_memory_mb: i32,
    slots_per_task_manager: i32,
}

impl Default for ClusterSpecificationBuilder {
    fn default() -> ClusterSpecificationBuilder {
        ClusterSpecificationBuilder {
            master_memory_mb: 1024,
            task_manager_memory_mb: 1024,
            slots_per_task_manager: 1,
        }
    }
}

impl ClusterSpecificationBuilder {
    pub fn set_master_memory_mb(mut self, mb: i32) -> ClusterSpecificationBuilder {
        self.master_memory_mb = mb;
        self
    }

    pub fn set_task_manager_memory_mb(mut self, mb: i32) -> ClusterSpecificationBuilder {
        self.task_manager_memory_mb = mb;
        self
    }

    pub fn set_slots_per_task_manager(mut self, slots: i32) -> ClusterSpecificationBuilder {
        self.slots_per_task_manager = slots;
        self
    }

    pub fn build(self) -> ClusterSpecification {
        ClusterSpecification {
            master_memory_mb: self.master_memory_mb,
            task_manager_memory_mb: self.task_manager_memory_mb,
            slots_per_task_manager: self.slots_per_task_manager,
        }
    }
}
