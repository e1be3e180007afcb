use crate::convert::Period;
use crate::err::{ModelError, Result};

/// How the scheduler treats a firing while a previous instance still runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InstancesPolicy {
    Parallel,
    Queue,
    IgnoreNew,
    StopExisting,
}

impl InstancesPolicy {
    pub fn code(self) -> u32 {
        match self {
            InstancesPolicy::Parallel => 0,
            InstancesPolicy::Queue => 1,
            InstancesPolicy::IgnoreNew => 2,
            InstancesPolicy::StopExisting => 3,
        }
    }

    pub fn from_code(code: u32) -> Result<Self> {
        match code {
            0 => Ok(InstancesPolicy::Parallel),
            1 => Ok(InstancesPolicy::Queue),
            2 => Ok(InstancesPolicy::IgnoreNew),
            3 => Ok(InstancesPolicy::StopExisting),
            other => Err(ModelError::InvalidFieldValue(
                String::from("multiple instances policy"),
                format!("unknown code {}", other),
            )),
        }
    }
}

/// Idle-condition knobs referenced by `run_only_if_idle` and the idle
/// trigger.
#[derive(Debug, Clone, PartialEq)]
pub struct IdleSettings {
    pub idle_duration: Period,
    pub restart_on_idle: bool,
    pub stop_on_idle_end: bool,
    pub wait_timeout: Period,
}

impl Default for IdleSettings {
    fn default() -> Self {
        Self {
            idle_duration: Period::minutes(10),
            restart_on_idle: false,
            stop_on_idle_end: true,
            wait_timeout: Period::hours(1),
        }
    }
}

/// Execution policy for a task. `Default` mirrors what the scheduler applies
/// to a freshly created definition.
#[derive(Debug, Clone, PartialEq)]
pub struct TaskSettings {
    pub allow_demand_start: bool,
    pub allow_hard_terminate: bool,
    pub dont_start_on_batteries: bool,
    pub enabled: bool,
    pub hidden: bool,
    pub idle_settings: IdleSettings,
    pub multiple_instances: InstancesPolicy,
    pub priority: u32,
    pub restart_count: u32,
    pub restart_interval: Period,
    pub run_only_if_idle: bool,
    pub run_only_if_network_available: bool,
    pub start_when_available: bool,
    pub stop_if_going_on_batteries: bool,
    pub time_limit: Period,
    pub wake_to_run: bool,
}

impl Default for TaskSettings {
    fn default() -> Self {
        Self {
            allow_demand_start: true,
            allow_hard_terminate: true,
            dont_start_on_batteries: true,
            enabled: true,
            hidden: false,
            idle_settings: IdleSettings::default(),
            multiple_instances: InstancesPolicy::IgnoreNew,
            priority: 7,
            restart_count: 0,
            restart_interval: Period::default(),
            run_only_if_idle: false,
            run_only_if_network_available: false,
            start_when_available: false,
            stop_if_going_on_batteries: true,
            time_limit: Period::hours(72),
            wake_to_run: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_settings_mirror_the_scheduler_defaults() {
        let s = TaskSettings::default();
        assert!(s.enabled);
        assert!(s.allow_demand_start);
        assert_eq!(s.multiple_instances, InstancesPolicy::IgnoreNew);
        assert_eq!(s.priority, 7);
        assert_eq!(s.time_limit, Period::hours(72));
        assert_eq!(s.idle_settings.idle_duration, Period::minutes(10));
        assert!(s.restart_interval.is_zero());
    }

    #[test]
    fn instances_policy_codes_roundtrip() {
        for code in 0..=3 {
            assert_eq!(InstancesPolicy::from_code(code).unwrap().code(), code);
        }
        assert!(InstancesPolicy::from_code(4).is_err());
    }
}
