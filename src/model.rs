use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;

/// Provider-reported liveness of an instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(into = "String")]
pub enum HealthStatus {
    Healthy,
    Unhealthy,
}

impl HealthStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            HealthStatus::Healthy => "Healthy",
            HealthStatus::Unhealthy => "Unhealthy",
        }
    }
}

impl From<&str> for HealthStatus {
    fn from(value: &str) -> Self {
        // Anything that isn't reported as healthy counts against the group.
        if value == "Healthy" {
            HealthStatus::Healthy
        } else {
            HealthStatus::Unhealthy
        }
    }
}

impl From<HealthStatus> for String {
    fn from(value: HealthStatus) -> Self {
        value.as_str().to_string()
    }
}

impl fmt::Display for HealthStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Position of an instance in the scale-out/scale-in process.
///
/// Only the three states the statistics care about are modeled; every other
/// provider state is kept verbatim in `Other`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(into = "String")]
pub enum LifecycleState {
    Pending,
    InService,
    Terminating,
    Other(String),
}

impl LifecycleState {
    pub fn as_str(&self) -> &str {
        match self {
            LifecycleState::Pending => "Pending",
            LifecycleState::InService => "InService",
            LifecycleState::Terminating => "Terminating",
            LifecycleState::Other(raw) => raw.as_str(),
        }
    }
}

impl From<&str> for LifecycleState {
    fn from(value: &str) -> Self {
        match value {
            "Pending" => LifecycleState::Pending,
            "InService" => LifecycleState::InService,
            "Terminating" => LifecycleState::Terminating,
            other => LifecycleState::Other(other.to_string()),
        }
    }
}

impl From<LifecycleState> for String {
    fn from(value: LifecycleState) -> Self {
        value.as_str().to_string()
    }
}

impl fmt::Display for LifecycleState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Instance {
    pub instance_id: String,
    pub health_status: HealthStatus,
    pub lifecycle_state: LifecycleState,
    pub launch_config_name: Option<String>,
}

/// Snapshot of an Auto Scaling Group as returned by the fetcher.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Group {
    pub name: String,
    pub availability_zones: Vec<String>,
    pub default_cooldown: Option<i32>,
    pub desired_capacity: Option<i32>,
    pub health_check_period: Option<i32>,
    pub health_check_type: Option<String>,
    pub launch_config_name: Option<String>,
    pub load_balancers: Vec<String>,
    pub max_size: Option<i32>,
    pub min_size: Option<i32>,
    pub placement_group: Option<String>,
    pub termination_policies: Vec<String>,
    pub vpc_zone_identifier: Option<String>,
    pub tags: BTreeMap<String, String>,
    pub instances: Vec<Instance>,
}

/// Per-instance facts carried in a [`GroupReport`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InstanceFacts {
    pub health_status: HealthStatus,
    pub lifecycle_state: LifecycleState,
    pub launch_config_name: Option<String>,
}

/// Flattened properties and instance statistics of one matching group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GroupReport {
    pub availability_zones: Vec<String>,
    pub default_cooldown: Option<i32>,
    pub desired_capacity: Option<i32>,
    pub health_check_period: Option<i32>,
    pub health_check_type: Option<String>,
    pub launch_config_name: Option<String>,
    pub load_balancers: Vec<String>,
    pub max_size: Option<i32>,
    pub min_size: Option<i32>,
    pub name: String,
    pub placement_group: Option<String>,
    pub termination_policies: Vec<String>,
    pub vpc_zone_identifier: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub instances: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instance_facts: Option<BTreeMap<String, InstanceFacts>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<BTreeMap<String, String>>,

    pub healthy_instances: u32,
    pub unhealthy_instances: u32,
    pub in_service_instances: u32,
    pub pending_instances: u32,
    pub terminating_instances: u32,
    pub viable_instances: u32,
}

/// Result document of one query.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct MatchResult {
    pub changed: bool,
    pub as_groups: Vec<GroupReport>,
}

impl MatchResult {
    pub fn new(as_groups: Vec<GroupReport>) -> Self {
        Self {
            changed: false,
            as_groups,
        }
    }
}
