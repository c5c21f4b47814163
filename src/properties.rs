use std::collections::BTreeMap;

use crate::model::{Group, GroupReport, HealthStatus, InstanceFacts, LifecycleState};

/// Builds the flattened property and statistics record for one group.
///
/// Attributes are copied verbatim. Instance fields are only emitted when the
/// group has at least one instance, and `tags` only when it has tags.
pub fn extract(group: &Group) -> GroupReport {
    let mut report = GroupReport {
        availability_zones: group.availability_zones.clone(),
        default_cooldown: group.default_cooldown,
        desired_capacity: group.desired_capacity,
        health_check_period: group.health_check_period,
        health_check_type: group.health_check_type.clone(),
        launch_config_name: group.launch_config_name.clone(),
        load_balancers: group.load_balancers.clone(),
        max_size: group.max_size,
        min_size: group.min_size,
        name: group.name.clone(),
        placement_group: group.placement_group.clone(),
        termination_policies: group.termination_policies.clone(),
        vpc_zone_identifier: group.vpc_zone_identifier.clone(),
        instances: None,
        instance_facts: None,
        tags: None,
        healthy_instances: 0,
        unhealthy_instances: 0,
        in_service_instances: 0,
        pending_instances: 0,
        terminating_instances: 0,
        viable_instances: 0,
    };

    if !group.instances.is_empty() {
        let mut ids = Vec::with_capacity(group.instances.len());
        let mut facts = BTreeMap::new();

        for instance in &group.instances {
            ids.push(instance.instance_id.clone());
            facts.insert(
                instance.instance_id.clone(),
                InstanceFacts {
                    health_status: instance.health_status,
                    lifecycle_state: instance.lifecycle_state.clone(),
                    launch_config_name: instance.launch_config_name.clone(),
                },
            );

            let healthy = instance.health_status == HealthStatus::Healthy;
            if healthy && instance.lifecycle_state == LifecycleState::InService {
                report.viable_instances += 1;
            }
            if healthy {
                report.healthy_instances += 1;
            } else {
                report.unhealthy_instances += 1;
            }
            match instance.lifecycle_state {
                LifecycleState::InService => report.in_service_instances += 1,
                LifecycleState::Terminating => report.terminating_instances += 1,
                LifecycleState::Pending => report.pending_instances += 1,
                LifecycleState::Other(_) => {}
            }
        }

        report.instances = Some(ids);
        report.instance_facts = Some(facts);
    }

    // Re-read from the group after instance processing.
    report.load_balancers = group.load_balancers.clone();

    if !group.tags.is_empty() {
        report.tags = Some(group.tags.clone());
    }

    report
}
