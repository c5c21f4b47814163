use aws_credential_types::provider::ProvideCredentials;
use aws_sdk_autoscaling::types as sdk;
use aws_sdk_autoscaling::Client as AsgClient;
use tracing::{debug, info};

use crate::aws::configure_aws;
use crate::config::ConnectionSettings;
use crate::error::{error_chain, FindError, Result};
use crate::model::{Group, HealthStatus, Instance, LifecycleState};
use crate::GroupSource;

/// Auto Scaling API client bound to one region.
pub struct AsgFetcher {
    client: AsgClient,
    region: String,
}

impl AsgFetcher {
    /// Loads the SDK configuration and resolves credentials once.
    ///
    /// A missing region or credentials that cannot be resolved fail here,
    /// before any group is listed.
    pub async fn connect(settings: &ConnectionSettings) -> Result<Self> {
        let config = configure_aws(settings).await;

        let region = config
            .region()
            .map(|r| r.as_ref().to_string())
            .ok_or_else(|| {
                FindError::connection(settings.region.as_deref(), "no region configured")
            })?;

        let provider = config.credentials_provider().ok_or_else(|| {
            FindError::connection(Some(&region), "no credentials provider configured")
        })?;

        provider
            .provide_credentials()
            .await
            .map_err(|e| FindError::connection(Some(&region), error_chain(&e)))?;

        info!(region = %region, "AWS Auto Scaling client initialized successfully");

        Ok(Self {
            client: AsgClient::new(&config),
            region,
        })
    }

    pub fn region(&self) -> &str {
        &self.region
    }
}

impl GroupSource for AsgFetcher {
    async fn list_auto_scaling_groups(&self) -> Result<Vec<Group>> {
        debug!(region = %self.region, "Sending DescribeAutoScalingGroups API request");

        let output = self
            .client
            .describe_auto_scaling_groups()
            .send()
            .await
            .map_err(|e| FindError::fetch(&self.region, &e))?;

        let groups: Vec<Group> = output
            .auto_scaling_groups
            .unwrap_or_default()
            .into_iter()
            .map(group_from_sdk)
            .collect();

        debug!(
            region = %self.region,
            group_count = groups.len(),
            "Received response from DescribeAutoScalingGroups API"
        );

        Ok(groups)
    }
}

fn group_from_sdk(group: sdk::AutoScalingGroup) -> Group {
    Group {
        name: group.auto_scaling_group_name.unwrap_or_default(),
        availability_zones: group.availability_zones.unwrap_or_default(),
        default_cooldown: group.default_cooldown,
        desired_capacity: group.desired_capacity,
        health_check_period: group.health_check_grace_period,
        health_check_type: group.health_check_type,
        launch_config_name: group.launch_configuration_name,
        load_balancers: group.load_balancer_names.unwrap_or_default(),
        max_size: group.max_size,
        min_size: group.min_size,
        placement_group: group.placement_group,
        termination_policies: group.termination_policies.unwrap_or_default(),
        vpc_zone_identifier: group.vpc_zone_identifier,
        tags: group
            .tags
            .unwrap_or_default()
            .into_iter()
            .filter_map(|tag| Some((tag.key?, tag.value.unwrap_or_default())))
            .collect(),
        instances: group
            .instances
            .unwrap_or_default()
            .into_iter()
            .map(instance_from_sdk)
            .collect(),
    }
}

fn instance_from_sdk(instance: sdk::Instance) -> Instance {
    Instance {
        instance_id: instance.instance_id.unwrap_or_default(),
        health_status: HealthStatus::from(instance.health_status.as_deref().unwrap_or_default()),
        lifecycle_state: instance
            .lifecycle_state
            .as_ref()
            .map(|state| LifecycleState::from(state.as_str()))
            .unwrap_or_else(|| LifecycleState::Other(String::new())),
        launch_config_name: instance.launch_configuration_name,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tag(key: Option<&str>, value: Option<&str>) -> sdk::TagDescription {
        sdk::TagDescription::builder()
            .set_key(key.map(str::to_string))
            .set_value(value.map(str::to_string))
            .build()
    }

    #[test]
    fn test_group_attributes_are_renamed_into_model() {
        let group = sdk::AutoScalingGroup::builder()
            .auto_scaling_group_name("web-prod")
            .availability_zones("us-east-1a")
            .availability_zones("us-east-1b")
            .default_cooldown(300)
            .desired_capacity(2)
            .health_check_grace_period(120)
            .health_check_type("ELB")
            .launch_configuration_name("lc-v1")
            .load_balancer_names("web-elb")
            .max_size(4)
            .min_size(1)
            .termination_policies("OldestInstance")
            .vpc_zone_identifier("subnet-1,subnet-2")
            .build();

        let converted = group_from_sdk(group);

        assert_eq!(converted.name, "web-prod");
        assert_eq!(converted.availability_zones, vec!["us-east-1a", "us-east-1b"]);
        assert_eq!(converted.default_cooldown, Some(300));
        assert_eq!(converted.desired_capacity, Some(2));
        assert_eq!(converted.health_check_period, Some(120));
        assert_eq!(converted.health_check_type.as_deref(), Some("ELB"));
        assert_eq!(converted.launch_config_name.as_deref(), Some("lc-v1"));
        assert_eq!(converted.load_balancers, vec!["web-elb"]);
        assert_eq!(converted.max_size, Some(4));
        assert_eq!(converted.min_size, Some(1));
        assert_eq!(converted.placement_group, None);
        assert_eq!(converted.termination_policies, vec!["OldestInstance"]);
        assert_eq!(
            converted.vpc_zone_identifier.as_deref(),
            Some("subnet-1,subnet-2")
        );
        assert!(converted.tags.is_empty());
        assert!(converted.instances.is_empty());
    }

    #[test]
    fn test_tags_without_key_are_dropped() {
        let group = sdk::AutoScalingGroup::builder()
            .auto_scaling_group_name("g1")
            .tags(tag(Some("env"), Some("prod")))
            .tags(tag(None, Some("orphan")))
            .tags(tag(Some("owner"), None))
            .build();

        let converted = group_from_sdk(group);

        assert_eq!(converted.tags.len(), 2);
        assert_eq!(converted.tags.get("env").map(String::as_str), Some("prod"));
        assert_eq!(converted.tags.get("owner").map(String::as_str), Some(""));
    }

    #[test]
    fn test_instance_states_are_classified() {
        let group = sdk::AutoScalingGroup::builder()
            .auto_scaling_group_name("g2")
            .instances(
                sdk::Instance::builder()
                    .instance_id("i-1")
                    .health_status("Healthy")
                    .lifecycle_state(sdk::LifecycleState::InService)
                    .launch_configuration_name("lc-v1")
                    .build(),
            )
            .instances(
                sdk::Instance::builder()
                    .instance_id("i-2")
                    .lifecycle_state(sdk::LifecycleState::from("Standby"))
                    .build(),
            )
            .instances(sdk::Instance::builder().instance_id("i-3").build())
            .build();

        let instances = group_from_sdk(group).instances;

        assert_eq!(instances.len(), 3);
        assert_eq!(instances[0].instance_id, "i-1");
        assert_eq!(instances[0].health_status, HealthStatus::Healthy);
        assert_eq!(instances[0].lifecycle_state, LifecycleState::InService);
        assert_eq!(instances[0].launch_config_name.as_deref(), Some("lc-v1"));

        assert_eq!(instances[1].health_status, HealthStatus::Unhealthy);
        assert_eq!(
            instances[1].lifecycle_state,
            LifecycleState::Other("Standby".to_string())
        );
        assert_eq!(instances[1].launch_config_name, None);

        assert_eq!(instances[2].health_status, HealthStatus::Unhealthy);
        assert_eq!(
            instances[2].lifecycle_state,
            LifecycleState::Other(String::new())
        );
    }
}
