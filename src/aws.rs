use aws_config::meta::region::RegionProviderChain;
use aws_config::retry::RetryConfig;
use aws_config::BehaviorVersion;
use aws_credential_types::Credentials;
use aws_types::region::Region;
use tracing::debug;

use crate::config::ConnectionSettings;

const STATIC_CREDENTIALS_PROVIDER: &str = "asg-find-static";

/// Loads the shared SDK configuration.
///
/// Region resolution: explicit setting, then the SDK default chain
/// (AWS_REGION, shared config files, IMDS). Every request is attempted
/// exactly once.
pub async fn configure_aws(settings: &ConnectionSettings) -> aws_types::SdkConfig {
    let region_provider = RegionProviderChain::first_try(settings.region.clone().map(Region::new))
        .or_default_provider();

    let mut loader = aws_config::defaults(BehaviorVersion::v2024_03_28())
        .region(region_provider)
        .retry_config(RetryConfig::disabled());

    if let Some(profile) = &settings.profile {
        debug!(profile = %profile, "Using AWS profile");
        loader = loader.profile_name(profile);
    }

    if let Some(endpoint_url) = &settings.endpoint_url {
        debug!(endpoint_url = %endpoint_url, "Using custom endpoint");
        loader = loader.endpoint_url(endpoint_url);
    }

    if let Some(creds) = &settings.static_credentials {
        debug!(access_key_id = %creds.access_key_id, "Using static credentials");
        loader = loader.credentials_provider(Credentials::new(
            creds.access_key_id.clone(),
            creds.secret_access_key.clone(),
            creds.session_token.clone(),
            None,
            STATIC_CREDENTIALS_PROVIDER,
        ));
    }

    loader.load().await
}
