//! Shared AWS SDK configuration.

use aws_config::{BehaviorVersion, Region, SdkConfig};
use aws_sdk_s3::config::Credentials;
use tracing::info;

use textra_config::Settings;

/// Load SDK configuration for the configured region.
///
/// Static credentials from settings take precedence over a named profile,
/// which takes precedence over the default provider chain.
pub async fn load_sdk_config(settings: &Settings) -> SdkConfig {
    let mut loader =
        aws_config::defaults(BehaviorVersion::latest()).region(Region::new(settings.region.clone()));

    if let Some(profile) = &settings.aws_profile {
        loader = loader.profile_name(profile);
    }

    if let Some(creds) = &settings.credentials {
        loader = loader.credentials_provider(Credentials::new(
            creds.access_key_id.clone(),
            creds.secret_access_key.clone(),
            creds.session_token.clone(),
            None,
            "textra-settings",
        ));
    }

    info!(
        region = %settings.region,
        profile = settings.aws_profile.as_deref().unwrap_or("default"),
        static_credentials = settings.credentials.is_some(),
        "Loaded AWS configuration"
    );
    loader.load().await
}
