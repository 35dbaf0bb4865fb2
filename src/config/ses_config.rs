use aws_config::{BehaviorVersion, Region};
use aws_sdk_sesv2::{config::Credentials, Client as SesClient};

use crate::error::{AppError, Result};

const DEFAULT_REGION: &str = "us-east-1";

fn require_var(name: &str) -> Result<String> {
    std::env::var(name).map_err(|_| AppError::ConfigError(format!("{} not set", name)))
}

/// SES carries the verification-code emails. Credentials come from the
/// environment, not an instance profile.
pub async fn load_ses_client() -> Result<SesClient> {
    let credentials = Credentials::new(
        require_var("AWS_ACCESS_KEY_ID")?,
        require_var("AWS_SECRET_ACCESS_KEY")?,
        None,
        None,
        "neokcs-env",
    );

    let region = std::env::var("AWS_REGION").unwrap_or_else(|_| DEFAULT_REGION.to_string());

    let sdk_config = aws_config::defaults(BehaviorVersion::latest())
        .region(Region::new(region.clone()))
        .credentials_provider(credentials)
        .load()
        .await;

    tracing::info!("SES client ready in region {}", region);

    Ok(SesClient::new(&sdk_config))
}
