use sqlx::PgPool;

use neokcs_back::{config::Environment, AppState};

/// State over the given pool with an SES client that is never allowed to
/// reach the network in these tests.
pub fn test_state(db: PgPool) -> AppState {
    let credentials = aws_sdk_sesv2::config::Credentials::new("test", "test", None, None, "test");
    let ses_config = aws_sdk_sesv2::Config::builder()
        .behavior_version(aws_sdk_sesv2::config::BehaviorVersion::latest())
        .region(aws_sdk_sesv2::config::Region::new("us-east-1"))
        .credentials_provider(credentials)
        .build();

    AppState {
        db,
        ses_client: aws_sdk_sesv2::Client::from_conf(ses_config),
        sender_email: "noreply@neokcs.test".to_string(),
        environment: Environment::Development,
    }
}
