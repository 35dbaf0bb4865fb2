use aws_sdk_sesv2::Client as SesClient;

use crate::error::{AppError, Result};

pub async fn send_verification_email(
    ses_client: &SesClient,
    recipient: &str,
    code: &str,
    sender_email: &str,
) -> Result<()> {
    let html_template = include_str!("../utils/code.html");
    let html = html_template.replace("{{verification_code}}", code);
    let text = format!(
        "Your NEOKCS verification code is: {}\n\nThis code will expire in 10 minutes.\nIf you didn't request this code, please ignore this email.",
        code
    );

    let destination = aws_sdk_sesv2::types::Destination::builder()
        .to_addresses(recipient)
        .build();

    let subject = aws_sdk_sesv2::types::Content::builder()
        .data("Your NEOKCS Verification Code")
        .charset("UTF-8")
        .build()
        .map_err(|e| AppError::InternalError(format!("Failed to build subject: {}", e)))?;

    let html_body = aws_sdk_sesv2::types::Content::builder()
        .data(html)
        .charset("UTF-8")
        .build()
        .map_err(|e| AppError::InternalError(format!("Failed to build HTML body: {}", e)))?;

    let text_body = aws_sdk_sesv2::types::Content::builder()
        .data(text)
        .charset("UTF-8")
        .build()
        .map_err(|e| AppError::InternalError(format!("Failed to build text body: {}", e)))?;

    let body = aws_sdk_sesv2::types::Body::builder()
        .html(html_body)
        .text(text_body)
        .build();

    let message = aws_sdk_sesv2::types::Message::builder()
        .subject(subject)
        .body(body)
        .build();

    let content = aws_sdk_sesv2::types::EmailContent::builder()
        .simple(message)
        .build();

    ses_client
        .send_email()
        .from_email_address(sender_email)
        .destination(destination)
        .content(content)
        .send()
        .await
        .map_err(|e| {
            tracing::error!("Failed to send email: {:?}", e);
            AppError::InternalError("Failed to send verification code".to_string())
        })?;

    Ok(())
}
