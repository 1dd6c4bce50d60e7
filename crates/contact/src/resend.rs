//! Resend transactional email API client.

use async_trait::async_trait;
use reqwest::StatusCode;
use serde::{Deserialize, Serialize};

use crate::{Mailer, MailerError, OutgoingEmail};

pub const DEFAULT_API_BASE_URL: &str = "https://api.resend.com";

#[derive(Debug, Clone)]
pub struct ResendMailer {
    client: reqwest::Client,
    api_key: String,
    endpoint: String,
}

#[derive(Serialize)]
struct SendEmailRequest<'a> {
    from: &'a str,
    to: [&'a str; 1],
    reply_to: &'a str,
    subject: &'a str,
    text: &'a str,
}

#[derive(Deserialize)]
struct ApiErrorBody {
    #[serde(default)]
    message: String,
}

impl ResendMailer {
    pub fn new(api_key: impl Into<String>, base_url: &str) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_key: api_key.into(),
            endpoint: format!("{}/emails", base_url.trim_end_matches('/')),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl Mailer for ResendMailer {
    #[tracing::instrument(skip_all, fields(endpoint = %self.endpoint))]
    async fn send(&self, email: &OutgoingEmail) -> Result<(), MailerError> {
        let request = SendEmailRequest {
            from: &email.from,
            to: [email.to.as_str()],
            reply_to: &email.reply_to,
            subject: &email.subject,
            text: &email.text,
        };

        let response = self
            .client
            .post(&self.endpoint)
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if status.is_success() {
            return Ok(());
        }

        let body = response.text().await.unwrap_or_default();
        let message = rejection_message(status, &body);

        tracing::warn!(status = status.as_u16(), "Resend rejected email");

        Err(MailerError::Rejected {
            status: status.as_u16(),
            message,
        })
    }
}

fn rejection_message(status: StatusCode, body: &str) -> String {
    serde_json::from_str::<ApiErrorBody>(body)
        .ok()
        .map(|err| err.message)
        .filter(|message| !message.trim().is_empty())
        .unwrap_or_else(|| {
            status
                .canonical_reason()
                .unwrap_or("email delivery failed")
                .to_owned()
        })
}
