use std::sync::Arc;

use chrono::Utc;
use serde_json::Value;

use crate::{Error, Mailer, Notification, OutgoingEmail, Result, Submission, is_honeypot_filled};

/// How an accepted request ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Relayed {
    Sent,
    /// Honeypot was filled; nothing went out.
    Discarded,
}

/// Forwards quote requests to the business inbox.
///
/// `mailer` is `None` when no API key is configured. Every request is then
/// refused before its body is looked at.
#[derive(Clone)]
pub struct ContactRelay {
    mailer: Option<Arc<dyn Mailer>>,
    sender: String,
    recipient: String,
}

impl ContactRelay {
    pub fn new(
        mailer: Option<Arc<dyn Mailer>>,
        sender: impl Into<String>,
        recipient: impl Into<String>,
    ) -> Self {
        Self {
            mailer,
            sender: sender.into(),
            recipient: recipient.into(),
        }
    }

    pub fn sender(&self) -> &str {
        &self.sender
    }

    pub fn recipient(&self) -> &str {
        &self.recipient
    }

    #[tracing::instrument(skip_all)]
    pub async fn relay(&self, body: &[u8]) -> Result<Relayed> {
        let Some(mailer) = &self.mailer else {
            tracing::error!("Email API key is not configured");
            return Err(Error::MissingApiKey);
        };

        let body: Value = serde_json::from_slice(body)?;

        if is_honeypot_filled(&body) {
            tracing::info!("Discarded submission with filled honeypot");
            return Ok(Relayed::Discarded);
        }

        let submission = Submission::from_json(&body);
        if let Err(err) = submission.validate() {
            tracing::info!(error = %err, "Rejected incomplete submission");
            return Err(err);
        }

        let notification = Notification::compose(&submission, Utc::now());
        let email = OutgoingEmail {
            from: self.sender.clone(),
            to: self.recipient.clone(),
            reply_to: submission.email,
            subject: notification.subject,
            text: notification.text,
        };

        match mailer.send(&email).await {
            Ok(()) => {
                tracing::info!(
                    event_type = %submission.event_type,
                    date = %submission.date,
                    "Quote request relayed"
                );

                Ok(Relayed::Sent)
            }
            Err(err) => {
                tracing::error!(error = %err, "Failed to relay quote request");

                Err(err.into())
            }
        }
    }
}
