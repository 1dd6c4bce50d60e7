use async_trait::async_trait;

/// One fully addressed plain-text email.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutgoingEmail {
    pub from: String,
    pub to: String,
    pub reply_to: String,
    pub subject: String,
    pub text: String,
}

#[derive(Debug, thiserror::Error)]
pub enum MailerError {
    #[error("{0}")]
    Transport(#[from] reqwest::Error),

    #[error("{message}")]
    Rejected { status: u16, message: String },
}

/// Delivery capability: the message is either accepted or the call fails.
#[async_trait]
pub trait Mailer: Send + Sync {
    async fn send(&self, email: &OutgoingEmail) -> Result<(), MailerError>;
}
