use crate::{MailerError, RequiredField};

pub const MISSING_API_KEY: &str = "Missing RESEND_API_KEY";
pub const SERVER_ERROR_MESSAGE: &str = "Server error";

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Missing RESEND_API_KEY")]
    MissingApiKey,

    #[error("Missing {0}")]
    MissingField(RequiredField),

    #[error("{0}")]
    InvalidBody(#[from] serde_json::Error),

    #[error(transparent)]
    Delivery(#[from] MailerError),
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Only a missing required field is the submitter's fault.
    pub fn is_client_error(&self) -> bool {
        matches!(self, Self::MissingField(_))
    }

    /// Message returned to the browser. Falls back to a generic message when
    /// the underlying failure carries none.
    pub fn public_message(&self) -> String {
        let message = self.to_string();
        if message.trim().is_empty() {
            return SERVER_ERROR_MESSAGE.to_owned();
        }

        message
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_field_is_client_error() {
        let err = Error::MissingField(RequiredField::Phone);
        assert!(err.is_client_error());
        assert_eq!(err.public_message(), "Missing phone");
    }

    #[test]
    fn empty_delivery_message_falls_back() {
        let err = Error::Delivery(MailerError::Rejected {
            status: 500,
            message: String::new(),
        });
        assert!(!err.is_client_error());
        assert_eq!(err.public_message(), SERVER_ERROR_MESSAGE);
    }

    #[test]
    fn missing_api_key_message() {
        assert_eq!(Error::MissingApiKey.public_message(), MISSING_API_KEY);
    }
}
