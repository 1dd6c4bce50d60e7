#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use serde_json::{Value, json};
use sipandslay_contact::{ContactRelay, Mailer, MailerError, OutgoingEmail};

pub const SENDER: &str = "Sip & Slay <onboarding@resend.dev>";
pub const RECIPIENT: &str = "owner@sipandslay.localhost";

/// Keeps every email it is asked to send.
#[derive(Default)]
pub struct RecordingMailer {
    sent: Mutex<Vec<OutgoingEmail>>,
}

impl RecordingMailer {
    pub fn sent(&self) -> Vec<OutgoingEmail> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait]
impl Mailer for RecordingMailer {
    async fn send(&self, email: &OutgoingEmail) -> Result<(), MailerError> {
        self.sent.lock().unwrap().push(email.clone());

        Ok(())
    }
}

/// Rejects every email with the given message.
pub struct FailingMailer(pub String);

#[async_trait]
impl Mailer for FailingMailer {
    async fn send(&self, _email: &OutgoingEmail) -> Result<(), MailerError> {
        Err(MailerError::Rejected {
            status: 500,
            message: self.0.clone(),
        })
    }
}

pub fn recording_relay() -> (ContactRelay, Arc<RecordingMailer>) {
    let mailer = Arc::new(RecordingMailer::default());
    let relay = ContactRelay::new(Some(mailer.clone() as Arc<dyn Mailer>), SENDER, RECIPIENT);

    (relay, mailer)
}

pub fn valid_payload() -> Value {
    json!({
        "email": "a@b.com",
        "phone": "555",
        "date": "1/1/2026",
        "city": "Chicago",
        "guestCount": "50",
        "eventType": "Birthday",
        "hours": "4",
        "vibeTheme": "Gold",
        "alcoholPreference": "Both"
    })
}

pub fn to_body(value: &Value) -> Vec<u8> {
    serde_json::to_vec(value).unwrap()
}
