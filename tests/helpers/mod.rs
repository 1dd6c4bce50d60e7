//! Shared setup for router-level tests.

#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::{
    Router,
    body::Body,
    http::{Request, Response, header},
};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use sipandslay::{
    AppState,
    config::{Config, EmailConfig, ObservabilityConfig, ServerConfig, SiteConfig},
};
use sipandslay_contact::{ContactRelay, Mailer, MailerError, OutgoingEmail};
use tower::ServiceExt;

pub const RECIPIENT: &str = "owner@sipandslay.localhost";

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

pub struct FailingMailer;

#[async_trait]
impl Mailer for FailingMailer {
    async fn send(&self, _email: &OutgoingEmail) -> Result<(), MailerError> {
        Err(MailerError::Rejected {
            status: 422,
            message: "Invalid `to` field".to_string(),
        })
    }
}

pub fn create_test_config() -> Config {
    Config {
        server: ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 3000,
            public_dir: "public".to_string(),
        },
        email: EmailConfig {
            resend_api_key: Some("re_test".to_string()),
            to_address: Some(RECIPIENT.to_string()),
            ..Default::default()
        },
        site: SiteConfig::default(),
        observability: ObservabilityConfig::default(),
    }
}

pub fn app_with_mailer(config: Config, mailer: Option<Arc<dyn Mailer>>) -> Router {
    let relay = ContactRelay::new(mailer, config.email.sender(), config.email.recipient());

    sipandslay::cli::server::app(AppState { config, relay })
}

/// App wired to a mailer that records instead of sending.
pub fn create_test_app() -> (Router, Arc<RecordingMailer>) {
    let mailer = Arc::new(RecordingMailer::default());
    let app = app_with_mailer(create_test_config(), Some(mailer.clone() as Arc<dyn Mailer>));

    (app, mailer)
}

pub fn valid_payload() -> Value {
    json!({
        "name": "Jordan",
        "email": "jordan@example.com",
        "phone": "555-0100",
        "date": "2026-06-20",
        "city": "Atlanta",
        "guestCount": "80",
        "eventType": "Wedding",
        "hours": "5",
        "vibeTheme": "Black & Gold",
        "alcoholPreference": "Both",
        "website": ""
    })
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    app.oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap()
}

pub async fn post_json(app: Router, uri: &str, body: impl Into<Body>) -> Response<Body> {
    app.oneshot(
        Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(body.into())
            .unwrap(),
    )
    .await
    .unwrap()
}

pub async fn body_string(response: Response<Body>) -> String {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();

    String::from_utf8(bytes.to_vec()).unwrap()
}

pub async fn body_json(response: Response<Body>) -> Value {
    serde_json::from_str(&body_string(response).await).unwrap()
}
