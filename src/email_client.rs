use std::time::Duration;
use async_trait::async_trait;
use reqwest::Client;
use secrecy::{ExposeSecret, SecretString};
use serde::Serialize;
use crate::domain::SubscriberEmail;

/// One plain-text message addressed to one recipient.
#[derive(Debug)]
pub struct Notification<'a> {
    pub from: &'a SubscriberEmail,
    pub to: &'a SubscriberEmail,
    pub subject: &'a str,
    pub body: &'a str,
}

/// Delivers a single notification. Implemented by `EmailClient`.
#[async_trait]
pub trait Notifier: Send + Sync {
    async fn send(&self, notification: &Notification<'_>) -> Result<(), anyhow::Error>;
}

pub struct EmailClient {
    http_client: Client,
    base_url: String,
    authorization_token: SecretString,
}

impl EmailClient {
    pub fn new(base_url: String, authorization_token: SecretString, timeout: Duration) -> Result<Self, reqwest::Error> {
        Ok(Self {
            http_client: Client::builder().timeout(timeout).build()?,
            base_url,
            authorization_token,
        })
    }

    pub async fn send_email(
        &self,
        sender: &SubscriberEmail,
        recipient: &SubscriberEmail,
        subject: &str,
        text_content: &str,
    ) -> Result<(), reqwest::Error> {
        let address = format!("{}/email", self.base_url);
        let body = SendEmailRequest {
            from: sender.as_ref(),
            to: recipient.as_ref(),
            subject,
            text_body: text_content,
        };
        self.http_client
            .post(address)
            .header("X-Postmark-Server-Token", self.authorization_token.expose_secret())
            .json(&body)
            .send()
            .await?
            .error_for_status()?;
        Ok(())
    }
}

#[async_trait]
impl Notifier for EmailClient {
    #[tracing::instrument(
        name = "Send notification email",
        skip(self, notification),
        fields(recipient = %notification.to),
    )]
    async fn send(&self, notification: &Notification<'_>) -> Result<(), anyhow::Error> {
        self.send_email(notification.from, notification.to, notification.subject, notification.body)
            .await?;
        Ok(())
    }
}

#[derive(Serialize)]
#[serde(rename_all = "PascalCase")]
struct SendEmailRequest<'a> {
    from: &'a str,
    to: &'a str,
    subject: &'a str,
    text_body: &'a str,
}
