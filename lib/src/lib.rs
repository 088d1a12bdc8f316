//! Delivery channel bindings for Rust
//! Provides blocking clients to post a text message to a Telegram chat or send it by SMTP email

use std::time::Duration;

use lettre::message::{header::ContentType, Mailbox};
use lettre::transport::smtp::authentication::Credentials;
use lettre::{Message, SmtpTransport, Transport};
use reqwest::blocking::Client;
use serde::Serialize;
use thiserror::Error;

const TELEGRAM_API_URL: &str = "https://api.telegram.org";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Error, Debug)]
pub enum ChannelError {
    #[error("HTTP request failed: {0}")]
    RequestError(#[from] reqwest::Error),
    #[error("Telegram API error ({status}): {body}")]
    TelegramApi { status: u16, body: String },
    #[error("Invalid email address: {0}")]
    InvalidAddress(#[from] lettre::address::AddressError),
    #[error("Could not build email: {0}")]
    EmailBuild(#[from] lettre::error::Error),
    #[error("SMTP transport failed: {0}")]
    Smtp(#[from] lettre::transport::smtp::Error),
}

#[derive(Debug, Serialize)]
struct SendMessagePayload<'a> {
    chat_id: &'a str,
    text: &'a str,
    disable_web_page_preview: bool,
}

pub struct TelegramClient {
    api_url: String,
    bot_token: String,
    chat_id: String,
    client: Client,
}

impl TelegramClient {
    pub fn new(bot_token: &str, chat_id: &str) -> Result<Self, ChannelError> {
        Self::with_api_url(TELEGRAM_API_URL, bot_token, chat_id)
    }

    /// Point the client at a different Bot API host (self-hosted bot API server)
    pub fn with_api_url(api_url: &str, bot_token: &str, chat_id: &str) -> Result<Self, ChannelError> {
        let client = Client::builder().timeout(REQUEST_TIMEOUT).build()?;

        Ok(Self {
            api_url: api_url.trim_end_matches('/').to_string(),
            bot_token: bot_token.to_string(),
            chat_id: chat_id.to_string(),
            client,
        })
    }

    fn send_message_url(&self) -> String {
        format!("{}/bot{}/sendMessage", self.api_url, self.bot_token)
    }

    /// Post a plain text message to the configured chat, without link previews
    pub fn send_message(&self, text: &str) -> Result<(), ChannelError> {
        let payload = SendMessagePayload {
            chat_id: &self.chat_id,
            text,
            disable_web_page_preview: true,
        };

        let response = self
            .client
            .post(self.send_message_url())
            .json(&payload)
            .send()?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().unwrap_or_default();
            return Err(ChannelError::TelegramApi {
                status: status.as_u16(),
                body,
            });
        }

        Ok(())
    }
}

#[derive(Debug, Clone)]
pub struct SmtpSettings {
    pub host: String,
    pub port: u16,
    pub user: String,
    pub password: String,
    pub from: String,
    pub to: String,
}

pub struct EmailClient {
    mailer: SmtpTransport,
    from: Mailbox,
    to: Mailbox,
}

impl EmailClient {
    /// Build a STARTTLS transport that logs in with the given credentials
    pub fn new(settings: &SmtpSettings) -> Result<Self, ChannelError> {
        let from: Mailbox = settings.from.parse()?;
        let to: Mailbox = settings.to.parse()?;

        let credentials = Credentials::new(settings.user.clone(), settings.password.clone());
        let mailer = SmtpTransport::starttls_relay(&settings.host)?
            .port(settings.port)
            .credentials(credentials)
            .timeout(Some(REQUEST_TIMEOUT))
            .build();

        Ok(Self { mailer, from, to })
    }

    pub fn send(&self, subject: &str, body: &str) -> Result<(), ChannelError> {
        let message = build_message(&self.from, &self.to, subject, body)?;
        self.mailer.send(&message)?;
        Ok(())
    }
}

fn build_message(
    from: &Mailbox,
    to: &Mailbox,
    subject: &str,
    body: &str,
) -> Result<Message, ChannelError> {
    let message = Message::builder()
        .from(from.clone())
        .to(to.clone())
        .subject(subject)
        .header(ContentType::TEXT_PLAIN)
        .body(body.to_string())?;

    Ok(message)
}

/// Send a message to a Telegram chat
pub fn send_telegram(bot_token: &str, chat_id: &str, text: &str) -> Result<(), ChannelError> {
    TelegramClient::new(bot_token, chat_id)?.send_message(text)
}

/// Send a plain text email
pub fn send_email(settings: &SmtpSettings, subject: &str, body: &str) -> Result<(), ChannelError> {
    EmailClient::new(settings)?.send(subject, body)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_send_message_url() {
        let client = TelegramClient::new("123:abc", "42").unwrap();
        assert_eq!(
            client.send_message_url(),
            "https://api.telegram.org/bot123:abc/sendMessage"
        );
    }

    #[test]
    fn test_custom_api_url_trailing_slash() {
        let client = TelegramClient::with_api_url("http://localhost:8081/", "t", "c").unwrap();
        assert_eq!(client.send_message_url(), "http://localhost:8081/bott/sendMessage");
    }

    #[test]
    fn test_payload_disables_link_preview() {
        let payload = SendMessagePayload {
            chat_id: "42",
            text: "hello",
            disable_web_page_preview: true,
        };

        let json = serde_json::to_value(&payload).unwrap();
        assert_eq!(json["chat_id"], "42");
        assert_eq!(json["text"], "hello");
        assert_eq!(json["disable_web_page_preview"], true);
    }

    #[test]
    fn test_invalid_from_address_rejected() {
        let settings = SmtpSettings {
            host: "smtp.example.com".to_string(),
            port: 587,
            user: "user".to_string(),
            password: "secret".to_string(),
            from: "not an address".to_string(),
            to: "someone@example.com".to_string(),
        };

        assert!(matches!(
            EmailClient::new(&settings),
            Err(ChannelError::InvalidAddress(_))
        ));
    }

    #[test]
    fn test_build_message_has_subject() {
        let from: Mailbox = "digest@example.com".parse().unwrap();
        let to: Mailbox = "reader@example.com".parse().unwrap();

        let message = build_message(&from, &to, "Daily News", "body text").unwrap();
        let raw = String::from_utf8(message.formatted()).unwrap();

        assert!(raw.contains("Subject: Daily News"));
        assert!(raw.contains("body text"));
    }
}
