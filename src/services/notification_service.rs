use channels::{EmailClient, TelegramClient};

use crate::config::Config;
use crate::domain::digest::EMAIL_SUBJECT;
use crate::errors::{DigestError, DigestResult};

/// Delivers the rendered digest to every configured channel
pub struct NotificationService {
    telegram: Option<TelegramClient>,
    email: Option<EmailClient>,
}

impl NotificationService {
    /// Fails when neither Telegram nor SMTP is fully configured
    pub fn new(config: &Config) -> DigestResult<Self> {
        if !config.has_channel() {
            return Err(DigestError::NoChannelConfigured);
        }

        let telegram = config
            .telegram()
            .map(|t| TelegramClient::new(&t.bot_token, &t.chat_id))
            .transpose()?;

        let email = config
            .email()
            .map(|settings| EmailClient::new(&settings))
            .transpose()?;

        Ok(Self { telegram, email })
    }

    /// Names of the channels a message will go to
    pub fn channels(&self) -> Vec<&'static str> {
        let mut names = Vec::new();
        if self.telegram.is_some() {
            names.push("telegram");
        }
        if self.email.is_some() {
            names.push("email");
        }
        names
    }

    /// Send to Telegram first, then email. The first failure aborts the run.
    pub fn send(&self, message: &str) -> DigestResult<()> {
        if let Some(telegram) = &self.telegram {
            telegram.send_message(message)?;
            tracing::info!(channel = "telegram", "Digest delivered");
        }

        if let Some(email) = &self.email {
            email.send(EMAIL_SUBJECT, message)?;
            tracing::info!(channel = "email", "Digest delivered");
        }

        Ok(())
    }
}
