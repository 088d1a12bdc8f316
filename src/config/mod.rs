use channels::SmtpSettings;

use crate::errors::{DigestError, DigestResult};

#[derive(Debug, Clone)]
pub struct TelegramSettings {
    pub bot_token: String,
    pub chat_id: String,
}

#[derive(Debug, Clone, Default)]
pub struct Config {
    pub telegram_bot_token: Option<String>,
    pub telegram_chat_id: Option<String>,
    pub smtp_host: Option<String>,
    pub smtp_port: Option<u16>,
    pub smtp_user: Option<String>,
    pub smtp_password: Option<String>,
    pub email_from: Option<String>,
    pub email_to: Option<String>,
}

impl Config {
    /// Get the directory where the executable is located
    fn exe_dir() -> Option<std::path::PathBuf> {
        std::env::current_exe()
            .ok()
            .and_then(|p| p.parent().map(|p| p.to_path_buf()))
    }

    pub fn from_env() -> DigestResult<Self> {
        // Try to load .env from executable's directory first
        if let Some(dir) = Self::exe_dir() {
            let env_path = dir.join(".env");
            if env_path.exists() {
                dotenvy::from_path(&env_path).ok();
            }
        }
        // Fall back to current directory
        dotenvy::dotenv().ok();

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a config from any key lookup; empty values count as unset
    pub fn from_lookup<F>(lookup: F) -> DigestResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        Ok(Self {
            telegram_bot_token: get("TELEGRAM_BOT_TOKEN"),
            telegram_chat_id: get("TELEGRAM_CHAT_ID"),
            smtp_host: get("SMTP_HOST"),
            smtp_port: parse_port(get("SMTP_PORT"))?,
            smtp_user: get("SMTP_USER"),
            smtp_password: get("SMTP_PASSWORD"),
            email_from: get("EMAIL_FROM"),
            email_to: get("EMAIL_TO"),
        })
    }

    /// Telegram settings, only when both token and chat id are present
    pub fn telegram(&self) -> Option<TelegramSettings> {
        Some(TelegramSettings {
            bot_token: self.telegram_bot_token.clone()?,
            chat_id: self.telegram_chat_id.clone()?,
        })
    }

    /// SMTP settings, only when every field is present
    pub fn email(&self) -> Option<SmtpSettings> {
        Some(SmtpSettings {
            host: self.smtp_host.clone()?,
            port: self.smtp_port?,
            user: self.smtp_user.clone()?,
            password: self.smtp_password.clone()?,
            from: self.email_from.clone()?,
            to: self.email_to.clone()?,
        })
    }

    pub fn has_channel(&self) -> bool {
        self.telegram().is_some() || self.email().is_some()
    }
}

// A port of 0 is treated the same as an unset port
fn parse_port(raw: Option<String>) -> DigestResult<Option<u16>> {
    match raw {
        None => Ok(None),
        Some(value) => {
            let port: u16 = value.trim().parse().map_err(|_| {
                DigestError::Config(format!("SMTP_PORT must be a port number, got '{}'", value))
            })?;
            Ok(Some(port).filter(|p| *p != 0))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> DigestResult<Config> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    const FULL_SMTP: &[(&str, &str)] = &[
        ("SMTP_HOST", "smtp.example.com"),
        ("SMTP_PORT", "587"),
        ("SMTP_USER", "user"),
        ("SMTP_PASSWORD", "secret"),
        ("EMAIL_FROM", "digest@example.com"),
        ("EMAIL_TO", "me@example.com"),
    ];

    #[test]
    fn test_empty_environment_has_no_channel() {
        let config = config_from(&[]).unwrap();
        assert!(config.telegram().is_none());
        assert!(config.email().is_none());
        assert!(!config.has_channel());
    }

    #[test]
    fn test_telegram_requires_token_and_chat() {
        let config = config_from(&[("TELEGRAM_BOT_TOKEN", "123:abc")]).unwrap();
        assert!(config.telegram().is_none());

        let config = config_from(&[
            ("TELEGRAM_BOT_TOKEN", "123:abc"),
            ("TELEGRAM_CHAT_ID", "42"),
        ])
        .unwrap();
        let telegram = config.telegram().unwrap();
        assert_eq!(telegram.bot_token, "123:abc");
        assert_eq!(telegram.chat_id, "42");
    }

    #[test]
    fn test_email_requires_every_field() {
        let config = config_from(FULL_SMTP).unwrap();
        let smtp = config.email().unwrap();
        assert_eq!(smtp.host, "smtp.example.com");
        assert_eq!(smtp.port, 587);

        let partial: Vec<(&str, &str)> = FULL_SMTP
            .iter()
            .copied()
            .filter(|(k, _)| *k != "EMAIL_TO")
            .collect();
        let config = config_from(&partial).unwrap();
        assert!(config.email().is_none());
    }

    #[test]
    fn test_zero_port_is_unset() {
        let config = config_from(&[("SMTP_PORT", "0")]).unwrap();
        assert_eq!(config.smtp_port, None);
    }

    #[test]
    fn test_invalid_port_is_error() {
        let result = config_from(&[("SMTP_PORT", "smtp")]);
        assert!(matches!(result, Err(DigestError::Config(_))));
    }

    #[test]
    fn test_blank_values_are_unset() {
        let config = config_from(&[("TELEGRAM_BOT_TOKEN", "  "), ("TELEGRAM_CHAT_ID", "42")]).unwrap();
        assert!(config.telegram().is_none());
    }
}
