use crate::common::prelude::ConfigError;
use crate::sender::{ConsoleSender, Sender, SmtpSender};

const DEFAULT_SMTP_HOST: &str = "smtp.gmail.com";
const DEFAULT_SMTP_PORT: u16 = 587;
const DEFAULT_SUBJECT: &str = "Dev AI Update";

#[derive(Debug, Clone)]
pub struct SmtpConfig {
    pub from: String,
    pub to: String,
    pub host: String,
    pub port: u16,
    pub username: String,
    pub password: String,
    pub subject: String,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub smtp: SmtpConfig,
}

impl AppConfig {
    /// Read the configuration from the process environment. Missing secrets
    /// are reported here, before any network call happens.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build the configuration through an arbitrary variable lookup
    pub fn from_lookup<F>(get: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let address = require(&get, "EMAIL_ADDRESS")?;
        let password = require(&get, "EMAIL_PASSWORD")?;
        let port = match get("SMTP_PORT") {
            Some(raw) => raw
                .parse::<u16>()
                .map_err(|_| ConfigError::InvalidVar("SMTP_PORT", raw))?,
            None => DEFAULT_SMTP_PORT,
        };

        Ok(Self {
            smtp: SmtpConfig {
                to: get("DIGEST_TO").unwrap_or_else(|| address.clone()),
                host: get("SMTP_HOST").unwrap_or_else(|| DEFAULT_SMTP_HOST.to_string()),
                subject: get("DIGEST_SUBJECT").unwrap_or_else(|| DEFAULT_SUBJECT.to_string()),
                username: address.clone(),
                from: address,
                port,
                password,
            },
        })
    }

    /// Pick the delivery channel; dry runs print to the console instead
    #[must_use]
    pub fn get_sender(&self, dry_run: bool) -> Sender {
        if dry_run {
            Sender::Console(ConsoleSender {})
        } else {
            Sender::Smtp(SmtpSender::new(&self.smtp))
        }
    }
}

fn require<F>(get: &F, name: &'static str) -> Result<String, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    match get(name) {
        Some(value) if !value.is_empty() => Ok(value),
        _ => Err(ConfigError::MissingVar(name)),
    }
}

#[cfg(test)]
mod test {
    use super::AppConfig;
    use crate::common::prelude::ConfigError;
    use std::collections::HashMap;

    fn lookup<'a>(vars: &'a [(&'a str, &'a str)]) -> impl Fn(&str) -> Option<String> + 'a {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |name| map.get(name).cloned()
    }

    #[test]
    fn test_missing_address_fails_fast() {
        let result = AppConfig::from_lookup(lookup(&[("EMAIL_PASSWORD", "secret")]));
        assert!(matches!(
            result,
            Err(ConfigError::MissingVar("EMAIL_ADDRESS")),
        ));
    }

    #[test]
    fn test_missing_password_fails_fast() {
        let result = AppConfig::from_lookup(lookup(&[("EMAIL_ADDRESS", "me@example.com")]));
        assert!(matches!(
            result,
            Err(ConfigError::MissingVar("EMAIL_PASSWORD")),
        ));
    }

    #[test]
    fn test_empty_secret_counts_as_missing() {
        let result = AppConfig::from_lookup(lookup(&[
            ("EMAIL_ADDRESS", "me@example.com"),
            ("EMAIL_PASSWORD", ""),
        ]));
        assert!(matches!(
            result,
            Err(ConfigError::MissingVar("EMAIL_PASSWORD")),
        ));
    }

    #[test]
    fn test_defaults_fill_the_rest() {
        let config = AppConfig::from_lookup(lookup(&[
            ("EMAIL_ADDRESS", "me@example.com"),
            ("EMAIL_PASSWORD", "secret"),
        ]))
        .unwrap();

        assert_eq!(config.smtp.from, "me@example.com");
        assert_eq!(config.smtp.to, "me@example.com");
        assert_eq!(config.smtp.username, "me@example.com");
        assert_eq!(config.smtp.host, "smtp.gmail.com");
        assert_eq!(config.smtp.port, 587);
        assert_eq!(config.smtp.subject, "Dev AI Update");
    }

    #[test]
    fn test_overrides_are_honored() {
        let config = AppConfig::from_lookup(lookup(&[
            ("EMAIL_ADDRESS", "me@example.com"),
            ("EMAIL_PASSWORD", "secret"),
            ("DIGEST_TO", "team@example.com"),
            ("SMTP_HOST", "mail.example.com"),
            ("SMTP_PORT", "2587"),
            ("DIGEST_SUBJECT", "Weekly AI"),
        ]))
        .unwrap();

        assert_eq!(config.smtp.to, "team@example.com");
        assert_eq!(config.smtp.host, "mail.example.com");
        assert_eq!(config.smtp.port, 2587);
        assert_eq!(config.smtp.subject, "Weekly AI");
    }

    #[test]
    fn test_unparseable_port_is_rejected() {
        let result = AppConfig::from_lookup(lookup(&[
            ("EMAIL_ADDRESS", "me@example.com"),
            ("EMAIL_PASSWORD", "secret"),
            ("SMTP_PORT", "not-a-port"),
        ]));
        assert!(matches!(
            result,
            Err(ConfigError::InvalidVar("SMTP_PORT", _)),
        ));
    }
}
