use lettre::message::{MultiPart, SinglePart};
use lettre::transport::smtp::authentication::Credentials;
use lettre::{SmtpTransport, Transport};
use tracing::info;

use crate::algolia::prelude::DigestItem;
use crate::common::prelude::DeliveryError;
use crate::config::SmtpConfig;
use crate::render::{digest_to_html, digest_to_text};

pub enum Sender {
    Console(ConsoleSender),
    Smtp(SmtpSender),
}

impl Sender {
    pub async fn send_digest(&self, digest: &[DigestItem]) -> Result<(), DeliveryError> {
        match self {
            Sender::Console(sender) => sender.send_digest(digest).await,
            Sender::Smtp(sender) => sender.send_digest(digest).await,
        }
    }
}

pub trait DigestSender {
    async fn send_digest(&self, digest: &[DigestItem]) -> Result<(), DeliveryError>;
}

pub struct ConsoleSender {}

pub struct SmtpSender {
    config: SmtpConfig,
}

impl SmtpSender {
    #[must_use]
    pub fn new(config: &SmtpConfig) -> Self {
        Self {
            config: config.clone(),
        }
    }

    fn subject(&self) -> String {
        format!(
            "{}: {}",
            self.config.subject,
            chrono::Local::now().format("%Y-%m-%d"),
        )
    }
}

impl DigestSender for SmtpSender {
    /// Render the digest, wrap it as multipart/alternative, and submit it
    /// over STARTTLS with the configured credentials.
    async fn send_digest(&self, digest: &[DigestItem]) -> Result<(), DeliveryError> {
        let text_body = digest_to_text(digest);
        let html_body = digest_to_html(digest);
        let email = lettre::Message::builder()
            .from(self.config.from.parse()?)
            .to(self.config.to.parse()?)
            .subject(self.subject())
            .multipart(
                MultiPart::alternative()
                    .singlepart(SinglePart::plain(text_body))
                    .singlepart(SinglePart::html(html_body)),
            )?;

        let creds = Credentials::new(self.config.username.clone(), self.config.password.clone());
        let mailer = SmtpTransport::starttls_relay(&self.config.host)?
            .port(self.config.port)
            .credentials(creds)
            .build();

        mailer.send(&email)?;
        info!(to = %self.config.to, items = digest.len(), "digest submitted");
        Ok(())
    }
}

impl DigestSender for ConsoleSender {
    async fn send_digest(&self, digest: &[DigestItem]) -> Result<(), DeliveryError> {
        println!("{}", digest_to_text(digest));
        Ok(())
    }
}
