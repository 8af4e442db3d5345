use super::{Mail, MailError, MailService, SmtpMailServiceConfig};
use axum::async_trait;
use lettre::{
    message::{header::ContentType, Mailbox},
    transport::smtp::authentication::Credentials,
    Address, AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor,
};

///
/// Submits mails to the relay on the configured port, upgrading the connection with STARTTLS
///
pub struct SmtpMailService {
    transport: AsyncSmtpTransport<Tokio1Executor>,
    sender: Address,
}

impl SmtpMailService {
    pub fn new(config: SmtpMailServiceConfig) -> Result<Self, MailError> {
        let sender = config.username.parse::<Address>()?;
        let credentials = Credentials::new(config.username, config.password);

        let transport = AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&config.server)?
            .port(config.port)
            .credentials(credentials)
            .build();

        Ok(Self { transport, sender })
    }

    fn build_message(&self, mail: Mail) -> Result<Message, MailError> {
        let from = Mailbox::new(Some(mail.sender_name.to_string()), self.sender.clone());
        let to = mail.to.parse::<Mailbox>()?;

        let message = Message::builder()
            .from(from)
            .to(to)
            .subject(mail.subject)
            .header(ContentType::TEXT_HTML)
            .body(mail.html)?;

        Ok(message)
    }
}

#[async_trait]
impl MailService for SmtpMailService {
    #[tracing::instrument(name = "SMTP", skip_all)]
    async fn send(&self, mail: Mail) -> Result<(), MailError> {
        tracing::debug!(subject = %mail.subject, "sending mail");

        let message = self.build_message(mail)?;
        let response = self.transport.send(message).await?;

        tracing::debug!(code = %response.code(), "sent mail");

        Ok(())
    }
}
