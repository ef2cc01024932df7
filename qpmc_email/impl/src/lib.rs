use anyhow::anyhow;
use lettre::{
    message::MultiPart, AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor,
};
use qpmc_email_contracts::{DeliveryId, Email, EmailService};
use qpmc_models::email_address::EmailAddressWithName;
use uuid::Uuid;

#[derive(Debug, Clone)]
pub struct EmailServiceImpl {
    from: EmailAddressWithName,
    transport: AsyncSmtpTransport<Tokio1Executor>,
}

impl EmailServiceImpl {
    pub async fn new(url: &str, from: EmailAddressWithName) -> anyhow::Result<Self> {
        let transport = AsyncSmtpTransport::<Tokio1Executor>::from_url(url)?.build();

        Ok(Self { from, transport })
    }

    /// Message-IDs are generated here rather than left to the relay so the
    /// identifier can be returned to the submitter.
    fn next_message_id(&self) -> String {
        format!("<{}@{}>", Uuid::new_v4(), self.from.domain())
    }
}

impl EmailService for EmailServiceImpl {
    async fn send(&self, email: Email) -> anyhow::Result<DeliveryId> {
        let message_id = self.next_message_id();

        let mut builder = Message::builder()
            .from(self.from.0.clone())
            .subject(email.subject)
            .message_id(Some(message_id.clone()));
        for recipient in email.recipients {
            builder = builder.to(recipient.0);
        }
        if let Some(reply_to) = email.reply_to {
            builder = builder.reply_to(reply_to.0.into());
        }
        let message =
            builder.multipart(MultiPart::alternative_plain_html(email.text, email.html))?;

        let response = self.transport.send(message).await?;
        if !response.is_positive() {
            return Err(anyhow!("smtp server rejected the message: {}", response.code()));
        }

        Ok(DeliveryId(message_id))
    }

    async fn ping(&self) -> anyhow::Result<()> {
        self.transport
            .test_connection()
            .await?
            .then_some(())
            .ok_or_else(|| anyhow!("Failed to ping smtp server"))
    }
}
