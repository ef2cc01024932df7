use clap::Subcommand;
use qpmc_config::Config;
use qpmc_email_contracts::{Email, EmailService};
use qpmc_models::email_address::EmailAddressWithName;

use crate::email;

#[derive(Debug, Subcommand)]
pub enum EmailCommand {
    /// Test email deliverability
    Test {
        recipient: EmailAddressWithName,
        /// Use the Motahida Group transport instead of the primary one
        #[arg(long)]
        motahida: bool,
    },
}

impl EmailCommand {
    pub async fn invoke(self, config: Config) -> anyhow::Result<()> {
        match self {
            EmailCommand::Test {
                recipient,
                motahida,
            } => test(config, recipient, motahida).await,
        }
    }
}

async fn test(
    config: Config,
    recipient: EmailAddressWithName,
    motahida: bool,
) -> anyhow::Result<()> {
    let email_config = if motahida {
        &config.motahida.email
    } else {
        &config.email
    };

    let email_service = email::connect(email_config).await?;

    let delivery = email_service
        .send(Email {
            recipients: vec![recipient],
            subject: "Email Deliverability Test".into(),
            text: "Email deliverability seems to be working!".into(),
            html: "<p>Email deliverability seems to be working!</p>".into(),
            reply_to: None,
        })
        .await?;

    println!("Delivered with Message-ID {delivery}");

    Ok(())
}
