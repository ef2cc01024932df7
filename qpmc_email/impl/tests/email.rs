use qpmc_email_contracts::{Email, EmailService};
use qpmc_email_impl::EmailServiceImpl;

#[tokio::test]
#[ignore = "requires the SMTP relay from config.toml to be reachable"]
async fn send_email() {
    let config = qpmc_config::load().unwrap();

    let email = EmailServiceImpl::new(&config.email.smtp_url, config.email.from.clone())
        .await
        .unwrap();

    email.ping().await.unwrap();

    let delivery = email
        .send(Email {
            recipients: vec!["test@example.com".parse().unwrap()],
            subject: "The Subject".into(),
            text: "Hello World!".into(),
            html: "<h1>Hello World!</h1>".into(),
            reply_to: Some("replyto@example.com".parse().unwrap()),
        })
        .await
        .unwrap();

    assert!(delivery.0.ends_with(&format!("@{}>", config.email.from.domain())));
}
