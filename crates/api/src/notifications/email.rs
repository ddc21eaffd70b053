//! Email notification delivery via SMTP.
//!
//! [`Mailer`] wraps the `lettre` async SMTP transport to send plain-text
//! booking and contact notifications. Configuration is loaded from
//! environment variables; if `SMTP_HOST` is not set, [`EmailConfig::from_env`]
//! returns `None` and no mailer should be constructed.
//!
//! Delivery is best-effort by contract: callers log failures and carry on.
//! Nothing in this module may abort a surrounding request.

use lettre::message::header::ContentType;
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};
use pawstay_db::models::contact::ContactMessage;
use pawstay_db::models::reservation::Reservation;

// ---------------------------------------------------------------------------
// Error
// ---------------------------------------------------------------------------

/// Error type for email delivery failures.
#[derive(Debug, thiserror::Error)]
pub enum EmailError {
    /// SMTP transport-level failure (authentication, connection, etc.).
    #[error("SMTP transport error: {0}")]
    Transport(#[from] lettre::transport::smtp::Error),

    /// The recipient or sender address could not be parsed.
    #[error("Email address parse error: {0}")]
    Address(#[from] lettre::address::AddressError),

    /// The MIME message could not be assembled.
    #[error("Email build error: {0}")]
    Build(String),
}

// ---------------------------------------------------------------------------
// EmailConfig
// ---------------------------------------------------------------------------

/// Default SMTP port (STARTTLS).
const DEFAULT_SMTP_PORT: u16 = 587;

/// Default sender address when `SMTP_FROM` is not set.
const DEFAULT_FROM_ADDRESS: &str = "noreply@pawstay.local";

/// Configuration for the SMTP email delivery service.
#[derive(Debug, Clone)]
pub struct EmailConfig {
    /// SMTP server hostname.
    pub smtp_host: String,
    /// SMTP server port (defaults to 587).
    pub smtp_port: u16,
    /// RFC 5322 "From" address.
    pub from_address: String,
    /// Optional SMTP username.
    pub smtp_user: Option<String>,
    /// Optional SMTP password.
    pub smtp_password: Option<String>,
}

impl EmailConfig {
    /// Load configuration from environment variables.
    ///
    /// Returns `None` if `SMTP_HOST` is not set, signalling that email
    /// delivery is not configured and should be skipped.
    ///
    /// | Variable        | Required | Default                  |
    /// |-----------------|----------|--------------------------|
    /// | `SMTP_HOST`     | yes      | —                        |
    /// | `SMTP_PORT`     | no       | `587`                    |
    /// | `SMTP_FROM`     | no       | `noreply@pawstay.local`  |
    /// | `SMTP_USER`     | no       | —                        |
    /// | `SMTP_PASSWORD` | no       | —                        |
    pub fn from_env() -> Option<Self> {
        let smtp_host = std::env::var("SMTP_HOST").ok()?;
        Some(Self {
            smtp_host,
            smtp_port: std::env::var("SMTP_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(DEFAULT_SMTP_PORT),
            from_address: std::env::var("SMTP_FROM")
                .unwrap_or_else(|_| DEFAULT_FROM_ADDRESS.to_string()),
            smtp_user: std::env::var("SMTP_USER").ok(),
            smtp_password: std::env::var("SMTP_PASSWORD").ok(),
        })
    }
}

// ---------------------------------------------------------------------------
// Mailer
// ---------------------------------------------------------------------------

/// Sends booking and contact notification emails via SMTP.
pub struct Mailer {
    config: EmailConfig,
}

impl Mailer {
    /// Create a new mailer with the given configuration.
    pub fn new(config: EmailConfig) -> Self {
        Self { config }
    }

    /// Booking acknowledgement sent to the customer.
    pub async fn send_reservation_confirmation(
        &self,
        reservation: &Reservation,
        site_base_url: &str,
    ) -> Result<(), EmailError> {
        let subject = "[Pawstay] We received your booking request";
        let body = format!(
            "Hello {name},\n\n\
             Thank you for your booking request from {start} to {end} for \
             {count} animal(s). We will confirm availability shortly.\n\n\
             Your reference number is {id}.\n\n\
             Our rooms and services: {site_base_url}\n\n\
             The Pawstay team",
            name = reservation.customer_name,
            start = reservation.start_date,
            end = reservation.end_date,
            count = reservation.animal_count,
            id = reservation.id,
        );
        self.send_plain_text(&reservation.email, subject, &body)
            .await
    }

    /// New-booking alert sent to the site operator.
    pub async fn send_operator_notification(
        &self,
        operator_email: &str,
        reservation: &Reservation,
        site_base_url: &str,
    ) -> Result<(), EmailError> {
        let subject = format!(
            "[Pawstay] New booking request #{} ({} to {})",
            reservation.id, reservation.start_date, reservation.end_date
        );
        let body = format!(
            "New booking request:\n\n\
             Customer: {name} <{email}>\n\
             Dates: {start} to {end}\n\
             Animals: {count}\n\
             Preferred room: {room}\n\
             Message: {message}\n\n\
             Review: {site_base_url}/admin/reservations/{id}",
            name = reservation.customer_name,
            email = reservation.email,
            start = reservation.start_date,
            end = reservation.end_date,
            count = reservation.animal_count,
            room = reservation
                .room_id
                .map_or_else(|| "none".to_string(), |id| id.to_string()),
            message = reservation.message.as_deref().unwrap_or("-"),
            id = reservation.id,
        );
        self.send_plain_text(operator_email, &subject, &body).await
    }

    /// Contact-form alert sent to the site operator.
    pub async fn send_contact_notification(
        &self,
        operator_email: &str,
        message: &ContactMessage,
        site_base_url: &str,
    ) -> Result<(), EmailError> {
        let subject = format!("[Pawstay] New contact message #{}", message.id);
        let body = format!(
            "New contact message:\n\n\
             From: {name} <{email}>\n\
             Subject: {msg_subject}\n\n\
             {text}\n\n\
             Inbox: {site_base_url}/admin/contact/{id}",
            name = message.name,
            email = message.email,
            msg_subject = if message.subject.is_empty() { "-" } else { &message.subject },
            text = message.body,
            id = message.id,
        );
        self.send_plain_text(operator_email, &subject, &body).await
    }

    /// Send a plain-text message to a single recipient.
    pub async fn send_plain_text(
        &self,
        to_email: &str,
        subject: &str,
        body: &str,
    ) -> Result<(), EmailError> {
        let email = Message::builder()
            .from(self.config.from_address.parse()?)
            .to(to_email.parse()?)
            .subject(subject)
            .header(ContentType::TEXT_PLAIN)
            .body(body.to_string())
            .map_err(|e| EmailError::Build(e.to_string()))?;

        let mut transport_builder =
            AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&self.config.smtp_host)?
                .port(self.config.smtp_port);

        if let (Some(user), Some(pass)) = (&self.config.smtp_user, &self.config.smtp_password) {
            transport_builder =
                transport_builder.credentials(Credentials::new(user.clone(), pass.clone()));
        }

        let mailer = transport_builder.build();
        mailer.send(email).await?;

        tracing::info!(to = to_email, subject, "Notification email sent");
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
