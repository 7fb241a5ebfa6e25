//! Email notifications for the event lifecycle.
//!
//! [`Mailer`] wraps the `lettre` async SMTP transport to send plain-text
//! notification emails. Configuration is loaded from environment variables;
//! if `SMTP_HOST` is not set, [`EmailConfig::from_env`] returns `None` and
//! no mailer should be constructed.

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
const DEFAULT_FROM_ADDRESS: &str = "noreply@kwaground.local";

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
    /// | Variable        | Required | Default                    |
    /// |-----------------|----------|----------------------------|
    /// | `SMTP_HOST`     | yes      | —                          |
    /// | `SMTP_PORT`     | no       | `587`                      |
    /// | `SMTP_FROM`     | no       | `noreply@kwaground.local`  |
    /// | `SMTP_USER`     | no       | —                          |
    /// | `SMTP_PASSWORD` | no       | —                          |
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
// Notification
// ---------------------------------------------------------------------------

/// A lifecycle notification rendered as a plain-text email.
#[derive(Debug, Clone)]
pub enum Notification {
    /// A new event was submitted and awaits admin review.
    EventSubmitted {
        title: String,
        date: String,
        time: Option<String>,
        location: String,
        category: String,
        description: String,
        submitter_email: String,
    },
    /// An event was approved and is now publicly listed.
    EventApproved {
        title: String,
        date: String,
        location: String,
    },
}

impl Notification {
    /// Email subject line.
    pub fn subject(&self) -> &'static str {
        match self {
            Self::EventSubmitted { .. } => "New Event Submitted for Review",
            Self::EventApproved { .. } => "Your Event Has Been Approved!",
        }
    }

    /// Plain-text email body.
    pub fn body(&self) -> String {
        match self {
            Self::EventSubmitted {
                title,
                date,
                time,
                location,
                category,
                description,
                submitter_email,
            } => {
                let when = match time {
                    Some(time) => format!("{date} at {time}"),
                    None => date.clone(),
                };
                format!(
                    "A new event is awaiting approval.\n\n\
                     Title: {title}\n\
                     Date: {when}\n\
                     Location: {location}\n\
                     Category: {category}\n\
                     Description: {description}\n\
                     Submitted by: {submitter_email}\n\n\
                     Please review and approve this event in your admin dashboard.\n"
                )
            }
            Self::EventApproved {
                title,
                date,
                location,
            } => {
                format!(
                    "Congratulations!\n\n\
                     Your event \"{title}\" has been approved and is now live on the platform.\n\n\
                     Date: {date}\n\
                     Location: {location}\n\n\
                     People can now discover and attend your event.\n"
                )
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Mailer
// ---------------------------------------------------------------------------

/// Sends lifecycle notification emails via SMTP.
pub struct Mailer {
    config: EmailConfig,
}

impl Mailer {
    /// Create a new mailer with the given configuration.
    pub fn new(config: EmailConfig) -> Self {
        Self { config }
    }

    /// Send a notification email to the specified address.
    pub async fn deliver(
        &self,
        to_email: &str,
        notification: &Notification,
    ) -> Result<(), EmailError> {
        use lettre::{
            message::header::ContentType, transport::smtp::authentication::Credentials,
            AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor,
        };

        let email = Message::builder()
            .from(self.config.from_address.parse()?)
            .to(to_email.parse()?)
            .subject(notification.subject())
            .header(ContentType::TEXT_PLAIN)
            .body(notification.body())
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

        tracing::info!(to = to_email, subject = notification.subject(), "Notification email sent");
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_env_returns_none_without_smtp_host() {
        // Ensure SMTP_HOST is not set in the test environment.
        std::env::remove_var("SMTP_HOST");
        assert!(EmailConfig::from_env().is_none());
    }

    #[test]
    fn submitted_body_includes_time_when_present() {
        let n = Notification::EventSubmitted {
            title: "Rooftop Jazz Night".to_string(),
            date: "2026-09-12".to_string(),
            time: Some("19:30".to_string()),
            location: "Westlands".to_string(),
            category: "Concerts".to_string(),
            description: "Live jazz".to_string(),
            submitter_email: "host@example.com".to_string(),
        };
        assert_eq!(n.subject(), "New Event Submitted for Review");
        let body = n.body();
        assert!(body.contains("2026-09-12 at 19:30"));
        assert!(body.contains("Submitted by: host@example.com"));
    }

    #[test]
    fn submitted_body_omits_absent_time() {
        let n = Notification::EventSubmitted {
            title: "Tech Meetup".to_string(),
            date: "2026-10-01".to_string(),
            time: None,
            location: "CBD".to_string(),
            category: "Tech Meetup".to_string(),
            description: "Talks".to_string(),
            submitter_email: "host@example.com".to_string(),
        };
        assert!(n.body().contains("Date: 2026-10-01\n"));
        assert!(!n.body().contains(" at "));
    }

    #[test]
    fn approved_body_names_the_event() {
        let n = Notification::EventApproved {
            title: "Sip & Paint".to_string(),
            date: "2026-09-20".to_string(),
            location: "Karen".to_string(),
        };
        assert_eq!(n.subject(), "Your Event Has Been Approved!");
        assert!(n.body().contains("\"Sip & Paint\""));
    }

    #[test]
    fn email_error_display_build() {
        let err = EmailError::Build("missing body".to_string());
        assert_eq!(err.to_string(), "Email build error: missing body");
    }
}
