//! Outbound notifications (SMTP email).

pub mod email;
