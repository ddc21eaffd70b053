//! Request handlers.
//!
//! Each submodule provides async handler functions for a single resource.
//! Handlers delegate to the corresponding repository in `pawstay_db` and
//! map errors via [`crate::error::AppError`]. Admin-only handlers take an
//! [`crate::middleware::auth::AdminSession`] extractor; public handlers
//! do not.

pub mod auth;
pub mod blog;
pub mod contact;
pub mod custom_messages;
pub mod faq;
pub mod pricing;
pub mod reservations;
pub mod rooms;
pub mod schedules;
pub mod settings;
