//! Request extractors enforcing authentication on admin routes.

pub mod auth;
