//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - A `Deserialize` create DTO for inserts
//! - A `Deserialize` update DTO (all `Option` fields) for patches

pub mod blog;
pub mod contact;
pub mod custom_message;
pub mod faq;
pub mod pricing;
pub mod reservation;
pub mod room;
pub mod schedule;
pub mod session;
pub mod setting;
pub mod user;
