//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument.

pub mod blog_repo;
pub mod contact_repo;
pub mod custom_message_repo;
pub mod faq_repo;
pub mod pricing_repo;
pub mod reservation_repo;
pub mod room_repo;
pub mod schedule_repo;
pub mod session_repo;
pub mod setting_repo;
pub mod user_repo;

pub use blog_repo::BlogRepo;
pub use contact_repo::ContactRepo;
pub use custom_message_repo::CustomMessageRepo;
pub use faq_repo::FaqRepo;
pub use pricing_repo::PricingRepo;
pub use reservation_repo::ReservationRepo;
pub use room_repo::RoomRepo;
pub use schedule_repo::ScheduleRepo;
pub use session_repo::SessionRepo;
pub use setting_repo::SettingRepo;
pub use user_repo::UserRepo;
