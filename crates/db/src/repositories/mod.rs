//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument.

pub mod guestbook_message_repo;
pub mod rsvp_response_repo;
pub mod site_content_repo;
pub mod user_repo;
pub mod user_role_repo;

pub use guestbook_message_repo::GuestbookMessageRepo;
pub use rsvp_response_repo::RsvpResponseRepo;
pub use site_content_repo::SiteContentRepo;
pub use user_repo::UserRepo;
pub use user_role_repo::UserRoleRepo;
