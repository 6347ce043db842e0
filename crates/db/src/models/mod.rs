//! Row structs and DTOs.
//!
//! Each submodule contains a `FromRow` + `Serialize` entity struct matching
//! the database row plus whatever input DTOs its repository accepts.

pub mod guestbook_message;
pub mod rsvp_response;
pub mod site_content;
pub mod user;
