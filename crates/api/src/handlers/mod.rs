pub mod admin_records;
pub mod admin_users;
pub mod auth;
pub mod content;
pub mod countdown;
pub mod guestbook;
pub mod rsvp;
