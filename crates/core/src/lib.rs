//! Pure domain logic for the wedding site backend.
//!
//! Nothing in this crate touches the network or the database. Time is read
//! only through the [`clock::Clock`] trait.

pub mod accounts;
pub mod clock;
pub mod countdown;
pub mod error;
pub mod export;
pub mod guestbook;
pub mod listing;
pub mod pagination;
pub mod record_kind;
pub mod roles;
pub mod rsvp;
pub mod site_content;
pub mod stats;
pub mod types;
pub mod validation;
