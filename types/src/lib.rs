//! Mastodon API entity types for tootkit.
//!
//! This crate contains pure domain types with no IO, no async, and minimal
//! dependencies. Entities mirror the REST API payloads documented at
//! <https://docs.joinmastodon.org/entities/> and are deserialized verbatim
//! from server responses.
//!
//! All response entities are `#[non_exhaustive]`: Mastodon servers routinely
//! grow new fields, and adding one must never be a breaking change here.

mod account;
mod auth;
mod status;

pub use account::{Account, AccountField};
pub use auth::{AccessToken, RegisteredApp};
pub use status::{Status, StatusApplication, StatusMention, StatusTag};
