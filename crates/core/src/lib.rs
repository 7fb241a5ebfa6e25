//! Domain logic for the KwaGround event platform.
//!
//! Everything in this crate is pure: validation, the event lifecycle, the
//! filter/search engine, tag and price handling, moderation thresholds, and
//! share-text composition. I/O (database, HTTP, storage, email) lives in the
//! sibling crates.

pub mod draft;
pub mod error;
pub mod filter;
pub mod moderation;
pub mod price;
pub mod roles;
pub mod share;
pub mod status;
pub mod tags;
pub mod types;
