//! Parties of a seller session: the seller's own profile and the buyers
//! (clients) the seller is in contact with.
//!
//! Pure domain logic (no IO, no HTTP, no storage). Buyer records are fetched by
//! the remote backend and handed to [`ClientDirectory`] as plain data.

pub mod client;
pub mod profile;

pub use client::{Client, ClientDirectory, ClientFilter, ClientId, ClientStatus, ClientTotals};
pub use profile::{ProfilePatch, ProfileStore, SellerProfile};
