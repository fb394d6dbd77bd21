//! `shopmatch-core` — domain foundation building blocks for the seller dashboard.
//!
//! This crate contains **pure domain** primitives (no IO, no logging, no storage).

pub mod entity;
pub mod error;
pub mod id;
pub mod value_object;

pub use entity::Entity;
pub use error::{DomainError, DomainResult};
pub use id::{ProductId, SessionId};
pub use value_object::{Price, ValueObject};
