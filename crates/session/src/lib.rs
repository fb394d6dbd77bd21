//! Composition root for one seller dashboard session.
//!
//! Reads configuration, sets up logging, and wires the catalog, the seller
//! profile and the buyer list together behind one [`Session`] value that the
//! view layer holds for as long as the seller is signed in.

pub mod config;
pub mod session;

pub use config::{ConfigError, SessionConfig};
pub use session::Session;
