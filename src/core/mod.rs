//! Core engine types: RNG, configuration, errors.
//!
//! Nothing here knows about specific cards; the catalog and the
//! resolver build on top of these.

pub mod config;
pub mod error;
pub mod rng;

pub use config::SessionConfig;
pub use error::{CatalogError, ConfigError};
pub use rng::GameRng;
