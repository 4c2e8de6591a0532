//! Card system: categories, definitions and the storm catalog.
//!
//! ## Key Types
//!
//! - `Category`: The four action categories
//! - `ActionKind` / `ActionCard`: Cards the keeper plays
//! - `StormCard`: Event cards with a requirement, threat, reward and aftermath
//! - `StormCatalog`: Storm card lookup, including the standard table

pub mod catalog;
pub mod category;
pub mod definition;

pub use catalog::StormCatalog;
pub use category::{Category, CategorySet};
pub use definition::{
    ActionCard, ActionCardId, ActionKind, Polarity, Requirement, StormCard, StormCardId,
};
