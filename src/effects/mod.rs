//! Aftermath effects of storm cards.
//!
//! - `Aftermath`: Closed set of effect kinds with their parameters
//! - `AftermathResolver`: Applies one aftermath to the session state
//!
//! Each storm card carries its aftermath as data, so resolution is a
//! single match over the effect kind rather than a lookup by card id.

mod aftermath;
mod resolver;

pub use aftermath::Aftermath;
pub use resolver::{AftermathReport, AftermathResolver, AftermathScope};
