//! Core data models for match analytics.

mod account;
mod compatibility;
mod match_record;
mod payload;
mod performance;
mod profile;

#[cfg(test)]
pub(crate) mod fixtures;

pub use account::*;
pub use compatibility::*;
pub use match_record::*;
pub use payload::*;
pub use performance::*;
pub use profile::*;
