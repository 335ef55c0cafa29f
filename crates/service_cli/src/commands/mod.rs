//! CLI command implementations.

pub mod invoke;
pub mod list;
pub mod price;
