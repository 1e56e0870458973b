//! Domain types and the filter engine behind the driver table.

pub mod driver;
pub mod filter;
pub mod types;
