//!
//! Core observer machinery shared by the stock demo binaries.
//!
//! This crate aggregates:
//! - `error` — unified error type `FeedError` used across the workspace.
//! - `result` — handy `Result<T, FeedError>` alias.
//! - `observer` — the `Observer` capability trait for price-update listeners.
//! - `subject` — reusable `Subject` registry embedded by concrete subjects.
//! - `stock` — `Stock`, a concrete subject holding the current price.
//! - `investor` — `Investor`, a concrete observer printing notifications.
//! - `prices` — parsing helpers for price-list files used by the demo driver.
#![warn(missing_docs)]
pub mod error;
pub mod result;
pub mod observer;
pub mod subject;
pub mod stock;
pub mod investor;
pub mod prices;

#[cfg(test)]
mod test_support;

pub use error::FeedError;
pub use result::Result;
pub use observer::Observer;
pub use subject::Subject;
pub use stock::Stock;
pub use investor::Investor;
