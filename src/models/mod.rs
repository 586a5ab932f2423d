//! Data records and configuration for outcome.
//!
//! - `Error`: the immutable domain failure record
//! - `ContractError`: misuse of the unsafe accessors and adapters
//! - `Config` / `ErrorCatalog`: named errors loaded from TOML

mod catalog;
mod config;
mod error;

pub use catalog::*;
pub use config::*;
pub use error::*;
