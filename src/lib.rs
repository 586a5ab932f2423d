//! outcome - explicit absence and failure as plain values.
//!
//! ## Types
//!
//! - **`Maybe<T>`**: a value that may be absent (`Some` / `None`)
//! - **`Outcome<T>`**: success carrying `T`, or failure carrying an `Error`;
//!   `Outcome<()>` is the value-less result
//! - **`Error`**: immutable (code, message, status) record
//!
//! ## Composition
//!
//! Both containers share one small algebra: `map`, `bind`, `select_many`,
//! `filter` and `match_with`. Absence and failure short-circuit: once a step
//! yields `None` or `Failure`, no later step is evaluated and the first
//! error reaches the caller unchanged.
//!
//! ```
//! use outcome::{Error, Maybe, Outcome};
//!
//! let total = Outcome::success(5).select_many(|_| Outcome::success(10), |a, b| a + b);
//! assert_eq!(total, Outcome::success(15));
//!
//! let e1 = Error::create("E1", "first");
//! let failed = Outcome::<i32>::failure(e1.clone())
//!     .select_many(|_| Outcome::success(10), |a, b| a + b);
//! assert_eq!(failed, Outcome::failure(e1));
//!
//! assert_eq!(Maybe::<i32>::none().bind(|x| Maybe::some(x * 2)), Maybe::none());
//! ```
//!
//! ## Boundaries
//!
//! - `adapters`: first/last/single lookups over sequences and query engines
//! - `models::ErrorCatalog`: named errors loaded from TOML configuration

pub mod adapters;
pub mod maybe;
pub mod models;
pub mod outcome;

// Re-exports for convenience
pub use adapters::{MemoryTable, QueryExt, QuerySource, SequenceExt};
pub use maybe::Maybe;
pub use models::{Config, ConfigError, ContractError, ContractResult, Error, ErrorCatalog};
pub use outcome::Outcome;
