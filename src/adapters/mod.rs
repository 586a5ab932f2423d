//! Adapters that turn "find in a collection" into `Maybe`-returning calls.
//!
//! Provides:
//! - `SequenceExt`: first/last/single lookups over any in-memory iterable
//! - `QuerySource`: the contract an external query engine has to meet
//! - `QueryExt`: the same lookups over a `QuerySource`
//! - `MemoryTable`: an ordered in-memory `QuerySource`

mod memory;
mod query;
mod sequence;

pub use memory::*;
pub use query::*;
pub use sequence::*;
