//! Query-engine adapters.
//!
//! The engine itself is external. It only has to provide ordered
//! enumeration, predicate filtering and key lookup; `QueryExt` turns those
//! into `Maybe`-returning calls. Unlike the in-memory
//! `SequenceExt::single_or_none`, a query-backed single lookup reports
//! several matching rows as [`ContractError::MultipleMatches`].

use crate::maybe::Maybe;
use crate::models::{ContractError, ContractResult};
use tracing::debug;

/// What an external query engine must expose.
pub trait QuerySource {
    type Key;
    type Row;

    /// All rows, in the engine's order.
    fn rows(&self) -> ContractResult<Vec<Self::Row>>;

    /// Rows matching `predicate`, in order.
    ///
    /// The default scans [`QuerySource::rows`]; engines that can push the
    /// predicate down should override it.
    fn filter_rows(
        &self,
        predicate: &dyn Fn(&Self::Row) -> bool,
    ) -> ContractResult<Vec<Self::Row>> {
        Ok(self
            .rows()?
            .into_iter()
            .filter(|row| predicate(row))
            .collect())
    }

    /// The row stored under `key`, if any.
    fn lookup(&self, key: &Self::Key) -> ContractResult<Option<Self::Row>>;
}

/// `Maybe`-returning lookups over a [`QuerySource`].
pub trait QueryExt: QuerySource {
    fn first_or_none(
        &self,
        predicate: impl Fn(&Self::Row) -> bool,
    ) -> ContractResult<Maybe<Self::Row>> {
        let rows = self.filter_rows(&predicate)?;
        Ok(Maybe::from(rows.into_iter().next()))
    }

    fn last_or_none(
        &self,
        predicate: impl Fn(&Self::Row) -> bool,
    ) -> ContractResult<Maybe<Self::Row>> {
        let rows = self.filter_rows(&predicate)?;
        Ok(Maybe::from(rows.into_iter().last()))
    }

    /// The only matching row. Several matches are an error, not `None`.
    fn single_or_none(
        &self,
        predicate: impl Fn(&Self::Row) -> bool,
    ) -> ContractResult<Maybe<Self::Row>> {
        let mut rows = self.filter_rows(&predicate)?;
        if rows.len() > 1 {
            debug!(count = rows.len(), "Query matched several rows for a single lookup");
            return Err(ContractError::MultipleMatches { count: rows.len() });
        }
        Ok(Maybe::from(rows.pop()))
    }

    fn find_or_none(&self, key: &Self::Key) -> ContractResult<Maybe<Self::Row>> {
        self.lookup(key).map(Maybe::from)
    }
}

impl<S: QuerySource + ?Sized> QueryExt for S {}
