//! In-memory sequence adapters.

use crate::maybe::Maybe;
use crate::models::{ContractError, ContractResult};
use tracing::debug;

/// `Maybe`-returning lookups for anything iterable.
///
/// ```
/// use outcome::{Maybe, SequenceExt};
///
/// let ids = vec![3, 8, 12];
/// assert_eq!(ids.iter().first_or_none(|id| **id > 5), Maybe::some(&8));
/// assert!(ids.iter().first_or_none(|id| **id > 50).is_none());
/// ```
pub trait SequenceExt: IntoIterator + Sized {
    /// First element matching `predicate`.
    fn first_or_none<P>(self, predicate: P) -> Maybe<Self::Item>
    where
        P: FnMut(&Self::Item) -> bool,
    {
        Maybe::from(self.into_iter().find(predicate))
    }

    /// Last element matching `predicate`.
    fn last_or_none<P>(self, mut predicate: P) -> Maybe<Self::Item>
    where
        P: FnMut(&Self::Item) -> bool,
    {
        Maybe::from(self.into_iter().filter(|item| predicate(item)).last())
    }

    /// The only element matching `predicate`.
    ///
    /// Zero matches and more than one match both give `None`. Use
    /// [`SequenceExt::try_single_or_none`] to tell the two apart.
    fn single_or_none<P>(self, predicate: P) -> Maybe<Self::Item>
    where
        P: FnMut(&Self::Item) -> bool,
    {
        self.try_single_or_none(predicate).unwrap_or(Maybe::None)
    }

    /// The only element matching `predicate`, or
    /// [`ContractError::MultipleMatches`] when several do.
    fn try_single_or_none<P>(self, mut predicate: P) -> ContractResult<Maybe<Self::Item>>
    where
        P: FnMut(&Self::Item) -> bool,
    {
        let mut matches = self.into_iter().filter(|item| predicate(item));
        let first = matches.next();
        let extra = matches.count();

        if extra > 0 {
            let count = extra + 1;
            debug!(count, "Single-element lookup matched several elements");
            return Err(ContractError::MultipleMatches { count });
        }

        Ok(Maybe::from(first))
    }
}

impl<I: IntoIterator> SequenceExt for I {}
