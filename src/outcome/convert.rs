//! Conversions into and out of [`Outcome`].
//!
//! Only tagged sources convert implicitly: an `Error` is always a failure,
//! a `bool` always describes a value-less outcome, and a `Result` already
//! says which side it is on. There is no blanket `From<T>`; use
//! [`Outcome::success`] or [`Outcome::from_value`] for bare values.

use super::Outcome;
use crate::maybe::Maybe;
use crate::models::Error;

impl<T> From<Error> for Outcome<T> {
    fn from(error: Error) -> Self {
        Self::Failure(error)
    }
}

impl From<bool> for Outcome<()> {
    fn from(flag: bool) -> Self {
        Self::from_bool(flag)
    }
}

impl<T> From<Result<T, Error>> for Outcome<T> {
    fn from(result: Result<T, Error>) -> Self {
        match result {
            Ok(value) => Self::Success(value),
            Err(error) => Self::Failure(error),
        }
    }
}

impl<T> From<Outcome<T>> for Result<T, Error> {
    fn from(outcome: Outcome<T>) -> Self {
        outcome.into_result()
    }
}

/// Keeps the value and forgets why a failure failed.
impl<T> From<Outcome<T>> for Maybe<T> {
    fn from(outcome: Outcome<T>) -> Self {
        outcome.value()
    }
}
