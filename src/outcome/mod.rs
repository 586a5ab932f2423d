//! Success-or-failure outcomes.
//!
//! [`Outcome<T>`] is `Success(T)` or `Failure(Error)`. The value-less result
//! is `Outcome<()>`, so a single implementation serves both arities.
//!
//! Domain failures travel through the data: `map`, `bind`, `select_many` and
//! `filter` propagate the first failure unchanged and never evaluate the
//! remaining steps.

mod convert;

use crate::maybe::Maybe;
use crate::models::Error;

/// The result of an operation: a value, or the [`Error`] explaining why not.
///
/// ```
/// use outcome::{Error, Outcome};
///
/// let doubled = Outcome::success(5).map(|x| x * 2).filter(|x| *x > 5);
/// assert_eq!(doubled, Outcome::success(10));
///
/// let rejected = Outcome::success(2).map(|x| x * 2).filter(|x| *x > 5);
/// assert_eq!(rejected.error().code(), "PREDICATE_FAILED");
///
/// let failed: Outcome = Outcome::failure(Error::new("Error.Test", "Error occurred", 500));
/// let text = failed.match_with(|_| "S".to_string(), |e| format!("F:{}", e.message()));
/// assert_eq!(text, "F:Error occurred");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[must_use]
pub enum Outcome<T = ()> {
    Success(T),
    Failure(Error),
}

impl Outcome<()> {
    /// The shared value-less success.
    pub const SUCCESS: Self = Self::Success(());

    /// `true` becomes success, `false` an unspecified failure.
    pub const fn from_bool(flag: bool) -> Self {
        if flag { Self::SUCCESS } else { Self::FAILURE }
    }

    /// Re-type a value-less outcome.
    ///
    /// There is no value to recover, so a success carries `U::default()`.
    /// The flag and the error are preserved.
    pub fn typed<U: Default>(self) -> Outcome<U> {
        match self {
            Self::Success(()) => Outcome::Success(U::default()),
            Self::Failure(error) => Outcome::Failure(error),
        }
    }
}

impl<T> Outcome<T> {
    /// Failure carrying the sentinel, for when no diagnostic exists yet.
    pub const FAILURE: Self = Self::Failure(Error::NONE);
    pub const BAD_REQUEST: Self = Self::Failure(Error::BAD_REQUEST);
    pub const UNAUTHORIZED: Self = Self::Failure(Error::UNAUTHORIZED);
    pub const FORBIDDEN: Self = Self::Failure(Error::FORBIDDEN);
    pub const NOT_FOUND: Self = Self::Failure(Error::NOT_FOUND);

    pub const fn success(value: T) -> Self {
        Self::Success(value)
    }

    pub fn failure(error: impl Into<Error>) -> Self {
        Self::Failure(error.into())
    }

    pub const fn unspecified_failure() -> Self {
        Self::FAILURE
    }

    /// Named constructor for a success value.
    pub const fn from_value(value: T) -> Self {
        Self::Success(value)
    }

    /// Named constructor for a failure.
    pub const fn from_error(error: Error) -> Self {
        Self::Failure(error)
    }

    pub const fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    pub const fn is_failure(&self) -> bool {
        !self.is_success()
    }

    /// The carried error; the sentinel for a success.
    pub fn error(&self) -> &Error {
        match self {
            Self::Success(_) => Error::none(),
            Self::Failure(error) => error,
        }
    }

    pub fn value(self) -> Maybe<T> {
        match self {
            Self::Success(value) => Maybe::Some(value),
            Self::Failure(_) => Maybe::None,
        }
    }

    /// The value, or `T::default()` for a failure.
    pub fn value_or_default(self) -> T
    where
        T: Default,
    {
        self.value().get_value_or_default()
    }

    /// Collapse into a plain value. Exactly one branch runs, exactly once.
    pub fn match_with<R>(
        self,
        on_success: impl FnOnce(T) -> R,
        on_failure: impl FnOnce(Error) -> R,
    ) -> R {
        match self {
            Self::Success(value) => on_success(value),
            Self::Failure(error) => on_failure(error),
        }
    }

    /// Run `f` if this is a success.
    ///
    /// Borrows the outcome, so it can be called as a plain statement or
    /// chained with [`Outcome::on_failure`].
    pub fn on_success(&self, f: impl FnOnce(&T)) -> &Self {
        if let Self::Success(value) = self {
            f(value);
        }
        self
    }

    /// Run `f` if this is a failure.
    pub fn on_failure(&self, f: impl FnOnce(&Error)) -> &Self {
        if let Self::Failure(error) = self {
            f(error);
        }
        self
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Outcome<U> {
        match self {
            Self::Success(value) => Outcome::Success(f(value)),
            Self::Failure(error) => Outcome::Failure(error),
        }
    }

    /// Alias for [`Outcome::map`].
    pub fn select<U>(self, f: impl FnOnce(T) -> U) -> Outcome<U> {
        self.map(f)
    }

    pub fn map_error(self, f: impl FnOnce(Error) -> Error) -> Self {
        match self {
            Self::Success(value) => Self::Success(value),
            Self::Failure(error) => Self::Failure(f(error)),
        }
    }

    pub fn bind<U>(self, f: impl FnOnce(T) -> Outcome<U>) -> Outcome<U> {
        match self {
            Self::Success(value) => f(value),
            Self::Failure(error) => Outcome::Failure(error),
        }
    }

    /// Bind a second computation and combine both values.
    ///
    /// The first failure wins: the receiver's error if it failed (and `bind`
    /// is never called), otherwise the error of the bound computation.
    pub fn select_many<U, V>(
        self,
        bind: impl FnOnce(&T) -> Outcome<U>,
        combine: impl FnOnce(T, U) -> V,
    ) -> Outcome<V> {
        self.bind(|value| bind(&value).map(|other| combine(value, other)))
    }

    /// Fail with [`Error::PREDICATE_FAILED`] when `predicate` is false.
    pub fn filter(self, predicate: impl FnOnce(&T) -> bool) -> Self {
        self.filter_or(predicate, Error::PREDICATE_FAILED)
    }

    /// Fail with `error` when `predicate` is false. Failures pass through
    /// untouched and the predicate is not evaluated.
    pub fn filter_or(self, predicate: impl FnOnce(&T) -> bool, error: impl Into<Error>) -> Self {
        match self {
            Self::Success(value) => {
                if predicate(&value) {
                    Self::Success(value)
                } else {
                    Self::Failure(error.into())
                }
            }
            Self::Failure(failed) => Self::Failure(failed),
        }
    }

    /// Drop the value, keeping only success or failure.
    pub fn untyped(self) -> Outcome<()> {
        self.map(|_| ())
    }

    pub fn into_result(self) -> Result<T, Error> {
        match self {
            Self::Success(value) => Ok(value),
            Self::Failure(error) => Err(error),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    fn e1() -> Error {
        Error::new("E1", "first", 500)
    }

    fn e2() -> Error {
        Error::new("E2", "second", 500)
    }

    #[test]
    fn test_success_carries_sentinel_error() {
        let ok = Outcome::success(1);
        assert!(ok.is_success());
        assert!(ok.error().is_none());
        assert!(Outcome::SUCCESS.error().is_none());
    }

    #[test]
    fn test_failure_constructors() {
        let failed: Outcome<i32> = Outcome::failure(e1());
        assert!(failed.is_failure());
        assert_eq!(failed.error(), &e1());

        let bare: Outcome<i32> = Outcome::unspecified_failure();
        assert!(bare.is_failure());
        assert!(bare.error().is_none());
        assert_eq!(bare, Outcome::FAILURE);

        let from_text: Outcome = Outcome::failure("plain");
        assert_eq!(from_text.error().status(), 0);

        let input = String::from("  missing field  ");
        let from_borrowed: Outcome<u8> = Outcome::failure(input.trim());
        assert_eq!(from_borrowed.error().message(), "missing field");
    }

    #[test]
    fn test_cached_failures() {
        let cases: [(Outcome<u8>, i32); 4] = [
            (Outcome::BAD_REQUEST, 400),
            (Outcome::UNAUTHORIZED, 401),
            (Outcome::FORBIDDEN, 403),
            (Outcome::NOT_FOUND, 404),
        ];
        for (outcome, status) in cases {
            assert!(outcome.is_failure());
            assert_eq!(outcome.error().status(), status);
        }
    }

    #[test]
    fn test_value_accessors() {
        assert_eq!(Outcome::success(3).value(), Maybe::some(3));
        assert_eq!(Outcome::<i32>::failure(e1()).value(), Maybe::none());
        assert_eq!(Outcome::<i32>::failure(e1()).value_or_default(), 0);
    }

    #[test]
    fn test_map_propagates_failure_without_calling() {
        assert_eq!(Outcome::success(5).map(|x| x * 2), Outcome::success(10));

        let calls = Cell::new(0);
        let mapped = Outcome::<i32>::failure(e1()).select(|x| {
            calls.set(calls.get() + 1);
            x * 2
        });
        assert_eq!(mapped, Outcome::failure(e1()));
        assert_eq!(calls.get(), 0);
    }

    #[test]
    fn test_filter_chain() {
        let passed = Outcome::success(5).select(|x| x * 2).filter(|x| *x > 5);
        assert_eq!(passed, Outcome::success(10));

        let rejected = Outcome::success(2).select(|x| x * 2).filter(|x| *x > 5);
        assert_eq!(rejected.error().code(), "PREDICATE_FAILED");
    }

    #[test]
    fn test_filter_or_custom_error() {
        let custom = Error::create("Too.Small", "value too small");
        assert_eq!(
            Outcome::success(9).filter_or(|x| *x > 5, custom.clone()),
            Outcome::success(9)
        );
        assert_eq!(
            Outcome::success(1).filter_or(|x| *x > 5, custom.clone()),
            Outcome::failure(custom)
        );
    }

    #[test]
    fn test_filter_skips_predicate_on_failure() {
        let calls = Cell::new(0);
        let out = Outcome::<i32>::failure(e1()).filter(|_| {
            calls.set(calls.get() + 1);
            false
        });
        assert_eq!(out, Outcome::failure(e1()));
        assert_eq!(calls.get(), 0);
    }

    #[test]
    fn test_select_many() {
        let sum = Outcome::success(5).select_many(|_| Outcome::success(10), |a, b| a + b);
        assert_eq!(sum, Outcome::success(15));

        let second_fails =
            Outcome::success(5).select_many(|_| Outcome::<i32>::failure(e2()), |a, b| a + b);
        assert_eq!(second_fails, Outcome::failure(e2()));
    }

    #[test]
    fn test_select_many_first_error_wins() {
        let calls = Cell::new(0);
        let out = Outcome::<i32>::failure(e1()).select_many(
            |_| {
                calls.set(calls.get() + 1);
                Outcome::<i32>::failure(e2())
            },
            |a, b| a + b,
        );
        assert_eq!(out, Outcome::failure(e1()));
        assert_eq!(calls.get(), 0);

        let out = Outcome::<i32>::failure(e1()).select_many(|_| Outcome::success(10), |a, b| a + b);
        assert_eq!(out.error(), &e1());
    }

    #[test]
    fn test_bind_laws() {
        let checked = |x: i32| {
            if x >= 0 {
                Outcome::success(x + 1)
            } else {
                Outcome::failure(e2())
            }
        };

        assert_eq!(Outcome::success(1).bind(checked), checked(1));
        for outcome in [Outcome::success(4), Outcome::failure(e1())] {
            assert_eq!(outcome.clone().bind(Outcome::success), outcome);
            assert_eq!(
                outcome.clone().bind(checked).bind(checked),
                outcome.bind(|x| checked(x).bind(checked))
            );
        }
    }

    #[test]
    fn test_match_with() {
        let failed: Outcome = Outcome::failure(Error::new("Error.Test", "Error occurred", 500));
        let text = failed.match_with(|_| "S".to_string(), |e| format!("F:{}", e.message()));
        assert_eq!(text, "F:Error occurred");

        let text = Outcome::SUCCESS.match_with(|()| "S".to_string(), |e| e.to_string());
        assert_eq!(text, "S");
    }

    #[test]
    fn test_callbacks_fire_only_for_matching_branch() {
        let successes = Cell::new(0);
        let failures = Cell::new(0);

        Outcome::success(1)
            .on_success(|_| successes.set(successes.get() + 1))
            .on_failure(|_| failures.set(failures.get() + 1));
        assert_eq!((successes.get(), failures.get()), (1, 0));

        Outcome::<i32>::failure(e1())
            .on_success(|_| successes.set(successes.get() + 1))
            .on_failure(|_| failures.set(failures.get() + 1));
        assert_eq!((successes.get(), failures.get()), (1, 1));

        // an omitted callback is simply skipped
        Outcome::<i32>::failure(e1()).on_success(|_| successes.set(successes.get() + 1));
        assert_eq!(successes.get(), 1);
    }

    #[test]
    #[deny(unused_must_use)]
    fn test_callbacks_in_statement_position_keep_the_outcome() {
        let mut seen = 0;
        let outcome = Outcome::success(1);
        outcome.on_success(|value| seen += *value);
        outcome.on_failure(|_| seen += 100);
        assert_eq!(seen, 1);
        assert_eq!(outcome, Outcome::success(1));

        let mut seen_code = String::new();
        Outcome::<u8>::NOT_FOUND.on_failure(|e| seen_code = e.code().to_string());
        assert_eq!(seen_code, "NOT_FOUND");
    }

    #[test]
    fn test_shareable_across_threads() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Outcome<String>>();
        assert_send_sync::<Outcome>();

        let shared = std::sync::Arc::new(Outcome::success(String::from("abc")));
        let handles: Vec<_> = (0..4)
            .map(|_| {
                let shared = shared.clone();
                std::thread::spawn(move || {
                    let len = (*shared).clone().map(|s| s.len());
                    (len, Outcome::<u8>::NOT_FOUND, Error::none().is_none())
                })
            })
            .collect();

        for handle in handles {
            let (len, not_found, sentinel) = handle.join().unwrap();
            assert_eq!(len, Outcome::success(3));
            assert_eq!(not_found.error(), &Error::NOT_FOUND);
            assert!(sentinel);
        }
    }

    #[test]
    fn test_map_error() {
        let out = Outcome::<i32>::failure(e1())
            .map_error(|e| Error::new(e.code().to_string(), "wrapped", 502));
        assert_eq!(out.error().message(), "wrapped");
        assert_eq!(Outcome::success(1).map_error(|_| e2()), Outcome::success(1));
    }

    #[test]
    fn test_typed_and_untyped() {
        assert_eq!(Outcome::SUCCESS.typed::<String>(), Outcome::success(String::new()));
        assert_eq!(
            Outcome::<()>::failure(e1()).typed::<u32>(),
            Outcome::failure(e1())
        );
        assert_eq!(Outcome::<()>::FAILURE.typed::<u32>().error(), Error::none());

        assert_eq!(Outcome::success("x").untyped(), Outcome::SUCCESS);
        assert_eq!(Outcome::<&str>::failure(e1()).untyped(), Outcome::failure(e1()));
    }

    #[test]
    fn test_from_bool() {
        assert_eq!(Outcome::from_bool(true), Outcome::SUCCESS);
        assert_eq!(Outcome::from_bool(false), Outcome::FAILURE);
    }

    #[test]
    fn test_into_result_with_question_mark() {
        fn load(ok: bool) -> Result<u8, Error> {
            let value = if ok {
                Outcome::success(7)
            } else {
                Outcome::NOT_FOUND
            };
            Ok(value.into_result()? + 1)
        }

        assert_eq!(load(true), Ok(8));
        assert_eq!(load(false), Err(Error::NOT_FOUND));
    }
}
