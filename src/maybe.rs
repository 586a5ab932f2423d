//! Optional values made explicit.
//!
//! A [`Maybe<T>`] is either `Some(value)` or `None`. Combinators consume the
//! receiver and return a new `Maybe`; nothing is changed in place. `None`
//! carries no data, so [`Maybe::NONE`] is a compile-time constant for every
//! `T` and never allocates.

use crate::models::{ContractError, Error};
use crate::outcome::Outcome;

/// A value that may or may not be present.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[must_use]
pub enum Maybe<T> {
    Some(T),
    None,
}

impl<T> Maybe<T> {
    /// The shared absent value.
    pub const NONE: Self = Self::None;

    /// Bridge a host-level optional into a `Maybe`.
    ///
    /// Accepts both bare values and `Option`s:
    ///
    /// ```
    /// use outcome::Maybe;
    ///
    /// assert_eq!(Maybe::create(5), Maybe::some(5));
    /// assert!(Maybe::<&str>::create(None).is_none());
    /// ```
    pub fn create(value: impl Into<Option<T>>) -> Self {
        match value.into() {
            Some(value) => Self::Some(value),
            None => Self::None,
        }
    }

    /// Wrap a value that the caller knows is present.
    pub const fn some(value: T) -> Self {
        Self::Some(value)
    }

    pub const fn none() -> Self {
        Self::NONE
    }

    pub const fn is_some(&self) -> bool {
        matches!(self, Self::Some(_))
    }

    pub const fn is_none(&self) -> bool {
        !self.is_some()
    }

    pub const fn as_ref(&self) -> Maybe<&T> {
        match self {
            Self::Some(value) => Maybe::Some(value),
            Self::None => Maybe::None,
        }
    }

    /// Presence flag plus the value, or `T::default()` as a placeholder.
    ///
    /// The placeholder carries no meaning; check the flag first.
    pub fn try_get_value(self) -> (bool, T)
    where
        T: Default,
    {
        match self {
            Self::Some(value) => (true, value),
            Self::None => (false, T::default()),
        }
    }

    pub fn get_value_or_default(self) -> T
    where
        T: Default,
    {
        self.get_value_or(T::default())
    }

    pub fn get_value_or(self, default: T) -> T {
        match self {
            Self::Some(value) => value,
            Self::None => default,
        }
    }

    /// Unsafe accessor.
    ///
    /// # Panics
    ///
    /// Panics with [`ContractError::AbsentValue`] naming `T` when the value
    /// is absent. Use [`Maybe::require`] to get the error as a value instead.
    #[track_caller]
    pub fn get_value_or_fail(self) -> T {
        match self {
            Self::Some(value) => value,
            Self::None => panic!("{}", ContractError::absent::<T>()),
        }
    }

    /// The value, or [`ContractError::AbsentValue`].
    pub fn require(self) -> Result<T, ContractError> {
        match self {
            Self::Some(value) => Ok(value),
            Self::None => Err(ContractError::absent::<T>()),
        }
    }

    /// Collapse into a plain value. Exactly one branch runs, exactly once.
    pub fn match_with<R>(self, on_none: impl FnOnce() -> R, on_some: impl FnOnce(T) -> R) -> R {
        match self {
            Self::Some(value) => on_some(value),
            Self::None => on_none(),
        }
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Maybe<U> {
        match self {
            Self::Some(value) => Maybe::Some(f(value)),
            Self::None => Maybe::None,
        }
    }

    /// Chain a computation that may itself produce nothing.
    pub fn bind<U>(self, f: impl FnOnce(T) -> Maybe<U>) -> Maybe<U> {
        match self {
            Self::Some(value) => f(value),
            Self::None => Maybe::None,
        }
    }

    /// Keep the value only if `predicate` holds.
    pub fn filter(self, predicate: impl FnOnce(&T) -> bool) -> Self {
        match self {
            Self::Some(value) => {
                if predicate(&value) {
                    Self::Some(value)
                } else {
                    Self::None
                }
            }
            Self::None => Self::None,
        }
    }

    /// Bind then combine both values; `None` if either side is absent.
    pub fn select_many<U, V>(
        self,
        bind: impl FnOnce(&T) -> Maybe<U>,
        combine: impl FnOnce(T, U) -> V,
    ) -> Maybe<V> {
        self.bind(|value| bind(&value).map(|other| combine(value, other)))
    }

    /// `self` if present, otherwise `other`.
    pub fn or(self, other: Self) -> Self {
        match self {
            Self::Some(_) => self,
            Self::None => other,
        }
    }

    pub fn iter(&self) -> std::option::IntoIter<&T> {
        self.as_ref().into_option().into_iter()
    }

    /// Success with the value, or failure with `error`.
    pub fn ok_or(self, error: impl Into<Error>) -> Outcome<T> {
        match self {
            Self::Some(value) => Outcome::Success(value),
            Self::None => Outcome::Failure(error.into()),
        }
    }

    pub fn ok_or_else(self, error: impl FnOnce() -> Error) -> Outcome<T> {
        match self {
            Self::Some(value) => Outcome::Success(value),
            Self::None => Outcome::Failure(error()),
        }
    }

    pub fn into_option(self) -> Option<T> {
        match self {
            Self::Some(value) => Some(value),
            Self::None => None,
        }
    }
}

impl<T> Default for Maybe<T> {
    fn default() -> Self {
        Self::None
    }
}

impl<T> From<Option<T>> for Maybe<T> {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(value) => Self::Some(value),
            None => Self::None,
        }
    }
}

impl<T> From<Maybe<T>> for Option<T> {
    fn from(value: Maybe<T>) -> Self {
        value.into_option()
    }
}

impl<T> IntoIterator for Maybe<T> {
    type Item = T;
    type IntoIter = std::option::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.into_option().into_iter()
    }
}
