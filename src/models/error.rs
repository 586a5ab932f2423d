//! Error values for outcome.
//!
//! Two kinds of failure live here:
//! - [`Error`]: a domain failure. Plain data carried by `Outcome::Failure`
//!   and handled by the caller through `match_with`/`bind`.
//! - [`ContractError`]: a broken usage contract (reading an absent value,
//!   more rows than a single-element query allows). These are programmer
//!   errors or engine failures, never domain outcomes.

use std::borrow::Cow;
use std::fmt;
use thiserror::Error as ThisError;

/// An immutable, structurally comparable description of a domain failure.
///
/// Two errors are equal iff `code`, `message` and `status` are all equal.
/// Fields are `Cow<'static, str>` so that the well-known errors below can be
/// `const` and shared without allocating.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Error {
    code: Cow<'static, str>,
    message: Cow<'static, str>,
    status: i32,
}

static NO_ERROR: Error = Error::NONE;

impl Error {
    /// Status used by the factory constructors when none is given.
    pub const DEFAULT_STATUS: i32 = 400;

    /// The "no error" sentinel: empty code, empty message, status 0.
    pub const NONE: Self = Self::from_static("", "", 0);

    pub const PREDICATE_FAILED: Self =
        Self::from_static("PREDICATE_FAILED", "Predicate not satisfied", 400);
    pub const BAD_REQUEST: Self = Self::from_static("BAD_REQUEST", "Bad request", 400);
    pub const UNAUTHORIZED: Self = Self::from_static("UNAUTHORIZED", "Unauthorized", 401);
    pub const FORBIDDEN: Self = Self::from_static("FORBIDDEN", "Forbidden", 403);
    pub const NOT_FOUND: Self = Self::from_static("NOT_FOUND", "Not found", 404);

    /// Build an error from every field.
    pub fn new(
        code: impl Into<Cow<'static, str>>,
        message: impl Into<Cow<'static, str>>,
        status: i32,
    ) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            status,
        }
    }

    /// Build an error from a code and a message with [`Error::DEFAULT_STATUS`].
    pub fn create(
        code: impl Into<Cow<'static, str>>,
        message: impl Into<Cow<'static, str>>,
    ) -> Self {
        Self::new(code, message, Self::DEFAULT_STATUS)
    }

    /// Build an error with an empty code and [`Error::DEFAULT_STATUS`].
    pub fn with_message(message: impl Into<Cow<'static, str>>) -> Self {
        Self::new("", message, Self::DEFAULT_STATUS)
    }

    /// Build an empty error with [`Error::DEFAULT_STATUS`].
    ///
    /// This is the no-argument factory form. It is not [`Error::default`],
    /// which is the sentinel with status 0.
    pub fn unspecified() -> Self {
        Self::with_status(Self::DEFAULT_STATUS)
    }

    /// Build an error that only carries a status.
    pub fn with_status(status: i32) -> Self {
        Self::new("", "", status)
    }

    /// Const constructor for errors built from string literals.
    pub const fn from_static(code: &'static str, message: &'static str, status: i32) -> Self {
        Self {
            code: Cow::Borrowed(code),
            message: Cow::Borrowed(message),
            status,
        }
    }

    /// Shared reference to the sentinel.
    pub fn none() -> &'static Error {
        &NO_ERROR
    }

    pub fn code(&self) -> &str {
        &self.code
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn status(&self) -> i32 {
        self.status
    }

    /// True when this error equals the sentinel.
    pub fn is_none(&self) -> bool {
        *self == Self::NONE
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.code.is_empty(), self.message.is_empty()) {
            (true, true) => write!(f, "error (status {})", self.status),
            (true, false) => f.write_str(&self.message),
            (false, true) => f.write_str(&self.code),
            (false, false) => write!(f, "{}: {}", self.code, self.message),
        }
    }
}

impl std::error::Error for Error {}

/// A bare message becomes an error with no code and status 0.
impl From<&str> for Error {
    fn from(message: &str) -> Self {
        Self::new("", message.to_owned(), 0)
    }
}

impl From<String> for Error {
    fn from(message: String) -> Self {
        Self::new("", message, 0)
    }
}

/// Violations of the usage contract of `Maybe` and the adapters.
#[derive(Debug, Clone, PartialEq, Eq, ThisError)]
pub enum ContractError {
    /// A value was required but the `Maybe` was empty.
    #[error("Expected a value of type {type_name}, but none was present")]
    AbsentValue { type_name: &'static str },

    /// A single-element lookup matched more than one element.
    #[error("Expected at most one matching element, found {count}")]
    MultipleMatches { count: usize },

    /// The query engine behind an adapter failed.
    #[error("Query engine error: {0}")]
    Query(String),
}

impl ContractError {
    /// Absent-value error naming `T`.
    pub fn absent<T>() -> Self {
        Self::AbsentValue {
            type_name: std::any::type_name::<T>(),
        }
    }

    /// Create a query engine error.
    pub fn query(message: impl Into<String>) -> Self {
        Self::Query(message.into())
    }
}

/// Result type alias for contract-checked operations.
pub type ContractResult<T> = std::result::Result<T, ContractError>;
