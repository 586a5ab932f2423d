//! Validated, queryable error catalog built from [`Config`].

use crate::adapters::SequenceExt;
use crate::maybe::Maybe;
use crate::models::{Config, ConfigError, Error};
use crate::outcome::Outcome;
use std::collections::{BTreeMap, HashSet};
use tracing::{debug, info, warn};

/// Statuses outside this range are rejected at load time.
const MAX_STATUS: i32 = 999;

/// Named domain errors, validated once and then read-only.
#[derive(Debug, Clone, Default)]
pub struct ErrorCatalog {
    entries: BTreeMap<String, Error>,
}

impl ErrorCatalog {
    /// Build and validate a catalog.
    ///
    /// Every entry needs a non-empty code, codes must be unique across the
    /// catalog, and statuses must lie in `0..=999`.
    pub fn from_config(config: &Config) -> Result<Self, ConfigError> {
        let mut entries = BTreeMap::new();
        let mut seen_codes = HashSet::new();

        for (name, spec) in &config.errors {
            let code = spec.code.trim();
            if code.is_empty() {
                return Err(ConfigError::Invalid {
                    name: name.clone(),
                    reason: "code must not be empty".to_string(),
                });
            }

            if !seen_codes.insert(code.to_string()) {
                return Err(ConfigError::Invalid {
                    name: name.clone(),
                    reason: format!("duplicate code '{code}'"),
                });
            }

            let status = config.status_of(spec);
            if !(0..=MAX_STATUS).contains(&status) {
                return Err(ConfigError::Invalid {
                    name: name.clone(),
                    reason: format!("status {status} is outside 0..={MAX_STATUS}"),
                });
            }

            debug!(name = %name, code = %code, status, "Registered catalog error");
            entries.insert(
                name.clone(),
                Error::new(code.to_string(), spec.message.clone(), status),
            );
        }

        info!(count = entries.len(), "Loaded error catalog");
        Ok(Self { entries })
    }

    /// Look up an error by name.
    pub fn get(&self, name: &str) -> Maybe<Error> {
        Maybe::create(self.entries.get(name).cloned())
    }

    /// Look up an error by its code.
    pub fn by_code(&self, code: &str) -> Maybe<Error> {
        self.entries
            .values()
            .first_or_none(|error| error.code() == code)
            .map(Error::clone)
    }

    /// A failed `Outcome` carrying the named error.
    ///
    /// Unknown names fall back to [`Error::NOT_FOUND`] so callers never
    /// silently turn a typo into a success.
    pub fn failure<T>(&self, name: &str) -> Outcome<T> {
        self.get(name).match_with(
            || {
                warn!(name = %name, "Unknown catalog error");
                Outcome::NOT_FOUND
            },
            Outcome::failure,
        )
    }

    /// Entry names in sorted order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
