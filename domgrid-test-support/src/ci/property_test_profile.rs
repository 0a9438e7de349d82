//! Environment-driven proptest tuning shared by every property suite.
//!
//! Suites call [`ProptestRunProfile::load`] with their own defaults; the
//! environment may raise or lower the case count and switch forking on for
//! long CI runs. Invalid overrides are logged and ignored.

use std::env;

use thiserror::Error;

/// Environment variable overriding the number of cases per property.
pub const CASES_ENV_KEY: &str = "PROPTEST_CASES";
/// Environment variable toggling forked proptest execution.
pub const FORK_ENV_KEY: &str = "DOMGRID_PBT_FORK";

/// Reason an override value was rejected.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum OverrideError {
    /// The case count is not an unsigned integer.
    #[error("expected an unsigned integer, got `{0}`")]
    NotANumber(String),
    /// The case count is zero.
    #[error("case count must be positive")]
    ZeroCases,
    /// The fork flag is not a recognised boolean spelling.
    #[error("expected one of true/false, 1/0, yes/no, on/off")]
    NotABool,
}

/// Case count and fork mode for one property suite.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ProptestRunProfile {
    cases: u32,
    fork: bool,
}

impl ProptestRunProfile {
    /// Reads overrides from the process environment.
    ///
    /// # Examples
    /// ```
    /// use domgrid_test_support::ci::property_test_profile::ProptestRunProfile;
    ///
    /// let profile = ProptestRunProfile::load(32, false);
    /// assert!(profile.cases() > 0);
    /// ```
    #[must_use]
    pub fn load(default_cases: u32, default_fork: bool) -> Self {
        Self::from_lookup(default_cases, default_fork, |key| env::var(key).ok())
    }

    /// Reads overrides through `lookup`, falling back to the defaults for
    /// missing or invalid values.
    #[must_use]
    pub fn from_lookup<F>(default_cases: u32, default_fork: bool, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        Self {
            cases: resolve(CASES_ENV_KEY, default_cases, lookup(CASES_ENV_KEY), parse_cases),
            fork: resolve(FORK_ENV_KEY, default_fork, lookup(FORK_ENV_KEY), parse_flag),
        }
    }

    /// Cases to run per property.
    #[must_use]
    #[rustfmt::skip]
    pub const fn cases(&self) -> u32 { self.cases }

    /// Whether cases run in forked subprocesses.
    #[must_use]
    #[rustfmt::skip]
    pub const fn fork(&self) -> bool { self.fork }
}

fn resolve<T>(
    key: &'static str,
    default: T,
    raw: Option<String>,
    parse: fn(&str) -> Result<T, OverrideError>,
) -> T {
    let Some(raw) = raw else {
        return default;
    };
    parse(&raw).unwrap_or_else(|reason| {
        tracing::warn!(env = key, raw = %raw, %reason, "ignoring invalid proptest override");
        default
    })
}

fn parse_cases(raw: &str) -> Result<u32, OverrideError> {
    match raw.trim().parse::<u32>() {
        Ok(0) => Err(OverrideError::ZeroCases),
        Ok(cases) => Ok(cases),
        Err(_) => Err(OverrideError::NotANumber(raw.to_owned())),
    }
}

fn parse_flag(raw: &str) -> Result<bool, OverrideError> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(OverrideError::NotABool),
    }
}
