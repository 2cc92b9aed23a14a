//! Property-test run profile read from the environment.
//!
//! Suites call [`ProptestRunProfile::load`] with their own defaults so CI can
//! raise case counts or enable forking without code changes.

use std::env;

/// Environment variable overriding the number of cases per property.
pub const CASES_ENV_KEY: &str = "ARBOR_PBT_CASES";
/// Environment variable toggling forked execution of property cases.
pub const FORK_ENV_KEY: &str = "ARBOR_PBT_FORK";

/// Resolved settings for one property suite.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ProptestRunProfile {
    cases: u32,
    fork: bool,
}

impl ProptestRunProfile {
    /// Loads the profile, falling back to the supplied defaults when a
    /// variable is unset or invalid.
    ///
    /// # Examples
    ///
    /// ```
    /// use arbor_test_support::profile::ProptestRunProfile;
    ///
    /// let profile = ProptestRunProfile::load(64, false);
    /// assert!(profile.cases() > 0);
    /// ```
    #[must_use]
    pub fn load(default_cases: u32, default_fork: bool) -> Self {
        Self {
            cases: read_env_or_default(CASES_ENV_KEY, default_cases, parse_cases),
            fork: read_env_or_default(FORK_ENV_KEY, default_fork, parse_bool),
        }
    }

    /// Number of cases to run per property.
    #[must_use]
    pub const fn cases(&self) -> u32 {
        self.cases
    }

    /// Whether cases run in forked subprocesses.
    #[must_use]
    pub const fn fork(&self) -> bool {
        self.fork
    }
}

fn read_env_or_default<T, F>(key: &'static str, default: T, parser: F) -> T
where
    T: Copy,
    F: Fn(&str) -> Result<T, String>,
{
    let Ok(raw) = env::var(key) else {
        return default;
    };
    parser(&raw).unwrap_or_else(|reason| {
        tracing::warn!(
            env = key,
            raw = %raw,
            reason = %reason,
            "invalid property-test profile override; using default",
        );
        default
    })
}

fn parse_cases(raw: &str) -> Result<u32, String> {
    match raw.trim().parse::<u32>() {
        Ok(0) => Err("cases must be > 0".to_owned()),
        Ok(parsed) => Ok(parsed),
        Err(error) => Err(format!("parse error: {error}")),
    }
}

fn parse_bool(raw: &str) -> Result<bool, String> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err("expected one of: true/false/1/0/yes/no/on/off".to_owned()),
    }
}
