//! Search budget configuration.
//!
//! Command-line flags win over environment variables, which win over the
//! built-in default of an unlimited search.

use std::time::Duration;

use anyhow::{Context, Result};

use crucible_lib::SearchLimits;

/// Environment variable holding the default expansion budget.
pub const MAX_EXPANSIONS_ENV: &str = "CRUCIBLE_MAX_EXPANSIONS";
/// Environment variable holding the default time limit in milliseconds.
pub const TIME_LIMIT_ENV: &str = "CRUCIBLE_TIME_LIMIT_MS";

/// Resolve the search budget from flags and the process environment.
pub fn resolve_search_limits(
    max_expansions: Option<u64>,
    time_limit_ms: Option<u64>,
) -> Result<SearchLimits> {
    resolve_search_limits_with(max_expansions, time_limit_ms, |key| {
        std::env::var(key).ok()
    })
}

/// Resolve the search budget using `lookup` in place of the environment.
pub fn resolve_search_limits_with<F>(
    max_expansions: Option<u64>,
    time_limit_ms: Option<u64>,
    lookup: F,
) -> Result<SearchLimits>
where
    F: Fn(&str) -> Option<String>,
{
    let max_expansions = match max_expansions {
        Some(value) => Some(value),
        None => parse_env(&lookup, MAX_EXPANSIONS_ENV)?,
    };
    let time_limit_ms = match time_limit_ms {
        Some(value) => Some(value),
        None => parse_env(&lookup, TIME_LIMIT_ENV)?,
    };

    Ok(SearchLimits {
        max_expansions,
        time_limit: time_limit_ms.map(Duration::from_millis),
    })
}

fn parse_env<F>(lookup: &F, key: &str) -> Result<Option<u64>>
where
    F: Fn(&str) -> Option<String>,
{
    let Some(raw) = lookup(key) else {
        return Ok(None);
    };
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    let value = trimmed
        .parse::<u64>()
        .with_context(|| format!("{key} must be a non-negative integer, got '{raw}'"))?;
    Ok(Some(value))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn env(pairs: &'static [(&'static str, &'static str)]) -> impl Fn(&str) -> Option<String> {
        move |key: &str| {
            pairs
                .iter()
                .find(|(name, _)| *name == key)
                .map(|(_, value)| value.to_string())
        }
    }

    #[test]
    fn defaults_to_unlimited() {
        let limits = resolve_search_limits_with(None, None, env(&[])).unwrap();
        assert_eq!(limits, SearchLimits::unlimited());
    }

    #[test]
    fn reads_environment() {
        let limits = resolve_search_limits_with(
            None,
            None,
            env(&[(MAX_EXPANSIONS_ENV, "500"), (TIME_LIMIT_ENV, " 250 ")]),
        )
        .unwrap();
        assert_eq!(limits.max_expansions, Some(500));
        assert_eq!(limits.time_limit, Some(Duration::from_millis(250)));
    }

    #[test]
    fn flags_override_environment() {
        let limits =
            resolve_search_limits_with(Some(7), None, env(&[(MAX_EXPANSIONS_ENV, "500")]))
                .unwrap();
        assert_eq!(limits.max_expansions, Some(7));
        assert_eq!(limits.time_limit, None);
    }

    #[test]
    fn rejects_garbage_values() {
        let err = resolve_search_limits_with(None, None, env(&[(MAX_EXPANSIONS_ENV, "lots")]))
            .unwrap_err();
        assert!(err.to_string().contains(MAX_EXPANSIONS_ENV));
    }

    #[test]
    fn blank_values_are_ignored() {
        let limits =
            resolve_search_limits_with(None, None, env(&[(TIME_LIMIT_ENV, "")])).unwrap();
        assert_eq!(limits.time_limit, None);
    }
}
