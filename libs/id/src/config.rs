//! Loading padding policies from the environment.
//!
//! | Variable              | Meaning                       | Default |
//! |-----------------------|-------------------------------|---------|
//! | `WMS_ID_LENGTH`       | field width (1..=4096)        | `20`    |
//! | `WMS_ID_PADDED`       | pad short values              | `true`  |
//! | `WMS_ID_PADDER`       | single fill character         | `0`     |
//! | `WMS_ID_ALIGNMENT`    | `LEFT` or `RIGHT`             | `RIGHT` |
//!
//! Setting a padder turns padding on unless `*_PADDED` is explicitly false.

use crate::{Alignment, IdError, PaddingPolicy};

/// Default environment variable prefix.
pub const ENV_PREFIX: &str = "WMS_ID";

impl PaddingPolicy {
    /// Loads a policy from `WMS_ID_*` variables.
    pub fn from_env() -> Result<Self, IdError> {
        Self::from_env_with_prefix(ENV_PREFIX)
    }

    /// Loads a policy from `{prefix}_*` variables.
    pub fn from_env_with_prefix(prefix: &str) -> Result<Self, IdError> {
        Self::from_lookup(prefix, |key| std::env::var(key).ok())
    }

    /// Loads a policy from an arbitrary key/value source.
    ///
    /// Unset keys keep their default; blank values count as unset.
    pub fn from_lookup<F>(prefix: &str, lookup: F) -> Result<Self, IdError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |name: &str| {
            let key = format!("{prefix}_{name}");
            lookup(&key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
                .map(|v| (key, v))
        };

        let mut policy = PaddingPolicy::DEFAULT;

        if let Some((key, v)) = get("LENGTH") {
            let length = v
                .parse::<usize>()
                .map_err(|_| IdError::invalid_policy(format!("{key} must be a positive integer, got '{v}'")))?;
            policy.set_length(length);
        }

        if let Some((key, v)) = get("PADDER") {
            let mut chars = v.chars();
            let (Some(pad_char), None) = (chars.next(), chars.next()) else {
                return Err(IdError::invalid_policy(format!(
                    "{key} must be a single character, got '{v}'"
                )));
            };
            policy.set_pad_char(pad_char);
        }

        if let Some((key, v)) = get("PADDED") {
            policy.set_padded(parse_bool(&key, &v)?);
        }

        if let Some((key, v)) = get("ALIGNMENT") {
            let alignment = v.parse::<Alignment>().map_err(|e| match e {
                IdError::InvalidPolicy { message } => {
                    IdError::invalid_policy(format!("{key}: {message}"))
                }
                other => other,
            })?;
            policy.set_alignment(alignment);
        }

        policy.validate()?;
        Ok(policy)
    }
}

fn parse_bool(key: &str, v: &str) -> Result<bool, IdError> {
    match v.to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(IdError::invalid_policy(format!(
            "{key} must be true or false, got '{v}'"
        ))),
    }
}
