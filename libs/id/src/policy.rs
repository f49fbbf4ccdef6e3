//! Padding policy and the normalization algorithm.
//!
//! A [`PaddingPolicy`] is a plain `Copy` value. Normalizing against an explicit
//! policy never touches shared state; the process-wide policy of an identifier
//! type lives in a [`PolicyCell`](crate::PolicyCell) and is read as a snapshot.

use std::fmt;
use std::iter;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::IdError;

/// Default width of a fixed-width identifier.
pub const DEFAULT_LENGTH: usize = 20;

/// Default fill character.
pub const DEFAULT_PAD_CHAR: char = '0';

/// Largest width a validated policy accepts.
pub const MAX_LENGTH: usize = 4096;

/// Which side of the field the content sits on.
///
/// Only relevant while padding is enabled.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Alignment {
    /// Content is left-aligned; padding goes after it.
    #[serde(alias = "left")]
    Left,
    /// Content is right-aligned; padding goes before it.
    #[default]
    #[serde(alias = "right")]
    Right,
}

impl fmt::Display for Alignment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Alignment::Left => f.write_str("LEFT"),
            Alignment::Right => f.write_str("RIGHT"),
        }
    }
}

impl FromStr for Alignment {
    type Err = IdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "left" => Ok(Alignment::Left),
            "right" => Ok(Alignment::Right),
            other => Err(IdError::invalid_policy(format!(
                "unknown alignment '{other}', expected LEFT or RIGHT"
            ))),
        }
    }
}

/// Width, fill character and alignment applied when normalizing identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct PaddingPolicy {
    length: usize,
    padded: bool,
    #[serde(alias = "padder")]
    pad_char: char,
    alignment: Alignment,
}

impl PaddingPolicy {
    /// Width 20, padded with `'0'`, right-aligned.
    pub const DEFAULT: Self = Self {
        length: DEFAULT_LENGTH,
        padded: true,
        pad_char: DEFAULT_PAD_CHAR,
        alignment: Alignment::Right,
    };

    /// Creates the default policy with a different width.
    #[must_use]
    pub const fn new(length: usize) -> Self {
        Self::DEFAULT.with_length(length)
    }

    /// A policy that leaves every input untouched.
    #[must_use]
    pub const fn unpadded() -> Self {
        Self::DEFAULT.with_padded(false)
    }

    #[must_use]
    pub const fn with_length(mut self, length: usize) -> Self {
        self.length = length;
        self
    }

    #[must_use]
    pub const fn with_padded(mut self, padded: bool) -> Self {
        self.padded = padded;
        self
    }

    /// Sets the fill character. Choosing a fill character turns padding on.
    #[must_use]
    pub const fn with_pad_char(mut self, pad_char: char) -> Self {
        self.pad_char = pad_char;
        self.padded = true;
        self
    }

    #[must_use]
    pub const fn with_alignment(mut self, alignment: Alignment) -> Self {
        self.alignment = alignment;
        self
    }

    pub const fn length(&self) -> usize {
        self.length
    }

    pub const fn is_padded(&self) -> bool {
        self.padded
    }

    pub const fn pad_char(&self) -> char {
        self.pad_char
    }

    pub const fn alignment(&self) -> Alignment {
        self.alignment
    }

    pub fn set_length(&mut self, length: usize) {
        self.length = length;
    }

    pub fn set_padded(&mut self, padded: bool) {
        self.padded = padded;
    }

    /// Sets the fill character and turns padding on.
    pub fn set_pad_char(&mut self, pad_char: char) {
        self.pad_char = pad_char;
        self.padded = true;
    }

    pub fn set_alignment(&mut self, alignment: Alignment) {
        self.alignment = alignment;
    }

    /// Rejects policies that cannot describe a fixed-width field.
    pub fn validate(&self) -> Result<(), IdError> {
        if self.length == 0 {
            return Err(IdError::invalid_policy("length must be at least 1"));
        }
        if self.length > MAX_LENGTH {
            return Err(IdError::invalid_policy(format!(
                "length must be at most {MAX_LENGTH}, got {}",
                self.length
            )));
        }
        Ok(())
    }

    /// Returns true if `raw` is no wider than the configured length.
    ///
    /// Inputs wider than the field pass through [`pad`](Self::pad) unchanged;
    /// callers that want to reject them can check here first.
    pub fn fits(&self, raw: &str) -> bool {
        raw.chars().count() <= self.length
    }

    /// Normalizes a possibly absent input.
    ///
    /// Fails with [`IdError::MissingValue`] when `raw` is `None`, whatever the
    /// policy says.
    pub fn normalize(&self, raw: Option<&str>) -> Result<String, IdError> {
        let raw = raw.ok_or(IdError::MissingValue)?;
        Ok(self.pad(raw))
    }

    /// Produces the canonical form of `raw`.
    ///
    /// Width is counted in `char`s. Inputs at or beyond the configured length
    /// are returned as-is; nothing is ever truncated.
    pub fn pad(&self, raw: &str) -> String {
        if !self.padded {
            return raw.to_owned();
        }

        let width = raw.chars().count();
        if width >= self.length {
            trace!(width, length = self.length, "input at or over width, passing through");
            return raw.to_owned();
        }

        let fill = self.length - width;
        let mut out = String::with_capacity(capacity_hint(raw.len(), fill, self.pad_char));
        match self.alignment {
            Alignment::Right => {
                out.extend(iter::repeat(self.pad_char).take(fill));
                out.push_str(raw);
            }
            Alignment::Left => {
                out.push_str(raw);
                out.extend(iter::repeat(self.pad_char).take(fill));
            }
        }
        out
    }

    /// Parses a policy from TOML and validates it.
    ///
    /// Missing keys fall back to the defaults.
    ///
    /// ```text
    /// length = 12
    /// padder = "X"
    /// alignment = "LEFT"
    /// ```
    pub fn from_toml_str(s: &str) -> Result<Self, IdError> {
        let policy: Self = toml::from_str(s).map_err(|e| IdError::invalid_policy(e.to_string()))?;
        policy.validate()?;
        Ok(policy)
    }
}

/// Byte capacity for `fill` copies of `pad_char` plus `raw_len` bytes.
///
/// Unvalidated policies may carry widths whose byte size overflows `usize`;
/// the hint then falls back to the raw length.
fn capacity_hint(raw_len: usize, fill: usize, pad_char: char) -> usize {
    fill.checked_mul(pad_char.len_utf8())
        .and_then(|pad| pad.checked_add(raw_len))
        .unwrap_or(raw_len)
}

impl Default for PaddingPolicy {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl fmt::Display for PaddingPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.padded {
            write!(
                f,
                "length={} padder='{}' alignment={}",
                self.length, self.pad_char, self.alignment
            )
        } else {
            write!(f, "length={} unpadded", self.length)
        }
    }
}
