//! Location keys.
//!
//! A storage location is addressed by five coordinates: area, aisle and the
//! x/y/z position inside the aisle. The canonical string form joins them with
//! [`KEY_SEPARATOR`], e.g. `AREA/AISLE/X/Y/Z`.

use std::fmt;
use std::str::FromStr;

use crate::IdError;

/// Separator between the parts of a location key.
pub const KEY_SEPARATOR: char = '/';

/// Number of parts in a location key.
pub const NUMBER_OF_KEYS: usize = 5;

/// Primary key of a storage location.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct LocationPk {
    area: String,
    aisle: String,
    x: String,
    y: String,
    z: String,
}

impl LocationPk {
    /// Creates a key from its five parts.
    ///
    /// Parts must be non-empty and must not contain the separator.
    pub fn new(
        area: impl Into<String>,
        aisle: impl Into<String>,
        x: impl Into<String>,
        y: impl Into<String>,
        z: impl Into<String>,
    ) -> Result<Self, IdError> {
        let pk = Self {
            area: area.into(),
            aisle: aisle.into(),
            x: x.into(),
            y: y.into(),
            z: z.into(),
        };
        for (name, part) in pk.named_parts() {
            validate_part(name, part)?;
        }
        Ok(pk)
    }

    /// Parses a key in the form `AREA/AISLE/X/Y/Z`.
    pub fn parse(s: &str) -> Result<Self, IdError> {
        if s.is_empty() {
            return Err(IdError::Empty);
        }

        let parts: Vec<&str> = s.split(KEY_SEPARATOR).collect();
        let [area, aisle, x, y, z] = parts.as_slice() else {
            return Err(IdError::invalid_format(format!(
                "location key must have {NUMBER_OF_KEYS} parts separated by '{KEY_SEPARATOR}', got {}",
                parts.len()
            )));
        };

        Self::new(*area, *aisle, *x, *y, *z)
    }

    pub fn area(&self) -> &str {
        &self.area
    }

    pub fn aisle(&self) -> &str {
        &self.aisle
    }

    pub fn x(&self) -> &str {
        &self.x
    }

    pub fn y(&self) -> &str {
        &self.y
    }

    pub fn z(&self) -> &str {
        &self.z
    }

    /// The parts in key order, paired with their names.
    pub fn named_parts(&self) -> [(&'static str, &str); NUMBER_OF_KEYS] {
        [
            ("area", self.area.as_str()),
            ("aisle", self.aisle.as_str()),
            ("x", self.x.as_str()),
            ("y", self.y.as_str()),
            ("z", self.z.as_str()),
        ]
    }
}

fn validate_part(name: &str, part: &str) -> Result<(), IdError> {
    if part.is_empty() {
        return Err(IdError::invalid_format(format!(
            "location key part '{name}' is empty"
        )));
    }
    if part.contains(KEY_SEPARATOR) {
        return Err(IdError::invalid_format(format!(
            "location key part '{name}' contains '{KEY_SEPARATOR}'"
        )));
    }
    Ok(())
}

impl fmt::Display for LocationPk {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{sep}{}{sep}{}{sep}{}{sep}{}",
            self.area,
            self.aisle,
            self.x,
            self.y,
            self.z,
            sep = KEY_SEPARATOR
        )
    }
}

impl FromStr for LocationPk {
    type Err = IdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl serde::Serialize for LocationPk {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> serde::Deserialize<'de> for LocationPk {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = <String as serde::Deserialize>::deserialize(deserializer)?;
        Self::parse(&s).map_err(serde::de::Error::custom)
    }
}

/// Parses an external string into a location key.
pub fn parse(s: &str) -> Result<LocationPk, IdError> {
    LocationPk::parse(s)
}

/// Formats a location key as its canonical string.
pub fn format(pk: &LocationPk) -> String {
    pk.to_string()
}

/// Formats a possibly absent location key; absence maps to absence.
pub fn format_opt(pk: Option<&LocationPk>) -> Option<String> {
    pk.map(format)
}
