//! Macros for defining fixed-width identifier types.

/// Macro to define a fixed-width identifier type.
///
/// This generates a newtype around the canonical string with:
/// - its own process-wide [`PolicyCell`](crate::PolicyCell), starting from the
///   given policy (or [`PaddingPolicy::DEFAULT`](crate::PaddingPolicy::DEFAULT))
/// - an implementation of [`FixedWidth`](crate::FixedWidth)
/// - inherent constructors and policy accessors mirroring the trait
/// - `Display`, `FromStr`, `AsRef<str>` and `From<$name> for String`
/// - `Serialize` and `Deserialize` as the canonical string
/// - `Eq`, `Ord` and `Hash` over the canonical value
///
/// # Example
///
/// ```ignore
/// define_fixed_width_id!(
///     /// Label of a storage bin.
///     pub BinLabel,
///     PaddingPolicy::new(8).with_pad_char(' ').with_alignment(Alignment::Left)
/// );
///
/// let label = BinLabel::of("B12");
/// assert_eq!(label.value(), "B12     ");
/// ```
#[macro_export]
macro_rules! define_fixed_width_id {
    ($(#[$meta:meta])* $vis:vis $name:ident) => {
        $crate::define_fixed_width_id!($(#[$meta])* $vis $name, $crate::PaddingPolicy::DEFAULT);
    };
    ($(#[$meta:meta])* $vis:vis $name:ident, $policy:expr) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
        $vis struct $name {
            value: String,
        }

        impl $crate::FixedWidth for $name {
            const NAME: &'static str = stringify!($name);

            fn policy_cell() -> &'static $crate::PolicyCell {
                static POLICY: std::sync::LazyLock<$crate::PolicyCell> =
                    std::sync::LazyLock::new(|| $crate::PolicyCell::new($policy));
                &POLICY
            }

            fn from_canonical(value: String) -> Self {
                Self { value }
            }

            fn canonical_mut(&mut self) -> &mut String {
                &mut self.value
            }

            fn value(&self) -> &str {
                &self.value
            }
        }

        #[allow(dead_code)]
        impl $name {
            /// Creates an identifier using the current process-wide policy.
            #[must_use]
            pub fn of(raw: &str) -> Self {
                <Self as $crate::FixedWidth>::of(raw)
            }

            /// Creates an identifier using an explicit policy.
            #[must_use]
            pub fn with_policy(raw: &str, policy: &$crate::PaddingPolicy) -> Self {
                <Self as $crate::FixedWidth>::with_policy(raw, policy)
            }

            /// Creates an identifier, failing when no value is given.
            pub fn try_from_option(raw: Option<&str>) -> Result<Self, $crate::IdError> {
                <Self as $crate::FixedWidth>::try_from_option(raw)
            }

            /// Returns the canonical value.
            #[must_use]
            pub fn value(&self) -> &str {
                &self.value
            }

            /// Returns the canonical value.
            #[must_use]
            pub fn as_str(&self) -> &str {
                &self.value
            }

            /// Re-normalizes with the current policy and returns the new value.
            pub fn set_value(&mut self, raw: &str) -> &str {
                <Self as $crate::FixedWidth>::set_value(self, raw)
            }

            /// Re-normalizes a possibly absent value.
            pub fn try_set_value(&mut self, raw: Option<&str>) -> Result<&str, $crate::IdError> {
                <Self as $crate::FixedWidth>::try_set_value(self, raw)
            }

            /// Returns a snapshot of the process-wide policy.
            pub fn policy() -> $crate::PaddingPolicy {
                <Self as $crate::FixedWidth>::policy()
            }

            /// Replaces the process-wide policy, returning the previous one.
            pub fn replace_policy(policy: $crate::PaddingPolicy) -> $crate::PaddingPolicy {
                <Self as $crate::FixedWidth>::replace_policy(policy)
            }

            pub fn length() -> usize {
                <Self as $crate::FixedWidth>::length()
            }

            pub fn set_length(length: usize) {
                <Self as $crate::FixedWidth>::set_length(length)
            }

            pub fn alignment() -> $crate::Alignment {
                <Self as $crate::FixedWidth>::alignment()
            }

            pub fn set_alignment(alignment: $crate::Alignment) {
                <Self as $crate::FixedWidth>::set_alignment(alignment)
            }

            pub fn is_padded() -> bool {
                <Self as $crate::FixedWidth>::is_padded()
            }

            pub fn set_padded(padded: bool) {
                <Self as $crate::FixedWidth>::set_padded(padded)
            }

            pub fn padder() -> char {
                <Self as $crate::FixedWidth>::padder()
            }

            /// Sets the fill character; this also turns padding on.
            pub fn set_padder(pad_char: char) {
                <Self as $crate::FixedWidth>::set_padder(pad_char)
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(&self.value)
            }
        }

        impl std::str::FromStr for $name {
            type Err = std::convert::Infallible;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Ok(Self::of(s))
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.value
            }
        }

        impl From<$name> for String {
            fn from(id: $name) -> Self {
                id.value
            }
        }

        impl $crate::__private::serde::Serialize for $name {
            fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
            where
                S: $crate::__private::serde::Serializer,
            {
                serializer.serialize_str(&self.value)
            }
        }

        impl<'de> $crate::__private::serde::Deserialize<'de> for $name {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: $crate::__private::serde::Deserializer<'de>,
            {
                let raw = <Option<String> as $crate::__private::serde::Deserialize>::deserialize(
                    deserializer,
                )?;
                Self::try_from_option(raw.as_deref())
                    .map_err(<D::Error as $crate::__private::serde::de::Error>::custom)
            }
        }
    };
}
