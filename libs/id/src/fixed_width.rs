//! Behaviour shared by every fixed-width identifier type.

use tracing::debug;

use crate::{Alignment, IdError, PaddingPolicy, PolicyCell};

/// A string identifier normalized to a fixed width.
///
/// Implemented by [`define_fixed_width_id!`](crate::define_fixed_width_id);
/// the generated types also expose these methods inherently, so the trait
/// only needs importing for generic code such as [`convert`](crate::convert).
///
/// The policy accessors act on the process-wide policy of the implementing
/// type. Changing it affects identifiers created afterwards; existing values
/// keep the canonical string they were built with.
pub trait FixedWidth: Sized {
    /// Type name used in log events.
    const NAME: &'static str;

    /// The cell holding this type's process-wide policy.
    fn policy_cell() -> &'static PolicyCell;

    #[doc(hidden)]
    fn from_canonical(value: String) -> Self;

    #[doc(hidden)]
    fn canonical_mut(&mut self) -> &mut String;

    /// The canonical value.
    fn value(&self) -> &str;

    /// Builds an identifier with the current process-wide policy.
    fn of(raw: &str) -> Self {
        Self::with_policy(raw, &Self::policy())
    }

    /// Builds an identifier with an explicit policy, ignoring the global one.
    fn with_policy(raw: &str, policy: &PaddingPolicy) -> Self {
        Self::from_canonical(policy.pad(raw))
    }

    /// Builds an identifier from a possibly absent input.
    fn try_from_option(raw: Option<&str>) -> Result<Self, IdError> {
        Self::policy().normalize(raw).map(Self::from_canonical)
    }

    /// Re-normalizes `raw` with the current policy and stores the result.
    fn set_value(&mut self, raw: &str) -> &str {
        *self.canonical_mut() = Self::policy().pad(raw);
        self.value()
    }

    /// Like [`set_value`](Self::set_value), failing on an absent input.
    ///
    /// The stored value is left untouched on failure.
    fn try_set_value(&mut self, raw: Option<&str>) -> Result<&str, IdError> {
        *self.canonical_mut() = Self::policy().normalize(raw)?;
        Ok(self.value())
    }

    /// Snapshot of the process-wide policy.
    fn policy() -> PaddingPolicy {
        Self::policy_cell().get()
    }

    /// Installs a whole policy at once and returns the previous one.
    fn replace_policy(policy: PaddingPolicy) -> PaddingPolicy {
        let old = Self::policy_cell().replace(policy);
        debug!(identifier = Self::NAME, %old, new = %policy, "identifier policy replaced");
        old
    }

    fn length() -> usize {
        Self::policy().length()
    }

    fn set_length(length: usize) {
        let (old, new) = Self::policy_cell().update(|p| p.set_length(length));
        debug!(
            identifier = Self::NAME,
            old = old.length(),
            new = new.length(),
            "identifier length changed"
        );
    }

    fn alignment() -> Alignment {
        Self::policy().alignment()
    }

    fn set_alignment(alignment: Alignment) {
        let (old, new) = Self::policy_cell().update(|p| p.set_alignment(alignment));
        debug!(
            identifier = Self::NAME,
            old = %old.alignment(),
            new = %new.alignment(),
            "identifier alignment changed"
        );
    }

    fn is_padded() -> bool {
        Self::policy().is_padded()
    }

    fn set_padded(padded: bool) {
        let (old, new) = Self::policy_cell().update(|p| p.set_padded(padded));
        debug!(
            identifier = Self::NAME,
            old = old.is_padded(),
            new = new.is_padded(),
            "identifier padding toggled"
        );
    }

    fn padder() -> char {
        Self::policy().pad_char()
    }

    /// Sets the fill character. This also turns padding on.
    fn set_padder(pad_char: char) {
        let (old, new) = Self::policy_cell().update(|p| p.set_pad_char(pad_char));
        debug!(
            identifier = Self::NAME,
            old = %old.pad_char(),
            new = %new.pad_char(),
            padded = new.is_padded(),
            "identifier padder changed"
        );
    }
}
