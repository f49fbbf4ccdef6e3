//! Stock fixed-width identifier types.

use crate::define_fixed_width_id;

// =============================================================================
// Transport Units
// =============================================================================

/// Width of a [`Barcode`] field.
pub const BARCODE_LENGTH: usize = 20;

define_fixed_width_id!(
    /// A printable label that identifies a transport unit.
    ///
    /// The value has a fixed number of characters. Content is aligned left or
    /// right and the remaining positions are filled with the padding
    /// character. Uniqueness is not guaranteed by the type.
    pub Barcode,
    crate::PaddingPolicy::new(BARCODE_LENGTH)
);

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use std::collections::hash_map::DefaultHasher;
    use std::hash::{Hash, Hasher};

    use super::*;
    use crate::{define_fixed_width_id, Alignment, PaddingPolicy};

    fn hash_of<T: Hash>(value: &T) -> u64 {
        let mut hasher = DefaultHasher::new();
        value.hash(&mut hasher);
        hasher.finish()
    }

    // Barcode's policy is global; these tests work on private types so they
    // can change the policy without racing each other.

    #[test]
    fn test_barcode_default_policy() {
        // Nothing in the tests changes Barcode's policy.
        let barcode = Barcode::of("TEST");
        assert_eq!(barcode.value().len(), 20);
        assert!(barcode.value().ends_with("TEST"));
        assert!(barcode.value().starts_with('0'));
        assert_eq!(barcode.value(), "0000000000000000TEST");
        assert_eq!(Barcode::policy(), PaddingPolicy::new(BARCODE_LENGTH));
    }

    #[test]
    fn test_barcode_basic_behaviour() {
        define_fixed_width_id!(Label);

        Label::set_length(20);
        Label::set_padder('0');

        let right = Label::of("RIGHT");
        assert_eq!(Label::length(), 20);
        assert_eq!(right.value().len(), 20);
        assert!(right.to_string().starts_with('0'));
        assert!(right.to_string().ends_with("RIGHT"));

        Label::set_alignment(Alignment::Left);
        let left = Label::of("LEFT");
        assert!(left.to_string().starts_with("LEFT"));
        assert!(left.to_string().ends_with('0'));
        assert_eq!(left.value().len(), 20);

        Label::set_length(2);
        let wide = Label::of("A123456789");
        assert_eq!(wide.value(), "A123456789");
        assert!(wide.to_string().starts_with('A'));
        assert!(wide.to_string().ends_with('9'));
    }

    #[test]
    fn test_missing_value_in_every_configuration() {
        define_fixed_width_id!(Label);

        assert!(Label::try_from_option(None).unwrap_err().is_missing_value());
        Label::set_alignment(Alignment::Left);
        assert!(Label::try_from_option(None).unwrap_err().is_missing_value());
        Label::set_padded(false);
        assert!(Label::try_from_option(None).unwrap_err().is_missing_value());
        Label::set_length(1);
        assert!(Label::try_from_option(None).unwrap_err().is_missing_value());
    }

    #[test]
    fn test_set_padder_forces_padding() {
        define_fixed_width_id!(Label);

        Label::set_padded(false);
        assert!(!Label::is_padded());
        assert_eq!(Label::of("x").value(), "x");

        Label::set_padder('#');
        assert!(Label::is_padded());
        assert_eq!(Label::padder(), '#');
        assert_eq!(Label::of("x").value(), format!("{}x", "#".repeat(19)));
    }

    #[test]
    fn test_set_value_renormalizes_with_current_policy() {
        define_fixed_width_id!(Label, PaddingPolicy::new(6));

        let mut label = Label::of("ab");
        assert_eq!(label.value(), "0000ab");

        Label::set_alignment(Alignment::Left);
        assert_eq!(label.set_value("cd"), "cd0000");
        assert_eq!(label.value(), "cd0000");
    }

    #[test]
    fn test_try_set_value_keeps_old_value_on_failure() {
        define_fixed_width_id!(Label, PaddingPolicy::new(4));

        let mut label = Label::of("a");
        assert!(label.try_set_value(None).unwrap_err().is_missing_value());
        assert_eq!(label.value(), "000a");
        assert_eq!(label.try_set_value(Some("b")).unwrap(), "000b");
    }

    #[test]
    fn test_policy_change_does_not_touch_existing_values() {
        define_fixed_width_id!(Label, PaddingPolicy::new(5));

        let before = Label::of("z");
        let copy = before.clone();
        Label::set_length(8);
        Label::set_alignment(Alignment::Left);

        assert_eq!(before.value(), "0000z");
        assert_eq!(before, copy);
        assert_ne!(before, Label::of("z"));
    }

    #[test]
    fn test_equality_and_hash_follow_value() {
        define_fixed_width_id!(Label);

        let a = Label::of("SAME");
        let b = Label::of("SAME");
        assert_eq!(a, b);
        assert_eq!(hash_of(&a), hash_of(&b));

        // Different raw input, same canonical value.
        let padded = Label::of("0000000000000000SAME");
        assert_eq!(a, padded);
        assert_eq!(hash_of(&a), hash_of(&padded));

        assert_ne!(a, Label::of("OTHER"));
    }

    #[test]
    fn test_with_policy_ignores_global_policy() {
        define_fixed_width_id!(Label);

        Label::set_padded(false);
        let policy = PaddingPolicy::new(4).with_pad_char('-');
        assert_eq!(Label::with_policy("a", &policy).value(), "---a");
        assert_eq!(Label::of("a").value(), "a");
    }

    #[test]
    fn test_replace_policy() {
        define_fixed_width_id!(Label);

        let old = Label::replace_policy(PaddingPolicy::new(3).with_alignment(Alignment::Left));
        assert_eq!(old, PaddingPolicy::DEFAULT);
        assert_eq!(Label::of("1").value(), "100");
        assert_eq!(Label::alignment(), Alignment::Left);
    }

    #[test]
    fn test_display_and_string_conversions() {
        define_fixed_width_id!(Label, PaddingPolicy::new(3));

        let label: Label = "7".parse().unwrap();
        assert_eq!(label.to_string(), label.value());
        assert_eq!(label.as_str(), "007");
        assert_eq!(AsRef::<str>::as_ref(&label), "007");
        assert_eq!(String::from(label), "007");
    }

    #[test]
    fn test_json_roundtrip() {
        define_fixed_width_id!(Label, PaddingPolicy::new(6));

        let label = Label::of("TU1");
        let json = serde_json::to_string(&label).unwrap();
        assert_eq!(json, "\"000TU1\"");
        let parsed: Label = serde_json::from_str(&json).unwrap();
        assert_eq!(label, parsed);
    }

    #[test]
    fn test_json_normalizes_on_read() {
        define_fixed_width_id!(Label, PaddingPolicy::new(6));

        let parsed: Label = serde_json::from_str("\"TU1\"").unwrap();
        assert_eq!(parsed.value(), "000TU1");
    }

    #[test]
    fn test_json_null_is_rejected() {
        define_fixed_width_id!(Label);

        let err = serde_json::from_str::<Label>("null").unwrap_err();
        assert!(err.to_string().contains("without a value"));
    }

    #[test]
    fn test_types_have_separate_policies() {
        define_fixed_width_id!(First);
        define_fixed_width_id!(Second);

        First::set_length(4);
        assert_eq!(First::length(), 4);
        assert_eq!(Second::length(), 20);
    }
}
