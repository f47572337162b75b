//! Property-based tests for crm-validator.

use std::collections::HashMap;

use crm_validator::prelude::*;
use proptest::prelude::*;

fn rule_strategy() -> impl Strategy<Value = Rule> {
    (
        any::<bool>(),
        proptest::option::of(0usize..12),
        proptest::option::of(0usize..12),
        proptest::option::of(prop_oneof![Just(r"^\d+$"), Just(r"^[a-z ]+$"), Just(r"\S")]),
    )
        .prop_map(|(required, min, max, pattern)| {
            let mut builder = Rule::builder();
            if required {
                builder = builder.required();
            }
            if let Some(min) = min {
                builder = builder.min_length(min);
            }
            if let Some(max) = max {
                builder = builder.max_length(max.max(min.unwrap_or(0)));
            }
            if let Some(pattern) = pattern {
                builder = builder.pattern(pattern);
            }
            builder.build().unwrap()
        })
}

// ============================================================================
// REQUIRED / OPTIONAL LAWS
// ============================================================================

proptest! {
    #[test]
    fn required_blank_always_reports_required(rule in rule_strategy(), blank in "[ \t\n]{0,6}") {
        let rule = rule.to_builder().required().build().unwrap();
        let message = validate_field(&blank, &rule);
        prop_assert_eq!(message.as_deref(), Some("This field is required."));
    }

    #[test]
    fn optional_blank_is_always_valid(rule in rule_strategy(), blank in "[ \t\n]{0,6}") {
        let rule = rule.to_builder().optional().build().unwrap();
        prop_assert_eq!(validate_field(&blank, &rule), None);
    }

    #[test]
    fn optional_preset_accepts_anything(s in ".*") {
        prop_assert_eq!(validate_field(&s, presets::optional()), None);
    }
}

// ============================================================================
// IDEMPOTENCY: validate(x) == validate(x)
// ============================================================================

proptest! {
    #[test]
    fn field_validation_idempotent(rule in rule_strategy(), s in ".{0,16}") {
        prop_assert_eq!(validate_field(&s, &rule), validate_field(&s, &rule));
    }

    #[test]
    fn form_validation_idempotent(
        values in proptest::collection::hash_map("[a-c]", ".{0,10}", 0..4),
        rules in proptest::collection::vec(("[a-d]", rule_strategy()), 0..4),
    ) {
        let rules: RuleSet = rules.into_iter().collect();
        let values: HashMap<String, String> = values;
        let first = validate_form(&values, &rules);
        let second = validate_form(&values, &rules);
        prop_assert_eq!(&first, &second);
        prop_assert!(first.fields().all(|f| rules.contains(f)));
    }

    #[test]
    fn email_preset_idempotent(s in ".*") {
        prop_assert_eq!(
            validate_field(&s, presets::email()),
            validate_field(&s, presets::email())
        );
    }
}

// ============================================================================
// LENGTH LAWS
// ============================================================================

proptest! {
    #[test]
    fn min_length_matches_char_count(s in "[a-z]{1,20}", min in 0usize..25) {
        let rule = Rule::builder().min_length(min).build().unwrap();
        prop_assert_eq!(validate_field(&s, &rule).is_none(), s.chars().count() >= min);
    }

    #[test]
    fn max_length_matches_char_count(s in "[a-z]{1,20}", max in 0usize..25) {
        let rule = Rule::builder().max_length(max).build().unwrap();
        prop_assert_eq!(validate_field(&s, &rule).is_none(), s.chars().count() <= max);
    }
}
