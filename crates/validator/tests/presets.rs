//! Integration tests for the preset catalog and the standalone checks.

use chrono::NaiveDate;
use crm_validator::prelude::*;
use pretty_assertions::assert_eq;
use rstest::rstest;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

// ============================================================================
// CATALOG
// ============================================================================

#[rstest]
#[case("ananya@rajmahal.co.in", None)]
#[case("ananya@rajmahal", Some("Please enter a valid email address"))]
#[case("ananya rajmahal.in", Some("Please enter a valid email address"))]
#[case("  ", Some("This field is required."))]
fn email_preset(#[case] value: &str, #[case] expected: Option<&str>) {
    assert_eq!(validate_field(value, presets::email()).as_deref(), expected);
}

#[rstest]
#[case("+91 98765 43210", None)]
#[case("(080) 4123-4567", None)]
#[case("12345", Some("Please enter a valid phone number"))]
#[case("call me", Some("Please enter a valid phone number"))]
#[case("", Some("This field is required."))]
fn phone_preset(#[case] value: &str, #[case] expected: Option<&str>) {
    assert_eq!(validate_field(value, presets::phone()).as_deref(), expected);
}

#[rstest]
#[case("Diamond22", None)]
// The length step fails first, then the strength predicate re-checks and its
// message is the one reported.
#[case("Gold1", Some("Password must be at least 8 characters long"))]
#[case(
    "diamonds22",
    Some("Password must contain at least one uppercase letter, one lowercase letter, and one number")
)]
#[case("", Some("This field is required."))]
fn password_preset(#[case] value: &str, #[case] expected: Option<&str>) {
    assert_eq!(validate_field(value, presets::password()).as_deref(), expected);
}

#[test]
fn required_and_optional_presets() {
    assert_eq!(
        validate_field("", presets::required()).as_deref(),
        Some("This field is required.")
    );
    assert_eq!(validate_field("x", presets::required()), None);
    assert_eq!(validate_field("", presets::optional()), None);
    assert_eq!(validate_field("anything at all", presets::optional()), None);
}

#[test]
fn presets_are_shared_instances() {
    assert!(std::ptr::eq(presets::email(), presets::email()));
    assert!(std::ptr::eq(Preset::Phone.rule(), presets::phone()));
}

#[rstest]
#[case("email", Preset::Email)]
#[case(" Password ", Preset::Password)]
#[case("PHONE", Preset::Phone)]
fn preset_names_parse(#[case] name: &str, #[case] expected: Preset) {
    assert_eq!(name.parse::<Preset>().unwrap(), expected);
    assert!(presets::by_name(name).is_some());
}

#[test]
fn unknown_preset_name() {
    assert!(presets::by_name("pan_card").is_none());
    let err = "pan_card".parse::<Preset>().unwrap_err();
    assert_eq!(err.code(), "RULE_UNKNOWN_PRESET");
}

// ============================================================================
// STANDALONE CHECKS
// ============================================================================

#[test]
fn password_confirmation() {
    assert_eq!(validate_password_confirmation("Ruby2024x", "Ruby2024x"), None);
    assert_eq!(
        validate_password_confirmation("Ruby2024x", "ruby2024x").as_deref(),
        Some("Passwords do not match")
    );
}

#[rstest]
#[case(date(2000, 6, 1), None)]
#[case(date(2008, 12, 31), None)]
#[case(date(2009, 1, 1), Some("You must be at least 18 years old"))]
#[case(date(1906, 1, 1), None)]
#[case(date(1905, 12, 31), Some("Please enter a valid birth date"))]
fn age_uses_calendar_years(#[case] birth: NaiveDate, #[case] expected: Option<&str>) {
    let today = date(2026, 1, 2);
    assert_eq!(validate_age_on(birth, today).as_deref(), expected);
}

#[test]
fn unparsable_birth_date() {
    assert_eq!(
        validate_birth_date("31/12/1990").as_deref(),
        Some("Please enter a valid birth date")
    );
    assert_eq!(validate_birth_date("1990-12-31"), None);
}

#[test]
fn file_size_ceiling_is_inclusive() {
    let at_limit = FileInfo::new("necklace.jpg", 2 * 1_048_576, "image/jpeg");
    let over = FileInfo::new("necklace.jpg", 2 * 1_048_576 + 1, "image/jpeg");
    assert_eq!(validate_file_size(&at_limit, 2.0), None);
    assert_eq!(
        validate_file_size(&over, 2.0).as_deref(),
        Some("File size must be less than 2MB")
    );
}

#[test]
fn file_type_allow_list() {
    let png = FileInfo::new("ring.png", 1024, "image/png");
    let pdf = FileInfo::new("invoice.pdf", 1024, "application/pdf");
    let allowed = ["image/png", "image/jpeg"];

    assert_eq!(validate_file_type(&png, &allowed), None);
    assert_eq!(
        validate_file_type(&pdf, &allowed).as_deref(),
        Some("File type not allowed. Allowed types: image/png, image/jpeg")
    );
    assert!(validate_file_type::<&str>(&png, &[]).is_some());
}
