use ck_blogsite_core::strength::PasswordStrength;
use ck_blogsite_core::validation::{is_valid_email, validate_signup};
use ck_blogsite_core::{Field, FormValues};
use proptest::prelude::*;

fn signup(name: &str, email: &str, password: &str, confirm: &str) -> FormValues {
    FormValues::new()
        .with(Field::Name, name)
        .with(Field::Email, email)
        .with(Field::Password, password)
        .with(Field::ConfirmPassword, confirm)
}

proptest! {
    #[test]
    fn short_names_are_rejected(name in "\\s{0,3}[a-zA-Z]?\\s{0,3}") {
        let errors = validate_signup(&signup(&name, "", "", ""));
        prop_assert!(errors.contains(Field::Name));
    }

    #[test]
    fn names_of_two_or_more_chars_pass(name in "[a-zA-Z]{2,20}") {
        let errors = validate_signup(&signup(&name, "", "", ""));
        prop_assert!(!errors.contains(Field::Name));
    }

    #[test]
    fn strings_without_at_sign_are_not_emails(email in "[^@]*") {
        prop_assert!(!is_valid_email(&email));
        let errors = validate_signup(&signup("", &email, "", ""));
        prop_assert!(errors.contains(Field::Email));
    }

    #[test]
    fn well_formed_addresses_pass(
        local in "[a-z0-9._+-]{1,12}",
        domain in "[a-z0-9-]{1,12}",
        tld in "[a-z]{2,6}",
    ) {
        let email = format!("{local}@{domain}.{tld}");
        prop_assert!(is_valid_email(&email));
    }

    #[test]
    fn passwords_under_eight_units_are_rejected(password in "[\\x{20}-\\x{D7FF}]{0,7}") {
        let errors = validate_signup(&signup("", "", &password, &password));
        prop_assert!(errors.contains(Field::Password));
    }

    #[test]
    fn mismatched_confirmation_is_rejected(password in ".{8,16}", suffix in ".{1,4}") {
        let confirm = format!("{password}{suffix}");
        let errors = validate_signup(&signup("", "", &password, &confirm));
        prop_assert_eq!(errors.get(Field::ConfirmPassword), Some("Passwords do not match"));
    }

    #[test]
    fn strength_never_drops_when_a_character_is_appended(password in ".{0,16}", extra in any::<char>()) {
        let before = PasswordStrength::of(&password).score;
        let after = PasswordStrength::of(&format!("{password}{extra}")).score;
        prop_assert!(after >= before);
    }

    #[test]
    fn strength_is_zero_only_for_empty_input(password in ".{0,16}") {
        let score = PasswordStrength::of(&password).score;
        prop_assert_eq!(score == 0, password.is_empty());
        prop_assert!(score <= 5);
    }
}
