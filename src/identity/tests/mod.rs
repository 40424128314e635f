//! Unit tests for identity values and the in-memory provider.


use crate::identity::domain::{EmailAddress, IdentityError, UserId, UserIdentity};
use rstest::rstest;

#[rstest]
#[case("Alice@Example.com", "alice@example.com")]
#[case("  bob@example.org ", "bob@example.org")]
fn email_addresses_are_trimmed_and_lowercased(#[case] raw: &str, #[case] expected: &str) {
    let address = EmailAddress::new(raw).expect("valid address");
    assert_eq!(address.as_str(), expected);
}

#[rstest]
#[case("")]
#[case("no-at-sign")]
#[case("@example.com")]
#[case("alice@")]
#[case("a@b@c")]
#[case("al ice@example.com")]
fn malformed_email_addresses_are_rejected(#[case] raw: &str) {
    let result = EmailAddress::new(raw);
    assert!(matches!(result, Err(IdentityError::InvalidEmail(value)) if value == raw));
}

#[rstest]
fn email_addresses_deserialize_through_validation() {
    let parsed: Result<EmailAddress, _> = serde_json::from_str("\"not-an-email\"");
    assert!(parsed.is_err());
    let valid: EmailAddress = serde_json::from_str("\"Carol@Example.com\"").expect("valid");
    assert_eq!(valid.local_part(), "carol");
}

#[rstest]
fn blank_display_names_fall_back_to_the_local_part() {
    let email = EmailAddress::new("dana@example.com").expect("valid address");
    let identity = UserIdentity::new(UserId::new(), email, "   ");
    assert_eq!(identity.name(), "dana");
    assert_eq!(identity.avatar_url(), None);
}
