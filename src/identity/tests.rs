//! Identity Module Tests
//!
//! Validates the E.164 and email format rules and the user projections.

#[cfg(test)]
mod tests {
    use crate::error::ApiError;
    use crate::identity::types::{
        Requester, User, UserProfile, validate_email, validate_non_empty, validate_phone_number,
    };
    use chrono::Utc;

    fn sample_user() -> User {
        User {
            id: 7,
            first_name: "Anna".to_string(),
            last_name: "Lee".to_string(),
            phone_number: "+15550000001".to_string(),
            email: Some("anna@example.com".to_string()),
            password_hash: "argon2-hash".to_string(),
            registered_at: Utc::now(),
        }
    }

    // ============================================================
    // PHONE VALIDATION
    // ============================================================

    #[test]
    fn test_phone_valid_e164() {
        assert!(validate_phone_number("phone_number", "+11234567890").is_ok());
        assert!(validate_phone_number("phone_number", "+12").is_ok());
        assert!(validate_phone_number("phone_number", "+999999999999999").is_ok());
    }

    #[test]
    fn test_phone_missing_plus() {
        assert!(validate_phone_number("phone_number", "11234567890").is_err());
    }

    #[test]
    fn test_phone_leading_zero() {
        assert!(validate_phone_number("phone_number", "+01234567890").is_err());
    }

    #[test]
    fn test_phone_too_short_or_too_long() {
        // A single digit after '+' is below the minimum of two.
        assert!(validate_phone_number("phone_number", "+1").is_err());
        // 16 digits exceeds the E.164 maximum of 15.
        assert!(validate_phone_number("phone_number", "+1234567890123456").is_err());
    }

    #[test]
    fn test_phone_rejects_letters_and_separators() {
        assert!(validate_phone_number("phone_number", "+1555ABC0001").is_err());
        assert!(validate_phone_number("phone_number", "+1-555-000-0001").is_err());
        assert!(validate_phone_number("phone_number", "").is_err());
    }

    #[test]
    fn test_phone_error_names_field() {
        let err = validate_phone_number("phone_number", "bogus").unwrap_err();
        match err {
            ApiError::Validation { field, .. } => assert_eq!(field, "phone_number"),
            other => panic!("expected validation error, got {:?}", other),
        }
    }

    // ============================================================
    // EMAIL VALIDATION
    // ============================================================

    #[test]
    fn test_email_valid() {
        assert!(validate_email("user@example.com").is_ok());
        assert!(validate_email("first.last@sub.example.org").is_ok());
    }

    #[test]
    fn test_email_invalid() {
        assert!(validate_email("not-an-email").is_err());
        assert!(validate_email("user@").is_err());
        assert!(validate_email("@example.com").is_err());
        assert!(validate_email("user @example.com").is_err());
    }

    // ============================================================
    // REQUIRED FIELDS
    // ============================================================

    #[test]
    fn test_non_empty() {
        assert!(validate_non_empty("first_name", "Anna").is_ok());
        assert!(validate_non_empty("first_name", "").is_err());
        assert!(validate_non_empty("first_name", "   ").is_err());
    }

    // ============================================================
    // PROJECTIONS
    // ============================================================

    #[test]
    fn test_full_name() {
        assert_eq!(sample_user().full_name(), "Anna Lee");
    }

    #[test]
    fn test_user_profile_hides_password_hash() {
        let profile = UserProfile::of(&sample_user());
        let json = serde_json::to_string(&profile).unwrap();

        assert!(json.contains("Anna"));
        assert!(!json.contains("argon2-hash"));
    }

    #[test]
    fn test_requester_projection() {
        let requester = Requester::of(&sample_user());

        assert_eq!(requester.id, 7);
        assert_eq!(requester.phone_number, "+15550000001");
    }
}
