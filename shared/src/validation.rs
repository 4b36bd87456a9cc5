//! Input validation functions
//!
//! Small, dependency-light checks used by the request handlers. Each
//! returns a plain message string so callers can wrap it in whatever
//! error type their layer uses.

/// Validate email format
pub fn validate_email(email: &str) -> Result<(), String> {
    if email.is_empty() {
        return Err("Email cannot be empty".to_string());
    }
    if email.len() > 255 {
        return Err("Email too long".to_string());
    }
    let email_regex = regex_lite::Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap();
    if !email_regex.is_match(email) {
        return Err("Invalid email format".to_string());
    }
    Ok(())
}

/// Validate password length
pub fn validate_password(password: &str) -> Result<(), String> {
    if password.len() < 6 {
        return Err("Password must be at least 6 characters".to_string());
    }
    if password.len() > 128 {
        return Err("Password too long".to_string());
    }
    Ok(())
}

/// Validate username
pub fn validate_username(username: &str) -> Result<(), String> {
    if username.trim().is_empty() {
        return Err("Username cannot be empty".to_string());
    }
    if username.len() > 64 {
        return Err("Username too long".to_string());
    }
    Ok(())
}

/// Validate a feedback rating (1-5)
pub fn validate_rating(rating: i32) -> Result<(), String> {
    if !(1..=5).contains(&rating) {
        return Err("Rating must be between 1 and 5".to_string());
    }
    Ok(())
}

/// Validate a CGPA threshold (0.0-10.0)
pub fn validate_cgpa(cgpa: f64) -> Result<(), String> {
    if cgpa.is_nan() || cgpa.is_infinite() {
        return Err("CGPA must be a valid number".to_string());
    }
    if !(0.0..=10.0).contains(&cgpa) {
        return Err("CGPA must be between 0 and 10".to_string());
    }
    Ok(())
}

/// Validate logged hours
pub fn validate_time_spent_hours(hours: f64) -> Result<(), String> {
    if hours.is_nan() || hours.is_infinite() {
        return Err("timeSpentHours must be a valid number".to_string());
    }
    if hours < 0.0 {
        return Err("timeSpentHours must be a positive number".to_string());
    }
    if hours > 24.0 {
        return Err("timeSpentHours cannot exceed 24".to_string());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_validate_email() {
        assert!(validate_email("test@example.com").is_ok());
        assert!(validate_email("user.name@domain.co.uk").is_ok());
        assert!(validate_email("").is_err());
        assert!(validate_email("invalid").is_err());
        assert!(validate_email("no@dot").is_err());
        assert!(validate_email("spaces in@email.com").is_err());
    }

    #[test]
    fn test_validate_password() {
        assert!(validate_password("secret123").is_ok());
        assert!(validate_password("123456").is_ok());
        assert!(validate_password("short").is_err());
        assert!(validate_password(&"a".repeat(129)).is_err());
    }

    #[test]
    fn test_validate_username() {
        assert!(validate_username("priya").is_ok());
        assert!(validate_username("").is_err());
        assert!(validate_username("   ").is_err());
        assert!(validate_username(&"u".repeat(65)).is_err());
    }

    #[test]
    fn test_validate_rating() {
        for r in 1..=5 {
            assert!(validate_rating(r).is_ok());
        }
        assert!(validate_rating(0).is_err());
        assert!(validate_rating(6).is_err());
        assert!(validate_rating(-1).is_err());
    }

    #[test]
    fn test_validate_cgpa() {
        assert!(validate_cgpa(0.0).is_ok());
        assert!(validate_cgpa(7.5).is_ok());
        assert!(validate_cgpa(10.0).is_ok());
        assert!(validate_cgpa(-0.1).is_err());
        assert!(validate_cgpa(10.1).is_err());
        assert!(validate_cgpa(f64::NAN).is_err());
    }

    #[test]
    fn test_validate_time_spent_hours() {
        assert!(validate_time_spent_hours(0.0).is_ok());
        assert!(validate_time_spent_hours(1.5).is_ok());
        assert!(validate_time_spent_hours(24.0).is_ok());
        assert!(validate_time_spent_hours(-0.5).is_err());
        assert!(validate_time_spent_hours(25.0).is_err());
        assert!(validate_time_spent_hours(f64::NAN).is_err());
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        #[test]
        fn prop_password_length_valid(len in 6usize..=128) {
            let password: String = (0..len).map(|_| 'a').collect();
            prop_assert!(validate_password(&password).is_ok());
        }

        #[test]
        fn prop_password_too_short(len in 0usize..6) {
            let password: String = (0..len).map(|_| 'a').collect();
            prop_assert!(validate_password(&password).is_err());
        }

        #[test]
        fn prop_valid_rating_range(rating in 1i32..=5) {
            prop_assert!(validate_rating(rating).is_ok());
        }

        #[test]
        fn prop_valid_hours_range(hours in 0.0f64..=24.0) {
            prop_assert!(validate_time_spent_hours(hours).is_ok());
        }

        #[test]
        fn prop_valid_cgpa_range(cgpa in 0.0f64..=10.0) {
            prop_assert!(validate_cgpa(cgpa).is_ok());
        }
    }
}
