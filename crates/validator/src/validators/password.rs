//! Password validators

use crate::foundation::ValidationError;

/// Shortest password accepted by [`StrongPassword`].
pub const MIN_PASSWORD_LENGTH: usize = 8;

fn is_strong(input: &str) -> bool {
    input.chars().count() >= MIN_PASSWORD_LENGTH
        && input.chars().any(|c| c.is_ascii_lowercase())
        && input.chars().any(|c| c.is_ascii_uppercase())
        && input.chars().any(|c| c.is_ascii_digit())
}

crate::validator! {
    /// Validates password strength: at least eight characters with one
    /// lowercase letter, one uppercase letter and one digit.
    pub StrongPassword for str;
    rule(input) { is_strong(input) }
    error(input) {
        if input.chars().count() < MIN_PASSWORD_LENGTH {
            ValidationError::new("weak_password", "Password must be at least 8 characters long")
                .with_param("min", MIN_PASSWORD_LENGTH.to_string())
        } else {
            ValidationError::new(
                "weak_password",
                "Password must contain at least one uppercase letter, one lowercase letter, and one number",
            )
        }
    }
    fn strong_password();
}

crate::validator! {
    /// Validates that a confirmation entry equals the original password.
    #[derive(PartialEq, Eq)]
    pub PasswordConfirmation { password: String } for str;
    rule(self, input) { input == self.password }
    error(self, input) { ValidationError::new("password_mismatch", "Passwords do not match") }
    new(password: impl Into<String>) { Self { password: password.into() } }
    fn password_confirmation(password: impl Into<String>);
}
