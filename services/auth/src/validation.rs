//! Input validation utilities for account forms
//!
//! The credential store accepts whatever it is given; these checks run at the
//! form layer before registration and login.

/// Longest accepted username, in characters
pub const USERNAME_MAX_LEN: usize = 20;
/// Shortest accepted password, in characters
pub const PASSWORD_MIN_LEN: usize = 4;
/// Longest accepted password, in characters
pub const PASSWORD_MAX_LEN: usize = 20;

/// Validate username
pub fn validate_username(username: &str) -> Result<(), String> {
    if username.trim().is_empty() {
        return Err("Username is required".to_string());
    }

    if username.chars().count() > USERNAME_MAX_LEN {
        return Err(format!(
            "Username must be at most {} characters long",
            USERNAME_MAX_LEN
        ));
    }

    Ok(())
}

/// Validate password
pub fn validate_password(password: &str) -> Result<(), String> {
    if password.is_empty() {
        return Err("Password is required".to_string());
    }

    let len = password.chars().count();
    if !(PASSWORD_MIN_LEN..=PASSWORD_MAX_LEN).contains(&len) {
        return Err(format!(
            "Password must be between {} and {} characters long",
            PASSWORD_MIN_LEN, PASSWORD_MAX_LEN
        ));
    }

    Ok(())
}

/// Validate that the confirmation repeats the password
pub fn validate_password_confirmation(password: &str, confirmation: &str) -> Result<(), String> {
    if password != confirmation {
        return Err("Passwords must match".to_string());
    }

    Ok(())
}
