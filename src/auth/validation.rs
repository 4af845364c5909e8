//! Input validation for Corkboard.
//!
//! Pure shape checks for signup, login, post, and comment requests. Checks
//! run in a fixed order so the first violated rule determines the reported
//! message; uniqueness checks against the store happen in the handlers,
//! after the presence checks and before the format checks.

use thiserror::Error;

/// Minimum nickname length.
pub const MIN_NICKNAME_LENGTH: usize = 3;

/// Minimum password length.
pub const MIN_PASSWORD_LENGTH: usize = 4;

/// Validation errors.
///
/// Each variant's message is the field-specific message returned to the
/// client with a 400 status.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Nickname field is missing or empty.
    #[error("please enter a nickname")]
    NicknameRequired,

    /// Password field is missing or empty.
    #[error("please enter a password")]
    PasswordRequired,

    /// Password confirmation field is missing or empty.
    #[error("please enter the password confirmation")]
    PasswordConfirmRequired,

    /// Nickname does not match the required pattern.
    #[error("nickname must be at least {MIN_NICKNAME_LENGTH} characters, letters and digits only")]
    NicknameFormat,

    /// Password is too short or contains the nickname.
    #[error("password must be at least {MIN_PASSWORD_LENGTH} characters and must not contain the nickname")]
    PasswordTooWeak,

    /// Password and confirmation differ.
    #[error("passwords do not match")]
    PasswordMismatch,

    /// Post title is missing or empty.
    #[error("please enter a title")]
    TitleRequired,

    /// Post author name is missing or empty (password mode).
    #[error("please enter an author name")]
    AuthorRequired,

    /// Post content is missing or empty.
    #[error("please enter the content")]
    ContentRequired,

    /// Post guard password is missing or empty (password mode).
    #[error("please enter the post password")]
    PostPasswordRequired,

    /// Comment text is missing or empty.
    #[error("please enter the comment text")]
    CommentRequired,
}

/// Check signup field presence, in order: nickname, password, confirmation.
pub fn validate_signup_presence(
    nickname: &str,
    password: &str,
    password_confirm: &str,
) -> Result<(), ValidationError> {
    if nickname.is_empty() {
        return Err(ValidationError::NicknameRequired);
    }
    if password.is_empty() {
        return Err(ValidationError::PasswordRequired);
    }
    if password_confirm.is_empty() {
        return Err(ValidationError::PasswordConfirmRequired);
    }
    Ok(())
}

/// Validate the nickname format.
///
/// Requirements: at least 3 characters, ASCII letters and digits only.
///
/// # Examples
///
/// ```
/// use corkboard::auth::validation::validate_nickname;
///
/// assert!(validate_nickname("abc123").is_ok());
/// assert!(validate_nickname("ab").is_err()); // too short
/// assert!(validate_nickname("ab_c").is_err()); // underscore
/// ```
pub fn validate_nickname(nickname: &str) -> Result<(), ValidationError> {
    if nickname.len() < MIN_NICKNAME_LENGTH {
        return Err(ValidationError::NicknameFormat);
    }
    if !nickname.chars().all(|c| c.is_ascii_alphanumeric()) {
        return Err(ValidationError::NicknameFormat);
    }
    Ok(())
}

/// Validate the signup password.
///
/// Requirements: at least 4 characters, must not contain the nickname as a
/// substring.
pub fn validate_password(password: &str, nickname: &str) -> Result<(), ValidationError> {
    if password.len() < MIN_PASSWORD_LENGTH || password.contains(nickname) {
        return Err(ValidationError::PasswordTooWeak);
    }
    Ok(())
}

/// Check that the password matches its confirmation.
pub fn validate_password_confirm(
    password: &str,
    password_confirm: &str,
) -> Result<(), ValidationError> {
    if password != password_confirm {
        return Err(ValidationError::PasswordMismatch);
    }
    Ok(())
}

/// Check login field presence, in order: nickname, password.
pub fn validate_login(nickname: &str, password: &str) -> Result<(), ValidationError> {
    if nickname.is_empty() {
        return Err(ValidationError::NicknameRequired);
    }
    if password.is_empty() {
        return Err(ValidationError::PasswordRequired);
    }
    Ok(())
}

/// Check post field presence, in order: title, content.
pub fn validate_post(title: &str, content: &str) -> Result<(), ValidationError> {
    if title.is_empty() {
        return Err(ValidationError::TitleRequired);
    }
    if content.is_empty() {
        return Err(ValidationError::ContentRequired);
    }
    Ok(())
}

/// Check guarded post field presence, in order: title, author, content,
/// password (the password-mode creation contract).
pub fn validate_guarded_post(
    title: &str,
    author: &str,
    content: &str,
    password: &str,
) -> Result<(), ValidationError> {
    if title.is_empty() {
        return Err(ValidationError::TitleRequired);
    }
    if author.is_empty() {
        return Err(ValidationError::AuthorRequired);
    }
    if content.is_empty() {
        return Err(ValidationError::ContentRequired);
    }
    if password.is_empty() {
        return Err(ValidationError::PostPasswordRequired);
    }
    Ok(())
}

/// Check comment text presence.
pub fn validate_comment(body: &str) -> Result<(), ValidationError> {
    if body.is_empty() {
        return Err(ValidationError::CommentRequired);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    // Signup presence tests
    #[test]
    fn test_signup_presence_valid() {
        assert!(validate_signup_presence("abc", "abcd", "abcd").is_ok());
    }

    #[test]
    fn test_signup_presence_order() {
        // Nickname reported first even when everything is missing
        assert_eq!(
            validate_signup_presence("", "", ""),
            Err(ValidationError::NicknameRequired)
        );
        assert_eq!(
            validate_signup_presence("abc", "", ""),
            Err(ValidationError::PasswordRequired)
        );
        assert_eq!(
            validate_signup_presence("abc", "abcd", ""),
            Err(ValidationError::PasswordConfirmRequired)
        );
    }

    // Nickname format tests
    #[test]
    fn test_validate_nickname_valid() {
        assert!(validate_nickname("abc").is_ok());
        assert!(validate_nickname("abc123").is_ok());
        assert!(validate_nickname("ABC").is_ok());
        assert!(validate_nickname("a1B2c3").is_ok());
    }

    #[test]
    fn test_validate_nickname_too_short() {
        assert_eq!(validate_nickname("ab"), Err(ValidationError::NicknameFormat));
        assert_eq!(validate_nickname("a"), Err(ValidationError::NicknameFormat));
    }

    #[test]
    fn test_validate_nickname_exact_minimum() {
        assert!(validate_nickname("abc").is_ok());
    }

    #[test]
    fn test_validate_nickname_invalid_chars() {
        assert_eq!(
            validate_nickname("abc_def"),
            Err(ValidationError::NicknameFormat)
        );
        assert_eq!(
            validate_nickname("abc def"),
            Err(ValidationError::NicknameFormat)
        );
        assert_eq!(
            validate_nickname("abc-def"),
            Err(ValidationError::NicknameFormat)
        );
        assert_eq!(
            validate_nickname("닉네임abc"),
            Err(ValidationError::NicknameFormat)
        );
    }

    // Password rule tests
    #[test]
    fn test_validate_password_valid() {
        assert!(validate_password("abcd", "xyz").is_ok());
        assert!(validate_password("longer_password", "abc").is_ok());
    }

    #[test]
    fn test_validate_password_too_short() {
        assert_eq!(
            validate_password("abc", "xyz"),
            Err(ValidationError::PasswordTooWeak)
        );
    }

    #[test]
    fn test_validate_password_contains_nickname() {
        assert_eq!(
            validate_password("abc123xyz", "abc123"),
            Err(ValidationError::PasswordTooWeak)
        );
        // Exact match is also a substring
        assert_eq!(
            validate_password("abc123", "abc123"),
            Err(ValidationError::PasswordTooWeak)
        );
    }

    #[test]
    fn test_validate_password_exact_minimum() {
        assert!(validate_password("abcd", "zzz").is_ok());
    }

    #[test]
    fn test_validate_password_confirm() {
        assert!(validate_password_confirm("abcd", "abcd").is_ok());
        assert_eq!(
            validate_password_confirm("abcd", "abce"),
            Err(ValidationError::PasswordMismatch)
        );
    }

    // Login tests
    #[test]
    fn test_validate_login() {
        assert!(validate_login("abc", "abcd").is_ok());
        assert_eq!(
            validate_login("", "abcd"),
            Err(ValidationError::NicknameRequired)
        );
        assert_eq!(
            validate_login("abc", ""),
            Err(ValidationError::PasswordRequired)
        );
    }

    // Post tests
    #[test]
    fn test_validate_post() {
        assert!(validate_post("title", "content").is_ok());
        assert_eq!(
            validate_post("", "content"),
            Err(ValidationError::TitleRequired)
        );
        assert_eq!(
            validate_post("title", ""),
            Err(ValidationError::ContentRequired)
        );
    }

    #[test]
    fn test_validate_guarded_post_order() {
        assert!(validate_guarded_post("t", "a", "c", "p").is_ok());
        assert_eq!(
            validate_guarded_post("", "", "", ""),
            Err(ValidationError::TitleRequired)
        );
        assert_eq!(
            validate_guarded_post("t", "", "", ""),
            Err(ValidationError::AuthorRequired)
        );
        assert_eq!(
            validate_guarded_post("t", "a", "", ""),
            Err(ValidationError::ContentRequired)
        );
        assert_eq!(
            validate_guarded_post("t", "a", "c", ""),
            Err(ValidationError::PostPasswordRequired)
        );
    }

    #[test]
    fn test_validate_comment() {
        assert!(validate_comment("nice post").is_ok());
        assert_eq!(validate_comment(""), Err(ValidationError::CommentRequired));
    }

    #[test]
    fn test_validation_error_messages() {
        assert_eq!(
            ValidationError::NicknameRequired.to_string(),
            "please enter a nickname"
        );
        assert!(ValidationError::NicknameFormat
            .to_string()
            .contains("at least 3"));
        assert!(ValidationError::PasswordTooWeak
            .to_string()
            .contains("must not contain the nickname"));
    }
}
