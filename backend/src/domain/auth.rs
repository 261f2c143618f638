//! Authentication primitives: login credentials and configured accounts.
//!
//! Inbound payload parsing stays outside the domain; handlers build
//! [`LoginCredentials`] through the validating constructor before calling the
//! login port.

use std::fmt;

use zeroize::Zeroizing;

use super::UserId;

/// Domain error returned when login payload values are invalid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoginValidationError {
    /// Username was missing or blank once trimmed.
    EmptyUsername,
    /// Password was blank.
    EmptyPassword,
}

impl fmt::Display for LoginValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyUsername => write!(f, "username must not be empty"),
            Self::EmptyPassword => write!(f, "password must not be empty"),
        }
    }
}

impl std::error::Error for LoginValidationError {}

/// Validated login credentials.
///
/// ## Invariants
/// - `username` is trimmed and non-empty.
/// - `password` is non-empty; surrounding whitespace is kept as supplied.
///
/// # Examples
/// ```
/// use recipe_backend::domain::LoginCredentials;
///
/// let creds = LoginCredentials::try_from_parts(" admin ", "password").expect("valid");
/// assert_eq!(creds.username(), "admin");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoginCredentials {
    username: String,
    password: Zeroizing<String>,
}

impl LoginCredentials {
    /// Construct credentials from raw username/password inputs.
    pub fn try_from_parts(username: &str, password: &str) -> Result<Self, LoginValidationError> {
        let normalized = username.trim();
        if normalized.is_empty() {
            return Err(LoginValidationError::EmptyUsername);
        }
        if password.is_empty() {
            return Err(LoginValidationError::EmptyPassword);
        }

        Ok(Self {
            username: normalized.to_owned(),
            password: Zeroizing::new(password.to_owned()),
        })
    }

    /// Username suitable for account lookups.
    pub fn username(&self) -> &str {
        self.username.as_str()
    }

    /// Password provided by the caller.
    pub fn password(&self) -> &str {
        self.password.as_str()
    }
}

/// A configured login account mapping credentials onto a user identity.
#[derive(Debug, Clone)]
pub struct Account {
    username: String,
    password: Zeroizing<String>,
    user_id: UserId,
}

impl Account {
    /// Build an account for `username`/`password` owned by `user_id`.
    pub fn new(username: impl Into<String>, password: impl Into<String>, user_id: UserId) -> Self {
        Self {
            username: username.into(),
            password: Zeroizing::new(password.into()),
            user_id,
        }
    }

    /// Identity granted when the credentials match.
    pub fn user_id(&self) -> &UserId {
        &self.user_id
    }

    /// Whether `credentials` identify this account.
    pub fn matches(&self, credentials: &LoginCredentials) -> bool {
        self.username == credentials.username() && self.password.as_str() == credentials.password()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("", "pw", LoginValidationError::EmptyUsername)]
    #[case("   ", "pw", LoginValidationError::EmptyUsername)]
    #[case("user", "", LoginValidationError::EmptyPassword)]
    fn invalid_credentials(
        #[case] username: &str,
        #[case] password: &str,
        #[case] expected: LoginValidationError,
    ) {
        let err = LoginCredentials::try_from_parts(username, password)
            .expect_err("invalid inputs must fail");
        assert_eq!(err, expected);
    }

    #[rstest]
    #[case("admin", "password", true)]
    #[case("  admin ", "password", true)]
    #[case("admin", "password ", false)]
    #[case("Admin", "password", false)]
    #[case("other", "password", false)]
    fn account_matches_exact_credentials(
        #[case] username: &str,
        #[case] password: &str,
        #[case] expected: bool,
    ) {
        let account = Account::new("admin", "password", UserId::random());
        let creds = LoginCredentials::try_from_parts(username, password).expect("shape");
        assert_eq!(account.matches(&creds), expected);
    }
}
