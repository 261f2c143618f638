//! Driving port for login.
//!
//! Inbound adapters authenticate credentials through [`LoginService`] without
//! knowing where accounts come from, so handler tests can substitute a mock.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::{Account, Error, LoginCredentials, UserId};

/// Identity granted to the default `admin` account.
pub const DEFAULT_USER_ID: Uuid = Uuid::from_u128(0x123e4567_e89b_12d3_a456_426614174000);

/// Domain use-case port for authentication.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LoginService: Send + Sync {
    /// Validate credentials and return the authenticated user id.
    async fn authenticate(&self, credentials: &LoginCredentials) -> Result<UserId, Error>;
}

/// Authenticator backed by a fixed list of configured accounts.
#[derive(Debug, Clone)]
pub struct ConfiguredLoginService {
    accounts: Vec<Account>,
}

impl ConfiguredLoginService {
    pub fn new(accounts: Vec<Account>) -> Self {
        Self { accounts }
    }
}

impl Default for ConfiguredLoginService {
    /// A single `admin` / `password` account mapped to [`DEFAULT_USER_ID`].
    fn default() -> Self {
        Self::new(vec![Account::new(
            "admin",
            "password",
            UserId::from_uuid(DEFAULT_USER_ID),
        )])
    }
}

#[async_trait]
impl LoginService for ConfiguredLoginService {
    async fn authenticate(&self, credentials: &LoginCredentials) -> Result<UserId, Error> {
        self.accounts
            .iter()
            .find(|account| account.matches(credentials))
            .map(|account| account.user_id().clone())
            .ok_or_else(|| Error::unauthorized("invalid credentials"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ErrorCode;
    use rstest::rstest;

    #[rstest]
    #[case("admin", "password", true)]
    #[case("admin", "wrong", false)]
    #[case("other", "password", false)]
    #[tokio::test]
    async fn default_accounts_accept_only_admin(
        #[case] username: &str,
        #[case] password: &str,
        #[case] should_succeed: bool,
    ) {
        let service = ConfiguredLoginService::default();
        let creds =
            LoginCredentials::try_from_parts(username, password).expect("credentials shape");
        match (should_succeed, service.authenticate(&creds).await) {
            (true, Ok(id)) => assert_eq!(id.as_uuid(), &DEFAULT_USER_ID),
            (false, Err(err)) => assert_eq!(err.code(), ErrorCode::Unauthorized),
            (true, Err(err)) => panic!("expected success, got error: {err:?}"),
            (false, Ok(id)) => panic!("expected failure, got success: {id}"),
        }
    }

    #[tokio::test]
    async fn each_account_maps_to_its_own_user() {
        let cook = UserId::random();
        let service = ConfiguredLoginService::new(vec![
            Account::new("admin", "password", UserId::random()),
            Account::new("cook", "s3cret", cook.clone()),
        ]);
        let creds = LoginCredentials::try_from_parts("cook", "s3cret").expect("shape");
        let id = service.authenticate(&creds).await.expect("authenticated");
        assert_eq!(id, cook);
    }

    #[rstest]
    fn default_user_id_matches_documented_text() {
        assert_eq!(
            DEFAULT_USER_ID.to_string(),
            "123e4567-e89b-12d3-a456-426614174000"
        );
    }
}
