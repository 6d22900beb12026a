//! Trait abstraction for the session daemon client to enable mocking in tests

use anyhow::Result;
use async_trait::async_trait;

/// Trait for session daemon operations, enabling mocking in tests
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AuthClientTrait: Send + Sync {
    /// Check if the daemon is reachable
    async fn check_connection(&self) -> bool;

    /// Forward credentials to the daemon. Session establishment and any
    /// failure handling beyond the returned `Result` are daemon-side.
    async fn login(&mut self, email: &str, password: &str) -> Result<()>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockall::predicate::eq;

    #[test]
    fn test_mock_login_matches_arguments() {
        let mut mock = MockAuthClientTrait::new();
        mock.expect_login()
            .with(eq("user@example.com"), eq("secret99"))
            .times(1)
            .returning(|_, _| Ok(()));

        tokio_test::block_on(mock.login("user@example.com", "secret99")).unwrap();
    }

    #[test]
    fn test_mock_check_connection() {
        let mut mock = MockAuthClientTrait::new();
        mock.expect_check_connection().return_const(true);

        assert!(tokio_test::block_on(mock.check_connection()));
    }
}
