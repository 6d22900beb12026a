//! gRPC client for the session daemon's authentication surface

use anyhow::{anyhow, Result};
use async_trait::async_trait;

use super::traits::AuthClientTrait;

// Include the generated proto types
pub mod proto {
    tonic::include_proto!("auth");
}

use proto::auth_daemon_client::AuthDaemonClient;

/// Default daemon address
const DEFAULT_ADDRESS: &str = "http://127.0.0.1:50052";

/// Client for the session daemon
pub struct AuthClient {
    /// The gRPC client
    client: Option<AuthDaemonClient<tonic::transport::Channel>>,
    /// The daemon address
    address: String,
}

impl AuthClient {
    /// Create a new client. The address comes from `SIGNIN_DAEMON_ADDRESS`,
    /// then the user config, then the default.
    pub async fn new(configured: Option<String>) -> Result<Self> {
        let address = std::env::var("SIGNIN_DAEMON_ADDRESS")
            .ok()
            .or(configured)
            .unwrap_or_else(|| DEFAULT_ADDRESS.to_string());

        // Try to connect now; a failure here is retried lazily on first use
        let client = match AuthDaemonClient::connect(address.clone()).await {
            Ok(client) => Some(client),
            Err(_) => None,
        };

        Ok(Self { client, address })
    }

    /// Ensure connection is established
    async fn ensure_connected(
        &mut self,
    ) -> Result<&mut AuthDaemonClient<tonic::transport::Channel>> {
        if self.client.is_none() {
            self.client = Some(
                AuthDaemonClient::connect(self.address.clone())
                    .await
                    .map_err(|e| anyhow!("Failed to connect to session daemon: {}", e))?,
            );
        }
        self.client
            .as_mut()
            .ok_or_else(|| anyhow!("Client not connected"))
    }
}

#[async_trait]
impl AuthClientTrait for AuthClient {
    async fn check_connection(&self) -> bool {
        self.client.is_some()
    }

    async fn login(&mut self, email: &str, password: &str) -> Result<()> {
        let client = self.ensure_connected().await?;

        let request = tonic::Request::new(proto::LoginRequest {
            email: email.to_string(),
            password: password.to_string(),
        });

        client
            .login(request)
            .await
            .map_err(|e| anyhow!("Login call failed: {}", e))?;

        tracing::debug!("credentials forwarded to session daemon");
        Ok(())
    }
}
