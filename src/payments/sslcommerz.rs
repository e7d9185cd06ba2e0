use std::sync::Arc;

use async_trait::async_trait;
use secrecy::{ExposeSecret, SecretString};
use serde::Serialize;

use super::{GatewayError, HostedGateway, SessionRequest, SessionResponse};
use crate::config::SslCommerzConfig;

const SANDBOX_URL: &str = "https://sandbox.sslcommerz.com";
const LIVE_URL: &str = "https://securepay.sslcommerz.com";
const INIT_PATH: &str = "/gwprocess/v4/api.php";

/// SSLCommerz hosted-checkout client.
#[derive(Clone)]
pub struct SslCommerzClient {
    inner: Arc<SslCommerzInner>,
}

struct SslCommerzInner {
    client: reqwest::Client,
    base_url: String,
    store_id: String,
    store_password: SecretString,
}

#[derive(Serialize)]
struct InitForm<'a> {
    store_id: &'a str,
    store_passwd: &'a str,
    #[serde(flatten)]
    session: &'a SessionRequest,
}

impl SslCommerzClient {
    /// # Errors
    ///
    /// Returns error if the HTTP client fails to build.
    pub fn new(config: &SslCommerzConfig) -> Result<Self, GatewayError> {
        let base_url = if config.is_live { LIVE_URL } else { SANDBOX_URL };
        Ok(Self {
            inner: Arc::new(SslCommerzInner {
                client: reqwest::Client::builder().build()?,
                base_url: base_url.to_string(),
                store_id: config.store_id.clone(),
                store_password: config.store_password.clone(),
            }),
        })
    }
}

#[async_trait]
impl HostedGateway for SslCommerzClient {
    async fn init_session(
        &self,
        request: &SessionRequest,
    ) -> Result<SessionResponse, GatewayError> {
        let url = format!("{}{INIT_PATH}", self.inner.base_url);
        let form = InitForm {
            store_id: &self.inner.store_id,
            store_passwd: self.inner.store_password.expose_secret(),
            session: request,
        };

        let response = self.inner.client.post(&url).form(&form).send().await?;
        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(GatewayError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let session: SessionResponse = response
            .json()
            .await
            .map_err(|e| GatewayError::Parse(format!("Failed to parse response: {e}")))?;

        if session.status.as_deref() == Some("FAILED") {
            return Err(GatewayError::Rejected(
                session
                    .failedreason
                    .unwrap_or_else(|| "session refused".to_string()),
            ));
        }
        Ok(session)
    }
}
