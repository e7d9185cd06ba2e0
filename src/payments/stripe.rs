use std::sync::Arc;

use async_trait::async_trait;
use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;

use super::{CardProcessor, GatewayError, PaymentIntent};

const BASE_URL: &str = "https://api.stripe.com/v1";

/// Stripe payment-intents client.
#[derive(Clone)]
pub struct StripeClient {
    inner: Arc<StripeInner>,
}

struct StripeInner {
    client: reqwest::Client,
    secret_key: SecretString,
}

#[derive(Deserialize)]
struct StripeErrorBody {
    error: StripeErrorDetail,
}

#[derive(Deserialize)]
struct StripeErrorDetail {
    #[serde(default)]
    message: Option<String>,
}

impl StripeClient {
    /// # Errors
    ///
    /// Returns error if the HTTP client fails to build.
    pub fn new(secret_key: SecretString) -> Result<Self, GatewayError> {
        Ok(Self {
            inner: Arc::new(StripeInner {
                client: reqwest::Client::builder().build()?,
                secret_key,
            }),
        })
    }
}

#[async_trait]
impl CardProcessor for StripeClient {
    async fn create_payment_intent(
        &self,
        amount: i64,
        currency: &str,
    ) -> Result<PaymentIntent, GatewayError> {
        let url = format!("{BASE_URL}/payment_intents");
        let form = [
            ("amount", amount.to_string()),
            ("currency", currency.to_string()),
            ("payment_method_types[]", "card".to_string()),
        ];

        let response = self
            .inner
            .client
            .post(&url)
            .bearer_auth(self.inner.secret_key.expose_secret())
            .form(&form)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let message = match response.json::<StripeErrorBody>().await {
                Ok(body) => body.error.message.unwrap_or_default(),
                Err(_) => String::new(),
            };
            return Err(GatewayError::Api {
                status: status.as_u16(),
                message,
            });
        }

        response
            .json()
            .await
            .map_err(|e| GatewayError::Parse(format!("Failed to parse response: {e}")))
    }
}
