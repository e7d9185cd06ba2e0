//! Payment provider clients.
//!
//! Two providers are supported:
//!
//! - **Hosted gateway** (SSLCommerz): the shop opens a payment session and
//!   redirects the browser to the provider's page; the provider later posts
//!   the browser back to `/payment/success/{tran_id}`.
//! - **Card processor** (Stripe): the shop creates a payment intent and hands
//!   its client secret to the browser, which completes the card payment.
//!
//! Application state holds both behind trait objects so tests can swap in
//! in-memory doubles.

mod sslcommerz;
mod stripe;

pub use sslcommerz::SslCommerzClient;
pub use stripe::StripeClient;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that can occur when talking to a payment provider.
#[derive(Debug, Error)]
pub enum GatewayError {
    /// HTTP request failed.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Provider answered with a non-success status.
    #[error("API error: {status} - {message}")]
    Api { status: u16, message: String },

    /// Provider answered 2xx but refused the request.
    #[error("Rejected: {0}")]
    Rejected(String),

    /// Failed to parse response.
    #[error("Parse error: {0}")]
    Parse(String),
}

/// Session parameters sent to the hosted gateway, named as the gateway expects them.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct SessionRequest {
    pub total_amount: String,
    pub currency: String,
    pub tran_id: String,
    pub success_url: String,
    pub fail_url: String,
    pub cancel_url: String,
    pub ipn_url: String,
    pub shipping_method: String,
    pub product_name: String,
    pub product_category: String,
    pub product_profile: String,
    pub cus_name: String,
    pub cus_email: String,
    pub cus_add1: String,
    pub cus_add2: String,
    pub cus_city: String,
    pub cus_state: String,
    pub cus_postcode: String,
    pub cus_country: String,
    pub cus_phone: String,
    pub cus_fax: String,
    pub ship_name: String,
    pub ship_add1: String,
    pub ship_add2: String,
    pub ship_city: String,
    pub ship_state: String,
    pub ship_postcode: String,
    pub ship_country: String,
}

#[derive(Debug, Clone, Deserialize, Default, PartialEq)]
pub struct SessionResponse {
    #[serde(default)]
    pub status: Option<String>,
    #[serde(rename = "GatewayPageURL", default)]
    pub gateway_page_url: Option<String>,
    #[serde(default)]
    pub failedreason: Option<String>,
    #[serde(default)]
    pub sessionkey: Option<String>,
}

impl SessionResponse {
    /// The redirect target, if the gateway handed one out.
    pub fn redirect_url(&self) -> Option<&str> {
        self.gateway_page_url
            .as_deref()
            .map(str::trim)
            .filter(|url| !url.is_empty())
    }
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct PaymentIntent {
    pub id: String,
    #[serde(default)]
    pub client_secret: Option<String>,
}

#[async_trait]
pub trait HostedGateway: Send + Sync {
    async fn init_session(&self, request: &SessionRequest)
    -> Result<SessionResponse, GatewayError>;
}

#[async_trait]
pub trait CardProcessor: Send + Sync {
    /// `amount` is in the currency's minor unit (cents).
    async fn create_payment_intent(
        &self,
        amount: i64,
        currency: &str,
    ) -> Result<PaymentIntent, GatewayError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_gateway_url_is_no_redirect() {
        let resp: SessionResponse =
            serde_json::from_str(r#"{"status":"SUCCESS","GatewayPageURL":"  "}"#).unwrap();
        assert_eq!(resp.redirect_url(), None);

        let resp: SessionResponse = serde_json::from_str(
            r#"{"status":"SUCCESS","GatewayPageURL":"https://sandbox.example/pay/abc"}"#,
        )
        .unwrap();
        assert_eq!(resp.redirect_url(), Some("https://sandbox.example/pay/abc"));
    }
}
