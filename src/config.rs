use std::env;

use secrecy::SecretString;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub database_url: String,
    pub host: String,
    pub port: u16,
    pub token_secret: SecretString,
    pub stripe_secret_key: SecretString,
    pub sslcommerz: SslCommerzConfig,
    /// Base URL the payment gateway calls back into.
    pub public_base_url: String,
    /// Base URL of the browser client (redirect targets).
    pub client_base_url: String,
}

#[derive(Debug, Clone)]
pub struct SslCommerzConfig {
    pub store_id: String,
    pub store_password: SecretString,
    pub is_live: bool,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        let database_url = env::var("DATABASE_URL")?;
        let host = env::var("APP_HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port = env::var("PORT")
            .ok()
            .and_then(|p| p.parse::<u16>().ok())
            .unwrap_or(5000);
        let token_secret = env::var("ACCESS_TOKEN_SECRET")
            .map_err(|_| anyhow::anyhow!("ACCESS_TOKEN_SECRET is not set"))?;
        let stripe_secret_key = env::var("STRIPE_SECRET_KEY").unwrap_or_default();

        let sslcommerz = SslCommerzConfig {
            store_id: env::var("SSLCOMMERZ_STORE_ID").unwrap_or_default(),
            store_password: SecretString::from(
                env::var("SSLCOMMERZ_STORE_PASSWORD").unwrap_or_default(),
            ),
            is_live: env::var("SSLCOMMERZ_IS_LIVE")
                .ok()
                .and_then(|v| v.parse::<bool>().ok())
                .unwrap_or(false),
        };

        let public_base_url = env::var("PUBLIC_BASE_URL")
            .unwrap_or_else(|_| format!("http://localhost:{port}"));
        let client_base_url =
            env::var("CLIENT_BASE_URL").unwrap_or_else(|_| "http://localhost:5173".to_string());

        Ok(Self {
            port,
            database_url,
            host,
            token_secret: SecretString::from(token_secret),
            stripe_secret_key: SecretString::from(stripe_secret_key),
            sslcommerz,
            public_base_url: trim_base(public_base_url),
            client_base_url: trim_base(client_base_url),
        })
    }
}

fn trim_base(url: String) -> String {
    url.trim_end_matches('/').to_string()
}
