#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::{
    Router,
    body::{Body, to_bytes},
    http::{Method, Request, StatusCode, header},
};
use grocery_shop_api::{
    db::run_migrations,
    models::Payment,
    payments::{
        CardProcessor, GatewayError, HostedGateway, PaymentIntent, SessionRequest,
        SessionResponse,
    },
    routes::create_router,
    services::token_service::TokenService,
    state::{AppState, Links},
};
use sea_orm::{ConnectOptions, Database};
use secrecy::SecretString;
use serde_json::Value;
use tower::ServiceExt;

pub const PUBLIC_BASE: &str = "http://api.test";
pub const CLIENT_BASE: &str = "http://shop.test";
pub const GATEWAY_PAGE: &str = "https://sandbox.gateway.test/pay/session-1";

#[derive(Debug, Clone)]
pub enum GatewayReply {
    Redirect(String),
    NoUrl,
    Fail,
}

/// Records every session it is asked to open and answers with a fixed reply.
pub struct FakeGateway {
    reply: Mutex<GatewayReply>,
    pub sessions: Mutex<Vec<SessionRequest>>,
}

impl FakeGateway {
    pub fn set_reply(&self, reply: GatewayReply) {
        *self.reply.lock().unwrap() = reply;
    }

    pub fn last_session(&self) -> Option<SessionRequest> {
        self.sessions.lock().unwrap().last().cloned()
    }
}

#[async_trait]
impl HostedGateway for FakeGateway {
    async fn init_session(
        &self,
        request: &SessionRequest,
    ) -> Result<SessionResponse, GatewayError> {
        self.sessions.lock().unwrap().push(request.clone());
        match self.reply.lock().unwrap().clone() {
            GatewayReply::Redirect(url) => Ok(SessionResponse {
                status: Some("SUCCESS".into()),
                gateway_page_url: Some(url),
                ..Default::default()
            }),
            GatewayReply::NoUrl => Ok(SessionResponse {
                status: Some("SUCCESS".into()),
                ..Default::default()
            }),
            GatewayReply::Fail => Err(GatewayError::Api {
                status: 502,
                message: "upstream unavailable".into(),
            }),
        }
    }
}

pub struct FakeCards {
    pub amounts: Mutex<Vec<(i64, String)>>,
}

#[async_trait]
impl CardProcessor for FakeCards {
    async fn create_payment_intent(
        &self,
        amount: i64,
        currency: &str,
    ) -> Result<PaymentIntent, GatewayError> {
        self.amounts
            .lock()
            .unwrap()
            .push((amount, currency.to_string()));
        Ok(PaymentIntent {
            id: "pi_test".into(),
            client_secret: Some(format!("pi_test_secret_{amount}")),
        })
    }
}

pub struct TestApp {
    pub state: AppState,
    pub router: Router,
    pub gateway: Arc<FakeGateway>,
    pub cards: Arc<FakeCards>,
}

pub async fn spawn_app() -> anyhow::Result<TestApp> {
    // One connection: every new in-memory connection would be a fresh database.
    let mut options = ConnectOptions::new("sqlite::memory:".to_owned());
    options
        .max_connections(1)
        .min_connections(1)
        .sqlx_logging(false);
    let orm = Database::connect(options).await?;
    run_migrations(&orm).await?;

    let gateway = Arc::new(FakeGateway {
        reply: Mutex::new(GatewayReply::Redirect(GATEWAY_PAGE.into())),
        sessions: Mutex::new(Vec::new()),
    });
    let cards = Arc::new(FakeCards {
        amounts: Mutex::new(Vec::new()),
    });

    let state = AppState::new(
        orm,
        TokenService::new(&SecretString::from("test-secret".to_string())),
        gateway.clone(),
        cards.clone(),
        Links {
            public_base_url: PUBLIC_BASE.into(),
            client_base_url: CLIENT_BASE.into(),
        },
    );
    let router = create_router().with_state(state.clone());

    Ok(TestApp {
        state,
        router,
        gateway,
        cards,
    })
}

pub struct TestResponse {
    pub status: StatusCode,
    pub location: Option<String>,
    pub body: Value,
    pub text: String,
}

impl TestApp {
    pub async fn request(
        &self,
        method: Method,
        uri: &str,
        token: Option<&str>,
        body: Option<Value>,
    ) -> anyhow::Result<TestResponse> {
        let mut builder = Request::builder().method(method).uri(uri);
        if let Some(token) = token {
            builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
        }
        let request = match body {
            Some(json) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(serde_json::to_vec(&json)?))?,
            None => builder.body(Body::empty())?,
        };

        let response = self.router.clone().oneshot(request).await?;
        let status = response.status();
        let location = response
            .headers()
            .get(header::LOCATION)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);
        let bytes = to_bytes(response.into_body(), usize::MAX).await?;
        let text = String::from_utf8_lossy(&bytes).into_owned();
        let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);

        Ok(TestResponse {
            status,
            location,
            body,
            text,
        })
    }

    pub async fn get(&self, uri: &str) -> anyhow::Result<TestResponse> {
        self.request(Method::GET, uri, None, None).await
    }

    pub async fn post(&self, uri: &str, body: Value) -> anyhow::Result<TestResponse> {
        self.request(Method::POST, uri, None, Some(body)).await
    }

    pub async fn patch(&self, uri: &str, body: Value) -> anyhow::Result<TestResponse> {
        self.request(Method::PATCH, uri, None, Some(body)).await
    }

    pub async fn delete(&self, uri: &str) -> anyhow::Result<TestResponse> {
        self.request(Method::DELETE, uri, None, None).await
    }

    pub fn token_for(&self, email: &str) -> anyhow::Result<String> {
        Ok(self.state.tokens.issue(email)?)
    }

    /// Registers `email` and returns its id.
    pub async fn register(&self, email: &str) -> anyhow::Result<String> {
        let res = self
            .post(
                "/users",
                serde_json::json!({ "email": email, "name": "Test User", "uid": format!("uid-{email}") }),
            )
            .await?;
        assert_eq!(res.status, StatusCode::OK);
        res.body["insertedId"]
            .as_str()
            .map(str::to_string)
            .ok_or_else(|| anyhow::anyhow!("no insertedId in {}", res.text))
    }

    /// Payments recorded for a gateway transaction.
    pub async fn payments_for(&self, tran_id: &str) -> anyhow::Result<Vec<Payment>> {
        Ok(self
            .state
            .repos
            .payments
            .list(None)
            .await?
            .into_iter()
            .filter(|p| p.transaction_id.as_deref() == Some(tran_id))
            .collect())
    }

    /// Registers `email` as an admin and returns a token for it.
    pub async fn admin_token(&self, email: &str) -> anyhow::Result<String> {
        let id = self.register(email).await?;
        let id = uuid::Uuid::parse_str(&id)?;
        self.state.repos.users.promote_to_admin(id).await?;
        self.token_for(email)
    }
}
