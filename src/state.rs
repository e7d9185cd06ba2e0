use std::sync::Arc;

use sea_orm::DatabaseConnection;

use crate::{
    payments::{CardProcessor, HostedGateway},
    repository::Repositories,
    services::token_service::TokenService,
};

#[derive(Clone)]
pub struct AppState {
    pub orm: DatabaseConnection,
    pub repos: Repositories,
    pub tokens: TokenService,
    pub gateway: Arc<dyn HostedGateway>,
    pub cards: Arc<dyn CardProcessor>,
    pub links: Links,
}

/// Absolute URLs handed to the payment gateway and used for browser redirects.
#[derive(Debug, Clone)]
pub struct Links {
    pub public_base_url: String,
    pub client_base_url: String,
}

impl Links {
    pub fn success_url(&self, tran_id: &str) -> String {
        format!("{}/payment/success/{tran_id}", self.public_base_url)
    }

    pub fn client_url(&self, path: &str) -> String {
        format!("{}/{}", self.client_base_url, path.trim_start_matches('/'))
    }

    pub fn payment_history_url(&self) -> String {
        self.client_url("dashboard/paymentHistory")
    }
}

impl AppState {
    pub fn new(
        orm: DatabaseConnection,
        tokens: TokenService,
        gateway: Arc<dyn HostedGateway>,
        cards: Arc<dyn CardProcessor>,
        links: Links,
    ) -> Self {
        Self {
            repos: Repositories::new(orm.clone()),
            orm,
            tokens,
            gateway,
            cards,
            links,
        }
    }
}
