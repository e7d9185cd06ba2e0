pub mod order_service;
pub mod stats_service;
pub mod token_service;
