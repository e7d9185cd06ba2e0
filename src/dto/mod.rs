pub mod address;
pub mod auth;
pub mod cart;
pub mod checkout;
pub mod coupons;
pub mod favorites;
pub mod orders;
pub mod payments;
pub mod products;
pub mod reviews;
pub mod stats;
pub mod users;
