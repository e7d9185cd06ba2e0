//! One repository per collection, each holding a clone of the shared pool.

use sea_orm::DatabaseConnection;
use uuid::Uuid;

use crate::error::{AppError, AppResult};

pub mod addresses;
pub mod carts;
pub mod checkouts;
pub mod coupons;
pub mod favorites;
pub mod orders;
pub mod payments;
pub mod products;
pub mod reviews;
pub mod users;

pub use addresses::AddressRepository;
pub use carts::CartRepository;
pub use checkouts::CheckoutRepository;
pub use coupons::CouponRepository;
pub use favorites::FavoriteRepository;
pub use orders::OrderRepository;
pub use payments::PaymentRepository;
pub use products::ProductRepository;
pub use reviews::ReviewRepository;
pub use users::UserRepository;

#[derive(Clone)]
pub struct Repositories {
    pub users: UserRepository,
    pub products: ProductRepository,
    pub reviews: ReviewRepository,
    pub carts: CartRepository,
    pub favorites: FavoriteRepository,
    pub addresses: AddressRepository,
    pub coupons: CouponRepository,
    pub checkouts: CheckoutRepository,
    pub orders: OrderRepository,
    pub payments: PaymentRepository,
}

impl Repositories {
    pub fn new(conn: DatabaseConnection) -> Self {
        Self {
            users: UserRepository::new(conn.clone()),
            products: ProductRepository::new(conn.clone()),
            reviews: ReviewRepository::new(conn.clone()),
            carts: CartRepository::new(conn.clone()),
            favorites: FavoriteRepository::new(conn.clone()),
            addresses: AddressRepository::new(conn.clone()),
            coupons: CouponRepository::new(conn.clone()),
            checkouts: CheckoutRepository::new(conn.clone()),
            orders: OrderRepository::new(conn.clone()),
            payments: PaymentRepository::new(conn),
        }
    }
}

/// Path ids must be UUIDs; anything else is a client error rather than a miss.
pub fn parse_id(raw: &str) -> AppResult<Uuid> {
    Uuid::parse_str(raw.trim()).map_err(|_| AppError::BadRequest(format!("invalid id: {raw}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_id_rejects_non_uuid() {
        assert!(matches!(parse_id("42"), Err(AppError::BadRequest(_))));
        let id = Uuid::new_v4();
        assert_eq!(parse_id(&id.to_string()).unwrap(), id);
    }
}
