pub mod addresses;
pub mod cart_items;
pub mod checkouts;
pub mod coupons;
pub mod favorites;
pub mod orders;
pub mod payments;
pub mod products;
pub mod reviews;
pub mod users;

pub use addresses::Entity as Addresses;
pub use cart_items::Entity as CartItems;
pub use checkouts::Entity as Checkouts;
pub use coupons::Entity as Coupons;
pub use favorites::Entity as Favorites;
pub use orders::Entity as Orders;
pub use payments::Entity as Payments;
pub use products::Entity as Products;
pub use reviews::Entity as Reviews;
pub use users::Entity as Users;
