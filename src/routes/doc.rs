use utoipa::{
    Modify, OpenApi,
    openapi::{
        self,
        OpenApi as OpenApiSpec,
        security::{HttpAuthScheme, HttpBuilder, SecurityScheme},
    },
};
use utoipa_scalar::{Scalar, Servable};

use crate::{
    dto::{
        address::CreateAddressRequest,
        auth::{AdminStatus, TokenRequest, TokenResponse},
        cart::{AddToCartRequest, UpdateCartItemRequest},
        checkout::{CreateCheckoutRequest, UpdateCheckoutRequest},
        coupons::CreateCouponRequest,
        favorites::AddFavoriteRequest,
        orders::{CreateOrderRequest, GatewayRedirect, OrderCreated, OrderTotal, UpdateOrderRequest},
        payments::{CreatePaymentRequest, PaymentIntentRequest, PaymentIntentResponse},
        products::ProductPayload,
        reviews::CreateReviewRequest,
        stats::{AdminStats, CategoryStat},
        users::{CreateUserRequest, UpdateUserRequest},
    },
    models::{
        Address, AddressFields, CartItem, Checkout, ContactInfo, Coupon, Favorite, Order,
        OrderAddress, OrderLine, Payment, Product, Review, Supplier, User, UserMetadata,
    },
    response::{DeleteResult, ErrorBody, InsertOneResult, UpdateResult},
    routes::{
        address, auth, carts, checkout, coupons, favorites, health, orders, payments, products,
        reviews, stats, users,
    },
};

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut openapi::OpenApi) {
        let components = openapi.components.get_or_insert_with(Default::default);
        components.add_security_scheme(
            "bearer_auth",
            SecurityScheme::Http(
                HttpBuilder::new()
                    .scheme(HttpAuthScheme::Bearer)
                    .bearer_format("JWT")
                    .build(),
            ),
        );
    }
}

#[derive(OpenApi)]
#[openapi(
    paths(
        health::health_check,
        auth::issue_token,
        users::create_user,
        users::list_users,
        users::admin_status,
        users::update_user,
        users::make_admin,
        users::delete_user,
        products::list_products,
        products::get_product,
        products::create_product,
        products::update_product,
        products::delete_product,
        reviews::list_reviews,
        reviews::create_review,
        carts::list_cart,
        carts::add_to_cart,
        carts::update_cart_item,
        carts::remove_from_cart,
        carts::clear_cart,
        favorites::list_favorites,
        favorites::add_favorite,
        favorites::remove_favorite,
        address::list_addresses,
        address::create_address,
        coupons::list_coupons,
        coupons::create_coupon,
        coupons::delete_coupon,
        checkout::list_checkouts,
        checkout::get_checkout,
        checkout::create_checkout,
        checkout::update_checkout,
        checkout::delete_checkout,
        orders::create_order,
        orders::list_orders,
        orders::get_order,
        orders::update_order,
        orders::delete_order,
        orders::payment_success,
        payments::create_payment_intent,
        payments::record_payment,
        payments::list_payments,
        stats::admin_stats,
        stats::order_stats
    ),
    components(
        schemas(
            User,
            UserMetadata,
            Product,
            Supplier,
            ContactInfo,
            Review,
            OrderLine,
            CartItem,
            Favorite,
            AddressFields,
            Address,
            Coupon,
            Checkout,
            OrderAddress,
            Order,
            Payment,
            TokenRequest,
            TokenResponse,
            AdminStatus,
            CreateUserRequest,
            UpdateUserRequest,
            ProductPayload,
            CreateReviewRequest,
            AddToCartRequest,
            UpdateCartItemRequest,
            AddFavoriteRequest,
            CreateAddressRequest,
            CreateCouponRequest,
            CreateCheckoutRequest,
            UpdateCheckoutRequest,
            CreateOrderRequest,
            OrderTotal,
            UpdateOrderRequest,
            GatewayRedirect,
            OrderCreated,
            CreatePaymentRequest,
            PaymentIntentRequest,
            PaymentIntentResponse,
            AdminStats,
            CategoryStat,
            InsertOneResult,
            UpdateResult,
            DeleteResult,
            ErrorBody
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Health", description = "Liveness banner"),
        (name = "Auth", description = "Access token issuance"),
        (name = "Users", description = "User records and roles"),
        (name = "Products", description = "Catalogue"),
        (name = "Reviews", description = "Customer reviews"),
        (name = "Cart", description = "Cart lines"),
        (name = "Favorites", description = "Saved products"),
        (name = "Address", description = "Delivery addresses"),
        (name = "Coupons", description = "Discount coupons"),
        (name = "Checkout", description = "Pending checkouts"),
        (name = "Orders", description = "Orders and gateway callback"),
        (name = "Payments", description = "Card intents and payment history"),
        (name = "Stats", description = "Dashboard aggregates"),
    )
)]
pub struct ApiDoc;

pub fn scalar_docs() -> Scalar<OpenApiSpec> {
    Scalar::with_url("/docs", ApiDoc::openapi())
}
