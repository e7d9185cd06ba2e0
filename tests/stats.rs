mod common;

use axum::http::{Method, StatusCode};
use serde_json::json;

async fn add_product(
    app: &common::TestApp,
    admin: &str,
    name: &str,
    category: &str,
    price: f64,
) -> anyhow::Result<String> {
    let res = app
        .request(
            Method::POST,
            "/products",
            Some(admin),
            Some(json!({ "name": name, "category": category, "newPrice": price })),
        )
        .await?;
    assert_eq!(res.status, StatusCode::OK);
    Ok(res.body["insertedId"].as_str().unwrap_or_default().to_string())
}

#[tokio::test]
async fn admin_stats_start_at_zero_and_are_stable() -> anyhow::Result<()> {
    let app = common::spawn_app().await?;

    let res = app.get("/admin-status").await?;
    assert_eq!(
        res.body,
        json!({ "user": 0, "productItems": 0, "orderItems": 0, "revenue": 0.0 })
    );

    let admin = app.admin_token("boss@x.com").await?;
    add_product(&app, &admin, "Milk", "dairy", 2.5).await?;
    app.post("/payment", json!({ "email": "a@x.com", "price": 12.5 }))
        .await?;
    app.post("/payment", json!({ "email": "b@x.com", "price": 7.5 }))
        .await?;

    let first = app.get("/admin-status").await?;
    assert_eq!(first.body["user"], 1);
    assert_eq!(first.body["productItems"], 1);
    assert_eq!(first.body["orderItems"], 2);
    assert_eq!(first.body["revenue"], 20.0);

    let second = app.get("/admin-status").await?;
    assert_eq!(first.body, second.body);
    Ok(())
}

#[tokio::test]
async fn order_stats_group_purchases_by_category() -> anyhow::Result<()> {
    let app = common::spawn_app().await?;
    let admin = app.admin_token("boss@x.com").await?;
    let milk = add_product(&app, &admin, "Milk", "dairy", 2.5).await?;
    let cheese = add_product(&app, &admin, "Cheese", "dairy", 6.0).await?;
    let apple = add_product(&app, &admin, "Apple", "fruit", 1.0).await?;

    app.post(
        "/payment",
        json!({ "email": "a@x.com", "price": 9.5, "productItemIds": [milk, cheese, apple] }),
    )
    .await?;
    app.post(
        "/payment",
        json!({ "email": "b@x.com", "price": 2.5, "productItemIds": [milk, "legacy-id"] }),
    )
    .await?;

    let res = app.get("/order-stats").await?;
    assert_eq!(res.status, StatusCode::OK);
    assert_eq!(
        res.body,
        json!([
            { "category": "dairy", "quantity": 3, "revenue": 11.0 },
            { "category": "fruit", "quantity": 1, "revenue": 1.0 }
        ])
    );
    Ok(())
}
