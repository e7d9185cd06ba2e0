mod common;

use axum::http::{Method, StatusCode};
use common::{CLIENT_BASE, GATEWAY_PAGE, GatewayReply};
use sea_orm::ConnectionTrait;
use serde_json::{Value, json};

fn order_body(bank_name: &str) -> Value {
    json!({
        "email": "a@x.com",
        "name": "Rahim",
        "cart": [
            { "_id": "7f0c0b5e-8d2f-4b62-9a7b-1c1e5b1f0a01", "name": "Milk", "count": 1, "price": 2.5 },
            { "_id": "7f0c0b5e-8d2f-4b62-9a7b-1c1e5b1f0a02", "name": "Rice", "count": 2, "price": 10.0 }
        ],
        "total": ["22.50"],
        "address": [{ "data": { "district": "Sylhet", "town": "Zindabazar", "postCode": "3100" } }],
        "bank_name": bank_name,
        "paymentMethod": "online"
    })
}

/// Places a gateway order and returns the transaction id it was stored under.
async fn place_gateway_order(app: &common::TestApp) -> anyhow::Result<String> {
    let res = app.post("/order", order_body("SSL-Commerz")).await?;
    assert_eq!(res.status, StatusCode::OK);
    assert_eq!(res.body["url"], GATEWAY_PAGE);

    let session = app
        .gateway
        .last_session()
        .ok_or_else(|| anyhow::anyhow!("no gateway session opened"))?;
    Ok(session.tran_id)
}

#[tokio::test]
async fn direct_order_is_stored_unconfirmed() -> anyhow::Result<()> {
    let app = common::spawn_app().await?;

    let res = app.post("/order", order_body("Cash On Delivery")).await?;
    assert_eq!(res.status, StatusCode::OK);
    assert!(res.body["insertedId"].is_string());
    assert!(app.gateway.last_session().is_none());

    let res = app.get("/order?email=a@x.com").await?;
    let orders = res.body.as_array().cloned().unwrap_or_default();
    assert_eq!(orders.len(), 1);
    assert_eq!(orders[0]["total"], 22.5);
    assert_eq!(orders[0]["isOrderConfirmed"], false);
    assert_eq!(orders[0]["isDelivered"], false);
    assert_eq!(orders[0]["transactionId"], Value::Null);
    Ok(())
}

#[tokio::test]
async fn unusable_total_is_rejected() -> anyhow::Result<()> {
    let app = common::spawn_app().await?;

    let mut body = order_body("Cash On Delivery");
    body["total"] = json!("twenty");
    let res = app.post("/order", body).await?;
    assert_eq!(res.status, StatusCode::BAD_REQUEST);
    assert!(app.state.repos.orders.list(None).await?.is_empty());
    Ok(())
}

#[tokio::test]
async fn gateway_order_is_stored_before_redirect() -> anyhow::Result<()> {
    let app = common::spawn_app().await?;

    let tran_id = place_gateway_order(&app).await?;
    let session = app
        .gateway
        .last_session()
        .ok_or_else(|| anyhow::anyhow!("no gateway session opened"))?;
    assert_eq!(session.total_amount, "22.50");
    assert_eq!(session.currency, "BDT");
    assert_eq!(session.cus_add1, "Sylhet");
    assert_eq!(session.cus_add2, "Dhaka");
    assert_eq!(session.cus_postcode, "3100");
    assert_eq!(session.cus_phone, "01711111111");
    assert_eq!(
        session.success_url,
        format!("{}/payment/success/{tran_id}", common::PUBLIC_BASE)
    );

    let order = app
        .state
        .repos
        .orders
        .find_by_transaction_id(&tran_id)
        .await?
        .ok_or_else(|| anyhow::anyhow!("order not stored"))?;
    assert!(!order.is_order_confirmed);
    assert!(!order.is_delivered);
    Ok(())
}

#[tokio::test]
async fn success_callback_confirms_and_records_one_payment() -> anyhow::Result<()> {
    let app = common::spawn_app().await?;
    let tran_id = place_gateway_order(&app).await?;

    let res = app
        .request(Method::POST, &format!("/payment/success/{tran_id}"), None, None)
        .await?;
    assert_eq!(res.status, StatusCode::SEE_OTHER);
    assert_eq!(
        res.location.as_deref(),
        Some(format!("{CLIENT_BASE}/dashboard/paymentHistory").as_str())
    );

    let order = app
        .state
        .repos
        .orders
        .find_by_transaction_id(&tran_id)
        .await?
        .ok_or_else(|| anyhow::anyhow!("order vanished"))?;
    assert!(order.is_order_confirmed);

    let payments = app.payments_for(&tran_id).await?;
    assert_eq!(payments.len(), 1);
    let payment = &payments[0];
    assert_eq!(payment.email, "a@x.com");
    assert_eq!(payment.price, 22.5);
    assert_eq!(payment.order_id, Some(order.id));
    assert_eq!(payment.product_item_ids.0.len(), 2);
    assert_eq!(payment.status.as_deref(), Some("success"));

    // The browser can land on the success URL twice.
    let res = app
        .request(Method::POST, &format!("/payment/success/{tran_id}"), None, None)
        .await?;
    assert_eq!(res.status, StatusCode::SEE_OTHER);
    assert_eq!(app.payments_for(&tran_id).await?.len(), 1);
    Ok(())
}

#[tokio::test]
async fn failed_payment_write_leaves_order_unconfirmed() -> anyhow::Result<()> {
    let app = common::spawn_app().await?;
    let tran_id = place_gateway_order(&app).await?;

    app.state
        .orm
        .execute_unprepared("ALTER TABLE payments RENAME TO payments_offline")
        .await?;
    let res = app
        .request(Method::POST, &format!("/payment/success/{tran_id}"), None, None)
        .await?;
    assert_eq!(res.status, StatusCode::INTERNAL_SERVER_ERROR);

    let order = app
        .state
        .repos
        .orders
        .find_by_transaction_id(&tran_id)
        .await?
        .ok_or_else(|| anyhow::anyhow!("order vanished"))?;
    assert!(!order.is_order_confirmed);

    app.state
        .orm
        .execute_unprepared("ALTER TABLE payments_offline RENAME TO payments")
        .await?;
    let res = app
        .request(Method::POST, &format!("/payment/success/{tran_id}"), None, None)
        .await?;
    assert_eq!(res.status, StatusCode::SEE_OTHER);

    let order = app
        .state
        .repos
        .orders
        .find_by_transaction_id(&tran_id)
        .await?
        .ok_or_else(|| anyhow::anyhow!("order vanished"))?;
    assert!(order.is_order_confirmed);
    assert_eq!(app.payments_for(&tran_id).await?.len(), 1);
    Ok(())
}

#[tokio::test]
async fn callback_for_unknown_transaction_changes_nothing() -> anyhow::Result<()> {
    let app = common::spawn_app().await?;
    let tran_id = place_gateway_order(&app).await?;

    let res = app
        .request(Method::POST, "/payment/success/does-not-exist", None, None)
        .await?;
    assert_eq!(res.status, StatusCode::NOT_FOUND);

    let order = app
        .state
        .repos
        .orders
        .find_by_transaction_id(&tran_id)
        .await?
        .ok_or_else(|| anyhow::anyhow!("order vanished"))?;
    assert!(!order.is_order_confirmed);
    assert!(app.state.repos.payments.list(None).await?.is_empty());
    Ok(())
}

#[tokio::test]
async fn gateway_failure_stores_no_order() -> anyhow::Result<()> {
    let app = common::spawn_app().await?;

    app.gateway.set_reply(GatewayReply::Fail);
    let res = app.post("/order", order_body("SSL-Commerz")).await?;
    assert_eq!(res.status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(res.body["error"], "Error initializing SSLCommerz");

    app.gateway.set_reply(GatewayReply::NoUrl);
    let res = app.post("/order", order_body("SSL-Commerz")).await?;
    assert_eq!(res.status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(res.body["error"], "Failed to get GatewayPageURL");

    assert!(app.state.repos.orders.list(None).await?.is_empty());
    Ok(())
}

#[tokio::test]
async fn order_patch_cannot_touch_confirmation() -> anyhow::Result<()> {
    let app = common::spawn_app().await?;
    let tran_id = place_gateway_order(&app).await?;
    app.request(Method::POST, &format!("/payment/success/{tran_id}"), None, None)
        .await?;

    let res = app
        .patch(
            "/order/a@x.com",
            json!({ "isDelivered": true, "paymentMethod": "card", "isOrderConfirmed": false }),
        )
        .await?;
    assert_eq!(res.status, StatusCode::OK);
    assert_eq!(res.body["modifiedCount"], 1);

    let res = app.get("/order/a@x.com").await?;
    assert_eq!(res.body["isOrderConfirmed"], true);
    assert_eq!(res.body["isDelivered"], true);
    assert_eq!(res.body["paymentMethod"], "card");

    let id = res.body["_id"].as_str().unwrap_or_default().to_string();
    let res = app
        .patch(&format!("/order/{id}"), json!({ "isDelivered": false }))
        .await?;
    assert_eq!(res.body["modifiedCount"], 1);
    let res = app.get("/order/a@x.com").await?;
    assert_eq!(res.body["isOrderConfirmed"], true);
    assert_eq!(res.body["isDelivered"], false);

    let res = app.delete(&format!("/order/{id}")).await?;
    assert_eq!(res.body["deletedCount"], 1);
    let res = app.get("/order/a@x.com").await?;
    assert_eq!(res.body, Value::Null);
    Ok(())
}

#[tokio::test]
async fn card_intent_uses_minor_units() -> anyhow::Result<()> {
    let app = common::spawn_app().await?;

    let res = app
        .post("/create-payment-intent", json!({ "price": 19.99 }))
        .await?;
    assert_eq!(res.status, StatusCode::OK);
    assert_eq!(res.body["clientSecret"], "pi_test_secret_1999");
    let calls = app.cards.amounts.lock().unwrap().clone();
    assert_eq!(calls, vec![(1999, "usd".to_string())]);

    let res = app.post("/create-payment-intent", json!({ "price": 0 })).await?;
    assert_eq!(res.status, StatusCode::BAD_REQUEST);
    Ok(())
}

#[tokio::test]
async fn recorded_payments_are_listed_by_email() -> anyhow::Result<()> {
    let app = common::spawn_app().await?;

    let res = app
        .post(
            "/payment",
            json!({ "email": "a@x.com", "price": 12.0, "transactionId": "pi_1", "productItemIds": [], "status": "succeeded" }),
        )
        .await?;
    assert!(res.body["insertedId"].is_string());
    app.post("/payment", json!({ "email": "b@x.com", "price": 3.0 }))
        .await?;

    let res = app.get("/payment?email=a@x.com").await?;
    assert_eq!(res.body.as_array().map(Vec::len), Some(1));
    assert_eq!(res.body[0]["transactionId"], "pi_1");

    let res = app.get("/payment").await?;
    assert_eq!(res.body.as_array().map(Vec::len), Some(2));
    Ok(())
}
