mod common;

use axum::http::{Method, StatusCode};
use serde_json::{Value, json};
use uuid::Uuid;

#[tokio::test]
async fn product_patch_replaces_every_field() -> anyhow::Result<()> {
    let app = common::spawn_app().await?;
    let admin = app.admin_token("boss@x.com").await?;

    let res = app
        .request(
            Method::POST,
            "/products",
            Some(&admin),
            Some(json!({
                "name": "Milk",
                "oldPrice": 3.0,
                "newPrice": 2.5,
                "category": "dairy",
                "brand": "Aarong",
                "stock_quantity": 40,
                "supplier": { "name": "Farm", "contactInfo": { "phone": "017", "email": "farm@x.com" } }
            })),
        )
        .await?;
    assert_eq!(res.status, StatusCode::OK);
    let id = res.body["insertedId"].as_str().unwrap_or_default().to_string();

    let res = app
        .request(
            Method::PATCH,
            &format!("/products/{id}"),
            Some(&admin),
            Some(json!({
                "name": "Low-fat milk",
                "newPrice": 2.0,
                "category": "dairy",
                "unit_of_measure": "litre"
            })),
        )
        .await?;
    assert_eq!(res.body["modifiedCount"], 1);

    let res = app.get(&format!("/products/{id}")).await?;
    let product = &res.body;
    assert_eq!(product["_id"], id.as_str());
    assert_eq!(product["name"], "Low-fat milk");
    assert_eq!(product["newPrice"], 2.0);
    assert_eq!(product["unit_of_measure"], "litre");
    assert_eq!(product["oldPrice"], Value::Null);
    assert_eq!(product["brand"], Value::Null);
    assert_eq!(product["stock_quantity"], Value::Null);
    assert_eq!(
        product["supplier"],
        json!({ "name": "", "contactInfo": { "phone": "", "email": "" } })
    );
    Ok(())
}

#[tokio::test]
async fn product_patch_without_name_is_rejected() -> anyhow::Result<()> {
    let app = common::spawn_app().await?;
    let admin = app.admin_token("boss@x.com").await?;

    let res = app
        .request(
            Method::POST,
            "/products",
            Some(&admin),
            Some(json!({ "name": "Milk", "newPrice": 2.5 })),
        )
        .await?;
    let id = res.body["insertedId"].as_str().unwrap_or_default().to_string();

    for body in [json!({ "newPrice": 1.0 }), json!({ "name": "  ", "newPrice": 1.0 })] {
        let res = app
            .request(Method::PATCH, &format!("/products/{id}"), Some(&admin), Some(body))
            .await?;
        assert_eq!(res.status, StatusCode::BAD_REQUEST);
        assert_eq!(res.body["message"], "name is required");
    }

    let res = app
        .request(Method::POST, "/products", Some(&admin), Some(json!({ "newPrice": 1.0 })))
        .await?;
    assert_eq!(res.status, StatusCode::BAD_REQUEST);

    let res = app.get(&format!("/products/{id}")).await?;
    assert_eq!(res.body["name"], "Milk");
    assert_eq!(res.body["newPrice"], 2.5);
    assert_eq!(app.state.repos.products.list().await?.len(), 1);
    Ok(())
}

#[tokio::test]
async fn product_writes_are_admin_only() -> anyhow::Result<()> {
    let app = common::spawn_app().await?;
    app.register("a@x.com").await?;
    let shopper = app.token_for("a@x.com")?;

    let res = app.post("/products", json!({ "name": "Milk" })).await?;
    assert_eq!(res.status, StatusCode::UNAUTHORIZED);

    let res = app
        .request(Method::POST, "/products", Some(&shopper), Some(json!({ "name": "Milk" })))
        .await?;
    assert_eq!(res.status, StatusCode::FORBIDDEN);
    assert!(app.state.repos.products.list().await?.is_empty());
    Ok(())
}

#[tokio::test]
async fn missing_product_is_null_and_bad_id_is_rejected() -> anyhow::Result<()> {
    let app = common::spawn_app().await?;

    let res = app.get(&format!("/products/{}", Uuid::new_v4())).await?;
    assert_eq!(res.status, StatusCode::OK);
    assert_eq!(res.body, Value::Null);

    let res = app.get("/products/abc").await?;
    assert_eq!(res.status, StatusCode::BAD_REQUEST);
    Ok(())
}

#[tokio::test]
async fn cart_lists_exactly_the_owners_items() -> anyhow::Result<()> {
    let app = common::spawn_app().await?;

    for (email, name) in [("a@x.com", "Milk"), ("a@x.com", "Eggs"), ("b@x.com", "Rice")] {
        let res = app
            .post(
                "/carts",
                json!({ "email": email, "productId": "p-1", "name": name, "count": 2, "price": 4.5 }),
            )
            .await?;
        assert_eq!(res.status, StatusCode::OK);
    }

    let res = app.get("/carts?email=a@x.com").await?;
    let items = res.body.as_array().cloned().unwrap_or_default();
    assert_eq!(items.len(), 2);
    let mut names: Vec<&str> = items.iter().filter_map(|i| i["name"].as_str()).collect();
    names.sort_unstable();
    assert_eq!(names, ["Eggs", "Milk"]);

    let line = items[0]["_id"].as_str().unwrap_or_default();
    let res = app
        .patch(&format!("/carts/{line}"), json!({ "count": 5, "price": 11.25 }))
        .await?;
    assert_eq!(res.body["modifiedCount"], 1);

    let res = app.delete("/carts").await?;
    assert_eq!(res.status, StatusCode::BAD_REQUEST);
    assert_eq!(app.state.repos.carts.list_by_email("b@x.com").await?.len(), 1);

    let res = app.delete("/carts?email=a@x.com").await?;
    assert_eq!(res.body["deletedCount"], 2);
    assert_eq!(app.state.repos.carts.list_by_email("b@x.com").await?.len(), 1);
    Ok(())
}

#[tokio::test]
async fn cart_count_is_stored_as_sent() -> anyhow::Result<()> {
    let app = common::spawn_app().await?;

    let res = app
        .post(
            "/carts",
            json!({ "email": "a@x.com", "productId": "p-1", "name": "Milk", "count": 0, "price": 0.0 }),
        )
        .await?;
    assert_eq!(res.status, StatusCode::OK);
    let line = res.body["insertedId"].as_str().unwrap_or_default().to_string();

    let res = app
        .patch(&format!("/carts/{line}"), json!({ "count": 3, "price": 7.5 }))
        .await?;
    assert_eq!(res.body["modifiedCount"], 1);

    // Decrementing the last unit leaves a zero line rather than an error.
    let res = app
        .patch(&format!("/carts/{line}"), json!({ "count": 0, "price": 0.0 }))
        .await?;
    assert_eq!(res.status, StatusCode::OK);
    assert_eq!(res.body["modifiedCount"], 1);

    let res = app.get("/carts?email=a@x.com").await?;
    assert_eq!(res.body[0]["count"], 0);
    Ok(())
}

#[tokio::test]
async fn favorites_and_addresses_are_per_owner() -> anyhow::Result<()> {
    let app = common::spawn_app().await?;

    let res = app
        .post("/favorites", json!({ "email": "a@x.com", "_id": "p-9", "name": "Mango" }))
        .await?;
    let favorite = res.body["insertedId"].as_str().unwrap_or_default().to_string();
    app.post("/favorites", json!({ "email": "b@x.com", "name": "Lychee" }))
        .await?;

    let res = app.get("/favorites?email=a@x.com").await?;
    assert_eq!(res.body.as_array().map(Vec::len), Some(1));
    assert_eq!(res.body[0]["productId"], "p-9");

    let res = app.delete(&format!("/favorites/{favorite}")).await?;
    assert_eq!(res.body["deletedCount"], 1);

    app.post(
        "/address",
        json!({ "email": "a@x.com", "district": "Sylhet", "postCode": "3100", "phone": "018" }),
    )
    .await?;
    let res = app.get("/address?email=a@x.com").await?;
    assert_eq!(res.body[0]["district"], "Sylhet");
    assert_eq!(res.body[0]["postCode"], "3100");
    Ok(())
}

#[tokio::test]
async fn coupons_are_read_by_all_and_managed_by_admins() -> anyhow::Result<()> {
    let app = common::spawn_app().await?;
    let admin = app.admin_token("boss@x.com").await?;

    let res = app
        .request(
            Method::POST,
            "/coupon",
            Some(&admin),
            Some(json!({ "code": "EID10", "discount": 10.0, "terms": "min 500" })),
        )
        .await?;
    let id = res.body["insertedId"].as_str().unwrap_or_default().to_string();

    let res = app.get("/coupon").await?;
    assert_eq!(res.body[0]["code"], "EID10");

    let res = app.delete(&format!("/coupon/{id}")).await?;
    assert_eq!(res.status, StatusCode::UNAUTHORIZED);

    let res = app
        .request(Method::DELETE, &format!("/coupon/{id}"), Some(&admin), None)
        .await?;
    assert_eq!(res.body["deletedCount"], 1);
    Ok(())
}

#[tokio::test]
async fn checkout_is_read_and_patched_by_email() -> anyhow::Result<()> {
    let app = common::spawn_app().await?;

    let res = app.get("/checkout/a@x.com").await?;
    assert_eq!(res.body, Value::Null);

    let res = app
        .post(
            "/checkout",
            json!({
                "email": "a@x.com",
                "cart": [{ "_id": "p-1", "name": "Milk", "count": 2, "price": 2.5 }],
                "subtotal": 5.0,
                "total": 5.0
            }),
        )
        .await?;
    let id = res.body["insertedId"].as_str().unwrap_or_default().to_string();

    let res = app
        .patch(
            "/checkout/a@x.com",
            json!({ "subtotal": 5.0, "discount": 10.0, "discountPrice": 0.5, "total": 4.5 }),
        )
        .await?;
    assert_eq!(res.body["modifiedCount"], 1);

    let res = app.get("/checkout/a@x.com").await?;
    assert_eq!(res.body["total"], 4.5);
    assert_eq!(res.body["discountPrice"], 0.5);
    assert_eq!(res.body["cart"][0]["productId"], "p-1");

    let res = app.get("/checkout").await?;
    assert_eq!(res.body.as_array().map(Vec::len), Some(1));

    let res = app.delete(&format!("/checkout/{id}")).await?;
    assert_eq!(res.body["deletedCount"], 1);
    Ok(())
}

#[tokio::test]
async fn reviews_round_trip() -> anyhow::Result<()> {
    let app = common::spawn_app().await?;

    app.post(
        "/reviews",
        json!({ "name": "A", "email": "a@x.com", "rating": 4.5, "details": "fresh" }),
    )
    .await?;
    let res = app.get("/reviews").await?;
    assert_eq!(res.body[0]["details"], "fresh");
    assert_eq!(res.body[0]["rating"], 4.5);
    Ok(())
}
