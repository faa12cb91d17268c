//! The full shopper flow: admin creates a food, a shopper carts it, the
//! admin deletes it, and the cart keeps its stale snapshot.

#![allow(clippy::unwrap_used)]

use axum::http::StatusCode;
use rust_decimal::Decimal;
use serde_json::Value;

use ladle_cart::{CartState, FoodSnapshot, MemoryStorage};
use ladle_core::{EmbeddedImage, FoodId, Price};
use ladle_integration_tests::{delete, food_form, get, png_bytes, send, test_app};

fn snapshot_from_json(food: &Value) -> FoodSnapshot {
    FoodSnapshot {
        id: food["id"].as_str().unwrap().parse::<FoodId>().unwrap(),
        name: food["name"].as_str().unwrap().to_owned(),
        price: Price::parse(food["price"].as_str().unwrap()).unwrap(),
        image: EmbeddedImage::parse(food["image"].as_str().unwrap()).unwrap(),
    }
}

#[tokio::test]
async fn test_cart_keeps_stale_snapshot_after_catalog_delete() {
    let app = test_app().await;

    // Admin: create the listing.
    let (status, body) = send(
        &app,
        food_form(
            "POST",
            "/food",
            Some("Pizza"),
            Some("9.99"),
            None,
            Some(&png_bytes(100, 100)),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    let pizza = snapshot_from_json(&body["data"]);

    // Shopper: browse and cart it twice.
    let (status, listing) = send(&app, get("/food")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(listing["data"].as_array().unwrap().len(), 1);

    let mut cart = CartState::open(MemoryStorage::default());
    cart.add_item(&pizza);
    cart.add_item(&pizza);

    assert_eq!(cart.lines().len(), 1);
    assert_eq!(cart.lines()[0].quantity, 2);
    assert_eq!(cart.total(), "19.98".parse::<Decimal>().unwrap());

    // Admin: delete the listing.
    let (status, _) = send(&app, delete(&format!("/food/{}", pizza.id))).await;
    assert_eq!(status, StatusCode::OK);

    let (status, _) = send(&app, get(&format!("/food/{}", pizza.id))).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    // The cart still shows what the shopper selected; a line is a
    // snapshot, not a live reference into the catalog.
    assert_eq!(cart.lines().len(), 1);
    assert_eq!(cart.lines()[0].quantity, 2);
    assert_eq!(cart.lines()[0].food_id, pizza.id);
    assert_eq!(cart.total(), "19.98".parse::<Decimal>().unwrap());
}
