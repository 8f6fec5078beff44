//! HTTP-level integration tests for the manufacturer, model and car
//! endpoints.
//!
//! Uses Axum's tower::ServiceExt to send requests directly to the router
//! without an actual TCP listener.

mod common;

use axum::body::Body;
use axum::http::{header, Method, Request, StatusCode};
use common::{
    body_json, car_body, create, delete, get, manufacturer_body, model_body, post_json, put_json,
    seed_car,
};
use sqlx::PgPool;

// ---------------------------------------------------------------------------
// Manufacturers
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn create_manufacturer_returns_201_with_id(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = post_json(app, "/api/manufacturers", manufacturer_body("Acme")).await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert_eq!(json["success"], true);
    assert!(json["id"].is_number());
}

#[sqlx::test(migrations = "../db/migrations")]
async fn created_manufacturer_appears_in_list(pool: PgPool) {
    let id = create(&pool, "/api/manufacturers", manufacturer_body("Acme")).await;

    let response = get(common::build_test_app(pool), "/api/manufacturers").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(
        json,
        serde_json::json!([
            {"id": id, "name": "Acme", "country": "USA", "year_founded": 1990}
        ])
    );
}

#[sqlx::test(migrations = "../db/migrations")]
async fn update_manufacturer_replaces_all_fields(pool: PgPool) {
    let id = create(&pool, "/api/manufacturers", manufacturer_body("Acme")).await;

    let response = put_json(
        common::build_test_app(pool.clone()),
        &format!("/api/manufacturers/{id}"),
        serde_json::json!({"name": "Globex", "country": "Germany", "year_founded": 1955}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, serde_json::json!({"success": true}));

    let json = body_json(get(common::build_test_app(pool), "/api/manufacturers").await).await;
    assert_eq!(json[0]["name"], "Globex");
    assert_eq!(json[0]["country"], "Germany");
    assert_eq!(json[0]["year_founded"], 1955);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn delete_manufacturer_removes_it_from_list(pool: PgPool) {
    let id = create(&pool, "/api/manufacturers", manufacturer_body("Acme")).await;

    let response = delete(
        common::build_test_app(pool.clone()),
        &format!("/api/manufacturers/{id}"),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["success"], true);

    let json = body_json(get(common::build_test_app(pool), "/api/manufacturers").await).await;
    assert_eq!(json, serde_json::json!([]));
}

#[sqlx::test(migrations = "../db/migrations")]
async fn list_is_ordered_by_id_regardless_of_updates(pool: PgPool) {
    let first = create(&pool, "/api/manufacturers", manufacturer_body("Zeta")).await;
    let second = create(&pool, "/api/manufacturers", manufacturer_body("Alpha")).await;

    // Touch the first row last so any update-order bias would show.
    put_json(
        common::build_test_app(pool.clone()),
        &format!("/api/manufacturers/{first}"),
        manufacturer_body("Zeta II"),
    )
    .await;

    let json = body_json(get(common::build_test_app(pool), "/api/manufacturers").await).await;
    let ids: Vec<i64> = json
        .as_array()
        .unwrap()
        .iter()
        .map(|m| m["id"].as_i64().unwrap())
        .collect();
    assert_eq!(ids, vec![first, second]);
}

// ---------------------------------------------------------------------------
// Missing ids
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn update_of_missing_id_still_reports_success(pool: PgPool) {
    let response = put_json(
        common::build_test_app(pool),
        "/api/manufacturers/999999",
        manufacturer_body("Ghost"),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["success"], true);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn delete_of_missing_id_still_reports_success(pool: PgPool) {
    let response = delete(common::build_test_app(pool), "/api/cars/999999").await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["success"], true);
}

// ---------------------------------------------------------------------------
// Models and cars
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn model_list_includes_manufacturer_name(pool: PgPool) {
    let manufacturer_id = create(&pool, "/api/manufacturers", manufacturer_body("Acme")).await;
    let model_id = create(&pool, "/api/models", model_body(manufacturer_id, "Roadster")).await;

    let json = body_json(get(common::build_test_app(pool), "/api/models").await).await;
    assert_eq!(
        json,
        serde_json::json!([{
            "id": model_id,
            "name": "Roadster",
            "manufacturer": "Acme",
            "year": 2020,
            "body_type": "Coupe",
            "manufacturer_id": manufacturer_id,
        }])
    );
}

#[sqlx::test(migrations = "../db/migrations")]
async fn car_list_joins_model_and_manufacturer(pool: PgPool) {
    let car_id = seed_car(&pool).await;

    let json = body_json(get(common::build_test_app(pool), "/api/cars").await).await;
    let cars = json.as_array().unwrap();
    assert_eq!(cars.len(), 1);

    let car = &cars[0];
    assert_eq!(car["id"], car_id);
    assert_eq!(car["manufacturer"], "Acme");
    assert_eq!(car["model"], "Roadster");
    assert_eq!(car["color"], "Red");
    assert_eq!(car["price"], 1234567.5);
    assert_eq!(car["mileage"], 15000);
    assert_eq!(car["status"], "available");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn update_car_overwrites_every_field(pool: PgPool) {
    let car_id = seed_car(&pool).await;
    let cars = body_json(get(common::build_test_app(pool.clone()), "/api/cars").await).await;
    let model_id = cars[0]["model_id"].as_i64().unwrap();

    let response = put_json(
        common::build_test_app(pool.clone()),
        &format!("/api/cars/{car_id}"),
        serde_json::json!({
            "model_id": model_id,
            "color": "Blue",
            "price": 900.0,
            "year": 2019,
            "engine_type": "Electric",
            "transmission": "Automatic",
            "mileage": 0,
            "status": "sold",
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(get(common::build_test_app(pool), "/api/cars").await).await;
    let car = &json[0];
    assert_eq!(car["color"], "Blue");
    assert_eq!(car["price"], 900.0);
    assert_eq!(car["year"], 2019);
    assert_eq!(car["engine_type"], "Electric");
    assert_eq!(car["transmission"], "Automatic");
    assert_eq!(car["mileage"], 0);
    assert_eq!(car["status"], "sold");
}

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn create_with_missing_field_returns_422(pool: PgPool) {
    let response = post_json(
        common::build_test_app(pool.clone()),
        "/api/manufacturers",
        serde_json::json!({"name": "Acme", "country": "USA"}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body_json(response).await["code"], "VALIDATION_ERROR");

    // Nothing reached storage.
    let json = body_json(get(common::build_test_app(pool), "/api/manufacturers").await).await;
    assert_eq!(json, serde_json::json!([]));
}

#[sqlx::test(migrations = "../db/migrations")]
async fn create_with_wrong_field_type_returns_422(pool: PgPool) {
    let response = post_json(
        common::build_test_app(pool),
        "/api/manufacturers",
        serde_json::json!({"name": "Acme", "country": "USA", "year_founded": "nineteen"}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn negative_price_is_rejected(pool: PgPool) {
    let manufacturer_id = create(&pool, "/api/manufacturers", manufacturer_body("Acme")).await;
    let model_id = create(&pool, "/api/models", model_body(manufacturer_id, "Roadster")).await;

    let mut body = car_body(model_id);
    body["price"] = serde_json::json!(-1.0);

    let response = post_json(common::build_test_app(pool), "/api/cars", body).await;
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let json = body_json(response).await;
    assert_eq!(json["code"], "VALIDATION_ERROR");
    assert!(json["error"].as_str().unwrap().contains("price"));
}

#[sqlx::test(migrations = "../db/migrations")]
async fn price_with_fractional_cents_is_rejected(pool: PgPool) {
    let manufacturer_id = create(&pool, "/api/manufacturers", manufacturer_body("Acme")).await;
    let model_id = create(&pool, "/api/models", model_body(manufacturer_id, "Roadster")).await;

    let mut body = car_body(model_id);
    body["price"] = serde_json::json!(1234.567);

    let response = post_json(common::build_test_app(pool.clone()), "/api/cars", body).await;
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let json = body_json(response).await;
    assert_eq!(json["error"], "price: must have at most two decimal places");

    // Nothing was stored with a rounded price.
    let cars = body_json(get(common::build_test_app(pool), "/api/cars").await).await;
    assert_eq!(cars, serde_json::json!([]));
}

#[sqlx::test(migrations = "../db/migrations")]
async fn price_beyond_column_range_is_rejected(pool: PgPool) {
    let manufacturer_id = create(&pool, "/api/manufacturers", manufacturer_body("Acme")).await;
    let model_id = create(&pool, "/api/models", model_body(manufacturer_id, "Roadster")).await;

    let mut body = car_body(model_id);
    body["price"] = serde_json::json!(2e10);

    let response = post_json(common::build_test_app(pool), "/api/cars", body).await;
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let json = body_json(response).await;
    assert_eq!(json["code"], "VALIDATION_ERROR");
    assert_eq!(json["error"], "price: must not exceed 9999999999.99");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn largest_price_round_trips_exactly(pool: PgPool) {
    let manufacturer_id = create(&pool, "/api/manufacturers", manufacturer_body("Acme")).await;
    let model_id = create(&pool, "/api/models", model_body(manufacturer_id, "Roadster")).await;

    let mut body = car_body(model_id);
    body["price"] = serde_json::json!(9_999_999_999.99);
    create(&pool, "/api/cars", body).await;

    let cars = body_json(get(common::build_test_app(pool), "/api/cars").await).await;
    assert_eq!(cars[0]["price"], 9_999_999_999.99);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn negative_mileage_is_rejected_on_update(pool: PgPool) {
    let car_id = seed_car(&pool).await;
    let cars = body_json(get(common::build_test_app(pool.clone()), "/api/cars").await).await;

    let mut body = car_body(cars[0]["model_id"].as_i64().unwrap());
    body["mileage"] = serde_json::json!(-5);

    let response = put_json(
        common::build_test_app(pool),
        &format!("/api/cars/{car_id}"),
        body,
    )
    .await;
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn malformed_json_returns_400(pool: PgPool) {
    let request = Request::builder()
        .method(Method::POST)
        .uri("/api/manufacturers")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("{\"name\": "))
        .unwrap();

    let response = common::send(common::build_test_app(pool), request).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["code"], "BAD_REQUEST");
}

// ---------------------------------------------------------------------------
// Referential integrity
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn model_with_unknown_manufacturer_returns_409(pool: PgPool) {
    let response = post_json(
        common::build_test_app(pool),
        "/api/models",
        model_body(999999, "Orphan"),
    )
    .await;

    assert_eq!(response.status(), StatusCode::CONFLICT);
    assert_eq!(body_json(response).await["code"], "REFERENTIAL_INTEGRITY");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn deleting_referenced_manufacturer_returns_409(pool: PgPool) {
    let manufacturer_id = create(&pool, "/api/manufacturers", manufacturer_body("Acme")).await;
    create(&pool, "/api/models", model_body(manufacturer_id, "Roadster")).await;

    let response = delete(
        common::build_test_app(pool.clone()),
        &format!("/api/manufacturers/{manufacturer_id}"),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CONFLICT);

    // The manufacturer survives.
    let json = body_json(get(common::build_test_app(pool), "/api/manufacturers").await).await;
    assert_eq!(json.as_array().unwrap().len(), 1);
}
