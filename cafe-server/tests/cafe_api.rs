//! Cafe API 接口契约测试
//!
//! 通过 tower 的 oneshot 直接调用路由器，覆盖每个路由的
//! 成功/失败信封和状态码。

use axum::Router;
use axum::body::Body;
use cafe_server::{Config, ServerState, api};
use http::{Request, StatusCode, header};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tempfile::TempDir;
use tower::ServiceExt;

const TEST_API_KEY: &str = "test-delete-key";

async fn test_app(dir: &TempDir) -> Router {
    let db_path = dir.path().join("cafes.db");
    let mut config = Config::with_overrides(db_path.to_string_lossy(), 0);
    config.api_key = TEST_API_KEY.to_string();
    let state = ServerState::initialize(&config)
        .await
        .expect("failed to initialize test database");
    api::build_app().with_state(state)
}

fn sample_payload(name: &str, location: &str) -> Value {
    json!({
        "name": name,
        "map_url": "https://maps.example.com/cafe",
        "img_url": "https://img.example.com/cafe.jpg",
        "location": location,
        "seats": "20-30",
        "has_toilet": true,
        "has_wifi": true,
        "has_sockets": false,
        "can_take_calls": false,
    })
}

async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, body)
}

async fn get(app: &Router, uri: &str) -> (StatusCode, Value) {
    send(app, Request::builder().uri(uri).body(Body::empty()).unwrap()).await
}

async fn post_json(app: &Router, uri: &str, payload: &Value) -> (StatusCode, Value) {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(serde_json::to_vec(payload).unwrap()))
        .unwrap();
    send(app, request).await
}

async fn request_without_body(app: &Router, method: &str, uri: &str) -> (StatusCode, Value) {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    send(app, request).await
}

// ==================
// GET / 和 /health
// ==================

#[tokio::test]
async fn test_home_serves_html() {
    let dir = TempDir::new().unwrap();
    let app = test_app(&dir).await;

    let response = app
        .clone()
        .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let html = String::from_utf8(bytes.to_vec()).unwrap();
    assert!(html.contains("Cafe"));
}

#[tokio::test]
async fn test_health() {
    let dir = TempDir::new().unwrap();
    let app = test_app(&dir).await;

    let (status, body) = get(&app, "/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
    assert_eq!(body["database"], "ok");
}

// ==================
// GET /cafes
// ==================

#[tokio::test]
async fn test_list_empty() {
    let dir = TempDir::new().unwrap();
    let app = test_app(&dir).await;

    let (status, body) = get(&app, "/cafes").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["cafes"], json!([]));
}

#[tokio::test]
async fn test_add_then_list_round_trip() {
    let dir = TempDir::new().unwrap();
    let app = test_app(&dir).await;

    let payload = sample_payload("Mild Grind", "Peckham");
    let (status, body) = post_json(&app, "/add", &payload).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body["response"]["success"],
        "Successfully added new Cafe to the database."
    );

    let (status, body) = get(&app, "/cafes").await;
    assert_eq!(status, StatusCode::OK);
    let cafes = body["cafes"].as_array().unwrap();
    assert_eq!(cafes.len(), 1);
    let cafe = &cafes[0];
    // 字段逐一回读，id 由库分配，coffee_price 创建时为空
    assert!(cafe["id"].as_i64().unwrap() > 0);
    assert_eq!(cafe["name"], "Mild Grind");
    assert_eq!(cafe["map_url"], payload["map_url"]);
    assert_eq!(cafe["img_url"], payload["img_url"]);
    assert_eq!(cafe["location"], "Peckham");
    assert_eq!(cafe["seats"], "20-30");
    assert_eq!(cafe["has_toilet"], true);
    assert_eq!(cafe["has_wifi"], true);
    assert_eq!(cafe["has_sockets"], false);
    assert_eq!(cafe["can_take_calls"], false);
    assert_eq!(cafe["coffee_price"], Value::Null);
}

// ==================
// POST /add 校验
// ==================

#[tokio::test]
async fn test_add_missing_field() {
    let dir = TempDir::new().unwrap();
    let app = test_app(&dir).await;

    let mut payload = sample_payload("Mild Grind", "Peckham");
    payload["location"] = json!("");

    let (status, body) = post_json(&app, "/add", &payload).await;
    // 校验失败也返回 200，这是沿用的契约
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body["error"]["Missing Data"],
        "Please provide all the required information."
    );
    assert_eq!(
        body["error"]["message"],
        "Please provide all the required information."
    );

    // 没有留下记录
    let (_, body) = get(&app, "/cafes").await;
    assert_eq!(body["cafes"], json!([]));
}

#[tokio::test]
async fn test_add_absent_field_equals_empty() {
    let dir = TempDir::new().unwrap();
    let app = test_app(&dir).await;

    let mut payload = sample_payload("Mild Grind", "Peckham");
    payload.as_object_mut().unwrap().remove("seats");

    let (status, body) = post_json(&app, "/add", &payload).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body["error"]["Missing Data"].is_string());
}

#[tokio::test]
async fn test_add_no_feature_selected() {
    let dir = TempDir::new().unwrap();
    let app = test_app(&dir).await;

    let mut payload = sample_payload("Mild Grind", "Peckham");
    payload["has_toilet"] = json!(false);
    payload["has_wifi"] = json!(false);

    let (status, body) = post_json(&app, "/add", &payload).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body["error"]["Invalid Data"],
        "At least one feature (sockets, toilet, wifi, calls) must be selected."
    );

    let (_, body) = get(&app, "/cafes").await;
    assert_eq!(body["cafes"], json!([]));
}

#[tokio::test]
async fn test_add_coerces_truthy_flags() {
    let dir = TempDir::new().unwrap();
    let app = test_app(&dir).await;

    let mut payload = sample_payload("Mild Grind", "Peckham");
    payload["has_toilet"] = json!(0);
    payload["has_wifi"] = json!("yes");
    payload["has_sockets"] = json!(1);

    let (status, _) = post_json(&app, "/add", &payload).await;
    assert_eq!(status, StatusCode::OK);

    let (_, body) = get(&app, "/cafes").await;
    let cafe = &body["cafes"][0];
    assert_eq!(cafe["has_toilet"], false);
    assert_eq!(cafe["has_wifi"], true);
    assert_eq!(cafe["has_sockets"], true);
}

#[tokio::test]
async fn test_add_duplicate_name_conflict() {
    let dir = TempDir::new().unwrap();
    let app = test_app(&dir).await;

    let (status, _) = post_json(&app, "/add", &sample_payload("Mild Grind", "Peckham")).await;
    assert_eq!(status, StatusCode::OK);

    let (status, body) =
        post_json(&app, "/add", &sample_payload("Mild Grind", "Hackney")).await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert!(body["error"]["Conflict"].is_string());

    let (_, body) = get(&app, "/cafes").await;
    assert_eq!(body["cafes"].as_array().unwrap().len(), 1);
}

// ==================
// GET /random
// ==================

#[tokio::test]
async fn test_random_empty() {
    let dir = TempDir::new().unwrap();
    let app = test_app(&dir).await;

    let (status, body) = get(&app, "/random").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "No cafes found in the database.");
}

#[tokio::test]
async fn test_random_returns_member() {
    let dir = TempDir::new().unwrap();
    let app = test_app(&dir).await;

    for i in 0..3 {
        let (status, _) =
            post_json(&app, "/add", &sample_payload(&format!("Cafe {i}"), "Soho")).await;
        assert_eq!(status, StatusCode::OK);
    }

    for _ in 0..5 {
        let (status, body) = get(&app, "/random").await;
        assert_eq!(status, StatusCode::OK);
        let name = body["cafe"]["name"].as_str().unwrap();
        assert!(name.starts_with("Cafe "));
    }
}

// ==================
// GET /search
// ==================

#[tokio::test]
async fn test_search_hit_and_miss() {
    let dir = TempDir::new().unwrap();
    let app = test_app(&dir).await;

    post_json(&app, "/add", &sample_payload("Le Central", "Paris")).await;

    let (status, body) = get(&app, "/search?loc=Paris").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["cafe"]["name"], "Le Central");

    // 大小写敏感：paris != Paris
    let (status, body) = get(&app, "/search?loc=paris").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body["error"]["Not Found"],
        "Sorry, we don't have a cafe at that location."
    );

    // loc 缺失等同于未命中
    let (status, body) = get(&app, "/search").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body["error"]["Not Found"].is_string());
}

// ==================
// PATCH /update_price
// ==================

#[tokio::test]
async fn test_update_price() {
    let dir = TempDir::new().unwrap();
    let app = test_app(&dir).await;

    post_json(&app, "/add", &sample_payload("Mild Grind", "Peckham")).await;
    let (_, body) = get(&app, "/cafes").await;
    let id = body["cafes"][0]["id"].as_i64().unwrap();

    // £ 的 percent 编码是 %C2%A3
    let (status, body) =
        request_without_body(&app, "PATCH", &format!("/update_price/{id}?new_price=%C2%A32.50"))
            .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["response"]["success"], "Successfully updated the price.");

    let (_, body) = get(&app, "/cafes").await;
    let cafe = &body["cafes"][0];
    assert_eq!(cafe["coffee_price"], "£2.50");
    assert_eq!(cafe["name"], "Mild Grind");
}

#[tokio::test]
async fn test_update_price_overlong_value() {
    let dir = TempDir::new().unwrap();
    let app = test_app(&dir).await;

    post_json(&app, "/add", &sample_payload("Mild Grind", "Peckham")).await;
    let (_, body) = get(&app, "/cafes").await;
    let id = body["cafes"][0]["id"].as_i64().unwrap();

    // 超过 250 字符的价格在进入数据库之前被拒绝
    let long_price = "9".repeat(300);
    let (status, body) =
        request_without_body(&app, "PATCH", &format!("/update_price/{id}?new_price={long_price}"))
            .await;
    assert_eq!(status, StatusCode::OK);
    assert!(body["error"]["Invalid Data"].is_string());

    // 价格保持未设置
    let (_, body) = get(&app, "/cafes").await;
    assert_eq!(body["cafes"][0]["coffee_price"], Value::Null);
}

#[tokio::test]
async fn test_update_price_unknown_id() {
    let dir = TempDir::new().unwrap();
    let app = test_app(&dir).await;

    let (status, body) =
        request_without_body(&app, "PATCH", "/update_price/9999?new_price=3.00").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(
        body["error"]["Not Found"],
        "Sorry, a cafe with that id was not found in the database."
    );
}

// ==================
// DELETE /report-closed
// ==================

#[tokio::test]
async fn test_delete_with_wrong_key() {
    let dir = TempDir::new().unwrap();
    let app = test_app(&dir).await;

    post_json(&app, "/add", &sample_payload("Mild Grind", "Peckham")).await;
    let (_, body) = get(&app, "/cafes").await;
    let id = body["cafes"][0]["id"].as_i64().unwrap();

    let (status, body) =
        request_without_body(&app, "DELETE", &format!("/report-closed/{id}?api-key=wrong")).await;
    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(
        body["error"]["Forbidden"],
        "Sorry, that's not allowed. Make sure you have the correct api_key."
    );

    // 密钥缺失同样 403
    let (status, _) =
        request_without_body(&app, "DELETE", &format!("/report-closed/{id}")).await;
    assert_eq!(status, StatusCode::FORBIDDEN);

    // 记录保持不变
    let (_, body) = get(&app, "/cafes").await;
    assert_eq!(body["cafes"].as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_delete_with_correct_key() {
    let dir = TempDir::new().unwrap();
    let app = test_app(&dir).await;

    post_json(&app, "/add", &sample_payload("Mild Grind", "Peckham")).await;
    let (_, body) = get(&app, "/cafes").await;
    let id = body["cafes"][0]["id"].as_i64().unwrap();

    let (status, body) = request_without_body(
        &app,
        "DELETE",
        &format!("/report-closed/{id}?api-key={TEST_API_KEY}"),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body["response"]["success"],
        "Successfully deleted the cafe from the database."
    );

    let (_, body) = get(&app, "/cafes").await;
    assert_eq!(body["cafes"], json!([]));
}

#[tokio::test]
async fn test_delete_unknown_id_with_correct_key() {
    let dir = TempDir::new().unwrap();
    let app = test_app(&dir).await;

    let (status, body) = request_without_body(
        &app,
        "DELETE",
        &format!("/report-closed/9999?api-key={TEST_API_KEY}"),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(
        body["error"]["Not Found"],
        "Sorry, a cafe with that id was not found in the database."
    );
}
