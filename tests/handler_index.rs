mod common;

use axum::{Router, routing::get};
use axum_test::TestServer;
use snaplink::web::flash::{Flash, FlashMessage};
use snaplink::web::handlers::{index_handler, shorten_handler};

fn test_app() -> TestServer {
    let (state, _store) = common::create_test_state();
    let app = Router::new()
        .route("/", get(index_handler).post(shorten_handler))
        .with_state(state);

    TestServer::new(app).unwrap()
}

#[tokio::test]
async fn test_index_renders_form() {
    let server = test_app();

    let response = server.get("/").await;

    assert_eq!(response.status_code(), 200);

    let body = response.text();
    assert!(body.contains("<form"));
    assert!(body.contains("name=\"url\""));
    assert!(body.contains("name=\"custom_code\""));
}

#[tokio::test]
async fn test_index_shows_and_clears_flash() {
    let server = test_app();

    let flash = Flash::new(common::TEST_SECRET);
    let cookie = flash.set_cookie(&FlashMessage::error("Test flash message"));
    let cookie_pair = cookie.to_str().unwrap().split(';').next().unwrap().to_string();

    let response = server.get("/").add_header("Cookie", cookie_pair).await;

    assert_eq!(response.status_code(), 200);
    assert!(response.text().contains("Test flash message"));

    // The one-shot cookie is cleared by the page that displays it.
    let set_cookie = response.header("set-cookie");
    assert!(set_cookie.to_str().unwrap().contains("Max-Age=0"));
}

#[tokio::test]
async fn test_index_ignores_forged_flash() {
    let server = test_app();

    let forged = Flash::new("some-other-secret");
    let cookie = forged.set_cookie(&FlashMessage::error("Forged message"));
    let cookie_pair = cookie.to_str().unwrap().split(';').next().unwrap().to_string();

    let response = server.get("/").add_header("Cookie", cookie_pair).await;

    assert_eq!(response.status_code(), 200);
    assert!(!response.text().contains("Forged message"));
}

#[tokio::test]
async fn test_flash_round_trip_through_failed_submission() {
    let server = test_app();

    let post = server
        .post("/")
        .add_header("Host", "s.example.com")
        .form(&[("url", "http://")])
        .await;
    assert_eq!(post.status_code(), 303);

    let set_cookie = post.header("set-cookie");
    let cookie_pair = set_cookie
        .to_str()
        .unwrap()
        .split(';')
        .next()
        .unwrap()
        .to_string();

    let get = server.get("/").add_header("Cookie", cookie_pair).await;

    assert_eq!(get.status_code(), 200);
    assert!(
        get.text()
            .contains("Please enter a valid URL (e.g., https://example.com)")
    );
}
