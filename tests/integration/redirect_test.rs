//! Integration tests for short-link redirects and the ambient HTTP stack.

mod helpers;

use axum::http::StatusCode;

use helpers::{BROWSER_UA, CRAWLER_UA, TestApp, test_config};

#[tokio::test]
async fn test_browser_is_redirected_to_long_form_url() {
    let app = TestApp::new();
    let id = app.share_id(1);

    let response = app.get(&format!("/s/{id}"), BROWSER_UA).await;

    assert_eq!(response.status, StatusCode::FOUND);
    assert_eq!(
        response.header("location"),
        Some(format!("https://files.example.com/home?path=sharehub%3A%2F%2F{id}%40share").as_str())
    );
}

#[tokio::test]
async fn test_redirect_carries_password_sub_path_and_query() {
    let app = TestApp::new();
    let id = app.share_id(2);

    let response = app
        .get(
            &format!("/s/{id}/letmein?path=/2025/../beach.jpg&utm_source=chat&utm_source=mail"),
            BROWSER_UA,
        )
        .await;

    assert_eq!(response.status, StatusCode::FOUND);
    assert_eq!(
        response.header("location"),
        Some(
            format!(
                "https://files.example.com/home?path=sharehub%3A%2F%2F{id}%3Aletmein%40share%2Fbeach.jpg\
                 &utm_source=chat&utm_source=mail"
            )
            .as_str()
        )
    );
}

#[tokio::test]
async fn test_redirect_does_not_check_the_share() {
    let app = TestApp::new();

    let response = app.get("/s/whatever", BROWSER_UA).await;

    assert_eq!(response.status, StatusCode::FOUND);
    assert_eq!(
        response.header("location"),
        Some("https://files.example.com/home?path=sharehub%3A%2F%2Fwhatever%40share")
    );
}

#[tokio::test]
async fn test_redirect_honours_site_prefix_and_route() {
    let mut config = test_config();
    config.site.url = "https://example.com/files/".to_string();
    config.preview.long_url_route = "/app".to_string();
    let app = TestApp::with_config(config);
    let id = app.share_id(1);

    let response = app.get(&format!("/s/{id}"), BROWSER_UA).await;
    assert_eq!(
        response.header("location"),
        Some(format!("https://example.com/files/app?path=sharehub%3A%2F%2F{id}%40share").as_str())
    );

    let crawler = app
        .get(&format!("/app?path=sharehub%3A%2F%2F{id}%40share"), CRAWLER_UA)
        .await;
    assert_eq!(crawler.status, StatusCode::OK);
}

#[tokio::test]
async fn test_preview_redirect_target_is_escaped_in_document() {
    let app = TestApp::new();
    let id = app.share_id(1);

    let response = app
        .get(&format!("/s/{id}?ref=%22%3C%2Fscript%3E"), CRAWLER_UA)
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body.matches("</script>").count(), 1);
    assert!(response.body.contains(&format!(
        "window.location.href = \"https://files.example.com/home?path=sharehub%3A%2F%2F{id}%40share\\u0026ref=%22%3C%2Fscript%3E\";"
    )));
}

#[tokio::test]
async fn test_request_id_and_health() {
    let app = TestApp::new();

    let response = app.get("/api/health", BROWSER_UA).await;

    assert_eq!(response.status, StatusCode::OK);
    assert!(response.header("x-request-id").is_some_and(|id| !id.is_empty()));
    let body = response.json();
    assert_eq!(body["success"], true);
    assert_eq!(body["data"]["status"], "ok");
}

#[tokio::test]
async fn test_unknown_route() {
    let app = TestApp::new();
    let response = app.get("/nope", BROWSER_UA).await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
}
