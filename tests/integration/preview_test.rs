//! Integration tests for crawler previews on short links and the front-end
//! share route.

mod helpers;

use axum::http::StatusCode;

use helpers::{BROWSER_UA, CRAWLER_UA, TestApp, test_config};

fn og(property: &str, content: &str) -> String {
    format!(r#"<meta property="og:{property}" content="{content}">"#)
}

#[tokio::test]
async fn test_crawler_gets_file_preview() {
    let app = TestApp::new();
    let id = app.share_id(1);

    let response = app.get(&format!("/s/{id}"), CRAWLER_UA).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.header("content-type"), Some("text/html; charset=utf-8"));
    assert_eq!(response.header("cache-control"), Some("public, no-cache"));
    assert!(response.body.contains(&og("title", "report.pdf")));
    assert!(response.body.contains(&og("description", "1.50 MB · alice")));
    assert!(response.body.contains(&og("url", &format!("https://files.example.com/s/{id}"))));
    assert!(response.body.contains(&og("image", "https://files.example.com/static/icon-512.png")));
    assert!(response.body.contains(&og("site_name", "ShareHub")));
    assert!(!response.body.contains("alice@example.com"));
}

#[tokio::test]
async fn test_password_protected_folder() {
    let app = TestApp::new();
    let id = app.share_id(2);

    let locked = app.get(&format!("/s/{id}"), CRAWLER_UA).await;
    assert_eq!(locked.status, StatusCode::OK);
    assert!(locked.body.contains(&og("description", "Password Required")));
    assert!(!locked.body.contains("Photos"));

    let wrong = app.get(&format!("/s/{id}/nope"), CRAWLER_UA).await;
    assert!(wrong.body.contains(&og("description", "Password Required")));

    let unlocked = app.get(&format!("/s/{id}/letmein"), CRAWLER_UA).await;
    assert!(unlocked.body.contains(&og("title", "Photos")));
    assert!(unlocked.body.contains(&og("description", "Folder · alice")));

    let owner = app.get_as(&format!("/s/{id}"), CRAWLER_UA, Some(1)).await;
    assert!(owner.body.contains(&og("title", "Photos")));
}

#[tokio::test]
async fn test_expired_and_invalid_shares() {
    let app = TestApp::new();

    let expired = app.get(&format!("/s/{}", app.share_id(3)), CRAWLER_UA).await;
    assert_eq!(expired.status, StatusCode::OK);
    assert!(expired.body.contains(&og("title", "ShareHub")));
    assert!(expired.body.contains(&og("description", "Share Expired")));
    assert!(!expired.body.contains("old.zip"));

    let invalid = app.get("/s/not-a-share", CRAWLER_UA).await;
    assert!(invalid.body.contains(&og("description", "Invalid Link")));

    let missing = app.get(&format!("/s/{}", app.share_id(404)), CRAWLER_UA).await;
    assert!(missing.body.contains(&og("description", "Invalid Link")));
}

#[tokio::test]
async fn test_front_end_route_interception() {
    let app = TestApp::new();
    let id = app.share_id(1);

    for route in ["/home", "/home/"] {
        let response = app
            .get(&format!("{route}?path=sharehub%3A%2F%2F{id}%40share"), CRAWLER_UA)
            .await;
        assert_eq!(response.status, StatusCode::OK, "{route}");
        assert!(response.body.contains(&og("title", "report.pdf")));
    }

    let browser = app
        .get(&format!("/home?path=sharehub%3A%2F%2F{id}%40share"), BROWSER_UA)
        .await;
    assert_eq!(browser.status, StatusCode::NOT_FOUND);

    let other_route = app
        .get(&format!("/homepage?path=sharehub%3A%2F%2F{id}%40share"), CRAWLER_UA)
        .await;
    assert_eq!(other_route.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_front_end_route_passes_unusable_addresses_through() {
    let app = TestApp::new();
    let long_id = "a".repeat(33);

    for query in [
        String::new(),
        "?path=".to_string(),
        "?path=https%3A%2F%2Fexample.com".to_string(),
        "?path=sharehub%3A%2F%2Fabc%40local".to_string(),
        format!("?path=sharehub%3A%2F%2F{long_id}%40share"),
    ] {
        let response = app.get(&format!("/home{query}"), CRAWLER_UA).await;
        assert_eq!(response.status, StatusCode::NOT_FOUND, "{query}");
    }
}

#[tokio::test]
async fn test_front_end_route_sub_path_and_repair() {
    let app = TestApp::new();
    let id = app.share_id(2);

    let nested = app
        .get(
            &format!("/home?path=sharehub%3A%2F%2F{id}%3Aletmein%40share%2Fbeach.jpg"),
            CRAWLER_UA,
        )
        .await;
    assert!(nested.body.contains(&og("title", "beach.jpg")));
    assert!(nested.body.contains(&og("description", "2.00 KB · alice")));
    assert!(nested.body.contains(&format!(
        "https://files.example.com/s/{id}?path=beach.jpg"
    )));

    let double_encoded = app
        .get(
            &format!("/home?path=sharehub%253A%252F%252F{}%2540share", app.share_id(1)),
            CRAWLER_UA,
        )
        .await;
    assert_eq!(double_encoded.status, StatusCode::OK);
    assert!(double_encoded.body.contains(&og("title", "report.pdf")));
}

#[tokio::test]
async fn test_explicit_preview_endpoint() {
    let app = TestApp::new();

    let response = app
        .get(&format!("/api/shares/{}/preview", app.share_id(1)), BROWSER_UA)
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert!(response.body.contains(&og("title", "report.pdf")));

    let folder = app
        .get(
            &format!("/api/shares/{}/preview?password=letmein&path=beach.jpg", app.share_id(2)),
            BROWSER_UA,
        )
        .await;
    assert!(folder.body.contains(&og("title", "beach.jpg")));

    let invalid = app.get("/api/shares/zzz/preview", BROWSER_UA).await;
    assert_eq!(invalid.status, StatusCode::OK);
    assert!(invalid.body.contains(&og("description", "Invalid Link")));
}

#[tokio::test]
async fn test_anonymous_access_disabled() {
    let mut config = test_config();
    config.site.anonymous_share_download = false;
    let app = TestApp::with_config(config);
    let id = app.share_id(1);

    let anonymous = app.get(&format!("/s/{id}"), CRAWLER_UA).await;
    assert!(anonymous.body.contains(&og("description", "Login Required")));
    assert!(!anonymous.body.contains("report.pdf"));

    let member = app.get_as(&format!("/s/{id}"), CRAWLER_UA, Some(2)).await;
    assert!(member.body.contains(&og("title", "report.pdf")));
}

#[tokio::test]
async fn test_custom_templates() {
    let mut config = test_config();
    config.preview.templates.file.title = "{file_name} on {site_name}".to_string();
    config.preview.templates.file.description = "{file_ext} · {owner_name}".to_string();
    let app = TestApp::with_config(config);

    let response = app.get(&format!("/s/{}", app.share_id(1)), CRAWLER_UA).await;
    assert!(response.body.contains(&og("title", "report.pdf on ShareHub")));
    assert!(response.body.contains(&og("description", "pdf · alice")));
}

#[tokio::test]
async fn test_custom_crawler_list() {
    let mut config = test_config();
    config.preview.crawler_agents = vec!["MyUnfurler".to_string()];
    let app = TestApp::with_config(config);
    let id = app.share_id(1);

    let custom = app.get(&format!("/s/{id}"), "myunfurler/1.0").await;
    assert_eq!(custom.status, StatusCode::OK);

    let discord = app.get(&format!("/s/{id}"), CRAWLER_UA).await;
    assert_eq!(discord.status, StatusCode::FOUND);
}
