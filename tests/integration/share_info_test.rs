//! Integration tests for the share info endpoint and per-user listings.

mod helpers;

use std::time::Duration;

use axum::http::StatusCode;

use helpers::{BROWSER_UA, TestApp};

#[tokio::test]
async fn test_info_of_public_file_share() {
    let app = TestApp::new();
    let id = app.share_id(1);

    let response = app.get(&format!("/api/shares/{id}/info"), BROWSER_UA).await;

    assert_eq!(response.status, StatusCode::OK);
    let data = &response.json()["data"];
    assert_eq!(data["id"], id.as_str());
    assert_eq!(data["name"], "report.pdf");
    assert_eq!(data["kind"], "file");
    assert_eq!(data["owner"], "alice");
    assert_eq!(data["locked"], false);
    assert_eq!(data["unlocked"], true);
    assert_eq!(data["expired"], false);
    assert_eq!(data["url"], format!("https://files.example.com/s/{id}"));
    assert_eq!(data["source"], format!("sharehub://{id}@share"));
    assert!(!response.body.contains("alice@example.com"));
    assert!(!response.body.contains("password"));
}

#[tokio::test]
async fn test_info_of_locked_share() {
    let app = TestApp::new();
    let id = app.share_id(2);

    let locked = app.get(&format!("/api/shares/{id}/info"), BROWSER_UA).await;
    let data = &locked.json()["data"];
    assert_eq!(data["locked"], true);
    assert_eq!(data["unlocked"], false);
    assert!(data.get("source").is_none());
    assert!(!locked.body.contains("letmein"));

    let unlocked = app
        .get(&format!("/api/shares/{id}/info?password=letmein"), BROWSER_UA)
        .await;
    assert_eq!(unlocked.json()["data"]["unlocked"], true);

    let owner = app
        .get_as(&format!("/api/shares/{id}/info"), BROWSER_UA, Some(1))
        .await;
    assert_eq!(owner.json()["data"]["unlocked"], true);
}

#[tokio::test]
async fn test_info_errors() {
    let app = TestApp::new();

    let expired = app
        .get(&format!("/api/shares/{}/info", app.share_id(3)), BROWSER_UA)
        .await;
    assert_eq!(expired.status, StatusCode::GONE);
    assert_eq!(expired.json()["error"], "SHARE_EXPIRED");

    let missing = app
        .get(&format!("/api/shares/{}/info", app.share_id(99)), BROWSER_UA)
        .await;
    assert_eq!(missing.status, StatusCode::NOT_FOUND);

    let garbage = app.get("/api/shares/not-an-id/info", BROWSER_UA).await;
    assert_eq!(garbage.status, StatusCode::NOT_FOUND);

    let bad_flag = app
        .get(
            &format!("/api/shares/{}/info?count_views=maybe", app.share_id(1)),
            BROWSER_UA,
        )
        .await;
    assert_eq!(bad_flag.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_count_views() {
    let app = TestApp::new();
    let uri = format!("/api/shares/{}/info", app.share_id(1));

    let first = app.get(&format!("{uri}?count_views=true"), BROWSER_UA).await;
    assert_eq!(first.json()["data"]["views"], 0);
    tokio::time::sleep(Duration::from_millis(50)).await;

    let second = app.get(&uri, BROWSER_UA).await;
    assert_eq!(second.json()["data"]["views"], 1);
    tokio::time::sleep(Duration::from_millis(50)).await;

    let third = app.get(&uri, BROWSER_UA).await;
    assert_eq!(third.json()["data"]["views"], 1);
}

#[tokio::test]
async fn test_user_share_listing() {
    let app = TestApp::new();
    let uri = format!("/api/users/{}/shares", app.user_id(1));

    let visitor = app.get(&uri, BROWSER_UA).await;
    assert_eq!(visitor.status, StatusCode::OK);
    let shares = visitor.json()["data"].as_array().cloned().unwrap_or_default();
    assert_eq!(shares.len(), 1);
    assert_eq!(shares[0]["name"], "report.pdf");

    let owner = app.get_as(&uri, BROWSER_UA, Some(1)).await;
    let shares = owner.json()["data"].as_array().cloned().unwrap_or_default();
    assert_eq!(shares.len(), 2);
    assert!(shares.iter().all(|s| s["unlocked"] == true));
    assert!(!owner.body.contains("letmein"));
}

#[tokio::test]
async fn test_listing_of_unknown_user() {
    let app = TestApp::new();

    let response = app
        .get(&format!("/api/users/{}/shares", app.share_id(1)), BROWSER_UA)
        .await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(response.json()["error"], "NOT_FOUND");
}
