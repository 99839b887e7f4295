mod helpers;

use helpers::setup_test_app;

#[tokio::test]
async fn test_health() {
    let app = setup_test_app().await;

    let response = app.client().get("/health").await;
    assert_eq!(response.status_code(), 200);
}

#[tokio::test]
async fn test_list_videos_empty() {
    let app = setup_test_app().await;

    let response = app.client().get("/api/videos").await;
    assert_eq!(response.status_code(), 200);

    let data: serde_json::Value = response.json();
    assert_eq!(data, serde_json::json!([]));
}

#[tokio::test]
async fn test_list_videos_reports_assets() {
    let app = setup_test_app().await;
    app.write_video("intro.mp4", b"abcd");
    app.write_video("other.webm", b"xy");
    app.write_thumbnail("intro.jpg", b"jpeg");

    let response = app.client().get("/api/videos").await;
    assert_eq!(response.status_code(), 200);

    let data: serde_json::Value = response.json();
    let videos = data.as_array().expect("array of videos");
    assert_eq!(videos.len(), 2);

    let intro = videos
        .iter()
        .find(|v| v["id"] == "intro")
        .expect("intro listed");
    assert_eq!(intro["filename"], "intro.mp4");
    assert_eq!(intro["displayName"], "intro");
    assert_eq!(intro["size"], 4);
    assert_eq!(intro["hasThumbnail"], true);
    assert_eq!(intro["url"], "/video/intro");
    assert_eq!(intro["thumbnailUrl"], "/thumbnail/intro");
    assert!(intro["modified"].is_string());

    let other = videos
        .iter()
        .find(|v| v["id"] == "other")
        .expect("other listed");
    assert_eq!(other["hasThumbnail"], false);
    assert!(other["thumbnailUrl"].is_null());
}

#[tokio::test]
async fn test_check_name() {
    let app = setup_test_app().await;
    app.write_video("taken.mp4", b"v");

    let response = app.client().get("/api/check-name/taken").await;
    assert_eq!(response.status_code(), 200);
    let data: serde_json::Value = response.json();
    assert_eq!(data["exists"], true);

    let response = app.client().get("/api/check-name/free").await;
    assert_eq!(response.status_code(), 200);
    let data: serde_json::Value = response.json();
    assert_eq!(data["exists"], false);
}

#[tokio::test]
async fn test_rename_video_and_thumbnail() {
    let app = setup_test_app().await;
    app.write_video("old.mp4", b"video");
    app.write_thumbnail("old.jpg", b"jpeg");

    let response = app
        .client()
        .put("/api/rename/old")
        .json(&serde_json::json!({ "newName": "fresh" }))
        .await;
    assert_eq!(response.status_code(), 200);

    let data: serde_json::Value = response.json();
    assert_eq!(data["success"], true);
    assert_eq!(data["newId"], "fresh");
    assert_eq!(data["newFilename"], "fresh.mp4");

    assert!(app.video_exists("fresh.mp4"));
    assert!(!app.video_exists("old.mp4"));
    assert!(app.thumbnail_exists("fresh.jpg"));
    assert!(!app.thumbnail_exists("old.jpg"));
}

#[tokio::test]
async fn test_rename_blank_name_is_rejected() {
    let app = setup_test_app().await;
    app.write_video("clip.mp4", b"v");

    let response = app
        .client()
        .put("/api/rename/clip")
        .json(&serde_json::json!({ "newName": "   " }))
        .await;
    assert_eq!(response.status_code(), 400);

    let data: serde_json::Value = response.json();
    assert_eq!(data["code"], "INVALID_INPUT");
    assert!(app.video_exists("clip.mp4"));
}

#[tokio::test]
async fn test_rename_missing_video_is_404() {
    let app = setup_test_app().await;

    let response = app
        .client()
        .put("/api/rename/ghost")
        .json(&serde_json::json!({ "newName": "anything" }))
        .await;
    assert_eq!(response.status_code(), 404);
}

#[tokio::test]
async fn test_rename_conflict_leaves_both_assets_untouched() {
    let app = setup_test_app().await;
    app.write_video("a.mp4", b"a");
    app.write_video("b.webm", b"b");

    let response = app
        .client()
        .put("/api/rename/a")
        .json(&serde_json::json!({ "newName": "b" }))
        .await;
    assert_eq!(response.status_code(), 409);

    let data: serde_json::Value = response.json();
    assert_eq!(data["code"], "CONFLICT");
    assert!(app.video_exists("a.mp4"));
    assert!(app.video_exists("b.webm"));
}

#[tokio::test]
async fn test_delete_video_removes_video_and_thumbnail() {
    let app = setup_test_app().await;
    app.write_video("gone.mp4", b"v");
    app.write_thumbnail("gone.jpg", b"t");

    let response = app.client().delete("/api/video/gone").await;
    assert_eq!(response.status_code(), 200);

    let data: serde_json::Value = response.json();
    assert_eq!(data["success"], true);
    assert!(!app.video_exists("gone.mp4"));
    assert!(!app.thumbnail_exists("gone.jpg"));
}

#[tokio::test]
async fn test_delete_missing_video_leaves_storage_unchanged() {
    let app = setup_test_app().await;
    app.write_video("keep.mp4", b"v");

    let before: Vec<_> = std::fs::read_dir(&app.video_dir)
        .unwrap()
        .map(|e| e.unwrap().file_name())
        .collect();

    let response = app.client().delete("/api/video/ghost").await;
    assert_eq!(response.status_code(), 404);

    let after: Vec<_> = std::fs::read_dir(&app.video_dir)
        .unwrap()
        .map(|e| e.unwrap().file_name())
        .collect();
    assert_eq!(before, after);
}
