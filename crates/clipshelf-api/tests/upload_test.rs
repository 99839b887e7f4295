mod helpers;

use axum_test::multipart::{MultipartForm, Part};
use helpers::{setup_test_app, setup_test_app_with};

fn video_form(name: Option<&str>, filename: &str, data: &[u8]) -> MultipartForm {
    let mut form = MultipartForm::new().add_part(
        "file",
        Part::bytes(data.to_vec())
            .file_name(filename)
            .mime_type("video/mp4"),
    );
    if let Some(name) = name {
        form = form.add_text("name", name);
    }
    form
}

#[tokio::test]
async fn test_upload_with_custom_name() {
    let app = setup_test_app().await;
    let data = b"fake mp4 payload".to_vec();

    let response = app
        .client()
        .post("/api/upload")
        .multipart(video_form(Some("myclip"), "original.mp4", &data))
        .await;
    assert_eq!(response.status_code(), 200);

    let body: serde_json::Value = response.json();
    assert_eq!(body["success"], true);
    assert_eq!(body["videoId"], "myclip");
    assert_eq!(body["filename"], "myclip.mp4");
    assert_eq!(body["url"], "/video/myclip");
    // Thumbnails are disabled in the test config, so uploads degrade gracefully.
    assert!(body["thumbnailUrl"].is_null());

    let stored = std::fs::read(app.video_dir.join("myclip.mp4")).unwrap();
    assert_eq!(stored, data);
}

#[tokio::test]
async fn test_upload_without_name_keeps_original_filename() {
    let app = setup_test_app().await;

    let response = app
        .client()
        .post("/api/upload")
        .multipart(video_form(None, "holiday.mov", b"mov data"))
        .await;
    assert_eq!(response.status_code(), 200);

    let body: serde_json::Value = response.json();
    assert_eq!(body["videoId"], "holiday");
    assert_eq!(body["filename"], "holiday.mov");
}

#[tokio::test]
async fn test_upload_collision_appends_suffix() {
    let app = setup_test_app().await;

    for expected in ["clip.mp4", "clip_1.mp4", "clip_2.mp4"] {
        let response = app
            .client()
            .post("/api/upload")
            .multipart(video_form(Some("clip"), "source.mp4", b"data"))
            .await;
        assert_eq!(response.status_code(), 200);

        let body: serde_json::Value = response.json();
        assert_eq!(body["filename"], expected);
        assert!(app.video_exists(expected));
    }
}

#[tokio::test]
async fn test_upload_without_file_is_400() {
    let app = setup_test_app().await;

    let response = app
        .client()
        .post("/api/upload")
        .multipart(MultipartForm::new().add_text("name", "clip"))
        .await;
    assert_eq!(response.status_code(), 400);

    let body: serde_json::Value = response.json();
    assert_eq!(body["code"], "INVALID_INPUT");
}

#[tokio::test]
async fn test_upload_unrecognized_extension_is_400() {
    let app = setup_test_app().await;

    let response = app
        .client()
        .post("/api/upload")
        .multipart(video_form(Some("clip"), "script.exe", b"not a video"))
        .await;
    assert_eq!(response.status_code(), 400);
    assert!(!app.video_exists("clip.exe"));
}

#[tokio::test]
async fn test_upload_empty_file_is_400() {
    let app = setup_test_app().await;

    let response = app
        .client()
        .post("/api/upload")
        .multipart(video_form(Some("clip"), "empty.mp4", b""))
        .await;
    assert_eq!(response.status_code(), 400);
    assert!(!app.video_exists("clip.mp4"));
}

#[tokio::test]
async fn test_upload_over_size_limit_is_rejected() {
    let app = setup_test_app_with(|mut config| {
        config.max_video_size_bytes = 1024;
        config
    })
    .await;

    let big = vec![0u8; 4096];
    let response = app
        .client()
        .post("/api/upload")
        .multipart(video_form(Some("big"), "big.mp4", &big))
        .await;
    assert_eq!(response.status_code(), 413);
    assert!(!app.video_exists("big.mp4"));
}

#[tokio::test]
async fn test_uploaded_video_is_streamable() {
    let app = setup_test_app().await;
    let data: Vec<u8> = (0..500).map(|i| (i % 249) as u8).collect();

    let response = app
        .client()
        .post("/api/upload")
        .multipart(video_form(Some("roundtrip"), "src.mp4", &data))
        .await;
    assert_eq!(response.status_code(), 200);

    let response = app
        .client()
        .get("/video/roundtrip")
        .add_header("Range", "bytes=100-199")
        .await;
    assert_eq!(response.status_code(), 206);
    assert_eq!(response.as_bytes().as_ref(), &data[100..200]);
}

#[tokio::test]
async fn test_thumbnail_upload_attaches_to_video() {
    let app = setup_test_app().await;
    app.write_video("clip.mp4", b"video");

    let form = MultipartForm::new()
        .add_part(
            "file",
            Part::bytes(b"jpeg image".to_vec())
                .file_name("cover.jpg")
                .mime_type("image/jpeg"),
        )
        .add_text("videoId", "clip");

    let response = app.client().post("/api/upload-thumbnail").multipart(form).await;
    assert_eq!(response.status_code(), 200);

    let body: serde_json::Value = response.json();
    assert_eq!(body["success"], true);
    assert_eq!(body["thumbnailUrl"], "/thumbnail/clip");
    assert!(app.thumbnail_exists("clip.jpg"));

    let response = app.client().get("/thumbnail/clip").await;
    assert_eq!(response.status_code(), 200);
    assert_eq!(response.as_bytes().as_ref(), b"jpeg image");
}

#[tokio::test]
async fn test_thumbnail_upload_png_is_stored_as_jpg() {
    let app = setup_test_app().await;
    app.write_video("clip.mp4", b"video");

    let form = MultipartForm::new()
        .add_part(
            "file",
            Part::bytes(b"png image".to_vec())
                .file_name("cover.png")
                .mime_type("image/png"),
        )
        .add_text("videoId", "clip");

    let response = app.client().post("/api/upload-thumbnail").multipart(form).await;
    assert_eq!(response.status_code(), 200);
    assert!(app.thumbnail_exists("clip.jpg"));
}

#[tokio::test]
async fn test_thumbnail_upload_wrong_type_is_400() {
    let app = setup_test_app().await;
    app.write_video("clip.mp4", b"video");

    let form = MultipartForm::new()
        .add_part(
            "file",
            Part::bytes(b"gif image".to_vec())
                .file_name("cover.gif")
                .mime_type("image/gif"),
        )
        .add_text("videoId", "clip");

    let response = app.client().post("/api/upload-thumbnail").multipart(form).await;
    assert_eq!(response.status_code(), 400);
    assert!(!app.thumbnail_exists("clip.jpg"));
}

#[tokio::test]
async fn test_thumbnail_upload_missing_video_id_is_400() {
    let app = setup_test_app().await;

    let form = MultipartForm::new().add_part(
        "file",
        Part::bytes(b"jpeg image".to_vec())
            .file_name("cover.jpg")
            .mime_type("image/jpeg"),
    );

    let response = app.client().post("/api/upload-thumbnail").multipart(form).await;
    assert_eq!(response.status_code(), 400);
}

#[tokio::test]
async fn test_thumbnail_upload_unknown_video_is_404() {
    let app = setup_test_app().await;

    let form = MultipartForm::new()
        .add_part(
            "file",
            Part::bytes(b"jpeg image".to_vec())
                .file_name("cover.jpg")
                .mime_type("image/jpeg"),
        )
        .add_text("videoId", "ghost");

    let response = app.client().post("/api/upload-thumbnail").multipart(form).await;
    assert_eq!(response.status_code(), 404);
}
