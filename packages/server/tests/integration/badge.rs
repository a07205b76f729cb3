use serde_json::json;

use crate::common::{ADMIN_KEY, TestApp, routes};

#[tokio::test]
async fn preview_brief_returns_the_generated_brief_with_metadata() {
    let app = TestApp::spawn().await;

    let res = app
        .post(
            routes::PREVIEW_BRIEF,
            &json!({
                "name": "Code Warrior",
                "description": "shipped a compiler over a weekend",
                "style": "shield-crest-modern",
                "style_template": "gaming-achievement",
                "reference_style": "retro pixel art",
                "quality": "hd",
            }),
        )
        .await;

    assert_eq!(res.status, 200);
    assert_eq!(res.body["short_title"], "Code Warrior");
    assert_eq!(res.body["icon_concept"], "crossed swords");
    assert_eq!(res.body["colors"]["primary"], "#1E3A8A");
    assert_eq!(res.body["metadata"]["style_template"], "gaming-achievement");
    assert_eq!(res.body["metadata"]["quality"], "hd");
}

#[tokio::test]
async fn preview_brief_rejects_blank_and_overlong_input() {
    let app = TestApp::spawn().await;

    let blank = app
        .post(
            routes::PREVIEW_BRIEF,
            &json!({ "name": "  ", "description": "d", "style": "ribbon-plaque" }),
        )
        .await;
    assert_eq!(blank.status, 400);
    assert_eq!(blank.body["code"], "VALIDATION_ERROR");

    let overlong = app
        .post(
            routes::PREVIEW_BRIEF,
            &json!({
                "name": "Code Warrior",
                "description": "d".repeat(501),
                "style": "ribbon-plaque",
            }),
        )
        .await;
    assert_eq!(overlong.status, 400);
}

#[tokio::test]
async fn preview_brief_rejects_unknown_style() {
    let app = TestApp::spawn().await;

    let res = app
        .post(
            routes::PREVIEW_BRIEF,
            &json!({ "name": "n", "description": "d", "style": "holographic-3d" }),
        )
        .await;
    assert_eq!(res.status, 400);
    assert_eq!(res.body["code"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn malformed_json_body_is_a_structured_validation_error() {
    let app = TestApp::spawn().await;

    let res = app
        .client
        .post(format!("{}{}", app.base_url, routes::PREVIEW_BRIEF))
        .bearer_auth(ADMIN_KEY)
        .header(reqwest::header::CONTENT_TYPE, "application/json")
        .body("{not json")
        .send()
        .await
        .expect("Request failed");
    assert_eq!(res.status().as_u16(), 400);

    let body: serde_json::Value = res.json().await.expect("error body is not JSON");
    assert_eq!(body["code"], "VALIDATION_ERROR");
    assert!(
        body["message"]
            .as_str()
            .unwrap()
            .contains("not valid JSON")
    );
}

#[tokio::test]
async fn non_json_content_type_is_a_structured_validation_error() {
    let app = TestApp::spawn().await;

    let res = app
        .client
        .post(format!("{}{}", app.base_url, routes::PREVIEW_BRIEF))
        .bearer_auth(ADMIN_KEY)
        .header(reqwest::header::CONTENT_TYPE, "text/plain")
        .body("name=Code Warrior")
        .send()
        .await
        .expect("Request failed");
    assert_eq!(res.status().as_u16(), 400);

    let body: serde_json::Value = res.json().await.expect("error body is not JSON");
    assert_eq!(body["code"], "VALIDATION_ERROR");
    assert!(
        body["message"]
            .as_str()
            .unwrap()
            .contains("application/json")
    );
}

#[tokio::test]
async fn suggestion_catalog_is_filterable_by_category() {
    let app = TestApp::spawn().await;

    let all = app.get_admin("/api/admin/suggestions").await;
    assert_eq!(all.status, 200);
    assert_eq!(all.body["data"].as_array().unwrap().len(), 25);
    assert_eq!(all.body["categories"].as_array().unwrap().len(), 6);

    let filtered = app
        .get_admin("/api/admin/suggestions?category=Gamification")
        .await;
    assert_eq!(filtered.status, 200);
    let data = filtered.body["data"].as_array().unwrap();
    assert_eq!(data.len(), 4);
    assert_eq!(data[0]["name"], "Level Up Legend");
    assert_eq!(data[0]["suggested_style"], "round-medal-minimal");
    assert_eq!(data[0]["suggested_template"], "gaming-achievement");

    let unauthenticated = app.get_public("/api/admin/suggestions").await;
    assert_eq!(unauthenticated.status, 401);
}

#[tokio::test]
async fn generate_image_creates_a_badge_with_stored_assets() {
    let app = TestApp::spawn().await;

    let badge = app.create_badge("Code Warrior").await;

    let slug = badge["slug"].as_str().expect("slug missing");
    assert!(slug.starts_with("code-warrior-"));
    assert_eq!(badge["style_key"], "round-medal-minimal");
    assert_eq!(badge["quality_setting"], "standard");
    assert_eq!(badge["model_used"], "stub-image");
    assert_eq!(
        badge["image_blob_url"],
        format!("/badges/{slug}/full.png")
    );
    assert_eq!(
        badge["thumb_blob_url"],
        format!("/badges/{slug}/thumb.webp")
    );

    // Both assets are served with correct content types.
    let (status, content_type, bytes) = app.get_raw(&format!("/badges/{slug}/full.png")).await;
    assert_eq!(status, 200);
    assert_eq!(content_type, "image/png");
    let decoded = image::load_from_memory(&bytes).expect("stored PNG is not decodable");
    assert_eq!(decoded.width(), 1024);
    assert_eq!(decoded.height(), 1024);

    let (status, content_type, bytes) = app.get_raw(&format!("/badges/{slug}/thumb.webp")).await;
    assert_eq!(status, 200);
    assert_eq!(content_type, "image/webp");
    let decoded = image::load_from_memory(&bytes).expect("stored WebP is not decodable");
    assert_eq!(decoded.width(), 512);
}

#[tokio::test]
async fn missing_badge_asset_is_a_structured_404() {
    let app = TestApp::spawn().await;

    let (status, _, _) = app.get_raw("/badges/no-such-slug/full.png").await;
    assert_eq!(status, 404);
}

#[tokio::test]
async fn generate_image_rejects_an_invalid_brief() {
    let app = TestApp::spawn().await;

    let res = app
        .post(
            routes::GENERATE_IMAGE,
            &json!({
                "name": "Code Warrior",
                "style": "round-medal-minimal",
                "brief": {
                    "short_title": "This title is much too long to fit",
                    "icon_concept": "swords",
                    "colors": { "primary": "#1", "accent": "#2", "bg": "#3" },
                    "image_prompt": "p",
                },
            }),
        )
        .await;
    assert_eq!(res.status, 400);
    assert_eq!(res.body["code"], "VALIDATION_ERROR");
}
