use serde_json::json;

use crate::common::{TestApp, routes};

fn publish_body(badge_id: &serde_json::Value) -> serde_json::Value {
    json!({
        "badge_id": badge_id,
        "person": {
            "name": "Ada Lovelace",
            "handle": "@ada",
            "title": "Staff Engineer",
        },
        "project": {
            "name": "Compiler X",
            "short_desc": "a compiler built over a weekend",
        },
        "citation": "For shipping a compiler nobody believed possible",
    })
}

#[tokio::test]
async fn publish_mints_an_eight_character_permalink_and_share_url() {
    let app = TestApp::spawn().await;
    let badge = app.create_badge("Code Warrior").await;

    let res = app
        .post(routes::PUBLISH_AWARD, &publish_body(&badge["id"]))
        .await;
    assert_eq!(res.status, 201, "publish failed: {}", res.body);

    let permalink = res.body["permalink"].as_str().expect("permalink missing");
    assert_eq!(permalink.len(), 8);
    assert!(
        permalink
            .bytes()
            .all(|b| b.is_ascii_lowercase() || b.is_ascii_digit())
    );
    assert_eq!(
        res.body["share_url"].as_str().unwrap(),
        format!("{}/a/{permalink}", app.base_url)
    );
    assert_eq!(res.body["award"]["public_permalink"], permalink);
    assert_eq!(res.body["award"]["badge_id"], badge["id"]);
}

#[tokio::test]
async fn publish_against_a_missing_badge_is_404() {
    let app = TestApp::spawn().await;

    let res = app
        .post(
            routes::PUBLISH_AWARD,
            &publish_body(&json!("00000000-0000-0000-0000-000000000000")),
        )
        .await;
    assert_eq!(res.status, 404);
    assert_eq!(res.body["code"], "NOT_FOUND");
}

#[tokio::test]
async fn publish_rejects_a_blank_citation() {
    let app = TestApp::spawn().await;
    let badge = app.create_badge("Code Warrior").await;

    let mut body = publish_body(&badge["id"]);
    body["citation"] = json!("   ");
    let res = app.post(routes::PUBLISH_AWARD, &body).await;
    assert_eq!(res.status, 400);
    assert_eq!(res.body["code"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn published_award_is_readable_by_permalink() {
    let app = TestApp::spawn().await;
    let badge = app.create_badge("Code Warrior").await;

    let published = app
        .post(routes::PUBLISH_AWARD, &publish_body(&badge["id"]))
        .await;
    let permalink = published.body["permalink"].as_str().unwrap();

    let res = app.get_public(&format!("/api/awards/{permalink}")).await;
    assert_eq!(res.status, 200);
    assert_eq!(res.body["badge_name"], "Code Warrior");
    assert_eq!(res.body["person_name"], "Ada Lovelace");
    assert_eq!(res.body["person_handle"], "@ada");
    assert_eq!(res.body["project_name"], "Compiler X");
    assert_eq!(
        res.body["citation"],
        "For shipping a compiler nobody believed possible"
    );
    assert_eq!(res.body["badge_slug"], badge["slug"]);
}

#[tokio::test]
async fn unknown_permalink_is_404() {
    let app = TestApp::spawn().await;

    let res = app.get_public("/api/awards/zzzzzzzz").await;
    assert_eq!(res.status, 404);
    assert_eq!(res.body["code"], "NOT_FOUND");
}

#[tokio::test]
async fn award_page_renders_the_badge_person_and_project() {
    let app = TestApp::spawn().await;
    let badge = app.create_badge("Code Warrior").await;

    let published = app
        .post(routes::PUBLISH_AWARD, &publish_body(&badge["id"]))
        .await;
    let permalink = published.body["permalink"].as_str().unwrap();

    let (status, content_type, bytes) = app.get_raw(&format!("/a/{permalink}")).await;
    assert_eq!(status, 200);
    assert!(content_type.starts_with("text/html"));

    let html = String::from_utf8(bytes).expect("page is not UTF-8");
    assert!(html.contains("Code Warrior"));
    assert!(html.contains("Ada Lovelace"));
    assert!(html.contains("Compiler X"));
    assert!(html.contains(&format!("/api/og?permalink={permalink}")));
}

#[tokio::test]
async fn hall_of_fame_lists_published_awards() {
    let app = TestApp::spawn().await;
    let badge = app.create_badge("Code Warrior").await;

    let published = app
        .post(routes::PUBLISH_AWARD, &publish_body(&badge["id"]))
        .await;
    let permalink = published.body["permalink"].as_str().unwrap();

    let (status, _, bytes) = app.get_raw("/hof").await;
    assert_eq!(status, 200);
    let html = String::from_utf8(bytes).expect("page is not UTF-8");
    assert!(html.contains(&format!("/a/{permalink}")));
    assert!(html.contains("Ada Lovelace"));
}

#[tokio::test]
async fn og_image_is_a_fixed_size_png() {
    let app = TestApp::spawn().await;
    let badge = app.create_badge("Code Warrior").await;

    let published = app
        .post(routes::PUBLISH_AWARD, &publish_body(&badge["id"]))
        .await;
    let permalink = published.body["permalink"].as_str().unwrap();

    let (status, content_type, bytes) =
        app.get_raw(&format!("/api/og?permalink={permalink}")).await;
    assert_eq!(status, 200);
    assert_eq!(content_type, "image/png");

    let decoded = image::load_from_memory(&bytes).expect("preview is not decodable");
    assert_eq!(decoded.width(), 1200);
    assert_eq!(decoded.height(), 630);
}

#[tokio::test]
async fn admin_listing_shows_awards_newest_first() {
    let app = TestApp::spawn().await;
    let badge = app.create_badge("Code Warrior").await;

    for citation in ["first award", "second award"] {
        let mut body = publish_body(&badge["id"]);
        body["citation"] = json!(citation);
        let res = app.post(routes::PUBLISH_AWARD, &body).await;
        assert_eq!(res.status, 201);
    }

    let res = app.get_admin(routes::ADMIN_AWARDS).await;
    assert_eq!(res.status, 200);
    let data = res.body["data"].as_array().expect("data missing");
    assert_eq!(data.len(), 2);
    assert_eq!(data[0]["badge_name"], "Code Warrior");
    assert_eq!(data[0]["person_name"], "Ada Lovelace");
}

#[tokio::test]
async fn deleting_an_award_removes_its_page_but_keeps_the_badge() {
    let app = TestApp::spawn().await;
    let badge = app.create_badge("Code Warrior").await;

    let published = app
        .post(routes::PUBLISH_AWARD, &publish_body(&badge["id"]))
        .await;
    let award_id = published.body["award"]["id"].as_str().unwrap().to_string();
    let permalink = published.body["permalink"].as_str().unwrap().to_string();

    let status = app.delete(&format!("{}/{award_id}", routes::ADMIN_AWARDS)).await;
    assert_eq!(status, 204);

    let gone = app.get_public(&format!("/api/awards/{permalink}")).await;
    assert_eq!(gone.status, 404);

    // The badge assets are untouched by the delete.
    let slug = badge["slug"].as_str().unwrap();
    let (asset_status, _, _) = app.get_raw(&format!("/badges/{slug}/full.png")).await;
    assert_eq!(asset_status, 200);
}

#[tokio::test]
async fn deleting_an_unknown_award_is_404() {
    let app = TestApp::spawn().await;

    let status = app
        .delete(&format!(
            "{}/00000000-0000-0000-0000-000000000000",
            routes::ADMIN_AWARDS
        ))
        .await;
    assert_eq!(status, 404);
}
