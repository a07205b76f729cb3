use serde_json::json;

use crate::common::{ADMIN_KEY, TestApp, routes};

#[tokio::test]
async fn login_with_correct_key_sets_a_working_session_cookie() {
    let app = TestApp::spawn().await;

    let res = app
        .post_without_token(routes::LOGIN, &json!({ "key": ADMIN_KEY }))
        .await;
    assert_eq!(res.status, 200);
    assert_eq!(res.body["success"], true);

    // The cookie jar now authenticates admin requests without a bearer token.
    let listing = app.get_public(routes::ADMIN_AWARDS).await;
    assert_eq!(listing.status, 200);
    assert!(listing.body["data"].is_array());
}

#[tokio::test]
async fn login_with_wrong_key_is_rejected() {
    let app = TestApp::spawn().await;

    let res = app
        .post_without_token(routes::LOGIN, &json!({ "key": "not-the-key" }))
        .await;
    assert_eq!(res.status, 401);
    assert_eq!(res.body["code"], "TOKEN_INVALID");
}

#[tokio::test]
async fn admin_endpoints_require_credentials() {
    let app = TestApp::spawn().await;

    let res = app
        .post_without_token(routes::MIGRATE, &json!({}))
        .await;
    assert_eq!(res.status, 401);
    assert_eq!(res.body["code"], "TOKEN_MISSING");
}

#[tokio::test]
async fn bearer_token_with_wrong_key_is_rejected() {
    let app = TestApp::spawn().await;

    let res = app
        .client
        .post(format!("{}{}", app.base_url, routes::MIGRATE))
        .bearer_auth("not-the-key")
        .json(&json!({}))
        .send()
        .await
        .expect("Request failed");
    assert_eq!(res.status().as_u16(), 401);
}

#[tokio::test]
async fn session_cookie_is_hardened_but_not_secure_over_http() {
    let app = TestApp::spawn().await;

    let res = app
        .client
        .post(format!("{}{}", app.base_url, routes::LOGIN))
        .json(&json!({ "key": ADMIN_KEY }))
        .send()
        .await
        .expect("Request failed");
    assert_eq!(res.status().as_u16(), 200);

    let set_cookie = res
        .headers()
        .get(reqwest::header::SET_COOKIE)
        .expect("login did not set a cookie")
        .to_str()
        .unwrap();
    assert!(set_cookie.starts_with("admin_auth="));
    assert!(set_cookie.contains("HttpOnly"));
    assert!(set_cookie.contains("SameSite=Strict"));
    // The test server's public base URL is http, so the Secure attribute
    // must be absent or the browser would drop the cookie.
    assert!(!set_cookie.contains("Secure"));
}

#[tokio::test]
async fn logout_clears_the_session() {
    let app = TestApp::spawn().await;

    app.post_without_token(routes::LOGIN, &json!({ "key": ADMIN_KEY }))
        .await;
    let before = app.get_public(routes::ADMIN_AWARDS).await;
    assert_eq!(before.status, 200);

    let res = app.post_without_token(routes::LOGOUT, &json!({})).await;
    assert_eq!(res.status, 200);

    let after = app.get_public(routes::ADMIN_AWARDS).await;
    assert_eq!(after.status, 401);
}
