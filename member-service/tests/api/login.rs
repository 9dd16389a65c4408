use std::sync::Arc;

use crate::helpers::{
    get_random_user_id, TestApp, TestContext, UnavailableSessionStore, PASSWORD,
};
use member_service::domain::{LoginResponse, Role, TokenKind};
use serde_json::json;
use test_context::test_context;
use tokio::sync::RwLock;

#[tokio::test]
async fn should_return_401_if_user_not_found() {
    let app = TestApp::new().await;

    let response = app.login(&get_random_user_id(), PASSWORD).await;

    assert_eq!(response.status().as_u16(), 401);
}

#[test_context(TestContext)]
#[tokio::test]
async fn should_return_identical_401_for_unknown_user_and_wrong_password(ctx: &mut TestContext) {
    let app = &ctx.test_app;
    let (user_id, _) = app.signed_in_member().await;

    let wrong_password = app.login(&user_id, "Wrong!password1").await;
    let unknown_user = app.login(&get_random_user_id(), PASSWORD).await;

    assert_eq!(wrong_password.status().as_u16(), 401);
    assert_eq!(unknown_user.status().as_u16(), 401);
    assert_eq!(
        wrong_password.text().await.unwrap(),
        unknown_user.text().await.unwrap()
    );
}

#[test_context(TestContext)]
#[tokio::test]
async fn should_return_422_if_malformed_body(ctx: &mut TestContext) {
    let app = &ctx.test_app;

    let response = app
        .post("/api/member/login", &json!({ "password": PASSWORD }), None)
        .await;

    assert_eq!(response.status().as_u16(), 422);
}

#[test_context(TestContext)]
#[tokio::test]
async fn should_return_token_pair_for_valid_credentials(ctx: &mut TestContext) {
    let app = &ctx.test_app;
    let user_id = get_random_user_id();
    app.register(&user_id, &format!("{user_id}@example.com"))
        .await;

    let response = app.login(&user_id, PASSWORD).await;
    assert_eq!(response.status().as_u16(), 200);

    let body: serde_json::Value = response.json().await.unwrap();
    let access = body["AccessToken"].as_str().unwrap();
    let refresh = body["RefreshToken"].as_str().unwrap();
    assert_ne!(access, refresh);

    let access_claims = app
        .state
        .token_service
        .verify(access, TokenKind::Access)
        .unwrap();
    let refresh_claims = app
        .state
        .token_service
        .verify(refresh, TokenKind::Refresh)
        .unwrap();
    assert_eq!(access_claims.identity_id, refresh_claims.identity_id);
    assert_eq!(access_claims.username, user_id);
    assert_eq!(access_claims.role, Role::User);
}

#[test_context(TestContext)]
#[tokio::test]
async fn should_accept_identifier_and_secret_field_names(ctx: &mut TestContext) {
    let app = &ctx.test_app;
    let user_id = get_random_user_id();
    app.register(&user_id, &format!("{user_id}@example.com"))
        .await;

    let response = app
        .post(
            "/api/member/login",
            &json!({ "identifier": user_id, "secret": PASSWORD }),
            None,
        )
        .await;

    assert_eq!(response.status().as_u16(), 200);
    let tokens: LoginResponse = response.json().await.unwrap();
    assert!(!tokens.access_token.is_empty());
}

#[tokio::test]
async fn should_return_500_without_tokens_if_session_store_is_down() {
    let app = TestApp::with_session_store(Arc::new(RwLock::new(UnavailableSessionStore))).await;
    let user_id = get_random_user_id();
    let email = format!("{user_id}@example.com");
    assert_eq!(app.register(&user_id, &email).await.status().as_u16(), 201);

    let response = app.login(&user_id, PASSWORD).await;

    assert_eq!(response.status().as_u16(), 500);
    let body = response.text().await.unwrap();
    assert!(!body.contains("accessToken"));
    assert!(!body.contains("refreshToken"));
}
