use crate::helpers::{TestContext, PASSWORD};
use member_service::domain::LoginResponse;
use serde_json::json;
use test_context::test_context;

#[test_context(TestContext)]
#[tokio::test]
async fn should_rotate_refresh_token(ctx: &mut TestContext) {
    let app = &ctx.test_app;
    let (_, tokens) = app.signed_in_member().await;

    let response = app
        .post(
            "/api/member/refresh",
            &json!({ "refreshToken": tokens.refresh_token }),
            None,
        )
        .await;
    assert_eq!(response.status().as_u16(), 200);
    let rotated: LoginResponse = response.json().await.unwrap();
    assert_ne!(rotated.refresh_token, tokens.refresh_token);

    let replay = app
        .post(
            "/api/member/refresh",
            &json!({ "refreshToken": tokens.refresh_token }),
            None,
        )
        .await;
    assert_eq!(replay.status().as_u16(), 401);
}

#[test_context(TestContext)]
#[tokio::test]
async fn should_reject_refresh_token_superseded_by_a_new_login(ctx: &mut TestContext) {
    let app = &ctx.test_app;
    let (user_id, first) = app.signed_in_member().await;

    let second = app.login(&user_id, PASSWORD).await;
    assert_eq!(second.status().as_u16(), 200);

    let response = app
        .post(
            "/api/member/refresh",
            &json!({ "refreshToken": first.refresh_token }),
            None,
        )
        .await;
    assert_eq!(response.status().as_u16(), 401);
    assert_eq!(response.text().await.unwrap(), "Invalid or expired token.");
}

#[test_context(TestContext)]
#[tokio::test]
async fn should_reject_access_token_as_refresh_token(ctx: &mut TestContext) {
    let app = &ctx.test_app;
    let (_, tokens) = app.signed_in_member().await;

    let response = app
        .post(
            "/api/member/refresh",
            &json!({ "refreshToken": tokens.access_token }),
            None,
        )
        .await;
    assert_eq!(response.status().as_u16(), 401);
}
