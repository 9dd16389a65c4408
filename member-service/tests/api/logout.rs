use crate::helpers::TestContext;
use serde_json::json;
use test_context::test_context;

#[test_context(TestContext)]
#[tokio::test]
async fn should_return_401_without_bearer_token(ctx: &mut TestContext) {
    let app = &ctx.test_app;

    let response = app.post("/api/member/logout", &json!({}), None).await;

    assert_eq!(response.status().as_u16(), 401);
    assert_eq!(response.headers().get("www-authenticate").unwrap(), "Bearer");
}

#[test_context(TestContext)]
#[tokio::test]
async fn should_return_401_with_garbage_token(ctx: &mut TestContext) {
    let app = &ctx.test_app;

    let response = app
        .post("/api/member/logout", &json!({}), Some("not-a-jwt"))
        .await;

    assert_eq!(response.status().as_u16(), 401);
}

#[test_context(TestContext)]
#[tokio::test]
async fn should_end_refresh_session(ctx: &mut TestContext) {
    let app = &ctx.test_app;
    let (_, tokens) = app.signed_in_member().await;

    let response = app
        .post("/api/member/logout", &json!({}), Some(&tokens.access_token))
        .await;
    assert_eq!(response.status().as_u16(), 200);

    let refresh = app
        .post(
            "/api/member/refresh",
            &json!({ "refreshToken": tokens.refresh_token }),
            None,
        )
        .await;
    assert_eq!(refresh.status().as_u16(), 401);
}
