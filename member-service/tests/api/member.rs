use crate::helpers::{get_random_user_id, TestContext, PASSWORD};
use serde_json::{json, Value};
use test_context::test_context;

#[test_context(TestContext)]
#[tokio::test]
async fn should_return_201_for_valid_registration(ctx: &mut TestContext) {
    let app = &ctx.test_app;
    let user_id = get_random_user_id();

    let response = app
        .register(&user_id, &format!("{user_id}@example.com"))
        .await;

    assert_eq!(response.status().as_u16(), 201);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["userId"], user_id.as_str());
    assert!(body["memberId"].as_i64().unwrap() > 0);
}

#[test_context(TestContext)]
#[tokio::test]
async fn should_return_400_for_invalid_registration(ctx: &mut TestContext) {
    let app = &ctx.test_app;

    let cases = [
        json!({ "userId": "ab", "password": PASSWORD, "email": "a@example.com", "nickname": "n" }),
        json!({ "userId": "valid_id", "password": "weak", "email": "a@example.com", "nickname": "n" }),
        json!({ "userId": "valid_id", "password": PASSWORD, "email": "not-an-email", "nickname": "n" }),
        json!({ "userId": "valid_id", "password": PASSWORD, "email": "a@example.com", "nickname": " " }),
    ];
    for body in cases {
        let response = app.post("/api/member/register", &body, None).await;
        assert_eq!(response.status().as_u16(), 400, "accepted {body}");
    }
}

#[test_context(TestContext)]
#[tokio::test]
async fn should_return_409_for_duplicate_user_id_or_email(ctx: &mut TestContext) {
    let app = &ctx.test_app;
    let user_id = get_random_user_id();
    let email = format!("{user_id}@example.com");
    app.register(&user_id, &email).await;

    let same_id = app.register(&user_id, "other@example.com").await;
    assert_eq!(same_id.status().as_u16(), 409);

    let same_email = app.register(&get_random_user_id(), &email).await;
    assert_eq!(same_email.status().as_u16(), 409);
}

#[test_context(TestContext)]
#[tokio::test]
async fn should_return_own_profile(ctx: &mut TestContext) {
    let app = &ctx.test_app;
    let (user_id, tokens) = app.signed_in_member().await;

    let response = app.get("/api/member", Some(&tokens.access_token)).await;
    assert_eq!(response.status().as_u16(), 200);

    let body: Value = response.json().await.unwrap();
    assert_eq!(body["userId"], user_id.as_str());
    assert_eq!(body["role"], "USER");
    assert!(body["addresses"].as_array().unwrap().is_empty());
    assert!(body.get("passwordHash").is_none());
}

#[test_context(TestContext)]
#[tokio::test]
async fn should_only_let_members_update_themselves(ctx: &mut TestContext) {
    let app = &ctx.test_app;
    let (_, alice) = app.signed_in_member().await;
    let (_, bob) = app.signed_in_member().await;

    let alice_profile: Value = app
        .get("/api/member", Some(&alice.access_token))
        .await
        .json()
        .await
        .unwrap();
    let alice_id = alice_profile["memberId"].as_i64().unwrap();
    let path = format!("/api/member/{alice_id}");

    let by_bob = app
        .send_json(
            reqwest::Method::PUT,
            &path,
            &json!({ "nickname": "hijacked" }),
            Some(&bob.access_token),
        )
        .await;
    assert_eq!(by_bob.status().as_u16(), 403);

    let by_alice = app
        .send_json(
            reqwest::Method::PUT,
            &path,
            &json!({ "nickname": "wonder" }),
            Some(&alice.access_token),
        )
        .await;
    assert_eq!(by_alice.status().as_u16(), 200);
    let body: Value = by_alice.json().await.unwrap();
    assert_eq!(body["nickname"], "wonder");
}

#[test_context(TestContext)]
#[tokio::test]
async fn should_delete_account_and_end_session(ctx: &mut TestContext) {
    let app = &ctx.test_app;
    let (user_id, tokens) = app.signed_in_member().await;
    let profile: Value = app
        .get("/api/member", Some(&tokens.access_token))
        .await
        .json()
        .await
        .unwrap();
    let member_id = profile["memberId"].as_i64().unwrap();

    let response = app
        .delete(&format!("/api/member/{member_id}"), &tokens.access_token)
        .await;
    assert_eq!(response.status().as_u16(), 204);

    assert_eq!(app.login(&user_id, PASSWORD).await.status().as_u16(), 401);
    let refresh = app
        .post(
            "/api/member/refresh",
            &json!({ "refreshToken": tokens.refresh_token }),
            None,
        )
        .await;
    assert_eq!(refresh.status().as_u16(), 401);

    // the user id stays reserved
    let again = app
        .register(&user_id, &format!("{user_id}@example.com"))
        .await;
    assert_eq!(again.status().as_u16(), 409);
}

#[test_context(TestContext)]
#[tokio::test]
async fn should_page_member_list(ctx: &mut TestContext) {
    let app = &ctx.test_app;
    let (_, tokens) = app.signed_in_member().await;
    app.signed_in_member().await;

    let response = app
        .get("/api/member/list?page=1&size=2", Some(&tokens.access_token))
        .await;
    assert_eq!(response.status().as_u16(), 200);
    let body: Value = response.json().await.unwrap();
    // bootstrap admin plus the two members
    assert_eq!(body["totalElements"], 3);
    assert_eq!(body["totalPages"], 2);
    assert_eq!(body["content"].as_array().unwrap().len(), 2);

    let oversized = app
        .get("/api/member/list?page=1&size=101", Some(&tokens.access_token))
        .await;
    assert_eq!(oversized.status().as_u16(), 400);

    let zero_page = app
        .get("/api/member/list?page=0", Some(&tokens.access_token))
        .await;
    assert_eq!(zero_page.status().as_u16(), 400);
}

#[test_context(TestContext)]
#[tokio::test]
async fn should_find_user_id_by_email_and_nickname(ctx: &mut TestContext) {
    let app = &ctx.test_app;
    let (user_id, _) = app.signed_in_member().await;

    let response = app
        .post(
            "/api/member/find-user-id",
            &json!({ "email": format!("{user_id}@example.com"), "nickname": user_id }),
            None,
        )
        .await;
    assert_eq!(response.status().as_u16(), 200);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["userId"], user_id.as_str());

    let missing = app
        .post(
            "/api/member/find-user-id",
            &json!({ "email": "nobody@example.com", "nickname": "nobody" }),
            None,
        )
        .await;
    assert_eq!(missing.status().as_u16(), 404);
}

#[test_context(TestContext)]
#[tokio::test]
async fn should_check_password(ctx: &mut TestContext) {
    let app = &ctx.test_app;
    let (_, tokens) = app.signed_in_member().await;

    let ok = app
        .post(
            "/api/member/check-password",
            &json!({ "password": PASSWORD }),
            Some(&tokens.access_token),
        )
        .await;
    assert_eq!(ok.status().as_u16(), 200);

    let mismatch = app
        .post(
            "/api/member/check-password",
            &json!({ "password": "Other!pass1" }),
            Some(&tokens.access_token),
        )
        .await;
    assert_eq!(mismatch.status().as_u16(), 400);
}

#[test_context(TestContext)]
#[tokio::test]
async fn should_manage_addresses(ctx: &mut TestContext) {
    let app = &ctx.test_app;
    let (_, tokens) = app.signed_in_member().await;

    let created = app
        .post(
            "/api/member/address",
            &json!({
                "addressName": "home",
                "region3depthName": "Jongno-dong",
                "mainAddressNo": "12",
                "roadName": "Jong-ro",
                "latitude": 37.57,
                "longitude": 126.98,
            }),
            Some(&tokens.access_token),
        )
        .await;
    assert_eq!(created.status().as_u16(), 201);
    let address: Value = created.json().await.unwrap();
    let address_id = address["addressId"].as_i64().unwrap();

    let listed: Value = app
        .get("/api/member/address", Some(&tokens.access_token))
        .await
        .json()
        .await
        .unwrap();
    assert_eq!(listed.as_array().unwrap().len(), 1);
    assert_eq!(listed[0]["region3depthName"], "Jongno-dong");

    let out_of_range = app
        .post(
            "/api/member/address",
            &json!({
                "addressName": "nowhere",
                "region3depthName": "",
                "mainAddressNo": "",
                "roadName": "",
                "latitude": 91.0,
                "longitude": 0.0,
            }),
            Some(&tokens.access_token),
        )
        .await;
    assert_eq!(out_of_range.status().as_u16(), 400);

    let removed = app
        .delete(
            &format!("/api/member/address/{address_id}"),
            &tokens.access_token,
        )
        .await;
    assert_eq!(removed.status().as_u16(), 204);

    let again = app
        .delete(
            &format!("/api/member/address/{address_id}"),
            &tokens.access_token,
        )
        .await;
    assert_eq!(again.status().as_u16(), 404);
}
